//! Mocks app pages

mod mock_index;

pub use mock_index::{MockAccountDeletion, MockIndex};
