//! Component mocks with interactive controls

mod account_deletion;
pub mod framework;
pub mod url_state;

pub use account_deletion::AccountDeletionMock;
