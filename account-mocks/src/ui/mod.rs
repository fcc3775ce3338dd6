//! Small UI pieces used only by the mocks app

mod link_card;

pub use link_card::LinkCard;
