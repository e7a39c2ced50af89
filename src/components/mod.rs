//! Shared view pieces used by multiple pages.

pub mod nav_bar;
pub mod service_card;
