//! The two report layouts.

pub mod single_column;
pub mod two_column;

pub use single_column::SingleColumnTemplate;
pub use two_column::TwoColumnTemplate;
