//! Terminal presentation for the conversion commands

pub mod convert;
pub mod setup;
pub mod trend;
pub mod ui;
