pub mod datetime;
pub mod formatting;
pub mod logging;
pub mod validation;
pub mod verse_range;
