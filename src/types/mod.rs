pub mod condition;
pub mod daily_summary;
pub mod location;
pub mod sample;
