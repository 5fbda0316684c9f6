pub mod journey;
pub mod line_activity;
