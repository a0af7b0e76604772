pub mod calendar;
pub mod config;
pub mod doomsday;
pub mod error;
pub mod picker;
