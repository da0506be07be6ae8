pub mod guards;
pub mod log;
pub mod time;
