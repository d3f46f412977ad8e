pub mod calendar;
pub mod day;
pub mod month;
pub mod store;
pub mod time_math;
