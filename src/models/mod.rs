pub mod interval;

pub use interval::{DaySegment, WorkInterval};
