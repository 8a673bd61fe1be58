pub mod clock;
pub mod duration;
