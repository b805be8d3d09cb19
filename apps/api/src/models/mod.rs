pub mod cv;
pub mod sample;
