pub mod ball;
pub mod batch;
pub mod score;
pub mod swing;
