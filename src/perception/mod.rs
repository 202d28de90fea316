pub mod grid;
pub mod patterns;
