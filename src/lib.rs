pub mod core;
pub mod perception;
pub mod inspect;
