pub mod config;
pub mod fling;
pub mod simulate;
