pub mod config;
pub mod error;
pub mod list_screen;
pub mod sync;
pub mod seed;
