pub mod config;
pub mod error;
pub mod note;
pub mod state;
