pub mod config;
pub mod error;
pub mod layout;
pub mod maze;
pub mod render;
pub mod state;
