pub mod cli;
pub mod color;
pub mod engine;
pub mod tui;
