pub mod cli;
pub mod render;

pub use cli::{CliController, CliOptions};
