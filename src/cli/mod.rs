pub mod commands;

pub use commands::{Cli, convert, run};
