/// CLI layer: argument parsing and key output.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{write_error, write_file, write_stdout};
