// src/cli/mod.rs

pub mod error;
pub mod help;
pub mod options;
pub mod parser;

pub use error::ParseError;
pub use help::render_help;
pub use parser::{parse, Parsed};
