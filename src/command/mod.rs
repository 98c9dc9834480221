//! Interactive command surface
//!
//! Parses console lines into commands, renders rankings and history, and
//! drives a session from any reader/writer pair.

pub mod display;
pub mod parser;
pub mod shell;

// Re-export commonly used types
pub use display::{format_history, format_ranking, title_case, Palette};
pub use parser::Command;
pub use shell::Shell;
