//! Shellwords - POSIX-shell-like word splitting.
//!
//! Splits command lines into words the way a shell tokenizes arguments
//! (quotes, backslash escapes, whitespace), and escapes strings so they
//! survive that splitting unchanged. No globbing, expansion, pipes or
//! redirection are interpreted.
//!
//! ```
//! let line = shellwords::join(["grep", "two words", ""]);
//! assert_eq!(line, r"grep two\ words ''");
//! assert_eq!(shellwords::split(&line).unwrap(), vec!["grep", "two words", ""]);
//! ```

pub mod command;
pub mod config;
pub mod input;
pub mod logging;
pub mod output;
pub mod shell;

pub use command::execute;
pub use config::{Config, OutputFormat};
pub use input::Request;
pub use output::{Response, format_response};
pub use shell::{UnmatchedQuote, escape, join, split, split_with};
