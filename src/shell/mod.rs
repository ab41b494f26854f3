//! Shell word splitting, escaping and joining.

mod escape;
pub mod scanner;
pub mod tokenizer;

pub use escape::{escape, join};
pub use tokenizer::{UnmatchedQuote, split, split_with};
