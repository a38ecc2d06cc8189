//! Front-end error handling
//!
//! Lexical and grammar errors never abort a parse: the tokenizer skips
//! unrecognized characters and the line parser resumes at the next line.
//! Both are collected as [`SyntaxError`] values next to the best-effort output.

mod error;

pub use error::{SyntaxError, SyntaxErrorKind};
