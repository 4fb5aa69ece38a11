/*!
# Rust Language Module

This Rust module provides lexical analysis of the Vault Runner language.

*/

#[macro_use]
mod error;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::distinct_symbols;
pub use lex::lex;
pub use token::Dialect;
pub use token::Token;

/// 1-based source line of a token, when known.
pub type LineNumber = Option<usize>;

/// A program may use at most this many distinct keywords.
pub const MAX_DISTINCT_TOKENS: usize = 20;
