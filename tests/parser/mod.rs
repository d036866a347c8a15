//! Parser layer tests
//!
//! - Lexing, keyword casing and dialect vocabulary
//! - Tree shape of both grammars
//! - Lossless round-trips and error recovery

pub mod tests_lexer;
