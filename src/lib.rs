//! Lexical token model shared by a lexer (producer) and a parser (consumer).

#![forbid(unsafe_code)]

pub mod provenance;
pub mod result;
pub mod token;
pub mod utils;
