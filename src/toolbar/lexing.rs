//! Token definitions and tokenizer for toolbar strings
//!
//! Tokenization is handled entirely by logos. Whitespace is skipped: it only
//! matters between two tool names, and two consecutive [`Token::Tool`]s are
//! already distinct tools for the parser.

use logos::Logos;

/// All possible tokens in a toolbar string
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,
    #[token("/")]
    Slash,
    #[token("#")]
    Hash,

    // Anything that is not structure or whitespace names a tool
    #[regex(r"[^{}|,/#\s]+", |lex| lex.slice().to_string())]
    Tool(String),
}

/// Tokenize a toolbar string, dropping anything logos could not classify
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}
