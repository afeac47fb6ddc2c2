use std::fmt::Display;

use super::Symbol;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CodingError {
    EmptyInputError,
    NotBuiltError,
    UnknownSymbolError(Symbol),
    InvalidBitError(char, usize),
    TraversalError(usize),
    IncompleteSequenceError(usize),
}

impl Display for CodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInputError => write!(f, "Input text cannot be empty"),
            Self::NotBuiltError => write!(f, "Huffman tree not built, build it first"),
            Self::UnknownSymbolError(symbol) => {
                write!(
                    f,
                    "Symbol {:#04x} ('{}') not found in Huffman tree",
                    symbol,
                    symbol.escape_ascii()
                )
            }
            Self::InvalidBitError(character, position) => {
                write!(
                    f,
                    "Invalid character '{}' at position {} of encoded text, only '0' and '1' are allowed",
                    character.escape_default(),
                    position
                )
            }
            Self::TraversalError(position) => {
                write!(
                    f,
                    "Invalid encoded text, traversal went beyond tree at position {}",
                    position
                )
            }
            Self::IncompleteSequenceError(dangling_bits) => {
                write!(
                    f,
                    "Invalid encoded text, incomplete sequence ({} trailing bits do not end at a symbol)",
                    dangling_bits
                )
            }
        }
    }
}

impl std::error::Error for CodingError {}
