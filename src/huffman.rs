pub mod code;
pub mod coder;
pub mod coding_error;
pub mod frequency;
pub mod tree;

pub use code::CodeTable;
pub use coder::Coder;
pub use coding_error::CodingError;
pub use frequency::FrequencyTable;
pub use tree::HuffmanTree;

/// One byte of the input alphabet.
pub type Symbol = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: usize,
}

impl From<(Symbol, usize)> for SymbolFrequency {
    fn from(value: (Symbol, usize)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}
