use super::{Symbol, SymbolFrequency};

const ALPHABET_SIZE: usize = Symbol::MAX as usize + 1;

/// Occurrence count of every byte value of a text.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    symbol_frequencies: [usize; ALPHABET_SIZE],
}

impl FrequencyTable {
    fn new() -> Self {
        Self {
            symbol_frequencies: [usize::default(); ALPHABET_SIZE],
        }
    }

    fn increment_symbol(&mut self, symbol: Symbol) {
        self.symbol_frequencies[symbol as usize] += 1;
    }

    pub fn get(&self, symbol: Symbol) -> Option<usize> {
        match self.symbol_frequencies[symbol as usize] {
            0 => None,
            frequency => Some(frequency),
        }
    }

    /// Symbols with a non-zero count, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = SymbolFrequency> + '_ {
        (0..=Symbol::MAX)
            .zip(self.symbol_frequencies.iter().copied())
            .filter(|&(_, f)| f > 0)
            .map(SymbolFrequency::from)
    }

    pub fn distinct_symbols(&self) -> usize {
        self.symbol_frequencies.iter().filter(|&&f| f > 0).count()
    }

    pub fn total(&self) -> usize {
        self.symbol_frequencies.iter().sum()
    }
}

impl From<&[u8]> for FrequencyTable {
    fn from(text: &[u8]) -> Self {
        let mut table = Self::new();
        for &symbol in text {
            table.increment_symbol(symbol);
        }
        table
    }
}

impl std::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|sf| (sf.symbol, sf.frequency)))
            .finish()
    }
}
