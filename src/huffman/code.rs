use super::tree::HuffmanTree;
use super::Symbol;

const ALPHABET_SIZE: usize = Symbol::MAX as usize + 1;

/// A code word as a sequence of '0' and '1' characters.
pub type Code = String;

/// Code word of every symbol of the last built tree, looked up by symbol.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    code_word_lookup_table: [Option<Code>; ALPHABET_SIZE],
}

impl CodeTable {
    fn new() -> Self {
        Self {
            code_word_lookup_table: [const { None }; ALPHABET_SIZE],
        }
    }

    fn set_code_word_for_symbol(&mut self, symbol: Symbol, code: Code) {
        debug_assert!(
            code.chars().all(|c| c == '0' || c == '1'),
            "Code word {} of symbol {} contains non-bit characters",
            code,
            symbol
        );
        self.code_word_lookup_table[symbol as usize] = Some(code);
    }

    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.code_word_lookup_table[symbol as usize].as_deref()
    }

    /// Symbols and their code words, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        (0..=Symbol::MAX)
            .zip(self.code_word_lookup_table.iter())
            .filter_map(|(symbol, code)| code.as_deref().map(|code| (symbol, code)))
    }

    pub fn len(&self) -> usize {
        self.code_word_lookup_table
            .iter()
            .filter(|code| code.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_code_length(&self) -> usize {
        self.iter().map(|(_, code)| code.len()).max().unwrap_or(0)
    }

    /// No code word is a proper prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.iter().map(|(_, code)| code).collect();
        // after sorting, a prefix is always directly followed by one of its extensions
        codes.sort_unstable();
        codes
            .windows(2)
            .all(|pair| !pair[1].starts_with(pair[0]))
    }
}

impl From<&HuffmanTree> for CodeTable {
    fn from(tree: &HuffmanTree) -> Self {
        tree.symbol_paths().into_iter().collect()
    }
}

impl FromIterator<(Symbol, Code)> for CodeTable {
    fn from_iter<T: IntoIterator<Item = (Symbol, Code)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (symbol, code) in iter {
            table.set_code_word_for_symbol(symbol, code);
        }
        table
    }
}

impl std::fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
