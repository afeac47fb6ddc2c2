use super::code::CodeTable;
use super::coding_error::CodingError;
use super::frequency::FrequencyTable;
use super::tree::HuffmanTree;
use super::Symbol;

struct BuiltCode {
    tree: HuffmanTree,
    frequencies: FrequencyTable,
    codes: CodeTable,
}

/// Builds a Huffman code for a text and encodes to / decodes from bit strings.
///
/// A coder starts unbuilt. Every successful [`Coder::build`] replaces the
/// tree, frequency table and code table of the previous build, a failed one
/// leaves them untouched. Encoding and decoding only borrow the coder, so a
/// built coder can be shared read-only while rebuilding requires exclusive
/// access.
#[derive(Default)]
pub struct Coder {
    built: Option<BuiltCode>,
}

impl Coder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(&mut self, text: &[u8]) -> Result<(), CodingError> {
        if text.is_empty() {
            return Err(CodingError::EmptyInputError);
        }
        let frequencies = FrequencyTable::from(text);
        let tree = HuffmanTree::new(&frequencies)?;
        let codes = CodeTable::from(&tree);
        log::debug!(
            "Built code for {} bytes: {} distinct symbols, longest code {} bits",
            text.len(),
            codes.len(),
            codes.max_code_length()
        );
        self.built = Some(BuiltCode {
            tree,
            frequencies,
            codes,
        });
        Ok(())
    }

    pub fn encode(&self, text: &[u8]) -> Result<String, CodingError> {
        let codes = &self.get_built()?.codes;
        let code_words = text
            .iter()
            .map(|&symbol| {
                codes
                    .get(symbol)
                    .ok_or(CodingError::UnknownSymbolError(symbol))
            })
            .collect::<Result<Vec<&str>, CodingError>>()?;
        let mut encoded = String::with_capacity(code_words.iter().map(|code| code.len()).sum());
        for code in code_words {
            encoded.push_str(code);
        }
        Ok(encoded)
    }

    pub fn decode(&self, bits: &str) -> Result<Vec<Symbol>, CodingError> {
        let tree = &self.get_built()?.tree;
        let mut decoded = Vec::with_capacity(bits.len() / 4);
        tree.decode_sequence(bits, &mut decoded)?;
        Ok(decoded)
    }

    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }

    pub fn frequencies(&self) -> Option<&FrequencyTable> {
        self.built.as_ref().map(|built| &built.frequencies)
    }

    pub fn codes(&self) -> Option<&CodeTable> {
        self.built.as_ref().map(|built| &built.codes)
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.built.as_ref().map(|built| &built.tree)
    }

    fn get_built(&self) -> Result<&BuiltCode, CodingError> {
        self.built.as_ref().ok_or(CodingError::NotBuiltError)
    }
}
