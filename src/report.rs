use std::fmt::{self, Display};

use crate::error::Error;
use crate::huffman::{CodeTable, Coder, CodingError, FrequencyTable};
use crate::Result;

const BITS_PER_BYTE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Longest prefix of the text and bit string that is printed
    pub max_display: usize,
    pub show_tree: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_display: 100,
            show_tree: false,
        }
    }
}

/// Outcome of compressing one input: the code, the encoded bits and the
/// round trip check.
pub struct CompressionReport {
    source: String,
    original: Vec<u8>,
    encoded: String,
    decoded: Vec<u8>,
    frequencies: FrequencyTable,
    codes: CodeTable,
    rendered_tree: Option<String>,
    options: DisplayOptions,
}

impl CompressionReport {
    pub fn new(
        source: &str,
        coder: &Coder,
        original: Vec<u8>,
        encoded: String,
        decoded: Vec<u8>,
        options: DisplayOptions,
    ) -> Result<Self> {
        let frequencies = coder.frequencies().ok_or(CodingError::NotBuiltError)?;
        let codes = coder.codes().ok_or(CodingError::NotBuiltError)?;
        let rendered_tree = options
            .show_tree
            .then(|| coder.tree().map(|tree| tree.to_string()))
            .flatten();
        Ok(Self {
            source: source.to_owned(),
            original,
            encoded,
            decoded,
            frequencies: frequencies.clone(),
            codes: codes.clone(),
            rendered_tree,
            options,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn original_bits(&self) -> usize {
        self.original.len() * BITS_PER_BYTE
    }

    pub fn encoded_bits(&self) -> usize {
        self.encoded.len()
    }

    /// Saved space in percent of the original size.
    pub fn compression_ratio(&self) -> f64 {
        if self.original.is_empty() {
            return 0.0;
        }
        (1.0 - self.encoded_bits() as f64 / self.original_bits() as f64) * 100.0
    }

    pub fn is_verified(&self) -> bool {
        self.original == self.decoded
    }

    pub fn verify(&self) -> Result<()> {
        if self.is_verified() {
            Ok(())
        } else {
            Err(Error::RoundTripMismatch)
        }
    }

    fn write_original(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let length = self.original.len();
        if length <= self.options.max_display {
            writeln!(f, "Original text: {}", String::from_utf8_lossy(&self.original))?;
        } else {
            writeln!(
                f,
                "Original text: {}... ({} chars total)",
                String::from_utf8_lossy(&self.original[..self.options.max_display]),
                length
            )?;
        }
        writeln!(
            f,
            "Original size: {} bits ({} bytes)",
            self.original_bits(),
            length
        )
    }

    fn write_codes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman Codes:")?;
        for (symbol, code) in self.codes.iter() {
            writeln!(f, "  '{}' -> {}", symbol.escape_ascii(), code)?;
        }
        Ok(())
    }

    fn write_encoded(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.encoded.len() <= self.options.max_display {
            writeln!(f, "Encoded: {}", self.encoded)?;
        } else {
            writeln!(
                f,
                "Encoded: {}... ({} bits total)",
                &self.encoded[..self.options.max_display],
                self.encoded.len()
            )?;
        }
        writeln!(f, "Encoded size: {} bits", self.encoded_bits())?;
        writeln!(f, "Compression ratio: {:.2}%", self.compression_ratio())
    }
}

impl Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== Huffman Compression ===")?;
        writeln!(f)?;
        writeln!(f, "Source: {}", self.source)?;
        self.write_original(f)?;
        writeln!(f)?;
        self.write_codes(f)?;
        writeln!(f)?;
        if let Some(tree) = &self.rendered_tree {
            writeln!(f, "Huffman Tree:")?;
            write!(f, "{}", tree)?;
            writeln!(f)?;
        }
        self.write_encoded(f)?;
        writeln!(f)?;
        writeln!(
            f,
            "Verification: {}",
            if self.is_verified() {
                "SUCCESS"
            } else {
                "FAILED"
            }
        )
    }
}
