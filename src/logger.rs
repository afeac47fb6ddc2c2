use crate::huffman::{CodeTable, FrequencyTable};

const LOG_CONFIGURATION_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file(LOG_CONFIGURATION_FILE, Default::default()) {
        eprintln!(
            "Logging disabled, unable to load {}: {}",
            LOG_CONFIGURATION_FILE, e
        );
    }
}

pub fn log_code_table(source: &str, frequencies: &FrequencyTable, codes: &CodeTable) {
    if codes.is_empty() {
        log::warn!("{} has no Huffman code", source);
        return;
    }
    fn get_code_entries(frequencies: &FrequencyTable, codes: &CodeTable) -> Vec<String> {
        codes
            .iter()
            .map(|(symbol, code)| {
                format!(
                    "{:02X}x{}={}",
                    symbol,
                    frequencies.get(symbol).unwrap_or_default(),
                    code
                )
            })
            .collect()
    }
    log::info!(
        "{} ({} symbols)\n{:?}",
        source,
        codes.len(),
        get_code_entries(frequencies, codes)
    );
}
