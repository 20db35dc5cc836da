use crate::pin_summary::error::PinSummaryError;
use crate::pin_summary::result::Result;
use std::path::Path;

pub fn parse_pin_list(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

/// Reads whitespace separated pin names, usually one per line.
pub fn read_pin_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| PinSummaryError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let pins = parse_pin_list(&text);
    log::info!("read {} pin names from {:?}", pins.len(), path);
    Ok(pins)
}
