use unicode_normalization::UnicodeNormalization;

/// Normalize raw editor input before it reaches the command parser:
/// NFKC normalization, newline stripping, whitespace trim.
pub fn normalize_input(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let text: String = text.nfkc().collect();
    text.replace(['\n', '\r'], " ").trim().to_string()
}
