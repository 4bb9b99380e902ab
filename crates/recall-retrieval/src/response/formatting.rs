//! Deterministic answer post-processing.

/// Terminate `text` with a period and append `separator` + `signature`.
///
/// Trailing whitespace is trimmed first. Text that already ends with the
/// signature is returned trimmed and otherwise unchanged, so formatting is
/// idempotent.
pub fn format_answer(text: &str, separator: &str, signature: &str) -> String {
    let trimmed = text.trim_end();
    let signature = signature.trim_end();
    if !signature.is_empty() && trimmed.ends_with(signature) {
        return trimmed.to_string();
    }

    let mut out = String::with_capacity(trimmed.len() + 1 + separator.len() + signature.len());
    out.push_str(trimmed);
    if !out.ends_with('.') {
        out.push('.');
    }
    if !signature.is_empty() {
        out.push_str(separator);
        out.push_str(signature);
    }
    out
}
