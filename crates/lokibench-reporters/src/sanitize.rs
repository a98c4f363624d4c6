//! Filesystem-safe base names for measurement files.

/// Used when nothing of the original name survives sanitizing
pub const FALLBACK_NAME: &str = "measurement";

/// Turn an arbitrary measurement name into a single path segment.
///
/// Joining characters (` &_=+:`) become dashes, anything other than ASCII
/// alphanumerics, dashes and dots is dropped, dash runs collapse to one and
/// leading dots are removed. The result never contains a path separator and
/// `base_name(base_name(s)) == base_name(s)`.
pub fn base_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.chars() {
        let mapped = match c {
            ' ' | '&' | '_' | '=' | '+' | ':' => '-',
            c if c.is_ascii_alphanumeric() || c == '-' || c == '.' => c,
            _ => continue,
        };
        if mapped == '-' && out.ends_with('-') {
            continue;
        }
        out.push(mapped);
    }

    let trimmed = out.trim_start_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        return FALLBACK_NAME.to_string();
    }
    trimmed.to_string()
}
