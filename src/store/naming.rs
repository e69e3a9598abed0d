//! The `<hash> - <display name>` file naming convention
//!
//! Every listing, resolution and preset scan goes through
//! [`split_entry_name`] so that all callers agree on what a file means.

use crate::error::{SwapError, SwapResult};

/// Separator between the hash and the display name
pub const SEPARATOR: &str = " - ";

/// Split a file name at the first separator into `(hash, display_name)`.
///
/// Returns `None` when the separator is missing or either half is empty.
pub fn split_entry_name(file_name: &str) -> Option<(&str, &str)> {
    let (hash, display_name) = file_name.split_once(SEPARATOR)?;
    if hash.is_empty() || display_name.is_empty() {
        return None;
    }
    Some((hash, display_name))
}

/// Build the on-disk file name for an entry
pub fn entry_file_name(hash: &str, display_name: &str) -> String {
    format!("{hash}{SEPARATOR}{display_name}")
}

/// Whether a hash looks like the 32-digit hex tokens the runtime uses.
///
/// Advisory only; any non-empty hash is accepted.
pub fn looks_like_hash(hash: &str) -> bool {
    hash.len() == 32 && hash.chars().all(|c| c.is_ascii_hexdigit())
}

/// Validate one component of a store file or directory name.
pub(crate) fn validate_component(kind: &str, value: &str) -> SwapResult<()> {
    if value.trim().is_empty() {
        return Err(SwapError::Validation(format!("{kind} is required")));
    }
    if value.contains('/') || value.contains('\\') || value.contains('\0') {
        return Err(SwapError::Validation(format!(
            "{kind} '{value}' must not contain path separators"
        )));
    }
    if value == "." || value == ".." {
        return Err(SwapError::Validation(format!(
            "{kind} '{value}' is not a valid name"
        )));
    }
    Ok(())
}

/// Validate a hash: a valid name component without the separator in it.
pub(crate) fn validate_hash(hash: &str) -> SwapResult<()> {
    validate_component("hash", hash)?;
    if hash.contains(SEPARATOR) {
        return Err(SwapError::Validation(format!(
            "hash '{hash}' must not contain '{SEPARATOR}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_at_first_separator() {
        assert_eq!(split_entry_name("ABC - Sky"), Some(("ABC", "Sky")));
        assert_eq!(
            split_entry_name("ABC - Sky - Night"),
            Some(("ABC", "Sky - Night"))
        );
    }

    #[test]
    fn split_rejects_missing_separator() {
        assert_eq!(split_entry_name("notes.txt"), None);
        assert_eq!(split_entry_name("ABC-Sky"), None);
        assert_eq!(split_entry_name(""), None);
    }

    #[test]
    fn split_rejects_empty_halves() {
        assert_eq!(split_entry_name(" - Sky"), None);
        assert_eq!(split_entry_name("ABC - "), None);
    }

    #[test]
    fn file_name_matches_split() {
        let name = entry_file_name("H1", "My Cache");
        assert_eq!(name, "H1 - My Cache");
        assert_eq!(split_entry_name(&name), Some(("H1", "My Cache")));
    }

    #[test]
    fn hash_shape() {
        assert!(looks_like_hash("0123456789abcdefABCDEF0123456789"));
        assert!(!looks_like_hash("ABC123"));
        assert!(!looks_like_hash("0123456789abcdefABCDEF012345678g"));
    }

    #[test]
    fn component_validation() {
        assert!(validate_component("display name", "Sky").is_ok());
        assert!(validate_component("display name", "Sky - Night").is_ok());
        assert!(validate_component("display name", "  ").is_err());
        assert!(validate_component("display name", "a/b").is_err());
        assert!(validate_component("display name", "a\\b").is_err());
        assert!(validate_component("display name", "..").is_err());
    }

    #[test]
    fn hash_rejects_separator() {
        assert!(validate_hash("ABC").is_ok());
        assert!(validate_hash("A - B").is_err());
        assert!(validate_hash("").is_err());
    }
}
