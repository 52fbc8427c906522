//! Document admission rules
//!
//! The checks every request passes before any text reaches the LLM:
//! a fixed extension allow-list and a minimum extracted-text length.

/// Minimum number of characters an extracted or pasted document must have
/// before it is considered analyzable. Anything shorter is treated as
/// empty or unreadable input.
pub const MIN_DOCUMENT_CHARS: usize = 10;

/// File extensions accepted by default: {pdf, txt, docx}
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["pdf", "txt", "docx"];

/// Check whether a filename carries an allowed extension.
///
/// The extension is the part after the final dot, compared
/// case-insensitively. A filename without a dot is never allowed.
pub fn is_allowed_file(filename: &str, allowed: &[String]) -> bool {
    match file_extension(filename) {
        Some(ext) => allowed.iter().any(|a| a == &ext),
        None => false,
    }
}

/// Extract the lowercased extension from a filename, if it has one.
pub fn file_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        DEFAULT_ALLOWED_EXTENSIONS
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_allowed_extensions() {
        assert!(is_allowed_file("contract.pdf", &allowed()));
        assert!(is_allowed_file("notes.txt", &allowed()));
        assert!(is_allowed_file("lease.docx", &allowed()));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(is_allowed_file("CONTRACT.PDF", &allowed()));
        assert!(is_allowed_file("Lease.DocX", &allowed()));
    }

    #[test]
    fn test_disallowed_extensions() {
        assert!(!is_allowed_file("legacy.doc", &allowed()));
        assert!(!is_allowed_file("malware.exe", &allowed()));
        assert!(!is_allowed_file("archive.zip", &allowed()));
    }

    #[test]
    fn test_no_extension() {
        assert!(!is_allowed_file("README", &allowed()));
        assert!(!is_allowed_file("", &allowed()));
        assert!(!is_allowed_file("trailing.", &allowed()));
    }

    #[test]
    fn test_only_final_extension_counts() {
        assert!(is_allowed_file("contract.doc.pdf", &allowed()));
        assert!(!is_allowed_file("contract.pdf.doc", &allowed()));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("a.PDF").as_deref(), Some("pdf"));
        assert_eq!(file_extension("a.b.txt").as_deref(), Some("txt"));
        assert_eq!(file_extension("none"), None);
    }
}
