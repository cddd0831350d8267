//! Output filename derivation.

use std::path::Path;

/// Derive the stored filename from the client-supplied upload name:
/// `<stem>-logo.<extension>`.
///
/// Stem and extension come from the original name, not the sniffed
/// format, so a misnamed upload produces a misnamed output. A name
/// without an extension yields a trailing dot. Only the last path
/// component is used, so traversal sequences in the client name never
/// reach storage.
pub fn output_filename(original: &str) -> String {
    let path = Path::new(original);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    match path.extension() {
        Some(ext) => format!("{stem}-logo.{}", ext.to_string_lossy()),
        None => format!("{stem}-logo."),
    }
}
