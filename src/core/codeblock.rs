//! Language resolution for highlighted code blocks.
//!
//! Highlighting itself is done by highlight.js; this only decides which
//! language pack a `<pre data-src=...>` block needs.

use crate::config::codeblock::{EXTENSION_LANGUAGES, HIGHLIGHTER_CDN};

/// Picks the highlighter language for a block.
///
/// An explicit `data-language` wins; otherwise the source file's extension
/// is looked up in the extension map. Unknown extensions return `None`,
/// leaving detection to the highlighter.
pub fn resolve_language(explicit: Option<&str>, src: &str) -> Option<String> {
    if let Some(language) = explicit.map(str::trim).filter(|l| !l.is_empty()) {
        return Some(language.to_string());
    }

    let file_name = src.rsplit('/').next().unwrap_or(src);
    let (_, extension) = file_name.rsplit_once('.')?;
    EXTENSION_LANGUAGES
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, language)| language.to_string())
}

/// Script URL of the highlight.js language pack for `language`.
pub fn highlighter_script_url(language: &str) -> String {
    format!("{HIGHLIGHTER_CDN}/{language}.min.js")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_language_wins() {
        assert_eq!(
            resolve_language(Some("rust"), "/src/code/main.js"),
            Some("rust".to_string())
        );
    }

    #[test]
    fn test_extension_map() {
        assert_eq!(
            resolve_language(None, "/src/code/app.js"),
            Some("javascript".to_string())
        );
        assert_eq!(
            resolve_language(Some("  "), "/src/code/profile.PS1"),
            Some("powershell".to_string())
        );
    }

    #[test]
    fn test_unknown_or_missing_extension() {
        assert_eq!(resolve_language(None, "/src/code/main.py"), None);
        assert_eq!(resolve_language(None, "/src.d/Makefile"), None);
    }

    #[test]
    fn test_script_url() {
        assert_eq!(
            highlighter_script_url("powershell"),
            "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/languages/powershell.min.js"
        );
    }
}
