//! Asset kind definitions.

use std::path::Path;

/// Kind of static asset, determined by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// HTML markup, minified structurally with embedded styles/scripts.
    Markup,
    /// CSS stylesheet.
    Style,
    /// JavaScript source.
    Script,
    /// Any other file; compressed as-is without minification.
    Opaque,
}

impl AssetKind {
    /// Classify a file by its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        match lower_ext(path).as_deref() {
            Some("html") => Self::Markup,
            Some("css") => Self::Style,
            Some("js") => Self::Script,
            _ => Self::Opaque,
        }
    }

    /// Whether this kind has a minification pass.
    pub fn is_minifiable(self) -> bool {
        !matches!(self, Self::Opaque)
    }
}

/// Whether a file already carries the gzip extension (case-insensitive).
///
/// Such files are never re-processed: re-compressing would chain `.gz`
/// extensions forever.
pub fn is_gzipped(path: &Path) -> bool {
    lower_ext(path).as_deref() == Some("gz")
}

fn lower_ext(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(AssetKind::from_path(Path::new("index.html")), AssetKind::Markup);
        assert_eq!(AssetKind::from_path(Path::new("style.css")), AssetKind::Style);
        assert_eq!(AssetKind::from_path(Path::new("app.js")), AssetKind::Script);
        assert_eq!(AssetKind::from_path(Path::new("logo.png")), AssetKind::Opaque);
        assert_eq!(AssetKind::from_path(Path::new("README")), AssetKind::Opaque);
    }

    #[test]
    fn test_kind_is_case_insensitive() {
        assert_eq!(AssetKind::from_path(Path::new("INDEX.HTML")), AssetKind::Markup);
        assert_eq!(AssetKind::from_path(Path::new("Style.Css")), AssetKind::Style);
        assert_eq!(AssetKind::from_path(Path::new("APP.JS")), AssetKind::Script);
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("already.txt.gz")));
        assert!(is_gzipped(Path::new("ARCHIVE.GZ")));
        assert!(!is_gzipped(Path::new("index.html")));
        assert!(!is_gzipped(Path::new("gz"))); // no extension
    }

    #[test]
    fn test_minifiable() {
        assert!(AssetKind::Markup.is_minifiable());
        assert!(AssetKind::Style.is_minifiable());
        assert!(AssetKind::Script.is_minifiable());
        assert!(!AssetKind::Opaque.is_minifiable());
    }
}
