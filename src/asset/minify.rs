//! Asset minification for HTML, CSS and JS files.
//!
//! Uses minify-html for markup, lightningcss for CSS and oxc for JavaScript.
//! All three operate on UTF-8 text; callers hand in raw bytes and get back
//! re-encoded bytes, or an error when the input is malformed.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;
use thiserror::Error;

use super::AssetKind;

/// Minification failure for a single asset.
///
/// Every variant is recoverable: the caller falls back to compressing the
/// raw bytes instead.
#[derive(Debug, Error)]
pub enum MinifyError {
    #[error("content is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("markup minification produced invalid UTF-8")]
    MarkupEncoding(#[from] std::string::FromUtf8Error),

    #[error("invalid stylesheet: {0}")]
    Style(String),

    #[error("script parse failed: {0}")]
    Script(String),
}

/// Minify raw bytes according to asset kind.
///
/// Decodes as UTF-8, applies the kind's minifier and re-encodes the
/// result. `Opaque` is the identity transform.
pub fn minify(kind: AssetKind, content: &[u8]) -> Result<Vec<u8>, MinifyError> {
    let reduced = match kind {
        AssetKind::Markup => minify_markup(std::str::from_utf8(content)?)?,
        AssetKind::Style => minify_style(std::str::from_utf8(content)?)?,
        AssetKind::Script => minify_script(std::str::from_utf8(content)?)?,
        AssetKind::Opaque => return Ok(content.to_vec()),
    };
    Ok(reduced.into_bytes())
}

/// Minify HTML markup, including embedded stylesheets and scripts.
pub fn minify_markup(source: &str) -> Result<String, MinifyError> {
    let cfg = minify_html::Cfg {
        minify_css: true,
        minify_js: true,
        ..minify_html::Cfg::default()
    };
    let out = minify_html::minify(source.as_bytes(), &cfg);
    Ok(String::from_utf8(out)?)
}

/// Minify CSS source code.
pub fn minify_style(source: &str) -> Result<String, MinifyError> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| MinifyError::Style(e.to_string()))?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| MinifyError::Style(e.to_string()))?;
    Ok(result.code)
}

/// Minify JavaScript source code.
pub fn minify_script(source: &str) -> Result<String, MinifyError> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if let Some(error) = ret.errors.first() {
        return Err(MinifyError::Script(error.to_string()));
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Ok(code)
}

/// Startup capability probe.
///
/// Runs every minifier over a tiny known-good snippet before any file is
/// touched, so a broken minification backend aborts the whole build step
/// instead of surfacing as per-file warnings halfway through.
pub fn probe() -> anyhow::Result<()> {
    minify_markup("<html><body>ok</body></html>")?;
    minify_style("body{color:red}")?;
    minify_script("let a = 1;")?;
    Ok(())
}
