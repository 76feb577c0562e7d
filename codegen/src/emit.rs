//! Source emission primitives shared by the generators.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Header line marking a file as generated.
pub const GENERATED_HEADER: &str =
    "// @generated by xsd-valuespace-codegen. Do not edit by hand.";

/// An in-memory Rust source file.
#[derive(Debug, Default)]
pub struct RustFile {
    /// The source written so far.
    pub buf: String,
}

impl RustFile {
    /// Starts a file with the generated header and a `//!` module doc.
    ///
    /// `module_doc` may contain further `//!`-prefixed lines after embedded
    /// newlines.
    #[must_use]
    pub fn new(module_doc: &str) -> Self {
        let mut buf = String::with_capacity(4 * 1024);
        buf.push_str(GENERATED_HEADER);
        buf.push('\n');
        buf.push('\n');
        let _ = writeln!(buf, "//! {module_doc}");
        buf.push('\n');
        Self { buf }
    }

    /// Appends a line.
    pub fn line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends a `///` doc comment line.
    pub fn doc_comment(&mut self, s: &str) {
        if s.is_empty() {
            self.line("///");
        } else {
            let _ = writeln!(self.buf, "/// {s}");
        }
    }

    /// Appends a `///` doc comment line indented one level.
    pub fn indented_doc_comment(&mut self, s: &str) {
        if s.is_empty() {
            self.line("    ///");
        } else {
            let _ = writeln!(self.buf, "    /// {s}");
        }
    }

    /// Returns the finished source.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Writes `content` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote generated file");
    Ok(())
}

/// Collapses runs of whitespace so prose fits on one doc line.
#[must_use]
pub fn normalize_comment(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Renders `s` as a Rust string literal.
#[must_use]
pub fn string_literal(s: &str) -> String {
    format!("{s:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_starts_with_header_and_module_doc() {
        let mut f = RustFile::new("Checks.");
        f.doc_comment("A thing.");
        f.doc_comment("");
        f.line("pub struct Thing;");
        let out = f.finish();
        assert!(out.starts_with(GENERATED_HEADER));
        assert!(out.contains("//! Checks.\n"));
        assert!(out.contains("/// A thing.\n///\npub struct Thing;\n"));
    }

    #[test]
    fn string_literals_escape_control_chars() {
        assert_eq!(string_literal("a\"b"), r#""a\"b""#);
        assert_eq!(string_literal("\r\n\t"), r#""\r\n\t""#);
    }

    #[test]
    fn normalizes_whitespace() {
        assert_eq!(normalize_comment("a  b\n   c"), "a b c");
    }
}
