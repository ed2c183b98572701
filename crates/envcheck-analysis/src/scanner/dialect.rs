//! Source dialect detection from file extension.

use std::path::Path;

/// The closed set of source dialects the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `.js`, `.mjs`, `.cjs`
    PlainScript,
    /// `.jsx`
    ScriptWithMarkup,
    /// `.ts`, `.mts`, `.cts`
    TypedScript,
    /// `.tsx`
    TypedScriptWithMarkup,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [
        Dialect::PlainScript,
        Dialect::ScriptWithMarkup,
        Dialect::TypedScript,
        Dialect::TypedScriptWithMarkup,
    ];

    /// Detect the dialect from a file extension string (case-insensitive).
    pub fn from_extension(ext: Option<&str>) -> Option<Dialect> {
        match ext?.to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Some(Dialect::PlainScript),
            "jsx" => Some(Dialect::ScriptWithMarkup),
            "ts" | "mts" | "cts" => Some(Dialect::TypedScript),
            "tsx" => Some(Dialect::TypedScriptWithMarkup),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Dialect> {
        Self::from_extension(path.extension().and_then(|e| e.to_str()))
    }

    /// Returns all file extensions associated with this dialect.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Dialect::PlainScript => &["js", "mjs", "cjs"],
            Dialect::ScriptWithMarkup => &["jsx"],
            Dialect::TypedScript => &["ts", "mts", "cts"],
            Dialect::TypedScriptWithMarkup => &["tsx"],
        }
    }

    pub fn allows_type_annotations(&self) -> bool {
        matches!(self, Dialect::TypedScript | Dialect::TypedScriptWithMarkup)
    }

    pub fn allows_markup(&self) -> bool {
        matches!(self, Dialect::ScriptWithMarkup | Dialect::TypedScriptWithMarkup)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::PlainScript => "JavaScript",
            Dialect::ScriptWithMarkup => "JSX",
            Dialect::TypedScript => "TypeScript",
            Dialect::TypedScriptWithMarkup => "TSX",
        }
    }

    /// The widest tree-sitter grammar for this dialect.
    ///
    /// The JavaScript grammar already accepts JSX, so plain scripts use it
    /// too. TypeScript needs its own grammar without markup because
    /// `<T>expr` casts conflict with JSX tags.
    pub fn ts_language(&self) -> tree_sitter::Language {
        match (self.allows_type_annotations(), self.allows_markup()) {
            (false, _) => tree_sitter_javascript::LANGUAGE.into(),
            (true, false) => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            (true, true) => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
