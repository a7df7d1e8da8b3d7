use std::path::Path;

pub struct LanguageEntry {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

const LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry {
        name: "rust",
        extensions: &["rs"],
    },
    LanguageEntry {
        name: "javascript",
        extensions: &["js", "jsx", "mjs", "cjs"],
    },
    LanguageEntry {
        name: "typescript",
        extensions: &["ts", "tsx"],
    },
    LanguageEntry {
        name: "python",
        extensions: &["py", "pyi"],
    },
    LanguageEntry {
        name: "json",
        extensions: &["json", "jsonc"],
    },
    LanguageEntry {
        name: "toml",
        extensions: &["toml"],
    },
    LanguageEntry {
        name: "css",
        extensions: &["css"],
    },
    LanguageEntry {
        name: "html",
        extensions: &["html", "htm"],
    },
    LanguageEntry {
        name: "go",
        extensions: &["go"],
    },
    LanguageEntry {
        name: "ruby",
        extensions: &["rb", "rake", "gemspec"],
    },
    LanguageEntry {
        name: "bash",
        extensions: &["sh", "bash", "zsh"],
    },
    LanguageEntry {
        name: "yaml",
        extensions: &["yml", "yaml"],
    },
    LanguageEntry {
        name: "markdown",
        extensions: &["md", "markdown"],
    },
];

/// Display label for a file, from its extension or well-known filename.
pub fn detect_language(path: &Path) -> Option<&'static str> {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if let Some(entry) = LANGUAGES.iter().find(|l| l.extensions.contains(&ext)) {
            return Some(entry.name);
        }
    }
    // Filename-based detection
    let filename = path.file_name()?.to_str()?;
    match filename {
        "Makefile" | "makefile" | "GNUmakefile" => Some("bash"),
        "Dockerfile" => Some("bash"),
        "Gemfile" | "Rakefile" => Some("ruby"),
        _ => None,
    }
}

/// Like [`detect_language`], with `text` for anything unknown.
pub fn language_label(path: &Path) -> &'static str {
    detect_language(path).unwrap_or("text")
}
