//! Output formatting for CLI display
//!
//! One-line summaries for `list` and `search`, a detailed view for `show`,
//! and JSON rendering for `--json`. Colors come from `colored`, which turns
//! itself off when stdout is not a terminal or `NO_COLOR` is set.

use colored::Colorize;
use serde::Serialize;

use crate::models::{Language, Snippet};

const FAVORITE_MARK: &str = "★";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// One-line summary: `#id [lang] title ★ [tag, tag]`
///
/// In quiet mode only the id is printed, for piping into other commands.
#[must_use]
pub fn snippet_summary(snippet: &Snippet, quiet: bool) -> String {
    let id = snippet.id.map_or_else(|| "-".to_string(), |id| id.to_string());
    if quiet {
        return id;
    }

    let mut line = format!(
        "{} {} {}",
        format!("#{id}").bold(),
        format!("[{}]", snippet.language).cyan(),
        snippet.title
    );
    if snippet.favorite {
        line.push(' ');
        line.push_str(&FAVORITE_MARK.yellow().to_string());
    }
    if !snippet.tags.is_empty() {
        line.push(' ');
        line.push_str(&format!("[{}]", snippet.tag_names().join(", ")).dimmed().to_string());
    }
    line
}

/// Multi-line view of one snippet with its code block
#[must_use]
pub fn snippet_detail(snippet: &Snippet, highlight: bool) -> String {
    let mut out = String::new();
    out.push_str(&snippet_summary(snippet, false));
    out.push('\n');

    if let Some(description) = snippet.description.as_deref()
        && !description.is_empty()
    {
        out.push_str(&format!("  {description}\n"));
    }

    out.push_str(&format!(
        "  {} {}\n",
        "language:".dimmed(),
        snippet.language.label()
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "created:".dimmed(),
        snippet.created_at.format(TIMESTAMP_FORMAT)
    ));
    if let Some(updated) = snippet.updated_at {
        out.push_str(&format!(
            "  {} {}\n",
            "updated:".dimmed(),
            updated.format(TIMESTAMP_FORMAT)
        ));
    }

    out.push('\n');
    let code = if highlight {
        highlight_code(&snippet.code, snippet.language)
    } else {
        snippet.code.clone()
    };
    out.push_str(&code);
    if !code.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Format a list of snippets, one summary per line
#[must_use]
pub fn snippet_list(snippets: &[Snippet], quiet: bool) -> String {
    snippets
        .iter()
        .map(|snippet| snippet_summary(snippet, quiet))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON for `--json` output
///
/// # Errors
///
/// Returns `serde_json::Error` if the value cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Highlight code for a 24-bit color terminal
#[cfg(feature = "syntax-highlighting")]
#[must_use]
pub fn highlight_code(code: &str, language: Language) -> String {
    use syntect::easy::HighlightLines;
    use syntect::highlighting::ThemeSet;
    use syntect::parsing::SyntaxSet;
    use syntect::util::{LinesWithEndings, as_24_bit_terminal_escaped};

    if !colored::control::SHOULD_COLORIZE.should_colorize() {
        return code.to_string();
    }

    let syntax_set = SyntaxSet::load_defaults_newlines();
    let theme_set = ThemeSet::load_defaults();

    let syntax = syntax_set
        .find_syntax_by_extension(language.extension())
        .unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    let Some(theme) = theme_set.themes.get("base16-ocean.dark") else {
        return code.to_string();
    };
    let mut highlighter = HighlightLines::new(syntax, theme);

    let mut out = String::new();
    for line in LinesWithEndings::from(code) {
        match highlighter.highlight_line(line, &syntax_set) {
            Ok(ranges) => out.push_str(&as_24_bit_terminal_escaped(&ranges, false)),
            Err(_) => out.push_str(line),
        }
    }
    // reset so the terminal color does not leak past the code block
    out.push_str("\x1b[0m");
    out
}

/// Highlighting disabled at build time: code is returned unchanged
#[cfg(not(feature = "syntax-highlighting"))]
#[must_use]
pub fn highlight_code(code: &str, _language: Language) -> String {
    code.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tag;

    fn sample() -> Snippet {
        let mut snippet = Snippet::new("First snip", "print('hello world')", Language::Python)
            .unwrap()
            .with_description("Good day, Snipster!")
            .with_tags(Tag::parse_all(&["beginner", "training"]).unwrap())
            .with_favorite(true);
        snippet.id = Some(1);
        snippet
    }

    #[test]
    fn test_summary_contains_fields() {
        colored::control::set_override(false);
        let line = snippet_summary(&sample(), false);
        assert_eq!(line, "#1 [py] First snip ★ [beginner, training]");
    }

    #[test]
    fn test_summary_quiet_is_id() {
        assert_eq!(snippet_summary(&sample(), true), "1");
    }

    #[test]
    fn test_summary_without_tags_or_favorite() {
        colored::control::set_override(false);
        let mut snippet = Snippet::new("Get it all", "SELECT * FROM MY_TABLE;", Language::Sql).unwrap();
        snippet.id = Some(2);
        assert_eq!(snippet_summary(&snippet, false), "#2 [sql] Get it all");
    }

    #[test]
    fn test_detail_plain() {
        colored::control::set_override(false);
        let detail = snippet_detail(&sample(), false);
        assert!(detail.starts_with("#1 [py] First snip"));
        assert!(detail.contains("Good day, Snipster!"));
        assert!(detail.contains("language: Python"));
        assert!(detail.ends_with("print('hello world')\n"));
        assert!(!detail.contains("updated:"));
    }

    #[test]
    fn test_list_quiet() {
        let mut other = sample();
        other.id = Some(7);
        assert_eq!(snippet_list(&[sample(), other], true), "1\n7");
        assert_eq!(snippet_list(&[], false), "");
    }

    #[test]
    fn test_json_output() {
        let json = to_json(&[sample()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["language"], "py");
        assert_eq!(value[0]["favorite"], true);
    }

    #[test]
    fn test_highlight_keeps_code_text() {
        colored::control::set_override(false);
        assert_eq!(highlight_code("SELECT 1;", Language::Sql), "SELECT 1;");
    }
}
