//! Tolerant field extraction from existing page HTML.
//!
//! Pages come from a mix of hand-written files and earlier publishing runs,
//! so none of this assumes well-formed markup. Plain regex scraping over the
//! raw text is the contract here, not a DOM.

use regex::Regex;
use std::sync::OnceLock;

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap())
}

fn description_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<meta[^>]+name=['"]description['"][^>]+content=['"]([^'"]+)['"]"#)
            .unwrap()
    })
}

fn body_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<body[^>]*>(.*)</body>").unwrap())
}

fn doctype_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\s*<!doctype[^>]*>").unwrap())
}

fn head_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<head.*?</head>").unwrap())
}

fn html_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</?html[^>]*>").unwrap())
}

fn body_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</?body[^>]*>").unwrap())
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Get the first `<title>` text, whitespace-collapsed
pub fn extract_title(html: &str) -> Option<String> {
    let caps = title_re().captures(html)?;
    Some(collapse_whitespace(&caps[1]))
}

/// Get the first `<meta name="description">` content, trimmed
///
/// Matches `name` before `content` only; that is how every published page
/// writes the tag.
pub fn extract_description(html: &str) -> Option<String> {
    let caps = description_re().captures(html)?;
    Some(caps[1].trim().to_string())
}

/// Get the span between the first `<body>` and the last `</body>`, trimmed
///
/// Falls back to the whole input when no body element is present.
pub fn extract_body(html: &str) -> &str {
    body_re()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or(html)
}

/// Strip document wrapper markup from a fragment, keeping the inner content.
///
/// Removes, in order: one leading doctype declaration, every
/// `<head>...</head>` block, every `<html>` tag, every `<body>` tag. Each
/// step applies independently and is followed by a trim, so fragments with
/// only some of the wrapper still come out clean.
pub fn sanitize_fragment(fragment: &str) -> String {
    let cleaned = doctype_re().replace(fragment, "");
    let cleaned = head_re().replace_all(cleaned.trim(), "");
    let cleaned = html_tag_re().replace_all(cleaned.trim(), "");
    let cleaned = body_tag_re().replace_all(cleaned.trim(), "");
    cleaned.trim().to_string()
}

/// Collapse every whitespace run to a single space and trim
pub fn collapse_whitespace(text: &str) -> String {
    whitespace_re().replace_all(text, " ").trim().to_string()
}
