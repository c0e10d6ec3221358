use crate::error::Result;
use crate::types::{PageEntry, PageRecord, SiteMeta};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name of the page-list manifest, relative to the site directory
pub const MANIFEST_FILE: &str = "pages.json";

/// File name of the generated listing page
pub const INDEX_FILE: &str = "index.html";

/// Everything read from pages.json
///
/// Both sections are optional in old manifests; absent means empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub site: SiteMeta,
    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

/// Output structure of pages.json after a rebuild
#[derive(Serialize)]
struct ManifestOut<'a> {
    site: &'a SiteMeta,
    pages: &'a [PageRecord],
}

/// Parse pages.json from a file path
pub fn parse_pages_json<P: AsRef<Path>>(path: P) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    parse_pages_json_str(&content)
}

/// Parse pages.json from a string (useful for testing)
pub fn parse_pages_json_str(content: &str) -> Result<Manifest> {
    let manifest: Manifest = serde_json::from_str(content)?;
    Ok(manifest)
}

/// Serialize the rebuilt manifest, pretty-printed with a trailing newline
pub fn render_pages_json(site: &SiteMeta, pages: &[PageRecord]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&ManifestOut { site, pages })?;
    out.push('\n');
    Ok(out)
}

/// Write the rebuilt manifest back to disk
pub fn write_pages_json<P: AsRef<Path>>(
    path: P,
    site: &SiteMeta,
    pages: &[PageRecord],
) -> Result<()> {
    fs::write(path, render_pages_json(site, pages)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::NaiveDate;

    fn record(id: &str, href: &str) -> PageRecord {
        PageRecord {
            id: id.to_string(),
            title: "Report".to_string(),
            description: "A report".to_string(),
            category: Category::Analysis,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            href: href.to_string(),
        }
    }

    #[test]
    fn test_parse_minimal_manifest() {
        let json = r##"
{
  "site": {
    "title": "OpenClaw Reports",
    "repo": "https://github.com/samdasuu/openclaw-pages"
  },
  "pages": [
    {
      "href": "./2024-03-05__report.html",
      "title": "March report",
      "tags": ["dev", "logs"]
    }
  ]
}
        "##;

        let manifest = parse_pages_json_str(json).unwrap();
        assert_eq!(manifest.site.title.as_deref(), Some("OpenClaw Reports"));
        assert_eq!(manifest.pages.len(), 1);
        assert_eq!(manifest.pages[0].href, "./2024-03-05__report.html");
        assert_eq!(manifest.pages[0].tags(), ["dev", "logs"]);
    }

    #[test]
    fn test_parse_defaults_for_missing_sections() {
        let manifest = parse_pages_json_str("{}").unwrap();
        assert!(manifest.site.title.is_none());
        assert!(manifest.pages.is_empty());

        let manifest = parse_pages_json_str(r#"{"pages": []}"#).unwrap();
        assert!(manifest.pages.is_empty());
    }

    #[test]
    fn test_parse_tolerates_null_tags_and_missing_href() {
        let json = r#"{"pages": [{"title": "No link", "tags": null}]}"#;
        let manifest = parse_pages_json_str(json).unwrap();
        assert_eq!(manifest.pages[0].href, "");
        assert!(manifest.pages[0].tags().is_empty());
    }

    #[test]
    fn test_parse_ignores_legacy_page_fields() {
        let json = r##"
{
  "pages": [
    {
      "href": "./a.html",
      "id": "old-id",
      "category": "분석",
      "date": "2023-01-01",
      "summaryLines": ["old", "fields"]
    }
  ]
}
        "##;

        let manifest = parse_pages_json_str(json).unwrap();
        assert_eq!(manifest.pages[0].href, "./a.html");
        assert!(manifest.pages[0].title.is_none());
    }

    #[test]
    fn test_parse_invalid_json_is_error() {
        let result = parse_pages_json_str("pages: not json");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Manifest parse error")
        );
    }

    #[test]
    fn test_site_extra_keys_survive_rebuild() {
        let json = r##"
{
  "site": {
    "title": "Reports",
    "generator": "openclaw",
    "analytics": {"id": "UA-1"},
    "zeta": 1
  },
  "pages": []
}
        "##;

        let manifest = parse_pages_json_str(json).unwrap();
        let out = render_pages_json(&manifest.site, &[]).unwrap();

        assert!(out.contains(r#""generator": "openclaw""#));
        assert!(out.contains(r#""zeta": 1"#));
        // Unknown keys keep their original relative order
        let generator_at = out.find("generator").unwrap();
        let analytics_at = out.find("analytics").unwrap();
        let zeta_at = out.find("zeta").unwrap();
        assert!(generator_at < analytics_at && analytics_at < zeta_at);
    }

    #[test]
    fn test_render_format_is_pretty_with_trailing_newline() {
        let out =
            render_pages_json(&SiteMeta::default(), &[record("20240101-01", "a.html")]).unwrap();

        let expected = r#"{
  "site": {},
  "pages": [
    {
      "id": "20240101-01",
      "title": "Report",
      "description": "A report",
      "category": "분석",
      "date": "2024-01-01",
      "href": "a.html"
    }
  ]
}
"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_write_then_parse_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);

        let site = SiteMeta {
            title: Some("Reports".to_string()),
            ..SiteMeta::default()
        };
        write_pages_json(&path, &site, &[record("20240101-01", "a.html")]).unwrap();

        let manifest = parse_pages_json(&path).unwrap();
        assert_eq!(manifest.site.title.as_deref(), Some("Reports"));
        assert_eq!(manifest.pages.len(), 1);
        assert_eq!(manifest.pages[0].href, "a.html");
        assert_eq!(manifest.pages[0].description.as_deref(), Some("A report"));
    }
}
