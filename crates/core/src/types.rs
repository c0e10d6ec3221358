use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Site-level metadata block of the manifest
///
/// Known keys get typed fields; anything else rides in `extra` and survives
/// a rebuild untouched, in its original order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(rename = "baseUrl", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page entry as listed in the manifest before a rebuild
///
/// Legacy manifests carry extra per-page fields; those are ignored on read
/// and dropped on write.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageEntry {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `null` in old manifests means no tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl PageEntry {
    /// Get the tag list, treating absent and `null` as empty
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// One page record as written back into the manifest
///
/// Field order here is the serialization order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
    pub href: String,
}

/// Category label assigned to a page from its tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "개발")]
    Development,
    #[serde(rename = "분석")]
    Analysis,
}

impl Category {
    /// Get the label as shown on the site
    pub fn label(self) -> &'static str {
        match self {
            Category::Development => "개발",
            Category::Analysis => "분석",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
