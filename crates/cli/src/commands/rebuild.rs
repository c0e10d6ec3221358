use anyhow::{Context, Result};
use chrono::NaiveDate;
use report_kit_core::manifest::{self, INDEX_FILE, MANIFEST_FILE};
use report_kit_core::types::{PageEntry, PageRecord};
use report_kit_generator::classify::classify;
use report_kit_generator::extract;
use report_kit_generator::ident::IdAllocator;
use report_kit_generator::index::render_index;
use report_kit_generator::page::{PageFields, render_page};
use std::fs;
use std::path::Path;

/// Fallback repository link when the manifest's site block has none
const DEFAULT_REPO_URL: &str = "https://github.com/samdasuu/openclaw-pages";

/// Placeholder description left behind by the old publisher, replaced on sight
const STALE_DESCRIPTION: &str = "Published via OpenClaw";

/// Rebuild every listed page in `dir`, then the listing index and the
/// manifest itself.
///
/// `today` dates pages whose filename carries no date prefix; it is taken
/// once at the CLI boundary so the whole run sees a single date.
pub fn run(dir: &Path, today: NaiveDate) -> Result<()> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let manifest = manifest::parse_pages_json(&manifest_path)
        .with_context(|| format!("Failed to load {}", manifest_path.display()))?;
    println!(
        "Rebuilding {} listed pages in {}",
        manifest.pages.len(),
        dir.display()
    );

    let repo_url = manifest
        .site
        .repo
        .clone()
        .unwrap_or_else(|| DEFAULT_REPO_URL.to_string());

    let mut ids = IdAllocator::new(today);
    let mut rebuilt: Vec<PageRecord> = Vec::new();

    for entry in &manifest.pages {
        let Some(fname) = page_filename(&entry.href) else {
            continue;
        };
        // Listed but absent pages drop out of the manifest, nothing else
        let page_path = dir.join(&fname);
        if !page_path.exists() {
            continue;
        }

        let raw = read_lossy(&page_path)?;

        let title = extract::extract_title(&raw)
            .filter(|t| !t.is_empty())
            .or_else(|| entry.title.clone().filter(|t| !t.is_empty()))
            .unwrap_or_else(|| fname.clone());
        let meta_desc = extract::extract_description(&raw);

        let (date, id) = ids.assign(&fname);
        let category = classify(entry.tags());
        let description = resolve_description(entry, meta_desc.as_deref(), &title);

        let summary_lines = [description.clone()];
        let body_inner = extract::sanitize_fragment(extract::extract_body(&raw));

        let html = render_page(&PageFields {
            title: &title,
            date,
            tags: entry.tags(),
            summary_lines: &summary_lines,
            body_inner: &body_inner,
            repo_url: &repo_url,
        });
        fs::write(&page_path, html)
            .with_context(|| format!("Failed to write {}", page_path.display()))?;

        rebuilt.push(PageRecord {
            id,
            title,
            description,
            category,
            date,
            href: fname,
        });
    }

    let index_path = dir.join(INDEX_FILE);
    fs::write(&index_path, render_index(&manifest.site, &repo_url))
        .with_context(|| format!("Failed to write {}", index_path.display()))?;
    manifest::write_pages_json(&manifest_path, &manifest.site, &rebuilt)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;
    println!("✓ Wrote {} and {}", INDEX_FILE, MANIFEST_FILE);

    println!("rebuilt: pages={}", rebuilt.len());
    Ok(())
}

/// Strip `./` from a manifest href and reject entries that are not report
/// pages (the listing itself and non-HTML assets)
fn page_filename(href: &str) -> Option<String> {
    let fname = href.replace("./", "");
    if fname == "index.html" || !fname.ends_with(".html") {
        return None;
    }
    Some(fname)
}

/// Read a page whole, replacing invalid UTF-8 instead of failing
fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Choose the record description: manifest `desc`/`description` first, then
/// the page's own meta description. A whitespace-only or stale placeholder
/// result gives way to the meta description, then the title.
fn resolve_description(entry: &PageEntry, meta_desc: Option<&str>, title: &str) -> String {
    let meta = meta_desc.filter(|d| !d.is_empty());
    let chosen = entry
        .desc
        .as_deref()
        .filter(|d| !d.is_empty())
        .or_else(|| entry.description.as_deref().filter(|d| !d.is_empty()))
        .or(meta)
        .unwrap_or("");

    let collapsed = extract::collapse_whitespace(chosen);
    if collapsed.is_empty() || collapsed == STALE_DESCRIPTION {
        meta.map(str::to_string).unwrap_or_else(|| title.to_string())
    } else {
        collapsed
    }
}
