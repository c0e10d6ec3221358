use crate::{BLUE_600, BORDER, CARD, SLATE_50, SLATE_500, SLATE_800};
use report_kit_core::SiteMeta;

const INDEX_TEMPLATE: &str = r##"<!doctype html>
<html lang="ko">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{SITE_TITLE}}</title>
  <meta name="description" content="{{SITE_SUBTITLE}}" />
  <style>
    :root { --fg:{{SLATE800}}; --muted:{{SLATE500}}; --bg:{{SLATE50}}; --card:{{CARD}}; --border:{{BORDER}}; --link:{{BLUE600}}; }
    html,body { margin:0; padding:0; background:var(--bg); color:var(--fg); font-family:-apple-system,BlinkMacSystemFont,"Apple SD Gothic Neo","Noto Sans KR",Segoe UI,Roboto,Arial,sans-serif; line-height:1.55; }
    main { max-width: 980px; margin: 24px auto; padding: 0 16px; }
    a { color:var(--link); text-decoration:none; }
    a:hover { text-decoration:underline; }
    header { display:flex; justify-content:space-between; gap:16px; align-items:flex-start; }
    h1 { margin:0 0 6px; font-size: 22px; }
    .sub { margin:0; color:var(--muted); }
    .toolbar { display:flex; gap:10px; align-items:center; flex-wrap:wrap; margin-top: 14px; }
    .input { border:1px solid var(--border); border-radius:10px; padding:10px 12px; min-width:260px; font-size:0.95rem; background:#fff; }
    .pill { border:1px solid var(--border); background:#fff; padding:6px 10px; border-radius:999px; font-size:0.9rem; cursor:pointer; }
    .pill[aria-pressed="true"] { border-color:#93c5fd; background:#eff6ff; }
    .grid { display:grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap:14px; margin-top:14px; }
    .card { border:1px solid var(--border); border-radius:12px; padding:14px 16px; background:var(--card); }
    .card h2 { margin:0 0 6px; font-size:1.05rem; }
    .card p { margin:0 0 10px; color:var(--muted); }
    .meta { color:var(--muted); font-size: 13px; }
  </style>
</head>
<body>
  <main>
    <header>
      <div>
        <h1 id="siteTitle">{{SITE_TITLE}}</h1>
        <p class="sub" id="siteSubtitle">{{SITE_SUBTITLE}}</p>
      </div>
      <div class="meta" style="text-align:right;">
        <div>repo: <a id="repoLink" href="{{REPO}}">{{REPO}}</a></div>
        <div class="sub">base: <a id="baseLink" href="./">{{BASE}}</a></div>
      </div>
    </header>

    <div class="toolbar">
      <input class="input" id="q" placeholder="검색 (제목/요약/카테고리)" />
      <div id="catBar" style="display:flex; gap:8px; flex-wrap:wrap;"></div>
    </div>

    <div id="status" class="meta" style="margin-top:10px;"></div>
    <div class="grid" id="grid"></div>

    <script>
      async function boot() {
        const res = await fetch('./pages.json', {cache:'no-store'});
        const data = await res.json();
        const pages = data.pages || [];

        const q = document.getElementById('q');
        const grid = document.getElementById('grid');
        const status = document.getElementById('status');
        const catBar = document.getElementById('catBar');

        const cats = Array.from(new Set(pages.map(p => p.category).filter(Boolean)));
        const state = { cat: 'ALL', q: '' };

        function mkPill(label, value) {
          const b = document.createElement('button');
          b.className = 'pill';
          b.textContent = label;
          b.dataset.value = value;
          b.setAttribute('aria-pressed', value === state.cat ? 'true' : 'false');
          b.onclick = () => {
            state.cat = value;
            render();
            for (const el of catBar.querySelectorAll('button')) {
              el.setAttribute('aria-pressed', el.dataset.value === state.cat ? 'true' : 'false');
            }
          };
          return b;
        }

        catBar.appendChild(mkPill('ALL', 'ALL'));
        for (const c of cats) catBar.appendChild(mkPill(c, c));

        q.oninput = () => { state.q = q.value.trim().toLowerCase(); render(); };

        function render() {
          grid.innerHTML = '';
          let filtered = pages;
          if (state.cat !== 'ALL') filtered = filtered.filter(p => p.category === state.cat);
          if (state.q) {
            filtered = filtered.filter(p => {
              const hay = `${p.title||''} ${p.description||''} ${p.category||''} ${p.date||''} ${p.id||''}`.toLowerCase();
              return hay.includes(state.q);
            });
          }
          status.textContent = `${filtered.length} / ${pages.length} 보고서`;
          for (const p of filtered) {
            const card = document.createElement('div');
            card.className = 'card';
            const h2 = document.createElement('h2');
            const a = document.createElement('a');
            a.href = `./${p.href}`;
            a.textContent = p.title;
            h2.appendChild(a);
            const desc = document.createElement('p');
            desc.textContent = p.description || '';
            const meta = document.createElement('div');
            meta.className = 'meta';
            meta.textContent = `${p.category || ''} · ${p.date || ''} · ${p.id || ''}`;
            card.appendChild(h2);
            card.appendChild(desc);
            card.appendChild(meta);
            grid.appendChild(card);
          }
        }

        render();
      }
      boot();
    </script>
  </main>
</body>
</html>
"##;

/// Header fallbacks for keys the manifest's site block leaves out
const DEFAULT_TITLE: &str = "OpenClaw Reports";
const DEFAULT_SUBTITLE: &str = "리포트 목록";
const DEFAULT_BASE: &str = "./";

/// Render the listing page.
///
/// The document is static apart from the header fields. Report cards and
/// category pills are built client-side from pages.json, so the listing
/// always reflects the manifest it ships with.
pub fn render_index(site: &SiteMeta, repo_url: &str) -> String {
    INDEX_TEMPLATE
        .replace(
            "{{SITE_TITLE}}",
            site.title.as_deref().unwrap_or(DEFAULT_TITLE),
        )
        .replace(
            "{{SITE_SUBTITLE}}",
            site.subtitle.as_deref().unwrap_or(DEFAULT_SUBTITLE),
        )
        .replace("{{REPO}}", repo_url)
        .replace("{{BASE}}", site.base_url.as_deref().unwrap_or(DEFAULT_BASE))
        .replace("{{SLATE50}}", SLATE_50)
        .replace("{{SLATE800}}", SLATE_800)
        .replace("{{SLATE500}}", SLATE_500)
        .replace("{{BLUE600}}", BLUE_600)
        .replace("{{BORDER}}", BORDER)
        .replace("{{CARD}}", CARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_index_defaults() {
        let html = render_index(
            &SiteMeta::default(),
            "https://github.com/samdasuu/openclaw-pages",
        );

        assert!(html.contains(r#"<h1 id="siteTitle">OpenClaw Reports</h1>"#));
        assert!(html.contains(r#"<p class="sub" id="siteSubtitle">리포트 목록</p>"#));
        assert!(html.contains(r#"href="https://github.com/samdasuu/openclaw-pages""#));
        assert!(html.contains(r#"<a id="baseLink" href="./">./</a>"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_render_index_site_values_override_defaults() {
        let site = SiteMeta {
            title: Some("Field Reports".to_string()),
            subtitle: Some("싱가포르 기록".to_string()),
            repo: Some("https://github.com/samdasuu/field-reports".to_string()),
            base_url: Some("/reports/".to_string()),
            ..SiteMeta::default()
        };
        let html = render_index(&site, "https://github.com/samdasuu/field-reports");

        assert!(html.contains(r#"<h1 id="siteTitle">Field Reports</h1>"#));
        assert!(html.contains("싱가포르 기록"));
        assert!(html.contains(r#"<a id="baseLink" href="./">/reports/</a>"#));
        assert!(!html.contains("OpenClaw Reports"));
    }

    #[test]
    fn test_render_index_explicit_empty_title_passes_through() {
        let site = SiteMeta {
            title: Some(String::new()),
            ..SiteMeta::default()
        };
        let html = render_index(&site, "https://example.com/repo");

        assert!(html.contains(r#"<h1 id="siteTitle"></h1>"#));
        assert!(!html.contains("OpenClaw Reports"));
    }

    #[test]
    fn test_render_index_carries_filter_script() {
        let html = render_index(&SiteMeta::default(), "https://example.com/repo");

        assert!(html.contains("fetch('./pages.json', {cache:'no-store'})"));
        assert!(html.contains(r#"placeholder="검색 (제목/요약/카테고리)""#));
        assert!(html.contains("mkPill('ALL', 'ALL')"));
        assert!(html.contains("aria-pressed"));
        assert!(html.contains("보고서"));
    }
}
