use crate::{BLUE_600, BORDER, CARD, SLATE_50, SLATE_500, SLATE_800};
use chrono::NaiveDate;

const PAGE_TEMPLATE: &str = r##"<!doctype html>
<html lang="ko">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{TITLE}}</title>
  <meta name="description" content="{{DESCRIPTION}}" />
  <style>
    :root {
      --bg: {{SLATE50}};
      --card: {{CARD}};
      --fg: {{SLATE800}};
      --muted: {{SLATE500}};
      --border: {{BORDER}};
      --accent: {{BLUE600}};
      --maxw: 900px;
    }
    html,body { margin:0; padding:0; background:var(--bg); color:var(--fg); font-family:-apple-system,BlinkMacSystemFont,"Apple SD Gothic Neo","Noto Sans KR",Segoe UI,Roboto,Arial,sans-serif; line-height:1.65; }
    a { color: var(--accent); text-decoration:none; }
    a:hover { text-decoration:underline; }
    main { max-width: var(--maxw); margin: 24px auto; padding: 0 16px; }
    .card { background: var(--card); border:1px solid var(--border); border-radius: 14px; padding: 16px 18px; }
    header.card { display:flex; align-items:flex-start; justify-content:space-between; gap:14px; }
    .back { display:inline-block; padding:8px 10px; border:1px solid var(--border); border-radius: 10px; background:#fff; font-size: 14px; }
    h1 { margin: 0 0 4px; font-size: 22px; }
    .meta { color: var(--muted); font-size: 13px; }
    .tags { margin-top: 10px; display:flex; gap:6px; flex-wrap:wrap; }
    .tag { border:1px solid var(--border); background:#fff; border-radius: 999px; padding:2px 9px; font-size: 12px; color: var(--muted); }

    .summary { margin-top: 14px; }
    .summary .card { border-left: 4px solid var(--accent); }
    .summary p { margin: 6px 0; }

    .content { margin-top: 14px; }
    .content h2 { margin: 22px 0 10px; padding-top: 14px; border-top:1px solid var(--border); font-size: 18px; }
    .content h3 { margin: 16px 0 8px; font-size: 15px; }

    .code { margin-top: 14px; }
    pre, code { font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", monospace; }
    pre { margin:0; background:#0b1020; color:#e5e7eb; border-radius: 12px; padding: 14px; overflow-x:auto; border:1px solid #111827; }

    footer.card { margin-top: 14px; color: var(--muted); font-size: 13px; }
  </style>
</head>
<body>
  <main>
    <header class="card">
      <div>
        <a class="back" href="./">← 목록으로</a>
      </div>
      <div style="flex:1">
        <h1>{{TITLE}}</h1>
        <div class="meta">작성일: {{DATE}}</div>
        <div class="tags">{{TAGS}}</div>
      </div>
    </header>

    <section class="summary">
      <div class="card">
        <strong>요약</strong>
        {{SUMMARY}}
      </div>
    </section>

    <section class="content">
      <div class="card">
        <h2>본문</h2>
        {{BODY}}
      </div>
    </section>

    <section class="code">
      <div class="card">
        <h2>Code / Data</h2>
        <pre><code><!-- 필요 시 프롬프트/명령/데이터를 여기에 추가 --></code></pre>
      </div>
    </section>

    <footer class="card">
      <div>Project: OpenClaw Pages</div>
      <div>Repo: <a href="{{REPO}}" target="_blank" rel="noreferrer">{{REPO}}</a></div>
    </footer>
  </main>
</body>
</html>
"##;

/// Field set substituted into the report page template
pub struct PageFields<'a> {
    pub title: &'a str,
    pub date: NaiveDate,
    pub tags: &'a [String],
    pub summary_lines: &'a [String],
    pub body_inner: &'a str,
    pub repo_url: &'a str,
}

/// Render one complete report page document.
///
/// Pure string assembly: build the tag and summary fragments, then run the
/// placeholder substitutions in a fixed order. Substitution is literal and
/// escape-free, and the caller owns the file write.
pub fn render_page(fields: &PageFields) -> String {
    let tags_html: String = fields
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, tag))
        .collect();

    let mut summary_html: String = fields
        .summary_lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("<p>{}</p>", line))
        .collect();
    if summary_html.is_empty() {
        summary_html = "<p>요약을 준비 중입니다.</p>".to_string();
    }

    // The meta description mirrors the title; the resolved description only
    // feeds the summary block.
    PAGE_TEMPLATE
        .replace("{{TITLE}}", fields.title)
        .replace("{{DESCRIPTION}}", fields.title)
        .replace("{{DATE}}", &fields.date.to_string())
        .replace("{{TAGS}}", &tags_html)
        .replace("{{SUMMARY}}", &summary_html)
        .replace("{{BODY}}", fields.body_inner)
        .replace("{{REPO}}", fields.repo_url)
        .replace("{{SLATE50}}", SLATE_50)
        .replace("{{SLATE800}}", SLATE_800)
        .replace("{{SLATE500}}", SLATE_500)
        .replace("{{BLUE600}}", BLUE_600)
        .replace("{{BORDER}}", BORDER)
        .replace("{{CARD}}", CARD)
}
