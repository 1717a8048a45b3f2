//! Self-contained HTML page for the dashboard.
//!
//! Charts are inlined as SVG so the page works offline with no assets.

use crate::utils::constants::PAGE_TITLE;

/// One numbered dashboard section.
#[derive(Debug, Clone)]
pub struct ChartSection {
    pub heading: String,
    pub svg: String,
}

/// Minimal escaping for text placed inside elements and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_dashboard_page(
    title: &str,
    author: &str,
    caption: &str,
    sections: &[ChartSection],
    conclusion: &str,
) -> String {
    let body = format!(
        r#"{header}
        <p class="caption">{caption}</p>
        <hr>
        {sections}
        <div class="success">{conclusion}</div>"#,
        header = render_header(title, author),
        caption = escape_html(caption),
        sections = sections.iter().map(render_section).collect::<Vec<_>>().join("\n"),
        conclusion = escape_html(conclusion),
    );
    render_page(&body)
}

/// Page shown instead of the charts when the dataset cannot be loaded.
pub fn render_error_page(title: &str, author: &str, message: &str, hint: &str) -> String {
    let body = format!(
        r#"{header}
        <div class="error">{message}</div>
        <div class="warning">{hint}</div>"#,
        header = render_header(title, author),
        message = escape_html(message),
        hint = escape_html(hint),
    );
    render_page(&body)
}

fn render_header(title: &str, author: &str) -> String {
    format!(
        r#"<h1>{}</h1>
        <p class="author">Developed by <strong>{}</strong></p>"#,
        escape_html(title),
        escape_html(author)
    )
}

fn render_section(section: &ChartSection) -> String {
    format!(
        r#"<section>
            <h2>{}</h2>
            <div class="chart">{}</div>
        </section>"#,
        escape_html(&section.heading),
        section.svg
    )
}

fn render_page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{page_title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {body}
    </div>
</body>
</html>
"#,
        page_title = escape_html(PAGE_TITLE),
        css = inline_css(),
        body = body,
    )
}

fn inline_css() -> &'static str {
    r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; background: #fafafa; color: #262730; }
.container { max-width: 1200px; margin: 0 auto; padding: 2rem 3rem; }
h1 { font-size: 2.4rem; margin-bottom: 0.25rem; }
h2 { font-size: 1.6rem; margin-top: 2.5rem; }
.author { margin-top: 0; }
.caption { color: #808495; font-size: 0.9rem; }
hr { border: none; border-top: 1px solid #e6e6e6; margin: 1.5rem 0; }
.chart svg { max-width: 100%; height: auto; background: #fff; }
.success, .error, .warning { border-radius: 0.5rem; padding: 1rem; margin-top: 1.5rem; }
.success { background: #dff5e3; color: #177233; }
.error { background: #ffe2e0; color: #7d353b; }
.warning { background: #fff8d6; color: #926c05; }
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"PM2.5" & 'CO'</b>"#),
            "&lt;b&gt;&quot;PM2.5&quot; &amp; &#39;CO&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_sections_keep_order() {
        let sections = vec![
            ChartSection {
                heading: "1. First".to_string(),
                svg: "<svg id=\"a\"></svg>".to_string(),
            },
            ChartSection {
                heading: "2. Second".to_string(),
                svg: "<svg id=\"b\"></svg>".to_string(),
            },
        ];

        let page = render_dashboard_page("Title", "Author", "2 observations", &sections, "Done.");

        let first = page.find("1. First").unwrap();
        let second = page.find("2. Second").unwrap();
        let divider = page.find("<hr>").unwrap();
        assert!(divider < first && first < second);
        assert!(page.find("Done.").unwrap() > second);
        assert!(page.contains("<svg id=\"a\"></svg>"));
    }

    #[test]
    fn test_error_page_has_banner_and_hint() {
        let page = render_error_page("Title", "Author", "Error loading data: boom", "Check the file");

        assert!(page.contains(r#"<div class="error">Error loading data: boom</div>"#));
        assert!(page.contains(r#"<div class="warning">Check the file</div>"#));
        assert!(!page.contains("<section>"));
    }
}
