//! Markdown rendering for article bodies.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts
}

/// Whether a link or image target is relative or uses an allowed scheme.
///
/// Browsers drop whitespace and control characters inside a URL before
/// reading its scheme, so they are ignored here too.
fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    match cleaned.find([':', '/', '?', '#']) {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Render markdown to HTML. Raw HTML in the source is escaped, and link or
/// image targets with a scheme other than http, https or mailto become `#`.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, parser_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Split a comma-separated tag field into trimmed, non-empty, unique tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading_and_emphasis() {
        let html = render_markdown("# Title\n\nSome *text*");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn test_render_escapes_raw_html() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_neutralises_script_links() {
        let html = render_markdown("[click](javascript:alert(document.cookie))");
        assert!(!html.contains("javascript:"), "{html}");
        assert!(html.contains(r##"<a href="#">click</a>"##));

        let html = render_markdown("![x](JaVaScRiPt:alert(1))");
        assert!(!html.to_ascii_lowercase().contains("javascript:"), "{html}");

        let html = render_markdown("![pixel](data:image/png;base64,AAAA)");
        assert!(!html.contains("data:"), "{html}");
    }

    #[test]
    fn test_render_keeps_safe_links() {
        let html = render_markdown(
            "[a](https://example.com/x) [b](mailto:me@example.com) [c](/article/detail/x) [d](#top)",
        );
        assert!(html.contains(r#"href="https://example.com/x""#));
        assert!(html.contains(r#"href="mailto:me@example.com""#));
        assert!(html.contains(r#"href="/article/detail/x""#));
        assert!(html.contains(r##"href="#top""##));
    }

    #[test]
    fn test_safe_url_ignores_colons_after_path() {
        assert!(is_safe_url("docs/a:b"));
        assert!(is_safe_url("?q=x:y"));
        assert!(!is_safe_url(" vbscript:msgbox(1)"));
        assert!(!is_safe_url("java\tscript:alert(1)"));
    }

    #[test]
    fn test_render_strikethrough() {
        assert!(render_markdown("~~old~~").contains("<del>old</del>"));
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" rust, wasm ,,rust, "), vec!["rust", "wasm"]);
        assert!(parse_tags("").is_empty());
    }
}
