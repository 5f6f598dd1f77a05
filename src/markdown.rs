//! Issue Body Markdown
//!
//! Renders contribution issue bodies with pulldown-cmark:
//! - Raw HTML is shown as text, never injected
//! - Links and images only keep http(s)/mailto targets
//! - Fenced code is highlighted with syntect

use pulldown_cmark_escape::escape_html;
use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

pub const EMPTY_BODY: &str = "(no description)";

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme(dark: bool) -> Option<&'static Theme> {
    let name = if dark { "base16-ocean.dark" } else { "InspiredGitHub" };
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(name)
}

/// HTML for an issue body; blank or missing bodies get a placeholder
pub fn render_issue_body(body: Option<&str>, dark: bool) -> String {
    match body.map(str::trim).filter(|b| !b.is_empty()) {
        Some(text) => parse_markdown(text, dark),
        None => format!("<p class=\"muted\">{}</p>", EMPTY_BODY),
    }
}

pub fn parse_markdown(text: &str, dark: bool) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS;
    let events = transform_events(Parser::new_ext(text, options), dark);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

fn transform_events<'a>(parser: Parser<'a>, dark: bool) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                // push_html escapes Text, so raw markup ends up visible
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                    events.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url: safe_url(dest_url),
                        title,
                        id,
                    }));
                }
                Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
                    events.push(Event::Start(Tag::Image {
                        link_type,
                        dest_url: safe_url(dest_url),
                        title,
                        id,
                    }));
                }
                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref(), dark);
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lower = url.trim().to_lowercase();
    let allowed = ["https://", "http://", "mailto:", "#"]
        .iter()
        .any(|prefix| lower.starts_with(prefix));
    if allowed {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

fn highlight_code(code: &str, lang: Option<&str>, dark: bool) -> String {
    let ss = get_syntax_set();
    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    get_theme(dark)
        .and_then(|theme| highlighted_html_for_string(code, ss, syntax, theme).ok())
        .unwrap_or_else(|| plain_code_block(code))
}

fn plain_code_block(code: &str) -> String {
    let mut html = String::from("<pre><code>");
    let _ = escape_html(&mut html, code);
    html.push_str("</code></pre>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_body_placeholder() {
        assert!(render_issue_body(None, false).contains(EMPTY_BODY));
        assert!(render_issue_body(Some("  \n "), true).contains(EMPTY_BODY));
    }

    #[test]
    fn test_basic_markdown() {
        let html = render_issue_body(Some("**Title:** Undo commit"), false);
        assert!(html.contains("<strong>Title:</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("hi <script>alert(1)</script>", false);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let html = parse_markdown("<div onclick=\"x()\">block</div>", false);
        assert!(!html.contains("<div"));
    }

    #[test]
    fn test_unsafe_links_are_neutralized() {
        let html = parse_markdown("[click](javascript:alert(1))", false);
        assert!(!html.contains("javascript:"));
        assert!(html.contains("href=\"#\""));

        let html = parse_markdown("[docs](https://example.com/a)", false);
        assert!(html.contains("href=\"https://example.com/a\""));
    }

    #[test]
    fn test_plain_code_block_escapes_markup() {
        let html = plain_code_block("a < b && \"c\" > d");
        assert_eq!(html, "<pre><code>a &lt; b &amp;&amp; &quot;c&quot; &gt; d</code></pre>");
    }

    #[test]
    fn test_fenced_code_is_highlighted() {
        let html = parse_markdown("```bash\ngit reset --soft HEAD~1\n```", true);
        assert!(html.contains("<pre"));
        assert!(html.contains("reset"));
        assert!(!html.contains("```"));
    }
}
