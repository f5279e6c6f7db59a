//! Styled HTML rendering of the generated article.
//!
//! Markdown-to-document conversion with a fixed visual theme. Pure
//! presentation: nothing here makes decisions about content.

use pulldown_cmark::{Options, Parser, html};

/// Convert the article markdown into a standalone styled HTML document.
pub fn render_styled_html(markdown_text: &str, run_date: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown_text, options);
    let mut body = String::new();
    html::push_html(&mut body, parser);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>AI Daily Digest — {run_date}</title>
    <style>
        body {{
            font-family: 'Segoe UI', sans-serif;
            margin: 2rem auto;
            max-width: 800px;
            padding: 1rem;
            background-color: #f9f9f9;
            color: #333;
        }}
        h1, h2, h3 {{
            color: #2b2b2b;
        }}
        a {{
            color: #007acc;
            text-decoration: none;
        }}
        a:hover {{
            text-decoration: underline;
        }}
        blockquote {{
            background-color: #f0f0f0;
            border-left: 4px solid #ccc;
            margin: 1em 0;
            padding: 0.5em 1em;
            font-style: italic;
        }}
        code {{
            background-color: #eee;
            padding: 2px 4px;
            border-radius: 3px;
        }}
        pre {{
            background: #272822;
            color: #f8f8f2;
            padding: 1em;
            border-radius: 5px;
            overflow-x: auto;
        }}
    </style>
</head>
<body>
{body}</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_are_converted() {
        let html = render_styled_html("# Title\n\nbody text", "2025-08-06");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>body text</p>"));
    }

    #[test]
    fn test_document_carries_run_date_title() {
        let html = render_styled_html("hello", "2025-08-06");
        assert!(html.contains("<title>AI Daily Digest — 2025-08-06</title>"));
    }

    #[test]
    fn test_tables_extension_enabled() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |";
        let html = render_styled_html(md, "2025-08-06");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_fenced_code_is_rendered() {
        let md = "```\nlet x = 1;\n```";
        let html = render_styled_html(md, "2025-08-06");
        assert!(html.contains("<pre><code>"));
    }

    #[test]
    fn test_output_is_a_full_document() {
        let html = render_styled_html("x", "2025-08-06");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
    }
}
