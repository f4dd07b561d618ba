//! Statement rendering
//!
//! Problem statements are stored as markup and shown as HTML. The judge's
//! front end may plug in a richer renderer; [`HtmlEscapeRenderer`] is the
//! safe default.

/// Turns stored statement markup into HTML
pub trait MarkupRenderer: Send + Sync {
    fn render(&self, text: &str) -> String;
}

/// Escapes HTML and keeps the paragraph structure of plain text.
///
/// Blank lines separate `<p>` paragraphs; single newlines become `<br>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscapeRenderer;

impl MarkupRenderer for HtmlEscapeRenderer {
    fn render(&self, text: &str) -> String {
        let normalized = text.replace("\r\n", "\n");

        normalized
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                let lines: Vec<String> = p.lines().map(escape_html).collect();
                format!("<p>{}</p>", lines.join("<br>\n"))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_and_line_breaks() {
        let html = HtmlEscapeRenderer.render("Read N.\nPrint N+1.\n\nN < 10");
        assert_eq!(html, "<p>Read N.<br>\nPrint N+1.</p>\n<p>N &lt; 10</p>");
    }

    #[test]
    fn test_escapes_markup() {
        let html = HtmlEscapeRenderer.render("<script>alert('x')</script> & \"q\"");
        assert_eq!(
            html,
            "<p>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &quot;q&quot;</p>"
        );
    }

    #[test]
    fn test_empty_statement() {
        assert_eq!(HtmlEscapeRenderer.render(""), "");
        assert_eq!(HtmlEscapeRenderer.render("\n\n\n"), "");
    }
}
