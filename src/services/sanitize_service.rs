use std::collections::HashSet;

use ammonia::Builder;

/// Sanitize rich-text page content before it is stored. The public page view
/// serves the stored bytes as-is, so nothing unclean may ever be written.
pub fn sanitize_page_html(html: &str) -> String {
    ammonia::clean(html)
}

const MARQUEE_TAGS: &[&str] = &["b", "i", "em", "strong", "u", "a", "span"];
const MARQUEE_ATTRS: &[&str] = &["href", "title", "target", "style"];

/// Sanitize the banner message with the marquee's restricted allowlist and
/// flatten it to a single line. The banner scrolls horizontally; paragraph
/// and line-break markup from the rich-text editor would break the ribbon.
pub fn sanitize_marquee_html(html: &str) -> String {
    let flattened = flatten_to_single_line(html);

    let mut builder = Builder::default();
    builder
        .tags(MARQUEE_TAGS.iter().copied().collect::<HashSet<_>>())
        .generic_attributes(MARQUEE_ATTRS.iter().copied().collect::<HashSet<_>>());

    builder.clean(&flattened).to_string()
}

fn flatten_to_single_line(html: &str) -> String {
    html.replace("</p><p>", " ")
        .replace("<p>", "")
        .replace("</p>", "")
        .replace("<br>", " ")
        .replace("<br/>", " ")
        .replace("<br />", " ")
        .replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_content_strips_scripts() {
        let clean = sanitize_page_html("<p>Hola</p><script>alert(1)</script>");
        assert!(clean.contains("<p>Hola</p>"));
        assert!(!clean.contains("script"));
    }

    #[test]
    fn test_marquee_paragraphs_become_one_line() {
        let clean = sanitize_marquee_html("<p>Envío gratis</p><p>desde $500</p>");
        assert!(!clean.contains("<p>"));
        assert!(!clean.contains('\n'));
        assert!(clean.contains("Envío gratis desde $500"));
    }

    #[test]
    fn test_marquee_keeps_inline_emphasis() {
        let clean = sanitize_marquee_html("<strong>Oferta</strong> de <em>verano</em>");
        assert!(clean.contains("<strong>Oferta</strong>"));
        assert!(clean.contains("<em>verano</em>"));
    }

    #[test]
    fn test_marquee_strips_disallowed_tags_but_keeps_text() {
        let clean = sanitize_marquee_html("<div>Rebajas</div><script>alert(1)</script>");
        assert!(!clean.contains("<div>"));
        assert!(clean.contains("Rebajas"));
        assert!(!clean.contains("alert"));
    }
}
