//! HTML sanitization for oracle-returned text.
//!
//! The oracle echoes learner-controlled content back as renderable HTML, so
//! everything it returns passes through a whitelist filter before it is
//! persisted or displayed: a small set of formatting tags survives (with all
//! attributes stripped), script/style/iframe elements are removed along with
//! their contents, and every other tag is deleted while its inner text is
//! kept.

use std::sync::LazyLock;

use regex::Regex;

/// Tags allowed through the filter. Attributes are always stripped, which
/// also removes event handlers and `javascript:` URLs.
const ALLOWED_TAGS: [&str; 10] = ["p", "br", "strong", "em", "ul", "ol", "li", "b", "i", "u"];

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());

static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap());

static IFRAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<iframe\b[^>]*>.*?</iframe\s*>").unwrap());

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<\s*(/?)\s*([a-zA-Z][a-zA-Z0-9]*)\b[^>]*>").unwrap());

/// Sanitize an HTML fragment down to the allowed tag subset.
///
/// Idempotent: the filter runs to a fixpoint, so the output only contains
/// canonical lowercase tags from the whitelist and sanitizing twice returns
/// the same string.
pub fn sanitize_html(input: &str) -> String {
    // Deleting a disallowed tag splices its surroundings together, which can
    // assemble a new tag the earlier passes never saw ("<<div>script>" loses
    // the div and becomes "<script>"). Each pass only removes or
    // canonicalizes text, so iterating terminates.
    let mut current = input.to_string();
    loop {
        let next = sanitize_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn sanitize_once(input: &str) -> String {
    let without_comments = COMMENT_RE.replace_all(input, "");
    let without_scripts = SCRIPT_RE.replace_all(&without_comments, "");
    let without_styles = STYLE_RE.replace_all(&without_scripts, "");
    let without_iframes = IFRAME_RE.replace_all(&without_styles, "");

    TAG_RE
        .replace_all(&without_iframes, |caps: &regex::Captures| {
            let closing = !caps[1].is_empty();
            let name = caps[2].to_lowercase();
            if ALLOWED_TAGS.contains(&name.as_str()) {
                if closing {
                    format!("</{}>", name)
                } else {
                    format!("<{}>", name)
                }
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Sanitize plain text input: removes angle brackets, quotes, and NUL bytes,
/// then trims. Used for author-supplied names that never render as HTML.
pub fn sanitize_plain_text(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\'' | '\0'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== HTML Sanitization Tests ====================

    #[test]
    fn allowed_tags_survive() {
        let input = "<p>Keep <strong>this</strong> and <em>that</em></p>";
        assert_eq!(sanitize_html(input), input);
    }

    #[test]
    fn script_elements_are_removed_with_content() {
        let input = "before<script>alert('x')</script>after";
        assert_eq!(sanitize_html(input), "beforeafter");
    }

    #[test]
    fn iframe_elements_are_removed_with_content() {
        let input = "a<iframe src=\"https://evil.example\">inner</iframe>b";
        assert_eq!(sanitize_html(input), "ab");
    }

    #[test]
    fn attributes_are_stripped_from_allowed_tags() {
        let input = "<p onclick=\"steal()\" class=\"x\">hi</p>";
        assert_eq!(sanitize_html(input), "<p>hi</p>");
    }

    #[test]
    fn javascript_urls_disappear_with_the_anchor() {
        let input = "<a href=\"javascript:alert(1)\">click</a>";
        assert_eq!(sanitize_html(input), "click");
    }

    #[test]
    fn unknown_tags_are_dropped_but_text_kept() {
        let input = "<div><span>hello</span></div>";
        assert_eq!(sanitize_html(input), "hello");
    }

    #[test]
    fn comments_are_removed() {
        let input = "a<!-- sneaky <script> -->b";
        assert_eq!(sanitize_html(input), "ab");
    }

    #[test]
    fn tags_are_canonicalized_to_lowercase() {
        let input = "<P>Hi<BR></P>";
        assert_eq!(sanitize_html(input), "<p>Hi<br></p>");
    }

    #[test]
    fn plain_text_passes_through() {
        let input = "Fractions: 1/2 + 1/4 = 3/4";
        assert_eq!(sanitize_html(input), input);
    }

    #[test]
    fn spliced_tags_do_not_reassemble_into_script() {
        // Removing the inner div must not leave a live script element behind.
        let out = sanitize_html("<<div>script>alert(1)</<div>script>");
        assert!(!out.contains("<script"), "script survived: {:?}", out);
        assert_eq!(out, "");
    }

    #[test]
    fn nested_splice_cannot_smuggle_markup() {
        let out = sanitize_html("<scr<span>ipt>alert(1)</scr<span>ipt>");
        assert!(!out.contains('<'), "markup survived: {:?}", out);
    }

    #[test]
    fn sanitize_is_idempotent() {
        let inputs = [
            "<p>ok</p>",
            "<script>x</script><div>y</div>",
            "text with < stray bracket",
            "<UL><li onclick=x>item</li></UL>",
            "<iframe>z</iframe><b>bold</b>",
            "<<div>script>alert(1)</<div>script>",
            "<<span><span>b>text</b>",
        ];
        for input in inputs {
            let once = sanitize_html(input);
            let twice = sanitize_html(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    // ==================== Plain Text Tests ====================

    #[test]
    fn plain_text_strips_dangerous_characters() {
        assert_eq!(sanitize_plain_text("name<b>'x'\0"), "namebx");
        assert_eq!(sanitize_plain_text("plain name"), "plain name");
    }

    #[test]
    fn plain_text_trims_whitespace() {
        assert_eq!(sanitize_plain_text("  hello  "), "hello");
    }
}
