//! Rich-text to plain-text conversion for guide bodies.
//!
//! Guide bodies are authored in a WYSIWYG editor and stored as HTML. Discord fields only
//! render plain text, so markup is flattened here: block elements and `<br>` become line
//! breaks, list items get a `- ` bullet, links keep only their visible text and entities are
//! decoded.

/// Elements that start a new line both when opened and when closed.
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "blockquote",
    "div",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tr",
    "ul",
];

/// Elements whose content is never displayed.
const HIDDEN_TAGS: &[&str] = &["script", "style"];

/// Converts an HTML guide body into paragraphs, one per output line.
///
/// Empty lines are kept; callers decide whether to drop them.
pub fn to_paragraphs(html: &str) -> Vec<String> {
    html_to_text(html).split('\n').map(str::to_string).collect()
}

/// Converts HTML into plain text with `\n` line breaks.
pub fn html_to_text(html: &str) -> String {
    let mut raw = String::with_capacity(html.len());
    let mut chunk = String::new();
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        chunk.push_str(&rest[..open]);
        let after = &rest[open..];

        if let Some(comment) = after.strip_prefix("<!--") {
            flush_text(&mut chunk, &mut raw);
            rest = match comment.find("-->") {
                Some(end) => &comment[end + 3..],
                None => "",
            };
            continue;
        }

        if !starts_tag(&after[1..]) {
            chunk.push('<');
            rest = &after[1..];
            continue;
        }

        let Some(close) = tag_end(after).or_else(|| after.find('>')) else {
            // Unterminated tag; keep the remainder as text.
            chunk.push_str(after);
            rest = "";
            break;
        };

        let tag = Tag::parse(&after[1..close]);
        rest = &after[close + 1..];

        let Some(tag) = tag else {
            chunk.push_str(&after[..=close]);
            continue;
        };

        flush_text(&mut chunk, &mut raw);

        if !tag.closing && HIDDEN_TAGS.contains(&tag.name.as_str()) {
            rest = skip_hidden(rest, &tag.name);
            continue;
        }

        match tag.name.as_str() {
            "br" => raw.push('\n'),
            "li" if !tag.closing => raw.push_str("\n- "),
            "li" => raw.push('\n'),
            name if BLOCK_TAGS.contains(&name) => raw.push('\n'),
            _ => {}
        }
    }
    chunk.push_str(rest);
    flush_text(&mut chunk, &mut raw);

    raw.split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Opening or closing tag reduced to its lowercase element name.
struct Tag {
    name: String,
    closing: bool,
}

impl Tag {
    /// Parses the text between `<` and `>`. Returns `None` for things that are not tags,
    /// such as `a < b` written without escaping.
    fn parse(inner: &str) -> Option<Self> {
        let (closing, inner) = match inner.strip_prefix('/') {
            Some(stripped) => (true, stripped),
            None => (false, inner),
        };
        let inner = inner.strip_prefix('!').unwrap_or(inner);

        let name: String = inner
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        if name.is_empty() || !inner.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }

        Some(Self { name, closing })
    }
}

/// Appends decoded text to `out`. Source line breaks and tabs are layout only in HTML, so
/// they become spaces.
fn flush_text(chunk: &mut String, out: &mut String) {
    if chunk.is_empty() {
        return;
    }

    let decoded = decode_entities(chunk);
    out.extend(decoded.chars().map(|c| match c {
        '\n' | '\r' | '\t' => ' ',
        c => c,
    }));
    chunk.clear();
}

/// Longest entity reference looked for after an `&`, semicolon included.
const MAX_ENTITY_LEN: usize = 32;

/// Decodes each `&...;` reference on its own. An `&` that does not start a known entity is
/// kept as written.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp..];

        let decoded = after[1..]
            .char_indices()
            .take(MAX_ENTITY_LEN)
            .find(|&(_, c)| c == ';' || c == '&' || c.is_whitespace())
            .filter(|&(i, c)| c == ';' && i > 0)
            .and_then(|(i, _)| {
                let end = i + 1;
                htmlescape::decode_html(&after[..=end])
                    .ok()
                    .map(|value| (end, value))
            });

        match decoded {
            Some((end, value)) => {
                out.push_str(&value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('&');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Whether the text after a `<` begins an element or closing tag rather than plain text.
fn starts_tag(text: &str) -> bool {
    let text = text
        .strip_prefix('/')
        .or_else(|| text.strip_prefix('!'))
        .unwrap_or(text);
    text.starts_with(|c: char| c.is_ascii_alphabetic())
}

/// Finds the `>` closing the tag that starts at `text`, skipping quoted attribute values.
fn tag_end(text: &str) -> Option<usize> {
    let mut quote = None;

    for (i, c) in text.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(i),
            (None, _) => {}
        }
    }
    None
}

/// Skips past the closing tag of a hidden element, returning the remaining input.
fn skip_hidden<'a>(rest: &'a str, name: &str) -> &'a str {
    let needle = format!("</{name}");
    let lowered = rest.to_ascii_lowercase();

    match lowered.find(&needle) {
        Some(start) => match rest[start..].find('>') {
            Some(end) => &rest[start + end + 1..],
            None => "",
        },
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_become_lines() {
        let paragraphs = to_paragraphs("<p>First</p><p>Second</p>");

        assert_eq!(paragraphs, vec!["", "First", "", "Second", ""]);
    }

    #[test]
    fn line_breaks_split_paragraphs() {
        assert_eq!(
            to_paragraphs("one<br>two<br/>three<BR />four"),
            vec!["one", "two", "three", "four"]
        );
    }

    #[test]
    fn consecutive_breaks_keep_empty_segments() {
        assert_eq!(to_paragraphs("a<br><br><br>b"), vec!["a", "", "", "b"]);
    }

    #[test]
    fn links_render_visible_text_only() {
        let text = html_to_text(
            r#"Read <a href="https://randomdice.gg/wiki/dice">the wiki</a> first"#,
        );

        assert_eq!(text, "Read the wiki first");
        assert!(!text.contains("randomdice.gg"));
    }

    #[test]
    fn inline_markup_is_stripped() {
        assert_eq!(
            html_to_text("<strong>Bold</strong> and <em>italic</em> <span style=\"x\">text</span>"),
            "Bold and italic text"
        );
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            html_to_text("Crit &amp; Solar &lt;3 &quot;meta&quot;"),
            "Crit & Solar <3 \"meta\""
        );
    }

    #[test]
    fn bare_ampersand_does_not_block_other_entities() {
        assert_eq!(html_to_text("Solar & Crit &gt; Joker"), "Solar & Crit > Joker");
        assert_eq!(
            html_to_text("<p>AT&T &quot;meta&quot;</p>"),
            "\nAT&T \"meta\"\n"
        );
    }

    #[test]
    fn unknown_entity_is_kept_as_written() {
        assert_eq!(html_to_text("&bogus; &amp;&#39;"), "&bogus; &'");
    }

    #[test]
    fn quoted_attribute_may_contain_angle_bracket() {
        assert_eq!(
            html_to_text(r#"<a href="x?a>b">link</a> after"#),
            "link after"
        );
        assert_eq!(
            html_to_text("<a title='1 > 0'>Joker</a>"),
            "Joker"
        );
    }

    #[test]
    fn unescaped_less_than_stays_text() {
        assert_eq!(
            html_to_text("<p>I <3 Solar's combo</p>"),
            "\nI <3 Solar's combo\n"
        );
    }

    #[test]
    fn escaped_markup_stays_text() {
        assert_eq!(html_to_text("&lt;p&gt;not a tag&lt;/p&gt;"), "<p>not a tag</p>");
    }

    #[test]
    fn list_items_are_bulleted() {
        assert_eq!(
            to_paragraphs("<ul><li>Solar</li><li>Crit</li></ul>"),
            vec!["", "", "- Solar", "", "- Crit", "", ""]
        );
    }

    #[test]
    fn source_newlines_collapse_to_spaces() {
        assert_eq!(html_to_text("<p>Place\n   Solar\tfirst</p>"), "\nPlace Solar first\n");
    }

    #[test]
    fn scripts_and_comments_are_dropped() {
        assert_eq!(
            html_to_text("a<script>alert('x')</script>b<!-- note -->c<style>p{}</style>d"),
            "abcd"
        );
    }

    #[test]
    fn stray_angle_bracket_is_kept() {
        assert_eq!(html_to_text("1 < 2 and 3 > 2"), "1 < 2 and 3 > 2");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(to_paragraphs("no markup here"), vec!["no markup here"]);
    }
}
