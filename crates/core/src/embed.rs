//! Embed directive rewriting.
//!
//! Converts GitBook `{% embed %}` directives into `<iframe>` tags. Block
//! directives carry a caption either in a `caption` attribute or as inline
//! content between the start and end markers; bare start markers embed with
//! a fallback title.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::attrs::parse_attrs;
use crate::escape::escape_attr;
use crate::rewrite::Rewrite;

static EMBED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    // Start marker, non-greedy inner content, end marker; may span lines.
    Regex::new(r"(?ms)^([ \t]*)\{%\s*embed\b(.*?)%\}(.*?)\{%\s*endembed\s*%\}").unwrap()
});

static EMBED_SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    // Start marker alone on its line; whatever the block pass left behind.
    Regex::new(r"(?m)^([ \t]*)\{%\s*embed\b(.*?)%\}[ \t]*$").unwrap()
});

/// Title used when neither a caption nor inline content is present.
const FALLBACK_TITLE: &str = "Embedded content";

/// Rewrites embed directives to iframe tags.
///
/// Runs two passes: block directives (`{% embed %}...{% endembed %}`) first,
/// then start markers left without an end marker. Directives without a `url`
/// attribute are left untouched. Counts are reported as `blocks` and
/// `singles`.
pub fn rewrite_embeds(input: &str) -> Rewrite {
    let mut blocks = 0usize;
    let text = EMBED_BLOCK.replace_all(input, |caps: &Captures<'_>| {
        match build_iframe(&caps[1], &caps[2], &caps[3]) {
            Some(tag) => {
                blocks += 1;
                tag
            }
            None => caps[0].to_string(),
        }
    });

    let mut singles = 0usize;
    let text = EMBED_SINGLE
        .replace_all(&text, |caps: &Captures<'_>| {
            match build_iframe(&caps[1], &caps[2], "") {
                Some(tag) => {
                    singles += 1;
                    tag
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned();

    Rewrite {
        text,
        counts: vec![("blocks", blocks), ("singles", singles)],
    }
}

/// Builds the replacement iframe line, or `None` when the directive has no
/// `url` attribute and must be left as-is.
fn build_iframe(indent: &str, raw_attrs: &str, body: &str) -> Option<String> {
    let attrs = parse_attrs(raw_attrs);
    let url = attrs.get("url")?.trim();
    let caption = attrs.get("caption").map_or("", |value| value.trim());
    let body = body.trim();

    // Title resolution: caption attribute > inline content > fallback.
    let title = if !caption.is_empty() {
        caption
    } else if !body.is_empty() {
        body
    } else {
        FALLBACK_TITLE
    };

    Some(format!(
        "{indent}<iframe src=\"{}\" title=\"{}\" width=\"100%\" height=\"420\" frameborder=\"0\" allowfullscreen></iframe>",
        escape_attr(url),
        escape_attr(title),
    ))
}
