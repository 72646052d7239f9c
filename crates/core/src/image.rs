//! Figure unwrapping and image tag normalization.
//!
//! Figure blocks collapse to their image tag, promoting the figcaption text
//! into the image's alt attribute; every image tag is then re-emitted in a
//! canonical `<img ... alt="..." />` form.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape_attr;
use crate::rewrite::Rewrite;

static FIGURE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^([ \t]*)<figure\b[^>]*>(.*?)</figure>").unwrap());

static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<img\b([^>]*)>").unwrap());

static FIGCAPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<figcaption\b[^>]*>(.*?)</figcaption>").unwrap());

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static ALT_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    // The leading whitespace requirement keeps data-alt and friends out.
    Regex::new(r#"(?:^|\s)alt\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Normalizes image markup in two ordered passes.
///
/// Pass 1 unwraps `<figure>` blocks: the block is replaced by its first
/// image tag, normalized with the tag-stripped figcaption text as fallback
/// alt, at the figure's original indentation. Blocks without an image are
/// left untouched. Pass 2 normalizes every remaining image tag with an
/// empty fallback; a tag is counted only when the re-emitted string
/// differs from the original. Counts are reported as `figures` and
/// `images`.
pub fn normalize_images(input: &str) -> Rewrite {
    let mut figures = 0usize;
    let text = FIGURE_BLOCK.replace_all(input, |caps: &Captures<'_>| {
        let body = &caps[2];
        let Some(img) = IMG_TAG.captures(body) else {
            return caps[0].to_string();
        };
        let caption = FIGCAPTION
            .captures(body)
            .map(|c| HTML_TAG.replace_all(&c[1], "").trim().to_string())
            .unwrap_or_default();
        figures += 1;
        format!("{}{}", &caps[1], normalize_img_tag(&img[1], &caption))
    });

    let mut images = 0usize;
    let text = IMG_TAG
        .replace_all(&text, |caps: &Captures<'_>| {
            let rebuilt = normalize_img_tag(&caps[1], "");
            if rebuilt == caps[0] {
                caps[0].to_string()
            } else {
                images += 1;
                rebuilt
            }
        })
        .into_owned();

    Rewrite {
        text,
        counts: vec![("figures", figures), ("images", images)],
    }
}

/// Rebuilds an image tag's attribute list around a single alt attribute.
///
/// The chosen alt is the first non-empty alt value in the tag. A non-empty
/// fallback fills in a missing alt, or is appended (space-separated) when
/// the existing alt does not already contain it, case-insensitively.
fn normalize_img_tag(raw_attrs: &str, fallback_alt: &str) -> String {
    let mut chosen: Option<String> = None;
    for caps in ALT_ATTR.captures_iter(raw_attrs) {
        let value = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str())
            .trim();
        if chosen.is_none() && !value.is_empty() {
            chosen = Some(value.to_string());
        }
    }

    let fallback = fallback_alt.trim();
    if !fallback.is_empty() {
        chosen = Some(match chosen {
            None => fallback.to_string(),
            Some(alt) if alt.to_lowercase().contains(&fallback.to_lowercase()) => alt,
            Some(alt) => format!("{alt} {fallback}"),
        });
    }

    let rest = ALT_ATTR.replace_all(raw_attrs, " ");
    let rest = rest.trim();
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    let rest = rest.split_whitespace().collect::<Vec<_>>().join(" ");

    let alt = escape_attr(chosen.as_deref().unwrap_or(""));
    if rest.is_empty() {
        format!("<img alt=\"{alt}\" />")
    } else {
        format!("<img {rest} alt=\"{alt}\" />")
    }
}
