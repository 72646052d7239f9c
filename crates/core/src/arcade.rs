//! Arcade iframe unwrapping.
//!
//! The target platform embeds Arcade demos from a bare share link, so
//! `<iframe>` tags pointing at `app.arcade.software` collapse back to the
//! URL itself.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::rewrite::Rewrite;

static ARCADE_IFRAME: LazyLock<Regex> = LazyLock::new(|| {
    // Opening tag must carry an app.arcade.software src; the body is
    // non-greedy and may span lines. Anchored to whole lines.
    Regex::new(
        r#"(?ms)^([ \t]*)<iframe\b[^>]*?\ssrc=["'](https?://app\.arcade\.software/[^"']*)["'].*?</iframe>[ \t]*$"#,
    )
    .unwrap()
});

/// Replaces Arcade iframes with their bare share URL, preserving the
/// original leading indentation. The count is reported as `arcade`.
pub fn unwrap_arcade_iframes(input: &str) -> Rewrite {
    let mut arcade = 0usize;
    let text = ARCADE_IFRAME
        .replace_all(input, |caps: &Captures<'_>| {
            arcade += 1;
            format!("{}{}", &caps[1], &caps[2])
        })
        .into_owned();

    Rewrite {
        text,
        counts: vec![("arcade", arcade)],
    }
}
