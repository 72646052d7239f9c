//! Hint directive rewriting.
//!
//! Converts GitBook `{% hint %}` / `{% endhint %}` markers into `<Note>` /
//! `</Note>` tags. The two passes are independent: unbalanced markers are
//! rewritten as-is without validation.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::rewrite::Rewrite;

static HINT_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    // The style attribute (or anything else before the closing marker) is
    // discarded.
    Regex::new(r"(?m)^([ \t]*)\{%\s*hint\b(.*?)%\}[ \t]*$").unwrap()
});

static HINT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([ \t]*)\{%\s*endhint\s*%\}[ \t]*$").unwrap());

/// Rewrites hint markers to Note tags, preserving leading indentation.
/// Counts are reported as `hints` and `endhints`.
pub fn rewrite_hints(input: &str) -> Rewrite {
    let mut hints = 0usize;
    let text = HINT_OPEN.replace_all(input, |caps: &Captures<'_>| {
        hints += 1;
        format!("{}<Note>", &caps[1])
    });

    let mut endhints = 0usize;
    let text = HINT_CLOSE
        .replace_all(&text, |caps: &Captures<'_>| {
            endhints += 1;
            format!("{}</Note>", &caps[1])
        })
        .into_owned();

    Rewrite {
        text,
        counts: vec![("hints", hints), ("endhints", endhints)],
    }
}
