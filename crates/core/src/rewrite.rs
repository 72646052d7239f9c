/// Outcome of a single rewrite pass over one document.
#[derive(Debug, Clone)]
pub struct Rewrite {
    /// Rewritten text; identical to the input when nothing matched.
    pub text: String,
    /// Substitution counts keyed by a stable kind label.
    pub counts: Vec<(&'static str, usize)>,
}

impl Rewrite {
    /// Whether any substitution occurred.
    pub fn changed(&self) -> bool {
        self.counts.iter().any(|(_, count)| *count > 0)
    }

    /// Runs another pass on the rewritten text and merges its counts.
    ///
    /// The second pass sees the output of the first, so ordered pipelines
    /// (embed replacement, then Arcade unwrapping) compose from pure
    /// single-pass functions.
    pub fn and_then(mut self, pass: impl FnOnce(&str) -> Rewrite) -> Rewrite {
        let next = pass(&self.text);
        self.counts.extend(next.counts);
        Rewrite {
            text: next.text,
            counts: self.counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replace_a(input: &str) -> Rewrite {
        Rewrite {
            text: input.replace('a', "b"),
            counts: vec![("a", input.matches('a').count())],
        }
    }

    fn replace_b(input: &str) -> Rewrite {
        Rewrite {
            text: input.replace('b', "c"),
            counts: vec![("b", input.matches('b').count())],
        }
    }

    #[test]
    fn changed_requires_nonzero_count() {
        let untouched = Rewrite {
            text: "x".to_string(),
            counts: vec![("a", 0), ("b", 0)],
        };
        assert!(!untouched.changed());

        let touched = Rewrite {
            text: "y".to_string(),
            counts: vec![("a", 0), ("b", 2)],
        };
        assert!(touched.changed());
    }

    #[test]
    fn and_then_feeds_rewritten_text_forward() {
        let out = replace_a("aa").and_then(replace_b);
        assert_eq!(out.text, "cc");
        assert_eq!(out.counts, vec![("a", 2), ("b", 2)]);
    }
}
