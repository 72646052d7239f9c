use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static ATTR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // key="value" or key='value'; values may be empty
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Parses a directive attribute list into a key/value map.
///
/// Pairs are scanned left to right; when a key repeats, the last occurrence
/// wins. Anything that is not a quoted `key="value"` pair is ignored.
pub fn parse_attrs(raw: &str) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    for caps in ATTR_PATTERN.captures_iter(raw) {
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());
        attrs.insert(caps[1].to_string(), value.to_string());
    }
    attrs
}
