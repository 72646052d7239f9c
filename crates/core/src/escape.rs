/// Entities that must survive a second escaping pass untouched.
const ENTITIES: &[&str] = &["&amp;", "&quot;", "&lt;", "&gt;"];

/// Escapes a value for use inside a double-quoted HTML attribute.
///
/// `&`, `"`, `<` and `>` become their named entities. An ampersand that
/// already starts one of those entities is left alone, so escaping the same
/// text twice yields the same result.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for (at, ch) in value.char_indices() {
        match ch {
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' if !starts_entity(&value[at..]) => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }
    out
}

fn starts_entity(rest: &str) -> bool {
    ENTITIES.iter().any(|entity| rest.starts_with(entity))
}
