//! Locates a JSON object embedded in free-form model output.
//!
//! The scanner walks the reply once, tracking brace depth and JSON string
//! state, and yields every balanced `{ ... }` region in order. The first one
//! that parses as an object wins. A stray `{` in prose followed by a real
//! object later on therefore still finds the object.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Outcome of scanning a reply for a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// A brace-delimited region parsed as a JSON object.
    Found(Map<String, Value>),
    /// Braces were present but no region parsed (includes an unclosed `{`).
    Malformed,
    /// The reply contains no `{` at all.
    Missing,
}

pub fn extract_json_object(text: &str) -> Extraction {
    let mut saw_candidate = false;
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find('{') {
        let start = search_from + offset;
        saw_candidate = true;

        let Some(end) = balanced_end(text, start) else {
            // Nothing after this point can close either.
            break;
        };

        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&text[start..end]) {
            return Extraction::Found(map);
        }
        // Skip the whole region so a nested fragment is never picked out of it.
        search_from = end;
    }

    if saw_candidate {
        Extraction::Malformed
    } else {
        Extraction::Missing
    }
}

/// Byte index just past the `}` that closes the `{` at `start`.
fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in text.bytes().enumerate().skip(start) {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Per-field access to a parsed reply object.
///
/// `take` removes a key and returns it only if it has the expected type;
/// a mistyped value is discarded so the caller's fallback applies. Whatever
/// is never taken is returned by `into_rest` and passed through untouched.
pub struct ReplyFields {
    map: Map<String, Value>,
}

impl ReplyFields {
    pub fn new(map: Map<String, Value>) -> Self {
        Self { map }
    }

    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        self.map
            .remove(key)
            .and_then(|value| serde_json::from_value(value).ok())
    }

    /// Removes an array field and keeps only the items `parse` accepts.
    /// Returns `None` when the key is absent or not an array.
    pub fn take_items<T>(&mut self, key: &str, parse: impl Fn(Value) -> Option<T>) -> Option<Vec<T>> {
        match self.map.remove(key) {
            Some(Value::Array(items)) => Some(items.into_iter().filter_map(parse).collect()),
            _ => None,
        }
    }

    /// A list of strings with non-string items dropped.
    pub fn take_strings(&mut self, key: &str) -> Option<Vec<String>> {
        self.take_items(key, |value| match value {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn into_rest(self) -> Map<String, Value> {
        self.map
    }
}

/// Leading `max_chars` characters of `text`, never splitting a code point.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn found(text: &str) -> Map<String, Value> {
        match extract_json_object(text) {
            Extraction::Found(map) => map,
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_object_embedded_in_prose() {
        let map = found("Sure! Here is the plan:\n{\"overview\": \"go\"}\nGood luck.");
        assert_eq!(map["overview"], "go");
    }

    #[test]
    fn test_fenced_object() {
        let map = found("```json\n{\"skills\": [\"Rust\"]}\n```");
        assert_eq!(map["skills"], json!(["Rust"]));
    }

    #[test]
    fn test_no_braces_is_missing() {
        assert_eq!(extract_json_object("Just prose, no data."), Extraction::Missing);
        assert_eq!(extract_json_object(""), Extraction::Missing);
    }

    #[test]
    fn test_invalid_object_is_malformed() {
        assert_eq!(
            extract_json_object("{summary: 'single quotes are not json'}"),
            Extraction::Malformed
        );
    }

    #[test]
    fn test_unclosed_brace_is_malformed() {
        assert_eq!(
            extract_json_object("{\"summary\": \"truncated"),
            Extraction::Malformed
        );
    }

    #[test]
    fn test_skips_fragment_before_real_object() {
        // A greedy first-to-last match would swallow both regions and fail.
        let map = found("Fill in {placeholder} below:\n{\"jobs\": []}\nThanks {name}");
        assert_eq!(map["jobs"], json!([]));
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let map = found(r#"{"description": "use } and { freely \" ok", "n": 1}"#);
        assert_eq!(map["description"], "use } and { freely \" ok");
        assert_eq!(map["n"], 1);
    }

    #[test]
    fn test_nested_objects() {
        let map = found(r#"x {"a": {"b": {"c": 1}}, "d": [{"e": 2}]} y"#);
        assert_eq!(map["a"]["b"]["c"], 1);
        assert_eq!(map["d"][0]["e"], 2);
    }

    #[test]
    fn test_does_not_pick_nested_fragment_of_invalid_region() {
        assert_eq!(
            extract_json_object(r#"{summary: {"a": 1}}"#),
            Extraction::Malformed
        );
    }

    #[test]
    fn test_first_object_wins() {
        let map = found(r#"{"first": true} and {"second": true}"#);
        assert!(map.contains_key("first"));
        assert!(!map.contains_key("second"));
    }

    #[test]
    fn test_reply_fields_take_discards_mistyped() {
        let mut fields = ReplyFields::new(
            json!({"skills": "not a list", "summary": "ok", "extra": 1})
                .as_object()
                .cloned()
                .unwrap(),
        );
        assert_eq!(fields.take::<Vec<String>>("skills"), None);
        assert_eq!(fields.take::<String>("summary"), Some("ok".to_string()));
        assert_eq!(fields.take::<String>("absent"), None);

        let rest = fields.into_rest();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest["extra"], 1);
    }

    #[test]
    fn test_reply_fields_take_items_filters() {
        let mut fields = ReplyFields::new(
            json!({"items": [1, "two", 3]}).as_object().cloned().unwrap(),
        );
        let items = fields.take_items("items", |v| v.as_u64()).unwrap();
        assert_eq!(items, vec![1, 3]);
    }

    #[test]
    fn test_reply_fields_take_strings_drops_non_strings() {
        let mut fields = ReplyFields::new(
            json!({"skills": ["Rust", 3, null, "Go"], "tips": "one"})
                .as_object()
                .cloned()
                .unwrap(),
        );
        assert_eq!(fields.take_strings("skills"), Some(vec!["Rust".to_string(), "Go".to_string()]));
        assert_eq!(fields.take_strings("tips"), None);
        assert_eq!(fields.take_strings("absent"), None);
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("héllo wörld", 4), "héll");
        assert_eq!(excerpt("short", 200), "short");
    }
}
