//! Composite-string parser
//!
//! Decodes a single string into a slice or a map of primitives.
//!
//! Slice grammar: `item1,item2,item3`. Items are trimmed before conversion.
//!
//! Map grammar: `key1=value1;key2=value2`. Every pair must split into exactly
//! two parts on `=` with a non-empty key. Values are passed to the primitive
//! converter untrimmed. The last occurrence of a duplicated key wins.
//!
//! Neither grammar supports escaping. An empty input yields an empty collection.

use indexmap::IndexMap;

use crate::convert::Primitive;
use crate::error::{Error, Result};

const SLICE_SEPARATOR: char = ',';
const PAIR_SEPARATOR: char = ';';
const KEY_VALUE_SEPARATOR: char = '=';
const KEY_VALUE_LENGTH: usize = 2;

const MAP_SYNTAX: &str = "invalid string map syntax, expected: <key1>=<value1>;<key2>=<value2>";

/// Split a comma-separated string into trimmed string items
pub fn parse_string_slice(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    input
        .split(SLICE_SEPARATOR)
        .map(|item| item.trim().to_string())
        .collect()
}

/// Parse a comma-separated string into a slice of primitives.
///
/// On failure the error hint is the index of the offending item.
pub fn parse_slice<T: Primitive>(input: &str) -> Result<Vec<T>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(SLICE_SEPARATOR)
        .enumerate()
        .map(|(index, item)| {
            T::parse_primitive(item.trim()).map_err(|e| {
                Error::parse_failed(format!("invalid {} slice syntax", T::KIND), index.to_string())
                    .with_cause(item_cause(&e))
            })
        })
        .collect()
}

/// Parse a `key=value;...` string into a map of raw strings
pub fn parse_string_map(input: &str) -> Result<IndexMap<String, String>> {
    let mut result = IndexMap::new();
    if input.is_empty() {
        return Ok(result);
    }

    for pair in input.split(PAIR_SEPARATOR) {
        let parts: Vec<&str> = pair.split(KEY_VALUE_SEPARATOR).collect();

        if parts.len() != KEY_VALUE_LENGTH || parts[0].is_empty() {
            return Err(Error::parse_failed(MAP_SYNTAX, parts[0]));
        }

        result.insert(parts[0].to_string(), parts[1].to_string());
    }

    Ok(result)
}

/// Parse a `key=value;...` string into a map of primitives.
///
/// On conversion failure the error hint is the offending key.
pub fn parse_map<T: Primitive>(input: &str) -> Result<IndexMap<String, T>> {
    parse_string_map(input)?
        .into_iter()
        .map(|(key, raw)| match T::parse_primitive(&raw) {
            Ok(value) => Ok((key, value)),
            Err(e) => Err(
                Error::parse_failed(format!("invalid {} map syntax", T::KIND), key)
                    .with_cause(item_cause(&e)),
            ),
        })
        .collect()
}

// One-line summary of an item-level conversion error
fn item_cause(err: &Error) -> String {
    match &err.hint {
        Some(hint) => format!("{}: {}", err.kind, hint),
        None => err.kind.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_string_slice() {
        assert_eq!(parse_string_slice("foo,bar,baz"), vec!["foo", "bar", "baz"]);
        assert_eq!(parse_string_slice(" foo , bar"), vec!["foo", "bar"]);
        assert!(parse_string_slice("").is_empty());
    }

    #[test]
    fn test_parse_string_slice_keeps_empty_items() {
        assert_eq!(parse_string_slice("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_parse_int_slice() {
        assert_eq!(parse_slice::<i64>("1, 2 ,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_slice::<u8>("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_int_slice_invalid_item() {
        let err = parse_slice::<i64>("1,abc,3").unwrap_err();

        assert!(err.is_parse_failed());
        assert_eq!(err.hint.as_deref(), Some("1"));
        let display = format!("{}", err);
        assert!(display.contains("invalid integer (i64) slice syntax"));
        assert!(display.contains("\"abc\""));
    }

    #[test]
    fn test_parse_int_slice_width_checked() {
        let err = parse_slice::<u8>("1,256").unwrap_err();
        assert_eq!(err.hint.as_deref(), Some("1"));
    }

    #[test]
    fn test_parse_float_and_bool_slices() {
        assert_eq!(parse_slice::<f64>("1.5,2,-0.25").unwrap(), vec![1.5, 2.0, -0.25]);
        assert_eq!(
            parse_slice::<bool>("true, F,1,0").unwrap(),
            vec![true, false, true, false]
        );
        assert_eq!(
            parse_slice::<bool>("true,maybe").unwrap_err().hint.as_deref(),
            Some("1")
        );
    }

    #[test]
    fn test_parse_string_map() {
        let map = parse_string_map("foo=bar;baz=qux").unwrap();
        assert_eq!(map.get("foo").map(String::as_str), Some("bar"));
        assert_eq!(map.get("baz").map(String::as_str), Some("qux"));
        assert!(parse_string_map("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_string_map_allows_empty_value() {
        let map = parse_string_map("key=").unwrap();
        assert_eq!(map.get("key").map(String::as_str), Some(""));
    }

    #[test]
    fn test_parse_string_map_invalid_pair() {
        let err = parse_string_map("a;b=2").unwrap_err();
        assert!(err.is_parse_failed());
        assert_eq!(err.hint.as_deref(), Some("a"));
        assert!(format!("{}", err).contains("<key1>=<value1>;<key2>=<value2>"));
    }

    #[test]
    fn test_parse_string_map_rejects_extra_equals() {
        let err = parse_string_map("a=b=c").unwrap_err();
        assert_eq!(err.hint.as_deref(), Some("a"));
    }

    #[test]
    fn test_parse_string_map_rejects_empty_key() {
        let err = parse_string_map("=1").unwrap_err();
        assert_eq!(err.hint.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_string_map_trailing_separator() {
        assert!(parse_string_map("a=1;").is_err());
    }

    #[test]
    fn test_parse_map_duplicate_key_last_wins() {
        let map = parse_map::<i64>("a=1;b=2;a=3").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 3);
    }

    #[test]
    fn test_parse_int_map() {
        let map = parse_map::<i64>("foo=2;bar=3").unwrap();
        let mut expected = IndexMap::new();
        expected.insert("foo".to_string(), 2);
        expected.insert("bar".to_string(), 3);
        assert_eq!(map, expected);
    }

    #[test]
    fn test_parse_int_map_invalid_value() {
        let err = parse_map::<i64>("a=c;b=2").unwrap_err();
        assert_eq!(err.hint.as_deref(), Some("a"));
        assert!(format!("{}", err).contains("invalid integer (i64) map syntax"));
    }

    #[test]
    fn test_parse_float_and_bool_maps() {
        let floats = parse_map::<f64>("x=1.5;y= 2").unwrap();
        assert_eq!(floats["x"], 1.5);
        assert_eq!(floats["y"], 2.0);

        let bools = parse_map::<bool>("on=true;off=0").unwrap();
        assert!(bools["on"]);
        assert!(!bools["off"]);

        let err = parse_map::<bool>("on=yes").unwrap_err();
        assert_eq!(err.hint.as_deref(), Some("on"));
    }

    fn join_map<T: ToString>(map: &IndexMap<String, T>) -> String {
        map.iter()
            .map(|(k, v)| format!("{}={}", k, v.to_string()))
            .collect::<Vec<_>>()
            .join(";")
    }

    fn join_slice<T: ToString>(items: &[T]) -> String {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    #[test]
    fn test_slice_round_trip() {
        let ints = vec![3i64, -1, 40];
        assert_eq!(parse_slice::<i64>(&join_slice(&ints)).unwrap(), ints);

        let floats = vec![1.5f64, -0.25, 3.0];
        assert_eq!(parse_slice::<f64>(&join_slice(&floats)).unwrap(), floats);

        let strings = vec!["foo".to_string(), "bar".to_string(), "baz".to_string()];
        assert_eq!(parse_string_slice(&join_slice(&strings)), strings);
        assert_eq!(parse_slice::<String>(&join_slice(&strings)).unwrap(), strings);
    }

    #[test]
    fn test_map_round_trip() {
        let ints: IndexMap<String, i64> =
            [("foo".to_string(), 2), ("bar".to_string(), -3)].into_iter().collect();
        assert_eq!(parse_map::<i64>(&join_map(&ints)).unwrap(), ints);

        let floats: IndexMap<String, f64> =
            [("pi".to_string(), 3.5), ("neg".to_string(), -0.125)].into_iter().collect();
        assert_eq!(parse_map::<f64>(&join_map(&floats)).unwrap(), floats);

        let bools: IndexMap<String, bool> =
            [("on".to_string(), true), ("off".to_string(), false)].into_iter().collect();
        assert_eq!(parse_map::<bool>(&join_map(&bools)).unwrap(), bools);

        let strings: IndexMap<String, String> =
            [("host".to_string(), "db".to_string()), ("user".to_string(), "app".to_string())]
                .into_iter()
                .collect();
        assert_eq!(parse_string_map(&join_map(&strings)).unwrap(), strings);
    }
}
