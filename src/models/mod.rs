mod gist;

pub use gist::*;

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable JSON string as an empty string.
///
/// GitHub sends `"description": null` for gists created without one.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "deserialize_nullable_string")]
        value: String,
    }

    #[test]
    fn test_nullable_string_null() {
        let w: Wrapper = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(w.value, "");
    }

    #[test]
    fn test_nullable_string_missing() {
        let w: Wrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(w.value, "");
    }

    #[test]
    fn test_nullable_string_present() {
        let w: Wrapper = serde_json::from_str(r#"{"value": "hello"}"#).unwrap();
        assert_eq!(w.value, "hello");
    }
}
