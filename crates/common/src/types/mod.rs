use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `GET /`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeysResponse {
    #[serde(rename = "Keys")]
    pub keys: Vec<String>,
}

/// Body of `GET /{key}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyValueResponse {
    pub key: String,
    pub value: String,
}

/// Body of `PUT /{key}`.
///
/// Decoding is lenient in the same places a Go `encoding/json` client would
/// expect: the field name matches case-insensitively, a repeated field keeps
/// its last occurrence, a `null` field or a top-level `null` leaves `value`
/// unset, and unknown fields are skipped. Anything other than an object or
/// `null` at the top level is rejected.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PutRequest {
    pub value: Option<String>,
}

impl PutRequest {
    /// Decode the first JSON value of `body`; bytes after it are ignored.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_slice(body);
        PutRequest::deserialize(&mut de)
    }
}

impl<'de> Deserialize<'de> for PutRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PutRequestVisitor)
    }
}

struct PutRequestVisitor;

impl<'de> Visitor<'de> for PutRequestVisitor {
    type Value = PutRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object with a string `value` field")
    }

    fn visit_unit<E: de::Error>(self) -> Result<PutRequest, E> {
        Ok(PutRequest::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<PutRequest, E> {
        Ok(PutRequest::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<PutRequest, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut value = None;
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("value") {
                if let Some(v) = map.next_value::<Option<String>>()? {
                    value = Some(v);
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(PutRequest { value })
    }
}
