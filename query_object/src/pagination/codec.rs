//! Override codec
//!
//! A client echoes back pagination settings as base64-wrapped JSON, e.g.
//! `{"page": 2, "limit": 50, "sort": "name", "order": "desc", "search": "x",
//! "tags": {"status": "open"}}`. Decoding yields raw [`Overrides`]; the
//! pagination state validates every field itself when applying them.

use crate::errors::PaginationError;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Serialize;
use serde_json::{Map, Value};
use type_mapping::{tag_map_from_json, TagMap};

/// Pagination settings carried by an override payload
///
/// Fields that were absent, or present with the wrong JSON type, are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagMap>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub struct OverrideCodec;

impl OverrideCodec {
    /// Decode an override payload
    ///
    /// An empty (or blank) payload carries no overrides. Anything else must be
    /// base64 (standard or URL-safe, padded or not) wrapping a JSON object.
    pub fn decode(encoded: &str) -> Result<Overrides, PaginationError> {
        let encoded = encoded.trim();
        if encoded.is_empty() {
            return Ok(Overrides::default());
        }

        let bytes = Self::decode_envelope(encoded)?;
        let record: Map<String, Value> = serde_json::from_slice(&bytes)?;

        Ok(Self::read_record(&record))
    }

    /// Encode overrides into the payload format accepted by [`decode`](Self::decode)
    pub fn encode(overrides: &Overrides) -> String {
        // Overrides holds only strings, integers and tag values, which always serialize
        let json = serde_json::to_vec(overrides).unwrap_or_else(|_| b"{}".to_vec());
        STANDARD.encode(json)
    }

    fn decode_envelope(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(encoded).or_else(|err| {
            [URL_SAFE, STANDARD_NO_PAD, URL_SAFE_NO_PAD]
                .iter()
                .find_map(|engine| engine.decode(encoded).ok())
                .ok_or(err)
        })
    }

    fn read_record(record: &Map<String, Value>) -> Overrides {
        let mut overrides = Overrides::default();

        for (key, value) in record {
            match key.to_ascii_lowercase().as_str() {
                "page" => overrides.page = value.as_u64(),
                "limit" => {
                    overrides.limit = value.as_u64().and_then(|l| u32::try_from(l).ok())
                }
                "sort" => overrides.sort = value.as_str().map(str::to_string),
                "order" => overrides.order = value.as_str().map(str::to_string),
                "search" => overrides.search = value.as_str().map(str::to_string),
                "tags" => {
                    overrides.tags = value.as_object().map(|object| {
                        let (tags, skipped) = tag_map_from_json(object);
                        if !skipped.is_empty() {
                            debug_log!("Skipped override tags without a supported kind: {:?}", skipped);
                        }
                        tags
                    })
                }
                _ => {}
            }
        }

        overrides
    }
}
