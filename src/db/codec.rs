//! Blob encoding for nested collections.
//!
//! Collections are stored as a UTF-8 JSON envelope:
//!
//! ```text
//! {"v":1,"kind":"str_f64_map","data":{"Fall 2025":4.0}}
//! {"v":1,"kind":"str_list","data":["Teaching","First Aid"]}
//! ```
//!
//! An empty collection still produces a full envelope, so it is never
//! confused with a NULL column.
//!
//! Hour values must come back bit-identical, which relies on serde_json's
//! `float_roundtrip` feature on the parsing side.
//!
//! Decoding is lossy on failure: corrupt bytes, a foreign `kind` or an
//! unknown version yield the empty collection together with a
//! [`DecodeWarning`]. The read that triggered it still succeeds, and the
//! damaged value is lost once the entity is written back.

use crate::errors::{AppError, AppResult, ErrorKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const CODEC_VERSION: u32 = 1;

/// Collections that can live in a blob column.
pub trait BlobCollection: Serialize + DeserializeOwned + Default {
    /// Tag written into the envelope and checked on decode.
    const KIND: &'static str;
}

impl BlobCollection for BTreeMap<String, f64> {
    const KIND: &'static str = "str_f64_map";
}

impl BlobCollection for Vec<String> {
    const KIND: &'static str = "str_list";
}

#[derive(Serialize)]
struct EnvelopeOut<'a, T> {
    v: u32,
    kind: &'a str,
    data: &'a T,
}

#[derive(Deserialize)]
struct EnvelopeIn<T> {
    v: u32,
    kind: String,
    data: T,
}

/// A blob that could not be decoded and was replaced by an empty collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeWarning {
    pub column: &'static str,
    pub owner_id: String,
    pub reason: String,
}

impl DecodeWarning {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::SerializationFailure
    }
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of '{}' could not be decoded ({}); using an empty value",
            self.column, self.owner_id, self.reason
        )
    }
}

/// Result of a decode: the value plus the reason it was discarded, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<C> {
    pub value: C,
    pub failure: Option<String>,
}

pub fn encode<C: BlobCollection>(collection: &C) -> AppResult<Vec<u8>> {
    let envelope = EnvelopeOut {
        v: CODEC_VERSION,
        kind: C::KIND,
        data: collection,
    };
    serde_json::to_vec(&envelope).map_err(|e| AppError::Serialization(e.to_string()))
}

/// Decode a blob column. `None` (SQL NULL) is an absent field and decodes to
/// the empty collection without a failure.
pub fn decode<C: BlobCollection>(bytes: Option<&[u8]>) -> Decoded<C> {
    let Some(bytes) = bytes else {
        return Decoded {
            value: C::default(),
            failure: None,
        };
    };

    match try_decode::<C>(bytes) {
        Ok(value) => Decoded {
            value,
            failure: None,
        },
        Err(reason) => Decoded {
            value: C::default(),
            failure: Some(reason),
        },
    }
}

fn try_decode<C: BlobCollection>(bytes: &[u8]) -> Result<C, String> {
    let envelope: EnvelopeIn<C> = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;

    if envelope.v != CODEC_VERSION {
        return Err(format!("unsupported codec version {}", envelope.v));
    }
    if envelope.kind != C::KIND {
        return Err(format!(
            "expected kind '{}', found '{}'",
            C::KIND,
            envelope.kind
        ));
    }
    Ok(envelope.data)
}

/// Decode a column and attach a warning naming the owning row on failure.
pub(crate) fn decode_column<C: BlobCollection>(
    bytes: Option<&[u8]>,
    column: &'static str,
    owner_id: &str,
    warnings: &mut Vec<DecodeWarning>,
) -> C {
    let decoded = decode::<C>(bytes);
    if let Some(reason) = decoded.failure {
        let warning = DecodeWarning {
            column,
            owner_id: owner_id.to_string(),
            reason,
        };
        tracing::warn!("{warning}");
        warnings.push(warning);
    }
    decoded.value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_round_trip() {
        let mut m = BTreeMap::new();
        m.insert("Fall 2025".to_string(), 4.5);
        m.insert("Spring 2026".to_string(), 0.0);

        let bytes = encode(&m).unwrap();
        let back = decode::<BTreeMap<String, f64>>(Some(&bytes));
        assert_eq!(back.value, m);
        assert!(back.failure.is_none());
    }

    /// Deterministic xorshift64 so the generated cases are reproducible.
    struct XorShift(u64);

    impl XorShift {
        fn next(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            x
        }

        /// Uniform in [0, 1000), the range hours realistically take.
        fn hours(&mut self) -> f64 {
            (self.next() >> 11) as f64 / (1u64 << 53) as f64 * 1000.0
        }

        fn label(&mut self) -> String {
            const PIECES: [&str; 8] = ["Fall", "Spring", "2025", "Été", "学期", "🎓", " ", "\"q\""];
            let n = 1 + (self.next() % 4) as usize;
            (0..n)
                .map(|_| PIECES[(self.next() % PIECES.len() as u64) as usize])
                .collect()
        }
    }

    #[test]
    fn generated_hour_maps_round_trip_exactly() {
        let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);

        // single values first: every bit of the f64 must survive
        for _ in 0..50_000 {
            let mut m = BTreeMap::new();
            m.insert("Fall 2025".to_string(), rng.hours());
            let back = decode::<BTreeMap<String, f64>>(Some(&encode(&m).unwrap()));
            assert_eq!(back.value, m);
            assert!(back.failure.is_none());
        }

        for size in 0..64 {
            let m: BTreeMap<String, f64> = (0..size)
                .map(|_| (rng.label(), rng.hours()))
                .collect();
            let back = decode::<BTreeMap<String, f64>>(Some(&encode(&m).unwrap()));
            assert_eq!(back.value, m, "map of {size} entries");
        }
    }

    #[test]
    fn extreme_hour_values_round_trip() {
        let values = [
            0.0,
            f64::MIN_POSITIVE,
            5e-324,
            0.1 + 0.2,
            1.0 / 3.0,
            985.690_694_632_869_5,
            f64::MAX,
        ];
        for v in values {
            let m = BTreeMap::from([("s".to_string(), v)]);
            let back = decode::<BTreeMap<String, f64>>(Some(&encode(&m).unwrap()));
            assert_eq!(back.value["s"].to_bits(), v.to_bits());
        }
    }

    #[test]
    fn generated_skill_lists_round_trip() {
        let mut rng = XorShift(0xDEAD_BEEF_CAFE_F00D);
        for size in 0..64 {
            let v: Vec<String> = (0..size).map(|_| rng.label()).collect();
            let back = decode::<Vec<String>>(Some(&encode(&v).unwrap()));
            assert_eq!(back.value, v, "list of {size} items");
            assert!(back.failure.is_none());
        }
    }

    #[test]
    fn list_round_trip_keeps_order() {
        let v = vec![
            "Teaching".to_string(),
            "First Aid".to_string(),
            "Teaching".to_string(),
        ];
        let back = decode::<Vec<String>>(Some(&encode(&v).unwrap()));
        assert_eq!(back.value, v);
    }

    #[test]
    fn empty_collections_are_not_null() {
        let empty_map = encode(&BTreeMap::<String, f64>::new()).unwrap();
        let empty_list = encode(&Vec::<String>::new()).unwrap();
        assert!(!empty_map.is_empty());
        assert!(!empty_list.is_empty());
        assert_ne!(empty_map, empty_list);

        let back = decode::<Vec<String>>(Some(&empty_list));
        assert!(back.value.is_empty());
        assert!(back.failure.is_none());
    }

    #[test]
    fn null_decodes_to_empty_without_failure() {
        let back = decode::<Vec<String>>(None);
        assert!(back.value.is_empty());
        assert!(back.failure.is_none());
    }

    #[test]
    fn corrupt_bytes_degrade_to_empty() {
        let back = decode::<BTreeMap<String, f64>>(Some(&[0xac, 0xed, 0x00, 0x05]));
        assert!(back.value.is_empty());
        assert!(back.failure.is_some());
    }

    #[test]
    fn wrong_kind_is_a_failure() {
        let list = encode(&vec!["x".to_string()]).unwrap();
        let back = decode::<BTreeMap<String, f64>>(Some(&list));
        assert!(back.value.is_empty());
        assert!(back.failure.unwrap().contains("str_f64_map"));
    }

    #[test]
    fn future_version_is_a_failure() {
        let bytes = br#"{"v":2,"kind":"str_list","data":["a"]}"#;
        let back = decode::<Vec<String>>(Some(bytes));
        assert!(back.value.is_empty());
        assert!(back.failure.unwrap().contains("version 2"));
    }

    #[test]
    fn decode_column_collects_warning() {
        let mut warnings = Vec::new();
        let v: Vec<String> = decode_column(Some(b"garbage"), "requiredSkills", "event-9", &mut warnings);
        assert!(v.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].owner_id, "event-9");
        assert_eq!(warnings[0].kind(), ErrorKind::SerializationFailure);
    }
}
