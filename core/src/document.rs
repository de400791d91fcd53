//! The JSON share document.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Members keyed by the canonical decimal spelling of an index in `1..=n`
//! are shares. Everything else besides `keys` is ignored, including
//! spellings such as `"01"` or `"+1"` and indices beyond `n`. A repeated
//! member is an error.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use num_bigint::BigInt;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{DocumentError, RecoveryResult};
use crate::params::{Threshold, ThresholdKeys};
use crate::recovery::SecretRecovery;
use crate::share::{BaseSpec, ShareRecord};

const KEYS: &str = "keys";

#[derive(Debug, Deserialize)]
struct ShareEntry {
    base: BaseSpec,
    value: String,
}

/// Top-level members in document order, repeated keys included.
struct Members(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for Members {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = Members;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Members, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(member) =
                    map.next_entry::<String, serde_json::Value>()?
                {
                    members.push(member);
                }
                Ok(Members(members))
            }
        }

        deserializer.deserialize_map(MembersVisitor)
    }
}

/// Index named by `key`, accepting only its canonical decimal spelling.
fn share_index(key: &str) -> Option<u64> {
    key.parse::<u64>()
        .ok()
        .filter(|index| index.to_string() == key)
}

/// Parsed share document: declared counts plus the shares, by index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareDocument {
    keys: Threshold,
    shares: BTreeMap<u64, ShareRecord>,
}

impl ShareDocument {
    pub fn from_json_str(json: &str) -> RecoveryResult<Self> {
        let members: Members =
            serde_json::from_str(json).map_err(DocumentError::from)?;
        Self::from_members(members)
    }

    pub fn from_reader<R: Read>(reader: R) -> RecoveryResult<Self> {
        let members: Members =
            serde_json::from_reader(reader).map_err(DocumentError::from)?;
        Self::from_members(members)
    }

    pub fn from_path(path: impl AsRef<Path>) -> RecoveryResult<Self> {
        let file = File::open(path.as_ref()).map_err(DocumentError::from)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_members(Members(members): Members) -> RecoveryResult<Self> {
        let mut keys = None;
        let mut candidates = Vec::new();
        for (key, value) in members {
            if key == KEYS {
                if keys.replace(value).is_some() {
                    return Err(DocumentError::DuplicateKeys.into());
                }
                continue;
            }
            match share_index(&key) {
                Some(index) => candidates.push((index, value)),
                None => {
                    tracing::debug!(member = %key, "ignoring non-share member")
                }
            }
        }

        let keys = keys.ok_or(DocumentError::MissingKeys)?;
        let keys: ThresholdKeys =
            serde_json::from_value(keys).map_err(DocumentError::from)?;
        let keys = Threshold::try_from(keys)?;
        let declared = 1..=keys.total() as u64;

        let mut shares = BTreeMap::new();
        for (index, value) in candidates {
            if !declared.contains(&index) {
                tracing::debug!(
                    index,
                    total = keys.total(),
                    "ignoring share outside declared range"
                );
                continue;
            }
            let Entry::Vacant(slot) = shares.entry(index) else {
                return Err(DocumentError::DuplicateIndex(index).into());
            };
            let entry: ShareEntry = serde_json::from_value(value)
                .map_err(|source| DocumentError::InvalidEntry {
                    index,
                    source,
                })?;
            slot.insert(ShareRecord::new(index, entry.base, entry.value)?);
        }

        Ok(ShareDocument { keys, shares })
    }

    pub fn threshold(&self) -> Threshold {
        self.keys
    }

    /// Shares in ascending index order.
    pub fn records(&self) -> Vec<ShareRecord> {
        self.shares.values().cloned().collect()
    }

    /// Recover the constant term from this document's shares.
    pub fn recover(&self) -> RecoveryResult<BigInt> {
        SecretRecovery::from_threshold(self.keys).recover(&self.records())
    }
}
