use std::fmt;

use math::prelude::{Point, Radix};
use math::DecodeError;
use serde::{Deserialize, Serialize};

use crate::error::{RecoveryError, RecoveryResult};

/// Base of a share's value, written either as a JSON number or as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BaseSpec {
    Number(i64),
    Text(String),
}

impl BaseSpec {
    /// Resolve to a validated [`Radix`].
    pub fn radix(&self) -> Result<Radix, DecodeError> {
        match self {
            BaseSpec::Number(base) => Radix::new(*base),
            BaseSpec::Text(text) => text.parse(),
        }
    }
}

impl From<u32> for BaseSpec {
    fn from(base: u32) -> Self {
        BaseSpec::Number(i64::from(base))
    }
}

impl From<&str> for BaseSpec {
    fn from(base: &str) -> Self {
        BaseSpec::Text(base.to_owned())
    }
}

impl fmt::Display for BaseSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseSpec::Number(base) => write!(f, "{base}"),
            BaseSpec::Text(text) => f.write_str(text),
        }
    }
}

/// One share as supplied by the caller: a 1-based index and the
/// polynomial's value there, written as digits in `base`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub index: u64,
    pub base: BaseSpec,
    pub value: String,
}

impl ShareRecord {
    pub fn new(
        index: u64,
        base: impl Into<BaseSpec>,
        value: impl Into<String>,
    ) -> RecoveryResult<Self> {
        if index == 0 {
            return Err(RecoveryError::InvalidShareIndex(index));
        }

        Ok(ShareRecord {
            index,
            base: base.into(),
            value: value.into(),
        })
    }

    /// Decode the value into the point `(index, value)`.
    pub fn decode(&self) -> RecoveryResult<Point> {
        if self.index == 0 {
            return Err(RecoveryError::InvalidShareIndex(self.index));
        }
        let radix = self
            .base
            .radix()
            .map_err(|err| RecoveryError::decode(self.index, err))?;
        let y = radix
            .decode(&self.value)
            .map_err(|err| RecoveryError::decode(self.index, err))?;
        Ok(Point::new(self.index, y))
    }
}
