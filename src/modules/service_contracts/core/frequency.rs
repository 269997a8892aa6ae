use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Service cadence of a contract.
///
/// The serialized tags are stored with every contract and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    Quarterly,
    Semiannual,
    Annual,
    OneTime,
}

/// Calendar step that one unit of a cadence advances by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Days(u32),
    Months(u32),
}

impl ServiceFrequency {
    pub const ALL: [ServiceFrequency; 8] = [
        ServiceFrequency::Weekly,
        ServiceFrequency::Biweekly,
        ServiceFrequency::Monthly,
        ServiceFrequency::Bimonthly,
        ServiceFrequency::Quarterly,
        ServiceFrequency::Semiannual,
        ServiceFrequency::Annual,
        ServiceFrequency::OneTime,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            ServiceFrequency::Weekly => "WEEKLY",
            ServiceFrequency::Biweekly => "BIWEEKLY",
            ServiceFrequency::Monthly => "MONTHLY",
            ServiceFrequency::Bimonthly => "BIMONTHLY",
            ServiceFrequency::Quarterly => "QUARTERLY",
            ServiceFrequency::Semiannual => "SEMIANNUAL",
            ServiceFrequency::Annual => "ANNUAL",
            ServiceFrequency::OneTime => "ONE_TIME",
        }
    }

    /// `None` for `OneTime`, which never recurs.
    pub fn period(&self) -> Option<Period> {
        match self {
            ServiceFrequency::Weekly => Some(Period::Days(7)),
            ServiceFrequency::Biweekly => Some(Period::Days(14)),
            ServiceFrequency::Monthly => Some(Period::Months(1)),
            ServiceFrequency::Bimonthly => Some(Period::Months(2)),
            ServiceFrequency::Quarterly => Some(Period::Months(3)),
            ServiceFrequency::Semiannual => Some(Period::Months(6)),
            ServiceFrequency::Annual => Some(Period::Months(12)),
            ServiceFrequency::OneTime => None,
        }
    }
}

impl fmt::Display for ServiceFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unsupported service frequency: {0}")]
pub struct UnsupportedFrequency(pub String);

impl FromStr for ServiceFrequency {
    type Err = UnsupportedFrequency;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ServiceFrequency::ALL
            .into_iter()
            .find(|frequency| frequency.as_tag() == tag)
            .ok_or_else(|| UnsupportedFrequency(tag.to_string()))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("frequency value must be a positive integer, got {0}")]
pub struct InvalidFrequencyValue(pub i64);

/// Multiplier applied to the cadence period, e.g. MONTHLY x 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct FrequencyValue(NonZeroU32);

impl FrequencyValue {
    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<i64> for FrequencyValue {
    type Error = InvalidFrequencyValue;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u32::try_from(raw)
            .ok()
            .and_then(NonZeroU32::new)
            .map(FrequencyValue)
            .ok_or(InvalidFrequencyValue(raw))
    }
}

impl From<FrequencyValue> for u32 {
    fn from(value: FrequencyValue) -> Self {
        value.get()
    }
}
