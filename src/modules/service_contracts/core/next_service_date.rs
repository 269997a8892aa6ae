//! Next-service-date projection for recurring contracts.
//!
//! Month and year steps clamp to the last valid day of the target month:
//! Jan 31 + 1 month is Feb 29 in a leap year, Feb 29 + 1 year is Feb 28.
//! The time of day of the base date is kept.

use chrono::{DateTime, Months, TimeDelta, Utc};
use thiserror::Error;

use crate::modules::service_contracts::core::frequency::{
    FrequencyValue, InvalidFrequencyValue, Period, ServiceFrequency,
};
use crate::shared::core::primitives::{EpochMillis, InvalidTimestamp, datetime_from_millis};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextServiceDate {
    Recurs(DateTime<Utc>),
    NoRecurrence,
    Unsupported { tag: String },
}

impl NextServiceDate {
    pub fn date(&self) -> Option<DateTime<Utc>> {
        match self {
            NextServiceDate::Recurs(date) => Some(*date),
            NextServiceDate::NoRecurrence | NextServiceDate::Unsupported { .. } => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error(transparent)]
    InvalidBaseDate(#[from] InvalidTimestamp),

    #[error(transparent)]
    InvalidFrequencyValue(#[from] InvalidFrequencyValue),

    #[error("{base_date} + {frequency} x{value} is outside the supported calendar range")]
    OutOfRange {
        base_date: DateTime<Utc>,
        frequency: ServiceFrequency,
        value: u32,
    },
}

pub fn project(
    base_date: DateTime<Utc>,
    frequency: ServiceFrequency,
    value: FrequencyValue,
) -> Result<NextServiceDate, ProjectionError> {
    let Some(period) = frequency.period() else {
        return Ok(NextServiceDate::NoRecurrence);
    };
    let out_of_range = || ProjectionError::OutOfRange {
        base_date,
        frequency,
        value: value.get(),
    };

    let next = match period {
        Period::Days(days) => days
            .checked_mul(value.get())
            .and_then(|total| TimeDelta::try_days(i64::from(total)))
            .and_then(|delta| base_date.checked_add_signed(delta)),
        Period::Months(months) => months
            .checked_mul(value.get())
            .and_then(|total| base_date.checked_add_months(Months::new(total))),
    };
    next.map(NextServiceDate::Recurs).ok_or_else(out_of_range)
}

/// Projects from a raw cadence tag. An unknown tag is not an error: it yields `Unsupported`.
pub fn project_tag(
    base_date: DateTime<Utc>,
    tag: &str,
    value: FrequencyValue,
) -> Result<NextServiceDate, ProjectionError> {
    match tag.parse::<ServiceFrequency>() {
        Ok(frequency) => project(base_date, frequency, value),
        Err(_) => Ok(NextServiceDate::Unsupported {
            tag: tag.to_string(),
        }),
    }
}

/// Boundary variant over the stored representation: epoch millis and a raw multiplier.
pub fn project_from_millis(
    base_date: EpochMillis,
    tag: &str,
    value: i64,
) -> Result<NextServiceDate, ProjectionError> {
    let base_date = datetime_from_millis(base_date)?;
    let value = FrequencyValue::try_from(value)?;
    project_tag(base_date, tag, value)
}
