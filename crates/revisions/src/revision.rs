use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocktake_core::{DomainError, DomainResult, NameAndCopy, ValueObject};

/// Format used when rendering revision timestamps.
pub const REVISION_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Audit record: free-form info, when it happened and its sequence number.
///
/// Equality is structural over all three fields. Two separately constructed
/// revisions with the same fields are equal even though they are distinct
/// instances.
///
/// When either side may be missing, compare `Option<&Revision>` values: two
/// `None`s are equal, `None` and `Some(_)` are not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Revision {
    info: String,
    date: DateTime<Utc>,
    number: u32,
}

fn checked_number(number: i64) -> DomainResult<u32> {
    if number < 0 {
        return Err(DomainError::validation(format!(
            "revision number cannot be negative (got {number})"
        )));
    }
    u32::try_from(number).map_err(|_| {
        DomainError::validation(format!(
            "revision number {number} exceeds the maximum of {}",
            u32::MAX
        ))
    })
}

impl Revision {
    /// Create a revision, rejecting negative numbers.
    pub fn new(info: impl Into<String>, date: DateTime<Utc>, number: i64) -> DomainResult<Self> {
        Ok(Self::from_parts(info, date, checked_number(number)?))
    }

    /// Create a revision from an already non-negative number.
    pub fn from_parts(info: impl Into<String>, date: DateTime<Utc>, number: u32) -> Self {
        Self {
            info: info.into(),
            date,
            number,
        }
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info = info.into();
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.date = date;
    }

    /// Assign a new number. Negative values fail and leave the current number
    /// in place.
    pub fn set_number(&mut self, number: i64) -> DomainResult<()> {
        self.number = checked_number(number)?;
        Ok(())
    }
}

impl ValueObject for Revision {}

impl NameAndCopy for Revision {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.info)
    }

    fn set_name(&mut self, name: &str) {
        self.info = name.to_string();
    }

    fn deep_copy(&self) -> Self {
        Self::from_parts(self.info.clone(), self.date, self.number)
    }
}

impl core::fmt::Display for Revision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Revision Info: {}, Revision Date: {}, Revision Number: {}",
            self.info,
            self.date.format(REVISION_DATE_FORMAT),
            self.number
        )
    }
}
