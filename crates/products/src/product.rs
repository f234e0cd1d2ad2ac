use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stocktake_core::{DomainResult, LineSource, NameAndCopy, ValueObject, prompt_until};

/// Fixed `day.month.year` format used to enter and render manufacturing dates.
pub const MANUFACTURING_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a manufacturing date in exactly `dd.mm.yyyy` form.
///
/// Two-digit day and month, four-digit year, no surrounding whitespace.
/// Anything else, or an impossible day, yields `None`.
pub fn parse_manufacturing_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(raw, MANUFACTURING_DATE_FORMAT).ok()
}

/// Stock availability as recorded during a revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    InStock,
    RunningOut,
    OutOfStock,
}

impl core::fmt::Display for Availability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Availability::InStock => "InStock",
            Availability::RunningOut => "RunningOut",
            Availability::OutOfStock => "OutOfStock",
        })
    }
}

/// Inventory item.
///
/// Equality and hashing cover name, code, availability and manufacturing date.
/// `quantity` is bookkeeping next to the record and does not take part in
/// equality. Codes are not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    name: String,
    code: i64,
    availability: Availability,
    manufacturing_date: NaiveDate,
    #[serde(default)]
    quantity: u32,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        code: i64,
        availability: Availability,
        manufacturing_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            code,
            availability,
            manufacturing_date,
            quantity: 0,
        }
    }

    /// Build a product by prompting for its name and manufacturing date.
    ///
    /// Blank names and dates that do not match `dd.mm.yyyy` are re-prompted.
    /// Fails only if `source` runs out of lines first.
    pub fn prompt<S>(code: i64, availability: Availability, source: &mut S) -> DomainResult<Self>
    where
        S: LineSource + ?Sized,
    {
        let name = prompt_until(source, &format!("Enter the name of product {code}:"), |raw| {
            (!raw.trim().is_empty()).then(|| raw.to_string())
        })?;

        let manufacturing_date = prompt_until(
            source,
            &format!("Enter the manufacturing date of product {code} (dd.mm.yyyy):"),
            parse_manufacturing_date,
        )?;

        Ok(Self::new(name, code, availability, manufacturing_date))
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn manufacturing_date(&self) -> NaiveDate {
        self.manufacturing_date
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_code(&mut self, code: i64) {
        self.code = code;
    }

    pub fn set_availability(&mut self, availability: Availability) {
        self.availability = availability;
    }

    pub fn set_manufacturing_date(&mut self, manufacturing_date: NaiveDate) {
        self.manufacturing_date = manufacturing_date;
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Append `suffix` to the product name in place.
    pub fn push_name(&mut self, suffix: &str) {
        self.name.push_str(suffix);
    }

    /// Whether the name contains `needle` (case-sensitive).
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.contains(needle)
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::new(
            "Default Product",
            0,
            Availability::OutOfStock,
            NaiveDate::default(),
        )
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.code == other.code
            && self.availability == other.availability
            && self.manufacturing_date == other.manufacturing_date
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.code.hash(state);
        self.availability.hash(state);
        self.manufacturing_date.hash(state);
    }
}

impl ValueObject for Product {}

impl NameAndCopy for Product {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Name: {}, Code: {}, Availability: {}, Manufacturing Date: {}",
            self.name,
            self.code,
            self.availability,
            self.manufacturing_date.format(MANUFACTURING_DATE_FORMAT)
        )
    }
}
