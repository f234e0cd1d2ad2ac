use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocktake_core::{DomainResult, NameAndCopy};
use stocktake_parties::Person;
use stocktake_products::{Availability, Product};

use crate::revision::{REVISION_DATE_FORMAT, Revision};

/// A revision of a warehouse: the revision fields plus the people responsible
/// for it and the audited inventory.
///
/// Both lists are exclusively owned. Callers hand them over by value, and
/// [`NameAndCopy::deep_copy`] rebuilds them element by element, so no list or
/// element is ever shared between two revisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseRevision {
    revision: Revision,
    responsible_persons: Vec<Person>,
    products: Vec<Product>,
}

impl WarehouseRevision {
    /// Create a warehouse revision, rejecting negative revision numbers.
    ///
    /// `responsible_persons` is moved in, so later changes to the caller's
    /// list are impossible rather than silently shared.
    pub fn new(
        info: impl Into<String>,
        date: DateTime<Utc>,
        number: i64,
        responsible_persons: Vec<Person>,
        products: impl IntoIterator<Item = Product>,
    ) -> DomainResult<Self> {
        Ok(Self::from_revision(
            Revision::new(info, date, number)?,
            responsible_persons,
            products,
        ))
    }

    pub fn from_revision(
        revision: Revision,
        responsible_persons: Vec<Person>,
        products: impl IntoIterator<Item = Product>,
    ) -> Self {
        Self {
            revision,
            responsible_persons,
            products: products.into_iter().collect(),
        }
    }

    pub fn info(&self) -> &str {
        self.revision.info()
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.revision.date()
    }

    pub fn number(&self) -> u32 {
        self.revision.number()
    }

    pub fn set_info(&mut self, info: impl Into<String>) {
        self.revision.set_info(info);
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.revision.set_date(date);
    }

    pub fn set_number(&mut self, number: i64) -> DomainResult<()> {
        self.revision.set_number(number)
    }

    /// Snapshot of the revision fields. Mutating the result does not affect
    /// `self`.
    pub fn revision(&self) -> Revision {
        self.revision.deep_copy()
    }

    /// Overwrite the revision fields from `revision`.
    pub fn set_revision(&mut self, revision: &Revision) {
        tracing::debug!(
            from = %self.revision,
            to = %revision,
            "overwriting warehouse revision fields"
        );
        self.revision = revision.deep_copy();
    }

    pub fn persons(&self) -> &[Person] {
        &self.responsible_persons
    }

    pub fn persons_mut(&mut self) -> &mut [Person] {
        &mut self.responsible_persons
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut [Product] {
        &mut self.products
    }

    /// Append products in order. Duplicates are kept.
    pub fn add_products(&mut self, products: impl IntoIterator<Item = Product>) {
        self.products.extend(products);
    }

    /// Append responsible persons in order. Duplicates are kept.
    pub fn add_members(&mut self, members: impl IntoIterator<Item = Person>) {
        self.responsible_persons.extend(members);
    }

    /// The product with the earliest manufacturing date.
    ///
    /// Among products sharing that date the first one in list order wins.
    pub fn latest_product(&self) -> Option<&Product> {
        self.products.iter().min_by_key(|p| p.manufacturing_date())
    }

    /// The product with the largest code.
    ///
    /// Among products sharing that code the last one in list order wins.
    pub fn biggest_code_product(&self) -> Option<&Product> {
        self.products.iter().max_by_key(|p| p.code())
    }

    /// Products whose recorded quantity is zero, regardless of availability.
    pub fn out_of_stock_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.quantity() == 0)
    }

    /// Products whose name contains `name` (case-sensitive).
    pub fn products_with_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.name_contains(name))
    }

    /// Same filter as [`Self::products_with_name`].
    pub fn products_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products_with_name(name)
    }

    /// Products marked [`Availability::OutOfStock`].
    pub fn finished_products(&self) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(|p| p.availability() == Availability::OutOfStock)
    }

    /// Revision fields followed by the comma-joined persons.
    ///
    /// Persons use their full rendering here too, not
    /// [`Person::to_short_string`].
    pub fn to_short_string(&self) -> String {
        let persons = self
            .responsible_persons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Revision Info: {}\nRevision Date: {}\nRevision Number: {}\nResponsible Persons: {}",
            self.revision.info(),
            self.revision.date().format(REVISION_DATE_FORMAT),
            self.revision.number(),
            persons
        )
    }
}

impl Default for WarehouseRevision {
    fn default() -> Self {
        Self::from_revision(
            Revision::from_parts("Default revision", Utc::now(), 0),
            Vec::new(),
            Vec::new(),
        )
    }
}

impl NameAndCopy for WarehouseRevision {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.revision.info())
    }

    fn set_name(&mut self, name: &str) {
        self.revision.set_info(name);
    }

    fn deep_copy(&self) -> Self {
        tracing::debug!(
            persons = self.responsible_persons.len(),
            products = self.products.len(),
            "deep-copying warehouse revision"
        );
        Self {
            revision: self.revision.deep_copy(),
            responsible_persons: self
                .responsible_persons
                .iter()
                .map(NameAndCopy::deep_copy)
                .collect(),
            products: self.products.iter().map(NameAndCopy::deep_copy).collect(),
        }
    }
}

impl core::fmt::Display for WarehouseRevision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Revision Info: {}", self.revision.info())?;
        writeln!(
            f,
            "Revision Date: {}",
            self.revision.date().format(REVISION_DATE_FORMAT)
        )?;
        writeln!(f, "Revision Number: {}", self.revision.number())?;

        writeln!(f, "Responsible Persons:")?;
        let persons = self
            .responsible_persons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        writeln!(f, "{}", persons.join("\n"))?;

        writeln!(f, "Products:")?;
        for product in &self.products {
            writeln!(f, "{product}")?;
        }
        Ok(())
    }
}
