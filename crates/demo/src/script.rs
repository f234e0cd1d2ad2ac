//! The console walkthrough: equality, validation, deep copies, queries and the
//! array iteration benchmark, in that order.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::Write;

use anyhow::Context;
use chrono::Utc;

use stocktake_core::{LineSource, NameAndCopy, prompt_until};
use stocktake_parties::Person;
use stocktake_products::{Availability, Product};
use stocktake_revisions::{Revision, WarehouseRevision};

use crate::config::DemoConfig;
use crate::shelves::{Shelves, parse_dimensions};

const DIMENSIONS_PROMPT: &str = "Enter the number of rows and columns (e.g. \"100:200\"):";

fn hash_code<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Run all eight steps, reading interactive answers from `input` and writing
/// the report to `out`.
pub fn run<S, W>(config: &DemoConfig, input: &mut S, out: &mut W) -> anyhow::Result<()>
where
    S: LineSource + ?Sized,
    W: Write,
{
    tracing::info!(step = 1, "comparing separately constructed revisions");
    writeln!(out, "1. Two revisions with identical data:")?;
    let now = Utc::now();
    let mut revision1 = Revision::new("Revision 1", now, 1)?;
    let revision2 = Revision::new("Revision 1", now, 1)?;
    writeln!(out, "revision1: {revision1}")?;
    writeln!(out, "revision2: {revision2}")?;
    writeln!(out, "revision1 == revision2: {}", revision1 == revision2)?;
    writeln!(
        out,
        "same instance: {}",
        std::ptr::eq(&revision1, &revision2)
    )?;
    writeln!(out, "revision1 hash: {}", hash_code(&revision1))?;
    writeln!(out, "revision2 hash: {}", hash_code(&revision2))?;

    tracing::info!(step = 2, "assigning an invalid revision number");
    writeln!(out, "\n2. Assigning a negative revision number:")?;
    match revision1.set_number(-1) {
        Ok(()) => writeln!(out, "Negative number was accepted")?,
        Err(e) => writeln!(out, "Error message: {e}")?,
    }

    tracing::info!(step = 3, "building a warehouse revision");
    writeln!(out, "\n3. Warehouse revision with products and responsible persons:")?;
    let mut warehouse = WarehouseRevision::default();
    let mut products = Vec::with_capacity(3);
    for (code, availability) in [
        (1, Availability::InStock),
        (2, Availability::OutOfStock),
        (3, Availability::RunningOut),
    ] {
        products.push(
            Product::prompt(code, availability, &mut *input)
                .with_context(|| format!("reading product {code}"))?,
        );
    }
    warehouse.add_products(products);
    let today = Utc::now().date_naive();
    warehouse.add_members([
        Person::new("John", "Doe", today),
        Person::new("Jane", "Smith", today),
    ]);
    writeln!(out, "{warehouse}")?;

    tracing::info!(step = 4, "reading the revision view");
    writeln!(out, "\n4. Revision view of the warehouse revision:")?;
    writeln!(out, "{}", warehouse.revision())?;

    tracing::info!(step = 5, "deep-copying and mutating the original");
    writeln!(out, "\n5. Deep copy, then changes to the original:")?;
    let copy = warehouse.deep_copy();
    warehouse.set_revision(&Revision::new("Revision 2", Utc::now(), 1)?);
    if let Some(first) = warehouse.products_mut().first_mut() {
        first.set_name("Product 1 (Updated)");
    }
    writeln!(out, "Copy:")?;
    writeln!(out, "{copy}")?;
    writeln!(out, "Original:")?;
    writeln!(out, "{warehouse}")?;

    tracing::info!(step = 6, "listing finished products");
    writeln!(out, "\n6. Finished products:")?;
    for product in warehouse.finished_products() {
        writeln!(out, "{product}")?;
    }

    tracing::info!(step = 7, search = %config.search, "searching products by name");
    writeln!(
        out,
        "\n7. Products whose name contains \"{}\":",
        config.search
    )?;
    for product in warehouse.products_by_name(&config.search) {
        writeln!(out, "{product}")?;
    }

    tracing::info!(step = 8, "timing array iteration");
    writeln!(out, "\n8. Iteration time over different array shapes:")?;
    let (rows, cols) = match config.grid {
        Some(dims) => dims,
        None => prompt_until(&mut *input, DIMENSIONS_PROMPT, parse_dimensions)?,
    };
    writeln!(out, "Initializing arrays ({rows}x{cols}), please wait...")?;
    let mut shelves = Shelves::build(rows, cols, today);
    let timings = shelves.time_passes();
    writeln!(
        out,
        "One-dimensional array: {} ms",
        timings.flat.as_millis()
    )?;
    writeln!(
        out,
        "Two-dimensional rectangular array: {} ms",
        timings.rectangular.as_millis()
    )?;
    writeln!(out, "Jagged array: {} ms", timings.jagged.as_millis())?;

    out.flush()?;
    Ok(())
}
