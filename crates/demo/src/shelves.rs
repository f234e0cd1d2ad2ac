//! Iteration micro-benchmark over three array shapes.
//!
//! The same pass (bump the code, append `"1"` to the name) runs over a flat
//! list, a rectangular row-major grid and a jagged list of rows.

use std::time::{Duration, Instant};

use chrono::NaiveDate;

use stocktake_products::{Availability, Product};

/// Upper bound on `rows` and on `rows x cols`; both 2-D shapes hold that many
/// products each.
pub const MAX_SHELF_CELLS: usize = 10_000_000;

/// Parse `"rows:cols"` into two non-negative sizes.
///
/// Exactly one colon is allowed; whitespace around either number is ignored.
/// Sizes whose product exceeds [`MAX_SHELF_CELLS`] are rejected.
pub fn parse_dimensions(raw: &str) -> Option<(usize, usize)> {
    let (rows, cols) = raw.split_once(':')?;
    if cols.contains(':') {
        return None;
    }
    let (rows, cols): (usize, usize) = (rows.trim().parse().ok()?, cols.trim().parse().ok()?);
    let cells = rows.checked_mul(cols)?;
    (rows <= MAX_SHELF_CELLS && cells <= MAX_SHELF_CELLS).then_some((rows, cols))
}

/// Rectangular grid stored row-major and addressed by `(row, col)`.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Product>,
}

impl Grid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Product> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Product> {
        if row < self.rows && col < self.cols {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Elapsed time of one mutation pass per shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationTimings {
    pub flat: Duration,
    pub rectangular: Duration,
    pub jagged: Duration,
}

/// The three shapes, freshly populated.
#[derive(Debug, Clone)]
pub struct Shelves {
    flat: Vec<Product>,
    rectangular: Grid,
    jagged: Vec<Vec<Product>>,
}

fn touch(product: &mut Product) {
    product.set_code(product.code() + 1);
    product.push_name("1");
}

fn timed(pass: impl FnOnce() -> usize) -> (Duration, usize) {
    let started = Instant::now();
    let touched = pass();
    (started.elapsed(), touched)
}

impl Shelves {
    /// `rows` flat items plus `rows x cols` items in each 2-D shape, all
    /// in stock and made on `made`.
    pub fn build(rows: usize, cols: usize, made: NaiveDate) -> Self {
        let cell = |i: usize, j: usize| {
            Product::new(
                format!("Product {i}-{j}"),
                i as i64 * j as i64,
                Availability::InStock,
                made,
            )
        };

        let flat: Vec<Product> = (0..rows)
            .map(|i| Product::new(format!("Product {i}"), i as i64, Availability::InStock, made))
            .collect();
        let cells: Vec<Product> = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| cell(i, j))
            .collect();
        let jagged: Vec<Vec<Product>> = (0..rows)
            .map(|i| (0..cols).map(|j| cell(i, j)).collect())
            .collect();

        Self {
            flat,
            rectangular: Grid { rows, cols, cells },
            jagged,
        }
    }

    pub fn flat(&self) -> &[Product] {
        &self.flat
    }

    pub fn rectangular(&self) -> &Grid {
        &self.rectangular
    }

    pub fn jagged(&self) -> &[Vec<Product>] {
        &self.jagged
    }

    /// Touch every flat item once; returns how many were touched.
    pub fn touch_flat(&mut self) -> usize {
        for product in &mut self.flat {
            touch(product);
        }
        self.flat.len()
    }

    /// Touch every grid cell once, addressing it by `(row, col)`.
    pub fn touch_rectangular(&mut self) -> usize {
        let mut touched = 0;
        for row in 0..self.rectangular.rows {
            for col in 0..self.rectangular.cols {
                if let Some(product) = self.rectangular.get_mut(row, col) {
                    touch(product);
                    touched += 1;
                }
            }
        }
        touched
    }

    /// Touch every item of every jagged row once.
    pub fn touch_jagged(&mut self) -> usize {
        let mut touched = 0;
        for row in &mut self.jagged {
            for product in row.iter_mut() {
                touch(product);
                touched += 1;
            }
        }
        touched
    }

    /// Run one pass per shape and time each.
    pub fn time_passes(&mut self) -> IterationTimings {
        let (flat, flat_count) = timed(|| self.touch_flat());
        let (rectangular, rect_count) = timed(|| self.touch_rectangular());
        let (jagged, jagged_count) = timed(|| self.touch_jagged());

        tracing::debug!(flat_count, rect_count, jagged_count, "iteration passes finished");

        IterationTimings {
            flat,
            rectangular,
            jagged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocktake_core::NameAndCopy;

    fn made() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn parse_dimensions_accepts_rows_colon_cols() {
        assert_eq!(parse_dimensions("100:200"), Some((100, 200)));
        assert_eq!(parse_dimensions(" 3 : 4 "), Some((3, 4)));
        assert_eq!(parse_dimensions("0:0"), Some((0, 0)));
    }

    #[test]
    fn parse_dimensions_rejects_malformed_lines() {
        for raw in ["", "100", "100:", ":5", "1:2:3", "-1:5", "a:b", "1.5:2"] {
            assert_eq!(parse_dimensions(raw), None, "input {raw:?}");
        }
    }

    #[test]
    fn parse_dimensions_rejects_oversized_grids() {
        assert_eq!(parse_dimensions("100000:100000"), None);
        assert_eq!(parse_dimensions("20000000:0"), None);
        let overflow = format!("{}:2", usize::MAX);
        assert_eq!(parse_dimensions(&overflow), None);

        assert_eq!(parse_dimensions("10000:1000"), Some((10_000, 1_000)));
    }

    #[test]
    fn build_populates_every_shape() {
        let shelves = Shelves::build(3, 4, made());

        assert_eq!(shelves.flat().len(), 3);
        assert_eq!(shelves.flat()[2].name(), "Product 2");
        assert_eq!(shelves.flat()[2].code(), 2);

        let grid = shelves.rectangular();
        assert_eq!((grid.rows(), grid.cols()), (3, 4));
        assert_eq!(grid.get(2, 3).unwrap().name(), "Product 2-3");
        assert_eq!(grid.get(2, 3).unwrap().code(), 6);
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 4).is_none());

        assert_eq!(shelves.jagged().len(), 3);
        assert!(shelves.jagged().iter().all(|row| row.len() == 4));
        assert_eq!(shelves.jagged()[1][2].name(), "Product 1-2");
    }

    #[test]
    fn every_element_is_touched_exactly_once_per_pass() {
        let mut shelves = Shelves::build(3, 4, made());

        assert_eq!(shelves.touch_flat(), 3);
        assert_eq!(shelves.touch_rectangular(), 12);
        assert_eq!(shelves.touch_jagged(), 12);

        assert_eq!(shelves.flat()[0].name(), "Product 01");
        assert_eq!(shelves.flat()[0].code(), 1);
        let cell = shelves.rectangular().get(1, 1).unwrap();
        assert_eq!((&*cell.name(), cell.code()), ("Product 1-11", 2));
        let jag = &shelves.jagged()[2][3];
        assert_eq!((&*jag.name(), jag.code()), ("Product 2-31", 7));
    }

    #[test]
    fn time_passes_mutates_all_shapes() {
        let mut shelves = Shelves::build(2, 2, made());
        shelves.time_passes();

        assert!(shelves.flat().iter().all(|p| p.name().ends_with('1')));
        assert!(
            shelves
                .jagged()
                .iter()
                .flatten()
                .all(|p| p.name().ends_with("-01") || p.name().ends_with("-11"))
        );
        assert_eq!(shelves.rectangular().get(0, 0).unwrap().code(), 1);
    }

    #[test]
    fn empty_dimensions_build_empty_shapes() {
        let mut shelves = Shelves::build(0, 5, made());
        assert!(shelves.flat().is_empty());
        assert!(shelves.jagged().is_empty());
        assert_eq!(shelves.touch_rectangular(), 0);
    }
}
