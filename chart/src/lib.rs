//! Type effectiveness chart and pokedex parsing.
//!
//! This crate owns the data side of type coverage analysis: the fixed
//! universe of Pokemon types, the four effectiveness levels, the square
//! attacker/defender matrix and the auxiliary pokedex file.
//!
//! # Overview
//!
//! ```text
//! chart.txt ──> TypeChart (immutable matrix) ← THIS CRATE
//!                    │
//!                    ▼
//!            typecover-search (coverage search)
//!                    │
//!                    ▼
//!               typecover (cli)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - The 18 Pokemon types in chart order
//! - [`Categories`] - The ordered category universe a chart is built over
//! - [`Effectiveness`] - Immune, Weak, Normal or Strong
//! - [`TypeChart`] - The square effectiveness matrix, parsed or built-in
//! - [`Pokedex`] - Pokemon entries read from the reference data file
//!
//! # Example Usage
//!
//! ```ignore
//! use typecover_chart::{Categories, TypeChart, STANDARD_CHART_TEXT};
//!
//! let chart = TypeChart::parse(STANDARD_CHART_TEXT, Categories::standard())?;
//! assert_eq!(chart, TypeChart::standard());
//! println!("{chart}");
//! ```

pub mod chart;
pub mod dex;
pub mod types;

use thiserror::Error;

pub use chart::{CHART_DELIMITER, STANDARD_CHART_TEXT, TypeChart};
pub use dex::{Pokedex, Pokemon};
pub use types::{Categories, Effectiveness, TYPE_CHART, Type};

/// Errors from reading a chart or a type name
///
/// Row and column positions are 1-based.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Unrecognized effectiveness {token:?} at row {row}, column {column}")]
    InvalidToken {
        row: usize,
        column: usize,
        token: String,
    },

    #[error("Row {row} has {found} entries, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Chart has {found} rows, expected {expected}")]
    MissingRows { expected: usize, found: usize },

    #[error("Chart is not square: expected {expected} categories, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Failed to read chart: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum DexError {
    #[error("Invalid pokedex number {value:?} on line {line}")]
    InvalidNumber { line: usize, value: String },

    #[error("Pokedex entry starting on line {line} is incomplete")]
    TruncatedEntry { line: usize },

    #[error("Unknown type {name:?} on line {line}")]
    UnknownType { line: usize, name: String },

    #[error("Failed to read pokedex: {0}")]
    Io(#[from] std::io::Error),
}
