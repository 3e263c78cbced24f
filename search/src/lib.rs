//! Type coverage search.
//!
//! Enumerates the sets of types that together cover a [`TypeChart`], either
//! offensively (every defending type is hit super effectively by some member)
//! or defensively (see [`DefenseRule`] for the two readings).
//!
//! # Example Usage
//!
//! ```ignore
//! use typecover_chart::TypeChart;
//! use typecover_search::{find_type_coverage, SearchConfig};
//!
//! let chart = TypeChart::standard();
//! let mut solutions = find_type_coverage(&chart, &SearchConfig::offense());
//! solutions.sort_by_size();
//!
//! for solution in &solutions {
//!     println!("{}", solution.display(chart.categories()));
//! }
//! ```

pub mod coverage;
pub mod search;
pub mod solution;

#[cfg(test)]
mod tests;

pub use coverage::{
    CoverageMode, DefenseRule, all_covered_defense, all_covered_defense_every_attacker,
    all_covered_offense, unresisted_attackers, uncovered_defenders,
};
pub use search::{OFFENSIVE_SEED, SearchConfig, find_type_coverage, is_covered};
pub use solution::{Solution, SolutionDisplay, Solutions};

pub use typecover_chart::{Categories, ChartError, Effectiveness, TypeChart};
