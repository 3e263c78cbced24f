//! Depth-first enumeration of covering type sets

use typecover_chart::TypeChart;

use crate::coverage::{
    CoverageMode, DefenseRule, all_covered_defense, all_covered_defense_every_attacker,
    all_covered_offense, uncovered_defenders, unresisted_attackers,
};
use crate::solution::{Solution, Solutions};

/// Index every offensive search starts from unless a seed is given (Fighting).
/// Normal is never worth picking for offense, so it is left out entirely.
pub const OFFENSIVE_SEED: usize = 1;

/// Parameters for [`find_type_coverage`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub mode: CoverageMode,
    /// Only consulted for [`CoverageMode::Defense`]
    pub defense_rule: DefenseRule,
    /// Set to start from instead of the mode's default seed
    pub seed: Option<Solution>,
}

impl SearchConfig {
    pub fn offense() -> Self {
        Self::default()
    }

    pub fn defense() -> Self {
        Self {
            mode: CoverageMode::Defense,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: Solution) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_defense_rule(mut self, rule: DefenseRule) -> Self {
        self.defense_rule = rule;
        self
    }

    /// The set the search starts from on `chart`
    ///
    /// An explicit seed is sorted and de-duplicated, and indices outside the
    /// chart are dropped.
    pub fn initial_set(&self, chart: &TypeChart) -> Vec<usize> {
        match &self.seed {
            Some(seed) => {
                let mut chosen: Vec<usize> = seed
                    .indices()
                    .iter()
                    .copied()
                    .filter(|&i| i < chart.len())
                    .collect();
                if chosen.len() != seed.len() {
                    tracing::warn!(
                        seed = ?seed.indices(),
                        categories = chart.len(),
                        "Dropping seed indices outside the chart"
                    );
                }
                chosen.sort_unstable();
                chosen.dedup();
                chosen
            }
            None => match self.mode {
                CoverageMode::Offense if OFFENSIVE_SEED < chart.len() => vec![OFFENSIVE_SEED],
                CoverageMode::Offense | CoverageMode::Defense => Vec::new(),
            },
        }
    }
}

/// Check `chosen` against the predicate selected by `config`
pub fn is_covered(chart: &TypeChart, config: &SearchConfig, chosen: &[usize]) -> bool {
    match (config.mode, config.defense_rule) {
        (CoverageMode::Offense, _) => all_covered_offense(chart, chosen),
        (CoverageMode::Defense, DefenseRule::Members) => all_covered_defense(chart, chosen),
        (CoverageMode::Defense, DefenseRule::EveryAttacker) => {
            all_covered_defense_every_attacker(chart, chosen)
        }
    }
}

/// Find every covering type set reachable from the seed
///
/// Sets are grown one index at a time, always with an index larger than any
/// already chosen, so each set is visited once and comes out strictly
/// increasing. A branch stops as soon as its set covers; the result is in
/// depth-first discovery order, not sorted by size.
pub fn find_type_coverage(chart: &TypeChart, config: &SearchConfig) -> Solutions {
    let mut chosen = config.initial_set(chart);
    let next = chosen.last().map_or(0, |&max| max + 1);

    tracing::debug!(
        mode = %config.mode,
        defense_rule = %config.defense_rule,
        seed = ?chosen,
        categories = chart.len(),
        "Starting coverage search"
    );

    let mut solutions = Solutions::new();
    search(chart, config, &mut chosen, next, &mut solutions);

    if solutions.is_empty() {
        let full: Vec<usize> = (0..chart.len()).collect();
        let missing = match config.mode {
            CoverageMode::Offense => uncovered_defenders(chart, &full),
            CoverageMode::Defense => unresisted_attackers(chart, &full),
        };
        tracing::debug!(missing = ?missing, "No covering set found");
    }

    tracing::debug!(solutions = solutions.len(), "Coverage search finished");
    solutions
}

fn search(
    chart: &TypeChart,
    config: &SearchConfig,
    chosen: &mut Vec<usize>,
    next: usize,
    solutions: &mut Solutions,
) {
    if is_covered(chart, config, chosen.as_slice()) {
        solutions.push(Solution::from_indices(chosen.as_slice()));
        return;
    }

    for candidate in next..chart.len() {
        chosen.push(candidate);
        search(chart, config, chosen, candidate + 1, solutions);
        chosen.pop();
    }
}
