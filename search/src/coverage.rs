//! Coverage predicates over a type chart

use typecover_chart::TypeChart;

/// Which side of the chart a set of types has to cover
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoverageMode {
    /// Every defending type is hit super effectively by some member
    #[default]
    Offense,
    /// See [`DefenseRule`]
    Defense,
}

impl CoverageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageMode::Offense => "offense",
            CoverageMode::Defense => "defense",
        }
    }
}

impl std::fmt::Display for CoverageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How defensive coverage is judged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefenseRule {
    /// Every member resists (or is immune to) at least one attacking type.
    /// Only the members themselves are checked.
    #[default]
    Members,
    /// Every attacking type is resisted by at least one member
    EveryAttacker,
}

impl DefenseRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefenseRule::Members => "members",
            DefenseRule::EveryAttacker => "every-attacker",
        }
    }
}

impl std::fmt::Display for DefenseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check if every defending type is hit super effectively by one of `chosen`
pub fn all_covered_offense(chart: &TypeChart, chosen: &[usize]) -> bool {
    (0..chart.len()).all(|defender| {
        chosen
            .iter()
            .any(|&attacker| chart.relation(attacker, defender).is_super_effective())
    })
}

/// Check if every type in `chosen` resists at least one attacking type
///
/// An empty set covers nothing.
pub fn all_covered_defense(chart: &TypeChart, chosen: &[usize]) -> bool {
    if chosen.is_empty() {
        return false;
    }
    chosen.iter().all(|&defender| {
        (0..chart.len()).any(|attacker| chart.relation(attacker, defender).resists())
    })
}

/// Check if every attacking type is resisted by at least one of `chosen`
pub fn all_covered_defense_every_attacker(chart: &TypeChart, chosen: &[usize]) -> bool {
    (0..chart.len()).all(|attacker| {
        chosen
            .iter()
            .any(|&defender| chart.relation(attacker, defender).resists())
    })
}

/// Get all defending types that none of `chosen` hits super effectively
pub fn uncovered_defenders(chart: &TypeChart, chosen: &[usize]) -> Vec<usize> {
    (0..chart.len())
        .filter(|&defender| {
            !chosen
                .iter()
                .any(|&attacker| chart.relation(attacker, defender).is_super_effective())
        })
        .collect()
}

/// Get all attacking types that none of `chosen` resists
pub fn unresisted_attackers(chart: &TypeChart, chosen: &[usize]) -> Vec<usize> {
    (0..chart.len())
        .filter(|&attacker| {
            !chosen
                .iter()
                .any(|&defender| chart.relation(attacker, defender).resists())
        })
        .collect()
}
