//! Candidate type sets and search results

use std::fmt;

use typecover_chart::{Categories, ChartError};

/// A set of category indices, kept in the order they were chosen
///
/// The search only ever appends indices larger than the current maximum, so
/// every solution it produces is strictly increasing. The type itself does
/// not enforce this; see [`Solution::is_strictly_increasing`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution(Vec<usize>);

impl Solution {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_indices(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }

    /// Parse space-separated category names, e.g. `"Fighting Ice"`
    pub fn parse_names(line: &str, categories: &Categories) -> Result<Self, ChartError> {
        line.split_whitespace()
            .map(|name| {
                categories
                    .index_of(name)
                    .ok_or_else(|| ChartError::UnknownType(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn includes(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn max(&self) -> Option<usize> {
        self.0.iter().copied().max()
    }

    /// Smallest index that may be appended without breaking ordering
    pub fn next_candidate(&self) -> usize {
        self.max().map_or(0, |m| m + 1)
    }

    pub fn is_strictly_increasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0] < w[1])
    }

    /// Category names in solution order
    ///
    /// Indices outside `categories` are skipped.
    pub fn names<'a>(&self, categories: &'a Categories) -> Vec<&'a str> {
        self.0.iter().filter_map(|&i| categories.name(i)).collect()
    }

    /// Render as space-separated category names
    pub fn display<'a>(&'a self, categories: &'a Categories) -> SolutionDisplay<'a> {
        SolutionDisplay {
            solution: self,
            categories,
        }
    }
}

impl From<Vec<usize>> for Solution {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl AsRef<[usize]> for Solution {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Helper returned by [`Solution::display`]
pub struct SolutionDisplay<'a> {
    solution: &'a Solution,
    categories: &'a Categories,
}

impl fmt::Display for SolutionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.solution.names(self.categories).join(" "))
    }
}

/// Solutions in the order the search found them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solutions(Vec<Solution>);

impl Solutions {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Stable sort, smallest sets first
    pub fn sort_by_size(&mut self) {
        self.0.sort_by_key(Solution::len);
    }

    pub fn push(&mut self, solution: Solution) {
        self.0.push(solution);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Solution> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.0
    }
}

impl From<Vec<Solution>> for Solutions {
    fn from(solutions: Vec<Solution>) -> Self {
        Self(solutions)
    }
}

impl IntoIterator for Solutions {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Solutions {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
