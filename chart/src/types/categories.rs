//! The ordered category universe a chart and a search are built over

use super::Type;

/// Ordered list of category names
///
/// A category is identified by its position in this list. Charts, solutions
/// and rendering all index through the same `Categories` value, so a smaller
/// universe can be used in place of the 18 standard types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categories {
    names: Vec<String>,
}

impl Categories {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The 18 standard types in chart order
    pub fn standard() -> Self {
        Self::new(Type::all().iter().map(|t| t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Find a category by name (case-insensitive)
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.names.iter().position(|n| n.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for Categories {
    fn default() -> Self {
        Self::standard()
    }
}
