//! The square type effectiveness matrix

use std::fmt::{self, Write as _};
use std::io::BufRead;

use crate::ChartError;
use crate::types::{Categories, Effectiveness, TYPE_CHART};

/// Separator between the tokens of one chart row
pub const CHART_DELIMITER: &str = "  ";

/// The standard chart in file format, as shipped in `data/chart.txt`
pub const STANDARD_CHART_TEXT: &str = include_str!("../data/chart.txt");

/// Effectiveness of every attacking category against every defending category
///
/// Indexed `[attacker][defender]`, one row and one column per category in
/// universe order. The matrix is fully populated on construction and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChart {
    categories: Categories,
    /// Row-major, `len * len` cells
    cells: Vec<Effectiveness>,
}

impl TypeChart {
    /// The built-in Gen 6+ chart over the 18 standard types
    pub fn standard() -> Self {
        Self {
            categories: Categories::standard(),
            cells: TYPE_CHART.iter().flatten().copied().collect(),
        }
    }

    /// Build a chart from already-parsed rows
    pub fn from_rows(
        categories: Categories,
        rows: Vec<Vec<Effectiveness>>,
    ) -> Result<Self, ChartError> {
        let size = categories.len();
        if rows.len() != size {
            return Err(ChartError::SizeMismatch {
                expected: size,
                found: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(ChartError::RowLength {
                    row: i + 1,
                    expected: size,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self { categories, cells })
    }

    /// Parse a chart from text, one attacking category per line
    pub fn parse(text: &str, categories: Categories) -> Result<Self, ChartError> {
        Self::from_lines(text.lines().map(Ok), categories)
    }

    /// Parse a chart from a buffered reader (e.g. an opened chart file)
    pub fn from_reader<R: BufRead>(reader: R, categories: Categories) -> Result<Self, ChartError> {
        Self::from_lines(reader.lines(), categories)
    }

    fn from_lines<I, S>(lines: I, categories: Categories) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = std::io::Result<S>>,
        S: AsRef<str>,
    {
        let size = categories.len();
        let mut cells = Vec::with_capacity(size * size);
        let mut lines = lines.into_iter();

        // Anything after the last required row is ignored
        for row in 0..size {
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(ChartError::MissingRows {
                        expected: size,
                        found: row,
                    });
                }
            };
            parse_row(line.as_ref(), row, size, &mut cells)?;
        }

        Ok(Self { categories, cells })
    }

    /// Number of categories (rows and columns)
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    /// Effectiveness of `attacker` against `defender`
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the category universe.
    pub fn relation(&self, attacker: usize, defender: usize) -> Effectiveness {
        self.row(attacker)[defender]
    }

    pub fn get(&self, attacker: usize, defender: usize) -> Option<Effectiveness> {
        if attacker < self.len() && defender < self.len() {
            Some(self.relation(attacker, defender))
        } else {
            None
        }
    }

    /// All defending matchups for one attacking category
    pub fn row(&self, attacker: usize) -> &[Effectiveness] {
        let size = self.len();
        &self.cells[attacker * size..(attacker + 1) * size]
    }
}

fn parse_row(
    line: &str,
    row: usize,
    size: usize,
    cells: &mut Vec<Effectiveness>,
) -> Result<(), ChartError> {
    let line = line.trim_end_matches(|c: char| c == '\r' || c == ' ');
    let tokens: Vec<&str> = line.split(CHART_DELIMITER).collect();

    if tokens.len() != size {
        return Err(ChartError::RowLength {
            row: row + 1,
            expected: size,
            found: tokens.len(),
        });
    }

    for (column, token) in tokens.into_iter().enumerate() {
        let e = Effectiveness::from_token(token).ok_or_else(|| ChartError::InvalidToken {
            row: row + 1,
            column: column + 1,
            token: token.to_string(),
        })?;
        cells.push(e);
    }

    Ok(())
}

impl fmt::Display for TypeChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::from("     |");
        for (i, name) in self.categories.iter().enumerate() {
            if i > 0 {
                s.push_str(" |");
            }
            s.push(' ');
            s.push_str(name);
        }
        s.push('\n');

        let separator = "-".repeat(4 + 7 * self.len());
        for (i, name) in self.categories.iter().enumerate() {
            if i % 3 == 0 {
                s.push_str(&separator);
                s.push('\n');
            }
            s.push_str(name);
            s.push_str(" |");
            for (j, e) in self.row(i).iter().enumerate() {
                if j > 0 {
                    s.push_str("  |");
                }
                write!(s, "   {e}")?;
            }
            s.push('\n');
        }

        f.write_str(&s)
    }
}
