//! Pokedex reference data
//!
//! The pokedex file holds one record per Pokemon, three lines each:
//!
//! ```text
//! #0001
//! Bulbasaur
//! Grass · Poison
//! ```
//!
//! Blank lines between records are ignored.

use std::io::BufRead;

use crate::DexError;
use crate::types::Type;

/// Separator between the types of a dual-type Pokemon
pub const TYPE_SEPARATOR: &str = " · ";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pokemon {
    /// National dex number
    pub number: u32,
    pub name: String,
    /// One or two types, primary first
    pub types: Vec<Type>,
}

impl Pokemon {
    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pokedex {
    entries: Vec<Pokemon>,
}

impl Pokedex {
    pub fn parse(text: &str) -> Result<Self, DexError> {
        Self::from_lines(text.lines().map(Ok))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DexError> {
        Self::from_lines(reader.lines())
    }

    fn from_lines<I, S>(lines: I) -> Result<Self, DexError>
    where
        I: IntoIterator<Item = std::io::Result<S>>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        for (i, line) in lines.into_iter().enumerate() {
            let line = line?;
            let line = line.as_ref().trim();
            if !line.is_empty() {
                records.push((i + 1, line.to_string()));
            }
        }

        let mut entries = Vec::with_capacity(records.len() / 3);
        for chunk in records.chunks(3) {
            let [(line, number), (_, name), (types_line, types)] = chunk else {
                return Err(DexError::TruncatedEntry { line: chunk[0].0 });
            };

            entries.push(Pokemon {
                number: parse_number(*line, number)?,
                name: name.clone(),
                types: parse_types(*types_line, types)?,
            });
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.entries.iter()
    }

    /// All Pokemon that have `t` as one of their types
    pub fn of_type(&self, t: Type) -> impl Iterator<Item = &Pokemon> {
        self.entries.iter().filter(move |p| p.has_type(t))
    }

    /// Number of Pokemon carrying each type, indexed in chart order
    pub fn count_by_type(&self) -> [usize; Type::COUNT] {
        let mut counts = [0; Type::COUNT];
        for t in self.entries.iter().flat_map(|p| &p.types) {
            counts[t.index()] += 1;
        }
        counts
    }
}

fn parse_number(line: usize, value: &str) -> Result<u32, DexError> {
    let digits = value.trim_start_matches('#').trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse().map_err(|_| DexError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

fn parse_types(line: usize, value: &str) -> Result<Vec<Type>, DexError> {
    value
        .split(TYPE_SEPARATOR)
        .map(|name| {
            Type::from_name(name).ok_or_else(|| DexError::UnknownType {
                line,
                name: name.to_string(),
            })
        })
        .collect()
}
