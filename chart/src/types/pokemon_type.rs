//! Pokemon type system and the built-in effectiveness chart

use std::str::FromStr;

use super::Effectiveness;
use crate::ChartError;

/// Pokemon types (18 types as of Gen 6+), in chart order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    Fire = 9,
    Water = 10,
    Grass = 11,
    Electric = 12,
    Psychic = 13,
    Ice = 14,
    Dragon = 15,
    Dark = 16,
    Fairy = 17,
}

impl Type {
    /// Number of types in the standard universe
    pub const COUNT: usize = 18;

    /// All 18 Pokemon types
    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Position of this type in chart order
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get type effectiveness against a single defending type
    pub fn effectiveness(&self, defender: Type) -> Effectiveness {
        TYPE_CHART[*self as usize][defender as usize]
    }

    /// Get type effectiveness against multiple defending types (multiplied)
    pub fn effectiveness_multi(&self, defenders: &[Type]) -> f32 {
        defenders
            .iter()
            .map(|t| self.effectiveness(*t).multiplier())
            .product()
    }

    /// Parse a type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fighting" => Some(Type::Fighting),
            "flying" => Some(Type::Flying),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "rock" => Some(Type::Rock),
            "bug" => Some(Type::Bug),
            "ghost" => Some(Type::Ghost),
            "steel" => Some(Type::Steel),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "grass" => Some(Type::Grass),
            "electric" => Some(Type::Electric),
            "psychic" => Some(Type::Psychic),
            "ice" => Some(Type::Ice),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fighting => "Fighting",
            Type::Flying => "Flying",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Rock => "Rock",
            Type::Bug => "Bug",
            Type::Ghost => "Ghost",
            Type::Steel => "Steel",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Grass => "Grass",
            Type::Electric => "Electric",
            Type::Psychic => "Psychic",
            Type::Ice => "Ice",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Type {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ChartError::UnknownType(s.to_string()))
    }
}

const IM: Effectiveness = Effectiveness::Immune;
const WK: Effectiveness = Effectiveness::Weak;
const NE: Effectiveness = Effectiveness::Normal;
const SE: Effectiveness = Effectiveness::Strong;

/// 18x18 type effectiveness chart
/// Row = attacking type, Column = defending type
///
/// Order: Normal, Fighting, Flying, Poison, Ground, Rock, Bug, Ghost, Steel,
///        Fire, Water, Grass, Electric, Psychic, Ice, Dragon, Dark, Fairy
#[rustfmt::skip]
pub static TYPE_CHART: [[Effectiveness; Type::COUNT]; Type::COUNT] = [
    // Normal attacking
    [NE, NE, NE, NE, NE, WK, NE, IM, WK, NE, NE, NE, NE, NE, NE, NE, NE, NE],
    // Fighting attacking
    [SE, NE, WK, WK, NE, SE, WK, IM, SE, NE, NE, NE, NE, WK, SE, NE, SE, WK],
    // Flying attacking
    [NE, SE, NE, NE, NE, WK, SE, NE, WK, NE, NE, SE, WK, NE, NE, NE, NE, NE],
    // Poison attacking
    [NE, NE, NE, WK, WK, WK, NE, WK, IM, NE, NE, SE, NE, NE, NE, NE, NE, SE],
    // Ground attacking
    [NE, NE, IM, SE, NE, SE, WK, NE, SE, SE, NE, WK, SE, NE, NE, NE, NE, NE],
    // Rock attacking
    [NE, WK, SE, NE, WK, NE, SE, NE, WK, SE, NE, NE, NE, NE, SE, NE, NE, NE],
    // Bug attacking
    [NE, WK, WK, WK, NE, NE, NE, WK, WK, WK, NE, SE, NE, SE, NE, NE, SE, WK],
    // Ghost attacking
    [IM, NE, NE, NE, NE, NE, NE, SE, NE, NE, NE, NE, NE, SE, NE, NE, WK, NE],
    // Steel attacking
    [NE, NE, NE, NE, NE, SE, NE, NE, WK, WK, WK, NE, WK, NE, SE, NE, NE, SE],
    // Fire attacking
    [NE, NE, NE, NE, NE, WK, SE, NE, SE, WK, WK, SE, NE, NE, SE, WK, NE, NE],
    // Water attacking
    [NE, NE, NE, NE, SE, SE, NE, NE, NE, SE, WK, WK, NE, NE, NE, WK, NE, NE],
    // Grass attacking
    [NE, NE, WK, WK, SE, SE, WK, NE, WK, WK, SE, WK, NE, NE, NE, WK, NE, NE],
    // Electric attacking
    [NE, NE, SE, NE, IM, NE, NE, NE, NE, NE, SE, WK, WK, NE, NE, WK, NE, NE],
    // Psychic attacking
    [NE, SE, NE, SE, NE, NE, NE, NE, WK, NE, NE, NE, NE, WK, NE, NE, IM, NE],
    // Ice attacking
    [NE, NE, SE, NE, SE, NE, NE, NE, WK, WK, WK, SE, NE, NE, WK, SE, NE, NE],
    // Dragon attacking
    [NE, NE, NE, NE, NE, NE, NE, NE, WK, NE, NE, NE, NE, NE, NE, SE, NE, IM],
    // Dark attacking
    [NE, WK, NE, NE, NE, NE, NE, SE, NE, NE, NE, NE, NE, SE, NE, NE, WK, WK],
    // Fairy attacking
    [NE, SE, NE, WK, NE, NE, NE, NE, WK, WK, NE, NE, NE, NE, NE, SE, SE, NE],
];
