//! Effectiveness levels between an attacking and a defending type

/// How well an attacking type performs against a defending type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effectiveness {
    Immune,
    Weak,
    Normal,
    Strong,
}

impl Effectiveness {
    pub const ALL: [Effectiveness; 4] = [
        Effectiveness::Immune,
        Effectiveness::Weak,
        Effectiveness::Normal,
        Effectiveness::Strong,
    ];

    /// Damage multiplier (0x, 0.5x, 1x, 2x)
    pub fn multiplier(self) -> f32 {
        match self {
            Effectiveness::Immune => 0.0,
            Effectiveness::Weak => 0.5,
            Effectiveness::Normal => 1.0,
            Effectiveness::Strong => 2.0,
        }
    }

    /// Parse a chart file token ("0×", "½×", "1×", "2×")
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "0×" => Some(Effectiveness::Immune),
            "½×" => Some(Effectiveness::Weak),
            "1×" => Some(Effectiveness::Normal),
            "2×" => Some(Effectiveness::Strong),
            _ => None,
        }
    }

    /// Convert to chart file format
    pub fn token(self) -> &'static str {
        match self {
            Effectiveness::Immune => "0×",
            Effectiveness::Weak => "½×",
            Effectiveness::Normal => "1×",
            Effectiveness::Strong => "2×",
        }
    }

    /// Glyph used when rendering the chart grid
    pub fn symbol(self) -> &'static str {
        match self {
            Effectiveness::Immune => "0",
            Effectiveness::Weak => "½",
            Effectiveness::Normal => "1",
            Effectiveness::Strong => "2",
        }
    }

    /// The defender takes reduced or no damage
    pub fn resists(self) -> bool {
        matches!(self, Effectiveness::Immune | Effectiveness::Weak)
    }

    pub fn is_super_effective(self) -> bool {
        self == Effectiveness::Strong
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
