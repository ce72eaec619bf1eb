//! Test catalog and result levels
//!
//! The seven neuropsychological tests shown on the dashboard and the three
//! qualitative levels a clinician can assign to each of them. Both tables are
//! fixed at compile time; the catalog order is the axis order of every chart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::selection::SelectionError;

/// A neuropsychological test on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Test {
    Abfw,
    Tena,
    Prolec,
    Tde2,
    Neupsilim,
    /// Prova de Consciência Sintática
    Sintatica,
    /// Prova de Consciência Fonológica
    Fonologica,
}

/// Number of tests in the catalog
pub const TEST_COUNT: usize = 7;

/// Tests in display order
pub const CATALOG: [Test; TEST_COUNT] = [
    Test::Abfw,
    Test::Tena,
    Test::Prolec,
    Test::Tde2,
    Test::Neupsilim,
    Test::Sintatica,
    Test::Fonologica,
];

impl Test {
    /// Position of this test in the catalog
    pub fn index(self) -> usize {
        match self {
            Test::Abfw => 0,
            Test::Tena => 1,
            Test::Prolec => 2,
            Test::Tde2 => 3,
            Test::Neupsilim => 4,
            Test::Sintatica => 5,
            Test::Fonologica => 6,
        }
    }

    /// Stable identity key used by widgets and the HTTP API
    pub fn key(self) -> &'static str {
        match self {
            Test::Abfw => "abfw",
            Test::Tena => "tena",
            Test::Prolec => "prolec",
            Test::Tde2 => "tde2",
            Test::Neupsilim => "neupsilim",
            Test::Sintatica => "sintatica",
            Test::Fonologica => "fonologica",
        }
    }

    /// Label shown on chart axes and next to the dropdown
    pub fn label(self) -> &'static str {
        match self {
            Test::Abfw => "ABFW",
            Test::Tena => "TENA",
            Test::Prolec => "PROLEC",
            Test::Tde2 => "TDE2",
            Test::Neupsilim => "NEUPSILIM",
            Test::Sintatica => "PROVA DE CONSCIÊNCIA SINTÁTICA",
            Test::Fonologica => "PROVA DE CONSCIÊNCIA FONOLÓGICA",
        }
    }

    /// Look up a test by its identity key
    pub fn from_key(key: &str) -> Option<Self> {
        CATALOG.iter().copied().find(|t| t.key() == key)
    }
}

impl fmt::Display for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Test {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Test::from_key(&key).ok_or_else(|| SelectionError::UnknownTest(s.to_string()))
    }
}

/// Test labels in catalog order
pub fn labels() -> Vec<&'static str> {
    CATALOG.iter().map(|t| t.label()).collect()
}

/// An RGBA display color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Colors are emitted in CSS notation so Plotly can use them directly
impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Qualitative result of a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    Superior,
    #[default]
    Adequado,
    Inferior,
}

/// All levels, in the order the dropdowns offer them
pub const LEVELS: [Level; 3] = [Level::Superior, Level::Adequado, Level::Inferior];

/// Rank of the reference baseline drawn on both charts
pub const BASELINE_RANK: u8 = Level::Adequado.rank();

impl Level {
    /// Numeric rank plotted on the charts (higher = better)
    pub const fn rank(self) -> u8 {
        match self {
            Level::Superior => 3,
            Level::Adequado => 2,
            Level::Inferior => 1,
        }
    }

    /// Display color (green, blue, red)
    pub const fn color(self) -> Rgba {
        match self {
            Level::Superior => Rgba::new(76, 187, 23, 0.6),
            Level::Adequado => Rgba::new(40, 116, 166, 0.6),
            Level::Inferior => Rgba::new(219, 50, 54, 0.6),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Superior => "Superior",
            Level::Adequado => "Adequado",
            Level::Inferior => "Inferior",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Level {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LEVELS
            .iter()
            .copied()
            .find(|l| l.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SelectionError::UnknownLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order_matches_index() {
        for (i, test) in CATALOG.iter().enumerate() {
            assert_eq!(test.index(), i);
        }
        assert_eq!(
            labels(),
            vec![
                "ABFW",
                "TENA",
                "PROLEC",
                "TDE2",
                "NEUPSILIM",
                "PROVA DE CONSCIÊNCIA SINTÁTICA",
                "PROVA DE CONSCIÊNCIA FONOLÓGICA",
            ]
        );
    }

    #[test]
    fn test_keys_are_unique_and_round_trip() {
        let keys: HashSet<_> = CATALOG.iter().map(|t| t.key()).collect();
        assert_eq!(keys.len(), TEST_COUNT);
        for test in CATALOG {
            assert_eq!(Test::from_key(test.key()), Some(test));
        }
        assert_eq!("ABFW".parse::<Test>().unwrap(), Test::Abfw);
        assert!("WISC".parse::<Test>().is_err());
    }

    #[test]
    fn test_rank_is_bijection() {
        let ranks: Vec<u8> = LEVELS.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![3, 2, 1]);
        assert_eq!(BASELINE_RANK, 2);
    }

    #[test]
    fn test_colors_are_distinct_constants() {
        assert_eq!(Level::Superior.color().to_string(), "rgba(76, 187, 23, 0.6)");
        assert_eq!(Level::Adequado.color().to_string(), "rgba(40, 116, 166, 0.6)");
        assert_eq!(Level::Inferior.color().to_string(), "rgba(219, 50, 54, 0.6)");
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("superior".parse::<Level>().unwrap(), Level::Superior);
        assert_eq!(" Inferior ".parse::<Level>().unwrap(), Level::Inferior);
        assert!(matches!(
            "Excelente".parse::<Level>(),
            Err(SelectionError::UnknownLevel(_))
        ));
        assert_eq!(Level::default(), Level::Adequado);
    }

    #[test]
    fn test_color_serializes_as_css() {
        let json = serde_json::to_string(&Level::Inferior.color()).unwrap();
        assert_eq!(json, "\"rgba(219, 50, 54, 0.6)\"");
    }
}
