//! Selection store
//!
//! Holds the level currently assigned to every test in the catalog. A
//! selection is always complete: there is no way to build one with a test
//! missing, and levels are restricted to the three [`Level`] variants.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::catalog::{CATALOG, Level, TEST_COUNT, Test};

/// Errors raised when a selection is driven by untyped input (HTTP, CLI)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown test: {0}")]
    UnknownTest(String),

    #[error("Unknown level: {0} (expected Superior, Adequado or Inferior)")]
    UnknownLevel(String),

    #[error("Selection is missing a level for {0}")]
    Missing(Test),

    #[error("Invalid assignment '{0}' (expected <test>=<level>)")]
    InvalidAssignment(String),
}

/// The level assigned to each test, indexed by catalog position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct Selection {
    levels: [Level; TEST_COUNT],
}

impl Selection {
    /// A selection with every test at the same level
    pub fn uniform(level: Level) -> Self {
        Self {
            levels: [level; TEST_COUNT],
        }
    }

    pub fn get(&self, test: Test) -> Level {
        self.levels[test.index()]
    }

    pub fn set(&mut self, test: Test, level: Level) {
        self.levels[test.index()] = level;
    }

    /// Builder-style variant of [`Selection::set`]
    pub fn with(mut self, test: Test, level: Level) -> Self {
        self.set(test, level);
        self
    }

    /// Set a level from string identifiers
    pub fn set_by_key(&mut self, key: &str, level: &str) -> Result<(Test, Level), SelectionError> {
        let test: Test = key.parse()?;
        let level: Level = level.parse()?;
        self.set(test, level);
        Ok((test, level))
    }

    /// Apply a `<test>=<level>` assignment, as given on the command line
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(Test, Level), SelectionError> {
        let (test, level) = assignment
            .split_once('=')
            .ok_or_else(|| SelectionError::InvalidAssignment(assignment.to_string()))?;
        let test: Test = test.parse()?;
        let level: Level = level.parse()?;
        self.set(test, level);
        Ok((test, level))
    }

    /// Levels in catalog order
    pub fn levels(&self) -> &[Level; TEST_COUNT] {
        &self.levels
    }

    /// Ranks in catalog order
    pub fn ranks(&self) -> Vec<u8> {
        self.levels.iter().map(|l| l.rank()).collect()
    }

    /// (test, level) pairs in catalog order
    pub fn entries(&self) -> impl Iterator<Item = (Test, Level)> + '_ {
        CATALOG.iter().map(|&t| (t, self.get(t)))
    }
}

impl TryFrom<BTreeMap<String, String>> for Selection {
    type Error = SelectionError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut selection = Selection::default();
        let mut seen = [false; TEST_COUNT];
        for (key, label) in &map {
            let test: Test = key.parse()?;
            selection.set(test, label.parse()?);
            seen[test.index()] = true;
        }

        match CATALOG.iter().find(|t| !seen[t.index()]) {
            Some(&missing) => Err(SelectionError::Missing(missing)),
            None => Ok(selection),
        }
    }
}

/// Serialized as `{ "<key>": "<Level>" }` in catalog order
impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TEST_COUNT))?;
        for (test, level) in self.entries() {
            map.serialize_entry(test.key(), &level)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_adequado() {
        let selection = Selection::default();
        assert!(selection.levels().iter().all(|&l| l == Level::Adequado));
        assert_eq!(selection.ranks(), vec![2; TEST_COUNT]);
    }

    #[test]
    fn test_set_is_independent_and_idempotent() {
        let mut selection = Selection::default();
        selection.set(Test::Prolec, Level::Inferior);
        selection.set(Test::Prolec, Level::Inferior);

        assert_eq!(selection.get(Test::Prolec), Level::Inferior);
        assert_eq!(selection.get(Test::Tena), Level::Adequado);
        assert_eq!(selection.ranks(), vec![2, 2, 1, 2, 2, 2, 2]);
    }

    #[test]
    fn test_set_by_key() {
        let mut selection = Selection::default();
        let applied = selection.set_by_key("abfw", "superior").unwrap();
        assert_eq!(applied, (Test::Abfw, Level::Superior));

        assert_eq!(
            selection.set_by_key("wisc", "Superior"),
            Err(SelectionError::UnknownTest("wisc".to_string()))
        );
        assert_eq!(
            selection.set_by_key("tena", "Bom"),
            Err(SelectionError::UnknownLevel("Bom".to_string()))
        );
        // Failed updates leave the selection untouched
        assert_eq!(selection.get(Test::Tena), Level::Adequado);
    }

    #[test]
    fn test_keys_parse_the_same_everywhere() {
        let mut selection = Selection::default();
        selection.set_by_key("ABFW", "Inferior").unwrap();
        selection.apply_assignment("Tena=Superior").unwrap();
        assert_eq!(selection.get(Test::Abfw), Level::Inferior);
        assert_eq!(selection.get(Test::Tena), Level::Superior);

        let map: BTreeMap<String, String> = CATALOG
            .iter()
            .map(|t| (t.key().to_uppercase(), "Superior".to_string()))
            .collect();
        assert_eq!(Selection::try_from(map), Ok(Selection::uniform(Level::Superior)));
    }

    #[test]
    fn test_apply_assignment() {
        let mut selection = Selection::default();
        selection.apply_assignment("sintatica=Inferior").unwrap();
        assert_eq!(selection.get(Test::Sintatica), Level::Inferior);

        assert!(matches!(
            selection.apply_assignment("sintatica"),
            Err(SelectionError::InvalidAssignment(_))
        ));
    }

    #[test]
    fn test_serialize_in_catalog_order() {
        let selection = Selection::default().with(Test::Abfw, Level::Superior);
        let json = serde_json::to_string(&selection).unwrap();
        assert!(json.starts_with(r#"{"abfw":"Superior","tena":"Adequado""#));
        assert!(json.ends_with(r#""fonologica":"Adequado"}"#));
    }

    #[test]
    fn test_deserialize_requires_every_test() {
        let full = serde_json::to_string(&Selection::uniform(Level::Inferior)).unwrap();
        let parsed: Selection = serde_json::from_str(&full).unwrap();
        assert_eq!(parsed, Selection::uniform(Level::Inferior));

        let partial = r#"{"abfw": "Superior"}"#;
        let err = serde_json::from_str::<Selection>(partial).unwrap_err();
        assert!(err.to_string().contains("missing a level"));

        let mut map: BTreeMap<String, String> = CATALOG
            .iter()
            .map(|t| (t.key().to_string(), "Adequado".to_string()))
            .collect();
        map.insert("wisc".to_string(), "Adequado".to_string());
        assert_eq!(
            Selection::try_from(map),
            Err(SelectionError::UnknownTest("wisc".to_string()))
        );
    }
}
