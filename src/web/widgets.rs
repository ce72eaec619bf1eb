//! Page layout descriptors
//!
//! The frontend builds its controls from these descriptors instead of
//! hard-coding them: one dropdown per catalog entry, keyed by the test's
//! identity, each offering the same three levels.

use serde::Serialize;

use crate::catalog::{CATALOG, LEVELS, Level, Test};
use crate::config::DisplaySection;
use crate::selection::Selection;

/// One option of a dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: &'static str,
    pub value: Level,
}

/// A select control bound to one test
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub test: Test,
    pub label: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: Level,
}

impl Dropdown {
    fn for_test(test: Test, value: Level) -> Self {
        Self {
            id: format!("{}-dropdown", test.key()),
            test,
            label: test.label(),
            options: LEVELS
                .iter()
                .map(|&level| DropdownOption {
                    label: level.label(),
                    value: level,
                })
                .collect(),
            value,
        }
    }
}

/// Everything the page needs to render its static structure
#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    pub title: String,
    pub sidebar_title: String,
    pub toggle_label: String,
    pub dropdowns: Vec<Dropdown>,
}

impl PageLayout {
    /// Build the layout, with each dropdown showing the selection's level
    pub fn new(display: &DisplaySection, selection: &Selection) -> Self {
        Self {
            title: display.title.clone(),
            sidebar_title: display.sidebar_title.clone(),
            toggle_label: display.toggle_label.clone(),
            dropdowns: dropdowns(selection),
        }
    }
}

/// One dropdown per test, in catalog order
pub fn dropdowns(selection: &Selection) -> Vec<Dropdown> {
    CATALOG
        .iter()
        .map(|&test| Dropdown::for_test(test, selection.get(test)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TEST_COUNT;

    #[test]
    fn test_one_dropdown_per_test() {
        let dropdowns = dropdowns(&Selection::default());
        assert_eq!(dropdowns.len(), TEST_COUNT);

        for (dropdown, test) in dropdowns.iter().zip(CATALOG) {
            assert_eq!(dropdown.test, test);
            assert_eq!(dropdown.label, test.label());
            assert_eq!(dropdown.value, Level::Adequado);
            let values: Vec<Level> = dropdown.options.iter().map(|o| o.value).collect();
            assert_eq!(values, LEVELS.to_vec());
        }
        assert_eq!(dropdowns[0].id, "abfw-dropdown");
    }

    #[test]
    fn test_dropdown_reflects_selection() {
        let selection = Selection::default().with(Test::Neupsilim, Level::Superior);
        let layout = PageLayout::new(&DisplaySection::default(), &selection);

        assert_eq!(layout.dropdowns[4].value, Level::Superior);
        assert_eq!(layout.sidebar_title, "Opções de Resultados");

        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["dropdowns"][4]["test"], "neupsilim");
        assert_eq!(json["dropdowns"][4]["value"], "Superior");
        assert_eq!(json["dropdowns"][0]["options"][2]["label"], "Inferior");
    }
}
