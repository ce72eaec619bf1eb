//! Selection panel visibility
//!
//! The "show/hide" button only counts clicks. Visibility is the parity of
//! that count: even means visible, odd means hidden.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelVisibility {
    Visible,
    Hidden,
}

impl PanelVisibility {
    /// Visibility for a given number of clicks
    pub fn from_clicks(clicks: u64) -> Self {
        if clicks % 2 == 0 {
            PanelVisibility::Visible
        } else {
            PanelVisibility::Hidden
        }
    }

    /// CSS `display` value for the panel
    pub fn style(self) -> &'static str {
        match self {
            PanelVisibility::Visible => "block",
            PanelVisibility::Hidden => "none",
        }
    }
}

impl fmt::Display for PanelVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelVisibility::Visible => write!(f, "visible"),
            PanelVisibility::Hidden => write!(f, "hidden"),
        }
    }
}

/// Click counter behind the toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelToggle {
    clicks: u64,
}

impl PanelToggle {
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn click(&mut self) -> PanelVisibility {
        self.clicks = self.clicks.wrapping_add(1);
        self.visibility()
    }

    pub fn visibility(&self) -> PanelVisibility {
        PanelVisibility::from_clicks(self.clicks)
    }
}

/// Panel state as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct PanelState {
    pub clicks: u64,
    pub visibility: PanelVisibility,
    pub style: PanelStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelStyle {
    pub display: &'static str,
}

impl From<PanelToggle> for PanelState {
    fn from(toggle: PanelToggle) -> Self {
        let visibility = toggle.visibility();
        Self {
            clicks: toggle.clicks(),
            visibility,
            style: PanelStyle {
                display: visibility.style(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_visible() {
        let toggle = PanelToggle::default();
        assert_eq!(toggle.clicks(), 0);
        assert_eq!(toggle.visibility(), PanelVisibility::Visible);
    }

    #[test]
    fn test_each_click_flips() {
        let mut toggle = PanelToggle::default();
        for n in 1..=10u64 {
            let visibility = toggle.click();
            let expected = if n % 2 == 0 {
                PanelVisibility::Visible
            } else {
                PanelVisibility::Hidden
            };
            assert_eq!(visibility, expected);
        }
    }

    #[test]
    fn test_style() {
        assert_eq!(PanelVisibility::from_clicks(4).style(), "block");
        assert_eq!(PanelVisibility::from_clicks(7).style(), "none");

        let state = PanelState::from(PanelToggle::default());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["visibility"], "visible");
        assert_eq!(json["style"]["display"], "block");
    }
}
