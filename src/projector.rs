//! Chart projector
//!
//! Maps a [`Selection`] snapshot to the two dashboard figures. The output is
//! a Plotly-compatible figure description (`data` + `layout`) that the
//! browser renders as-is.
//!
//! Both charts draw the same reference baseline at the rank of
//! [`Level::Adequado`]: a constant ring on the radar chart and a dashed line
//! on the bar chart. Tick labels on the value axes are hidden because only
//! shape, height and color carry meaning.

use serde::Serialize;

use crate::catalog::{self, BASELINE_RANK, Rgba, TEST_COUNT};
use crate::selection::Selection;

/// Fill of the radar chart's reference ring
pub const BASELINE_FILL: Rgba = Rgba::new(0, 0, 0, 0.1);

/// Color of the bar chart's reference line
pub const BASELINE_LINE: Rgba = Rgba::new(0, 0, 0, 1.0);

/// Default bar chart title
pub const DEFAULT_BAR_TITLE: &str = "Resultados dos Testes";

/// Default bar chart category axis title
pub const DEFAULT_BAR_AXIS_TITLE: &str = "Testes";

/// Both dashboard figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Charts {
    pub radar: Figure,
    pub bar: Figure,
}

/// A Plotly figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatterpolar(PolarTrace),
    Bar(BarTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarTrace {
    pub r: Vec<u8>,
    pub theta: Vec<&'static str>,
    pub fill: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<&'static str>,
    pub y: Vec<u8>,
    pub marker: Marker,
}

/// Per-point marker colors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: Vec<Rgba>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar: Option<Polar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    pub showlegend: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polar {
    pub radialaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub showticklabels: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i16>,
}

/// A layout shape; only horizontal reference lines are drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub xref: &'static str,
    pub x0: f64,
    pub x1: f64,
    pub yref: &'static str,
    pub y0: u8,
    pub y1: u8,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: Rgba,
    pub width: u8,
    pub dash: &'static str,
}

/// Titles used by the bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub bar_title: String,
    pub bar_axis_title: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            bar_title: DEFAULT_BAR_TITLE.to_string(),
            bar_axis_title: DEFAULT_BAR_AXIS_TITLE.to_string(),
        }
    }
}

/// Project a selection onto both figures
pub fn project(selection: &Selection, labels: &ChartLabels) -> Charts {
    Charts {
        radar: radar_chart(selection),
        bar: bar_chart(selection, labels),
    }
}

fn level_colors(selection: &Selection) -> Vec<Rgba> {
    selection.levels().iter().map(|l| l.color()).collect()
}

/// Radar chart: reference ring plus the selected profile
pub fn radar_chart(selection: &Selection) -> Figure {
    let background = PolarTrace {
        r: vec![BASELINE_RANK; TEST_COUNT],
        theta: catalog::labels(),
        fill: "toself",
        fillcolor: Some(BASELINE_FILL),
        mode: Some("none"),
        marker: None,
        showlegend: false,
    };

    let profile = PolarTrace {
        r: selection.ranks(),
        theta: catalog::labels(),
        fill: "toself",
        fillcolor: None,
        mode: None,
        marker: Some(Marker {
            color: level_colors(selection),
        }),
        showlegend: false,
    };

    Figure {
        data: vec![Trace::Scatterpolar(background), Trace::Scatterpolar(profile)],
        layout: Layout {
            polar: Some(Polar {
                radialaxis: Axis {
                    visible: Some(true),
                    showticklabels: false,
                    ..Axis::default()
                },
            }),
            showlegend: false,
            ..Layout::default()
        },
    }
}

/// Bar chart: one bar per test plus a dashed baseline across the whole axis
pub fn bar_chart(selection: &Selection, labels: &ChartLabels) -> Figure {
    let bars = BarTrace {
        x: catalog::labels(),
        y: selection.ranks(),
        marker: Marker {
            color: level_colors(selection),
        },
    };

    let baseline = Shape {
        kind: "line",
        xref: "paper",
        x0: 0.0,
        x1: 1.0,
        yref: "y",
        y0: BASELINE_RANK,
        y1: BASELINE_RANK,
        line: Line {
            color: BASELINE_LINE,
            width: 1,
            dash: "dash",
        },
    };

    Figure {
        data: vec![Trace::Bar(bars)],
        layout: Layout {
            title: Some(Title {
                text: labels.bar_title.clone(),
            }),
            xaxis: Some(Axis {
                title: Some(Title {
                    text: labels.bar_axis_title.clone(),
                }),
                showticklabels: true,
                tickangle: Some(45),
                ..Axis::default()
            }),
            yaxis: Some(Axis {
                showticklabels: false,
                ..Axis::default()
            }),
            showlegend: false,
            shapes: vec![baseline],
            ..Layout::default()
        },
    }
}
