//! Score Chart
//!
//! Builds the Chart.js radar configuration for a score snapshot. The
//! configuration serializes to the exact object shape Chart.js expects;
//! the tooltip callback is attached separately since it is a JS function.

use serde::Serialize;

use crate::models::{ActivityCategory, ScoreSnapshot};

pub const SERIES_LABEL: &str = "Seu Desempenho";

const GREEN: &str = "rgba(25, 135, 84, 1)";
const GREEN_FILL: &str = "rgba(25, 135, 84, 0.2)";
const WHITE: &str = "#fff";

// ========================
// Chart.js Config Shape
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: RadarData,
    pub options: RadarOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<RadarDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarDataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub point_background_color: &'static str,
    pub point_border_color: &'static str,
    pub point_hover_background_color: &'static str,
    pub point_hover_border_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarOptions {
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub r: RadialScale,
}

/// Suggested bounds only: values above 100 stretch the axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialScale {
    pub angle_lines: AngleLines,
    pub suggested_min: f64,
    pub suggested_max: f64,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngleLines {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub step_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

// ========================
// Builders
// ========================

pub fn radar_config(snapshot: &ScoreSnapshot) -> RadarChartConfig {
    RadarChartConfig {
        kind: "radar",
        data: RadarData {
            labels: ActivityCategory::ALL.iter().map(|c| c.label()).collect(),
            datasets: vec![RadarDataset {
                label: SERIES_LABEL,
                data: snapshot.axis_values().to_vec(),
                background_color: GREEN_FILL,
                border_color: GREEN,
                point_background_color: GREEN,
                point_border_color: WHITE,
                point_hover_background_color: WHITE,
                point_hover_border_color: GREEN,
            }],
        },
        options: RadarOptions {
            scales: Scales {
                r: RadialScale {
                    angle_lines: AngleLines { display: true },
                    suggested_min: 0.0,
                    suggested_max: 100.0,
                    ticks: Ticks { step_size: 20.0 },
                },
            },
            plugins: Plugins {
                legend: Legend { position: "top" },
            },
        },
    }
}

/// Tooltip line for one data point, e.g. `Seu Desempenho: 50 pontos`.
pub fn tooltip_label(series: &str, raw: f64) -> String {
    format!("{}: {} pontos", series, raw)
}
