//! Frontend Models
//!
//! Data exchanged with the server: the activity record we post, the
//! response to it, and the score snapshot embedded in the dashboard.

use serde::{Deserialize, Serialize};

// ========================
// Categories
// ========================

/// The six score categories, in chart axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    Water,
    Energy,
    Mobility,
    Food,
    Waste,
    Wellbeing,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 6] = [
        ActivityCategory::Water,
        ActivityCategory::Energy,
        ActivityCategory::Mobility,
        ActivityCategory::Food,
        ActivityCategory::Waste,
        ActivityCategory::Wellbeing,
    ];

    /// Display label used on the chart axes.
    pub fn label(self) -> &'static str {
        match self {
            ActivityCategory::Water => "Água",
            ActivityCategory::Energy => "Energia",
            ActivityCategory::Mobility => "Mobilidade",
            ActivityCategory::Food => "Alimentação",
            ActivityCategory::Waste => "Resíduos",
            ActivityCategory::Wellbeing => "Bem-estar",
        }
    }

    /// Category the server credits for an activity type, if it knows it.
    pub fn from_activity_type(activity_type: &str) -> Option<Self> {
        match activity_type {
            "water_saved" => Some(ActivityCategory::Water),
            "energy_saved" => Some(ActivityCategory::Energy),
            "sustainable_transport" => Some(ActivityCategory::Mobility),
            "sustainable_food" => Some(ActivityCategory::Food),
            "waste_reduction" => Some(ActivityCategory::Waste),
            "physical_activity" | "screen_time_reduction" | "sleep_quality" => {
                Some(ActivityCategory::Wellbeing)
            }
            _ => None,
        }
    }
}

// ========================
// Activity Log
// ========================

/// One activity as posted to the log endpoint.
///
/// Fields absent from the form are sent as `null`. A `points` value that
/// did not parse is NaN, which serializes as `null` too.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    pub activity_type: Option<String>,
    pub description: Option<String>,
    pub points: f64,
}

impl ActivityRecord {
    pub fn category(&self) -> Option<ActivityCategory> {
        self.activity_type
            .as_deref()
            .and_then(ActivityCategory::from_activity_type)
    }
}

/// Server reply to a log request. Every field is optional; only
/// `status == "success"` counts as accepted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogActivityResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_score: Option<f64>,
    #[serde(default)]
    pub level: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
    /// Validation failures (HTTP 400) use `error` instead of `message`.
    #[serde(default)]
    pub error: Option<String>,
}

impl LogActivityResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    pub fn rejection_message(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .filter(|message| !message.is_empty())
    }
}

// ========================
// Score Snapshot
// ========================

/// Category scores embedded in the dashboard. Missing or `null` fields
/// read as 0.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoreSnapshot {
    pub water_score: Option<f64>,
    pub energy_score: Option<f64>,
    pub mobility_score: Option<f64>,
    pub food_score: Option<f64>,
    pub waste_score: Option<f64>,
    pub wellbeing_score: Option<f64>,
}

impl ScoreSnapshot {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text.trim())
    }

    pub fn score(&self, category: ActivityCategory) -> f64 {
        let value = match category {
            ActivityCategory::Water => self.water_score,
            ActivityCategory::Energy => self.energy_score,
            ActivityCategory::Mobility => self.mobility_score,
            ActivityCategory::Food => self.food_score,
            ActivityCategory::Waste => self.waste_score,
            ActivityCategory::Wellbeing => self.wellbeing_score,
        };
        value.unwrap_or(0.0)
    }

    /// Scores in axis order.
    pub fn axis_values(&self) -> [f64; 6] {
        ActivityCategory::ALL.map(|category| self.score(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_record_serializes_nan_as_null() {
        let record = ActivityRecord {
            activity_type: Some("water_saved".to_string()),
            description: None,
            points: f64::NAN,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"activity_type":"water_saved","description":null,"points":null}"#
        );
    }

    #[test]
    fn test_activity_record_category() {
        let record = ActivityRecord {
            activity_type: Some("sleep_quality".to_string()),
            description: Some(String::new()),
            points: 3.0,
        };
        assert_eq!(record.category(), Some(ActivityCategory::Wellbeing));

        let unknown = ActivityRecord {
            activity_type: Some("bike_commute".to_string()),
            ..record
        };
        assert_eq!(unknown.category(), None);
    }

    #[test]
    fn test_response_success_and_rejection() {
        let ok: LogActivityResponse =
            serde_json::from_str(r#"{"status":"success","total_score":87.6,"level":1}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.total_score, Some(87.6));

        let rejected: LogActivityResponse =
            serde_json::from_str(r#"{"status":"error","message":"Pontos inválidos"}"#).unwrap();
        assert!(!rejected.is_success());
        assert_eq!(rejected.rejection_message().as_deref(), Some("Pontos inválidos"));

        let bad_request: LogActivityResponse =
            serde_json::from_str(r#"{"error":"Missing required fields"}"#).unwrap();
        assert!(!bad_request.is_success());
        assert_eq!(
            bad_request.rejection_message().as_deref(),
            Some("Missing required fields")
        );
    }

    #[test]
    fn test_snapshot_missing_fields_default_to_zero() {
        let snapshot = ScoreSnapshot::from_json(r#"{"water_score": 50}"#).unwrap();
        assert_eq!(snapshot.axis_values(), [50.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

        let nulls = ScoreSnapshot::from_json(r#"{"energy_score": null, "waste_score": 120}"#).unwrap();
        assert_eq!(nulls.axis_values(), [0.0, 0.0, 0.0, 0.0, 120.0, 0.0]);
    }

    #[test]
    fn test_snapshot_rejects_malformed_payload() {
        assert!(ScoreSnapshot::from_json("{water_score: 50").is_err());
        assert!(ScoreSnapshot::from_json("").is_err());
    }
}
