//! Fixed chart definitions for the model comparison and clustering panels.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Animation duration applied to every page chart, in milliseconds.
pub const ANIMATION_MS: u32 = 1200;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
}

impl ChartKind {
    /// Chart type token the rendering collaborator expects.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Doughnut => "doughnut",
        }
    }
}

/// One chart slot: a canvas element id plus the static dataset drawn into it.
#[derive(Clone, Copy, Debug)]
pub struct ChartSpec {
    pub element_id: &'static str,
    pub kind: ChartKind,
    pub dataset_label: Option<&'static str>,
    pub labels: &'static [&'static str],
    pub values: &'static [f64],
    pub colors: &'static [&'static str],
}

impl ChartSpec {
    /// Configuration object in the collaborator's type / data / options shape.
    pub fn config(&self) -> Value {
        let mut dataset = json!({
            "data": self.values,
            "backgroundColor": self.colors,
        });
        if let Some(label) = self.dataset_label {
            dataset["label"] = json!(label);
        }
        json!({
            "type": self.kind.as_str(),
            "data": {
                "labels": self.labels,
                "datasets": [dataset],
            },
            "options": {
                "responsive": true,
                "animation": { "duration": ANIMATION_MS },
            },
        })
    }
}

/// The two chart slots the site renders when their canvases are present.
pub fn page_charts() -> [ChartSpec; 2] {
    [
        ChartSpec {
            element_id: "results-chart",
            kind: ChartKind::Bar,
            dataset_label: Some("R² Score"),
            labels: &["Linear", "Random Forest", "Gradient Boost", "SVR", "KNN"],
            values: &[0.82, 0.91, 0.89, 0.85, 0.84],
            colors: &["#6366f1", "#22c55e", "#f59e0b", "#3b82f6", "#ec4899"],
        },
        ChartSpec {
            element_id: "cluster-chart",
            kind: ChartKind::Doughnut,
            dataset_label: None,
            labels: &["Cluster A", "Cluster B", "Cluster C"],
            values: &[45.0, 35.0, 20.0],
            colors: &["#22d3ee", "#a78bfa", "#fb7185"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_charts_cover_both_canvases() {
        let charts = page_charts();
        assert_eq!(charts[0].element_id, "results-chart");
        assert_eq!(charts[0].kind, ChartKind::Bar);
        assert_eq!(charts[1].element_id, "cluster-chart");
        assert_eq!(charts[1].kind, ChartKind::Doughnut);
        for spec in charts {
            assert_eq!(spec.labels.len(), spec.values.len());
            assert_eq!(spec.labels.len(), spec.colors.len());
        }
    }

    #[test]
    fn test_bar_config_shape() {
        let config = page_charts()[0].config();
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"][1], "Random Forest");
        assert_eq!(config["data"]["datasets"][0]["label"], "R² Score");
        assert_eq!(config["data"]["datasets"][0]["data"][1], 0.91);
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"][0], "#6366f1");
        assert_eq!(config["options"]["responsive"], true);
        assert_eq!(config["options"]["animation"]["duration"], 1200);
    }

    #[test]
    fn test_doughnut_config_has_no_dataset_label() {
        let config = page_charts()[1].config();
        assert_eq!(config["type"], "doughnut");
        assert!(config["data"]["datasets"][0].get("label").is_none());
        assert_eq!(config["data"]["datasets"][0]["data"][0], 45.0);
        assert_eq!(config["options"]["animation"]["duration"], 1200);
    }
}
