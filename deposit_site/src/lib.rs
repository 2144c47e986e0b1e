//! Core domain logic for the bank deposit prediction site front-end.

pub mod charts;
pub mod predict;
pub mod theme;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("prediction request failed: {0}")]
    Request(String),
    #[error("unexpected prediction response: {0}")]
    Decode(String),
}

/// Element ids, endpoint and storage key the page wiring binds against.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageConfig {
    pub theme_toggle_id: String,
    pub theme_storage_key: String,
    pub predict_form_id: String,
    pub predict_result_id: String,
    pub predict_endpoint: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_toggle_id: "theme-toggle".to_string(),
            theme_storage_key: theme::STORAGE_KEY.to_string(),
            predict_form_id: "predict-form".to_string(),
            predict_result_id: "predict-result".to_string(),
            predict_endpoint: "/predict".to_string(),
        }
    }
}

/// Which page units came up during initialisation.
///
/// Each page serves a different subset of the markup, so absent elements are
/// reported here rather than treated as errors.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activation {
    pub theme: bool,
    pub smooth_scroll: usize,
    pub predict_form: bool,
    pub charts: usize,
}

impl Activation {
    /// True when nothing on the page matched: no toggle, anchors, form or
    /// charts.
    pub fn is_idle(&self) -> bool {
        !self.theme && self.smooth_scroll == 0 && !self.predict_form && self.charts == 0
    }

    /// One-line summary for the boot log.
    pub fn summary(&self) -> String {
        format!(
            "theme={} scroll_links={} predict_form={} charts={}",
            on_off(self.theme),
            self.smooth_scroll,
            on_off(self.predict_form),
            self.charts
        )
    }
}

fn on_off(active: bool) -> &'static str {
    if active { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_page_markup() {
        let config = PageConfig::default();
        assert_eq!(config.theme_toggle_id, "theme-toggle");
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.predict_form_id, "predict-form");
        assert_eq!(config.predict_result_id, "predict-result");
        assert_eq!(config.predict_endpoint, "/predict");
    }

    #[test]
    fn test_activation_idle_and_summary() {
        let mut activation = Activation::default();
        assert!(activation.is_idle());
        activation.theme = true;
        activation.smooth_scroll = 3;
        activation.charts = 2;
        assert!(!activation.is_idle());
        assert_eq!(
            activation.summary(),
            "theme=on scroll_links=3 predict_form=off charts=2"
        );
    }
}
