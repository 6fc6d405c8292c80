use perennial_core::{project_trace, ProjectedPath, Rating, SrsConfig, DEFAULT_SCRIPT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct SimulateQuery {
    pub base_interval_days: Option<f64>,
    pub ease_multiplier: Option<f64>,
    pub interval_modifier: Option<f64>,
    pub script: Option<String>,
}

/// POST body; missing fields come from the server's configured defaults.
#[derive(Debug, Default, Deserialize)]
pub struct SimulateIn {
    pub base_interval_days: Option<f64>,
    pub ease_multiplier: Option<f64>,
    pub interval_modifier: Option<f64>,
    pub script: Option<Vec<Rating>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationOut {
    pub path: ProjectedPath,
    pub label: String,
    pub final_ease: Option<f64>,
}

/// Raw inputs for one preview; the base may be fractional, as typed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewInput {
    pub base_interval_days: f64,
    pub ease_multiplier: f64,
    pub interval_modifier: f64,
}

impl PreviewInput {
    pub fn resolve(
        defaults: &SrsConfig,
        base: Option<f64>,
        ease: Option<f64>,
        modifier: Option<f64>,
    ) -> Self {
        Self {
            base_interval_days: base.unwrap_or(defaults.base_interval_days as f64),
            ease_multiplier: ease.unwrap_or(defaults.ease_multiplier),
            interval_modifier: modifier.unwrap_or(defaults.interval_modifier),
        }
    }

    /// The config a profile would save for these inputs.
    pub fn to_config(&self) -> SrsConfig {
        SrsConfig::new(
            self.base_interval_days.round() as u32,
            self.ease_multiplier,
            self.interval_modifier,
        )
    }

    pub fn simulate(&self, script: &[Rating]) -> SimulationOut {
        let trace = project_trace(
            self.base_interval_days,
            self.ease_multiplier,
            self.interval_modifier,
            script,
        );
        let path = trace.path();
        SimulationOut {
            label: path.to_string(),
            final_ease: trace.final_ease(),
            path,
        }
    }
}

/// Parses `good,easy,...`. `None` means "use the default script"; an empty
/// string is an empty script.
pub fn parse_script(s: Option<&str>) -> Option<Vec<Rating>> {
    let Some(s) = s else {
        return Some(DEFAULT_SCRIPT.to_vec());
    };
    if s.trim().is_empty() {
        return Some(Vec::new());
    }
    s.split(',').map(Rating::parse).collect()
}
