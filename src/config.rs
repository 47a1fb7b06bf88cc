use crate::attributes::AttributeKey;
use crate::error::{ShadeError, ShadeResult};
use crate::scorer::types::{FilterSet, FilterSpec};
use crate::stats::StatsSnapshot;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    // === TARGETS === (giving a target switches the filter on)
    #[arg(long)]
    pub population: Option<f64>,
    #[arg(long)]
    pub median_age: Option<f64>,
    #[arg(long)]
    pub temperature: Option<f64>,
    #[arg(long)]
    pub home_value: Option<f64>,
    #[arg(long)]
    pub median_rent: Option<f64>,

    /// Start with every attribute on, targeted at the middle of its range
    #[arg(long, default_value_t = false)]
    pub midpoints: bool,

    /// Switch a filter off (repeatable)
    #[arg(long, value_name = "ATTRIBUTE")]
    pub disable: Vec<AttributeKey>,

    /// JSON filter profile applied before any other flag
    #[arg(long)]
    pub profile: Option<String>,
}

impl FilterArgs {
    pub fn targets(&self) -> Vec<(AttributeKey, f64)> {
        [
            (AttributeKey::Population, self.population),
            (AttributeKey::MedianAge, self.median_age),
            (AttributeKey::Temperature, self.temperature),
            (AttributeKey::HomeValue, self.home_value),
            (AttributeKey::MedianRent, self.median_rent),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
    }

    /// Resolution order: profile, midpoints, explicit targets, disables.
    pub fn resolve(&self, stats: &StatsSnapshot) -> ShadeResult<FilterSet> {
        let mut set = match &self.profile {
            Some(path) => FilterProfile::load_from_file(path)?.into_filter_set(),
            None => FilterSet::new(),
        };

        if self.midpoints {
            for spec in FilterSet::midpoints(stats).iter() {
                set.set(*spec);
            }
        }

        for (key, value) in self.targets() {
            if !value.is_finite() {
                return Err(ShadeError::Config(format!(
                    "--{} must be a finite number",
                    key.to_string().replace('_', "-")
                )));
            }
            set.set_target(key, value);
        }

        for key in &self.disable {
            set.disable(*key);
        }

        debug!("Resolved {} active filters", set.active_count());
        Ok(set)
    }
}

/// Saved slider state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterProfile {
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
}

impl FilterProfile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ShadeResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ShadeError::Config(format!(
                "Failed to read filter profile '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> ShadeResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn into_filter_set(self) -> FilterSet {
        FilterSet::from_specs(self.filters)
    }
}
