use crate::attributes::AttributeKey;
use crate::scorer::types::CountyRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::debug;

/// Population-wide spread of one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeStat {
    pub min: f64,
    pub max: f64,
    pub stdev: f64,
}

impl AttributeStat {
    /// Default slider position: the rounded centre of the observed range.
    pub fn midpoint(&self) -> f64 {
        ((self.min + self.max) / 2.0).round()
    }

    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }

        Some(Self {
            min,
            max,
            stdev: sample_stdev(values),
        })
    }
}

/// Sample standard deviation (n - 1 divisor). Zero for fewer than two values.
pub fn sample_stdev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let sq_sum: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sq_sum / (n - 1) as f64).sqrt()
}

/// Statistics for every attribute, computed once per dataset load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    stats: BTreeMap<AttributeKey, AttributeStat>,
}

impl StatsSnapshot {
    pub fn collect(counties: &[CountyRecord]) -> Self {
        let mut stats = BTreeMap::new();

        for key in AttributeKey::iter() {
            let values: Vec<f64> = counties.iter().filter_map(|c| c.get(key)).collect();
            match AttributeStat::from_values(&values) {
                Some(stat) => {
                    debug!(
                        "{}: n={} min={} max={} stdev={:.3}",
                        key,
                        values.len(),
                        stat.min,
                        stat.max,
                        stat.stdev
                    );
                    stats.insert(key, stat);
                }
                None => debug!("{}: no values, skipped", key),
            }
        }

        Self { stats }
    }

    pub fn get(&self, key: AttributeKey) -> Option<&AttributeStat> {
        self.stats.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeStat)> {
        self.stats.iter().map(|(k, v)| (*k, v))
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

impl FromIterator<(AttributeKey, AttributeStat)> for StatsSnapshot {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, AttributeStat)>>(iter: I) -> Self {
        Self {
            stats: iter.into_iter().collect(),
        }
    }
}
