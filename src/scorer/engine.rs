use super::types::{CountyRecord, FilterSet, FilterSpec, Shade, Weight, WeightClass};
use crate::error::{ShadeError, ShadeResult};
use crate::stats::StatsSnapshot;

/// Upper bounds (inclusive) of classes 1..=8, in half-stdev units.
/// Anything above the last bound is class 9.
pub const CLASS_THRESHOLDS: [f64; 8] = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];

/// Distance of one county value from a filter target, in half-stdev units.
/// A zero-spread attribute carries no signal and counts as a perfect match.
pub fn deviation(value: f64, target: f64, stdev: f64) -> f64 {
    let unit = stdev / 2.0;
    if unit == 0.0 {
        return 0.0;
    }
    (value - target).abs() / unit
}

pub fn classify(avg_deviation: f64) -> WeightClass {
    let bucket = CLASS_THRESHOLDS
        .iter()
        .position(|&t| avg_deviation <= t)
        .map(|i| i as u8 + 1)
        .unwrap_or(9);
    WeightClass::from_bucket(bucket)
}

fn filter_deviation(
    county: &CountyRecord,
    spec: &FilterSpec,
    stats: &StatsSnapshot,
) -> ShadeResult<f64> {
    let stat = stats
        .get(spec.attribute)
        .ok_or(ShadeError::MissingStat(spec.attribute))?;
    let value = county
        .get(spec.attribute)
        .ok_or_else(|| ShadeError::MissingAttribute {
            county: county.id.clone(),
            attribute: spec.attribute,
        })?;
    Ok(deviation(value, spec.target_value, stat.stdev))
}

/// Average deviation over active filters, or `None` when no filter is on.
pub fn average_deviation(
    county: &CountyRecord,
    filters: &FilterSet,
    stats: &StatsSnapshot,
) -> ShadeResult<Option<f64>> {
    let mut total = 0.0;
    let mut active = 0usize;

    for spec in filters.active() {
        total += filter_deviation(county, spec, stats)?;
        active += 1;
    }

    if active == 0 {
        return Ok(None);
    }
    Ok(Some(total / active as f64))
}

pub fn compute_weight(
    county: &CountyRecord,
    filters: &FilterSet,
    stats: &StatsSnapshot,
) -> ShadeResult<Weight> {
    Ok(match average_deviation(county, filters, stats)? {
        None => Weight::Unfiltered,
        Some(avg) => Weight::Class(classify(avg)),
    })
}

/// Scores the county, then lets the selected county override the result.
pub fn shade(
    county: &CountyRecord,
    filters: &FilterSet,
    stats: &StatsSnapshot,
    selected: Option<&str>,
) -> ShadeResult<Shade> {
    if selected == Some(county.id.as_str()) {
        return Ok(Shade::Selected);
    }
    compute_weight(county, filters, stats).map(Shade::from)
}
