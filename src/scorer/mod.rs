pub mod engine;
pub mod palette;
pub mod types;

pub use self::engine::{classify, compute_weight, shade};
pub use self::types::{CountyRecord, FilterSet, FilterSpec, Shade, Weight, WeightClass};

use crate::error::ShadeResult;
use crate::stats::StatsSnapshot;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Read-only view over the snapshots needed to shade counties.
/// Holds no state of its own; every call is independent.
pub struct Scorer<'a> {
    pub stats: &'a StatsSnapshot,
    pub filters: &'a FilterSet,
    pub selected: Option<&'a str>,
}

pub struct ShadedCounty<'c> {
    pub county: &'c CountyRecord,
    pub shade: ShadeResult<Shade>,
}

impl ShadedCounty<'_> {
    pub fn color(&self) -> &'static str {
        match &self.shade {
            Ok(s) => s.color(),
            Err(_) => palette::NO_DATA_COLOR,
        }
    }
}

impl<'a> Scorer<'a> {
    pub fn new(stats: &'a StatsSnapshot, filters: &'a FilterSet) -> Self {
        Self {
            stats,
            filters,
            selected: None,
        }
    }

    pub fn with_selected(mut self, selected: Option<&'a str>) -> Self {
        self.selected = selected;
        self
    }

    pub fn weight(&self, county: &CountyRecord) -> ShadeResult<Weight> {
        engine::compute_weight(county, self.filters, self.stats)
    }

    pub fn shade(&self, county: &CountyRecord) -> ShadeResult<Shade> {
        engine::shade(county, self.filters, self.stats, self.selected)
    }

    /// Shades every county in parallel. Output order matches input order.
    pub fn shade_all<'c>(&self, counties: &'c [CountyRecord]) -> Vec<ShadedCounty<'c>> {
        debug!(
            "Shading {} counties with {} active filters",
            counties.len(),
            self.filters.active_count()
        );

        let shaded: Vec<ShadedCounty<'c>> = counties
            .par_iter()
            .map(|county| ShadedCounty {
                county,
                shade: self.shade(county),
            })
            .collect();

        let failed = shaded.iter().filter(|s| s.shade.is_err()).count();
        if failed > 0 {
            warn!("{} counties could not be scored", failed);
        }
        shaded
    }
}

/// Number of counties per weight class. Unfiltered and failed counties are
/// not counted.
pub fn class_histogram(shaded: &[ShadedCounty<'_>]) -> BTreeMap<WeightClass, usize> {
    let mut hist = BTreeMap::new();
    for s in shaded {
        if let Ok(shade) = &s.shade {
            if let Some(class) = shade.class() {
                *hist.entry(class).or_insert(0) += 1;
            }
        }
    }
    hist
}
