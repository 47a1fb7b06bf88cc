use super::palette;
use crate::attributes::AttributeKey;
use crate::error::{ShadeError, ShadeResult};
use crate::stats::StatsSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: String,
    pub attributes: BTreeMap<AttributeKey, f64>,
}

impl CountyRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            state: String::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: AttributeKey, value: f64) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn get(&self, key: AttributeKey) -> Option<f64> {
        self.attributes.get(&key).copied()
    }

    /// "Name, State" when both are known, else whatever is present, else the id.
    pub fn display_name(&self) -> String {
        match (self.name.is_empty(), self.state.is_empty()) {
            (false, false) => format!("{}, {}", self.name, self.state),
            (false, true) => self.name.clone(),
            _ => self.id.clone(),
        }
    }
}

/// One slider: on/off toggle plus target value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub attribute: AttributeKey,
    pub enabled: bool,
    #[serde(default)]
    pub target_value: f64,
}

impl FilterSpec {
    pub fn enabled(attribute: AttributeKey, target_value: f64) -> Self {
        Self {
            attribute,
            enabled: true,
            target_value,
        }
    }

    pub fn disabled(attribute: AttributeKey) -> Self {
        Self {
            attribute,
            enabled: false,
            target_value: 0.0,
        }
    }
}

/// Snapshot of every filter, at most one spec per attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    specs: BTreeMap<AttributeKey, FilterSpec>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later specs for the same attribute replace earlier ones.
    pub fn from_specs<I: IntoIterator<Item = FilterSpec>>(specs: I) -> Self {
        let mut set = Self::new();
        for spec in specs {
            set.set(spec);
        }
        set
    }

    /// Every attribute with stats enabled at its midpoint.
    pub fn midpoints(stats: &StatsSnapshot) -> Self {
        Self::from_specs(
            AttributeKey::iter()
                .filter_map(|k| stats.get(k).map(|s| FilterSpec::enabled(k, s.midpoint()))),
        )
    }

    pub fn set(&mut self, spec: FilterSpec) {
        self.specs.insert(spec.attribute, spec);
    }

    pub fn set_target(&mut self, attribute: AttributeKey, target_value: f64) {
        self.set(FilterSpec::enabled(attribute, target_value));
    }

    pub fn disable(&mut self, attribute: AttributeKey) {
        if let Some(spec) = self.specs.get_mut(&attribute) {
            spec.enabled = false;
        } else {
            self.set(FilterSpec::disabled(attribute));
        }
    }

    pub fn get(&self, attribute: AttributeKey) -> Option<&FilterSpec> {
        self.specs.get(&attribute)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterSpec> {
        self.specs.values()
    }

    pub fn active(&self) -> impl Iterator<Item = &FilterSpec> {
        self.specs.values().filter(|s| s.enabled)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}

/// Dissimilarity bucket. 0 is the selected-county override, 1..=9 go from
/// most to least similar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WeightClass(u8);

impl WeightClass {
    pub const SELECTED: WeightClass = WeightClass(0);
    pub const MOST_SIMILAR: WeightClass = WeightClass(1);
    pub const LEAST_SIMILAR: WeightClass = WeightClass(9);

    pub fn new(value: u8) -> ShadeResult<Self> {
        if value > 9 {
            return Err(ShadeError::InvalidWeightClass(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn color(&self) -> &'static str {
        palette::color_for(*self)
    }

    /// Only called with a bucket index already known to be in range.
    pub(crate) const fn from_bucket(value: u8) -> Self {
        Self(value)
    }
}

/// Result of scoring one county.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    /// No filter is active; the county gets the default treatment.
    Unfiltered,
    Class(WeightClass),
}

impl Weight {
    pub fn class(&self) -> Option<WeightClass> {
        match self {
            Self::Unfiltered => None,
            Self::Class(c) => Some(*c),
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Unfiltered => palette::UNFILTERED_COLOR,
            Self::Class(c) => c.color(),
        }
    }
}

/// Weight after the selected-county override is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Selected,
    Unfiltered,
    Class(WeightClass),
}

impl Shade {
    pub fn class(&self) -> Option<WeightClass> {
        match self {
            Self::Selected => Some(WeightClass::SELECTED),
            Self::Unfiltered => None,
            Self::Class(c) => Some(*c),
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Selected => WeightClass::SELECTED.color(),
            Self::Unfiltered => palette::UNFILTERED_COLOR,
            Self::Class(c) => c.color(),
        }
    }
}

impl From<Weight> for Shade {
    fn from(w: Weight) -> Self {
        match w {
            Weight::Unfiltered => Shade::Unfiltered,
            Weight::Class(c) => Shade::Class(c),
        }
    }
}
