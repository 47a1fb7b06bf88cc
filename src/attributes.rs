use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The county attributes a filter can target.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKey {
    Population,
    MedianAge,
    Temperature,
    HomeValue,
    MedianRent,
}

impl AttributeKey {
    pub fn all() -> Vec<AttributeKey> {
        AttributeKey::iter().collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Population => "Population",
            Self::MedianAge => "Median Age",
            Self::Temperature => "Avg Temperature",
            Self::HomeValue => "Home Value",
            Self::MedianRent => "Median Rent",
        }
    }

    /// Human readable value, as shown in the county panel.
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Self::Population => group_thousands(value.round() as i64),
            Self::MedianAge => format!("{:.1} yrs", value),
            Self::Temperature => format!("{:.0} °F", value),
            Self::HomeValue | Self::MedianRent => {
                format!("${}", group_thousands(value.round() as i64))
            }
        }
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
