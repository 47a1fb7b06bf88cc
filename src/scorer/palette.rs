use super::types::WeightClass;

/// Indexed by weight class. Index 0 is the selected-county highlight,
/// 1..=9 run dark (most similar) to white (least similar).
pub const PALETTE: [&str; 10] = [
    "#fc2f70",
    "#173B53",
    "#205274",
    "rgb(50,128,181)",
    "rgb(73,183,194)",
    "rgb(133,204,187)",
    "rgb(202,233,181)",
    "rgb(254,255,207)",
    "#FEFFE0",
    "#ffffff",
];

/// Fill for counties scored with no active filter.
pub const UNFILTERED_COLOR: &str = "#e5e7eb";

/// Fill for map shapes with no matching county record.
pub const NO_DATA_COLOR: &str = "purple";

/// Legend swatches, least similar first.
pub const KEY_SWATCHES: [&str; 5] = [
    "#ffffff",
    "#FEFFE0",
    "rgb(133,204,187)",
    "rgb(50,128,181)",
    "#173B53",
];

pub fn color_for(class: WeightClass) -> &'static str {
    PALETTE[class.value() as usize]
}
