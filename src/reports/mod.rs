use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use countyshade::attributes::AttributeKey;
use countyshade::scorer::palette::{KEY_SWATCHES, NO_DATA_COLOR, PALETTE, UNFILTERED_COLOR};
use countyshade::scorer::{CountyRecord, FilterSet, ShadedCounty, Weight, WeightClass};
use countyshade::stats::StatsSnapshot;
use countyshade::ShadeError;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_filters(filters: &FilterSet) {
    if filters.active_count() == 0 {
        println!("\nNo active filters: counties use the default fill {}.", UNFILTERED_COLOR);
        return;
    }
    println!("\nActive filters:");
    for spec in filters.active() {
        println!(
            "  {:<16} {}",
            spec.attribute.label(),
            spec.attribute.format_value(spec.target_value)
        );
    }
}

pub fn print_shade_table(shaded: &[ShadedCounty<'_>]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("County").add_attribute(Attribute::Bold),
        Cell::new("Class").fg(Color::Cyan),
        Cell::new("Color"),
    ]);

    for s in shaded {
        let class = match &s.shade {
            Ok(shade) => match shade.class() {
                Some(c) => c.value().to_string(),
                None => "-".to_string(),
            },
            Err(e) => format!("! {}", e),
        };
        table.add_row(vec![
            Cell::new(&s.county.id),
            Cell::new(s.county.display_name()),
            Cell::new(class).fg(Color::Cyan),
            Cell::new(s.color()),
        ]);
    }
    align_right(&mut table, 2..=2);
    println!("\n{}", table);
}

pub fn print_histogram(hist: &BTreeMap<WeightClass, usize>) {
    if hist.is_empty() {
        return;
    }
    let mut table = new_table();
    table.set_header(vec!["Class", "Color", "Counties"]);
    for (class, count) in hist {
        table.add_row(vec![
            Cell::new(class.value()),
            Cell::new(class.color()),
            Cell::new(count),
        ]);
    }
    align_right(&mut table, 2..=2);
    println!("\n{}", table);
}

pub fn print_county_panel(county: &CountyRecord, stats: &StatsSnapshot) {
    println!("\n{} ({})", county.display_name(), county.id);
    let mut table = new_table();
    table.set_header(vec!["Attribute", "Value", "Dataset Range"]);

    for key in AttributeKey::iter() {
        let value = county
            .get(key)
            .map(|v| key.format_value(v))
            .unwrap_or_else(|| "-".to_string());
        let range = stats
            .get(key)
            .map(|s| format!("{} .. {}", key.format_value(s.min), key.format_value(s.max)))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(key.label()).add_attribute(Attribute::Bold),
            Cell::new(value),
            Cell::new(range),
        ]);
    }
    align_right(&mut table, 1..=1);
    println!("{}", table);
}

pub fn print_weight(weight: &Weight) {
    match weight {
        Weight::Unfiltered => println!("Weight: unfiltered ({})", weight.color()),
        Weight::Class(c) => println!("Weight: class {} ({})", c.value(), weight.color()),
    }
}

pub fn print_unscored(err: &ShadeError) {
    println!("Weight: unscored ({}) - {}", NO_DATA_COLOR, err);
}

pub fn print_stats(stats: &StatsSnapshot) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Attribute").add_attribute(Attribute::Bold),
        Cell::new("Min"),
        Cell::new("Max"),
        Cell::new("Stdev"),
        Cell::new("Midpoint").fg(Color::Cyan),
    ]);
    for (key, s) in stats.iter() {
        table.add_row(vec![
            Cell::new(key.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", s.min)),
            Cell::new(format!("{:.2}", s.max)),
            Cell::new(format!("{:.2}", s.stdev)),
            Cell::new(format!("{:.0}", s.midpoint())).fg(Color::Cyan),
        ]);
    }
    align_right(&mut table, 1..=4);
    println!("\n{}", table);
}

pub fn print_key() {
    println!("\nLeast Similar  {}  Most Similar", KEY_SWATCHES.join("  "));

    let mut table = new_table();
    table.set_header(vec!["Class", "Color", "Meaning"]);
    for (i, color) in PALETTE.iter().enumerate() {
        let meaning = match i {
            0 => "selected county",
            1 => "most similar",
            9 => "least similar",
            _ => "",
        };
        table.add_row(vec![Cell::new(i), Cell::new(color), Cell::new(meaning)]);
    }
    table.add_row(vec![
        Cell::new("-"),
        Cell::new(UNFILTERED_COLOR),
        Cell::new("no active filter"),
    ]);
    println!("\n{}", table);
}
