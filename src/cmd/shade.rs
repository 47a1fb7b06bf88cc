use crate::reports;
use clap::Args;
use countyshade::config::FilterArgs;
use countyshade::dataset::Dataset;
use countyshade::scorer::{class_histogram, Scorer, ShadedCounty};
use countyshade::stats::StatsSnapshot;
use countyshade::ShadeResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ShadeArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// County id highlighted with the selection color
    #[arg(short, long)]
    pub selected: Option<String>,

    /// Only list counties in this state (case insensitive)
    #[arg(long)]
    pub state: Option<String>,

    /// Sort most similar first
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn run(args: ShadeArgs, dataset: &Dataset, stats: &StatsSnapshot) -> ShadeResult<()> {
    let filters = args.filters.resolve(stats)?;
    // Resolve through the dataset so the override compares canonical ids.
    let selected = args
        .selected
        .as_deref()
        .map(|id| dataset.require(id))
        .transpose()?
        .map(|c| c.id.as_str());

    let scorer = Scorer::new(stats, &filters).with_selected(selected);
    let mut shaded: Vec<ShadedCounty> = scorer
        .shade_all(dataset.counties())
        .into_iter()
        .filter(|s| match &args.state {
            Some(state) => s.county.state.eq_ignore_ascii_case(state),
            None => true,
        })
        .collect();

    info!(
        "🎨 Shaded {} counties ({} active filters)",
        shaded.len(),
        filters.active_count()
    );

    if args.sort {
        // Selected (class 0) first, unclassified and failed counties last.
        shaded.sort_by_key(|s| {
            s.shade
                .as_ref()
                .ok()
                .and_then(|sh| sh.class())
                .map(|c| c.value())
                .unwrap_or(u8::MAX)
        });
    }

    let hist = class_histogram(&shaded);
    if let Some(limit) = args.limit {
        shaded.truncate(limit);
    }

    reports::print_filters(&filters);
    reports::print_shade_table(&shaded);
    reports::print_histogram(&hist);
    Ok(())
}
