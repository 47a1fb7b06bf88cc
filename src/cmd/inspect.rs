use crate::reports;
use clap::Args;
use countyshade::config::FilterArgs;
use countyshade::dataset::Dataset;
use countyshade::scorer::Scorer;
use countyshade::stats::StatsSnapshot;
use countyshade::ShadeResult;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// County id (FIPS code)
    pub id: String,

    #[command(flatten)]
    pub filters: FilterArgs,
}

pub fn run(args: InspectArgs, dataset: &Dataset, stats: &StatsSnapshot) -> ShadeResult<()> {
    let county = dataset.require(&args.id)?;
    let filters = args.filters.resolve(stats)?;

    // The inspected county is not treated as selected here; the panel
    // reports how it compares against the targets.
    let weight = Scorer::new(stats, &filters).weight(county);

    reports::print_county_panel(county, stats);
    match weight {
        Ok(w) => reports::print_weight(&w),
        Err(e) => reports::print_unscored(&e),
    }
    Ok(())
}
