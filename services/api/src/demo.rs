use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;

use careerbridge::catalog::domain::{OpportunityRecord, SortKey};
use careerbridge::catalog::FacetKind;
use careerbridge::config::SearchConfig;
use careerbridge::error::AppError;

use crate::infra::{load_catalog, ready_session};

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Free-text query matched against titles, companies, descriptions, and tags
    #[arg(long, short = 'q')]
    pub(crate) query: Option<String>,
    /// Job type filter; repeat the flag to select multiple values
    #[arg(long = "job-type")]
    pub(crate) job_type: Vec<String>,
    /// Location filter; repeat the flag to select multiple values
    #[arg(long)]
    pub(crate) location: Vec<String>,
    /// Experience filter; repeat the flag to select multiple values
    #[arg(long)]
    pub(crate) experience: Vec<String>,
    /// Sort order: recent, salary-high, or salary-low
    #[arg(long, default_value = "recent")]
    pub(crate) sort: String,
    /// Result page to display
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
    /// Results per page
    #[arg(long, default_value_t = SearchConfig::DEFAULT_PAGE_SIZE)]
    pub(crate) page_size: usize,
    /// JSON file with opportunity records (defaults to the bundled sample catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// JSON file with opportunity records (defaults to the bundled sample catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let sort = SortKey::from_str(&args.sort)?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    let mut session = ready_session(args.page_size, catalog)?;

    if let Some(query) = args.query.as_deref() {
        session.set_text(query)?;
    }
    for value in &args.job_type {
        session.toggle_facet_value(FacetKind::JobType, value)?;
    }
    for value in &args.location {
        session.toggle_facet_value(FacetKind::Location, value)?;
    }
    for value in &args.experience {
        session.toggle_facet_value(FacetKind::Experience, value)?;
    }
    session.set_sort(sort)?;
    session.set_page(args.page)?;

    println!("{}", session.found_summary());
    println!("{}", serde_json::to_string_pretty(&session.view())?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let mut session = ready_session(SearchConfig::DEFAULT_PAGE_SIZE, catalog)?;

    println!("CareerBridge search demo");
    println!("Catalog loaded: {} opportunities", session.result_count());

    let index = session.facet_index();
    println!("\nFilter options derived from the catalog:");
    println!("- Job types: {}", index.job_type.join(", "));
    println!("- Locations: {}", index.location.join(", "));
    println!("- Experience levels: {}", index.experience.join(", "));

    println!("\nMost recent openings (page 1):");
    render_page(&session.view().page.items);
    let total_pages = session.view().page.total_pages;
    if total_pages > 1 {
        session.set_page(2)?;
        println!("Page 2 of {total_pages}:");
        render_page(&session.view().page.items);
    }

    println!("\nSearching for \"intern\":");
    session.set_text("intern")?;
    println!("{}", session.found_summary());
    render_page(&session.view().page.items);

    println!("Narrowing to New York, NY:");
    session.toggle_facet_value(FacetKind::Location, "New York, NY")?;
    println!("{}", session.found_summary());
    render_page(&session.view().page.items);
    println!(
        "Active filters: {}",
        session.view().active_filter_count
    );

    println!("\nClearing filters and sorting by salary (high to low):");
    session.clear_all_filters()?;
    session.set_sort(SortKey::SalaryHigh)?;
    render_page(&session.view().page.items);
    println!("Note: salary sorts compare the display strings, so hourly rates can outrank annual ranges.");

    if let Some(first_id) = session.view().page.items.first().map(|record| record.id) {
        println!("\nSaving a job and toggling it back:");
        let saved = session.toggle_saved(first_id)?;
        println!("- toggle_saved({first_id}) -> saved = {saved}");
        let saved = session.toggle_saved(first_id)?;
        println!("- toggle_saved({first_id}) -> saved = {saved}");
    }

    Ok(())
}

fn render_page(items: &[OpportunityRecord]) {
    if items.is_empty() {
        println!("  (no matching opportunities)");
        return;
    }
    for record in items {
        println!(
            "  - [{}] {} @ {} ({}, {})",
            record.id,
            record.title,
            record.company,
            record
                .job_type
                .map(|job_type| job_type.label())
                .unwrap_or("unspecified"),
            record.location.as_deref().unwrap_or("unspecified"),
        );
    }
}
