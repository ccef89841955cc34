use crate::infra::{load_dataset, parse_period, parse_vendor_column};
use clap::Args;
use std::fmt::Write;
use std::path::PathBuf;
use talent_insights::analytics::{TableViewState, TimePeriod, VendorColumn, VendorTableView};
use talent_insights::config::AppConfig;
use talent_insights::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct VendorReportArgs {
    /// Reporting window: 7days, 30days, 90days or 1year (defaults to APP_DEFAULT_PERIOD)
    #[arg(long, value_parser = parse_period)]
    pub(crate) period: Option<TimePeriod>,
    /// Vendor CSV export replacing the seeded vendors
    #[arg(long)]
    pub(crate) vendor_csv: Option<PathBuf>,
    /// Case-insensitive search over vendor names
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Only show this vendor
    #[arg(long)]
    pub(crate) vendor: Option<String>,
    /// Only show vendors able to fill this role
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// Column to sort by, e.g. pass-rate or interviews-per-placement
    #[arg(long, value_parser = parse_vendor_column)]
    pub(crate) sort_by: Option<VendorColumn>,
    /// Sort descending instead of ascending
    #[arg(long, requires = "sort_by")]
    pub(crate) descending: bool,
}

impl VendorReportArgs {
    fn table_state(&self, default_period: TimePeriod) -> TableViewState<VendorColumn> {
        let mut state = TableViewState::for_period(self.period.unwrap_or(default_period));
        if let Some(search) = &self.search {
            state = state.with_search(search.as_str());
        }
        if let Some(vendor) = &self.vendor {
            state = state.with_vendor(vendor.as_str());
        }
        if let Some(role) = &self.role {
            state = state.with_role(role.as_str());
        }
        if let Some(column) = self.sort_by {
            state = state.with_sort_click(column);
            if self.descending {
                state = state.with_sort_click(column);
            }
        }
        state
    }
}

pub(crate) fn run_vendor_report(args: VendorReportArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = args.vendor_csv.clone() {
        config.analytics.vendor_csv = Some(path);
    }

    let dataset = load_dataset(&config.analytics)?;
    let state = args.table_state(config.analytics.default_period);
    let table = dataset.vendor_table(&state);
    print!("{}", render_vendor_report(&table));
    Ok(())
}

pub(crate) fn render_vendor_report(table: &VendorTableView) -> String {
    let mut out = String::new();
    let summary = &table.summary;

    let _ = writeln!(out, "Vendor performance ({})", table.period_label);
    let _ = writeln!(
        out,
        "- {} vendors ({} active) | {} interviews | {}% overall pass rate",
        summary.vendor_count,
        summary.active_vendor_count,
        summary.total_volume,
        summary.overall_pass_rate
    );
    let _ = writeln!(
        out,
        "- {} of {} placements filled ({}%) | {:.1} days avg time in process | {} integrity flags",
        summary.total_placements,
        summary.total_placement_target,
        summary.placement_fill_rate,
        summary.average_time_in_process,
        summary.total_integrity_flags
    );

    if table.rows.is_empty() {
        let _ = writeln!(out, "No vendors match the current filters.");
        return out;
    }

    let _ = writeln!(out, "Vendors:");
    for row in &table.rows {
        let _ = writeln!(
            out,
            "  - {} [{}] | {} interviews | {:.1}% pass | {}/{} placements | {} interviews per placement | ${} per hire ({})",
            row.name,
            row.status_label,
            row.volume,
            row.pass_rate,
            row.placements,
            row.placements_total,
            row.interviews_per_placement_label,
            row.cost_per_hire,
            row.pricing_tier_label
        );
    }

    out
}
