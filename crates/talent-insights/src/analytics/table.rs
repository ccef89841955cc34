//! Headless table state and the pipelines that turn it into rendered tables.
//!
//! Every pipeline runs scale, filter and sort in that order. Summaries come from the filtered
//! rows before sorting, so the sort state never changes a headline number.

use super::candidates::{
    filter_candidates, AboveBarBasis, CandidateColumn, CandidateQuery, CandidateRecord,
    CandidateSummary, Recommendation,
};
use super::domain::{JobFamilyRecord, PricingTier, RoleRecord, VendorId, VendorRecord};
use super::filter::{
    filter_job_families, filter_roles, filter_vendors, JobFamilyQuery, RoleQuery, Selection,
    VendorQuery, ALL_JOB_FAMILIES, ALL_LOCATIONS, ALL_ROLES, ALL_VENDORS,
};
use super::market::{
    filter_geography, filter_rate_cards, GeographicRecord, GeographyColumn, GeographyQuery,
    GeographySummary, RateCardColumn, RateCardQuery, RateCardRecord, RateCardSummary,
};
use super::period::TimePeriod;
use super::sort::{sort_in_place, sort_records, SortColumn, SortKey, SortState};
use super::summary::VendorSummary;
use super::views::{
    vendor_rows, JobFamilyRowView, RateCardRowView, RoleRowView, TableView, VendorRowView,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorColumn {
    Name,
    Status,
    Volume,
    PassRate,
    PassTotal,
    TimeInProcess,
    NoShowRate,
    NoShowTotal,
    IntegrityFlagRate,
    IntegrityTotal,
    Placements,
    PlacementsTotal,
    InterviewsPerPlacement,
    CostPerHire,
    CostPerInterview,
    PricingTier,
}

impl SortColumn<VendorRecord> for VendorColumn {
    fn key<'r>(&self, row: &'r VendorRecord) -> SortKey<'r> {
        match self {
            Self::Name => SortKey::Text(&row.name),
            Self::Status => SortKey::Text(row.status.label()),
            Self::Volume => SortKey::Number(f64::from(row.volume)),
            Self::PassRate => SortKey::Number(row.pass_rate),
            Self::PassTotal => SortKey::Number(f64::from(row.pass_total)),
            Self::TimeInProcess => SortKey::Number(row.avg_time_in_process),
            Self::NoShowRate => SortKey::Number(row.no_show_rate),
            Self::NoShowTotal => SortKey::Number(f64::from(row.no_show_total)),
            Self::IntegrityFlagRate => SortKey::Number(row.integrity_flag_rate),
            Self::IntegrityTotal => SortKey::Number(f64::from(row.integrity_total)),
            Self::Placements => SortKey::Number(f64::from(row.placements)),
            Self::PlacementsTotal => SortKey::Number(f64::from(row.placements_total)),
            Self::InterviewsPerPlacement => row
                .interviews_per_placement()
                .as_option()
                .map_or(SortKey::Missing, SortKey::Number),
            Self::CostPerHire => SortKey::Number(f64::from(row.cost_per_hire)),
            Self::CostPerInterview => SortKey::Number(f64::from(row.cost_per_interview)),
            Self::PricingTier => SortKey::Text(row.pricing_tier.label()),
        }
    }
}

/// Everything a table's controls hold, passed into and returned from the pipelines.
///
/// Selections carry the raw control values, sentinels included ("All Vendors", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableViewState<C> {
    pub search_query: String,
    pub selected_vendor: String,
    pub selected_role: String,
    pub selected_job_family: String,
    pub selected_location: String,
    pub selected_period: TimePeriod,
    pub sort: SortState<C>,
}

impl<C> Default for TableViewState<C> {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_vendor: ALL_VENDORS.to_string(),
            selected_role: ALL_ROLES.to_string(),
            selected_job_family: ALL_JOB_FAMILIES.to_string(),
            selected_location: ALL_LOCATIONS.to_string(),
            selected_period: TimePeriod::default(),
            sort: SortState::Unsorted,
        }
    }
}

impl<C: Copy + PartialEq> TableViewState<C> {
    pub fn for_period(period: TimePeriod) -> Self {
        Self {
            selected_period: period,
            ..Self::default()
        }
    }

    pub fn with_sort_click(mut self, column: C) -> Self {
        self.sort = self.sort.next(column);
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.selected_vendor = vendor.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.selected_role = role.into();
        self
    }

    pub fn with_job_family(mut self, job_family: impl Into<String>) -> Self {
        self.selected_job_family = job_family.into();
        self
    }

    fn vendor_selection(&self) -> Selection {
        Selection::from_input(&self.selected_vendor, ALL_VENDORS)
    }

    fn role_selection(&self) -> Selection {
        Selection::from_input(&self.selected_role, ALL_ROLES)
    }

    pub fn vendor_query(&self) -> VendorQuery {
        VendorQuery {
            search: self.search_query.clone(),
            vendor: self.vendor_selection(),
            role: self.role_selection(),
            period: self.selected_period,
        }
    }

    pub fn role_query(&self) -> RoleQuery {
        RoleQuery {
            search: self.search_query.clone(),
            vendor: self.vendor_selection(),
            role: self.role_selection(),
            location: Selection::from_input(&self.selected_location, ALL_LOCATIONS),
            period: self.selected_period,
        }
    }

    pub fn job_family_query(&self) -> JobFamilyQuery {
        JobFamilyQuery {
            search: self.search_query.clone(),
            vendor: self.vendor_selection(),
            job_family: Selection::from_input(&self.selected_job_family, ALL_JOB_FAMILIES),
            period: self.selected_period,
        }
    }

    pub fn candidate_query(&self, recommendation: Option<Recommendation>) -> CandidateQuery {
        CandidateQuery {
            search: self.search_query.clone(),
            vendor: self.vendor_selection(),
            role: self.role_selection(),
            recommendation,
        }
    }

    /// Rate cards reuse the location control as their region filter.
    pub fn rate_card_query(&self, tier: Option<PricingTier>) -> RateCardQuery {
        RateCardQuery {
            vendor: self.vendor_selection(),
            region: Selection::from_input(&self.selected_location, ALL_LOCATIONS),
            tier,
        }
    }

    pub fn geography_query(&self) -> GeographyQuery {
        GeographyQuery {
            search: self.search_query.clone(),
            region: Selection::from_input(&self.selected_location, ALL_LOCATIONS),
        }
    }
}

pub type VendorTableView = TableView<VendorColumn, VendorRowView, VendorSummary>;
pub type RoleTableView = TableView<VendorColumn, RoleRowView, VendorSummary>;
pub type JobFamilyTableView = TableView<VendorColumn, JobFamilyRowView, VendorSummary>;
pub type CandidateTableView = TableView<CandidateColumn, CandidateRecord, CandidateSummary>;
pub type RateCardTableView = TableView<RateCardColumn, RateCardRowView, RateCardSummary>;
pub type GeographyTableView = TableView<GeographyColumn, GeographicRecord, GeographySummary>;

/// Distinct vendors by id across nested rows, first occurrence wins.
fn distinct_vendors<'a, I>(vendors: I) -> Vec<VendorRecord>
where
    I: IntoIterator<Item = &'a VendorRecord>,
{
    let mut seen: HashSet<&'a VendorId> = HashSet::new();
    vendors
        .into_iter()
        .filter(|vendor| seen.insert(&vendor.id))
        .cloned()
        .collect()
}

pub fn vendor_table(
    vendors: &[Arc<VendorRecord>],
    roles: &[RoleRecord],
    state: &TableViewState<VendorColumn>,
) -> VendorTableView {
    let filtered = filter_vendors(vendors, roles, &state.vendor_query());
    let summary = VendorSummary::from_vendors(&filtered);
    let sorted = sort_records(&filtered, state.sort);
    TableView::new(state.selected_period, state.sort, vendor_rows(&sorted), summary)
}

/// Role table. The sort applies to the vendors nested under each role; role order is kept.
pub fn role_table(roles: &[RoleRecord], state: &TableViewState<VendorColumn>) -> RoleTableView {
    let mut rows = filter_roles(roles, &state.role_query());
    let summary = VendorSummary::from_vendors(&distinct_vendors(
        rows.iter().flat_map(|row| row.vendors.iter()),
    ));
    for row in &mut rows {
        sort_in_place(&mut row.vendors, state.sort);
    }
    let rows = rows.iter().map(RoleRowView::from).collect();
    TableView::new(state.selected_period, state.sort, rows, summary)
}

pub fn job_family_table(
    families: &[JobFamilyRecord],
    roles: &[RoleRecord],
    state: &TableViewState<VendorColumn>,
) -> JobFamilyTableView {
    let mut rows = filter_job_families(families, roles, &state.job_family_query());
    let summary = VendorSummary::from_vendors(&distinct_vendors(
        rows.iter().flat_map(|row| row.vendors.iter()),
    ));
    for row in &mut rows {
        sort_in_place(&mut row.vendors, state.sort);
    }
    let rows = rows.iter().map(JobFamilyRowView::from).collect();
    TableView::new(state.selected_period, state.sort, rows, summary)
}

pub fn candidate_table(
    candidates: &[CandidateRecord],
    state: &TableViewState<CandidateColumn>,
    basis: AboveBarBasis,
    recommendation: Option<Recommendation>,
) -> CandidateTableView {
    let filtered = filter_candidates(candidates, &state.candidate_query(recommendation));
    let summary = CandidateSummary::from_candidates(&filtered, basis);
    let rows = sort_records(&filtered, state.sort);
    TableView::new(state.selected_period, state.sort, rows, summary)
}

/// Rate-card table priced at `volume` hires, so volume discounts show in the effective rate.
pub fn rate_card_table(
    cards: &[RateCardRecord],
    state: &TableViewState<RateCardColumn>,
    tier: Option<PricingTier>,
    volume: u32,
) -> RateCardTableView {
    let priced: Vec<RateCardRowView> = filter_rate_cards(cards, &state.rate_card_query(tier))
        .iter()
        .map(|card| RateCardRowView::at_volume(card, volume))
        .collect();
    let summary = RateCardSummary::from_rows(&priced);
    let rows = sort_records(&priced, state.sort);
    TableView::new(state.selected_period, state.sort, rows, summary)
}

pub fn geography_table(
    records: &[GeographicRecord],
    state: &TableViewState<GeographyColumn>,
) -> GeographyTableView {
    let filtered = filter_geography(records, &state.geography_query());
    let summary = GeographySummary::from_records(&filtered);
    let rows = sort_records(&filtered, state.sort);
    TableView::new(state.selected_period, state.sort, rows, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::domain::{InterviewsPerPlacement, PricingTier, VendorStatus};
    use crate::analytics::sort::SortDirection;

    fn vendor(id: &str, name: &str, volume: u32, placements: u32) -> Arc<VendorRecord> {
        Arc::new(VendorRecord {
            id: VendorId(id.to_string()),
            name: name.to_string(),
            status: VendorStatus::Active,
            volume,
            pass_rate: 50.0,
            pass_total: volume / 2,
            avg_time_in_process: 5.0,
            no_show_rate: 5.0,
            no_show_total: volume / 20,
            integrity_flag_rate: 1.0,
            integrity_total: volume / 100,
            placements,
            placements_total: placements + 2,
            regions: Default::default(),
            cost_per_hire: 3500,
            cost_per_interview: 160,
            pricing_tier: PricingTier::Premium,
        })
    }

    fn vendors() -> Vec<Arc<VendorRecord>> {
        vec![
            vendor("v-1", "Crest Partners", 40, 0),
            vendor("v-2", "Acme Staffing", 100, 10),
            vendor("v-3", "BrightHire", 80, 4),
        ]
    }

    #[test]
    fn default_state_uses_sentinels() {
        let state: TableViewState<VendorColumn> = TableViewState::default();
        assert_eq!(state.selected_vendor, "All Vendors");
        assert_eq!(state.selected_role, "All Roles");
        assert_eq!(state.selected_job_family, "All Job Families");
        assert_eq!(state.selected_location, "All Locations");
        assert_eq!(state.vendor_query(), VendorQuery::default());
    }

    #[test]
    fn state_deserializes_from_partial_json() {
        let state: TableViewState<VendorColumn> = serde_json::from_value(serde_json::json!({
            "search_query": "acme",
            "selected_period": "90days",
            "sort": { "state": "sorted", "column": "volume", "direction": "descending" }
        }))
        .expect("state parses");
        assert_eq!(state.selected_period, TimePeriod::Days90);
        assert_eq!(state.selected_vendor, ALL_VENDORS);
        assert_eq!(
            state.sort,
            SortState::Sorted {
                column: VendorColumn::Volume,
                direction: SortDirection::Descending
            }
        );
    }

    #[test]
    fn vendor_table_sorts_rows_but_not_summary() {
        let data = vendors();
        let unsorted = vendor_table(&data, &[], &TableViewState::default());
        let sorted = vendor_table(
            &data,
            &[],
            &TableViewState::default().with_sort_click(VendorColumn::Name),
        );

        let names: Vec<_> = sorted.rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Acme Staffing", "BrightHire", "Crest Partners"]);
        assert_eq!(unsorted.summary, sorted.summary);
        assert_eq!(unsorted.rows[0].name, "Crest Partners");
    }

    #[test]
    fn undefined_ratio_sorts_last_ascending() {
        let data = vendors();
        let state =
            TableViewState::default().with_sort_click(VendorColumn::InterviewsPerPlacement);
        let table = vendor_table(&data, &[], &state);
        let last = table.rows.last().expect("rows present");
        assert_eq!(last.name, "Crest Partners");
        assert_eq!(
            last.interviews_per_placement,
            InterviewsPerPlacement::Undefined
        );
        assert_eq!(table.rows[0].name, "Acme Staffing");
    }

    #[test]
    fn third_click_restores_input_order() {
        let data = vendors();
        let state = TableViewState::default()
            .with_sort_click(VendorColumn::Volume)
            .with_sort_click(VendorColumn::Volume)
            .with_sort_click(VendorColumn::Volume);
        let table = vendor_table(&data, &[], &state);
        let ids: Vec<_> = table.rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["v-1", "v-2", "v-3"]);
    }

    #[test]
    fn table_reports_period_label() {
        let data = vendors();
        let table = vendor_table(
            &data,
            &[],
            &TableViewState::for_period(TimePeriod::Days7),
        );
        assert_eq!(table.period_label, "Last 7 days");
        assert_eq!(table.rows[1].volume, 25);
    }
}
