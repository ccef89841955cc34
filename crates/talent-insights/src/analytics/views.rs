use super::domain::{
    InterviewsPerPlacement, JobFamilyId, PricingTier, VendorRecord, VendorStatus,
};
use super::filter::{JobFamilyRow, RoleRow};
use super::market::RateCardRecord;
use super::period::TimePeriod;
use super::sort::SortState;
use super::summary::{overall_pass_rate, total_placements, VendorSummary};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorRowView {
    pub id: String,
    pub name: String,
    pub status: VendorStatus,
    pub status_label: &'static str,
    pub volume: u32,
    pub pass_rate: f64,
    pub pass_total: u32,
    pub avg_time_in_process: f64,
    pub no_show_rate: f64,
    pub no_show_total: u32,
    pub integrity_flag_rate: f64,
    pub integrity_total: u32,
    pub placements: u32,
    pub placements_total: u32,
    pub interviews_per_placement: InterviewsPerPlacement,
    pub interviews_per_placement_label: String,
    pub regions: Vec<String>,
    pub cost_per_hire: u32,
    pub cost_per_interview: u32,
    pub pricing_tier: PricingTier,
    pub pricing_tier_label: &'static str,
}

impl From<&VendorRecord> for VendorRowView {
    fn from(vendor: &VendorRecord) -> Self {
        let ratio = vendor.interviews_per_placement();
        Self {
            id: vendor.id.0.clone(),
            name: vendor.name.clone(),
            status: vendor.status,
            status_label: vendor.status.label(),
            volume: vendor.volume,
            pass_rate: vendor.pass_rate,
            pass_total: vendor.pass_total,
            avg_time_in_process: vendor.avg_time_in_process,
            no_show_rate: vendor.no_show_rate,
            no_show_total: vendor.no_show_total,
            integrity_flag_rate: vendor.integrity_flag_rate,
            integrity_total: vendor.integrity_total,
            placements: vendor.placements,
            placements_total: vendor.placements_total,
            interviews_per_placement: ratio,
            interviews_per_placement_label: ratio.label(),
            regions: vendor.regions.iter().cloned().collect(),
            cost_per_hire: vendor.cost_per_hire,
            cost_per_interview: vendor.cost_per_interview,
            pricing_tier: vendor.pricing_tier,
            pricing_tier_label: vendor.pricing_tier.label(),
        }
    }
}

pub(crate) fn vendor_rows(vendors: &[VendorRecord]) -> Vec<VendorRowView> {
    vendors.iter().map(VendorRowView::from).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleRowView {
    pub id: String,
    pub name: String,
    pub location: String,
    pub job_family_id: JobFamilyId,
    pub vendor_count: usize,
    pub total_volume: u64,
    pub overall_pass_rate: u32,
    pub total_placements: u64,
    pub vendors: Vec<VendorRowView>,
}

impl From<&RoleRow> for RoleRowView {
    fn from(row: &RoleRow) -> Self {
        Self {
            id: row.id.clone(),
            name: row.name.clone(),
            location: row.location.clone(),
            job_family_id: row.job_family_id.clone(),
            vendor_count: row.vendors.len(),
            total_volume: row.vendors.iter().map(|vendor| u64::from(vendor.volume)).sum(),
            overall_pass_rate: overall_pass_rate(&row.vendors),
            total_placements: total_placements(&row.vendors),
            vendors: vendor_rows(&row.vendors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobFamilyRowView {
    pub id: JobFamilyId,
    pub name: String,
    pub description: String,
    pub role_names: Vec<String>,
    pub summary: VendorSummary,
    pub vendors: Vec<VendorRowView>,
}

impl From<&JobFamilyRow> for JobFamilyRowView {
    fn from(row: &JobFamilyRow) -> Self {
        Self {
            id: row.id.clone(),
            name: row.name.clone(),
            description: row.description.clone(),
            role_names: row.role_names.clone(),
            summary: VendorSummary::from_vendors(&row.vendors),
            vendors: vendor_rows(&row.vendors),
        }
    }
}

/// A rate card priced at the hiring volume the table was asked about.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateCardRowView {
    #[serde(flatten)]
    pub card: RateCardRecord,
    pub volume: u32,
    pub effective_rate: f64,
    pub discount_applied: bool,
}

impl RateCardRowView {
    pub fn at_volume(card: &RateCardRecord, volume: u32) -> Self {
        let effective_rate = card.effective_rate(volume);
        Self {
            card: card.clone(),
            volume,
            effective_rate,
            discount_applied: effective_rate < card.hourly_rate,
        }
    }
}

/// Rendered table: the rows in display order plus the state that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView<C, R, S> {
    pub period: TimePeriod,
    pub period_label: &'static str,
    pub sort: SortState<C>,
    pub rows: Vec<R>,
    pub summary: S,
}

impl<C, R, S> TableView<C, R, S> {
    pub(crate) fn new(period: TimePeriod, sort: SortState<C>, rows: Vec<R>, summary: S) -> Self {
        Self {
            period,
            period_label: period.label(),
            sort,
            rows,
            summary,
        }
    }
}
