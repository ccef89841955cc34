//! Vendor analytics: period scaling, filter chains, sorting, and summary aggregation over the
//! vendor, role, job-family, and candidate collections.

pub mod candidates;
pub mod domain;
pub mod filter;
pub mod market;
pub mod period;
pub mod router;
pub mod sort;
pub mod summary;
pub mod table;
mod views;

pub use candidates::{
    AboveBarBasis, CandidateColumn, CandidateRecord, CandidateSummary, Recommendation,
    RecommendationDistribution,
};
pub use domain::{
    InterviewsPerPlacement, JobFamilyId, JobFamilyRecord, PricingTier, RoleRecord, VendorId,
    VendorRecord, VendorStatus,
};
pub use filter::{Selection, ALL_JOB_FAMILIES, ALL_LOCATIONS, ALL_ROLES, ALL_VENDORS};
pub use market::{GeographicRecord, GeographyColumn, RateCardColumn, RateCardRecord};
pub use period::{scale, scale_all, TimePeriod};
pub use router::analytics_router;
pub use sort::{next_sort_state, sort_records, SortColumn, SortDirection, SortKey, SortState};
pub use summary::{normalize_to_hundred, overall_pass_rate, percentage, VendorSummary};
pub use table::{
    candidate_table, geography_table, job_family_table, rate_card_table, role_table,
    vendor_table, CandidateTableView, GeographyTableView, JobFamilyTableView, RateCardTableView,
    RoleTableView, TableViewState, VendorColumn, VendorTableView,
};
pub use views::{JobFamilyRowView, RateCardRowView, RoleRowView, TableView, VendorRowView};
