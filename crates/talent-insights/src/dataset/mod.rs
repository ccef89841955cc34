//! The immutable collections every table is derived from.

pub mod import;
mod seed;

use crate::analytics::candidates::{
    AboveBarBasis, CandidateColumn, CandidateRecord, Recommendation,
};
use crate::analytics::domain::{JobFamilyRecord, PricingTier, RoleRecord, VendorRecord};
use crate::analytics::market::{GeographicRecord, GeographyColumn, RateCardColumn, RateCardRecord};
use crate::analytics::table::{
    self, CandidateTableView, GeographyTableView, JobFamilyTableView, RateCardTableView,
    RoleTableView, TableViewState, VendorColumn, VendorTableView,
};
use std::collections::BTreeSet;
use std::sync::Arc;

pub use import::{VendorCsvImporter, VendorImportError};

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub vendors: Vec<Arc<VendorRecord>>,
    pub roles: Vec<RoleRecord>,
    pub job_families: Vec<JobFamilyRecord>,
    pub candidates: Vec<CandidateRecord>,
    pub rate_cards: Vec<RateCardRecord>,
    pub geography: Vec<GeographicRecord>,
}

impl Dataset {
    pub fn seed() -> Self {
        let vendors: Vec<Arc<VendorRecord>> = seed::vendors().into_iter().map(Arc::new).collect();
        Self {
            roles: seed::roles(&vendors),
            vendors,
            job_families: seed::job_families(),
            candidates: seed::candidates(),
            rate_cards: seed::rate_cards(),
            geography: seed::geography(),
        }
    }

    /// Replace the vendor collection and rebind role assignments by vendor id. Assignments
    /// naming a vendor that is no longer present are dropped.
    pub fn with_vendors(self, vendors: Vec<VendorRecord>) -> Self {
        let vendors: Vec<Arc<VendorRecord>> = vendors.into_iter().map(Arc::new).collect();
        let roles = self
            .roles
            .into_iter()
            .map(|role| RoleRecord {
                vendors: role
                    .vendors
                    .iter()
                    .filter_map(|assigned| {
                        vendors
                            .iter()
                            .find(|vendor| vendor.id == assigned.id)
                            .map(Arc::clone)
                    })
                    .collect(),
                ..role
            })
            .collect();

        Self {
            vendors,
            roles,
            ..self
        }
    }

    pub fn vendor_table(&self, state: &TableViewState<VendorColumn>) -> VendorTableView {
        table::vendor_table(&self.vendors, &self.roles, state)
    }

    pub fn role_table(&self, state: &TableViewState<VendorColumn>) -> RoleTableView {
        table::role_table(&self.roles, state)
    }

    pub fn job_family_table(&self, state: &TableViewState<VendorColumn>) -> JobFamilyTableView {
        table::job_family_table(&self.job_families, &self.roles, state)
    }

    pub fn candidate_table(
        &self,
        state: &TableViewState<CandidateColumn>,
        basis: AboveBarBasis,
        recommendation: Option<Recommendation>,
    ) -> CandidateTableView {
        table::candidate_table(&self.candidates, state, basis, recommendation)
    }

    pub fn rate_card_table(
        &self,
        state: &TableViewState<RateCardColumn>,
        tier: Option<PricingTier>,
        volume: u32,
    ) -> RateCardTableView {
        table::rate_card_table(&self.rate_cards, state, tier, volume)
    }

    pub fn geography_table(&self, state: &TableViewState<GeographyColumn>) -> GeographyTableView {
        table::geography_table(&self.geography, state)
    }

    /// Distinct role locations, sorted, for the location dropdown.
    pub fn locations(&self) -> Vec<&str> {
        self.roles
            .iter()
            .map(|role| role.location.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::domain::{VendorId, VendorStatus};

    #[test]
    fn seed_binds_roles_to_shared_vendors() {
        let dataset = Dataset::seed();
        assert_eq!(dataset.vendors.len(), 5);
        assert_eq!(dataset.roles.len(), 5);

        let backend = &dataset.roles[0];
        let shared = dataset
            .roles
            .iter()
            .find(|role| role.name == "Frontend Engineer")
            .expect("role present");
        assert!(Arc::ptr_eq(&backend.vendors[0], &shared.vendors[0]));
        assert!(Arc::ptr_eq(&backend.vendors[0], &dataset.vendors[0]));
    }

    #[test]
    fn every_role_points_at_a_known_family() {
        let dataset = Dataset::seed();
        assert!(dataset.roles.iter().all(|role| dataset
            .job_families
            .iter()
            .any(|family| family.id == role.job_family_id)));
    }

    #[test]
    fn with_vendors_rebinds_by_id_and_drops_missing() {
        let mut replacement: Vec<VendorRecord> = Dataset::seed()
            .vendors
            .iter()
            .filter(|vendor| vendor.id.0 != "vendor-005")
            .map(|vendor| VendorRecord::clone(vendor))
            .collect();
        replacement[0].volume = 999;
        replacement[0].status = VendorStatus::Inactive;

        let dataset = Dataset::seed().with_vendors(replacement);
        let backend = &dataset.roles[0];
        assert_eq!(backend.vendors[0].id, VendorId("vendor-001".to_string()));
        assert_eq!(backend.vendors[0].volume, 999);

        let devops = dataset
            .roles
            .iter()
            .find(|role| role.name == "DevOps Engineer")
            .expect("role present");
        assert_eq!(devops.vendors.len(), 1);
        assert!(!devops.has_vendor_named("NextGen Talent"));
    }

    #[test]
    fn candidate_table_narrows_to_one_recommendation() {
        let dataset = Dataset::seed();
        let table = dataset.candidate_table(
            &TableViewState::default(),
            AboveBarBasis::Stored,
            Some(Recommendation::FastTrack),
        );
        assert_eq!(table.rows.len(), 1);
        assert!(table
            .rows
            .iter()
            .all(|candidate| candidate.recommendation == Recommendation::FastTrack));
        assert_eq!(table.summary.total_candidates, 1);

        let everyone =
            dataset.candidate_table(&TableViewState::default(), AboveBarBasis::Stored, None);
        assert_eq!(everyone.rows.len(), 5);
    }

    #[test]
    fn rate_card_table_prices_at_requested_volume() {
        let dataset = Dataset::seed();
        let state = TableViewState::default()
            .with_sort_click(RateCardColumn::EffectiveRate)
            .with_sort_click(RateCardColumn::EffectiveRate);

        let below = dataset.rate_card_table(&state, Some(PricingTier::Premium), 9);
        assert_eq!(below.summary.discounted_card_count, 0);
        assert!(below
            .rows
            .iter()
            .all(|row| row.effective_rate == row.card.hourly_rate));

        let above = dataset.rate_card_table(&state, Some(PricingTier::Premium), 10);
        assert_eq!(above.summary.card_count, 3);
        assert_eq!(above.summary.discounted_card_count, 2);
        let rates: Vec<f64> = above.rows.iter().map(|row| row.effective_rate).collect();
        assert_eq!(rates, vec![105.0, 85.5, 80.96]);
    }

    #[test]
    fn locations_are_distinct_and_sorted() {
        let dataset = Dataset::seed();
        assert_eq!(
            dataset.locations(),
            vec!["Berlin", "London", "New York", "Remote", "San Francisco"]
        );
    }
}
