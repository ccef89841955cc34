use super::domain::{JobFamilyId, JobFamilyRecord, RoleRecord, VendorId, VendorRecord};
use super::period::{scale_all, TimePeriod};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

pub const ALL_VENDORS: &str = "All Vendors";
pub const ALL_ROLES: &str = "All Roles";
pub const ALL_JOB_FAMILIES: &str = "All Job Families";
pub const ALL_LOCATIONS: &str = "All Locations";

/// A dropdown value: either its "All ..." sentinel or one exact name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Empty input and the sentinel both mean "no filter".
    pub fn from_input(raw: &str, sentinel: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == sentinel {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }

    pub fn only(name: impl Into<String>) -> Self {
        Self::Only(name.into())
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => name == value,
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(name) => Some(name),
        }
    }
}

/// Case-insensitive substring needle. An empty needle matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.0.is_empty() || text.to_lowercase().contains(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorQuery {
    pub search: String,
    pub vendor: Selection,
    pub role: Selection,
    pub period: TimePeriod,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleQuery {
    pub search: String,
    pub vendor: Selection,
    pub role: Selection,
    pub location: Selection,
    pub period: TimePeriod,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFamilyQuery {
    pub search: String,
    pub vendor: Selection,
    pub job_family: Selection,
    pub period: TimePeriod,
}

/// A role that survived filtering, carrying its narrowed and scaled vendors.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleRow {
    pub id: String,
    pub name: String,
    pub location: String,
    pub job_family_id: JobFamilyId,
    pub vendors: Vec<VendorRecord>,
}

/// A job family rolled up across its roles, one entry per distinct vendor.
#[derive(Debug, Clone, PartialEq)]
pub struct JobFamilyRow {
    pub id: JobFamilyId,
    pub name: String,
    pub description: String,
    pub role_names: Vec<String>,
    pub vendors: Vec<VendorRecord>,
}

/// Names of vendors able to fill the selected role. `None` means the role filter does not apply,
/// either because no role is selected or because the name resolves to no role.
pub fn eligible_vendor_names<'a>(
    roles: &'a [RoleRecord],
    role: &Selection,
) -> Option<HashSet<&'a str>> {
    let name = role.as_deref()?;
    let mut matched = roles.iter().filter(|record| record.name == name).peekable();
    if matched.peek().is_none() {
        debug!(role = name, "role not found, ignoring role filter");
        return None;
    }

    Some(
        matched
            .flat_map(|record| record.vendors.iter())
            .map(|vendor| vendor.name.as_str())
            .collect(),
    )
}

/// Vendor table: vendor equality, then search, then role membership, then period scaling.
pub fn filter_vendors(
    vendors: &[Arc<VendorRecord>],
    roles: &[RoleRecord],
    query: &VendorQuery,
) -> Vec<VendorRecord> {
    let search = SearchTerm::new(&query.search);
    let eligible = eligible_vendor_names(roles, &query.role);

    let survivors = vendors
        .iter()
        .map(Arc::as_ref)
        .filter(|vendor| query.vendor.matches(&vendor.name))
        .filter(|vendor| search.matches(&vendor.name))
        .filter(|vendor| {
            eligible
                .as_ref()
                .map_or(true, |names| names.contains(vendor.name.as_str()))
        });

    scale_all(survivors, query.period)
}

/// Narrow `vendors` by vendor selection, then by search unless `owner_name` already matches.
fn narrow_vendors<'a>(
    vendors: impl Iterator<Item = &'a VendorRecord>,
    owner_name: &str,
    vendor: &Selection,
    search: &SearchTerm,
) -> Vec<&'a VendorRecord> {
    let owner_matches = search.matches(owner_name);
    vendors
        .filter(|record| vendor.matches(&record.name))
        .filter(|record| owner_matches || search.matches(&record.name))
        .collect()
}

/// Role table. A role matching the search keeps its vendors; a role kept through a vendor match
/// keeps only the matching vendors. Roles left without vendors are dropped.
pub fn filter_roles(roles: &[RoleRecord], query: &RoleQuery) -> Vec<RoleRow> {
    let search = SearchTerm::new(&query.search);

    roles
        .iter()
        .filter(|role| query.role.matches(&role.name))
        .filter(|role| query.location.matches(&role.location))
        .filter_map(|role| {
            let vendors = narrow_vendors(
                role.vendors.iter().map(Arc::as_ref),
                &role.name,
                &query.vendor,
                &search,
            );
            if vendors.is_empty() {
                return None;
            }

            Some(RoleRow {
                id: role.id.clone(),
                name: role.name.clone(),
                location: role.location.clone(),
                job_family_id: role.job_family_id.clone(),
                vendors: scale_all(vendors, query.period),
            })
        })
        .collect()
}

/// Distinct vendors across `roles`, first occurrence wins.
pub fn dedupe_vendors<'a, I>(roles: I) -> Vec<&'a VendorRecord>
where
    I: IntoIterator<Item = &'a RoleRecord>,
{
    let mut seen: HashSet<&'a VendorId> = HashSet::new();
    roles
        .into_iter()
        .flat_map(|role| role.vendors.iter())
        .map(Arc::as_ref)
        .filter(|vendor| seen.insert(&vendor.id))
        .collect()
}

/// Job-family table: each selected family unions the vendors of its roles, deduplicated by id.
pub fn filter_job_families(
    families: &[JobFamilyRecord],
    roles: &[RoleRecord],
    query: &JobFamilyQuery,
) -> Vec<JobFamilyRow> {
    let search = SearchTerm::new(&query.search);

    families
        .iter()
        .filter(|family| query.job_family.matches(&family.name))
        .filter_map(|family| {
            let family_roles: Vec<&RoleRecord> = roles
                .iter()
                .filter(|role| role.job_family_id == family.id)
                .collect();
            let vendors = narrow_vendors(
                dedupe_vendors(family_roles.iter().copied()).into_iter(),
                &family.name,
                &query.vendor,
                &search,
            );
            if vendors.is_empty() {
                return None;
            }

            Some(JobFamilyRow {
                id: family.id.clone(),
                name: family.name.clone(),
                description: family.description.clone(),
                role_names: family_roles.iter().map(|role| role.name.clone()).collect(),
                vendors: scale_all(vendors, query.period),
            })
        })
        .collect()
}
