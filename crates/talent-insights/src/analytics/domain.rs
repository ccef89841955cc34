use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Identifier wrapper for staffing vendors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VendorId(pub String);

/// Identifier wrapper for job families.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobFamilyId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    Active,
    Inactive,
    Pending,
}

impl VendorStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingTier {
    Premium,
    Standard,
    Budget,
}

impl PricingTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Premium => "Premium",
            Self::Standard => "Standard",
            Self::Budget => "Budget",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "premium" => Some(Self::Premium),
            "standard" => Some(Self::Standard),
            "budget" => Some(Self::Budget),
            _ => None,
        }
    }
}

/// Interviews needed per placement. Zero placements leave the ratio undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InterviewsPerPlacement {
    Finite(f64),
    Undefined,
}

impl InterviewsPerPlacement {
    pub fn from_counts(volume: u32, placements: u32) -> Self {
        if placements == 0 {
            Self::Undefined
        } else {
            Self::Finite(f64::from(volume) / f64::from(placements))
        }
    }

    pub fn as_option(self) -> Option<f64> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Undefined => None,
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Finite(value) => format!("{value:.1}"),
            Self::Undefined => "n/a".to_string(),
        }
    }
}

/// Aggregate performance of one staffing vendor over the 30-day reference window.
///
/// Count-like fields scale with the selected period; rate fields are percentages in `[0, 100]`
/// and hold across windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRecord {
    pub id: VendorId,
    pub name: String,
    pub status: VendorStatus,
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
    pub regions: BTreeSet<String>,
    pub cost_per_hire: u32,
    pub cost_per_interview: u32,
    pub pricing_tier: PricingTier,
}

impl VendorRecord {
    pub fn interviews_per_placement(&self) -> InterviewsPerPlacement {
        InterviewsPerPlacement::from_counts(self.volume, self.placements)
    }

    pub fn is_active(&self) -> bool {
        self.status == VendorStatus::Active
    }
}

/// A job role and the vendors able to fulfil it. Vendors are shared, not owned.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub job_family_id: JobFamilyId,
    pub vendors: Vec<Arc<VendorRecord>>,
}

impl RoleRecord {
    pub fn has_vendor_named(&self, name: &str) -> bool {
        self.vendors.iter().any(|vendor| vendor.name == name)
    }
}

/// Grouping of related roles for roll-up reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFamilyRecord {
    pub id: JobFamilyId,
    pub name: String,
    pub description: String,
}
