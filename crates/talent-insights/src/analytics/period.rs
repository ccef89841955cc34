use super::domain::VendorRecord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// Reporting window a table is viewed through. Vendor records are stored for the 30-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimePeriod {
    Days7,
    #[default]
    Days30,
    Days90,
    Year1,
}

impl TimePeriod {
    pub const fn ordered() -> [Self; 4] {
        [Self::Days7, Self::Days30, Self::Days90, Self::Year1]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Days7 => "7days",
            Self::Days30 => "30days",
            Self::Days90 => "90days",
            Self::Year1 => "1year",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Days7 => "Last 7 days",
            Self::Days30 => "Last 30 days",
            Self::Days90 => "Last 90 days",
            Self::Year1 => "Last year",
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Days7 => 0.25,
            Self::Days30 => 1.0,
            Self::Days90 => 2.5,
            Self::Year1 => 8.0,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|period| period.key() == key.trim())
    }

    /// Unknown keys read as the 30-day reference window, i.e. multiplier 1.0.
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            debug!(key, "unknown period key, using the 30-day reference window");
            Self::default()
        })
    }
}

impl Serialize for TimePeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for TimePeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_key_or_default(&raw))
    }
}

fn scale_count(value: u32, multiplier: f64) -> u32 {
    (f64::from(value) * multiplier).round() as u32
}

/// Scale the count-like fields of a base (30-day) vendor record to `period`.
///
/// Each count rounds independently, so derived ratios may drift by a rounding step. Always pass
/// the canonical base record: scaling an already scaled record compounds the multiplier.
pub fn scale(base: &VendorRecord, period: TimePeriod) -> VendorRecord {
    let multiplier = period.multiplier();
    VendorRecord {
        volume: scale_count(base.volume, multiplier),
        pass_total: scale_count(base.pass_total, multiplier),
        no_show_total: scale_count(base.no_show_total, multiplier),
        integrity_total: scale_count(base.integrity_total, multiplier),
        placements: scale_count(base.placements, multiplier),
        placements_total: scale_count(base.placements_total, multiplier),
        ..base.clone()
    }
}

/// Scale every record of a vendor list from its base.
pub fn scale_all<'a, I>(vendors: I, period: TimePeriod) -> Vec<VendorRecord>
where
    I: IntoIterator<Item = &'a VendorRecord>,
{
    vendors
        .into_iter()
        .map(|vendor| scale(vendor, period))
        .collect()
}
