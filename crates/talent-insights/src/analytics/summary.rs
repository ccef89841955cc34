use super::domain::VendorRecord;
use serde::Serialize;

/// `round(100 * part / whole)`, or 0 when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round() as u32
}

/// Largest-remainder apportionment of `counts` into whole percentages summing to exactly 100.
/// All zeros when the counts sum to zero. Ties go to the earlier entry.
pub fn normalize_to_hundred(counts: &[u64]) -> Vec<u32> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return vec![0; counts.len()];
    }

    let mut shares: Vec<u32> = counts
        .iter()
        .map(|count| (count * 100 / total) as u32)
        .collect();
    let assigned: u32 = shares.iter().sum();

    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|a, b| (counts[*b] * 100 % total).cmp(&(counts[*a] * 100 % total)));
    for index in order.into_iter().take((100 - assigned) as usize) {
        shares[index] += 1;
    }

    shares
}

/// Weighted pass rate over active vendors: total passes over total volume, not a mean of rates.
pub fn overall_pass_rate<'a, I>(vendors: I) -> u32
where
    I: IntoIterator<Item = &'a VendorRecord>,
{
    let (passed, volume) = vendors
        .into_iter()
        .filter(|vendor| vendor.is_active())
        .fold((0u64, 0u64), |(passed, volume), vendor| {
            (
                passed + u64::from(vendor.pass_total),
                volume + u64::from(vendor.volume),
            )
        });
    percentage(passed, volume)
}

pub fn total_placements<'a, I>(vendors: I) -> u64
where
    I: IntoIterator<Item = &'a VendorRecord>,
{
    vendors
        .into_iter()
        .map(|vendor| u64::from(vendor.placements))
        .sum()
}

/// Headline numbers shown above a vendor table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VendorSummary {
    pub vendor_count: usize,
    pub active_vendor_count: usize,
    pub total_volume: u64,
    pub total_passed: u64,
    pub overall_pass_rate: u32,
    pub total_placements: u64,
    pub total_placement_target: u64,
    pub placement_fill_rate: u32,
    pub average_time_in_process: f64,
    pub total_integrity_flags: u64,
}

impl VendorSummary {
    /// Summarize a filtered, scaled collection. Sort order does not matter.
    pub fn from_vendors(vendors: &[VendorRecord]) -> Self {
        let active: Vec<&VendorRecord> = vendors
            .iter()
            .filter(|vendor| vendor.is_active())
            .collect();
        let total_volume = active.iter().map(|vendor| u64::from(vendor.volume)).sum();
        let total_passed = active.iter().map(|vendor| u64::from(vendor.pass_total)).sum();
        let total_placements = total_placements(vendors);
        let total_placement_target = vendors
            .iter()
            .map(|vendor| u64::from(vendor.placements_total))
            .sum();
        let total_integrity_flags = vendors
            .iter()
            .map(|vendor| u64::from(vendor.integrity_total))
            .sum();

        let average_time_in_process = if vendors.is_empty() {
            0.0
        } else {
            let total: f64 = vendors.iter().map(|vendor| vendor.avg_time_in_process).sum();
            (total / vendors.len() as f64 * 10.0).round() / 10.0
        };

        Self {
            vendor_count: vendors.len(),
            active_vendor_count: active.len(),
            total_volume,
            total_passed,
            overall_pass_rate: percentage(total_passed, total_volume),
            total_placements,
            total_placement_target,
            placement_fill_rate: percentage(total_placements, total_placement_target),
            average_time_in_process,
            total_integrity_flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::domain::{PricingTier, VendorId, VendorStatus};

    fn vendor(name: &str, volume: u32, pass_total: u32, status: VendorStatus) -> VendorRecord {
        VendorRecord {
            id: VendorId(name.to_lowercase()),
            name: name.to_string(),
            status,
            volume,
            pass_rate: if volume == 0 {
                0.0
            } else {
                100.0 * f64::from(pass_total) / f64::from(volume)
            },
            pass_total,
            avg_time_in_process: 4.0,
            no_show_rate: 0.0,
            no_show_total: 0,
            integrity_flag_rate: 0.0,
            integrity_total: 1,
            placements: volume / 10,
            placements_total: volume / 5,
            regions: Default::default(),
            cost_per_hire: 0,
            cost_per_interview: 0,
            pricing_tier: PricingTier::Budget,
        }
    }

    #[test]
    fn pass_rate_is_weighted_by_volume() {
        let vendors = vec![
            vendor("V1", 100, 40, VendorStatus::Active),
            vendor("V2", 50, 10, VendorStatus::Active),
        ];
        assert_eq!(overall_pass_rate(&vendors), 33);
    }

    #[test]
    fn inactive_vendors_do_not_count_toward_pass_rate() {
        let vendors = vec![
            vendor("V1", 100, 40, VendorStatus::Active),
            vendor("V2", 100, 100, VendorStatus::Inactive),
        ];
        assert_eq!(overall_pass_rate(&vendors), 40);
    }

    #[test]
    fn empty_collections_summarize_to_zero() {
        assert_eq!(overall_pass_rate(&Vec::<VendorRecord>::new()), 0);
        assert_eq!(percentage(5, 0), 0);
        assert_eq!(VendorSummary::from_vendors(&[]), VendorSummary::default());
    }

    #[test]
    fn normalization_sums_to_hundred() {
        assert_eq!(percentage(1, 3) * 3, 99);
        assert_eq!(normalize_to_hundred(&[1, 1, 1]), vec![34, 33, 33]);
        assert_eq!(normalize_to_hundred(&[2, 1, 0, 0]), vec![67, 33, 0, 0]);
        assert_eq!(normalize_to_hundred(&[0, 0]), vec![0, 0]);
        assert_eq!(normalize_to_hundred(&[1, 0, 0, 0]), vec![100, 0, 0, 0]);
    }

    #[test]
    fn summary_totals_the_collection() {
        let vendors = vec![
            vendor("V1", 100, 40, VendorStatus::Active),
            vendor("V2", 50, 10, VendorStatus::Pending),
        ];
        let summary = VendorSummary::from_vendors(&vendors);
        assert_eq!(summary.vendor_count, 2);
        assert_eq!(summary.active_vendor_count, 1);
        assert_eq!(summary.total_volume, 100);
        assert_eq!(summary.overall_pass_rate, 40);
        assert_eq!(summary.total_placements, 15);
        assert_eq!(summary.total_placement_target, 30);
        assert_eq!(summary.placement_fill_rate, 50);
        assert_eq!(summary.average_time_in_process, 4.0);
        assert_eq!(summary.total_integrity_flags, 2);
    }
}
