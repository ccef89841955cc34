use crate::analytics::domain::{PricingTier, VendorId, VendorRecord, VendorStatus};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::warn;

/// Parsed rows in file order. Rows with an unrecognized status or tier are skipped.
pub(crate) fn parse_vendors<R: Read>(reader: R) -> Result<Vec<VendorRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut vendors = Vec::new();

    for (index, record) in csv_reader.deserialize::<VendorRow>().enumerate() {
        let row = record?;
        match row.into_record() {
            Ok(vendor) => vendors.push(vendor),
            Err(reason) => warn!(row = index + 1, reason, "skipping vendor row"),
        }
    }

    Ok(vendors)
}

#[derive(Debug, Deserialize)]
struct VendorRow {
    #[serde(rename = "Vendor ID")]
    id: String,
    #[serde(rename = "Vendor Name")]
    name: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Volume", default)]
    volume: Option<u32>,
    #[serde(rename = "Pass Rate", default)]
    pass_rate: Option<f64>,
    #[serde(rename = "Pass Total", default)]
    pass_total: Option<u32>,
    #[serde(rename = "Avg Time In Process", default)]
    avg_time_in_process: Option<f64>,
    #[serde(rename = "No Show Rate", default)]
    no_show_rate: Option<f64>,
    #[serde(rename = "No Show Total", default)]
    no_show_total: Option<u32>,
    #[serde(rename = "Integrity Flag Rate", default)]
    integrity_flag_rate: Option<f64>,
    #[serde(rename = "Integrity Total", default)]
    integrity_total: Option<u32>,
    #[serde(rename = "Placements", default)]
    placements: Option<u32>,
    #[serde(rename = "Placements Target", default)]
    placements_total: Option<u32>,
    #[serde(rename = "Regions", default, deserialize_with = "empty_string_as_none")]
    regions: Option<String>,
    #[serde(rename = "Cost Per Hire", default)]
    cost_per_hire: Option<u32>,
    #[serde(rename = "Cost Per Interview", default)]
    cost_per_interview: Option<u32>,
    #[serde(rename = "Pricing Tier")]
    pricing_tier: String,
}

impl VendorRow {
    fn into_record(self) -> Result<VendorRecord, &'static str> {
        let status = VendorStatus::from_label(&self.status).ok_or("unknown status")?;
        let pricing_tier =
            PricingTier::from_label(&self.pricing_tier).ok_or("unknown pricing tier")?;

        Ok(VendorRecord {
            id: VendorId(self.id),
            name: self.name,
            status,
            volume: self.volume.unwrap_or_default(),
            pass_rate: self.pass_rate.unwrap_or_default(),
            pass_total: self.pass_total.unwrap_or_default(),
            avg_time_in_process: self.avg_time_in_process.unwrap_or_default(),
            no_show_rate: self.no_show_rate.unwrap_or_default(),
            no_show_total: self.no_show_total.unwrap_or_default(),
            integrity_flag_rate: self.integrity_flag_rate.unwrap_or_default(),
            integrity_total: self.integrity_total.unwrap_or_default(),
            placements: self.placements.unwrap_or_default(),
            placements_total: self.placements_total.unwrap_or_default(),
            regions: self
                .regions
                .as_deref()
                .map(split_regions)
                .unwrap_or_default(),
            cost_per_hire: self.cost_per_hire.unwrap_or_default(),
            cost_per_interview: self.cost_per_interview.unwrap_or_default(),
            pricing_tier,
        })
    }
}

fn split_regions(value: &str) -> std::collections::BTreeSet<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|region| !region.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
