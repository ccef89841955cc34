use super::domain::PricingTier;
use super::filter::{SearchTerm, Selection};
use super::sort::{SortColumn, SortKey};
use super::views::RateCardRowView;
use serde::{Deserialize, Serialize};

/// Contracted vendor pricing for a role category in one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCardRecord {
    pub id: String,
    pub vendor: String,
    pub role_category: String,
    pub region: String,
    pub currency: String,
    pub tier: PricingTier,
    pub hourly_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_discount: Option<VolumeDiscount>,
}

/// Percentage off the hourly rate once `threshold` hires are reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeDiscount {
    pub threshold: u32,
    pub percent: f64,
}

impl RateCardRecord {
    pub fn effective_rate(&self, volume: u32) -> f64 {
        match self.volume_discount {
            Some(discount) if volume >= discount.threshold => {
                let rate = self.hourly_rate * (1.0 - discount.percent / 100.0);
                (rate * 100.0).round() / 100.0
            }
            _ => self.hourly_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketMaturity {
    Emerging,
    Developing,
    Mature,
}

/// Labour-market facts for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicRecord {
    pub region: String,
    pub country: String,
    pub city: String,
    pub cost_of_living_index: f64,
    pub timezone: String,
    pub talent_availability: Level,
    pub market_maturity: MarketMaturity,
    pub competition_level: Level,
    pub average_salary: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateCardQuery {
    pub vendor: Selection,
    pub region: Selection,
    pub tier: Option<PricingTier>,
}

pub fn filter_rate_cards(cards: &[RateCardRecord], query: &RateCardQuery) -> Vec<RateCardRecord> {
    cards
        .iter()
        .filter(|card| query.vendor.matches(&card.vendor))
        .filter(|card| query.region.matches(&card.region))
        .filter(|card| query.tier.map_or(true, |tier| card.tier == tier))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeographyQuery {
    pub search: String,
    pub region: Selection,
}

/// Region equality, then search over city and country.
pub fn filter_geography(
    records: &[GeographicRecord],
    query: &GeographyQuery,
) -> Vec<GeographicRecord> {
    let search = SearchTerm::new(&query.search);
    records
        .iter()
        .filter(|record| query.region.matches(&record.region))
        .filter(|record| search.matches(&record.city) || search.matches(&record.country))
        .cloned()
        .collect()
}

fn rounded_mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (total / count as f64 * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateCardSummary {
    pub card_count: usize,
    pub average_hourly_rate: f64,
    pub average_effective_rate: f64,
    pub discounted_card_count: usize,
    pub lowest_hourly_rate: Option<f64>,
    pub highest_hourly_rate: Option<f64>,
}

impl RateCardSummary {
    pub fn from_rows(rows: &[RateCardRowView]) -> Self {
        let rates = rows.iter().map(|row| row.card.hourly_rate);
        Self {
            card_count: rows.len(),
            average_hourly_rate: rounded_mean(rates.clone().sum(), rows.len()),
            average_effective_rate: rounded_mean(
                rows.iter().map(|row| row.effective_rate).sum(),
                rows.len(),
            ),
            discounted_card_count: rows.iter().filter(|row| row.discount_applied).count(),
            lowest_hourly_rate: rates.clone().min_by(f64::total_cmp),
            highest_hourly_rate: rates.max_by(f64::total_cmp),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeographySummary {
    pub city_count: usize,
    pub average_cost_of_living_index: f64,
    pub average_salary: f64,
}

impl GeographySummary {
    pub fn from_records(records: &[GeographicRecord]) -> Self {
        Self {
            city_count: records.len(),
            average_cost_of_living_index: rounded_mean(
                records.iter().map(|record| record.cost_of_living_index).sum(),
                records.len(),
            ),
            average_salary: rounded_mean(
                records
                    .iter()
                    .map(|record| f64::from(record.average_salary))
                    .sum(),
                records.len(),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateCardColumn {
    Vendor,
    RoleCategory,
    Region,
    HourlyRate,
    EffectiveRate,
}

impl SortColumn<RateCardRowView> for RateCardColumn {
    fn key<'r>(&self, row: &'r RateCardRowView) -> SortKey<'r> {
        match self {
            Self::Vendor => SortKey::Text(&row.card.vendor),
            Self::RoleCategory => SortKey::Text(&row.card.role_category),
            Self::Region => SortKey::Text(&row.card.region),
            Self::HourlyRate => SortKey::Number(row.card.hourly_rate),
            Self::EffectiveRate => SortKey::Number(row.effective_rate),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeographyColumn {
    Region,
    City,
    CostOfLiving,
    AverageSalary,
}

impl SortColumn<GeographicRecord> for GeographyColumn {
    fn key<'r>(&self, row: &'r GeographicRecord) -> SortKey<'r> {
        match self {
            Self::Region => SortKey::Text(&row.region),
            Self::City => SortKey::Text(&row.city),
            Self::CostOfLiving => SortKey::Number(row.cost_of_living_index),
            Self::AverageSalary => SortKey::Number(f64::from(row.average_salary)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::sort::{sort_records, SortDirection, SortState};

    fn card(vendor: &str, region: &str, tier: PricingTier, rate: f64) -> RateCardRecord {
        RateCardRecord {
            id: format!("{vendor}-{region}"),
            vendor: vendor.to_string(),
            role_category: "Engineering".to_string(),
            region: region.to_string(),
            currency: "USD".to_string(),
            tier,
            hourly_rate: rate,
            volume_discount: Some(VolumeDiscount {
                threshold: 10,
                percent: 15.0,
            }),
        }
    }

    fn city(region: &str, country: &str, city: &str, salary: u32) -> GeographicRecord {
        GeographicRecord {
            region: region.to_string(),
            country: country.to_string(),
            city: city.to_string(),
            cost_of_living_index: 70.0,
            timezone: "UTC".to_string(),
            talent_availability: Level::High,
            market_maturity: MarketMaturity::Mature,
            competition_level: Level::Medium,
            average_salary: salary,
        }
    }

    #[test]
    fn discount_applies_from_threshold() {
        let card = card("Acme Staffing", "North America", PricingTier::Standard, 80.0);
        assert_eq!(card.effective_rate(9), 80.0);
        assert_eq!(card.effective_rate(10), 68.0);

        let flat = RateCardRecord {
            volume_discount: None,
            ..card
        };
        assert_eq!(flat.effective_rate(500), 80.0);
    }

    #[test]
    fn rate_cards_filter_by_vendor_region_and_tier() {
        let cards = vec![
            card("Acme Staffing", "North America", PricingTier::Standard, 80.0),
            card("Acme Staffing", "Europe", PricingTier::Premium, 95.0),
            card("BrightHire", "Europe", PricingTier::Budget, 55.0),
        ];
        let query = RateCardQuery {
            region: Selection::only("Europe"),
            ..Default::default()
        };
        assert_eq!(filter_rate_cards(&cards, &query).len(), 2);

        let query = RateCardQuery {
            vendor: Selection::only("Acme Staffing"),
            tier: Some(PricingTier::Premium),
            ..Default::default()
        };
        let filtered = filter_rate_cards(&cards, &query);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].region, "Europe");
    }

    #[test]
    fn summaries_handle_empty_and_populated_collections() {
        assert_eq!(RateCardSummary::from_rows(&[]), RateCardSummary::default());
        assert_eq!(
            GeographySummary::from_records(&[]),
            GeographySummary::default()
        );

        let cards = vec![
            card("Acme Staffing", "Europe", PricingTier::Premium, 95.0),
            card("BrightHire", "Europe", PricingTier::Budget, 55.0),
        ];
        let rows: Vec<_> = cards
            .iter()
            .map(|card| RateCardRowView::at_volume(card, 10))
            .collect();
        let summary = RateCardSummary::from_rows(&rows);
        assert_eq!(summary.average_hourly_rate, 75.0);
        assert_eq!(summary.average_effective_rate, 63.75);
        assert_eq!(summary.discounted_card_count, 2);
        assert_eq!(summary.lowest_hourly_rate, Some(55.0));
        assert_eq!(summary.highest_hourly_rate, Some(95.0));
    }

    #[test]
    fn geography_search_covers_city_and_country() {
        let records = vec![
            city("Europe", "Poland", "Krakow", 52000),
            city("Europe", "Portugal", "Lisbon", 48000),
            city("Asia Pacific", "India", "Bengaluru", 30000),
        ];
        let query = GeographyQuery {
            search: "po".to_string(),
            region: Selection::All,
        };
        assert_eq!(filter_geography(&records, &query).len(), 2);

        let query = GeographyQuery {
            search: String::new(),
            region: Selection::only("Asia Pacific"),
        };
        assert_eq!(filter_geography(&records, &query)[0].city, "Bengaluru");

        let sorted = sort_records(
            &records,
            SortState::Sorted {
                column: GeographyColumn::AverageSalary,
                direction: SortDirection::Descending,
            },
        );
        assert_eq!(sorted[0].city, "Krakow");
    }
}
