use crate::analytics::candidates::{
    AssessmentScores, Benchmarks, CandidateId, CandidateRecord, CodeQualityScore,
    CommunicationScore, PerformanceIndicators, ProblemSolvingScore, Recommendation, Seniority,
    TechnicalSkillsScore,
};
use crate::analytics::domain::{
    JobFamilyId, JobFamilyRecord, PricingTier, RoleRecord, VendorId, VendorRecord, VendorStatus,
};
use crate::analytics::market::{
    GeographicRecord, Level, MarketMaturity, RateCardRecord, VolumeDiscount,
};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::sync::Arc;

struct VendorSeed {
    id: &'static str,
    name: &'static str,
    status: VendorStatus,
    volume: u32,
    pass_rate: f64,
    pass_total: u32,
    avg_time_in_process: f64,
    no_show: (f64, u32),
    integrity: (f64, u32),
    placements: (u32, u32),
    regions: &'static [&'static str],
    costs: (u32, u32),
    pricing_tier: PricingTier,
}

impl VendorSeed {
    fn build(self) -> VendorRecord {
        VendorRecord {
            id: VendorId(self.id.to_string()),
            name: self.name.to_string(),
            status: self.status,
            volume: self.volume,
            pass_rate: self.pass_rate,
            pass_total: self.pass_total,
            avg_time_in_process: self.avg_time_in_process,
            no_show_rate: self.no_show.0,
            no_show_total: self.no_show.1,
            integrity_flag_rate: self.integrity.0,
            integrity_total: self.integrity.1,
            placements: self.placements.0,
            placements_total: self.placements.1,
            regions: self
                .regions
                .iter()
                .map(|region| region.to_string())
                .collect::<BTreeSet<_>>(),
            cost_per_hire: self.costs.0,
            cost_per_interview: self.costs.1,
            pricing_tier: self.pricing_tier,
        }
    }
}

/// Thirty-day reference figures for the seeded vendors.
pub(crate) fn vendors() -> Vec<VendorRecord> {
    [
        VendorSeed {
            id: "vendor-001",
            name: "TechTalent Solutions",
            status: VendorStatus::Active,
            volume: 120,
            pass_rate: 42.5,
            pass_total: 51,
            avg_time_in_process: 4.2,
            no_show: (6.7, 8),
            integrity: (2.5, 3),
            placements: (12, 15),
            regions: &["Europe", "North America"],
            costs: (4200, 180),
            pricing_tier: PricingTier::Premium,
        },
        VendorSeed {
            id: "vendor-002",
            name: "Global Recruiters Inc",
            status: VendorStatus::Active,
            volume: 95,
            pass_rate: 36.8,
            pass_total: 35,
            avg_time_in_process: 5.1,
            no_show: (8.4, 8),
            integrity: (3.2, 3),
            placements: (8, 12),
            regions: &["Asia Pacific", "North America"],
            costs: (3600, 150),
            pricing_tier: PricingTier::Standard,
        },
        VendorSeed {
            id: "vendor-003",
            name: "CodeHire Partners",
            status: VendorStatus::Active,
            volume: 80,
            pass_rate: 47.5,
            pass_total: 38,
            avg_time_in_process: 3.8,
            no_show: (5.0, 4),
            integrity: (1.3, 1),
            placements: (9, 10),
            regions: &["Europe"],
            costs: (4800, 210),
            pricing_tier: PricingTier::Premium,
        },
        VendorSeed {
            id: "vendor-004",
            name: "Budget Staffing Co",
            status: VendorStatus::Inactive,
            volume: 60,
            pass_rate: 28.3,
            pass_total: 17,
            avg_time_in_process: 6.5,
            no_show: (11.7, 7),
            integrity: (5.0, 3),
            placements: (3, 8),
            regions: &["Asia Pacific", "Latin America"],
            costs: (2100, 90),
            pricing_tier: PricingTier::Budget,
        },
        VendorSeed {
            id: "vendor-005",
            name: "NextGen Talent",
            status: VendorStatus::Pending,
            volume: 40,
            pass_rate: 40.0,
            pass_total: 16,
            avg_time_in_process: 4.7,
            no_show: (7.5, 3),
            integrity: (2.5, 1),
            placements: (0, 5),
            regions: &["Latin America"],
            costs: (2900, 120),
            pricing_tier: PricingTier::Standard,
        },
    ]
    .into_iter()
    .map(VendorSeed::build)
    .collect()
}

pub(crate) fn job_families() -> Vec<JobFamilyRecord> {
    [
        (
            "family-eng",
            "Software Engineering",
            "Backend, frontend, and full-stack product engineering roles.",
        ),
        (
            "family-data",
            "Data & Analytics",
            "Data science, analytics engineering, and data platform roles.",
        ),
        (
            "family-infra",
            "Infrastructure",
            "Platform, reliability, and DevOps roles.",
        ),
    ]
    .into_iter()
    .map(|(id, name, description)| JobFamilyRecord {
        id: JobFamilyId(id.to_string()),
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Role-to-vendor assignments by vendor id. Unknown ids are skipped when binding.
const ROLE_ASSIGNMENTS: &[(&str, &str, &str, &str, &[&str])] = &[
    (
        "role-001",
        "Senior Backend Engineer",
        "New York",
        "family-eng",
        &["vendor-001", "vendor-002", "vendor-003"],
    ),
    (
        "role-002",
        "Frontend Engineer",
        "London",
        "family-eng",
        &["vendor-001", "vendor-004"],
    ),
    (
        "role-003",
        "Data Scientist",
        "San Francisco",
        "family-data",
        &["vendor-003", "vendor-005"],
    ),
    (
        "role-004",
        "Data Engineer",
        "Remote",
        "family-data",
        &["vendor-002", "vendor-003"],
    ),
    (
        "role-005",
        "DevOps Engineer",
        "Berlin",
        "family-infra",
        &["vendor-001", "vendor-005"],
    ),
];

/// Bind the role table to `vendors` by id.
pub(crate) fn roles(vendors: &[Arc<VendorRecord>]) -> Vec<RoleRecord> {
    ROLE_ASSIGNMENTS
        .iter()
        .map(|(id, name, location, family, vendor_ids)| RoleRecord {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            job_family_id: JobFamilyId(family.to_string()),
            vendors: vendor_ids
                .iter()
                .filter_map(|vendor_id| {
                    vendors
                        .iter()
                        .find(|vendor| vendor.id.0 == *vendor_id)
                        .cloned()
                })
                .collect(),
        })
        .collect()
}

fn scores(
    technical: [u8; 4],
    problem: [u8; 4],
    communication: [u8; 4],
    code: [u8; 4],
) -> AssessmentScores {
    AssessmentScores {
        technical_skills: TechnicalSkillsScore {
            score: technical[0],
            algorithms: technical[1],
            system_design: technical[2],
            language_proficiency: technical[3],
        },
        problem_solving: ProblemSolvingScore {
            score: problem[0],
            analytical_thinking: problem[1],
            creativity: problem[2],
            debugging: problem[3],
        },
        communication: CommunicationScore {
            score: communication[0],
            clarity: communication[1],
            collaboration: communication[2],
            technical_explanation: communication[3],
        },
        code_quality: CodeQualityScore {
            score: code[0],
            readability: code[1],
            testing: code[2],
            best_practices: code[3],
        },
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(crate) fn candidates() -> Vec<CandidateRecord> {
    vec![
        CandidateRecord {
            id: CandidateId("cand-001".to_string()),
            name: "Sarah Chen".to_string(),
            email: "sarah.chen@example.com".to_string(),
            role: "Senior Backend Engineer".to_string(),
            vendor: "TechTalent Solutions".to_string(),
            seniority: Seniority::Senior,
            interview_date: date(2024, 1, 15),
            submission_date: date(2024, 1, 10),
            assessment: scores(
                [92, 94, 90, 92],
                [88, 90, 85, 89],
                [85, 86, 88, 81],
                [90, 92, 87, 91],
            ),
            overall_score: 89,
            recommendation: Recommendation::FastTrack,
            above_bar: true,
            strengths: labels(&["System design", "Algorithms"]),
            improvement_areas: labels(&["Documentation"]),
            indicators: PerformanceIndicators {
                integrity_flag: false,
                completed_on_time: true,
                used_hints: false,
                camera_enabled: true,
            },
            benchmarks: Benchmarks {
                role_percentile: 94,
                overall_percentile: 91,
                vendor_percentile: 96,
            },
        },
        CandidateRecord {
            id: CandidateId("cand-002".to_string()),
            name: "Marcus Johnson".to_string(),
            email: "marcus.johnson@example.com".to_string(),
            role: "Frontend Engineer".to_string(),
            vendor: "Budget Staffing Co".to_string(),
            seniority: Seniority::Mid,
            interview_date: date(2024, 1, 18),
            submission_date: date(2024, 1, 12),
            assessment: scores(
                [74, 70, 72, 80],
                [76, 78, 74, 76],
                [82, 84, 80, 82],
                [70, 72, 66, 72],
            ),
            overall_score: 75,
            recommendation: Recommendation::InviteToNextRound,
            above_bar: false,
            strengths: labels(&["Communication", "UI craftsmanship"]),
            improvement_areas: labels(&["Testing", "Algorithms"]),
            indicators: PerformanceIndicators {
                integrity_flag: false,
                completed_on_time: true,
                used_hints: true,
                camera_enabled: true,
            },
            benchmarks: Benchmarks {
                role_percentile: 68,
                overall_percentile: 62,
                vendor_percentile: 80,
            },
        },
        CandidateRecord {
            id: CandidateId("cand-003".to_string()),
            name: "Priya Patel".to_string(),
            email: "priya.patel@example.com".to_string(),
            role: "Data Scientist".to_string(),
            vendor: "CodeHire Partners".to_string(),
            seniority: Seniority::Staff,
            interview_date: date(2024, 1, 20),
            submission_date: date(2024, 1, 14),
            assessment: scores(
                [86, 84, 88, 86],
                [92, 94, 90, 92],
                [80, 78, 82, 80],
                [84, 86, 80, 86],
            ),
            overall_score: 86,
            recommendation: Recommendation::InviteToNextRound,
            above_bar: true,
            strengths: labels(&["Statistical modelling", "Problem framing"]),
            improvement_areas: labels(&["Stakeholder updates"]),
            indicators: PerformanceIndicators {
                integrity_flag: true,
                completed_on_time: true,
                used_hints: false,
                camera_enabled: false,
            },
            benchmarks: Benchmarks {
                role_percentile: 88,
                overall_percentile: 85,
                vendor_percentile: 90,
            },
        },
        CandidateRecord {
            id: CandidateId("cand-004".to_string()),
            name: "Diego Alvarez".to_string(),
            email: "diego.alvarez@example.com".to_string(),
            role: "Data Engineer".to_string(),
            vendor: "Global Recruiters Inc".to_string(),
            seniority: Seniority::Junior,
            interview_date: date(2024, 1, 22),
            submission_date: date(2024, 1, 16),
            assessment: scores(
                [58, 55, 52, 66],
                [60, 62, 58, 60],
                [70, 72, 68, 70],
                [56, 58, 50, 60],
            ),
            overall_score: 61,
            recommendation: Recommendation::RequiresFurtherReview,
            above_bar: false,
            strengths: labels(&["SQL"]),
            improvement_areas: labels(&["Pipeline design", "Testing"]),
            indicators: PerformanceIndicators {
                integrity_flag: false,
                completed_on_time: false,
                used_hints: true,
                camera_enabled: true,
            },
            benchmarks: Benchmarks {
                role_percentile: 41,
                overall_percentile: 38,
                vendor_percentile: 52,
            },
        },
        CandidateRecord {
            id: CandidateId("cand-005".to_string()),
            name: "Emma Larsen".to_string(),
            email: "emma.larsen@example.com".to_string(),
            role: "DevOps Engineer".to_string(),
            vendor: "NextGen Talent".to_string(),
            seniority: Seniority::Mid,
            interview_date: date(2024, 1, 25),
            submission_date: date(2024, 1, 19),
            assessment: scores(
                [45, 40, 48, 47],
                [50, 52, 46, 52],
                [62, 60, 64, 62],
                [44, 46, 40, 46],
            ),
            overall_score: 49,
            recommendation: Recommendation::DoNotPass,
            above_bar: false,
            strengths: labels(&["Scripting"]),
            improvement_areas: labels(&["Networking", "Incident response"]),
            indicators: PerformanceIndicators {
                integrity_flag: false,
                completed_on_time: true,
                used_hints: true,
                camera_enabled: true,
            },
            benchmarks: Benchmarks {
                role_percentile: 22,
                overall_percentile: 19,
                vendor_percentile: 35,
            },
        },
    ]
}

pub(crate) fn rate_cards() -> Vec<RateCardRecord> {
    [
        (
            "rate-001",
            "TechTalent Solutions",
            "Engineering",
            "North America",
            "USD",
            PricingTier::Premium,
            95.0,
            Some((10, 10.0)),
        ),
        (
            "rate-002",
            "TechTalent Solutions",
            "Engineering",
            "Europe",
            "EUR",
            PricingTier::Premium,
            88.0,
            Some((10, 8.0)),
        ),
        (
            "rate-003",
            "Global Recruiters Inc",
            "Data",
            "Asia Pacific",
            "USD",
            PricingTier::Standard,
            62.0,
            Some((20, 12.5)),
        ),
        (
            "rate-004",
            "CodeHire Partners",
            "Engineering",
            "Europe",
            "EUR",
            PricingTier::Premium,
            105.0,
            None,
        ),
        (
            "rate-005",
            "Budget Staffing Co",
            "Engineering",
            "Latin America",
            "USD",
            PricingTier::Budget,
            38.0,
            Some((25, 15.0)),
        ),
        (
            "rate-006",
            "NextGen Talent",
            "Infrastructure",
            "Latin America",
            "USD",
            PricingTier::Standard,
            55.0,
            None,
        ),
    ]
    .into_iter()
    .map(
        |(id, vendor, category, region, currency, tier, hourly_rate, discount)| RateCardRecord {
            id: id.to_string(),
            vendor: vendor.to_string(),
            role_category: category.to_string(),
            region: region.to_string(),
            currency: currency.to_string(),
            tier,
            hourly_rate,
            volume_discount: discount
                .map(|(threshold, percent)| VolumeDiscount { threshold, percent }),
        },
    )
    .collect()
}

pub(crate) fn geography() -> Vec<GeographicRecord> {
    [
        (
            "North America",
            "United States",
            "New York",
            100.0,
            "America/New_York",
            Level::High,
            MarketMaturity::Mature,
            Level::High,
            145_000,
        ),
        (
            "North America",
            "Canada",
            "Toronto",
            78.5,
            "America/Toronto",
            Level::High,
            MarketMaturity::Mature,
            Level::Medium,
            105_000,
        ),
        (
            "Europe",
            "Germany",
            "Berlin",
            68.2,
            "Europe/Berlin",
            Level::Medium,
            MarketMaturity::Mature,
            Level::Medium,
            78_000,
        ),
        (
            "Europe",
            "Poland",
            "Krakow",
            44.7,
            "Europe/Warsaw",
            Level::High,
            MarketMaturity::Developing,
            Level::Low,
            52_000,
        ),
        (
            "Asia Pacific",
            "India",
            "Bengaluru",
            25.1,
            "Asia/Kolkata",
            Level::High,
            MarketMaturity::Mature,
            Level::High,
            32_000,
        ),
        (
            "Latin America",
            "Brazil",
            "Sao Paulo",
            38.9,
            "America/Sao_Paulo",
            Level::Medium,
            MarketMaturity::Emerging,
            Level::Low,
            41_000,
        ),
    ]
    .into_iter()
    .map(
        |(
            region,
            country,
            city,
            cost_of_living_index,
            timezone,
            availability,
            maturity,
            competition,
            salary,
        )| GeographicRecord {
            region: region.to_string(),
            country: country.to_string(),
            city: city.to_string(),
            cost_of_living_index,
            timezone: timezone.to_string(),
            talent_availability: availability,
            market_maturity: maturity,
            competition_level: competition,
            average_salary: salary,
        },
    )
    .collect()
}
