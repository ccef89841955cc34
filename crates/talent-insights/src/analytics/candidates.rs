use super::filter::{SearchTerm, Selection};
use super::sort::{SortColumn, SortKey};
use super::summary::{normalize_to_hundred, percentage};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    Staff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    FastTrack,
    InviteToNextRound,
    RequiresFurtherReview,
    DoNotPass,
}

impl Recommendation {
    /// Fast Track and Invite to Next Round count as a pass.
    pub const fn is_passing(self) -> bool {
        matches!(self, Self::FastTrack | Self::InviteToNextRound)
    }

    const fn index(self) -> usize {
        match self {
            Self::FastTrack => 0,
            Self::InviteToNextRound => 1,
            Self::RequiresFurtherReview => 2,
            Self::DoNotPass => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalSkillsScore {
    pub score: u8,
    pub algorithms: u8,
    pub system_design: u8,
    pub language_proficiency: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSolvingScore {
    pub score: u8,
    pub analytical_thinking: u8,
    pub creativity: u8,
    pub debugging: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationScore {
    pub score: u8,
    pub clarity: u8,
    pub collaboration: u8,
    pub technical_explanation: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeQualityScore {
    pub score: u8,
    pub readability: u8,
    pub testing: u8,
    pub best_practices: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentScores {
    pub technical_skills: TechnicalSkillsScore,
    pub problem_solving: ProblemSolvingScore,
    pub communication: CommunicationScore,
    pub code_quality: CodeQualityScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerformanceIndicators {
    pub integrity_flag: bool,
    pub completed_on_time: bool,
    pub used_hints: bool,
    pub camera_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benchmarks {
    pub role_percentile: u8,
    pub overall_percentile: u8,
    pub vendor_percentile: u8,
}

/// One assessed candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub vendor: String,
    pub seniority: Seniority,
    pub interview_date: NaiveDate,
    pub submission_date: NaiveDate,
    pub assessment: AssessmentScores,
    pub overall_score: u8,
    pub recommendation: Recommendation,
    /// Recorded classification. It is stored independently and may disagree with
    /// [`CandidateRecord::derived_above_bar`].
    pub above_bar: bool,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub indicators: PerformanceIndicators,
    pub benchmarks: Benchmarks,
}

/// Which above-bar value aggregates read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AboveBarBasis {
    #[default]
    Stored,
    Derived,
}

impl CandidateRecord {
    /// Passed (passing recommendation) and no integrity flag.
    pub fn derived_above_bar(&self) -> bool {
        self.recommendation.is_passing() && !self.indicators.integrity_flag
    }

    pub fn is_above_bar(&self, basis: AboveBarBasis) -> bool {
        match basis {
            AboveBarBasis::Stored => self.above_bar,
            AboveBarBasis::Derived => self.derived_above_bar(),
        }
    }
}

/// Candidates whose stored above-bar flag disagrees with the derived one.
pub fn above_bar_discrepancies(candidates: &[CandidateRecord]) -> Vec<&CandidateRecord> {
    candidates
        .iter()
        .filter(|candidate| candidate.above_bar != candidate.derived_above_bar())
        .collect()
}

pub fn above_bar_rate(candidates: &[CandidateRecord], basis: AboveBarBasis) -> u32 {
    let above = candidates
        .iter()
        .filter(|candidate| candidate.is_above_bar(basis))
        .count();
    percentage(above as u64, candidates.len() as u64)
}

/// Per-category percentages, listed in recommendation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RecommendationDistribution {
    pub fast_track: u32,
    pub invite_to_next_round: u32,
    pub requires_further_review: u32,
    pub do_not_pass: u32,
}

impl RecommendationDistribution {
    fn from_array(values: [u32; 4]) -> Self {
        Self {
            fast_track: values[0],
            invite_to_next_round: values[1],
            requires_further_review: values[2],
            do_not_pass: values[3],
        }
    }

    pub fn sum(&self) -> u32 {
        self.fast_track
            + self.invite_to_next_round
            + self.requires_further_review
            + self.do_not_pass
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecommendationCounts {
    counts: [u64; 4],
    total: u64,
}

impl RecommendationCounts {
    pub fn tally(candidates: &[CandidateRecord]) -> Self {
        let mut counts = [0u64; 4];
        for candidate in candidates {
            counts[candidate.recommendation.index()] += 1;
        }
        Self {
            counts,
            total: candidates.len() as u64,
        }
    }

    /// Each category rounds on its own, so the sum can land on 99 or 101.
    pub fn distribution(&self) -> RecommendationDistribution {
        RecommendationDistribution::from_array(
            self.counts.map(|count| percentage(count, self.total)),
        )
    }

    /// Largest-remainder apportionment summing to exactly 100 (0 when empty). Ties go to the
    /// category listed first.
    pub fn normalized_distribution(&self) -> RecommendationDistribution {
        let shares = normalize_to_hundred(&self.counts);
        RecommendationDistribution::from_array([shares[0], shares[1], shares[2], shares[3]])
    }
}

pub fn recommendation_distribution(candidates: &[CandidateRecord]) -> RecommendationDistribution {
    RecommendationCounts::tally(candidates).distribution()
}

/// Candidate headline numbers, computed on demand from the collection passed in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateSummary {
    pub total_candidates: usize,
    pub basis: AboveBarBasis,
    pub above_bar_count: usize,
    pub above_bar_rate: u32,
    pub pass_rate: u32,
    pub average_overall_score: f64,
    pub integrity_flag_count: usize,
    pub recommendation_distribution: RecommendationDistribution,
    pub above_bar_discrepancies: usize,
}

impl CandidateSummary {
    pub fn from_candidates(candidates: &[CandidateRecord], basis: AboveBarBasis) -> Self {
        let total = candidates.len();
        let above_bar_count = candidates
            .iter()
            .filter(|candidate| candidate.is_above_bar(basis))
            .count();
        let passing = candidates
            .iter()
            .filter(|candidate| candidate.recommendation.is_passing())
            .count();
        let integrity_flag_count = candidates
            .iter()
            .filter(|candidate| candidate.indicators.integrity_flag)
            .count();
        let average_overall_score = if total == 0 {
            0.0
        } else {
            let sum: u32 = candidates
                .iter()
                .map(|candidate| u32::from(candidate.overall_score))
                .sum();
            (f64::from(sum) / total as f64 * 10.0).round() / 10.0
        };

        Self {
            total_candidates: total,
            basis,
            above_bar_count,
            above_bar_rate: percentage(above_bar_count as u64, total as u64),
            pass_rate: percentage(passing as u64, total as u64),
            average_overall_score,
            integrity_flag_count,
            recommendation_distribution: recommendation_distribution(candidates),
            above_bar_discrepancies: above_bar_discrepancies(candidates).len(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateQuery {
    pub search: String,
    pub vendor: Selection,
    pub role: Selection,
    pub recommendation: Option<Recommendation>,
}

pub fn filter_candidates(
    candidates: &[CandidateRecord],
    query: &CandidateQuery,
) -> Vec<CandidateRecord> {
    let search = SearchTerm::new(&query.search);
    candidates
        .iter()
        .filter(|candidate| query.vendor.matches(&candidate.vendor))
        .filter(|candidate| query.role.matches(&candidate.role))
        .filter(|candidate| {
            query
                .recommendation
                .map_or(true, |wanted| candidate.recommendation == wanted)
        })
        .filter(|candidate| search.matches(&candidate.name))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateColumn {
    Name,
    Role,
    Vendor,
    OverallScore,
    InterviewDate,
    SubmissionDate,
}

impl SortColumn<CandidateRecord> for CandidateColumn {
    fn key<'r>(&self, row: &'r CandidateRecord) -> SortKey<'r> {
        match self {
            Self::Name => SortKey::Text(&row.name),
            Self::Role => SortKey::Text(&row.role),
            Self::Vendor => SortKey::Text(&row.vendor),
            Self::OverallScore => SortKey::Number(f64::from(row.overall_score)),
            Self::InterviewDate => SortKey::Date(row.interview_date),
            Self::SubmissionDate => SortKey::Date(row.submission_date),
        }
    }
}
