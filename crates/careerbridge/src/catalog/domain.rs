use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for an opportunity, unique within a catalog snapshot.
///
/// Lower ids are treated as more recently posted; the source data carries only
/// relative display strings ("2 days ago"), so the id doubles as the recency
/// key until a real timestamp exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpportunityId(pub u32);

impl fmt::Display for OpportunityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Internship,
    Contract,
}

impl JobType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::FullTime,
            Self::PartTime,
            Self::Internship,
            Self::Contract,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Internship => "Internship",
            Self::Contract => "Contract",
        }
    }
}

/// A single listing in the opportunity catalog.
///
/// Only `id`, `title`, and `company` are guaranteed. Everything else may be
/// absent on individual records; a missing faceted attribute means the record
/// does not match any constraint on that facet, and a missing salary sorts as
/// the empty string. Salary and posting date are display strings, not values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    pub id: OpportunityId,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
}

impl OpportunityRecord {
    /// Case-insensitive substring match over title, company, description, and
    /// tags. `needle` must already be lower-cased and non-empty.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.company.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    pub(crate) fn salary_key(&self) -> &str {
        self.salary.as_deref().unwrap_or("")
    }
}

/// Ordering applied to a filtered result set.
///
/// Salary sorts compare the display strings ordinally, which misorders values
/// like "$20" vs "$100"; that quirk is preserved deliberately for parity with
/// the shipped catalog behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Recent,
    SalaryHigh,
    SalaryLow,
}

impl SortKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::SalaryHigh => "salary-high",
            Self::SalaryLow => "salary-low",
        }
    }
}

impl FromStr for SortKey {
    type Err = SearchError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "recent" => Ok(Self::Recent),
            "salary-high" => Ok(Self::SalaryHigh),
            "salary-low" => Ok(Self::SalaryLow),
            other => Err(SearchError::InvalidSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the search core. An unknown sort key is a caller bug,
/// not bad catalog data, so it fails loudly instead of degrading.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("unknown sort key '{0}', expected one of recent, salary-high, salary-low")]
    InvalidSortKey(String),
}
