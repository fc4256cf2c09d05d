//! Payloads of the judge API.

use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format used by the backend
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobState {
    Queueing,
    Running,
    Finished,
    Canceled,
}

impl JobState {
    /// No further updates will arrive for the job.
    pub fn is_final(self) -> bool {
        matches!(self, JobState::Finished | JobState::Canceled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobResult {
    Waiting,
    Running,
    Accepted,
    #[serde(rename = "Compilation Error")]
    CompilationError,
    #[serde(rename = "Compilation Success")]
    CompilationSuccess,
    #[serde(rename = "Wrong Answer")]
    WrongAnswer,
    #[serde(rename = "Runtime Error")]
    RuntimeError,
    #[serde(rename = "Time Limit Exceeded")]
    TimeLimitExceeded,
    #[serde(rename = "Memory Limit Exceeded")]
    MemoryLimitExceeded,
    #[serde(rename = "System Error")]
    SystemError,
    #[serde(rename = "SPJ Error")]
    SpjError,
    Skipped,
}

impl JobResult {
    pub fn label(self) -> &'static str {
        match self {
            JobResult::Waiting => "Waiting",
            JobResult::Running => "Running",
            JobResult::Accepted => "Accepted",
            JobResult::CompilationError => "Compilation Error",
            JobResult::CompilationSuccess => "Compilation Success",
            JobResult::WrongAnswer => "Wrong Answer",
            JobResult::RuntimeError => "Runtime Error",
            JobResult::TimeLimitExceeded => "Time Limit Exceeded",
            JobResult::MemoryLimitExceeded => "Memory Limit Exceeded",
            JobResult::SystemError => "System Error",
            JobResult::SpjError => "SPJ Error",
            JobResult::Skipped => "Skipped",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub source_code: String,
    pub language: String,
    pub user_id: i64,
    pub contest_id: i64,
    pub problem_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: i64,
    pub result: JobResult,
    /// microseconds
    pub time: i64,
    /// bytes
    pub memory: i64,
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub created_time: String,
    pub updated_time: String,
    pub submission: Submission,
    pub state: JobState,
    pub result: JobResult,
    pub score: f64,
    pub cases: Vec<Case>,
}

impl Job {
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.created_time, TIME_FORMAT).ok()
    }

    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.updated_time, TIME_FORMAT).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemType {
    Standard,
    Strict,
    Spj,
    DynamicRanking,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: i64,
    pub name: String,
    pub problem_type: ProblemType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub id: i64,
    pub name: String,
    pub from: String,
    pub to: String,
    pub problem_ids: Vec<i64>,
    pub user_ids: Vec<i64>,
    pub submission_limit: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankItem {
    pub user: User,
    pub rank: u64,
    pub scores: Vec<f64>,
}

/// Filter of `GET /jobs`, absent fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contest_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<JobState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JobResult>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    #[default]
    Latest,
    Highest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    SubmissionTime,
    SubmissionCount,
    UserId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankListQuery {
    pub scoring_rule: ScoringRule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tie_breaker: Option<TieBreaker>,
}

/// `FromStr`/`Display` through the serde spelling, so the enums can live
/// in query strings.
macro_rules! serde_str {
    ($($ty:ty),+) => {$(
        impl FromStr for $ty {
            type Err = serde_json::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                serde_json::from_value(serde_json::Value::String(s.to_owned()))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match serde_json::to_value(self) {
                    Ok(serde_json::Value::String(s)) => f.write_str(&s),
                    _ => Err(fmt::Error),
                }
            }
        }
    )+};
}

serde_str!(JobState, JobResult, ScoringRule, TieBreaker);

/// Body of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u8,
    pub reason: String,
    pub message: String,
}

/// Append `query` to `path` as a query string, leaving `path` alone when
/// nothing is set.
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(query) if !query.is_empty() => format!("{path}?{query}"),
        Ok(_) => path.to_owned(),
        Err(err) => {
            tracing::warn!(%err, path, "dropping unserializable query");
            path.to_owned()
        }
    }
}
