use crate::error::FetchError;
use crate::github::types::{Profile, Repository};
use crate::stats::languages::{aggregate_languages, LanguageDistribution};
use chrono::{DateTime, Utc};

pub type LookupResult = Result<(Profile, Vec<Repository>), FetchError>;

/// Everything the screen shows about the current lookup session.
///
/// Only `begin` and `complete` mutate it. A failed lookup clears the previous
/// profile so that stale data is never shown next to an error.
#[derive(Debug, Default)]
pub struct LookupState {
    pub profile: Option<Profile>,
    pub repositories: Vec<Repository>,
    pub languages: LanguageDistribution,
    pub loading: bool,
    pub error: Option<String>,
    pub username: String,
    pub fetched_at: Option<DateTime<Utc>>,
    request_id: u64,
}

impl LookupState {
    /// Starts a lookup and returns its request id, or `None` while another
    /// lookup is still in flight or the username is blank.
    pub fn begin(&mut self, username: &str) -> Option<u64> {
        let username = username.trim();
        if self.loading || username.is_empty() {
            return None;
        }
        self.request_id += 1;
        self.loading = true;
        self.error = None;
        self.username = username.to_string();
        Some(self.request_id)
    }

    /// Applies a finished lookup. Results for anything but the latest request
    /// are dropped; returns whether the result was applied.
    pub fn complete(&mut self, request_id: u64, result: LookupResult) -> bool {
        if request_id != self.request_id || !self.loading {
            tracing::debug!(request_id, current = self.request_id, "dropping stale lookup result");
            return false;
        }
        self.loading = false;

        match result {
            Ok((profile, repositories)) => {
                self.languages = aggregate_languages(&repositories);
                self.profile = Some(profile);
                self.repositories = repositories;
                self.error = None;
                self.fetched_at = Some(Utc::now());
            }
            Err(e) => {
                tracing::warn!(username = %self.username, error = %e, "lookup failed");
                self.profile = None;
                self.repositories.clear();
                self.languages = LanguageDistribution::default();
                self.error = Some(e.to_string());
                self.fetched_at = None;
            }
        }
        true
    }
}
