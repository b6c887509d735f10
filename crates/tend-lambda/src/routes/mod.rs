pub mod attention_queue;
pub mod health;
pub mod morning_review;
pub mod review_queue;

use jiff::Timestamp;
use serde::Deserialize;

use tend_core::clock::ReviewClock;
use tend_core::models::client::ClientSnapshot;

use crate::config::ServiceConfig;
use crate::error::ApiError;

/// Body shared by every scoring route.
#[derive(Debug, Deserialize)]
pub struct CaseloadRequest {
    pub clients: Vec<ClientSnapshot>,
    /// Reference instant; the request time when absent.
    #[serde(default)]
    pub now: Option<Timestamp>,
    /// IANA zone for calendar days; the service default when absent.
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl CaseloadRequest {
    /// Check the request against `config` and pin the clock.
    pub fn into_parts(
        self,
        config: &ServiceConfig,
    ) -> Result<(Vec<ClientSnapshot>, ReviewClock), ApiError> {
        if self.clients.len() > config.max_caseload {
            return Err(ApiError::BadRequest(format!(
                "caseload of {} clients exceeds the limit of {}",
                self.clients.len(),
                config.max_caseload
            )));
        }

        let now = self.now.unwrap_or_else(Timestamp::now);
        let clock = match &self.time_zone {
            Some(name) => ReviewClock::in_zone(now, name)?,
            None => ReviewClock::at(now, config.time_zone.clone()),
        };
        Ok((self.clients, clock))
    }
}
