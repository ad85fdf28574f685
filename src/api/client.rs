use crate::config::Config;
use crate::error::AppError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::thread;

use super::endpoints::*;
use super::models::*;
use super::{ChampionQuery, StatsApi};

const USER_AGENT: &str = "aram_dashboard/0.1.0";

pub struct StatsApiClient {
    base_url: String,
    agent: ureq::Agent,
    clock: DefaultClock,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl StatsApiClient {
    pub fn new(config: &Config) -> Self {
        let per_second =
            NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = RateLimiter::direct(Quota::per_second(per_second));
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();

        StatsApiClient {
            base_url: config.api_base_url.clone(),
            agent,
            clock: DefaultClock::default(),
            rate_limiter,
        }
    }

    // Paces bursts (fast typing in search); never drops or retries a request.
    fn throttle(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }

    fn fetch<T: DeserializeOwned>(&self, request: ureq::Request) -> Result<T, AppError> {
        self.throttle();

        let body = match request.call() {
            Ok(resp) => resp
                .into_string()
                .map_err(|e| AppError::HttpError(e.to_string()))?,
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                let message = serde_json::from_str::<ErrorBody>(&body)
                    .map(|b| b.error)
                    .unwrap_or_else(|_| "unexpected status".to_string());
                return Err(AppError::HttpError(format!("{} (HTTP {})", message, code)));
            }
            Err(e) => return Err(AppError::HttpError(e.to_string())),
        };

        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }

    fn get(&self, endpoint: &str) -> ureq::Request {
        self.agent.get(&endpoint_url(&self.base_url, endpoint))
    }
}

impl StatsApi for StatsApiClient {
    fn version(&self) -> Result<VersionInfo, AppError> {
        self.fetch(self.get(VERSION_ENDPOINT))
    }

    fn champions(&self, query: &ChampionQuery) -> Result<ChampionPage, AppError> {
        let request = self
            .get(CHAMPIONS_ENDPOINT)
            .query("page", &query.page.to_string())
            .query("limit", &CHAMPIONS_PAGE_SIZE.to_string())
            .query("type", &query.champion_type)
            .query("sort", &query.sort);
        self.fetch(request)
    }

    fn champion_detail(&self, champion_id: &str) -> Result<ChampionDetail, AppError> {
        let url = champion_detail_url(&self.base_url, champion_id);
        self.fetch(self.agent.get(&url))
    }

    fn tier_list(&self, champion_type: Option<&str>) -> Result<TierListResponse, AppError> {
        let request = match champion_type {
            Some(t) => self.get(TIER_LIST_ENDPOINT).query("type", t),
            None => self.get(TIER_LIST_ENDPOINT),
        };
        self.fetch(request)
    }

    fn synergy_matrix(&self, limit: u32) -> Result<MatrixPayload, AppError> {
        let request = self
            .get(SYNERGY_MATRIX_ENDPOINT)
            .query("limit", &limit.to_string());
        self.fetch(request)
    }

    fn matchup_matrix(&self, limit: u32) -> Result<MatrixPayload, AppError> {
        let request = self
            .get(MATCHUP_MATRIX_ENDPOINT)
            .query("limit", &limit.to_string());
        self.fetch(request)
    }

    fn search(&self, query: &str) -> Result<SearchResponse, AppError> {
        if query.is_empty() {
            return Ok(SearchResponse::default());
        }
        self.fetch(self.get(SEARCH_ENDPOINT).query("q", query))
    }

    fn items(&self) -> Result<ItemsResponse, AppError> {
        self.fetch(self.get(ITEMS_ENDPOINT))
    }

    fn runes(&self) -> Result<RunesResponse, AppError> {
        self.fetch(self.get(RUNES_ENDPOINT))
    }
}
