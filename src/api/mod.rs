pub mod client;
pub mod endpoints;
pub mod models;

use crate::error::AppError;
use models::*;

/// Read-only view of the statistics backend.
pub trait StatsApi: Send + Sync {
    fn version(&self) -> Result<VersionInfo, AppError>;
    fn champions(&self, query: &ChampionQuery) -> Result<ChampionPage, AppError>;
    fn champion_detail(&self, champion_id: &str) -> Result<ChampionDetail, AppError>;
    fn tier_list(&self, champion_type: Option<&str>) -> Result<TierListResponse, AppError>;
    fn synergy_matrix(&self, limit: u32) -> Result<MatrixPayload, AppError>;
    fn matchup_matrix(&self, limit: u32) -> Result<MatrixPayload, AppError>;
    fn search(&self, query: &str) -> Result<SearchResponse, AppError>;
    fn items(&self) -> Result<ItemsResponse, AppError>;
    fn runes(&self) -> Result<RunesResponse, AppError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChampionQuery {
    pub page: u32,
    pub champion_type: String,
    pub sort: String,
}

/// One fetch the view layer wants performed.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Version,
    Champions(ChampionQuery),
    ChampionDetail { champion_id: String },
    TierList { champion_type: Option<String> },
    SynergyMatrix { limit: u32 },
    MatchupMatrix { limit: u32 },
    Search { query: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Version(VersionInfo),
    Champions(ChampionPage),
    ChampionDetail(ChampionDetail),
    TierList(TierListResponse),
    SynergyMatrix(MatrixPayload),
    MatchupMatrix(MatrixPayload),
    Search(SearchResponse),
}

impl Request {
    pub fn describe(&self) -> &'static str {
        match self {
            Request::Version => "Loading version info",
            Request::Champions(_) => "Loading champion list",
            Request::ChampionDetail { .. } => "Loading champion detail",
            Request::TierList { .. } => "Loading tier list",
            Request::SynergyMatrix { .. } => "Loading synergy matrix",
            Request::MatchupMatrix { .. } => "Loading matchup matrix",
            Request::Search { .. } => "Searching champions",
        }
    }

    /// Search is incremental and the version header is ambient; neither
    /// raises the loading indicator.
    pub fn shows_loading(&self) -> bool {
        !matches!(self, Request::Version | Request::Search { .. })
    }

    pub fn execute(&self, api: &dyn StatsApi) -> Result<Payload, AppError> {
        match self {
            Request::Version => api.version().map(Payload::Version),
            Request::Champions(query) => api.champions(query).map(Payload::Champions),
            Request::ChampionDetail { champion_id } => api
                .champion_detail(champion_id)
                .map(Payload::ChampionDetail),
            Request::TierList { champion_type } => api
                .tier_list(champion_type.as_deref())
                .map(Payload::TierList),
            Request::SynergyMatrix { limit } => {
                api.synergy_matrix(*limit).map(Payload::SynergyMatrix)
            }
            Request::MatchupMatrix { limit } => {
                api.matchup_matrix(*limit).map(Payload::MatchupMatrix)
            }
            Request::Search { query } => api.search(query).map(Payload::Search),
        }
    }
}
