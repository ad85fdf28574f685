use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

/// A display-only value the backend sends either as a number or a string
/// (champion keys, KDA ratios, preformatted damage figures).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl Scalar {
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Int(n) => *n == 0,
            Scalar::Float(f) => *f == 0.0,
            Scalar::Text(s) => s.trim().is_empty() || s == "0",
            Scalar::Null => true,
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Text(String::new())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::Null => Ok(()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

// An explicit `null` reads the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// /version
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct VersionInfo {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub total_samples: u64,
    #[serde(default)]
    pub current_version: Option<String>,
}

// /champions
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ChampionPage {
    #[serde(default)]
    pub champions: Vec<ChampionSummary>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionSummary {
    pub champion_id: Scalar,
    pub name: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub key: Scalar,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub pick_rate: f64,
    #[serde(default)]
    pub kda: Scalar,
    #[serde(default)]
    pub kda_ratio: Scalar,
    #[serde(default, rename = "type")]
    pub champion_type: Option<String>,
    #[serde(default)]
    pub rank: Option<Scalar>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: Option<u64>,
}

// /champions/{id}
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ChampionDetail {
    pub basic_info: Option<BasicInfo>,
    pub stats: Option<ChampionStats>,
    pub runes: Option<Vec<RuneConfig>>,
    pub builds: Option<Vec<ItemBuild>>,
    pub skills: Option<Skills>,
    pub matchups: Option<Matchups>,
    pub synergies: Option<Vec<SynergyEntry>>,
    pub tips: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BasicInfo {
    #[serde(deserialize_with = "nullable")]
    pub champion_id: String,
    #[serde(deserialize_with = "nullable")]
    pub champion_name: String,
    pub champion_tw_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub champion_type: String,
    pub champion_difficulty: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub tier: String,
    pub rank: Scalar,
    pub key: Scalar,
    #[serde(deserialize_with = "nullable")]
    pub rank_desc: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ChampionStats {
    #[serde(deserialize_with = "nullable")]
    pub win_rate: f64,
    #[serde(deserialize_with = "nullable")]
    pub pick_rate: f64,
    pub ban_rate: Option<f64>,
    pub kda: Scalar,
    pub kda_ratio: Scalar,
    pub damage: Scalar,
    pub damage_percentage: Scalar,
    pub damage_taken: Scalar,
    pub damage_taken_percentage: Scalar,
    pub healing: Scalar,
    pub healing_percentage: Scalar,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RuneConfig {
    #[serde(deserialize_with = "nullable")]
    pub runes_win_rate: f64,
    pub primary_path: Scalar,
    pub primary_path_id: Option<Scalar>,
    pub primary_rune: Scalar,
    pub primary_rune_id: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub secondary_runes: Vec<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub secondary_rune_ids: Vec<Scalar>,
    pub secondary_path: Scalar,
    pub secondary_path_id: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub secondary_choices: Vec<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub secondary_choice_ids: Vec<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub shards: Vec<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub shard_ids: Vec<Scalar>,
    pub pick_rate: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ItemBuild {
    #[serde(deserialize_with = "nullable")]
    pub build_win_rate: f64,
    #[serde(deserialize_with = "nullable")]
    pub starting_items: Vec<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub core_items: Vec<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub optional_items: Vec<Scalar>,
    pub pick_rate: Option<f64>,
}

/// Blank fields fall back to the default order when rendered.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "nullable")]
    pub skill_order: String,
    #[serde(deserialize_with = "nullable")]
    pub first_skill: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Matchups {
    #[serde(deserialize_with = "nullable")]
    pub best: Vec<MatchupEntry>,
    #[serde(deserialize_with = "nullable")]
    pub worst: Vec<MatchupEntry>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MatchupEntry {
    #[serde(deserialize_with = "nullable")]
    pub opponent_id: String,
    #[serde(deserialize_with = "nullable")]
    pub win_rate: f64,
    pub sample_size: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SynergyEntry {
    #[serde(deserialize_with = "nullable")]
    pub champion_id: String,
    #[serde(deserialize_with = "nullable")]
    pub synergy_score: f64,
    pub win_rate: Option<f64>,
}

// /tier-list
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct TierListResponse {
    #[serde(default)]
    pub tier_list: Vec<TierGroup>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TierGroup {
    pub tier: String,
    #[serde(default)]
    pub champions: Vec<TierChampion>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TierChampion {
    pub champion_id: String,
    pub champion_name: String,
    #[serde(default)]
    pub champion_tw_name: Option<String>,
    #[serde(default)]
    pub champion_type: Option<String>,
    #[serde(default)]
    pub key: Scalar,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub pick_rate: f64,
    #[serde(default)]
    pub rank: Scalar,
}

// /synergy-matrix, /matchup-matrix
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct MatrixPayload {
    #[serde(default)]
    pub champions: Option<Vec<String>>,
    #[serde(default)]
    pub matrix: Option<Vec<Vec<f64>>>,
}

// /champion-search
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchHit {
    pub champion_id: String,
    pub champion_name: String,
    #[serde(default)]
    pub champion_tw_name: Option<String>,
    #[serde(default)]
    pub champion_type: Option<String>,
    #[serde(default)]
    pub key: Scalar,
}

impl SearchHit {
    /// Localized name when the backend has one, category otherwise.
    pub fn secondary_label(&self) -> &str {
        match self.champion_tw_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.champion_type.as_deref().unwrap_or(""),
        }
    }
}

// /items
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ItemDefinition {
    pub item_id: Scalar,
    pub item_name: String,
}

// /runes
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct RunesResponse {
    #[serde(default)]
    pub rune_paths: HashMap<String, HashMap<String, Vec<RuneDefinition>>>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RuneDefinition {
    pub id: Scalar,
    pub name: String,
}

// Error body sent alongside non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn champion_page_accepts_string_and_number_scalars() {
        let body = r#"{
            "champions": [
                {"championId": "1", "name": "Annie", "tier": "S", "key": "1",
                 "winRate": 52.3, "pickRate": 4.1, "kda": "3/2/5", "kdaRatio": "4.0"},
                {"championId": "Ahri", "name": "Ahri", "tier": "A", "key": 103,
                 "winRate": 50.0, "pickRate": 2.5, "kda": "5.1/4.2/7.0", "kdaRatio": 2.9}
            ],
            "pagination": {"current_page": 1, "total_pages": 3}
        }"#;

        let page: ChampionPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.champions.len(), 2);
        assert_eq!(page.champions[0].kda_ratio.to_string(), "4.0");
        assert_eq!(page.champions[1].key, Scalar::Int(103));
        assert_eq!(page.champions[1].kda_ratio.to_string(), "2.9");
        assert_eq!(page.pagination.unwrap().total_pages, 3);
    }

    #[test]
    fn detail_tolerates_missing_sections() {
        let detail: ChampionDetail = serde_json::from_str(r#"{"tips": []}"#).unwrap();
        assert!(detail.basic_info.is_none());
        assert!(detail.runes.is_none());
        assert_eq!(detail.tips, Some(vec![]));
    }

    #[test]
    fn detail_sub_objects_tolerate_nulls_and_gaps() {
        let body = r#"{
            "basic_info": {"champion_id": "Annie", "champion_name": "Annie",
                           "champion_type": null, "tier": "S", "rank": null,
                           "key": null, "rank_desc": null},
            "stats": {"win_rate": 52.1, "pick_rate": null, "kda": null},
            "skills": {"skill_order": "Q > W > E"},
            "matchups": {"best": [{"opponent_id": "Zed", "win_rate": null}], "worst": null},
            "synergies": [{"champion_id": "Lux"}]
        }"#;

        let detail: ChampionDetail = serde_json::from_str(body).unwrap();
        let info = detail.basic_info.unwrap();
        assert_eq!(info.rank, Scalar::Null);
        assert!(info.key.is_blank());
        assert_eq!(info.rank.to_string(), "");
        assert_eq!(info.champion_type, "");
        assert_eq!(detail.stats.unwrap().pick_rate, 0.0);

        let skills = detail.skills.unwrap();
        assert_eq!(skills.skill_order, "Q > W > E");
        assert_eq!(skills.first_skill, "");

        let matchups = detail.matchups.unwrap();
        assert_eq!(matchups.best[0].win_rate, 0.0);
        assert!(matchups.worst.is_empty());
        assert_eq!(detail.synergies.unwrap()[0].synergy_score, 0.0);
    }

    #[test]
    fn search_hit_prefers_localized_name() {
        let hit: SearchHit = serde_json::from_str(
            r#"{"champion_id": "Ahri", "champion_name": "Ahri", "champion_tw_name": "阿璃", "champion_type": "法師", "key": 103}"#,
        )
        .unwrap();
        assert_eq!(hit.secondary_label(), "阿璃");

        let bare = SearchHit {
            champion_tw_name: Some(String::new()),
            ..hit
        };
        assert_eq!(bare.secondary_label(), "法師");
    }
}
