// Static fallback tables and the backend-sourced name catalog.
// The static tables are incomplete on purpose; the catalog wins whenever it
// knows an id.

use crate::api::models::{ItemsResponse, RunesResponse, Scalar};
use crate::api::StatsApi;
use crate::display::output::display_warning;
use std::collections::HashMap;

pub const ALL_TYPES: &str = "全部";
pub const CHAMPION_TYPES: [&str; 7] = ["全部", "坦克", "戰士", "刺客", "法師", "輔助", "射手"];

pub const DEFAULT_SORT: &str = "勝率";
pub const SORT_KEYS: [&str; 3] = ["勝率", "選用率", "KDA"];

pub fn difficulty_label(difficulty: Option<i64>) -> &'static str {
    match difficulty {
        Some(1) => "簡單",
        Some(3) => "困難",
        _ => "中等",
    }
}

pub fn rune_path_name(path: &str) -> String {
    let name = match path {
        "8000" => "精密",
        "8100" => "主宰",
        "8200" => "巫術",
        "8300" => "靈感",
        "8400" => "堅決",
        _ => path,
    };
    name.to_string()
}

pub fn shard_name(shard: &str) -> String {
    let name = match shard {
        "5001" => "生命值",
        "5002" => "護甲",
        "5003" => "魔法抗性",
        "5005" => "攻擊速度",
        "5007" => "技能急速",
        "5008" => "適應性能力",
        _ => shard,
    };
    name.to_string()
}

const CHAMPION_KEYS: [(&str, &str); 28] = [
    ("Aatrox", "266"),
    ("Ahri", "103"),
    ("Akali", "84"),
    ("Amumu", "32"),
    ("Annie", "1"),
    ("Ashe", "22"),
    ("Blitzcrank", "53"),
    ("Brand", "63"),
    ("Caitlyn", "51"),
    ("Darius", "122"),
    ("Ezreal", "81"),
    ("Jinx", "222"),
    ("Kaisa", "145"),
    ("Katarina", "55"),
    ("LeeSin", "64"),
    ("Lux", "99"),
    ("MasterYi", "11"),
    ("MissFortune", "21"),
    ("Pyke", "555"),
    ("Sona", "37"),
    ("Soraka", "16"),
    ("Teemo", "17"),
    ("Thresh", "412"),
    ("Vayne", "67"),
    ("Yasuo", "157"),
    ("Yuumi", "350"),
    ("Zed", "238"),
    ("Ziggs", "115"),
];

/// Numeric sprite key for a champion id; unknown ids fall back to Annie ("1").
pub fn champion_key(champion_id: &str) -> &'static str {
    CHAMPION_KEYS
        .iter()
        .find(|(id, _)| *id == champion_id)
        .map(|(_, key)| *key)
        .unwrap_or("1")
}

/// Key from the payload when it carries one, the static table otherwise.
pub fn sprite_key(payload_key: &Scalar, champion_id: &str) -> String {
    if payload_key.is_blank() {
        champion_key(champion_id).to_string()
    } else {
        payload_key.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: HashMap<String, String>,
    runes: HashMap<String, String>,
}

impl Catalog {
    pub fn from_responses(items: &ItemsResponse, runes: &RunesResponse) -> Self {
        let items = items
            .items
            .iter()
            .map(|item| (item.item_id.to_string(), item.item_name.clone()))
            .collect();

        let runes = runes
            .rune_paths
            .values()
            .flat_map(|slots| slots.values())
            .flatten()
            .map(|rune| (rune.id.to_string(), rune.name.clone()))
            .collect();

        Catalog { items, runes }
    }

    /// Loads both catalogs; either one failing leaves that half empty.
    pub fn fetch(api: &dyn StatsApi) -> Self {
        let items = api.items().unwrap_or_else(|e| {
            display_warning(&format!("Item catalog unavailable, using placeholders: {}", e));
            ItemsResponse::default()
        });
        let runes = api.runes().unwrap_or_else(|e| {
            display_warning(&format!("Rune catalog unavailable, using raw ids: {}", e));
            RunesResponse::default()
        });
        Catalog::from_responses(&items, &runes)
    }

    pub fn item_name(&self, item_id: &str) -> String {
        self.items
            .get(item_id)
            .cloned()
            .unwrap_or_else(|| format!("物品 {}", item_id))
    }

    pub fn rune_name(&self, rune_id: &str) -> String {
        self.runes
            .get(rune_id)
            .cloned()
            .unwrap_or_else(|| rune_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{ItemDefinition, RuneDefinition};

    #[test]
    fn difficulty_defaults_to_medium() {
        assert_eq!(difficulty_label(Some(1)), "簡單");
        assert_eq!(difficulty_label(Some(3)), "困難");
        assert_eq!(difficulty_label(Some(7)), "中等");
        assert_eq!(difficulty_label(None), "中等");
    }

    #[test]
    fn unknown_paths_and_shards_pass_through() {
        assert_eq!(rune_path_name("8100"), "主宰");
        assert_eq!(rune_path_name("精密"), "精密");
        assert_eq!(shard_name("5008"), "適應性能力");
        assert_eq!(shard_name("9999"), "9999");
    }

    #[test]
    fn champion_key_falls_back_to_annie() {
        assert_eq!(champion_key("Thresh"), "412");
        assert_eq!(champion_key("Nobody"), "1");
        assert_eq!(sprite_key(&Scalar::Int(0), "Zed"), "238");
        assert_eq!(sprite_key(&Scalar::Int(7), "Zed"), "7");
    }

    #[test]
    fn catalog_prefers_backend_names() {
        let items = ItemsResponse {
            items: vec![ItemDefinition {
                item_id: Scalar::Int(3031),
                item_name: "無盡之刃".to_string(),
            }],
        };
        let mut slots = HashMap::new();
        slots.insert(
            "0".to_string(),
            vec![RuneDefinition {
                id: Scalar::Int(8005),
                name: "精準攻勢".to_string(),
            }],
        );
        let mut paths = HashMap::new();
        paths.insert("精密".to_string(), slots);
        let runes = RunesResponse { rune_paths: paths };

        let catalog = Catalog::from_responses(&items, &runes);
        assert_eq!(catalog.item_name("3031"), "無盡之刃");
        assert_eq!(catalog.item_name("1001"), "物品 1001");
        assert_eq!(catalog.rune_name("8005"), "精準攻勢");
        assert_eq!(catalog.rune_name("8008"), "8008");
    }
}
