// Backend endpoint paths, relative to the configured base URL

pub const VERSION_ENDPOINT: &str = "/version";
pub const CHAMPIONS_ENDPOINT: &str = "/champions";
pub const TIER_LIST_ENDPOINT: &str = "/tier-list";
pub const SYNERGY_MATRIX_ENDPOINT: &str = "/synergy-matrix";
pub const MATCHUP_MATRIX_ENDPOINT: &str = "/matchup-matrix";
pub const SEARCH_ENDPOINT: &str = "/champion-search";
pub const ITEMS_ENDPOINT: &str = "/items";
pub const RUNES_ENDPOINT: &str = "/runes";

pub const CHAMPIONS_PAGE_SIZE: u32 = 12;
pub const MATRIX_LIMIT: u32 = 20;

pub const DDRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";

pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url, endpoint)
}

pub fn champion_detail_url(base_url: &str, champion_id: &str) -> String {
    format!(
        "{}{}/{}",
        base_url,
        CHAMPIONS_ENDPOINT,
        urlencoding::encode(champion_id)
    )
}

pub fn loading_art_url(key: &str) -> String {
    format!("{}/img/champion/loading/{}_0.jpg", DDRAGON_CDN, key)
}

pub fn splash_art_url(key: &str) -> String {
    format!("{}/img/champion/splash/{}_0.jpg", DDRAGON_CDN, key)
}

pub fn champion_icon_url(version: &str, champion_id: &str) -> String {
    format!("{}/{}/img/champion/{}.png", DDRAGON_CDN, version, champion_id)
}

pub fn item_icon_url(version: &str, item_id: &str) -> String {
    format!("{}/{}/img/item/{}.png", DDRAGON_CDN, version, item_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_url_encodes_the_id() {
        assert_eq!(
            champion_detail_url("http://localhost:5000/api", "Kog Maw"),
            "http://localhost:5000/api/champions/Kog%20Maw"
        );
    }

    #[test]
    fn sprite_urls() {
        assert_eq!(
            loading_art_url("1"),
            "https://ddragon.leagueoflegends.com/cdn/img/champion/loading/1_0.jpg"
        );
        assert_eq!(
            item_icon_url("13.11.1", "3031"),
            "https://ddragon.leagueoflegends.com/cdn/13.11.1/img/item/3031.png"
        );
    }
}
