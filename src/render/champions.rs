use super::{html_escape, tier_class, Binding, RenderContext, View, NO_CHAMPIONS, NO_TIER_DATA};
use crate::api::endpoints::{champion_icon_url, loading_art_url};
use crate::api::models::{ChampionSummary, SearchHit, TierGroup};
use crate::lookup::sprite_key;
use crate::view::event::Event;

pub fn card_target(champion_id: &str) -> String {
    format!("card:{}", champion_id)
}

pub fn result_target(champion_id: &str) -> String {
    format!("result:{}", champion_id)
}

/// Champion grid for the champions page; every tile opens the detail panel.
pub fn champion_grid(champions: &[ChampionSummary]) -> View {
    if champions.is_empty() {
        return View::placeholder(NO_CHAMPIONS);
    }

    let mut html = String::from(
        r#"<div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">"#,
    );
    let mut bindings = Vec::with_capacity(champions.len());

    for champion in champions {
        let id = champion.champion_id.to_string();
        let name = html_escape(&champion.name);
        let target = card_target(&id);
        let key = sprite_key(&champion.key, &id);

        html.push_str(&format!(
            r#"
<div class="champion-card bg-white rounded-lg shadow-md overflow-hidden cursor-pointer" data-id="{id}" data-target="{target}">
    <div class="h-40 bg-gray-200 relative">
        <img src="{art}" alt="{name}" class="w-full h-full object-cover">
        <div class="absolute top-0 right-0 {tier_class} text-sm font-bold px-2 py-1 rounded-bl-lg">{tier} 級</div>
    </div>
    <div class="p-4">
        <h3 class="font-bold text-lg mb-2">{name}</h3>
        <div class="flex justify-between text-sm">
            <span>勝率: <span class="font-semibold text-green-600">{win_rate}%</span></span>
            <span>選用率: <span class="font-semibold text-blue-600">{pick_rate}%</span></span>
        </div>
        <div class="mt-2 text-sm">
            <span>KDA: <span class="font-semibold">{kda} ({kda_ratio})</span></span>
        </div>
    </div>
</div>"#,
            id = html_escape(&id),
            target = html_escape(&target),
            art = loading_art_url(&html_escape(&key)),
            name = name,
            tier_class = html_escape(&tier_class(&champion.tier)),
            tier = html_escape(&champion.tier),
            win_rate = champion.win_rate,
            pick_rate = champion.pick_rate,
            kda = html_escape(&champion.kda.to_string()),
            kda_ratio = html_escape(&champion.kda_ratio.to_string()),
        ));

        bindings.push(Binding::new(target, Event::OpenChampion(id)));
    }

    html.push_str("\n</div>");
    View::with_bindings(html, bindings)
}

/// Tier groups in backend order; tiles show their rank within the tier.
pub fn tier_list(groups: &[TierGroup]) -> View {
    if groups.is_empty() {
        return View::placeholder(NO_TIER_DATA);
    }

    let mut html = String::from(r#"<div class="space-y-8">"#);
    let mut bindings = Vec::new();

    for group in groups {
        let mut tiles = String::new();
        for champion in &group.champions {
            let target = card_target(&champion.champion_id);
            let key = sprite_key(&champion.key, &champion.champion_id);

            tiles.push_str(&format!(
                r#"
            <div class="champion-card bg-white border rounded-lg overflow-hidden cursor-pointer" data-id="{id}" data-target="{target}">
                <div class="h-28 bg-gray-200 relative">
                    <img src="{art}" alt="{name}" class="w-full h-full object-cover">
                    <div class="absolute bottom-0 left-0 right-0 bg-black bg-opacity-70 text-white text-xs px-2 py-1">排名 #{rank}</div>
                </div>
                <div class="p-3">
                    <h3 class="font-bold text-sm text-center mb-1">{name}</h3>
                    <div class="flex justify-between text-xs">
                        <span>勝率: <span class="font-semibold text-green-600">{win_rate}%</span></span>
                        <span>選用率: <span class="font-semibold text-blue-600">{pick_rate}%</span></span>
                    </div>
                </div>
            </div>"#,
                id = html_escape(&champion.champion_id),
                target = html_escape(&target),
                art = loading_art_url(&html_escape(&key)),
                name = html_escape(&champion.champion_name),
                rank = html_escape(&champion.rank.to_string()),
                win_rate = champion.win_rate,
                pick_rate = champion.pick_rate,
            ));

            bindings.push(Binding::new(
                target,
                Event::OpenChampion(champion.champion_id.clone()),
            ));
        }

        html.push_str(&format!(
            r#"
<div class="bg-white rounded-lg shadow-md overflow-hidden">
    <div class="p-4 {tier_class}">
        <h2 class="text-2xl font-bold">{tier} 級英雄</h2>
    </div>
    <div class="p-6">
        <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-4">{tiles}
        </div>
    </div>
</div>"#,
            tier_class = html_escape(&tier_class(&group.tier)),
            tier = html_escape(&group.tier),
            tiles = tiles,
        ));
    }

    html.push_str("\n</div>");
    View::with_bindings(html, bindings)
}

/// Search dropdown rows. An empty view means the panel should be hidden.
pub fn search_results(hits: &[SearchHit], ctx: &RenderContext) -> View {
    if hits.is_empty() {
        return View::empty();
    }

    let mut html = String::new();
    let mut bindings = Vec::with_capacity(hits.len());

    for hit in hits {
        let target = result_target(&hit.champion_id);
        let icon = champion_icon_url(&ctx.ddragon_version, &hit.champion_id);

        html.push_str(&format!(
            r#"
<div class="search-result p-2 hover:bg-gray-100 cursor-pointer" data-id="{id}" data-target="{target}">
    <div class="flex items-center">
        <img src="{icon}" alt="{name}" class="w-8 h-8 rounded-full mr-2">
        <div>
            <div class="font-medium">{name}</div>
            <div class="text-xs text-gray-500">{label}</div>
        </div>
    </div>
</div>"#,
            id = html_escape(&hit.champion_id),
            target = html_escape(&target),
            icon = html_escape(&icon),
            name = html_escape(&hit.champion_name),
            label = html_escape(hit.secondary_label()),
        ));

        bindings.push(Binding::new(
            target,
            Event::SelectSearchResult(hit.champion_id.clone()),
        ));
    }

    View::with_bindings(html, bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Scalar, TierChampion};

    fn annie() -> ChampionSummary {
        ChampionSummary {
            champion_id: Scalar::from("1"),
            name: "Annie".to_string(),
            tier: "S".to_string(),
            key: Scalar::from("1"),
            win_rate: 52.3,
            pick_rate: 4.1,
            kda: Scalar::from("3/2/5"),
            kda_ratio: Scalar::from("4.0"),
            champion_type: None,
            rank: None,
        }
    }

    #[test]
    fn grid_renders_one_tile_per_champion() {
        let view = champion_grid(&[annie()]);
        assert_eq!(view.html.matches("champion-card").count(), 1);
        assert!(view.html.contains(">Annie</h3>"));
        assert!(view.html.contains("tier-s"));
        assert!(view.html.contains("S 級"));
        assert!(view.html.contains("52.3%"));
        assert!(view.html.contains("3/2/5 (4.0)"));
        assert_eq!(
            view.bindings,
            vec![Binding::new("card:1", Event::OpenChampion("1".to_string()))]
        );
    }

    #[test]
    fn empty_grid_renders_placeholder() {
        let view = champion_grid(&[]);
        assert!(view.html.contains(NO_CHAMPIONS));
        assert!(view.bindings.is_empty());
    }

    #[test]
    fn tier_list_groups_with_ranks() {
        let groups = vec![TierGroup {
            tier: "A".to_string(),
            champions: vec![TierChampion {
                champion_id: "Zed".to_string(),
                champion_name: "Zed".to_string(),
                champion_tw_name: None,
                champion_type: None,
                key: Scalar::Int(238),
                win_rate: 51.0,
                pick_rate: 3.2,
                rank: Scalar::Int(4),
            }],
        }];
        let view = tier_list(&groups);
        assert!(view.html.contains("A 級英雄"));
        assert!(view.html.contains("tier-a"));
        assert!(view.html.contains("排名 #4"));
        assert!(view.html.contains("loading/238_0.jpg"));
        assert_eq!(view.bindings[0].target, "card:Zed");
        assert!(tier_list(&[]).html.contains(NO_TIER_DATA));
    }

    #[test]
    fn search_rows_bind_to_selection() {
        let hits = vec![SearchHit {
            champion_id: "Ahri".to_string(),
            champion_name: "Ahri".to_string(),
            champion_tw_name: None,
            champion_type: Some("法師".to_string()),
            key: Scalar::Int(103),
        }];
        let view = search_results(&hits, &RenderContext::default());
        assert!(view.html.contains("法師"));
        assert!(view.html.contains("img/champion/Ahri.png"));
        assert_eq!(
            view.bindings[0].event,
            Event::SelectSearchResult("Ahri".to_string())
        );
        assert!(search_results(&[], &RenderContext::default()).is_empty());
    }
}
