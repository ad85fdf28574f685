use super::{
    html_escape, section_placeholder, RenderContext, View, DETAIL_UNAVAILABLE, NO_BUILDS,
    NO_MATCHUPS, NO_RUNES, NO_SYNERGIES, NO_TIPS,
};
use crate::api::endpoints::{champion_icon_url, item_icon_url, splash_art_url};
use crate::api::models::*;
use crate::lookup::{difficulty_label, rune_path_name, shard_name, sprite_key};

const DEFAULT_SKILL_ORDER: &str = "R > Q > W > E";
const DEFAULT_FIRST_SKILL: &str = "Q";

/// Detail panel shown in the champion modal.
///
/// Without `basic_info` and `stats` there is nothing to anchor the panel on,
/// so the whole panel becomes the error placeholder. Every other section
/// degrades on its own.
pub fn champion_detail(detail: &ChampionDetail, ctx: &RenderContext) -> View {
    let (Some(info), Some(stats)) = (&detail.basic_info, &detail.stats) else {
        return View::placeholder(DETAIL_UNAVAILABLE);
    };

    let html = format!(
        r#"<div class="grid grid-cols-1 md:grid-cols-3 gap-6">
    <div class="md:col-span-1">
        <div class="bg-gray-200 rounded-lg overflow-hidden">
            <img src="{splash}" alt="{name}" class="w-full h-auto">
        </div>
        <div class="mt-4 bg-white rounded-lg shadow-md p-4">
            {header}
            {stat_cards}
            {skills}
            {tips}
        </div>
    </div>
    <div class="md:col-span-2">
        {runes}
        {builds}
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {best}
            {worst}
            {synergies}
        </div>
    </div>
</div>"#,
        splash = splash_art_url(&html_escape(&sprite_key(&info.key, &info.champion_id))),
        name = html_escape(&info.champion_name),
        header = render_header(info),
        stat_cards = render_stats(stats),
        skills = render_skills(detail.skills.as_ref()),
        tips = render_tips(detail.tips.as_deref()),
        runes = render_runes(detail.runes.as_deref(), ctx),
        builds = render_builds(detail.builds.as_deref(), ctx),
        best = render_matchups(
            "最佳對位",
            detail.matchups.as_ref().map(|m| m.best.as_slice()),
            "text-green-600",
            ctx
        ),
        worst = render_matchups(
            "最差對位",
            detail.matchups.as_ref().map(|m| m.worst.as_slice()),
            "text-red-600",
            ctx
        ),
        synergies = render_synergies(detail.synergies.as_deref(), ctx),
    );

    View::markup(html)
}

fn render_header(info: &BasicInfo) -> String {
    let tw_name = match info.champion_tw_name.as_deref() {
        Some(name) if !name.is_empty() => format!(" ({})", html_escape(name)),
        _ => String::new(),
    };

    format!(
        r#"<h2 class="text-2xl font-bold mb-2">{name}{tw_name}</h2>
            <div class="text-sm text-gray-600 mb-2">{champion_type} | 難度: {difficulty}</div>
            <div class="bg-blue-100 text-blue-800 px-3 py-1 rounded-full inline-block font-semibold mb-3">{tier} 級 | {rank_desc}</div>"#,
        name = html_escape(&info.champion_name),
        tw_name = tw_name,
        champion_type = html_escape(&info.champion_type),
        difficulty = difficulty_label(info.champion_difficulty),
        tier = html_escape(&info.tier),
        rank_desc = html_escape(&info.rank_desc),
    )
}

fn render_stats(stats: &ChampionStats) -> String {
    let mut cards = vec![
        stat_card("bg-green-50", "text-green-800", &format!("{}%", stats.win_rate), "勝率"),
        stat_card("bg-blue-50", "text-blue-800", &format!("{}%", stats.pick_rate), "選用率"),
    ];
    if let Some(ban_rate) = stats.ban_rate {
        cards.push(stat_card("bg-red-50", "text-red-800", &format!("{}%", ban_rate), "禁用率"));
    }

    let rows = [
        ("KDA", &stats.kda, &stats.kda_ratio),
        ("平均傷害", &stats.damage, &stats.damage_percentage),
        ("平均承傷", &stats.damage_taken, &stats.damage_taken_percentage),
        ("平均治療", &stats.healing, &stats.healing_percentage),
    ]
    .iter()
    .map(|(label, value, companion)| {
        format!(
            r#"
                <div class="flex justify-between">
                    <span>{}:</span>
                    <span class="font-semibold">{} ({})</span>
                </div>"#,
            label,
            html_escape(&value.to_string()),
            html_escape(&companion.to_string()),
        )
    })
    .collect::<String>();

    format!(
        r#"<div class="grid grid-cols-2 gap-3 mb-4">{cards}
            </div>
            <h3 class="font-bold text-lg mb-2">數據統計</h3>
            <div class="space-y-2 mb-4">{rows}
            </div>"#,
        cards = cards.concat(),
        rows = rows,
    )
}

fn stat_card(background: &str, accent: &str, value: &str, label: &str) -> String {
    format!(
        r#"
                <div class="{background} p-3 rounded-lg">
                    <div class="{accent} font-bold text-lg">{value}</div>
                    <div class="text-sm text-gray-600">{label}</div>
                </div>"#,
        background = background,
        accent = accent,
        value = html_escape(value),
        label = label,
    )
}

fn non_blank<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback,
    }
}

fn render_skills(skills: Option<&Skills>) -> String {
    let order = non_blank(skills.map(|s| s.skill_order.as_str()), DEFAULT_SKILL_ORDER);
    let first = non_blank(skills.map(|s| s.first_skill.as_str()), DEFAULT_FIRST_SKILL);

    format!(
        r#"<h3 class="font-bold text-lg mb-2">技能順序</h3>
            <div class="mb-4">
                <div class="text-sm">優先級: <span class="font-semibold">{}</span></div>
                <div class="text-sm">起手技能: <span class="font-semibold">{}</span></div>
            </div>"#,
        html_escape(order),
        html_escape(first),
    )
}

fn render_tips(tips: Option<&[String]>) -> String {
    let items = match tips {
        Some(tips) if !tips.is_empty() => tips
            .iter()
            .map(|tip| format!("<li>{}</li>", html_escape(tip)))
            .collect::<String>(),
        _ => format!("<li>{}</li>", NO_TIPS),
    };

    format!(
        r#"<h3 class="font-bold text-lg mb-2">使用小技巧</h3>
            <ul class="list-disc list-inside text-sm space-y-1 mb-4">{}</ul>"#,
        items
    )
}

fn render_runes(runes: Option<&[RuneConfig]>, ctx: &RenderContext) -> String {
    let body = match runes {
        Some(runes) if !runes.is_empty() => runes
            .iter()
            .enumerate()
            .map(|(index, rune)| render_rune_config(index, rune, ctx))
            .collect::<String>(),
        _ => section_placeholder(NO_RUNES),
    };

    format!(
        r#"<div class="bg-white rounded-lg shadow-md p-6 mb-6">
            <h3 class="font-bold text-xl mb-4">最佳符文配置</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">{}</div>
        </div>"#,
        body
    )
}

fn render_rune_config(index: usize, rune: &RuneConfig, ctx: &RenderContext) -> String {
    let primary_path = path_label(&rune.primary_path, rune.primary_path_id.as_ref());
    let secondary_path = path_label(&rune.secondary_path, rune.secondary_path_id.as_ref());
    let keystone = rune_label(&rune.primary_rune, rune.primary_rune_id.as_ref(), ctx);

    let secondary_runes = rune_list(&rune.secondary_runes, &rune.secondary_rune_ids, |id| {
        ctx.catalog.rune_name(id)
    });
    let secondary_choices = rune_list(&rune.secondary_choices, &rune.secondary_choice_ids, |id| {
        ctx.catalog.rune_name(id)
    });
    let shards = rune_list(&rune.shards, &rune.shard_ids, shard_name);

    format!(
        r#"
                <div class="border rounded-lg p-4">
                    <div class="flex justify-between items-center mb-3">
                        <span class="font-semibold text-lg">配置 {number}</span>
                        <span class="bg-green-100 text-green-800 px-2 py-1 rounded-full text-sm">勝率 {win_rate}%</span>
                    </div>
                    <div class="grid grid-cols-2 gap-3">
                        <div>
                            <div class="text-sm font-semibold mb-1">主系: {primary_path}</div>
                            <div class="text-sm mb-2">核心: {keystone}</div>
                            <div class="text-sm">{secondary_runes}</div>
                        </div>
                        <div>
                            <div class="text-sm font-semibold mb-1">副系: {secondary_path}</div>
                            <div class="text-sm mb-3">{secondary_choices}</div>
                            <div class="text-sm font-semibold mb-1">符文碎片:</div>
                            <div class="text-sm">{shards}</div>
                        </div>
                    </div>
                </div>"#,
        number = index + 1,
        win_rate = rune.runes_win_rate,
        primary_path = html_escape(&primary_path),
        keystone = html_escape(&keystone),
        secondary_runes = secondary_runes,
        secondary_path = html_escape(&secondary_path),
        secondary_choices = secondary_choices,
        shards = shards,
    )
}

fn path_label(name: &Scalar, id: Option<&Scalar>) -> String {
    match id {
        Some(id) if name.is_blank() => rune_path_name(&id.to_string()),
        _ => rune_path_name(&name.to_string()),
    }
}

fn rune_label(name: &Scalar, id: Option<&Scalar>, ctx: &RenderContext) -> String {
    match id {
        Some(id) if name.is_blank() => ctx.catalog.rune_name(&id.to_string()),
        _ => ctx.catalog.rune_name(&name.to_string()),
    }
}

// Names win over ids; the backend often ships only the id lists.
fn rune_list<F>(names: &[Scalar], ids: &[Scalar], resolve: F) -> String
where
    F: Fn(&str) -> String,
{
    let source = if names.is_empty() { ids } else { names };
    source
        .iter()
        .map(|value| format!("<div>{}</div>", html_escape(&resolve(&value.to_string()))))
        .collect()
}

fn render_builds(builds: Option<&[ItemBuild]>, ctx: &RenderContext) -> String {
    let body = match builds {
        Some(builds) if !builds.is_empty() => builds
            .iter()
            .enumerate()
            .map(|(index, build)| {
                format!(
                    r#"
                <div class="border rounded-lg p-4">
                    <div class="flex justify-between items-center mb-3">
                        <span class="font-semibold text-lg">出裝 {number}</span>
                        <span class="bg-green-100 text-green-800 px-2 py-1 rounded-full text-sm">勝率 {win_rate}%</span>
                    </div>
                    <div class="space-y-3">{starting}{core}{optional}
                    </div>
                </div>"#,
                    number = index + 1,
                    win_rate = build.build_win_rate,
                    starting = item_group("起始裝備", &build.starting_items, ctx),
                    core = item_group("核心裝備", &build.core_items, ctx),
                    optional = item_group("可選裝備", &build.optional_items, ctx),
                )
            })
            .collect::<String>(),
        _ => section_placeholder(NO_BUILDS),
    };

    format!(
        r#"<div class="bg-white rounded-lg shadow-md p-6 mb-6">
            <h3 class="font-bold text-xl mb-4">推薦出裝</h3>
            <div class="space-y-6">{}</div>
        </div>"#,
        body
    )
}

fn item_group(label: &str, items: &[Scalar], ctx: &RenderContext) -> String {
    let sprites = items
        .iter()
        .map(|item| {
            let id = html_escape(&item.to_string());
            format!(
                r#"<div class="bg-gray-100 rounded-lg p-1"><img src="{src}" alt="Item {id}" class="w-10 h-10 object-cover" title="{title}"></div>"#,
                src = item_icon_url(&ctx.ddragon_version, &id),
                id = id,
                title = html_escape(&ctx.catalog.item_name(&item.to_string())),
            )
        })
        .collect::<String>();

    format!(
        r#"
                        <div>
                            <div class="text-sm font-semibold mb-2">{}:</div>
                            <div class="flex flex-wrap gap-2">{}</div>
                        </div>"#,
        label, sprites
    )
}

fn render_matchups(
    title: &str,
    entries: Option<&[MatchupEntry]>,
    accent: &str,
    ctx: &RenderContext,
) -> String {
    let body = match entries {
        Some(entries) if !entries.is_empty() => entries
            .iter()
            .map(|m| {
                partner_row(
                    &m.opponent_id,
                    &format!("{}%", m.win_rate),
                    accent,
                    ctx,
                )
            })
            .collect::<String>(),
        _ => section_placeholder(NO_MATCHUPS),
    };

    side_panel(title, &body)
}

fn render_synergies(synergies: Option<&[SynergyEntry]>, ctx: &RenderContext) -> String {
    let body = match synergies {
        Some(entries) if !entries.is_empty() => entries
            .iter()
            .map(|s| {
                partner_row(
                    &s.champion_id,
                    &format!("{:+}", s.synergy_score),
                    "text-blue-600",
                    ctx,
                )
            })
            .collect::<String>(),
        _ => section_placeholder(NO_SYNERGIES),
    };

    side_panel("最佳協同", &body)
}

fn partner_row(champion_id: &str, value: &str, accent: &str, ctx: &RenderContext) -> String {
    let id = html_escape(champion_id);
    format!(
        r#"
                    <div class="flex justify-between items-center p-2 hover:bg-gray-50 rounded">
                        <div class="flex items-center">
                            <img src="{icon}" alt="{id}" class="w-8 h-8 rounded-full mr-2">
                            <span>{id}</span>
                        </div>
                        <span class="{accent} font-semibold">{value}</span>
                    </div>"#,
        icon = champion_icon_url(&ctx.ddragon_version, &id),
        id = id,
        accent = accent,
        value = html_escape(value),
    )
}

fn side_panel(title: &str, body: &str) -> String {
    format!(
        r#"
            <div class="bg-white rounded-lg shadow-md p-6">
                <h3 class="font-bold text-xl mb-4">{}</h3>
                <div class="space-y-2">{}</div>
            </div>"#,
        title, body
    )
}
