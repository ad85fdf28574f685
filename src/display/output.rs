use crate::api::models::{SearchHit, VersionInfo};
use crate::render::page::group_thousands;
use crate::render::Binding;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct VersionRow {
    field: String,
    value: String,
}

#[derive(Tabled)]
struct SearchRow {
    #[tabled(rename = "#")]
    number: String,
    id: String,
    name: String,
    detail: String,
}

#[derive(Tabled)]
struct TargetRow {
    target: String,
    action: String,
}

pub fn display_version(info: &VersionInfo) {
    println!("\n{}", "📊 ARAM Stats Backend".bold().cyan());
    println!("{}\n", "=".repeat(40).cyan());

    let mut rows = vec![
        VersionRow {
            field: "API version".to_string(),
            value: info.api_version.clone(),
        },
        VersionRow {
            field: "Last updated".to_string(),
            value: info.last_updated.clone(),
        },
        VersionRow {
            field: "Samples".to_string(),
            value: group_thousands(info.total_samples),
        },
    ];
    if let Some(patch) = &info.current_version {
        rows.push(VersionRow {
            field: "Game patch".to_string(),
            value: patch.clone(),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_search_hits(query: &str, hits: &[SearchHit]) {
    println!("\n{}", format!("🔎 Results for \"{}\"", query).bold().cyan());

    if hits.is_empty() {
        println!("{}", "No champions matched".yellow());
        return;
    }

    let rows: Vec<SearchRow> = hits
        .iter()
        .enumerate()
        .map(|(idx, hit)| SearchRow {
            number: format!("{}", idx + 1),
            id: hit.champion_id.clone(),
            name: hit.champion_name.clone(),
            detail: hit.secondary_label().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

/// Lists the clickable targets of the current document.
pub fn display_targets(bindings: &[&Binding]) {
    let rows: Vec<TargetRow> = bindings
        .iter()
        .map(|binding| TargetRow {
            target: binding.target.clone(),
            action: format!("{:?}", binding.event),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
