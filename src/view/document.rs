use super::event::Event;
use super::state::{NavigationState, Page};
use crate::error::AppError;
use crate::lookup::{CHAMPION_TYPES, SORT_KEYS};
use crate::render::{html_escape, Binding, View};
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SNAPSHOT_FILE: &str = "index.html";
pub const CLOSE_MODAL_TARGET: &str = "close-modal";
pub const DISMISS_SEARCH_TARGET: &str = "dismiss-search";

/// Independently replaceable part of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    VersionInfo,
    PageContent,
    Pagination,
    ChampionDetail,
    SearchResults,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::VersionInfo,
        Region::PageContent,
        Region::Pagination,
        Region::ChampionDetail,
        Region::SearchResults,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Region::VersionInfo => "version-info",
            Region::PageContent => "page-content",
            Region::Pagination => "pagination",
            Region::ChampionDetail => "champion-detail-content",
            Region::SearchResults => "search-results",
        }
    }
}

pub fn nav_target(page: Page) -> String {
    format!("nav:{}", page.slug())
}

/// Bindings owned by the page shell rather than by any region.
pub fn chrome_bindings() -> Vec<Binding> {
    Page::ALL
        .into_iter()
        .map(|page| Binding::new(nav_target(page), Event::Navigate(page)))
        .chain([
            Binding::new(CLOSE_MODAL_TARGET, Event::CloseModal),
            Binding::new(DISMISS_SEARCH_TARGET, Event::DismissSearch),
        ])
        .collect()
}

/// The rendered page: region contents, their bindings and the shell state.
#[derive(Debug, Clone)]
pub struct Document {
    regions: HashMap<Region, View>,
    chrome: Vec<Binding>,
    active_page: Page,
    modal_open: bool,
    search_visible: bool,
    search_input: String,
    loading: bool,
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Document {
            regions: HashMap::new(),
            chrome: chrome_bindings(),
            active_page: Page::Champions,
            modal_open: false,
            search_visible: false,
            search_input: String::new(),
            loading: false,
        }
    }

    /// Swaps a region's markup. The region's previous bindings go with it.
    pub fn replace(&mut self, region: Region, view: View) {
        self.regions.insert(region, view);
    }

    pub fn clear(&mut self, region: Region) {
        self.regions.remove(&region);
    }

    pub fn content(&self, region: Region) -> &str {
        self.regions
            .get(&region)
            .map(|view| view.html.as_str())
            .unwrap_or("")
    }

    pub fn bindings(&self, region: Region) -> &[Binding] {
        self.regions
            .get(&region)
            .map(|view| view.bindings.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::ChampionDetail => self.modal_open,
            Region::SearchResults => self.search_visible,
            _ => true,
        }
    }

    /// Every binding a user can currently reach, shell first.
    pub fn targets(&self) -> Vec<&Binding> {
        let regions = Region::ALL
            .into_iter()
            .filter(|region| self.is_visible(*region))
            .flat_map(|region| self.bindings(region));
        self.chrome.iter().chain(regions).collect()
    }

    pub fn find_binding(&self, target: &str) -> Option<Event> {
        self.targets()
            .into_iter()
            .find(|binding| binding.target == target)
            .map(|binding| binding.event.clone())
    }

    pub fn set_active_page(&mut self, page: Page) {
        self.active_page = page;
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn show_search_results(&mut self) {
        self.search_visible = true;
    }

    pub fn hide_search_results(&mut self) {
        self.search_visible = false;
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn set_search_input(&mut self, value: &str) {
        self.search_input = value.to_string();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Full page markup for the current document.
    pub fn to_html(&self, nav: &NavigationState, generated_at: DateTime<Local>) -> String {
        let nav_links = Page::ALL
            .into_iter()
            .map(|page| {
                let active = if page == self.active_page { " active" } else { "" };
                format!(
                    r##"
            <a href="#" class="nav-link{active}" data-page="{slug}" data-target="{target}">{label}</a>"##,
                    active = active,
                    slug = page.slug(),
                    target = nav_target(page),
                    label = page.label(),
                )
            })
            .collect::<String>();

        format!(
            r#"<!DOCTYPE html>
<html lang="zh-TW">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ARAM 英雄數據分析</title>
    <style>
        .hidden {{ display: none; }}
        .nav-link.active {{ font-weight: bold; border-bottom: 2px solid #3b82f6; }}
        .tier-s {{ background-color: #ff7f7f; }}
        .tier-a {{ background-color: #ffbf7f; }}
        .tier-b {{ background-color: #ffdf7f; }}
        .tier-c {{ background-color: #bfff7f; }}
        .tier-d {{ background-color: #7fbfff; }}
    </style>
</head>
<body class="bg-gray-100">
    <header class="bg-blue-900 text-white p-4">
        <h1 class="text-3xl font-bold">ARAM 英雄數據分析</h1>
        <div id="{version_id}">{version}</div>
        <nav>{nav_links}
        </nav>
    </header>
    <div class="container mx-auto p-4">
        <div class="flex gap-4 mb-6">
            <select id="champion-type-filter">{types}
            </select>
            <select id="champion-sort">{sorts}
            </select>
            <div class="relative">
                <input id="search-input" type="text" placeholder="搜尋英雄..." value="{search_input}">
                <div id="{search_id}" class="absolute bg-white shadow-lg{search_hidden}">{search}</div>
            </div>
        </div>
        <div id="loading" class="text-center py-8{loading_hidden}">載入中...</div>
        <main id="{content_id}">{content}</main>
        <div id="{pagination_id}" class="flex justify-center mt-8">{pagination}</div>
    </div>
    <div id="champion-modal" class="fixed inset-0 bg-black bg-opacity-50{modal_hidden}">
        <div class="bg-white rounded-lg max-w-4xl mx-auto my-8 p-6">
            <button class="float-right" data-target="{close_target}">&times;</button>
            <div id="{detail_id}">{detail}</div>
        </div>
    </div>
    <footer class="text-center text-gray-500 text-sm py-4">產生時間 {generated}</footer>
</body>
</html>
"#,
            version_id = Region::VersionInfo.element_id(),
            version = self.content(Region::VersionInfo),
            nav_links = nav_links,
            types = options(&CHAMPION_TYPES, &nav.champion_type),
            sorts = options(&SORT_KEYS, &nav.sort),
            search_input = html_escape(&self.search_input),
            search_id = Region::SearchResults.element_id(),
            search_hidden = hidden_class(self.search_visible),
            search = self.content(Region::SearchResults),
            loading_hidden = hidden_class(self.loading),
            content_id = Region::PageContent.element_id(),
            content = self.content(Region::PageContent),
            pagination_id = Region::Pagination.element_id(),
            pagination = self.content(Region::Pagination),
            modal_hidden = hidden_class(self.modal_open),
            close_target = CLOSE_MODAL_TARGET,
            detail_id = Region::ChampionDetail.element_id(),
            detail = self.content(Region::ChampionDetail),
            generated = generated_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }

    /// Writes the snapshot into `dir`, creating it if needed.
    pub fn save(&self, dir: &Path, nav: &NavigationState) -> Result<PathBuf, AppError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(SNAPSHOT_FILE);
        fs::write(&path, self.to_html(nav, Local::now()))?;
        Ok(path)
    }
}

fn hidden_class(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " hidden"
    }
}

fn options(values: &[&str], selected: &str) -> String {
    values
        .iter()
        .map(|value| {
            let marker = if *value == selected { " selected" } else { "" };
            format!(
                r#"
                <option value="{v}"{marker}>{v}</option>"#,
                v = html_escape(value),
                marker = marker
            )
        })
        .collect()
}
