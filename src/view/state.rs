use super::event::{Command, Event};
use crate::api::endpoints::MATRIX_LIMIT;
use crate::api::{ChampionQuery, Request};
use crate::error::AppError;
use crate::lookup::{ALL_TYPES, DEFAULT_SORT};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Champions,
    TierList,
    TeamBuilder,
    Synergy,
    Matchup,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Champions,
        Page::TierList,
        Page::TeamBuilder,
        Page::Synergy,
        Page::Matchup,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Champions => "champions",
            Page::TierList => "tier-list",
            Page::TeamBuilder => "team-builder",
            Page::Synergy => "synergy",
            Page::Matchup => "matchup",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Champions => "英雄列表",
            Page::TierList => "梯隊排名",
            Page::TeamBuilder => "隊伍模擬",
            Page::Synergy => "協同矩陣",
            Page::Matchup => "對位矩陣",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| AppError::InvalidCommand(format!("unknown page '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub page: Page,
    pub champions_page: u32,
    pub total_champions_pages: u32,
    pub champion_type: String,
    pub sort: String,
}

impl Default for NavigationState {
    fn default() -> Self {
        NavigationState {
            page: Page::Champions,
            champions_page: 1,
            total_champions_pages: 1,
            champion_type: ALL_TYPES.to_string(),
            sort: DEFAULT_SORT.to_string(),
        }
    }
}

impl NavigationState {
    fn champion_query(&self, page: u32) -> ChampionQuery {
        ChampionQuery {
            page,
            champion_type: self.champion_type.clone(),
            sort: self.sort.clone(),
        }
    }

    // The backend treats a missing type as "all".
    fn tier_filter(&self) -> Option<String> {
        if self.champion_type == ALL_TYPES {
            None
        } else {
            Some(self.champion_type.clone())
        }
    }

    fn page_load(&self) -> Command {
        match self.page {
            Page::Champions => Command::Fetch(Request::Champions(self.champion_query(1))),
            Page::TierList => Command::Fetch(Request::TierList {
                champion_type: self.tier_filter(),
            }),
            Page::TeamBuilder => Command::ShowTeamBuilder,
            Page::Synergy => Command::Fetch(Request::SynergyMatrix {
                limit: MATRIX_LIMIT,
            }),
            Page::Matchup => Command::Fetch(Request::MatchupMatrix {
                limit: MATRIX_LIMIT,
            }),
        }
    }
}

/// Pure navigation step: the next state plus the commands it implies.
pub fn transition(state: &NavigationState, event: Event) -> (NavigationState, Vec<Command>) {
    let mut next = state.clone();

    let commands = match event {
        Event::Init => {
            let (navigated, commands) = transition(state, Event::Navigate(Page::Champions));
            next = navigated;
            std::iter::once(Command::Fetch(Request::Version))
                .chain(commands)
                .collect()
        }

        Event::Navigate(page) => {
            next.page = page;
            vec![
                Command::MarkActive(page),
                Command::ClearPagination,
                next.page_load(),
            ]
        }

        Event::SelectPage(page) if state.page == Page::Champions => {
            vec![Command::Fetch(Request::Champions(state.champion_query(page.max(1))))]
        }
        Event::SelectPage(_) => Vec::new(),

        Event::ChangeType(champion_type) => {
            next.champion_type = champion_type;
            match next.page {
                Page::Champions | Page::TierList => vec![next.page_load()],
                _ => Vec::new(),
            }
        }

        Event::ChangeSort(sort) => {
            next.sort = sort;
            match next.page {
                Page::Champions => vec![next.page_load()],
                _ => Vec::new(),
            }
        }

        Event::SearchInput(raw) => {
            let query = raw.trim().to_string();
            let follow_up = if query.is_empty() {
                Command::HideSearchResults
            } else {
                Command::Fetch(Request::Search { query })
            };
            vec![Command::SetSearchInput(raw), follow_up]
        }

        Event::OpenChampion(champion_id) => {
            vec![Command::Fetch(Request::ChampionDetail { champion_id })]
        }

        Event::SelectSearchResult(champion_id) => vec![
            Command::Fetch(Request::ChampionDetail { champion_id }),
            Command::HideSearchResults,
            Command::ClearSearchInput,
        ],

        Event::CloseModal => vec![Command::CloseModal],

        Event::DismissSearch => vec![Command::HideSearchResults],
    };

    (next, commands)
}
