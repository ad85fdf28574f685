use super::document::{Document, Region};
use super::event::{Command, Event};
use super::state::{transition, NavigationState};
use crate::api::{Payload, Request};
use crate::dispatch::{Response, Ticket};
use crate::error::AppError;
use crate::render::champions::{champion_grid, search_results, tier_list};
use crate::render::detail::champion_detail;
use crate::render::matrix::{matrix, MatrixKind};
use crate::render::page::{team_builder_notice, version_header};
use crate::render::pagination::pagination;
use crate::render::{RenderContext, View};
use std::collections::{HashMap, HashSet};

/// What applying a response did to the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Rendered(Region),
    /// A newer request for the same region was issued meanwhile.
    Stale,
    Failed { what: &'static str, error: AppError },
}

/// Owns navigation state and the document; the only place either changes.
pub struct Controller {
    state: NavigationState,
    document: Document,
    ctx: RenderContext,
    next_seq: u64,
    latest: HashMap<Region, u64>,
    loading: HashSet<u64>,
}

impl Controller {
    pub fn new(ctx: RenderContext) -> Self {
        Controller::with_state(ctx, NavigationState::default())
    }

    /// Starts from a preset filter, sort or page instead of the defaults.
    pub fn with_state(ctx: RenderContext, state: NavigationState) -> Self {
        let mut document = Document::new();
        document.set_active_page(state.page);
        Controller {
            state,
            document,
            ctx,
            next_seq: 0,
            latest: HashMap::new(),
            loading: HashSet::new(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn is_loading(&self) -> bool {
        !self.loading.is_empty()
    }

    /// Runs one event through the transition and returns the fetches it needs.
    pub fn handle(&mut self, event: Event) -> Vec<Ticket> {
        let (next, commands) = transition(&self.state, event);
        self.state = next;

        let mut tickets = Vec::new();
        for command in commands {
            match command {
                Command::Fetch(request) => tickets.push(self.issue(request)),
                other => self.run_command(other),
            }
        }
        tickets
    }

    /// Fires whatever event is bound to `target` in the current document.
    pub fn click(&mut self, target: &str) -> Result<Vec<Ticket>, AppError> {
        let event = self
            .document
            .find_binding(target)
            .ok_or_else(|| AppError::InvalidCommand(format!("nothing is bound to '{}'", target)))?;
        Ok(self.handle(event))
    }

    pub fn apply(&mut self, response: Response) -> Applied {
        self.loading.remove(&response.seq);
        self.document.set_loading(self.is_loading());

        let current = self.latest.get(&response.region) == Some(&response.seq);

        // Failures are reported even when superseded; they never render.
        match response.outcome {
            Err(error) => Applied::Failed {
                what: response.request.describe(),
                error,
            },
            Ok(_) if !current => Applied::Stale,
            Ok(payload) => {
                self.render(response.region, payload);
                Applied::Rendered(response.region)
            }
        }
    }

    fn issue(&mut self, request: Request) -> Ticket {
        let region = target_region(&request);
        let seq = self.bump(region);
        if request.shows_loading() {
            self.loading.insert(seq);
            self.document.set_loading(true);
        }
        Ticket {
            seq,
            region,
            request,
        }
    }

    // Any write to a region makes responses still in flight for it stale.
    fn bump(&mut self, region: Region) -> u64 {
        self.next_seq += 1;
        self.latest.insert(region, self.next_seq);
        self.next_seq
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::MarkActive(page) => self.document.set_active_page(page),
            Command::ClearPagination => {
                self.bump(Region::Pagination);
                self.document.clear(Region::Pagination);
            }
            Command::ShowTeamBuilder => {
                self.bump(Region::PageContent);
                self.document
                    .replace(Region::PageContent, team_builder_notice());
            }
            Command::SetSearchInput(value) => self.document.set_search_input(&value),
            Command::ClearSearchInput => self.document.set_search_input(""),
            Command::HideSearchResults => {
                self.bump(Region::SearchResults);
                self.document.hide_search_results();
            }
            Command::CloseModal => {
                self.bump(Region::ChampionDetail);
                self.document.close_modal();
            }
            Command::Fetch(_) => {}
        }
    }

    fn render(&mut self, region: Region, payload: Payload) {
        match payload {
            Payload::Version(info) => self.document.replace(region, version_header(&info)),
            Payload::Champions(page) => {
                self.document
                    .replace(region, champion_grid(&page.champions));
                self.document
                    .replace(Region::Pagination, pagination(page.pagination.as_ref()));
                if let Some(p) = page.pagination {
                    self.state.total_champions_pages = p.total_pages.max(1);
                    self.state.champions_page = p.current_page.clamp(1, self.state.total_champions_pages);
                }
            }
            Payload::ChampionDetail(detail) => {
                self.document
                    .replace(region, champion_detail(&detail, &self.ctx));
                self.document.open_modal();
            }
            Payload::TierList(tiers) => self.document.replace(region, tier_list(&tiers.tier_list)),
            Payload::SynergyMatrix(data) => self
                .document
                .replace(region, matrix(MatrixKind::Synergy, &data, &self.ctx)),
            Payload::MatchupMatrix(data) => self
                .document
                .replace(region, matrix(MatrixKind::Matchup, &data, &self.ctx)),
            Payload::Search(found) => {
                let view = search_results(&found.results, &self.ctx);
                if view.is_empty() {
                    self.document.replace(region, View::empty());
                    self.document.hide_search_results();
                } else {
                    self.document.replace(region, view);
                    self.document.show_search_results();
                }
            }
        }
    }
}

/// Region a request's response is rendered into.
pub fn target_region(request: &Request) -> Region {
    match request {
        Request::Version => Region::VersionInfo,
        Request::ChampionDetail { .. } => Region::ChampionDetail,
        Request::Search { .. } => Region::SearchResults,
        Request::Champions(_)
        | Request::TierList { .. }
        | Request::SynergyMatrix { .. }
        | Request::MatchupMatrix { .. } => Region::PageContent,
    }
}
