// Request execution off the control thread.
// Each ticket runs on its own short-lived worker; results come back over a
// channel and are applied by the controller in arrival order.

use crate::api::{Payload, Request, StatsApi};
use crate::display::output::display_error;
use crate::error::AppError;
use crate::view::{Applied, Controller, Region};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A request tagged with the region it renders into and its sequence number.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub seq: u64,
    pub region: Region,
    pub request: Request,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub seq: u64,
    pub region: Region,
    pub request: Request,
    pub outcome: Result<Payload, AppError>,
}

impl Ticket {
    pub fn run(self, api: &dyn StatsApi) -> Response {
        let outcome = self.request.execute(api);
        Response {
            seq: self.seq,
            region: self.region,
            request: self.request,
            outcome,
        }
    }
}

pub struct Runtime {
    api: Arc<dyn StatsApi>,
    sender: Sender<Response>,
    receiver: Receiver<Response>,
    in_flight: usize,
    spinner: Option<ProgressBar>,
}

impl Runtime {
    pub fn new(api: Arc<dyn StatsApi>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Runtime {
            api,
            sender,
            receiver,
            in_flight: 0,
            spinner: None,
        }
    }

    /// Shows a terminal spinner while loading requests are outstanding.
    pub fn with_spinner(mut self) -> Self {
        let spinner = ProgressBar::hidden();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        self.spinner = Some(spinner);
        self
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn submit(&mut self, tickets: Vec<Ticket>) {
        for ticket in tickets {
            if ticket.request.shows_loading() {
                self.spin(ticket.request.describe());
            }

            let api = Arc::clone(&self.api);
            let sender = self.sender.clone();
            self.in_flight += 1;
            thread::spawn(move || {
                // The receiver only goes away with the runtime itself.
                let _ = sender.send(ticket.run(api.as_ref()));
            });
        }
    }

    /// Blocks until every submitted ticket has reported back, applying each
    /// response as it arrives. Failures are logged and leave the view as is.
    pub fn settle(&mut self, controller: &mut Controller) -> Vec<Applied> {
        let mut applied = Vec::with_capacity(self.in_flight);

        while self.in_flight > 0 {
            let Ok(response) = self.receiver.recv() else {
                break;
            };
            self.in_flight -= 1;

            let outcome = controller.apply(response);
            if let Applied::Failed { what, error } = &outcome {
                self.pause_spinner();
                display_error(&format!("{} failed: {}", what, error));
            }
            if !controller.is_loading() {
                self.pause_spinner();
            }
            applied.push(outcome);
        }

        self.pause_spinner();
        applied
    }

    fn spin(&self, message: &'static str) {
        if let Some(spinner) = &self.spinner {
            if spinner.is_hidden() {
                spinner.set_draw_target(indicatif::ProgressDrawTarget::stderr());
                spinner.enable_steady_tick(Duration::from_millis(100));
            }
            spinner.set_message(message);
        }
    }

    fn pause_spinner(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.disable_steady_tick();
            spinner.set_draw_target(indicatif::ProgressDrawTarget::hidden());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::*;
    use crate::api::ChampionQuery;
    use crate::render::RenderContext;
    use crate::view::Event;

    struct Offline;

    impl StatsApi for Offline {
        fn version(&self) -> Result<VersionInfo, AppError> {
            Ok(VersionInfo {
                api_version: "1.0".to_string(),
                ..VersionInfo::default()
            })
        }
        fn champions(&self, _: &ChampionQuery) -> Result<ChampionPage, AppError> {
            Err(AppError::HttpError("offline".to_string()))
        }
        fn champion_detail(&self, _: &str) -> Result<ChampionDetail, AppError> {
            Err(AppError::HttpError("offline".to_string()))
        }
        fn tier_list(&self, _: Option<&str>) -> Result<TierListResponse, AppError> {
            Ok(TierListResponse::default())
        }
        fn synergy_matrix(&self, _: u32) -> Result<MatrixPayload, AppError> {
            Ok(MatrixPayload::default())
        }
        fn matchup_matrix(&self, _: u32) -> Result<MatrixPayload, AppError> {
            Ok(MatrixPayload::default())
        }
        fn search(&self, _: &str) -> Result<SearchResponse, AppError> {
            Ok(SearchResponse::default())
        }
        fn items(&self) -> Result<ItemsResponse, AppError> {
            Ok(ItemsResponse::default())
        }
        fn runes(&self) -> Result<RunesResponse, AppError> {
            Ok(RunesResponse::default())
        }
    }

    #[test]
    fn settle_drains_every_ticket() {
        let mut runtime = Runtime::new(Arc::new(Offline));
        let mut controller = Controller::new(RenderContext::default());

        runtime.submit(controller.handle(Event::Init));
        assert_eq!(runtime.in_flight(), 2);

        let applied = runtime.settle(&mut controller);
        assert_eq!(applied.len(), 2);
        assert_eq!(runtime.in_flight(), 0);
        assert!(applied.contains(&Applied::Rendered(Region::VersionInfo)));
        assert!(applied
            .iter()
            .any(|a| matches!(a, Applied::Failed { what: "Loading champion list", .. })));
        assert!(!controller.is_loading());
    }
}
