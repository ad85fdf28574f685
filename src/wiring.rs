// Interactive session: turns typed commands into view events, runs the
// fetches they imply and rewrites the HTML snapshot after every line.

use crate::api::models::SearchHit;
use crate::api::{Payload, StatsApi};
use crate::dispatch::Runtime;
use crate::display::output::{display_info, display_success, display_targets, display_warning};
use crate::error::AppError;
use crate::lookup::{CHAMPION_TYPES, SORT_KEYS};
use crate::view::{Controller, Event, NavigationState, Page};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const PROMPT: &str = "aram> ";

pub const HELP: &str = "\
Commands (separate several with ';'):
  nav <page>        champions | tier-list | team-builder | synergy | matchup
  page <n>          jump to a champions page
  next / prev       step through champions pages
  type <type>       全部 坦克 戰士 刺客 法師 輔助 射手
  sort <key>        勝率 選用率 KDA
  search [query]    incremental search; no query hides the results
  open <id>         open a champion's detail
  select <id>       pick a search result
  click <target>    fire whatever is bound to a target
  close             close the detail modal
  dismiss           hide search results
  targets           list clickable targets
  help              this text
  quit              leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Dispatch(Event),
    Click(String),
    Targets,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parses one command. `next`/`prev` need the current page to resolve.
pub fn parse_command(input: &str, state: &NavigationState) -> Result<Action, AppError> {
    let input = input.trim();
    let (verb, rest) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (input, ""),
    };

    let action = match verb {
        "nav" => Action::Dispatch(Event::Navigate(argument(verb, rest)?.parse::<Page>()?)),
        "page" => {
            let raw = argument(verb, rest)?;
            let page = raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| AppError::InvalidCommand(format!("'{}' is not a page number", raw)))?;
            Action::Dispatch(Event::SelectPage(page))
        }
        "next" => {
            if state.champions_page >= state.total_champions_pages {
                return Err(AppError::InvalidCommand("already on the last page".to_string()));
            }
            Action::Dispatch(Event::SelectPage(state.champions_page + 1))
        }
        "prev" => {
            if state.champions_page <= 1 {
                return Err(AppError::InvalidCommand("already on the first page".to_string()));
            }
            Action::Dispatch(Event::SelectPage(state.champions_page - 1))
        }
        "type" => Action::Dispatch(Event::ChangeType(one_of(
            argument(verb, rest)?,
            &CHAMPION_TYPES,
        )?)),
        "sort" => Action::Dispatch(Event::ChangeSort(one_of(argument(verb, rest)?, &SORT_KEYS)?)),
        "search" => Action::Dispatch(Event::SearchInput(rest.to_string())),
        "open" => Action::Dispatch(Event::OpenChampion(argument(verb, rest)?.to_string())),
        "select" => Action::Dispatch(Event::SelectSearchResult(argument(verb, rest)?.to_string())),
        "click" => Action::Click(argument(verb, rest)?.to_string()),
        "close" => Action::Dispatch(Event::CloseModal),
        "dismiss" => Action::Dispatch(Event::DismissSearch),
        "targets" => Action::Targets,
        "help" | "?" => Action::Help,
        "quit" | "exit" => Action::Quit,
        other => {
            return Err(AppError::InvalidCommand(format!(
                "unknown command '{}', try 'help'",
                other
            )))
        }
    };

    Ok(action)
}

fn argument<'a>(verb: &str, rest: &'a str) -> Result<&'a str, AppError> {
    if rest.is_empty() {
        Err(AppError::InvalidCommand(format!("'{}' needs an argument", verb)))
    } else {
        Ok(rest)
    }
}

fn one_of(value: &str, allowed: &[&str]) -> Result<String, AppError> {
    if allowed.contains(&value) {
        Ok(value.to_string())
    } else {
        Err(AppError::InvalidCommand(format!(
            "'{}' is not one of {}",
            value,
            allowed.join(", ")
        )))
    }
}

/// Runs a search on the calling thread: the hits are applied to the document
/// and also handed back for the terminal table. A blank query fetches nothing.
pub fn run_search(
    controller: &mut Controller,
    api: &dyn StatsApi,
    query: &str,
) -> Result<Vec<SearchHit>, AppError> {
    let mut hits = Vec::new();
    for ticket in controller.handle(Event::SearchInput(query.to_string())) {
        let response = ticket.run(api);
        match &response.outcome {
            Ok(Payload::Search(found)) => hits = found.results.clone(),
            Ok(_) => {}
            Err(e) => return Err(e.clone()),
        }
        controller.apply(response);
    }
    Ok(hits)
}

pub struct Session {
    controller: Controller,
    runtime: Runtime,
    output_dir: PathBuf,
}

impl Session {
    pub fn new(controller: Controller, runtime: Runtime, output_dir: &Path) -> Self {
        Session {
            controller,
            runtime,
            output_dir: output_dir.to_path_buf(),
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Fires one event and waits for its fetches.
    pub fn dispatch(&mut self, event: Event) -> Result<PathBuf, AppError> {
        let tickets = self.controller.handle(event);
        self.runtime.submit(tickets);
        self.runtime.settle(&mut self.controller);
        self.snapshot()
    }

    /// Runs every command on the line back to back, then settles and saves.
    /// A bad command stops the rest of the line; earlier ones still apply.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow, AppError> {
        let mut flow = Flow::Continue;
        let mut failure = None;

        for command in line.split(';').map(str::trim).filter(|c| !c.is_empty()) {
            match parse_command(command, self.controller.state()) {
                Ok(Action::Dispatch(event)) => {
                    let tickets = self.controller.handle(event);
                    self.runtime.submit(tickets);
                }
                Ok(Action::Click(target)) => match self.controller.click(&target) {
                    Ok(tickets) => self.runtime.submit(tickets),
                    Err(e) => {
                        failure = Some(e);
                        break;
                    }
                },
                Ok(Action::Targets) => display_targets(&self.controller.document().targets()),
                Ok(Action::Help) => println!("{}", HELP),
                Ok(Action::Quit) => {
                    flow = Flow::Quit;
                    break;
                }
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        self.runtime.settle(&mut self.controller);
        self.snapshot()?;

        match failure {
            Some(e) => Err(e),
            None => Ok(flow),
        }
    }

    /// Paints the first page, then reads commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), AppError> {
        let path = self.dispatch(Event::Init)?;
        display_success(&format!("Dashboard written to {}", path.display()));
        display_info("Type 'help' for commands");

        prompt()?;
        for line in input.lines() {
            match self.execute_line(&line?) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e @ AppError::InvalidCommand(_)) => display_warning(&e.to_string()),
                Err(e) => return Err(e),
            }
            prompt()?;
        }
        Ok(())
    }

    fn snapshot(&self) -> Result<PathBuf, AppError> {
        self.controller
            .document()
            .save(&self.output_dir, self.controller.state())
    }
}

fn prompt() -> Result<(), AppError> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()?;
    Ok(())
}
