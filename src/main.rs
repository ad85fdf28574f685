use anyhow::{Context, Result};
use aram_dashboard::api::client::StatsApiClient;
use aram_dashboard::api::StatsApi;
use aram_dashboard::config::{parse_rate, Config};
use aram_dashboard::dispatch::Runtime;
use aram_dashboard::display::output::{
    display_error, display_info, display_search_hits, display_success, display_version,
};
use aram_dashboard::lookup::{Catalog, ALL_TYPES, DEFAULT_SORT};
use aram_dashboard::render::RenderContext;
use aram_dashboard::view::{Controller, Event, NavigationState, Page};
use aram_dashboard::wiring::{run_search, Session};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "ARAM Dashboard")]
#[command(about = "Browse ARAM champion statistics as a generated HTML dashboard", long_about = None)]
struct Cli {
    /// Stats backend base URL (overrides ARAM_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Directory the index.html snapshot is written to
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Data Dragon version used for champion and item icons
    #[arg(long, global = true)]
    ddragon_version: Option<String>,

    /// Maximum backend requests per second
    #[arg(long, global = true, value_parser = parse_rps)]
    rps: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session (default)
    Interactive,

    /// Render one page of the champion list
    Champions {
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Champion type, e.g. 坦克 (default: 全部)
        #[arg(short = 't', long = "type", default_value = ALL_TYPES)]
        champion_type: String,

        /// Sort key: 勝率, 選用率 or KDA
        #[arg(short, long, default_value = DEFAULT_SORT)]
        sort: String,
    },

    /// Render the tier list
    Tiers {
        #[arg(short = 't', long = "type", default_value = ALL_TYPES)]
        champion_type: String,
    },

    /// Render the synergy matrix
    Synergy,

    /// Render the matchup matrix
    Matchup,

    /// Render the team builder page
    TeamBuilder,

    /// Render one champion's detail
    Detail { champion_id: String },

    /// Search champions by name
    Search { query: String },

    /// Show backend version info
    Version,
}

fn parse_rps(raw: &str) -> Result<u32, String> {
    parse_rate(raw).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(out) = cli.out {
        config.output_dir = out;
    }
    if let Some(version) = cli.ddragon_version {
        config.ddragon_version = version;
    }
    if let Some(rps) = cli.rps {
        config.requests_per_second = rps;
    }

    let api: Arc<dyn StatsApi> = Arc::new(StatsApiClient::new(&config));
    let command = cli.command.unwrap_or(Command::Interactive);

    match command {
        Command::Version => {
            let info = api
                .version()
                .with_context(|| format!("Could not reach {}", config.api_base_url))?;
            display_version(&info);
            Ok(())
        }
        Command::Search { query } => {
            let ctx = RenderContext::new(&config.ddragon_version, Catalog::default());
            let mut controller = Controller::new(ctx);
            let hits = run_search(&mut controller, api.as_ref(), &query).context("Search failed")?;
            display_search_hits(&query, &hits);

            let path = controller
                .document()
                .save(&config.output_dir, controller.state())
                .with_context(|| format!("Failed to write snapshot to {}", config.output_dir.display()))?;
            display_success(&format!("Dashboard written to {}", path.display()));
            Ok(())
        }
        Command::Interactive => {
            display_info(&format!("Connecting to {}", config.api_base_url));
            let ctx = RenderContext::new(&config.ddragon_version, Catalog::fetch(api.as_ref()));
            let controller = Controller::new(ctx);
            let runtime = Runtime::new(api).with_spinner();
            let mut session = Session::new(controller, runtime, &config.output_dir);
            session
                .run(std::io::stdin().lock())
                .context("Interactive session ended unexpectedly")?;
            Ok(())
        }
        Command::Champions {
            page,
            champion_type,
            sort,
        } => {
            let state = NavigationState {
                champion_type,
                sort,
                ..NavigationState::default()
            };
            render_once(&config, api, state, Event::SelectPage(page))
        }
        Command::Tiers { champion_type } => {
            let state = NavigationState {
                champion_type,
                ..NavigationState::default()
            };
            render_once(&config, api, state, Event::Navigate(Page::TierList))
        }
        Command::Synergy => render_once(
            &config,
            api,
            NavigationState::default(),
            Event::Navigate(Page::Synergy),
        ),
        Command::Matchup => render_once(
            &config,
            api,
            NavigationState::default(),
            Event::Navigate(Page::Matchup),
        ),
        Command::TeamBuilder => render_once(
            &config,
            api,
            NavigationState::default(),
            Event::Navigate(Page::TeamBuilder),
        ),
        Command::Detail { champion_id } => {
            render_once(&config, api, NavigationState::default(), Event::OpenChampion(champion_id))
        }
    }
}

/// Fires a single event, waits for its fetches and writes the snapshot.
fn render_once(
    config: &Config,
    api: Arc<dyn StatsApi>,
    state: NavigationState,
    event: Event,
) -> Result<()> {
    let catalog = match event {
        Event::OpenChampion(_) => Catalog::fetch(api.as_ref()),
        _ => Catalog::default(),
    };
    let ctx = RenderContext::new(&config.ddragon_version, catalog);
    let controller = Controller::with_state(ctx, state);
    let mut session = Session::new(controller, Runtime::new(api), &config.output_dir);

    let path = session
        .dispatch(event)
        .with_context(|| format!("Failed to write snapshot to {}", config.output_dir.display()))?;
    display_success(&format!("Dashboard written to {}", path.display()));
    Ok(())
}
