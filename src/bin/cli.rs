//! Livewatch CLI
//!
//! Command-line front end for the live-stream monitor:
//! - Watch a live dashboard in the terminal
//! - List and inspect tracked streamers
//! - Show statistics and scan history
//! - Trigger a live search

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use livewatch::api::{push_channel_url, DashboardApi, HistoryQuery, HttpClient, StreamerQuery};
use livewatch::channel::{ChannelError, PushChannel};
use livewatch::config::{generate_default_config, Config};
use livewatch::format::success_rate;
use livewatch::render::terminal::{scan_list, statistics_block, streamer_detail, streamer_table};
use livewatch::render::terminal::TerminalRenderer;
use livewatch::{Dashboard, LiveFilter, Pagination, StatsView, StreamerFilter};

#[derive(Parser)]
#[command(name = "livewatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dashboard client for the live-stream monitor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config and LIVEWATCH_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Live dashboard: initial load, push updates, auto-refresh
    Watch {
        /// Only streamers found with this query
        #[arg(short, long)]
        query: Option<String>,
        /// Live status filter (all, live, offline)
        #[arg(short, long, default_value = "all")]
        live: LiveFilter,
    },

    /// List tracked streamers
    Streamers {
        /// Only streamers found with this query
        #[arg(short, long)]
        query: Option<String>,
        /// Live status filter (all, live, offline)
        #[arg(short, long, default_value = "all")]
        live: LiveFilter,
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: u64,
    },

    /// Show one streamer
    Streamer {
        /// Username, with or without the leading @
        username: String,
    },

    /// Aggregate statistics
    Stats {
        /// Window in hours (default: from config)
        #[arg(long)]
        hours: Option<u32>,
    },

    /// Recent scans
    History {
        #[arg(short, long)]
        limit: Option<u64>,
        #[arg(short, long, default_value = "0")]
        offset: u64,
    },

    /// Search queries known to the backend
    Queries,

    /// Ask the backend to scan for live streamers now
    Search {
        query: String,
    },

    /// Backend health
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.server.base_url = url.clone();
    }
    livewatch::logging::init(&config.logging);

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &content)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let api = HttpClient::new(&config.server.base_url, config.request_timeout())?;
    let settings = config.dashboard_settings();

    match cli.command {
        Commands::Watch { query, live } => {
            let mut filter = StreamerFilter::default();
            filter.set_query(query);
            filter.live = live;
            // The stdin reader cannot be cancelled and would hold the runtime open
            let code = match watch(api, &config, filter).await {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    1
                }
            };
            std::process::exit(code);
        }

        Commands::Streamers { query, live, page } => {
            let mut filter = StreamerFilter::default();
            filter.set_query(query);
            filter.live = live;

            let mut pager = Pagination::new(settings.page_size);
            let request = StreamerQuery {
                limit: pager.page_size(),
                offset: page.saturating_sub(1) * pager.page_size(),
                filter,
            };
            let result = api
                .streamers(&request)
                .await
                .context("Error loading streamers")?;

            if cli.format == OutputFormat::Json {
                print_json(&result)?;
            } else {
                pager.set_total(result.total);
                for _ in 1..page {
                    pager.next();
                }
                print!("{}", streamer_table(&result.items, &pager));
            }
        }

        Commands::Streamer { username } => {
            let streamer = api
                .streamer(&username)
                .await
                .with_context(|| format!("Error loading @{}", username.trim_start_matches('@')))?;

            if cli.format == OutputFormat::Json {
                print_json(&streamer)?;
            } else {
                print!("{}", streamer_detail(&streamer));
            }
        }

        Commands::Stats { hours } => {
            let hours = hours.unwrap_or(settings.stats_hours);
            let stats = api
                .statistics(hours)
                .await
                .context("Error loading statistics")?;

            if cli.format == OutputFormat::Json {
                print_json(&stats)?;
            } else {
                println!("Last {} hours", hours);
                println!();
                print!("{}", statistics_block(&StatsView::from_statistics(&stats)));
            }
        }

        Commands::History { limit, offset } => {
            let query = HistoryQuery {
                limit: limit.unwrap_or(settings.history_limit),
                offset,
            };
            let page = api
                .scan_history(query)
                .await
                .context("Error loading scan history")?;

            if cli.format == OutputFormat::Json {
                print_json(&page)?;
            } else {
                let ok = page.items.iter().filter(|s| s.success).count() as u64;
                print!("{}", scan_list(&page.items));
                println!();
                println!(
                    "{} of {} scans shown, {}% successful",
                    page.items.len(),
                    page.total,
                    success_rate(ok, page.items.len() as u64)
                );
            }
        }

        Commands::Queries => {
            let queries = api.queries().await.context("Error loading queries")?;

            if cli.format == OutputFormat::Json {
                print_json(&queries)?;
            } else if queries.is_empty() {
                println!("No search queries configured on the backend.");
            } else {
                for q in queries {
                    println!("{}", q);
                }
            }
        }

        Commands::Search { query } => {
            let query = query.trim();
            if query.is_empty() {
                anyhow::bail!("Enter a search query first");
            }
            let result = api.search_live(query).await.context("Search failed")?;

            if cli.format == OutputFormat::Json {
                print_json(&result)?;
            } else {
                println!(
                    "Found {} live streamers for \"{}\"",
                    result.total, result.query
                );
                for username in &result.streamers {
                    println!("  @{}", username);
                }
            }
        }

        Commands::Status => match api.health().await {
            Ok(health) => {
                if cli.format == OutputFormat::Json {
                    print_json(&health)?;
                } else {
                    println!("Livewatch v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!("Backend:     {}", api.base_url());
                    println!("Status:      {}", health.status);
                    println!(
                        "Scheduler:   {}",
                        if health.scheduler_running { "running" } else { "stopped" }
                    );
                    println!("Interval:    {}", health.scrape_interval);
                    println!("Queries:     {}", health.queries.join(", "));
                }
            }
            Err(e) => {
                eprintln!("Cannot reach the monitoring backend at {}", api.base_url());
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Config { .. } => {}
    }

    Ok(())
}

/// Terminal dashboard. Runs until Ctrl-C, `q`, or the push channel gives up.
async fn watch(api: HttpClient, config: &Config, filter: StreamerFilter) -> anyhow::Result<()> {
    let settings = config.dashboard_settings();
    let dashboard = Dashboard::new(api, TerminalRenderer::stdout(), settings);

    dashboard.set_filter(filter);
    dashboard.load_initial().await;

    println!();
    println!("Commands: n (next page), p (previous page), r (refresh), s <query> (search now), q (quit)");

    let channel = PushChannel::new(
        push_channel_url(&config.server.base_url),
        settings.heartbeat_interval,
    );

    let auto_refresh = async {
        let mut ticker = tokio::time::interval(settings.refresh_interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            dashboard.auto_refresh().await;
        }
    };

    let commands = async {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = line.trim();
            match line.split_once(' ').unwrap_or((line, "")) {
                ("n", _) => {
                    dashboard.next_page().await;
                }
                ("p", _) => {
                    dashboard.prev_page().await;
                }
                ("r", _) => dashboard.refresh().await,
                ("s", query) => dashboard.search_live(query).await,
                ("q", _) => break,
                ("", _) => {}
                (other, _) => println!("Unknown command: {}", other),
            }
        }
    };

    tokio::select! {
        result = channel.run(&dashboard) => match result {
            Err(ChannelError::ReconnectExhausted { attempts }) => {
                anyhow::bail!("Push channel lost after {} reconnect attempts", attempts);
            }
            other => other?,
        },
        _ = auto_refresh => {}
        _ = commands => {
            tracing::info!("Quit");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted");
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
