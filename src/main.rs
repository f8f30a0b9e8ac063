use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures::future::join_all;
use tracing::{debug, info};

use songkhla_guide::api::AppState;
use songkhla_guide::shell::Shell;
use songkhla_guide::{
    AnyListScreen, Category, CollectionSource, GuideConfig, GuideError, MemorySource, Platform,
    SimulatedWeather, SupabaseClient, SystemLauncher, WeatherBadge, WeatherSource, telemetry, web,
};

/// Songkhla province travel guide: attractions, food, temples and festivals
#[derive(Parser, Debug)]
#[command(name = "songkhla-guide", version, about)]
struct Cli {
    /// Config file (TOML); defaults to the user config directory
    #[arg(long, global = true, env = "SONGKHLA_GUIDE_CONFIG")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read collections from a JSON fixtures file instead of the remote store
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Map link flavour: ios or android
    #[arg(long, global = true)]
    platform: Option<Platform>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive guide: splash, home menu and list screens
    Browse,
    /// Print the list screen of one or more categories
    List {
        #[arg(required = true, num_args = 1..)]
        categories: Vec<Category>,
    },
    /// Serve the screens as a JSON API
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Show the weather badge
    Weather,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<GuideError>() {
                Some(guide_error) => eprintln!("Error: {}", guide_error.user_message()),
                None => eprintln!("Error: {e}"),
            }
            eprintln!("Details: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = GuideConfig::load_from_path(cli.config.clone())?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(platform) = cli.platform {
        config.display.platform = platform;
    }
    let _telemetry = telemetry::init(&config.logging)?;
    debug!("Loaded configuration: {:?}", config);

    let source: Arc<dyn CollectionSource> = match &cli.fixtures {
        Some(path) => {
            info!("Reading collections from fixtures {}", path.display());
            Arc::new(
                MemorySource::from_file(path)
                    .with_context(|| format!("Failed to load fixtures {}", path.display()))?,
            )
        }
        None => Arc::new(SupabaseClient::new(&config.store)?),
    };
    let weather: Arc<dyn WeatherSource> = Arc::new(SimulatedWeather);

    match cli.command {
        None => print_summary(&cli, &config),
        Some(Commands::Browse) => {
            let mut shell = Shell::new(
                source,
                weather,
                Arc::new(SystemLauncher),
                config.display.platform,
                config.timing.clone(),
                std::io::stdout(),
            );
            shell
                .run(tokio::io::BufReader::new(tokio::io::stdin()))
                .await?;
        }
        Some(Commands::List { categories }) => {
            let screens = categories.into_iter().map(|category| {
                let source = source.clone();
                let weather = weather.clone();
                let config = &config;
                async move {
                    let mut screen =
                        AnyListScreen::mount(category, source, config.display.platform);
                    let mut badge = WeatherBadge::mount(weather, config.timing.weather_delay());
                    let (_, state) = tokio::join!(screen.settled(), badge.revealed());
                    screen.view(state)
                }
            });
            for view in join_all(screens).await {
                println!("{view}");
            }
        }
        Some(Commands::Serve { port }) => {
            let mut server = config.server.clone();
            if let Some(port) = port {
                server.port = port;
            }
            let state = AppState {
                source,
                weather,
                platform: config.display.platform,
                timing: config.timing.clone(),
            };
            web::run(&server, state).await?;
        }
        Some(Commands::Weather) => {
            let mut badge = WeatherBadge::mount(weather, config.timing.weather_delay());
            println!("{}", badge.revealed().await);
        }
    }

    Ok(())
}

fn print_summary(cli: &Cli, config: &GuideConfig) {
    println!("Songkhla Guide v{}", songkhla_guide::VERSION);
    println!();
    let config_path = cli
        .config
        .clone()
        .or_else(GuideConfig::get_config_path)
        .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
    println!("Using config from: {config_path}");
    match &cli.fixtures {
        Some(path) => println!("Data source: fixtures {}", path.display()),
        None => println!("Data source: {}", config.store.base_url),
    }
    println!("Map platform: {:?}", config.display.platform);
    println!("Log level: {}", config.logging.level);
    println!();
    println!("Categories: {}", Category::ALL.map(|c| c.slug()).join(", "));
    println!("Run `songkhla-guide browse` to explore, or `songkhla-guide list <category>`.");
}
