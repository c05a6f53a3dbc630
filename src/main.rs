//! # Considition Starter Kit Entry Point
//!
//! Parses the command line, sets up logging and the HTTP client, then either
//! plays a full game with the starter strategy or runs one of the
//! housekeeping commands.

use clap::{Parser, Subcommand};
use considition::{
    ClientConfig, ConsiditionResult, GameClient, GameSession, StarterStrategy, UreqTransport,
};
use log::{info, LevelFilter};
use std::path::PathBuf;

/// Command line arguments for the starter kit.
#[derive(Parser, Debug)]
#[command(name = "considition")]
#[command(about = "Starter kit bot for the Considition city building game")]
#[command(version)]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API key (overrides the config file)
    #[arg(long, env = "CONSIDITION_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the game API
    #[arg(long)]
    base_path: Option<String>,

    /// Map to play on
    #[arg(short, long)]
    map: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a game, play it with the starter strategy and print the score
    Play,
    /// List the games owned by this API key
    Games,
    /// End a game (the oldest one when no id is given)
    End {
        #[arg(long)]
        game_id: Option<String>,
    },
    /// Print the score of a finished game
    Score {
        #[arg(long)]
        game_id: Option<String>,
    },
    /// Print the current state of a game
    State {
        #[arg(long)]
        game_id: Option<String>,
    },
    /// Print the static info of a game
    Info {
        #[arg(long)]
        game_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ConsiditionResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Considition starter kit v{}", considition::VERSION);

    let config = build_config(&args)?;
    let client = GameClient::new(UreqTransport::new(&config.base_path), &config.api_key);

    match args.command.unwrap_or(Command::Play) {
        Command::Play => play(&client, &config).await,
        Command::Games => {
            for game in client.games().await? {
                println!(
                    "{}  active={} started={} started_at={}",
                    game.game_id,
                    game.active,
                    game.started,
                    game.started_at.as_deref().unwrap_or("-")
                );
            }
            Ok(())
        }
        Command::End { game_id } => {
            let game_id = game_id.or_else(|| config.game_id.clone());
            client.end_game(game_id.as_deref()).await?;
            info!("Game ended");
            Ok(())
        }
        Command::Score { game_id } => {
            let game_id = game_id.or_else(|| config.game_id.clone());
            let score = client.score(game_id.as_deref()).await?;
            print_json(&score)
        }
        Command::State { game_id } => {
            let game_id = game_id.or_else(|| config.game_id.clone());
            let state = client.game_state(game_id.as_deref()).await?;
            print_json(&state)
        }
        Command::Info { game_id } => {
            let game_id = game_id.or_else(|| config.game_id.clone());
            let info = client.game_info(game_id.as_deref()).await?;
            print_json(&info)
        }
    }
}

/// Initializes `env_logger` at the requested level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}

/// Merges the config file, the environment and the command line, in that order.
fn build_config(args: &Args) -> ConsiditionResult<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    }
    .with_env_overrides();

    if let Some(api_key) = &args.api_key {
        config.api_key = api_key.clone();
    }
    if let Some(base_path) = &args.base_path {
        config.base_path = base_path.clone();
    }
    if let Some(map) = &args.map {
        config.map_name = map.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Plays one full game, ending it on the server if anything goes wrong.
async fn play(client: &GameClient, config: &ClientConfig) -> ConsiditionResult<()> {
    let info = client.new_game(&config.map_name).await?;
    let mut session = GameSession::new(client, info);

    let score = session.play_or_end(&mut StarterStrategy::new()).await?;
    println!("Final total score was: {}", score.final_score);
    Ok(())
}

fn print_json(value: &impl serde::Serialize) -> ConsiditionResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
