use std::io;
use std::path::PathBuf;
use std::process;
use std::time::SystemTime;

use anyhow::{Context, Result};
use clap::Parser;
use combat::GameRng;
use hero::Hero;
use save::SaveSystem;
use terminal_rpg::{
    config::GameConfig,
    game_loop::GameLoop,
    input::ConsoleActions,
    logging,
    session::{GameData, Session},
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "terminal-rpg", version, about = "A small turn-based RPG for the terminal")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "rpg.toml")]
    config: PathBuf,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Save slot to load from and save to
    #[arg(long, default_value_t = 0)]
    slot: usize,

    /// Character name for a new game
    #[arg(long)]
    name: Option<String>,

    /// Ignore any existing save and start over
    #[arg(long)]
    new: bool,
}

fn time_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    (nanos ^ u128::from(process::id())) as u64
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;
    logging::init(&config.log.level)?;

    let seed = cli.seed.or(config.seed).unwrap_or_else(time_seed);
    let saves = SaveSystem::new(&config.save.dir, config.save.slots)
        .context("Failed to open save directory")?
        .with_format(config.save.format);
    let data = GameData::standard(&config.rules);
    let rng = GameRng::new(seed);
    info!(seed, slot = cli.slot, "starting");

    let stdin = io::stdin();
    let mut console = ConsoleActions::new(stdin.lock(), io::stdout());

    let existing = if cli.new {
        None
    } else {
        saves
            .load_game(cli.slot)
            .with_context(|| format!("Failed to load slot {}", cli.slot))?
    };

    let session = match existing {
        Some(save) => {
            let session = Session::from_save(save, &data, config.rules.clone(), rng)?;
            println!("Welcome back, {}!", session.hero().stats.name);
            session
        }
        None => {
            let name = match cli.name {
                Some(name) => name,
                None => console.ask("Enter your character's name:\n> ")?,
            };
            let name = if name.trim().is_empty() { "Hero".to_string() } else { name };
            println!("Welcome, {name}! Your adventure begins...");
            Session::new(Hero::new(name), &data, config.rules.clone(), rng)?
        }
    };

    let mut game = GameLoop::new(session, console, saves, cli.slot);
    game.run()?;
    info!(game_over = game.session().is_game_over(), "session ended");
    Ok(())
}
