//! deleteweapons main entry point.
//!
//! Replays a match against a simulated game server with the cleanup plugin
//! loaded, then prints what the plugin did:
//!
//! - **bevy_ecs** hosts the simulated world (players, weapons, timers)
//! - the plugin sees the world only through its host traits
//!
//! # Running
//!
//! ```sh
//! # random match, 3 rounds, 5 players
//! cargo run --release
//! # scripted match
//! cargo run --release -- --scenario scenarios/pistol_round.json
//! ```

use clap::Parser;
use deleteweapons::matchsim::MatchSim;
use deleteweapons::resources::sweepconfig::SweepConfig;
use deleteweapons::scenario::Scenario;
use deleteweapons::sweeper::plugin::PLUGIN_INFO;
use std::path::PathBuf;

/// Removes dropped weapons after round start and player spawns.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./deleteweapons.ini")]
    config: PathBuf,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,

    /// Replay a JSON scenario instead of generating a random match.
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,

    /// Rounds in a generated match.
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    /// Players in a generated match.
    #[arg(long, default_value_t = 5)]
    players: u32,

    /// Seed for a generated match. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the generated scenario as JSON and exit.
    #[arg(long)]
    dump_scenario: bool,

    /// Print plugin metadata and exit.
    #[arg(long)]
    info: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.info {
        println!("{} {}", PLUGIN_INFO.name, PLUGIN_INFO.version);
        println!("Author: {}", PLUGIN_INFO.author);
        println!("{}", PLUGIN_INFO.description);
        return;
    }

    let mut config = SweepConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    let scenario = match &cli.scenario {
        Some(path) => match Scenario::from_file(path) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => {
            let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));
            log::info!("Generating match with seed {}", seed);
            Scenario::random(seed, cli.rounds, cli.players)
        }
    };

    if cli.dump_scenario {
        match scenario.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut sim = MatchSim::new(&config);
    match sim.run(&scenario) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("Error replaying scenario: {e}");
            std::process::exit(1);
        }
    }
}
