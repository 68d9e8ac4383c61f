use clap::{Parser, Subcommand};
use flightbench::cli as prog_cli;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct AppConfig {
    data_dir: Option<PathBuf>,
    results_dir: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    log_level: Option<String>,
}

fn load_config(cli_cfg: Option<PathBuf>) -> AppConfig {
    // Precedence: CLI > env > config files > defaults
    let mut cfg = AppConfig::default();
    let mut paths: Vec<PathBuf> = vec![];
    if let Some(p) = &cli_cfg {
        paths.push(p.clone());
    }
    if let Ok(p) = std::env::var("FLIGHTBENCH_CONFIG") {
        paths.push(PathBuf::from(p));
    }
    if let Ok(cur) = std::env::current_dir() {
        paths.push(cur.join("flightbench.toml"));
    }
    for p in paths {
        if p.exists() {
            if let Ok(s) = std::fs::read_to_string(&p) {
                if let Ok(file_cfg) = toml::from_str::<AppConfig>(&s) {
                    if cfg.data_dir.is_none() {
                        cfg.data_dir = file_cfg.data_dir;
                    }
                    if cfg.results_dir.is_none() {
                        cfg.results_dir = file_cfg.results_dir;
                    }
                    if cfg.log_dir.is_none() {
                        cfg.log_dir = file_cfg.log_dir;
                    }
                    if cfg.log_level.is_none() {
                        cfg.log_level = file_cfg.log_level;
                    }
                }
            }
        }
    }
    if cfg.data_dir.is_none() {
        if let Ok(s) = std::env::var("FLIGHTBENCH_DATA_DIR") {
            cfg.data_dir = Some(PathBuf::from(s));
        }
    }
    if cfg.results_dir.is_none() {
        if let Ok(s) = std::env::var("FLIGHTBENCH_RESULTS_DIR") {
            cfg.results_dir = Some(PathBuf::from(s));
        }
    }
    if cfg.log_dir.is_none() {
        if let Ok(s) = std::env::var("FLIGHTBENCH_LOG_DIR") {
            cfg.log_dir = Some(PathBuf::from(s));
        }
    }
    if cfg.log_level.is_none() {
        if let Ok(s) = std::env::var("FLIGHTBENCH_LOG_LEVEL") {
            cfg.log_level = Some(s);
        }
    }
    cfg
}

#[derive(Parser, Debug)]
#[command(
    name = "flightbench",
    version,
    about = "Insertion sort comparison (iterative vs recursive) over flight departure schedules",
    long_about = None
)]
struct Cli {
    /// Path to a config file (TOML)
    #[arg(long, help = "Path to a config file (TOML). If omitted, defaults are used.")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Run the benchmark over the reference dataset sizes")]
    Run {
        #[arg(long, help = "Directory holding flight_schedule_{n}.csv files")]
        data_dir: Option<PathBuf>,
        #[arg(long, help = "Directory for the timestamped results CSV")]
        results_dir: Option<PathBuf>,
        #[arg(long, help = "Generate datasets in memory instead of reading CSV files")]
        synthetic: bool,
        #[arg(long, help = "Disable pacing pauses and the live chart")]
        headless: bool,
        #[arg(long, help = "Do not persist a results CSV")]
        no_results: bool,
    },
    #[command(about = "Generate synthetic schedule CSVs for the reference sizes")]
    Generate {
        #[arg(long, help = "Directory to write flight_schedule_{n}.csv files into")]
        data_dir: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let cfg = load_config(cli.config.clone());
    flightbench::logger::configure_logging(cfg.log_dir.as_deref(), cfg.log_level.as_deref(), None);

    let cmd = match cli.command {
        Commands::Run { data_dir, results_dir, synthetic, headless, no_results } => {
            prog_cli::Command::Run {
                data_dir: data_dir
                    .or_else(|| cfg.data_dir.clone())
                    .unwrap_or_else(|| PathBuf::from("flight_data")),
                results_dir: results_dir
                    .or_else(|| cfg.results_dir.clone())
                    .unwrap_or_else(|| PathBuf::from("results")),
                synthetic,
                headless,
                write_results: !no_results,
            }
        }
        Commands::Generate { data_dir } => prog_cli::Command::Generate {
            data_dir: data_dir
                .or_else(|| cfg.data_dir.clone())
                .unwrap_or_else(|| PathBuf::from("flight_data")),
        },
    };

    if let Err(e) = prog_cli::run(cmd) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
