use brandkit::{
    catalog,
    hostinger::pages,
    logger::{self, LogLevel, LoggerConfig},
    AssetSaver, BatchDriver, DnsClient, GeminiConfig, HostingerConfig, ImageClient,
};
use clap::{builder::PossibleValuesParser, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "brandkit")]
#[command(version, about = "Website image assets and GitHub Pages DNS setup", long_about = None)]
struct Cli {
    /// Log at debug level with source locations
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Also append log lines to this file
    #[arg(long, global = true)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate image assets for one or more named batches
    Assets {
        /// Batches to run, in order
        #[arg(
            value_parser = PossibleValuesParser::new(catalog::names()),
            required_unless_present_any = ["all", "list"]
        )]
        batches: Vec<String>,

        /// Run every batch except retries
        #[arg(long, conflicts_with = "batches")]
        all: bool,

        /// List batches and exit
        #[arg(long)]
        list: bool,

        /// Directory that relative output paths are written under
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Point the domain's apex A records at GitHub Pages
    ///
    /// Without --apply this only reads the current records and prints the
    /// proposed change set.
    Dns {
        /// Domain to configure
        #[arg(long, default_value = pages::DEFAULT_DOMAIN)]
        domain: String,

        /// Send the update to the registrar
        #[arg(long)]
        apply: bool,
    },
}

fn logger_config(cli: &Cli) -> LoggerConfig {
    let mut config = if cli.verbose {
        LoggerConfig::verbose()
    } else {
        LoggerConfig::default()
    };

    if !cli.verbose {
        if let Some(level) = std::env::var("BRANDKIT_LOG")
            .ok()
            .and_then(|raw| raw.parse::<LogLevel>().ok())
        {
            config = config.with_level(level);
        }
    }
    if cli.json_logs {
        config = config.with_json_output(true);
    }
    if let Some(path) = &cli.log_file {
        config = config.with_file_output(path);
    }
    config
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let dotenv_loaded = dotenv::dotenv().is_ok();

    if let Err(e) = logger::init_with_config(logger_config(&cli)) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    if dotenv_loaded {
        log::debug!("✅ .env file loaded");
    }

    match cli.command {
        Command::Assets {
            batches,
            all,
            list,
            out_dir,
        } => {
            if list {
                list_batches();
                return ExitCode::SUCCESS;
            }
            let selected: Vec<String> = if all {
                catalog::all_names().into_iter().map(String::from).collect()
            } else {
                batches
            };
            run_assets(&selected, out_dir).await
        }
        Command::Dns { domain, apply } => run_dns(&domain, apply).await,
    }
}

fn list_batches() {
    for batch in catalog::BATCHES {
        let note = if batch.in_all { "" } else { " (not in --all)" };
        println!(
            "{:<14} {} task(s)  {}{}",
            batch.name,
            batch.len(),
            batch.description,
            note
        );
    }
}

async fn run_assets(selected: &[String], out_dir: Option<PathBuf>) -> ExitCode {
    let config = match GeminiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}. Please set it in the environment or a .env file.", e);
            return ExitCode::FAILURE;
        }
    };
    logger::log_gemini_config(&config);

    let client = match ImageClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Failed to initialize image client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let saver = match out_dir {
        Some(dir) => AssetSaver::new().with_root(dir),
        None => AssetSaver::new(),
    };
    let driver = BatchDriver::new(&client, saver);

    for name in selected {
        let Some(batch) = catalog::find(name) else {
            log::error!("❌ Unknown batch: {}", name);
            continue;
        };
        log::info!("🎨 Batch '{}': {} task(s)", batch.name, batch.len());
        driver.run(&batch.tasks()).await;
    }

    // Per-task failures are already logged; they do not change the exit status.
    ExitCode::SUCCESS
}

async fn run_dns(domain: &str, apply: bool) -> ExitCode {
    let config = match HostingerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}. Please set it in the environment or a .env file.", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match DnsClient::new(config) {
        Ok(client) => pages::configure(&client, domain, apply).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("❌ DNS configuration failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
