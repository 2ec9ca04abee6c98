use anyhow::Context;
use codereading::cli::{self, CliOptions, Outcome};
use codereading::config::{Config, SettingsStore};
use codereading::error::{CodeReadingError, ErrorDisplay, ErrorLevel};
use codereading::logging::{self, LogLevel, Logger};
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(error) = run(&args) {
        report(&error);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let options = CliOptions::parse(args)?;
    if options.help {
        println!("{}", cli::USAGE);
        return Ok(());
    }
    if options.version {
        println!("codereading {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let logger = if options.verbose {
        Logger::from_env().with_level(LogLevel::Debug)
    } else {
        Logger::from_env()
    };
    logging::init(logger).context("failed to install logger")?;

    let (config, store) = match &options.config_dir {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            (
                Config::load(dir.join("config.json")),
                SettingsStore::new(dir.join("settings.json")),
            )
        }
        None => (Config::load_default(), SettingsStore::open_default()?),
    };
    let config = config.context("failed to load config.json")?;

    match cli::execute(&options, &config, &store)? {
        Outcome::Preview(text) => print!("{}", text),
        Outcome::Appended { log_file, lines } => {
            log::info!("wrote {} lines", lines);
            println!("{}", log_file.display());
        }
    }
    Ok(())
}

fn report(error: &anyhow::Error) {
    match error.downcast_ref::<CodeReadingError>() {
        Some(inner) => {
            let display = ErrorDisplay::new(inner);
            let tag = match display.level {
                ErrorLevel::Warning => "warning",
                ErrorLevel::Error => "error",
                ErrorLevel::Fatal => "fatal",
            };
            eprintln!("{}: {}", tag, display.message);
        }
        None => eprintln!("error: {}", error),
    }
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}
