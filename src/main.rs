use clap::Parser;
use std::fs::File;
use std::io::{stdin, stdout};
use std::path::{Path, PathBuf};
use std::process::exit;
use tracing::{error, warn};
use treemirror::backup::journal::{Journal, DEFAULT_JOURNAL_FILE};
use treemirror::backup::menu;
use treemirror::backup::result_error::error::Error;
use treemirror::backup::result_error::result::Result;
use treemirror::backup::result_error::WithMsg;
use treemirror::backup::run_config::RunConfig;
use validator::Validate;

/// Directory backup tool with path exclusions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run one backup described by a YAML file instead of the menu
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Location of the error journal
    #[arg(short, long, default_value = DEFAULT_JOURNAL_FILE)]
    log_file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let journal = Journal::new(&args.log_file);

    let res = match &args.config {
        Some(config) => run_from_config(config, journal),
        None => menu::run(stdin().lock(), &mut stdout(), journal).map_err(Error::from),
    };

    if let Err(e) = res {
        error!("{e}");
        exit(1);
    }
}

fn run_from_config(path: &Path, journal: Journal) -> Result<()> {
    File::open(path)
        .map_err(Error::from)
        .and_then(|f| {
            serde_yml::from_reader::<_, RunConfig>(f)
                .map_err(Error::from)
                .with_msg(format!("Parse YAML config failed: {:?}", path))
        })
        .and_then(|rc| {
            rc.validate()
                .map_err(Error::from)
                .map(|_| rc)
                .with_msg(format!("Config validation failed: {:?}", path))
        })
        .and_then(|rc| rc.build_engine(journal))
        .map(|engine| {
            if let Some(faults) = engine.run() {
                warn!("Backup finished with faults: {faults}");
            }
            println!("Backup completed.");
        })
}
