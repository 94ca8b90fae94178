#[cfg(all(feature = "mimalloc", not(target_family = "wasm")))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io::{self, BufReader};

use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use runas_ucd::{Query, UcdConfig, provider};

#[derive(Parser)]
#[command(name = "runas")]
#[command(about = "Find Unicode characters by the words in their names", long_about = None)]
#[command(version)]
#[command(after_help = "\
Every query word must appear in the character name (hyphens split words).
The database is read from $UCD_PATH, or ~/UnicodeData.txt, and downloaded
from unicode.org when missing.")]
struct Cli {
    /// Enable debug logging
    #[arg(long = "debug", hide = true)]
    debug: bool,

    /// Words to look for, e.g. `cat smiling`
    #[arg(
        value_name = "WORD",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    query: Vec<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug; RUST_LOG overrides either.
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    let config = UcdConfig::from_env()?;
    log::debug!("database {} (source {})", config.path.display(), config.url);
    let ucd = provider::open(&config)?;

    let query = Query::new(&cli.query.join(" "));
    if query.is_empty() {
        log::debug!("query {:?} has no words", cli.query);
    }
    let stdout = io::stdout();
    runas_ucd::list(BufReader::new(ucd), &query, &mut stdout.lock())?;
    Ok(())
}
