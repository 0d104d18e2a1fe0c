use clap::Parser;
use imgproc::{ImageStore, StoreConfig};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod script;

#[derive(Parser, Debug)]
#[command(author, version, about = "imgproc CLI (command script driven)")]
struct Cli {
    /// Path to a command script to run.
    #[arg(short, long, value_name = "SCRIPT", conflicts_with = "text")]
    file: Option<PathBuf>,
    /// Read commands from standard input.
    #[arg(long)]
    text: bool,
    /// Run convolutions row-parallel.
    #[arg(long)]
    parallel: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("imgproc=info".parse()?))
            .with_target(false)
            .init();
    }

    let commands = match (&cli.file, cli.text) {
        (Some(path), _) => fs::read_to_string(path)?,
        (None, true) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        (None, false) => return Err("either --file <SCRIPT> or --text must be given".into()),
    };

    let mut store = ImageStore::new().with_config(StoreConfig {
        parallel: cli.parallel,
    });
    tracing::info!(
        tokens = commands.split_whitespace().count(),
        parallel = cli.parallel,
        "running command script"
    );
    let stdout = io::stdout();
    script::run(&commands, &mut store, &mut stdout.lock())?;
    Ok(())
}
