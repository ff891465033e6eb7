use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use botmark_core::{emit, extract};

#[derive(Parser, Debug)]
#[command(name = "botmark-convert", version, about = "Convert a FrogBot map definition (.qc) into KTX bot marker commands")]
struct Args {
    /// Path to the FrogBot map definition file
    #[arg(value_name = "MAP_FILE")]
    map_path: PathBuf,

    /// Optional JSON dump of the extracted marker model
    #[arg(long = "dump-model", value_name = "PATH")]
    dump_model: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Structured logging on stderr; stdout carries the converted commands
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            // Usage errors go to stdout with exit code 1, like the original
            // converter. --help and --version keep clap's own handling.
            println!("{err}");
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };
    info!(core_version = %botmark_core::version(), path = ?args.map_path, "starting conversion");

    let source = fs::read_to_string(&args.map_path)
        .with_context(|| format!("reading {:?}", args.map_path))?;

    let model = extract::extract(&source)?;
    if let Some(dump_path) = &args.dump_model {
        let bytes = serde_json::to_vec_pretty(&model)?;
        fs::write(dump_path, bytes).with_context(|| format!("writing {dump_path:?}"))?;
        info!(path = ?dump_path, "wrote model dump");
    }

    println!("{}", emit::emit(&model));
    Ok(())
}
