//! output-guard - Entry Point
//!
//! Interactively reserves a collision-free output path: resolves the
//! requested path (or prefix) against existing files and prints the
//! final usable path on stdout.

use log::{error, info};
use std::env;
use std::path::{Path, PathBuf};
use std::process;

use output_guard::{OutputGuardError, Resolver, Settings, StdinPrompt};

struct Args {
    target: String,
    overwrite: bool,
    prefix: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut target = None;
    let mut overwrite = false;
    let mut prefix = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--overwrite" => overwrite = true,
            "--prefix" => prefix = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {}", other));
            }
            other if target.is_none() => target = Some(other.to_string()),
            other => return Err(format!("unexpected argument: {}", other)),
        }
    }

    match target {
        Some(target) => Ok(Args {
            target,
            overwrite,
            prefix,
        }),
        None => Err("missing output path".to_string()),
    }
}

fn run(args: &Args) -> Result<PathBuf, OutputGuardError> {
    let settings = Settings::load()?;
    let overwrite = args.overwrite || settings.overwrite;

    info!("Resolving output path {}", args.target);
    let mut resolver = Resolver::from_settings(&settings, StdinPrompt);
    let resolved = if args.prefix {
        resolver.resolve_prefix(Path::new(&args.target), overwrite)?
    } else {
        resolver.resolve_file(Path::new(&args.target), overwrite)?
    };
    Ok(resolved)
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("usage: output-guard [--overwrite] [--prefix] <path>");
            process::exit(2);
        }
    };

    match run(&args) {
        Ok(path) => println!("{}", path.display()),
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
