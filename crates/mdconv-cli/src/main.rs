use anyhow::{Context, Result};
use clap::Parser;
use mdconv_config::Config;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

/// Converts inline markdown (bold, italic, code, links) to plain text, HTML
/// or chat markup, writing the result to standard output.
#[derive(Debug, Clone, Default, PartialEq, Parser)]
#[clap(name = "mdconv", version, about)]
struct Args {
    /// plain, html, slack, hangouts or a preset from the config file
    #[clap(short, long, value_name = "NAME")]
    preset: Option<String>,

    /// Config file (default: $MDCONV_CONFIG or ~/.config/mdconv/config.toml)
    #[clap(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print available preset names
    #[clap(short, long)]
    list: bool,

    /// Markdown file to convert; standard input when absent or '-'
    #[clap(value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum Input<'a> {
    Stdin,
    File(&'a Path),
}

impl Args {
    fn input(&self) -> Input<'_> {
        match self.input.as_deref() {
            Some(path) if path != Path::new("-") => Input::File(path),
            _ => Input::Stdin,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display())),
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config file at {}, using built-in presets",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn read_input(input: Input<'_>) -> Result<String> {
    match input {
        Input::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            Ok(text)
        }
        Input::File(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    if args.list {
        for name in config.preset_names() {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let converter = config.converter(args.preset.as_deref())?;
    let text = read_input(args.input())?;
    log::info!("Converting {} bytes", text.len());

    out.write_all(converter.convert(&text).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args, &mut io::stdout().lock()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
