#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! `slugline` command-line tool.
//!
//! Slugifies each TEXT argument, or each line of stdin when none are given.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::info;
use serde_json::Value;

use slugline_engine::{SlugOptions, SlugTrace, load_options, slugify_traced, slugify_value, try_slugify};

#[derive(Parser)]
#[command(author, version, about = "Turn arbitrary text into URL- and filename-safe slugs.")]
struct Cli {
    /// Text to slugify. Reads stdin line by line when omitted.
    text: Vec<String>,
    /// TOML file with slug options.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Separator between tokens.
    #[arg(long, short)]
    separator: Option<String>,
    /// Keep ASCII uppercase letters.
    #[arg(long)]
    keep_case: bool,
    /// Don't split camelCase words.
    #[arg(long)]
    no_decamelize: bool,
    /// Extra replacement as KEY=VALUE; may be repeated. Splits on the first
    /// `=`, so KEY cannot contain `=` (use a config file for such keys).
    #[arg(long = "replace", value_name = "KEY=VALUE", value_parser = parse_replacement)]
    replacements: Vec<(String, String)>,
    /// Treat each input as a JSON value and print JSON output.
    #[arg(long)]
    json: bool,
    /// Show the output of every pipeline stage.
    #[arg(long)]
    trace: bool,
}

fn parse_replacement(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

impl Cli {
    fn options(&self) -> Result<SlugOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path).with_context(|| format!("while loading config {}", path.display()))?,
            None => SlugOptions::default(),
        };
        if let Some(separator) = &self.separator {
            options.separator.clone_from(separator);
        }
        if self.keep_case {
            options.lowercase = false;
        }
        if self.no_decamelize {
            options.decamelize = false;
        }
        options.custom_replacements.extend(self.replacements.iter().cloned());
        Ok(options)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let options = cli.options()?;
    info!("slugline {} starting", slugline_engine::SLUGLINE_VERSION);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.text.is_empty() {
        for (n, line) in io::stdin().lock().lines().enumerate() {
            let line = line.context("while reading stdin")?;
            process(&cli, &options, &line, &mut out).with_context(|| format!("on input line {}", n + 1))?;
        }
    } else {
        for text in &cli.text {
            process(&cli, &options, text, &mut out)?;
        }
    }
    Ok(())
}

fn process(cli: &Cli, options: &SlugOptions, raw: &str, out: &mut impl Write) -> Result<()> {
    if cli.json {
        let value: Value = serde_json::from_str(raw).with_context(|| format!("'{raw}' is not valid JSON"))?;
        let slug = slugify_value(&value, options)?;
        if cli.trace {
            // slugify_value already rejected non-strings
            let text = value.as_str().unwrap_or_default();
            writeln!(out, "{}", serde_json::to_string(&slugify_traced(text, options))?)?;
        } else {
            writeln!(out, "{}", serde_json::to_string(&slug)?)?;
        }
        return Ok(());
    }

    let slug = try_slugify(raw, options)?;
    if cli.trace {
        print_trace(&slugify_traced(raw, options), out)?;
    } else {
        writeln!(out, "{slug}")?;
    }
    Ok(())
}

fn print_trace(trace: &SlugTrace, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} {:?}", "input".bold(), trace.input)?;
    for stage in &trace.stages {
        writeln!(out, "  {:<10} {:?}", stage.stage.as_str().dimmed(), stage.output)?;
    }
    writeln!(out, "{} {}", "slug".bold(), trace.slug.bright_green())
}
