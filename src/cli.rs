// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error as TeError;

use crate::api::{self, DiscoverError, DiscoverySettings};

#[derive(clap::ValueEnum, Clone, Default, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(
    version = env!("GIT_DESCRIBE_OR_CARGO_PKG_VERSION"),
    about = "Locates translatable files in a source tree and proposes file masks for them.",
    long_about = "Locates translatable files in a source tree and proposes file masks, templates and formats for them.\n\n\
        Resources declared in .tx/config or transifex.yaml are listed first, guessed ones follow.",
)]
pub struct Cli {
    /// Root directory of the source tree
    pub root: PathBuf,
    /// Language of the source strings, used to locate templates
    #[arg(short, long, default_value = "en")]
    pub source_language: String,
    /// Propose a mask for every single file instead of guessing language wildcards
    #[clap(long, action = clap::ArgAction::SetTrue, default_value_t = false)]
    pub eager: bool,
    /// Relative path of a file to consider even if it does not exist yet
    #[arg(long)]
    pub hint: Option<String>,
    /// Extra file or directory names to skip while scanning. e.g. build,vendor
    #[arg(short, long, value_delimiter = ',')]
    pub ignore_paths: Vec<String>,
    #[clap(short, long, default_value_t, value_enum)]
    pub format: OutputFormat,
}

impl Cli {
    pub fn settings(&self) -> DiscoverySettings {
        DiscoverySettings {
            source_language: self.source_language.clone(),
            eager: self.eager,
            hint: self.hint.clone(),
            ignore_paths: self.ignore_paths.clone(),
        }
    }
}

#[derive(TeError, Debug)]
#[error("{0}")]
pub enum CliError {
    Discover(#[from] DiscoverError),
    Output(#[from] io::Error),
}

/// Discover and print the results of a parsed command line.
pub fn run(args: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let results = api::discover(&args.root, &args.settings())?;
    match args.format {
        OutputFormat::Text => write!(out, "{}", api::format_text(&results))?,
        OutputFormat::Json => writeln!(out, "{}", api::format_json(&results)?)?,
        OutputFormat::Yaml => write!(out, "{}", api::format_yaml(&results)?)?,
    }
    Ok(())
}

pub fn execute() -> Result<(), CliError> {
    let args = Cli::parse();
    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}
