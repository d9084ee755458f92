// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

//! Entry points running every discovery rule over a source tree.

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error as TeError;
use tracing::{debug, info};

use crate::discovery::files::{
    ASS, AndroidDiscovery, AppStoreDiscovery, ArbDiscovery, FluentDiscovery, GettextDiscovery, HTML, IDML, INI,
    INNO_SETUP, JOOMLA, JavaDiscovery, JsonDiscovery, ODF, OsxDiscovery, PhpDiscovery, QT, ResxDiscovery, SRT, SSA,
    SUB, TOML, WEB_EXTENSION, XLIFF, YamlDiscovery,
};
use crate::discovery::transifex::{TransifexDiscovery, TransifexYamlDiscovery};
use crate::discovery::{Discovery, DiscoveryContext, DiscoveryOptions, DiscoveryResult, run_discovery, sort_results};
use crate::finder::{Finder, FinderError};

#[derive(TeError, Debug)]
pub enum DiscoverError {
    #[error("Fail to scan source tree: {0}")]
    Finder(#[from] FinderError),
    #[error("Fail to serialize results: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Fail to serialize results: {0}")]
    Yaml(String),
}

/// Knobs of a whole discovery run.
#[derive(Debug, Clone)]
pub struct DiscoverySettings {
    /// Language of the source strings, used to find templates.
    pub source_language: String,
    pub eager: bool,
    pub hint: Option<String>,
    /// Extra file or directory names excluded from the walk.
    pub ignore_paths: Vec<String>,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        DiscoverySettings {
            source_language: "en".to_string(),
            eager: false,
            hint: None,
            ignore_paths: Vec::new(),
        }
    }
}

/// All known rules, project configuration first.
pub fn backends() -> Vec<Box<dyn Discovery>> {
    vec![
        Box::new(TransifexDiscovery),
        Box::new(TransifexYamlDiscovery),
        Box::new(AndroidDiscovery),
        Box::new(AppStoreDiscovery),
        Box::new(ArbDiscovery),
        Box::new(ASS),
        Box::new(FluentDiscovery),
        Box::new(GettextDiscovery),
        Box::new(HTML),
        Box::new(IDML),
        Box::new(INI),
        Box::new(INNO_SETUP),
        Box::new(JavaDiscovery),
        Box::new(JOOMLA),
        Box::new(JsonDiscovery),
        Box::new(ODF),
        Box::new(OsxDiscovery),
        Box::new(PhpDiscovery),
        Box::new(QT),
        Box::new(ResxDiscovery),
        Box::new(SRT),
        Box::new(SSA),
        Box::new(SUB),
        Box::new(TOML),
        Box::new(WEB_EXTENSION),
        Box::new(XLIFF),
        Box::new(YamlDiscovery),
    ]
}

/// Run every rule against an already built index.
pub fn discover_in(finder: &Finder, settings: &DiscoverySettings) -> Vec<DiscoveryResult> {
    let ctx = DiscoveryContext::new(finder, settings.source_language.as_str());
    let options = DiscoveryOptions {
        eager: settings.eager,
        hint: settings.hint.clone(),
    };

    let mut results = Vec::new();
    for rule in backends() {
        let before = results.len();
        results.extend(run_discovery(rule.as_ref(), &ctx, &options));
        debug!("{} produced {} results", rule.kind(), results.len() - before);
    }
    sort_results(&mut results);
    results
}

/// Scan `root` and run every rule against it.
pub fn discover(root: &Path, settings: &DiscoverySettings) -> Result<Vec<DiscoveryResult>, DiscoverError> {
    let finder = Finder::with_ignore_paths(root, &settings.ignore_paths)?;
    let results = discover_in(&finder, settings);
    info!("Found {} possible translation file families in {:?}", results.len(), root);
    Ok(results)
}

pub fn format_text(results: &[DiscoveryResult]) -> String {
    let mut output = String::new();
    for (pos, result) in results.iter().enumerate() {
        match result.meta.origin {
            Some(origin) => output.push_str(&format!("== Match {} ({origin}) ==\n", pos + 1)),
            None => output.push_str(&format!("== Match {} ==\n", pos + 1)),
        }
        for (key, value) in result.to_map() {
            output.push_str(&format!("{key:15}: {value}\n"));
        }
        output.push('\n');
    }
    output
}

pub fn format_json(results: &[DiscoveryResult]) -> Result<String, DiscoverError> {
    let maps: Vec<BTreeMap<&str, &str>> = results.iter().map(DiscoveryResult::to_map).collect();
    Ok(serde_json::to_string_pretty(&maps)?)
}

pub fn format_yaml(results: &[DiscoveryResult]) -> Result<String, DiscoverError> {
    let maps: Vec<BTreeMap<&str, &str>> = results.iter().map(DiscoveryResult::to_map).collect();
    serde_yaml2::to_string(&maps).map_err(|err| DiscoverError::Yaml(err.to_string()))
}
