// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

// .tx/config file spec: https://developers.transifex.com/docs/using-the-client
// transifex.yaml file spec: https://help.transifex.com/en/articles/6265125-github-installation-and-configuration#h_94380d9cd8

use std::str::FromStr;

use configparser::ini::Ini;
use serde::Deserialize;
use thiserror::Error as TeError;
use tracing::{debug, warn};

use super::base::{Discovery, DiscoveryContext, DiscoveryOptions};
use super::result::MaskRecord;
use crate::finder::FinderError;

const TRANSIFEX_ORIGIN: &str = "Transifex";
const TRANSIFEX_PRIORITY: u32 = 500;

/// Transifex resource types and the matching file formats.
const TYPE_MAP: &[(&str, &str)] = &[
    ("ANDROID", "aresource"),
    ("STRINGS", "strings"),
    ("CHROME", "webextension"),
    ("PO", "po"),
    ("PROPERTIES", "properties"),
    ("UNICODEPROPERTIES", "properties-utf8"),
    ("INI", "joomla"),
    ("KEYVALUEJSON", "json-nested"),
    ("MAGENTO", "csv"),
    ("DTD", "dtd"),
    ("PHP_ARRAY", "php"),
    ("QT", "ts"),
    ("RESX", "resx"),
    ("XLIFF", "xliff"),
    ("XLSX", "xlsx"),
    ("YAML_GENERIC", "yaml"),
    ("YML", "ruby-yaml"),
];

/// File name endings and the matching file formats, first match wins.
const EXTENSION_MAP: &[(&str, &str)] = &[
    (".po", "po"),
    ("strings.xml", "aresource"),
    (".ini", "joomla"),
    (".csv", "csv"),
    (".json", "json-nested"),
    (".dtd", "dtd"),
    (".php", "php"),
    (".xlf", "xliff"),
    (".xliff", "xliff"),
    (".ts", "ts"),
    (".resx", "resx"),
    (".resw", "resx"),
    (".xlsx", "xlsx"),
    (".yml", "yaml"),
    (".yaml", "yaml"),
    (".properties", "properties"),
    (".strings", "strings"),
];

pub fn transifex_format(type_attr: &str) -> Option<&'static str> {
    let type_attr = type_attr.to_uppercase();
    TYPE_MAP.iter().find(|(name, _)| *name == type_attr).map(|(_, file_format)| *file_format)
}

pub fn detect_format(filemask: &str) -> Option<&'static str> {
    let filemask = filemask.to_lowercase();
    EXTENSION_MAP
        .iter()
        .find(|(ending, _)| filemask.ends_with(ending))
        .map(|(_, file_format)| *file_format)
}

/// Build a record from a translation file pattern using `<lang>` placeholders.
///
/// A `.pot` source file is the base for new translations, anything else is
/// the monolingual template.
fn transifex_record(file_filter: &str, source_file: Option<&str>, type_attr: Option<&str>) -> Option<MaskRecord> {
    let filemask = file_filter.replace("<lang>", "*");
    let file_format = type_attr.and_then(transifex_format).or_else(|| detect_format(&filemask));
    let Some(file_format) = file_format else {
        debug!("Unknown format of Transifex resource {filemask}, type {type_attr:?}");
        return None;
    };

    let mut record = MaskRecord::new(filemask);
    record.file_format = Some(file_format.to_string());
    if let Some(source_file) = source_file {
        if source_file.to_lowercase().ends_with(".pot") {
            record.new_base = Some(source_file.to_string());
        } else {
            record.template = Some(source_file.to_string());
        }
    }
    Some(record)
}

#[derive(TeError, Debug)]
pub enum TxConfigLoadError {
    #[error("Can not read file: {0}")]
    ReadFile(#[from] FinderError),
    #[error("Fail to deserialize file: {0}")]
    ParseError(String),
}

#[derive(Debug, Default)]
pub struct TxConfig {
    pub resource_sections: Vec<TxConfigSectionResource>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct TxConfigSectionResource {
    /// Section name, e.g. `o:organization_slug:p:project_slug:r:resource_slug`
    pub name: String,
    pub file_filter: String,
    pub source_file: Option<String>,
    pub type_attr: Option<String>,
}

impl FromStr for TxConfig {
    type Err = TxConfigLoadError;

    /// Sections without `file_filter` are not resources and are skipped.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut config = Ini::new_cs();
        config.read(content.to_string()).map_err(TxConfigLoadError::ParseError)?;

        let mut tx_config = TxConfig::default();
        for section in config.sections() {
            // keys before the first section header land in "default"
            if section == "main" || section == "default" {
                continue;
            }
            let Some(file_filter) = config.get(&section, "file_filter") else {
                continue;
            };
            tx_config.resource_sections.push(TxConfigSectionResource {
                file_filter,
                source_file: config.get(&section, "source_file"),
                type_attr: config.get(&section, "type"),
                name: section,
            });
        }
        Ok(tx_config)
    }
}

impl TxConfigSectionResource {
    pub fn to_record(&self) -> Option<MaskRecord> {
        let mut record =
            transifex_record(&self.file_filter, self.source_file.as_deref(), self.type_attr.as_deref())?;
        record.name = Some(self.name.clone());
        Some(record)
    }
}

pub fn load_tx_config_file(ctx: &DiscoveryContext, path: &str) -> Result<TxConfig, TxConfigLoadError> {
    let source_content = ctx.finder.read_to_string(path)?;
    source_content.parse()
}

/// Resources listed in `.tx/config` of the Transifex client.
pub struct TransifexDiscovery;

impl Discovery for TransifexDiscovery {
    fn kind(&self) -> &'static str {
        "TransifexDiscovery"
    }

    fn file_format(&self) -> &'static str {
        ""
    }

    fn masks(&self) -> &'static [&'static str] {
        &[]
    }

    fn origin(&self) -> Option<&'static str> {
        Some(TRANSIFEX_ORIGIN)
    }

    fn priority(&self) -> u32 {
        TRANSIFEX_PRIORITY
    }

    fn get_masks(&self, ctx: &DiscoveryContext, _options: &DiscoveryOptions) -> Vec<MaskRecord> {
        let mut records = Vec::new();
        for path in ctx.finder.filter_files("config", Some(".tx")) {
            match load_tx_config_file(ctx, &path) {
                Ok(tx_config) => {
                    records.extend(tx_config.resource_sections.iter().filter_map(TxConfigSectionResource::to_record));
                },
                Err(err) => warn!("Skipping {path}: {err}"),
            }
        }
        records
    }
}

#[derive(TeError, Debug)]
pub enum LoadTxYamlError {
    #[error("Can not read file: {0}")]
    ReadFile(#[from] FinderError),
    #[error("Fail to deserialize file: {0}")]
    Serde(String),
}

#[derive(Debug, Deserialize)]
pub struct TransifexYaml {
    pub filters: Vec<Filter>,
}

fn default_filter_type() -> String {
    "file".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Filter {
    #[serde(rename = "filter_type", default = "default_filter_type")]
    pub type_attr: String,
    #[serde(rename = "source_file")]
    pub source: Option<String>,
    #[serde(rename = "file_format")]
    pub format: Option<String>,
    #[serde(rename = "translation_files_expression")]
    pub target_pattern: Option<String>,
}

impl Filter {
    pub fn to_record(&self) -> Option<MaskRecord> {
        if self.type_attr != "file" {
            debug!("Skipping transifex.yaml filter of type {}", self.type_attr);
            return None;
        }
        let target_pattern = self.target_pattern.as_deref()?;
        transifex_record(target_pattern, self.source.as_deref(), self.format.as_deref())
    }
}

pub fn load_tx_yaml_file(ctx: &DiscoveryContext, path: &str) -> Result<TransifexYaml, LoadTxYamlError> {
    let source_content = ctx.finder.read_to_string(path)?;
    serde_yaml2::from_str::<TransifexYaml>(source_content.as_str()).map_err(|err| LoadTxYamlError::Serde(err.to_string()))
}

/// Resources listed in `transifex.yaml` of the Transifex GitHub integration.
///
/// The file is looked up in the project root first, then in `.tx/`.
pub struct TransifexYamlDiscovery;

impl Discovery for TransifexYamlDiscovery {
    fn kind(&self) -> &'static str {
        "TransifexYamlDiscovery"
    }

    fn file_format(&self) -> &'static str {
        ""
    }

    fn masks(&self) -> &'static [&'static str] {
        &[]
    }

    fn origin(&self) -> Option<&'static str> {
        Some(TRANSIFEX_ORIGIN)
    }

    fn priority(&self) -> u32 {
        TRANSIFEX_PRIORITY
    }

    fn get_masks(&self, ctx: &DiscoveryContext, _options: &DiscoveryOptions) -> Vec<MaskRecord> {
        let Some(path) = ["transifex.yaml", ".tx/transifex.yaml"].into_iter().find(|path| ctx.finder.has_file(path))
        else {
            return Vec::new();
        };
        match load_tx_yaml_file(ctx, path) {
            Ok(tx_yaml) => tx_yaml.filters.iter().filter_map(Filter::to_record).collect(),
            Err(err) => {
                warn!("Skipping {path}: {err}");
                Vec::new()
            },
        }
    }
}
