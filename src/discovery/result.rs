// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

/// Priority of rules guessing from file names.
pub const DEFAULT_PRIORITY: u32 = 1000;

/// A candidate being built inside a discovery rule.
///
/// Only `filemask` is required, the rest is filled in step by step by the
/// discovery pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskRecord {
    pub filemask: String,
    pub template: Option<String>,
    pub new_base: Option<String>,
    pub intermediate: Option<String>,
    pub file_format: Option<String>,
    pub name: Option<String>,
}

impl MaskRecord {
    pub fn new(filemask: impl Into<String>) -> Self {
        MaskRecord {
            filemask: filemask.into(),
            ..MaskRecord::default()
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Freeze the record, using `default_format` when no format was detected.
    pub fn finish(self, default_format: &str, meta: DiscoveryMeta) -> DiscoveryResult {
        DiscoveryResult {
            filemask: self.filemask,
            file_format: self.file_format.unwrap_or_else(|| default_format.to_string()),
            template: self.template,
            new_base: self.new_base,
            intermediate: self.intermediate,
            name: self.name,
            meta,
        }
    }
}

/// Where a result comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryMeta {
    /// Name of the rule which produced the result, e.g. `GettextDiscovery`.
    pub discovery: &'static str,
    /// Declared origin for configuration driven rules, e.g. `Transifex`.
    pub origin: Option<&'static str>,
    /// Lower sorts first.
    pub priority: u32,
}

/// A discovered translation resource family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryResult {
    pub filemask: String,
    pub file_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip)]
    pub meta: DiscoveryMeta,
}

impl DiscoveryResult {
    /// Key used for ordering results: priority first, then format.
    pub fn sort_key(&self) -> (u32, &str) {
        (self.meta.priority, self.file_format.as_str())
    }

    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    /// Plain mapping of all present fields, sorted by key.
    pub fn to_map(&self) -> BTreeMap<&'static str, &str> {
        let mut map = BTreeMap::new();
        map.insert("filemask", self.filemask.as_str());
        map.insert("file_format", self.file_format.as_str());
        let optional = [
            ("template", &self.template),
            ("new_base", &self.new_base),
            ("intermediate", &self.intermediate),
            ("name", &self.name),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                map.insert(key, value.as_str());
            }
        }
        map
    }

    /// Copy of the result without a template, metadata kept.
    pub fn without_template(&self) -> Self {
        DiscoveryResult {
            template: None,
            ..self.clone()
        }
    }
}

/// Order results by priority and file format, keeping the discovery order
/// for ties.
pub fn sort_results(results: &mut [DiscoveryResult]) {
    results.sort_by(DiscoveryResult::cmp_rank);
}
