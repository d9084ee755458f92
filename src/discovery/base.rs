// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

//! The shared discovery algorithm.
//!
//! Every rule implements [`Discovery`]; the default methods carry the base
//! behavior and rules override only the hooks they need.

use std::collections::HashSet;

use tracing::debug;

use crate::charset::detect_charset;
use crate::finder::{Finder, glob_matches};

use super::result::{DEFAULT_PRIORITY, DiscoveryMeta, DiscoveryResult, MaskRecord};
use super::wildcard::{eager_mask, path_masks};

/// Simplifications turning a mask into a template or base name candidate.
pub const TEMPLATE_REPLACEMENTS: &[(&str, &str)] = &[("/*/", "/"), ("-*", ""), (".*", ""), ("*", "")];

/// Shared read-only state of a discovery run.
pub struct DiscoveryContext<'a> {
    pub finder: &'a Finder,
    pub source_language: String,
}

impl<'a> DiscoveryContext<'a> {
    pub fn new(finder: &'a Finder, source_language: impl Into<String>) -> Self {
        DiscoveryContext {
            finder,
            source_language: source_language.into(),
        }
    }
}

/// Knobs changing how candidates are generated.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// One mask per file instead of language wildcard inference.
    pub eager: bool,
    /// Relative file name to consider before scanning, it does not need to exist.
    pub hint: Option<String>,
}

pub trait Discovery {
    /// Identity of the rule, reported in the result metadata.
    fn kind(&self) -> &'static str;

    /// Format reported when nothing more specific was detected.
    fn file_format(&self) -> &'static str;

    /// File name globs of the files this rule looks at.
    fn masks(&self) -> &'static [&'static str] {
        &["*.*"]
    }

    /// Naming template of the bilingual base file, e.g. `*.pot`.
    fn new_base_mask(&self) -> Option<&'static str> {
        None
    }

    fn origin(&self) -> Option<&'static str> {
        None
    }

    fn priority(&self) -> u32 {
        DEFAULT_PRIORITY
    }

    /// The template doubles as the base for new translations.
    fn mono_template(&self) -> bool {
        false
    }

    fn filter_files(&self, ctx: &DiscoveryContext) -> Vec<String> {
        self.masks()
            .iter()
            .flat_map(|mask| ctx.finder.filter_files(mask, None))
            .collect()
    }

    fn has_storage(&self, ctx: &DiscoveryContext, name: &str) -> bool {
        ctx.finder.has_file(name)
    }

    fn language_aliases(&self, language: &str) -> Vec<String> {
        vec![language.to_string()]
    }

    fn possible_templates(&self, language: &str, mask: &str) -> Vec<String> {
        base_possible_templates(self, language, mask)
    }

    /// Raw candidates, duplicates are expected.
    fn get_masks(&self, ctx: &DiscoveryContext, options: &DiscoveryOptions) -> Vec<MaskRecord> {
        base_get_masks(self, ctx, options)
    }

    /// Refine the format from file content. Never fails.
    fn adjust_format(&self, _ctx: &DiscoveryContext, _record: &mut MaskRecord) {}

    fn fill_in_new_base(&self, ctx: &DiscoveryContext, record: &mut MaskRecord) {
        if self.mono_template() {
            if record.new_base.is_none() {
                record.new_base = record.template.clone();
            }
        } else {
            base_fill_in_new_base(self, ctx, record);
        }
    }

    /// Expand a finished result into the results actually reported.
    fn variants(&self, result: DiscoveryResult) -> Vec<DiscoveryResult> {
        vec![result]
    }

    fn meta(&self) -> DiscoveryMeta {
        DiscoveryMeta {
            discovery: self.kind(),
            origin: self.origin(),
            priority: self.priority(),
        }
    }
}

/// Source language and its aliases first, then the structural simplifications.
pub fn base_possible_templates<D: Discovery + ?Sized>(rule: &D, language: &str, mask: &str) -> Vec<String> {
    let mut templates: Vec<String> = rule
        .language_aliases(language)
        .iter()
        .map(|alias| mask.replace('*', alias))
        .collect();
    for (pattern, replacement) in TEMPLATE_REPLACEMENTS {
        if mask.contains(pattern) {
            templates.push(mask.replace(pattern, replacement));
        }
    }
    templates
}

fn hint_masks<D: Discovery + ?Sized>(rule: &D, hint: &str) -> Vec<MaskRecord> {
    let filename = hint.rsplit('/').next().unwrap_or(hint);
    if !rule.masks().iter().any(|mask| glob_matches(mask, filename)) {
        return Vec::new();
    }
    let masks = path_masks(hint);
    if masks.is_empty() {
        return vec![MaskRecord::new(hint)];
    }
    masks.into_iter().map(MaskRecord::new).collect()
}

pub fn base_get_masks<D: Discovery + ?Sized>(
    rule: &D,
    ctx: &DiscoveryContext,
    options: &DiscoveryOptions,
) -> Vec<MaskRecord> {
    let mut records = Vec::new();
    if let Some(hint) = &options.hint {
        records.extend(hint_masks(rule, hint));
    }
    for path in rule.filter_files(ctx) {
        if options.eager {
            let mut record = MaskRecord::new(eager_mask(&path));
            if rule.mono_template() {
                record.template = Some(path);
            }
            records.push(record);
        } else {
            records.extend(path_masks(&path).into_iter().map(MaskRecord::new));
        }
    }
    records
}

/// Look for the base file in the directories above the mask, nearest first.
pub fn base_fill_in_new_base<D: Discovery + ?Sized>(rule: &D, ctx: &DiscoveryContext, record: &mut MaskRecord) {
    let Some(new_base_mask) = rule.new_base_mask() else {
        return;
    };
    let filename = record.filemask.rsplit('/').next().unwrap_or(&record.filemask);
    let mut basename = match filename.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => filename.to_string(),
    };
    if basename.contains('*') {
        for (pattern, replacement) in TEMPLATE_REPLACEMENTS {
            basename = basename.replace(pattern, replacement);
        }
    }
    let new_name = new_base_mask.replace('*', &basename).to_lowercase();

    let mut path = record.filemask.as_str();
    while let Some((parent, _)) = path.rsplit_once('/') {
        path = parent;
        let found = ctx
            .finder
            .filter_files(&new_name, Some(path))
            .into_iter()
            .chain(ctx.finder.filter_files(new_base_mask, Some(path)))
            .next();
        if let Some(found) = found {
            record.new_base = Some(found);
            return;
        }
    }
}

pub fn fill_in_template<D: Discovery + ?Sized>(rule: &D, ctx: &DiscoveryContext, record: &mut MaskRecord) {
    if record.template.is_some() {
        return;
    }
    record.template = rule
        .possible_templates(&ctx.source_language, &record.filemask)
        .into_iter()
        .find(|template| rule.has_storage(ctx, template));
}

/// Pick a format variant from the charset of the translation files.
///
/// Files behind the mask are read first, then the template; the first one
/// with a definite charset decides.
pub fn adjust_encoding(ctx: &DiscoveryContext, record: &mut MaskRecord, encoding_map: &[(&str, &'static str)]) {
    let mut paths = ctx.finder.mask_matches(&record.filemask);
    if let Some(template) = &record.template {
        paths.extend(ctx.finder.mask_matches(template));
    }

    let charset = paths.iter().find_map(|path| match ctx.finder.read(path) {
        Ok(content) => detect_charset(&content),
        Err(err) => {
            debug!("Skipping charset detection of {path}: {err}");
            None
        },
    });
    let Some(charset) = charset else {
        return;
    };
    if let Some((_, file_format)) = encoding_map.iter().find(|(name, _)| *name == charset) {
        record.file_format = Some(file_format.to_string());
    }
}

/// Run a rule: candidates are deduplicated by file mask and enriched with
/// template, format, new base and default format.
pub fn run_discovery<D: Discovery + ?Sized>(
    rule: &D,
    ctx: &DiscoveryContext,
    options: &DiscoveryOptions,
) -> std::vec::IntoIter<DiscoveryResult> {
    let mut discovered = HashSet::new();
    let mut results = Vec::new();

    for mut record in rule.get_masks(ctx, options) {
        if discovered.contains(&record.filemask) {
            continue;
        }
        if let Some(template) = &record.template {
            if !rule.has_storage(ctx, template) {
                debug!("{}: template {template} of {} does not exist", rule.kind(), record.filemask);
                continue;
            }
        }
        fill_in_template(rule, ctx, &mut record);
        rule.adjust_format(ctx, &mut record);
        rule.fill_in_new_base(ctx, &mut record);
        discovered.insert(record.filemask.clone());

        debug!("{}: found {}", rule.kind(), record.filemask);
        results.extend(rule.variants(record.finish(rule.file_format(), rule.meta())));
    }

    results.into_iter()
}
