// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

//! Discovery rules for the individual translation file formats.

use tracing::debug;

use super::base::{
    Discovery, DiscoveryContext, DiscoveryOptions, adjust_encoding, base_fill_in_new_base, base_get_masks,
    base_possible_templates,
};
use super::result::{DiscoveryResult, MaskRecord};
use super::sniff::{json_format, php_returns_array, yaml_single_key};
use crate::language::is_language_code;

/// Rule fully described by its format and file name globs.
#[derive(Debug, Clone, Copy)]
pub struct PatternDiscovery {
    pub kind: &'static str,
    pub file_format: &'static str,
    pub masks: &'static [&'static str],
    pub new_base_mask: Option<&'static str>,
    pub mono_template: bool,
}

impl PatternDiscovery {
    const fn bilingual(kind: &'static str, file_format: &'static str, masks: &'static [&'static str]) -> Self {
        PatternDiscovery {
            kind,
            file_format,
            masks,
            new_base_mask: None,
            mono_template: false,
        }
    }

    const fn monolingual(kind: &'static str, file_format: &'static str, masks: &'static [&'static str]) -> Self {
        PatternDiscovery {
            kind,
            file_format,
            masks,
            new_base_mask: None,
            mono_template: true,
        }
    }
}

impl Discovery for PatternDiscovery {
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn file_format(&self) -> &'static str {
        self.file_format
    }

    fn masks(&self) -> &'static [&'static str] {
        self.masks
    }

    fn new_base_mask(&self) -> Option<&'static str> {
        self.new_base_mask
    }

    fn mono_template(&self) -> bool {
        self.mono_template
    }
}

pub const QT: PatternDiscovery = PatternDiscovery {
    new_base_mask: Some("*.ts"),
    ..PatternDiscovery::bilingual("QtDiscovery", "ts", &["*.ts"])
};
pub const XLIFF: PatternDiscovery = PatternDiscovery::bilingual("XliffDiscovery", "xliff", &["*.xliff", "*.xlf"]);
pub const JOOMLA: PatternDiscovery = PatternDiscovery::bilingual("JoomlaDiscovery", "joomla", &["*.ini"]);
pub const WEB_EXTENSION: PatternDiscovery =
    PatternDiscovery::bilingual("WebExtensionDiscovery", "webextension", &["messages.json"]);
pub const INI: PatternDiscovery = PatternDiscovery::bilingual("INIDiscovery", "ini", &["*.ini"]);
pub const INNO_SETUP: PatternDiscovery = PatternDiscovery::bilingual("InnoSetupDiscovery", "islu", &["*.islu"]);
pub const TOML: PatternDiscovery = PatternDiscovery::bilingual("TOMLDiscovery", "toml", &["*.toml"]);

pub const SRT: PatternDiscovery = PatternDiscovery::monolingual("SRTDiscovery", "srt", &["*.srt"]);
pub const SUB: PatternDiscovery = PatternDiscovery::monolingual("SUBDiscovery", "sub", &["*.sub"]);
pub const ASS: PatternDiscovery = PatternDiscovery::monolingual("ASSDiscovery", "ass", &["*.ass"]);
pub const SSA: PatternDiscovery = PatternDiscovery::monolingual("SSADiscovery", "ssa", &["*.ssa"]);
pub const IDML: PatternDiscovery = PatternDiscovery::monolingual("IDMLDiscovery", "idml", &["*.idml"]);
pub const HTML: PatternDiscovery = PatternDiscovery::monolingual("HTMLDiscovery", "html", &["*.html", "*.htm"]);
pub const ODF: PatternDiscovery = PatternDiscovery::monolingual("ODFDiscovery", "odf", &["*.odt", "*.ods", "*.odp"]);

/// Replace the directory holding the file, `a/values/x.xml` → `a/<name>/x.xml`.
fn replace_parent_dir(path: &str, name: &str) -> Option<String> {
    let (directory, filename) = path.rsplit_once('/')?;
    match directory.rsplit_once('/') {
        Some((grandparent, _)) => Some(format!("{grandparent}/{name}/{filename}")),
        None => Some(format!("{name}/{filename}")),
    }
}

/// Files named `glob` in a directory called `dir_name`, at any depth.
fn files_in_dirs_named(ctx: &DiscoveryContext, glob: &str, dir_name: &str) -> Vec<String> {
    let mut files = ctx.finder.filter_files(glob, Some(dir_name));
    files.extend(ctx.finder.filter_files(glob, Some(&format!("*/{dir_name}"))));
    files
}

/// Parse the template of a record, if it has one and it is readable.
fn read_template(ctx: &DiscoveryContext, record: &MaskRecord) -> Option<String> {
    let template = record.template.as_deref()?;
    match ctx.finder.read_to_string(template) {
        Ok(content) => Some(content),
        Err(err) => {
            debug!("Can not inspect template {template}: {err}");
            None
        },
    }
}

/// GNU Gettext PO files.
pub struct GettextDiscovery;

impl Discovery for GettextDiscovery {
    fn kind(&self) -> &'static str {
        "GettextDiscovery"
    }

    fn file_format(&self) -> &'static str {
        "po"
    }

    fn masks(&self) -> &'static [&'static str] {
        &["*.po"]
    }

    fn new_base_mask(&self) -> Option<&'static str> {
        Some("*.pot")
    }

    fn fill_in_new_base(&self, ctx: &DiscoveryContext, record: &mut MaskRecord) {
        base_fill_in_new_base(self, ctx, record);
        if record.new_base.is_some() {
            return;
        }
        let filemask = &record.filemask;
        let pot_names = [
            format!("{}t", filemask.replace("po/*/", "pot/")),
            filemask.replace(".*", ""),
            filemask.replace("_*", ""),
            filemask.replace("-*", ""),
        ];
        record.new_base = pot_names.into_iter().find(|pot_name| ctx.finder.has_file(pot_name));
    }

    /// A PO family with a template is usable both as bilingual and as
    /// monolingual translation.
    fn variants(&self, result: DiscoveryResult) -> Vec<DiscoveryResult> {
        if result.template.is_none() {
            return vec![result];
        }
        let bilingual = result.without_template();
        let mono = DiscoveryResult {
            file_format: "po-mono".to_string(),
            ..result
        };
        vec![bilingual, mono]
    }
}

/// Android string resources.
pub struct AndroidDiscovery;

impl Discovery for AndroidDiscovery {
    fn kind(&self) -> &'static str {
        "AndroidDiscovery"
    }

    fn file_format(&self) -> &'static str {
        "aresource"
    }

    fn masks(&self) -> &'static [&'static str] {
        &["strings*.xml"]
    }

    fn get_masks(&self, ctx: &DiscoveryContext, _options: &DiscoveryOptions) -> Vec<MaskRecord> {
        files_in_dirs_named(ctx, "strings*.xml", "values")
            .into_iter()
            .filter_map(|path| Some(MaskRecord::new(replace_parent_dir(&path, "values-*")?).with_template(path)))
            .collect()
    }
}

/// Apple `.strings` files in `.lproj` bundles.
pub struct OsxDiscovery;

impl Discovery for OsxDiscovery {
    fn kind(&self) -> &'static str {
        "OSXDiscovery"
    }

    fn file_format(&self) -> &'static str {
        "strings"
    }

    fn masks(&self) -> &'static [&'static str] {
        &["*.strings"]
    }

    fn get_masks(&self, ctx: &DiscoveryContext, _options: &DiscoveryOptions) -> Vec<MaskRecord> {
        let mut paths = files_in_dirs_named(ctx, "*.strings", "base.lproj");
        paths.extend(files_in_dirs_named(ctx, "*.strings", &format!("{}.lproj", ctx.source_language)));
        paths
            .into_iter()
            .filter_map(|path| Some(MaskRecord::new(replace_parent_dir(&path, "*.lproj")?).with_template(path)))
            .collect()
    }

    fn adjust_format(&self, ctx: &DiscoveryContext, record: &mut MaskRecord) {
        adjust_encoding(ctx, record, &[("utf-8", "strings-utf8")]);
    }
}

/// Java properties resource bundles.
pub struct JavaDiscovery;

impl Discovery for JavaDiscovery {
    fn kind(&self) -> &'static str {
        "JavaDiscovery"
    }

    fn file_format(&self) -> &'static str {
        "properties"
    }

    fn masks(&self) -> &'static [&'static str] {
        &["*_*.properties"]
    }

    fn possible_templates(&self, language: &str, mask: &str) -> Vec<String> {
        let mut templates = vec![mask.replace("_*", "")];
        templates.extend(base_possible_templates(self, language, mask));
        templates
    }

    fn adjust_format(&self, ctx: &DiscoveryContext, record: &mut MaskRecord) {
        adjust_encoding(ctx, record, &[("utf-8", "properties-utf8"), ("utf-16", "properties-utf16")]);
    }
}

/// .NET resource files.
pub struct ResxDiscovery;

impl Discovery for ResxDiscovery {
    fn kind(&self) -> &'static str {
        "RESXDiscovery"
    }

    fn file_format(&self) -> &'static str {
        "resx"
    }

    fn masks(&self) -> &'static [&'static str] {
        &["resources.res[xw]"]
    }

    fn possible_templates(&self, language: &str, mask: &str) -> Vec<String> {
        let mut templates = vec![mask.replace(".*", "")];
        templates.extend(base_possible_templates(self, language, mask));
        templates
    }

    fn get_masks(&self, ctx: &DiscoveryContext, options: &DiscoveryOptions) -> Vec<MaskRecord> {
        let mut records = Vec::new();
        // Name.<language>.resx next to Name.resx
        for path in ctx.finder.filter_files("*.*.res[xw]", None) {
            let (directory, filename) = match path.rsplit_once('/') {
                Some((directory, filename)) => (Some(directory), filename),
                None => (None, path.as_str()),
            };
            let mut pieces = filename.rsplitn(3, '.');
            let (Some(ext), Some(code), Some(base)) = (pieces.next(), pieces.next(), pieces.next()) else {
                continue;
            };
            if !is_language_code(code) {
                continue;
            }
            let mask = match directory {
                Some(directory) => format!("{directory}/{base}.*.{ext}"),
                None => format!("{base}.*.{ext}"),
            };
            records.push(MaskRecord::new(mask));
        }
        records.extend(base_get_masks(self, ctx, options));
        records
    }
}

/// App store metadata directories, as used by fastlane and F-Droid.
pub struct AppStoreDiscovery;

impl Discovery for AppStoreDiscovery {
    fn kind(&self) -> &'static str {
        "AppStoreDiscovery"
    }

    fn file_format(&self) -> &'static str {
        "appstore"
    }

    fn masks(&self) -> &'static [&'static str] {
        &[]
    }

    fn filter_files(&self, ctx: &DiscoveryContext) -> Vec<String> {
        let mut dirs = Vec::new();
        for name in ["short_description.txt", "full_description.txt", "title.txt"] {
            for path in ctx.finder.filter_files(name, None) {
                if let Some((parent, _)) = path.rsplit_once('/') {
                    dirs.push(parent.to_string());
                }
            }
        }
        for path in ctx.finder.filter_files("*.txt", Some("*/changelogs")) {
            let grandparent = path.rsplit_once('/').and_then(|(parent, _)| parent.rsplit_once('/'));
            if let Some((grandparent, _)) = grandparent {
                dirs.push(grandparent.to_string());
            }
        }
        dirs
    }

    fn has_storage(&self, ctx: &DiscoveryContext, name: &str) -> bool {
        ctx.finder.has_dir(name)
    }

    fn language_aliases(&self, language: &str) -> Vec<String> {
        if language == "en" {
            return ["en", "en-US", "en-GB", "en-AU"].map(String::from).to_vec();
        }
        vec![language.to_string()]
    }
}

/// JSON files, the flavor is guessed from the template.
pub struct JsonDiscovery;

impl Discovery for JsonDiscovery {
    fn kind(&self) -> &'static str {
        "JSONDiscovery"
    }

    fn file_format(&self) -> &'static str {
        "json-nested"
    }

    fn masks(&self) -> &'static [&'static str] {
        &["*.json"]
    }

    fn adjust_format(&self, ctx: &DiscoveryContext, record: &mut MaskRecord) {
        let Some(content) = read_template(ctx, record) else {
            return;
        };
        if let Some(file_format) = json_format(&content) {
            record.file_format = Some(file_format.to_string());
        }
    }
}

/// Project Fluent files.
pub struct FluentDiscovery;

impl Discovery for FluentDiscovery {
    fn kind(&self) -> &'static str {
        "FluentDiscovery"
    }

    fn file_format(&self) -> &'static str {
        "fluent"
    }

    fn masks(&self) -> &'static [&'static str] {
        &["*.ftl"]
    }

    fn language_aliases(&self, language: &str) -> Vec<String> {
        if language == "en" {
            return vec!["en".to_string(), "en-US".to_string()];
        }
        vec![language.to_string()]
    }
}

/// YAML files, Ruby on Rails flavor when keyed by the language.
pub struct YamlDiscovery;

impl Discovery for YamlDiscovery {
    fn kind(&self) -> &'static str {
        "YAMLDiscovery"
    }

    fn file_format(&self) -> &'static str {
        "yaml"
    }

    fn masks(&self) -> &'static [&'static str] {
        &["*.yml", "*.yaml"]
    }

    fn adjust_format(&self, ctx: &DiscoveryContext, record: &mut MaskRecord) {
        let Some(content) = read_template(ctx, record) else {
            return;
        };
        let Some(key) = yaml_single_key(&content) else {
            return;
        };
        if record.template.as_deref() == Some(record.filemask.replace('*', &key).as_str()) {
            record.file_format = Some("ruby-yaml".to_string());
        }
    }
}

/// PHP files, Laravel flavor when the template returns an array.
pub struct PhpDiscovery;

impl Discovery for PhpDiscovery {
    fn kind(&self) -> &'static str {
        "PHPDiscovery"
    }

    fn file_format(&self) -> &'static str {
        "php"
    }

    fn masks(&self) -> &'static [&'static str] {
        &["*.php"]
    }

    fn mono_template(&self) -> bool {
        true
    }

    fn adjust_format(&self, ctx: &DiscoveryContext, record: &mut MaskRecord) {
        let Some(content) = read_template(ctx, record) else {
            return;
        };
        if php_returns_array(&content) {
            record.file_format = Some("laravel".to_string());
        }
    }
}

/// Flutter ARB files.
pub struct ArbDiscovery;

impl Discovery for ArbDiscovery {
    fn kind(&self) -> &'static str {
        "ARBDiscovery"
    }

    fn file_format(&self) -> &'static str {
        "arb"
    }

    fn masks(&self) -> &'static [&'static str] {
        &["*.arb"]
    }

    fn fill_in_new_base(&self, ctx: &DiscoveryContext, record: &mut MaskRecord) {
        base_fill_in_new_base(self, ctx, record);
        if record.intermediate.is_none() {
            let intermediate = record.filemask.replace('*', "messages");
            if ctx.finder.has_file(&intermediate) {
                record.intermediate = Some(intermediate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::base::run_discovery;
    use crate::discovery::base::tests::{discover_paths, expected, flatten};
    use crate::finder::Finder;
    use crate::finder::tests::write_tree;

    fn discover_tree<D: Discovery>(rule: &D, files: &[(&str, &str)]) -> Vec<DiscoveryResult> {
        let dir = tempfile::tempdir().unwrap();
        write_tree(dir.path(), files);
        let finder = Finder::new(dir.path()).unwrap();
        let ctx = DiscoveryContext::new(&finder, "en");
        run_discovery(rule, &ctx, &DiscoveryOptions::default()).collect()
    }

    #[test]
    fn tst_gettext_basic() {
        let results = discover_paths(&GettextDiscovery, &[
            "locales/cs/messages.po",
            "locales/de/messages.po",
            "locales/messages.pot",
            "locales/cs/other.po",
            "locales/de/other.po",
            "locales/en/other.po",
            "locales/other.pot",
            "locale/pl_PL/LC_MESSAGES/emote_collector.po",
            "locale/es_ES/LC_MESSAGES/emote_collector.po",
            "locale/hu_HU/LC_MESSAGES/emote_collector.po",
            "help/pt_BR/pt_BR.po",
            "help/nl/nl.po",
            "help/de/de.po",
            "Source/WebCore/platform/gtk/po/ar.po",
            "Source/WebCore/platform/gtk/po/pt.po",
            "Source/WebCore/platform/gtk/po/sv.po",
            "desktop-docs/gpl/sr/sr.po",
            "desktop-docs/gpl/sr@latin/sr@latin.po",
            "po/jp/rawhide/pages/welcome/Welcome.po",
            "pot/rawhide/pages/welcome/Welcome.pot",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[("filemask", "locales/*/messages.po"), ("file_format", "po"), ("new_base", "locales/messages.pot")],
                &[("filemask", "locales/*/other.po"), ("file_format", "po"), ("new_base", "locales/other.pot")],
                &[
                    ("filemask", "locales/*/other.po"),
                    ("file_format", "po-mono"),
                    ("new_base", "locales/other.pot"),
                    ("template", "locales/en/other.po"),
                ],
                &[("filemask", "locale/*/LC_MESSAGES/emote_collector.po"), ("file_format", "po")],
                &[("filemask", "help/*/*.po"), ("file_format", "po")],
                &[("filemask", "desktop-docs/gpl/*/*.po"), ("file_format", "po")],
                &[("filemask", "Source/WebCore/platform/gtk/po/*.po"), ("file_format", "po")],
                &[
                    ("filemask", "po/*/rawhide/pages/welcome/Welcome.po"),
                    ("file_format", "po"),
                    ("new_base", "pot/rawhide/pages/welcome/Welcome.pot"),
                ],
            ])
        );
    }

    #[test]
    fn tst_gettext_braces_in_path() {
        let results = discover_paths(&GettextDiscovery, &[
            "{{cookiecutter.slug}}/locale/cs/django.po",
            "{{cookiecutter.slug}}/locale/de/django.po",
            "{{cookiecutter.slug}}/locale/django.pot",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[&[
                ("filemask", "{{cookiecutter.slug}}/locale/*/django.po"),
                ("file_format", "po"),
                ("new_base", "{{cookiecutter.slug}}/locale/django.pot"),
            ]])
        );
    }

    #[test]
    fn tst_gettext_duplicate_code() {
        let results = discover_paths(&GettextDiscovery, &[
            "locales/messages.pot",
            "locales/cs/other/cs/messages.po",
            "locales/de/other/de/messages.po",
            "help/ar/ar.po",
            "po/cs/docs.po",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[("filemask", "po/*/docs.po"), ("file_format", "po")],
                &[
                    ("filemask", "locales/*/other/*/messages.po"),
                    ("file_format", "po"),
                    ("new_base", "locales/messages.pot"),
                ],
                &[("filemask", "help/*/*.po"), ("file_format", "po")],
            ])
        );
    }

    #[test]
    fn tst_gettext_double() {
        let results = discover_paths(&GettextDiscovery, &[
            "locale/bag_de-DE.po",
            "locale/baz-de-DE.po",
            "locale/foo-de_DE.po",
            "locale/foa_de_DE.po",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[("filemask", "locale/foa_*.po"), ("file_format", "po")],
                &[("filemask", "locale/foo-*.po"), ("file_format", "po")],
                &[("filemask", "locale/bag_*.po"), ("file_format", "po")],
                &[("filemask", "locale/baz-*.po"), ("file_format", "po")],
            ])
        );
    }

    #[test]
    fn tst_gettext_uppercase() {
        let results = discover_paths(&GettextDiscovery, &[
            "sources/localization/Xenko.Core.Presentation.pot",
            "sources/localization/ja/Xenko.Core.Assets.Editor.ja.po",
            "sources/localization/ja/Xenko.GameStudio.ja.po",
            "sources/localization/ja/Xenko.Core.Presentation.ja.po",
            "sources/localization/Xenko.Core.Assets.Editor.pot",
            "sources/localization/fr/Xenko.Core.Presentation.fr.po",
            "sources/localization/fr/Xenko.GameStudio.fr.po",
            "sources/localization/fr/Xenko.Core.Assets.Editor.fr.po",
            "sources/localization/Xenko.GameStudio.pot",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[
                    ("filemask", "sources/localization/*/Xenko.Core.Assets.Editor.*.po"),
                    ("file_format", "po"),
                    ("new_base", "sources/localization/Xenko.Core.Assets.Editor.pot"),
                ],
                &[
                    ("filemask", "sources/localization/*/Xenko.Core.Presentation.*.po"),
                    ("file_format", "po"),
                    ("new_base", "sources/localization/Xenko.Core.Presentation.pot"),
                ],
                &[
                    ("filemask", "sources/localization/*/Xenko.GameStudio.*.po"),
                    ("file_format", "po"),
                    ("new_base", "sources/localization/Xenko.GameStudio.pot"),
                ],
            ])
        );
    }

    #[test]
    fn tst_gettext_mono() {
        let results = discover_paths(&GettextDiscovery, &["locale/en/strings.po", "locale/de/strings.po"]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].file_format, "po");
        assert_eq!(results[0].template, None);
        assert_eq!(results[1].file_format, "po-mono");
        assert_eq!(results[1].template.as_deref(), Some("locale/en/strings.po"));
        assert_eq!(results[0].filemask, results[1].filemask);
    }

    #[test]
    fn tst_gettext_mono_language() {
        let finder = Finder::from_paths(["locale/cs_CZ/strings.po", "locale/de/strings.po"], Vec::<String>::new());
        let ctx = DiscoveryContext::new(&finder, "cs_CZ");
        let results: Vec<_> = run_discovery(&GettextDiscovery, &ctx, &DiscoveryOptions::default()).collect();
        assert_eq!(
            flatten(&results),
            expected(&[
                &[("filemask", "locale/*/strings.po"), ("file_format", "po")],
                &[
                    ("filemask", "locale/*/strings.po"),
                    ("file_format", "po-mono"),
                    ("template", "locale/cs_CZ/strings.po"),
                ],
            ])
        );
    }

    #[test]
    fn tst_gettext_root_and_filename() {
        let results = discover_paths(&GettextDiscovery, &["locales/cs.po", "locales/de.po"]);
        assert_eq!(flatten(&results), expected(&[&[("filemask", "locales/*.po"), ("file_format", "po")]]));

        let results = discover_paths(&GettextDiscovery, &["en.po", "de.po"]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[("filemask", "*.po"), ("file_format", "po")],
                &[("filemask", "*.po"), ("file_format", "po-mono"), ("template", "en.po")],
            ])
        );
    }

    #[test]
    fn tst_gettext_new_base() {
        let results = discover_paths(&GettextDiscovery, &["foo.fr.po", "foo.po"]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[("filemask", "foo.*.po"), ("file_format", "po"), ("new_base", "foo.po")],
                &[("filemask", "foo.*.po"), ("file_format", "po-mono"), ("new_base", "foo.po"), ("template", "foo.po")],
            ])
        );
    }

    #[test]
    fn tst_qt() {
        let results = discover_paths(&QT, &[
            "ts/cs.ts",
            "ts/zh_CN.ts",
            "lrc/translations/lrc_id.ts",
            "quickevent/app/quickevent/quickevent.cs_CZ.ts",
            "libqf/libqfqmlwidgets/libqfqmlwidgets.pl_PL.ts",
            "6-migrate-archived-model-to-revision.ts",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[("filemask", "ts/*.ts"), ("file_format", "ts"), ("new_base", "ts/cs.ts")],
                &[
                    ("filemask", "quickevent/app/quickevent/quickevent.*.ts"),
                    ("file_format", "ts"),
                    ("new_base", "quickevent/app/quickevent/quickevent.cs_CZ.ts"),
                ],
                &[
                    ("filemask", "libqf/libqfqmlwidgets/libqfqmlwidgets.*.ts"),
                    ("file_format", "ts"),
                    ("new_base", "libqf/libqfqmlwidgets/libqfqmlwidgets.pl_PL.ts"),
                ],
            ])
        );
    }

    #[test]
    fn tst_android() {
        let results = discover_paths(&AndroidDiscovery, &[
            "app/src/res/main/values/strings.xml",
            "app/src/res/main/values-it/strings.xml",
            "app/src/res/main/values-it/strings-other.xml",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[&[
                ("filemask", "app/src/res/main/values-*/strings.xml"),
                ("file_format", "aresource"),
                ("template", "app/src/res/main/values/strings.xml"),
            ]])
        );

        let results = discover_paths(&AndroidDiscovery, &["values/strings.xml", "values-it/strings.xml"]);
        assert_eq!(
            flatten(&results),
            expected(&[&[
                ("filemask", "values-*/strings.xml"),
                ("file_format", "aresource"),
                ("template", "values/strings.xml"),
            ]])
        );
    }

    #[test]
    fn tst_osx() {
        let results = discover_paths(&OsxDiscovery, &[
            "App/Resources/en.lproj/Localizable.strings",
            "App/Resources/Base.lproj/Other.strings",
            "App/Resources/ru.lproj/Third.strings",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[
                    ("filemask", "App/Resources/*.lproj/Localizable.strings"),
                    ("file_format", "strings"),
                    ("template", "App/Resources/en.lproj/Localizable.strings"),
                ],
                &[
                    ("filemask", "App/Resources/*.lproj/Other.strings"),
                    ("file_format", "strings"),
                    ("template", "App/Resources/Base.lproj/Other.strings"),
                ],
            ])
        );
    }

    #[test]
    fn tst_osx_utf8() {
        let results = discover_tree(&OsxDiscovery, &[
            ("App/en.lproj/Localizable.strings", "\"hello\" = \"Hello\";\n"),
            ("App/cs.lproj/Localizable.strings", "\"hello\" = \"Ahoj světe\";\n"),
        ]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].file_format, "strings-utf8");
    }

    #[test]
    fn tst_java() {
        let results = discover_paths(&JavaDiscovery, &[
            "bundle/UIMessages_de.properties",
            "bundle/UIMessages_fr.properties",
            "bundle/UIMessages_ja.properties",
            "bundle/UIMessages_nb_NO.properties",
            "bundle/UIMessages.properties",
            "bundle/UIMessages_ru.properties",
            "bundle/UIMessages_zh.properties",
            "bundle/FixedMessages.properties",
            "bundle/Other_Messages.properties",
            "length_1.properties",
            "length_1_de.properties",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[
                    ("filemask", "bundle/UIMessages_*.properties"),
                    ("file_format", "properties"),
                    ("template", "bundle/UIMessages.properties"),
                ],
                &[
                    ("filemask", "length_1_*.properties"),
                    ("file_format", "properties"),
                    ("template", "length_1.properties"),
                ],
            ])
        );
    }

    #[test]
    fn tst_java_encoding() {
        let results = discover_tree(&JavaDiscovery, &[
            ("res/Messages.properties", "hello=Hello\n"),
            ("res/Messages_cs.properties", "hello=Ahoj světe\n"),
        ]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].file_format, "properties-utf8");

        let dir = tempfile::tempdir().unwrap();
        write_tree(dir.path(), &[("res/Messages.properties", "hello=Hello\n")]);
        let mut utf16 = vec![0xFF, 0xFE];
        for unit in "hello=Ahoj".encode_utf16() {
            utf16.extend_from_slice(&unit.to_le_bytes());
        }
        std::fs::write(dir.path().join("res/Messages_cs.properties"), utf16).unwrap();
        let finder = Finder::new(dir.path()).unwrap();
        let ctx = DiscoveryContext::new(&finder, "en");
        let results: Vec<_> = run_discovery(&JavaDiscovery, &ctx, &DiscoveryOptions::default()).collect();
        assert_eq!(results[0].file_format, "properties-utf16");

        // plain ASCII keeps the default
        let results = discover_tree(&JavaDiscovery, &[
            ("res/Messages.properties", "hello=Hello\n"),
            ("res/Messages_cs.properties", "hello=Ahoj\n"),
        ]);
        assert_eq!(results[0].file_format, "properties");
    }

    #[test]
    fn tst_joomla() {
        let results = discover_paths(&JOOMLA, &[
            "public/lang/cs.ini",
            "public/lang/ru.ini",
            "public/lang/nl.ini",
            "public/lang/rm.ini",
            "public/lang/ca.ini",
            "public/lang/en.ini",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[&[
                ("filemask", "public/lang/*.ini"),
                ("file_format", "joomla"),
                ("template", "public/lang/en.ini"),
            ]])
        );
    }

    #[test]
    fn tst_resx() {
        let results = discover_paths(&ResxDiscovery, &[
            "App/Localization/AboutStrings.ar.resx",
            "App/Localization/AboutStrings.resx",
            "App/Localization/MainStrings.ar.resw",
            "App/Localization/MainStrings.resw",
            "App/Localization/OtherStrings.resx",
            "App/Localization/Other.Strings.resx",
            "App/Localization/SettingsStrings.fr.resx",
            "App/Localization/ar/Resources.resw",
            "App/Localization/en/Resources.resw",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[
                    ("filemask", "App/Localization/AboutStrings.*.resx"),
                    ("file_format", "resx"),
                    ("template", "App/Localization/AboutStrings.resx"),
                ],
                &[
                    ("filemask", "App/Localization/MainStrings.*.resw"),
                    ("file_format", "resx"),
                    ("template", "App/Localization/MainStrings.resw"),
                ],
                &[
                    ("filemask", "App/Localization/*/Resources.resw"),
                    ("file_format", "resx"),
                    ("template", "App/Localization/en/Resources.resw"),
                ],
                &[("filemask", "App/Localization/SettingsStrings.*.resx"), ("file_format", "resx")],
            ])
        );
    }

    #[test]
    fn tst_xliff() {
        let results = discover_paths(&XLIFF, &[
            "locales/cs.xlf",
            "locales/en.xlf",
            "otherlocales/cs/main.xlf",
            "otherlocales/cs/help.xlf",
            "length_1.properties.xlf",
            "length_1_de.properties.xlf",
            "locales/cs.xliff",
            "locales/en.xliff",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[("filemask", "locales/*.xlf"), ("file_format", "xliff"), ("template", "locales/en.xlf")],
                &[("filemask", "locales/*.xliff"), ("file_format", "xliff"), ("template", "locales/en.xliff")],
                &[("filemask", "otherlocales/*/main.xlf"), ("file_format", "xliff")],
                &[("filemask", "otherlocales/*/help.xlf"), ("file_format", "xliff")],
                &[("filemask", "length_1_*.properties.xlf"), ("file_format", "xliff")],
            ])
        );
    }

    #[test]
    fn tst_web_extension() {
        let results = discover_paths(&WEB_EXTENSION, &["_locales/cs/messages.json", "_locales/en/messages.json"]);
        assert_eq!(
            flatten(&results),
            expected(&[&[
                ("filemask", "_locales/*/messages.json"),
                ("file_format", "webextension"),
                ("template", "_locales/en/messages.json"),
            ]])
        );
    }

    #[test]
    fn tst_json() {
        let results = discover_paths(&JsonDiscovery, &[
            "tr/wizard-nl_BE.json",
            "tr/wizard-fr.json",
            "tr/wizard-en.json",
            "tr/register-en.json",
            "tr/register-sk.json",
            "tr/recordings-en.json",
            "sa/profiles/Generic/snmp_metrics/interface_errors_in.json",
            "Source/JavaScriptCore/inspector/protocol/Canvas.json",
            "Source/JavaScriptCore/inspector/protocol/Target.json",
            "data/cs/strings.json",
            "data/strings.json",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[("filemask", "tr/wizard-*.json"), ("file_format", "json-nested"), ("template", "tr/wizard-en.json")],
                &[
                    ("filemask", "tr/register-*.json"),
                    ("file_format", "json-nested"),
                    ("template", "tr/register-en.json"),
                ],
                &[
                    ("filemask", "tr/recordings-*.json"),
                    ("file_format", "json-nested"),
                    ("template", "tr/recordings-en.json"),
                ],
                &[("filemask", "data/*/strings.json"), ("file_format", "json-nested"), ("template", "data/strings.json")],
            ])
        );
    }

    #[test]
    fn tst_json_content() {
        let results = discover_tree(&JsonDiscovery, &[
            ("i18n/en.json", r#"{"key": "value", "key_plural": "values"}"#),
            ("i18n/cs.json", r#"{"key": "hodnota"}"#),
            ("flat/en.json", r#"{"key": "value"}"#),
            ("flat/de.json", r#"{"key": "Wert"}"#),
            ("go/en.json", r#"[{"id": "key", "translation": "value"}]"#),
            ("go/de.json", "[]"),
            ("broken/en.json", "{"),
            ("broken/de.json", "{"),
        ]);
        let formats: Vec<(&str, &str)> =
            results.iter().map(|result| (result.filemask.as_str(), result.file_format.as_str())).collect();
        assert_eq!(formats, vec![
            ("broken/*.json", "json-nested"),
            ("flat/*.json", "json"),
            ("go/*.json", "go-i18n-json"),
            ("i18n/*.json", "i18next"),
        ]);
    }

    #[test]
    fn tst_app_store() {
        let finder = Finder::from_paths(
            [
                "metadata/en-AU/short_description.txt",
                "metadata/en-US/short_description.txt",
                "private/metadata/en-AU/changelogs/10000.txt",
                "short_description.txt",
            ],
            ["metadata/en-AU", "metadata/en-US", "private/metadata/en-AU"],
        );
        let ctx = DiscoveryContext::new(&finder, "en");
        let results: Vec<_> = run_discovery(&AppStoreDiscovery, &ctx, &DiscoveryOptions::default()).collect();
        assert_eq!(
            flatten(&results),
            expected(&[
                &[("filemask", "metadata/*"), ("file_format", "appstore"), ("template", "metadata/en-US")],
                &[
                    ("filemask", "private/metadata/*"),
                    ("file_format", "appstore"),
                    ("template", "private/metadata/en-AU"),
                ],
            ])
        );
    }

    #[test]
    fn tst_fluent() {
        let results = discover_paths(&FluentDiscovery, &[
            "browser/locales/en-US/browser/component/file.ftl",
            "browser/locales/cs-CS/browser/component/file.ftl",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[&[
                ("filemask", "browser/locales/*/browser/component/file.ftl"),
                ("file_format", "fluent"),
                ("template", "browser/locales/en-US/browser/component/file.ftl"),
            ]])
        );
    }

    #[test]
    fn tst_yaml() {
        let results = discover_paths(&YamlDiscovery, &[
            "translations/en/messages.en.yml",
            "translations/de/messages.de.yml",
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[&[
                ("filemask", "translations/*/messages.*.yml"),
                ("file_format", "yaml"),
                ("template", "translations/en/messages.en.yml"),
            ]])
        );
    }

    #[test]
    fn tst_yaml_ruby() {
        let results = discover_tree(&YamlDiscovery, &[
            ("config/locales/en.yml", "en:\n  hello: Hello world\n"),
            ("config/locales/cs.yml", "cs:\n  hello: Ahoj\n"),
            ("plain/en.yaml", "hello: Hello world\nbye: Bye\n"),
            ("plain/cs.yaml", "hello: Ahoj\n"),
        ]);
        let formats: Vec<(&str, &str)> =
            results.iter().map(|result| (result.filemask.as_str(), result.file_format.as_str())).collect();
        assert_eq!(formats, vec![("config/locales/*.yml", "ruby-yaml"), ("plain/*.yaml", "yaml")]);
    }

    #[test]
    fn tst_php() {
        let results = discover_tree(&PhpDiscovery, &[
            ("resources/lang/en/auth.php", "<?php\n\nreturn [\n    'failed' => 'Failed',\n];\n"),
            ("resources/lang/cs/auth.php", "<?php\n\nreturn [\n    'failed' => 'Chyba',\n];\n"),
            ("lang/en.php", "<?php\n$LANG['hello'] = 'Hello';\n"),
            ("lang/de.php", "<?php\n$LANG['hello'] = 'Hallo';\n"),
        ]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[
                    ("filemask", "resources/lang/*/auth.php"),
                    ("file_format", "laravel"),
                    ("template", "resources/lang/en/auth.php"),
                    ("new_base", "resources/lang/en/auth.php"),
                ],
                &[
                    ("filemask", "lang/*.php"),
                    ("file_format", "php"),
                    ("template", "lang/en.php"),
                    ("new_base", "lang/en.php"),
                ],
            ])
        );
    }

    #[test]
    fn tst_monolingual_subtitles() {
        let results = discover_paths(&SRT, &["subtitles/en.srt", "subtitles/de.srt", "other/de.srt"]);
        assert_eq!(
            flatten(&results),
            expected(&[
                &[
                    ("filemask", "subtitles/*.srt"),
                    ("file_format", "srt"),
                    ("template", "subtitles/en.srt"),
                    ("new_base", "subtitles/en.srt"),
                ],
                &[("filemask", "other/*.srt"), ("file_format", "srt")],
            ])
        );
    }

    #[test]
    fn tst_html_and_odf() {
        let results = discover_paths(&HTML, &["docs/en/index.html", "docs/cs/index.html", "site/index.cs.htm"]);
        let masks: Vec<&str> = results.iter().map(|result| result.filemask.as_str()).collect();
        assert!(masks.contains(&"docs/*/index.html"));
        assert!(masks.contains(&"site/index.*.htm"));

        let results = discover_paths(&ODF, &["doc/en.odt", "doc/de.odt", "sheets/de.ods"]);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn tst_arb_intermediate() {
        let results = discover_paths(&ArbDiscovery, &["lib/l10n/app_en.arb", "lib/l10n/app_de.arb", "lib/l10n/app_messages.arb"]);
        assert_eq!(
            flatten(&results),
            expected(&[&[
                ("filemask", "lib/l10n/app_*.arb"),
                ("file_format", "arb"),
                ("template", "lib/l10n/app_en.arb"),
                ("intermediate", "lib/l10n/app_messages.arb"),
            ]])
        );
    }

    #[test]
    fn tst_ini_formats() {
        let paths = ["lang/en.ini", "lang/cs.ini"];
        assert_eq!(discover_paths(&INI, &paths)[0].file_format, "ini");
        assert_eq!(discover_paths(&JOOMLA, &paths)[0].file_format, "joomla");
        assert_eq!(discover_paths(&INNO_SETUP, &["setup/cs.islu"])[0].filemask, "setup/*.islu");
        assert_eq!(discover_paths(&TOML, &["i18n/de.toml"])[0].file_format, "toml");
    }

    #[test]
    fn tst_replace_parent_dir() {
        assert_eq!(replace_parent_dir("a/values/x.xml", "values-*"), Some("a/values-*/x.xml".to_string()));
        assert_eq!(replace_parent_dir("values/x.xml", "values-*"), Some("values-*/x.xml".to_string()));
        assert_eq!(replace_parent_dir("x.xml", "values-*"), None);
    }
}
