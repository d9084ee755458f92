// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

//! Format guesses from the top-level shape of template content.

use std::collections::BTreeMap;

use regex::Regex;
use serde::de::IgnoredAny;
use serde_json::{Map, Value};

#[derive(Debug, Default, PartialEq, Eq)]
struct JsonShape {
    all_strings: bool,
    i18next: bool,
    webextension: bool,
}

fn detect_dict(data: &Map<String, Value>, level: usize) -> JsonShape {
    let mut all_strings = true;
    let mut i18next = false;
    for (key, value) in data {
        if level == 0 {
            if let Value::Object(inner) = value {
                if inner.contains_key("message") && inner.contains_key("description") {
                    return JsonShape {
                        webextension: true,
                        ..JsonShape::default()
                    };
                }
            }
        }
        match value {
            Value::String(text) => {
                if key.ends_with("_plural") || text.contains("{{") {
                    i18next = true;
                }
            },
            Value::Object(inner) => {
                all_strings = false;
                i18next |= detect_dict(inner, level + 1).i18next;
            },
            _ => all_strings = false,
        }
    }
    JsonShape {
        all_strings,
        i18next,
        webextension: false,
    }
}

/// Guess the JSON flavor of a template.
///
/// Returns `None` for unparsable content and for nested key/value files,
/// which is the default JSON format.
pub fn json_format(content: &str) -> Option<&'static str> {
    let data: Value = serde_json::from_str(content).ok()?;
    match data {
        Value::Array(items) => match items.first() {
            Some(Value::Object(first)) if first.contains_key("id") => Some("go-i18n-json"),
            _ => None,
        },
        Value::Object(map) => {
            let shape = detect_dict(&map, 0);
            if shape.webextension {
                Some("webextension")
            } else if shape.i18next {
                Some("i18next")
            } else if shape.all_strings {
                Some("json")
            } else {
                None
            }
        },
        _ => None,
    }
}

/// The only top-level key of a YAML mapping, Ruby on Rails style files are
/// keyed by the language.
pub fn yaml_single_key(content: &str) -> Option<String> {
    let data: BTreeMap<String, IgnoredAny> = serde_yaml2::from_str(content).ok()?;
    if data.len() != 1 {
        return None;
    }
    data.into_keys().next()
}

/// Check for a PHP file returning an array, as Laravel language files do.
pub fn php_returns_array(content: &str) -> bool {
    Regex::new(r"\breturn\s*(\[|array\s*\()").is_ok_and(|matcher| matcher.is_match(content))
}
