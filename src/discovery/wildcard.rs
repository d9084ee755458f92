// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

//! Turning concrete paths into language wildcard masks.

use std::collections::HashSet;

use regex::Regex;

use crate::language::is_language_code;

fn is_separator(token: &str) -> bool {
    matches!(token, "_" | "-" | ".")
}

/// Split on `_`, `-` and `.`, keeping the separators as tokens.
///
/// The result always alternates between words and separators, words may be
/// empty: `"_de"` gives `["", "_", "de"]`.
pub fn split_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (pos, ch) in text.char_indices() {
        if matches!(ch, '_' | '-' | '.') {
            tokens.push(&text[start..pos]);
            tokens.push(&text[pos..pos + 1]);
            start = pos + 1;
        }
    }
    tokens.push(&text[start..]);
    tokens
}

/// Generate language wildcard for a path part.
///
/// Returns `None` if the part does not contain a language code.
pub fn get_wildcard(part: &str) -> Option<String> {
    if is_language_code(part) {
        return Some("*".to_string());
    }
    let (base, ext) = part.rsplit_once('.')?;

    // <language>.extension
    if is_language_code(base) {
        return Some(format!("*.{ext}"));
    }

    // prefix.<language>.extension
    if let Some((prefix, token)) = base.split_once('.') {
        if is_language_code(token) {
            return Some(format!("{prefix}.*.{ext}"));
        }
    }

    // prefix-<language>.extension, prefix_<language>.extension and friends
    let tokens = split_tokens(base);
    for (pos, token) in tokens.iter().enumerate() {
        if is_separator(token) || !is_language_code(token) {
            continue;
        }
        let mut end = pos + 1;
        if pos + 3 <= tokens.len() && is_language_code(&tokens[pos..pos + 3].concat()) {
            end = pos + 3;
        }
        // The code has to start the name or be followed by a dot,
        // otherwise it is most likely a word inside an identifier.
        if pos != 0 && end != tokens.len() && tokens[end] != "." {
            continue;
        }
        return Some(format!("{}*{}.{}", tokens[..pos].concat(), tokens[end..].concat(), ext));
    }

    None
}

/// Generate all masks for a relative path, one for each part containing a
/// language code.
///
/// The matched part is replaced in every other part containing it as a
/// separated token as well, so `help/pt_BR/pt_BR.po` gives `help/*/*.po`.
pub fn path_masks(path: &str) -> Vec<String> {
    let parts: Vec<&str> = path.split('/').collect();
    let mut skip = HashSet::new();
    let mut masks = Vec::new();

    for (pos, part) in parts.iter().enumerate() {
        if skip.contains(&pos) {
            continue;
        }
        let Some(wildcard) = get_wildcard(part) else {
            continue;
        };
        let Ok(matcher) = Regex::new(&format!("(^|[._-]){}($|[._-])", regex::escape(part))) else {
            continue;
        };
        let replacement = format!("${{1}}{}${{2}}", wildcard.replace('$', "$$"));

        let mut mask: Vec<String> = parts.iter().map(|part| part.to_string()).collect();
        for (i, current) in parts.iter().enumerate() {
            if matcher.is_match(current) {
                skip.insert(i);
                mask[i] = matcher.replace_all(current, replacement.as_str()).into_owned();
            }
        }
        mask[pos] = wildcard;
        masks.push(mask.join("/"));
    }

    masks
}

/// Mask for a single file: the file stem replaced by a wildcard.
pub fn eager_mask(path: &str) -> String {
    let (directory, filename) = match path.rsplit_once('/') {
        Some((directory, filename)) => (Some(directory), filename),
        None => (None, path),
    };
    let wildcard = match filename.rsplit_once('.') {
        Some((_, ext)) => format!("*.{ext}"),
        None => "*".to_string(),
    };
    match directory {
        Some(directory) => format!("{directory}/{wildcard}"),
        None => wildcard,
    }
}
