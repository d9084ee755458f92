// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use crate::data::{COUNTRIES, LANGUAGES, LANGUAGES_BLACKLIST, LOCALES, table_contains};

/// Check whether given (lowercase) code is a country code or a script subtag.
pub fn is_country_code(code: &str) -> bool {
    let code = code.to_lowercase();
    table_contains(COUNTRIES, &code) || table_contains(LOCALES, &code)
}

fn is_plain_language_code(code: &str) -> bool {
    table_contains(LANGUAGES, code) && !table_contains(LANGUAGES_BLACKLIST, code)
}

/// Check if a path token looks like a language code.
///
/// Accepts plain codes (`cs`, `kab`, `sr@latin`) and compounds of a language
/// and a country or script (`pt_BR`, `en-US`, `zh_Hant`). Case is ignored and
/// `-` is treated as `_`. Codes from the blacklist are always rejected, also
/// as the language part of a compound.
pub fn is_language_code(token: &str) -> bool {
    let code = token.to_lowercase().replace('-', "_");
    if is_plain_language_code(&code) {
        return true;
    }

    if let Some((language, country)) = code.split_once('_') {
        return is_plain_language_code(language) && is_country_code(country);
    }

    false
}
