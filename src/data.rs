// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

//! Static code tables used by the language-code classifier.
//!
//! All tables are lowercase and sorted, lookups use binary search.

/// Codes which clash with file extensions or common words in path names.
///
/// These are never treated as language codes even when present in [`LANGUAGES`].
pub const LANGUAGES_BLACKLIST: &[&str] = &[
    "arg", "as", "bar", "base", "bi", "cat", "cop", "cos", "div", "eg", "ext", "fa", "fur", "gl",
    "gun", "hit", "id", "if", "in", "io", "is", "lt", "mac", "my", "nav", "new", "no", "nor", "or",
    "per", "pi", "po", "pr", "run", "sa", "sai", "sin", "source", "ss", "sus", "ter", "to", "tr",
    "ts", "wol", "zen",
];

/// Script subtags accepted after a language code, e.g. `sr_Latn` or `zh-Hant`.
pub const LOCALES: &[&str] = &["cyrl", "hans", "hant", "latn"];

/// Language codes: ISO 639-1, the ISO 639-2/3 codes commonly used for
/// software localization, and a few widespread variant spellings.
pub const LANGUAGES: &[&str] = &[
    "aa", "ab", "ace", "ach", "ady", "ae", "af", "ain", "ak", "am", "an", "ang", "anp", "ar",
    "arn", "arq", "ars", "ary", "arz", "as", "ast", "av", "awa", "ay", "az", "ba", "bal", "be",
    "be@latin", "ber", "bg", "bh", "bho", "bi", "bik", "bm", "bn", "bo", "bpy", "br", "brx", "bs",
    "bua", "byn", "ca", "ca@valencia", "cch", "ce", "ceb", "cgg", "ch", "chn", "cho", "chp", "chr",
    "chy", "ckb", "co", "cr", "crh", "cs", "csb", "cu", "cv", "cy", "da", "dak", "de", "dgr",
    "doi", "dsb", "dua", "dv", "dyu", "dz", "ee", "efi", "eka", "el", "en", "eo", "es", "es_419",
    "et", "eu", "ewo", "fa", "ff", "fi", "fil", "fj", "fo", "fon", "fr", "frp", "frr", "frs",
    "fuc", "fur", "fy", "ga", "gaa", "gba", "gd", "gez", "gil", "gl", "gn", "gom", "gon", "gor",
    "grb", "grc", "gsw", "gu", "guc", "gv", "gwi", "ha", "haw", "he", "hi", "hil", "hmn", "hne",
    "ho", "hr", "hsb", "ht", "hu", "hy", "hz", "ia", "iba", "ibb", "id", "ie", "ig", "ii", "ik",
    "ilo", "inh", "io", "is", "it", "iu", "ja", "jam", "jbo", "jp", "jrb", "jv", "ka", "kaa",
    "kab", "kac", "kam", "kbd", "kea", "kg", "kha", "kho", "ki", "kj", "kk", "kl", "km", "kmb",
    "kmr", "kn", "ko", "kok", "kpe", "kr", "krc", "krl", "kru", "ks", "ksh", "ku", "kum", "kut",
    "kv", "kw", "ky", "la", "lah", "lb", "lez", "lfn", "lg", "li", "lij", "lld", "lmo", "ln", "lo",
    "loz", "lt", "ltg", "lu", "lua", "lui", "lun", "luo", "lus", "lv", "lzh", "mai", "mdf", "mdr",
    "mfe", "mg", "mga", "mh", "mhr", "mi", "mjw", "mk", "ml", "mn", "mnc", "mni", "moh", "mos",
    "mr", "mrh", "ms", "mt", "mwl", "mwr", "my", "myv", "na", "nah", "nb", "nd", "nds", "ne",
    "new", "ng", "nia", "niu", "nl", "nn", "no", "nog", "nqo", "nr", "nso", "nub", "nv", "nwc",
    "ny", "nym", "nyn", "nyo", "nzi", "oc", "oj", "om", "or", "os", "osa", "ota", "pa", "pam",
    "pap", "peo", "phn", "pi", "pl", "pon", "ps", "pt", "qu", "rar", "rm", "rn", "ro", "ru", "rup",
    "rw", "sa", "sah", "sat", "sc", "scn", "sco", "sd", "se", "sg", "sga", "shn", "si", "sk", "sl",
    "sm", "sma", "smj", "smn", "sms", "sn", "snk", "so", "sog", "sq", "sr", "sr@cyrillic",
    "sr@latin", "srn", "srr", "ss", "st", "su", "suk", "sus", "sux", "sv", "sw", "syc", "syr",
    "szl", "ta", "te", "ter", "tg", "th", "ti", "tig", "tiv", "tk", "tkl", "tl", "tlh", "tli",
    "tmh", "tn", "to", "tok", "tpi", "tr", "ts", "tsi", "tt", "tvl", "tw", "ty", "tyv", "tzm",
    "udm", "ug", "uga", "uk", "umb", "ur", "uz", "uz@cyrillic", "uz@latin", "vai", "ve", "vec",
    "vi", "vo", "vot", "wa", "wo", "xh", "yao", "yi", "yo", "yue", "za", "zap", "zbl", "zgh", "zh",
    "zu", "zun", "zza",
];

/// ISO 3166-1 alpha-2 country codes.
pub const COUNTRIES: &[&str] = &[
    "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at", "au", "aw", "ax",
    "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bl", "bm", "bn", "bo", "bq",
    "br", "bs", "bt", "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck",
    "cl", "cm", "cn", "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm",
    "do", "dz", "ec", "ee", "eg", "eh", "er", "es", "et", "fi", "fj", "fk", "fm", "fo", "fr",
    "ga", "gb", "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs",
    "gt", "gu", "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in",
    "io", "iq", "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn",
    "kp", "kr", "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv",
    "ly", "ma", "mc", "md", "me", "mf", "mg", "mh", "mk", "ml", "mm", "mn", "mo", "mp", "mq",
    "mr", "ms", "mt", "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni",
    "nl", "no", "np", "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm",
    "pn", "pr", "ps", "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc",
    "sd", "se", "sg", "sh", "si", "sj", "sk", "sl", "sm", "sn", "so", "sr", "ss", "st", "sv",
    "sx", "sy", "sz", "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tr",
    "tt", "tv", "tw", "tz", "ua", "ug", "um", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi",
    "vn", "vu", "wf", "ws", "ye", "yt", "za", "zm", "zw",
];

/// Whether the sorted `table` contains `code`.
pub fn table_contains(table: &[&str], code: &str) -> bool {
    table.binary_search(&code).is_ok()
}
