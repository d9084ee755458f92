// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];

const BOM_MAP: &[(&[u8], &str)] = &[
    (BOM_UTF8, "utf-8"),
    (BOM_UTF16_BE, "utf-16"),
    (BOM_UTF16_LE, "utf-16"),
];

/// Simplified charset detection.
///
/// Returns a charset label when the content tells it for sure: a byte order
/// mark, or non-ASCII content which is valid UTF-8. Pure ASCII and content in
/// legacy 8-bit encodings give `None`, callers keep their default then.
pub fn detect_charset(content: &[u8]) -> Option<&'static str> {
    for &(prefix, charset) in BOM_MAP {
        if content.starts_with(prefix) {
            return Some(charset);
        }
    }

    if content.is_ascii() {
        return None;
    }
    match std::str::from_utf8(content) {
        Ok(_) => Some("utf-8"),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "zkouška sirén";
    const SHORT: &str = "zkouška";
    const EMOJI: &str = "🦬 🦣 🦫 🐻 🦤 🪶 🦭 🪲 🪳 🪰 ";

    fn encode_utf16le_with_bom(text: &str) -> Vec<u8> {
        let mut result = BOM_UTF16_LE.to_vec();
        for unit in text.encode_utf16() {
            result.extend_from_slice(&unit.to_le_bytes());
        }
        result
    }

    #[test]
    fn tst_plain() {
        assert_eq!(detect_charset(b"plain ascii text"), None);
        // "zkouška" in ISO-8859-2
        assert_eq!(detect_charset(b"zkou\xb9ka"), None);
        assert_eq!(detect_charset(b"zkou\xb9ka sir\xe9n"), None);
    }

    #[test]
    fn tst_utf_8() {
        for text in [TEXT, SHORT, EMOJI] {
            assert_eq!(detect_charset(text.as_bytes()), Some("utf-8"));
        }
    }

    #[test]
    fn tst_utf_8_bom() {
        for text in [TEXT, SHORT, EMOJI, "ascii"] {
            let mut content = BOM_UTF8.to_vec();
            content.extend_from_slice(text.as_bytes());
            assert_eq!(detect_charset(&content), Some("utf-8"));
        }
    }

    #[test]
    fn tst_utf_16() {
        for text in [TEXT, SHORT, EMOJI] {
            assert_eq!(detect_charset(&encode_utf16le_with_bom(text)), Some("utf-16"));
        }
    }
}
