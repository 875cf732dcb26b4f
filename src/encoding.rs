// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Determining the character encoding of a byte stream.
//!
//! The sniffing order is the one from the spec: byte order mark, then the
//! transport-layer charset (Content-Type), then a prescan of the first 1024
//! bytes for a `<meta>` declaration, then UTF-8. Everything but the first
//! two is tentative; a `<meta charset>` seen later by the tree builder can
//! still restart the parse.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252, X_USER_DEFINED};
use tendril::StrTendril;

/// <https://html.spec.whatwg.org/#concept-encoding-confidence>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confidence {
    Tentative,
    Certain,
}

/// How many bytes the prescan is allowed to look at.
const PRESCAN_BYTES: usize = 1024;

/// Pick a starting encoding for `data`.
pub fn sniff(data: &[u8], content_type: Option<&str>) -> (&'static Encoding, Confidence) {
    if data.starts_with(b"\xEF\xBB\xBF") {
        return (UTF_8, Confidence::Certain);
    }
    if data.starts_with(b"\xFE\xFF") {
        return (UTF_16BE, Confidence::Certain);
    }
    if data.starts_with(b"\xFF\xFE") {
        return (UTF_16LE, Confidence::Certain);
    }

    if let Some(encoding) = content_type.and_then(charset_from_content_type) {
        return (encoding, Confidence::Certain);
    }

    if let Some(encoding) = prescan(&data[..data.len().min(PRESCAN_BYTES)]) {
        return (encoding, Confidence::Tentative);
    }

    (UTF_8, Confidence::Tentative)
}

/// Decode the whole buffer with `encoding`, replacing malformed sequences
/// with U+FFFD. A matching BOM is removed.
pub fn decode(data: &[u8], encoding: &'static Encoding) -> StrTendril {
    let (text, _, _) = encoding.decode(data);
    StrTendril::from_slice(&text)
}

/// The charset parameter of a Content-Type header value, if any.
pub fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    let tendril = StrTendril::from_slice(content_type);
    let label = extract_a_character_encoding_from_a_meta_element(tendril)?;
    Encoding::for_label(label.trim().as_bytes())
}

/// Resolve an encoding label found mid-parse against the encoding currently
/// in use. Returns the encoding to restart with, or `None` if the current
/// one should be kept (and treated as certain).
///
/// <https://html.spec.whatwg.org/#change-the-encoding>
pub fn resolve_encoding_change(
    current: &'static Encoding,
    label: &str,
) -> Option<&'static Encoding> {
    let mut new_encoding = Encoding::for_label(label.trim().as_bytes())?;

    // Step 1. If the encoding that is already being used to interpret the
    // input stream is UTF-16BE/LE, the new encoding is ignored.
    if current == UTF_16BE || current == UTF_16LE {
        return None;
    }

    // Step 2. If the new encoding is UTF-16BE/LE, then change it to UTF-8.
    if new_encoding == UTF_16BE || new_encoding == UTF_16LE {
        new_encoding = UTF_8;
    }

    // Step 3. If the new encoding is x-user-defined, then change it to
    // windows-1252.
    if new_encoding == X_USER_DEFINED {
        new_encoding = WINDOWS_1252;
    }

    // Step 4. If the new encoding is identical to the one already in use,
    // only the confidence changes.
    if current == new_encoding {
        return None;
    }

    Some(new_encoding)
}

/// Prescan the head of the byte stream for a `<meta>` charset declaration.
///
/// This is a deliberately loose version of the spec's prescan: it finds each
/// `<meta` tag in the prefix and runs the meta-element extraction algorithm
/// over the tag's text, which handles both `charset=...` attributes and
/// `content="text/html; charset=..."` values.
fn prescan(data: &[u8]) -> Option<&'static Encoding> {
    let mut position = 0;
    while position + 5 <= data.len() {
        if !data[position..].starts_with(b"<") {
            position += 1;
            continue;
        }
        let rest = &data[position + 1..];
        if rest.len() < 4 || !rest[..4].eq_ignore_ascii_case(b"meta") {
            position += 1;
            continue;
        }
        let after = rest.get(4).copied();
        if !matches!(after, Some(b'\t' | b'\n' | b'\x0C' | b'\r' | b' ' | b'/')) {
            position += 1;
            continue;
        }

        let tag_start = position + 5;
        let tag_end = data[tag_start..]
            .iter()
            .position(|&b| b == b'>')
            .map(|i| tag_start + i)
            .unwrap_or(data.len());
        let tag = String::from_utf8_lossy(&data[tag_start..tag_end]);
        if let Some(label) =
            extract_a_character_encoding_from_a_meta_element(StrTendril::from_slice(&tag))
        {
            if let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) {
                // UTF-16 declarations in content are treated as UTF-8.
                if encoding == UTF_16BE || encoding == UTF_16LE {
                    return Some(UTF_8);
                }
                if encoding == X_USER_DEFINED {
                    return Some(WINDOWS_1252);
                }
                return Some(encoding);
            }
        }
        position = tag_end;
    }
    None
}

/// <https://html.spec.whatwg.org/multipage/#algorithm-for-extracting-a-character-encoding-from-a-meta-element>
pub(crate) fn extract_a_character_encoding_from_a_meta_element(
    input: StrTendril,
) -> Option<StrTendril> {
    // Step 1. Let position be a pointer into s, initially pointing at the start of the string.
    let mut position = 0;
    loop {
        // Step 2. Loop: Find the first seven characters in s after position that are an ASCII
        // case-insensitive match for the word "charset". If no such match is found, return nothing.
        loop {
            let candidate = input.as_bytes().get(position..position + "charset".len())?;
            if candidate.eq_ignore_ascii_case(b"charset") {
                break;
            }

            position += 1;
        }
        position += "charset".len();

        // Step 3. Skip any ASCII whitespace that immediately follow the word "charset" (there might not be any).
        position += input.as_bytes()[position..]
            .iter()
            .take_while(|byte| byte.is_ascii_whitespace())
            .count();

        // Step 4. If the next character is not a U+003D EQUALS SIGN (=), then move position to point just before
        // that next character, and jump back to the step labeled loop.
        if input.as_bytes().get(position)? == &b'=' {
            break;
        }
    }
    // Skip the "="
    position += 1;

    // Step 5. Skip any ASCII whitespace that immediately follow the equals sign (there might not be any).
    position += input.as_bytes()[position..]
        .iter()
        .take_while(|byte| byte.is_ascii_whitespace())
        .count();

    // Step 6. Process the next character as follows:
    match input.as_bytes().get(position)? {
        quote @ (b'"' | b'\'') => {
            // Return the result of getting an encoding from the substring that is between this character
            // and the next earliest occurrence of this character.
            let length = input.as_bytes()[position + 1..]
                .iter()
                .position(|byte| byte == quote)?;
            Some(input.subtendril(position as u32 + 1, length as u32))
        },
        _ => {
            // Return the result of getting an encoding from the substring that consists of this character
            // up to but not including the first ASCII whitespace or U+003B SEMICOLON character (;),
            // or the end of s, whichever comes first.
            let length = input.as_bytes()[position..]
                .iter()
                .position(|byte| byte.is_ascii_whitespace() || *byte == b';');
            if let Some(length) = length {
                Some(input.subtendril(position as u32, length as u32))
            } else {
                Some(input.subtendril(position as u32, (input.len() - position) as u32))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_element_without_charset() {
        assert_eq!(
            extract_a_character_encoding_from_a_meta_element(StrTendril::from_slice("foobar")),
            None
        );
    }

    #[test]
    fn meta_element_with_capitalized_charset() {
        assert_eq!(
            extract_a_character_encoding_from_a_meta_element(StrTendril::from_slice(
                "cHarSet=utf8"
            )),
            Some(StrTendril::from_slice("utf8"))
        );
    }

    #[test]
    fn meta_element_with_no_equals_after_charset() {
        assert_eq!(
            extract_a_character_encoding_from_a_meta_element(StrTendril::from_slice(
                "charset utf8"
            )),
            None
        );
    }

    #[test]
    fn meta_element_with_whitespace_around_equals() {
        assert_eq!(
            extract_a_character_encoding_from_a_meta_element(StrTendril::from_slice(
                "charset \t=\tutf8"
            )),
            Some(StrTendril::from_slice("utf8"))
        );
    }

    #[test]
    fn meta_element_with_quoted_value() {
        assert_eq!(
            extract_a_character_encoding_from_a_meta_element(StrTendril::from_slice(
                "charset='utf8'"
            )),
            Some(StrTendril::from_slice("utf8"))
        );
        assert_eq!(
            extract_a_character_encoding_from_a_meta_element(StrTendril::from_slice(
                "charset=\"utf8\""
            )),
            Some(StrTendril::from_slice("utf8"))
        );
        assert_eq!(
            extract_a_character_encoding_from_a_meta_element(StrTendril::from_slice(
                "charset='utf8"
            )),
            None
        );
        assert_eq!(
            extract_a_character_encoding_from_a_meta_element(StrTendril::from_slice(
                "charset=\"utf8"
            )),
            None
        );
    }

    #[test]
    fn meta_element_with_implicit_terminator() {
        assert_eq!(
            extract_a_character_encoding_from_a_meta_element(StrTendril::from_slice(
                "charset=utf8 foo"
            )),
            Some(StrTendril::from_slice("utf8"))
        );
        assert_eq!(
            extract_a_character_encoding_from_a_meta_element(StrTendril::from_slice(
                "charset=utf8;foo"
            )),
            Some(StrTendril::from_slice("utf8"))
        );
    }

    #[test]
    fn meta_element_with_content_type() {
        assert_eq!(
            extract_a_character_encoding_from_a_meta_element(StrTendril::from_slice(
                "text/html; charset=utf8"
            )),
            Some(StrTendril::from_slice("utf8"))
        );
    }

    #[test]
    fn sniffs_boms() {
        assert_eq!(
            sniff(b"\xEF\xBB\xBF<html>", None),
            (UTF_8, Confidence::Certain)
        );
        assert_eq!(sniff(b"\xFE\xFF\x00<", None), (UTF_16BE, Confidence::Certain));
        assert_eq!(sniff(b"\xFF\xFE<\x00", None), (UTF_16LE, Confidence::Certain));
    }

    #[test]
    fn sniffs_content_type_charset() {
        let (enc, confidence) = sniff(b"<html>", Some("text/html; charset=windows-1252"));
        assert_eq!(enc, WINDOWS_1252);
        assert_eq!(confidence, Confidence::Certain);
    }

    #[test]
    fn prescan_finds_meta_charset() {
        let (enc, confidence) = sniff(b"<!DOCTYPE html><meta charset=\"windows-1252\">", None);
        assert_eq!(enc, WINDOWS_1252);
        assert_eq!(confidence, Confidence::Tentative);
    }

    #[test]
    fn prescan_finds_http_equiv_content() {
        let html = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\">";
        let (enc, _) = sniff(html, None);
        assert_eq!(enc, WINDOWS_1252);
    }

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(sniff(b"<p>hi</p>", None), (UTF_8, Confidence::Tentative));
    }

    #[test]
    fn encoding_change_resolution() {
        assert_eq!(
            resolve_encoding_change(UTF_8, "windows-1252"),
            Some(WINDOWS_1252)
        );
        assert_eq!(resolve_encoding_change(UTF_8, "utf-8"), None);
        assert_eq!(resolve_encoding_change(UTF_16LE, "windows-1252"), None);
        // UTF-16 labels found in content mean the document lied; use UTF-8.
        assert_eq!(resolve_encoding_change(WINDOWS_1252, "utf-16"), Some(UTF_8));
        assert_eq!(resolve_encoding_change(UTF_8, "bogus-charset"), None);
    }
}
