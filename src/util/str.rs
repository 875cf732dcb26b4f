// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

/// If `c` is an ASCII letter, return the corresponding lowercase
/// letter, otherwise None.
pub fn lower_ascii_letter(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_lowercase())
    } else {
        None
    }
}

/// Format a value for logging, escaping control characters.
pub fn to_escaped_string<T: fmt::Debug>(x: &T) -> String {
    let string = format!("{x:?}");
    string.chars().flat_map(|c| c.escape_default()).collect()
}

/// Code points the input stream must flag as parse errors while still
/// passing them through: C0/C1 controls other than whitespace and NUL, and
/// the Unicode noncharacters.
///
/// NUL is excluded here; the tokenizer replaces or drops it state by state.
/// Lone surrogates never reach this check, since decoding already turned
/// them into U+FFFD.
pub fn is_disallowed_code_point(c: char) -> bool {
    let n = c as u32;
    matches!(n, 0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F..=0x9F | 0xFDD0..=0xFDEF)
        || (n & 0xFFFE) == 0xFFFE
}

#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::{is_disallowed_code_point, lower_ascii_letter};
    use mac::test_eq;

    test_eq!(control_is_disallowed, is_disallowed_code_point('\u{01}'), true);
    test_eq!(delete_is_disallowed, is_disallowed_code_point('\u{7f}'), true);
    test_eq!(
        noncharacter_is_disallowed,
        is_disallowed_code_point('\u{fdd0}'),
        true
    );
    test_eq!(
        plane_end_is_disallowed,
        is_disallowed_code_point('\u{1fffe}'),
        true
    );
    test_eq!(tab_is_allowed, is_disallowed_code_point('\t'), false);
    test_eq!(nul_is_not_flagged_here, is_disallowed_code_point('\0'), false);
    test_eq!(nbsp_is_allowed, is_disallowed_code_point('\u{a0}'), false);

    test_eq!(lower_letter_a_is_a, lower_ascii_letter('a'), Some('a'));
    test_eq!(lower_letter_A_is_a, lower_ascii_letter('A'), Some('a'));
    test_eq!(lower_letter_symbol_is_None, lower_ascii_letter('!'), None);
    test_eq!(
        lower_letter_nonascii_is_None,
        lower_ascii_letter('\u{a66e}'),
        None
    );
}
