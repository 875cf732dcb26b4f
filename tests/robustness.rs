// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Property-style robustness tests over generated input, driven by a small
//! deterministic xorshift generator so failures are reproducible.
//!
//! Three properties:
//!
//! 1. No input, not even arbitrary bytes, makes the parser panic.
//! 2. Serializing a parsed tree and reparsing gives back the same tree
//!    (compared through its serialization).
//! 3. Re-tokenizing serialized output produces no tokenizer parse errors.

use std::cell::Cell;

use arbor::tokenizer::{Token, TokenSink, TokenSinkResult, Tokenizer};
use arbor::util::buffer_queue::BufferQueue;
use arbor::{parse_bytes, parse_document, parse_fragment, AttrMap};

use arbor::tendril::StrTendril;

struct XorShift {
    state: u64,
}

impl XorShift {
    fn new(seed: u64) -> XorShift {
        XorShift {
            state: seed.max(1),
        }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % (n as u64)) as usize
    }
}

#[test]
fn arbitrary_bytes_never_panic() {
    let mut rng = XorShift::new(0x2545F4914F6CDD1D);
    for round in 0..200 {
        let len = rng.below(300);
        let mut data = Vec::with_capacity(len);
        for _ in 0..len {
            // Bias toward syntax characters so we spend time inside tags,
            // doctypes, comments, and references rather than in plain text.
            let b = match rng.below(4) {
                0 => b"<>&;!-=\"'/[]#x"[rng.below(14)],
                1 => b'a' + (rng.below(26) as u8),
                _ => (rng.next() & 0xFF) as u8,
            };
            data.push(b);
        }

        let dom = parse_bytes(&data, None, Default::default());
        // Serializing whatever came out must not panic either.
        let _ = dom.document.inner_html();
        let _ = dom.errors();

        // The same bytes, decoded lossily, through the string entry point.
        let text = String::from_utf8_lossy(&data).into_owned();
        let _ = parse_document(&text, Default::default());

        // And as a fragment in a handful of interesting contexts.
        let context = ["div", "title", "script", "style", "td", "template"][round % 6];
        let _ = parse_fragment(&text, context, AttrMap::new(), Default::default());
    }
}

const TAGS: &[&str] = &[
    "div", "p", "span", "em", "strong", "ul", "li", "section", "article", "h1", "b", "i", "a",
];

const ATTR_NAMES: &[&str] = &["class", "id", "title", "data-x"];

const ENTITIES: &[&str] = &["&amp;", "&lt;", "&notin;", "&#65;", "&nbsp;"];

fn generate_content(rng: &mut XorShift, depth: usize, out: &mut String) {
    let items = 1 + rng.below(4);
    for _ in 0..items {
        match rng.below(6) {
            0 | 1 => {
                // Text run.
                let words = 1 + rng.below(3);
                for _ in 0..words {
                    out.push_str(["lorem ", "ipsum2 ", "x ", "Y "][rng.below(4)]);
                }
            },
            2 => out.push_str(ENTITIES[rng.below(ENTITIES.len())]),
            3 => {
                out.push_str("<!--");
                out.push_str(["note", "a b", "x1"][rng.below(3)]);
                out.push_str("-->");
            },
            _ if depth < 4 => {
                let tag = TAGS[rng.below(TAGS.len())];
                out.push('<');
                out.push_str(tag);
                if rng.below(2) == 0 {
                    let attr = ATTR_NAMES[rng.below(ATTR_NAMES.len())];
                    out.push(' ');
                    out.push_str(attr);
                    out.push_str("=\"v");
                    out.push_str(&rng.below(100).to_string());
                    out.push('"');
                }
                out.push('>');
                generate_content(rng, depth + 1, out);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            },
            _ => out.push_str("tail "),
        }
    }
}

fn generate_document(rng: &mut XorShift) -> String {
    let mut out = String::from("<!DOCTYPE html><html><head><title>t</title></head><body>");
    generate_content(rng, 0, &mut out);
    out.push_str("</body></html>");
    out
}

#[test]
fn serialize_reparse_serialize_is_a_fixed_point() {
    let mut rng = XorShift::new(0x9E3779B97F4A7C15);
    for _ in 0..50 {
        let input = generate_document(&mut rng);
        let once = parse_document(&input, Default::default())
            .document
            .inner_html();
        let twice = parse_document(&once, Default::default())
            .document
            .inner_html();
        assert_eq!(once, twice, "diverged for input {input:?}");
    }
}

struct ErrorCount {
    errors: Cell<usize>,
}

impl TokenSink for ErrorCount {
    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult {
        if let Token::ParseError(_) = token {
            self.errors.set(self.errors.get() + 1);
        }
        TokenSinkResult::Continue
    }
}

fn count_tokenizer_errors(input: &str) -> usize {
    let tok = Tokenizer::new(
        ErrorCount {
            errors: Cell::new(0),
        },
        Default::default(),
    );
    let buffer = BufferQueue::default();
    buffer.push_back(StrTendril::from_slice(input));
    let _ = tok.feed(&buffer);
    tok.end();
    tok.sink.errors.get()
}

#[test]
fn serialized_output_retokenizes_cleanly() {
    let mut rng = XorShift::new(0xD1B54A32D192ED03);
    for _ in 0..50 {
        let input = generate_document(&mut rng);
        let serialized = parse_document(&input, Default::default())
            .document
            .inner_html();
        assert_eq!(
            count_tokenizer_errors(&serialized),
            0,
            "tokenizer errors in serialized output {serialized:?}"
        );
    }
}
