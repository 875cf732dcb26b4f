// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! arbor parses real-world HTML the way a browser does and gives back an
//! owned document tree that can be queried with CSS selectors and
//! serialized back to markup.
//!
//! Parsing never fails: any input, however mangled, produces a document,
//! with the spec-mandated recovery behaviors applied and a list of parse
//! errors on the side.
//!
//! ```ignore
//! let dom = arbor::parse_document("<p class=a>Hello", Default::default());
//! let p = dom.document.first_node_matching_selector("p.a").unwrap().unwrap();
//! assert_eq!(p.text_content(), "Hello");
//! ```

pub use encoding_rs;
pub use tendril;

pub mod attrs;
pub mod dom;
pub mod encoding;
pub mod entities;
pub mod interface;
pub mod selectors;
pub mod serialize;
pub mod tokenizer;
pub mod tree_builder;
pub mod util;

pub use crate::attrs::AttrMap;
pub use crate::dom::{Dom, Handle, Node, NodeData};
pub use crate::interface::{ExpandedName, Namespace, QualName, QuirksMode};
pub use crate::selectors::{NthExpr, Selector, SelectorParseError};
pub use crate::serialize::{serialize, SerializeOpts, TraversalScope};
pub use crate::tokenizer::TokenizerOpts;
pub use crate::tree_builder::TreeBuilderOpts;
pub use crate::util::smallcharset::SmallCharSet;

use crate::encoding::Confidence;
use crate::interface::TreeSink;
use crate::tokenizer::{Tokenizer, TokenizerResult};
use crate::tree_builder::TreeBuilder;
use crate::util::buffer_queue::BufferQueue;

use tendril::StrTendril;

/// All the parse options, with an impl for `Default`.
#[derive(Clone, Default)]
pub struct ParseOpts {
    pub tokenizer: TokenizerOpts,
    pub tree_builder: TreeBuilderOpts,
}

/// Parse a string of HTML into a document.
pub fn parse_document(input: &str, opts: ParseOpts) -> Dom {
    let tb = TreeBuilder::new(Dom::default(), opts.tree_builder);
    let tok = Tokenizer::new(tb, opts.tokenizer);

    let input_buffer = BufferQueue::default();
    input_buffer.push_back(StrTendril::from_slice(input));

    // A string has no encoding to change; ignore any `<meta charset>`
    // indicator and keep going.
    while let TokenizerResult::MaybeChangeEncoding(_) = tok.feed(&input_buffer) {}
    tok.end();
    tok.sink.sink
}

/// Parse bytes of unknown encoding into a document.
///
/// The encoding is sniffed in the spec's order: byte order mark, then the
/// `charset` parameter of the Content-Type header value (if one is given),
/// then a prescan of the first 1024 bytes for a `<meta>` declaration, then
/// UTF-8. If tree construction later finds a `<meta charset>` that resolves
/// to a different encoding than the tentative guess, the parse is aborted
/// and restarted once with the declared encoding.
pub fn parse_bytes(data: &[u8], content_type: Option<&str>, opts: ParseOpts) -> Dom {
    let (mut current_encoding, mut confidence) = encoding::sniff(data, content_type);

    loop {
        let tb = TreeBuilder::new(Dom::default(), opts.tree_builder);
        tb.sink.set_parsed_encoding(current_encoding);
        let tok = Tokenizer::new(tb, opts.tokenizer.clone());

        let input_buffer = BufferQueue::default();
        input_buffer.push_back(encoding::decode(data, current_encoding));

        let mut restart_with = None;
        loop {
            match tok.feed(&input_buffer) {
                TokenizerResult::Done => break,
                TokenizerResult::MaybeChangeEncoding(label) => {
                    if confidence == Confidence::Tentative {
                        match encoding::resolve_encoding_change(current_encoding, &label) {
                            Some(new_encoding) => {
                                restart_with = Some(new_encoding);
                                break;
                            },
                            // The declared encoding is the one already in
                            // use (or unusable); it is certain now.
                            None => confidence = Confidence::Certain,
                        }
                    }
                },
            }
        }

        match restart_with {
            Some(new_encoding) => {
                current_encoding = new_encoding;
                confidence = Confidence::Certain;
            },
            None => {
                tok.end();
                return tok.sink.sink;
            },
        }
    }
}

/// Parse a string of HTML as a fragment, as if it were the contents of the
/// given context element.
///
/// The result's [`Dom::fragment_nodes`] are the parsed nodes: the children
/// of the synthetic root the algorithm builds.
pub fn parse_fragment(
    input: &str,
    context_local_name: &str,
    context_attrs: AttrMap,
    opts: ParseOpts,
) -> Dom {
    let dom = Dom::default();
    let context_elem =
        dom.create_element(QualName::html(context_local_name), context_attrs);
    let tb = TreeBuilder::new_for_fragment(dom, context_elem, None, opts.tree_builder);

    let mut tok_opts = opts.tokenizer;
    tok_opts.initial_state = Some(tb.fragment_tokenizer_state());
    tok_opts.last_start_tag_name = Some(context_local_name.to_string());
    let tok = Tokenizer::new(tb, tok_opts);

    let input_buffer = BufferQueue::default();
    input_buffer.push_back(StrTendril::from_slice(input));

    while let TokenizerResult::MaybeChangeEncoding(_) = tok.feed(&input_buffer) {}
    tok.end();
    tok.sink.sink
}
