// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CSS selector matching over the DOM.
//!
//! Implements Selectors Level 3, minus what makes no sense without a
//! renderer or user interaction: `:link`, `:visited`, `:active`, `:hover`,
//! `:focus`, `:target`, `:lang()`, `:dir()`, and all pseudo-elements.
//! `:not()` is relaxed to accept any selector.
//!
//! A parsed [`Selector`] is immutable and reusable; parse once and query
//! many times.

use thiserror::Error;

use crate::dom::Handle;

mod matcher;
mod parser;

/// The error produced when a selector string cannot be parsed. Carries the
/// original input and the 0-based character offset of the failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid selector {input:?}: {message} (at offset {location})")]
pub struct SelectorParseError {
    pub message: String,
    pub location: usize,
    pub input: String,
}

/// A parsed CSS selector (possibly a comma-separated selector list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    groups: Vec<ComplexSelector>,
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Selector, SelectorParseError> {
        let mut parser = parser::Parser::new(input);
        let groups = parser.parse_selector_list()?;
        if !parser.at_end() {
            return Err(parser.error_here("unexpected trailing input"));
        }
        Ok(Selector {
            source: input.to_string(),
            groups,
        })
    }

    pub(crate) fn from_groups(source: String, groups: Vec<ComplexSelector>) -> Selector {
        Selector { source, groups }
    }

    /// The string this selector was parsed from.
    pub fn string(&self) -> &str {
        &self.source
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ComplexSelector {
    /// The rightmost compound selector, the subject of the match.
    head: CompoundSelector,
    /// Remaining compounds in right-to-left order, each with the combinator
    /// that connects it to the one on its right.
    ancestors: Vec<(Combinator, CompoundSelector)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Combinator {
    /// Whitespace.
    Descendant,
    /// `>`
    Child,
    /// `+`
    NextSibling,
    /// `~`
    LaterSibling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompoundSelector {
    components: Vec<SimpleSelector>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SimpleSelector {
    Universal,
    LocalName(String),
    Id(String),
    Class(String),
    Attr { name: String, op: AttrOp },
    Pseudo(PseudoClass),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AttrOp {
    /// `[attr]`
    Exists,
    /// `[attr=value]`
    Equals(String),
    /// `[attr~=value]`
    Includes(String),
    /// `[attr|=value]`
    DashMatch(String),
    /// `[attr^=value]`
    Prefix(String),
    /// `[attr$=value]`
    Suffix(String),
    /// `[attr*=value]`
    Substring(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PseudoClass {
    Root,
    Empty,
    FirstChild,
    LastChild,
    OnlyChild,
    FirstOfType,
    LastOfType,
    OnlyOfType,
    NthChild(NthExpr),
    NthLastChild(NthExpr),
    NthOfType(NthExpr),
    NthLastOfType(NthExpr),
    Enabled,
    Disabled,
    Checked,
    Not(Box<Selector>),
}

/// The `an+b` expression of an `:nth-child`-family pseudo-class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NthExpr {
    /// The coefficient.
    pub a: i32,
    /// The constant.
    pub b: i32,
}

impl NthExpr {
    /// The expression equivalent to `odd`.
    pub const ODD: NthExpr = NthExpr { a: 2, b: 1 };

    /// The expression equivalent to `even`.
    pub const EVEN: NthExpr = NthExpr { a: 2, b: 0 };
}

impl Handle {
    /// The elements in this subtree (the receiver included) matched by the
    /// selector string, in tree order.
    pub fn nodes_matching_selector(
        &self,
        selector: &str,
    ) -> Result<Vec<Handle>, SelectorParseError> {
        let selector = Selector::parse(selector)?;
        Ok(self.nodes_matching_parsed_selector(&selector))
    }

    /// The first element matched by the selector string, in tree order.
    pub fn first_node_matching_selector(
        &self,
        selector: &str,
    ) -> Result<Option<Handle>, SelectorParseError> {
        let selector = Selector::parse(selector)?;
        Ok(self.first_node_matching_parsed_selector(&selector))
    }

    /// The elements in this subtree matched by a precompiled selector.
    pub fn nodes_matching_parsed_selector(&self, selector: &Selector) -> Vec<Handle> {
        self.tree().filter(|node| selector.matches(node)).collect()
    }

    /// The first element in this subtree matched by a precompiled selector.
    pub fn first_node_matching_parsed_selector(&self, selector: &Selector) -> Option<Handle> {
        self.tree().find(|node| selector.matches(node))
    }
}
