// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tree construction: the insertion-mode machine that consumes tokens and
//! grows the document.
//!
//! This module holds the shared state (the stack of open elements, the
//! list of active formatting elements, the element pointers) and the
//! operations the modes are defined in terms of: scope queries, implied
//! end tags, foster parenting, formatting reconstruction, and the adoption
//! agency algorithm. The per-mode token handlers live in `rules`.

pub use crate::interface::{AppendNode, AppendText, NodeOrText, TreeSink};
pub use crate::interface::{LimitedQuirks, NoQuirks, Quirks, QuirksMode};

use self::types::*;

use crate::attrs::AttrMap;
use crate::interface::{ExpandedName, Namespace, QualName};
use crate::tendril::StrTendril;

use crate::tokenizer;
use crate::tokenizer::states as tok_state;
use crate::tokenizer::states::RawKind;
use crate::tokenizer::{Doctype, EndTag, StartTag, Tag, TokenSink, TokenSinkResult};

use std::borrow::Cow::{self, Borrowed};
use std::cell::{Cell, Ref, RefCell};
use std::collections::VecDeque;
use std::fmt;

use crate::tree_builder::tag_sets::*;
use crate::util::str::to_escaped_string;
use log::{debug, log_enabled, Level};

mod data;
mod rules;
mod tag_sets;
mod types;

/// Tree builder options, with an impl for Default.
#[derive(Copy, Clone)]
pub struct TreeBuilderOpts {
    /// Whether `<noscript>` content is a subtree (scripting off) or raw
    /// text (scripting on). This crate never executes scripts, so the
    /// default is off.
    pub scripting_enabled: bool,

    /// Parse as the `srcdoc` of an `<iframe>`, which turns off the quirks
    /// heuristics for a missing or odd DOCTYPE.
    pub iframe_srcdoc: bool,

    /// Leave the DOCTYPE out of the tree.
    pub drop_doctype: bool,

    /// The quirks mode to start in. Default: NoQuirks.
    pub quirks_mode: QuirksMode,
}

impl Default for TreeBuilderOpts {
    fn default() -> TreeBuilderOpts {
        TreeBuilderOpts {
            scripting_enabled: false,
            iframe_srcdoc: false,
            drop_doctype: false,
            quirks_mode: NoQuirks,
        }
    }
}

/// The tree constructor. It is the tokenizer's [`TokenSink`]; tokens come
/// in one at a time and tree operations go out through the [`TreeSink`].
pub struct TreeBuilder<Sink: TreeSink> {
    opts: TreeBuilderOpts,

    /// The DOM this builder grows.
    pub sink: Sink,

    /// The insertion mode.
    mode: Cell<InsertionMode>,

    /// Mode to come back to when `Text` or `InTableText` finishes.
    saved_mode: Cell<Option<InsertionMode>>,

    /// One entry per open `<template>`.
    template_modes: RefCell<Vec<InsertionMode>>,

    /// Character runs held back in `InTableText` until we know whether
    /// they are all whitespace.
    table_text: RefCell<Vec<(CharSplit, StrTendril)>>,

    /// Mirror of the document's quirks mode.
    quirks_mode: Cell<QuirksMode>,

    /// The document node, fetched from the sink once.
    document: Sink::Handle,

    /// The stack of open elements. Grows at the end; the last entry is
    /// the current node.
    open_elements: RefCell<Vec<Sink::Handle>>,

    /// The list of active formatting elements.
    formatting: RefCell<Vec<FormattingEntry<Sink::Handle>>>,

    /// The `<head>` element pointer.
    head_pointer: RefCell<Option<Sink::Handle>>,

    /// The `<form>` element pointer.
    form_pointer: RefCell<Option<Sink::Handle>>,

    /// Cleared once content appears that rules out a frameset document.
    frameset_ok: Cell<bool>,

    /// Drop one upcoming LF (after `<pre>` and `<textarea>`).
    skip_newline: Cell<bool>,

    /// Redirect insertions around tables while set.
    foster_parenting: Cell<bool>,

    /// The context element, when parsing a fragment.
    fragment_context: RefCell<Option<Sink::Handle>>,

    /// Line number reported with the current token.
    current_line: Cell<u64>,
}

impl<Sink: TreeSink> TreeBuilder<Sink> {
    /// Create a tree builder for a full document.
    pub fn new(sink: Sink, opts: TreeBuilderOpts) -> TreeBuilder<Sink> {
        let document = sink.get_document();
        TreeBuilder {
            opts,
            sink,
            mode: Cell::new(InsertionMode::Initial),
            saved_mode: Cell::new(None),
            template_modes: Default::default(),
            table_text: Default::default(),
            quirks_mode: Cell::new(opts.quirks_mode),
            document,
            open_elements: Default::default(),
            formatting: Default::default(),
            head_pointer: Default::default(),
            form_pointer: Default::default(),
            frameset_ok: Cell::new(true),
            skip_newline: Default::default(),
            foster_parenting: Default::default(),
            fragment_context: Default::default(),
            current_line: Cell::new(1),
        }
    }

    /// Create a tree builder for the fragment parsing algorithm: a
    /// synthetic `<html>` root is created up front, and the insertion mode
    /// is chosen from the context element.
    pub fn new_for_fragment(
        sink: Sink,
        context: Sink::Handle,
        form_pointer: Option<Sink::Handle>,
        opts: TreeBuilderOpts,
    ) -> TreeBuilder<Sink> {
        let document = sink.get_document();
        let context_is_template = {
            let name = sink.elem_name(&context);
            name.ns == Namespace::Html && name.local == "template"
        };

        let builder = TreeBuilder {
            opts,
            sink,
            mode: Cell::new(InsertionMode::Initial),
            saved_mode: Cell::new(None),
            template_modes: RefCell::new(if context_is_template {
                vec![InsertionMode::InTemplate]
            } else {
                vec![]
            }),
            table_text: Default::default(),
            quirks_mode: Cell::new(opts.quirks_mode),
            document,
            open_elements: Default::default(),
            formatting: Default::default(),
            head_pointer: Default::default(),
            form_pointer: RefCell::new(form_pointer),
            frameset_ok: Cell::new(true),
            skip_newline: Default::default(),
            foster_parenting: Default::default(),
            fragment_context: RefCell::new(Some(context)),
            current_line: Cell::new(1),
        };

        builder.create_root(AttrMap::new());
        builder.mode.set(builder.reset_insertion_mode());
        builder
    }

    /// The tokenizer state the fragment algorithm prescribes for the
    /// context element: raw text for the raw-text elements, RCDATA for
    /// `<title>`/`<textarea>`, and so on.
    pub fn fragment_tokenizer_state(&self) -> tok_state::State {
        let context = self.fragment_context.borrow();
        let context = context.as_ref().expect("not parsing a fragment");
        let name = self.sink.elem_name(context);
        if name.ns != Namespace::Html {
            return tok_state::Data;
        }
        match name.local {
            "title" | "textarea" => tok_state::RawText(tok_state::Rcdata),
            "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                tok_state::RawText(tok_state::Rawtext)
            },
            "script" => tok_state::RawText(tok_state::ScriptData),
            "noscript" if !self.opts.scripting_enabled => tok_state::Data,
            "noscript" => tok_state::RawText(tok_state::Rawtext),
            "plaintext" => tok_state::Plaintext,
            _ => tok_state::Data,
        }
    }

    /// Are we parsing a fragment?
    pub fn is_fragment(&self) -> bool {
        self.fragment_context.borrow().is_some()
    }

    fn trace_step(&self, mode: InsertionMode, token: &Token) {
        if log_enabled!(Level::Debug) {
            debug!("{:?} got {}", mode, to_escaped_string(token));
        }
    }

    /// Push one token through the mode machinery, following every
    /// reprocessing hop until the token is fully consumed.
    fn process_fully(&self, mut token: Token) -> TokenSinkResult {
        // Leftover pieces of a split character run.
        let mut pending = VecDeque::new();

        loop {
            let self_closing_start = matches!(
                token,
                Token::Tag(Tag {
                    kind: StartTag,
                    self_closing: true,
                    ..
                })
            );

            let outcome = if self.use_foreign_rules(&token) {
                self.foreign_content_step(token)
            } else {
                self.step(self.mode.get(), token)
            };

            match outcome {
                Outcome::Done => {
                    if self_closing_start {
                        // A mode that honors the flag reports
                        // DoneAckSelfClosing instead.
                        self.sink
                            .parse_error(Borrowed("Self-closing tag not acknowledged"));
                    }
                    match pending.pop_front() {
                        Some(next) => token = next,
                        None => return tokenizer::TokenSinkResult::Continue,
                    }
                },
                Outcome::DoneAckSelfClosing => match pending.pop_front() {
                    Some(next) => token = next,
                    None => return tokenizer::TokenSinkResult::Continue,
                },
                Outcome::Reprocess(mode, next) => {
                    self.mode.set(mode);
                    token = next;
                },
                Outcome::PeelWhitespace(mut rest) => {
                    let Some((first, is_ws)) =
                        rest.pop_front_char_run(|c| c.is_ascii_whitespace())
                    else {
                        return tokenizer::TokenSinkResult::Continue;
                    };
                    let split = if is_ws {
                        CharSplit::Whitespace
                    } else {
                        CharSplit::NonWhitespace
                    };
                    token = Token::Characters(split, first);
                    if rest.len32() > 0 {
                        pending.push_back(Token::Characters(CharSplit::Unsplit, rest));
                    }
                },
                Outcome::ToPlaintext => {
                    debug_assert!(pending.is_empty());
                    return tokenizer::TokenSinkResult::Plaintext;
                },
                Outcome::ToRawText(kind) => {
                    debug_assert!(pending.is_empty());
                    return tokenizer::TokenSinkResult::RawData(kind);
                },
                Outcome::ChangeEncoding(label) => {
                    return tokenizer::TokenSinkResult::MaybeChangeEncoding(label);
                },
            }
        }
    }
}

impl<Sink: TreeSink> TokenSink for TreeBuilder<Sink> {
    fn process_token(&self, token: tokenizer::Token, line_number: u64) -> TokenSinkResult {
        self.current_line.set(line_number);
        let skip_newline = self.skip_newline.take();

        // DOCTYPEs and tokenizer errors never reach the mode handlers.
        let token = match token {
            tokenizer::ParseError(e) => {
                self.sink.parse_error(e);
                return tokenizer::TokenSinkResult::Continue;
            },

            tokenizer::DoctypeToken(doctype) => {
                if self.mode.get() != InsertionMode::Initial {
                    self.sink.parse_error(Borrowed("DOCTYPE not at the start"));
                    return tokenizer::TokenSinkResult::Continue;
                }
                let (err, quirks) =
                    data::doctype_error_and_quirks(&doctype, self.opts.iframe_srcdoc);
                if err {
                    self.sink.parse_error(Borrowed("Bad DOCTYPE"));
                }
                let Doctype {
                    name,
                    public_id,
                    system_id,
                    force_quirks: _,
                } = doctype;
                if !self.opts.drop_doctype {
                    self.sink.append_doctype_to_document(
                        name.unwrap_or_default(),
                        public_id.unwrap_or_default(),
                        system_id.unwrap_or_default(),
                    );
                }
                self.set_quirks_mode(quirks);
                self.mode.set(InsertionMode::BeforeHtml);
                return tokenizer::TokenSinkResult::Continue;
            },

            tokenizer::TagToken(tag) => Token::Tag(tag),
            tokenizer::CommentToken(text) => Token::Comment(text),
            tokenizer::NullCharacterToken => Token::Null,
            tokenizer::EOFToken => Token::Eof,

            tokenizer::CharacterTokens(mut text) => {
                if skip_newline && text.starts_with("\n") {
                    text.pop_front(1);
                }
                if text.is_empty() {
                    return tokenizer::TokenSinkResult::Continue;
                }
                Token::Characters(CharSplit::Unsplit, text)
            },
        };

        self.process_fully(token)
    }

    fn end(&self) {
        for node in self.open_elements.borrow_mut().drain(..).rev() {
            self.sink.pop(&node);
        }
    }

    fn adjusted_current_node_present_but_not_in_html_namespace(&self) -> bool {
        !self.open_elements.borrow().is_empty()
            && self.sink.elem_name(&self.adjusted_current_node()).ns != Namespace::Html
    }
}

/// Marks where the adoption agency wants the replacement formatting entry.
enum ListPosition<Handle> {
    AtEntryOf(Handle),
    AfterEntryOf(Handle),
}

impl<Sink: TreeSink> TreeBuilder<Sink> {
    // ---- errors ----------------------------------------------------------

    fn unexpected<T: fmt::Debug>(&self, thing: &T) -> Outcome {
        self.sink.parse_error(Cow::from(format!(
            "Unexpected {} in {:?}",
            to_escaped_string(thing),
            self.mode.get()
        )));
        Outcome::Done
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        self.quirks_mode.set(mode);
        self.sink.set_quirks_mode(mode);
    }

    fn stop_parsing(&self) -> Outcome {
        Outcome::Done
    }

    // ---- the stack of open elements --------------------------------------

    fn current_node(&self) -> Ref<'_, Sink::Handle> {
        Ref::map(self.open_elements.borrow(), |elements| {
            elements.last().expect("empty stack of open elements")
        })
    }

    /// The current node, except that in a fragment parse with only the
    /// synthetic root open, it is the context element.
    fn adjusted_current_node(&self) -> Ref<'_, Sink::Handle> {
        if self.open_elements.borrow().len() == 1 {
            let context = self.fragment_context.borrow();
            if let Ok(context) = Ref::filter_map(context, |c| c.as_ref()) {
                return context;
            }
        }
        self.current_node()
    }

    /// The `<html>` element at the bottom of the stack.
    fn stack_root(&self) -> Ref<'_, Sink::Handle> {
        Ref::map(self.open_elements.borrow(), |elements| &elements[0])
    }

    /// The second stack entry, when it is a `<body>`.
    fn body_node(&self) -> Option<Sink::Handle> {
        let elements = self.open_elements.borrow();
        let second = elements.get(1)?;
        self.is_html_element(second, "body").then(|| second.clone())
    }

    fn push(&self, element: &Sink::Handle) {
        self.open_elements.borrow_mut().push(element.clone());
    }

    fn pop(&self) -> Sink::Handle {
        let element = self
            .open_elements
            .borrow_mut()
            .pop()
            .expect("empty stack of open elements");
        self.sink.pop(&element);
        element
    }

    fn stack_position(&self, element: &Sink::Handle) -> Option<usize> {
        self.open_elements
            .borrow()
            .iter()
            .rposition(|n| self.sink.same_node(n, element))
    }

    fn remove_from_stack(&self, element: &Sink::Handle) {
        if let Some(index) = self.stack_position(element) {
            self.open_elements.borrow_mut().remove(index);
            self.sink.pop(element);
        }
    }

    fn in_set<TagSet>(&self, element: &Sink::Handle, set: TagSet) -> bool
    where
        TagSet: Fn(ExpandedName) -> bool,
    {
        set(self.sink.elem_name(element))
    }

    fn is_html_element(&self, element: &Sink::Handle, name: &str) -> bool {
        let elem_name = self.sink.elem_name(element);
        elem_name.ns == Namespace::Html && elem_name.local == name
    }

    fn has_open_html_element(&self, name: &str) -> bool {
        self.open_elements
            .borrow()
            .iter()
            .any(|element| self.is_html_element(element, name))
    }

    fn current_node_is(&self, name: &str) -> bool {
        self.is_html_element(&self.current_node(), name)
    }

    fn current_node_in<TagSet>(&self, set: TagSet) -> bool
    where
        TagSet: Fn(ExpandedName) -> bool,
    {
        set(self.sink.elem_name(&self.current_node()))
    }

    /// Walk the stack top-down looking for a node satisfying `pred`,
    /// stopping (without a match) at any element of the scoping `set`.
    fn in_scope<TagSet, Pred>(&self, set: TagSet, pred: Pred) -> bool
    where
        TagSet: Fn(ExpandedName) -> bool,
        Pred: Fn(Sink::Handle) -> bool,
    {
        for node in self.open_elements.borrow().iter().rev() {
            if pred(node.clone()) {
                return true;
            }
            if set(self.sink.elem_name(node)) {
                return false;
            }
        }
        // The bottom of the stack is <html>, which every scope set
        // contains, so we only get here with an empty stack.
        false
    }

    fn has_in_scope<TagSet>(&self, set: TagSet, name: &str) -> bool
    where
        TagSet: Fn(ExpandedName) -> bool,
    {
        self.in_scope(set, |node| self.is_html_element(&node, name))
    }

    /// Pop until an element of `set` has been popped, returning how many
    /// nodes came off.
    fn pop_until<P>(&self, pred: P) -> usize
    where
        P: Fn(ExpandedName) -> bool,
    {
        let mut popped = 0;
        loop {
            popped += 1;
            match self.open_elements.borrow_mut().pop() {
                None => break,
                Some(element) => {
                    if pred(self.sink.elem_name(&element)) {
                        break;
                    }
                },
            }
        }
        popped
    }

    fn pop_until_named(&self, name: &str) -> usize {
        self.pop_until(|n| n.ns == Namespace::Html && n.local == name)
    }

    /// Close the named element, complaining if other elements had to be
    /// popped to reach it.
    fn pop_to_close(&self, name: &str) {
        if self.pop_until_named(name) != 1 {
            self.sink.parse_error(Cow::from(format!(
                "Unclosed elements while closing <{name}>"
            )));
        }
    }

    /// "Clear the stack back to a ... context": pop until the current
    /// node is in `set`.
    fn clear_stack_to_context<TagSet>(&self, set: TagSet)
    where
        TagSet: Fn(ExpandedName) -> bool,
    {
        while !self.current_node_in(&set) {
            self.open_elements.borrow_mut().pop();
        }
    }

    fn generate_implied_end_tags<TagSet>(&self, set: TagSet)
    where
        TagSet: Fn(ExpandedName) -> bool,
    {
        loop {
            {
                let elements = self.open_elements.borrow();
                let Some(current) = elements.last() else {
                    return;
                };
                if !set(self.sink.elem_name(current)) {
                    return;
                }
            }
            self.pop();
        }
    }

    fn generate_implied_end_tags_except(&self, keep: StrTendril) {
        self.generate_implied_end_tags(|n| {
            if n.ns == Namespace::Html && n.local == &*keep {
                false
            } else {
                implied_end_tags(n)
            }
        });
    }

    // ---- inserting nodes -------------------------------------------------

    /// Where the next node goes. Normally that is the end of the current
    /// node (or of a template's contents), but with foster parenting on
    /// and a table-ish current node, it is next to the nearest table.
    fn appropriate_insertion_point(
        &self,
        override_target: Option<Sink::Handle>,
    ) -> InsertionPoint<Sink::Handle> {
        declare_tag_set!(fosterable = "table" "tbody" "tfoot" "thead" "tr");

        let target = override_target.unwrap_or_else(|| self.current_node().clone());
        if !(self.foster_parenting.get() && self.in_set(&target, fosterable)) {
            if self.is_html_element(&target, "template") {
                return InsertionPoint::Append(self.sink.get_template_contents(&target));
            }
            return InsertionPoint::Append(target);
        }

        // Foster parenting: find the nearest table on the stack. A
        // template between here and there captures the node instead; no
        // table at all means the root gets it.
        let elements = self.open_elements.borrow();
        let mut above = elements.iter().rev().peekable();
        while let Some(node) = above.next() {
            if self.is_html_element(node, "template") {
                return InsertionPoint::Append(self.sink.get_template_contents(node));
            }
            if self.is_html_element(node, "table") {
                return InsertionPoint::Foster {
                    table: node.clone(),
                    table_fallback: (*above.peek().expect("table at stack bottom")).clone(),
                };
            }
        }
        InsertionPoint::Append(self.stack_root().clone())
    }

    fn insert_at(&self, point: InsertionPoint<Sink::Handle>, child: NodeOrText<Sink::Handle>) {
        match point {
            InsertionPoint::Append(parent) => self.sink.append(&parent, child),
            InsertionPoint::Foster {
                table,
                table_fallback,
            } => self
                .sink
                .append_based_on_parent_node(&table, &table_fallback, child),
        }
    }

    fn insert_appropriately(
        &self,
        child: NodeOrText<Sink::Handle>,
        override_target: Option<Sink::Handle>,
    ) {
        let point = self.appropriate_insertion_point(override_target);
        self.insert_at(point, child);
    }

    fn append_text(&self, text: StrTendril) -> Outcome {
        self.insert_appropriately(AppendText(text), None);
        Outcome::Done
    }

    fn append_comment(&self, text: StrTendril) -> Outcome {
        let comment = self.sink.create_comment(text);
        self.insert_appropriately(AppendNode(comment), None);
        Outcome::Done
    }

    fn comment_on_document(&self, text: StrTendril) -> Outcome {
        let comment = self.sink.create_comment(text);
        self.sink.append(&self.document, AppendNode(comment));
        Outcome::Done
    }

    fn comment_on_root(&self, text: StrTendril) -> Outcome {
        let comment = self.sink.create_comment(text);
        self.sink.append(&self.stack_root(), AppendNode(comment));
        Outcome::Done
    }

    fn create_root(&self, attrs: AttrMap) {
        let root = self.sink.create_element(QualName::html("html"), attrs);
        self.push(&root);
        self.sink.append(&self.document, AppendNode(root));
    }

    /// Make an element for a start tag, put it at the appropriate place,
    /// and leave it on the stack of open elements.
    fn insert_open_element(
        &self,
        ns: Namespace,
        name: StrTendril,
        attrs: AttrMap,
    ) -> Sink::Handle {
        let element = self.place_new_element(ns, name, attrs);
        self.push(&element);
        element
    }

    /// Like `insert_open_element`, for elements that close immediately
    /// (void elements and acknowledged self-closing foreign tags).
    fn insert_closed_element(
        &self,
        ns: Namespace,
        name: StrTendril,
        attrs: AttrMap,
    ) -> Sink::Handle {
        self.place_new_element(ns, name, attrs)
    }

    fn place_new_element(&self, ns: Namespace, name: StrTendril, attrs: AttrMap) -> Sink::Handle {
        let element = self.sink.create_element(QualName::new(ns, name), attrs);
        let point = self.appropriate_insertion_point(None);
        self.insert_at(point, AppendNode(element.clone()));
        element
    }

    fn insert_element_for(&self, tag: Tag) -> Sink::Handle {
        self.insert_open_element(Namespace::Html, tag.name, tag.attrs)
    }

    fn insert_closed_element_for(&self, tag: Tag) -> Sink::Handle {
        self.insert_closed_element(Namespace::Html, tag.name, tag.attrs)
    }

    /// Insert an element the markup never spelled out (`<head>`, `<body>`,
    /// `<tbody>`, ...).
    fn insert_implied(&self, name: &str) -> Sink::Handle {
        self.insert_open_element(Namespace::Html, StrTendril::from_slice(name), AttrMap::new())
    }

    // ---- text-only elements ----------------------------------------------

    /// Switch to the `Text` mode and put the tokenizer into `kind`,
    /// remembering where to come back to.
    fn enter_text_mode(&self, kind: RawKind) -> Outcome {
        self.saved_mode.set(Some(self.mode.get()));
        self.mode.set(InsertionMode::Text);
        Outcome::ToRawText(kind)
    }

    /// The generic raw-text / RCDATA element parsing algorithm.
    fn generic_raw_text_parse(&self, tag: Tag, kind: RawKind) -> Outcome {
        self.insert_element_for(tag);
        self.enter_text_mode(kind)
    }

    // ---- the list of active formatting elements --------------------------

    fn position_in_formatting_list(&self, element: &Sink::Handle) -> Option<usize> {
        self.formatting.borrow().iter().position(|entry| match entry {
            FormattingEntry::Marker => false,
            FormattingEntry::Element(h, _) => self.sink.same_node(h, element),
        })
    }

    /// The newest formatting entry with the given tag name, not looking
    /// past a marker. Returns its index and clones of its element and tag.
    fn last_formatting_entry_named(
        &self,
        name: &str,
    ) -> Option<(usize, Sink::Handle, Tag)> {
        let list = self.formatting.borrow();
        for (index, entry) in list.iter().enumerate().rev() {
            match entry {
                FormattingEntry::Marker => return None,
                FormattingEntry::Element(element, tag) => {
                    if &*tag.name == name {
                        return Some((index, element.clone(), tag.clone()));
                    }
                },
            }
        }
        None
    }

    fn entry_is_marker_or_open(&self, entry: &FormattingEntry<Sink::Handle>) -> bool {
        match entry {
            FormattingEntry::Marker => true,
            FormattingEntry::Element(element, _) => self
                .open_elements
                .borrow()
                .iter()
                .any(|n| self.sink.same_node(n, element)),
        }
    }

    /// Reopen formatting elements whose tags were interrupted by something
    /// block-ish, so inline formatting keeps applying.
    /// <https://html.spec.whatwg.org/multipage/#reconstruct-the-active-formatting-elements>
    fn reconstruct_formatting_elements(&self) {
        let start = {
            let list = self.formatting.borrow();
            let Some(newest) = list.last() else { return };
            if self.entry_is_marker_or_open(newest) {
                return;
            }
            // Reconstruction covers the suffix of entries that are
            // neither markers nor still open.
            let mut index = list.len() - 1;
            while index > 0 && !self.entry_is_marker_or_open(&list[index - 1]) {
                index -= 1;
            }
            index
        };

        for index in start..self.formatting.borrow().len() {
            let tag = match &self.formatting.borrow()[index] {
                FormattingEntry::Element(_, tag) => tag.clone(),
                FormattingEntry::Marker => unreachable!("marker in reconstruction range"),
            };
            let element =
                self.insert_open_element(Namespace::Html, tag.name.clone(), tag.attrs.clone());
            self.formatting.borrow_mut()[index] = FormattingEntry::Element(element, tag);
        }
    }

    /// Push a new formatting element, enforcing the Noah's Ark clause: no
    /// more than three entries with the same name and attributes since the
    /// last marker; the oldest one makes room.
    fn insert_formatting_element_for(&self, tag: Tag) -> Sink::Handle {
        let mut matching = 0;
        let mut oldest_match = None;
        {
            let list = self.formatting.borrow();
            for (index, entry) in list.iter().enumerate().rev() {
                match entry {
                    FormattingEntry::Marker => break,
                    FormattingEntry::Element(_, earlier) => {
                        if earlier.equiv_modulo_attr_order(&tag) {
                            matching += 1;
                            oldest_match = Some(index);
                        }
                    },
                }
            }
        }
        if matching >= 3 {
            self.formatting
                .borrow_mut()
                .remove(oldest_match.expect("counted a match without an index"));
        }

        let element =
            self.insert_open_element(Namespace::Html, tag.name.clone(), tag.attrs.clone());
        self.formatting
            .borrow_mut()
            .push(FormattingEntry::Element(element.clone(), tag));
        element
    }

    fn push_formatting_marker(&self) {
        self.formatting.borrow_mut().push(FormattingEntry::Marker);
    }

    fn clear_formatting_to_marker(&self) {
        loop {
            match self.formatting.borrow_mut().pop() {
                None | Some(FormattingEntry::Marker) => break,
                Some(FormattingEntry::Element(..)) => (),
            }
        }
    }

    /// `<a>` while an `<a>` is already in the formatting list: close the
    /// earlier one and scrub it from list and stack.
    fn close_stray_anchor(&self, tag: &Tag) {
        let Some((_, anchor, _)) = self.last_formatting_entry_named("a") else {
            return;
        };
        self.unexpected(tag);
        self.run_adoption_agency(StrTendril::from_slice("a"));
        if let Some(index) = self.position_in_formatting_list(&anchor) {
            self.formatting.borrow_mut().remove(index);
        }
        self.remove_from_stack(&anchor);
    }

    // ---- the adoption agency algorithm -----------------------------------

    /// The adoption agency algorithm: repair mis-nested formatting such as
    /// `<b>x<p>y</b>z`, where the formatting element must be closed but
    /// block content inside it must survive.
    /// <https://html.spec.whatwg.org/multipage/#adoption-agency-algorithm>
    fn run_adoption_agency(&self, subject: StrTendril) {
        // Common fast case: the subject is the current node and carries
        // no formatting entry.
        if self.current_node_is(&subject)
            && self
                .position_in_formatting_list(&self.current_node())
                .is_none()
        {
            self.pop();
            return;
        }

        // The algorithm bounds its own work: at most eight rounds.
        for _ in 0..8 {
            if !self.adoption_agency_round(&subject) {
                return;
            }
        }
    }

    /// One round of the algorithm. Returns whether another round should
    /// run.
    fn adoption_agency_round(&self, subject: &StrTendril) -> bool {
        let Some((entry_index, fmt_element, fmt_tag)) =
            self.last_formatting_entry_named(subject)
        else {
            // Nothing to adopt; fall back to the generic end-tag rules.
            self.any_other_end_tag_in_body(Tag {
                kind: EndTag,
                name: subject.clone(),
                self_closing: false,
                attrs: AttrMap::new(),
            });
            return false;
        };

        let Some(fmt_stack_index) = self.stack_position(&fmt_element) else {
            self.sink
                .parse_error(Borrowed("Formatting element is no longer open"));
            self.formatting.borrow_mut().remove(entry_index);
            return false;
        };

        if !self.in_scope(default_scope, |n| self.sink.same_node(&n, &fmt_element)) {
            self.sink
                .parse_error(Borrowed("Formatting element is out of scope"));
            return false;
        }

        if !self.sink.same_node(&self.current_node(), &fmt_element) {
            self.sink
                .parse_error(Borrowed("Formatting element is not the current node"));
        }

        // The furthest block: the lowest special element above the
        // formatting element. With none, this round is just a close.
        let furthest = self
            .open_elements
            .borrow()
            .iter()
            .enumerate()
            .skip(fmt_stack_index)
            .find(|(_, node)| self.in_set(node, special_tag))
            .map(|(index, node)| (index, node.clone()));
        let Some((block_index, furthest_block)) = furthest else {
            self.open_elements.borrow_mut().truncate(fmt_stack_index);
            self.formatting.borrow_mut().remove(entry_index);
            return false;
        };

        let common_ancestor = self.open_elements.borrow()[fmt_stack_index - 1].clone();

        // Walk upward from the furthest block to the formatting element.
        // Each formatting element passed on the way is replaced by a fresh
        // clone, and the chain is stitched together child-into-parent as
        // we go. `carried` is the node being re-hung at each step.
        let mut bookmark = ListPosition::AtEntryOf(fmt_element.clone());
        let mut carried = furthest_block.clone();
        let mut stack_index = block_index;
        let mut passes = 0u32;

        loop {
            passes += 1;
            stack_index -= 1;
            let node = self.open_elements.borrow()[stack_index].clone();
            if self.sink.same_node(&node, &fmt_element) {
                break;
            }

            let node_entry = self.position_in_formatting_list(&node);

            // Elements visited too often or carrying no formatting entry
            // drop out entirely.
            if passes > 3 {
                if let Some(index) = node_entry {
                    self.formatting.borrow_mut().remove(index);
                }
                self.open_elements.borrow_mut().remove(stack_index);
                continue;
            }
            let Some(node_entry) = node_entry else {
                self.open_elements.borrow_mut().remove(stack_index);
                continue;
            };

            let node_tag = match &self.formatting.borrow()[node_entry] {
                FormattingEntry::Element(element, tag) => {
                    debug_assert!(self.sink.same_node(element, &node));
                    tag.clone()
                },
                FormattingEntry::Marker => unreachable!("marker below a formatting element"),
            };
            let clone = self
                .sink
                .create_element(QualName::html(node_tag.name.clone()), node_tag.attrs.clone());
            self.open_elements.borrow_mut()[stack_index] = clone.clone();
            self.formatting.borrow_mut()[node_entry] =
                FormattingEntry::Element(clone.clone(), node_tag);

            if self.sink.same_node(&carried, &furthest_block) {
                bookmark = ListPosition::AfterEntryOf(clone.clone());
            }

            self.sink.remove_from_parent(&carried);
            self.sink.append(&clone, AppendNode(carried));
            carried = clone;
        }

        // The last carried node moves under the common ancestor, through
        // the usual insertion rules so tables foster it correctly.
        self.sink.remove_from_parent(&carried);
        self.insert_appropriately(AppendNode(carried), Some(common_ancestor));

        // A fresh clone of the formatting element swallows the furthest
        // block's children and becomes its last child.
        let replacement = self
            .sink
            .create_element(QualName::html(fmt_tag.name.clone()), fmt_tag.attrs.clone());
        self.sink.reparent_children(&furthest_block, &replacement);
        self.sink
            .append(&furthest_block, AppendNode(replacement.clone()));

        // The list entry moves to the bookmark...
        let replacement_entry = FormattingEntry::Element(replacement.clone(), fmt_tag);
        match bookmark {
            ListPosition::AtEntryOf(spot) => {
                let index = self
                    .position_in_formatting_list(&spot)
                    .expect("bookmark vanished from the formatting list");
                self.formatting.borrow_mut()[index] = replacement_entry;
            },
            ListPosition::AfterEntryOf(spot) => {
                let index = self
                    .position_in_formatting_list(&spot)
                    .expect("bookmark vanished from the formatting list")
                    + 1;
                self.formatting.borrow_mut().insert(index, replacement_entry);
                let stale = self
                    .position_in_formatting_list(&fmt_element)
                    .expect("adopted element vanished from the formatting list");
                self.formatting.borrow_mut().remove(stale);
            },
        }

        // ...and on the stack the clone sits right below the furthest
        // block, while the adopted element is gone.
        self.remove_from_stack(&fmt_element);
        let below_block = self
            .stack_position(&furthest_block)
            .expect("furthest block vanished from the stack")
            + 1;
        self.open_elements
            .borrow_mut()
            .insert(below_block, replacement);

        true
    }

    // ---- mode-shared behaviors -------------------------------------------

    /// End-of-body check: anything still open besides the elements that
    /// may legitimately be implied closed is worth one diagnostic.
    fn report_unclosed_at_end(&self) {
        declare_tag_set!(closeable = "body" "html" "dd" "dt" "li" "optgroup" "option" "p"
            "rb" "rp" "rt" "rtc" "tbody" "td" "tfoot" "th" "thead" "tr");

        for node in self.open_elements.borrow().iter() {
            if !self.in_set(node, closeable) {
                self.sink
                    .parse_error(Borrowed("Elements still open at end of document"));
                return;
            }
        }
    }

    fn close_p_element(&self) {
        declare_tag_set!(implied_except_p = [implied_end_tags] - "p");
        self.generate_implied_end_tags(implied_except_p);
        self.pop_to_close("p");
    }

    fn close_p_element_in_button_scope(&self) {
        if self.has_in_scope(button_scope, "p") {
            self.close_p_element();
        }
    }

    fn input_is_hidden(&self, tag: &Tag) -> bool {
        tag.attrs
            .get("type")
            .is_some_and(|value| value.eq_ignore_ascii_case("hidden"))
    }

    /// Run a token through the `InBody` rules with foster parenting
    /// switched on, for content a table cannot hold.
    fn process_with_foster_parenting(&self, token: Token) -> Outcome {
        self.foster_parenting.set(true);
        let outcome = self.step(InsertionMode::InBody, token);
        self.foster_parenting.set(false);
        outcome
    }

    /// Character tokens in table modes: hold them back if they might be
    /// pure whitespace, otherwise foster them out right away.
    fn buffer_table_text(&self, token: Token) -> Outcome {
        declare_tag_set!(table_like = "table" "tbody" "tfoot" "thead" "tr");
        if self.current_node_in(table_like) {
            debug_assert!(self.table_text.borrow().is_empty());
            self.saved_mode.set(Some(self.mode.get()));
            Outcome::Reprocess(InsertionMode::InTableText, token)
        } else {
            self.sink
                .parse_error(Borrowed("Stray characters in table"));
            self.process_with_foster_parenting(token)
        }
    }

    /// Pick the insertion mode that matches the stack, for when a table or
    /// template ends and for fragment setup.
    /// <https://html.spec.whatwg.org/multipage/#reset-the-insertion-mode-appropriately>
    fn reset_insertion_mode(&self) -> InsertionMode {
        let elements = self.open_elements.borrow();
        for (position, node) in elements.iter().enumerate().rev() {
            let last = position == 0;

            // In a fragment parse, the bottommost node stands in for the
            // context element.
            let context;
            let node = if last && self.is_fragment() {
                context = self.fragment_context.borrow();
                context.as_ref().unwrap()
            } else {
                node
            };

            let name = self.sink.elem_name(node);
            if name.ns != Namespace::Html {
                continue;
            }
            match name.local {
                "select" => {
                    // In a table, select parses differently; look for one
                    // between here and the nearest template.
                    for above in elements[..position].iter().rev() {
                        if self.is_html_element(above, "template") {
                            break;
                        }
                        if self.is_html_element(above, "table") {
                            return InsertionMode::InSelectInTable;
                        }
                    }
                    return InsertionMode::InSelect;
                },
                "td" | "th" if !last => return InsertionMode::InCell,
                "tr" => return InsertionMode::InRow,
                "tbody" | "thead" | "tfoot" => return InsertionMode::InTableBody,
                "caption" => return InsertionMode::InCaption,
                "colgroup" => return InsertionMode::InColumnGroup,
                "table" => return InsertionMode::InTable,
                "template" => {
                    return *self
                        .template_modes
                        .borrow()
                        .last()
                        .expect("open template without a template mode")
                },
                "head" if !last => return InsertionMode::InHead,
                "body" => return InsertionMode::InBody,
                "frameset" => return InsertionMode::InFrameset,
                "html" => {
                    return match *self.head_pointer.borrow() {
                        None => InsertionMode::BeforeHead,
                        Some(_) => InsertionMode::AfterHead,
                    }
                },
                _ => (),
            }
        }
        InsertionMode::InBody
    }

    fn close_the_cell(&self) {
        self.generate_implied_end_tags(implied_end_tags);
        if self.pop_until(td_th) != 1 {
            self.sink
                .parse_error(Borrowed("Unclosed elements while closing a table cell"));
        }
        self.clear_formatting_to_marker();
    }

    /// Any other end tag in body: close the named element if it is open
    /// and nothing special stands in the way.
    fn any_other_end_tag_in_body(&self, tag: Tag) {
        let mut found = None;
        for (index, node) in self.open_elements.borrow().iter().enumerate().rev() {
            if self.is_html_element(node, &tag.name) {
                found = Some(index);
                break;
            }
            if self.in_set(node, special_tag) {
                self.sink
                    .parse_error(Borrowed("Stray end tag blocked by a special element"));
                return;
            }
        }

        let Some(found) = found else {
            self.unexpected(&tag);
            return;
        };

        self.generate_implied_end_tags_except(tag.name.clone());
        if found != self.open_elements.borrow().len() - 1 {
            self.unexpected(&tag);
        }
        self.open_elements.borrow_mut().truncate(found);
    }

    // ---- foreign content -------------------------------------------------

    /// Decide whether this token is processed with the foreign-content
    /// rules, based on the adjusted current node and the integration
    /// points.
    fn use_foreign_rules(&self, token: &Token) -> bool {
        if matches!(token, Token::Eof) || self.open_elements.borrow().is_empty() {
            return false;
        }

        let adjusted = self.adjusted_current_node();
        let name = self.sink.elem_name(&adjusted);
        if name.ns == Namespace::Html {
            return false;
        }

        // At integration points, text and most start tags go back to the
        // regular HTML rules.
        if mathml_text_integration_point(name) {
            match token {
                Token::Characters(..) | Token::Null => return false,
                Token::Tag(Tag {
                    kind: StartTag,
                    name,
                    ..
                }) if !matches!(&**name, "mglyph" | "malignmark") => return false,
                _ => (),
            }
        }

        if svg_html_integration_point(name) {
            match token {
                Token::Characters(..) | Token::Null => return false,
                Token::Tag(Tag { kind: StartTag, .. }) => return false,
                _ => (),
            }
        }

        if name.ns == Namespace::MathMl && name.local == "annotation-xml" {
            if let Token::Tag(Tag {
                kind: StartTag,
                name,
                ..
            }) = token
            {
                if &**name == "svg" {
                    return false;
                }
            }
            match token {
                Token::Characters(..)
                | Token::Null
                | Token::Tag(Tag { kind: StartTag, .. }) => {
                    return !self
                        .sink
                        .is_mathml_annotation_xml_integration_point(&adjusted);
                },
                _ => (),
            }
        }

        true
    }

    /// `<math>` or `<svg>` in HTML content: open the foreign subtree.
    fn begin_foreign_content(&self, mut tag: Tag, ns: Namespace) -> Outcome {
        match ns {
            Namespace::MathMl => self.adjust_mathml_attributes(&mut tag),
            Namespace::Svg => self.adjust_svg_attributes(&mut tag),
            Namespace::Html => (),
        }

        if tag.self_closing {
            self.insert_closed_element(ns, tag.name, tag.attrs);
            Outcome::DoneAckSelfClosing
        } else {
            self.insert_open_element(ns, tag.name, tag.attrs);
            Outcome::Done
        }
    }

    /// A start tag inside foreign content, in the namespace of the
    /// adjusted current node.
    fn foreign_start_tag(&self, mut tag: Tag) -> Outcome {
        let ns = self.sink.elem_name(&self.adjusted_current_node()).ns;
        match ns {
            Namespace::MathMl => self.adjust_mathml_attributes(&mut tag),
            Namespace::Svg => {
                self.adjust_svg_tag_name(&mut tag);
                self.adjust_svg_attributes(&mut tag);
            },
            Namespace::Html => (),
        }
        if tag.self_closing {
            self.insert_closed_element(ns, tag.name, tag.attrs);
            Outcome::DoneAckSelfClosing
        } else {
            self.insert_open_element(ns, tag.name, tag.attrs);
            Outcome::Done
        }
    }

    /// An HTML tag that kicks us out of foreign content: pop foreign
    /// elements until an integration point or HTML element, then let the
    /// regular rules have the tag.
    fn breakout_from_foreign(&self, tag: Tag) -> Outcome {
        self.unexpected(&tag);
        while !self.current_node_in(|n| {
            n.ns == Namespace::Html
                || mathml_text_integration_point(n)
                || svg_html_integration_point(n)
        }) {
            self.pop();
        }
        self.step(self.mode.get(), Token::Tag(tag))
    }

    /// SVG wants some of its tag names camelCased; the tokenizer lowercased
    /// them.
    fn adjust_svg_tag_name(&self, tag: &mut Tag) {
        let adjusted = match &*tag.name {
            "altglyph" => "altGlyph",
            "altglyphdef" => "altGlyphDef",
            "altglyphitem" => "altGlyphItem",
            "animatecolor" => "animateColor",
            "animatemotion" => "animateMotion",
            "animatetransform" => "animateTransform",
            "clippath" => "clipPath",
            "feblend" => "feBlend",
            "fecolormatrix" => "feColorMatrix",
            "fecomponenttransfer" => "feComponentTransfer",
            "fecomposite" => "feComposite",
            "feconvolvematrix" => "feConvolveMatrix",
            "fediffuselighting" => "feDiffuseLighting",
            "fedisplacementmap" => "feDisplacementMap",
            "fedistantlight" => "feDistantLight",
            "fedropshadow" => "feDropShadow",
            "feflood" => "feFlood",
            "fefunca" => "feFuncA",
            "fefuncb" => "feFuncB",
            "fefuncg" => "feFuncG",
            "fefuncr" => "feFuncR",
            "fegaussianblur" => "feGaussianBlur",
            "feimage" => "feImage",
            "femerge" => "feMerge",
            "femergenode" => "feMergeNode",
            "femorphology" => "feMorphology",
            "feoffset" => "feOffset",
            "fepointlight" => "fePointLight",
            "fespecularlighting" => "feSpecularLighting",
            "fespotlight" => "feSpotLight",
            "fetile" => "feTile",
            "feturbulence" => "feTurbulence",
            "foreignobject" => "foreignObject",
            "glyphref" => "glyphRef",
            "lineargradient" => "linearGradient",
            "radialgradient" => "radialGradient",
            "textpath" => "textPath",
            _ => return,
        };
        tag.name = StrTendril::from_slice(adjusted);
    }

    fn rename_attributes(&self, tag: &mut Tag, renames: &[(&str, &str)]) {
        for &(from, to) in renames {
            tag.attrs.rename(from, to);
        }
    }

    fn adjust_svg_attributes(&self, tag: &mut Tag) {
        static RENAMES: &[(&str, &str)] = &[
            ("attributename", "attributeName"),
            ("attributetype", "attributeType"),
            ("basefrequency", "baseFrequency"),
            ("baseprofile", "baseProfile"),
            ("calcmode", "calcMode"),
            ("clippathunits", "clipPathUnits"),
            ("diffuseconstant", "diffuseConstant"),
            ("edgemode", "edgeMode"),
            ("filterunits", "filterUnits"),
            ("glyphref", "glyphRef"),
            ("gradienttransform", "gradientTransform"),
            ("gradientunits", "gradientUnits"),
            ("kernelmatrix", "kernelMatrix"),
            ("kernelunitlength", "kernelUnitLength"),
            ("keypoints", "keyPoints"),
            ("keysplines", "keySplines"),
            ("keytimes", "keyTimes"),
            ("lengthadjust", "lengthAdjust"),
            ("limitingconeangle", "limitingConeAngle"),
            ("markerheight", "markerHeight"),
            ("markerunits", "markerUnits"),
            ("markerwidth", "markerWidth"),
            ("maskcontentunits", "maskContentUnits"),
            ("maskunits", "maskUnits"),
            ("numoctaves", "numOctaves"),
            ("pathlength", "pathLength"),
            ("patterncontentunits", "patternContentUnits"),
            ("patterntransform", "patternTransform"),
            ("patternunits", "patternUnits"),
            ("pointsatx", "pointsAtX"),
            ("pointsaty", "pointsAtY"),
            ("pointsatz", "pointsAtZ"),
            ("preservealpha", "preserveAlpha"),
            ("preserveaspectratio", "preserveAspectRatio"),
            ("primitiveunits", "primitiveUnits"),
            ("refx", "refX"),
            ("refy", "refY"),
            ("repeatcount", "repeatCount"),
            ("repeatdur", "repeatDur"),
            ("requiredextensions", "requiredExtensions"),
            ("requiredfeatures", "requiredFeatures"),
            ("specularconstant", "specularConstant"),
            ("specularexponent", "specularExponent"),
            ("spreadmethod", "spreadMethod"),
            ("startoffset", "startOffset"),
            ("stddeviation", "stdDeviation"),
            ("stitchtiles", "stitchTiles"),
            ("surfacescale", "surfaceScale"),
            ("systemlanguage", "systemLanguage"),
            ("tablevalues", "tableValues"),
            ("targetx", "targetX"),
            ("targety", "targetY"),
            ("textlength", "textLength"),
            ("viewbox", "viewBox"),
            ("viewtarget", "viewTarget"),
            ("xchannelselector", "xChannelSelector"),
            ("ychannelselector", "yChannelSelector"),
            ("zoomandpan", "zoomAndPan"),
        ];
        self.rename_attributes(tag, RENAMES);
    }

    fn adjust_mathml_attributes(&self, tag: &mut Tag) {
        static RENAMES: &[(&str, &str)] = &[("definitionurl", "definitionURL")];
        self.rename_attributes(tag, RENAMES);
    }
}
