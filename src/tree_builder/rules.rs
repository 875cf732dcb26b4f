// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The per-mode token handlers, one method per insertion mode, plus the
//! foreign-content rules.
//!
//! Tag dispatch works on `(kind, name)` pairs. Each handler clones the tag
//! name up front so the token itself stays movable into reprocessing and
//! insertion calls. The "anything else" clauses that several match arms
//! share live in small `*_default` methods.

use crate::attrs::AttrMap;
use crate::interface::{Namespace, Quirks, TreeSink};
use crate::tokenizer::states::{Rawtext, Rcdata, ScriptData};
use crate::tokenizer::Tag;
use crate::tokenizer::TagKind::{EndTag, StartTag};
use crate::tree_builder::tag_sets::*;
use crate::tree_builder::types::*;
use crate::tree_builder::TreeBuilder;

use std::borrow::Cow::Borrowed;

use tendril::{SliceExt, StrTendril};

fn contains_non_space(text: &StrTendril) -> bool {
    text.bytes().any(|b| !b.is_ascii_whitespace())
}

impl<Sink: TreeSink> TreeBuilder<Sink> {
    pub(crate) fn step(&self, mode: InsertionMode, token: Token) -> Outcome {
        self.trace_step(mode, &token);
        match mode {
            InsertionMode::Initial => self.initial_mode(token),
            InsertionMode::BeforeHtml => self.before_html_mode(token),
            InsertionMode::BeforeHead => self.before_head_mode(token),
            InsertionMode::InHead => self.in_head_mode(token),
            InsertionMode::InHeadNoscript => self.in_head_noscript_mode(token),
            InsertionMode::AfterHead => self.after_head_mode(token),
            InsertionMode::InBody => self.in_body_mode(token),
            InsertionMode::Text => self.text_mode(token),
            InsertionMode::InTable => self.in_table_mode(token),
            InsertionMode::InTableText => self.in_table_text_mode(token),
            InsertionMode::InCaption => self.in_caption_mode(token),
            InsertionMode::InColumnGroup => self.in_column_group_mode(token),
            InsertionMode::InTableBody => self.in_table_body_mode(token),
            InsertionMode::InRow => self.in_row_mode(token),
            InsertionMode::InCell => self.in_cell_mode(token),
            InsertionMode::InSelect => self.in_select_mode(token),
            InsertionMode::InSelectInTable => self.in_select_in_table_mode(token),
            InsertionMode::InTemplate => self.in_template_mode(token),
            InsertionMode::AfterBody => self.after_body_mode(token),
            InsertionMode::InFrameset => self.in_frameset_mode(token),
            InsertionMode::AfterFrameset => self.after_frameset_mode(token),
            InsertionMode::AfterAfterBody => self.after_after_body_mode(token),
            InsertionMode::AfterAfterFrameset => self.after_after_frameset_mode(token),
        }
    }

    fn initial_mode(&self, token: Token) -> Outcome {
        // A DOCTYPE was already handled before mode dispatch; anything
        // else here means the document starts without one.
        match token {
            Token::Characters(CharSplit::Unsplit, text) => Outcome::PeelWhitespace(text),
            Token::Characters(CharSplit::Whitespace, _) => Outcome::Done,
            Token::Comment(text) => self.comment_on_document(text),
            token => {
                if !self.opts.iframe_srcdoc {
                    self.unexpected(&token);
                    self.set_quirks_mode(Quirks);
                }
                Outcome::Reprocess(InsertionMode::BeforeHtml, token)
            },
        }
    }

    fn before_html_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(CharSplit::Unsplit, text) => Outcome::PeelWhitespace(text),
            Token::Characters(CharSplit::Whitespace, _) => Outcome::Done,
            Token::Comment(text) => self.comment_on_document(text),

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "html") => {
                        self.create_root(tag.attrs);
                        self.mode.set(InsertionMode::BeforeHead);
                        Outcome::Done
                    },

                    // These four close an implied element; all other end
                    // tags are dropped.
                    (EndTag, "head" | "body" | "html" | "br") => {
                        self.before_html_default(Token::Tag(tag))
                    },
                    (EndTag, _) => self.unexpected(&tag),

                    _ => self.before_html_default(Token::Tag(tag)),
                }
            },

            token => self.before_html_default(token),
        }
    }

    fn before_html_default(&self, token: Token) -> Outcome {
        self.create_root(AttrMap::new());
        Outcome::Reprocess(InsertionMode::BeforeHead, token)
    }

    fn before_head_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(CharSplit::Unsplit, text) => Outcome::PeelWhitespace(text),
            Token::Characters(CharSplit::Whitespace, _) => Outcome::Done,
            Token::Comment(text) => self.append_comment(text),

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "html") => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (StartTag, "head") => {
                        *self.head_pointer.borrow_mut() = Some(self.insert_element_for(tag));
                        self.mode.set(InsertionMode::InHead);
                        Outcome::Done
                    },

                    (EndTag, "head" | "body" | "html" | "br") => {
                        self.before_head_default(Token::Tag(tag))
                    },
                    (EndTag, _) => self.unexpected(&tag),

                    _ => self.before_head_default(Token::Tag(tag)),
                }
            },

            token => self.before_head_default(token),
        }
    }

    fn before_head_default(&self, token: Token) -> Outcome {
        *self.head_pointer.borrow_mut() = Some(self.insert_implied("head"));
        Outcome::Reprocess(InsertionMode::InHead, token)
    }

    fn in_head_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(CharSplit::Unsplit, text) => Outcome::PeelWhitespace(text),
            Token::Characters(CharSplit::Whitespace, text) => self.append_text(text),
            Token::Comment(text) => self.append_comment(text),

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "html") => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (StartTag, "base" | "basefont" | "bgsound" | "link") => {
                        self.insert_closed_element_for(tag);
                        Outcome::DoneAckSelfClosing
                    },

                    (StartTag, "meta") => {
                        // A charset declaration may ask the driver to
                        // start over with another encoding.
                        let charset = tag.get_attribute("charset");
                        let http_equiv = tag.get_attribute("http-equiv");
                        let content = tag.get_attribute("content");
                        self.insert_closed_element_for(tag);

                        if let Some(charset) = charset {
                            return Outcome::ChangeEncoding(charset);
                        }
                        if let (Some(http_equiv), Some(content)) = (http_equiv, content) {
                            if http_equiv.eq_ignore_ascii_case("content-type") {
                                if let Some(charset) =
                                    crate::encoding::extract_a_character_encoding_from_a_meta_element(
                                        content,
                                    )
                                {
                                    return Outcome::ChangeEncoding(charset);
                                }
                            }
                        }
                        Outcome::DoneAckSelfClosing
                    },

                    (StartTag, "title") => self.generic_raw_text_parse(tag, Rcdata),

                    (StartTag, "noscript") if !self.opts.scripting_enabled => {
                        self.insert_element_for(tag);
                        self.mode.set(InsertionMode::InHeadNoscript);
                        Outcome::Done
                    },
                    (StartTag, "noframes" | "style" | "noscript") => {
                        self.generic_raw_text_parse(tag, Rawtext)
                    },

                    (StartTag, "script") => self.generic_raw_text_parse(tag, ScriptData),

                    (StartTag, "template") => {
                        self.push_formatting_marker();
                        self.frameset_ok.set(false);
                        self.mode.set(InsertionMode::InTemplate);
                        self.template_modes
                            .borrow_mut()
                            .push(InsertionMode::InTemplate);
                        self.insert_element_for(tag);
                        Outcome::Done
                    },

                    (EndTag, "template") => {
                        if !self.has_open_html_element("template") {
                            self.unexpected(&tag);
                        } else {
                            self.generate_implied_end_tags(implied_end_tags_thorough);
                            self.pop_to_close("template");
                            self.clear_formatting_to_marker();
                            self.template_modes.borrow_mut().pop();
                            self.mode.set(self.reset_insertion_mode());
                        }
                        Outcome::Done
                    },

                    (EndTag, "head") => {
                        self.pop();
                        self.mode.set(InsertionMode::AfterHead);
                        Outcome::Done
                    },

                    (EndTag, "body" | "html" | "br") => self.in_head_default(Token::Tag(tag)),

                    (StartTag, "head") => self.unexpected(&tag),
                    (EndTag, _) => self.unexpected(&tag),

                    _ => self.in_head_default(Token::Tag(tag)),
                }
            },

            token => self.in_head_default(token),
        }
    }

    fn in_head_default(&self, token: Token) -> Outcome {
        self.pop();
        Outcome::Reprocess(InsertionMode::AfterHead, token)
    }

    fn in_head_noscript_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(CharSplit::Unsplit, text) => Outcome::PeelWhitespace(text),
            Token::Characters(CharSplit::Whitespace, _) => {
                self.step(InsertionMode::InHead, token)
            },
            Token::Comment(_) => self.step(InsertionMode::InHead, token),

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "html") => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (EndTag, "noscript") => {
                        self.pop();
                        self.mode.set(InsertionMode::InHead);
                        Outcome::Done
                    },

                    (StartTag, "basefont" | "bgsound" | "link" | "meta" | "noframes"
                        | "style") => self.step(InsertionMode::InHead, Token::Tag(tag)),

                    (EndTag, "br") => self.in_head_noscript_default(Token::Tag(tag)),

                    (StartTag, "head" | "noscript") => self.unexpected(&tag),
                    (EndTag, _) => self.unexpected(&tag),

                    _ => self.in_head_noscript_default(Token::Tag(tag)),
                }
            },

            token => self.in_head_noscript_default(token),
        }
    }

    fn in_head_noscript_default(&self, token: Token) -> Outcome {
        self.unexpected(&token);
        self.pop();
        Outcome::Reprocess(InsertionMode::InHead, token)
    }

    fn after_head_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(CharSplit::Unsplit, text) => Outcome::PeelWhitespace(text),
            Token::Characters(CharSplit::Whitespace, text) => self.append_text(text),
            Token::Comment(text) => self.append_comment(text),

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "html") => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (StartTag, "body") => {
                        self.insert_element_for(tag);
                        self.frameset_ok.set(false);
                        self.mode.set(InsertionMode::InBody);
                        Outcome::Done
                    },

                    (StartTag, "frameset") => {
                        self.insert_element_for(tag);
                        self.mode.set(InsertionMode::InFrameset);
                        Outcome::Done
                    },

                    // Head-only elements arriving late run through the
                    // head rules with the head briefly reopened.
                    (StartTag, "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes"
                        | "script" | "style" | "template" | "title") => {
                        self.unexpected(&tag);
                        let head = self
                            .head_pointer
                            .borrow()
                            .as_ref()
                            .expect("head pointer not set")
                            .clone();
                        self.push(&head);
                        let outcome = self.step(InsertionMode::InHead, Token::Tag(tag));
                        self.remove_from_stack(&head);
                        outcome
                    },

                    (EndTag, "template") => self.step(InsertionMode::InHead, Token::Tag(tag)),

                    (EndTag, "body" | "html" | "br") => self.after_head_default(Token::Tag(tag)),

                    (StartTag, "head") => self.unexpected(&tag),
                    (EndTag, _) => self.unexpected(&tag),

                    _ => self.after_head_default(Token::Tag(tag)),
                }
            },

            token => self.after_head_default(token),
        }
    }

    fn after_head_default(&self, token: Token) -> Outcome {
        self.insert_implied("body");
        Outcome::Reprocess(InsertionMode::InBody, token)
    }

    fn in_body_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Null => self.unexpected(&token),

            Token::Characters(_, text) => {
                self.reconstruct_formatting_elements();
                if contains_non_space(&text) {
                    self.frameset_ok.set(false);
                }
                self.append_text(text)
            },

            Token::Comment(text) => self.append_comment(text),

            Token::Eof => {
                if !self.template_modes.borrow().is_empty() {
                    self.step(InsertionMode::InTemplate, token)
                } else {
                    self.report_unclosed_at_end();
                    self.stop_parsing()
                }
            },

            Token::Tag(tag) => self.in_body_tag(tag),
        }
    }

    fn in_body_tag(&self, tag: Tag) -> Outcome {
        let name = tag.name.clone();
        match (tag.kind, &*name) {
            // -- the document skeleton ------------------------------------

            (StartTag, "html") => {
                self.unexpected(&tag);
                if !self.has_open_html_element("template") {
                    let root = self.stack_root().clone();
                    self.sink.add_attrs_if_missing(&root, tag.attrs);
                }
                Outcome::Done
            },

            (StartTag, "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes"
                | "script" | "style" | "template" | "title")
            | (EndTag, "template") => self.step(InsertionMode::InHead, Token::Tag(tag)),

            (StartTag, "body") => {
                self.unexpected(&tag);
                if let Some(body) = self.body_node() {
                    if self.open_elements.borrow().len() != 1
                        && !self.has_open_html_element("template")
                    {
                        self.frameset_ok.set(false);
                        self.sink.add_attrs_if_missing(&body, tag.attrs);
                    }
                }
                Outcome::Done
            },

            (StartTag, "frameset") => {
                self.unexpected(&tag);
                if !self.frameset_ok.get() {
                    return Outcome::Done;
                }
                let Some(body) = self.body_node() else {
                    return Outcome::Done;
                };

                // A frameset takes over: the body goes away entirely.
                self.sink.remove_from_parent(&body);
                self.open_elements.borrow_mut().truncate(1);
                self.insert_element_for(tag);
                self.mode.set(InsertionMode::InFrameset);
                Outcome::Done
            },

            (EndTag, "body") => {
                if self.has_in_scope(default_scope, "body") {
                    self.report_unclosed_at_end();
                    self.mode.set(InsertionMode::AfterBody);
                } else {
                    self.sink.parse_error(Borrowed("Stray </body>"));
                }
                Outcome::Done
            },

            (EndTag, "html") => {
                if self.has_in_scope(default_scope, "body") {
                    self.report_unclosed_at_end();
                    Outcome::Reprocess(InsertionMode::AfterBody, Token::Tag(tag))
                } else {
                    self.sink.parse_error(Borrowed("Stray </html>"));
                    Outcome::Done
                }
            },

            // -- flow content ---------------------------------------------

            (StartTag, "address" | "article" | "aside" | "blockquote" | "center" | "details"
                | "dialog" | "dir" | "div" | "dl" | "fieldset" | "figcaption" | "figure"
                | "footer" | "header" | "hgroup" | "main" | "menu" | "nav" | "ol" | "p"
                | "search" | "section" | "summary" | "ul") => {
                self.close_p_element_in_button_scope();
                self.insert_element_for(tag);
                Outcome::Done
            },

            (StartTag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6") => {
                self.close_p_element_in_button_scope();
                if self.current_node_in(heading_tag) {
                    self.sink.parse_error(Borrowed("Heading inside a heading"));
                    self.pop();
                }
                self.insert_element_for(tag);
                Outcome::Done
            },

            (StartTag, "pre" | "listing") => {
                self.close_p_element_in_button_scope();
                self.insert_element_for(tag);
                // A newline right after the tag is decorative.
                self.skip_newline.set(true);
                self.frameset_ok.set(false);
                Outcome::Done
            },

            (StartTag, "form") => {
                if self.form_pointer.borrow().is_some() && !self.has_open_html_element("template")
                {
                    self.sink.parse_error(Borrowed("Form inside a form"));
                } else {
                    self.close_p_element_in_button_scope();
                    let form = self.insert_element_for(tag);
                    if !self.has_open_html_element("template") {
                        *self.form_pointer.borrow_mut() = Some(form);
                    }
                }
                Outcome::Done
            },

            (StartTag, "li" | "dd" | "dt") => {
                declare_tag_set!(list_end = "li");
                declare_tag_set!(definition_end = "dd" "dt");
                declare_tag_set!(blockers = [special_tag] - "address" "div" "p");
                let is_list_item = &*name == "li";

                self.frameset_ok.set(false);

                // An open sibling item closes first, unless something
                // more special intervenes.
                let mut close_first = None;
                for node in self.open_elements.borrow().iter().rev() {
                    let node_name = self.sink.elem_name(node);
                    let sibling = if is_list_item {
                        list_end(node_name)
                    } else {
                        definition_end(node_name)
                    };
                    if sibling {
                        close_first = Some(StrTendril::from_slice(node_name.local));
                        break;
                    }
                    if blockers(node_name) {
                        break;
                    }
                }
                if let Some(sibling_name) = close_first {
                    self.generate_implied_end_tags_except(sibling_name.clone());
                    self.pop_to_close(&sibling_name);
                }

                self.close_p_element_in_button_scope();
                self.insert_element_for(tag);
                Outcome::Done
            },

            (StartTag, "plaintext") => {
                self.close_p_element_in_button_scope();
                self.insert_element_for(tag);
                // No way back from PLAINTEXT.
                Outcome::ToPlaintext
            },

            (StartTag, "button") => {
                if self.has_in_scope(default_scope, "button") {
                    self.sink.parse_error(Borrowed("Button inside a button"));
                    self.generate_implied_end_tags(implied_end_tags);
                    self.pop_until_named("button");
                }
                self.reconstruct_formatting_elements();
                self.insert_element_for(tag);
                self.frameset_ok.set(false);
                Outcome::Done
            },

            (EndTag, "address" | "article" | "aside" | "blockquote" | "button" | "center"
                | "details" | "dialog" | "dir" | "div" | "dl" | "fieldset" | "figcaption"
                | "figure" | "footer" | "header" | "hgroup" | "listing" | "main" | "menu"
                | "nav" | "ol" | "pre" | "search" | "section" | "summary" | "ul") => {
                if self.has_in_scope(default_scope, &name) {
                    self.generate_implied_end_tags(implied_end_tags);
                    self.pop_to_close(&name);
                } else {
                    self.unexpected(&tag);
                }
                Outcome::Done
            },

            (EndTag, "form") => {
                if self.has_open_html_element("template") {
                    // Inside a template the form pointer is not used.
                    if !self.has_in_scope(default_scope, "form") {
                        self.sink.parse_error(Borrowed("Stray </form>"));
                        return Outcome::Done;
                    }
                    self.generate_implied_end_tags(implied_end_tags);
                    if !self.current_node_is("form") {
                        self.sink.parse_error(Borrowed("Unclosed elements in <form>"));
                    }
                    self.pop_until_named("form");
                } else {
                    let Some(form) = self.form_pointer.take() else {
                        self.sink.parse_error(Borrowed("Stray </form>"));
                        return Outcome::Done;
                    };
                    if !self.in_scope(default_scope, |n| self.sink.same_node(&form, &n)) {
                        self.sink.parse_error(Borrowed("Stray </form>"));
                        return Outcome::Done;
                    }
                    self.generate_implied_end_tags(implied_end_tags);
                    let current = self.current_node().clone();
                    self.remove_from_stack(&form);
                    if !self.sink.same_node(&current, &form) {
                        self.sink.parse_error(Borrowed("Unclosed elements in <form>"));
                    }
                }
                Outcome::Done
            },

            (EndTag, "p") => {
                if !self.has_in_scope(button_scope, "p") {
                    self.sink.parse_error(Borrowed("Stray </p>"));
                    self.insert_implied("p");
                }
                self.close_p_element();
                Outcome::Done
            },

            (EndTag, "li" | "dd" | "dt") => {
                let open = if &*name == "li" {
                    self.has_in_scope(list_item_scope, &name)
                } else {
                    self.has_in_scope(default_scope, &name)
                };
                if open {
                    self.generate_implied_end_tags_except(name.clone());
                    self.pop_to_close(&name);
                } else {
                    self.sink.parse_error(Borrowed("Stray end tag for list item"));
                }
                Outcome::Done
            },

            (EndTag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6") => {
                // Any open heading satisfies any heading end tag.
                if self.in_scope(default_scope, |n| self.in_set(&n, heading_tag)) {
                    self.generate_implied_end_tags(implied_end_tags);
                    if !self.current_node_is(&name) {
                        self.sink.parse_error(Borrowed("Mismatched heading end tag"));
                    }
                    self.pop_until(heading_tag);
                } else {
                    self.sink.parse_error(Borrowed("Stray heading end tag"));
                }
                Outcome::Done
            },

            // -- formatting elements --------------------------------------

            (StartTag, "a") => {
                self.close_stray_anchor(&tag);
                self.reconstruct_formatting_elements();
                self.insert_formatting_element_for(tag);
                Outcome::Done
            },

            (StartTag, "b" | "big" | "code" | "em" | "font" | "i" | "s" | "small" | "strike"
                | "strong" | "tt" | "u") => {
                self.reconstruct_formatting_elements();
                self.insert_formatting_element_for(tag);
                Outcome::Done
            },

            (StartTag, "nobr") => {
                self.reconstruct_formatting_elements();
                if self.has_in_scope(default_scope, "nobr") {
                    self.sink.parse_error(Borrowed("<nobr> inside <nobr>"));
                    self.run_adoption_agency(StrTendril::from_slice("nobr"));
                    self.reconstruct_formatting_elements();
                }
                self.insert_formatting_element_for(tag);
                Outcome::Done
            },

            (EndTag, "a" | "b" | "big" | "code" | "em" | "font" | "i" | "nobr" | "s" | "small"
                | "strike" | "strong" | "tt" | "u") => {
                self.run_adoption_agency(name);
                Outcome::Done
            },

            (StartTag, "applet" | "marquee" | "object") => {
                self.reconstruct_formatting_elements();
                self.insert_element_for(tag);
                self.push_formatting_marker();
                self.frameset_ok.set(false);
                Outcome::Done
            },

            (EndTag, "applet" | "marquee" | "object") => {
                if self.has_in_scope(default_scope, &name) {
                    self.generate_implied_end_tags(implied_end_tags);
                    self.pop_to_close(&name);
                    self.clear_formatting_to_marker();
                } else {
                    self.unexpected(&tag);
                }
                Outcome::Done
            },

            // -- tables ---------------------------------------------------

            (StartTag, "table") => {
                // Quirks documents keep tables inside an open <p>.
                if self.quirks_mode.get() != Quirks {
                    self.close_p_element_in_button_scope();
                }
                self.insert_element_for(tag);
                self.frameset_ok.set(false);
                self.mode.set(InsertionMode::InTable);
                Outcome::Done
            },

            (StartTag, "caption" | "col" | "colgroup" | "frame" | "head" | "tbody" | "td"
                | "tfoot" | "th" | "thead" | "tr") => {
                self.unexpected(&tag);
                Outcome::Done
            },

            // -- void and raw-text elements -------------------------------

            (EndTag, "br") => {
                // Treated as if it were <br>, minus any attributes.
                self.unexpected(&tag);
                self.in_body_tag(Tag {
                    kind: StartTag,
                    attrs: AttrMap::new(),
                    ..tag
                })
            },

            (StartTag, "area" | "br" | "embed" | "img" | "keygen" | "wbr" | "input") => {
                let hidden_input = &*name == "input" && self.input_is_hidden(&tag);
                self.reconstruct_formatting_elements();
                self.insert_closed_element_for(tag);
                if !hidden_input {
                    self.frameset_ok.set(false);
                }
                Outcome::DoneAckSelfClosing
            },

            (StartTag, "param" | "source" | "track") => {
                self.insert_closed_element_for(tag);
                Outcome::DoneAckSelfClosing
            },

            (StartTag, "hr") => {
                self.close_p_element_in_button_scope();
                self.insert_closed_element_for(tag);
                self.frameset_ok.set(false);
                Outcome::DoneAckSelfClosing
            },

            (StartTag, "image") => {
                // The tag that never was.
                self.unexpected(&tag);
                self.in_body_tag(Tag {
                    name: StrTendril::from_slice("img"),
                    ..tag
                })
            },

            (StartTag, "textarea") => {
                self.skip_newline.set(true);
                self.frameset_ok.set(false);
                self.generic_raw_text_parse(tag, Rcdata)
            },

            (StartTag, "xmp") => {
                self.close_p_element_in_button_scope();
                self.reconstruct_formatting_elements();
                self.frameset_ok.set(false);
                self.generic_raw_text_parse(tag, Rawtext)
            },

            (StartTag, "iframe") => {
                self.frameset_ok.set(false);
                self.generic_raw_text_parse(tag, Rawtext)
            },

            (StartTag, "noembed") => self.generic_raw_text_parse(tag, Rawtext),

            // -- forms ----------------------------------------------------

            (StartTag, "select") => {
                self.reconstruct_formatting_elements();
                self.insert_element_for(tag);
                self.frameset_ok.set(false);
                // When reached through the "rules for in body" from a
                // table mode, select switches to its table variant.
                self.mode.set(match self.mode.get() {
                    InsertionMode::InTable
                    | InsertionMode::InCaption
                    | InsertionMode::InTableBody
                    | InsertionMode::InRow
                    | InsertionMode::InCell => InsertionMode::InSelectInTable,
                    _ => InsertionMode::InSelect,
                });
                Outcome::Done
            },

            (StartTag, "optgroup" | "option") => {
                if self.current_node_is("option") {
                    self.pop();
                }
                self.reconstruct_formatting_elements();
                self.insert_element_for(tag);
                Outcome::Done
            },

            // -- ruby -----------------------------------------------------

            (StartTag, "rb" | "rtc") => {
                if self.has_in_scope(default_scope, "ruby") {
                    self.generate_implied_end_tags(implied_end_tags);
                }
                if !self.current_node_is("ruby") {
                    self.unexpected(&tag);
                }
                self.insert_element_for(tag);
                Outcome::Done
            },

            (StartTag, "rp" | "rt") => {
                if self.has_in_scope(default_scope, "ruby") {
                    self.generate_implied_end_tags_except(StrTendril::from_slice("rtc"));
                }
                if !self.current_node_is("rtc") && !self.current_node_is("ruby") {
                    self.unexpected(&tag);
                }
                self.insert_element_for(tag);
                Outcome::Done
            },

            // -- foreign roots --------------------------------------------

            (StartTag, "math") => self.begin_foreign_content(tag, Namespace::MathMl),
            (StartTag, "svg") => self.begin_foreign_content(tag, Namespace::Svg),

            // -- everything else ------------------------------------------

            (StartTag, "noscript") if self.opts.scripting_enabled => {
                self.generic_raw_text_parse(tag, Rawtext)
            },

            (StartTag, _) => {
                self.reconstruct_formatting_elements();
                self.insert_element_for(tag);
                Outcome::Done
            },

            (EndTag, _) => {
                self.any_other_end_tag_in_body(tag);
                Outcome::Done
            },
        }
    }

    /// The `Text` mode: the contents of a raw-text or RCDATA element,
    /// ending at the matching end tag (or EOF).
    fn text_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(_, text) => self.append_text(text),

            Token::Eof => {
                self.unexpected(&token);
                self.pop();
                Outcome::Reprocess(self.saved_mode.take().unwrap(), token)
            },

            Token::Tag(tag) => match tag.kind {
                EndTag => {
                    self.pop();
                    self.mode.set(self.saved_mode.take().unwrap());
                    Outcome::Done
                },
                // The tokenizer only produces the matching end tag here.
                StartTag => unreachable!("start tag in Text mode"),
            },

            _ => unreachable!("comment or NUL in Text mode"),
        }
    }

    fn in_table_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Null | Token::Characters(..) => self.buffer_table_text(token),
            Token::Comment(text) => self.append_comment(text),
            Token::Eof => self.step(InsertionMode::InBody, token),

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "caption") => {
                        self.clear_stack_to_context(table_scope);
                        self.push_formatting_marker();
                        self.insert_element_for(tag);
                        self.mode.set(InsertionMode::InCaption);
                        Outcome::Done
                    },

                    (StartTag, "colgroup") => {
                        self.clear_stack_to_context(table_scope);
                        self.insert_element_for(tag);
                        self.mode.set(InsertionMode::InColumnGroup);
                        Outcome::Done
                    },

                    (StartTag, "col") => {
                        self.clear_stack_to_context(table_scope);
                        self.insert_implied("colgroup");
                        Outcome::Reprocess(InsertionMode::InColumnGroup, Token::Tag(tag))
                    },

                    (StartTag, "tbody" | "tfoot" | "thead") => {
                        self.clear_stack_to_context(table_scope);
                        self.insert_element_for(tag);
                        self.mode.set(InsertionMode::InTableBody);
                        Outcome::Done
                    },

                    (StartTag, "td" | "th" | "tr") => {
                        self.clear_stack_to_context(table_scope);
                        self.insert_implied("tbody");
                        Outcome::Reprocess(InsertionMode::InTableBody, Token::Tag(tag))
                    },

                    (StartTag, "table") => {
                        // A table cannot nest directly; the open one ends.
                        self.unexpected(&tag);
                        if self.has_in_scope(table_scope, "table") {
                            self.pop_until_named("table");
                            Outcome::Reprocess(self.reset_insertion_mode(), Token::Tag(tag))
                        } else {
                            Outcome::Done
                        }
                    },

                    (EndTag, "table") => {
                        if self.has_in_scope(table_scope, "table") {
                            self.pop_until_named("table");
                            self.mode.set(self.reset_insertion_mode());
                        } else {
                            self.unexpected(&tag);
                        }
                        Outcome::Done
                    },

                    (EndTag, "body" | "caption" | "col" | "colgroup" | "html" | "tbody" | "td"
                        | "tfoot" | "th" | "thead" | "tr") => self.unexpected(&tag),

                    (StartTag, "style" | "script" | "template") | (EndTag, "template") => {
                        self.step(InsertionMode::InHead, Token::Tag(tag))
                    },

                    (StartTag, "input") => {
                        // Only a hidden input may live in a table.
                        self.unexpected(&tag);
                        if self.input_is_hidden(&tag) {
                            self.insert_closed_element_for(tag);
                            Outcome::DoneAckSelfClosing
                        } else {
                            self.process_with_foster_parenting(Token::Tag(tag))
                        }
                    },

                    (StartTag, "form") => {
                        self.unexpected(&tag);
                        if !self.has_open_html_element("template")
                            && self.form_pointer.borrow().is_none()
                        {
                            *self.form_pointer.borrow_mut() =
                                Some(self.insert_closed_element_for(tag));
                        }
                        Outcome::Done
                    },

                    _ => {
                        self.unexpected(&tag);
                        self.process_with_foster_parenting(Token::Tag(tag))
                    },
                }
            },
        }
    }

    /// Character runs inside a table gather here until something else
    /// arrives; then they either stay (whitespace) or get fostered out.
    fn in_table_text_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Null => self.unexpected(&token),

            Token::Characters(split, text) => {
                self.table_text.borrow_mut().push((split, text));
                Outcome::Done
            },

            token => {
                let buffered = self.table_text.take();
                let all_whitespace = !buffered.iter().any(|(split, text)| match split {
                    CharSplit::Whitespace => false,
                    CharSplit::NonWhitespace => true,
                    CharSplit::Unsplit => contains_non_space(text),
                });

                if all_whitespace {
                    for (_, text) in buffered {
                        self.append_text(text);
                    }
                } else {
                    self.sink
                        .parse_error(Borrowed("Non-whitespace text in table"));
                    for (split, text) in buffered {
                        match self.process_with_foster_parenting(Token::Characters(split, text))
                        {
                            Outcome::Done => (),
                            _ => unreachable!("InBody did not consume fostered text"),
                        }
                    }
                }

                Outcome::Reprocess(self.saved_mode.take().unwrap(), token)
            },
        }
    }

    fn in_caption_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    // All of these first close the caption, if possible.
                    (StartTag, "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot"
                        | "th" | "thead" | "tr")
                    | (EndTag, "table" | "caption") => {
                        if !self.has_in_scope(table_scope, "caption") {
                            self.unexpected(&tag);
                            return Outcome::Done;
                        }
                        self.generate_implied_end_tags(implied_end_tags);
                        self.pop_to_close("caption");
                        self.clear_formatting_to_marker();
                        self.mode.set(InsertionMode::InTable);
                        if matches!((tag.kind, &*name), (EndTag, "caption")) {
                            Outcome::Done
                        } else {
                            Outcome::Reprocess(InsertionMode::InTable, Token::Tag(tag))
                        }
                    },

                    (EndTag, "body" | "col" | "colgroup" | "html" | "tbody" | "td" | "tfoot"
                        | "th" | "thead" | "tr") => self.unexpected(&tag),

                    _ => self.step(InsertionMode::InBody, Token::Tag(tag)),
                }
            },

            token => self.step(InsertionMode::InBody, token),
        }
    }

    fn in_column_group_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(CharSplit::Unsplit, text) => Outcome::PeelWhitespace(text),
            Token::Characters(CharSplit::Whitespace, text) => self.append_text(text),
            Token::Comment(text) => self.append_comment(text),
            Token::Eof => self.step(InsertionMode::InBody, token),

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "html") => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (StartTag, "col") => {
                        self.insert_closed_element_for(tag);
                        Outcome::DoneAckSelfClosing
                    },

                    (EndTag, "colgroup") => {
                        if self.current_node_is("colgroup") {
                            self.pop();
                            self.mode.set(InsertionMode::InTable);
                        } else {
                            self.unexpected(&tag);
                        }
                        Outcome::Done
                    },

                    (EndTag, "col") => self.unexpected(&tag),

                    (StartTag, "template") | (EndTag, "template") => {
                        self.step(InsertionMode::InHead, Token::Tag(tag))
                    },

                    _ => self.in_column_group_default(Token::Tag(tag)),
                }
            },

            token => self.in_column_group_default(token),
        }
    }

    fn in_column_group_default(&self, token: Token) -> Outcome {
        if self.current_node_is("colgroup") {
            self.pop();
            Outcome::Reprocess(InsertionMode::InTable, token)
        } else {
            self.unexpected(&token)
        }
    }

    fn in_table_body_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "tr") => {
                        self.clear_stack_to_context(table_body_context);
                        self.insert_element_for(tag);
                        self.mode.set(InsertionMode::InRow);
                        Outcome::Done
                    },

                    (StartTag, "th" | "td") => {
                        // A cell without its row gets one.
                        self.unexpected(&tag);
                        self.clear_stack_to_context(table_body_context);
                        self.insert_implied("tr");
                        Outcome::Reprocess(InsertionMode::InRow, Token::Tag(tag))
                    },

                    (EndTag, "tbody" | "tfoot" | "thead") => {
                        if self.has_in_scope(table_scope, &name) {
                            self.clear_stack_to_context(table_body_context);
                            self.pop();
                            self.mode.set(InsertionMode::InTable);
                        } else {
                            self.unexpected(&tag);
                        }
                        Outcome::Done
                    },

                    (StartTag, "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead")
                    | (EndTag, "table") => {
                        declare_tag_set!(section_or_table = "table" "tbody" "tfoot");
                        if self.in_scope(table_scope, |n| self.in_set(&n, section_or_table)) {
                            self.clear_stack_to_context(table_body_context);
                            self.pop();
                            Outcome::Reprocess(InsertionMode::InTable, Token::Tag(tag))
                        } else {
                            self.unexpected(&tag)
                        }
                    },

                    (EndTag, "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th"
                        | "tr") => self.unexpected(&tag),

                    _ => self.step(InsertionMode::InTable, Token::Tag(tag)),
                }
            },

            token => self.step(InsertionMode::InTable, token),
        }
    }

    fn in_row_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "th" | "td") => {
                        self.clear_stack_to_context(table_row_context);
                        self.insert_element_for(tag);
                        self.mode.set(InsertionMode::InCell);
                        self.push_formatting_marker();
                        Outcome::Done
                    },

                    (EndTag, "tr") => {
                        if self.has_in_scope(table_scope, "tr") {
                            self.clear_stack_to_context(table_row_context);
                            let row = self.pop();
                            debug_assert!(self.is_html_element(&row, "tr"));
                            self.mode.set(InsertionMode::InTableBody);
                        } else {
                            self.unexpected(&tag);
                        }
                        Outcome::Done
                    },

                    (StartTag, "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead"
                        | "tr")
                    | (EndTag, "table") => {
                        if self.has_in_scope(table_scope, "tr") {
                            self.clear_stack_to_context(table_row_context);
                            let row = self.pop();
                            debug_assert!(self.is_html_element(&row, "tr"));
                            Outcome::Reprocess(InsertionMode::InTableBody, Token::Tag(tag))
                        } else {
                            self.unexpected(&tag)
                        }
                    },

                    (EndTag, "tbody" | "tfoot" | "thead") => {
                        if !self.has_in_scope(table_scope, &name) {
                            self.unexpected(&tag)
                        } else if self.has_in_scope(table_scope, "tr") {
                            self.clear_stack_to_context(table_row_context);
                            let row = self.pop();
                            debug_assert!(self.is_html_element(&row, "tr"));
                            Outcome::Reprocess(InsertionMode::InTableBody, Token::Tag(tag))
                        } else {
                            Outcome::Done
                        }
                    },

                    (EndTag, "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th") => {
                        self.unexpected(&tag)
                    },

                    _ => self.step(InsertionMode::InTable, Token::Tag(tag)),
                }
            },

            token => self.step(InsertionMode::InTable, token),
        }
    }

    fn in_cell_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (EndTag, "td" | "th") => {
                        if self.has_in_scope(table_scope, &name) {
                            self.generate_implied_end_tags(implied_end_tags);
                            self.pop_to_close(&name);
                            self.clear_formatting_to_marker();
                            self.mode.set(InsertionMode::InRow);
                        } else {
                            self.unexpected(&tag);
                        }
                        Outcome::Done
                    },

                    (StartTag, "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot"
                        | "th" | "thead" | "tr") => {
                        if self.in_scope(table_scope, |n| self.in_set(&n, td_th)) {
                            self.close_the_cell();
                            Outcome::Reprocess(InsertionMode::InRow, Token::Tag(tag))
                        } else {
                            self.unexpected(&tag)
                        }
                    },

                    (EndTag, "table" | "tbody" | "tfoot" | "thead" | "tr") => {
                        if self.has_in_scope(table_scope, &name) {
                            self.close_the_cell();
                            Outcome::Reprocess(InsertionMode::InRow, Token::Tag(tag))
                        } else {
                            self.unexpected(&tag)
                        }
                    },

                    (EndTag, "body" | "caption" | "col" | "colgroup" | "html") => {
                        self.unexpected(&tag)
                    },

                    _ => self.step(InsertionMode::InBody, Token::Tag(tag)),
                }
            },

            token => self.step(InsertionMode::InBody, token),
        }
    }

    fn in_select_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Null => self.unexpected(&token),
            Token::Characters(_, text) => self.append_text(text),
            Token::Comment(text) => self.append_comment(text),
            Token::Eof => self.step(InsertionMode::InBody, token),

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "html") => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (StartTag, "option") => {
                        if self.current_node_is("option") {
                            self.pop();
                        }
                        self.insert_element_for(tag);
                        Outcome::Done
                    },

                    (StartTag, "optgroup") => {
                        if self.current_node_is("option") {
                            self.pop();
                        }
                        if self.current_node_is("optgroup") {
                            self.pop();
                        }
                        self.insert_element_for(tag);
                        Outcome::Done
                    },

                    (StartTag, "hr") => {
                        if self.current_node_is("option") {
                            self.pop();
                        }
                        if self.current_node_is("optgroup") {
                            self.pop();
                        }
                        self.insert_element_for(tag);
                        self.pop();
                        Outcome::DoneAckSelfClosing
                    },

                    (EndTag, "optgroup") => {
                        // An option directly inside an optgroup closes
                        // with it.
                        let option_in_optgroup = {
                            let elements = self.open_elements.borrow();
                            elements.len() >= 2
                                && self.current_node_is("option")
                                && self
                                    .is_html_element(&elements[elements.len() - 2], "optgroup")
                        };
                        if option_in_optgroup {
                            self.pop();
                        }
                        if self.current_node_is("optgroup") {
                            self.pop();
                        } else {
                            self.unexpected(&tag);
                        }
                        Outcome::Done
                    },

                    (EndTag, "option") => {
                        if self.current_node_is("option") {
                            self.pop();
                        } else {
                            self.unexpected(&tag);
                        }
                        Outcome::Done
                    },

                    (StartTag, "select") | (EndTag, "select") => {
                        let open = self.has_in_scope(select_scope, "select");
                        if !open || tag.kind == StartTag {
                            // <select> inside <select> acts as </select>.
                            self.unexpected(&tag);
                        }
                        if open {
                            self.pop_until_named("select");
                            self.mode.set(self.reset_insertion_mode());
                        }
                        Outcome::Done
                    },

                    (StartTag, "input" | "keygen" | "textarea") => {
                        self.unexpected(&tag);
                        if self.has_in_scope(select_scope, "select") {
                            self.pop_until_named("select");
                            Outcome::Reprocess(self.reset_insertion_mode(), Token::Tag(tag))
                        } else {
                            Outcome::Done
                        }
                    },

                    (StartTag, "script" | "template") | (EndTag, "template") => {
                        self.step(InsertionMode::InHead, Token::Tag(tag))
                    },

                    _ => self.unexpected(&tag),
                }
            },
        }
    }

    fn in_select_in_table_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    // Table structure interrupts the select.
                    (StartTag, "caption" | "table" | "tbody" | "tfoot" | "thead" | "tr" | "td"
                        | "th") => {
                        self.unexpected(&tag);
                        self.pop_until_named("select");
                        Outcome::Reprocess(self.reset_insertion_mode(), Token::Tag(tag))
                    },

                    (EndTag, "caption" | "table" | "tbody" | "tfoot" | "thead" | "tr" | "td"
                        | "th") => {
                        self.unexpected(&tag);
                        if self.has_in_scope(table_scope, &name) {
                            self.pop_until_named("select");
                            Outcome::Reprocess(self.reset_insertion_mode(), Token::Tag(tag))
                        } else {
                            Outcome::Done
                        }
                    },

                    _ => self.step(InsertionMode::InSelect, Token::Tag(tag)),
                }
            },

            token => self.step(InsertionMode::InSelect, token),
        }
    }

    fn in_template_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(..) | Token::Comment(_) => {
                self.step(InsertionMode::InBody, token)
            },

            Token::Eof => {
                if !self.has_open_html_element("template") {
                    self.stop_parsing()
                } else {
                    self.unexpected(&token);
                    self.pop_until_named("template");
                    self.clear_formatting_to_marker();
                    self.template_modes.borrow_mut().pop();
                    self.mode.set(self.reset_insertion_mode());
                    Outcome::Reprocess(self.reset_insertion_mode(), token)
                }
            },

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes"
                        | "script" | "style" | "template" | "title")
                    | (EndTag, "template") => self.step(InsertionMode::InHead, Token::Tag(tag)),

                    // Table pieces re-aim the template's mode before
                    // reprocessing.
                    (StartTag, "caption" | "colgroup" | "tbody" | "tfoot" | "thead") => {
                        self.retarget_template(InsertionMode::InTable, tag)
                    },
                    (StartTag, "col") => {
                        self.retarget_template(InsertionMode::InColumnGroup, tag)
                    },
                    (StartTag, "tr") => self.retarget_template(InsertionMode::InTableBody, tag),
                    (StartTag, "td" | "th") => self.retarget_template(InsertionMode::InRow, tag),

                    (StartTag, _) => self.retarget_template(InsertionMode::InBody, tag),

                    (EndTag, _) => self.unexpected(&tag),
                }
            },

            token => self.unexpected(&token),
        }
    }

    fn retarget_template(&self, mode: InsertionMode, tag: Tag) -> Outcome {
        self.template_modes.borrow_mut().pop();
        self.template_modes.borrow_mut().push(mode);
        Outcome::Reprocess(mode, Token::Tag(tag))
    }

    fn after_body_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(CharSplit::Unsplit, text) => Outcome::PeelWhitespace(text),
            Token::Characters(CharSplit::Whitespace, _) => {
                self.step(InsertionMode::InBody, token)
            },
            // Comments after the body hang off the <html> element.
            Token::Comment(text) => self.comment_on_root(text),
            Token::Eof => self.stop_parsing(),

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "html") => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (EndTag, "html") => {
                        if self.is_fragment() {
                            self.unexpected(&tag);
                        } else {
                            self.mode.set(InsertionMode::AfterAfterBody);
                        }
                        Outcome::Done
                    },

                    _ => {
                        self.unexpected(&tag);
                        Outcome::Reprocess(InsertionMode::InBody, Token::Tag(tag))
                    },
                }
            },

            token => {
                self.unexpected(&token);
                Outcome::Reprocess(InsertionMode::InBody, token)
            },
        }
    }

    fn in_frameset_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(CharSplit::Unsplit, text) => Outcome::PeelWhitespace(text),
            Token::Characters(CharSplit::Whitespace, text) => self.append_text(text),
            Token::Comment(text) => self.append_comment(text),

            Token::Eof => {
                if self.open_elements.borrow().len() != 1 {
                    self.unexpected(&token);
                }
                self.stop_parsing()
            },

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "html") => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (StartTag, "frameset") => {
                        self.insert_element_for(tag);
                        Outcome::Done
                    },

                    (EndTag, "frameset") => {
                        if self.open_elements.borrow().len() == 1 {
                            self.unexpected(&tag);
                        } else {
                            self.pop();
                            if !self.is_fragment() && !self.current_node_is("frameset") {
                                self.mode.set(InsertionMode::AfterFrameset);
                            }
                        }
                        Outcome::Done
                    },

                    (StartTag, "frame") => {
                        self.insert_closed_element_for(tag);
                        Outcome::DoneAckSelfClosing
                    },

                    (StartTag, "noframes") => self.step(InsertionMode::InHead, Token::Tag(tag)),

                    _ => self.unexpected(&tag),
                }
            },

            token => self.unexpected(&token),
        }
    }

    fn after_frameset_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(CharSplit::Unsplit, text) => Outcome::PeelWhitespace(text),
            Token::Characters(CharSplit::Whitespace, text) => self.append_text(text),
            Token::Comment(text) => self.append_comment(text),
            Token::Eof => self.stop_parsing(),

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "html") => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (EndTag, "html") => {
                        self.mode.set(InsertionMode::AfterAfterFrameset);
                        Outcome::Done
                    },

                    (StartTag, "noframes") => self.step(InsertionMode::InHead, Token::Tag(tag)),

                    _ => self.unexpected(&tag),
                }
            },

            token => self.unexpected(&token),
        }
    }

    fn after_after_body_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(CharSplit::Unsplit, text) => Outcome::PeelWhitespace(text),
            Token::Characters(CharSplit::Whitespace, _) => {
                self.step(InsertionMode::InBody, token)
            },
            Token::Comment(text) => self.comment_on_document(text),
            Token::Eof => self.stop_parsing(),

            Token::Tag(tag) => {
                if matches!((tag.kind, &*tag.name.clone()), (StartTag, "html")) {
                    self.step(InsertionMode::InBody, Token::Tag(tag))
                } else {
                    self.unexpected(&tag);
                    Outcome::Reprocess(InsertionMode::InBody, Token::Tag(tag))
                }
            },

            token => {
                self.unexpected(&token);
                Outcome::Reprocess(InsertionMode::InBody, token)
            },
        }
    }

    fn after_after_frameset_mode(&self, token: Token) -> Outcome {
        match token {
            Token::Characters(CharSplit::Unsplit, text) => Outcome::PeelWhitespace(text),
            Token::Characters(CharSplit::Whitespace, _) => {
                self.step(InsertionMode::InBody, token)
            },
            Token::Comment(text) => self.comment_on_document(text),
            Token::Eof => self.stop_parsing(),

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    (StartTag, "html") => self.step(InsertionMode::InBody, Token::Tag(tag)),
                    (StartTag, "noframes") => self.step(InsertionMode::InHead, Token::Tag(tag)),
                    _ => self.unexpected(&tag),
                }
            },

            token => self.unexpected(&token),
        }
    }

    // ---- foreign content -------------------------------------------------

    /// Processing in MathML or SVG content.
    pub(crate) fn foreign_content_step(&self, token: Token) -> Outcome {
        match token {
            Token::Null => {
                self.unexpected(&token);
                self.append_text("\u{fffd}".to_tendril())
            },

            Token::Characters(_, text) => {
                if contains_non_space(&text) {
                    self.frameset_ok.set(false);
                }
                self.append_text(text)
            },

            Token::Comment(text) => self.append_comment(text),

            Token::Tag(tag) => {
                let name = tag.name.clone();
                match (tag.kind, &*name) {
                    // HTML flow tags force their way out of foreign
                    // content; <font> only when it looks like HTML font.
                    (StartTag, "b" | "big" | "blockquote" | "body" | "br" | "center" | "code"
                        | "dd" | "div" | "dl" | "dt" | "em" | "embed" | "h1" | "h2" | "h3"
                        | "h4" | "h5" | "h6" | "head" | "hr" | "i" | "img" | "li" | "listing"
                        | "menu" | "meta" | "nobr" | "ol" | "p" | "pre" | "ruby" | "s"
                        | "small" | "span" | "strong" | "strike" | "sub" | "sup" | "table"
                        | "tt" | "u" | "ul" | "var")
                    | (EndTag, "br" | "p") => self.breakout_from_foreign(tag),

                    (StartTag, "font") => {
                        let html_font = tag
                            .attrs
                            .keys()
                            .any(|attr| matches!(attr, "color" | "face" | "size"));
                        if html_font {
                            self.breakout_from_foreign(tag)
                        } else {
                            self.foreign_start_tag(tag)
                        }
                    },

                    (StartTag, _) => self.foreign_start_tag(tag),

                    (EndTag, _) => {
                        // Search the stack for a case-insensitive name
                        // match; crossing into HTML hands the tag to the
                        // regular rules instead.
                        let mut position = self.open_elements.borrow().len() - 1;
                        let mut top_of_stack = true;
                        loop {
                            if position == 0 {
                                return Outcome::Done;
                            }

                            let (is_html, name_matches) = {
                                let elements = self.open_elements.borrow();
                                let node_name = self.sink.elem_name(&elements[position]);
                                (
                                    node_name.ns == Namespace::Html,
                                    node_name.local.eq_ignore_ascii_case(&name),
                                )
                            };

                            if !top_of_stack && is_html {
                                return self.step(self.mode.get(), Token::Tag(tag));
                            }
                            if name_matches {
                                self.open_elements.borrow_mut().truncate(position);
                                return Outcome::Done;
                            }
                            if top_of_stack {
                                self.unexpected(&tag);
                                top_of_stack = false;
                            }
                            position -= 1;
                        }
                    },
                }
            },

            Token::Eof => unreachable!("EOF dispatched to foreign content"),
        }
    }
}
