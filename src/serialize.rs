// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Serializing a DOM subtree back to HTML text.
//!
//! This is the [fragment serialization algorithm]. Note that parsing the
//! output is not guaranteed to give back the exact input; what is stable is
//! the tree shape (serialize, reparse, serialize again is a fixed point).
//!
//! [fragment serialization algorithm]: https://html.spec.whatwg.org/multipage/#serialising-html-fragments

use std::io::{self, Write};

use crate::dom::{Handle, NodeData};
use crate::interface::{Namespace, QualName};

//§ serializing-html-fragments
pub trait Serializable {
    fn serialize<Wr: Write>(
        &self,
        serializer: &mut Serializer<'_, Wr>,
        traversal_scope: TraversalScope,
    ) -> io::Result<()>;
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum TraversalScope {
    /// Serialize the receiver itself and its subtree ("outer HTML").
    IncludeNode,
    /// Serialize only the receiver's children ("inner HTML").
    ChildrenOnly,
}

pub fn serialize<Wr: Write, T: Serializable>(
    writer: &mut Wr,
    node: &T,
    opts: SerializeOpts,
) -> io::Result<()> {
    let traversal_scope = opts.traversal_scope;
    let mut ser = Serializer::new(writer, opts);
    node.serialize(&mut ser, traversal_scope)
}

#[derive(Copy, Clone)]
pub struct SerializeOpts {
    /// Is scripting enabled? This decides whether `<noscript>` contents are
    /// written escaped or verbatim.
    pub scripting_enabled: bool,

    /// Serialize the root node or only its children. Default: `ChildrenOnly`.
    pub traversal_scope: TraversalScope,
}

impl Default for SerializeOpts {
    fn default() -> SerializeOpts {
        SerializeOpts {
            scripting_enabled: false,
            traversal_scope: TraversalScope::ChildrenOnly,
        }
    }
}

struct ElemInfo {
    html_name: Option<&'static str>,
    ignore_children: bool,
    processed_first_child: bool,
}

pub struct Serializer<'wr, Wr> {
    writer: &'wr mut Wr,
    opts: SerializeOpts,
    stack: Vec<ElemInfo>,
}

/// The elements which are serialized without an end tag.
fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "basefont"
            | "bgsound"
            | "br"
            | "col"
            | "embed"
            | "frame"
            | "hr"
            | "img"
            | "input"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Intern the handful of names `write_text` needs to look at later.
fn tracked_html_name(name: &str) -> Option<&'static str> {
    Some(match name {
        "pre" => "pre",
        "textarea" => "textarea",
        "listing" => "listing",
        "style" => "style",
        "script" => "script",
        "xmp" => "xmp",
        "iframe" => "iframe",
        "noembed" => "noembed",
        "noframes" => "noframes",
        "plaintext" => "plaintext",
        "noscript" => "noscript",
        _ => return None,
    })
}

impl<'wr, Wr: Write> Serializer<'wr, Wr> {
    fn new(writer: &'wr mut Wr, opts: SerializeOpts) -> Serializer<'wr, Wr> {
        Serializer {
            writer,
            opts,
            stack: vec![ElemInfo {
                html_name: None,
                ignore_children: false,
                processed_first_child: false,
            }],
        }
    }

    fn parent(&mut self) -> &mut ElemInfo {
        self.stack.last_mut().expect("no parent ElemInfo")
    }

    fn write_escaped(&mut self, text: &str, attr_mode: bool) -> io::Result<()> {
        for c in text.chars() {
            match c {
                '&' => self.writer.write_all(b"&amp;"),
                '\u{00A0}' => self.writer.write_all(b"&nbsp;"),
                '"' if attr_mode => self.writer.write_all(b"&quot;"),
                '<' if !attr_mode => self.writer.write_all(b"&lt;"),
                '>' if !attr_mode => self.writer.write_all(b"&gt;"),
                c => self.writer.write_all(c.encode_utf8(&mut [0; 4]).as_bytes()),
            }?;
        }
        Ok(())
    }

    pub fn start_elem<'a, AttrIter>(&mut self, name: &QualName, attrs: AttrIter) -> io::Result<()>
    where
        AttrIter: Iterator<Item = (&'a str, &'a str)>,
    {
        let html_name = match name.ns {
            Namespace::Html => tracked_html_name(&name.local),
            _ => None,
        };

        if self.parent().ignore_children {
            self.stack.push(ElemInfo {
                html_name,
                ignore_children: true,
                processed_first_child: false,
            });
            return Ok(());
        }

        self.writer.write_all(b"<")?;
        self.writer.write_all(name.local.as_bytes())?;
        for (attr_name, value) in attrs {
            self.writer.write_all(b" ")?;
            self.writer.write_all(attr_name.as_bytes())?;
            self.writer.write_all(b"=\"")?;
            self.write_escaped(value, true)?;
            self.writer.write_all(b"\"")?;
        }
        self.writer.write_all(b">")?;

        let ignore_children = name.ns == Namespace::Html && is_void_element(&name.local);

        self.parent().processed_first_child = true;

        self.stack.push(ElemInfo {
            html_name,
            ignore_children,
            processed_first_child: false,
        });

        Ok(())
    }

    pub fn end_elem(&mut self, name: &QualName) -> io::Result<()> {
        let info = self.stack.pop().expect("no ElemInfo");
        if info.ignore_children {
            return Ok(());
        }

        self.writer.write_all(b"</")?;
        self.writer.write_all(name.local.as_bytes())?;
        self.writer.write_all(b">")
    }

    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        let prepend_lf = text.starts_with('\n') && {
            let parent = self.parent();
            !parent.processed_first_child
                && matches!(parent.html_name, Some("pre" | "textarea" | "listing"))
        };

        if prepend_lf {
            self.writer.write_all(b"\n")?;
        }

        let escape = match self.parent().html_name {
            Some(
                "style" | "script" | "xmp" | "iframe" | "noembed" | "noframes" | "plaintext",
            ) => false,

            Some("noscript") => !self.opts.scripting_enabled,

            _ => true,
        };

        if escape {
            self.write_escaped(text, false)
        } else {
            self.writer.write_all(text.as_bytes())
        }
    }

    pub fn write_comment(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(b"<!--")?;
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"-->")
    }

    pub fn write_doctype(&mut self, name: &str) -> io::Result<()> {
        self.writer.write_all(b"<!DOCTYPE ")?;
        self.writer.write_all(name.as_bytes())?;
        self.writer.write_all(b">")
    }
}

impl Serializable for Handle {
    fn serialize<Wr: Write>(
        &self,
        serializer: &mut Serializer<'_, Wr>,
        traversal_scope: TraversalScope,
    ) -> io::Result<()> {
        match (traversal_scope, &self.data) {
            (_, NodeData::Element { name, attrs, .. }) => {
                if traversal_scope == TraversalScope::IncludeNode {
                    let attrs = attrs.borrow();
                    serializer.start_elem(name, attrs.iter())?;
                }

                // A template element serializes its template contents.
                let children = match self.template_contents() {
                    Some(ref contents) => contents.children(),
                    None => self.children(),
                };
                for handle in children {
                    handle.serialize(serializer, TraversalScope::IncludeNode)?;
                }

                if traversal_scope == TraversalScope::IncludeNode {
                    serializer.end_elem(name)?;
                }
                Ok(())
            },

            (TraversalScope::ChildrenOnly, NodeData::Document) => {
                for handle in self.children() {
                    handle.serialize(serializer, TraversalScope::IncludeNode)?;
                }
                Ok(())
            },

            (TraversalScope::ChildrenOnly, _) => Ok(()),

            (TraversalScope::IncludeNode, NodeData::Doctype { name, .. }) => {
                serializer.write_doctype(name)
            },
            (TraversalScope::IncludeNode, NodeData::Text { contents }) => {
                serializer.write_text(&contents.borrow())
            },
            (TraversalScope::IncludeNode, NodeData::Comment { contents }) => {
                serializer.write_comment(contents)
            },

            (TraversalScope::IncludeNode, NodeData::Document) => {
                panic!("Can't serialize Document node itself")
            },
        }
    }
}

impl Handle {
    /// The markup of this node's subtree, the node itself included.
    pub fn outer_html(&self) -> String {
        let mut buf = Vec::new();
        serialize(
            &mut buf,
            self,
            SerializeOpts {
                traversal_scope: TraversalScope::IncludeNode,
                ..Default::default()
            },
        )
        .expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("serializer wrote invalid UTF-8")
    }

    /// The markup of this node's children.
    pub fn inner_html(&self) -> String {
        let mut buf = Vec::new();
        serialize(&mut buf, self, SerializeOpts::default())
            .expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("serializer wrote invalid UTF-8")
    }
}
