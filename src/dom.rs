// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A reference-counted DOM.
//!
//! Nodes own their children; parent links are weak, so dropping the
//! `Dom` (or any detached subtree root) frees the whole tree.
//!
//! A realistic browser DOM would store a lot more: layout damage bits,
//! event listeners, and so on. This one stores exactly what parsing
//! produces and what querying and re-serializing need.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::fmt::Write as _;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use encoding_rs::{Encoding, UTF_8};
use tendril::StrTendril;

use crate::attrs::AttrMap;
use crate::interface::{
    AppendNode, AppendText, ExpandedName, Namespace, NodeOrText, QualName, QuirksMode, TreeSink,
};

/// Reference to a DOM node.
#[derive(Clone)]
pub struct Handle(Rc<Node>);

impl Deref for Handle {
    type Target = Node;
    fn deref(&self) -> &Node {
        &self.0
    }
}

/// Weak reference to a DOM node, used for parent pointers.
pub type WeakHandle = Weak<Node>;

/// The data held by a node, depending on its kind.
pub enum NodeData {
    /// The `Document` itself. Also used for the contents of `<template>`
    /// elements, which live outside the main tree.
    Document,

    /// A `DOCTYPE` with name, public id, and system id.
    Doctype {
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    },

    /// A text node.
    Text { contents: RefCell<StrTendril> },

    /// A comment.
    Comment { contents: StrTendril },

    /// An element with attributes.
    Element {
        name: QualName,
        attrs: RefCell<AttrMap>,

        /// For HTML `<template>` elements, the [template contents].
        ///
        /// [template contents]: https://html.spec.whatwg.org/multipage/#template-contents
        template_contents: Option<Handle>,

        /// Whether the node is a [HTML integration point].
        ///
        /// [HTML integration point]: https://html.spec.whatwg.org/multipage/#html-integration-point
        mathml_annotation_xml_integration_point: bool,
    },
}

/// A DOM node.
pub struct Node {
    /// Represents this node's data.
    pub data: NodeData,
    /// Parent node.
    parent: Cell<Option<WeakHandle>>,
    /// Child nodes of this node.
    children: RefCell<Vec<Handle>>,
}

impl Node {
    /// Create a new node from its contents.
    pub fn new(data: NodeData) -> Handle {
        Handle(Rc::new(Node {
            data,
            parent: Cell::new(None),
            children: RefCell::new(Vec::new()),
        }))
    }

    /// The node's parent, or `None` for a tree root.
    pub fn parent(&self) -> Option<Handle> {
        let weak = self.parent.take()?;
        let parent = weak.upgrade();
        self.parent.set(Some(weak));
        parent.map(Handle)
    }

    /// The node's children, in document order.
    pub fn children(&self) -> Vec<Handle> {
        self.children.borrow().clone()
    }

    pub fn has_children(&self) -> bool {
        !self.children.borrow().is_empty()
    }

    pub fn number_of_children(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn child_at(&self, index: usize) -> Option<Handle> {
        self.children.borrow().get(index).cloned()
    }

    /// The position of `child` among this node's children.
    pub fn index_of_child(&self, child: &Handle) -> Option<usize> {
        self.children
            .borrow()
            .iter()
            .position(|n| Handle::same(n, child))
    }

    /// The node's children which are elements.
    pub fn child_elements(&self) -> Vec<Handle> {
        self.children
            .borrow()
            .iter()
            .filter(|n| n.is_element())
            .cloned()
            .collect()
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text { .. })
    }

    pub fn is_document(&self) -> bool {
        matches!(self.data, NodeData::Document)
    }

    /// The element's local tag name, or `None` for non-elements.
    pub fn tag_name(&self) -> Option<StrTendril> {
        match self.data {
            NodeData::Element { ref name, .. } => Some(name.local.clone()),
            _ => None,
        }
    }

    /// The element's namespace, or `None` for non-elements.
    pub fn namespace(&self) -> Option<Namespace> {
        match self.data {
            NodeData::Element { ref name, .. } => Some(name.ns),
            _ => None,
        }
    }

    /// An attribute value by name. `None` for non-elements and absent
    /// attributes.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match self.data {
            NodeData::Element { ref attrs, .. } => attrs.borrow().get(name).map(String::from),
            _ => None,
        }
    }

    /// Set an attribute. An existing attribute keeps its position.
    ///
    /// Panics when called on a non-element.
    pub fn set_attribute(&self, name: &str, value: &str) {
        match self.data {
            NodeData::Element { ref attrs, .. } => attrs.borrow_mut().insert(name, value),
            _ => panic!("not an element"),
        }
    }

    /// Remove an attribute, if present.
    ///
    /// Panics when called on a non-element.
    pub fn remove_attribute(&self, name: &str) {
        match self.data {
            NodeData::Element { ref attrs, .. } => {
                attrs.borrow_mut().remove(name);
            },
            _ => panic!("not an element"),
        }
    }

    /// The element's classes, split on ASCII whitespace.
    pub fn classes(&self) -> Vec<String> {
        match self.attribute("class") {
            Some(class) => class.split_ascii_whitespace().map(String::from).collect(),
            None => Vec::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    /// Add the class if absent, remove it if present.
    ///
    /// Panics when called on a non-element.
    pub fn toggle_class(&self, class: &str) {
        let mut classes = self.classes();
        match classes.iter().position(|c| c == class) {
            Some(i) => {
                classes.remove(i);
            },
            None => classes.push(class.to_string()),
        }
        self.set_attribute("class", &classes.join(" "));
    }

    /// The contents of each direct text-node child.
    pub fn text_components(&self) -> Vec<String> {
        self.children
            .borrow()
            .iter()
            .filter_map(|child| match child.data {
                NodeData::Text { ref contents } => Some(contents.borrow().to_string()),
                _ => None,
            })
            .collect()
    }

    /// The concatenated text of the subtree rooted at this node.
    ///
    /// <https://dom.spec.whatwg.org/#dom-node-textcontent>
    pub fn text_content(&self) -> String {
        fn walk(node: &Node, out: &mut String) {
            if let NodeData::Text { ref contents } = node.data {
                out.push_str(&contents.borrow());
            }
            for child in node.children.borrow().iter() {
                walk(child, out);
            }
        }

        let mut out = String::new();
        walk(self, &mut out);
        out
    }

    pub(crate) fn expanded_name(&self) -> ExpandedName<'_> {
        match self.data {
            NodeData::Element { ref name, .. } => name.expanded(),
            _ => panic!("not an element!"),
        }
    }

    pub(crate) fn template_contents(&self) -> Option<Handle> {
        match self.data {
            NodeData::Element {
                ref template_contents,
                ..
            } => template_contents.clone(),
            _ => None,
        }
    }
}

impl Handle {
    /// Do two handles refer to the same node?
    pub fn same(x: &Handle, y: &Handle) -> bool {
        Rc::ptr_eq(&x.0, &y.0)
    }

    fn downgrade(&self) -> WeakHandle {
        Rc::downgrade(&self.0)
    }

    /// Append a child at the end of this node's children, detaching it from
    /// any previous parent.
    pub fn append_child(&self, child: Handle) {
        remove_from_parent(&child);
        append(self, child);
    }

    /// Insert a child at the given index, detaching it from any previous
    /// parent.
    pub fn insert_child_at(&self, index: usize, child: Handle) {
        remove_from_parent(&child);
        child.parent.set(Some(self.downgrade()));
        self.children.borrow_mut().insert(index, child);
    }

    /// Detach this node from its parent.
    pub fn remove_from_parent(&self) {
        remove_from_parent(self);
    }

    /// Replace this node's contents with a single text node.
    pub fn set_text_content(&self, text: &str) {
        for child in self.children.borrow_mut().drain(..) {
            child.parent.set(None);
        }
        if !text.is_empty() {
            append(
                self,
                Node::new(NodeData::Text {
                    contents: RefCell::new(StrTendril::from_slice(text)),
                }),
            );
        }
    }

    /// Emits the nodes of the subtree rooted here (itself included) in
    /// [tree order].
    ///
    /// [tree order]: https://dom.spec.whatwg.org/#concept-tree-order
    pub fn tree(&self) -> Traverse {
        Traverse {
            stack: vec![self.clone()],
            reversed: false,
        }
    }

    /// Like `tree`, but children are visited back to front.
    pub fn reversed_tree(&self) -> Traverse {
        Traverse {
            stack: vec![self.clone()],
            reversed: true,
        }
    }

    /// An indented dump of the subtree, for debugging.
    pub fn recursive_description(&self) -> String {
        fn write_node(out: &mut String, node: &Node, depth: usize) {
            for _ in 0..depth {
                out.push_str("  ");
            }
            match node.data {
                NodeData::Document => out.push_str("#document"),
                NodeData::Doctype { ref name, .. } => {
                    let _ = write!(out, "<!DOCTYPE {name}>");
                },
                NodeData::Text { ref contents } => {
                    let _ = write!(out, "{:?}", &**contents.borrow());
                },
                NodeData::Comment { ref contents } => {
                    let _ = write!(out, "<!--{contents}-->");
                },
                NodeData::Element {
                    ref name,
                    ref attrs,
                    ..
                } => {
                    let _ = write!(out, "<{}", name.local);
                    for (k, v) in attrs.borrow().iter() {
                        let _ = write!(out, " {k}={v:?}");
                    }
                    out.push('>');
                },
            }
            out.push('\n');
            for child in node.children.borrow().iter() {
                write_node(out, child, depth + 1);
            }
        }

        let mut out = String::new();
        write_node(&mut out, self, 0);
        out
    }
}

/// Preorder depth-first traversal over a subtree.
pub struct Traverse {
    stack: Vec<Handle>,
    reversed: bool,
}

impl Iterator for Traverse {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let node = self.stack.pop()?;
        {
            let children = node.children.borrow();
            if self.reversed {
                for child in children.iter() {
                    self.stack.push(child.clone());
                }
            } else {
                for child in children.iter().rev() {
                    self.stack.push(child.clone());
                }
            }
        }
        Some(node)
    }
}

fn append(new_parent: &Handle, child: Handle) {
    let previous_parent = child.parent.replace(Some(new_parent.downgrade()));
    // Invariant: child cannot have existing parent
    assert!(previous_parent
        .and_then(|parent| parent.upgrade())
        .is_none());
    new_parent.children.borrow_mut().push(child);
}

fn get_parent_and_index(target: &Handle) -> Option<(Handle, usize)> {
    let parent = target.parent()?;
    let i = parent
        .index_of_child(target)
        .expect("have parent but couldn't find in parent's children!");
    Some((parent, i))
}

fn append_to_existing_text(prev: &Handle, text: &str) -> bool {
    match prev.data {
        NodeData::Text { ref contents } => {
            contents.borrow_mut().push_slice(text);
            true
        },
        _ => false,
    }
}

fn remove_from_parent(target: &Handle) {
    if let Some((parent, i)) = get_parent_and_index(target) {
        parent.children.borrow_mut().remove(i);
        target.parent.set(None);
    }
}

/// The DOM itself, plus everything else a parse produces: the accumulated
/// parse errors, the document's quirks mode, and the encoding the bytes
/// were decoded with.
pub struct Dom {
    /// The `Document` itself.
    pub document: Handle,

    /// Errors that occurred during parsing.
    errors: RefCell<Vec<Cow<'static, str>>>,

    /// The document's quirks mode.
    quirks_mode: Cell<QuirksMode>,

    /// The encoding the input bytes were decoded with. UTF-8 when parsing
    /// from a string.
    parsed_encoding: Cell<&'static Encoding>,
}

impl Default for Dom {
    fn default() -> Dom {
        Dom {
            document: Node::new(NodeData::Document),
            errors: RefCell::new(Vec::new()),
            quirks_mode: Cell::new(QuirksMode::NoQuirks),
            parsed_encoding: Cell::new(UTF_8),
        }
    }
}

impl Dom {
    /// The parse errors reported by the tokenizer and tree builder, in the
    /// order they occurred. Advisory only; a document is produced for any
    /// input.
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().iter().map(|e| e.to_string()).collect()
    }

    pub fn quirks_mode(&self) -> QuirksMode {
        self.quirks_mode.get()
    }

    /// The encoding the document's bytes were decoded with.
    pub fn parsed_encoding(&self) -> &'static Encoding {
        self.parsed_encoding.get()
    }

    pub(crate) fn set_parsed_encoding(&self, encoding: &'static Encoding) {
        self.parsed_encoding.set(encoding);
    }

    /// The document type node, if the document has one.
    pub fn document_type(&self) -> Option<Handle> {
        self.document
            .children()
            .into_iter()
            .find(|n| matches!(n.data, NodeData::Doctype { .. }))
    }

    /// The first element child of the document. Typically the `<html>`
    /// element.
    pub fn root_element(&self) -> Option<Handle> {
        self.document
            .children()
            .into_iter()
            .find(|n| n.is_element())
    }

    /// The first `body` element child of the root. Typically the `<body>`
    /// element.
    pub fn body_element(&self) -> Option<Handle> {
        self.root_element()?.children().into_iter().find(|n| {
            matches!(
                n.data,
                NodeData::Element { ref name, .. }
                    if name.ns == Namespace::Html && &*name.local == "body"
            )
        })
    }

    /// The result of a fragment parse: the children of the synthetic root.
    pub fn fragment_nodes(&self) -> Vec<Handle> {
        self.root_element()
            .map(|root| root.children())
            .unwrap_or_default()
    }
}

impl TreeSink for Dom {
    type Handle = Handle;

    fn parse_error(&self, msg: Cow<'static, str>) {
        self.errors.borrow_mut().push(msg);
    }

    fn get_document(&self) -> Handle {
        self.document.clone()
    }

    fn get_template_contents(&self, target: &Handle) -> Handle {
        target.template_contents().expect("not a template element!")
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        self.quirks_mode.set(mode);
    }

    fn same_node(&self, x: &Handle, y: &Handle) -> bool {
        Handle::same(x, y)
    }

    fn elem_name<'a>(&self, target: &'a Handle) -> ExpandedName<'a> {
        target.expanded_name()
    }

    fn create_element(&self, name: QualName, attrs: AttrMap) -> Handle {
        let template_contents = if name.ns == Namespace::Html && &*name.local == "template" {
            Some(Node::new(NodeData::Document))
        } else {
            None
        };
        let mathml_annotation_xml_integration_point = name.ns == Namespace::MathMl
            && &*name.local == "annotation-xml"
            && attrs.get("encoding").is_some_and(|encoding| {
                encoding.eq_ignore_ascii_case("text/html")
                    || encoding.eq_ignore_ascii_case("application/xhtml+xml")
            });
        Node::new(NodeData::Element {
            name,
            attrs: RefCell::new(attrs),
            template_contents,
            mathml_annotation_xml_integration_point,
        })
    }

    fn create_comment(&self, text: StrTendril) -> Handle {
        Node::new(NodeData::Comment { contents: text })
    }

    fn append(&self, parent: &Handle, child: NodeOrText<Handle>) {
        // Append to an existing Text node if we have one.
        if let AppendText(ref text) = child {
            if let Some(h) = parent.children.borrow().last() {
                if append_to_existing_text(h, text) {
                    return;
                }
            }
        }

        append(
            parent,
            match child {
                AppendText(text) => Node::new(NodeData::Text {
                    contents: RefCell::new(text),
                }),
                AppendNode(node) => node,
            },
        );
    }

    fn append_before_sibling(&self, sibling: &Handle, child: NodeOrText<Handle>) {
        let (parent, i) = get_parent_and_index(sibling)
            .expect("append_before_sibling called on node without parent");

        let child = match (child, i) {
            // No previous node.
            (AppendText(text), 0) => Node::new(NodeData::Text {
                contents: RefCell::new(text),
            }),

            // Look for a text node before the insertion point.
            (AppendText(text), i) => {
                {
                    let children = parent.children.borrow();
                    let prev = &children[i - 1];
                    if append_to_existing_text(prev, &text) {
                        return;
                    }
                }
                Node::new(NodeData::Text {
                    contents: RefCell::new(text),
                })
            },

            // The tree builder promises we won't have a text node after
            // the insertion point.

            // Any other kind of node.
            (AppendNode(node), _) => node,
        };

        remove_from_parent(&child);

        child.parent.set(Some(parent.downgrade()));
        parent.children.borrow_mut().insert(i, child);
    }

    fn append_based_on_parent_node(
        &self,
        element: &Handle,
        prev_element: &Handle,
        child: NodeOrText<Handle>,
    ) {
        let has_parent = element.parent().is_some();

        if has_parent {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) {
        append(
            &self.document,
            Node::new(NodeData::Doctype {
                name,
                public_id,
                system_id,
            }),
        );
    }

    fn add_attrs_if_missing(&self, target: &Handle, attrs: AttrMap) {
        let NodeData::Element {
            attrs: ref existing,
            ..
        } = target.data
        else {
            panic!("not an element");
        };

        let mut existing = existing.borrow_mut();
        for (name, value) in attrs.iter() {
            if !existing.contains(name) {
                existing.insert(name, value);
            }
        }
    }

    fn remove_from_parent(&self, target: &Handle) {
        remove_from_parent(target);
    }

    fn reparent_children(&self, node: &Handle, new_parent: &Handle) {
        let mut children = node.children.borrow_mut();
        let mut new_children = new_parent.children.borrow_mut();
        for child in children.iter() {
            let previous_parent = child.parent.replace(Some(new_parent.downgrade()));
            assert!(previous_parent
                .expect("child was already in the tree")
                .upgrade()
                .map_or(false, |p| Rc::ptr_eq(&p, &node.0)));
        }
        new_children.extend(std::mem::take(&mut *children));
    }

    fn is_mathml_annotation_xml_integration_point(&self, target: &Handle) -> bool {
        match target.data {
            NodeData::Element {
                mathml_annotation_xml_integration_point,
                ..
            } => mathml_annotation_xml_integration_point,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn text(s: &str) -> Handle {
        Node::new(NodeData::Text {
            contents: RefCell::new(StrTendril::from_slice(s)),
        })
    }

    fn elem(name: &str) -> Handle {
        Node::new(NodeData::Element {
            name: QualName::html(name),
            attrs: RefCell::new(AttrMap::new()),
            template_contents: None,
            mathml_annotation_xml_integration_point: false,
        })
    }

    #[test]
    fn parent_links_are_weak() {
        let parent = elem("div");
        let child = text("hi");
        parent.append_child(child.clone());
        assert!(Handle::same(&child.parent().unwrap(), &parent));

        child.remove_from_parent();
        assert!(child.parent().is_none());
        assert_eq!(parent.number_of_children(), 0);
    }

    #[test]
    fn reparenting_moves_children() {
        let a = elem("a");
        let b = elem("b");
        a.append_child(text("one"));
        a.append_child(text("two"));

        let dom = Dom::default();
        dom.reparent_children(&a, &b);
        assert_eq!(a.number_of_children(), 0);
        assert_eq!(b.number_of_children(), 2);
        assert!(Handle::same(&b.child_at(0).unwrap().parent().unwrap(), &b));
    }

    #[test]
    fn text_content_concatenates() {
        let div = elem("div");
        let em = elem("em");
        em.append_child(text("world"));
        div.append_child(text("hello "));
        div.append_child(em);
        assert_eq!(div.text_content(), "hello world");
        assert_eq!(div.text_components(), ["hello "]);
    }

    #[test]
    fn set_text_content_replaces_children() {
        let div = elem("div");
        div.append_child(elem("span"));
        div.set_text_content("plain");
        assert_eq!(div.number_of_children(), 1);
        assert_eq!(div.text_content(), "plain");
        assert!(Handle::same(
            &div.child_at(0).unwrap().parent().unwrap(),
            &div
        ));
    }

    #[test]
    fn tree_orders() {
        let root = elem("root");
        let a = elem("a");
        let b = elem("b");
        a.append_child(text("1"));
        root.append_child(a);
        root.append_child(b);

        fn label(n: &Handle) -> String {
            match n.data {
                NodeData::Element { ref name, .. } => name.local.to_string(),
                NodeData::Text { .. } => "#text".to_string(),
                _ => "?".to_string(),
            }
        }

        let names: Vec<_> = root.tree().map(|n| label(&n)).collect();
        assert_eq!(names, ["root", "a", "#text", "b"]);

        let reversed: Vec<_> = root.reversed_tree().map(|n| label(&n)).collect();
        assert_eq!(reversed, ["root", "b", "a", "#text"]);
    }

    #[test]
    fn class_helpers() {
        let div = elem("div");
        div.set_attribute("class", "a b");
        assert!(div.has_class("a"));
        assert!(!div.has_class("c"));
        div.toggle_class("c");
        assert!(div.has_class("c"));
        div.toggle_class("a");
        assert_eq!(div.attribute("class").unwrap(), "b c");
    }

    #[test]
    fn attribute_order_is_stable() {
        let div = elem("div");
        div.set_attribute("id", "x");
        div.set_attribute("class", "y");
        div.set_attribute("id", "z");
        let NodeData::Element { ref attrs, .. } = div.data else {
            unreachable!()
        };
        assert_eq!(attrs.borrow().index_of("id"), Some(0));
        assert_eq!(attrs.borrow().get("id"), Some("z"));
    }
}
