// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Types shared between the tree builder and the DOM it drives.

use std::borrow::Cow;
use std::fmt;

use tendril::StrTendril;

use crate::attrs::AttrMap;

pub use self::QuirksMode::{LimitedQuirks, NoQuirks, Quirks};

/// <https://dom.spec.whatwg.org/#concept-document-quirks>
#[derive(PartialEq, Eq, Copy, Clone, Hash, Debug)]
pub enum QuirksMode {
    Quirks,
    LimitedQuirks,
    NoQuirks,
}

/// The namespace an element belongs to.
///
/// Only the three namespaces the HTML parsing algorithm can produce exist
/// here; there is no XML parsing path.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Debug)]
pub enum Namespace {
    Html,
    MathMl,
    Svg,
}

impl Namespace {
    /// The namespace URL, as used by `xmlns` and friends.
    pub fn url(self) -> &'static str {
        match self {
            Namespace::Html => "http://www.w3.org/1999/xhtml",
            Namespace::MathMl => "http://www.w3.org/1998/Math/MathML",
            Namespace::Svg => "http://www.w3.org/2000/svg",
        }
    }
}

/// A namespace-qualified element name.
///
/// Tag names coming out of the tokenizer are lowercase; foreign-content
/// case adjustment (e.g. `foreignObject`) happens in the tree builder
/// before the name reaches the DOM.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct QualName {
    pub ns: Namespace,
    pub local: StrTendril,
}

impl QualName {
    pub fn new(ns: Namespace, local: impl Into<StrTendril>) -> QualName {
        QualName {
            ns,
            local: local.into(),
        }
    }

    pub fn html(local: impl Into<StrTendril>) -> QualName {
        QualName::new(Namespace::Html, local)
    }

    pub fn expanded(&self) -> ExpandedName<'_> {
        ExpandedName {
            ns: self.ns,
            local: &self.local,
        }
    }
}

/// A borrowed view of a qualified name, cheap to pass to tag-set tests.
#[derive(PartialEq, Eq, Copy, Clone)]
pub struct ExpandedName<'a> {
    pub ns: Namespace,
    pub local: &'a str,
}

impl fmt::Debug for ExpandedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}:{}", self.ns, self.local)
    }
}

/// Something which can be inserted into the DOM.
pub enum NodeOrText<Handle> {
    AppendNode(Handle),
    AppendText(StrTendril),
}

pub use self::NodeOrText::{AppendNode, AppendText};

/// Types which can process the tree modifications requested by the tree
/// builder. This is the seam between tree construction and the DOM.
pub trait TreeSink {
    /// `Handle` is a reference to a DOM node. The tree builder requires that
    /// a `Handle` implements `Clone` to get another reference to the same
    /// node.
    type Handle: Clone;

    /// Get a handle to the `Document` node.
    fn get_document(&self) -> Self::Handle;

    /// What is the name of the element?
    ///
    /// Should never be called on a non-element node; feel free to `panic!`.
    fn elem_name<'a>(&self, target: &'a Self::Handle) -> ExpandedName<'a>;

    /// Create an element.
    fn create_element(&self, name: QualName, attrs: AttrMap) -> Self::Handle;

    /// Create a comment node.
    fn create_comment(&self, text: StrTendril) -> Self::Handle;

    /// Append a node as the last child of the given node. If this would
    /// produce adjacent sibling text nodes, it should concatenate the text
    /// instead.
    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>);

    /// Append a node as the sibling immediately before the given node.
    ///
    /// The tree builder promises that `sibling` is not a text node. However
    /// its old previous sibling, which would become the new node's previous
    /// sibling, could be a text node. If the new node is also a text node,
    /// the two should be merged, as in the behavior of `append`.
    fn append_before_sibling(&self, sibling: &Self::Handle, child: NodeOrText<Self::Handle>);

    /// When the insertion point is decided by the existence of a parent
    /// node of the element, we consider both possibilities and send the
    /// element which will be used if a parent node exists, along with the
    /// element to be used if there isn't one.
    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    );

    /// Append a `DOCTYPE` element to the `Document` node.
    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    );

    /// Get a handle to a template's template contents. The tree builder
    /// promises this will never be called with something else than
    /// a template element.
    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle;

    /// Do two handles refer to the same node?
    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool;

    /// Set the document's quirks mode.
    fn set_quirks_mode(&self, mode: QuirksMode);

    /// Called whenever the tree builder encounters a parse error.
    fn parse_error(&self, msg: Cow<'static, str>);

    /// Detach the given node from its parent.
    fn remove_from_parent(&self, target: &Self::Handle);

    /// Remove all the children from node and append them to new_parent.
    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle);

    /// Add each attribute to the given element, if no attribute with that
    /// name already exists. The tree builder promises this will never be
    /// called with something else than an element.
    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: AttrMap);

    /// Returns true if the adjusted current node is an HTML integration
    /// point and the token is a start tag.
    fn is_mathml_annotation_xml_integration_point(&self, _handle: &Self::Handle) -> bool {
        false
    }

    /// Indicate that a node was popped off the stack of open elements.
    fn pop(&self, _node: &Self::Handle) {}
}
