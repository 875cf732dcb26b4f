// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Matching parsed selectors against DOM elements.

use super::{
    AttrOp, Combinator, ComplexSelector, CompoundSelector, NthExpr, PseudoClass, Selector,
    SimpleSelector,
};
use crate::dom::Handle;

pub(super) fn matches_complex(selector: &ComplexSelector, element: &Handle) -> bool {
    if !matches_compound(&selector.head, element) {
        return false;
    }
    matches_ancestors(&selector.ancestors, 0, element)
}

fn matches_ancestors(
    list: &[(Combinator, CompoundSelector)],
    index: usize,
    element: &Handle,
) -> bool {
    let Some((combinator, compound)) = list.get(index) else {
        return true;
    };

    match combinator {
        Combinator::Child => match parent_element(element) {
            Some(parent) => {
                matches_compound(compound, &parent) && matches_ancestors(list, index + 1, &parent)
            },
            None => false,
        },

        Combinator::Descendant => {
            let mut current = parent_element(element);
            while let Some(ancestor) = current {
                if matches_compound(compound, &ancestor)
                    && matches_ancestors(list, index + 1, &ancestor)
                {
                    return true;
                }
                current = parent_element(&ancestor);
            }
            false
        },

        Combinator::NextSibling => match previous_element_sibling(element) {
            Some(sibling) => {
                matches_compound(compound, &sibling) && matches_ancestors(list, index + 1, &sibling)
            },
            None => false,
        },

        Combinator::LaterSibling => {
            let mut current = previous_element_sibling(element);
            while let Some(sibling) = current {
                if matches_compound(compound, &sibling)
                    && matches_ancestors(list, index + 1, &sibling)
                {
                    return true;
                }
                current = previous_element_sibling(&sibling);
            }
            false
        },
    }
}

fn parent_element(element: &Handle) -> Option<Handle> {
    element.parent().filter(|p| p.is_element())
}

fn previous_element_sibling(element: &Handle) -> Option<Handle> {
    let parent = element.parent()?;
    let index = parent.index_of_child(element)?;
    parent
        .children()
        .into_iter()
        .take(index)
        .filter(|n| n.is_element())
        .next_back()
}

fn matches_compound(compound: &CompoundSelector, element: &Handle) -> bool {
    compound
        .components
        .iter()
        .all(|simple| matches_simple(simple, element))
}

fn matches_simple(simple: &SimpleSelector, element: &Handle) -> bool {
    match simple {
        SimpleSelector::Universal => true,

        SimpleSelector::LocalName(name) => element
            .tag_name()
            .is_some_and(|tag| tag.eq_ignore_ascii_case(name)),

        SimpleSelector::Id(id) => element.attribute("id").as_deref() == Some(&**id),

        SimpleSelector::Class(class) => element.has_class(class),

        SimpleSelector::Attr { name, op } => {
            let Some(value) = element.attribute(name) else {
                return false;
            };
            match op {
                AttrOp::Exists => true,
                AttrOp::Equals(expected) => value == *expected,
                AttrOp::Includes(expected) => {
                    !expected.is_empty() && value.split_ascii_whitespace().any(|v| v == expected)
                },
                AttrOp::DashMatch(expected) => {
                    value == *expected
                        || (value.len() > expected.len()
                            && value.starts_with(&**expected)
                            && value.as_bytes()[expected.len()] == b'-')
                },
                AttrOp::Prefix(expected) => !expected.is_empty() && value.starts_with(&**expected),
                AttrOp::Suffix(expected) => !expected.is_empty() && value.ends_with(&**expected),
                AttrOp::Substring(expected) => {
                    !expected.is_empty() && value.contains(&**expected)
                },
            }
        },

        SimpleSelector::Pseudo(pseudo) => matches_pseudo(pseudo, element),
    }
}

fn matches_pseudo(pseudo: &PseudoClass, element: &Handle) -> bool {
    match pseudo {
        PseudoClass::Root => element.parent().is_some_and(|p| p.is_document()),

        PseudoClass::Empty => element.children().is_empty(),

        PseudoClass::FirstChild => child_index(element).map(|(i, _)| i) == Some(1),
        PseudoClass::LastChild => match child_index(element) {
            Some((i, len)) => i == len,
            None => false,
        },
        PseudoClass::OnlyChild => child_index(element) == Some((1, 1)),

        PseudoClass::FirstOfType => type_index(element).map(|(i, _)| i) == Some(1),
        PseudoClass::LastOfType => match type_index(element) {
            Some((i, len)) => i == len,
            None => false,
        },
        PseudoClass::OnlyOfType => type_index(element) == Some((1, 1)),

        PseudoClass::NthChild(nth) => child_index(element)
            .is_some_and(|(i, _)| nth.matches(i)),
        PseudoClass::NthLastChild(nth) => child_index(element)
            .is_some_and(|(i, len)| nth.matches(len + 1 - i)),
        PseudoClass::NthOfType(nth) => type_index(element)
            .is_some_and(|(i, _)| nth.matches(i)),
        PseudoClass::NthLastOfType(nth) => type_index(element)
            .is_some_and(|(i, len)| nth.matches(len + 1 - i)),

        PseudoClass::Enabled => is_form_control(element) && element.attribute("disabled").is_none(),
        PseudoClass::Disabled => {
            is_form_control(element) && element.attribute("disabled").is_some()
        },
        PseudoClass::Checked => match element.tag_name().as_deref() {
            Some("input") => element.attribute("checked").is_some(),
            Some("option") => element.attribute("selected").is_some(),
            _ => false,
        },

        PseudoClass::Not(selector) => !selector.matches(element),
    }
}

fn is_form_control(element: &Handle) -> bool {
    matches!(
        element.tag_name().as_deref(),
        Some("input" | "button" | "select" | "textarea" | "option" | "optgroup" | "fieldset")
    )
}

/// The 1-based position of the element among its parent's element children,
/// and the total count. `None` for elements without a parent element.
fn child_index(element: &Handle) -> Option<(i32, i32)> {
    let parent = element.parent()?;
    let siblings = parent.child_elements();
    let position = siblings.iter().position(|n| crate::dom::Handle::same(n, element))?;
    Some((position as i32 + 1, siblings.len() as i32))
}

/// Like `child_index`, but counting only siblings with the same tag name.
fn type_index(element: &Handle) -> Option<(i32, i32)> {
    let name = element.tag_name()?;
    let parent = element.parent()?;
    let siblings: Vec<_> = parent
        .child_elements()
        .into_iter()
        .filter(|n| n.tag_name().as_ref() == Some(&name))
        .collect();
    let position = siblings.iter().position(|n| crate::dom::Handle::same(n, element))?;
    Some((position as i32 + 1, siblings.len() as i32))
}

impl NthExpr {
    /// Does the 1-based index match `an+b` for some non-negative integer n?
    pub fn matches(&self, index: i32) -> bool {
        let NthExpr { a, b } = *self;
        if a == 0 {
            return index == b;
        }
        let delta = index - b;
        delta % a == 0 && delta / a >= 0
    }
}

impl Selector {
    /// Whether the selector matches the given element. Always false for
    /// non-element nodes.
    pub fn matches(&self, node: &Handle) -> bool {
        if !node.is_element() {
            return false;
        }
        self.groups
            .iter()
            .any(|complex| matches_complex(complex, node))
    }
}

#[cfg(test)]
mod test {
    use super::super::NthExpr;

    #[test]
    fn nth_matching() {
        let odd = NthExpr::ODD;
        assert!(odd.matches(1));
        assert!(!odd.matches(2));
        assert!(odd.matches(3));

        let every_third_from_two = NthExpr { a: 3, b: 2 };
        assert!(every_third_from_two.matches(2));
        assert!(every_third_from_two.matches(5));
        assert!(!every_third_from_two.matches(3));

        // Negative coefficients select a finite prefix.
        let first_three = NthExpr { a: -1, b: 3 };
        assert!(first_three.matches(1));
        assert!(first_three.matches(3));
        assert!(!first_three.matches(4));

        let exactly_four = NthExpr { a: 0, b: 4 };
        assert!(exactly_four.matches(4));
        assert!(!exactly_four.matches(8));
    }
}
