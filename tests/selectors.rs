// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use arbor::{parse_document, Dom, Handle, Selector};

fn parse(input: &str) -> Dom {
    parse_document(input, Default::default())
}

fn ids(nodes: &[Handle]) -> Vec<String> {
    nodes
        .iter()
        .map(|n| n.attribute("id").unwrap_or_default())
        .collect()
}

#[test]
fn class_id_and_child_combinator() {
    let dom = parse("<p class='a b'><a id='x'>");
    let matches = dom.document.nodes_matching_selector("p.a > a#x").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(&*matches[0].tag_name().unwrap(), "a");
    assert_eq!(matches[0].attribute("id").unwrap(), "x");

    assert!(dom
        .document
        .first_node_matching_selector("p.c > a#x")
        .unwrap()
        .is_none());
}

#[test]
fn nth_child_odd_selects_135() {
    let dom = parse(
        "<ul><li id=1></li><li id=2></li><li id=3></li>\
         <li id=4></li><li id=5></li><li id=6></li></ul>",
    );
    let matches = dom
        .document
        .nodes_matching_selector("li:nth-child(2n+1)")
        .unwrap();
    assert_eq!(ids(&matches), ["1", "3", "5"]);

    let odd = dom.document.nodes_matching_selector("li:nth-child(odd)").unwrap();
    assert_eq!(ids(&odd), ["1", "3", "5"]);

    let even = dom.document.nodes_matching_selector("li:nth-child(even)").unwrap();
    assert_eq!(ids(&even), ["2", "4", "6"]);

    let last_two = dom
        .document
        .nodes_matching_selector("li:nth-last-child(-n+2)")
        .unwrap();
    assert_eq!(ids(&last_two), ["5", "6"]);
}

#[test]
fn structural_pseudo_classes() {
    let dom = parse("<div id=d><p id=a></p><span id=b></span><p id=c></p></div>");
    let doc = &dom.document;

    assert_eq!(
        ids(&doc.nodes_matching_selector("#d > :first-child").unwrap()),
        ["a"]
    );
    assert_eq!(
        ids(&doc.nodes_matching_selector("#d > :last-child").unwrap()),
        ["c"]
    );
    assert_eq!(
        ids(&doc.nodes_matching_selector("p:first-of-type").unwrap()),
        ["a"]
    );
    assert_eq!(
        ids(&doc.nodes_matching_selector("p:last-of-type").unwrap()),
        ["c"]
    );
    assert_eq!(
        ids(&doc.nodes_matching_selector("span:only-of-type").unwrap()),
        ["b"]
    );
    assert!(doc
        .first_node_matching_selector("p:only-child")
        .unwrap()
        .is_none());
}

#[test]
fn sibling_combinators() {
    let dom = parse("<h1 id=h></h1><p id=a></p><p id=b></p>");
    assert_eq!(
        ids(&dom.document.nodes_matching_selector("h1 + p").unwrap()),
        ["a"]
    );
    assert_eq!(
        ids(&dom.document.nodes_matching_selector("h1 ~ p").unwrap()),
        ["a", "b"]
    );
}

#[test]
fn attribute_operators() {
    let dom = parse(
        "<a id=1 href='http://example.com/x.png' lang='en-US' rel='a b'></a>\
         <a id=2 href='https://other.org/y.gif' lang='en'></a>",
    );
    let doc = &dom.document;

    assert_eq!(ids(&doc.nodes_matching_selector("a[href]").unwrap()), ["1", "2"]);
    assert_eq!(
        ids(&doc.nodes_matching_selector("a[lang='en']").unwrap()),
        ["2"]
    );
    assert_eq!(
        ids(&doc.nodes_matching_selector("a[lang|=en]").unwrap()),
        ["1", "2"]
    );
    assert_eq!(ids(&doc.nodes_matching_selector("a[rel~=b]").unwrap()), ["1"]);
    assert_eq!(
        ids(&doc.nodes_matching_selector("a[href^=http]").unwrap()),
        ["1", "2"]
    );
    assert_eq!(
        ids(&doc.nodes_matching_selector("a[href$='.png']").unwrap()),
        ["1"]
    );
    assert_eq!(
        ids(&doc.nodes_matching_selector("a[href*=example]").unwrap()),
        ["1"]
    );
}

#[test]
fn not_accepts_any_selector() {
    let dom = parse("<div><p id=a class=x></p><p id=b></p></div>");
    assert_eq!(
        ids(&dom.document.nodes_matching_selector("p:not(.x)").unwrap()),
        ["b"]
    );
    // A full complex selector inside :not(), beyond Level 3.
    assert_eq!(
        ids(&dom
            .document
            .nodes_matching_selector("p:not(div > .x)")
            .unwrap()),
        ["b"]
    );
}

#[test]
fn root_and_empty() {
    let dom = parse("<div id=d></div><p id=p>x</p>");
    let root = dom.document.nodes_matching_selector(":root").unwrap();
    assert_eq!(root.len(), 1);
    assert_eq!(&*root[0].tag_name().unwrap(), "html");

    assert_eq!(
        ids(&dom.document.nodes_matching_selector("div:empty").unwrap()),
        ["d"]
    );
    assert!(dom
        .document
        .first_node_matching_selector("p:empty")
        .unwrap()
        .is_none());
}

#[test]
fn form_state_pseudo_classes() {
    let dom = parse(
        "<input id=1 type=checkbox checked>\
         <input id=2 type=checkbox>\
         <input id=3 disabled>\
         <select><option id=4 selected>x</option></select>",
    );
    let doc = &dom.document;
    assert_eq!(ids(&doc.nodes_matching_selector(":checked").unwrap()), ["1", "4"]);
    assert_eq!(ids(&doc.nodes_matching_selector("input:disabled").unwrap()), ["3"]);
    assert_eq!(
        ids(&doc.nodes_matching_selector("input:enabled").unwrap()),
        ["1", "2"]
    );
}

#[test]
fn selector_groups() {
    let dom = parse("<h1 id=a></h1><p id=b></p><em id=c></em>");
    assert_eq!(
        ids(&dom.document.nodes_matching_selector("h1, em").unwrap()),
        ["a", "c"]
    );
}

#[test]
fn precompiled_selectors_are_reusable() {
    let selector = Selector::parse("li.on").unwrap();
    assert_eq!(selector.string(), "li.on");

    let dom = parse("<ul><li class=on id=1><li id=2><li class=on id=3></ul>");
    let matches = dom.document.nodes_matching_parsed_selector(&selector);
    assert_eq!(ids(&matches), ["1", "3"]);

    let dom2 = parse("<ul><li id=9 class=on></ul>");
    let matches = dom2.document.nodes_matching_parsed_selector(&selector);
    assert_eq!(ids(&matches), ["9"]);
}

#[test]
fn unparseable_selectors_are_errors() {
    let dom = parse("<p>");
    for bad in ["", "p >", "p::first-line", "p:hover", "[x=", "p:frobnicate"] {
        assert!(
            dom.document.nodes_matching_selector(bad).is_err(),
            "expected parse failure for {bad:?}"
        );
    }
}

#[test]
fn type_selectors_match_case_insensitively() {
    let dom = parse("<svg><foreignObject></foreignObject></svg>");
    assert_eq!(
        dom.document
            .nodes_matching_selector("foreignobject")
            .unwrap()
            .len(),
        1
    );
}
