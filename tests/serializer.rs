// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use arbor::{parse_document, Dom};

fn parse(input: &str) -> Dom {
    parse_document(input, Default::default())
}

fn body_markup(input: &str) -> String {
    parse(input).body_element().expect("no body").inner_html()
}

#[test]
fn text_is_escaped() {
    assert_eq!(
        body_markup("<p>a &amp; b &lt; c</p>"),
        "<p>a &amp; b &lt; c</p>"
    );
    assert_eq!(body_markup("<p>1 > 0</p>"), "<p>1 &gt; 0</p>");
    assert_eq!(body_markup("<p>a\u{00A0}b</p>"), "<p>a&nbsp;b</p>");
}

#[test]
fn attributes_are_escaped() {
    assert_eq!(
        body_markup("<p title='a \"quote\" &amp; more'></p>"),
        "<p title=\"a &quot;quote&quot; &amp; more\"></p>"
    );
    // `<` and `>` are fine inside attribute values.
    assert_eq!(
        body_markup("<p title=\"a<b>\"></p>"),
        "<p title=\"a<b>\"></p>"
    );
}

#[test]
fn void_elements_have_no_end_tag() {
    assert_eq!(body_markup("<br>"), "<br>");
    assert_eq!(body_markup("<hr><img src=x>"), "<hr><img src=\"x\">");
    // A self-closing slash is not round-tripped; it means nothing in HTML.
    assert_eq!(body_markup("<br/>"), "<br>");
}

#[test]
fn raw_text_is_verbatim() {
    assert_eq!(
        body_markup("<script>if (a && b < c) run()</script>"),
        "<script>if (a && b < c) run()</script>"
    );
}

#[test]
fn noscript_is_escaped_when_scripting_is_off() {
    // Scripting is off in this parser, so <noscript> children are a real
    // subtree and serialize escaped where needed.
    let dom = parse("<body><noscript><p>a & b</p></noscript>");
    assert_eq!(
        dom.body_element().unwrap().inner_html(),
        "<noscript><p>a &amp; b</p></noscript>"
    );
}

#[test]
fn pre_leading_newline_is_reinserted() {
    // The parser dropped the first newline; the serializer puts one back so
    // reparsing gives the same text.
    let dom = parse("<pre>\n\nx</pre>");
    let pre = dom.document.first_node_matching_selector("pre").unwrap().unwrap();
    assert_eq!(pre.text_content(), "\nx");
    assert_eq!(pre.outer_html(), "<pre>\n\nx</pre>");
}

#[test]
fn comments_round_trip() {
    assert_eq!(body_markup("x<!-- a -- b -->y"), "x<!-- a -- b -->y");
}

#[test]
fn doctype_serializes_name_only() {
    let dom = parse("<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01//EN\">");
    assert!(dom.document.inner_html().starts_with("<!DOCTYPE html>"));
}

#[test]
fn foreign_attributes_keep_their_prefixes() {
    assert_eq!(
        body_markup("<svg><a xlink:href=\"u\"/></svg>"),
        "<svg><a xlink:href=\"u\"></a></svg>"
    );
}

#[test]
fn inner_and_outer_html() {
    let dom = parse("<div id=d><em>x</em></div>");
    let div = dom.document.first_node_matching_selector("#d").unwrap().unwrap();
    assert_eq!(div.inner_html(), "<em>x</em>");
    assert_eq!(div.outer_html(), "<div id=\"d\"><em>x</em></div>");
}

#[test]
fn recursive_description_is_indented() {
    let dom = parse("<p class=a>x</p>");
    let description = dom.document.recursive_description();
    assert!(description.starts_with("#document\n"));
    assert!(description.contains("\n      <p class=\"a\">\n"));
}
