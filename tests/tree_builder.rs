// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tree construction tests: given markup, check the shape of the resulting
//! document (via its serialization), the quirks mode, and the reported
//! errors.

use arbor::{parse_bytes, parse_document, parse_fragment, AttrMap, Dom, NodeData, QuirksMode};

fn parse(input: &str) -> Dom {
    parse_document(input, Default::default())
}

fn markup(dom: &Dom) -> String {
    dom.document.inner_html()
}

fn body_markup(dom: &Dom) -> String {
    dom.body_element().expect("no body").inner_html()
}

#[test]
fn simple_element() {
    let dom = parse("<p>Hello</p>");
    assert_eq!(
        markup(&dom),
        "<html><head></head><body><p>Hello</p></body></html>"
    );
    assert_eq!(dom.quirks_mode(), QuirksMode::Quirks);
    // One error: the missing DOCTYPE.
    assert_eq!(dom.errors().len(), 1);
}

#[test]
fn doctype_gives_no_quirks() {
    let dom = parse("<!DOCTYPE html><p>");
    assert_eq!(dom.quirks_mode(), QuirksMode::NoQuirks);
    assert_eq!(dom.errors().len(), 0);
    assert_eq!(
        markup(&dom),
        "<!DOCTYPE html><html><head></head><body><p></p></body></html>"
    );
    assert!(dom.document_type().is_some());
}

#[test]
fn old_public_id_gives_quirks() {
    let dom = parse("<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 3.2 Final//EN\">");
    assert_eq!(dom.quirks_mode(), QuirksMode::Quirks);
}

#[test]
fn xhtml_transitional_gives_limited_quirks() {
    let dom =
        parse("<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\"><p>");
    assert_eq!(dom.quirks_mode(), QuirksMode::LimitedQuirks);
}

#[test]
fn implicit_table_structures() {
    let dom = parse("<table><tr><td>x");
    assert_eq!(
        body_markup(&dom),
        "<table><tbody><tr><td>x</td></tr></tbody></table>"
    );
    // Missing DOCTYPE, and the still-open table at EOF.
    assert!(dom.errors().len() >= 2);
}

#[test]
fn foster_parenting_moves_text_before_table() {
    let dom = parse("<table>x<td>y</table>");
    assert_eq!(
        body_markup(&dom),
        "x<table><tbody><tr><td>y</td></tr></tbody></table>"
    );
}

#[test]
fn adoption_agency_canonical() {
    let dom = parse("<p>1<b>2<i>3</b>4</i>5</p>");
    assert_eq!(body_markup(&dom), "<p>1<b>2<i>3</i></b><i>4</i>5</p>");
}

#[test]
fn adoption_agency_b_across_paragraphs() {
    let dom = parse("<b>1<p>2</b>3</p>");
    assert_eq!(body_markup(&dom), "<b>1</b><p><b>2</b>3</p>");
}

#[test]
fn foreign_content_case_mapping() {
    let dom = parse("<svg><g/><foreignObject><p>hi");
    assert_eq!(
        body_markup(&dom),
        "<svg><g></g><foreignObject><p>hi</p></foreignObject></svg>"
    );

    let svg = dom
        .body_element()
        .unwrap()
        .first_node_matching_selector("svg")
        .unwrap()
        .expect("no svg element");
    assert_eq!(svg.namespace(), Some(arbor::Namespace::Svg));

    let fo = svg.child_at(1).unwrap();
    assert_eq!(&*fo.tag_name().unwrap(), "foreignObject");
    assert_eq!(fo.namespace(), Some(arbor::Namespace::Svg));

    let p = fo.child_at(0).unwrap();
    assert_eq!(p.namespace(), Some(arbor::Namespace::Html));
}

#[test]
fn math_is_mathml_namespaced() {
    let dom = parse("<math><mi>x</mi></math>");
    let mi = dom
        .body_element()
        .unwrap()
        .first_node_matching_selector("mi")
        .unwrap()
        .expect("no mi");
    assert_eq!(mi.namespace(), Some(arbor::Namespace::MathMl));
}

#[test]
fn numeric_entity_override() {
    let dom = parse("&#x80;");
    assert_eq!(dom.body_element().unwrap().text_content(), "\u{20AC}");
    // Missing DOCTYPE plus the invalid numeric reference.
    assert!(dom.errors().len() >= 2);
}

#[test]
fn named_entity_longest_match() {
    let dom = parse("&notin;");
    assert_eq!(dom.body_element().unwrap().text_content(), "\u{2209}");

    let dom = parse("&notit;");
    assert_eq!(dom.body_element().unwrap().text_content(), "\u{00AC}it;");
    assert!(dom
        .errors()
        .iter()
        .any(|e| e.contains("does not end with semicolon")));

    let dom = parse("&not;x");
    assert_eq!(dom.body_element().unwrap().text_content(), "\u{00AC}x");
}

#[test]
fn entity_in_attribute_historical_rule() {
    // No semicolon and followed by an alphanumeric: not a reference.
    let dom = parse("<a href=\"?a=b&notc=d\">x</a>");
    let a = dom
        .body_element()
        .unwrap()
        .first_node_matching_selector("a")
        .unwrap()
        .unwrap();
    assert_eq!(a.attribute("href").unwrap(), "?a=b&notc=d");

    // With a semicolon it is always a reference.
    let dom = parse("<a href=\"?a=b&not;c=d\">x</a>");
    let a = dom
        .body_element()
        .unwrap()
        .first_node_matching_selector("a")
        .unwrap()
        .unwrap();
    assert_eq!(a.attribute("href").unwrap(), "?a=b\u{00AC}c=d");
}

#[test]
fn duplicate_attributes_first_wins() {
    let dom = parse("<p id=a id=b class=c>");
    let p = dom
        .body_element()
        .unwrap()
        .first_node_matching_selector("p")
        .unwrap()
        .unwrap();
    assert_eq!(p.attribute("id").unwrap(), "a");
    assert_eq!(p.attribute("class").unwrap(), "c");
    assert!(dom.errors().iter().any(|e| e.contains("Duplicate attribute")));
}

#[test]
fn attribute_order_is_preserved_and_stable() {
    let dom = parse("<p zeta=1 alpha=2 mu=3>");
    let p = dom
        .body_element()
        .unwrap()
        .first_node_matching_selector("p")
        .unwrap()
        .unwrap();
    let NodeData::Element { ref attrs, .. } = p.data else {
        panic!("not an element");
    };
    let attrs = attrs.borrow();
    let keys: Vec<_> = attrs.keys().map(String::from).collect();
    assert_eq!(keys, ["zeta", "alpha", "mu"]);
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(attrs.index_of(key), Some(i));
    }
}

#[test]
fn comments_and_bogus_comments() {
    let dom = parse("<!-- hi --><p><?php nope ?></p>");
    assert_eq!(
        markup(&dom),
        "<!-- hi --><html><head></head><body><p><!--?php nope ?--></p></body></html>"
    );
}

#[test]
fn rcdata_and_rawtext_elements() {
    let dom = parse("<title>a<b>c</title><style>p < q</style>");
    // RCDATA contents come out escaped, raw-text contents verbatim.
    assert_eq!(
        markup(&dom),
        "<html><head><title>a&lt;b&gt;c</title><style>p < q</style></head><body></body></html>"
    );
}

#[test]
fn script_double_escape() {
    let dom = parse("<script><!--<script></script>--></script>x");
    let script = dom
        .document
        .first_node_matching_selector("script")
        .unwrap()
        .unwrap();
    assert_eq!(script.text_content(), "<!--<script></script>-->");
}

#[test]
fn plaintext_swallows_everything() {
    let dom = parse("<plaintext></plaintext><p>");
    let pt = dom
        .document
        .first_node_matching_selector("plaintext")
        .unwrap()
        .unwrap();
    assert_eq!(pt.text_content(), "</plaintext><p>");
}

#[test]
fn headings_do_not_nest() {
    let dom = parse("<h1>a<h2>b");
    assert_eq!(body_markup(&dom), "<h1>a</h1><h2>b</h2>");
}

#[test]
fn list_items_close_each_other() {
    let dom = parse("<ul><li>a<li>b</ul>");
    assert_eq!(body_markup(&dom), "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn select_moves_out_of_table() {
    let dom = parse("<table><select><option>x</table>");
    assert!(dom
        .document
        .first_node_matching_selector("select > option")
        .unwrap()
        .is_some());
}

#[test]
fn template_contents_are_separate() {
    let dom = parse("<template><p>hi</p></template>");
    let template = dom
        .document
        .first_node_matching_selector("template")
        .unwrap()
        .unwrap();
    // The <p> is in the template contents, not the children.
    assert_eq!(template.number_of_children(), 0);
    assert_eq!(template.outer_html(), "<template><p>hi</p></template>");
    // And it is not found by queries over the main tree.
    assert!(dom
        .document
        .first_node_matching_selector("p")
        .unwrap()
        .is_none());
}

#[test]
fn frameset_document() {
    let dom = parse("<!DOCTYPE html><frameset><frame></frameset>");
    assert_eq!(
        markup(&dom),
        "<!DOCTYPE html><html><head></head><frameset><frame></frameset></html>"
    );
}

#[test]
fn cdata_only_in_foreign_content() {
    // In HTML content, CDATA is a bogus comment.
    let dom = parse("<p><![CDATA[x]]></p>");
    assert_eq!(body_markup(&dom), "<p><!--[CDATA[x]]--></p>");

    // In foreign content, it is character data.
    let dom = parse("<svg><![CDATA[a<b]]></svg>");
    let svg = dom.document.first_node_matching_selector("svg").unwrap().unwrap();
    assert_eq!(svg.text_content(), "a<b");
}

#[test]
fn parent_is_null_iff_document() {
    let dom = parse("<!DOCTYPE html><p>x<b>y</b></p><!--c-->");
    for node in dom.document.tree() {
        if node.is_document() {
            assert!(node.parent().is_none());
        } else {
            assert!(node.parent().is_some());
        }
    }
}

#[test]
fn serialize_reparse_is_idempotent_on_trees() {
    for input in [
        "<p>Hello</p>",
        "<table><tr><td>x",
        "<p>1<b>2<i>3</b>4</i>5</p>",
        "<svg><g/><foreignObject><p>hi",
        "<ul><li>a<li>b",
        "<!DOCTYPE html><pre>\n\nx</pre>",
        "<table>x<td>y</table>",
        "<b><b><i>a</b>b</i>",
        "<select><option>a<option>b",
        "x<!--c--><p a=1 b=2>",
    ] {
        let once = markup(&parse(input));
        let twice = markup(&parse(&once));
        assert_eq!(once, twice, "not idempotent for {input:?}");
    }
}

#[test]
fn fragment_parsing_in_ul_context() {
    let dom = parse_fragment("<li>a<li>b", "ul", AttrMap::new(), Default::default());
    let nodes = dom.fragment_nodes();
    assert_eq!(nodes.len(), 2);
    assert_eq!(&*nodes[0].tag_name().unwrap(), "li");
    assert_eq!(nodes[1].text_content(), "b");
}

#[test]
fn fragment_parsing_in_table_row_context() {
    let dom = parse_fragment("<td>x</td>", "tr", AttrMap::new(), Default::default());
    let nodes = dom.fragment_nodes();
    assert_eq!(nodes.len(), 1);
    assert_eq!(&*nodes[0].tag_name().unwrap(), "td");
}

#[test]
fn fragment_parsing_in_rcdata_context() {
    // Inside <title>, markup is text.
    let dom = parse_fragment("<b>x</b>", "title", AttrMap::new(), Default::default());
    let nodes = dom.fragment_nodes();
    assert_eq!(nodes.len(), 1);
    assert!(nodes[0].is_text());
    assert_eq!(nodes[0].text_content(), "<b>x</b>");
}

#[test]
fn parse_bytes_with_bom() {
    let dom = parse_bytes(b"\xEF\xBB\xBF<p>hi</p>", None, Default::default());
    assert_eq!(dom.body_element().unwrap().text_content(), "hi");
    assert_eq!(dom.parsed_encoding(), arbor::encoding_rs::UTF_8);
}

#[test]
fn parse_bytes_utf16le() {
    let mut data = vec![0xFF, 0xFE];
    for unit in "<p>hi".encode_utf16() {
        data.extend_from_slice(&unit.to_le_bytes());
    }
    let dom = parse_bytes(&data, None, Default::default());
    assert_eq!(dom.body_element().unwrap().text_content(), "hi");
    assert_eq!(dom.parsed_encoding(), arbor::encoding_rs::UTF_16LE);
}

#[test]
fn parse_bytes_content_type_charset() {
    // 0xE9 is é in windows-1252 and invalid UTF-8.
    let dom = parse_bytes(
        b"<p>caf\xE9</p>",
        Some("text/html; charset=windows-1252"),
        Default::default(),
    );
    assert_eq!(dom.body_element().unwrap().text_content(), "caf\u{E9}");
    assert_eq!(dom.parsed_encoding(), arbor::encoding_rs::WINDOWS_1252);
}

#[test]
fn parse_bytes_restarts_on_late_meta() {
    // The meta declaration sits beyond the 1024-byte prescan window, so the
    // first pass runs as UTF-8 and the tree builder's signal forces a
    // restart.
    let mut data = Vec::new();
    data.extend_from_slice(b"<!DOCTYPE html><!--");
    data.extend_from_slice(&vec![b'x'; 1100]);
    data.extend_from_slice(b"--><meta charset=\"windows-1252\"><p>caf\xE9</p>");
    let dom = parse_bytes(&data, None, Default::default());
    assert_eq!(dom.parsed_encoding(), arbor::encoding_rs::WINDOWS_1252);
    assert_eq!(dom.body_element().unwrap().text_content(), "caf\u{E9}");
}

#[test]
fn garbage_still_produces_a_document() {
    let dom = parse("</p>&&&<<<");
    assert!(dom.root_element().is_some());
    assert!(dom.body_element().is_some());
    assert!(!dom.errors().is_empty());
}
