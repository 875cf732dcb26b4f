// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The tokenizer's state space.
//!
//! The tokenization chapter of the HTML standard defines roughly seventy
//! states. Many of them come in families that differ only in which kind of
//! raw data is being consumed, or which DOCTYPE identifier is being read, so
//! the [`State`] enum folds each family into one variant with a parameter.
//! The flattened enum below is what the tree builder sets when it needs to
//! steer tokenization (RCDATA for `<title>`, PLAINTEXT, and so on).
//!
//! Exposed publicly so fragment parsing and the tests can name an initial
//! state; nothing else should need to.

pub use self::DoctypeId::*;
pub use self::RawKind::*;
pub use self::State::*;

/// Which flavor of raw data the raw-text state family is consuming.
///
/// RCDATA still expands character references; RAWTEXT and script data do
/// not. The two escaped kinds cover the comment-looking constructs inside
/// `<script>` that exist so that a script may contain `"</script>"` inside
/// `<!-- -->` without ending the element.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Debug)]
pub enum RawKind {
    Rcdata,
    Rawtext,
    ScriptData,
    ScriptDataEscaped,
    ScriptDataDoubleEscaped,
}

/// Which DOCTYPE identifier a DOCTYPE state is accumulating.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Debug)]
pub enum DoctypeId {
    Public,
    System,
}

/// One state of the tokenizer's machine. Names follow the standard's
/// state names, with the family folding described in the module docs.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Debug)]
pub enum State {
    // Ordinary content.
    Data,
    Plaintext,

    // Tags.
    TagOpen,
    EndTagOpen,
    TagName,
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValueDoubleQuoted,
    AttributeValueSingleQuoted,
    AttributeValueUnquoted,
    AfterAttributeValueQuoted,
    SelfClosingStartTag,

    // Raw data of all kinds, and the end-tag lookalikes inside it. The
    // less-than / end-tag-open / end-tag-name trio remembers which kind of
    // raw data to fall back to when the "tag" turns out to be text.
    RawText(RawKind),
    RawLessThanSign(RawKind),
    RawEndTagOpen(RawKind),
    RawEndTagName(RawKind),

    // The script-data escape dance. The `Dash` states are shared by the
    // escaped and double-escaped kinds.
    ScriptDataEscapeStart,
    ScriptDataEscapeStartDash,
    ScriptDataEscapedDash(RawKind),
    ScriptDataEscapedDashDash(RawKind),
    ScriptDataDoubleEscapeStart,
    ScriptDataDoubleEscapeEnd,

    // Markup declarations: comments...
    MarkupDeclarationOpen,
    BogusComment,
    CommentStart,
    CommentStartDash,
    Comment,
    CommentLessThanSign,
    CommentLessThanSignBang,
    CommentLessThanSignBangDash,
    CommentLessThanSignBangDashDash,
    CommentEndDash,
    CommentEnd,
    CommentEndBang,

    // ...DOCTYPEs...
    Doctype,
    BeforeDoctypeName,
    DoctypeName,
    AfterDoctypeName,
    AfterDoctypeKeyword(DoctypeId),
    BeforeDoctypeId(DoctypeId),
    DoctypeIdDoubleQuoted(DoctypeId),
    DoctypeIdSingleQuoted(DoctypeId),
    AfterDoctypeId(DoctypeId),
    BetweenDoctypeIds,
    BogusDoctype,

    // ...and CDATA sections, reachable only in foreign content.
    CdataSection,
    CdataSectionBracket,
    CdataSectionEnd,
}
