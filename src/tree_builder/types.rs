// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Internal vocabulary of the tree builder.

use crate::tokenizer::states::RawKind;
use crate::tokenizer::Tag;

use tendril::StrTendril;

/// The tree constructor's principal state. One variant per insertion mode
/// of the tree-construction chapter; each mode prescribes handling for
/// every kind of token.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub(crate) enum InsertionMode {
    Initial,
    BeforeHtml,
    BeforeHead,
    InHead,
    InHeadNoscript,
    AfterHead,
    InBody,
    Text,
    InTable,
    InTableText,
    InCaption,
    InColumnGroup,
    InTableBody,
    InRow,
    InCell,
    InSelect,
    InSelectInTable,
    InTemplate,
    AfterBody,
    InFrameset,
    AfterFrameset,
    AfterAfterBody,
    AfterAfterFrameset,
}

/// How much is known about a character run's whitespace content. Several
/// modes only want the leading whitespace of a run; the builder peels it
/// off lazily and tags the pieces so the check isn't repeated.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub(crate) enum CharSplit {
    /// Not examined yet.
    Unsplit,
    /// Entirely whitespace.
    Whitespace,
    /// Starts with a non-whitespace character.
    NonWhitespace,
}

/// The token alphabet of the insertion modes. DOCTYPEs and tokenizer-level
/// errors never reach a mode handler; they are dealt with up front.
#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) enum Token {
    Tag(Tag),
    Comment(StrTendril),
    Characters(CharSplit, StrTendril),
    Null,
    Eof,
}

/// What a mode handler decided about its token.
pub(crate) enum Outcome {
    /// The token has been fully handled.
    Done,
    /// Handled, and a start tag's self-closing flag was honored.
    DoneAckSelfClosing,
    /// Split the run's leading whitespace off and run the mode again.
    PeelWhitespace(StrTendril),
    /// Run the token through another mode.
    Reprocess(InsertionMode, Token),
    /// Put the tokenizer into PLAINTEXT.
    ToPlaintext,
    /// Put the tokenizer into a raw-text state.
    ToRawText(RawKind),
    /// A `<meta>` declared this encoding; the driver may restart.
    ChangeEncoding(StrTendril),
}

/// An entry of the list of active formatting elements. Markers fence off
/// formatting that must not leak out of tables, buttons, and the like.
pub(crate) enum FormattingEntry<Handle> {
    Element(Handle, Tag),
    Marker,
}

/// Where a new node is about to go.
pub(crate) enum InsertionPoint<Handle> {
    /// At the end of this node's children.
    Append(Handle),
    /// The foster-parenting spot: immediately before `table` if the table
    /// has a parent, otherwise at the end of `table_fallback`.
    Foster {
        table: Handle,
        table_fallback: Handle,
    },
}
