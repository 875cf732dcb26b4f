// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The HTML tokenizer: a state machine over code points that turns input
//! text into DOCTYPE, tag, comment, and character tokens.
//!
//! Tokens go to a [`TokenSink`] as they are produced. The sink's answer to
//! each token can redirect the machine (switch to PLAINTEXT or a raw-text
//! state, or ask the driver to restart with another encoding), which is how
//! tree construction steers tokenization without owning it.

pub use self::interface::{CharacterTokens, EOFToken, NullCharacterToken, ParseError};
pub use self::interface::{CommentToken, DoctypeToken, TagToken, Token};
pub use self::interface::{Doctype, EndTag, StartTag, Tag, TagKind};
pub use self::interface::{TokenSink, TokenSinkResult, TokenizerResult};

use self::char_ref::CharRefTokenizer;
use self::states::DoctypeId::{self, Public, System};
use self::states::RawKind::*;

use crate::attrs::AttrMap;
use crate::util::buffer_queue::{BufferQueue, FromSet, NotFromSet, SetResult};
use crate::util::smallcharset::{small_char_set, SmallCharSet};
use crate::util::str::{is_disallowed_code_point, lower_ascii_letter};

use log::{debug, trace};
use mac::unwrap_or_return;
use std::borrow::Cow::{self, Borrowed};
use std::cell::{Cell, RefCell, RefMut};
use std::mem;
use tendril::StrTendril;

mod char_ref;
mod interface;
pub mod states;

/// What one call to `step` did.
enum StepResult {
    /// Made progress; call `step` again.
    Continue,
    /// Out of input; wait for more (or for `end`).
    Suspend,
    /// The sink saw an encoding declaration; stop and tell the driver.
    ChangeEncoding(StrTendril),
}

fn option_push(opt_str: &mut Option<StrTendril>, c: char) {
    match *opt_str {
        Some(ref mut s) => s.push_char(c),
        None => *opt_str = Some(StrTendril::from_char(c)),
    }
}

/// Tokenizer options, with an impl for `Default`.
#[derive(Clone)]
pub struct TokenizerOpts {
    /// Drop a leading U+FEFF byte order mark. Default: true.
    pub discard_bom: bool,

    /// Start in a state other than `Data`. Fragment parsing sets this when
    /// the context element is a raw-text or RCDATA element.
    pub initial_state: Option<states::State>,

    /// Pretend this start tag was already seen, so that a matching end tag
    /// counts as "appropriate". Also for fragment parsing.
    pub last_start_tag_name: Option<String>,
}

impl Default for TokenizerOpts {
    fn default() -> TokenizerOpts {
        TokenizerOpts {
            discard_bom: true,
            initial_state: None,
            last_start_tag_name: None,
        }
    }
}

/// The HTML tokenizer.
pub struct Tokenizer<Sink> {
    /// Where the tokens go.
    pub sink: Sink,

    /// Which state the machine is in.
    state: Cell<states::State>,

    /// Set once `end` is called, so lookahead stops waiting for input that
    /// will never come.
    at_eof: Cell<bool>,

    /// The character-reference sub-machine, while one is running.
    char_ref_tokenizer: RefCell<Option<Box<CharRefTokenizer>>>,

    /// The most recently consumed character, for reconsumption.
    current_char: Cell<char>,

    /// Whether the next `get_char` should return `current_char` again.
    reconsume: Cell<bool>,

    /// A CR was just folded to LF; swallow an immediately following LF.
    ignore_lf: Cell<bool>,

    /// Still waiting to see (and drop) a byte order mark?
    discard_bom: Cell<bool>,

    /// Pieces of the tag token being assembled.
    current_tag_kind: Cell<TagKind>,
    current_tag_name: RefCell<StrTendril>,
    current_tag_self_closing: Cell<bool>,
    current_tag_attrs: RefCell<AttrMap>,

    /// The attribute being assembled, not yet committed to the tag.
    current_attr_name: RefCell<StrTendril>,
    current_attr_value: RefCell<StrTendril>,

    /// The comment being assembled.
    current_comment: RefCell<StrTendril>,

    /// The DOCTYPE being assembled.
    current_doctype: RefCell<Doctype>,

    /// Name of the last start tag emitted; an end tag is "appropriate"
    /// only when it matches this.
    last_start_tag_name: RefCell<Option<StrTendril>>,

    /// The temporary buffer the standard's states accumulate into.
    temp_buf: RefCell<StrTendril>,

    /// 1-based line number of the character being processed.
    current_line: Cell<u64>,
}

impl<Sink: TokenSink> Tokenizer<Sink> {
    /// Create a new tokenizer which feeds tokens to a particular `TokenSink`.
    pub fn new(sink: Sink, mut opts: TokenizerOpts) -> Tokenizer<Sink> {
        let start_tag_name = opts
            .last_start_tag_name
            .take()
            .map(|s| StrTendril::from_slice(&s));
        let state = opts.initial_state.unwrap_or(states::Data);
        let discard_bom = opts.discard_bom;
        Tokenizer {
            sink,
            state: Cell::new(state),
            char_ref_tokenizer: RefCell::new(None),
            at_eof: Cell::new(false),
            current_char: Cell::new('\0'),
            reconsume: Cell::new(false),
            ignore_lf: Cell::new(false),
            discard_bom: Cell::new(discard_bom),
            current_tag_kind: Cell::new(StartTag),
            current_tag_name: RefCell::new(StrTendril::new()),
            current_tag_self_closing: Cell::new(false),
            current_tag_attrs: RefCell::new(AttrMap::new()),
            current_attr_name: RefCell::new(StrTendril::new()),
            current_attr_value: RefCell::new(StrTendril::new()),
            current_comment: RefCell::new(StrTendril::new()),
            current_doctype: RefCell::new(Doctype::default()),
            last_start_tag_name: RefCell::new(start_tag_name),
            temp_buf: RefCell::new(StrTendril::new()),
            current_line: Cell::new(1),
        }
    }

    /// Feed input to the tokenizer, consuming as much of it as possible.
    pub fn feed(&self, input: &BufferQueue) -> TokenizerResult {
        if input.is_empty() {
            return TokenizerResult::Done;
        }

        if self.discard_bom.get() {
            match input.peek() {
                Some('\u{feff}') => {
                    input.next();
                },
                Some(_) => (),
                None => return TokenizerResult::Done,
            }
            self.discard_bom.set(false);
        };

        self.run(input)
    }

    fn process_token(&self, token: Token) -> TokenSinkResult {
        self.sink.process_token(token, self.current_line.get())
    }

    fn process_token_and_continue(&self, token: Token) {
        assert!(matches!(
            self.process_token(token),
            TokenSinkResult::Continue
        ));
    }

    /// Input-stream preprocessing for one character: CR and CRLF fold to
    /// LF, the line count advances, and disallowed code points are flagged
    /// (but still delivered).
    fn preprocess(&self, mut c: char, input: &BufferQueue) -> Option<char> {
        if self.ignore_lf.get() {
            self.ignore_lf.set(false);
            if c == '\n' {
                c = input.next()?;
            }
        }

        if c == '\r' {
            self.ignore_lf.set(true);
            c = '\n';
        }

        if c == '\n' {
            self.current_line.set(self.current_line.get() + 1);
        }

        if is_disallowed_code_point(c) {
            self.emit_error(Cow::Owned(format!(
                "Disallowed code point U+{:04X}",
                c as u32
            )));
        }

        trace!("consumed {c:?}");
        self.current_char.set(c);
        Some(c)
    }

    /// One preprocessed character, or the reconsumed one.
    fn get_char(&self, input: &BufferQueue) -> Option<char> {
        if self.reconsume.get() {
            self.reconsume.set(false);
            Some(self.current_char.get())
        } else {
            input.next().and_then(|c| self.preprocess(c, input))
        }
    }

    /// Either one character from `set`, or a run of characters containing
    /// none of them. Runs skip per-character preprocessing, which is safe
    /// because every caller's set includes CR and LF; disallowed code
    /// points inside a run are still flagged here.
    fn pop_except_from(&self, input: &BufferQueue, set: SmallCharSet) -> Option<SetResult> {
        if self.reconsume.get() || self.ignore_lf.get() {
            return self.get_char(input).map(FromSet);
        }

        let popped = input.pop_except_from(set);
        trace!("consumed {popped:?}");
        if let Some(NotFromSet(ref run)) = popped {
            for c in run.chars() {
                if is_disallowed_code_point(c) {
                    self.emit_error(Cow::Owned(format!(
                        "Disallowed code point U+{:04X}",
                        c as u32
                    )));
                }
            }
        }
        match popped {
            Some(FromSet(c)) => self.preprocess(c, input).map(FromSet),
            other => other,
        }
    }

    /// Try to match a literal, consuming it only on a full match. `None`
    /// means the input ended before we could tell; the partial match is
    /// parked in `temp_buf` until more input arrives.
    fn eat(&self, input: &BufferQueue, pat: &str, eq: fn(&u8, &u8) -> bool) -> Option<bool> {
        if self.ignore_lf.get() {
            self.ignore_lf.set(false);
            if self.peek(input) == Some('\n') {
                self.discard_char(input);
            }
        }

        input.push_front(mem::take(&mut self.temp_buf.borrow_mut()));
        match input.eat(pat, eq) {
            None if self.at_eof.get() => Some(false),
            None => {
                while let Some(c) = input.next() {
                    self.temp_buf.borrow_mut().push_char(c);
                }
                None
            },
            Some(matched) => Some(matched),
        }
    }

    /// Step until the input runs dry or the sink interrupts us.
    fn run(&self, input: &BufferQueue) -> TokenizerResult {
        loop {
            match self.step(input) {
                StepResult::Continue => (),
                StepResult::Suspend => break,
                StepResult::ChangeEncoding(e) => {
                    return TokenizerResult::MaybeChangeEncoding(e)
                },
            }
        }
        TokenizerResult::Done
    }

    #[inline]
    fn bad_char_error(&self) {
        let msg = format!(
            "Unexpected character {:?} in {:?}",
            self.current_char.get(),
            self.state.get()
        );
        self.emit_error(Cow::Owned(msg));
    }

    #[inline]
    fn bad_eof_error(&self) {
        let msg = format!("Unexpected end of input in {:?}", self.state.get());
        self.emit_error(Cow::Owned(msg));
    }

    fn emit_char(&self, c: char) {
        self.process_token_and_continue(match c {
            '\0' => NullCharacterToken,
            _ => CharacterTokens(StrTendril::from_char(c)),
        });
    }

    // NUL never goes through here; it always has its own transition.
    fn emit_chars(&self, b: StrTendril) {
        self.process_token_and_continue(CharacterTokens(b));
    }

    fn emit_current_tag(&self) -> StepResult {
        self.finish_attribute();

        let name = self.current_tag_name.borrow().clone();
        self.current_tag_name.borrow_mut().clear();

        match self.current_tag_kind.get() {
            StartTag => {
                *self.last_start_tag_name.borrow_mut() = Some(name.clone());
            },
            EndTag => {
                if !self.current_tag_attrs.borrow().is_empty() {
                    self.emit_error(Borrowed("Attributes on an end tag"));
                }
                if self.current_tag_self_closing.get() {
                    self.emit_error(Borrowed("Self-closing end tag"));
                }
            },
        }

        let token = TagToken(Tag {
            kind: self.current_tag_kind.get(),
            name,
            self_closing: self.current_tag_self_closing.get(),
            attrs: mem::take(&mut self.current_tag_attrs.borrow_mut()),
        });

        // The sink may redirect us after a tag; this is how RCDATA,
        // RAWTEXT, and PLAINTEXT elements take effect.
        match self.process_token(token) {
            TokenSinkResult::Continue => StepResult::Continue,
            TokenSinkResult::Plaintext => {
                self.state.set(states::Plaintext);
                StepResult::Continue
            },
            TokenSinkResult::RawData(kind) => {
                self.state.set(states::RawText(kind));
                StepResult::Continue
            },
            TokenSinkResult::MaybeChangeEncoding(e) => StepResult::ChangeEncoding(e),
        }
    }

    fn emit_temp_buf(&self) {
        let buf = mem::take(&mut *self.temp_buf.borrow_mut());
        self.emit_chars(buf);
    }

    fn clear_temp_buf(&self) {
        self.temp_buf.borrow_mut().clear();
    }

    fn emit_current_comment(&self) {
        let comment = mem::take(&mut *self.current_comment.borrow_mut());
        self.process_token_and_continue(CommentToken(comment));
    }

    fn discard_tag(&self) {
        self.current_tag_name.borrow_mut().clear();
        self.current_tag_self_closing.set(false);
        *self.current_tag_attrs.borrow_mut() = AttrMap::new();
    }

    fn create_tag(&self, kind: TagKind, c: char) {
        self.discard_tag();
        self.current_tag_name.borrow_mut().push_char(c);
        self.current_tag_kind.set(kind);
    }

    fn have_appropriate_end_tag(&self) -> bool {
        match self.last_start_tag_name.borrow().as_ref() {
            Some(last) => {
                (self.current_tag_kind.get() == EndTag)
                    && (**self.current_tag_name.borrow() == **last)
            },
            None => false,
        }
    }

    fn create_attribute(&self, c: char) {
        self.finish_attribute();

        self.current_attr_name.borrow_mut().push_char(c);
    }

    /// Commit the pending attribute to the tag. The first occurrence of a
    /// name wins; repeats are dropped with an error.
    fn finish_attribute(&self) {
        if self.current_attr_name.borrow().is_empty() {
            return;
        }

        let dup = {
            let name = self.current_attr_name.borrow();
            self.current_tag_attrs.borrow().contains(&name)
        };

        if dup {
            self.emit_error(Borrowed("Duplicate attribute"));
            self.current_attr_name.borrow_mut().clear();
            self.current_attr_value.borrow_mut().clear();
        } else {
            let name = mem::take(&mut *self.current_attr_name.borrow_mut());
            let value = mem::take(&mut *self.current_attr_value.borrow_mut());
            self.current_tag_attrs.borrow_mut().insert(&*name, &*value);
        }
    }

    fn emit_current_doctype(&self) {
        let doctype = self.current_doctype.take();
        self.process_token_and_continue(DoctypeToken(doctype));
    }

    fn doctype_id(&self, id: DoctypeId) -> RefMut<'_, Option<StrTendril>> {
        let current_doctype = self.current_doctype.borrow_mut();
        match id {
            DoctypeId::Public => RefMut::map(current_doctype, |d| &mut d.public_id),
            DoctypeId::System => RefMut::map(current_doctype, |d| &mut d.system_id),
        }
    }

    fn clear_doctype_id(&self, id: DoctypeId) {
        let mut value = self.doctype_id(id);
        match *value {
            Some(ref mut s) => s.clear(),
            None => *value = Some(StrTendril::new()),
        }
    }

    fn consume_char_ref(&self) {
        let in_attr = matches!(
            self.state.get(),
            states::AttributeValueDoubleQuoted
                | states::AttributeValueSingleQuoted
                | states::AttributeValueUnquoted
        );
        *self.char_ref_tokenizer.borrow_mut() = Some(Box::new(CharRefTokenizer::new(in_attr)));
    }

    fn emit_eof(&self) {
        self.process_token_and_continue(EOFToken);
    }

    /// The next raw character, without preprocessing or consuming it.
    fn peek(&self, input: &BufferQueue) -> Option<char> {
        if self.reconsume.get() {
            Some(self.current_char.get())
        } else {
            input.peek()
        }
    }

    /// Drop exactly what `peek` would have returned. Raw, like `peek`:
    /// no newline folding happens here.
    fn discard_char(&self, input: &BufferQueue) {
        if self.reconsume.get() {
            self.reconsume.set(false);
        } else {
            input.next();
        }
    }

    fn emit_error(&self, error: Cow<'static, str>) {
        self.process_token_and_continue(ParseError(error));
    }
}

// One state-machine action. Keeping these one-liners behind a macro keeps
// the transition table below readable.
macro_rules! action (
    ( $me:ident : create_tag $kind:ident $c:expr  ) => ( $me.create_tag($kind, $c)                            );
    ( $me:ident : push_tag $c:expr                ) => ( $me.current_tag_name.borrow_mut().push_char($c)      );
    ( $me:ident : discard_tag                     ) => ( $me.discard_tag()                                    );
    ( $me:ident : discard_char $input:expr        ) => ( $me.discard_char($input)                             );
    ( $me:ident : push_temp $c:expr               ) => ( $me.temp_buf.borrow_mut().push_char($c)              );
    ( $me:ident : clear_temp                      ) => ( $me.clear_temp_buf()                                 );
    ( $me:ident : create_attr $c:expr             ) => ( $me.create_attribute($c)                             );
    ( $me:ident : push_name $c:expr               ) => ( $me.current_attr_name.borrow_mut().push_char($c)     );
    ( $me:ident : push_value $c:expr              ) => ( $me.current_attr_value.borrow_mut().push_char($c)    );
    ( $me:ident : append_value $c:expr            ) => ( $me.current_attr_value.borrow_mut().push_tendril($c) );
    ( $me:ident : push_comment $c:expr            ) => ( $me.current_comment.borrow_mut().push_char($c)       );
    ( $me:ident : append_comment $c:expr          ) => ( $me.current_comment.borrow_mut().push_slice($c)      );
    ( $me:ident : emit_comment                    ) => ( $me.emit_current_comment()                           );
    ( $me:ident : clear_comment                   ) => ( $me.current_comment.borrow_mut().clear()             );
    ( $me:ident : create_doctype                  ) => ( *$me.current_doctype.borrow_mut() = Doctype::default() );
    ( $me:ident : push_doctype_name $c:expr       ) => ( option_push(&mut $me.current_doctype.borrow_mut().name, $c) );
    ( $me:ident : push_doctype_id $k:ident $c:expr) => ( option_push(&mut $me.doctype_id($k), $c)             );
    ( $me:ident : clear_doctype_id $k:ident       ) => ( $me.clear_doctype_id($k)                             );
    ( $me:ident : force_quirks                    ) => ( $me.current_doctype.borrow_mut().force_quirks = true );
    ( $me:ident : emit_doctype                    ) => ( $me.emit_current_doctype()                           );
);

// Sequence actions, ending with an optional transition. `to` and
// `reconsume` return out of `step`; a bare action sequence falls through.
// Lookahead is bounded, so sequenced actions are matched by token count.
macro_rules! run (
    ( $me:ident : $a:tt                   ; $($rest:tt)* ) => ({ action!($me: $a);          run!($me: $($rest)*); });
    ( $me:ident : $a:tt $b:tt             ; $($rest:tt)* ) => ({ action!($me: $a $b);       run!($me: $($rest)*); });
    ( $me:ident : $a:tt $b:tt $c:tt       ; $($rest:tt)* ) => ({ action!($me: $a $b $c);    run!($me: $($rest)*); });
    ( $me:ident : $a:tt $b:tt $c:tt $d:tt ; $($rest:tt)* ) => ({ action!($me: $a $b $c $d); run!($me: $($rest)*); });

    ( $me:ident : to $s:ident          ) => ({ $me.state.set(states::$s); return StepResult::Continue;      });
    ( $me:ident : to $s:ident $k1:expr ) => ({ $me.state.set(states::$s($k1)); return StepResult::Continue; });

    ( $me:ident : reconsume $s:ident          ) => ({ $me.reconsume.set(true); run!($me: to $s);     });
    ( $me:ident : reconsume $s:ident $k1:expr ) => ({ $me.reconsume.set(true); run!($me: to $s $k1); });

    ( $me:ident : consume_char_ref ) => ({ $me.consume_char_ref(); return StepResult::Continue; });

    // Emitting a tag returns, because the sink may redirect the machine.
    ( $me:ident : emit_tag $s:ident ) => ({
        $me.state.set(states::$s);
        return $me.emit_current_tag();
    });

    ( $me:ident : eof ) => ({ $me.emit_eof(); return StepResult::Suspend; });

    ( $me:ident : $($cmd:tt)+ ) => ( action!($me: $($cmd)+) );

    ( $me:ident : ) => (());
);

// These early-return `Suspend` when the input is exhausted.
macro_rules! get_char ( ($me:expr, $input:expr) => (
    unwrap_or_return!($me.get_char($input), StepResult::Suspend)
));

macro_rules! peek ( ($me:expr, $input:expr) => (
    unwrap_or_return!($me.peek($input), StepResult::Suspend)
));

macro_rules! pop_except_from ( ($me:expr, $input:expr, $set:expr) => (
    unwrap_or_return!($me.pop_except_from($input, $set), StepResult::Suspend)
));

macro_rules! eat ( ($me:expr, $input:expr, $pat:expr) => (
    unwrap_or_return!($me.eat($input, $pat, u8::eq_ignore_ascii_case), StepResult::Suspend)
));

macro_rules! eat_exact ( ($me:expr, $input:expr, $pat:expr) => (
    unwrap_or_return!($me.eat($input, $pat, u8::eq), StepResult::Suspend)
));

impl<Sink: TokenSink> Tokenizer<Sink> {
    /// Run one state's worth of the machine.
    #[allow(clippy::never_loop)]
    fn step(&self, input: &BufferQueue) -> StepResult {
        if self.char_ref_tokenizer.borrow().is_some() {
            return self.step_char_ref(input);
        }

        trace!("stepping in {:?}", self.state.get());
        match self.state.get() {
            states::Data => loop {
                match pop_except_from!(self, input, small_char_set!('\r' '\0' '&' '<' '\n')) {
                    FromSet('\0') => {
                        self.bad_char_error();
                        self.emit_char('\0');
                    },
                    FromSet('&') => run!(self: consume_char_ref),
                    FromSet('<') => run!(self: to TagOpen),
                    FromSet(c) => self.emit_char(c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            states::RawText(Rcdata) => loop {
                match pop_except_from!(self, input, small_char_set!('\r' '\0' '&' '<' '\n')) {
                    FromSet('\0') => {
                        self.bad_char_error();
                        self.emit_char('\u{fffd}');
                    },
                    FromSet('&') => run!(self: consume_char_ref),
                    FromSet('<') => run!(self: to RawLessThanSign Rcdata),
                    FromSet(c) => self.emit_char(c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            states::RawText(Rawtext) => loop {
                match pop_except_from!(self, input, small_char_set!('\r' '\0' '<' '\n')) {
                    FromSet('\0') => {
                        self.bad_char_error();
                        self.emit_char('\u{fffd}');
                    },
                    FromSet('<') => run!(self: to RawLessThanSign Rawtext),
                    FromSet(c) => self.emit_char(c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            states::RawText(ScriptData) => loop {
                match pop_except_from!(self, input, small_char_set!('\r' '\0' '<' '\n')) {
                    FromSet('\0') => {
                        self.bad_char_error();
                        self.emit_char('\u{fffd}');
                    },
                    FromSet('<') => run!(self: to RawLessThanSign ScriptData),
                    FromSet(c) => self.emit_char(c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            states::RawText(ScriptDataEscaped) => loop {
                match pop_except_from!(self, input, small_char_set!('\r' '\0' '-' '<' '\n')) {
                    FromSet('\0') => {
                        self.bad_char_error();
                        self.emit_char('\u{fffd}');
                    },
                    FromSet('-') => {
                        self.emit_char('-');
                        run!(self: to ScriptDataEscapedDash ScriptDataEscaped);
                    },
                    FromSet('<') => run!(self: to RawLessThanSign ScriptDataEscaped),
                    FromSet(c) => self.emit_char(c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            states::RawText(ScriptDataDoubleEscaped) => loop {
                match pop_except_from!(self, input, small_char_set!('\r' '\0' '-' '<' '\n')) {
                    FromSet('\0') => {
                        self.bad_char_error();
                        self.emit_char('\u{fffd}');
                    },
                    FromSet('-') => {
                        self.emit_char('-');
                        run!(self: to ScriptDataEscapedDash ScriptDataDoubleEscaped);
                    },
                    FromSet('<') => {
                        self.emit_char('<');
                        run!(self: to RawLessThanSign ScriptDataDoubleEscaped)
                    },
                    FromSet(c) => self.emit_char(c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            states::Plaintext => loop {
                match pop_except_from!(self, input, small_char_set!('\r' '\0' '\n')) {
                    FromSet('\0') => {
                        self.bad_char_error();
                        self.emit_char('\u{fffd}');
                    },
                    FromSet(c) => self.emit_char(c),
                    NotFromSet(b) => self.emit_chars(b),
                }
            },

            states::TagOpen => loop {
                match get_char!(self, input) {
                    '!' => run!(self: to MarkupDeclarationOpen),
                    '/' => run!(self: to EndTagOpen),
                    '?' => {
                        self.bad_char_error();
                        run!(self: clear_comment; reconsume BogusComment)
                    },
                    c => match lower_ascii_letter(c) {
                        Some(cl) => run!(self: create_tag StartTag cl; to TagName),
                        None => {
                            self.bad_char_error();
                            self.emit_char('<');
                            run!(self: reconsume Data)
                        },
                    },
                }
            },

            states::EndTagOpen => loop {
                match get_char!(self, input) {
                    '>' => {
                        self.bad_char_error();
                        run!(self: to Data)
                    },
                    c => match lower_ascii_letter(c) {
                        Some(cl) => run!(self: create_tag EndTag cl; to TagName),
                        None => {
                            self.bad_char_error();
                            run!(self: clear_comment; reconsume BogusComment)
                        },
                    },
                }
            },

            states::TagName => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => run!(self: to BeforeAttributeName),
                    '/' => run!(self: to SelfClosingStartTag),
                    '>' => run!(self: emit_tag Data),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: push_tag '\u{fffd}')
                    },
                    c => run!(self: push_tag (c.to_ascii_lowercase())),
                }
            },

            states::RawLessThanSign(ScriptDataEscaped) => loop {
                match get_char!(self, input) {
                    '/' => run!(self: clear_temp; to RawEndTagOpen ScriptDataEscaped),
                    c => match lower_ascii_letter(c) {
                        Some(cl) => {
                            run!(self: clear_temp; push_temp cl);
                            self.emit_char('<');
                            self.emit_char(c);
                            run!(self: to ScriptDataDoubleEscapeStart);
                        },
                        None => {
                            self.emit_char('<');
                            run!(self: reconsume RawText ScriptDataEscaped);
                        },
                    },
                }
            },

            states::RawLessThanSign(ScriptDataDoubleEscaped) => loop {
                match get_char!(self, input) {
                    '/' => {
                        run!(self: clear_temp);
                        self.emit_char('/');
                        run!(self: to ScriptDataDoubleEscapeEnd);
                    },
                    _ => run!(self: reconsume RawText ScriptDataDoubleEscaped),
                }
            },

            // RCDATA, RAWTEXT, and plain script data.
            states::RawLessThanSign(kind) => loop {
                match get_char!(self, input) {
                    '/' => run!(self: clear_temp; to RawEndTagOpen kind),
                    '!' if kind == ScriptData => {
                        self.emit_char('<');
                        self.emit_char('!');
                        run!(self: to ScriptDataEscapeStart);
                    },
                    _ => {
                        self.emit_char('<');
                        run!(self: reconsume RawText kind);
                    },
                }
            },

            states::RawEndTagOpen(kind) => loop {
                let c = get_char!(self, input);
                match lower_ascii_letter(c) {
                    Some(cl) => run!(self: create_tag EndTag cl; push_temp c; to RawEndTagName kind),
                    None => {
                        self.emit_char('<');
                        self.emit_char('/');
                        run!(self: reconsume RawText kind);
                    },
                }
            },

            states::RawEndTagName(kind) => loop {
                let c = get_char!(self, input);
                // Only an "appropriate" end tag closes raw text; anything
                // else is literal.
                if self.have_appropriate_end_tag() {
                    match c {
                        '\t' | '\n' | '\x0C' | ' ' => run!(self: clear_temp; to BeforeAttributeName),
                        '/' => run!(self: clear_temp; to SelfClosingStartTag),
                        '>' => run!(self: clear_temp; emit_tag Data),
                        _ => (),
                    }
                }

                match lower_ascii_letter(c) {
                    Some(cl) => run!(self: push_tag cl; push_temp c),
                    None => {
                        run!(self: discard_tag);
                        self.emit_char('<');
                        self.emit_char('/');
                        self.emit_temp_buf();
                        run!(self: reconsume RawText kind);
                    },
                }
            },

            states::ScriptDataEscapeStart => loop {
                match get_char!(self, input) {
                    '-' => {
                        self.emit_char('-');
                        run!(self: to ScriptDataEscapeStartDash);
                    },
                    _ => run!(self: reconsume RawText ScriptData),
                }
            },

            states::ScriptDataEscapeStartDash => loop {
                match get_char!(self, input) {
                    '-' => {
                        self.emit_char('-');
                        run!(self: to ScriptDataEscapedDashDash ScriptDataEscaped);
                    },
                    _ => run!(self: reconsume RawText ScriptData),
                }
            },

            states::ScriptDataEscapedDash(kind) => loop {
                match get_char!(self, input) {
                    '-' => {
                        self.emit_char('-');
                        run!(self: to ScriptDataEscapedDashDash kind);
                    },
                    '<' => {
                        if kind == ScriptDataDoubleEscaped {
                            self.emit_char('<');
                        }
                        run!(self: to RawLessThanSign kind);
                    },
                    '\0' => {
                        self.bad_char_error();
                        self.emit_char('\u{fffd}');
                        run!(self: to RawText kind)
                    },
                    c => {
                        self.emit_char(c);
                        run!(self: to RawText kind);
                    },
                }
            },

            states::ScriptDataEscapedDashDash(kind) => loop {
                match get_char!(self, input) {
                    '-' => self.emit_char('-'),
                    '<' => {
                        if kind == ScriptDataDoubleEscaped {
                            self.emit_char('<');
                        }
                        run!(self: to RawLessThanSign kind);
                    },
                    '>' => {
                        self.emit_char('>');
                        run!(self: to RawText ScriptData);
                    },
                    '\0' => {
                        self.bad_char_error();
                        self.emit_char('\u{fffd}');
                        run!(self: to RawText kind)
                    },
                    c => {
                        self.emit_char(c);
                        run!(self: to RawText kind);
                    },
                }
            },

            states::ScriptDataDoubleEscapeStart => loop {
                let c = get_char!(self, input);
                match c {
                    '\t' | '\n' | '\x0C' | ' ' | '/' | '>' => {
                        let kind = if &**self.temp_buf.borrow() == "script" {
                            ScriptDataDoubleEscaped
                        } else {
                            ScriptDataEscaped
                        };
                        self.emit_char(c);
                        run!(self: to RawText kind);
                    },
                    _ => match lower_ascii_letter(c) {
                        Some(cl) => {
                            run!(self: push_temp cl);
                            self.emit_char(c);
                        },
                        None => run!(self: reconsume RawText ScriptDataEscaped),
                    },
                }
            },

            states::ScriptDataDoubleEscapeEnd => loop {
                let c = get_char!(self, input);
                match c {
                    '\t' | '\n' | '\x0C' | ' ' | '/' | '>' => {
                        let kind = if &**self.temp_buf.borrow() == "script" {
                            ScriptDataEscaped
                        } else {
                            ScriptDataDoubleEscaped
                        };
                        self.emit_char(c);
                        run!(self: to RawText kind);
                    },
                    _ => match lower_ascii_letter(c) {
                        Some(cl) => {
                            run!(self: push_temp cl);
                            self.emit_char(c);
                        },
                        None => run!(self: reconsume RawText ScriptDataDoubleEscaped),
                    },
                }
            },

            states::BeforeAttributeName => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '/' => run!(self: to SelfClosingStartTag),
                    '>' => run!(self: emit_tag Data),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: create_attr '\u{fffd}'; to AttributeName)
                    },
                    c => match lower_ascii_letter(c) {
                        Some(cl) => run!(self: create_attr cl; to AttributeName),
                        None => {
                            if matches!(c, '"' | '\'' | '<' | '=') {
                                self.bad_char_error();
                            }
                            run!(self: create_attr c; to AttributeName);
                        },
                    },
                }
            },

            states::AttributeName => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => run!(self: to AfterAttributeName),
                    '/' => run!(self: to SelfClosingStartTag),
                    '=' => run!(self: to BeforeAttributeValue),
                    '>' => run!(self: emit_tag Data),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: push_name '\u{fffd}')
                    },
                    c => match lower_ascii_letter(c) {
                        Some(cl) => run!(self: push_name cl),
                        None => {
                            if matches!(c, '"' | '\'' | '<') {
                                self.bad_char_error();
                            }
                            run!(self: push_name c);
                        },
                    },
                }
            },

            states::AfterAttributeName => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '/' => run!(self: to SelfClosingStartTag),
                    '=' => run!(self: to BeforeAttributeValue),
                    '>' => run!(self: emit_tag Data),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: create_attr '\u{fffd}'; to AttributeName)
                    },
                    c => match lower_ascii_letter(c) {
                        Some(cl) => run!(self: create_attr cl; to AttributeName),
                        None => {
                            if matches!(c, '"' | '\'' | '<') {
                                self.bad_char_error();
                            }
                            run!(self: create_attr c; to AttributeName);
                        },
                    },
                }
            },

            // Peeks instead of consuming, so an unquoted value starts in
            // the same buffer its characters will be read from.
            states::BeforeAttributeValue => loop {
                match peek!(self, input) {
                    '\t' | '\n' | '\r' | '\x0C' | ' ' => run!(self: discard_char input),
                    '"' => run!(self: discard_char input; to AttributeValueDoubleQuoted),
                    '\'' => run!(self: discard_char input; to AttributeValueSingleQuoted),
                    '>' => {
                        run!(self: discard_char input);
                        self.bad_char_error();
                        run!(self: emit_tag Data)
                    },
                    _ => run!(self: to AttributeValueUnquoted),
                }
            },

            states::AttributeValueDoubleQuoted => loop {
                match pop_except_from!(self, input, small_char_set!('\r' '"' '&' '\0' '\n')) {
                    FromSet('"') => run!(self: to AfterAttributeValueQuoted),
                    FromSet('&') => run!(self: consume_char_ref),
                    FromSet('\0') => {
                        self.bad_char_error();
                        run!(self: push_value '\u{fffd}')
                    },
                    FromSet(c) => run!(self: push_value c),
                    NotFromSet(ref b) => run!(self: append_value b),
                }
            },

            states::AttributeValueSingleQuoted => loop {
                match pop_except_from!(self, input, small_char_set!('\r' '\'' '&' '\0' '\n')) {
                    FromSet('\'') => run!(self: to AfterAttributeValueQuoted),
                    FromSet('&') => run!(self: consume_char_ref),
                    FromSet('\0') => {
                        self.bad_char_error();
                        run!(self: push_value '\u{fffd}')
                    },
                    FromSet(c) => run!(self: push_value c),
                    NotFromSet(ref b) => run!(self: append_value b),
                }
            },

            states::AttributeValueUnquoted => loop {
                match pop_except_from!(
                    self,
                    input,
                    small_char_set!('\r' '\t' '\n' '\x0C' ' ' '&' '>' '\0')
                ) {
                    FromSet('\t') | FromSet('\n') | FromSet('\x0C') | FromSet(' ') => {
                        run!(self: to BeforeAttributeName)
                    },
                    FromSet('&') => run!(self: consume_char_ref),
                    FromSet('>') => run!(self: emit_tag Data),
                    FromSet('\0') => {
                        self.bad_char_error();
                        run!(self: push_value '\u{fffd}')
                    },
                    FromSet(c) => {
                        if matches!(c, '"' | '\'' | '<' | '=' | '`') {
                            self.bad_char_error();
                        }
                        run!(self: push_value c);
                    },
                    NotFromSet(ref b) => run!(self: append_value b),
                }
            },

            states::AfterAttributeValueQuoted => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => run!(self: to BeforeAttributeName),
                    '/' => run!(self: to SelfClosingStartTag),
                    '>' => run!(self: emit_tag Data),
                    _ => {
                        self.bad_char_error();
                        run!(self: reconsume BeforeAttributeName)
                    },
                }
            },

            states::SelfClosingStartTag => loop {
                match get_char!(self, input) {
                    '>' => {
                        self.current_tag_self_closing.set(true);
                        run!(self: emit_tag Data);
                    },
                    _ => {
                        self.bad_char_error();
                        run!(self: reconsume BeforeAttributeName)
                    },
                }
            },

            states::CommentStart => loop {
                match get_char!(self, input) {
                    '-' => run!(self: to CommentStartDash),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: push_comment '\u{fffd}'; to Comment)
                    },
                    '>' => {
                        self.bad_char_error();
                        run!(self: emit_comment; to Data)
                    },
                    c => run!(self: push_comment c; to Comment),
                }
            },

            states::CommentStartDash => loop {
                match get_char!(self, input) {
                    '-' => run!(self: to CommentEnd),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: append_comment "-\u{fffd}"; to Comment)
                    },
                    '>' => {
                        self.bad_char_error();
                        run!(self: emit_comment; to Data)
                    },
                    c => run!(self: push_comment '-'; push_comment c; to Comment),
                }
            },

            states::Comment => loop {
                match get_char!(self, input) {
                    c @ '<' => run!(self: push_comment c; to CommentLessThanSign),
                    '-' => run!(self: to CommentEndDash),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: push_comment '\u{fffd}')
                    },
                    c => run!(self: push_comment c),
                }
            },

            // The CommentLessThanSign states exist to flag "<!--" nested
            // inside a comment; the characters are kept either way.
            states::CommentLessThanSign => loop {
                match get_char!(self, input) {
                    c @ '!' => run!(self: push_comment c; to CommentLessThanSignBang),
                    c @ '<' => run!(self: push_comment c),
                    _ => run!(self: reconsume Comment),
                }
            },

            states::CommentLessThanSignBang => loop {
                match get_char!(self, input) {
                    '-' => run!(self: to CommentLessThanSignBangDash),
                    _ => run!(self: reconsume Comment),
                }
            },

            states::CommentLessThanSignBangDash => loop {
                match get_char!(self, input) {
                    '-' => run!(self: to CommentLessThanSignBangDashDash),
                    _ => run!(self: reconsume CommentEndDash),
                }
            },

            states::CommentLessThanSignBangDashDash => loop {
                match get_char!(self, input) {
                    '>' => run!(self: reconsume CommentEnd),
                    _ => {
                        self.bad_char_error();
                        run!(self: reconsume CommentEnd)
                    },
                }
            },

            states::CommentEndDash => loop {
                match get_char!(self, input) {
                    '-' => run!(self: to CommentEnd),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: append_comment "-\u{fffd}"; to Comment)
                    },
                    c => run!(self: push_comment '-'; push_comment c; to Comment),
                }
            },

            states::CommentEnd => loop {
                match get_char!(self, input) {
                    '>' => run!(self: emit_comment; to Data),
                    '!' => run!(self: to CommentEndBang),
                    '-' => run!(self: push_comment '-'),
                    _ => run!(self: append_comment "--"; reconsume Comment),
                }
            },

            states::CommentEndBang => loop {
                match get_char!(self, input) {
                    '-' => run!(self: append_comment "--!"; to CommentEndDash),
                    '>' => {
                        self.bad_char_error();
                        run!(self: emit_comment; to Data)
                    },
                    '\0' => {
                        self.bad_char_error();
                        run!(self: append_comment "--!\u{fffd}"; to Comment)
                    },
                    c => run!(self: append_comment "--!"; push_comment c; to Comment),
                }
            },

            states::Doctype => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => run!(self: to BeforeDoctypeName),
                    '>' => run!(self: reconsume BeforeDoctypeName),
                    _ => {
                        self.bad_char_error();
                        run!(self: reconsume BeforeDoctypeName)
                    },
                }
            },

            states::BeforeDoctypeName => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: create_doctype; push_doctype_name '\u{fffd}'; to DoctypeName)
                    },
                    '>' => {
                        self.bad_char_error();
                        run!(self: create_doctype; force_quirks; emit_doctype; to Data)
                    },
                    c => run!(self: create_doctype; push_doctype_name (c.to_ascii_lowercase());
                                  to DoctypeName),
                }
            },

            states::DoctypeName => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => run!(self: clear_temp; to AfterDoctypeName),
                    '>' => run!(self: emit_doctype; to Data),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: push_doctype_name '\u{fffd}')
                    },
                    c => run!(self: push_doctype_name (c.to_ascii_lowercase())),
                }
            },

            states::AfterDoctypeName => loop {
                if eat!(self, input, "public") {
                    run!(self: to AfterDoctypeKeyword Public);
                } else if eat!(self, input, "system") {
                    run!(self: to AfterDoctypeKeyword System);
                } else {
                    match get_char!(self, input) {
                        '\t' | '\n' | '\x0C' | ' ' => (),
                        '>' => run!(self: emit_doctype; to Data),
                        _ => {
                            self.bad_char_error();
                            run!(self: force_quirks; reconsume BogusDoctype)
                        },
                    }
                }
            },

            states::AfterDoctypeKeyword(id) => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => run!(self: to BeforeDoctypeId id),
                    '"' => {
                        self.bad_char_error();
                        run!(self: clear_doctype_id id; to DoctypeIdDoubleQuoted id)
                    },
                    '\'' => {
                        self.bad_char_error();
                        run!(self: clear_doctype_id id; to DoctypeIdSingleQuoted id)
                    },
                    '>' => {
                        self.bad_char_error();
                        run!(self: force_quirks; emit_doctype; to Data)
                    },
                    _ => {
                        self.bad_char_error();
                        run!(self: force_quirks; reconsume BogusDoctype)
                    },
                }
            },

            states::BeforeDoctypeId(id) => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '"' => run!(self: clear_doctype_id id; to DoctypeIdDoubleQuoted id),
                    '\'' => run!(self: clear_doctype_id id; to DoctypeIdSingleQuoted id),
                    '>' => {
                        self.bad_char_error();
                        run!(self: force_quirks; emit_doctype; to Data)
                    },
                    _ => {
                        self.bad_char_error();
                        run!(self: force_quirks; reconsume BogusDoctype)
                    },
                }
            },

            states::DoctypeIdDoubleQuoted(id) => loop {
                match get_char!(self, input) {
                    '"' => run!(self: to AfterDoctypeId id),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: push_doctype_id id '\u{fffd}')
                    },
                    '>' => {
                        self.bad_char_error();
                        run!(self: force_quirks; emit_doctype; to Data)
                    },
                    c => run!(self: push_doctype_id id c),
                }
            },

            states::DoctypeIdSingleQuoted(id) => loop {
                match get_char!(self, input) {
                    '\'' => run!(self: to AfterDoctypeId id),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: push_doctype_id id '\u{fffd}')
                    },
                    '>' => {
                        self.bad_char_error();
                        run!(self: force_quirks; emit_doctype; to Data)
                    },
                    c => run!(self: push_doctype_id id c),
                }
            },

            states::AfterDoctypeId(Public) => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => run!(self: to BetweenDoctypeIds),
                    '>' => run!(self: emit_doctype; to Data),
                    '"' => {
                        self.bad_char_error();
                        run!(self: clear_doctype_id System; to DoctypeIdDoubleQuoted System)
                    },
                    '\'' => {
                        self.bad_char_error();
                        run!(self: clear_doctype_id System; to DoctypeIdSingleQuoted System)
                    },
                    _ => {
                        self.bad_char_error();
                        run!(self: force_quirks; reconsume BogusDoctype)
                    },
                }
            },

            states::AfterDoctypeId(System) => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '>' => run!(self: emit_doctype; to Data),
                    _ => {
                        self.bad_char_error();
                        run!(self: reconsume BogusDoctype)
                    },
                }
            },

            states::BetweenDoctypeIds => loop {
                match get_char!(self, input) {
                    '\t' | '\n' | '\x0C' | ' ' => (),
                    '>' => run!(self: emit_doctype; to Data),
                    '"' => run!(self: clear_doctype_id System; to DoctypeIdDoubleQuoted System),
                    '\'' => run!(self: clear_doctype_id System; to DoctypeIdSingleQuoted System),
                    _ => {
                        self.bad_char_error();
                        run!(self: force_quirks; reconsume BogusDoctype)
                    },
                }
            },

            states::BogusDoctype => loop {
                match get_char!(self, input) {
                    '>' => run!(self: emit_doctype; to Data),
                    '\0' => self.bad_char_error(),
                    _ => (),
                }
            },

            states::BogusComment => loop {
                match get_char!(self, input) {
                    '>' => run!(self: emit_comment; to Data),
                    '\0' => {
                        self.bad_char_error();
                        run!(self: push_comment '\u{fffd}')
                    },
                    c => run!(self: push_comment c),
                }
            },

            states::MarkupDeclarationOpen => loop {
                if eat_exact!(self, input, "--") {
                    run!(self: clear_comment; to CommentStart);
                } else if eat!(self, input, "doctype") {
                    run!(self: to Doctype);
                } else {
                    // CDATA is real character data only in foreign
                    // content; the tree builder knows where we are.
                    if self
                        .sink
                        .adjusted_current_node_present_but_not_in_html_namespace()
                        && eat_exact!(self, input, "[CDATA[")
                    {
                        run!(self: clear_temp; to CdataSection);
                    }
                    self.bad_char_error();
                    run!(self: clear_comment; to BogusComment);
                }
            },

            states::CdataSection => loop {
                match get_char!(self, input) {
                    ']' => run!(self: to CdataSectionBracket),
                    '\0' => {
                        self.emit_temp_buf();
                        self.emit_char('\0');
                    },
                    c => run!(self: push_temp c),
                }
            },

            states::CdataSectionBracket => match get_char!(self, input) {
                ']' => run!(self: to CdataSectionEnd),
                _ => run!(self: push_temp ']'; reconsume CdataSection),
            },

            states::CdataSectionEnd => loop {
                match get_char!(self, input) {
                    ']' => run!(self: push_temp ']'),
                    '>' => {
                        self.emit_temp_buf();
                        run!(self: to Data);
                    },
                    _ => run!(self: push_temp ']'; push_temp ']'; reconsume CdataSection),
                }
            },
        }
    }

    fn step_char_ref(&self, input: &BufferQueue) -> StepResult {
        // Move the sub-machine out of its cell first; its `step` needs
        // `&self` and would otherwise hold two borrows of the cell.
        let mut sub = self.char_ref_tokenizer.take().unwrap();
        let status = sub.step(self, input);

        let result = match status {
            char_ref::Status::Done => {
                self.finish_char_ref(sub.get_result());
                return StepResult::Continue;
            },
            char_ref::Status::Stuck => StepResult::Suspend,
            char_ref::Status::Progress => StepResult::Continue,
        };

        *self.char_ref_tokenizer.borrow_mut() = Some(sub);
        result
    }

    fn finish_char_ref(&self, char_ref: char_ref::CharRef) {
        let char_ref::CharRef {
            mut chars,
            mut num_chars,
        } = char_ref;

        // An empty result means the ampersand stands for itself.
        if num_chars == 0 {
            chars[0] = '&';
            num_chars = 1;
        }

        for i in 0..num_chars {
            let c = chars[i as usize];
            match self.state.get() {
                states::Data | states::RawText(Rcdata) => self.emit_char(c),

                states::AttributeValueDoubleQuoted
                | states::AttributeValueSingleQuoted
                | states::AttributeValueUnquoted => run!(self: push_value c),

                s => panic!("character reference resolved in state {s:?}"),
            }
        }
    }

    /// Indicate that there is no more input.
    pub fn end(&self) {
        // Wind down a pending character reference first; it may push
        // unconsumed characters back for the final run below.
        let input = BufferQueue::default();
        if let Some(mut sub) = self.char_ref_tokenizer.take() {
            sub.end_of_file(self, &input);
            self.finish_char_ref(sub.get_result());
        }

        self.at_eof.set(true);
        assert!(matches!(self.run(&input), TokenizerResult::Done));
        assert!(input.is_empty());

        loop {
            match self.eof_step() {
                StepResult::Continue => (),
                StepResult::Suspend => break,
                StepResult::ChangeEncoding(_) => unreachable!(),
            }
        }

        self.sink.end();
    }

    /// Apply the standard's per-state EOF rules until the EOF token has
    /// been emitted.
    fn eof_step(&self) -> StepResult {
        debug!("EOF in {:?}", self.state.get());
        match self.state.get() {
            states::Data
            | states::RawText(Rcdata)
            | states::RawText(Rawtext)
            | states::RawText(ScriptData)
            | states::Plaintext => run!(self: eof),

            states::TagName
            | states::RawText(ScriptDataEscaped)
            | states::RawText(ScriptDataDoubleEscaped)
            | states::BeforeAttributeName
            | states::AttributeName
            | states::AfterAttributeName
            | states::AttributeValueDoubleQuoted
            | states::AttributeValueSingleQuoted
            | states::AttributeValueUnquoted
            | states::AfterAttributeValueQuoted
            | states::SelfClosingStartTag
            | states::ScriptDataEscapedDash(_)
            | states::ScriptDataEscapedDashDash(_) => {
                self.bad_eof_error();
                run!(self: to Data)
            },

            states::BeforeAttributeValue => run!(self: reconsume AttributeValueUnquoted),

            states::TagOpen => {
                self.bad_eof_error();
                self.emit_char('<');
                run!(self: to Data);
            },

            states::EndTagOpen => {
                self.bad_eof_error();
                self.emit_char('<');
                self.emit_char('/');
                run!(self: to Data);
            },

            states::RawLessThanSign(ScriptDataDoubleEscaped) => {
                run!(self: to RawText ScriptDataDoubleEscaped)
            },

            states::RawLessThanSign(kind) => {
                self.emit_char('<');
                run!(self: to RawText kind);
            },

            states::RawEndTagOpen(kind) => {
                self.emit_char('<');
                self.emit_char('/');
                run!(self: to RawText kind);
            },

            states::RawEndTagName(kind) => {
                self.emit_char('<');
                self.emit_char('/');
                self.emit_temp_buf();
                run!(self: to RawText kind)
            },

            states::ScriptDataEscapeStart => run!(self: to RawText ScriptDataEscaped),

            states::ScriptDataEscapeStartDash => run!(self: to RawText ScriptData),

            states::ScriptDataDoubleEscapeStart | states::ScriptDataDoubleEscapeEnd => {
                run!(self: to RawText ScriptDataDoubleEscaped)
            },

            states::CommentStart
            | states::CommentStartDash
            | states::Comment
            | states::CommentEndDash
            | states::CommentEnd
            | states::CommentEndBang => {
                self.bad_eof_error();
                run!(self: emit_comment; to Data)
            },

            states::CommentLessThanSign | states::CommentLessThanSignBang => {
                run!(self: reconsume Comment)
            },

            states::CommentLessThanSignBangDash => run!(self: reconsume CommentEndDash),

            states::CommentLessThanSignBangDashDash => run!(self: reconsume CommentEnd),

            states::Doctype | states::BeforeDoctypeName => {
                self.bad_eof_error();
                run!(self: create_doctype; force_quirks; emit_doctype; to Data)
            },

            states::DoctypeName
            | states::AfterDoctypeName
            | states::AfterDoctypeKeyword(_)
            | states::BeforeDoctypeId(_)
            | states::DoctypeIdDoubleQuoted(_)
            | states::DoctypeIdSingleQuoted(_)
            | states::AfterDoctypeId(_)
            | states::BetweenDoctypeIds => {
                self.bad_eof_error();
                run!(self: force_quirks; emit_doctype; to Data)
            },

            states::BogusDoctype => run!(self: emit_doctype; to Data),

            states::BogusComment => run!(self: emit_comment; to Data),

            states::MarkupDeclarationOpen => {
                self.bad_char_error();
                run!(self: to BogusComment)
            },

            states::CdataSection => {
                self.emit_temp_buf();
                self.bad_eof_error();
                run!(self: to Data)
            },

            states::CdataSectionBracket => run!(self: push_temp ']'; to CdataSection),

            states::CdataSectionEnd => run!(self: push_temp ']'; push_temp ']'; to CdataSection),
        }
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::option_push; // private items
    use tendril::{SliceExt, StrTendril};

    use super::{TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts};

    use super::interface::{CharacterTokens, EOFToken, NullCharacterToken, ParseError};
    use super::interface::{EndTag, StartTag, Tag, TagKind};
    use super::interface::{TagToken, Token};

    use crate::attrs::AttrMap;
    use crate::util::buffer_queue::BufferQueue;
    use std::cell::RefCell;

    // Collects tokens with the line number each was produced on, to check
    // that CR/CRLF folding keeps the line count right.
    struct LinesMatch {
        tokens: RefCell<Vec<Token>>,
        current_str: RefCell<StrTendril>,
        lines: RefCell<Vec<(Token, u64)>>,
    }

    impl LinesMatch {
        fn new() -> LinesMatch {
            LinesMatch {
                tokens: RefCell::new(vec![]),
                current_str: RefCell::new(StrTendril::new()),
                lines: RefCell::new(vec![]),
            }
        }

        fn push(&self, token: Token, line_number: u64) {
            self.finish_str();
            self.lines.borrow_mut().push((token, line_number));
        }

        fn finish_str(&self) {
            if !self.current_str.borrow().is_empty() {
                let s = self.current_str.take();
                self.tokens.borrow_mut().push(CharacterTokens(s));
            }
        }
    }

    impl TokenSink for LinesMatch {
        fn process_token(&self, token: Token, line_number: u64) -> TokenSinkResult {
            match token {
                CharacterTokens(b) => {
                    self.current_str.borrow_mut().push_slice(&b);
                },

                NullCharacterToken => {
                    self.current_str.borrow_mut().push_char('\0');
                },

                ParseError(_) => {
                    panic!("unexpected parse error");
                },

                TagToken(mut t) => {
                    match t.kind {
                        EndTag => {
                            t.self_closing = false;
                            t.attrs = AttrMap::new();
                        },
                        _ => (),
                    }
                    self.push(TagToken(t), line_number);
                },

                EOFToken => (),

                _ => self.push(token, line_number),
            }
            TokenSinkResult::Continue
        }
    }

    fn tokenize(input: Vec<StrTendril>, opts: TokenizerOpts) -> Vec<(Token, u64)> {
        let sink = LinesMatch::new();
        let tok = Tokenizer::new(sink, opts);
        let buffer = BufferQueue::default();
        for chunk in input.into_iter() {
            buffer.push_back(chunk);
            let _ = tok.feed(&buffer);
        }
        tok.end();
        tok.sink.lines.take()
    }

    fn create_tag(token: StrTendril, tagkind: TagKind) -> Token {
        TagToken(Tag {
            kind: tagkind,
            name: token,
            self_closing: false,
            attrs: AttrMap::new(),
        })
    }

    #[test]
    fn push_to_None_gives_singleton() {
        let mut s: Option<StrTendril> = None;
        option_push(&mut s, 'x');
        assert_eq!(s, Some("x".to_tendril()));
    }

    #[test]
    fn push_to_empty_appends() {
        let mut s: Option<StrTendril> = Some(StrTendril::new());
        option_push(&mut s, 'x');
        assert_eq!(s, Some("x".to_tendril()));
    }

    #[test]
    fn push_to_nonempty_appends() {
        let mut s: Option<StrTendril> = Some(StrTendril::from_slice("y"));
        option_push(&mut s, 'x');
        assert_eq!(s, Some("yx".to_tendril()));
    }

    #[test]
    fn check_lines() {
        let vector = vec![
            StrTendril::from("<a>\n"),
            StrTendril::from("<b>\n"),
            StrTendril::from("</b>\n"),
            StrTendril::from("</a>\n"),
        ];
        let expected = vec![
            (create_tag(StrTendril::from("a"), StartTag), 1),
            (create_tag(StrTendril::from("b"), StartTag), 2),
            (create_tag(StrTendril::from("b"), EndTag), 3),
            (create_tag(StrTendril::from("a"), EndTag), 4),
        ];
        let results = tokenize(vector, TokenizerOpts::default());
        assert_eq!(results, expected);
    }

    #[test]
    fn check_lines_with_new_line() {
        let vector = vec![
            StrTendril::from("<a>\r\n"),
            StrTendril::from("<b>\r\n"),
            StrTendril::from("</b>\r\n"),
            StrTendril::from("</a>\r\n"),
        ];
        let expected = vec![
            (create_tag(StrTendril::from("a"), StartTag), 1),
            (create_tag(StrTendril::from("b"), StartTag), 2),
            (create_tag(StrTendril::from("b"), EndTag), 3),
            (create_tag(StrTendril::from("a"), EndTag), 4),
        ];
        let results = tokenize(vector, TokenizerOpts::default());
        assert_eq!(results, expected);
    }
}
