// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parsing CSS selector strings into the matcher's representation.
//!
//! The accepted language is Selectors Level 3 without the dynamic, link,
//! target, language, and direction pseudo-classes and without
//! pseudo-elements. `:not()` accepts any selector, not just a simple one.

use super::{
    AttrOp, Combinator, ComplexSelector, CompoundSelector, NthExpr, PseudoClass, Selector,
    SelectorParseError, SimpleSelector,
};

/// CSS whitespace, which is not identical to Unicode or ASCII whitespace.
pub(super) fn is_css_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

pub(super) struct Parser<'i> {
    input: &'i str,
    chars: Vec<char>,
    pos: usize,
}

impl<'i> Parser<'i> {
    pub(super) fn new(input: &'i str) -> Parser<'i> {
        Parser {
            input,
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> SelectorParseError {
        SelectorParseError {
            message: message.into(),
            location: self.pos,
            input: self.input.to_string(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(is_css_whitespace) {
            self.pos += 1;
        }
        self.pos != start
    }

    fn is_ident_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
    }

    fn is_ident_char(c: char) -> bool {
        Self::is_ident_start(c) || c.is_ascii_digit() || c == '-'
    }

    fn parse_identifier(&mut self) -> Result<String, SelectorParseError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        match self.peek() {
            Some(c) if Self::is_ident_start(c) => (),
            _ => {
                self.pos = start;
                return Err(self.error("expected identifier"));
            },
        }
        let mut out = String::new();
        if start != self.pos {
            out.push('-');
        }
        while let Some(c) = self.peek() {
            if Self::is_ident_char(c) {
                out.push(c);
                self.pos += 1;
            } else {
                break;
            }
        }
        Ok(out)
    }

    fn parse_string(&mut self, quote: char) -> Result<String, SelectorParseError> {
        debug_assert!(self.peek() == Some(quote));
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    None => return Err(self.error("unterminated string")),
                    Some(c) => out.push(c),
                },
                Some(c) => out.push(c),
            }
        }
    }

    /// selector-list: complex (',' complex)*
    pub(super) fn parse_selector_list(
        &mut self,
    ) -> Result<Vec<ComplexSelector>, SelectorParseError> {
        let mut groups = Vec::new();
        loop {
            groups.push(self.parse_complex_selector()?);
            self.skip_whitespace();
            if !self.eat(',') {
                break;
            }
        }
        Ok(groups)
    }

    /// Like `parse_selector_list`, but for the argument of `:not()`: stops
    /// before a closing parenthesis instead of consuming it.
    fn parse_inner_selector_list(&mut self) -> Result<Vec<ComplexSelector>, SelectorParseError> {
        self.parse_selector_list()
    }

    fn parse_complex_selector(&mut self) -> Result<ComplexSelector, SelectorParseError> {
        self.skip_whitespace();
        let mut head = self.parse_compound_selector()?;
        let mut ancestors = Vec::new();

        loop {
            let had_space = self.skip_whitespace();
            let combinator = match self.peek() {
                Some('>') => {
                    self.pos += 1;
                    Some(Combinator::Child)
                },
                Some('+') => {
                    self.pos += 1;
                    Some(Combinator::NextSibling)
                },
                Some('~') => {
                    self.pos += 1;
                    Some(Combinator::LaterSibling)
                },
                Some(c) if had_space && c != ',' && c != ')' => Some(Combinator::Descendant),
                _ => None,
            };

            let Some(combinator) = combinator else {
                break;
            };

            self.skip_whitespace();
            let next = self.parse_compound_selector()?;
            ancestors.push((combinator, std::mem::replace(&mut head, next)));
        }

        // The matcher wants the compounds right-to-left: the head is the
        // subject of the selector, and each entry pairs a combinator with
        // the compound on its left.
        ancestors.reverse();

        Ok(ComplexSelector { head, ancestors })
    }

    fn parse_compound_selector(&mut self) -> Result<CompoundSelector, SelectorParseError> {
        let mut components = Vec::new();

        // Optional type or universal selector, which must come first.
        match self.peek() {
            Some('*') => {
                self.pos += 1;
                components.push(SimpleSelector::Universal);
            },
            Some(c) if Parser::is_ident_start(c) || c == '-' => {
                let name = self.parse_identifier()?;
                components.push(SimpleSelector::LocalName(name.to_ascii_lowercase()));
            },
            _ => (),
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.pos += 1;
                    let mut id = String::new();
                    while let Some(c) = self.peek() {
                        if Parser::is_ident_char(c) {
                            id.push(c);
                            self.pos += 1;
                        } else {
                            break;
                        }
                    }
                    if id.is_empty() {
                        return Err(self.error("expected id after '#'"));
                    }
                    components.push(SimpleSelector::Id(id));
                },

                Some('.') => {
                    self.pos += 1;
                    let class = self.parse_identifier()?;
                    components.push(SimpleSelector::Class(class));
                },

                Some('[') => {
                    components.push(self.parse_attribute_selector()?);
                },

                Some(':') => {
                    components.push(self.parse_pseudo_class()?);
                },

                _ => break,
            }
        }

        if components.is_empty() {
            return Err(self.error("expected selector"));
        }

        Ok(CompoundSelector { components })
    }

    fn parse_attribute_selector(&mut self) -> Result<SimpleSelector, SelectorParseError> {
        debug_assert!(self.peek() == Some('['));
        self.pos += 1;
        self.skip_whitespace();
        let name = self.parse_identifier()?.to_ascii_lowercase();
        self.skip_whitespace();

        let op = match self.peek() {
            Some(']') => {
                self.pos += 1;
                return Ok(SimpleSelector::Attr {
                    name,
                    op: AttrOp::Exists,
                });
            },
            Some('=') => {
                self.pos += 1;
                AttrOp::Equals(String::new())
            },
            Some(c @ ('~' | '|' | '^' | '$' | '*')) => {
                self.pos += 1;
                if !self.eat('=') {
                    return Err(self.error("expected '=' in attribute selector"));
                }
                match c {
                    '~' => AttrOp::Includes(String::new()),
                    '|' => AttrOp::DashMatch(String::new()),
                    '^' => AttrOp::Prefix(String::new()),
                    '$' => AttrOp::Suffix(String::new()),
                    '*' => AttrOp::Substring(String::new()),
                    _ => unreachable!(),
                }
            },
            _ => return Err(self.error("expected ']' or attribute operator")),
        };

        self.skip_whitespace();
        let value = match self.peek() {
            Some(q @ ('"' | '\'')) => self.parse_string(q)?,
            _ => self.parse_identifier()?,
        };
        self.skip_whitespace();
        if !self.eat(']') {
            return Err(self.error("expected ']'"));
        }

        let op = match op {
            AttrOp::Equals(_) => AttrOp::Equals(value),
            AttrOp::Includes(_) => AttrOp::Includes(value),
            AttrOp::DashMatch(_) => AttrOp::DashMatch(value),
            AttrOp::Prefix(_) => AttrOp::Prefix(value),
            AttrOp::Suffix(_) => AttrOp::Suffix(value),
            AttrOp::Substring(_) => AttrOp::Substring(value),
            AttrOp::Exists => unreachable!(),
        };

        Ok(SimpleSelector::Attr { name, op })
    }

    fn parse_pseudo_class(&mut self) -> Result<SimpleSelector, SelectorParseError> {
        debug_assert!(self.peek() == Some(':'));
        self.pos += 1;
        if self.peek() == Some(':') {
            return Err(self.error("pseudo-elements are not supported"));
        }
        let name_location = self.pos;
        let name = self.parse_identifier()?.to_ascii_lowercase();

        let pseudo = match &*name {
            "root" => PseudoClass::Root,
            "empty" => PseudoClass::Empty,
            "first-child" => PseudoClass::FirstChild,
            "last-child" => PseudoClass::LastChild,
            "only-child" => PseudoClass::OnlyChild,
            "first-of-type" => PseudoClass::FirstOfType,
            "last-of-type" => PseudoClass::LastOfType,
            "only-of-type" => PseudoClass::OnlyOfType,
            "enabled" => PseudoClass::Enabled,
            "disabled" => PseudoClass::Disabled,
            "checked" => PseudoClass::Checked,

            "nth-child" | "nth-last-child" | "nth-of-type" | "nth-last-of-type" => {
                if !self.eat('(') {
                    return Err(self.error("expected '(' after pseudo-class"));
                }
                let arg_start = self.pos;
                let mut arg = String::new();
                loop {
                    match self.peek() {
                        None => return Err(self.error("unterminated pseudo-class argument")),
                        Some(')') => {
                            self.pos += 1;
                            break;
                        },
                        Some(c) => {
                            arg.push(c);
                            self.pos += 1;
                        },
                    }
                }
                let Some(nth) = NthExpr::parse(&arg) else {
                    return Err(SelectorParseError {
                        message: format!("invalid nth expression {arg:?}"),
                        location: arg_start,
                        input: self.input.to_string(),
                    });
                };
                match &*name {
                    "nth-child" => PseudoClass::NthChild(nth),
                    "nth-last-child" => PseudoClass::NthLastChild(nth),
                    "nth-of-type" => PseudoClass::NthOfType(nth),
                    "nth-last-of-type" => PseudoClass::NthLastOfType(nth),
                    _ => unreachable!(),
                }
            },

            "not" => {
                if !self.eat('(') {
                    return Err(self.error("expected '(' after :not"));
                }
                let groups = self.parse_inner_selector_list()?;
                self.skip_whitespace();
                if !self.eat(')') {
                    return Err(self.error("expected ')'"));
                }
                PseudoClass::Not(Box::new(Selector::from_groups(String::new(), groups)))
            },

            "link" | "visited" | "active" | "hover" | "focus" | "target" | "lang" | "dir" => {
                return Err(SelectorParseError {
                    message: format!(":{name} is not supported"),
                    location: name_location,
                    input: self.input.to_string(),
                });
            },

            _ => {
                return Err(SelectorParseError {
                    message: format!("unknown pseudo-class :{name}"),
                    location: name_location,
                    input: self.input.to_string(),
                });
            },
        };

        Ok(SimpleSelector::Pseudo(pseudo))
    }

    pub(super) fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub(super) fn error_here(&self, message: impl Into<String>) -> SelectorParseError {
        self.error(message)
    }
}

impl NthExpr {
    /// Translate a string resembling one of the forms `an+b`, `odd`, or
    /// `even` into an expression.
    pub fn parse(input: &str) -> Option<NthExpr> {
        let s: String = input
            .chars()
            .filter(|c| !is_css_whitespace(*c))
            .collect::<String>()
            .to_ascii_lowercase();

        match &*s {
            "odd" => return Some(NthExpr::ODD),
            "even" => return Some(NthExpr::EVEN),
            "" => return None,
            _ => (),
        }

        match s.find(['n', 'N']) {
            None => {
                // Plain integer: matches only that child index.
                let b: i64 = s.parse().ok()?;
                Some(NthExpr {
                    a: 0,
                    b: i32::try_from(b).ok()?,
                })
            },
            Some(n_pos) => {
                let (coeff, rest) = s.split_at(n_pos);
                let a: i64 = match coeff {
                    "" => 1,
                    "-" => -1,
                    "+" => 1,
                    _ => coeff.parse().ok()?,
                };
                let rest = &rest[1..];
                let b: i64 = if rest.is_empty() {
                    0
                } else {
                    let (sign, digits) = rest.split_at(1);
                    let value: i64 = digits.parse().ok()?;
                    match sign {
                        "+" => value,
                        "-" => -value,
                        _ => return None,
                    }
                };
                Some(NthExpr {
                    a: i32::try_from(a).ok()?,
                    b: i32::try_from(b).ok()?,
                })
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::super::{NthExpr, Selector};

    #[test]
    fn nth_expressions() {
        assert_eq!(NthExpr::parse("odd"), Some(NthExpr::ODD));
        assert_eq!(NthExpr::parse("EVEN"), Some(NthExpr::EVEN));
        assert_eq!(NthExpr::parse("2n+1"), Some(NthExpr { a: 2, b: 1 }));
        assert_eq!(NthExpr::parse(" 2n + 1 "), Some(NthExpr { a: 2, b: 1 }));
        assert_eq!(NthExpr::parse("-n+3"), Some(NthExpr { a: -1, b: 3 }));
        assert_eq!(NthExpr::parse("n"), Some(NthExpr { a: 1, b: 0 }));
        assert_eq!(NthExpr::parse("4"), Some(NthExpr { a: 0, b: 4 }));
        assert_eq!(NthExpr::parse("3n-2"), Some(NthExpr { a: 3, b: -2 }));
        assert_eq!(NthExpr::parse(""), None);
        assert_eq!(NthExpr::parse("frog"), None);
        assert_eq!(NthExpr::parse("2n+"), None);
    }

    #[test]
    fn parse_errors_carry_location() {
        let err = Selector::parse("p..q").unwrap_err();
        assert_eq!(err.location, 2);
        assert_eq!(err.input, "p..q");

        let err = Selector::parse("a:hover").unwrap_err();
        assert_eq!(err.location, 2);

        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("p >").is_err());
        assert!(Selector::parse("[href").is_err());
    }

    #[test]
    fn round_trips_source_text() {
        let sel = Selector::parse("p.a > a#x").unwrap();
        assert_eq!(sel.string(), "p.a > a#x");
    }

    #[test]
    fn accepts_level3_syntax() {
        for s in [
            "*",
            "p",
            "p.cls",
            "#id",
            ".cls.other",
            "[href]",
            "[href='x']",
            "[class~=\"a\"]",
            "[lang|=en]",
            "[href^=http]",
            "[href$=\".png\"]",
            "[href*=example]",
            "ul > li",
            "div p",
            "h1 + p",
            "h1 ~ pre",
            "li:first-child",
            "li:nth-child(2n+1)",
            "li:nth-last-child(odd)",
            "p:not(.a)",
            "p:not(div > p)",
            "input:checked",
            "input:disabled",
            "a, b, c",
            ":root",
            "p:empty",
        ] {
            assert!(Selector::parse(s).is_ok(), "failed to parse {s:?}");
        }
    }
}
