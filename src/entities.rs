// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Character reference data.
//!
//! The named reference table below holds the WHATWG named character
//! references, keyed by the text after `&` and including the trailing
//! semicolon where the reference has one. Names without a semicolon are the
//! legacy references which may terminate at any non-name character.
//!
//! The table is sorted once on first use; lookups are binary searches. The
//! char-ref tokenizer consumes one character at a time, so it needs both an
//! exact query and a "could this still become a name" prefix query.

use once_cell::sync::Lazy;

/// No entity name is longer than this, bounding the tokenizer's lookahead.
pub const LONGEST_ENTITY_NAME: usize = 32;

/// The spec replaces most characters in the ISO-2022 C1 control code range
/// (U+0080 through U+009F) with these characters, based on Windows 8-bit
/// codepages.
pub static C1_REPLACEMENTS: [Option<char>; 32] = [
    Some('\u{20ac}'),
    None,
    Some('\u{201a}'),
    Some('\u{0192}'),
    Some('\u{201e}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02c6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017d}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201c}'),
    Some('\u{201d}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02dc}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203a}'),
    Some('\u{0153}'),
    None,
    Some('\u{017e}'),
    Some('\u{0178}'),
];

/// Exact lookup of an entity name (text after `&`, semicolon included when
/// the name has one). The result is one or two code points; the second is 0
/// for single-character references.
pub fn named_entity(name: &str) -> Option<[u32; 2]> {
    let table = &*SORTED;
    table
        .binary_search_by(|&(n, _)| n.cmp(name))
        .ok()
        .map(|i| table[i].1)
}

/// Is `name` a prefix of at least one entity name (itself included)?
pub fn named_entity_prefix(name: &str) -> bool {
    if name.len() > LONGEST_ENTITY_NAME {
        return false;
    }
    let table = &*SORTED;
    let i = table.partition_point(|&(n, _)| n < name);
    table.get(i).is_some_and(|&(n, _)| n.starts_with(name))
}

static SORTED: Lazy<Vec<(&'static str, [u32; 2])>> = Lazy::new(|| {
    let mut table = NAMED_ENTITIES.to_vec();
    table.sort_unstable_by(|a, b| a.0.cmp(b.0));
    debug_assert!(table.windows(2).all(|w| w[0].0 != w[1].0));
    table
});

macro_rules! one (($name:expr, $c:expr) => (($name, [$c, 0])));
macro_rules! two (($name:expr, $c1:expr, $c2:expr) => (($name, [$c1, $c2])));

#[rustfmt::skip]
static NAMED_ENTITIES: &[(&str, [u32; 2])] = &[
    // ASCII characters and simple punctuation.
    one!("Tab;", 0x9), one!("NewLine;", 0xA),
    one!("excl;", 0x21), one!("quot;", 0x22), one!("quot", 0x22),
    one!("QUOT;", 0x22), one!("QUOT", 0x22), one!("num;", 0x23),
    one!("dollar;", 0x24), one!("percnt;", 0x25),
    one!("amp;", 0x26), one!("amp", 0x26), one!("AMP;", 0x26), one!("AMP", 0x26),
    one!("apos;", 0x27), one!("lpar;", 0x28), one!("rpar;", 0x29),
    one!("ast;", 0x2A), one!("midast;", 0x2A), one!("plus;", 0x2B),
    one!("comma;", 0x2C), one!("period;", 0x2E), one!("sol;", 0x2F),
    one!("colon;", 0x3A), one!("semi;", 0x3B),
    one!("lt;", 0x3C), one!("lt", 0x3C), one!("LT;", 0x3C), one!("LT", 0x3C),
    one!("equals;", 0x3D),
    one!("gt;", 0x3E), one!("gt", 0x3E), one!("GT;", 0x3E), one!("GT", 0x3E),
    one!("quest;", 0x3F), one!("commat;", 0x40),
    one!("lsqb;", 0x5B), one!("lbrack;", 0x5B), one!("bsol;", 0x5C),
    one!("rsqb;", 0x5D), one!("rbrack;", 0x5D), one!("Hat;", 0x5E),
    one!("lowbar;", 0x5F), one!("UnderBar;", 0x5F),
    one!("grave;", 0x60), one!("DiacriticalGrave;", 0x60),
    one!("lcub;", 0x7B), one!("lbrace;", 0x7B),
    one!("verbar;", 0x7C), one!("vert;", 0x7C), one!("VerticalLine;", 0x7C),
    one!("rcub;", 0x7D), one!("rbrace;", 0x7D),

    // Latin-1 supplement. Most of these have legacy (no-semicolon) forms.
    one!("nbsp;", 0xA0), one!("nbsp", 0xA0), one!("NonBreakingSpace;", 0xA0),
    one!("iexcl;", 0xA1), one!("iexcl", 0xA1),
    one!("cent;", 0xA2), one!("cent", 0xA2),
    one!("pound;", 0xA3), one!("pound", 0xA3),
    one!("curren;", 0xA4), one!("curren", 0xA4),
    one!("yen;", 0xA5), one!("yen", 0xA5),
    one!("brvbar;", 0xA6), one!("brvbar", 0xA6),
    one!("sect;", 0xA7), one!("sect", 0xA7),
    one!("uml;", 0xA8), one!("uml", 0xA8), one!("die;", 0xA8),
    one!("Dot;", 0xA8), one!("DoubleDot;", 0xA8),
    one!("copy;", 0xA9), one!("copy", 0xA9), one!("COPY;", 0xA9), one!("COPY", 0xA9),
    one!("ordf;", 0xAA), one!("ordf", 0xAA),
    one!("laquo;", 0xAB), one!("laquo", 0xAB),
    one!("not;", 0xAC), one!("not", 0xAC),
    one!("shy;", 0xAD), one!("shy", 0xAD),
    one!("reg;", 0xAE), one!("reg", 0xAE), one!("REG;", 0xAE), one!("REG", 0xAE),
    one!("circledR;", 0xAE),
    one!("macr;", 0xAF), one!("macr", 0xAF), one!("strns;", 0xAF),
    one!("deg;", 0xB0), one!("deg", 0xB0),
    one!("plusmn;", 0xB1), one!("plusmn", 0xB1), one!("pm;", 0xB1), one!("PlusMinus;", 0xB1),
    one!("sup2;", 0xB2), one!("sup2", 0xB2),
    one!("sup3;", 0xB3), one!("sup3", 0xB3),
    one!("acute;", 0xB4), one!("acute", 0xB4), one!("DiacriticalAcute;", 0xB4),
    one!("micro;", 0xB5), one!("micro", 0xB5),
    one!("para;", 0xB6), one!("para", 0xB6),
    one!("middot;", 0xB7), one!("middot", 0xB7), one!("centerdot;", 0xB7),
    one!("CenterDot;", 0xB7),
    one!("cedil;", 0xB8), one!("cedil", 0xB8), one!("Cedilla;", 0xB8),
    one!("sup1;", 0xB9), one!("sup1", 0xB9),
    one!("ordm;", 0xBA), one!("ordm", 0xBA),
    one!("raquo;", 0xBB), one!("raquo", 0xBB),
    one!("frac14;", 0xBC), one!("frac14", 0xBC),
    one!("frac12;", 0xBD), one!("frac12", 0xBD), one!("half;", 0xBD),
    one!("frac34;", 0xBE), one!("frac34", 0xBE),
    one!("iquest;", 0xBF), one!("iquest", 0xBF),
    one!("Agrave;", 0xC0), one!("Agrave", 0xC0),
    one!("Aacute;", 0xC1), one!("Aacute", 0xC1),
    one!("Acirc;", 0xC2), one!("Acirc", 0xC2),
    one!("Atilde;", 0xC3), one!("Atilde", 0xC3),
    one!("Auml;", 0xC4), one!("Auml", 0xC4),
    one!("Aring;", 0xC5), one!("Aring", 0xC5), one!("angst;", 0xC5),
    one!("AElig;", 0xC6), one!("AElig", 0xC6),
    one!("Ccedil;", 0xC7), one!("Ccedil", 0xC7),
    one!("Egrave;", 0xC8), one!("Egrave", 0xC8),
    one!("Eacute;", 0xC9), one!("Eacute", 0xC9),
    one!("Ecirc;", 0xCA), one!("Ecirc", 0xCA),
    one!("Euml;", 0xCB), one!("Euml", 0xCB),
    one!("Igrave;", 0xCC), one!("Igrave", 0xCC),
    one!("Iacute;", 0xCD), one!("Iacute", 0xCD),
    one!("Icirc;", 0xCE), one!("Icirc", 0xCE),
    one!("Iuml;", 0xCF), one!("Iuml", 0xCF),
    one!("ETH;", 0xD0), one!("ETH", 0xD0),
    one!("Ntilde;", 0xD1), one!("Ntilde", 0xD1),
    one!("Ograve;", 0xD2), one!("Ograve", 0xD2),
    one!("Oacute;", 0xD3), one!("Oacute", 0xD3),
    one!("Ocirc;", 0xD4), one!("Ocirc", 0xD4),
    one!("Otilde;", 0xD5), one!("Otilde", 0xD5),
    one!("Ouml;", 0xD6), one!("Ouml", 0xD6),
    one!("times;", 0xD7), one!("times", 0xD7),
    one!("Oslash;", 0xD8), one!("Oslash", 0xD8),
    one!("Ugrave;", 0xD9), one!("Ugrave", 0xD9),
    one!("Uacute;", 0xDA), one!("Uacute", 0xDA),
    one!("Ucirc;", 0xDB), one!("Ucirc", 0xDB),
    one!("Uuml;", 0xDC), one!("Uuml", 0xDC),
    one!("Yacute;", 0xDD), one!("Yacute", 0xDD),
    one!("THORN;", 0xDE), one!("THORN", 0xDE),
    one!("szlig;", 0xDF), one!("szlig", 0xDF),
    one!("agrave;", 0xE0), one!("agrave", 0xE0),
    one!("aacute;", 0xE1), one!("aacute", 0xE1),
    one!("acirc;", 0xE2), one!("acirc", 0xE2),
    one!("atilde;", 0xE3), one!("atilde", 0xE3),
    one!("auml;", 0xE4), one!("auml", 0xE4),
    one!("aring;", 0xE5), one!("aring", 0xE5),
    one!("aelig;", 0xE6), one!("aelig", 0xE6),
    one!("ccedil;", 0xE7), one!("ccedil", 0xE7),
    one!("egrave;", 0xE8), one!("egrave", 0xE8),
    one!("eacute;", 0xE9), one!("eacute", 0xE9),
    one!("ecirc;", 0xEA), one!("ecirc", 0xEA),
    one!("euml;", 0xEB), one!("euml", 0xEB),
    one!("igrave;", 0xEC), one!("igrave", 0xEC),
    one!("iacute;", 0xED), one!("iacute", 0xED),
    one!("icirc;", 0xEE), one!("icirc", 0xEE),
    one!("iuml;", 0xEF), one!("iuml", 0xEF),
    one!("eth;", 0xF0), one!("eth", 0xF0),
    one!("ntilde;", 0xF1), one!("ntilde", 0xF1),
    one!("ograve;", 0xF2), one!("ograve", 0xF2),
    one!("oacute;", 0xF3), one!("oacute", 0xF3),
    one!("ocirc;", 0xF4), one!("ocirc", 0xF4),
    one!("otilde;", 0xF5), one!("otilde", 0xF5),
    one!("ouml;", 0xF6), one!("ouml", 0xF6),
    one!("divide;", 0xF7), one!("divide", 0xF7), one!("div;", 0xF7),
    one!("oslash;", 0xF8), one!("oslash", 0xF8),
    one!("ugrave;", 0xF9), one!("ugrave", 0xF9),
    one!("uacute;", 0xFA), one!("uacute", 0xFA),
    one!("ucirc;", 0xFB), one!("ucirc", 0xFB),
    one!("uuml;", 0xFC), one!("uuml", 0xFC),
    one!("yacute;", 0xFD), one!("yacute", 0xFD),
    one!("thorn;", 0xFE), one!("thorn", 0xFE),
    one!("yuml;", 0xFF), one!("yuml", 0xFF),

    // Latin extended A and friends.
    one!("Amacr;", 0x100), one!("amacr;", 0x101),
    one!("Abreve;", 0x102), one!("abreve;", 0x103),
    one!("Aogon;", 0x104), one!("aogon;", 0x105),
    one!("Cacute;", 0x106), one!("cacute;", 0x107),
    one!("Ccirc;", 0x108), one!("ccirc;", 0x109),
    one!("Cdot;", 0x10A), one!("cdot;", 0x10B),
    one!("Ccaron;", 0x10C), one!("ccaron;", 0x10D),
    one!("Dcaron;", 0x10E), one!("dcaron;", 0x10F),
    one!("Dstrok;", 0x110), one!("dstrok;", 0x111),
    one!("Emacr;", 0x112), one!("emacr;", 0x113),
    one!("Edot;", 0x116), one!("edot;", 0x117),
    one!("Eogon;", 0x118), one!("eogon;", 0x119),
    one!("Ecaron;", 0x11A), one!("ecaron;", 0x11B),
    one!("Gcirc;", 0x11C), one!("gcirc;", 0x11D),
    one!("Gbreve;", 0x11E), one!("gbreve;", 0x11F),
    one!("Gdot;", 0x120), one!("gdot;", 0x121),
    one!("Gcedil;", 0x122),
    one!("Hcirc;", 0x124), one!("hcirc;", 0x125),
    one!("Hstrok;", 0x126), one!("hstrok;", 0x127),
    one!("Itilde;", 0x128), one!("itilde;", 0x129),
    one!("Imacr;", 0x12A), one!("imacr;", 0x12B),
    one!("Iogon;", 0x12E), one!("iogon;", 0x12F),
    one!("Idot;", 0x130), one!("imath;", 0x131), one!("inodot;", 0x131),
    one!("IJlig;", 0x132), one!("ijlig;", 0x133),
    one!("Jcirc;", 0x134), one!("jcirc;", 0x135),
    one!("Kcedil;", 0x136), one!("kcedil;", 0x137), one!("kgreen;", 0x138),
    one!("Lacute;", 0x139), one!("lacute;", 0x13A),
    one!("Lcedil;", 0x13B), one!("lcedil;", 0x13C),
    one!("Lcaron;", 0x13D), one!("lcaron;", 0x13E),
    one!("Lmidot;", 0x13F), one!("lmidot;", 0x140),
    one!("Lstrok;", 0x141), one!("lstrok;", 0x142),
    one!("Nacute;", 0x143), one!("nacute;", 0x144),
    one!("Ncedil;", 0x145), one!("ncedil;", 0x146),
    one!("Ncaron;", 0x147), one!("ncaron;", 0x148),
    one!("napos;", 0x149),
    one!("ENG;", 0x14A), one!("eng;", 0x14B),
    one!("Omacr;", 0x14C), one!("omacr;", 0x14D),
    one!("OElig;", 0x152), one!("oelig;", 0x153),
    one!("Racute;", 0x154), one!("racute;", 0x155),
    one!("Rcedil;", 0x156), one!("rcedil;", 0x157),
    one!("Rcaron;", 0x158), one!("rcaron;", 0x159),
    one!("Sacute;", 0x15A), one!("sacute;", 0x15B),
    one!("Scirc;", 0x15C), one!("scirc;", 0x15D),
    one!("Scedil;", 0x15E), one!("scedil;", 0x15F),
    one!("Scaron;", 0x160), one!("scaron;", 0x161),
    one!("Tcedil;", 0x162), one!("tcedil;", 0x163),
    one!("Tcaron;", 0x164), one!("tcaron;", 0x165),
    one!("Tstrok;", 0x166), one!("tstrok;", 0x167),
    one!("Utilde;", 0x168), one!("utilde;", 0x169),
    one!("Umacr;", 0x16A), one!("umacr;", 0x16B),
    one!("Ubreve;", 0x16C), one!("ubreve;", 0x16D),
    one!("Uring;", 0x16E), one!("uring;", 0x16F),
    one!("Uogon;", 0x172), one!("uogon;", 0x173),
    one!("Wcirc;", 0x174), one!("wcirc;", 0x175),
    one!("Ycirc;", 0x176), one!("ycirc;", 0x177),
    one!("Yuml;", 0x178),
    one!("Zacute;", 0x179), one!("zacute;", 0x17A),
    one!("Zdot;", 0x17B), one!("zdot;", 0x17C),
    one!("Zcaron;", 0x17D), one!("zcaron;", 0x17E),
    one!("fnof;", 0x192), one!("imped;", 0x1B5),
    one!("gacute;", 0x1F5), one!("jmath;", 0x237),
    one!("circ;", 0x2C6), one!("caron;", 0x2C7), one!("Hacek;", 0x2C7),
    one!("breve;", 0x2D8), one!("Breve;", 0x2D8),
    one!("dot;", 0x2D9), one!("DiacriticalDot;", 0x2D9),
    one!("ring;", 0x2DA), one!("ogon;", 0x2DB),
    one!("tilde;", 0x2DC), one!("DiacriticalTilde;", 0x2DC),
    one!("dblac;", 0x2DD), one!("DiacriticalDoubleAcute;", 0x2DD),
    one!("DownBreve;", 0x311),

    // Greek.
    one!("Alpha;", 0x391), one!("Beta;", 0x392), one!("Gamma;", 0x393),
    one!("Delta;", 0x394), one!("Epsilon;", 0x395), one!("Zeta;", 0x396),
    one!("Eta;", 0x397), one!("Theta;", 0x398), one!("Iota;", 0x399),
    one!("Kappa;", 0x39A), one!("Lambda;", 0x39B), one!("Mu;", 0x39C),
    one!("Nu;", 0x39D), one!("Xi;", 0x39E), one!("Omicron;", 0x39F),
    one!("Pi;", 0x3A0), one!("Rho;", 0x3A1), one!("Sigma;", 0x3A3),
    one!("Tau;", 0x3A4), one!("Upsilon;", 0x3A5),
    one!("Phi;", 0x3A6), one!("Chi;", 0x3A7), one!("Psi;", 0x3A8),
    one!("Omega;", 0x3A9), one!("ohm;", 0x3A9),
    one!("alpha;", 0x3B1), one!("beta;", 0x3B2), one!("gamma;", 0x3B3),
    one!("delta;", 0x3B4), one!("epsilon;", 0x3B5), one!("epsi;", 0x3B5),
    one!("zeta;", 0x3B6), one!("eta;", 0x3B7), one!("theta;", 0x3B8),
    one!("iota;", 0x3B9), one!("kappa;", 0x3BA), one!("lambda;", 0x3BB),
    one!("mu;", 0x3BC), one!("nu;", 0x3BD), one!("xi;", 0x3BE),
    one!("omicron;", 0x3BF), one!("pi;", 0x3C0), one!("rho;", 0x3C1),
    one!("sigmaf;", 0x3C2), one!("sigmav;", 0x3C2), one!("varsigma;", 0x3C2),
    one!("sigma;", 0x3C3), one!("tau;", 0x3C4),
    one!("upsilon;", 0x3C5), one!("upsi;", 0x3C5),
    one!("phi;", 0x3C6), one!("chi;", 0x3C7), one!("psi;", 0x3C8),
    one!("omega;", 0x3C9),
    one!("thetasym;", 0x3D1), one!("thetav;", 0x3D1), one!("vartheta;", 0x3D1),
    one!("upsih;", 0x3D2), one!("Upsi;", 0x3D2),
    one!("phiv;", 0x3D5), one!("straightphi;", 0x3D5), one!("varphi;", 0x3D5),
    one!("piv;", 0x3D6), one!("varpi;", 0x3D6),
    one!("Gammad;", 0x3DC), one!("gammad;", 0x3DD), one!("digamma;", 0x3DD),
    one!("kappav;", 0x3F0), one!("varkappa;", 0x3F0),
    one!("rhov;", 0x3F1), one!("varrho;", 0x3F1),
    one!("epsiv;", 0x3F5), one!("straightepsilon;", 0x3F5),
    one!("varepsilon;", 0x3F5),
    one!("bepsi;", 0x3F6), one!("backepsilon;", 0x3F6),

    // Cyrillic.
    one!("IOcy;", 0x401), one!("DJcy;", 0x402), one!("GJcy;", 0x403),
    one!("Jukcy;", 0x404), one!("DScy;", 0x405), one!("Iukcy;", 0x406),
    one!("YIcy;", 0x407), one!("Jsercy;", 0x408), one!("LJcy;", 0x409),
    one!("NJcy;", 0x40A), one!("TSHcy;", 0x40B), one!("KJcy;", 0x40C),
    one!("Ubrcy;", 0x40E), one!("DZcy;", 0x40F),
    one!("Acy;", 0x410), one!("Bcy;", 0x411), one!("Vcy;", 0x412),
    one!("Gcy;", 0x413), one!("Dcy;", 0x414), one!("IEcy;", 0x415),
    one!("ZHcy;", 0x416), one!("Zcy;", 0x417), one!("Icy;", 0x418),
    one!("Jcy;", 0x419), one!("Kcy;", 0x41A), one!("Lcy;", 0x41B),
    one!("Mcy;", 0x41C), one!("Ncy;", 0x41D), one!("Ocy;", 0x41E),
    one!("Pcy;", 0x41F), one!("Rcy;", 0x420), one!("Scy;", 0x421),
    one!("Tcy;", 0x422), one!("Ucy;", 0x423), one!("Fcy;", 0x424),
    one!("KHcy;", 0x425), one!("TScy;", 0x426), one!("CHcy;", 0x427),
    one!("SHcy;", 0x428), one!("SHCHcy;", 0x429), one!("HARDcy;", 0x42A),
    one!("Ycy;", 0x42B), one!("SOFTcy;", 0x42C), one!("Ecy;", 0x42D),
    one!("YUcy;", 0x42E), one!("YAcy;", 0x42F),
    one!("acy;", 0x430), one!("bcy;", 0x431), one!("vcy;", 0x432),
    one!("gcy;", 0x433), one!("dcy;", 0x434), one!("iecy;", 0x435),
    one!("zhcy;", 0x436), one!("zcy;", 0x437), one!("icy;", 0x438),
    one!("jcy;", 0x439), one!("kcy;", 0x43A), one!("lcy;", 0x43B),
    one!("mcy;", 0x43C), one!("ncy;", 0x43D), one!("ocy;", 0x43E),
    one!("pcy;", 0x43F), one!("rcy;", 0x440), one!("scy;", 0x441),
    one!("tcy;", 0x442), one!("ucy;", 0x443), one!("fcy;", 0x444),
    one!("khcy;", 0x445), one!("tscy;", 0x446), one!("chcy;", 0x447),
    one!("shcy;", 0x448), one!("shchcy;", 0x449), one!("hardcy;", 0x44A),
    one!("ycy;", 0x44B), one!("softcy;", 0x44C), one!("ecy;", 0x44D),
    one!("yucy;", 0x44E), one!("yacy;", 0x44F),
    one!("iocy;", 0x451), one!("djcy;", 0x452), one!("gjcy;", 0x453),
    one!("jukcy;", 0x454), one!("dscy;", 0x455), one!("iukcy;", 0x456),
    one!("yicy;", 0x457), one!("jsercy;", 0x458), one!("ljcy;", 0x459),
    one!("njcy;", 0x45A), one!("tshcy;", 0x45B), one!("kjcy;", 0x45C),
    one!("ubrcy;", 0x45E), one!("dzcy;", 0x45F),

    // General punctuation.
    one!("ensp;", 0x2002), one!("emsp;", 0x2003),
    one!("emsp13;", 0x2004), one!("emsp14;", 0x2005), one!("numsp;", 0x2007),
    one!("puncsp;", 0x2008),
    one!("thinsp;", 0x2009), one!("ThinSpace;", 0x2009),
    one!("hairsp;", 0x200A), one!("VeryThinSpace;", 0x200A),
    one!("ZeroWidthSpace;", 0x200B), one!("NegativeVeryThinSpace;", 0x200B),
    one!("NegativeThinSpace;", 0x200B), one!("NegativeMediumSpace;", 0x200B),
    one!("NegativeThickSpace;", 0x200B),
    one!("zwnj;", 0x200C), one!("zwj;", 0x200D),
    one!("lrm;", 0x200E), one!("rlm;", 0x200F),
    one!("hyphen;", 0x2010), one!("dash;", 0x2010),
    one!("ndash;", 0x2013), one!("mdash;", 0x2014), one!("horbar;", 0x2015),
    one!("Verbar;", 0x2016), one!("Vert;", 0x2016),
    one!("lsquo;", 0x2018), one!("OpenCurlyQuote;", 0x2018),
    one!("rsquo;", 0x2019), one!("rsquor;", 0x2019),
    one!("CloseCurlyQuote;", 0x2019),
    one!("sbquo;", 0x201A), one!("lsquor;", 0x201A),
    one!("ldquo;", 0x201C), one!("OpenCurlyDoubleQuote;", 0x201C),
    one!("rdquo;", 0x201D), one!("rdquor;", 0x201D),
    one!("CloseCurlyDoubleQuote;", 0x201D),
    one!("bdquo;", 0x201E), one!("ldquor;", 0x201E),
    one!("dagger;", 0x2020), one!("Dagger;", 0x2021), one!("ddagger;", 0x2021),
    one!("bull;", 0x2022), one!("bullet;", 0x2022),
    one!("nldr;", 0x2025),
    one!("hellip;", 0x2026), one!("mldr;", 0x2026),
    one!("permil;", 0x2030), one!("pertenk;", 0x2031),
    one!("prime;", 0x2032), one!("Prime;", 0x2033),
    one!("tprime;", 0x2034), one!("bprime;", 0x2035), one!("backprime;", 0x2035),
    one!("lsaquo;", 0x2039), one!("rsaquo;", 0x203A),
    one!("oline;", 0x203E), one!("OverBar;", 0x203E),
    one!("caret;", 0x2041), one!("hybull;", 0x2043), one!("frasl;", 0x2044),
    one!("bsemi;", 0x204F), one!("qprime;", 0x2057),
    one!("MediumSpace;", 0x205F),
    one!("NoBreak;", 0x2060),
    one!("ApplyFunction;", 0x2061), one!("af;", 0x2061),
    one!("InvisibleTimes;", 0x2062), one!("it;", 0x2062),
    one!("InvisibleComma;", 0x2063), one!("ic;", 0x2063),
    one!("euro;", 0x20AC),
    one!("tdot;", 0x20DB), one!("TripleDot;", 0x20DB), one!("DotDot;", 0x20DC),

    // Letterlike symbols.
    one!("Copf;", 0x2102), one!("complexes;", 0x2102),
    one!("incare;", 0x2105),
    one!("gscr;", 0x210A),
    one!("hamilt;", 0x210B), one!("HilbertSpace;", 0x210B), one!("Hscr;", 0x210B),
    one!("Hfr;", 0x210C), one!("Poincareplane;", 0x210C),
    one!("quaternions;", 0x210D), one!("Hopf;", 0x210D),
    one!("planckh;", 0x210E),
    one!("planck;", 0x210F), one!("hbar;", 0x210F), one!("hslash;", 0x210F),
    one!("plankv;", 0x210F),
    one!("Iscr;", 0x2110), one!("imagline;", 0x2110),
    one!("image;", 0x2111), one!("Im;", 0x2111), one!("imagpart;", 0x2111),
    one!("Ifr;", 0x2111),
    one!("Lscr;", 0x2112), one!("lagran;", 0x2112), one!("Laplacetrf;", 0x2112),
    one!("ell;", 0x2113),
    one!("Nopf;", 0x2115), one!("naturals;", 0x2115),
    one!("numero;", 0x2116), one!("copysr;", 0x2117),
    one!("weierp;", 0x2118), one!("wp;", 0x2118),
    one!("Popf;", 0x2119), one!("primes;", 0x2119),
    one!("rationals;", 0x211A), one!("Qopf;", 0x211A),
    one!("Rscr;", 0x211B), one!("realine;", 0x211B),
    one!("real;", 0x211C), one!("Re;", 0x211C), one!("realpart;", 0x211C),
    one!("Rfr;", 0x211C),
    one!("reals;", 0x211D), one!("Ropf;", 0x211D),
    one!("rx;", 0x211E),
    one!("trade;", 0x2122), one!("TRADE;", 0x2122),
    one!("integers;", 0x2124), one!("Zopf;", 0x2124),
    one!("Zfr;", 0x2128), one!("zeetrf;", 0x2128),
    one!("iiota;", 0x2129),
    one!("bernou;", 0x212C), one!("Bernoullis;", 0x212C), one!("Bscr;", 0x212C),
    one!("Cfr;", 0x212D), one!("Cayleys;", 0x212D),
    one!("escr;", 0x212F),
    one!("Escr;", 0x2130), one!("expectation;", 0x2130),
    one!("Fscr;", 0x2131), one!("Fouriertrf;", 0x2131),
    one!("phmmat;", 0x2133), one!("Mellintrf;", 0x2133), one!("Mscr;", 0x2133),
    one!("order;", 0x2134), one!("orderof;", 0x2134), one!("oscr;", 0x2134),
    one!("alefsym;", 0x2135), one!("aleph;", 0x2135),
    one!("beth;", 0x2136), one!("gimel;", 0x2137), one!("daleth;", 0x2138),
    one!("CapitalDifferentialD;", 0x2145), one!("DD;", 0x2145),
    one!("DifferentialD;", 0x2146), one!("dd;", 0x2146),
    one!("ExponentialE;", 0x2147), one!("exponentiale;", 0x2147),
    one!("ee;", 0x2147),
    one!("ImaginaryI;", 0x2148), one!("ii;", 0x2148),

    // Number forms.
    one!("frac13;", 0x2153), one!("frac23;", 0x2154),
    one!("frac15;", 0x2155), one!("frac25;", 0x2156), one!("frac35;", 0x2157),
    one!("frac45;", 0x2158), one!("frac16;", 0x2159), one!("frac56;", 0x215A),
    one!("frac18;", 0x215B), one!("frac38;", 0x215C), one!("frac58;", 0x215D),
    one!("frac78;", 0x215E),

    // Arrows.
    one!("larr;", 0x2190), one!("leftarrow;", 0x2190), one!("LeftArrow;", 0x2190),
    one!("slarr;", 0x2190), one!("ShortLeftArrow;", 0x2190),
    one!("uarr;", 0x2191), one!("uparrow;", 0x2191), one!("UpArrow;", 0x2191),
    one!("ShortUpArrow;", 0x2191),
    one!("rarr;", 0x2192), one!("rightarrow;", 0x2192), one!("RightArrow;", 0x2192),
    one!("srarr;", 0x2192), one!("ShortRightArrow;", 0x2192),
    one!("darr;", 0x2193), one!("downarrow;", 0x2193), one!("DownArrow;", 0x2193),
    one!("ShortDownArrow;", 0x2193),
    one!("harr;", 0x2194), one!("leftrightarrow;", 0x2194),
    one!("LeftRightArrow;", 0x2194),
    one!("varr;", 0x2195), one!("updownarrow;", 0x2195),
    one!("UpDownArrow;", 0x2195),
    one!("nwarr;", 0x2196), one!("nwarrow;", 0x2196), one!("UpperLeftArrow;", 0x2196),
    one!("nearr;", 0x2197), one!("nearrow;", 0x2197), one!("UpperRightArrow;", 0x2197),
    one!("searr;", 0x2198), one!("searrow;", 0x2198), one!("LowerRightArrow;", 0x2198),
    one!("swarr;", 0x2199), one!("swarrow;", 0x2199), one!("LowerLeftArrow;", 0x2199),
    one!("nlarr;", 0x219A), one!("nleftarrow;", 0x219A),
    one!("nrarr;", 0x219B), one!("nrightarrow;", 0x219B),
    one!("rarrw;", 0x219D), one!("rightsquigarrow;", 0x219D),
    one!("Larr;", 0x219E), one!("twoheadleftarrow;", 0x219E),
    one!("Uarr;", 0x219F),
    one!("Rarr;", 0x21A0), one!("twoheadrightarrow;", 0x21A0),
    one!("Darr;", 0x21A1),
    one!("larrtl;", 0x21A2), one!("leftarrowtail;", 0x21A2),
    one!("rarrtl;", 0x21A3), one!("rightarrowtail;", 0x21A3),
    one!("LeftTeeArrow;", 0x21A4), one!("mapstoleft;", 0x21A4),
    one!("UpTeeArrow;", 0x21A5), one!("mapstoup;", 0x21A5),
    one!("map;", 0x21A6), one!("RightTeeArrow;", 0x21A6), one!("mapsto;", 0x21A6),
    one!("DownTeeArrow;", 0x21A7), one!("mapstodown;", 0x21A7),
    one!("larrhk;", 0x21A9), one!("hookleftarrow;", 0x21A9),
    one!("rarrhk;", 0x21AA), one!("hookrightarrow;", 0x21AA),
    one!("larrlp;", 0x21AB), one!("looparrowleft;", 0x21AB),
    one!("rarrlp;", 0x21AC), one!("looparrowright;", 0x21AC),
    one!("harrw;", 0x21AD), one!("leftrightsquigarrow;", 0x21AD),
    one!("nharr;", 0x21AE), one!("nleftrightarrow;", 0x21AE),
    one!("lsh;", 0x21B0), one!("Lsh;", 0x21B0),
    one!("rsh;", 0x21B1), one!("Rsh;", 0x21B1),
    one!("ldsh;", 0x21B2), one!("rdsh;", 0x21B3),
    one!("crarr;", 0x21B5),
    one!("cularr;", 0x21B6), one!("curvearrowleft;", 0x21B6),
    one!("curarr;", 0x21B7), one!("curvearrowright;", 0x21B7),
    one!("olarr;", 0x21BA), one!("circlearrowleft;", 0x21BA),
    one!("orarr;", 0x21BB), one!("circlearrowright;", 0x21BB),
    one!("lharu;", 0x21BC), one!("leftharpoonup;", 0x21BC), one!("LeftVector;", 0x21BC),
    one!("lhard;", 0x21BD), one!("leftharpoondown;", 0x21BD),
    one!("DownLeftVector;", 0x21BD),
    one!("uharr;", 0x21BE), one!("upharpoonright;", 0x21BE),
    one!("RightUpVector;", 0x21BE),
    one!("uharl;", 0x21BF), one!("upharpoonleft;", 0x21BF),
    one!("LeftUpVector;", 0x21BF),
    one!("rharu;", 0x21C0), one!("rightharpoonup;", 0x21C0),
    one!("RightVector;", 0x21C0),
    one!("rhard;", 0x21C1), one!("rightharpoondown;", 0x21C1),
    one!("DownRightVector;", 0x21C1),
    one!("dharr;", 0x21C2), one!("downharpoonright;", 0x21C2),
    one!("RightDownVector;", 0x21C2),
    one!("dharl;", 0x21C3), one!("downharpoonleft;", 0x21C3),
    one!("LeftDownVector;", 0x21C3),
    one!("rlarr;", 0x21C4), one!("rightleftarrows;", 0x21C4),
    one!("RightArrowLeftArrow;", 0x21C4),
    one!("udarr;", 0x21C5), one!("UpArrowDownArrow;", 0x21C5),
    one!("lrarr;", 0x21C6), one!("leftrightarrows;", 0x21C6),
    one!("LeftArrowRightArrow;", 0x21C6),
    one!("llarr;", 0x21C7), one!("leftleftarrows;", 0x21C7),
    one!("uuarr;", 0x21C8), one!("upuparrows;", 0x21C8),
    one!("rrarr;", 0x21C9), one!("rightrightarrows;", 0x21C9),
    one!("ddarr;", 0x21CA), one!("downdownarrows;", 0x21CA),
    one!("lrhar;", 0x21CB), one!("leftrightharpoons;", 0x21CB),
    one!("ReverseEquilibrium;", 0x21CB),
    one!("rlhar;", 0x21CC), one!("rightleftharpoons;", 0x21CC),
    one!("Equilibrium;", 0x21CC),
    one!("nlArr;", 0x21CD), one!("nLeftarrow;", 0x21CD),
    one!("nhArr;", 0x21CE), one!("nLeftrightarrow;", 0x21CE),
    one!("nrArr;", 0x21CF), one!("nRightarrow;", 0x21CF),
    one!("lArr;", 0x21D0), one!("Leftarrow;", 0x21D0),
    one!("DoubleLeftArrow;", 0x21D0),
    one!("uArr;", 0x21D1), one!("Uparrow;", 0x21D1), one!("DoubleUpArrow;", 0x21D1),
    one!("rArr;", 0x21D2), one!("Rightarrow;", 0x21D2),
    one!("DoubleRightArrow;", 0x21D2), one!("Implies;", 0x21D2),
    one!("dArr;", 0x21D3), one!("Downarrow;", 0x21D3),
    one!("DoubleDownArrow;", 0x21D3),
    one!("hArr;", 0x21D4), one!("Leftrightarrow;", 0x21D4),
    one!("DoubleLeftRightArrow;", 0x21D4), one!("iff;", 0x21D4),
    one!("vArr;", 0x21D5), one!("Updownarrow;", 0x21D5),
    one!("DoubleUpDownArrow;", 0x21D5),
    one!("nwArr;", 0x21D6), one!("neArr;", 0x21D7),
    one!("seArr;", 0x21D8), one!("swArr;", 0x21D9),
    one!("lAarr;", 0x21DA), one!("Lleftarrow;", 0x21DA),
    one!("rAarr;", 0x21DB), one!("Rrightarrow;", 0x21DB),
    one!("zigrarr;", 0x21DD),
    one!("larrb;", 0x21E4), one!("LeftArrowBar;", 0x21E4),
    one!("rarrb;", 0x21E5), one!("RightArrowBar;", 0x21E5),
    one!("duarr;", 0x21F5), one!("DownArrowUpArrow;", 0x21F5),
    one!("loarr;", 0x21FD), one!("roarr;", 0x21FE), one!("hoarr;", 0x21FF),

    // Mathematical operators.
    one!("forall;", 0x2200), one!("ForAll;", 0x2200),
    one!("comp;", 0x2201), one!("complement;", 0x2201),
    one!("part;", 0x2202), one!("PartialD;", 0x2202),
    one!("exist;", 0x2203), one!("Exists;", 0x2203),
    one!("nexist;", 0x2204), one!("NotExists;", 0x2204), one!("nexists;", 0x2204),
    one!("empty;", 0x2205), one!("emptyset;", 0x2205), one!("emptyv;", 0x2205),
    one!("varnothing;", 0x2205),
    one!("nabla;", 0x2207), one!("Del;", 0x2207),
    one!("isin;", 0x2208), one!("isinv;", 0x2208), one!("Element;", 0x2208),
    one!("in;", 0x2208),
    one!("notin;", 0x2209), one!("NotElement;", 0x2209), one!("notinva;", 0x2209),
    one!("ni;", 0x220B), one!("niv;", 0x220B), one!("ReverseElement;", 0x220B),
    one!("SuchThat;", 0x220B),
    one!("notni;", 0x220C), one!("notniva;", 0x220C),
    one!("NotReverseElement;", 0x220C),
    one!("prod;", 0x220F), one!("Product;", 0x220F),
    one!("coprod;", 0x2210), one!("Coproduct;", 0x2210),
    one!("sum;", 0x2211), one!("Sum;", 0x2211),
    one!("minus;", 0x2212),
    one!("mnplus;", 0x2213), one!("mp;", 0x2213), one!("MinusPlus;", 0x2213),
    one!("plusdo;", 0x2214), one!("dotplus;", 0x2214),
    one!("setmn;", 0x2216), one!("setminus;", 0x2216), one!("Backslash;", 0x2216),
    one!("ssetmn;", 0x2216), one!("smallsetminus;", 0x2216),
    one!("lowast;", 0x2217),
    one!("compfn;", 0x2218), one!("SmallCircle;", 0x2218),
    one!("radic;", 0x221A), one!("Sqrt;", 0x221A),
    one!("prop;", 0x221D), one!("propto;", 0x221D), one!("Proportional;", 0x221D),
    one!("vprop;", 0x221D), one!("varpropto;", 0x221D),
    one!("infin;", 0x221E),
    one!("angrt;", 0x221F),
    one!("ang;", 0x2220), one!("angle;", 0x2220),
    one!("angmsd;", 0x2221), one!("measuredangle;", 0x2221),
    one!("angsph;", 0x2222),
    one!("mid;", 0x2223), one!("VerticalBar;", 0x2223), one!("smid;", 0x2223),
    one!("shortmid;", 0x2223),
    one!("nmid;", 0x2224), one!("NotVerticalBar;", 0x2224), one!("nsmid;", 0x2224),
    one!("nshortmid;", 0x2224),
    one!("par;", 0x2225), one!("parallel;", 0x2225),
    one!("DoubleVerticalBar;", 0x2225), one!("spar;", 0x2225),
    one!("shortparallel;", 0x2225),
    one!("npar;", 0x2226), one!("nparallel;", 0x2226),
    one!("NotDoubleVerticalBar;", 0x2226), one!("nspar;", 0x2226),
    one!("nshortparallel;", 0x2226),
    one!("and;", 0x2227), one!("wedge;", 0x2227),
    one!("or;", 0x2228), one!("vee;", 0x2228),
    one!("cap;", 0x2229), one!("cup;", 0x222A),
    one!("int;", 0x222B), one!("Integral;", 0x222B),
    one!("Int;", 0x222C),
    one!("tint;", 0x222D), one!("iiint;", 0x222D),
    one!("conint;", 0x222E), one!("oint;", 0x222E),
    one!("ContourIntegral;", 0x222E),
    one!("Conint;", 0x222F), one!("DoubleContourIntegral;", 0x222F),
    one!("Cconint;", 0x2230),
    one!("cwint;", 0x2231),
    one!("cwconint;", 0x2232), one!("ClockwiseContourIntegral;", 0x2232),
    one!("awconint;", 0x2233), one!("CounterClockwiseContourIntegral;", 0x2233),
    one!("there4;", 0x2234), one!("therefore;", 0x2234), one!("Therefore;", 0x2234),
    one!("becaus;", 0x2235), one!("because;", 0x2235), one!("Because;", 0x2235),
    one!("ratio;", 0x2236),
    one!("Colon;", 0x2237), one!("Proportion;", 0x2237),
    one!("minusd;", 0x2238), one!("dotminus;", 0x2238),
    one!("mDDot;", 0x223A),
    one!("homtht;", 0x223B),
    one!("sim;", 0x223C), one!("Tilde;", 0x223C), one!("thksim;", 0x223C),
    one!("thicksim;", 0x223C),
    one!("bsim;", 0x223D), one!("backsim;", 0x223D),
    one!("ac;", 0x223E), one!("mstpos;", 0x223E),
    one!("acd;", 0x223F),
    one!("wreath;", 0x2240), one!("VerticalTilde;", 0x2240), one!("wr;", 0x2240),
    one!("nsim;", 0x2241), one!("NotTilde;", 0x2241),
    one!("esim;", 0x2242), one!("EqualTilde;", 0x2242), one!("eqsim;", 0x2242),
    one!("sime;", 0x2243), one!("TildeEqual;", 0x2243), one!("simeq;", 0x2243),
    one!("nsime;", 0x2244), one!("nsimeq;", 0x2244), one!("NotTildeEqual;", 0x2244),
    one!("cong;", 0x2245), one!("TildeFullEqual;", 0x2245),
    one!("simne;", 0x2246),
    one!("ncong;", 0x2247), one!("NotTildeFullEqual;", 0x2247),
    one!("asymp;", 0x2248), one!("ap;", 0x2248), one!("TildeTilde;", 0x2248),
    one!("approx;", 0x2248), one!("thkap;", 0x2248), one!("thickapprox;", 0x2248),
    one!("nap;", 0x2249), one!("NotTildeTilde;", 0x2249), one!("napprox;", 0x2249),
    one!("ape;", 0x224A), one!("approxeq;", 0x224A),
    one!("apid;", 0x224B),
    one!("bcong;", 0x224C), one!("backcong;", 0x224C),
    one!("asympeq;", 0x224D), one!("CupCap;", 0x224D),
    one!("bump;", 0x224E), one!("HumpDownHump;", 0x224E), one!("Bumpeq;", 0x224E),
    one!("bumpe;", 0x224F), one!("HumpEqual;", 0x224F), one!("bumpeq;", 0x224F),
    one!("esdot;", 0x2250), one!("DotEqual;", 0x2250), one!("doteq;", 0x2250),
    one!("eDot;", 0x2251), one!("doteqdot;", 0x2251),
    one!("efDot;", 0x2252), one!("fallingdotseq;", 0x2252),
    one!("erDot;", 0x2253), one!("risingdotseq;", 0x2253),
    one!("colone;", 0x2254), one!("coloneq;", 0x2254), one!("Assign;", 0x2254),
    one!("ecolon;", 0x2255), one!("eqcolon;", 0x2255),
    one!("ecir;", 0x2256), one!("eqcirc;", 0x2256),
    one!("cire;", 0x2257), one!("circeq;", 0x2257),
    one!("wedgeq;", 0x2259), one!("veeeq;", 0x225A),
    one!("trie;", 0x225C), one!("triangleq;", 0x225C),
    one!("equest;", 0x225F), one!("questeq;", 0x225F),
    one!("ne;", 0x2260), one!("NotEqual;", 0x2260),
    one!("equiv;", 0x2261), one!("Congruent;", 0x2261),
    one!("nequiv;", 0x2262), one!("NotCongruent;", 0x2262),
    one!("le;", 0x2264), one!("leq;", 0x2264),
    one!("ge;", 0x2265), one!("GreaterEqual;", 0x2265), one!("geq;", 0x2265),
    one!("lE;", 0x2266), one!("LessFullEqual;", 0x2266), one!("leqq;", 0x2266),
    one!("gE;", 0x2267), one!("GreaterFullEqual;", 0x2267), one!("geqq;", 0x2267),
    one!("lnE;", 0x2268), one!("lneqq;", 0x2268),
    one!("gnE;", 0x2269), one!("gneqq;", 0x2269),
    one!("Lt;", 0x226A), one!("NestedLessLess;", 0x226A), one!("ll;", 0x226A),
    one!("Gt;", 0x226B), one!("NestedGreaterGreater;", 0x226B), one!("gg;", 0x226B),
    one!("twixt;", 0x226C), one!("between;", 0x226C),
    one!("NotCupCap;", 0x226D),
    one!("nlt;", 0x226E), one!("NotLess;", 0x226E), one!("nless;", 0x226E),
    one!("ngt;", 0x226F), one!("NotGreater;", 0x226F), one!("ngtr;", 0x226F),
    one!("nle;", 0x2270), one!("NotLessEqual;", 0x2270), one!("nleq;", 0x2270),
    one!("nge;", 0x2271), one!("NotGreaterEqual;", 0x2271), one!("ngeq;", 0x2271),
    one!("lsim;", 0x2272), one!("LessTilde;", 0x2272), one!("lesssim;", 0x2272),
    one!("gsim;", 0x2273), one!("gtrsim;", 0x2273), one!("GreaterTilde;", 0x2273),
    one!("nlsim;", 0x2274), one!("NotLessTilde;", 0x2274),
    one!("ngsim;", 0x2275), one!("NotGreaterTilde;", 0x2275),
    one!("lg;", 0x2276), one!("lessgtr;", 0x2276), one!("LessGreater;", 0x2276),
    one!("gl;", 0x2277), one!("gtrless;", 0x2277), one!("GreaterLess;", 0x2277),
    one!("ntlg;", 0x2278), one!("NotLessGreater;", 0x2278),
    one!("ntgl;", 0x2279), one!("NotGreaterLess;", 0x2279),
    one!("pr;", 0x227A), one!("Precedes;", 0x227A), one!("prec;", 0x227A),
    one!("sc;", 0x227B), one!("Succeeds;", 0x227B), one!("succ;", 0x227B),
    one!("prcue;", 0x227C), one!("PrecedesSlantEqual;", 0x227C),
    one!("preccurlyeq;", 0x227C),
    one!("sccue;", 0x227D), one!("SucceedsSlantEqual;", 0x227D),
    one!("succcurlyeq;", 0x227D),
    one!("prsim;", 0x227E), one!("precsim;", 0x227E), one!("PrecedesTilde;", 0x227E),
    one!("scsim;", 0x227F), one!("succsim;", 0x227F), one!("SucceedsTilde;", 0x227F),
    one!("npr;", 0x2280), one!("nprec;", 0x2280), one!("NotPrecedes;", 0x2280),
    one!("nsc;", 0x2281), one!("nsucc;", 0x2281), one!("NotSucceeds;", 0x2281),
    one!("sub;", 0x2282), one!("subset;", 0x2282),
    one!("sup;", 0x2283), one!("supset;", 0x2283), one!("Superset;", 0x2283),
    one!("nsub;", 0x2284), one!("nsup;", 0x2285),
    one!("sube;", 0x2286), one!("SubsetEqual;", 0x2286), one!("subseteq;", 0x2286),
    one!("supe;", 0x2287), one!("supseteq;", 0x2287), one!("SupersetEqual;", 0x2287),
    one!("nsube;", 0x2288), one!("nsubseteq;", 0x2288),
    one!("NotSubsetEqual;", 0x2288),
    one!("nsupe;", 0x2289), one!("nsupseteq;", 0x2289),
    one!("NotSupersetEqual;", 0x2289),
    one!("subne;", 0x228A), one!("subsetneq;", 0x228A),
    one!("supne;", 0x228B), one!("supsetneq;", 0x228B),
    one!("cupdot;", 0x228D),
    one!("uplus;", 0x228E), one!("UnionPlus;", 0x228E),
    one!("sqsub;", 0x228F), one!("SquareSubset;", 0x228F),
    one!("sqsup;", 0x2290), one!("SquareSuperset;", 0x2290),
    one!("sqsube;", 0x2291), one!("SquareSubsetEqual;", 0x2291),
    one!("sqsubseteq;", 0x2291),
    one!("sqsupe;", 0x2292), one!("SquareSupersetEqual;", 0x2292),
    one!("sqsupseteq;", 0x2292),
    one!("sqcap;", 0x2293), one!("SquareIntersection;", 0x2293),
    one!("sqcup;", 0x2294), one!("SquareUnion;", 0x2294),
    one!("oplus;", 0x2295), one!("CirclePlus;", 0x2295),
    one!("ominus;", 0x2296), one!("CircleMinus;", 0x2296),
    one!("otimes;", 0x2297), one!("CircleTimes;", 0x2297),
    one!("osol;", 0x2298),
    one!("odot;", 0x2299), one!("CircleDot;", 0x2299),
    one!("ocir;", 0x229A), one!("circledcirc;", 0x229A),
    one!("oast;", 0x229B), one!("circledast;", 0x229B),
    one!("odash;", 0x229D), one!("circleddash;", 0x229D),
    one!("plusb;", 0x229E), one!("boxplus;", 0x229E),
    one!("minusb;", 0x229F), one!("boxminus;", 0x229F),
    one!("timesb;", 0x22A0), one!("boxtimes;", 0x22A0),
    one!("sdotb;", 0x22A1), one!("dotsquare;", 0x22A1),
    one!("vdash;", 0x22A2), one!("RightTee;", 0x22A2),
    one!("dashv;", 0x22A3), one!("LeftTee;", 0x22A3),
    one!("top;", 0x22A4), one!("DownTee;", 0x22A4),
    one!("bottom;", 0x22A5), one!("bot;", 0x22A5), one!("perp;", 0x22A5),
    one!("UpTee;", 0x22A5),
    one!("models;", 0x22A7),
    one!("vDash;", 0x22A8), one!("DoubleRightTee;", 0x22A8),
    one!("Vdash;", 0x22A9), one!("Vvdash;", 0x22AA), one!("VDash;", 0x22AB),
    one!("nvdash;", 0x22AC), one!("nvDash;", 0x22AD),
    one!("nVdash;", 0x22AE), one!("nVDash;", 0x22AF),
    one!("prurel;", 0x22B0),
    one!("vltri;", 0x22B2), one!("vartriangleleft;", 0x22B2),
    one!("LeftTriangle;", 0x22B2),
    one!("vrtri;", 0x22B3), one!("vartriangleright;", 0x22B3),
    one!("RightTriangle;", 0x22B3),
    one!("ltrie;", 0x22B4), one!("trianglelefteq;", 0x22B4),
    one!("LeftTriangleEqual;", 0x22B4),
    one!("rtrie;", 0x22B5), one!("trianglerighteq;", 0x22B5),
    one!("RightTriangleEqual;", 0x22B5),
    one!("origof;", 0x22B6), one!("imof;", 0x22B7),
    one!("mumap;", 0x22B8), one!("multimap;", 0x22B8),
    one!("hercon;", 0x22B9),
    one!("intcal;", 0x22BA), one!("intercal;", 0x22BA),
    one!("veebar;", 0x22BB), one!("barvee;", 0x22BD),
    one!("angrtvb;", 0x22BE), one!("lrtri;", 0x22BF),
    one!("xwedge;", 0x22C0), one!("Wedge;", 0x22C0), one!("bigwedge;", 0x22C0),
    one!("xvee;", 0x22C1), one!("Vee;", 0x22C1), one!("bigvee;", 0x22C1),
    one!("xcap;", 0x22C2), one!("Intersection;", 0x22C2), one!("bigcap;", 0x22C2),
    one!("xcup;", 0x22C3), one!("Union;", 0x22C3), one!("bigcup;", 0x22C3),
    one!("diam;", 0x22C4), one!("Diamond;", 0x22C4), one!("diamond;", 0x22C4),
    one!("sdot;", 0x22C5),
    one!("sstarf;", 0x22C6), one!("Star;", 0x22C6),
    one!("divonx;", 0x22C7), one!("divideontimes;", 0x22C7),
    one!("bowtie;", 0x22C8),
    one!("ltimes;", 0x22C9), one!("rtimes;", 0x22CA),
    one!("lthree;", 0x22CB), one!("leftthreetimes;", 0x22CB),
    one!("rthree;", 0x22CC), one!("rightthreetimes;", 0x22CC),
    one!("bsime;", 0x22CD), one!("backsimeq;", 0x22CD),
    one!("cuvee;", 0x22CE), one!("curlyvee;", 0x22CE),
    one!("cuwed;", 0x22CF), one!("curlywedge;", 0x22CF),
    one!("Sub;", 0x22D0), one!("Subset;", 0x22D0),
    one!("Sup;", 0x22D1), one!("Supset;", 0x22D1),
    one!("Cap;", 0x22D2), one!("Cup;", 0x22D3),
    one!("fork;", 0x22D4), one!("pitchfork;", 0x22D4),
    one!("epar;", 0x22D5),
    one!("ltdot;", 0x22D6), one!("lessdot;", 0x22D6),
    one!("gtdot;", 0x22D7), one!("gtrdot;", 0x22D7),
    one!("Ll;", 0x22D8),
    one!("Gg;", 0x22D9), one!("ggg;", 0x22D9),
    one!("leg;", 0x22DA), one!("LessEqualGreater;", 0x22DA),
    one!("lesseqgtr;", 0x22DA),
    one!("gel;", 0x22DB), one!("gtreqless;", 0x22DB),
    one!("GreaterEqualLess;", 0x22DB),
    one!("cuepr;", 0x22DE), one!("curlyeqprec;", 0x22DE),
    one!("cuesc;", 0x22DF), one!("curlyeqsucc;", 0x22DF),
    one!("nprcue;", 0x22E0), one!("NotPrecedesSlantEqual;", 0x22E0),
    one!("nsccue;", 0x22E1), one!("NotSucceedsSlantEqual;", 0x22E1),
    one!("nsqsube;", 0x22E2), one!("NotSquareSubsetEqual;", 0x22E2),
    one!("nsqsupe;", 0x22E3), one!("NotSquareSupersetEqual;", 0x22E3),
    one!("lnsim;", 0x22E6), one!("gnsim;", 0x22E7),
    one!("prnsim;", 0x22E8), one!("precnsim;", 0x22E8),
    one!("scnsim;", 0x22E9), one!("succnsim;", 0x22E9),
    one!("nltri;", 0x22EA), one!("ntriangleleft;", 0x22EA),
    one!("NotLeftTriangle;", 0x22EA),
    one!("nrtri;", 0x22EB), one!("ntriangleright;", 0x22EB),
    one!("NotRightTriangle;", 0x22EB),
    one!("nltrie;", 0x22EC), one!("ntrianglelefteq;", 0x22EC),
    one!("NotLeftTriangleEqual;", 0x22EC),
    one!("nrtrie;", 0x22ED), one!("ntrianglerighteq;", 0x22ED),
    one!("NotRightTriangleEqual;", 0x22ED),
    one!("vellip;", 0x22EE), one!("ctdot;", 0x22EF),
    one!("utdot;", 0x22F0), one!("dtdot;", 0x22F1),
    one!("disin;", 0x22F2), one!("isinsv;", 0x22F3), one!("isins;", 0x22F4),
    one!("isindot;", 0x22F5), one!("notinvc;", 0x22F6), one!("notinvb;", 0x22F7),
    one!("isinE;", 0x22F9),
    one!("nisd;", 0x22FA), one!("xnis;", 0x22FB), one!("nis;", 0x22FC),
    one!("notnivc;", 0x22FD), one!("notnivb;", 0x22FE),

    // Miscellaneous technical.
    one!("lceil;", 0x2308), one!("LeftCeiling;", 0x2308),
    one!("rceil;", 0x2309), one!("RightCeiling;", 0x2309),
    one!("lfloor;", 0x230A), one!("LeftFloor;", 0x230A),
    one!("rfloor;", 0x230B), one!("RightFloor;", 0x230B),
    one!("drcrop;", 0x230C), one!("dlcrop;", 0x230D),
    one!("urcrop;", 0x230E), one!("ulcrop;", 0x230F),
    one!("bnot;", 0x2310), one!("profline;", 0x2312), one!("profsurf;", 0x2313),
    one!("telrec;", 0x2315), one!("target;", 0x2316),
    one!("ulcorn;", 0x231C), one!("ulcorner;", 0x231C),
    one!("urcorn;", 0x231D), one!("urcorner;", 0x231D),
    one!("dlcorn;", 0x231E), one!("llcorner;", 0x231E),
    one!("drcorn;", 0x231F), one!("lrcorner;", 0x231F),
    one!("frown;", 0x2322), one!("sfrown;", 0x2322),
    one!("smile;", 0x2323), one!("ssmile;", 0x2323),
    one!("cylcty;", 0x232D), one!("profalar;", 0x232E),
    one!("topbot;", 0x2336), one!("ovbar;", 0x233D), one!("solbar;", 0x233F),
    one!("angzarr;", 0x237C),
    one!("lmoust;", 0x23B0), one!("lmoustache;", 0x23B0),
    one!("rmoust;", 0x23B1), one!("rmoustache;", 0x23B1),
    one!("tbrk;", 0x23B4), one!("OverBracket;", 0x23B4),
    one!("bbrk;", 0x23B5), one!("UnderBracket;", 0x23B5),
    one!("bbrktbrk;", 0x23B6),
    one!("OverParenthesis;", 0x23DC), one!("UnderParenthesis;", 0x23DD),
    one!("OverBrace;", 0x23DE), one!("UnderBrace;", 0x23DF),
    one!("trpezium;", 0x23E2), one!("elinters;", 0x23E7),
    one!("blank;", 0x2423),
    one!("oS;", 0x24C8), one!("circledS;", 0x24C8),

    // Box drawing and blocks.
    one!("boxh;", 0x2500), one!("HorizontalLine;", 0x2500),
    one!("boxv;", 0x2502),
    one!("boxdr;", 0x250C), one!("boxdl;", 0x2510),
    one!("boxur;", 0x2514), one!("boxul;", 0x2518),
    one!("boxvr;", 0x251C), one!("boxvl;", 0x2524),
    one!("boxhd;", 0x252C), one!("boxhu;", 0x2534), one!("boxvh;", 0x253C),
    one!("boxH;", 0x2550), one!("boxV;", 0x2551),
    one!("boxHd;", 0x2564), one!("boxHu;", 0x2567),
    one!("boxVr;", 0x255F), one!("boxVl;", 0x2562),
    one!("boxVh;", 0x256B), one!("boxVH;", 0x256C),
    one!("uhblk;", 0x2580), one!("lhblk;", 0x2584), one!("block;", 0x2588),
    one!("blk14;", 0x2591), one!("blk12;", 0x2592), one!("blk34;", 0x2593),

    // Geometric shapes.
    one!("squ;", 0x25A1), one!("square;", 0x25A1), one!("Square;", 0x25A1),
    one!("squf;", 0x25AA), one!("squarf;", 0x25AA), one!("blacksquare;", 0x25AA),
    one!("FilledVerySmallSquare;", 0x25AA),
    one!("EmptyVerySmallSquare;", 0x25AB),
    one!("rect;", 0x25AD), one!("marker;", 0x25AE), one!("fltns;", 0x25B1),
    one!("xutri;", 0x25B3), one!("bigtriangleup;", 0x25B3),
    one!("utrif;", 0x25B4), one!("blacktriangle;", 0x25B4),
    one!("utri;", 0x25B5), one!("triangle;", 0x25B5),
    one!("rtrif;", 0x25B8), one!("blacktriangleright;", 0x25B8),
    one!("rtri;", 0x25B9), one!("triangleright;", 0x25B9),
    one!("xdtri;", 0x25BD), one!("bigtriangledown;", 0x25BD),
    one!("dtrif;", 0x25BE), one!("blacktriangledown;", 0x25BE),
    one!("dtri;", 0x25BF), one!("triangledown;", 0x25BF),
    one!("ltrif;", 0x25C2), one!("blacktriangleleft;", 0x25C2),
    one!("ltri;", 0x25C3), one!("triangleleft;", 0x25C3),
    one!("loz;", 0x25CA), one!("lozenge;", 0x25CA),
    one!("cir;", 0x25CB),
    one!("tridot;", 0x25EC),
    one!("xcirc;", 0x25EF), one!("bigcirc;", 0x25EF),
    one!("ultri;", 0x25F8), one!("urtri;", 0x25F9), one!("lltri;", 0x25FA),
    one!("EmptySmallSquare;", 0x25FB), one!("FilledSmallSquare;", 0x25FC),

    // Miscellaneous symbols.
    one!("starf;", 0x2605), one!("bigstar;", 0x2605), one!("star;", 0x2606),
    one!("phone;", 0x260E),
    one!("female;", 0x2640), one!("male;", 0x2642),
    one!("spades;", 0x2660), one!("spadesuit;", 0x2660),
    one!("clubs;", 0x2663), one!("clubsuit;", 0x2663),
    one!("hearts;", 0x2665), one!("heartsuit;", 0x2665),
    one!("diams;", 0x2666), one!("diamondsuit;", 0x2666),
    one!("sung;", 0x266A),
    one!("flat;", 0x266D), one!("natur;", 0x266E), one!("natural;", 0x266E),
    one!("sharp;", 0x266F),
    one!("check;", 0x2713), one!("checkmark;", 0x2713),
    one!("cross;", 0x2717),
    one!("malt;", 0x2720), one!("maltese;", 0x2720),
    one!("sext;", 0x2736),
    one!("VerticalSeparator;", 0x2758),
    one!("lbbrk;", 0x2772), one!("rbbrk;", 0x2773),

    // Mathematical brackets and long arrows.
    one!("lobrk;", 0x27E6), one!("LeftDoubleBracket;", 0x27E6),
    one!("robrk;", 0x27E7), one!("RightDoubleBracket;", 0x27E7),
    one!("lang;", 0x27E8), one!("LeftAngleBracket;", 0x27E8),
    one!("langle;", 0x27E8),
    one!("rang;", 0x27E9), one!("RightAngleBracket;", 0x27E9),
    one!("rangle;", 0x27E9),
    one!("Lang;", 0x27EA), one!("Rang;", 0x27EB),
    one!("loang;", 0x27EC), one!("roang;", 0x27ED),
    one!("xlarr;", 0x27F5), one!("longleftarrow;", 0x27F5),
    one!("LongLeftArrow;", 0x27F5),
    one!("xrarr;", 0x27F6), one!("longrightarrow;", 0x27F6),
    one!("LongRightArrow;", 0x27F6),
    one!("xharr;", 0x27F7), one!("longleftrightarrow;", 0x27F7),
    one!("LongLeftRightArrow;", 0x27F7),
    one!("xlArr;", 0x27F8), one!("Longleftarrow;", 0x27F8),
    one!("DoubleLongLeftArrow;", 0x27F8),
    one!("xrArr;", 0x27F9), one!("Longrightarrow;", 0x27F9),
    one!("DoubleLongRightArrow;", 0x27F9),
    one!("xhArr;", 0x27FA), one!("Longleftrightarrow;", 0x27FA),
    one!("DoubleLongLeftRightArrow;", 0x27FA),
    one!("xmap;", 0x27FC), one!("longmapsto;", 0x27FC),
    one!("dzigrarr;", 0x27FF),
    one!("nwarhk;", 0x2923), one!("nearhk;", 0x2924),
    one!("searhk;", 0x2925), one!("hksearow;", 0x2925),
    one!("swarhk;", 0x2926), one!("hkswarow;", 0x2926),
    one!("nwnear;", 0x2927),
    one!("nesear;", 0x2928), one!("toea;", 0x2928),
    one!("seswar;", 0x2929), one!("tosa;", 0x2929),
    one!("swnwar;", 0x292A),
    one!("rarrc;", 0x2933),
    one!("cudarrr;", 0x2935), one!("cudarrl;", 0x2936),
    one!("lozf;", 0x29EB), one!("blacklozenge;", 0x29EB),

    // Supplemental mathematical operators.
    one!("xodot;", 0x2A00), one!("bigodot;", 0x2A00),
    one!("xoplus;", 0x2A01), one!("bigoplus;", 0x2A01),
    one!("xotime;", 0x2A02), one!("bigotimes;", 0x2A02),
    one!("xuplus;", 0x2A04), one!("biguplus;", 0x2A04),
    one!("xsqcup;", 0x2A06), one!("bigsqcup;", 0x2A06),
    one!("qint;", 0x2A0C), one!("iiiint;", 0x2A0C),
    one!("fpartint;", 0x2A0D),
    one!("Cross;", 0x2A2F),
    one!("amalg;", 0x2A3F),
    one!("iprod;", 0x2A3C), one!("intprod;", 0x2A3C),
    one!("And;", 0x2A53), one!("Or;", 0x2A54),
    one!("andand;", 0x2A55), one!("oror;", 0x2A56),
    one!("les;", 0x2A7D), one!("LessSlantEqual;", 0x2A7D), one!("leqslant;", 0x2A7D),
    one!("ges;", 0x2A7E), one!("GreaterSlantEqual;", 0x2A7E),
    one!("geqslant;", 0x2A7E),
    one!("lap;", 0x2A85), one!("lessapprox;", 0x2A85),
    one!("gap;", 0x2A86), one!("gtrapprox;", 0x2A86),
    one!("lne;", 0x2A87), one!("lneq;", 0x2A87),
    one!("gne;", 0x2A88), one!("gneq;", 0x2A88),
    one!("lnap;", 0x2A89), one!("lnapprox;", 0x2A89),
    one!("gnap;", 0x2A8A), one!("gnapprox;", 0x2A8A),
    one!("lEg;", 0x2A8B), one!("lesseqqgtr;", 0x2A8B),
    one!("gEl;", 0x2A8C), one!("gtreqqless;", 0x2A8C),
    one!("els;", 0x2A95), one!("eqslantless;", 0x2A95),
    one!("egs;", 0x2A96), one!("eqslantgtr;", 0x2A96),
    one!("smt;", 0x2AAA), one!("lat;", 0x2AAB),
    one!("smte;", 0x2AAC), one!("late;", 0x2AAD),
    one!("pre;", 0x2AAF), one!("PrecedesEqual;", 0x2AAF), one!("preceq;", 0x2AAF),
    one!("sce;", 0x2AB0), one!("SucceedsEqual;", 0x2AB0), one!("succeq;", 0x2AB0),
    one!("prE;", 0x2AB3), one!("scE;", 0x2AB4),
    one!("prnE;", 0x2AB5), one!("precneqq;", 0x2AB5),
    one!("scnE;", 0x2AB6), one!("succneqq;", 0x2AB6),
    one!("prap;", 0x2AB7), one!("precapprox;", 0x2AB7),
    one!("scap;", 0x2AB8), one!("succapprox;", 0x2AB8),
    one!("prnap;", 0x2AB9), one!("precnapprox;", 0x2AB9),
    one!("scnap;", 0x2ABA), one!("succnapprox;", 0x2ABA),
    one!("subE;", 0x2AC5), one!("subseteqq;", 0x2AC5),
    one!("supE;", 0x2AC6), one!("supseteqq;", 0x2AC6),
    one!("subnE;", 0x2ACB), one!("subsetneqq;", 0x2ACB),
    one!("supnE;", 0x2ACC), one!("supsetneqq;", 0x2ACC),

    // Alphabetic presentation forms.
    one!("fflig;", 0xFB00), one!("filig;", 0xFB01), one!("fllig;", 0xFB02),
    one!("ffilig;", 0xFB03), one!("ffllig;", 0xFB04),

    // Script letters.
    one!("Ascr;", 0x1D49C), one!("Cscr;", 0x1D49E), one!("Dscr;", 0x1D49F),
    one!("Gscr;", 0x1D4A2), one!("Jscr;", 0x1D4A5), one!("Kscr;", 0x1D4A6),
    one!("Nscr;", 0x1D4A9), one!("Oscr;", 0x1D4AA), one!("Pscr;", 0x1D4AB),
    one!("Qscr;", 0x1D4AC), one!("Sscr;", 0x1D4AE), one!("Tscr;", 0x1D4AF),
    one!("Uscr;", 0x1D4B0), one!("Vscr;", 0x1D4B1), one!("Wscr;", 0x1D4B2),
    one!("Xscr;", 0x1D4B3), one!("Yscr;", 0x1D4B4), one!("Zscr;", 0x1D4B5),
    one!("ascr;", 0x1D4B6), one!("bscr;", 0x1D4B7), one!("cscr;", 0x1D4B8),
    one!("dscr;", 0x1D4B9), one!("fscr;", 0x1D4BB), one!("hscr;", 0x1D4BD),
    one!("iscr;", 0x1D4BE), one!("jscr;", 0x1D4BF), one!("kscr;", 0x1D4C0),
    one!("lscr;", 0x1D4C1), one!("mscr;", 0x1D4C2), one!("nscr;", 0x1D4C3),
    one!("pscr;", 0x1D4C5), one!("qscr;", 0x1D4C6), one!("rscr;", 0x1D4C7),
    one!("sscr;", 0x1D4C8), one!("tscr;", 0x1D4C9), one!("uscr;", 0x1D4CA),
    one!("vscr;", 0x1D4CB), one!("wscr;", 0x1D4CC), one!("xscr;", 0x1D4CD),
    one!("yscr;", 0x1D4CE), one!("zscr;", 0x1D4CF),

    // Fraktur letters.
    one!("Afr;", 0x1D504), one!("Bfr;", 0x1D505), one!("Dfr;", 0x1D507),
    one!("Efr;", 0x1D508), one!("Ffr;", 0x1D509), one!("Gfr;", 0x1D50A),
    one!("Jfr;", 0x1D50D), one!("Kfr;", 0x1D50E), one!("Lfr;", 0x1D50F),
    one!("Mfr;", 0x1D510), one!("Nfr;", 0x1D511), one!("Ofr;", 0x1D512),
    one!("Pfr;", 0x1D513), one!("Qfr;", 0x1D514), one!("Sfr;", 0x1D516),
    one!("Tfr;", 0x1D517), one!("Ufr;", 0x1D518), one!("Vfr;", 0x1D519),
    one!("Wfr;", 0x1D51A), one!("Xfr;", 0x1D51B), one!("Yfr;", 0x1D51C),
    one!("afr;", 0x1D51E), one!("bfr;", 0x1D51F), one!("cfr;", 0x1D520),
    one!("dfr;", 0x1D521), one!("efr;", 0x1D522), one!("ffr;", 0x1D523),
    one!("gfr;", 0x1D524), one!("hfr;", 0x1D525), one!("ifr;", 0x1D526),
    one!("jfr;", 0x1D527), one!("kfr;", 0x1D528), one!("lfr;", 0x1D529),
    one!("mfr;", 0x1D52A), one!("nfr;", 0x1D52B), one!("ofr;", 0x1D52C),
    one!("pfr;", 0x1D52D), one!("qfr;", 0x1D52E), one!("rfr;", 0x1D52F),
    one!("sfr;", 0x1D530), one!("tfr;", 0x1D531), one!("ufr;", 0x1D532),
    one!("vfr;", 0x1D533), one!("wfr;", 0x1D534), one!("xfr;", 0x1D535),
    one!("yfr;", 0x1D536), one!("zfr;", 0x1D537),

    // Double-struck letters.
    one!("Aopf;", 0x1D538), one!("Bopf;", 0x1D539), one!("Dopf;", 0x1D53B),
    one!("Eopf;", 0x1D53C), one!("Fopf;", 0x1D53D), one!("Gopf;", 0x1D53E),
    one!("Iopf;", 0x1D540), one!("Jopf;", 0x1D541), one!("Kopf;", 0x1D542),
    one!("Lopf;", 0x1D543), one!("Mopf;", 0x1D544), one!("Oopf;", 0x1D546),
    one!("Sopf;", 0x1D54A), one!("Topf;", 0x1D54B), one!("Uopf;", 0x1D54C),
    one!("Vopf;", 0x1D54D), one!("Wopf;", 0x1D54E), one!("Xopf;", 0x1D54F),
    one!("Yopf;", 0x1D550),
    one!("aopf;", 0x1D552), one!("bopf;", 0x1D553), one!("copf;", 0x1D554),
    one!("dopf;", 0x1D555), one!("eopf;", 0x1D556), one!("fopf;", 0x1D557),
    one!("gopf;", 0x1D558), one!("hopf;", 0x1D559), one!("iopf;", 0x1D55A),
    one!("jopf;", 0x1D55B), one!("kopf;", 0x1D55C), one!("lopf;", 0x1D55D),
    one!("mopf;", 0x1D55E), one!("nopf;", 0x1D55F), one!("oopf;", 0x1D560),
    one!("popf;", 0x1D561), one!("qopf;", 0x1D562), one!("ropf;", 0x1D563),
    one!("sopf;", 0x1D564), one!("topf;", 0x1D565), one!("uopf;", 0x1D566),
    one!("vopf;", 0x1D567), one!("wopf;", 0x1D568), one!("xopf;", 0x1D569),
    one!("yopf;", 0x1D56A), one!("zopf;", 0x1D56B),

    // Two-character references.
    two!("fjlig;", 0x66, 0x6A),
    two!("ThickSpace;", 0x205F, 0x200A),
    two!("bne;", 0x3D, 0x20E5),
    two!("bnequiv;", 0x2261, 0x20E5),
    two!("caps;", 0x2229, 0xFE00),
    two!("cups;", 0x222A, 0xFE00),
    two!("acE;", 0x223E, 0x333),
    two!("race;", 0x223D, 0x331),
    two!("lates;", 0x2AAD, 0xFE00),
    two!("smtes;", 0x2AAC, 0xFE00),
    two!("sqcaps;", 0x2293, 0xFE00),
    two!("sqcups;", 0x2294, 0xFE00),
    two!("gesl;", 0x22DB, 0xFE00),
    two!("lesg;", 0x22DA, 0xFE00),
    two!("gvertneqq;", 0x2269, 0xFE00), two!("gvnE;", 0x2269, 0xFE00),
    two!("lvertneqq;", 0x2268, 0xFE00), two!("lvnE;", 0x2268, 0xFE00),
    two!("nang;", 0x2220, 0x20D2),
    two!("napE;", 0x2A70, 0x338),
    two!("napid;", 0x224B, 0x338),
    two!("nbump;", 0x224E, 0x338), two!("NotHumpDownHump;", 0x224E, 0x338),
    two!("nbumpe;", 0x224F, 0x338), two!("NotHumpEqual;", 0x224F, 0x338),
    two!("ncongdot;", 0x2A6D, 0x338),
    two!("nedot;", 0x2250, 0x338),
    two!("nesim;", 0x2242, 0x338), two!("NotEqualTilde;", 0x2242, 0x338),
    two!("ngE;", 0x2267, 0x338), two!("ngeqq;", 0x2267, 0x338),
    two!("NotGreaterFullEqual;", 0x2267, 0x338),
    two!("ngeqslant;", 0x2A7E, 0x338), two!("nges;", 0x2A7E, 0x338),
    two!("NotGreaterSlantEqual;", 0x2A7E, 0x338),
    two!("nGg;", 0x22D9, 0x338),
    two!("nGt;", 0x226B, 0x20D2),
    two!("nGtv;", 0x226B, 0x338), two!("NotGreaterGreater;", 0x226B, 0x338),
    two!("nlE;", 0x2266, 0x338), two!("nleqq;", 0x2266, 0x338),
    two!("NotLessFullEqual;", 0x2266, 0x338),
    two!("nleqslant;", 0x2A7D, 0x338), two!("nles;", 0x2A7D, 0x338),
    two!("NotLessSlantEqual;", 0x2A7D, 0x338),
    two!("nLl;", 0x22D8, 0x338),
    two!("nLt;", 0x226A, 0x20D2),
    two!("nLtv;", 0x226A, 0x338), two!("NotLessLess;", 0x226A, 0x338),
    two!("notindot;", 0x22F5, 0x338),
    two!("notinE;", 0x22F9, 0x338),
    two!("nparsl;", 0x2AFD, 0x20E5),
    two!("npart;", 0x2202, 0x338),
    two!("npre;", 0x2AAF, 0x338), two!("npreceq;", 0x2AAF, 0x338),
    two!("NotPrecedesEqual;", 0x2AAF, 0x338),
    two!("nrarrc;", 0x2933, 0x338),
    two!("nrarrw;", 0x219D, 0x338),
    two!("nsce;", 0x2AB0, 0x338), two!("nsucceq;", 0x2AB0, 0x338),
    two!("NotSucceedsEqual;", 0x2AB0, 0x338),
    two!("NotSucceedsTilde;", 0x227F, 0x338),
    two!("nsubE;", 0x2AC5, 0x338), two!("nsubseteqq;", 0x2AC5, 0x338),
    two!("nsubset;", 0x2282, 0x20D2), two!("NotSubset;", 0x2282, 0x20D2),
    two!("nsupE;", 0x2AC6, 0x338), two!("nsupseteqq;", 0x2AC6, 0x338),
    two!("nsupset;", 0x2283, 0x20D2), two!("NotSuperset;", 0x2283, 0x20D2),
    two!("nvap;", 0x224D, 0x20D2),
    two!("nvge;", 0x2265, 0x20D2), two!("nvgt;", 0x3E, 0x20D2),
    two!("nvle;", 0x2264, 0x20D2), two!("nvlt;", 0x3C, 0x20D2),
    two!("nvltrie;", 0x22B4, 0x20D2), two!("nvrtrie;", 0x22B5, 0x20D2),
    two!("nvsim;", 0x223C, 0x20D2),
    two!("NotNestedGreaterGreater;", 0x2AA2, 0x338),
    two!("NotNestedLessLess;", 0x2AA1, 0x338),
    two!("NotSquareSubset;", 0x228F, 0x338),
    two!("NotSquareSuperset;", 0x2290, 0x338),
    two!("varsubsetneq;", 0x228A, 0xFE00), two!("vsubne;", 0x228A, 0xFE00),
    two!("varsubsetneqq;", 0x2ACB, 0xFE00), two!("vsubnE;", 0x2ACB, 0xFE00),
    two!("varsupsetneq;", 0x228B, 0xFE00), two!("vsupne;", 0x228B, 0xFE00),
    two!("varsupsetneqq;", 0x2ACC, 0xFE00), two!("vsupnE;", 0x2ACC, 0xFE00),
];

#[cfg(test)]
mod test {
    use super::{named_entity, named_entity_prefix, C1_REPLACEMENTS};

    #[test]
    fn exact_lookup() {
        assert_eq!(named_entity("amp;"), Some([0x26, 0]));
        assert_eq!(named_entity("notin;"), Some([0x2209, 0]));
        assert_eq!(named_entity("not"), Some([0xAC, 0]));
        assert_eq!(named_entity("not;"), Some([0xAC, 0]));
        assert_eq!(named_entity("bogus;"), None);
        assert_eq!(named_entity(""), None);
    }

    #[test]
    fn prefix_lookup() {
        assert!(named_entity_prefix("n"));
        assert!(named_entity_prefix("noti"));
        assert!(named_entity_prefix("notin"));
        assert!(named_entity_prefix("notin;"));
        assert!(!named_entity_prefix("notit"));
        assert!(!named_entity_prefix("zzz"));
    }

    #[test]
    fn two_character_references() {
        assert_eq!(named_entity("NotEqualTilde;"), Some([0x2242, 0x338]));
        assert_eq!(named_entity("fjlig;"), Some([0x66, 0x6A]));
    }

    #[test]
    fn c1_table() {
        // 0x80 is the euro sign, 0x81 has no replacement.
        assert_eq!(C1_REPLACEMENTS[0], Some('\u{20ac}'));
        assert_eq!(C1_REPLACEMENTS[1], None);
        assert_eq!(C1_REPLACEMENTS[0x9F - 0x80], Some('\u{0178}'));
    }

    #[test]
    fn no_duplicate_names() {
        // Forces the lazy sort, which debug_asserts uniqueness.
        assert!(named_entity("aacute;").is_some());
    }
}
