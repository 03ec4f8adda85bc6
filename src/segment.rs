//! Token segments and their creation-time quote classification.

use bitflags::bitflags;

use crate::arena::SegmentId;

/// Lexical kind of a token segment.
///
/// The lexer produces far more token types than the renderers care about;
/// everything without special spacing or quoting behavior arrives as
/// [`TokenKind::Bare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A quoted string literal. The surrounding quotes are stripped and the
    /// interior escape-decoded when the segment is created.
    Quoted,
    /// An XPath axis name (`child`, `ancestor-or-self`, ...); never
    /// followed by a separator space.
    AxisName,
    /// The `::` axis operator; never followed by a separator space.
    DoubleColon,
    /// The `...` sequence operator; exempt from the decimal-point spacing
    /// rule, so `1 ... 10` keeps its spaces.
    Ellipsis,
    /// The `_` concatenation operator; spacing around it is never trimmed.
    Underscore,
    /// The `;` statement terminator; produces no segment at all.
    StatementEnd,
    /// Any other token, rendered uniformly.
    Bare,
}

bitflags! {
    /// Which quote characters appear in a segment's text.
    ///
    /// Computed once when the segment is created and consulted by the
    /// quote transform to pick a wrapping quote for string literals.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct QuoteFlags: u8 {
        /// The text contains at least one `'`.
        const SINGLE = 0b0001;
        /// The text contains at least one `"`.
        const DOUBLE = 0b0010;
        /// The text contains both kinds, so no single wrapping quote can
        /// hold it as an XPath 1.0 literal.
        const MIXED = 0b0100;
    }
}

impl QuoteFlags {
    /// Scan `text` for quote characters in a single pass.
    ///
    /// `MIXED` is set the moment a quote differs from the previous one
    /// seen, and implies both `SINGLE` and `DOUBLE`.
    pub fn scan(text: &str) -> Self {
        let mut flags = QuoteFlags::empty();
        let mut last_quote = None;
        for ch in text.chars() {
            match ch {
                '\'' => flags |= QuoteFlags::SINGLE,
                '"' => flags |= QuoteFlags::DOUBLE,
                _ => continue,
            }
            if last_quote.is_some_and(|prev| prev != ch) {
                return QuoteFlags::all();
            }
            last_quote = Some(ch);
        }
        flags
    }
}

/// One immutable token segment.
///
/// Segments live in a [`SegmentArena`](crate::SegmentArena) and refer to
/// each other by [`SegmentId`]. `next` strings the tokens of a single
/// expression together; `group` points at the head of the following
/// expression in a concatenation list and is only ever set on chain heads.
#[derive(Debug)]
pub struct Segment {
    text: Box<str>,
    kind: TokenKind,
    quote_flags: QuoteFlags,
    pub(crate) next: Option<SegmentId>,
    pub(crate) group: Option<SegmentId>,
}

impl Segment {
    pub(crate) fn new(text: Box<str>, kind: TokenKind) -> Self {
        let quote_flags = QuoteFlags::scan(&text);
        Segment {
            text,
            kind,
            quote_flags,
            next: None,
            group: None,
        }
    }

    /// The decoded token text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The lexical kind recorded at creation.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Quote characters present in [`text`](Self::text).
    pub fn quote_flags(&self) -> QuoteFlags {
        self.quote_flags
    }

    /// The next segment of the same expression, if any.
    pub fn next(&self) -> Option<SegmentId> {
        self.next
    }

    /// The head of the next expression in a concatenation list, if any.
    pub fn group(&self) -> Option<SegmentId> {
        self.group
    }
}
