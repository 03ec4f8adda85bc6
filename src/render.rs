//! Rendering segment chains into XPath expression text.
//!
//! All renderers share one engine: [`measure`] computes a hard upper
//! bound for the output size, and `render_into` writes segments separated
//! by single spaces, deleting the space again where a token pair binds
//! tightly (`foo (x)` comes out as `foo(x)`, `goo [5]` as `goo[5]`).
//! [`render_concat`] and [`render_avt`] hand the engine a buffer that
//! already holds prefix text, so every position rule works relative to
//! the start of the current expression's region and never looks behind
//! it.

use bitflags::bitflags;
use log::trace;

use crate::arena::{SegmentArena, SegmentId};
use crate::err::{RenderError, Result};
use crate::segment::{QuoteFlags, Segment, TokenKind};

bitflags! {
    /// Behavior toggles for the renderers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RenderFlags: u8 {
        /// Wrap `Quoted` segments in quote characters, picking the kind
        /// that does not collide with the text.
        const QUOTES = 0b0001;
        /// Double literal `{`/`}` in `Quoted` segments (attribute value
        /// template context).
        const BRACES = 0b0010;
    }
}

/// Characters that bind tightly to their neighbors; a separator space
/// never survives next to one of these.
fn binds_tight(b: u8) -> bool {
    matches!(b, b'@' | b'/' | b'(' | b')' | b'[' | b']')
}

/// Compute an upper bound for the rendered length of the chain at `root`.
///
/// Per segment: the text length, plus one separator byte unless the kind
/// never takes one. Under [`RenderFlags::QUOTES`] a `Quoted` segment
/// budgets two wrapping quotes plus one byte per embedded `"`; under
/// [`RenderFlags::BRACES`] it budgets one byte per literal brace. One
/// extra byte of slack is always included, so the renderers can assert
/// `written < measured`.
pub fn measure(arena: &SegmentArena, root: SegmentId, flags: RenderFlags) -> Result<usize> {
    let mut len = 0;
    for segment in arena.chain_iter(root) {
        len += segment.text().len();
        if !matches!(segment.kind(), TokenKind::AxisName | TokenKind::DoubleColon) {
            len += 1;
        }
        if segment.kind() == TokenKind::Quoted {
            if flags.contains(RenderFlags::QUOTES) {
                if segment.quote_flags().contains(QuoteFlags::MIXED) {
                    return Err(RenderError::MixedQuotes {
                        text: segment.text().to_owned(),
                    });
                }
                // Wrapper pair plus slack for embedded double quotes; the
                // quote transform switches wrappers instead of escaping.
                len += 2 + segment.text().matches('"').count();
            }
            if flags.contains(RenderFlags::BRACES) {
                len += segment
                    .text()
                    .bytes()
                    .filter(|&b| matches!(b, b'{' | b'}'))
                    .count();
            }
        }
    }
    Ok(len + 1)
}

/// Render the chain at `root` into a fresh string.
///
/// The capacity from [`measure`] is reserved up front and asserted to be
/// a strict upper bound after the write.
pub fn render(arena: &SegmentArena, root: SegmentId, flags: RenderFlags) -> Result<String> {
    let budget = measure(arena, root, flags)?;
    let mut out = String::with_capacity(budget);
    render_into(arena, &mut out, root, flags)?;
    assert!(
        out.len() < budget,
        "rendered {} bytes into a budget of {budget}",
        out.len()
    );
    trace!("rendered expression: `{out}`");
    Ok(out)
}

/// Append the rendered chain at `root` to `out`.
///
/// `out` may already contain prefix text; `out.len()` at entry marks the
/// start of this expression's region.
fn render_into(
    arena: &SegmentArena,
    out: &mut String,
    root: SegmentId,
    flags: RenderFlags,
) -> Result<()> {
    let region = out.len();
    let mut separated = false;

    for segment in arena.chain_iter(root) {
        trim_separator(out, region, segment);

        if segment.kind() == TokenKind::Quoted && flags.contains(RenderFlags::QUOTES) {
            let quotes = segment.quote_flags();
            if quotes.contains(QuoteFlags::MIXED) {
                return Err(RenderError::MixedQuotes {
                    text: segment.text().to_owned(),
                });
            }
            // A literal with embedded `"` flips to a `'` wrapper;
            // anything else gets `"`.
            let wrap = if quotes.contains(QuoteFlags::DOUBLE) {
                '\''
            } else {
                '"'
            };
            out.push(wrap);
            out.push_str(segment.text());
            out.push(wrap);
        } else if segment.kind() == TokenKind::Quoted && flags.contains(RenderFlags::BRACES) {
            for ch in segment.text().chars() {
                out.push(ch);
                if matches!(ch, '{' | '}') {
                    out.push(ch);
                }
            }
        } else {
            out.push_str(segment.text());
        }

        if matches!(segment.kind(), TokenKind::AxisName | TokenKind::DoubleColon) {
            separated = false;
        } else {
            out.push(' ');
            separated = true;
        }
    }

    if separated {
        out.pop();
    }
    Ok(())
}

/// Decide whether the separator space written before `next` survives.
///
/// Only considered once at least two bytes exist in the current region
/// and the last one is a space. First match wins; the closing-delimiter
/// check runs after the chain and can veto a trim.
fn trim_separator(out: &mut String, region: usize, next: &Segment) {
    let bytes = out.as_bytes();
    if bytes.len() < region + 2 || bytes[bytes.len() - 1] != b' ' {
        return;
    }

    let before = bytes[bytes.len() - 2];
    // An empty text matches nothing below.
    let first = next.text().bytes().next().unwrap_or(0);

    let mut trim = false;
    if before == b'_' || first == b'_' {
        // `_` always keeps its spacing.
    } else if binds_tight(before) || binds_tight(first) {
        trim = true;
    } else if first == b',' {
        trim = true;
    } else if before.is_ascii_digit() && first == b'.' && next.kind() != TokenKind::Ellipsis {
        // `1 .5` closes up, `1 ... 10` does not.
        trim = true;
    } else if before == b'.' && first.is_ascii_digit() {
        // A single `.` closes up against a digit; `..` stays a location
        // step.
        let two_back = bytes
            .len()
            .checked_sub(3)
            .filter(|&ix| ix >= region)
            .map(|ix| bytes[ix]);
        trim = two_back != Some(b'.');
    } else if bytes.len() == region + 2 && bytes[region] == b'-' {
        // A leading unary minus hugs its operand.
        trim = true;
    }

    // `)`/`]` only close up against another closer or a slash.
    if matches!(before, b')' | b']') && !matches!(first, b')' | b']' | b'/') {
        trim = false;
    }

    if trim {
        out.pop();
    }
}

const CONCAT_OPEN: &str = "concat(";
const CONCAT_SEPARATOR: &str = ", ";
const CONCAT_CLOSE: &str = ")";

/// Render a concatenation list as a `concat()` call.
///
/// A single-expression list needs no call wrapper and renders exactly
/// like [`render`]. Multi-expression lists force [`RenderFlags::QUOTES`]
/// on and join their expressions with `", "` inside `concat(` `)`.
pub fn render_concat(arena: &SegmentArena, root: SegmentId, flags: RenderFlags) -> Result<String> {
    if arena.get(root).group().is_none() {
        return render(arena, root, flags);
    }
    let flags = flags | RenderFlags::QUOTES;

    let mut budget = CONCAT_OPEN.len() + CONCAT_CLOSE.len();
    for (n, expression) in arena.group_iter(root).enumerate() {
        if n > 0 {
            budget += CONCAT_SEPARATOR.len();
        }
        budget += measure(arena, expression, flags)?;
    }

    let mut out = String::with_capacity(budget);
    out.push_str(CONCAT_OPEN);
    for (n, expression) in arena.group_iter(root).enumerate() {
        if n > 0 {
            out.push_str(CONCAT_SEPARATOR);
        }
        render_into(arena, &mut out, expression, flags)?;
    }
    out.push_str(CONCAT_CLOSE);

    assert!(
        out.len() < budget,
        "rendered {} bytes into a budget of {budget}",
        out.len()
    );
    trace!("rendered concat: `{out}`");
    Ok(out)
}

/// Render a value as an attribute value template.
///
/// Literal expressions land in the attribute text directly, with `{` and
/// `}` doubled; any other expression is rendered with
/// [`RenderFlags::QUOTES`] forced and wrapped in `{` `}`. A value that is
/// one plain quoted literal renders with no wrapper at all.
pub fn render_avt(arena: &SegmentArena, root: SegmentId, flags: RenderFlags) -> Result<String> {
    let flags = flags | RenderFlags::BRACES;

    if is_simple(arena, root, TokenKind::Quoted) {
        return render(arena, root, flags);
    }

    let mut budget = 0;
    for expression in arena.group_iter(root) {
        budget += if is_literal(arena, expression) {
            measure(arena, expression, flags)?
        } else {
            2 + measure(arena, expression, flags | RenderFlags::QUOTES)?
        };
    }

    let mut out = String::with_capacity(budget);
    for expression in arena.group_iter(root) {
        if is_literal(arena, expression) {
            render_into(arena, &mut out, expression, flags)?;
        } else {
            out.push('{');
            render_into(arena, &mut out, expression, flags | RenderFlags::QUOTES)?;
            out.push('}');
        }
    }

    assert!(
        out.len() < budget,
        "rendered {} bytes into a budget of {budget}",
        out.len()
    );
    trace!("rendered value template: `{out}`");
    Ok(out)
}

/// One expression of a concatenation list counts as a literal when it is
/// a single `Quoted` segment.
fn is_literal(arena: &SegmentArena, expression: SegmentId) -> bool {
    let segment = arena.get(expression);
    segment.kind() == TokenKind::Quoted && segment.next().is_none()
}

/// Whether the value at `root` is exactly one segment of the given kind,
/// with nothing following in either dimension.
pub fn is_simple(arena: &SegmentArena, root: SegmentId, kind: TokenKind) -> bool {
    let segment = arena.get(root);
    segment.kind() == kind && segment.next().is_none() && segment.group().is_none()
}

/// Collapse the chain owned by `slot` into a single segment.
///
/// A slot holding one non-`Quoted` segment is moved out as-is: the id
/// comes back unchanged and the emptied slot keeps it from being released
/// twice. Any other chain is rendered with [`RenderFlags::QUOTES`] forced
/// and returned as a fresh segment, while the source chain stays in the
/// slot for the caller to release. The fresh segment is `Quoted` when the
/// whole input was one quoted literal, otherwise it takes the caller's
/// `kind`; its quote flags are recomputed from the rendered text.
pub fn fuse(
    arena: &mut SegmentArena,
    slot: &mut Option<SegmentId>,
    kind: TokenKind,
) -> Result<Option<SegmentId>> {
    let Some(root) = *slot else {
        return Ok(None);
    };

    let single = arena.get(root).next().is_none();
    let quoted = arena.get(root).kind() == TokenKind::Quoted;
    if single && !quoted {
        return Ok(slot.take());
    }

    let kind = if single && quoted {
        TokenKind::Quoted
    } else {
        kind
    };
    let text = render(arena, root, RenderFlags::QUOTES)?;
    trace!("fused chain into `{text}`");
    Ok(Some(arena.literal(&text, kind)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chain(arena: &mut SegmentArena, tokens: &[(&str, TokenKind)]) -> SegmentId {
        let ids: Vec<_> = tokens
            .iter()
            .map(|&(text, kind)| arena.token(text, kind))
            .collect();
        arena.link(ids).unwrap()
    }

    fn bare_chain(arena: &mut SegmentArena, tokens: &[&str]) -> SegmentId {
        let pairs: Vec<_> = tokens.iter().map(|&t| (t, TokenKind::Bare)).collect();
        chain(arena, &pairs)
    }

    fn rendered(tokens: &[&str]) -> String {
        let mut arena = SegmentArena::new();
        let root = bare_chain(&mut arena, tokens);
        render(&arena, root, RenderFlags::empty()).unwrap()
    }

    #[test]
    fn test_render_separates_tokens_with_spaces() {
        assert_eq!(rendered(&["a", "div", "b"]), "a div b");
    }

    #[test]
    fn test_render_tight_path_expression() {
        assert_eq!(
            rendered(&["foo", "/", "goo", "[", "@", "zoo", "]"]),
            "foo/goo[@zoo]"
        );
    }

    #[test]
    fn test_render_trims_before_comma() {
        assert_eq!(rendered(&["f", "(", "a", ",", "b", ")"]), "f(a, b)");
    }

    #[test]
    fn test_render_decimal_point_joins_digits() {
        assert_eq!(rendered(&["1", ".", "0"]), "1.0");
    }

    #[test]
    fn test_render_ellipsis_keeps_spacing() {
        let mut arena = SegmentArena::new();
        let root = chain(
            &mut arena,
            &[
                ("1", TokenKind::Bare),
                ("...", TokenKind::Ellipsis),
                ("10", TokenKind::Bare),
            ],
        );
        assert_eq!(render(&arena, root, RenderFlags::empty()).unwrap(), "1 ... 10");
    }

    #[test]
    fn test_render_leading_minus_hugs_operand() {
        assert_eq!(rendered(&["-", "5"]), "-5");
        assert_eq!(rendered(&["a", "-", "5"]), "a - 5");
    }

    #[test]
    fn test_render_closers_only_tighten_against_closers() {
        assert_eq!(rendered(&["foo", "[", "goo", "]", "/", "zoo"]), "foo[goo]/zoo");
        assert_eq!(rendered(&["f", "(", ")", "div", "2"]), "f() div 2");
    }

    #[test]
    fn test_render_underscore_keeps_spacing() {
        let mut arena = SegmentArena::new();
        let root = chain(
            &mut arena,
            &[
                ("a", TokenKind::Bare),
                ("_", TokenKind::Underscore),
                ("(", TokenKind::Bare),
                ("b", TokenKind::Bare),
                (")", TokenKind::Bare),
            ],
        );
        assert_eq!(render(&arena, root, RenderFlags::empty()).unwrap(), "a _ (b)");
    }

    #[test]
    fn test_render_axis_tokens_take_no_space() {
        let mut arena = SegmentArena::new();
        let root = chain(
            &mut arena,
            &[
                ("child", TokenKind::AxisName),
                ("::", TokenKind::DoubleColon),
                ("item", TokenKind::Bare),
            ],
        );
        assert_eq!(render(&arena, root, RenderFlags::empty()).unwrap(), "child::item");
    }

    #[test]
    fn test_render_trailing_axis_keeps_its_text() {
        let mut arena = SegmentArena::new();
        let root = chain(&mut arena, &[("ancestor", TokenKind::AxisName)]);
        assert_eq!(render(&arena, root, RenderFlags::empty()).unwrap(), "ancestor");
    }

    #[test]
    fn test_render_quoted_without_flags_is_bare_text() {
        let mut arena = SegmentArena::new();
        let root = chain(&mut arena, &[(r#""hello""#, TokenKind::Quoted)]);
        assert_eq!(render(&arena, root, RenderFlags::empty()).unwrap(), "hello");
    }

    #[test]
    fn test_render_quoted_picks_nonconflicting_wrapper() {
        let mut arena = SegmentArena::new();

        let plain = chain(&mut arena, &[(r#""hello""#, TokenKind::Quoted)]);
        assert_eq!(render(&arena, plain, RenderFlags::QUOTES).unwrap(), r#""hello""#);

        let with_double = chain(&mut arena, &[(r#""say \"hi\"""#, TokenKind::Quoted)]);
        assert_eq!(render(&arena, with_double, RenderFlags::QUOTES).unwrap(), r#"'say "hi"'"#);

        let with_single = chain(&mut arena, &[(r#""it's""#, TokenKind::Quoted)]);
        assert_eq!(render(&arena, with_single, RenderFlags::QUOTES).unwrap(), r#""it's""#);
    }

    #[test]
    fn test_render_braces_doubles_literal_braces() {
        let mut arena = SegmentArena::new();
        let root = chain(&mut arena, &[(r#""a{b}""#, TokenKind::Quoted)]);
        assert_eq!(render(&arena, root, RenderFlags::BRACES).unwrap(), "a{{b}}");
    }

    #[test]
    fn test_render_mixed_quotes_is_an_error() {
        let mut arena = SegmentArena::new();
        let root = chain(&mut arena, &[(r#""both ' and \" inside""#, TokenKind::Quoted)]);
        let err = render(&arena, root, RenderFlags::QUOTES).unwrap_err();
        assert_eq!(
            err,
            RenderError::MixedQuotes {
                text: r#"both ' and " inside"#.to_owned()
            }
        );
        assert!(measure(&arena, root, RenderFlags::QUOTES).is_err());
        // Without the quote transform the text passes through verbatim.
        assert_eq!(render(&arena, root, RenderFlags::empty()).unwrap(), r#"both ' and " inside"#);
    }

    #[test]
    fn test_measure_formula() {
        let mut arena = SegmentArena::new();

        let path = bare_chain(&mut arena, &["foo", "/", "goo"]);
        assert_eq!(measure(&arena, path, RenderFlags::empty()).unwrap(), 11);

        let quoted = chain(&mut arena, &[(r#""say \"hi\"""#, TokenKind::Quoted)]);
        assert_eq!(measure(&arena, quoted, RenderFlags::QUOTES).unwrap(), 14);

        let braced = chain(&mut arena, &[(r#""a{b}""#, TokenKind::Quoted)]);
        assert_eq!(measure(&arena, braced, RenderFlags::BRACES).unwrap(), 8);
        // Both escape budgets count even though the writer runs at most
        // one transform per segment.
        assert_eq!(
            measure(&arena, braced, RenderFlags::QUOTES | RenderFlags::BRACES).unwrap(),
            10
        );

        let axis = chain(
            &mut arena,
            &[
                ("child", TokenKind::AxisName),
                ("::", TokenKind::DoubleColon),
                ("a", TokenKind::Bare),
            ],
        );
        assert_eq!(measure(&arena, axis, RenderFlags::empty()).unwrap(), 10);
    }

    #[test]
    fn test_measure_bounds_rendered_length() {
        let cases: &[&[(&str, TokenKind)]] = &[
            &[
                ("foo", TokenKind::Bare),
                ("/", TokenKind::Bare),
                ("goo", TokenKind::Bare),
            ],
            &[(r#""a{b}c""#, TokenKind::Quoted)],
            &[
                (r#""say \"hi\"""#, TokenKind::Quoted),
                ("|", TokenKind::Bare),
                ("x", TokenKind::Bare),
            ],
            &[
                ("child", TokenKind::AxisName),
                ("::", TokenKind::DoubleColon),
                ("a", TokenKind::Bare),
            ],
            &[
                ("-", TokenKind::Bare),
                ("1", TokenKind::Bare),
                (".", TokenKind::Bare),
                ("5", TokenKind::Bare),
            ],
        ];
        for tokens in cases {
            for flags in [
                RenderFlags::empty(),
                RenderFlags::QUOTES,
                RenderFlags::BRACES,
                RenderFlags::QUOTES | RenderFlags::BRACES,
            ] {
                let mut arena = SegmentArena::new();
                let root = chain(&mut arena, tokens);
                let budget = measure(&arena, root, flags).unwrap();
                let out = render(&arena, root, flags).unwrap();
                assert!(out.len() < budget, "`{out}` vs budget {budget}");
            }
        }
    }

    #[test]
    fn test_concat_single_expression_matches_render() {
        let mut arena = SegmentArena::new();
        let root = bare_chain(&mut arena, &["foo", "[", "1", "]"]);
        let direct = render(&arena, root, RenderFlags::QUOTES).unwrap();
        let wrapped = render_concat(&arena, root, RenderFlags::QUOTES).unwrap();
        assert_eq!(direct, wrapped);
        assert_eq!(direct, "foo[1]");
    }

    #[test]
    fn test_concat_wraps_multiple_expressions() {
        let mut arena = SegmentArena::new();
        let hello = chain(&mut arena, &[(r#""hello ""#, TokenKind::Quoted)]);
        let name = bare_chain(&mut arena, &["@", "name"]);
        let root = arena.link_group([Some(hello), Some(name)]).unwrap();
        assert_eq!(
            render_concat(&arena, root, RenderFlags::empty()).unwrap(),
            r#"concat("hello ", @name)"#
        );
    }

    #[test]
    fn test_avt_single_literal_renders_bare() {
        let mut arena = SegmentArena::new();
        let root = chain(&mut arena, &[(r#""Mode {here}""#, TokenKind::Quoted)]);
        assert_eq!(render_avt(&arena, root, RenderFlags::empty()).unwrap(), "Mode {{here}}");
    }

    #[test]
    fn test_avt_mixes_literals_and_expressions() {
        let mut arena = SegmentArena::new();
        let one = bare_chain(&mut arena, &["one"]);
        let dash = chain(&mut arena, &[(r#""-""#, TokenKind::Quoted)]);
        let two = bare_chain(&mut arena, &["two"]);
        let root = arena.link_group([Some(one), Some(dash), Some(two)]).unwrap();
        assert_eq!(render_avt(&arena, root, RenderFlags::empty()).unwrap(), "{one}-{two}");
    }

    #[test]
    fn test_avt_quotes_literals_inside_expressions() {
        let mut arena = SegmentArena::new();
        let root = chain(
            &mut arena,
            &[
                ("starts-with", TokenKind::Bare),
                ("(", TokenKind::Bare),
                ("@", TokenKind::Bare),
                ("x", TokenKind::Bare),
                (",", TokenKind::Bare),
                (r#""a""#, TokenKind::Quoted),
                (")", TokenKind::Bare),
            ],
        );
        assert_eq!(
            render_avt(&arena, root, RenderFlags::empty()).unwrap(),
            r#"{starts-with(@x, "a")}"#
        );
    }

    #[test]
    fn test_avt_literal_with_both_quotes_passes_through() {
        let mut arena = SegmentArena::new();
        let literal = chain(&mut arena, &[(r#""won't say \"hi\"""#, TokenKind::Quoted)]);
        let expression = bare_chain(&mut arena, &["@", "x"]);
        let root = arena.link_group([Some(literal), Some(expression)]).unwrap();
        assert_eq!(
            render_avt(&arena, root, RenderFlags::empty()).unwrap(),
            r#"won't say "hi"{@x}"#
        );
    }

    #[test]
    fn test_is_simple_checks_both_dimensions() {
        let mut arena = SegmentArena::new();

        let single = chain(&mut arena, &[(r#""x""#, TokenKind::Quoted)]);
        assert!(is_simple(&arena, single, TokenKind::Quoted));
        assert!(!is_simple(&arena, single, TokenKind::Bare));

        let multi = bare_chain(&mut arena, &["a", "b"]);
        assert!(!is_simple(&arena, multi, TokenKind::Bare));

        let a = bare_chain(&mut arena, &["a"]);
        let b = bare_chain(&mut arena, &["b"]);
        let grouped = arena.link_group([Some(a), Some(b)]).unwrap();
        assert!(!is_simple(&arena, grouped, TokenKind::Bare));
    }

    #[test]
    fn test_fuse_single_bare_segment_is_zero_copy() {
        let mut arena = SegmentArena::new();
        let id = arena.token("@name", TokenKind::Bare);
        let mut slot = id;
        let fused = fuse(&mut arena, &mut slot, TokenKind::Bare).unwrap();
        assert_eq!(fused, id);
        assert_eq!(slot, None);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_fuse_renders_multi_segment_chains() {
        let mut arena = SegmentArena::new();
        let root = bare_chain(&mut arena, &["foo", "/", "goo"]);
        let mut slot = Some(root);
        let fused = fuse(&mut arena, &mut slot, TokenKind::Bare).unwrap().unwrap();
        assert_eq!(arena.get(fused).text(), "foo/goo");
        assert_eq!(arena.get(fused).kind(), TokenKind::Bare);
        // The source chain still belongs to the slot.
        assert_eq!(slot, Some(root));
        assert_eq!(arena.release(root), 3);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_fuse_single_quoted_segment_requotes() {
        let mut arena = SegmentArena::new();
        let root = chain(&mut arena, &[(r#""hi""#, TokenKind::Quoted)]);
        let mut slot = Some(root);
        let fused = fuse(&mut arena, &mut slot, TokenKind::Bare).unwrap().unwrap();
        assert_ne!(fused, root);
        assert_eq!(slot, Some(root));
        assert_eq!(arena.get(fused).text(), r#""hi""#);
        assert_eq!(arena.get(fused).kind(), TokenKind::Quoted);
        assert!(arena.get(fused).quote_flags().contains(QuoteFlags::DOUBLE));
    }

    #[test]
    fn test_fuse_empty_slot_is_none() {
        let mut arena = SegmentArena::new();
        let mut slot = None;
        assert_eq!(fuse(&mut arena, &mut slot, TokenKind::Bare).unwrap(), None);
    }
}
