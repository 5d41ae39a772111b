//! Ready-made parsers built from the primitives and combinators.
//!
//! The numeric parsers track how much of the input was consumed and slice
//! it out at the end, rather than rebuilding a `String` char by char, and
//! only project to the numeric/boolean value once the whole token has been
//! recognized.

use crate::primitive::satisfy;
use crate::{Input, Parser};

/// Matches a single specific character.
pub fn char<'p>(c: char) -> Parser<'p, char> {
    satisfy(move |x| x == c)
}

/// Matches a literal string exactly, yielding the matched slice of the
/// input (not the `lit` argument itself, so the output borrows from
/// whatever is being parsed rather than from wherever the literal came
/// from).
pub fn string<'p>(lit: impl Into<String>) -> Parser<'p, &'p str> {
    let lit: String = lit.into();
    Parser::new(move |input: Input<'p>| {
        if input.starts_with(&lit) {
            let (head, tail) = input.split_at(lit.len())?;
            Some((head.as_str(), tail))
        } else {
            None
        }
    })
}

/// One or more ASCII digits, as the matched slice.
pub fn digits<'p>() -> Parser<'p, &'p str> {
    Parser::new(|input: Input<'p>| {
        let mut rest = input;
        let mut count = 0usize;
        while let Some((c, next)) = rest.first() {
            if !c.is_ascii_digit() {
                break;
            }
            rest = next;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let consumed = input.len() - rest.len();
        let (matched, tail) = input.split_at(consumed)?;
        Some((matched.as_str(), tail))
    })
}

/// Optional sign (`+`/`-`, default `+`) followed by one or more digits,
/// projected to a signed base-10 integer. Empty after the sign is a
/// failure.
pub fn integer<'p>() -> Parser<'p, i64> {
    Parser::new(|input: Input<'p>| {
        let mut rest = input;
        let mut negative = false;
        if let Some((c, next)) = rest.first() {
            if c == '-' {
                negative = true;
                rest = next;
            } else if c == '+' {
                rest = next;
            }
        }
        let (digit_str, rest) = digits().parse(rest)?;
        let magnitude: i64 = digit_str.parse().ok()?;
        let value = if negative { -magnitude } else { magnitude };
        Some((value, rest))
    })
}

/// Optional sign followed by either `digits '.' digits?` or `digits`,
/// projected to a floating-point value with a dot decimal separator, no
/// grouping and no exponent form.
pub fn double<'p>() -> Parser<'p, f64> {
    Parser::new(|input: Input<'p>| {
        let mut rest = input;
        let mut negative = false;
        if let Some((c, next)) = rest.first() {
            if c == '-' {
                negative = true;
                rest = next;
            } else if c == '+' {
                rest = next;
            }
        }
        let (whole, after_whole) = digits().parse(rest)?;
        let mut text = whole.to_string();
        let mut consumed_end = after_whole;
        if let Some(('.', after_dot)) = consumed_end.first() {
            text.push('.');
            match digits().parse(after_dot) {
                Some((frac, after_frac)) => {
                    text.push_str(frac);
                    consumed_end = after_frac;
                }
                None => {
                    consumed_end = after_dot;
                }
            }
        }
        let magnitude: f64 = text.parse().ok()?;
        let value = if negative { -magnitude } else { magnitude };
        Some((value, consumed_end))
    })
}

/// The literal `false` or `true`, projected to the boolean value.
/// Case-sensitive: `False` does not match.
pub fn bool<'p>() -> Parser<'p, bool> {
    crate::branch::either(
        crate::combinator::select(string("true"), |_| true),
        crate::combinator::select(string("false"), |_| false),
    )
}

/// A single whitespace character other than the line terminators `\n`/`\r`.
/// Used to build the optional-inline-whitespace parser the BNF grammar
/// weaves between terms.
pub fn inline_whitespace<'p>() -> Parser<'p, char> {
    satisfy(|c| c.is_whitespace() && c != '\n' && c != '\r')
}

/// Zero or more [`inline_whitespace`] characters, discarded.
pub fn opt_ws<'p>() -> Parser<'p, ()> {
    crate::combinator::select(crate::repeat::zero_or_more(inline_whitespace()), |_| ())
}

/// A line terminator: `"\n"` or `"\r\n"`.
pub fn eol<'p>() -> Parser<'p, &'p str> {
    crate::branch::either(string("\r\n"), string("\n"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn char_parser() {
        let (v, rest) = char('a').parse(Input::new("abcd")).unwrap();
        assert_eq!('a', v);
        assert_eq!("bcd", rest.as_str());
    }

    #[test]
    fn string_parser_matches_prefix() {
        let (v, rest) = string("abc").parse(Input::new("abcdef")).unwrap();
        assert_eq!("abc", v);
        assert_eq!("def", rest.as_str());
        assert_eq!(None, string("xyz").parse(Input::new("abcdef")));
    }

    #[test]
    fn integer_parses_signed_and_unsigned() {
        let (v, rest) = integer().parse(Input::new("-123abc")).unwrap();
        assert_eq!(-123, v);
        assert_eq!("abc", rest.as_str());

        assert_eq!(None, integer().parse(Input::new("abc")));

        let (v, rest) = integer().parse(Input::new("+7")).unwrap();
        assert_eq!(7, v);
        assert_eq!("", rest.as_str());
    }

    #[test]
    fn integer_fails_on_bare_sign() {
        assert_eq!(None, integer().parse(Input::new("+")));
        assert_eq!(None, integer().parse(Input::new("-")));
    }

    #[test]
    fn double_parses_whole_dotted_and_signed() {
        assert_eq!(
            Some((123.456, Input::new(""))),
            double().parse(Input::new("123.456"))
        );
        assert_eq!(
            Some((123.0, Input::new(""))),
            double().parse(Input::new("123"))
        );
        let (v, rest) = double().parse(Input::new("-1.5xyz")).unwrap();
        assert_eq!(-1.5, v);
        assert_eq!("xyz", rest.as_str());
    }

    #[test]
    fn double_accepts_trailing_dot() {
        let (v, rest) = double().parse(Input::new("1.")).unwrap();
        assert_eq!(1.0, v);
        assert_eq!("", rest.as_str());
    }

    #[test]
    fn bool_parser_is_case_sensitive() {
        let (v, rest) = bool().parse(Input::new("trueabc")).unwrap();
        assert!(v);
        assert_eq!("abc", rest.as_str());
        assert_eq!(None, bool().parse(Input::new("False")));
    }

    #[test]
    fn eol_matches_both_forms() {
        assert_eq!(Some(("\n", Input::new("x"))), eol().parse(Input::new("\nx")));
        assert_eq!(
            Some(("\r\n", Input::new("x"))),
            eol().parse(Input::new("\r\nx"))
        );
    }
}
