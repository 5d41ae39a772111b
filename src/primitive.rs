//! The primitive parsers every combinator is ultimately built from.
//!
//! These operate directly on [`crate::Input`], since this crate only ever
//! parses text.

use crate::{Input, Parser};

/// Always succeeds, consumes nothing, yields a clone of `v`.
pub fn success<'p, T>(v: T) -> Parser<'p, T>
where
    T: Clone + Send + Sync + 'p,
{
    Parser::new(move |input| Some((v.clone(), input)))
}

/// Always succeeds, consumes nothing, yields the result of calling `f`.
/// Use this instead of [`success`] when the value is expensive to produce
/// up front or shouldn't be computed unless the parser actually runs.
pub fn success_with<'p, T, F>(f: F) -> Parser<'p, T>
where
    F: Fn() -> T + Send + Sync + 'p,
{
    Parser::new(move |input| Some((f(), input)))
}

/// Always fails, consumes nothing.
pub fn failure<'p, T>() -> Parser<'p, T>
where
    T: 'p,
{
    Parser::new(|_input: Input<'p>| None)
}

/// Succeeds iff the input is nonempty, yielding the first character.
pub fn item<'p>() -> Parser<'p, char> {
    Parser::new(|input: Input<'p>| input.first())
}

/// Applies [`item`]; succeeds with the character iff `pred` holds for it.
pub fn satisfy<'p, F>(pred: F) -> Parser<'p, char>
where
    F: Fn(char) -> bool + Send + Sync + 'p,
{
    Parser::new(move |input: Input<'p>| {
        let (c, rest) = input.first()?;
        if pred(c) {
            Some((c, rest))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn success_consumes_nothing() {
        let input = Input::new("abc");
        assert_eq!(Some((5, input)), success(5).parse(input));
    }

    #[test]
    fn success_identity_holds_for_any_input() {
        for s in ["", "x", "xyz"] {
            let input = Input::new(s);
            assert_eq!(Some(("v", input)), success("v").parse(input));
        }
    }

    #[test]
    fn failure_never_succeeds() {
        let input = Input::new("abc");
        assert_eq!(None, failure::<i32>().parse(input));
    }

    #[test]
    fn item_takes_first_char() {
        let input = Input::new("abc");
        let (c, rest) = item().parse(input).unwrap();
        assert_eq!('a', c);
        assert_eq!("bc", rest.as_str());
    }

    #[test]
    fn item_fails_on_empty() {
        assert_eq!(None, item().parse(Input::new("")));
    }

    #[test]
    fn satisfy_checks_predicate() {
        let p = satisfy(|c| c.is_ascii_digit());
        let (c, rest) = p.parse(Input::new("1a")).unwrap();
        assert_eq!('1', c);
        assert_eq!("a", rest.as_str());
        assert_eq!(None, p.parse(Input::new("a1")));
    }
}
