//! Sequencing combinators: run one parser, then another, on the remainder.
//!
//! Each of these is built as a closure over the opaque [`crate::Parser`]
//! type (see `src/lazy.rs` for why it's opaque rather than a distinct
//! struct per combinator).

use crate::lazy::IntoParser;
use crate::Parser;

/// "and": run `p`, discard its value, run `q` on the remainder, yield `q`'s
/// value. Failure of either is failure of the composite.
pub fn both<'p, A, B, P, Q>(p: P, q: Q) -> Parser<'p, B>
where
    A: 'p,
    B: 'p,
    P: IntoParser<'p, A>,
    Q: IntoParser<'p, B>,
{
    let p = p.into_parser();
    let q = q.into_parser();
    Parser::new(move |input| {
        let (_, rest) = p.parse(input)?;
        q.parse(rest)
    })
}

/// "using": run `p` to get `v`, compute `q = f(v)`, run `q` on the
/// remainder, yield `q`'s value. The most general sequencing form; every
/// other combinator in this module is expressible in terms of it.
pub fn bind<'p, A, B, P, F, Q>(p: P, f: F) -> Parser<'p, B>
where
    A: 'p,
    B: 'p,
    P: IntoParser<'p, A>,
    F: Fn(A) -> Q + Send + Sync + 'p,
    Q: IntoParser<'p, B>,
{
    let p = p.into_parser();
    Parser::new(move |input| {
        let (v, rest) = p.parse(input)?;
        f(v).into_parser().parse(rest)
    })
}

/// Projection: run `p`, map the produced value through `g`.
/// `select(p, g)` is `bind(p, |v| success(g(v)))`.
pub fn select<'p, A, B, P, G>(p: P, g: G) -> Parser<'p, B>
where
    A: 'p,
    B: 'p,
    P: IntoParser<'p, A>,
    G: Fn(A) -> B + Send + Sync + 'p,
{
    let p = p.into_parser();
    Parser::new(move |input| {
        let (v, rest) = p.parse(input)?;
        Some((g(v), rest))
    })
}

/// Sequence both, yield the left's value.
pub fn keep_left<'p, A, B, P, Q>(p: P, q: Q) -> Parser<'p, A>
where
    A: Clone + 'p,
    B: 'p,
    P: IntoParser<'p, A>,
    Q: IntoParser<'p, B>,
{
    let p = p.into_parser();
    let q = q.into_parser();
    Parser::new(move |input| {
        let (v, rest) = p.parse(input)?;
        let (_, rest) = q.parse(rest)?;
        Some((v.clone(), rest))
    })
}

/// Sequence both, yield the right's value. Equivalent to [`both`]; kept as
/// a distinct name for readability at call sites, matching `keep_left`.
pub fn keep_right<'p, A, B, P, Q>(p: P, q: Q) -> Parser<'p, B>
where
    A: 'p,
    B: 'p,
    P: IntoParser<'p, A>,
    Q: IntoParser<'p, B>,
{
    both(p, q)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::primitive::{failure, satisfy, success};
    use crate::Input;

    #[test]
    fn both_yields_second_value() {
        let p = both(satisfy(|c| c == 'a'), satisfy(|c| c == 'b'));
        let (v, rest) = p.parse(Input::new("abc")).unwrap();
        assert_eq!('b', v);
        assert_eq!("c", rest.as_str());
    }

    #[test]
    fn both_fails_if_either_fails() {
        let p = both(satisfy(|c| c == 'a'), satisfy(|c| c == 'b'));
        assert_eq!(None, p.parse(Input::new("axc")));
        assert_eq!(None, p.parse(Input::new("xbc")));
    }

    #[test]
    fn bind_threads_value_into_next_parser() {
        let p = bind(satisfy(|c| c.is_ascii_digit()), |c| {
            let n = c.to_digit(10).unwrap();
            success(n * 2)
        });
        let (v, rest) = p.parse(Input::new("4x")).unwrap();
        assert_eq!(8, v);
        assert_eq!("x", rest.as_str());
    }

    #[test]
    fn select_is_bind_with_success() {
        let p = select(satisfy(|c| c.is_ascii_digit()), |c| {
            c.to_digit(10).unwrap()
        });
        assert_eq!(Some((4, Input::new("x"))), p.parse(Input::new("4x")));
        let q: Parser<u32> = failure();
        assert_eq!(None, select(q, |x: u32| x).parse(Input::new("4x")));
    }

    #[test]
    fn keep_left_and_keep_right() {
        let a = satisfy(|c| c == 'a');
        let b = satisfy(|c| c == 'b');
        let (v, rest) = keep_left(a.clone(), b.clone())
            .parse(Input::new("abc"))
            .unwrap();
        assert_eq!('a', v);
        assert_eq!("c", rest.as_str());

        let (v, rest) = keep_right(a, b).parse(Input::new("abc")).unwrap();
        assert_eq!('b', v);
        assert_eq!("c", rest.as_str());
    }
}
