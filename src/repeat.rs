//! Repetition and sequencing-of-many combinators.
//!
//! Each loop here guards against an inner parser that succeeds without
//! consuming, so repetition stays total even over a parser like
//! `success(v)`. Accumulation uses a small growable buffer
//! (`smallvec::SmallVec`) since most repetitions in a grammar are short.

use smallvec::SmallVec;

use crate::lazy::IntoParser;
use crate::Parser;

/// Parses `p` zero or more times, greedily, collecting results in order.
/// Always succeeds. Stops as soon as `p` fails *or* succeeds without
/// consuming any input — the latter guard keeps this total rather than
/// looping forever on a sub-parser like `success(v)`.
pub fn zero_or_more<'p, T, P>(p: P) -> Parser<'p, Vec<T>>
where
    T: 'p,
    P: IntoParser<'p, T>,
{
    let p = p.into_parser();
    Parser::new(move |input| {
        let mut acc: SmallVec<[T; 4]> = SmallVec::new();
        let mut rest = input;
        loop {
            match p.parse(rest) {
                Some((v, next)) if next.len() < rest.len() => {
                    acc.push(v);
                    rest = next;
                }
                _ => break,
            }
        }
        Some((acc.into_vec(), rest))
    })
}

/// Parses `p` at least once, then [`zero_or_more`]. Fails if the first
/// application of `p` fails.
pub fn once_or_more<'p, T, P>(p: P) -> Parser<'p, Vec<T>>
where
    T: 'p,
    P: IntoParser<'p, T>,
{
    let p = p.into_parser();
    Parser::new(move |input| {
        let (first, rest) = p.parse(input)?;
        let (mut values, rest) = zero_or_more(p.clone()).parse(rest)?;
        values.insert(0, first);
        Some((values, rest))
    })
}

/// Parses `p` once, then `many` (a parser producing a sequence), prepending
/// `p`'s value to the sequence `many` returns.
pub fn plus_many<'p, T, P, M>(p: P, many: M) -> Parser<'p, Vec<T>>
where
    T: 'p,
    P: IntoParser<'p, T>,
    M: IntoParser<'p, Vec<T>>,
{
    let p = p.into_parser();
    let many = many.into_parser();
    Parser::new(move |input| {
        let (first, rest) = p.parse(input)?;
        let (mut values, rest) = many.parse(rest)?;
        values.insert(0, first);
        Some((values, rest))
    })
}

/// Runs the parsers in `ps` in order, collecting their values. Fails if any
/// of them fails; the produced sequence's length always equals `ps.len()`.
pub fn all<'p, T>(ps: Vec<Parser<'p, T>>) -> Parser<'p, Vec<T>>
where
    T: 'p,
{
    Parser::new(move |input| {
        let mut acc: SmallVec<[T; 4]> = SmallVec::with_capacity(ps.len());
        let mut rest = input;
        for p in ps.iter() {
            let (v, next) = p.parse(rest)?;
            acc.push(v);
            rest = next;
        }
        Some((acc.into_vec(), rest))
    })
}

/// `p` followed by zero or more occurrences of `(sep, p)`, yielding the
/// sequence of `p`'s values with separators discarded. At least one `p` is
/// required.
pub fn chain<'p, T, S, P, Sep>(p: P, sep: Sep) -> Parser<'p, Vec<T>>
where
    T: 'p,
    S: 'p,
    P: IntoParser<'p, T>,
    Sep: IntoParser<'p, S>,
{
    let p = p.into_parser();
    let sep = sep.into_parser();
    Parser::new(move |input| {
        let (first, rest) = p.parse(input)?;
        let mut acc: SmallVec<[T; 4]> = SmallVec::new();
        acc.push(first);
        let mut rest = rest;
        loop {
            let before_sep = rest;
            match sep.parse(rest).and_then(|(_, after_sep)| {
                p.parse(after_sep).map(|(v, after_p)| (v, after_p))
            }) {
                Some((v, after_p)) => {
                    acc.push(v);
                    rest = after_p;
                }
                None => {
                    rest = before_sep;
                    break;
                }
            }
        }
        Some((acc.into_vec(), rest))
    })
}

/// Tries `p`; on failure, produces `T::default()` without consuming input.
pub fn or_default<'p, T, P>(p: P) -> Parser<'p, T>
where
    T: Default + Clone + Send + Sync + 'p,
    P: IntoParser<'p, T>,
{
    one_or_default(p, T::default())
}

/// Tries `p`; on failure, produces `d` without consuming input.
pub fn one_or_default<'p, T, P>(p: P, d: T) -> Parser<'p, T>
where
    T: Clone + Send + Sync + 'p,
    P: IntoParser<'p, T>,
{
    let p = p.into_parser();
    Parser::new(move |input| match p.parse(input) {
        Some(res) => Some(res),
        None => Some((d.clone(), input)),
    })
}
