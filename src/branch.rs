//! Alternation: choosing among parsers.
//!
//! `either` is first-match; `best` runs every alternative and keeps the one
//! that consumed the most. `best` takes a runtime `Vec` rather than a fixed
//! tuple, since BNF alternatives are a list discovered from grammar text,
//! not a fixed arity known at compile time.

use crate::lazy::IntoParser;
use crate::Parser;

/// First-match alternation: run `p`; if it succeeds, yield its result.
/// Otherwise run `q` on the *original* input and yield its result (success
/// or failure). `p` never spuriously consumes on failure, so `q` always
/// sees the input `p` started with.
pub fn either<'p, T, P, Q>(p: P, q: Q) -> Parser<'p, T>
where
    T: 'p,
    P: IntoParser<'p, T>,
    Q: IntoParser<'p, T>,
{
    let p = p.into_parser();
    let q = q.into_parser();
    Parser::new(move |input| p.parse(input).or_else(|| q.parse(input)))
}

/// Longest-match alternation: run every parser in `ps` on the original
/// input; among those that succeed, yield the one with the shortest
/// remaining suffix (i.e. the one that consumed the most). Ties are broken
/// by the first parser in iteration order among those tied. Fails only if
/// every parser in `ps` fails.
///
/// Runs every alternative unconditionally, unlike [`either`] — more
/// expensive than first-match choice, but necessary when alternatives can
/// overlap and the longest match is the one that matters.
pub fn best<'p, T>(ps: Vec<Parser<'p, T>>) -> Parser<'p, T>
where
    T: 'p,
{
    Parser::new(move |input| {
        let mut winner: Option<(T, crate::Input<'p>)> = None;
        for p in ps.iter() {
            if let Some((value, rest)) = p.parse(input) {
                let better = match &winner {
                    None => true,
                    Some((_, best_rest)) => rest.len() < best_rest.len(),
                };
                if better {
                    winner = Some((value, rest));
                }
            }
        }
        winner
    })
}
