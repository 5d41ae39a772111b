//! Deferred parser construction and the lazy-binding discipline that makes
//! mutual and self-recursive parsers possible.
//!
//! Combinators here operate on a single opaque [`crate::Parser`] type,
//! precisely so that a grammar rule can refer to itself or to a rule defined
//! later in the same grammar text. `lazy` is the wrapper that makes that
//! safe: it stores a thunk instead of forcing it, and caches the result of
//! the first force.

use std::sync::{Arc, OnceLock};

use crate::{Input, Parser};

/// Wraps a zero-argument factory in a parser that builds its underlying
/// parser on first use and reuses it afterward. The factory is never called
/// by `lazy` itself — only by the first `parse` call on the returned
/// parser — which is what lets `lazy(|| rule_a())` appear inside the very
/// definition of `rule_a` without looping forever at construction time.
///
/// The cache is a genuine one-shot cell (`OnceLock`), not a check-then-set
/// over a plain `Cell`, so that if two threads race to force the same
/// deferred parser for the first time, the factory still runs exactly once
/// and both see the same built parser.
pub fn lazy<'p, T, F>(build: F) -> Parser<'p, T>
where
    F: Fn() -> Parser<'p, T> + Send + Sync + 'p,
    T: 'p,
{
    let cell: Arc<OnceLock<Parser<'p, T>>> = Arc::new(OnceLock::new());
    Parser::new(move |input: Input<'p>| {
        let inner = cell.get_or_init(&build);
        inner.parse(input)
    })
}

/// Accepted by every combinator parameter that stands for a sub-parser:
/// either a parser value, or a zero-argument factory that produces one.
/// The factory form is canonicalised to [`lazy`] internally, so callers
/// never have to wrap recursive references themselves.
pub trait IntoParser<'p, T> {
    fn into_parser(self) -> Parser<'p, T>;
}

impl<'p, T> IntoParser<'p, T> for Parser<'p, T> {
    fn into_parser(self) -> Parser<'p, T> {
        self
    }
}

impl<'p, T, F> IntoParser<'p, T> for F
where
    F: Fn() -> Parser<'p, T> + Send + Sync + 'p,
    T: 'p,
{
    fn into_parser(self) -> Parser<'p, T> {
        lazy(self)
    }
}
