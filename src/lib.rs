//! > Parsegen. A parser combinator library with a BNF-to-parser compiler.
//!
//! Parsegen is built around a single opaque [`Parser<T>`] type. All of its
//! functionality lives in the methods and free functions that build and
//! combine parser values — there is no trait to implement, no lexer to
//! hand-write.
//!
//! All of these are parsers.
//!
//!| Parser | Input | Parsing | Output | Input after parsing |
//!| - | - | - | - | - |
//!| `char('a')` | `"abcd"` | `char('a').parse(input)` | `Some(('a', "bcd"))` | `"bcd"` |
//!| `char('a')` | `"def"` | `char('a').parse(input)` | `None` | `"def"` |
//!| `string("abc")` | `"abcdef"` | `string("abc").parse(input)` | `Some(("abc", "def"))` | `"def"` |
//!| `satisfy(❘c❘ c=='m')` | `"moo"` | `satisfy(❘c❘ c=='m').parse(input)` | `Some(('m', "oo"))` | `"oo"` |
//!| `integer()` | `"-123abc"` | `integer().parse(input)` | `Some((-123, "abc"))` | `"abc"` |
//!
//! These can be combined with the combinators in [`combinator`], [`branch`]
//! and [`repeat`].
//!
//!| Parser | Input | Parsing | Output |
//!| - | - | - | - |
//!| `either(char('a'), char('b'))` | `"abc"` | `.parse(input)` | `Some(('a', "bc"))` |
//!| `either(char('a'), char('b'))` | `"bca"` | `.parse(input)` | `Some(('b', "ca"))` |
//!| `zero_or_more(char('a'))` | `"aab"` | `.parse(input)` | `Some((vec!['a','a'], "b"))` |
//!| `chain(integer(), char(','))` | `"1,2,3;4"` | `.parse(input)` | `Some((vec![1,2,3], ";4"))` |
//!
//! The BNF compiler ([`bnf::from_bnf`]) turns a grammar description into one
//! of these parsers at runtime, producing a [`ParseNode`] tree instead of a
//! fixed type:
//!
//!| Grammar | Input | `tree.show()` |
//!| - | - | - |
//!| `<expr> ::= <num> \| <num> '+' <expr>`, `<num> ::= '0' \| '1' \| '2'` | `"1+2+0"` | `"1+2+0"` |

pub mod bnf;
pub mod branch;
pub mod combinator;
pub mod common;
pub mod input;
pub mod lazy;
pub mod primitive;
pub mod repeat;
pub mod tree;

use std::sync::Arc;

pub use input::Input;
pub use tree::ParseNode;

pub use bnf::from_bnf;
pub use branch::{best, either};
pub use combinator::{bind, both, keep_left, keep_right, select};
pub use common::{bool, char, digits, double, integer, string};
pub use lazy::lazy;
pub use primitive::{failure, item, satisfy, success, success_with};
pub use repeat::{all, chain, once_or_more, or_default, one_or_default, plus_many, zero_or_more};

/// A pure, re-entrant function from an input view to either a produced
/// value plus the unconsumed suffix, or failure.
///
/// `Parser` is a thin, cheaply-`Clone`able handle around a boxed closure
/// rather than a distinct generic struct per combinator. That's a
/// deliberate trade: the BNF compiler builds parsers whose shape — how many
/// rules, how many alternatives, how they refer to each other — is only
/// known once the grammar text is read at runtime, so there is no way to
/// give each one a distinct compile-time type. A single opaque type that
/// can be stored in a `Vec`, cloned, and referred to before it's finished
/// being built is what makes `best`, mutual recursion, and the BNF compiler
/// possible at all. See `DESIGN.md` for the full rationale.
///
/// Backed by `Arc` rather than a single-threaded reference count, and
/// bounded `Send + Sync`, so a `Parser` built on one thread can be handed to
/// another and run there, including concurrently against different inputs.
pub struct Parser<'p, T> {
    run: Arc<dyn Fn(Input<'p>) -> Option<(T, Input<'p>)> + Send + Sync + 'p>,
}

impl<'p, T> Parser<'p, T> {
    /// Builds a parser directly from a parsing function. Most callers
    /// should reach for the free functions in this crate instead; this is
    /// the escape hatch they're all built on top of.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Input<'p>) -> Option<(T, Input<'p>)> + Send + Sync + 'p,
    {
        Parser { run: Arc::new(f) }
    }

    /// Runs the parser against `input`. Returns `Some((value, rest))` on
    /// success, where `rest` is a suffix of `input`; returns `None` on
    /// failure, with no partial consumption observable.
    pub fn parse(&self, input: Input<'p>) -> Option<(T, Input<'p>)> {
        (self.run)(input)
    }
}

impl<'p, T> Clone for Parser<'p, T> {
    fn clone(&self) -> Self {
        Parser {
            run: Arc::clone(&self.run),
        }
    }
}

/// Convenience entry point: accepts a full input string, runs `parser`
/// against it, and returns the produced value together with the unread
/// suffix as a plain `&str`.
pub fn parse<'p, T>(parser: &Parser<'p, T>, text: &'p str) -> Option<(T, &'p str)> {
    let (value, rest) = parser.parse(Input::new(text))?;
    Some((value, rest.as_str()))
}
