//! BNF grammar parsing and compilation.
//!
//! The grammar-of-the-grammar below is implemented as ordinary parsers
//! built from the combinators in `src/combinator.rs`, `src/branch.rs` and
//! `src/repeat.rs`, rather than with a separate hand-rolled lexer/parser
//! pair.
//!
//! A grammar with direct or indirect left recursion (`<a> ::= <a> 'x'`)
//! will recurse through [`compile_expression`] until the host stack is
//! exhausted. That's on the grammar author, not something this module
//! guards against.

use std::collections::HashMap;
use std::sync::Arc;

use crate::combinator::select;
use crate::common::{self, opt_ws};
use crate::lazy::lazy;
use crate::primitive::failure;
use crate::repeat::{all, once_or_more, plus_many, zero_or_more};
use crate::tree::ParseNode;
use crate::{Input, Parser};
use crate::branch::{best, either};

/// A single element within an alternative: either a literal string matched
/// verbatim, or a reference to another rule by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Literal(String),
    RuleRef(String),
}

/// One `|`-separated alternative: a concatenation of terms.
pub type Alternative = Vec<Term>;

/// A parsed BNF rule: its name and its ordered alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarRule {
    pub name: String,
    pub alternatives: Vec<Alternative>,
}

/// The rule table the compiler resolves `RuleRef` terms against. Always
/// contains `EOL` (alternatives `"\n"` and `"\r\n"`) in addition to every
/// user-declared rule.
#[derive(Debug, Clone)]
pub struct RuleMap {
    rules: HashMap<String, Vec<Alternative>>,
}

impl RuleMap {
    /// An empty rule map except for the built-in `EOL` rule.
    pub fn with_builtins() -> Self {
        let mut rules = HashMap::new();
        rules.insert(
            "EOL".to_string(),
            vec![
                vec![Term::Literal("\n".to_string())],
                vec![Term::Literal("\r\n".to_string())],
            ],
        );
        RuleMap { rules }
    }

    pub fn insert(&mut self, name: String, alternatives: Vec<Alternative>) {
        self.rules.insert(name, alternatives);
    }

    pub fn get(&self, name: &str) -> Option<&Vec<Alternative>> {
        self.rules.get(name)
    }
}

// --- The BNF grammar, expressed with this crate's own combinators -------

fn rule_name_chars<'p>() -> Parser<'p, String> {
    select(
        once_or_more(crate::primitive::satisfy(|c| {
            c.is_ascii_alphanumeric() || c == '-'
        })),
        |cs: Vec<char>| cs.into_iter().collect(),
    )
}

/// `RuleName := OptWS '<' [A-Za-z0-9\-]+ '>' OptWS`, projected to the bare
/// name (no angle brackets).
fn rule_name<'p>() -> Parser<'p, String> {
    crate::combinator::keep_left(
        crate::combinator::keep_right(
            crate::combinator::both(opt_ws(), common::char('<')),
            rule_name_chars(),
        ),
        crate::combinator::both(common::char('>'), opt_ws()),
    )
}

/// `Literal := ''' [^']* ''' | '"' [^"]* '"'`, projected to a [`Term::Literal`].
fn literal_term<'p>() -> Parser<'p, Term> {
    let single_quoted = crate::combinator::keep_left(
        crate::combinator::keep_right(
            common::char('\''),
            select(
                zero_or_more(crate::primitive::satisfy(|c| c != '\'')),
                |cs: Vec<char>| cs.into_iter().collect::<String>(),
            ),
        ),
        common::char('\''),
    );
    let double_quoted = crate::combinator::keep_left(
        crate::combinator::keep_right(
            common::char('"'),
            select(
                zero_or_more(crate::primitive::satisfy(|c| c != '"')),
                |cs: Vec<char>| cs.into_iter().collect::<String>(),
            ),
        ),
        common::char('"'),
    );
    select(either(single_quoted, double_quoted), Term::Literal)
}

/// `Term := Literal | RuleName`.
fn term<'p>() -> Parser<'p, Term> {
    either(literal_term(), select(rule_name(), Term::RuleRef))
}

/// `List := Term (OptWS Term)*`.
fn term_list<'p>() -> Parser<'p, Alternative> {
    plus_many(
        term(),
        zero_or_more(crate::combinator::keep_right(opt_ws(), term())),
    )
}

/// `Expression := List (OptWS '|' OptWS List)*`.
fn expression<'p>() -> Parser<'p, Vec<Alternative>> {
    plus_many(
        term_list(),
        zero_or_more(crate::combinator::keep_right(
            crate::combinator::both(
                opt_ws(),
                crate::combinator::both(common::char('|'), opt_ws()),
            ),
            term_list(),
        )),
    )
}

/// `RuleDef := RuleName "::="`.
fn rule_def<'p>() -> Parser<'p, String> {
    crate::combinator::keep_left(rule_name(), common::string("::="))
}

/// `Rule := RuleDef OptWS Expression`.
fn grammar_rule<'p>() -> Parser<'p, GrammarRule> {
    crate::combinator::bind(rule_def(), |name: String| {
        select(
            crate::combinator::keep_right(opt_ws(), expression()),
            move |alternatives| GrammarRule {
                name: name.clone(),
                alternatives,
            },
        )
    })
}

/// `Syntax := Rule (OptWS EOL Rule)*`.
fn syntax<'p>() -> Parser<'p, Vec<GrammarRule>> {
    plus_many(
        grammar_rule(),
        zero_or_more(crate::combinator::keep_right(
            crate::combinator::both(opt_ws(), common::eol()),
            grammar_rule(),
        )),
    )
}

// --- Compilation: rule map -> Parser<ParseNode> --------------------------

fn compile_term<'p>(rule_map: &Arc<RuleMap>, term: &Term) -> Parser<'p, ParseNode> {
    match term {
        Term::Literal(lit) => {
            let lit = lit.clone();
            select(common::string(lit), |s: &str| ParseNode::literal(s))
        }
        Term::RuleRef(name) => {
            let rule_map = Arc::clone(rule_map);
            let name = name.clone();
            lazy(move || compile_expression(&rule_map, &name))
        }
    }
}

fn compile_alternative<'p>(rule_map: &Arc<RuleMap>, alt: &Alternative) -> Parser<'p, Vec<ParseNode>> {
    let parsers: Vec<Parser<'p, ParseNode>> =
        alt.iter().map(|t| compile_term(rule_map, t)).collect();
    all(parsers)
}

/// Compiles the expression (full alternative set) for `name` into
/// `best(alternatives.map(compile_alternative))`, projected to a rule node
/// tagged `name`. Returns an always-failing parser if `name` isn't in
/// `rule_map` — an undefined reference resolves lazily, at the moment this
/// is finally forced by [`lazy`], rather than when the grammar is compiled.
fn compile_expression<'p>(rule_map: &Arc<RuleMap>, name: &str) -> Parser<'p, ParseNode> {
    match rule_map.get(name) {
        None => failure(),
        Some(alternatives) => {
            let owned_name = name.to_string();
            let branches: Vec<Parser<'p, Vec<ParseNode>>> = alternatives
                .iter()
                .map(|alt| compile_alternative(rule_map, alt))
                .collect();
            select(best(branches), move |children| {
                ParseNode::rule(owned_name.clone(), children)
            })
        }
    }
}

/// Parses `grammar_text` as BNF, builds the rule map (with the built-in
/// `EOL` rule always present) and compiles `main_rule` into a live parser.
/// Returns `None` if `grammar_text` itself doesn't parse as BNF. A
/// reference to a rule that is never defined does not fail here — it fails
/// the first time the compiled parser is applied to input.
pub fn from_bnf<'p>(grammar_text: &str, main_rule: &str) -> Option<Parser<'p, ParseNode>> {
    let input = Input::new(grammar_text);
    let (parsed_rules, rest) = syntax().parse(input)?;
    if !rest.as_str().trim().is_empty() {
        return None;
    }
    let mut rule_map = RuleMap::with_builtins();
    for rule in parsed_rules {
        rule_map.insert(rule.name, rule.alternatives);
    }
    Some(compile_expression(&Arc::new(rule_map), main_rule))
}
