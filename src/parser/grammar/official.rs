//! Statements of the official quest engine
//!
//! ```text
//! statement = desc | rule | action
//! rule      = 'rule' IDENT argumentList 'goto' IDENT ';'?
//! action    = 'action' IDENT argumentList ';'?
//! argument  = expression
//! ```

use super::EoPlusParser;
use super::common::parse_argument_list;
use crate::parser::syntax_kind::SyntaxKind::{self, *};

pub const STATEMENT_FIRST: &[SyntaxKind] = &[DESC_KW, RULE_KW, ACTION_KW];

/// Parse a non-`desc` statement. The caller has checked the first token.
pub fn parse_statement<P: EoPlusParser>(p: &mut P) {
    match p.current_kind() {
        RULE_KW => parse_rule(p),
        _ => parse_action(p),
    }
}

fn parse_rule<P: EoPlusParser>(p: &mut P) {
    p.start_node(RULE);
    p.bump();
    p.expect(IDENT);
    parse_argument_list(p, EXPRESSION);
    p.expect(GOTO_KW);
    p.expect(IDENT);
    p.eat(SEMICOLON);
    p.finish_node();
}

fn parse_action<P: EoPlusParser>(p: &mut P) {
    p.start_node(ACTION);
    p.bump();
    p.expect(IDENT);
    parse_argument_list(p, EXPRESSION);
    p.eat(SEMICOLON);
    p.finish_node();
}
