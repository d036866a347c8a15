//! Statements and expressions of EOSERV
//!
//! ```text
//! statement  = desc | rule | goal | if | elseif | else | action
//! rule       = 'rule' expression expression ';'?
//! goal       = 'goal' expression expression ';'?
//! if         = 'if' expression expression ';'?
//! elseif     = 'elseif' expression expression ';'?
//! else       = 'else' expression ';'?
//! action     = 'action' expression ';'?
//! expression = IDENT argumentList | 'goto' IDENT | literal
//! argument   = argumentExpression
//! ```

use super::EoPlusParser;
use super::common::{parse_argument_list, parse_literal};
use crate::parser::ParseErrorKind;
use crate::parser::syntax_kind::SyntaxKind::{self, *};

pub const STATEMENT_FIRST: &[SyntaxKind] = &[
    DESC_KW, RULE_KW, GOAL_KW, IF_KW, ELSEIF_KW, ELSE_KW, ACTION_KW,
];

/// Tokens an expression can start with
pub const EXPRESSION_FIRST: &[SyntaxKind] = &[GOTO_KW, INTEGER, STRING, IDENT];

/// Parse a non-`desc` statement. The caller has checked the first token.
pub fn parse_statement<P: EoPlusParser>(p: &mut P) {
    let (node, operands) = match p.current_kind() {
        RULE_KW => (RULE, 2),
        GOAL_KW => (GOAL, 2),
        IF_KW => (IF, 2),
        ELSEIF_KW => (ELSEIF, 2),
        ELSE_KW => (ELSE, 1),
        _ => (ACTION, 1),
    };

    p.start_node(node);
    p.bump();
    for _ in 0..operands {
        if !parse_expression(p) {
            break;
        }
    }
    p.eat(SEMICOLON);
    p.finish_node();
}

/// Parse one expression, returning false if none could start here
pub fn parse_expression<P: EoPlusParser>(p: &mut P) -> bool {
    if !p.at_any(EXPRESSION_FIRST) {
        p.error(ParseErrorKind::Missing, EXPRESSION_FIRST);
        return false;
    }

    p.start_node(EXPRESSION);
    match p.current_kind() {
        IDENT => {
            p.start_node(INVOCATION_EXPRESSION);
            p.bump();
            parse_argument_list(p, ARGUMENT_EXPRESSION);
            p.finish_node();
        }
        GOTO_KW => {
            p.start_node(GOTO_EXPRESSION);
            p.bump();
            p.expect(IDENT);
            p.finish_node();
        }
        _ => parse_literal(p),
    }
    p.finish_node();
    true
}
