//! Rules shared by both dialects
//!
//! ```text
//! file          = block* EOF
//! block         = mainBlock | stateBlock
//! mainBlock     = 'main' '{' mainAttribute* '}'
//! mainAttribute = questname | version | hidden | hidden_end | disabled
//! stateBlock    = 'state' IDENT '{' statement* '}'
//! desc          = 'desc' STRING ';'?
//! argumentList  = '(' arguments? ')'
//! arguments     = argument (',' argument)*
//! ```

use super::{EoPlusParser, eoserv, official};
use crate::base::Flavor;
use crate::parser::ParseErrorKind;
use crate::parser::syntax_kind::SyntaxKind::{self, *};

/// Tokens that may start a top-level block, reserved keywords included
pub const BLOCK_FIRST: &[SyntaxKind] = &[
    MAIN_KW,
    STATE_KW,
    CHARACTER_KW,
    NPC_KW,
    MAP_KW,
    WORLD_KW,
    EOF,
];

/// Attribute keyword, attribute node and the value token it takes
const ATTRIBUTES: &[(SyntaxKind, SyntaxKind, Option<SyntaxKind>)] = &[
    (QUESTNAME_KW, QUESTNAME_ATTRIBUTE, Some(STRING)),
    (VERSION_KW, VERSION_ATTRIBUTE, Some(INTEGER)),
    (HIDDEN_KW, HIDDEN_ATTRIBUTE, None),
    (HIDDEN_END_KW, HIDDEN_END_ATTRIBUTE, None),
    (DISABLED_KW, DISABLED_ATTRIBUTE, None),
];

const ATTRIBUTE_EXPECTED: &[SyntaxKind] = &[
    QUESTNAME_KW,
    VERSION_KW,
    HIDDEN_KW,
    HIDDEN_END_KW,
    DISABLED_KW,
    R_BRACE,
];

const ATTRIBUTE_RESUME: &[SyntaxKind] = &[
    QUESTNAME_KW,
    VERSION_KW,
    HIDDEN_KW,
    HIDDEN_END_KW,
    DISABLED_KW,
    R_BRACE,
    MAIN_KW,
    STATE_KW,
];

/// Tokens an argument can start with
pub const ARGUMENT_FIRST: &[SyntaxKind] = &[INTEGER, STRING];

/// block*
pub fn parse_file_body<P: EoPlusParser>(p: &mut P, flavor: Flavor) {
    loop {
        match p.current_kind() {
            EOF => break,
            MAIN_KW | STATE_KW => parse_block(p, flavor),
            _ => p.recover(BLOCK_FIRST, &[MAIN_KW, STATE_KW]),
        }
    }
}

fn parse_block<P: EoPlusParser>(p: &mut P, flavor: Flavor) {
    p.start_node(BLOCK);
    if p.at(MAIN_KW) {
        parse_main_block(p);
    } else {
        parse_state_block(p, flavor);
    }
    p.finish_node();
}

/// 'main' '{' mainAttribute* '}'
pub fn parse_main_block<P: EoPlusParser>(p: &mut P) {
    p.start_node(MAIN_BLOCK);
    p.expect(MAIN_KW);
    p.expect(L_BRACE);

    loop {
        let kind = p.current_kind();
        if let Some(&(_, node, value)) = ATTRIBUTES.iter().find(|(kw, _, _)| *kw == kind) {
            parse_attribute(p, node, value);
            continue;
        }
        match kind {
            R_BRACE | EOF | MAIN_KW | STATE_KW => break,
            _ => p.recover(ATTRIBUTE_EXPECTED, ATTRIBUTE_RESUME),
        }
    }

    p.expect(R_BRACE);
    p.finish_node();
}

fn parse_attribute<P: EoPlusParser>(p: &mut P, node: SyntaxKind, value: Option<SyntaxKind>) {
    p.start_node(MAIN_ATTRIBUTE);
    p.start_node(node);
    p.bump();
    if let Some(value) = value {
        p.expect(value);
    }
    p.eat(SEMICOLON);
    p.finish_node();
    p.finish_node();
}

/// 'state' IDENT '{' statement* '}'
pub fn parse_state_block<P: EoPlusParser>(p: &mut P, flavor: Flavor) {
    p.start_node(STATE_BLOCK);
    p.expect(STATE_KW);
    p.expect(IDENT);
    p.expect(L_BRACE);

    let first = statement_first(flavor);
    let mut resume = first.to_vec();
    resume.extend_from_slice(&[R_BRACE, MAIN_KW, STATE_KW]);
    let mut expected = first.to_vec();
    expected.push(R_BRACE);

    loop {
        match p.current_kind() {
            kind if first.contains(&kind) => parse_statement(p, flavor),
            R_BRACE | EOF | MAIN_KW | STATE_KW => break,
            _ => p.recover(&expected, &resume),
        }
    }

    p.expect(R_BRACE);
    p.finish_node();
}

/// Tokens a statement can start with in `flavor`
pub fn statement_first(flavor: Flavor) -> &'static [SyntaxKind] {
    match flavor {
        Flavor::Official => official::STATEMENT_FIRST,
        Flavor::Eoserv => eoserv::STATEMENT_FIRST,
    }
}

fn parse_statement<P: EoPlusParser>(p: &mut P, flavor: Flavor) {
    p.start_node(STATEMENT);
    if p.at(DESC_KW) {
        parse_desc(p);
    } else {
        match flavor {
            Flavor::Official => official::parse_statement(p),
            Flavor::Eoserv => eoserv::parse_statement(p),
        }
    }
    p.finish_node();
}

/// 'desc' STRING ';'?
pub fn parse_desc<P: EoPlusParser>(p: &mut P) {
    p.start_node(DESC);
    p.expect(DESC_KW);
    p.expect(STRING);
    p.eat(SEMICOLON);
    p.finish_node();
}

/// '(' arguments? ')'
///
/// `argument` is the node kind wrapping each literal argument. No node is
/// created when the opening parenthesis is missing.
pub fn parse_argument_list<P: EoPlusParser>(p: &mut P, argument: SyntaxKind) {
    if !p.at(L_PAREN) {
        p.error(ParseErrorKind::Missing, &[L_PAREN]);
        return;
    }

    p.start_node(ARGUMENT_LIST);
    p.bump();

    if p.at_any(ARGUMENT_FIRST) {
        parse_arguments(p, argument);
        p.expect_in(R_PAREN, &[R_PAREN, COMMA]);
    } else {
        p.expect_in(R_PAREN, &[R_PAREN, INTEGER, STRING]);
    }

    p.finish_node();
}

fn parse_arguments<P: EoPlusParser>(p: &mut P, argument: SyntaxKind) {
    p.start_node(ARGUMENTS);
    parse_argument(p, argument);
    while p.eat(COMMA) {
        if p.at_any(ARGUMENT_FIRST) {
            parse_argument(p, argument);
        } else {
            p.error(ParseErrorKind::Missing, ARGUMENT_FIRST);
            break;
        }
    }
    p.finish_node();
}

fn parse_argument<P: EoPlusParser>(p: &mut P, argument: SyntaxKind) {
    p.start_node(argument);
    parse_literal(p);
    p.finish_node();
}

/// INTEGER | STRING
pub fn parse_literal<P: EoPlusParser>(p: &mut P) {
    p.start_node(LITERAL);
    p.bump();
    p.finish_node();
}
