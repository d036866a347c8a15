//! Syntax kinds for the Rowan-based CST
//!
//! One enum covers both token types and grammar rules. Token types are
//! declared in vocabulary order: keywords first, then punctuation, literals
//! and trivia. The keyword predicate relies on that order.

/// All syntax kinds (tokens and nodes) of an EO+ document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // KEYWORDS (case-insensitive; must stay ahead of L_PAREN)
    // =========================================================================
    MAIN_KW = 0,
    STATE_KW,
    QUESTNAME_KW,
    VERSION_KW,
    HIDDEN_KW,
    HIDDEN_END_KW,
    DISABLED_KW,
    DESC_KW,
    RULE_KW,
    ACTION_KW,
    GOAL_KW,
    IF_KW,
    ELSEIF_KW,
    ELSE_KW,
    GOTO_KW,
    // Reserved block keywords without a grammar rule yet
    CHARACTER_KW,
    NPC_KW,
    MAP_KW,
    WORLD_KW,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,
    R_PAREN,
    L_BRACE,
    R_BRACE,
    COMMA,
    SEMICOLON,

    // =========================================================================
    // LITERALS
    // =========================================================================
    INTEGER,
    STRING,
    IDENT,

    // =========================================================================
    // TRIVIA (hidden channel)
    // =========================================================================
    WHITESPACE,
    LINE_COMMENT,
    BLOCK_COMMENT,

    /// End of input. Only present in the token stream, never in the tree.
    EOF,

    // =========================================================================
    // NODES (one per grammar rule)
    // =========================================================================
    FILE,
    BLOCK,
    MAIN_BLOCK,
    MAIN_ATTRIBUTE,
    QUESTNAME_ATTRIBUTE,
    VERSION_ATTRIBUTE,
    HIDDEN_ATTRIBUTE,
    HIDDEN_END_ATTRIBUTE,
    DISABLED_ATTRIBUTE,
    STATE_BLOCK,
    STATEMENT,
    DESC,
    RULE,
    GOAL,
    IF,
    ELSEIF,
    ELSE,
    ACTION,
    EXPRESSION,
    INVOCATION_EXPRESSION,
    GOTO_EXPRESSION,
    ARGUMENT_LIST,
    ARGUMENTS,
    ARGUMENT_EXPRESSION,
    LITERAL,

    /// Tokens consumed during error recovery, one per node
    ERROR,

    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    /// Every token type, in vocabulary order.
    pub const TOKENS: &'static [SyntaxKind] = &[
        MAIN_KW, STATE_KW, QUESTNAME_KW, VERSION_KW, HIDDEN_KW, HIDDEN_END_KW, DISABLED_KW,
        DESC_KW, RULE_KW, ACTION_KW, GOAL_KW, IF_KW, ELSEIF_KW, ELSE_KW, GOTO_KW, CHARACTER_KW,
        NPC_KW, MAP_KW, WORLD_KW, L_PAREN, R_PAREN, L_BRACE, R_BRACE, COMMA, SEMICOLON, INTEGER,
        STRING, IDENT, WHITESPACE, LINE_COMMENT, BLOCK_COMMENT,
    ];

    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, WHITESPACE | LINE_COMMENT | BLOCK_COMMENT)
    }

    /// Tokens the parser skips: trivia and unlexable text (`ERROR` tokens)
    pub fn is_hidden(self) -> bool {
        self.is_trivia() || self == ERROR
    }

    /// Keywords are the token types declared before `(`.
    pub fn is_keyword(self) -> bool {
        (self as u16) < (L_PAREN as u16)
    }

    /// Check if this kind is a token type rather than a grammar rule
    pub fn is_token(self) -> bool {
        (self as u16) <= (EOF as u16)
    }

    /// Check if this is a grammar rule node
    pub fn is_node(self) -> bool {
        (self as u16) > (EOF as u16) && self != __LAST
    }

    /// Symbolic name as declared in the lexer vocabulary.
    ///
    /// Case-insensitive keywords carry a trailing underscore.
    pub fn symbolic_name(self) -> Option<&'static str> {
        let name = match self {
            MAIN_KW => "MAIN_",
            STATE_KW => "STATE_",
            QUESTNAME_KW => "QUESTNAME_",
            VERSION_KW => "VERSION_",
            HIDDEN_KW => "HIDDEN_",
            HIDDEN_END_KW => "HIDDEN_END_",
            DISABLED_KW => "DISABLED_",
            DESC_KW => "DESC_",
            RULE_KW => "RULE_",
            ACTION_KW => "ACTION_",
            GOAL_KW => "GOAL_",
            IF_KW => "IF_",
            ELSEIF_KW => "ELSEIF_",
            ELSE_KW => "ELSE_",
            GOTO_KW => "GOTO_",
            CHARACTER_KW => "CHARACTER_",
            NPC_KW => "NPC_",
            MAP_KW => "MAP_",
            WORLD_KW => "WORLD_",
            L_PAREN => "LPAREN",
            R_PAREN => "RPAREN",
            L_BRACE => "LBRACE",
            R_BRACE => "RBRACE",
            COMMA => "COMMA",
            SEMICOLON => "SEMI",
            INTEGER => "IntegerLiteral",
            STRING => "StringLiteral",
            IDENT => "Identifier",
            WHITESPACE => "WS",
            LINE_COMMENT => "LINE_COMMENT",
            BLOCK_COMMENT => "BLOCK_COMMENT",
            EOF => "EOF",
            _ => return None,
        };
        Some(name)
    }

    /// Literal spelling for fixed-text tokens.
    pub fn literal_name(self) -> Option<&'static str> {
        let name = match self {
            L_PAREN => "'('",
            R_PAREN => "')'",
            L_BRACE => "'{'",
            R_BRACE => "'}'",
            COMMA => "','",
            SEMICOLON => "';'",
            EOF => "<EOF>",
            _ => return None,
        };
        Some(name)
    }

    /// Display name: the literal spelling when there is one, else the
    /// symbolic name.
    pub fn display_name(self) -> Option<&'static str> {
        self.literal_name().or_else(|| self.symbolic_name())
    }

    /// Grammar rule name for node kinds.
    pub fn rule_name(self) -> Option<&'static str> {
        let name = match self {
            FILE => "file",
            BLOCK => "block",
            MAIN_BLOCK => "mainBlock",
            MAIN_ATTRIBUTE => "mainAttribute",
            QUESTNAME_ATTRIBUTE => "questnameAttribute",
            VERSION_ATTRIBUTE => "versionAttribute",
            HIDDEN_ATTRIBUTE => "hiddenAttribute",
            HIDDEN_END_ATTRIBUTE => "hiddenEndAttribute",
            DISABLED_ATTRIBUTE => "disabledAttribute",
            STATE_BLOCK => "stateBlock",
            STATEMENT => "statement",
            DESC => "desc",
            RULE => "rule",
            GOAL => "goal",
            IF => "if",
            ELSEIF => "elseif",
            ELSE => "else",
            ACTION => "action",
            EXPRESSION => "expression",
            INVOCATION_EXPRESSION => "invocationExpression",
            GOTO_EXPRESSION => "gotoExpression",
            ARGUMENT_LIST => "argumentList",
            ARGUMENTS => "arguments",
            ARGUMENT_EXPRESSION => "argumentExpression",
            LITERAL => "literal",
            _ => return None,
        };
        Some(name)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language marker for the EO+ rowan tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EoPlusLanguage {}

impl rowan::Language for EoPlusLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<EoPlusLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<EoPlusLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<EoPlusLanguage>;
