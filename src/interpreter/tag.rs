use std::fmt;

/// The kind of a token or AST node.
///
/// Tokens and nodes share one tag space: the parser turns a token into a node
/// of the same tag (possibly retagged from binary to unary form or from
/// identifier to function call). Static metadata for every tag lives in
/// [`TagInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// Synthetic end-of-block marker.
    None,
    /// Unrecognized input.
    Error,
    /// Whitespace or comment; never reaches the parser.
    Space,
    /// `\\`: statement and matrix-row separator.
    Break,
    /// A control word without a dedicated tag (`\sin`, `\pi`, ...).
    Keyword,
    /// Numeric literal.
    Number,
    /// Identifier.
    Ident,
    /// Identifier followed by an argument list.
    Func,
    /// `\placeholder{...}`.
    Placeholder,
    /// `\begin{...}` of an environment the language does not interpret.
    Begin,
    /// `\end{...}` of an environment the language does not interpret.
    End,
    /// `\begin{block}`.
    BeginBlock,
    /// `\end{block}`.
    EndBlock,
    /// `\begin{caseblock}`.
    BeginCase,
    /// `\end{caseblock}`.
    EndCase,
    /// `\begin{pmatrix}`.
    BeginMatrix,
    /// `\end{pmatrix}`.
    EndMatrix,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `&`: matrix column separator.
    Amp,
    /// `_`: subscript.
    Index,
    /// `:=`
    Assign,
    /// `\lor`
    Or,
    /// `\land`
    And,
    /// `=`
    Eq,
    /// `\neq`
    Neq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `\leq`
    Leq,
    /// `\geq`
    Geq,
    /// Binary `+`.
    Add,
    /// Binary `-`.
    Sub,
    /// `*`, `\cdot`, `\times`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// Unary `+`.
    UAdd,
    /// Unary `-`.
    USub,
    /// `\lnot`
    Not,
    /// `\range[step]{from}{to}`
    Range,
    /// `\transp{matrix}`
    Transpose,
    /// `\frac{numerator}{denominator}`
    Frac,
    /// `\ifexpr{cond} then \otherwise else`
    If,
    /// `\otherwise`
    Otherwise,
    /// `\when`
    When,
    /// `\while cond \\ body`
    While,
    /// `\product cond \\ body`
    Product,
    /// `\graphic{f}{args}{points}`
    Graphic,
    /// Root of a parsed block.
    Root,
    /// One matrix row.
    List,
    /// One case alternative.
    Alt,
}

/// Static metadata attached to a [`Tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    /// Display label.
    pub name:        &'static str,
    /// Binding strength for precedence climbing; 0 for non-operators.
    pub priority:    u8,
    /// Whether the tag is the binary member of a unary/binary pair.
    pub is_binary:   bool,
    /// The other member of a unary/binary pair, if any.
    pub alternative: Option<Tag>,
    /// Closing tag of an opening delimiter.
    pub close:       Option<Tag>,
    /// Prefix operator taking one operand at its own priority.
    pub is_prefix:   bool,
    /// Right-associative binary operator.
    pub is_inverted: bool,
}

impl TagInfo {
    const fn plain(name: &'static str) -> Self {
        Self { name,
               priority: 0,
               is_binary: false,
               alternative: None,
               close: None,
               is_prefix: false,
               is_inverted: false }
    }

    const fn binary(name: &'static str, priority: u8) -> Self {
        Self { priority,
               is_binary: true,
               ..Self::plain(name) }
    }

    const fn prefix(name: &'static str, priority: u8) -> Self {
        Self { priority,
               is_prefix: true,
               ..Self::plain(name) }
    }

    const fn opening(name: &'static str, close: Tag) -> Self {
        Self { close: Some(close),
               ..Self::plain(name) }
    }

    const fn with_alternative(self, alternative: Tag) -> Self {
        Self { alternative: Some(alternative),
               ..self }
    }

    const fn inverted(self) -> Self {
        Self { is_inverted: true,
               ..self }
    }
}

/// Priority used to read exactly one primary (brace arguments).
pub const PRIMARY_ONLY: u8 = u8::MAX;

impl Tag {
    /// Returns the static metadata of the tag.
    #[must_use]
    pub const fn info(self) -> TagInfo {
        match self {
            Self::None => TagInfo::plain("NONE"),
            Self::Error => TagInfo::plain("ERROR"),
            Self::Space => TagInfo::plain("SPACE"),
            Self::Break => TagInfo::plain("BREAK"),
            Self::Keyword => TagInfo::plain("KEYWORD"),
            Self::Number => TagInfo::plain("NUMBER"),
            Self::Ident => TagInfo::plain("IDENT"),
            Self::Func => TagInfo::plain("FUNC"),
            Self::Placeholder => TagInfo::plain("PLACEHOLDER"),
            Self::Begin => TagInfo::plain("BEGIN"),
            Self::End => TagInfo::plain("END"),
            Self::BeginBlock => TagInfo::opening("BEGIN_BLOCK", Self::EndBlock),
            Self::EndBlock => TagInfo::plain("END_BLOCK"),
            Self::BeginCase => TagInfo::opening("BEGIN_CASE", Self::EndCase),
            Self::EndCase => TagInfo::plain("END_CASE"),
            Self::BeginMatrix => TagInfo::opening("BEGIN_MATRIX", Self::EndMatrix),
            Self::EndMatrix => TagInfo::plain("END_MATRIX"),
            Self::LParen => TagInfo::opening("LPAREN", Self::RParen),
            Self::RParen => TagInfo::plain("RPAREN"),
            Self::LBrace => TagInfo::opening("LBRACE", Self::RBrace),
            Self::RBrace => TagInfo::plain("RBRACE"),
            Self::LBracket => TagInfo::opening("LBRACKET", Self::RBracket),
            Self::RBracket => TagInfo::plain("RBRACKET"),
            Self::Comma => TagInfo::plain("COMMA"),
            Self::Amp => TagInfo::plain("AMP"),
            Self::Index => TagInfo::plain("INDEX"),
            Self::Assign => TagInfo::binary("ASSIGN", 1).inverted(),
            Self::Or => TagInfo::binary("OR", 2),
            Self::And => TagInfo::binary("AND", 3),
            Self::Eq => TagInfo::binary("EQ", 4),
            Self::Neq => TagInfo::binary("NEQ", 4),
            Self::Lt => TagInfo::binary("LT", 4),
            Self::Gt => TagInfo::binary("GT", 4),
            Self::Leq => TagInfo::binary("LEQ", 4),
            Self::Geq => TagInfo::binary("GEQ", 4),
            Self::Add => TagInfo::binary("ADD", 5).with_alternative(Self::UAdd),
            Self::Sub => TagInfo::binary("SUB", 5).with_alternative(Self::USub),
            Self::Mul => TagInfo::binary("MUL", 6),
            Self::Div => TagInfo::binary("DIV", 6),
            Self::Pow => TagInfo::binary("POW", 8).inverted(),
            Self::UAdd => TagInfo::prefix("UADD", 7).with_alternative(Self::Add),
            Self::USub => TagInfo::prefix("USUB", 7).with_alternative(Self::Sub),
            Self::Not => TagInfo::prefix("NOT", 7),
            Self::Range => TagInfo::plain("RANGE"),
            Self::Transpose => TagInfo::plain("TRANSPOSE"),
            Self::Frac => TagInfo::plain("FRAC"),
            Self::If => TagInfo::plain("IF"),
            Self::Otherwise => TagInfo::plain("OTHERWISE"),
            Self::When => TagInfo::plain("WHEN"),
            Self::While => TagInfo::plain("WHILE"),
            Self::Product => TagInfo::plain("PRODUCT"),
            Self::Graphic => TagInfo::plain("GRAPHIC"),
            Self::Root => TagInfo::plain("ROOT"),
            Self::List => TagInfo::plain("LIST"),
            Self::Alt => TagInfo::plain("ALT"),
        }
    }

    /// The tag a token takes when it appears in prefix position.
    ///
    /// Binary members of a pair turn into their unary alternative; every
    /// other tag is returned unchanged.
    ///
    /// # Example
    /// ```
    /// use texcalc::interpreter::tag::Tag;
    ///
    /// assert_eq!(Tag::Sub.as_unary(), Tag::USub);
    /// assert_eq!(Tag::Number.as_unary(), Tag::Number);
    /// ```
    #[must_use]
    pub const fn as_unary(self) -> Self {
        let info = self.info();
        match info.alternative {
            Some(alternative) if info.is_binary => alternative,
            _ => self,
        }
    }

    /// The tag a token takes when it appears in infix position.
    #[must_use]
    pub const fn as_binary(self) -> Self {
        let info = self.info();
        match info.alternative {
            Some(alternative) if !info.is_binary => alternative,
            _ => self,
        }
    }

    /// Binding strength of the token in infix position, or 0 if it cannot
    /// continue an expression.
    #[must_use]
    pub const fn binding_power(self) -> u8 {
        let info = self.as_binary().info();
        if info.is_binary { info.priority } else { 0 }
    }

    /// Returns `true` for tags that are produced by `\begin{...}` or
    /// `\end{...}`.
    #[must_use]
    pub const fn takes_attribute(self) -> bool {
        matches!(self, Self::Begin | Self::End | Self::Placeholder)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}
