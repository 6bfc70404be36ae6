use logos::{Lexer, Logos};
use tracing::trace;

use crate::{
    error::LexError,
    interpreter::{
        scanner::{Block, Coordinate, Position, Scanner},
        tag::Tag,
    },
};

/// Failure raised by a [`Lexeme`] callback.
///
/// The lexer turns it into a [`LexError`] once the token's coordinate is
/// known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No rule matches the input.
    #[default]
    UnexpectedSymbol,
    /// `\begin`, `\end` or `\placeholder` is not followed by `{...}`.
    ExpectedAttribute,
    /// `_\` after an identifier does not continue as `\text{...}`.
    ExpectedTextAttribute,
}

impl LexErrorKind {
    fn at(self, raw: &str, coord: Coordinate) -> LexError {
        match self {
            Self::UnexpectedSymbol => LexError::UnexpectedSymbol { symbol: raw.to_string(),
                                                                   coord },
            Self::ExpectedAttribute => LexError::ExpectedAttribute { keyword: raw.to_string(),
                                                                     coord },
            Self::ExpectedTextAttribute => LexError::ExpectedTextAttribute { coord },
        }
    }
}

/// The raw lexical classes recognized in a block.
///
/// Whitespace, LaTeX spacing commands (`\,`, `\;`, `\!`, `\ `) and `%`
/// comments are skipped. Everything else maps onto a [`Tag`] through
/// [`Lexeme::tag`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+|\\[,;! ]")]
pub enum Lexeme {
    /// `% comments` up to the end of the line.
    #[regex(r"%[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `\\`
    #[token(r"\\")]
    Break,
    /// A control word such as `\frac` or `\sin`, with its attribute when the
    /// word takes one.
    #[regex(r"\\[a-zA-Z]+", control_word)]
    Control(Tag),
    /// Identifiers such as `x`, `v2` or `v_\text{max}`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", identifier)]
    Ident,
    /// Numeric literals such as `42`, `0.5` or `3.`. A leading zero is a number on
    /// its own.
    #[regex(r"(0|[1-9][0-9]*)(\.[0-9]*)?")]
    Number,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `_`
    #[token("_")]
    Underscore,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `&`
    #[token("&")]
    Ampersand,
}

impl Lexeme {
    /// Maps the lexeme onto the tag the parser works with.
    #[must_use]
    pub const fn tag(self) -> Tag {
        match self {
            Self::Comment => Tag::Space,
            Self::Break => Tag::Break,
            Self::Control(tag) => tag,
            Self::Ident => Tag::Ident,
            Self::Number => Tag::Number,
            Self::Assign => Tag::Assign,
            Self::Plus => Tag::Add,
            Self::Minus => Tag::Sub,
            Self::Star => Tag::Mul,
            Self::Slash => Tag::Div,
            Self::Caret => Tag::Pow,
            Self::LParen => Tag::LParen,
            Self::RParen => Tag::RParen,
            Self::Comma => Tag::Comma,
            Self::LBrace => Tag::LBrace,
            Self::RBrace => Tag::RBrace,
            Self::LBracket => Tag::LBracket,
            Self::RBracket => Tag::RBracket,
            Self::Underscore => Tag::Index,
            Self::Less => Tag::Lt,
            Self::Greater => Tag::Gt,
            Self::Equals => Tag::Eq,
            Self::Ampersand => Tag::Amp,
        }
    }
}

/// Looks up a control word (without its backslash) in the keyword table.
///
/// Words with no dedicated tag are plain keywords, resolved at evaluation
/// time against the builtin constants and functions.
fn keyword_tag(word: &str) -> Tag {
    match word {
        "begin" => Tag::Begin,
        "end" => Tag::End,
        "placeholder" => Tag::Placeholder,
        "range" => Tag::Range,
        "transp" => Tag::Transpose,
        "frac" => Tag::Frac,
        "ifexpr" => Tag::If,
        "otherwise" => Tag::Otherwise,
        "when" => Tag::When,
        "while" => Tag::While,
        "product" => Tag::Product,
        "graphic" => Tag::Graphic,
        "cdot" | "times" => Tag::Mul,
        "neq" => Tag::Neq,
        "leq" | "le" => Tag::Leq,
        "geq" | "ge" => Tag::Geq,
        "land" => Tag::And,
        "lor" => Tag::Or,
        "lnot" => Tag::Not,
        _ => Tag::Keyword,
    }
}

/// Measures a balanced `{...}` attribute at the start of `text`.
///
/// Leading whitespace is allowed and `\` escapes the character after it.
///
/// # Returns
/// - `Some(n)`: Number of bytes covering the whitespace and the attribute.
/// - `None`: If `text` does not start with `{` or the braces never balance.
fn attribute_len(text: &str) -> Option<usize> {
    let start = text.len() - text.trim_start().len();
    let mut chars = text[start..].char_indices();
    if !matches!(chars.next(), Some((_, '{'))) {
        return None;
    }

    let mut depth = 1usize;
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            },
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i + 1);
                }
            },
            _ => {},
        }
    }
    None
}

/// Resolves a control word and, for `\begin`, `\end` and `\placeholder`,
/// consumes its attribute.
///
/// `\begin{block}`, `\begin{caseblock}` and `\begin{pmatrix}` (and the
/// matching `\end`s) get their own tags; other environments keep the generic
/// [`Tag::Begin`] / [`Tag::End`].
fn control_word(lex: &mut Lexer<Lexeme>) -> Result<Tag, LexErrorKind> {
    let tag = keyword_tag(&lex.slice()[1..]);
    if !tag.takes_attribute() {
        return Ok(tag);
    }

    let len = attribute_len(lex.remainder()).ok_or(LexErrorKind::ExpectedAttribute)?;
    let attribute = lex.remainder()[..len].trim_start();
    let tag = match (tag, attribute) {
        (Tag::Begin, "{block}") => Tag::BeginBlock,
        (Tag::Begin, "{caseblock}") => Tag::BeginCase,
        (Tag::Begin, "{pmatrix}") => Tag::BeginMatrix,
        (Tag::End, "{block}") => Tag::EndBlock,
        (Tag::End, "{caseblock}") => Tag::EndCase,
        (Tag::End, "{pmatrix}") => Tag::EndMatrix,
        _ => tag,
    };
    lex.bump(len);
    Ok(tag)
}

/// Extends an identifier with a `_\text{...}` suffix when one follows.
fn identifier(lex: &mut Lexer<Lexeme>) -> Result<(), LexErrorKind> {
    let Some(after) = lex.remainder().strip_prefix("_\\") else {
        return Ok(());
    };
    let word = after.len() - after.trim_start_matches(|c: char| c.is_ascii_alphabetic()).len();
    if &after[..word] != "text" {
        return Err(LexErrorKind::ExpectedTextAttribute);
    }
    let attribute =
        attribute_len(&after[word..]).ok_or(LexErrorKind::ExpectedTextAttribute)?;
    lex.bump(2 + word + attribute);
    Ok(())
}

/// A lexical token with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Position of the first character.
    pub begin: Position,
    /// Position just past the last character.
    pub end:   Position,
    /// Token kind.
    pub tag:   Tag,
    /// The exact source text.
    pub raw:   String,
    /// Human-facing label used in diagnostics and node labels.
    pub label: String,
}

impl Token {
    fn new(begin: Position, end: Position, tag: Tag, raw: &str) -> Self {
        let label = match tag {
            Tag::Number | Tag::Ident | Tag::Keyword => raw.to_string(),
            _ => tag.to_string(),
        };
        Self { begin,
               end,
               tag,
               raw: raw.to_string(),
               label }
    }
}

/// Splits the interpreted region of a block into tokens.
///
/// Whitespace and comments are dropped. Everything between a generic
/// `\begin{...}` and the next generic `\end{...}` (an environment such as
/// `align` that the language does not interpret) is dropped as well, and
/// unknown characters there are tolerated. The returned vector always ends
/// with one [`Tag::None`] token placed at the end of the region.
///
/// # Errors
/// Returns a [`LexError`] for the first character that starts no token
/// outside a skipped environment, and for control words or identifier
/// suffixes missing their `{...}` attribute.
///
/// # Example
/// ```
/// use texcalc::interpreter::{lexer::tokenize, scanner::Block, tag::Tag};
///
/// let tokens = tokenize(&Block::from_source("x := 2 \\cdot y")).unwrap();
/// let tags: Vec<Tag> = tokens.iter().map(|t| t.tag).collect();
///
/// assert_eq!(tags, [Tag::Ident, Tag::Assign, Tag::Number, Tag::Mul, Tag::Ident, Tag::None]);
/// ```
pub fn tokenize(block: &Block) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::for_block(block);
    let start = scanner.position().offset;
    let mut probe = scanner.clone();
    while !probe.is_at_end() {
        probe.advance();
    }
    let stop = probe.position();

    let mut lexer = Lexeme::lexer(&block.text[start..stop.offset]);
    let mut tokens = Vec::new();
    let mut skipping = false;

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let begin = scanner.seek(start + span.start);
        let end = scanner.seek(start + span.end);
        let raw = lexer.slice();

        let tag = match lexeme {
            Ok(lexeme) => lexeme.tag(),
            Err(_) if skipping => continue,
            Err(kind) => return Err(kind.at(raw, begin.coord)),
        };
        match tag {
            Tag::Begin => skipping = true,
            Tag::End => skipping = false,
            _ if !skipping => {
                let token = Token::new(begin, end, tag, raw);
                trace!(coord = %token.begin.coord, tag = %token.tag, raw = %token.raw, "token");
                tokens.push(token);
            },
            _ => {},
        }
    }

    tokens.push(Token::new(stop, stop, Tag::None, ""));
    Ok(tokens)
}
