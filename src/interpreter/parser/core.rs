use crate::{
    ast::{Ast, Node, NodeId},
    error::ParseError,
    interpreter::{lexer::Token, scanner::Coordinate, tag::Tag},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Cursor over a token slice that builds nodes into an [`Ast`].
///
/// The slice always ends with a [`Tag::None`] token and the cursor never
/// moves past it, so [`Parser::current`] is always valid.
pub struct Parser<'t> {
    pub(in crate::interpreter::parser) tokens: &'t [Token],
    pub(in crate::interpreter::parser) pos:    usize,
    pub(in crate::interpreter::parser) ast:    Ast,
}

/// Parses a token stream into a syntax tree.
///
/// The root node has tag [`Tag::Root`] and one field per statement.
/// Statements may be separated by `\\`, which is otherwise ignored at the top
/// level.
///
/// # Errors
/// Returns a [`ParseError`] describing the first syntax error, or
/// `UnexpectedEndOfBlock` if `tokens` does not end with a [`Tag::None`]
/// token.
///
/// # Example
/// ```
/// use texcalc::interpreter::{lexer::tokenize, parser::core::parse, scanner::Block, tag::Tag};
///
/// let tokens = tokenize(&Block::from_source("x := 1 + 2 * 3")).unwrap();
/// let (ast, root) = parse(&tokens).unwrap();
///
/// let assign = ast[root].fields[0];
/// assert_eq!(ast[assign].tag, Tag::Assign);
/// let sum = ast[assign].right.unwrap();
/// assert_eq!(ast[sum].tag, Tag::Add);
/// assert_eq!(ast[ast[sum].right.unwrap()].tag, Tag::Mul);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<(Ast, NodeId)> {
    let Some(last) = tokens.last() else {
        return Err(ParseError::UnexpectedEndOfBlock { coord: Coordinate::default() });
    };
    if last.tag != Tag::None {
        return Err(ParseError::UnexpectedEndOfBlock { coord: last.end.coord });
    }

    let mut parser = Parser { tokens,
                              pos: 0,
                              ast: Ast::new() };
    let root = parser.root()?;
    Ok((parser.ast, root))
}

impl<'t> Parser<'t> {
    fn root(&mut self) -> ParseResult<NodeId> {
        let mut root = Node::from_token(self.current(), Tag::Root);
        root.fields = self.statements(Tag::None)?;
        Ok(self.ast.push(root))
    }

    /// Parses one expression, continuing while the next token binds tighter
    /// than `min`.
    ///
    /// Pass `0` for a full expression and [`PRIMARY_ONLY`] to read a single
    /// operand.
    ///
    /// [`PRIMARY_ONLY`]: crate::interpreter::tag::PRIMARY_ONLY
    pub fn expression(&mut self, min: u8) -> ParseResult<NodeId> {
        let token = self.next();
        let mut lhs = self.unary(token)?;
        while self.current().tag.binding_power() > min {
            let token = self.next();
            lhs = self.binary(token, lhs)?;
        }
        Ok(lhs)
    }

    /// Builds an infix node over `lhs`.
    ///
    /// Right-associative operators (`^`, `:=`) parse their right operand one
    /// level looser so that a following operator of the same kind nests to
    /// the right.
    fn binary(&mut self, token: &'t Token, lhs: NodeId) -> ParseResult<NodeId> {
        let tag = token.tag.as_binary();
        let info = tag.info();
        let min = if info.is_inverted { info.priority - 1 } else { info.priority };

        let right = self.expression(min)?;
        let mut node = Node::from_token(token, tag);
        node.left = Some(lhs);
        node.right = Some(right);
        Ok(self.ast.push(node))
    }

    /// The token under the cursor.
    pub(in crate::interpreter::parser) fn current(&self) -> &'t Token {
        let tokens: &'t [Token] = self.tokens;
        &tokens[self.pos]
    }

    /// The tag `n` tokens past the cursor, or [`Tag::None`] past the end.
    pub(in crate::interpreter::parser) fn peek_tag(&self, n: usize) -> Tag {
        self.tokens.get(self.pos + n).map_or(Tag::None, |t| t.tag)
    }

    /// Returns the current token and moves past it, except at the end.
    pub(in crate::interpreter::parser) fn next(&mut self) -> &'t Token {
        let token = self.current();
        if token.tag != Tag::None {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it has the given tag.
    pub(in crate::interpreter::parser) fn skip(&mut self, tag: Tag) -> bool {
        if self.current().tag == tag {
            self.next();
            true
        } else {
            false
        }
    }
}
