use crate::{
    ast::{Node, NodeId},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
        tag::Tag,
    },
};

/// Length of the `\placeholder` control word, which precedes the span a
/// placeholder rewrites.
const PLACEHOLDER_WORD: usize = r"\placeholder".len();

/// Describes a closing tag for diagnostics.
const fn closing_text(tag: Tag) -> &'static str {
    match tag {
        Tag::RParen => "')'",
        Tag::RBracket => "']'",
        Tag::EndBlock => r"\end{block}",
        Tag::EndCase => r"\end{caseblock}",
        Tag::EndMatrix => r"\end{pmatrix}",
        _ => "'}'",
    }
}

impl<'t> Parser<'t> {
    /// Parses the operand that starts with `token`.
    ///
    /// The token is retagged to its prefix meaning first, so `-` becomes
    /// unary minus here. Dispatch then follows the tag: delimited groups,
    /// leaves, identifiers, keywords, the fixed keyword forms and prefix
    /// operators.
    ///
    /// # Errors
    /// `UnexpectedToken` for tokens that cannot start an operand and
    /// `UnexpectedEndOfBlock` at the end of input.
    pub(in crate::interpreter::parser) fn unary(&mut self, token: &'t Token) -> ParseResult<NodeId> {
        let tag = token.tag.as_unary();
        let info = tag.info();
        if let Some(close) = info.close {
            return self.delimited(token, tag, close);
        }

        match tag {
            Tag::Number => Ok(self.ast.push(Node::from_token(token, tag))),
            Tag::Placeholder => {
                let mut node = Node::from_token(token, tag);
                node.span = Some((token.begin.offset + PLACEHOLDER_WORD, token.end.offset));
                Ok(self.ast.push(node))
            },
            Tag::Ident => self.identifier(token),
            Tag::Keyword => self.keyword(token),
            Tag::Range => {
                let mut node = Node::from_token(token, tag);
                if self.current().tag == Tag::LBracket {
                    node.cond = Some(self.argument(Tag::LBracket)?);
                }
                node.left = Some(self.argument(Tag::LBrace)?);
                node.right = Some(self.argument(Tag::LBrace)?);
                Ok(self.ast.push(node))
            },
            Tag::Transpose => {
                let mut node = Node::from_token(token, tag);
                node.left = Some(self.argument(Tag::LBrace)?);
                Ok(self.ast.push(node))
            },
            Tag::Frac => {
                let mut node = Node::from_token(token, tag);
                node.left = Some(self.argument(Tag::LBrace)?);
                node.right = Some(self.argument(Tag::LBrace)?);
                Ok(self.ast.push(node))
            },
            Tag::If => self.conditional(token),
            Tag::While | Tag::Product => {
                let mut node = Node::from_token(token, tag);
                node.cond = Some(self.expression(0)?);
                self.skip(Tag::Break);
                node.right = Some(self.expression(0)?);
                Ok(self.ast.push(node))
            },
            Tag::Graphic => self.graphic(token),
            _ if info.is_prefix => {
                let mut node = Node::from_token(token, tag);
                node.right = Some(self.expression(info.priority)?);
                Ok(self.ast.push(node))
            },
            Tag::None => Err(ParseError::UnexpectedEndOfBlock { coord: token.begin.coord }),
            _ => Err(ParseError::UnexpectedToken { token:    token.label.clone(),
                                                   expected: "an operand",
                                                   coord:    token.begin.coord, }),
        }
    }

    /// Parses the inside of an opening delimiter and its matching close.
    ///
    /// Plain brackets are transparent: the inner expression is returned
    /// without a grouping node.
    fn delimited(&mut self, token: &'t Token, tag: Tag, close: Tag) -> ParseResult<NodeId> {
        let id = match tag {
            Tag::BeginBlock => {
                let mut node = Node::from_token(token, tag);
                node.fields = self.statements(close)?;
                self.ast.push(node)
            },
            Tag::BeginCase => {
                let mut node = Node::from_token(token, tag);
                node.fields = self.cases()?;
                self.ast.push(node)
            },
            Tag::BeginMatrix => {
                let mut node = Node::from_token(token, tag);
                node.fields = self.matrix()?;
                self.ast.push(node)
            },
            _ => self.expression(0)?,
        };
        self.expect(close, closing_text(close))?;
        Ok(id)
    }

    /// Parses an identifier with its optional subscript and argument list.
    ///
    /// ```text
    /// x        v_1        m_{i, j}        f(a, b)
    /// ```
    ///
    /// A subscript is either a brace list of one or two expressions or a
    /// single operand. A following `(` turns the node into a function call.
    fn identifier(&mut self, token: &'t Token) -> ParseResult<NodeId> {
        let mut node = Node::from_token(token, Tag::Ident);

        if self.skip(Tag::Index) {
            if self.skip(Tag::LBrace) {
                let indices = self.list(Tag::RBrace)?;
                if !(1..=2).contains(&indices.len()) {
                    return Err(ParseError::BadIndex { count: indices.len(),
                                                      coord: token.begin.coord, });
                }
                node.fields = indices;
            } else {
                let index = self.next();
                node.fields.push(self.unary(index)?);
            }
        }

        if self.current().tag == Tag::LParen {
            if !node.fields.is_empty() {
                return Err(self.unexpected("an operator after a subscripted name"));
            }
            self.next();
            node.tag = Tag::Func;
            node.fields = self.list(Tag::RParen)?;
        }

        Ok(self.ast.push(node))
    }

    /// Parses a generic keyword and its arguments, given either as one
    /// parenthesized list (`\max(a, b)`) or as consecutive brace groups
    /// (`\max{a}{b}`).
    fn keyword(&mut self, token: &'t Token) -> ParseResult<NodeId> {
        let mut node = Node::from_token(token, Tag::Keyword);
        if self.skip(Tag::LParen) {
            node.fields = self.list(Tag::RParen)?;
        } else {
            while self.current().tag == Tag::LBrace {
                node.fields.push(self.argument(Tag::LBrace)?);
            }
        }
        Ok(self.ast.push(node))
    }

    /// Parses `\ifexpr{cond} then [\otherwise else]`.
    ///
    /// Line breaks may appear before the then-branch and on either side of
    /// `\otherwise`.
    fn conditional(&mut self, token: &'t Token) -> ParseResult<NodeId> {
        let mut node = Node::from_token(token, Tag::If);
        node.cond = Some(self.argument(Tag::LBrace)?);
        self.skip(Tag::Break);
        node.right = Some(self.expression(0)?);

        if self.current().tag == Tag::Break && self.peek_tag(1) == Tag::Otherwise {
            self.next();
        }
        if self.skip(Tag::Otherwise) {
            self.skip(Tag::Break);
            node.left = Some(self.expression(0)?);
        }
        Ok(self.ast.push(node))
    }

    /// Parses `\graphic{f}{args}{points}`.
    ///
    /// The points group is not parsed: its byte span (braces included) is
    /// recorded so evaluation can overwrite it with freshly sampled points.
    fn graphic(&mut self, token: &'t Token) -> ParseResult<NodeId> {
        let name = self.argument(Tag::LBrace)?;
        let name = &self.ast[name];
        if name.tag != Tag::Ident || !name.fields.is_empty() {
            return Err(ParseError::ExpectedIdentifier { coord: name.coord });
        }
        let mut node = Node::from_token(token, Tag::Graphic);
        node.label = name.label.clone();

        if !self.skip(Tag::LBrace) {
            return Err(ParseError::ExpectedArgument { open:  "{",
                                                      coord: self.current().begin.coord, });
        }
        node.fields = self.list(Tag::RBrace)?;

        if self.current().tag != Tag::LBrace {
            return Err(ParseError::ExpectedPlotData { coord: self.current().begin.coord });
        }
        let (open, close) = self.skip_group()?;
        node.span = Some((open.begin.offset, close.end.offset));
        Ok(self.ast.push(node))
    }
}
