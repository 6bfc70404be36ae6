use crate::{
    ast::NodeId,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
        tag::{PRIMARY_ONLY, Tag},
    },
};

impl<'t> Parser<'t> {
    /// Builds the error for a token that cannot appear at the cursor.
    ///
    /// Running into the end-of-block token yields `UnexpectedEndOfBlock`
    /// instead of `UnexpectedToken`.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        if token.tag == Tag::None {
            ParseError::UnexpectedEndOfBlock { coord: token.begin.coord }
        } else {
            ParseError::UnexpectedToken { token: token.label.clone(),
                                          expected,
                                          coord: token.begin.coord }
        }
    }

    /// Consumes a token of the given tag or fails.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 tag: Tag,
                                                 expected: &'static str)
                                                 -> ParseResult<&'t Token> {
        if self.current().tag == tag {
            Ok(self.next())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Parses a comma-separated list of expressions terminated by `close`.
    ///
    /// The opening delimiter has already been consumed. An immediately found
    /// `close` yields an empty list.
    ///
    /// Grammar: `list := (expression ("," expression)*)? close`
    ///
    /// # Errors
    /// `ListNotClosed` if an element is followed by anything but `,` or
    /// `close`.
    pub(in crate::interpreter::parser) fn list(&mut self, close: Tag) -> ParseResult<Vec<NodeId>> {
        let mut items = Vec::new();
        if self.skip(close) {
            return Ok(items);
        }
        loop {
            items.push(self.expression(0)?);
            if self.skip(Tag::Comma) {
                continue;
            }
            if self.skip(close) {
                return Ok(items);
            }
            return Err(ParseError::ListNotClosed { coord: self.current().begin.coord });
        }
    }

    /// Parses one delimited argument such as `{x + 1}` or `[0.5]`.
    ///
    /// The delimiters are part of the argument and are parsed as a grouping
    /// operand.
    ///
    /// # Errors
    /// `ExpectedArgument` if the cursor is not on `open`.
    pub(in crate::interpreter::parser) fn argument(&mut self, open: Tag) -> ParseResult<NodeId> {
        if self.current().tag != open {
            let open = match open {
                Tag::LBracket => "[",
                Tag::LParen => "(",
                _ => "{",
            };
            return Err(ParseError::ExpectedArgument { open,
                                                      coord: self.current().begin.coord });
        }
        self.expression(PRIMARY_ONLY)
    }

    /// Skips a balanced `{...}` group without parsing it and returns its
    /// opening and closing tokens.
    pub(in crate::interpreter::parser) fn skip_group(&mut self)
                                                     -> ParseResult<(&'t Token, &'t Token)> {
        let open = self.expect(Tag::LBrace, "'{'")?;
        let mut depth = 1usize;
        loop {
            let token = self.next();
            match token.tag {
                Tag::LBrace => depth += 1,
                Tag::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok((open, token));
                    }
                },
                Tag::None => {
                    return Err(ParseError::UnexpectedEndOfBlock { coord: token.begin.coord });
                },
                _ => {},
            }
        }
    }
}
