use crate::{
    ast::{Node, NodeId},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        tag::Tag,
    },
};

impl Parser<'_> {
    /// Parses statements until the cursor reaches `stop`, which is left for
    /// the caller to consume. `\\` separators between statements are skipped.
    ///
    /// Grammar: `statements := ("\\" | expression)*`
    pub(in crate::interpreter::parser) fn statements(&mut self,
                                                     stop: Tag)
                                                     -> ParseResult<Vec<NodeId>> {
        let mut statements = Vec::new();
        loop {
            if self.skip(Tag::Break) {
                continue;
            }
            if self.current().tag == stop {
                return Ok(statements);
            }
            statements.push(self.expression(0)?);
        }
    }

    /// Parses the alternatives of a `caseblock` up to (not including)
    /// `\end{caseblock}`.
    ///
    /// Each alternative is a value followed by `\when <cond>` or by
    /// `\otherwise`; alternatives are separated by `\\`.
    ///
    /// ```text
    /// \begin{caseblock}
    ///     -1 \when x < 0 \\
    ///     1 \otherwise
    /// \end{caseblock}
    /// ```
    ///
    /// # Errors
    /// `MalformedCase` if a value is not followed by `\when` or `\otherwise`,
    /// or if the block has no alternatives.
    pub(in crate::interpreter::parser) fn cases(&mut self) -> ParseResult<Vec<NodeId>> {
        let mut alternatives = Vec::new();
        loop {
            while self.skip(Tag::Break) {}
            if self.current().tag == Tag::EndCase {
                if alternatives.is_empty() {
                    return Err(ParseError::MalformedCase { coord: self.current().begin.coord });
                }
                return Ok(alternatives);
            }

            let mut alt = Node::from_token(self.current(), Tag::Alt);
            alt.right = Some(self.expression(0)?);

            let keyword = self.next();
            match keyword.tag {
                Tag::When => alt.cond = Some(self.expression(0)?),
                Tag::Otherwise => {},
                _ => return Err(ParseError::MalformedCase { coord: keyword.begin.coord }),
            }
            alternatives.push(self.ast.push(alt));
        }
    }

    /// Parses the rows of a `pmatrix` up to (not including)
    /// `\end{pmatrix}`.
    ///
    /// Cells are separated by `&` and rows by `\\`; a trailing `\\` before
    /// the end is allowed. Each row becomes a [`Tag::List`] node.
    ///
    /// # Errors
    /// - `BadMatrixRow` if a row is empty or starts with a separator.
    /// - `MatrixNotRectangular` if a row's length differs from the first.
    pub(in crate::interpreter::parser) fn matrix(&mut self) -> ParseResult<Vec<NodeId>> {
        let mut rows = Vec::new();
        let mut width = None;
        loop {
            let first = self.current();
            if matches!(first.tag, Tag::Amp | Tag::Break | Tag::EndMatrix) {
                return Err(ParseError::BadMatrixRow { coord: first.begin.coord });
            }

            let mut row = Node::from_token(first, Tag::List);
            row.fields.push(self.expression(0)?);
            while self.skip(Tag::Amp) {
                row.fields.push(self.expression(0)?);
            }

            match width {
                Some(width) if width != row.fields.len() => {
                    return Err(ParseError::MatrixNotRectangular { coord: row.coord });
                },
                _ => width = Some(row.fields.len()),
            }
            rows.push(self.ast.push(row));

            if !self.skip(Tag::Break) || self.current().tag == Tag::EndMatrix {
                return Ok(rows);
            }
        }
    }
}
