use std::collections::BTreeMap;

use tracing::warn;

use crate::interpreter::{
    scanner::Coordinate,
    tag::Tag,
    value::{core::Value, matrix::Matrix},
};

/// One pending rewrite of block text: the byte range `begin..end` will be
/// replaced by the rendered value wrapped in braces.
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    /// [`Tag::Placeholder`] or [`Tag::Graphic`].
    pub tag:   Tag,
    /// First byte of the replaced range.
    pub begin: usize,
    /// One past the last byte of the replaced range.
    pub end:   usize,
    /// The computed value.
    pub value: Value,
}

impl Replacement {
    /// The text that takes the place of the range.
    ///
    /// Placeholders render the value; graphics render the sampled points,
    /// one `(x,y)` pair per line.
    #[must_use]
    pub fn render(&self) -> String {
        match (&self.value, self.tag) {
            (Value::Matrix(points), Tag::Graphic) => format!("{{{}}}", plot_points(points)),
            (value, _) => format!("{{{value}}}"),
        }
    }
}

/// Renders an `n x 2` matrix as `(x,y)` lines, dropping units.
fn plot_points(points: &Matrix) -> String {
    let mut out = String::new();
    for row in points.row_slices() {
        let cells: Vec<String> = row.iter()
                                    .map(|cell| match cell {
                                        Value::Scalar(v, _) => v.to_string(),
                                        other => other.to_string(),
                                    })
                                    .collect();
        out.push('(');
        out.push_str(&cells.join(","));
        out.push_str(")\n");
    }
    out
}

/// Replacements of the block being processed, ordered by the coordinate of
/// the node that produced them.
#[derive(Debug, Clone, Default)]
pub struct ReplacementMap {
    entries: BTreeMap<Coordinate, Replacement>,
}

impl ReplacementMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a replacement, overwriting any earlier one at the same
    /// coordinate (a loop re-evaluating the same placeholder keeps the last
    /// value).
    pub fn insert(&mut self, coord: Coordinate, replacement: Replacement) {
        self.entries.insert(coord, replacement);
    }

    /// The replacement recorded at `coord`, if any.
    #[must_use]
    pub fn get(&self, coord: Coordinate) -> Option<&Replacement> {
        self.entries.get(&coord)
    }

    /// Number of recorded replacements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every replacement.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates in ascending coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (&Coordinate, &Replacement)> {
        self.entries.iter()
    }

    /// Applies every replacement to `text` in ascending coordinate order.
    ///
    /// Ranges that overlap an earlier one or fall outside `text` are skipped.
    ///
    /// # Example
    /// ```
    /// use texcalc::interpreter::{
    ///     evaluator::replacement::{Replacement, ReplacementMap},
    ///     scanner::Coordinate,
    ///     tag::Tag,
    ///     value::core::Value,
    /// };
    ///
    /// let mut map = ReplacementMap::new();
    /// map.insert(Coordinate::new(1, 5),
    ///            Replacement { tag:   Tag::Placeholder,
    ///                          begin: 16,
    ///                          end:   18,
    ///                          value: Value::number(5.0), });
    ///
    /// assert_eq!(map.stitch(r"y = \placeholder{}"), r"y = \placeholder{5}");
    /// ```
    #[must_use]
    pub fn stitch(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for (coord, replacement) in &self.entries {
            let (begin, end) = (replacement.begin, replacement.end);
            if begin < cursor
               || end < begin
               || !text.is_char_boundary(begin)
               || !text.is_char_boundary(end)
            {
                warn!(%coord, begin, end, "skipping replacement outside the block text");
                continue;
            }
            out.push_str(&text[cursor..begin]);
            out.push_str(&replacement.render());
            cursor = end;
        }
        out.push_str(&text[cursor..]);
        out
    }
}
