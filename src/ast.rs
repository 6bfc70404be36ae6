use std::{fmt::Write as _, ops::Index};

use crate::interpreter::{lexer::Token, scanner::Coordinate, tag::Tag};

/// Index of a node inside its [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A single syntax-tree node.
///
/// Which children are populated depends on the tag:
///
/// | tag | children |
/// |-----|----------|
/// | binary operators | `left`, `right` |
/// | prefix operators | `right` |
/// | `Ident` | `fields`: subscript indices (0–2) |
/// | `Func`, `Keyword` | `fields`: arguments |
/// | `Root`, `BeginBlock` | `fields`: statements |
/// | `BeginMatrix` | `fields`: `List` rows, each with cell `fields` |
/// | `BeginCase` | `fields`: `Alt` nodes with value `right` and optional `cond` |
/// | `Range` | `left` from, `right` to, optional `cond` step |
/// | `Transpose` | `left` |
/// | `Frac` | `left` numerator, `right` denominator |
/// | `If` | `cond`, `right` then, optional `left` else |
/// | `While`, `Product` | `cond`, `right` body |
/// | `Graphic` | `fields`: arguments, `span`: plot data |
/// | `Placeholder` | `span`: the attribute |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Source location of the token the node was built from.
    pub coord:  Coordinate,
    /// Node kind.
    pub tag:    Tag,
    /// Token label: the number, name or control word for leaves.
    pub label:  String,
    /// First operand.
    pub left:   Option<NodeId>,
    /// Second operand.
    pub right:  Option<NodeId>,
    /// Condition or step.
    pub cond:   Option<NodeId>,
    /// Variable-length children.
    pub fields: Vec<NodeId>,
    /// Byte range of block text that evaluation rewrites.
    pub span:   Option<(usize, usize)>,
}

impl Node {
    /// Creates a childless node from a token, under the given tag.
    #[must_use]
    pub fn from_token(token: &Token, tag: Tag) -> Self {
        Self { coord: token.begin.coord,
               tag,
               label: token.label.clone(),
               left: None,
               right: None,
               cond: None,
               fields: Vec::new(),
               span: None }
    }
}

/// Arena owning every node of one parsed block (or one function body).
///
/// Nodes refer to their children by [`NodeId`]; dropping the arena drops
/// the whole tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Moves a node into the arena and returns its id.
    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Number of nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena holds no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Copies the subtree rooted at `root` into a fresh arena.
    ///
    /// Children are copied before their parents, so the returned root is the
    /// last node of the new arena. Source spans are dropped, since the copy
    /// outlives the block text they point into.
    ///
    /// # Example
    /// ```
    /// use texcalc::interpreter::{lexer::tokenize, parser::core::parse, scanner::Block};
    ///
    /// let tokens = tokenize(&Block::from_source("f(x) := x^2 + 1")).unwrap();
    /// let (ast, root) = parse(&tokens).unwrap();
    /// let assign = ast[root].fields[0];
    /// let body = ast[assign].right.unwrap();
    ///
    /// let (copy, copy_root) = ast.subtree(body);
    /// // `+`, `^`, `x`, `2` and `1`
    /// assert_eq!(copy.len(), 5);
    /// assert_eq!(copy[copy_root].tag, ast[body].tag);
    /// ```
    #[must_use]
    pub fn subtree(&self, root: NodeId) -> (Self, NodeId) {
        let mut out = Self::new();
        let id = self.copy_into(root, &mut out);
        (out, id)
    }

    fn copy_into(&self, id: NodeId, out: &mut Self) -> NodeId {
        let node = &self[id];
        let left = node.left.map(|child| self.copy_into(child, out));
        let right = node.right.map(|child| self.copy_into(child, out));
        let cond = node.cond.map(|child| self.copy_into(child, out));
        let fields = node.fields.iter().map(|&child| self.copy_into(child, out)).collect();
        out.push(Node { coord: node.coord,
                        tag: node.tag,
                        label: node.label.clone(),
                        left,
                        right,
                        cond,
                        fields,
                        span: None })
    }

    /// Renders the subtree rooted at `root` as an indented outline, one node
    /// per line.
    #[must_use]
    pub fn dump(&self, root: NodeId) -> String {
        let mut out = String::new();
        self.dump_into(root, 0, "", &mut out);
        out
    }

    fn dump_into(&self, id: NodeId, depth: usize, role: &str, out: &mut String) {
        let node = &self[id];
        let _ = write!(out, "{:indent$}{role}{}", "", node.tag, indent = depth * 2);
        if node.label != node.tag.to_string() {
            let _ = write!(out, " {}", node.label);
        }
        let _ = writeln!(out, " @{}", node.coord);

        if let Some(cond) = node.cond {
            self.dump_into(cond, depth + 1, "cond: ", out);
        }
        if let Some(left) = node.left {
            self.dump_into(left, depth + 1, "left: ", out);
        }
        if let Some(right) = node.right {
            self.dump_into(right, depth + 1, "right: ", out);
        }
        for &field in &node.fields {
            self.dump_into(field, depth + 1, "", out);
        }
    }
}

impl Index<NodeId> for Ast {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
