//! The tree arena and classification.

use std::fmt;

use gt_behavior::Strategy;
use gt_core::{Attribute, AttributeSchema, AttributeVector};

use crate::{TreeError, TreeResult};

// ── Node ──────────────────────────────────────────────────────────────────────

/// One arena slot.  Children are arena indices, ordered by attribute value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Internal { attribute: Attribute, children: Vec<usize> },
    Leaf { strategy: Strategy },
}

impl Node {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

// ── DecisionTree ──────────────────────────────────────────────────────────────

/// An acyclic arena of [`Node`]s with a root index.
///
/// Construction checks that every child index is in range, that the graph
/// reachable from the root has no cycles, and that no root-to-leaf path
/// passes through more than [`Attribute::COUNT`] internal nodes.  After that
/// the tree is read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root:  usize,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Mark {
    Fresh,
    OnPath,
    Done,
}

impl DecisionTree {
    pub fn new(nodes: Vec<Node>, root: usize) -> TreeResult<Self> {
        let count = nodes.len();
        if root >= count {
            return Err(TreeError::RootOutOfRange { root, count });
        }
        for (i, node) in nodes.iter().enumerate() {
            if let Node::Internal { children, .. } = node {
                if let Some(&bad) = children.iter().find(|&&c| c >= count) {
                    return Err(TreeError::ChildOutOfRange { node: i, child: bad as i64, count });
                }
            }
        }
        let tree = Self { nodes, root };
        tree.check_shape()?;
        Ok(tree)
    }

    /// Depth-first walk with explicit enter/exit frames.  Each node is
    /// entered once; on exit its height (internal nodes on the longest path
    /// down to a leaf, itself included) is computed from its children's, so
    /// shared subtrees are never walked twice.
    fn check_shape(&self) -> TreeResult<()> {
        let mut mark = vec![Mark::Fresh; self.nodes.len()];
        let mut height = vec![0usize; self.nodes.len()];
        // (node, exiting)
        let mut stack = vec![(self.root, false)];

        while let Some((i, exiting)) = stack.pop() {
            if exiting {
                if let Node::Internal { children, .. } = &self.nodes[i] {
                    let h = 1 + children.iter().map(|&c| height[c]).max().unwrap_or(0);
                    if h > Attribute::COUNT {
                        return Err(TreeError::TooDeep { node: i, max: Attribute::COUNT });
                    }
                    height[i] = h;
                }
                mark[i] = Mark::Done;
                continue;
            }
            match mark[i] {
                Mark::Done => continue,
                Mark::OnPath => return Err(TreeError::Cycle { node: i }),
                Mark::Fresh => {}
            }
            match &self.nodes[i] {
                Node::Leaf { .. } => mark[i] = Mark::Done,
                Node::Internal { children, .. } => {
                    mark[i] = Mark::OnPath;
                    stack.push((i, true));
                    for &c in children.iter().rev() {
                        stack.push((c, false));
                    }
                }
            }
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn root(&self) -> usize {
        self.root
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, i: usize) -> Option<&Node> {
        self.nodes.get(i)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    // ── Classification ────────────────────────────────────────────────────

    /// Walk from the root to a leaf, following `children[value(attribute)]`
    /// at each internal node.
    ///
    /// Returns `AttributeOutOfRange` instead of indexing past the children of
    /// a node.  Trees validated against the engine's schema never do.
    pub fn classify(&self, v: &AttributeVector) -> TreeResult<Strategy> {
        let mut i = self.root;
        loop {
            match &self.nodes[i] {
                Node::Leaf { strategy } => return Ok(*strategy),
                Node::Internal { attribute, children } => {
                    let value = v.value(*attribute);
                    i = *children.get(value as usize).ok_or(TreeError::AttributeOutOfRange {
                        node:      i,
                        attribute: *attribute,
                        value,
                        children:  children.len(),
                    })?;
                }
            }
        }
    }

    /// Check that every internal node branches on a finite-domain attribute
    /// and has a child for each of its values under `schema`.
    ///
    /// A tree passing this check classifies every vector the tracker can
    /// produce.
    pub fn validate(&self, schema: &AttributeSchema) -> TreeResult<()> {
        for (i, node) in self.nodes.iter().enumerate() {
            let Node::Internal { attribute, children } = node else { continue };
            match schema.cardinality(*attribute) {
                None => {
                    return Err(TreeError::NotBranchable { node: i, attribute: *attribute });
                }
                Some(need) if children.len() < need as usize => {
                    return Err(TreeError::TooFewChildren {
                        node: i,
                        attribute: *attribute,
                        have: children.len(),
                        need,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    // ── Serialization ─────────────────────────────────────────────────────

    /// Render in the text format read by [`parse`](crate::parse).
    ///
    /// Nodes are written in arena order, so `parse(to_source())` rebuilds an
    /// identical tree.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} {} {}\n", self.nodes.len(), self.leaf_count(), self.root));
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Internal { attribute, children } => {
                    out.push_str(&format!("{i} {} {}", attribute.index(), children.len()));
                    for c in children {
                        out.push_str(&format!(" {c}"));
                    }
                    out.push('\n');
                }
                Node::Leaf { .. } => out.push_str(&format!("{i} -1 -1\n")),
            }
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let Node::Leaf { strategy } = node {
                out.push_str(&format!("{i} {}\n", strategy.index()));
            }
        }
        out
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, i: usize, indent: usize) -> fmt::Result {
        match &self.nodes[i] {
            Node::Leaf { strategy } => writeln!(f, "[id:{i}]-->{strategy}"),
            Node::Internal { attribute, children } => {
                writeln!(f, "[id:{i}] {attribute}?")?;
                for (value, &c) in children.iter().enumerate() {
                    write!(f, "{:width$}{value}: ", "", width = indent + 2)?;
                    self.fmt_node(f, c, indent + 2)?;
                }
                Ok(())
            }
        }
    }
}

/// Indented outline, one line per node:
///
/// ```text
/// [id:0] edible?
///   0: [id:1] chase?
///     0: [id:3] ghost?
///   ...
///   1: [id:2]-->frightened
/// ```
impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root, 0)
    }
}
