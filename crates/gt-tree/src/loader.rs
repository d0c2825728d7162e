//! Text loader for decision trees.
//!
//! # Format
//!
//! Whitespace-separated integers, one record per line.  Blank lines are
//! ignored.
//!
//! ```text
//! N M R                                   node count, leaf count, root
//! index attribute k child_1 ... child_k   N node lines, any order
//! index -1 -1                             a leaf placeholder
//! index strategy                          M leaf lines, strategy in 0..8
//! ```
//!
//! `attribute` is an [`Attribute`] index.  Each leaf placeholder must
//! receive exactly one strategy; internal nodes must receive none.
//!
//! # Fallback
//!
//! [`parse_or_default`] and [`load_or_default`] never fail: any
//! configuration error is logged at `warn` and the canonical tree from
//! [`canonical`](crate::canonical) is returned instead.

use std::path::Path;

use tracing::warn;

use gt_behavior::Strategy;
use gt_core::Attribute;

use crate::{DecisionTree, Node, TreeError, TreeResult, canonical};

// ── Public API ────────────────────────────────────────────────────────────────

pub fn parse(source: &str) -> TreeResult<DecisionTree> {
    let mut lines = Lines::new(source);

    let (line, header) = lines.record()?;
    let [n, m, root] = header[..] else {
        return Err(parse_err(line, "header must be `N M R`"));
    };
    let n = non_negative(line, n, "node count")?;
    let m = non_negative(line, m, "leaf count")?;
    let root = non_negative(line, root, "root")?;

    // ── Node lines ────────────────────────────────────────────────────────
    // `None` = not yet defined, `Some(None)` = leaf placeholder.
    let mut shape: Vec<Option<Option<(Attribute, Vec<usize>)>>> = vec![None; n];
    for _ in 0..n {
        let (line, rec) = lines.record()?;
        let [index, attribute, k, ref children @ ..] = rec[..] else {
            return Err(parse_err(line, "node line needs `index attribute childCount`"));
        };
        let index = in_range(line, index, n, "node index")?;
        if shape[index].is_some() {
            return Err(parse_err(line, format!("node {index} defined twice")));
        }

        if attribute == -1 && k == -1 {
            if !children.is_empty() {
                return Err(parse_err(line, "leaf placeholder lists children"));
            }
            shape[index] = Some(None);
            continue;
        }

        let attr = usize::try_from(attribute)
            .ok()
            .and_then(Attribute::from_index)
            .ok_or_else(|| parse_err(line, format!("unknown attribute {attribute}")))?;
        if k <= 0 {
            return Err(parse_err(line, format!("internal node {index} has child count {k}")));
        }
        if children.len() != k as usize {
            return Err(parse_err(
                line,
                format!("node {index} declares {k} children, lists {}", children.len()),
            ));
        }
        let mut kids = Vec::with_capacity(children.len());
        for &c in children {
            if c < 0 || c as usize >= n {
                return Err(TreeError::ChildOutOfRange { node: index, child: c, count: n });
            }
            kids.push(c as usize);
        }
        shape[index] = Some(Some((attr, kids)));
    }

    // ── Leaf lines ────────────────────────────────────────────────────────
    let mut strategies: Vec<Option<Strategy>> = vec![None; n];
    for _ in 0..m {
        let (line, rec) = lines.record()?;
        let [index, strategy] = rec[..] else {
            return Err(parse_err(line, "leaf line must be `index strategy`"));
        };
        let index = in_range(line, index, n, "leaf index")?;
        if !matches!(shape[index], Some(None)) {
            return Err(parse_err(line, format!("node {index} is not a leaf placeholder")));
        }
        if strategies[index].is_some() {
            return Err(parse_err(line, format!("leaf {index} assigned twice")));
        }
        let s = usize::try_from(strategy)
            .ok()
            .and_then(Strategy::from_index)
            .ok_or(TreeError::StrategyOutOfRange { node: index, strategy })?;
        strategies[index] = Some(s);
    }

    if let Some((line, _)) = lines.next_record() {
        return Err(parse_err(line, "unexpected trailing record"));
    }

    // ── Assemble ──────────────────────────────────────────────────────────
    let mut nodes = Vec::with_capacity(n);
    for (i, (slot, strategy)) in shape.into_iter().zip(strategies).enumerate() {
        let node = match slot {
            Some(Some((attribute, children))) => Node::Internal { attribute, children },
            Some(None) => match strategy {
                Some(strategy) => Node::Leaf { strategy },
                None => return Err(TreeError::MissingStrategy { node: i }),
            },
            None => return Err(parse_err(0, format!("node {i} never defined"))),
        };
        nodes.push(node);
    }
    DecisionTree::new(nodes, root)
}

pub fn load(path: &Path) -> TreeResult<DecisionTree> {
    let source = std::fs::read_to_string(path)?;
    parse(&source)
}

/// Parse `source`, or fall back to the canonical tree on any configuration
/// error.
pub fn parse_or_default(source: &str) -> DecisionTree {
    parse(source).unwrap_or_else(|e| {
        warn!(error = %e, "invalid decision tree, using canonical tree");
        canonical()
    })
}

/// Load the tree at `path`, or fall back to the canonical tree if the file
/// is missing or malformed.
pub fn load_or_default(path: &Path) -> DecisionTree {
    load(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "cannot load decision tree, using canonical tree");
        canonical()
    })
}

// ── Tokenizer ─────────────────────────────────────────────────────────────────

struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(source: &'a str) -> Self {
        Self { inner: source.lines().enumerate() }
    }

    /// The next non-blank line as integers, with its 1-based line number.
    fn next_record(&mut self) -> Option<(usize, &'a str)> {
        self.inner
            .by_ref()
            .map(|(i, l)| (i + 1, l.trim()))
            .find(|(_, l)| !l.is_empty())
    }

    fn record(&mut self) -> TreeResult<(usize, Vec<i64>)> {
        let Some((line, text)) = self.next_record() else {
            return Err(parse_err(0, "unexpected end of input"));
        };
        let values = text
            .split_whitespace()
            .map(|t| t.parse::<i64>().map_err(|_| parse_err(line, format!("`{t}` is not an integer"))))
            .collect::<TreeResult<Vec<_>>>()?;
        Ok((line, values))
    }
}

fn parse_err(line: usize, reason: impl Into<String>) -> TreeError {
    TreeError::Parse { line, reason: reason.into() }
}

fn non_negative(line: usize, v: i64, what: &str) -> TreeResult<usize> {
    usize::try_from(v).map_err(|_| parse_err(line, format!("{what} {v} is negative")))
}

fn in_range(line: usize, v: i64, n: usize, what: &str) -> TreeResult<usize> {
    match usize::try_from(v) {
        Ok(i) if i < n => Ok(i),
        _ => Err(parse_err(line, format!("{what} {v} outside 0..{n}"))),
    }
}
