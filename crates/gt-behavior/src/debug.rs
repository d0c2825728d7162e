//! Advisory debug annotations for an optional overlay renderer.
//!
//! Strategies describe what they aimed at ("highlight this node", "draw a
//! line from here to there").  Nothing reads annotations back; they never
//! influence a decision, and a disabled [`Annotations`] buffer drops every
//! push without allocating.

use gt_core::{AgentId, NodeId};

/// Who an annotation belongs to.  Renderers typically map this to a colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Ghost(AgentId),
    /// Nodes within the critical distance of the actor.
    CriticalZone,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Annotation {
    Highlight { node: NodeId, tag: Tag },
    Line { from: NodeId, to: NodeId, tag: Tag },
}

/// A per-ghost annotation buffer.
#[derive(Debug, Default)]
pub struct Annotations {
    enabled: bool,
    items:   Vec<Annotation>,
}

impl Annotations {
    /// A buffer that drops everything.
    pub fn disabled() -> Self {
        Self { enabled: false, items: Vec::new() }
    }

    pub fn enabled() -> Self {
        Self { enabled: true, items: Vec::new() }
    }

    pub fn with_enabled(enabled: bool) -> Self {
        Self { enabled, items: Vec::new() }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn highlight(&mut self, node: NodeId, tag: Tag) {
        if self.enabled {
            self.items.push(Annotation::Highlight { node, tag });
        }
    }

    #[inline]
    pub fn line(&mut self, from: NodeId, to: NodeId, tag: Tag) {
        if self.enabled {
            self.items.push(Annotation::Line { from, to, tag });
        }
    }

    pub fn items(&self) -> &[Annotation] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Forget recorded annotations, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
