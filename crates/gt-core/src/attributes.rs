//! The per-ghost attribute vector classified by the decision tree.
//!
//! Attribute indices are part of the decision-tree file format and must never
//! be renumbered:
//!
//! | index | attribute     | values                                      |
//! |-------|---------------|---------------------------------------------|
//! | 0     | `Ghost`       | ghost id, `0..ghost_count`                  |
//! | 1     | `Edible`      | 0 / 1                                       |
//! | 2     | `Chase`       | 1 = chase phase, 0 = scatter phase          |
//! | 3     | `PhaseTimer`  | ticks until the phase flips (not branchable)|
//! | 4     | `Reserved`    | always 0                                    |
//! | 5     | `NearActor`   | 1 when the actor is within critical distance|
//! | 6     | `PillsLow`    | 1 once few collectibles remain (sticky)     |

use crate::AgentId;

// ── Attribute ─────────────────────────────────────────────────────────────────

/// Names one slot of an [`AttributeVector`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Attribute {
    Ghost      = 0,
    Edible     = 1,
    Chase      = 2,
    PhaseTimer = 3,
    Reserved   = 4,
    NearActor  = 5,
    PillsLow   = 6,
}

impl Attribute {
    /// Length of an attribute vector; also the maximum decision-tree depth.
    pub const COUNT: usize = 7;

    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::Ghost,
        Attribute::Edible,
        Attribute::Chase,
        Attribute::PhaseTimer,
        Attribute::Reserved,
        Attribute::NearActor,
        Attribute::PillsLow,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Attribute> {
        Self::ALL.get(i).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Ghost      => "ghost",
            Attribute::Edible     => "edible",
            Attribute::Chase      => "chase",
            Attribute::PhaseTimer => "phase_timer",
            Attribute::Reserved   => "reserved",
            Attribute::NearActor  => "near_actor",
            Attribute::PillsLow   => "pills_low",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AttributeSchema ───────────────────────────────────────────────────────────

/// The value domains of each attribute for one engine instance.
///
/// A decision tree is checked against the schema once at engine build: every
/// internal node must branch on an attribute with a finite domain and carry
/// at least one child per value in it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AttributeSchema {
    pub ghost_count: u32,
}

impl AttributeSchema {
    pub fn new(ghost_count: u32) -> Self {
        Self { ghost_count }
    }

    /// Number of distinct values `attr` can take, or `None` when the
    /// attribute is a counter a tree must not branch on.
    pub fn cardinality(&self, attr: Attribute) -> Option<u32> {
        match attr {
            Attribute::Ghost => Some(self.ghost_count),
            Attribute::Edible | Attribute::Chase | Attribute::NearActor | Attribute::PillsLow => Some(2),
            Attribute::Reserved => Some(1),
            Attribute::PhaseTimer => None,
        }
    }

    /// Every combination of branchable attribute values, with the phase
    /// timer held at 1.  Used to check classification totality.
    pub fn enumerate(&self) -> impl Iterator<Item = AttributeVector> + '_ {
        (0..self.ghost_count).flat_map(|g| {
            (0..16u32).map(move |bits| AttributeVector {
                ghost:       AgentId(g as u8),
                edible:      bits & 1 != 0,
                chase:       bits & 2 != 0,
                phase_timer: 1,
                reserved:    0,
                near_actor:  bits & 4 != 0,
                pills_low:   bits & 8 != 0,
            })
        })
    }
}

// ── AttributeVector ───────────────────────────────────────────────────────────

/// One ghost's attributes for the current tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeVector {
    pub ghost:       AgentId,
    pub edible:      bool,
    /// `true` in the chase phase, `false` in the scatter phase.
    pub chase:       bool,
    pub phase_timer: u32,
    pub reserved:    u32,
    pub near_actor:  bool,
    pub pills_low:   bool,
}

impl AttributeVector {
    /// A vector for `ghost` with every other field at its default.
    pub fn new(ghost: AgentId) -> Self {
        Self {
            ghost,
            edible:      false,
            chase:       false,
            phase_timer: 0,
            reserved:    0,
            near_actor:  false,
            pills_low:   false,
        }
    }

    /// The discrete value of `attr`, as used to index tree children.
    #[inline]
    pub fn value(&self, attr: Attribute) -> u32 {
        match attr {
            Attribute::Ghost      => self.ghost.0 as u32,
            Attribute::Edible     => self.edible as u32,
            Attribute::Chase      => self.chase as u32,
            Attribute::PhaseTimer => self.phase_timer,
            Attribute::Reserved   => self.reserved,
            Attribute::NearActor  => self.near_actor as u32,
            Attribute::PillsLow   => self.pills_low as u32,
        }
    }
}
