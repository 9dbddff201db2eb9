use serde::{Deserialize, Serialize};

/// Number of color families the palette cycles through.
pub const PALETTE_FAMILIES: usize = 4;

/// Shades available within one family, from strongest (0) to lightest.
pub const SHADES_PER_FAMILY: usize = 4;

/// Opaque color identity attached to every aggregate node.
///
/// The engine only promises structure: an outer group and its first-ranked
/// child share a family, siblings get distinct shades until the family runs
/// out. Mapping a token to an actual RGB value is the renderer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorToken {
    pub family: usize,
    pub shade: usize,
}

/// Token for an outer (top-level) group: the group's ordinal picks a family
/// with wrap-around, and the outer node always gets the strongest shade.
pub fn outer_token(outer_ordinal: usize) -> ColorToken {
    ColorToken {
        family: outer_ordinal % PALETTE_FAMILIES,
        shade: 0,
    }
}

/// Token for a child node: same family as its parent, shade `child + 1`.
/// Once the family's shades are exhausted every further child shares the
/// terminal shade - graceful degradation, not an error.
pub fn child_token(outer_ordinal: usize, child_ordinal: usize) -> ColorToken {
    ColorToken {
        family: outer_ordinal % PALETTE_FAMILIES,
        shade: (child_ordinal + 1).min(SHADES_PER_FAMILY - 1),
    }
}
