//! Discrete rotations of pattern layers about the vertical axis

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One of the four cardinal orientations about the vertical (Y) axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// No rotation
    R0,
    /// 90 degrees clockwise
    R90,
    /// 180 degrees
    R180,
    /// 270 degrees clockwise
    R270,
}

impl Rotation {
    /// All rotations in match-search order (ascending, R0 first)
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Number of 90-degree clockwise steps (0-3)
    pub fn steps(self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Create from a step count, wrapping modulo 4
    pub fn from_steps(steps: usize) -> Self {
        Rotation::ALL[steps % 4]
    }

    /// Whether this rotation swaps the x and z extents of a footprint
    ///
    /// Odd rotations turn a rectangular layer into an axis-swapped bounding
    /// box; callers must swap their x/z iteration indices accordingly.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::R90 | Rotation::R270)
    }

    /// The next rotation clockwise
    pub fn next(self) -> Self {
        Rotation::from_steps(self.steps() + 1)
    }
}

/// Rotate a single pattern layer about the vertical axis.
///
/// Rows index x, columns index z. `R0` borrows the layer unchanged and
/// copies nothing; the other rotations allocate the rotated grid. Pure
/// function of its inputs.
pub fn rotate_layer(layer: &[Vec<char>], rotation: Rotation) -> Cow<'_, [Vec<char>]> {
    match rotation {
        Rotation::R0 => Cow::Borrowed(layer),
        _ => {
            let mut rotated = layer.to_vec();
            for _ in 0..rotation.steps() {
                rotated = rotate_quarter(&rotated);
            }
            Cow::Owned(rotated)
        }
    }
}

/// One 90-degree clockwise step: an (x, z) grid becomes a (z, x) grid
fn rotate_quarter(layer: &[Vec<char>]) -> Vec<Vec<char>> {
    let x_len = layer.len();
    let z_len = layer.first().map_or(0, Vec::len);
    (0..z_len)
        .map(|i| (0..x_len).map(|j| layer[x_len - 1 - j][i]).collect())
        .collect()
}
