//! Cell definitions matched against world state

use crate::WorldGrid;
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Per-cell requirement of a pattern
///
/// Definitions are evaluated in two modes: [`Definition::matches_unformed`]
/// asks whether a raw world cell is acceptable before the structure exists,
/// [`Definition::matches_formed`] whether the cell is still acceptable once
/// the structure occupies the region. Each variant carries its own formed
/// semantics; most property checks read the same in both modes, `Empty` does
/// not (see the variant docs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Definition {
    /// Block hardness must reach the given threshold
    HardnessAtLeast {
        /// Minimum acceptable hardness (inclusive)
        min: f32,
    },

    /// Exact material match
    Material {
        /// Material value to match
        material: u8,
    },

    /// Any solid block (material != 0)
    Solid,

    /// Block must be opaque
    Opaque,

    /// Cell must be empty air before forming. Once formed, the cell may
    /// instead hold an addressable member: the assembled structure is
    /// allowed to occupy the void it required at discovery time.
    Empty,

    /// An addressable member of the given kind must be present
    Member {
        /// Member kind tag to match
        kind: String,
    },

    /// Wildcard, accepts any cell in both modes
    Any,

    /// All inner definitions must accept the cell
    All(Vec<Definition>),

    /// At least one inner definition must accept the cell
    AnyOf(Vec<Definition>),

    /// Inner definition must reject the cell
    Not(Box<Definition>),
}

impl Definition {
    /// Create a hardness-threshold definition
    pub fn hardness(min: f32) -> Self {
        Definition::HardnessAtLeast { min }
    }

    /// Create an exact-material definition
    pub fn material(material: u8) -> Self {
        Definition::Material { material }
    }

    /// Create a member-kind definition
    pub fn member(kind: impl Into<String>) -> Self {
        Definition::Member { kind: kind.into() }
    }

    /// Combine definitions so that every one must accept the cell
    pub fn all(definitions: impl IntoIterator<Item = Definition>) -> Self {
        Definition::All(definitions.into_iter().collect())
    }

    /// Combine definitions so that any one accepting the cell is enough
    pub fn any_of(definitions: impl IntoIterator<Item = Definition>) -> Self {
        Definition::AnyOf(definitions.into_iter().collect())
    }

    /// Negate this definition
    pub fn not(self) -> Self {
        Definition::Not(Box::new(self))
    }

    /// Would this raw world cell be acceptable with no structure formed here?
    pub fn matches_unformed<W: WorldGrid + ?Sized>(&self, world: &W, position: IVec3) -> bool {
        match self {
            Definition::HardnessAtLeast { min } => world.hardness(position) >= *min,
            Definition::Material { material } => world.material(position) == *material,
            Definition::Solid => world.material(position) != 0,
            Definition::Opaque => world.is_opaque(position),
            Definition::Empty => world.material(position) == 0,
            Definition::Member { kind } => {
                world.member(position).is_some_and(|m| m.kind() == kind.as_str())
            }
            Definition::Any => true,
            Definition::All(inner) => {
                inner.iter().all(|d| d.matches_unformed(world, position))
            }
            Definition::AnyOf(inner) => {
                inner.iter().any(|d| d.matches_unformed(world, position))
            }
            Definition::Not(inner) => !inner.matches_unformed(world, position),
        }
    }

    /// Is this cell acceptable given the structure already occupies it?
    pub fn matches_formed<W: WorldGrid + ?Sized>(&self, world: &W, position: IVec3) -> bool {
        match self {
            Definition::HardnessAtLeast { min } => world.hardness(position) >= *min,
            Definition::Material { material } => world.material(position) == *material,
            Definition::Solid => world.material(position) != 0,
            Definition::Opaque => world.is_opaque(position),
            Definition::Empty => {
                world.material(position) == 0 || world.member(position).is_some()
            }
            Definition::Member { kind } => {
                world.member(position).is_some_and(|m| m.kind() == kind.as_str())
            }
            Definition::Any => true,
            Definition::All(inner) => inner.iter().all(|d| d.matches_formed(world, position)),
            Definition::AnyOf(inner) => inner.iter().any(|d| d.matches_formed(world, position)),
            Definition::Not(inner) => !inner.matches_formed(world, position),
        }
    }
}
