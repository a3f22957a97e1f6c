//! Multiblock crate - rotation-invariant structural pattern matching
//!
//! This crate decides whether a region of a voxel world satisfies an
//! immutable 3D pattern in any of the four cardinal rotations, and drives
//! the formed/unformed transition of the matched structure.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      Pattern                             │
//! ├─────────────────────────────────────────────────────────┤
//! │  Data model                                              │
//! │  ├── Cell symbols indexed [y][x][z]                     │
//! │  ├── Shared symbol → Definition map                     │
//! │  └── Anchor (master cell offset)                        │
//! ├─────────────────────────────────────────────────────────┤
//! │  Matcher                                                 │
//! │  ├── find_match - rotation search 0→270                 │
//! │  └── is_still_valid - formed-mode re-validation         │
//! ├─────────────────────────────────────────────────────────┤
//! │  Assembly                                                │
//! │  ├── form - attach notifications with anchor offsets    │
//! │  └── deform - detach notifications                      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! World access goes through the [`WorldGrid`] / [`MemberGrid`] traits, so
//! the engine carries no storage of its own; [`VoxelGrid`] is a ready-made
//! in-memory implementation. The logical state machine (UNFORMED → formed →
//! UNFORMED) is owned by the host: this crate supplies the transition
//! triggers, never the state.
//!
//! # Example
//!
//! ```rust
//! use multiblock::{Cell, Definition, Pattern, Rotation, VoxelGrid};
//! use glam::IVec3;
//! use std::collections::HashMap;
//! use std::rc::Rc;
//!
//! // A single-cell pattern requiring hardness of at least 3
//! let definitions = Rc::new(HashMap::from([('h', Definition::hardness(3.0))]));
//! let pattern = Pattern::new(
//!     vec![vec![vec!['h']]],
//!     definitions,
//!     IVec3::ONE,
//!     IVec3::ZERO,
//! )
//! .unwrap();
//!
//! let mut world = VoxelGrid::new();
//! world.set(IVec3::ZERO, Cell::new(1, 5.0, true));
//!
//! assert_eq!(pattern.find_match(&world, IVec3::ZERO), Some(Rotation::R0));
//! ```

mod assembly;
mod definition;
mod error;
mod grid;
mod matcher;
mod pattern;
mod rotation;
mod world;

pub use definition::Definition;
pub use error::{Error, Result};
pub use grid::{Cell, VoxelGrid};
pub use pattern::Pattern;
pub use rotation::{rotate_layer, Rotation};
pub use world::{MemberGrid, StructuralMember, WorldGrid};

// Re-export glam for convenience
pub use glam;
