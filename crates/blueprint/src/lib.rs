//! Blueprint crate - the factory layer for multiblock patterns
//!
//! Turns textual layer templates and symbol definitions into validated
//! [`multiblock::Pattern`]s, and keeps them in a shared registry so every
//! consumer of a named pattern holds the same allocation (which is what the
//! engine's identity-sensitive pattern equality keys on).
//!
//! # Example
//!
//! ```rust
//! use blueprint::{parse_template, PatternBuilder, PatternRegistry};
//! use multiblock::{Cell, Definition, VoxelGrid, Rotation};
//! use glam::IVec3;
//!
//! let template = parse_template(
//!     "# a 1x1x2 strip\n\
//!      ab\n",
//! )
//! .unwrap();
//!
//! let pattern = PatternBuilder::new()
//!     .template(template)
//!     .define('a', Definition::material(1))
//!     .define('b', Definition::material(2))
//!     .build()
//!     .unwrap();
//!
//! let mut registry = PatternRegistry::new();
//! let shared = registry.insert("strip", pattern).unwrap();
//!
//! let mut world = VoxelGrid::new();
//! world.set(IVec3::ZERO, Cell::new(1, 1.0, true));
//! world.set(IVec3::Z, Cell::new(2, 1.0, true));
//!
//! assert_eq!(shared.find_match(&world, IVec3::ZERO), Some(Rotation::R0));
//! ```

mod builder;
mod registry;
mod template;

pub use builder::{BuildError, PatternBuilder};
pub use registry::{PatternRegistry, RegistryError};
pub use template::{parse_template, Template, TemplateError};

// Re-export the engine crate for convenience
pub use multiblock;
