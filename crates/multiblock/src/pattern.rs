//! Immutable multiblock pattern data model

use crate::{Definition, Error, Result};
use glam::IVec3;
use std::collections::HashMap;
use std::rc::Rc;

/// An immutable 3D arrangement of cell symbols with their definitions
///
/// Cells are indexed `[y][x][z]`. The definitions map is shared: every
/// pattern handed out by one registry points at the same allocation, and
/// pattern equality deliberately compares that allocation by identity rather
/// than by content (see the `PartialEq` impl).
///
/// A pattern is read-only after construction; matching and formation never
/// mutate it.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Cell symbols indexed [y][x][z]
    pub(crate) cells: Vec<Vec<Vec<char>>>,
    /// Symbol to definition mapping, shared between related patterns
    pub(crate) definitions: Rc<HashMap<char, Definition>>,
    /// Declared extents (x, y, z)
    pub(crate) size: IVec3,
    /// Master cell offset within the pattern's local frame
    pub(crate) anchor: IVec3,
}

impl Pattern {
    /// Validate and build a pattern.
    ///
    /// `size` is the declared (x, y, z) extent and must match the cell array
    /// exactly on every axis; every symbol appearing in `cells` must have an
    /// entry in `definitions`. `anchor` locates the master cell in the
    /// pattern's local frame and is not range-checked (anchor offsets outside
    /// the footprint are legal, they only shift the offsets members receive).
    ///
    /// On any violation the pattern is never built; there is no partially
    /// constructed value to observe.
    pub fn new(
        cells: Vec<Vec<Vec<char>>>,
        definitions: Rc<HashMap<char, Definition>>,
        size: IVec3,
        anchor: IVec3,
    ) -> Result<Self> {
        if size.y != cells.len() as i32 {
            return Err(Error::SizeMismatch {
                axis: 'y',
                declared: size.y,
                actual: cells.len(),
            });
        }
        for layer in &cells {
            if size.x != layer.len() as i32 {
                return Err(Error::SizeMismatch {
                    axis: 'x',
                    declared: size.x,
                    actual: layer.len(),
                });
            }
            for row in layer {
                if size.z != row.len() as i32 {
                    return Err(Error::SizeMismatch {
                        axis: 'z',
                        declared: size.z,
                        actual: row.len(),
                    });
                }
                for symbol in row {
                    if !definitions.contains_key(symbol) {
                        return Err(Error::MissingDefinition { symbol: *symbol });
                    }
                }
            }
        }
        Ok(Pattern {
            cells,
            definitions,
            size,
            anchor,
        })
    }

    /// Declared extents (x, y, z)
    pub fn size(&self) -> IVec3 {
        self.size
    }

    /// Master cell offset within the pattern's local frame
    pub fn anchor(&self) -> IVec3 {
        self.anchor
    }

    /// The shared symbol-to-definition mapping
    ///
    /// Cloning the returned `Rc` and passing it to [`Pattern::new`] yields a
    /// sibling pattern that can compare equal to this one.
    pub fn definitions(&self) -> &Rc<HashMap<char, Definition>> {
        &self.definitions
    }
}

impl PartialEq for Pattern {
    /// Identity-sensitive equality.
    ///
    /// Two patterns are equal iff all three extents match, the definitions
    /// maps are the *same shared allocation* (`Rc::ptr_eq`, never a deep
    /// comparison), and every symbol matches per cell. Predicate behavior is
    /// not compared: two patterns with equal but separately allocated
    /// definition maps are unequal. Widening this to value equality would
    /// silently change what callers caching on pattern identity treat as
    /// interchangeable, so the identity check stays explicit.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && Rc::ptr_eq(&self.definitions, &other.definitions)
            && self.cells == other.cells
    }
}
