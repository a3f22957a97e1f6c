//! In-memory world grid for hosts and tests

use crate::{MemberGrid, StructuralMember, WorldGrid};
use glam::IVec3;
use std::collections::HashMap;

/// Stored properties of one voxel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Material id (0 = empty air)
    pub material: u8,
    /// Block hardness
    pub hardness: f32,
    /// Whether the block is opaque
    pub opaque: bool,
}

impl Cell {
    /// Create a cell with explicit properties
    pub fn new(material: u8, hardness: f32, opaque: bool) -> Self {
        Cell {
            material,
            hardness,
            opaque,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            material: 0,
            hardness: 0.0,
            opaque: false,
        }
    }
}

/// Hash-map backed world implementing the engine's grid traits
///
/// Positions without an explicit cell read as empty air. Members are stored
/// separately from cell properties, matching the engine's split between
/// property queries and the addressable-member capability.
#[derive(Default)]
pub struct VoxelGrid {
    cells: HashMap<IVec3, Cell>,
    members: HashMap<IVec3, Box<dyn StructuralMember>>,
}

impl VoxelGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        VoxelGrid::default()
    }

    /// Set the cell properties at a position
    pub fn set(&mut self, position: IVec3, cell: Cell) {
        self.cells.insert(position, cell);
    }

    /// Set only the material at a position, keeping other properties
    pub fn set_material(&mut self, position: IVec3, material: u8) {
        self.cells.entry(position).or_default().material = material;
    }

    /// Place an addressable member at a position
    pub fn place_member(&mut self, position: IVec3, member: Box<dyn StructuralMember>) {
        self.members.insert(position, member);
    }

    /// Remove the member at a position, if any
    pub fn remove_member(&mut self, position: IVec3) -> Option<Box<dyn StructuralMember>> {
        self.members.remove(&position)
    }

    /// Set a cell (chaining form)
    pub fn with_cell(mut self, position: IVec3, cell: Cell) -> Self {
        self.set(position, cell);
        self
    }

    /// Place a member (chaining form)
    pub fn with_member(mut self, position: IVec3, member: Box<dyn StructuralMember>) -> Self {
        self.place_member(position, member);
        self
    }
}

impl WorldGrid for VoxelGrid {
    fn material(&self, position: IVec3) -> u8 {
        self.cells.get(&position).map_or(0, |c| c.material)
    }

    fn hardness(&self, position: IVec3) -> f32 {
        self.cells.get(&position).map_or(0.0, |c| c.hardness)
    }

    fn is_opaque(&self, position: IVec3) -> bool {
        self.cells.get(&position).is_some_and(|c| c.opaque)
    }

    fn member(&self, position: IVec3) -> Option<&dyn StructuralMember> {
        self.members.get(&position).map(|m| m.as_ref())
    }
}

impl MemberGrid for VoxelGrid {
    fn member_mut(&mut self, position: IVec3) -> Option<&mut dyn StructuralMember> {
        match self.members.get_mut(&position) {
            Some(m) => Some(m.as_mut()),
            None => None,
        }
    }
}
