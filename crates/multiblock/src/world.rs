//! World access traits decoupling the engine from grid storage
//!
//! The engine never owns world state. Matching reads cell properties through
//! [`WorldGrid`]; the formation driver reaches addressable members through
//! [`MemberGrid`]. Hosts implement both over whatever storage they use.

use crate::Rotation;
use glam::IVec3;

/// Read access to the world a pattern is matched against
///
/// The property set is open-ended: a new definition variant that needs a new
/// cell property adds a method here.
pub trait WorldGrid {
    /// Material id at a world position (0 = empty air)
    fn material(&self, position: IVec3) -> u8;

    /// Block hardness at a world position
    fn hardness(&self, position: IVec3) -> f32;

    /// Whether the block at a world position is opaque
    fn is_opaque(&self, position: IVec3) -> bool;

    /// Addressable structural member at a world position, if one is present
    fn member(&self, position: IVec3) -> Option<&dyn StructuralMember>;
}

/// Mutable member access used by the formation driver
pub trait MemberGrid {
    /// Addressable structural member at a world position, if one is present
    fn member_mut(&mut self, position: IVec3) -> Option<&mut dyn StructuralMember>;
}

/// A world location capable of joining a formed structure
///
/// Presence of this capability is queried explicitly through
/// [`WorldGrid::member`] / [`MemberGrid::member_mut`]; locations without it
/// are skipped by the driver, never an error.
pub trait StructuralMember {
    /// Member kind tag, matched by [`crate::Definition::Member`]
    fn kind(&self) -> &str;

    /// Notification that this member joined a formed structure.
    ///
    /// `offset` is the member's displacement from the master cell, expressed
    /// in the member's own rotated frame; the member occupying the anchor
    /// cell receives `(0, 0, 0)`.
    fn attach(&mut self, offset: IVec3, rotation: Rotation);

    /// Notification that the structure this member belonged to broke apart
    fn detach(&mut self);
}
