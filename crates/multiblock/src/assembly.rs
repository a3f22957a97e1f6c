//! Formation and deformation of matched structures

use crate::{MemberGrid, Pattern, Rotation};
use glam::IVec3;

impl Pattern {
    /// Notify every addressable member in the footprint that the structure
    /// formed.
    ///
    /// Visits each footprint cell under the same even/odd coordinate rule as
    /// the matcher; cells without the member capability are silently skipped.
    /// Each member receives its displacement from the master cell in its own
    /// rotated frame, so the member occupying the anchor cell gets
    /// `(0, 0, 0)`. The driver does not verify the pattern actually matches;
    /// callers run [`Pattern::find_match`] first.
    pub fn form<W: MemberGrid>(&self, world: &mut W, origin: IVec3, rotation: Rotation) {
        let anchor = self.rotated_anchor(rotation);
        let mut attached = 0usize;
        self.walk_footprint(origin, rotation, |position, y| {
            if let Some(member) = world.member_mut(position) {
                let offset = IVec3::new(
                    origin.x - position.x + anchor.x,
                    -y + self.anchor.y,
                    origin.z - position.z + anchor.z,
                );
                member.attach(offset, rotation);
                attached += 1;
            }
        });
        tracing::debug!(?origin, ?rotation, attached, "formed multiblock");
    }

    /// Notify every addressable member in the footprint that the structure
    /// broke apart.
    ///
    /// Same traversal and skip-if-absent policy as [`Pattern::form`]; the
    /// detach notification carries no arguments.
    pub fn deform<W: MemberGrid>(&self, world: &mut W, origin: IVec3, rotation: Rotation) {
        let mut detached = 0usize;
        self.walk_footprint(origin, rotation, |position, _y| {
            if let Some(member) = world.member_mut(position) {
                member.detach();
                detached += 1;
            }
        });
        tracing::debug!(?origin, ?rotation, detached, "deformed multiblock");
    }

    /// Visit every world position of the footprint once, y outer, x middle,
    /// z inner, applying the odd-rotation axis swap.
    fn walk_footprint(
        &self,
        origin: IVec3,
        rotation: Rotation,
        mut visit: impl FnMut(IVec3, i32),
    ) {
        for y in 0..self.size.y {
            for x in 0..self.size.x {
                for z in 0..self.size.z {
                    let (xc, zc) = if rotation.swaps_axes() { (z, x) } else { (x, z) };
                    visit(origin + IVec3::new(xc, y, zc), y);
                }
            }
        }
    }

    /// Anchor offsets as seen from a member's rotated frame: x and z swap
    /// for odd rotations, y never does.
    fn rotated_anchor(&self, rotation: Rotation) -> IVec3 {
        if rotation.swaps_axes() {
            IVec3::new(self.anchor.z, self.anchor.y, self.anchor.x)
        } else {
            self.anchor
        }
    }
}
