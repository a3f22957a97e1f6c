//! Rotation search and re-validation of patterns against a world

use crate::rotation::rotate_layer;
use crate::{Pattern, Rotation, WorldGrid};
use glam::IVec3;

/// Which evaluation mode a traversal runs its definitions in
#[derive(Debug, Clone, Copy)]
enum Mode {
    /// Discovery: raw world cells, no structure present yet
    Unformed,
    /// Re-validation: the structure already occupies the region
    Formed,
}

impl Pattern {
    /// Search the four rotations in ascending order and return the first
    /// whose every cell accepts the world in unformed mode.
    ///
    /// `None` is the expected no-match result, not an error. Rotationally
    /// symmetric patterns may satisfy several rotations; the smallest index
    /// wins because the 0→270 search order is fixed.
    pub fn find_match<W: WorldGrid>(&self, world: &W, origin: IVec3) -> Option<Rotation> {
        Rotation::ALL
            .into_iter()
            .find(|&rotation| self.scan(world, origin, rotation, Mode::Unformed))
    }

    /// Re-validate an already formed structure at its known rotation.
    ///
    /// Evaluates every cell's formed-mode definition; false on the first
    /// failing cell. Used for periodic re-checks, not discovery; the
    /// rotation comes from an earlier [`Pattern::find_match`].
    pub fn is_still_valid<W: WorldGrid>(
        &self,
        world: &W,
        origin: IVec3,
        rotation: Rotation,
    ) -> bool {
        self.scan(world, origin, rotation, Mode::Formed)
    }

    /// Walk the footprint at one rotation, y outer, x middle, z inner.
    ///
    /// Odd rotations rotate a rectangular layer into an axis-swapped bounding
    /// box; the iteration indices are swapped on both the layer lookup and
    /// the world probe so the symbol consulted and the cell probed stay
    /// consistent.
    fn scan<W: WorldGrid>(
        &self,
        world: &W,
        origin: IVec3,
        rotation: Rotation,
        mode: Mode,
    ) -> bool {
        for (y, layer) in self.cells.iter().enumerate() {
            let layer = rotate_layer(layer, rotation);
            for x in 0..self.size.x {
                for z in 0..self.size.z {
                    let (xc, zc) = if rotation.swaps_axes() { (z, x) } else { (x, z) };
                    let symbol = layer[xc as usize][zc as usize];
                    let position = origin + IVec3::new(xc, y as i32, zc);
                    let definition = &self.definitions[&symbol];
                    let accepted = match mode {
                        Mode::Unformed => definition.matches_unformed(world, position),
                        Mode::Formed => definition.matches_formed(world, position),
                    };
                    if !accepted {
                        return false;
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, VoxelGrid};
    use crate::{Definition, StructuralMember};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    fn strip_pattern() -> Pattern {
        // One layer, one row along x, two cells along z: 'a' then 'b'
        let definitions = Rc::new(HashMap::from([
            ('a', Definition::material(1)),
            ('b', Definition::material(2)),
        ]));
        Pattern::new(
            vec![vec![vec!['a', 'b']]],
            definitions,
            IVec3::new(1, 1, 2),
            IVec3::ZERO,
        )
        .unwrap()
    }

    fn world_with(materials: &[(IVec3, u8)]) -> VoxelGrid {
        let mut world = VoxelGrid::new();
        for &(position, material) in materials {
            world.set(position, Cell::new(material, 1.0, true));
        }
        world
    }

    #[test]
    fn test_match_each_rotation() {
        let pattern = strip_pattern();
        let origin = IVec3::ZERO;

        // R0 footprint: 'a' at (0,0,0), 'b' at (0,0,1)
        let world = world_with(&[(IVec3::new(0, 0, 0), 1), (IVec3::new(0, 0, 1), 2)]);
        assert_eq!(pattern.find_match(&world, origin), Some(Rotation::R0));

        // R90 footprint: 'a' at (0,0,0), 'b' at (1,0,0)
        let world = world_with(&[(IVec3::new(0, 0, 0), 1), (IVec3::new(1, 0, 0), 2)]);
        assert_eq!(pattern.find_match(&world, origin), Some(Rotation::R90));

        // R180 footprint: 'b' at (0,0,0), 'a' at (0,0,1)
        let world = world_with(&[(IVec3::new(0, 0, 0), 2), (IVec3::new(0, 0, 1), 1)]);
        assert_eq!(pattern.find_match(&world, origin), Some(Rotation::R180));

        // R270 footprint: 'b' at (0,0,0), 'a' at (1,0,0)
        let world = world_with(&[(IVec3::new(0, 0, 0), 2), (IVec3::new(1, 0, 0), 1)]);
        assert_eq!(pattern.find_match(&world, origin), Some(Rotation::R270));
    }

    #[test]
    fn test_no_rotation_matches() {
        let pattern = strip_pattern();
        let world = world_with(&[(IVec3::new(0, 0, 0), 9)]);
        assert_eq!(pattern.find_match(&world, IVec3::ZERO), None);
    }

    #[test]
    fn test_symmetric_pattern_returns_smallest_rotation() {
        let definitions = Rc::new(HashMap::from([('s', Definition::Solid)]));
        let pattern = Pattern::new(
            vec![vec![vec!['s']]],
            definitions,
            IVec3::ONE,
            IVec3::ZERO,
        )
        .unwrap();

        // A 1x1x1 pattern satisfies every rotation; search order picks R0
        let world = world_with(&[(IVec3::ZERO, 1)]);
        assert_eq!(pattern.find_match(&world, IVec3::ZERO), Some(Rotation::R0));
    }

    #[test]
    fn test_single_cell_hardness_example() {
        let definitions = Rc::new(HashMap::from([('h', Definition::hardness(3.0))]));
        let pattern = Pattern::new(
            vec![vec![vec!['h']]],
            definitions,
            IVec3::ONE,
            IVec3::ZERO,
        )
        .unwrap();

        let mut world = VoxelGrid::new();
        world.set(IVec3::ZERO, Cell::new(1, 5.0, true));
        assert_eq!(pattern.find_match(&world, IVec3::ZERO), Some(Rotation::R0));

        world.set(IVec3::ZERO, Cell::new(1, 2.0, true));
        assert_eq!(pattern.find_match(&world, IVec3::ZERO), None);
    }

    #[test]
    fn test_match_away_from_world_origin() {
        let pattern = strip_pattern();
        let origin = IVec3::new(7, -2, 13);
        let world = world_with(&[(origin, 1), (origin + IVec3::Z, 2)]);
        assert_eq!(pattern.find_match(&world, origin), Some(Rotation::R0));
        assert_eq!(pattern.find_match(&world, IVec3::ZERO), None);
    }

    /// World that records every material probe, for traversal-order tests
    struct ProbeLog {
        materials: HashMap<IVec3, u8>,
        probes: RefCell<Vec<IVec3>>,
    }

    impl WorldGrid for ProbeLog {
        fn material(&self, position: IVec3) -> u8 {
            self.probes.borrow_mut().push(position);
            *self.materials.get(&position).unwrap_or(&0)
        }
        fn hardness(&self, _position: IVec3) -> f32 {
            0.0
        }
        fn is_opaque(&self, _position: IVec3) -> bool {
            false
        }
        fn member(&self, _position: IVec3) -> Option<&dyn StructuralMember> {
            None
        }
    }

    #[test]
    fn test_is_still_valid_short_circuits() {
        let definitions = Rc::new(HashMap::from([('m', Definition::material(1))]));
        let pattern = Pattern::new(
            vec![vec![vec!['m', 'm', 'm']]],
            definitions,
            IVec3::new(1, 1, 3),
            IVec3::ZERO,
        )
        .unwrap();

        // First traversed cell (y=0, x=0, z=0) fails; later cells are never
        // evaluated
        let world = ProbeLog {
            materials: HashMap::from([(IVec3::new(0, 0, 1), 1), (IVec3::new(0, 0, 2), 1)]),
            probes: RefCell::new(Vec::new()),
        };
        assert!(!pattern.is_still_valid(&world, IVec3::ZERO, Rotation::R0));
        assert_eq!(world.probes.borrow().as_slice(), &[IVec3::ZERO]);
    }

    #[test]
    fn test_is_still_valid_uses_formed_mode_only() {
        let definitions = Rc::new(HashMap::from([('e', Definition::Empty)]));
        let pattern = Pattern::new(
            vec![vec![vec!['e']]],
            definitions,
            IVec3::ONE,
            IVec3::ZERO,
        )
        .unwrap();

        struct Marker;
        impl StructuralMember for Marker {
            fn kind(&self) -> &str {
                "marker"
            }
            fn attach(&mut self, _offset: IVec3, _rotation: Rotation) {}
            fn detach(&mut self) {}
        }

        // Occupied cell holding a member: formed mode accepts, unformed
        // mode rejects, so discovery fails while re-validation passes
        let mut world = VoxelGrid::new();
        world.set(IVec3::ZERO, Cell::new(5, 1.0, true));
        world.place_member(IVec3::ZERO, Box::new(Marker));

        assert_eq!(pattern.find_match(&world, IVec3::ZERO), None);
        assert!(pattern.is_still_valid(&world, IVec3::ZERO, Rotation::R0));
    }

    #[test]
    fn test_rectangular_pattern_odd_rotation_footprint() {
        // 2 cells along x, 1 along z; odd rotation swaps the footprint
        let definitions = Rc::new(HashMap::from([
            ('a', Definition::material(1)),
            ('b', Definition::material(2)),
        ]));
        let pattern = Pattern::new(
            vec![vec![vec!['a'], vec!['b']]],
            definitions,
            IVec3::new(2, 1, 1),
            IVec3::ZERO,
        )
        .unwrap();

        // R0 footprint runs along x
        let world = world_with(&[(IVec3::new(0, 0, 0), 1), (IVec3::new(1, 0, 0), 2)]);
        assert_eq!(pattern.find_match(&world, IVec3::ZERO), Some(Rotation::R0));

        // After 90 degrees the footprint runs along z
        let world = world_with(&[(IVec3::new(0, 0, 0), 2), (IVec3::new(0, 0, 1), 1)]);
        assert_eq!(pattern.find_match(&world, IVec3::ZERO), Some(Rotation::R90));
    }
}
