//! Rolling sea floor mesh.

use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use rand::Rng;

/// Side length of the square floor.
pub const FLOOR_SIZE: f32 = 300.0;
/// Quads along each side.
pub const FLOOR_SEGMENTS: u32 = 60;
/// Upper bound of the per-vertex random roughness.
pub const FLOOR_JITTER: f32 = 0.5;

/// Smooth part of the floor height at (x, z), relative to the floor level.
pub fn floor_height(x: f32, z: f32) -> f32 {
    (x * 0.02).sin() * (z * 0.02).cos() * 2.0 + (x * 0.05).sin() * (z * 0.05).cos()
}

/// Build the floor plane with a height-displaced surface.
pub fn build_floor_mesh(rng: &mut impl Rng) -> Mesh {
    let mut mesh = Plane3d::default()
        .mesh()
        .size(FLOOR_SIZE, FLOOR_SIZE)
        .subdivisions(FLOOR_SEGMENTS - 1)
        .build();

    if let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        for position in positions.iter_mut() {
            position[1] = floor_height(position[0], position[2]) + rng.gen_range(0.0..FLOOR_JITTER);
        }
    }
    mesh.compute_smooth_normals();
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn height_is_bounded() {
        for i in -15..=15 {
            for j in -15..=15 {
                let h = floor_height(i as f32 * 10.0, j as f32 * 10.0);
                assert!(h.abs() <= 3.0, "h={h}");
            }
        }
        assert_eq!(floor_height(0.0, 0.0), 0.0);
    }

    #[test]
    fn mesh_vertices_are_displaced_within_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let mesh = build_floor_mesh(&mut rng);

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("floor mesh has no positions");
        };
        assert!(positions.len() > 1000);
        for p in positions {
            let smooth = floor_height(p[0], p[2]);
            assert!(p[1] >= smooth && p[1] < smooth + FLOOR_JITTER + 1e-4);
        }
    }
}
