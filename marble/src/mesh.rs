use glam::{vec3, Vec3};

use crate::{MeshError, Triangle};

/// Triangles of a single object, in the object's local space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn from_triangles(
        triangles: impl IntoIterator<Item = [Vec3; 3]>,
    ) -> Self {
        Self {
            triangles: triangles
                .into_iter()
                .map(|[a, b, c]| Triangle::new(a, b, c))
                .collect(),
        }
    }

    /// Creates mesh from a flat triangle list, where each consecutive three
    /// positions form a triangle.
    pub fn from_positions(positions: Vec<Vec3>) -> Result<Self, MeshError> {
        if positions.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle {
                count: positions.len(),
            });
        }

        let triangles = positions
            .chunks_exact(3)
            .map(|abc| Triangle::new(abc[0], abc[1], abc[2]))
            .collect();

        Ok(Self { triangles })
    }

    /// Creates mesh from indexed geometry, where each consecutive three
    /// indices form a triangle.
    pub fn from_indexed(
        positions: &[Vec3],
        indices: &[u32],
    ) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle {
                count: indices.len(),
            });
        }

        let vertex = |index: u32| {
            positions.get(index as usize).copied().ok_or(
                MeshError::IndexOutOfBounds {
                    index,
                    vertices: positions.len(),
                },
            )
        };

        let triangles = indices
            .chunks_exact(3)
            .map(|abc| {
                Ok(Triangle::new(
                    vertex(abc[0])?,
                    vertex(abc[1])?,
                    vertex(abc[2])?,
                ))
            })
            .collect::<Result<_, MeshError>>()?;

        Ok(Self { triangles })
    }

    /// Creates an axis-aligned box centered at the origin, made of twelve
    /// outward-facing triangles.
    pub fn cuboid(half_extents: Vec3) -> Self {
        // Each face as a quad wound counter-clockwise when looked at from the
        // outside; -1 / +1 pick the min / max corner on given axis
        const QUADS: [[[f32; 3]; 4]; 6] = [
            // -X
            [
                [-1.0, -1.0, -1.0],
                [-1.0, -1.0, 1.0],
                [-1.0, 1.0, 1.0],
                [-1.0, 1.0, -1.0],
            ],
            // +X
            [
                [1.0, -1.0, -1.0],
                [1.0, 1.0, -1.0],
                [1.0, 1.0, 1.0],
                [1.0, -1.0, 1.0],
            ],
            // -Y
            [
                [-1.0, -1.0, -1.0],
                [1.0, -1.0, -1.0],
                [1.0, -1.0, 1.0],
                [-1.0, -1.0, 1.0],
            ],
            // +Y
            [
                [-1.0, 1.0, -1.0],
                [-1.0, 1.0, 1.0],
                [1.0, 1.0, 1.0],
                [1.0, 1.0, -1.0],
            ],
            // -Z
            [
                [-1.0, -1.0, -1.0],
                [-1.0, 1.0, -1.0],
                [1.0, 1.0, -1.0],
                [1.0, -1.0, -1.0],
            ],
            // +Z
            [
                [-1.0, -1.0, 1.0],
                [1.0, -1.0, 1.0],
                [1.0, 1.0, 1.0],
                [-1.0, 1.0, 1.0],
            ],
        ];

        let corner = |[x, y, z]: [f32; 3]| vec3(x, y, z) * half_extents;

        Self::from_triangles(QUADS.into_iter().flat_map(|[a, b, c, d]| {
            let [a, b, c, d] = [a, b, c, d].map(corner);

            [[a, b, c], [a, c, d]]
        }))
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
