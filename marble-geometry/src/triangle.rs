use glam::{Affine3A, Vec3};

use crate::{BoundingBox, Ray};

/// How far (as a fraction of the triangle's size) a point can project outside
/// of an edge and still count as lying on the face.
const EDGE_TOLERANCE: f32 = 1e-4;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    pub fn positions(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    pub fn bounds(&self) -> BoundingBox {
        self.positions().into_iter().collect()
    }

    pub fn with_transform(&self, transform: Affine3A) -> Self {
        let [a, b, c] = self
            .positions()
            .map(|vertex| transform.transform_point3(vertex));

        Self { a, b, c }
    }

    /// Returns the face normal, following the `a -> b -> c` winding.
    ///
    /// Zero-area triangles don't have one.
    pub fn normal(&self) -> Option<Vec3> {
        (self.b - self.a).cross(self.c - self.a).try_normalize()
    }

    /// Möller-Trumbore; returns distance to the hit point, expressed in
    /// multiples of the ray's direction.
    ///
    /// Zero-area triangles are never hit; otherwise the triangle's size and
    /// the direction's length don't matter.
    pub fn hit(&self, ray: &Ray) -> Option<f32> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let normal = ab.cross(ac);

        normal.try_normalize()?;

        // ---

        let pvec = ray.direction().cross(ac);
        let det = ab.dot(pvec);

        // det = |normal| * |direction| * cos(angle between them)
        let parallel = normal.length() * ray.direction().length();

        if det.abs() <= f32::EPSILON * parallel {
            return None;
        }

        // ---

        let inv_det = 1.0 / det;
        let tvec = ray.origin() - self.a;
        let u = tvec.dot(pvec) * inv_det;
        let qvec = tvec.cross(ab);
        let v = ray.direction().dot(qvec) * inv_det;
        let distance = ac.dot(qvec) * inv_det;

        if (u < 0.0)
            | (u > 1.0)
            | (v < 0.0)
            | (u + v > 1.0)
            | (distance < 0.0)
            | !distance.is_finite()
        {
            return None;
        }

        Some(distance)
    }

    /// Returns point on this triangle that's the closest to `p`, together
    /// with the feature of the triangle that point lies on.
    ///
    /// Points that project onto an edge (give or take rounding errors) are
    /// reported as `Face` - the edge regions only start a bit outside of the
    /// triangle, so that a point above the diagonal of a quad doesn't get an
    /// edge contact, no matter where the quad is placed.
    ///
    /// Thanks to: Christer Ericson, Real-Time Collision Detection, 5.1.5.
    pub fn closest_point(&self, p: Vec3) -> (Vec3, TriangleRegion) {
        let Self { a, b, c } = *self;

        let ab = b - a;
        let ac = c - a;
        let ap = p - a;

        // `va`, `vb` and `vc` are barycentric coordinates scaled by this
        let slack = EDGE_TOLERANCE * ab.cross(ac).length_squared();

        let d1 = ab.dot(ap);
        let d2 = ac.dot(ap);

        if d1 <= 0.0 && d2 <= 0.0 {
            return (a, TriangleRegion::Vertex(TriangleVertex::A));
        }

        let bp = p - b;
        let d3 = ab.dot(bp);
        let d4 = ac.dot(bp);

        if d3 >= 0.0 && d4 <= d3 {
            return (b, TriangleRegion::Vertex(TriangleVertex::B));
        }

        let vc = d1 * d4 - d3 * d2;

        if vc < -slack && d1 >= 0.0 && d3 <= 0.0 {
            let v = d1 / (d1 - d3);

            return (a + ab * v, TriangleRegion::Edge(TriangleEdge::Ab));
        }

        let cp = p - c;
        let d5 = ab.dot(cp);
        let d6 = ac.dot(cp);

        if d6 >= 0.0 && d5 <= d6 {
            return (c, TriangleRegion::Vertex(TriangleVertex::C));
        }

        let vb = d5 * d2 - d1 * d6;

        if vb < -slack && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);

            return (a + ac * w, TriangleRegion::Edge(TriangleEdge::Ca));
        }

        let va = d3 * d6 - d5 * d4;

        if va < -slack && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));

            return (b + (c - b) * w, TriangleRegion::Edge(TriangleEdge::Bc));
        }

        let denom = 1.0 / (va + vb + vc);

        if !denom.is_finite() {
            return self.closest_vertex(p);
        }

        let v = vb * denom;
        let w = vc * denom;

        (a + ab * v + ac * w, TriangleRegion::Face)
    }

    fn closest_vertex(&self, p: Vec3) -> (Vec3, TriangleRegion) {
        [
            (self.a, TriangleVertex::A),
            (self.b, TriangleVertex::B),
            (self.c, TriangleVertex::C),
        ]
        .into_iter()
        .min_by(|(lhs, _), (rhs, _)| {
            p.distance_squared(*lhs).total_cmp(&p.distance_squared(*rhs))
        })
        .map(|(point, vertex)| (point, TriangleRegion::Vertex(vertex)))
        .unwrap_or((self.a, TriangleRegion::Vertex(TriangleVertex::A)))
    }
}

/// Feature of a triangle a point projects onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleRegion {
    Face,
    Edge(TriangleEdge),
    Vertex(TriangleVertex),
}

impl TriangleRegion {
    pub fn is_face(self) -> bool {
        matches!(self, Self::Face)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleEdge {
    Ab,
    Bc,
    Ca,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleVertex {
    A,
    B,
    C,
}
