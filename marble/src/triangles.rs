use std::ops::Range;

use crate::Triangle;

/// Append-only buffer of world-space triangles.
///
/// Triangles are never moved or modified once pushed; they're referenced
/// through [`TriangleId`]s and contiguous [`FacesRef`] ranges.
#[derive(Clone, Debug, Default)]
pub struct Triangles {
    items: Vec<Triangle>,
}

impl Triangles {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns id the next pushed triangle will get.
    pub fn next_id(&self) -> TriangleId {
        TriangleId::new(self.items.len() as u32)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TriangleId, &Triangle)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(id, triangle)| (TriangleId::new(id as u32), triangle))
    }

    /// Returns triangles from given range; ranges pointing (even partially)
    /// outside of the buffer yield nothing.
    pub fn range(
        &self,
        faces: FacesRef,
    ) -> impl Iterator<Item = (TriangleId, &Triangle)> + '_ {
        self.items
            .get(faces.as_range())
            .unwrap_or_default()
            .iter()
            .zip(faces.ids())
            .map(|(triangle, id)| (id, triangle))
    }

    pub(crate) fn push(&mut self, triangle: Triangle) -> TriangleId {
        let id = self.next_id();

        self.items.push(triangle);
        id
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriangleId(u32);

impl TriangleId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Contiguous range of triangles, `start .. start + count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FacesRef {
    start: TriangleId,
    count: u32,
}

impl FacesRef {
    pub fn new(start: TriangleId, count: u32) -> Self {
        Self { start, count }
    }

    pub fn start(&self) -> TriangleId {
        self.start
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns id one past the last triangle of this range.
    pub fn end(&self) -> TriangleId {
        TriangleId::new(self.start.get() + self.count)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn ids(&self) -> impl Iterator<Item = TriangleId> {
        (self.start.get()..self.end().get()).map(TriangleId::new)
    }

    pub fn as_range(&self) -> Range<usize> {
        let start = self.start.get() as usize;
        let end = self.end().get() as usize;

        start..end
    }
}
