//! Hull finalization: enabled-face traversal and buffer assembly.
//!
//! [`ConvexHull::extract`] turns a finished half-edge mesh plus its source
//! point cloud into a flat triangle index buffer and a vertex source. The
//! traversal is a depth-first walk over the enabled faces with an explicit
//! stack; it visits each enabled face exactly once, rewrites vertex indices
//! on the fly when compaction is requested, and applies the caller's winding
//! convention per triangle.

use crate::error::{HullError, Result};
use crate::geometry::Vec3;
use crate::mesh::{FaceId, HullTopology, Index};
use rustc_hash::FxHashMap;
use std::ops;

/// Triangle orientation as observed from outside the hull.
///
/// The mesh's native winding follows one fixed producer convention; this
/// flag only decides whether each emitted triangle reverses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Emit triangles in the mesh's native order.
    Clockwise,
    /// Reverse each triangle (swap its second and third vertex).
    CounterClockwise,
}

/// Where the hull's vertex data lives.
///
/// Either a borrowed view over the original point cloud (indices reference
/// it directly) or an owned, densely re-indexed buffer holding only the
/// vertices that appear on the hull, in first-encountered order. The two
/// states are mutually exclusive; the default is an empty borrowed view, so
/// `std::mem::take` moves the data out and leaves a well-formed empty
/// source behind.
#[derive(Debug, Clone, PartialEq)]
pub enum VertexSource<'a> {
    /// Compacted buffer owned by the hull.
    Owned(Vec<Vec3>),
    /// View over the caller's point cloud.
    Borrowed(&'a [Vec3]),
}

impl Default for VertexSource<'_> {
    fn default() -> Self {
        VertexSource::Borrowed(&[])
    }
}

impl VertexSource<'_> {
    /// The vertex data, regardless of which state holds it.
    pub fn as_slice(&self) -> &[Vec3] {
        match self {
            VertexSource::Owned(buffer) => buffer,
            VertexSource::Borrowed(view) => view,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True when no vertices are present.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl ops::Index<usize> for VertexSource<'_> {
    type Output = Vec3;

    fn index(&self, index: usize) -> &Vec3 {
        &self.as_slice()[index]
    }
}

/// Finalized hull: a vertex source plus a flat triangle index buffer.
///
/// The index buffer holds `3 × enabled-face-count` entries, grouped in
/// consecutive triples, every entry in bounds of the vertex source. Cloning
/// deep-copies an owned vertex buffer; moving transfers it.
#[derive(Debug, Clone, Default)]
pub struct ConvexHull<'a> {
    vertices: VertexSource<'a>,
    indices: Vec<Index>,
}

impl<'a> ConvexHull<'a> {
    /// Build the vertex and index buffers from a finished half-edge mesh
    /// and the point cloud it indexes into.
    ///
    /// With `compact` set, the result owns a deduplicated vertex buffer and
    /// the indices are rewritten against it; otherwise the indices address
    /// `point_cloud` directly and the result borrows it.
    ///
    /// # Errors
    ///
    /// [`HullError::DisabledFaceInHull`] when a tombstoned face turns out to
    /// be reachable from the live hull, which means the mesh producer broke
    /// its connectivity invariant.
    pub fn extract<M: HullTopology>(
        mesh: &M,
        point_cloud: &'a [Vec3],
        winding: Winding,
        compact: bool,
    ) -> Result<Self> {
        let face_count = mesh.face_count();

        let seed = (0..face_count)
            .map(|f| FaceId(f as Index))
            .find(|&f| !mesh.is_face_disabled(f));
        let Some(seed) = seed else {
            return Ok(Self::default());
        };

        let enabled_faces = face_count - mesh.disabled_face_count();
        let mut indices = Vec::with_capacity(enabled_faces * 3);
        let mut compacted = compact.then(Vec::new);
        // Original point-cloud index -> slot in the compacted buffer. One
        // slot per vertex, however many faces share it.
        let mut remap: FxHashMap<Index, Index> = FxHashMap::default();

        let mut visited = vec![false; face_count];
        let mut stack = vec![seed];
        while let Some(face) = stack.pop() {
            if mesh.is_face_disabled(face) {
                return Err(HullError::DisabledFaceInHull { face });
            }
            // A face can be pushed by more than one neighbor; later pops
            // skip.
            if visited[face.0 as usize] {
                continue;
            }
            visited[face.0 as usize] = true;

            for half_edge in mesh.face_half_edges(face) {
                let neighbor = mesh.half_edge_face(mesh.opposite(half_edge));
                if !visited[neighbor.0 as usize] && !mesh.is_face_disabled(neighbor) {
                    stack.push(neighbor);
                }
            }

            let mut triangle = mesh.face_vertices(face);
            if let Some(buffer) = compacted.as_mut() {
                for vertex in &mut triangle {
                    let original = *vertex;
                    *vertex = *remap.entry(original).or_insert_with(|| {
                        buffer.push(point_cloud[original as usize]);
                        (buffer.len() - 1) as Index
                    });
                }
            }

            indices.push(triangle[0]);
            match winding {
                Winding::CounterClockwise => {
                    indices.push(triangle[2]);
                    indices.push(triangle[1]);
                }
                Winding::Clockwise => {
                    indices.push(triangle[1]);
                    indices.push(triangle[2]);
                }
            }
        }

        let vertices = match compacted {
            Some(buffer) => VertexSource::Owned(buffer),
            None => VertexSource::Borrowed(point_cloud),
        };
        Ok(Self { vertices, indices })
    }

    /// The triangle index buffer, three entries per triangle.
    pub fn indices(&self) -> &[Index] {
        &self.indices
    }

    /// Mutable access to the index buffer, for consumers that rewrite
    /// indices in place.
    pub fn indices_mut(&mut self) -> &mut Vec<Index> {
        &mut self.indices
    }

    /// The active vertex source the indices refer to.
    pub fn vertices(&self) -> &VertexSource<'a> {
        &self.vertices
    }

    /// Mutable access to the vertex source.
    pub fn vertices_mut(&mut self) -> &mut VertexSource<'a> {
        &mut self.vertices
    }

    /// Number of triangles in the hull.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Split the hull into its vertex source and index buffer.
    pub fn into_parts(self) -> (VertexSource<'a>, Vec<Index>) {
        (self.vertices, self.indices)
    }
}

#[cfg(test)]
mod tests;
