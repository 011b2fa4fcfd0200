//! Half-edge mesh topology.
//!
//! The incremental hull builder owns a half-edge mesh in which faces are
//! tombstoned rather than erased: a face that gets split or merged away is
//! marked disabled and stays in the array. Extraction only needs a handful
//! of read-only adjacency queries over that structure, captured by the
//! [`HullTopology`] trait; [`HalfEdgeMesh`] is the array-of-structs
//! realization the builder mutates.

use rustc_hash::FxHashMap;

/// Index type for faces and half-edges.
///
/// `u32` keeps the arrays compact; hulls never approach 4 billion faces.
pub type Index = u32;

/// Sentinel for "no connection" in the mesh topology.
pub const INVALID_ID: Index = Index::MAX;

/// Unique identifier for faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub Index);

/// Unique identifier for half-edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub Index);

/// Single half-edge in the mesh.
///
/// A half-edge is one direction of an edge; its twin runs the other way
/// along the neighboring face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfEdge {
    /// Point-cloud index of the vertex this half-edge points at.
    pub end_vertex: Index,
    /// Opposite (twin) half-edge.
    pub opp: HalfEdgeId,
    /// Face this half-edge borders.
    pub face: FaceId,
    /// Next half-edge around the face, in the face's winding order.
    pub next: HalfEdgeId,
}

/// Face in the half-edge mesh.
///
/// Stores one bordering half-edge; the other two follow via `next`. A
/// disabled face keeps its slot but points at [`INVALID_ID`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// One half-edge on this face's boundary, or [`INVALID_ID`] when the
    /// face has been tombstoned.
    pub half_edge: HalfEdgeId,
}

impl Face {
    /// True when this face has been logically removed.
    pub fn is_disabled(&self) -> bool {
        self.half_edge.0 == INVALID_ID
    }
}

/// Read-only adjacency queries extraction needs from a finished hull mesh.
///
/// Producer-guaranteed preconditions: every enabled face is a triangle, and
/// the enabled faces together form one connected, consistently wound, closed
/// 2-manifold. Extraction relies on these rather than re-verifying them.
pub trait HullTopology {
    /// Total number of face slots, disabled ones included.
    fn face_count(&self) -> usize;

    /// Number of tombstoned face slots.
    fn disabled_face_count(&self) -> usize;

    /// Whether the given face has been tombstoned.
    fn is_face_disabled(&self, face: FaceId) -> bool;

    /// The three half-edges bounding a face, in winding order.
    fn face_half_edges(&self, face: FaceId) -> [HalfEdgeId; 3];

    /// The three point-cloud vertex indices of a face, in the mesh's
    /// canonical winding order.
    fn face_vertices(&self, face: FaceId) -> [Index; 3];

    /// The twin of a half-edge.
    fn opposite(&self, half_edge: HalfEdgeId) -> HalfEdgeId;

    /// The face a half-edge borders.
    fn half_edge_face(&self, half_edge: HalfEdgeId) -> FaceId;
}

/// Array-of-structs half-edge mesh with tombstoned face removal.
#[derive(Debug, Clone, Default)]
pub struct HalfEdgeMesh {
    faces: Vec<Face>,
    half_edges: Vec<HalfEdge>,
    disabled_faces: Vec<FaceId>,
}

impl HalfEdgeMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from a consistently wound, closed triangle list.
    ///
    /// Each triangle names three point-cloud indices; twins are linked by
    /// matching each directed edge with its reversal. Directed edges without
    /// a reversal (an open boundary) are left with [`INVALID_ID`] twins,
    /// which a closed hull never produces.
    pub fn from_triangles(triangles: &[[Index; 3]]) -> Self {
        let mut mesh = Self {
            faces: Vec::with_capacity(triangles.len()),
            half_edges: Vec::with_capacity(triangles.len() * 3),
            disabled_faces: Vec::new(),
        };

        let mut twins: FxHashMap<(Index, Index), HalfEdgeId> = FxHashMap::default();
        for (f, tri) in triangles.iter().enumerate() {
            let base = mesh.half_edges.len() as Index;
            for k in 0..3 {
                let start = tri[k];
                let end = tri[(k + 1) % 3];
                let id = HalfEdgeId(base + k as Index);
                mesh.half_edges.push(HalfEdge {
                    end_vertex: end,
                    opp: HalfEdgeId(INVALID_ID),
                    face: FaceId(f as Index),
                    next: HalfEdgeId(base + ((k as Index + 1) % 3)),
                });
                if let Some(&twin) = twins.get(&(end, start)) {
                    mesh.half_edges[id.0 as usize].opp = twin;
                    mesh.half_edges[twin.0 as usize].opp = id;
                } else {
                    twins.insert((start, end), id);
                }
            }
            mesh.faces.push(Face {
                half_edge: HalfEdgeId(base),
            });
        }
        mesh
    }

    /// Tombstone a face.
    ///
    /// The slot stays in the array (indices of other faces are unaffected);
    /// the face is only marked disabled and counted. Disabling an already
    /// disabled face is a no-op.
    pub fn disable_face(&mut self, face: FaceId) {
        let slot = &mut self.faces[face.0 as usize];
        if slot.is_disabled() {
            return;
        }
        slot.half_edge = HalfEdgeId(INVALID_ID);
        self.disabled_faces.push(face);
    }

    /// Number of enabled faces.
    pub fn enabled_face_count(&self) -> usize {
        self.faces.len() - self.disabled_faces.len()
    }

    /// All half-edges, in storage order.
    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.half_edges
    }
}

impl HullTopology for HalfEdgeMesh {
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn disabled_face_count(&self) -> usize {
        self.disabled_faces.len()
    }

    fn is_face_disabled(&self, face: FaceId) -> bool {
        self.faces[face.0 as usize].is_disabled()
    }

    fn face_half_edges(&self, face: FaceId) -> [HalfEdgeId; 3] {
        let first = self.faces[face.0 as usize].half_edge;
        let second = self.half_edges[first.0 as usize].next;
        let third = self.half_edges[second.0 as usize].next;
        [first, second, third]
    }

    fn face_vertices(&self, face: FaceId) -> [Index; 3] {
        self.face_half_edges(face)
            .map(|he| self.half_edges[he.0 as usize].end_vertex)
    }

    fn opposite(&self, half_edge: HalfEdgeId) -> HalfEdgeId {
        self.half_edges[half_edge.0 as usize].opp
    }

    fn half_edge_face(&self, half_edge: HalfEdgeId) -> FaceId {
        self.half_edges[half_edge.0 as usize].face
    }
}
