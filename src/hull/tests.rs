use super::*;
use crate::mesh::{HalfEdgeId, HalfEdgeMesh};
use std::cell::Cell;

// Tetrahedron over point-cloud indices 0..4, wound CCW viewed from outside.
const TETRA: [[Index; 3]; 4] = [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];

fn tetra_points() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ]
}

// Two disjoint tetrahedra in one face array, the second fully tombstoned.
// Mimics a builder that replaced early faces without erasing them.
fn tombstoned_mesh_and_points() -> (HalfEdgeMesh, Vec<Vec3>) {
    let mut points = tetra_points();
    points.extend(tetra_points().iter().map(|p| *p + Vec3::new(10.0, 0.0, 0.0)));

    let mut triangles: Vec<[Index; 3]> = TETRA.to_vec();
    triangles.extend(TETRA.iter().map(|t| t.map(|v| v + 4)));
    let mut mesh = HalfEdgeMesh::from_triangles(&triangles);
    for f in 4..8 {
        mesh.disable_face(FaceId(f));
    }
    (mesh, points)
}

fn sorted(triple: [Index; 3]) -> [Index; 3] {
    let mut t = triple;
    t.sort_unstable();
    t
}

#[test]
fn compacted_extraction_covers_every_enabled_face() {
    let (mesh, points) = tombstoned_mesh_and_points();

    let hull = ConvexHull::extract(&mesh, &points, Winding::CounterClockwise, true)
        .expect("extraction succeeds");

    assert_eq!(hull.indices().len(), 3 * 4);
    assert_eq!(hull.triangle_count(), 4);
    // Only the four live vertices make it into the owned buffer, once each.
    assert_eq!(hull.vertices().len(), 4);
    for pair in [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)] {
        assert_ne!(hull.vertices()[pair.0], hull.vertices()[pair.1]);
    }
    for &index in hull.indices() {
        assert!((index as usize) < hull.vertices().len());
    }
    assert!(matches!(hull.vertices(), VertexSource::Owned(_)));
}

#[test]
fn uncompacted_extraction_borrows_the_point_cloud() {
    let (mesh, points) = tombstoned_mesh_and_points();

    let hull = ConvexHull::extract(&mesh, &points, Winding::Clockwise, false)
        .expect("extraction succeeds");

    assert!(matches!(hull.vertices(), VertexSource::Borrowed(_)));
    assert_eq!(hull.vertices().len(), points.len());
    // Indices address the original cloud; the tombstoned tetrahedron's
    // vertices (4..8) never appear.
    for &index in hull.indices() {
        assert!(index < 4);
    }
}

#[test]
fn compacted_and_original_indices_name_the_same_points() {
    let (mesh, points) = tombstoned_mesh_and_points();

    for winding in [Winding::Clockwise, Winding::CounterClockwise] {
        let original =
            ConvexHull::extract(&mesh, &points, winding, false).expect("extraction succeeds");
        let compacted =
            ConvexHull::extract(&mesh, &points, winding, true).expect("extraction succeeds");

        assert_eq!(original.indices().len(), compacted.indices().len());
        for (slot, (&a, &b)) in original
            .indices()
            .iter()
            .zip(compacted.indices())
            .enumerate()
        {
            assert_eq!(
                original.vertices()[a as usize],
                compacted.vertices()[b as usize],
                "slot {slot} resolves to different points"
            );
        }
    }
}

#[test]
fn winding_flag_swaps_second_and_third_entries() {
    let points = tetra_points();
    let mesh = HalfEdgeMesh::from_triangles(&TETRA);

    let cw = ConvexHull::extract(&mesh, &points, Winding::Clockwise, false)
        .expect("extraction succeeds");
    let ccw = ConvexHull::extract(&mesh, &points, Winding::CounterClockwise, false)
        .expect("extraction succeeds");

    // The traversal is deterministic, so triangles line up pairwise.
    for (c, r) in cw.indices().chunks_exact(3).zip(ccw.indices().chunks_exact(3)) {
        assert_eq!(r[0], c[0]);
        assert_eq!(r[1], c[2]);
        assert_eq!(r[2], c[1]);
    }
}

#[test]
fn native_winding_reproduces_the_mesh_triangles() {
    let points = tetra_points();
    let mesh = HalfEdgeMesh::from_triangles(&TETRA);

    let hull = ConvexHull::extract(&mesh, &points, Winding::Clockwise, false)
        .expect("extraction succeeds");

    let mut emitted: Vec<[Index; 3]> = hull
        .indices()
        .chunks_exact(3)
        .map(|t| sorted([t[0], t[1], t[2]]))
        .collect();
    emitted.sort_unstable();
    let mut expected: Vec<[Index; 3]> = TETRA.iter().map(|&t| sorted(t)).collect();
    expected.sort_unstable();
    assert_eq!(emitted, expected);
}

#[test]
fn fully_tombstoned_mesh_yields_empty_buffers() {
    let points = tetra_points();
    let mut mesh = HalfEdgeMesh::from_triangles(&TETRA);
    for f in 0..4 {
        mesh.disable_face(FaceId(f));
    }

    for compact in [false, true] {
        let hull = ConvexHull::extract(&mesh, &points, Winding::CounterClockwise, compact)
            .expect("empty extraction succeeds");
        assert!(hull.indices().is_empty());
        assert!(hull.vertices().is_empty());
    }
}

#[test]
fn empty_mesh_yields_empty_buffers() {
    let mesh = HalfEdgeMesh::new();
    let hull = ConvexHull::extract(&mesh, &[], Winding::Clockwise, true)
        .expect("empty extraction succeeds");

    assert!(hull.indices().is_empty());
    assert!(hull.vertices().is_empty());
}

#[test]
fn cloned_owned_buffer_is_independent() {
    let points = tetra_points();
    let mesh = HalfEdgeMesh::from_triangles(&TETRA);
    let hull = ConvexHull::extract(&mesh, &points, Winding::CounterClockwise, true)
        .expect("extraction succeeds");

    let mut copy = hull.clone();
    match copy.vertices_mut() {
        VertexSource::Owned(buffer) => buffer[0] = Vec3::new(99.0, 99.0, 99.0),
        VertexSource::Borrowed(_) => panic!("compacted hull must own its vertices"),
    }

    assert_ne!(hull.vertices()[0], copy.vertices()[0]);
    assert_eq!(hull.vertices()[0], points[0]);
}

#[test]
fn taking_a_hull_leaves_an_empty_default() {
    let points = tetra_points();
    let mesh = HalfEdgeMesh::from_triangles(&TETRA);
    let mut hull = ConvexHull::extract(&mesh, &points, Winding::CounterClockwise, true)
        .expect("extraction succeeds");

    let moved = std::mem::take(&mut hull);
    assert_eq!(moved.indices().len(), 12);
    assert_eq!(moved.vertices().len(), 4);
    assert!(hull.indices().is_empty());
    assert!(matches!(hull.vertices(), VertexSource::Borrowed(view) if view.is_empty()));
}

/// Topology double that lies: it reports face 1 as enabled while neighbors
/// are being gathered, then as disabled once the traversal pops it. This is
/// the broken-producer contract extraction must refuse.
struct InconsistentMesh {
    face_one_queries: Cell<u32>,
}

impl InconsistentMesh {
    fn new() -> Self {
        Self {
            face_one_queries: Cell::new(0),
        }
    }
}

impl HullTopology for InconsistentMesh {
    fn face_count(&self) -> usize {
        2
    }

    fn disabled_face_count(&self) -> usize {
        1
    }

    fn is_face_disabled(&self, face: FaceId) -> bool {
        if face.0 == 0 {
            return false;
        }
        let queries = self.face_one_queries.get();
        self.face_one_queries.set(queries + 1);
        // Enabled while face 0 pushes its three neighbors, disabled after.
        queries >= 3
    }

    fn face_half_edges(&self, face: FaceId) -> [HalfEdgeId; 3] {
        let base = face.0 * 3;
        [HalfEdgeId(base), HalfEdgeId(base + 1), HalfEdgeId(base + 2)]
    }

    fn face_vertices(&self, face: FaceId) -> [Index; 3] {
        if face.0 == 0 {
            [0, 1, 2]
        } else {
            [0, 2, 1]
        }
    }

    fn opposite(&self, half_edge: HalfEdgeId) -> HalfEdgeId {
        HalfEdgeId((half_edge.0 + 3) % 6)
    }

    fn half_edge_face(&self, half_edge: HalfEdgeId) -> FaceId {
        FaceId(half_edge.0 / 3)
    }
}

#[test]
fn reachable_disabled_face_is_an_invariant_violation() {
    let mesh = InconsistentMesh::new();
    let points = tetra_points();

    let result = ConvexHull::extract(&mesh, &points, Winding::CounterClockwise, false);
    assert!(matches!(
        result,
        Err(HullError::DisabledFaceInHull { face: FaceId(1) })
    ));
}
