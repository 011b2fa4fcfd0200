//! Convex hull finalization: half-edge mesh to indexed triangle mesh.
//!
//! This crate is the last stage of a convex-hull pipeline. An incremental
//! builder (external to this crate) grows a half-edge mesh over a point
//! cloud, tombstoning faces as it splits and merges them; once construction
//! finishes, [`ConvexHull::extract`] walks the enabled faces and emits a
//! flat index buffer plus a vertex source, optionally compacting the vertex
//! buffer down to the points actually on the hull.
//!
//! Two small primitives used throughout such a pipeline live here as well:
//! [`Plane`] for point/plane classification and [`Pool`] for recycling
//! scratch allocations.
//!
//! ## Example
//!
//! ```rust
//! use hullmesh::{ConvexHull, HalfEdgeMesh, Vec3, Winding};
//!
//! let points = vec![
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//!     Vec3::new(0.0, 0.0, 1.0),
//! ];
//! let mesh = HalfEdgeMesh::from_triangles(&[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]]);
//!
//! let hull = ConvexHull::extract(&mesh, &points, Winding::CounterClockwise, true).unwrap();
//! assert_eq!(hull.indices().len(), 12);
//! assert_eq!(hull.vertices().len(), 4);
//! ```

pub mod error;
pub mod export;
pub mod geometry;
pub mod hull;
pub mod mesh;
pub mod pool;

pub use error::{HullError, Result};
pub use export::{write_obj, write_obj_file};
pub use geometry::{Plane, Vec3};
pub use hull::{ConvexHull, VertexSource, Winding};
pub use mesh::{FaceId, HalfEdgeId, HalfEdgeMesh, HullTopology};
pub use pool::Pool;
