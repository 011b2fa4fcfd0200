//! Error types for hull extraction and export.
//!
//! Extraction itself is total except for one modeled defect: the mesh
//! producer handed over a graph in which a disabled face is reachable from
//! the live hull. That is a broken precondition, not a recoverable input
//! error, and it is reported as an explicit variant so it stays visible in
//! release builds.

use crate::mesh::FaceId;
use thiserror::Error;

/// Errors that can occur while finalizing or exporting a hull.
#[derive(Error, Debug)]
pub enum HullError {
    /// A disabled face was reachable during the traversal of the live hull.
    ///
    /// The mesh producer guarantees that the enabled faces form the hull and
    /// that tombstoned faces are unreachable from it. Hitting one means the
    /// upstream builder broke that invariant.
    #[error("disabled face {face:?} is reachable from the live hull graph")]
    DisabledFaceInHull {
        /// The tombstoned face that was popped from the traversal stack.
        face: FaceId,
    },

    /// Writing the exported mesh failed.
    #[error("mesh export failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for hull operations.
pub type Result<T> = std::result::Result<T, HullError>;
