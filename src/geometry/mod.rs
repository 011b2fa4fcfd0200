//! Supporting plane and the 3D vector type.
//!
//! The vector type is `glam`'s double-precision [`DVec3`](glam::DVec3),
//! re-exported as [`Vec3`] so the rest of the crate (and downstream builders)
//! never name glam directly.

pub use glam::DVec3 as Vec3;

/// A supporting plane of the hull, in implicit form.
///
/// Built from a normal `N` and any point `P` on the plane; stores `N`, the
/// signed offset `d = -(N · P)`, and `|N|²`. The normal is used as given —
/// no normalization happens here, so distances coming out of
/// [`signed_distance`](Plane::signed_distance) are scaled by `|N|`. Callers
/// that need metric distance divide by `sqr_normal_length.sqrt()`.
///
/// A zero normal is not rejected; supplying a non-zero `N` is the caller's
/// precondition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plane {
    /// Plane normal, as supplied at construction.
    pub normal: Vec3,
    /// Signed offset from the origin; equals the signed distance when the
    /// normal has unit length.
    pub d: f64,
    /// Squared length of the normal, cached for callers that need to
    /// convert classification distances into metric distances.
    pub sqr_normal_length: f64,
}

impl Plane {
    /// Construct a plane from a normal and any point on the plane.
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            d: -normal.dot(point),
            sqr_normal_length: normal.length_squared(),
        }
    }

    /// True iff `q` lies on the plane or on the side the normal points
    /// toward. A point exactly on the plane classifies as positive.
    pub fn is_on_positive_side(&self, q: Vec3) -> bool {
        self.signed_distance(q) >= 0.0
    }

    /// Signed distance from `q` to the plane, scaled by the length of the
    /// normal.
    pub fn signed_distance(&self, q: Vec3) -> f64 {
        self.normal.dot(q) + self.d
    }
}
