//! Shape builders on top of truck's sweep API.
//!
//! truck has no built-in cylinder or polygon face — everything is wires,
//! planes and successive sweeps.

use std::f64::consts::PI;
use truck_modeling::builder;
use truck_modeling::topology::{Edge, Face, Solid, Vertex, Wire};
use truck_modeling::{EuclideanSpace, Point3, Rad, Vector3};

use crate::types::KernelError;

/// Create a cylinder solid: circle wire → face → translational sweep.
/// Base centered at the origin in the XY plane, extending along +Z.
pub fn make_cylinder(radius: f64, height: f64) -> Result<Solid, KernelError> {
    if radius <= 0.0 || height <= 0.0 {
        return Err(KernelError::DegenerateSweep {
            reason: format!("cylinder radius {radius} / height {height} must be positive"),
        });
    }
    let v = builder::vertex(Point3::new(radius, 0.0, 0.0));
    let wire = builder::rsweep(&v, Point3::origin(), Vector3::unit_z(), Rad(2.0 * PI));
    let face = builder::try_attach_plane(&[wire]).map_err(|e| KernelError::DegenerateSweep {
        reason: format!("circular face: {e}"),
    })?;
    Ok(builder::tsweep(&face, Vector3::new(0.0, 0.0, height)))
}

/// Build a planar face from a closed polygon in the XY plane (z = 0).
/// Counter-clockwise winding gives a +Z face normal.
pub fn polygon_face_xy(points: &[[f64; 2]]) -> Result<Face, KernelError> {
    polygon_face(points, |p| Point3::new(p[0], p[1], 0.0))
}

/// Build a planar face from a closed polygon in the XZ plane (y = 0),
/// mapping 2D (x, y) to 3D (x, 0, y). Used for profiles revolved around Z.
pub fn polygon_face_xz(points: &[[f64; 2]]) -> Result<Face, KernelError> {
    polygon_face(points, |p| Point3::new(p[0], 0.0, p[1]))
}

fn polygon_face(
    points: &[[f64; 2]],
    place: impl Fn(&[f64; 2]) -> Point3,
) -> Result<Face, KernelError> {
    if points.len() < 3 {
        return Err(KernelError::DegenerateProfile {
            reason: format!("polygon needs at least 3 points, got {}", points.len()),
        });
    }
    let verts: Vec<Vertex> = points.iter().map(|p| builder::vertex(place(p))).collect();
    let mut edges: Vec<Edge> = Vec::with_capacity(verts.len());
    for i in 0..verts.len() {
        let j = (i + 1) % verts.len();
        edges.push(builder::line(&verts[i], &verts[j]));
    }
    let wire = Wire::from_iter(edges);
    builder::try_attach_plane(&[wire]).map_err(|e| KernelError::DegenerateProfile {
        reason: format!("polygon face: {e}"),
    })
}
