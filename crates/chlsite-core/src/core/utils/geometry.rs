use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("Cannot normalize a vector of length {norm}")]
    DegenerateVector { norm: f64 },
}

/// Returns `v` scaled to unit length.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateVector`] if the norm of `v` is zero or
/// not finite.
pub fn normalize(v: &Vector3<f64>) -> Result<Vector3<f64>, GeometryError> {
    let norm = v.norm();
    if norm == 0.0 || !norm.is_finite() {
        return Err(GeometryError::DegenerateVector { norm });
    }
    Ok(v / norm)
}

/// Angle between two vectors in radians, in `[0, π]`.
///
/// The dot product of the unit vectors is clamped to `[-1, 1]` before `acos`
/// so that rounding never produces `NaN` for (anti)parallel inputs.
pub fn angle_between(v1: &Vector3<f64>, v2: &Vector3<f64>) -> Result<f64, GeometryError> {
    let u1 = normalize(v1)?;
    let u2 = normalize(v2)?;
    Ok(u1.dot(&u2).clamp(-1.0, 1.0).acos())
}

/// Normal of the cofactor macrocycle plane, `-((NC - MG) x (NB - MG))`.
pub fn macrocycle_normal(
    mg: &Point3<f64>,
    nc: &Point3<f64>,
    nb: &Point3<f64>,
) -> Vector3<f64> {
    let mg_nc = nc - mg;
    let mg_nb = nb - mg;
    -mg_nc.cross(&mg_nb)
}

/// Elevation of `probe` above the macrocycle plane as seen from `pivot`, in degrees.
///
/// Returns `90 - angle(probe - pivot, normal)`: `0` when the probe lies in the
/// plane, `90` along the normal and `-90` along the opposite direction.
pub fn plane_elevation_degrees(
    normal: &Vector3<f64>,
    pivot: &Point3<f64>,
    probe: &Point3<f64>,
) -> Result<f64, GeometryError> {
    let pivot_to_probe = probe - pivot;
    let angle = angle_between(&pivot_to_probe, normal)?;
    Ok(90.0 - angle.to_degrees())
}
