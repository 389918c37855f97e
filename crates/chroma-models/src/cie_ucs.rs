//! CIE 1960 UCS colourspace.
//!
//! The CIE 1960 Uniform Colour Space re-projects *CIE XYZ* tristimulus
//! values so that equal distances correspond more closely to equal
//! perceived colour differences. It survives today mainly through its
//! *uv* chromaticity diagram, the basis of correlated colour temperature
//! computations.
//!
//! # Range
//!
//! - Input/Output tristimulus values: [0, 1]
//!
//! # Reference
//!
//! Wikipedia, CIE 1960 color space, "Relation to CIE XYZ".

use glam::{DMat3, DVec3};

/// *CIE XYZ* to *CIE UCS* transformation matrix.
///
/// ```text
/// U = 2/3 * X
/// V = Y
/// W = (-X + 3Y + Z) / 2
/// ```
pub const XYZ_TO_UCS: DMat3 = DMat3::from_cols(
    DVec3::new(2.0 / 3.0, 0.0, -0.5),
    DVec3::new(0.0, 1.0, 1.5),
    DVec3::new(0.0, 0.0, 0.5),
);

/// *CIE UCS* to *CIE XYZ* transformation matrix, inverse of
/// [`XYZ_TO_UCS`].
///
/// ```text
/// X = 3/2 * U
/// Y = V
/// Z = 3/2 * U - 3V + 2W
/// ```
pub const UCS_TO_XYZ: DMat3 = DMat3::from_cols(
    DVec3::new(1.5, 0.0, 1.5),
    DVec3::new(0.0, 1.0, -3.0),
    DVec3::new(0.0, 0.0, 2.0),
);

/// Converts *CIE XYZ* tristimulus values to the *CIE UCS* colourspace.
///
/// # Example
///
/// ```rust
/// use chroma_models::cie_ucs::xyz_to_ucs;
///
/// let uvw = xyz_to_ucs([0.07049534, 0.10080000, 0.09558313]);
/// assert!((uvw[0] - 0.04699689).abs() < 1e-8);
/// assert!((uvw[1] - 0.10080000).abs() < 1e-8);
/// assert!((uvw[2] - 0.16374390).abs() < 1e-8);
/// ```
#[inline]
pub fn xyz_to_ucs(xyz: [f64; 3]) -> [f64; 3] {
    (XYZ_TO_UCS * DVec3::from_array(xyz)).to_array()
}

/// Converts *CIE UCS* colourspace values to *CIE XYZ* tristimulus values.
///
/// # Example
///
/// ```rust
/// use chroma_models::cie_ucs::ucs_to_xyz;
///
/// let xyz = ucs_to_xyz([0.04699689, 0.10080000, 0.16374390]);
/// assert!((xyz[0] - 0.07049534).abs() < 1e-8);
/// ```
#[inline]
pub fn ucs_to_xyz(uvw: [f64; 3]) -> [f64; 3] {
    (UCS_TO_XYZ * DVec3::from_array(uvw)).to_array()
}

/// Returns the *uv* chromaticity coordinates of *CIE UCS* colourspace
/// values.
///
/// # Example
///
/// ```rust
/// use chroma_models::cie_ucs::ucs_to_uv;
///
/// let uv = ucs_to_uv([0.04699689, 0.10080000, 0.16374390]);
/// assert!((uv[0] - 0.15085310).abs() < 1e-7);
/// assert!((uv[1] - 0.32355314).abs() < 1e-7);
/// ```
#[inline]
pub fn ucs_to_uv(uvw: [f64; 3]) -> [f64; 2] {
    let [u, v, w] = uvw;
    let sum = u + v + w;
    [u / sum, v / sum]
}

/// Returns the *xy* chromaticity coordinates of *CIE UCS* *uv*
/// chromaticity coordinates.
///
/// # Example
///
/// ```rust
/// use chroma_models::cie_ucs::ucs_uv_to_xy;
///
/// let xy = ucs_uv_to_xy([0.15085309, 0.32355314]);
/// assert!((xy[0] - 0.26414772).abs() < 1e-8);
/// assert!((xy[1] - 0.37770001).abs() < 1e-8);
/// ```
#[inline]
pub fn ucs_uv_to_xy(uv: [f64; 2]) -> [f64; 2] {
    let [u, v] = uv;
    let denominator = 2.0 * u - 8.0 * v + 4.0;
    [3.0 * u / denominator, 2.0 * v / denominator]
}
