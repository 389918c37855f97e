//! Matrix predicates.

use glam::DMat3;

use crate::common::EPSILON;

/// Returns true if the matrix is the 3x3 identity.
///
/// Every element must match the identity within the toolkit's shared
/// tolerance, so products of a transform and its inverse test as
/// identity despite floating-point rounding.
///
/// # Example
///
/// ```rust
/// use chroma_algebra::is_identity;
/// use glam::DMat3;
///
/// assert!(is_identity(&DMat3::IDENTITY));
/// assert!(!is_identity(&DMat3::from_diagonal(glam::DVec3::new(1.0, 2.0, 1.0))));
/// ```
pub fn is_identity(matrix: &DMat3) -> bool {
    let difference = *matrix - DMat3::IDENTITY;
    difference.to_cols_array().iter().all(|d| d.abs() <= EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_identity() {
        assert!(is_identity(&DMat3::IDENTITY));
    }

    #[test]
    fn test_non_identity() {
        assert!(!is_identity(&DMat3::ZERO));
        assert!(!is_identity(&DMat3::from_diagonal(DVec3::new(
            1.0, 1.0, 2.0
        ))));
    }

    #[test]
    fn test_rounding_noise_is_tolerated() {
        let m = DMat3::from_diagonal(DVec3::splat(3.0));
        let product = m * m.inverse();
        assert!(is_identity(&product));
    }
}
