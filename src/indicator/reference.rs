//! Reference boundaries for indicators.
//!
//! A [`ReferenceFront`] is built once and never changes afterwards. Its
//! coordinate count is the dimensionality every evaluated vector must
//! match.

use crate::error::{MooError, Result};

/// An immutable reference front together with the corner that bounds the
/// dominated region.
///
/// # Corner
///
/// - Built from a single reference point: the point itself.
/// - Built from an explicit front: the coordinate-wise maximum (nadir) of
///   its points.
///
/// # Examples
///
/// ```
/// use u_moo::indicator::ReferenceFront;
///
/// let front = ReferenceFront::from_reference_point(&[2.0, 3.0]).unwrap();
/// assert_eq!(front.points(), &[vec![2.0, 0.0], vec![0.0, 3.0]]);
/// assert_eq!(front.corner(), &[2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ReferenceFrontParams")
)]
pub struct ReferenceFront {
    points: Vec<Vec<f64>>,
    corner: Vec<f64>,
}

impl ReferenceFront {
    /// Stores an explicit front verbatim.
    ///
    /// # Errors
    ///
    /// [`MooError::Validation`] if the front is empty, zero-dimensional,
    /// ragged, or contains non-finite coordinates.
    pub fn from_points(points: Vec<Vec<f64>>) -> Result<Self> {
        validate_points(&points)?;
        let dimension = points[0].len();
        let corner = (0..dimension)
            .map(|k| {
                points
                    .iter()
                    .map(|p| p[k])
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .collect();
        Ok(Self { points, corner })
    }

    /// Derives the axis-aligned front of a single reference point.
    ///
    /// For a point of `D` coordinates the front has `D` points; point `i`
    /// keeps coordinate `i` of the reference point and zeroes the rest.
    ///
    /// # Errors
    ///
    /// [`MooError::Validation`] if the point is empty or not finite.
    pub fn from_reference_point(point: &[f64]) -> Result<Self> {
        if point.is_empty() {
            return Err(MooError::Validation(
                "reference point must have at least one coordinate".into(),
            ));
        }
        if point.iter().any(|v| !v.is_finite()) {
            return Err(MooError::Validation(format!(
                "reference point has non-finite coordinates: {point:?}"
            )));
        }

        let d = point.len();
        let points = (0..d)
            .map(|i| {
                let mut p = vec![0.0; d];
                p[i] = point[i];
                p
            })
            .collect();

        Ok(Self {
            points,
            corner: point.to_vec(),
        })
    }

    /// The points of the front.
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// The corner bounding the dominated region.
    pub fn corner(&self) -> &[f64] {
        &self.corner
    }

    /// Number of objectives.
    pub fn dimension(&self) -> usize {
        self.corner.len()
    }

    /// Number of points in the front.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; construction rejects empty fronts.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn validate_points(points: &[Vec<f64>]) -> Result<()> {
    let Some(first) = points.first() else {
        return Err(MooError::Validation("reference front is empty".into()));
    };
    let dimension = first.len();
    if dimension == 0 {
        return Err(MooError::Validation(
            "reference front points must have at least one coordinate".into(),
        ));
    }
    for (i, p) in points.iter().enumerate() {
        if p.len() != dimension {
            return Err(MooError::Validation(format!(
                "reference front is ragged: point {i} has {} coordinates, expected {dimension}",
                p.len()
            )));
        }
        if p.iter().any(|v| !v.is_finite()) {
            return Err(MooError::Validation(format!(
                "reference front point {i} has non-finite coordinates"
            )));
        }
    }
    Ok(())
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ReferenceFrontParams {
    points: Vec<Vec<f64>>,
    corner: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<ReferenceFrontParams> for ReferenceFront {
    type Error = MooError;

    fn try_from(params: ReferenceFrontParams) -> Result<Self> {
        validate_points(&params.points)?;
        crate::check::dimension_matches(params.points[0].len(), params.corner.len())?;
        if params.corner.iter().any(|v| !v.is_finite()) {
            return Err(MooError::Validation(
                "reference corner has non-finite coordinates".into(),
            ));
        }
        Ok(Self {
            points: params.points,
            corner: params.corner,
        })
    }
}
