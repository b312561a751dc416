// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decomposition of 2D affine transforms into translate/rotate/scale/skew.
//!
//! ## Usage
//!
//! 1) Read the element's inline or computed `transform` string.
//! 2) Call [`parse_matrix`] to get a [`Matrix`] (or `None` for `none`).
//! 3) Use the translate components as the element's starting position, and
//!    `rotate`/`scale_x` as its rotation and scale.
//!
//! Angles and scales are rounded to hundredths so that a transform written
//! back out and parsed again on the next mount yields the same values.
//!
//! ```
//! use understory_frame_geometry::matrix::parse_matrix;
//!
//! let m = parse_matrix("matrix(1, 0, 0, 1, 50, 75)").unwrap().unwrap();
//! assert_eq!((m.translate_x, m.translate_y), (50.0, 75.0));
//! assert_eq!(m.rotate, 0.0);
//!
//! assert_eq!(parse_matrix("none").unwrap(), None);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Affine;

/// Error returned when a transform cannot be decomposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// The transform string did not contain exactly six numeric components.
    #[error("expected 6 matrix components, found {found}")]
    Malformed {
        /// Number of numeric components found.
        found: usize,
    },
    /// The linear part has a zero determinant and cannot be decomposed.
    #[error("matrix is singular")]
    Singular,
}

/// A decomposed 2D affine transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix {
    /// Horizontal translation, unrounded.
    pub translate_x: f64,
    /// Vertical translation, unrounded.
    pub translate_y: f64,
    /// Rotation in degrees, rounded to hundredths.
    pub rotate: f64,
    /// Skew in degrees, rounded to hundredths.
    pub skew: f64,
    /// Horizontal scale, rounded to hundredths.
    pub scale_x: f64,
    /// Vertical scale, rounded to hundredths.
    pub scale_y: f64,
}

impl Matrix {
    /// The identity decomposition.
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        rotate: 0.0,
        skew: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// Decompose an affine transform.
    ///
    /// Kurbo's coefficient order `[a, b, c, d, e, f]` is the same as CSS
    /// `matrix(a, b, c, d, e, f)`.
    pub fn decompose(affine: Affine) -> Result<Self, MatrixError> {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self::from_coeffs(a, b, c, d, e, f)
    }

    fn from_coeffs(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Result<Self, MatrixError> {
        let (mut a, mut b, mut c, mut d) = (a, b, c, d);
        if a * d == b * c {
            return Err(MatrixError::Singular);
        }

        let mut scale_x = (a * a + b * b).sqrt();
        a /= scale_x;
        b /= scale_x;

        let mut skew = a * c + b * d;
        c -= a * skew;
        d -= b * skew;

        let scale_y = (c * c + d * d).sqrt();
        c /= scale_y;
        d /= scale_y;
        skew /= scale_y;

        // A negative determinant is a reflection, not a rotation.
        if a * d < b * c {
            a = -a;
            b = -b;
            skew = -skew;
            scale_x = -scale_x;
        }

        Ok(Self {
            translate_x: e,
            translate_y: f,
            rotate: round_hundredths(b.atan2(a).to_degrees()),
            skew: round_hundredths(skew.atan().to_degrees()),
            scale_x: round_hundredths(scale_x),
            scale_y: round_hundredths(scale_y),
        })
    }

    /// Rebuild the affine transform described by this decomposition.
    ///
    /// Rounding of the angular and scale components means this is only an
    /// approximation of the transform that was decomposed.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate((self.translate_x, self.translate_y))
            * Affine::rotate(self.rotate.to_radians())
            * Affine::skew(self.skew.to_radians().tan(), 0.0)
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }
}

/// Parse a CSS 2D transform string such as `matrix(a, b, c, d, e, f)`.
///
/// Returns `Ok(None)` for an empty string or `none`.
pub fn parse_matrix(transform: &str) -> Result<Option<Matrix>, MatrixError> {
    let transform = transform.trim();
    if transform.is_empty() || transform == "none" {
        return Ok(None);
    }

    let mut m = [0.0_f64; 6];
    let mut found = 0;
    for value in numbers(transform) {
        if found < m.len() {
            m[found] = value;
        }
        found += 1;
    }
    if found != m.len() {
        return Err(MatrixError::Malformed { found });
    }

    Matrix::from_coeffs(m[0], m[1], m[2], m[3], m[4], m[5]).map(Some)
}

/// Iterate the numeric tokens of a transform string.
fn numbers(s: &str) -> impl Iterator<Item = f64> + '_ {
    s.split(|c: char| !is_number_char(c))
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

fn round_hundredths(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}
