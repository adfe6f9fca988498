/*
 * // Copyright (c) Radzivon Bartoshyk 4/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::GamutError;
use num_traits::AsPrimitive;
use std::ops::{Add, Div, Mul, Sub};

/// Vector math helper
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector3<T> {
    pub v: [T; 3],
}

pub type Vector3d = Vector3<f64>;
pub type Vector3i = Vector3<i32>;

impl<T> PartialEq<Self> for Vector3<T>
where
    T: AsPrimitive<f64>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        const TOLERANCE: f64 = 1e-9;
        let dx = (self.v[0].as_() - other.v[0].as_()).abs();
        let dy = (self.v[1].as_() - other.v[1].as_()).abs();
        let dz = (self.v[2].as_() - other.v[2].as_()).abs();
        dx < TOLERANCE && dy < TOLERANCE && dz < TOLERANCE
    }
}

impl<T> Vector3<T> {
    #[inline]
    pub fn to_<Z: Copy + 'static>(self) -> Vector3<Z>
    where
        T: AsPrimitive<Z>,
    {
        Vector3 {
            v: [self.v[0].as_(), self.v[1].as_(), self.v[2].as_()],
        }
    }
}

impl<T> Mul<Vector3<T>> for Vector3<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        Self {
            v: [
                self.v[0] * rhs.v[0],
                self.v[1] * rhs.v[1],
                self.v[2] * rhs.v[2],
            ],
        }
    }
}

impl<T> Mul<T> for Vector3<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self {
            v: [self.v[0] * rhs, self.v[1] * rhs, self.v[2] * rhs],
        }
    }
}

impl Vector3<f64> {
    #[inline]
    const fn const_mul_vector(self, v: Vector3d) -> Vector3d {
        Vector3d {
            v: [self.v[0] * v.v[0], self.v[1] * v.v[1], self.v[2] * v.v[2]],
        }
    }

    #[inline]
    pub const fn sum(self) -> f64 {
        self.v[0] + self.v[1] + self.v[2]
    }
}

impl<T> From<T> for Vector3<T>
where
    T: Copy,
{
    fn from(value: T) -> Self {
        Self {
            v: [value, value, value],
        }
    }
}

impl<T> Add<Vector3<T>> for Vector3<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = Vector3<T>;

    #[inline]
    fn add(self, rhs: Vector3<T>) -> Self::Output {
        Self {
            v: [
                self.v[0] + rhs.v[0],
                self.v[1] + rhs.v[1],
                self.v[2] + rhs.v[2],
            ],
        }
    }
}

impl<T> Sub<Vector3<T>> for Vector3<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Vector3<T>;

    #[inline]
    fn sub(self, rhs: Vector3<T>) -> Self::Output {
        Self {
            v: [
                self.v[0] - rhs.v[0],
                self.v[1] - rhs.v[1],
                self.v[2] - rhs.v[2],
            ],
        }
    }
}

/// Matrix math helper
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix3d {
    pub v: [[f64; 3]; 3],
}

/// sRGB linear RGB -> XYZ, D65 white, IEC 61966-2-1 derived reference values.
pub const SRGB_MATRIX: Matrix3d = Matrix3d {
    v: [
        [0.4123907993, 0.3575843394, 0.1804807884],
        [0.2126390059, 0.7151686788, 0.0721923154],
        [0.0193308187, 0.1191947798, 0.9505321522],
    ],
};

/// Display P3 linear RGB -> XYZ, D65 white.
pub const DISPLAY_P3_MATRIX: Matrix3d = Matrix3d {
    v: [
        [0.4865709486, 0.2656676932, 0.1982172852],
        [0.2289745641, 0.6917385218, 0.0792869141],
        [0.0000000000, 0.0451133819, 1.0439443689],
    ],
};

/// BT.2020 linear RGB -> XYZ, D65 white.
pub const BT2020_MATRIX: Matrix3d = Matrix3d {
    v: [
        [0.6369580483, 0.1446169036, 0.1688809752],
        [0.2627002120, 0.6779980715, 0.0593017165],
        [0.0000000000, 0.0280726930, 1.0609850577],
    ],
};

impl Matrix3d {
    #[inline]
    pub const fn transpose(&self) -> Matrix3d {
        Matrix3d {
            v: [
                [self.v[0][0], self.v[1][0], self.v[2][0]],
                [self.v[0][1], self.v[1][1], self.v[2][1]],
                [self.v[0][2], self.v[1][2], self.v[2][2]],
            ],
        }
    }

    pub const IDENTITY: Matrix3d = Matrix3d {
        v: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    #[inline]
    pub const fn test_equality(&self, other: Matrix3d, tolerance: f64) -> bool {
        let mut i = 0usize;
        while i < 3 {
            let mut j = 0usize;
            while j < 3 {
                if (self.v[i][j] - other.v[i][j]).abs() > tolerance {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }

    #[inline]
    pub const fn determinant(&self) -> f64 {
        let v = self.v;
        let a0 = v[0][0] * v[1][1] * v[2][2];
        let a1 = v[0][1] * v[1][2] * v[2][0];
        let a2 = v[0][2] * v[1][0] * v[2][1];

        let s0 = v[0][2] * v[1][1] * v[2][0];
        let s1 = v[0][1] * v[1][0] * v[2][2];
        let s2 = v[0][0] * v[1][2] * v[2][1];

        a0 + a1 + a2 - s0 - s1 - s2
    }

    /// Determinant magnitude below which the matrix is treated as singular.
    /// Collinear primaries land well below this.
    pub const DETERMINANT_TOLERANCE: f64 = 1e-12;

    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        let v = self.v;
        let j = self.determinant();
        if j.abs() < Self::DETERMINANT_TOLERANCE {
            return None;
        }
        let det = 1. / j;
        let a = v[0][0];
        let b = v[0][1];
        let c = v[0][2];
        let d = v[1][0];
        let e = v[1][1];
        let f = v[1][2];
        let g = v[2][0];
        let h = v[2][1];
        let i = v[2][2];

        Some(Matrix3d {
            v: [
                [
                    (e * i - f * h) * det,
                    (c * h - b * i) * det,
                    (b * f - c * e) * det,
                ],
                [
                    (f * g - d * i) * det,
                    (a * i - c * g) * det,
                    (c * d - a * f) * det,
                ],
                [
                    (d * h - e * g) * det,
                    (b * g - a * h) * det,
                    (a * e - b * d) * det,
                ],
            ],
        })
    }

    #[inline]
    pub const fn mul_row_vector<const R: usize>(&self, rhs: Vector3d) -> Self {
        if R == 0 {
            Self {
                v: [
                    (Vector3d { v: self.v[0] }.const_mul_vector(rhs)).v,
                    self.v[1],
                    self.v[2],
                ],
            }
        } else if R == 1 {
            Self {
                v: [
                    self.v[0],
                    (Vector3d { v: self.v[1] }.const_mul_vector(rhs)).v,
                    self.v[2],
                ],
            }
        } else if R == 2 {
            Self {
                v: [
                    self.v[0],
                    self.v[1],
                    (Vector3d { v: self.v[2] }.const_mul_vector(rhs)).v,
                ],
            }
        } else {
            unimplemented!()
        }
    }

    #[inline]
    pub const fn mul_vector(&self, other: Vector3d) -> Vector3d {
        let x = self.v[0][0] * other.v[0] + self.v[0][1] * other.v[1] + self.v[0][2] * other.v[2];
        let y = self.v[1][0] * other.v[0] + self.v[1][1] * other.v[1] + self.v[1][2] * other.v[2];
        let z = self.v[2][0] * other.v[0] + self.v[2][1] * other.v[1] + self.v[2][2] * other.v[2];
        Vector3d { v: [x, y, z] }
    }

    #[inline]
    pub const fn mat_mul(&self, other: Matrix3d) -> Self {
        let mut result = Matrix3d { v: [[0f64; 3]; 3] };
        let mut i = 0usize;
        while i < 3 {
            let mut j = 0usize;
            while j < 3 {
                result.v[i][j] = self.v[i][0] * other.v[0][j]
                    + self.v[i][1] * other.v[1][j]
                    + self.v[i][2] * other.v[2][j];
                j += 1;
            }
            i += 1;
        }

        result
    }

    /// Sums of the three rows, in row order.
    #[inline]
    pub const fn row_sums(&self) -> Vector3d {
        Vector3d {
            v: [
                Vector3d { v: self.v[0] }.sum(),
                Vector3d { v: self.v[1] }.sum(),
                Vector3d { v: self.v[2] }.sum(),
            ],
        }
    }
}

impl Mul<f64> for Matrix3d {
    type Output = Matrix3d;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        let mut result = self;
        for row in result.v.iter_mut() {
            for item in row.iter_mut() {
                *item *= rhs;
            }
        }
        result
    }
}

impl Div<f64> for Matrix3d {
    type Output = Matrix3d;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self * (1. / rhs)
    }
}

/// Holds CIE XYZ representation
#[repr(C)]
#[derive(Clone, Debug, Copy, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PartialEq<Self> for Xyz {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        const TOLERANCE: f64 = 1e-9;
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        let dz = (self.z - other.z).abs();
        dx < TOLERANCE && dy < TOLERANCE && dz < TOLERANCE
    }
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn to_vector(self) -> Vector3d {
        Vector3d {
            v: [self.x, self.y, self.z],
        }
    }
}

impl Mul<f64> for Xyz {
    type Output = Xyz;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f64> for Xyz {
    type Output = Xyz;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

/// xy chromaticity pair, CIE 1931.
#[repr(C)]
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Lifts the xy pair into the xyz plane, z = 1 - x - y.
    ///
    /// Physically implausible pairs with x + y > 1 are not rejected here;
    /// the negative z shows up later as a determinant sign flip and the
    /// singularity check catches the gamut once it degenerates.
    #[inline]
    pub const fn to_triple(&self) -> ChromaticityTriple {
        ChromaticityTriple {
            x: self.x,
            y: self.y,
            z: 1f64 - self.x - self.y,
        }
    }

    pub const D65: Chromaticity = Chromaticity {
        x: 0.3127,
        y: 0.3290,
    };

    pub const D50: Chromaticity = Chromaticity {
        x: 0.34567,
        y: 0.35850,
    };
}

/// xyz triple with the derived z component. Only ever produced by
/// [`Chromaticity::to_triple`], never assembled from free components.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct ChromaticityTriple {
    x: f64,
    y: f64,
    z: f64,
}

impl ChromaticityTriple {
    #[inline]
    pub const fn to_vector(self) -> Vector3d {
        Vector3d {
            v: [self.x, self.y, self.z],
        }
    }

    /// Rescales the triple to tristimulus with Y pinned to 1.
    #[inline]
    pub fn to_white_point(self) -> Result<Xyz, GamutError> {
        if self.y == 0. {
            return Err(GamutError::DivisionByZero);
        }
        let rec = 1f64 / self.y;
        Ok(Xyz {
            x: self.x * rec,
            y: 1f64,
            z: self.z * rec,
        })
    }
}

impl TryFrom<Xyz> for Chromaticity {
    type Error = GamutError;

    #[inline]
    fn try_from(xyz: Xyz) -> Result<Self, Self::Error> {
        let sum = xyz.x + xyz.y + xyz.z;

        // Avoid division by zero or invalid XYZ values
        if sum == 0.0 {
            return Err(GamutError::DivisionByZero);
        }
        let rec = 1f64 / sum;

        Ok(Chromaticity {
            x: xyz.x * rec,
            y: xyz.y * rec,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_round_trip() {
        let inverse = SRGB_MATRIX.inverse().unwrap();
        let product = inverse.mat_mul(SRGB_MATRIX);
        assert!(product.test_equality(Matrix3d::IDENTITY, 1e-9));
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let collinear = Matrix3d {
            v: [[0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, 0.5]],
        };
        assert!(collinear.inverse().is_none());
    }

    #[test]
    fn promotion_keeps_z_derived() {
        let xy = Chromaticity::new(0.64, 0.33);
        let triple = xy.to_triple().to_vector();
        assert!((triple.v[2] - (1.0 - 0.64 - 0.33)).abs() < 1e-15);
    }

    #[test]
    fn white_point_y_is_unit() {
        let wp = Chromaticity::D65.to_triple().to_white_point().unwrap();
        assert!((wp.y - 1.0).abs() < 1e-15);
        assert!((wp.x - 0.3127 / 0.3290).abs() < 1e-12);
    }

    #[test]
    fn zero_white_point_is_rejected() {
        let degenerate = Chromaticity::new(0.3, 0.0).to_triple();
        assert_eq!(degenerate.to_white_point(), Err(GamutError::DivisionByZero));
    }

    #[test]
    fn row_sums_order() {
        let m = Matrix3d {
            v: [[1., 2., 3.], [0., 0., 1.], [4., 4., 4.]],
        };
        let sums = m.row_sums();
        assert_eq!(sums.v, [6., 1., 12.]);
    }
}
