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
use crate::err::{GamutError, MatrixOperand};
use crate::matrix::{Chromaticity, Matrix3d, Xyz};

/// RGB gamut definition: red, green and blue corner chromaticities plus the
/// chromaticity that RGB = (1,1,1) maps to.
///
/// Primary order is significant, it fixes the column order of every matrix
/// derived from the set.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct GamutPrimaries {
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
    pub white_point: Chromaticity,
}

impl GamutPrimaries {
    pub const fn new(
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        white_point: Chromaticity,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            white_point,
        }
    }

    pub const fn new_srgb() -> Self {
        Self {
            red: Chromaticity::new(0.640, 0.330),
            green: Chromaticity::new(0.300, 0.600),
            blue: Chromaticity::new(0.150, 0.060),
            white_point: Chromaticity::D65,
        }
    }

    pub const fn new_display_p3() -> Self {
        Self {
            red: Chromaticity::new(0.680, 0.320),
            green: Chromaticity::new(0.265, 0.690),
            blue: Chromaticity::new(0.150, 0.060),
            white_point: Chromaticity::D65,
        }
    }

    /// Same primaries as Display P3, theatrical white point.
    pub const fn new_dci_p3() -> Self {
        Self {
            red: Chromaticity::new(0.680, 0.320),
            green: Chromaticity::new(0.265, 0.690),
            blue: Chromaticity::new(0.150, 0.060),
            white_point: Chromaticity::new(0.314, 0.351),
        }
    }

    pub const fn new_bt2020() -> Self {
        Self {
            red: Chromaticity::new(0.708, 0.292),
            green: Chromaticity::new(0.170, 0.797),
            blue: Chromaticity::new(0.131, 0.046),
            white_point: Chromaticity::D65,
        }
    }

    /// ACES 2065-1 AP0, the blue primary sits outside the spectral locus.
    pub const fn new_aces_ap0() -> Self {
        Self {
            red: Chromaticity::new(0.7347, 0.2653),
            green: Chromaticity::new(0.0000, 1.0000),
            blue: Chromaticity::new(0.0001, -0.0770),
            white_point: Chromaticity::new(0.32168, 0.33767),
        }
    }

    pub const fn new_aces_ap1() -> Self {
        Self {
            red: Chromaticity::new(0.713, 0.293),
            green: Chromaticity::new(0.165, 0.830),
            blue: Chromaticity::new(0.128, 0.044),
            white_point: Chromaticity::new(0.32168, 0.33767),
        }
    }

    pub const fn new_alexa_wide_gamut() -> Self {
        Self {
            red: Chromaticity::new(0.6840, 0.3130),
            green: Chromaticity::new(0.2210, 0.8480),
            blue: Chromaticity::new(0.0861, -0.1020),
            white_point: Chromaticity::D65,
        }
    }

    /// Matrix holding the promoted primary triples as columns, R,G,B order.
    #[inline]
    pub(crate) fn primaries_matrix(&self) -> Matrix3d {
        let red = self.red.to_triple().to_vector();
        let green = self.green.to_triple().to_vector();
        let blue = self.blue.to_triple().to_vector();
        Matrix3d {
            v: [
                [red.v[0], green.v[0], blue.v[0]],
                [red.v[1], green.v[1], blue.v[1]],
                [red.v[2], green.v[2], blue.v[2]],
            ],
        }
    }

    /// Resolved white point tristimulus, Y = 1.
    #[inline]
    pub fn white_point_xyz(&self) -> Result<Xyz, GamutError> {
        self.white_point.to_triple().to_white_point()
    }

    /// Builds the matrix mapping linear RGB in this gamut to CIE XYZ,
    /// constrained so RGB = (1,1,1) lands exactly on the white point.
    ///
    /// The primaries matrix is inverted to solve for the per-channel
    /// weights, then each column is scaled by its weight.
    pub fn to_xyz_matrix(&self) -> Result<Matrix3d, GamutError> {
        self.to_xyz_matrix_tagged(MatrixOperand::Primaries)
    }

    fn to_xyz_matrix_tagged(&self, operand: MatrixOperand) -> Result<Matrix3d, GamutError> {
        let xyz_matrix = self.primaries_matrix();
        let white_point = self.white_point_xyz()?;
        let xyz_inverse = xyz_matrix
            .inverse()
            .ok_or(GamutError::SingularMatrix(operand))?;
        let weights = xyz_inverse.mul_vector(white_point.to_vector());
        let mut v = xyz_matrix.mul_row_vector::<0>(weights);
        v = v.mul_row_vector::<1>(weights);
        v = v.mul_row_vector::<2>(weights);
        Ok(v)
    }

    /// Computes transform matrix RGB -> XYZ -> RGB.
    ///
    /// Current gamut is used as source, other as destination: the result is
    /// `dest_to_xyz⁻¹ · self_to_xyz`, so multiplying a linear RGB triple in
    /// this gamut yields the equivalent triple in `dest`. Converting a gamut
    /// to itself is the identity.
    pub fn transform_matrix(&self, dest: &GamutPrimaries) -> Result<Matrix3d, GamutError> {
        let source = self.to_xyz_matrix_tagged(MatrixOperand::Source)?;
        let dst = dest.to_xyz_matrix_tagged(MatrixOperand::Destination)?;
        let dest_inverse = dst
            .inverse()
            .ok_or(GamutError::SingularMatrix(MatrixOperand::Destination))?;
        Ok(dest_inverse.mat_mul(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::SRGB_MATRIX;

    #[test]
    fn srgb_matches_published_constants() {
        let matrix = GamutPrimaries::new_srgb().to_xyz_matrix().unwrap();
        assert!(
            matrix.test_equality(SRGB_MATRIX, 1e-3),
            "derived {:?} vs published {:?}",
            matrix,
            SRGB_MATRIX
        );
    }

    #[test]
    fn white_point_fixed_point() {
        let gamut = GamutPrimaries::new_bt2020();
        let matrix = gamut.to_xyz_matrix().unwrap();
        let white = matrix.mul_vector(1f64.into());
        let expected = gamut.white_point_xyz().unwrap();
        assert!((white.v[0] - expected.x).abs() < 1e-12);
        assert!((white.v[1] - expected.y).abs() < 1e-12);
        assert!((white.v[2] - expected.z).abs() < 1e-12);
    }

    #[test]
    fn self_conversion_is_identity() {
        let gamut = GamutPrimaries::new_display_p3();
        let conversion = gamut.transform_matrix(&gamut).unwrap();
        assert!(conversion.test_equality(Matrix3d::IDENTITY, 1e-9));
    }

    #[test]
    fn conversion_round_trip_is_identity() {
        let a = GamutPrimaries::new_srgb();
        let b = GamutPrimaries::new_aces_ap0();
        let forward = a.transform_matrix(&b).unwrap();
        let backward = b.transform_matrix(&a).unwrap();
        let product = forward.mat_mul(backward);
        assert!(product.test_equality(Matrix3d::IDENTITY, 1e-9));
    }

    #[test]
    fn collinear_primaries_are_rejected() {
        let degenerate = GamutPrimaries::new(
            Chromaticity::new(0.5, 0.5),
            Chromaticity::new(0.5, 0.5),
            Chromaticity::new(0.5, 0.5),
            Chromaticity::D65,
        );
        assert_eq!(
            degenerate.to_xyz_matrix(),
            Err(GamutError::SingularMatrix(MatrixOperand::Primaries))
        );
    }

    #[test]
    fn singular_source_is_identified() {
        let degenerate = GamutPrimaries::new(
            Chromaticity::new(0.5, 0.5),
            Chromaticity::new(0.5, 0.5),
            Chromaticity::new(0.5, 0.5),
            Chromaticity::D65,
        );
        let dest = GamutPrimaries::new_srgb();
        assert_eq!(
            degenerate.transform_matrix(&dest),
            Err(GamutError::SingularMatrix(MatrixOperand::Source))
        );
        assert_eq!(
            dest.transform_matrix(&degenerate),
            Err(GamutError::SingularMatrix(MatrixOperand::Destination))
        );
    }

    #[test]
    fn degenerate_white_point_propagates() {
        let gamut = GamutPrimaries::new(
            Chromaticity::new(0.64, 0.33),
            Chromaticity::new(0.30, 0.60),
            Chromaticity::new(0.15, 0.06),
            Chromaticity::new(0.3, 0.0),
        );
        assert_eq!(gamut.to_xyz_matrix(), Err(GamutError::DivisionByZero));
    }
}
