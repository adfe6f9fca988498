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
use crate::gamut::GamutPrimaries;
use crate::matrix::Matrix3d;

/// Post-derivation policy for a gamut conversion matrix.
///
/// The default leaves the white-point-constrained scale untouched. Row-sum
/// normalization and the calibration multiplier are opt-in conventions some
/// downstream consumers expect; neither is ever applied implicitly.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct ConversionOptions {
    /// Rescale the matrix so its largest row sums to 1.
    pub row_sum_normalized: bool,
    /// Opaque external calibration multiplier, measured or given, never
    /// derived by this crate.
    pub calibration_scale: Option<f64>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            row_sum_normalized: false,
            calibration_scale: None,
        }
    }
}

/// Rescales the matrix by its largest row sum so the dominant row sums to 1.
///
/// This approximates a unit-energy mapping, a calibration convention
/// distinct from the white-point-constrained scale.
#[inline]
pub fn normalize_max_row_sum(matrix: Matrix3d) -> Matrix3d {
    let sums = matrix.row_sums();
    let k = sums.v[0].max(sums.v[1]).max(sums.v[2]);
    matrix / k
}

/// Derives the source-to-destination conversion matrix and applies the
/// requested post-scaling, normalization first, calibration multiplier on
/// top of it.
pub fn create_conversion(
    source: &GamutPrimaries,
    dest: &GamutPrimaries,
    options: ConversionOptions,
) -> Result<Matrix3d, GamutError> {
    let mut matrix = source.transform_matrix(dest)?;
    if options.row_sum_normalized {
        matrix = normalize_max_row_sum(matrix);
    }
    if let Some(scale) = options.calibration_scale {
        matrix = matrix * scale;
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_options_match_raw_transform() {
        let src = GamutPrimaries::new_srgb();
        let dst = GamutPrimaries::new_bt2020();
        let raw = src.transform_matrix(&dst).unwrap();
        let derived = create_conversion(&src, &dst, ConversionOptions::default()).unwrap();
        assert!(derived.test_equality(raw, 1e-15));
    }

    #[test]
    fn normalized_matrix_has_unit_max_row_sum() {
        let matrix = GamutPrimaries::new_srgb().to_xyz_matrix().unwrap();
        let normalized = normalize_max_row_sum(matrix);
        let sums = normalized.row_sums();
        let max = sums.v[0].max(sums.v[1]).max(sums.v[2]);
        assert!((max - 1.0).abs() < 1e-12);
    }

    #[test]
    fn calibration_scale_multiplies_every_entry() {
        let src = GamutPrimaries::new_display_p3();
        let dst = GamutPrimaries::new_dci_p3();
        let raw = src.transform_matrix(&dst).unwrap();
        let scaled = create_conversion(
            &src,
            &dst,
            ConversionOptions {
                calibration_scale: Some(0.88871),
                ..ConversionOptions::default()
            },
        )
        .unwrap();
        assert!(scaled.test_equality(raw * 0.88871, 1e-15));
    }

    #[test]
    fn random_gamut_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..64 {
            let mut jitter = |c: f64| c + rng.random_range(-0.02..0.02);
            let a = GamutPrimaries::new(
                crate::Chromaticity::new(jitter(0.64), jitter(0.33)),
                crate::Chromaticity::new(jitter(0.30), jitter(0.60)),
                crate::Chromaticity::new(jitter(0.15), jitter(0.06)),
                crate::Chromaticity::new(jitter(0.3127), jitter(0.3290)),
            );
            let b = GamutPrimaries::new_bt2020();
            let forward = a.transform_matrix(&b).unwrap();
            let backward = b.transform_matrix(&a).unwrap();
            assert!(
                forward
                    .mat_mul(backward)
                    .test_equality(Matrix3d::IDENTITY, 1e-9)
            );
        }
    }
}
