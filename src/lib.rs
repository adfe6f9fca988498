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
//! Derivation of 3x3 linear matrices that convert pixel values between RGB
//! gamuts, from each gamut's primaries and white point given as CIE xy
//! chromaticities. Linear primary-matrix algebra only: no rendering, no
//! perceptual spaces, no chromatic adaptation.
#![forbid(unsafe_code)]
#![deny(unreachable_pub)]
mod err;
mod gamut;
mod matrix;
#[cfg(feature = "serde")]
mod measurement;
mod registry;
mod transform;

pub use err::{GamutError, MatrixOperand, MismatchedArity};
pub use gamut::GamutPrimaries;
pub use matrix::{
    BT2020_MATRIX, Chromaticity, ChromaticityTriple, DISPLAY_P3_MATRIX, Matrix3d, SRGB_MATRIX,
    Vector3, Vector3d, Vector3i, Xyz,
};
#[cfg(feature = "serde")]
pub use measurement::{MeasuredGamut, MeasurementDocument};
pub use registry::{PrimariesRecord, PrimariesRegistry, RECORD_FIELDS};
pub use transform::{ConversionOptions, create_conversion, normalize_max_row_sum};
