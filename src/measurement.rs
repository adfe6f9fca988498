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
use crate::matrix::{Chromaticity, Matrix3d};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One measured gamut: four xy pairs plus an optional calibration
/// multiplier supplied by the measurement rig, never derived here.
#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasuredGamut {
    pub red: [f64; 2],
    pub green: [f64; 2],
    pub blue: [f64; 2],
    pub white: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl MeasuredGamut {
    /// Validates the raw numbers and lifts them into a gamut definition.
    pub fn to_primaries(&self) -> Result<GamutPrimaries, GamutError> {
        let pairs = [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("white", self.white),
        ];
        for (label, pair) in pairs {
            if !pair[0].is_finite() || !pair[1].is_finite() {
                return Err(GamutError::MalformedDocument(format!(
                    "non-finite {label} chromaticity"
                )));
            }
        }
        if let Some(scale) = self.scale {
            if !scale.is_finite() || scale <= 0. {
                return Err(GamutError::MalformedDocument(format!(
                    "calibration scale must be finite and positive, got {scale}"
                )));
            }
        }
        Ok(GamutPrimaries::new(
            Chromaticity::new(self.red[0], self.red[1]),
            Chromaticity::new(self.green[0], self.green[1]),
            Chromaticity::new(self.blue[0], self.blue[1]),
            Chromaticity::new(self.white[0], self.white[1]),
        ))
    }
}

/// Calibration measurement input: labeled gamut measurements ("left",
/// "right", or arbitrary caller-chosen names) and an optional destination
/// gamut name resolved against a [`PrimariesRegistry`].
///
/// [`PrimariesRegistry`]: crate::PrimariesRegistry
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    pub sets: BTreeMap<String, MeasuredGamut>,
}

impl MeasurementDocument {
    pub fn validate(&self) -> Result<(), GamutError> {
        if self.sets.is_empty() {
            return Err(GamutError::MalformedDocument(
                "document holds no measurement sets".to_string(),
            ));
        }
        for set in self.sets.values() {
            set.to_primaries()?;
        }
        Ok(())
    }

    /// Derives one compensation matrix per labeled set.
    ///
    /// A compensation matrix maps linear RGB in the destination gamut back
    /// to the measured panel's RGB, which is `destination.transform_matrix(set)`,
    /// scaled by the set's calibration multiplier when present.
    pub fn derive_compensations(
        &self,
        destination: &GamutPrimaries,
    ) -> Result<BTreeMap<String, Matrix3d>, GamutError> {
        self.validate()?;
        let mut result = BTreeMap::new();
        for (label, set) in &self.sets {
            let primaries = set.to_primaries()?;
            let mut matrix = destination.transform_matrix(&primaries)?;
            if let Some(scale) = set.scale {
                matrix = matrix * scale;
            }
            result.insert(label.clone(), matrix);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix3d;

    fn srgb_set(scale: Option<f64>) -> MeasuredGamut {
        MeasuredGamut {
            red: [0.64, 0.33],
            green: [0.30, 0.60],
            blue: [0.15, 0.06],
            white: [0.3127, 0.3290],
            scale,
        }
    }

    #[test]
    fn empty_document_is_rejected() {
        let doc = MeasurementDocument::default();
        assert!(matches!(
            doc.validate(),
            Err(GamutError::MalformedDocument(_))
        ));
    }

    #[test]
    fn non_finite_chromaticity_is_rejected() {
        let mut set = srgb_set(None);
        set.green[1] = f64::NAN;
        assert!(matches!(
            set.to_primaries(),
            Err(GamutError::MalformedDocument(_))
        ));
    }

    #[test]
    fn negative_scale_is_rejected() {
        let set = srgb_set(Some(-1.0));
        assert!(matches!(
            set.to_primaries(),
            Err(GamutError::MalformedDocument(_))
        ));
    }

    #[test]
    fn compensation_for_matching_panel_is_identity() {
        let mut doc = MeasurementDocument::default();
        doc.sets.insert("left".to_string(), srgb_set(None));
        let destination = GamutPrimaries::new_srgb();
        let matrices = doc.derive_compensations(&destination).unwrap();
        assert!(matrices["left"].test_equality(Matrix3d::IDENTITY, 1e-9));
    }

    #[test]
    fn compensation_scale_is_applied() {
        let mut doc = MeasurementDocument::default();
        doc.sets.insert("right".to_string(), srgb_set(Some(0.97961)));
        let destination = GamutPrimaries::new_dci_p3();
        let matrices = doc.derive_compensations(&destination).unwrap();

        let unscaled = destination
            .transform_matrix(&srgb_set(None).to_primaries().unwrap())
            .unwrap();
        assert!(matrices["right"].test_equality(unscaled * 0.97961, 1e-12));
    }

    #[test]
    fn document_json_shape() {
        let mut doc = MeasurementDocument {
            destination: Some("DCI-P3".to_string()),
            sets: BTreeMap::new(),
        };
        doc.sets.insert("left".to_string(), srgb_set(Some(0.88871)));
        let json = serde_json::to_string(&doc).unwrap();
        let parsed: MeasurementDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, parsed);
    }

    #[test]
    fn wrong_arity_fails_to_parse() {
        let json = r#"{"sets":{"left":{"red":[0.64],"green":[0.3,0.6],"blue":[0.15,0.06],"white":[0.3127,0.329]}}}"#;
        assert!(serde_json::from_str::<MeasurementDocument>(json).is_err());
    }
}
