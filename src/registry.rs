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
use crate::err::{GamutError, MismatchedArity};
use crate::gamut::GamutPrimaries;
use crate::matrix::Chromaticity;
use std::fmt::Write;

/// One named entry of the primaries table.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimariesRecord {
    pub name: String,
    pub abbr: String,
    pub primaries: GamutPrimaries,
}

/// Lookup table of named gamut definitions.
///
/// Constructed explicitly from a flat table or from the built-in set and
/// handed to callers; there is no ambient process-wide database.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrimariesRegistry {
    records: Vec<PrimariesRecord>,
}

/// Column order of the flat record format.
pub const RECORD_FIELDS: [&str; 10] = [
    "name", "abbr", "redx", "redy", "greenx", "greeny", "bluex", "bluey", "whitex", "whitey",
];

impl PrimariesRegistry {
    /// Commonly used broadcast and cinema gamuts.
    pub fn built_in() -> Self {
        let records = vec![
            PrimariesRecord {
                name: "sRGB".to_string(),
                abbr: "SRGB".to_string(),
                primaries: GamutPrimaries::new_srgb(),
            },
            PrimariesRecord {
                name: "BT.709".to_string(),
                abbr: "709".to_string(),
                primaries: GamutPrimaries::new_srgb(),
            },
            PrimariesRecord {
                name: "Display P3".to_string(),
                abbr: "DP3".to_string(),
                primaries: GamutPrimaries::new_display_p3(),
            },
            PrimariesRecord {
                name: "DCI-P3".to_string(),
                abbr: "P3".to_string(),
                primaries: GamutPrimaries::new_dci_p3(),
            },
            PrimariesRecord {
                name: "BT.2020".to_string(),
                abbr: "2020".to_string(),
                primaries: GamutPrimaries::new_bt2020(),
            },
            PrimariesRecord {
                name: "ACES AP0".to_string(),
                abbr: "AP0".to_string(),
                primaries: GamutPrimaries::new_aces_ap0(),
            },
            PrimariesRecord {
                name: "ACES AP1".to_string(),
                abbr: "AP1".to_string(),
                primaries: GamutPrimaries::new_aces_ap1(),
            },
            PrimariesRecord {
                name: "ALEXA Wide Gamut".to_string(),
                abbr: "AWG".to_string(),
                primaries: GamutPrimaries::new_alexa_wide_gamut(),
            },
            PrimariesRecord {
                name: "Adobe RGB".to_string(),
                abbr: "ARGB".to_string(),
                primaries: GamutPrimaries::new(
                    Chromaticity::new(0.640, 0.330),
                    Chromaticity::new(0.210, 0.710),
                    Chromaticity::new(0.150, 0.060),
                    Chromaticity::D65,
                ),
            },
        ];
        Self { records }
    }

    /// Parses the flat delimited table.
    ///
    /// The first line is a header and is not interpreted. Each following
    /// non-empty line must hold exactly the [`RECORD_FIELDS`] columns.
    pub fn from_csv(text: &str) -> Result<Self, GamutError> {
        let mut records = Vec::new();
        for (idx, line) in text.lines().enumerate().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();
            if fields.len() != RECORD_FIELDS.len() {
                return Err(GamutError::MalformedRecord {
                    line: idx + 1,
                    arity: MismatchedArity {
                        expected: RECORD_FIELDS.len(),
                        received: fields.len(),
                    },
                });
            }
            let mut numbers = [0f64; 8];
            for (slot, field) in numbers.iter_mut().zip(&fields[2..]) {
                *slot = field
                    .parse::<f64>()
                    .map_err(|_| GamutError::InvalidRecordNumber {
                        line: idx + 1,
                        field: (*field).to_string(),
                    })?;
            }
            records.push(PrimariesRecord {
                name: fields[0].to_string(),
                abbr: fields[1].to_string(),
                primaries: GamutPrimaries::new(
                    Chromaticity::new(numbers[0], numbers[1]),
                    Chromaticity::new(numbers[2], numbers[3]),
                    Chromaticity::new(numbers[4], numbers[5]),
                    Chromaticity::new(numbers[6], numbers[7]),
                ),
            });
        }
        Ok(Self { records })
    }

    /// Renders the table back to the flat format, header line first.
    pub fn to_csv(&self) -> String {
        let mut out = RECORD_FIELDS.join(",");
        out.push('\n');
        for record in &self.records {
            let p = &record.primaries;
            let _ = writeln!(
                out,
                "{},{},{},{},{},{},{},{},{},{}",
                record.name,
                record.abbr,
                p.red.x,
                p.red.y,
                p.green.x,
                p.green.y,
                p.blue.x,
                p.blue.y,
                p.white_point.x,
                p.white_point.y
            );
        }
        out
    }

    pub fn push(&mut self, record: PrimariesRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[PrimariesRecord] {
        &self.records
    }

    /// Exact match on either full name or abbreviation.
    pub fn find(&self, name_or_abbr: &str) -> Result<&PrimariesRecord, GamutError> {
        self.records
            .iter()
            .find(|record| record.name == name_or_abbr || record.abbr == name_or_abbr)
            .ok_or_else(|| GamutError::GamutNotFound(name_or_abbr.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_name_and_abbr() {
        let registry = PrimariesRegistry::built_in();
        let by_name = registry.find("ALEXA Wide Gamut").unwrap();
        let by_abbr = registry.find("AWG").unwrap();
        assert_eq!(by_name, by_abbr);
    }

    #[test]
    fn missing_gamut_is_explicit() {
        let registry = PrimariesRegistry::built_in();
        assert_eq!(
            registry.find("NTSC 1953"),
            Err(GamutError::GamutNotFound("NTSC 1953".to_string()))
        );
    }

    #[test]
    fn parse_flat_table() {
        let text = "name,abbr,redx,redy,greenx,greeny,bluex,bluey,whitex,whitey\n\
                    sRGB,SRGB,0.64,0.33,0.30,0.60,0.15,0.06,0.3127,0.3290\n";
        let registry = PrimariesRegistry::from_csv(text).unwrap();
        let record = registry.find("SRGB").unwrap();
        assert_eq!(record.primaries, GamutPrimaries::new_srgb());
    }

    #[test]
    fn csv_round_trip() {
        let registry = PrimariesRegistry::built_in();
        let rendered = registry.to_csv();
        let reparsed = PrimariesRegistry::from_csv(&rendered).unwrap();
        assert_eq!(registry, reparsed);
    }

    #[test]
    fn wrong_arity_reports_line() {
        let text = "name,abbr,redx,redy,greenx,greeny,bluex,bluey,whitex,whitey\n\
                    sRGB,SRGB,0.64,0.33\n";
        assert_eq!(
            PrimariesRegistry::from_csv(text),
            Err(GamutError::MalformedRecord {
                line: 2,
                arity: MismatchedArity {
                    expected: 10,
                    received: 4
                }
            })
        );
    }

    #[test]
    fn bad_number_reports_field() {
        let text = "name,abbr,redx,redy,greenx,greeny,bluex,bluey,whitex,whitey\n\
                    sRGB,SRGB,zero,0.33,0.30,0.60,0.15,0.06,0.3127,0.3290\n";
        assert_eq!(
            PrimariesRegistry::from_csv(text),
            Err(GamutError::InvalidRecordNumber {
                line: 2,
                field: "zero".to_string()
            })
        );
    }

    #[test]
    fn pushed_record_is_findable() {
        let mut registry = PrimariesRegistry::default();
        registry.push(PrimariesRecord {
            name: "Test Wide".to_string(),
            abbr: "TW".to_string(),
            primaries: GamutPrimaries::new_bt2020(),
        });
        assert!(registry.find("TW").is_ok());
    }
}
