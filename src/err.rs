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
use std::error::Error;
use std::fmt::Display;

/// Identifies which matrix a singularity was detected in.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum MatrixOperand {
    Source,
    Destination,
    Primaries,
}

impl Display for MatrixOperand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixOperand::Source => f.write_str("source"),
            MatrixOperand::Destination => f.write_str("destination"),
            MatrixOperand::Primaries => f.write_str("primaries"),
        }
    }
}

/// Shows arity mismatching in a flat primaries record
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedArity {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GamutError {
    /// White point with y = 0 cannot be normalized to Y = 1.
    DivisionByZero,
    /// Primaries matrix determinant vanished, gamut is degenerate.
    SingularMatrix(MatrixOperand),
    /// Requested gamut name or abbreviation has no database record.
    GamutNotFound(String),
    /// A flat primaries record failed to parse.
    MalformedRecord {
        line: usize,
        arity: MismatchedArity,
    },
    /// A numeric field of a flat primaries record failed to parse.
    InvalidRecordNumber { line: usize, field: String },
    /// Measurement document is missing required fields or has wrong shape.
    MalformedDocument(String),
}

impl Display for GamutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamutError::DivisionByZero => f.write_str("Division by zero"),
            GamutError::SingularMatrix(operand) => f.write_fmt(format_args!(
                "Singular {operand} primaries matrix, chromaticities are collinear"
            )),
            GamutError::GamutNotFound(name) => {
                f.write_fmt(format_args!("No gamut named '{name}' in the database"))
            }
            GamutError::MalformedRecord { line, arity } => f.write_fmt(format_args!(
                "Malformed primaries record at line {}: expected {} fields, received {}",
                line, arity.expected, arity.received
            )),
            GamutError::InvalidRecordNumber { line, field } => f.write_fmt(format_args!(
                "Primaries record at line {line} holds non-numeric field '{field}'"
            )),
            GamutError::MalformedDocument(reason) => {
                f.write_fmt(format_args!("Malformed measurement document: {reason}"))
            }
        }
    }
}

impl Error for GamutError {}
