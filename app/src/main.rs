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
use clap::Parser;
use gamutforge::{
    ConversionOptions, GamutPrimaries, Matrix3d, MeasurementDocument, PrimariesRegistry,
    create_conversion,
};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "gamut-matrix")]
#[command(about = "Derive 3x3 RGB gamut conversion matrices from chromaticity data", long_about = None)]
#[command(version)]
struct Cli {
    /// Source gamut name or abbreviation
    source: Option<String>,

    /// Destination gamut name or abbreviation
    destination: Option<String>,

    /// Load the primaries table from a flat CSV file instead of the built-in set
    #[arg(long)]
    db: Option<PathBuf>,

    /// Rescale the result so its largest row sums to 1
    #[arg(long)]
    row_sum_normalize: bool,

    /// External calibration multiplier applied to the final matrix
    #[arg(long)]
    scale: Option<f64>,

    /// Read labeled primaries and white points from a JSON measurement document
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the resulting compensation matrices to a JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Destination gamut for measurement mode, unless the document names one
    #[arg(long, default_value = "DCI-P3")]
    to: String,
}

fn print_matrix(matrix: Matrix3d) {
    for row in matrix.v.iter() {
        println!("[{:>10.6} {:>10.6} {:>10.6}]", row[0], row[1], row[2]);
    }
}

fn load_registry(cli: &Cli) -> Result<PrimariesRegistry, Box<dyn Error>> {
    match &cli.db {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(PrimariesRegistry::from_csv(&text)?)
        }
        None => Ok(PrimariesRegistry::built_in()),
    }
}

fn run_measurement_mode(
    cli: &Cli,
    path: &PathBuf,
    registry: &PrimariesRegistry,
) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let document: MeasurementDocument = serde_json::from_str(&text)?;
    document.validate()?;

    let destination_name = document.destination.as_deref().unwrap_or(&cli.to);
    let destination = registry.find(destination_name)?.primaries;
    let matrices = document.derive_compensations(&destination)?;

    for (label, matrix) in &matrices {
        println!("{label}");
        print_matrix(*matrix);
    }

    if let Some(out) = &cli.output {
        let plain: BTreeMap<&String, [[f64; 3]; 3]> =
            matrices.iter().map(|(k, m)| (k, m.v)).collect();
        fs::write(out, serde_json::to_string_pretty(&plain)?)?;
    }
    Ok(())
}

fn run_lookup_mode(cli: &Cli, registry: &PrimariesRegistry) -> Result<(), Box<dyn Error>> {
    let (Some(src_name), Some(dst_name)) = (&cli.source, &cli.destination) else {
        return Err("expected a source and a destination gamut name, or --input <json>".into());
    };
    let source: GamutPrimaries = registry.find(src_name)?.primaries;
    let destination = registry.find(dst_name)?.primaries;

    let options = ConversionOptions {
        row_sum_normalized: cli.row_sum_normalize,
        calibration_scale: cli.scale,
    };
    let matrix = create_conversion(&source, &destination, options)?;
    print_matrix(matrix);

    if let Some(out) = &cli.output {
        fs::write(out, serde_json::to_string_pretty(&matrix.v)?)?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let registry = load_registry(&cli)?;
    if let Some(input) = &cli.input {
        run_measurement_mode(&cli, input, &registry)
    } else {
        run_lookup_mode(&cli, &registry)
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
