//! csv2envi: convert a column of numeric text into an ENVI raw raster.
//!
//! ```text
//! csv2envi <input> <output> <lines> <samples> <bands> <precision> <interleave> <byteOrder>
//! ```

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zenenvi::{
    ByteOrder, Conversion, DataType, Dimensions, EncodeRequest, EnviError, Interleave, Unstoppable,
};

const USAGE: &str = "\
Error: improper program arguments.

arguments
---------
inputFilePath     full path to input file
outputFilePath    full path to output file
lines             number of lines, int > 0
samples           number of samples, int > 0
bands             number of bands, int > 0
precision         1 (1-byte unsigned integer)
                  2 (2-byte signed integer)
                  3 (4-byte signed integer)
                  4 (4-byte float)
                  5 (8-byte double)
                  12 (2-byte unsigned integer)
interleave        bsq (band sequential)
                  bil (band interleave by line)
                  bip (band interleave by pixel)
byteOrder         0 (little-endian)
                  1 (big-endian)

";

#[derive(Debug, Parser)]
#[command(
    name = "csv2envi",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Text file: a label line, then one value per line
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
    /// Output base path; its extension is replaced by the interleave and `hdr`
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    lines: u32,
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    samples: u32,
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    bands: u32,
    /// ENVI data type code: 1, 2, 3, 4, 5 or 12
    #[arg(value_parser = parse_data_type)]
    precision: DataType,
    /// bsq, bil or bip
    #[arg(value_parser = parse_interleave)]
    interleave: Interleave,
    /// 0 (little-endian) or 1 (big-endian)
    #[arg(value_parser = parse_byte_order)]
    byte_order: ByteOrder,
}

fn parse_data_type(s: &str) -> Result<DataType, String> {
    let code: u8 = s.parse().map_err(|_| format!("not a data type code: {s:?}"))?;
    DataType::from_code(code).map_err(|e| e.to_string())
}

fn parse_interleave(s: &str) -> Result<Interleave, String> {
    s.parse().map_err(|e: EnviError| e.to_string())
}

fn parse_byte_order(s: &str) -> Result<ByteOrder, String> {
    let code: u8 = s.parse().map_err(|_| format!("not a byte order code: {s:?}"))?;
    ByteOrder::from_code(code).map_err(|e| e.to_string())
}

/// Positional arguments after the program name.
const ARG_COUNT: usize = 8;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("expected {ARG_COUNT} arguments, got {0}")]
    ArgumentCount(usize),

    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error(transparent)]
    Convert(#[from] EnviError),
}

fn run(argv: impl IntoIterator<Item = OsString>) -> Result<(), CliError> {
    let argv: Vec<OsString> = argv.into_iter().collect();
    let given = argv.len().saturating_sub(1);
    if given != ARG_COUNT {
        return Err(CliError::ArgumentCount(given));
    }
    let args = Args::try_parse_from(argv)?;
    let dims = Dimensions::new(
        args.lines as usize,
        args.samples as usize,
        args.bands as usize,
    )?;
    let request = EncodeRequest::new(dims, args.precision, args.interleave)
        .with_byte_order(args.byte_order);

    let report = Conversion::new(args.input, args.output, request).run(Unstoppable)?;
    debug!(
        binary = %report.paths.binary.display(),
        header = %report.paths.header.display(),
        records = report.records.consumed,
        "conversion complete"
    );
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    match run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ (CliError::ArgumentCount(_) | CliError::Usage(_))) => {
            debug!(error = %e, "rejected arguments");
            print!("{USAGE}");
            ExitCode::from(1)
        }
        Err(CliError::Convert(e)) => {
            eprintln!("csv2envi: {e}");
            ExitCode::from(1)
        }
    }
}
