use clap::Parser;
use fptab::{ConvertOptions, Converter, FloatFormat, RoundingModeSet, render_error};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::io::Write;
use std::path::{Path, PathBuf};

/// fptab - Convert libc-test math test cases into Zig test tables
#[derive(Parser, Debug)]
#[command(name = "fptab")]
#[command(about = "Convert a libc-test math test file into a Zig test table", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Keep test cases for every rounding mode, not only RN
    #[arg(short, long)]
    all: bool,

    /// Float type of the file (f16, f32, f64, f128, c_longdouble); inferred when omitted
    #[arg(short, long, value_name = "TYPE")]
    float_type: Option<FloatFormat>,

    /// Test file to convert
    #[arg(value_name = "PATH")]
    file: PathBuf,
}

/// Name this program was invoked as, quoted in the generated header.
fn generator_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "fptab".to_string())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // FPTAB_LOG takes precedence over RUST_LOG; default to WARN, or DEBUG
    // with --verbose.
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("FPTAB_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = std::fs::read_to_string(&args.file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", args.file.display()))?;

    let options = ConvertOptions {
        float_format: args.float_type,
        rounding_modes: if args.all {
            RoundingModeSet::ALL
        } else {
            RoundingModeSet::default()
        },
        generator: generator_name(),
    };

    let conversion = match Converter::new(options).convert(&source) {
        Ok(conversion) => conversion,
        Err(e) => {
            render_error(&e, &args.file.display().to_string());
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Converted {} test cases as {}",
        conversion.testcases.len(),
        conversion.format
    );

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(conversion.output.as_bytes())
        .and_then(|()| stdout.flush())
        .into_diagnostic()
        .wrap_err("Failed to write output")?;

    Ok(())
}
