use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use lz4lite::{decompress, CompressStats, Compressor, Result};

#[derive(Parser, Debug)]
#[command(name = "lz4lite")]
#[command(about = "Compress or decompress a file with the lz4lite block codec")]
#[command(version)]
struct Args {
    /// Operation to perform
    #[arg(value_enum)]
    mode: Mode,

    /// Input file
    input: PathBuf,

    /// Output file
    output: PathBuf,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,

    /// After compressing, decompress in memory and compare checksums
    #[arg(long)]
    verify: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Compress,
    Decompress,
}

impl Mode {
    fn noun(self) -> &'static str {
        match self {
            Mode::Compress => "compression",
            Mode::Decompress => "decompression",
        }
    }
}

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { EXIT_FAILURE } else { EXIT_SUCCESS });
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: &Args) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let input = read_file(&args.input)?;

    let (output, stats) = match args.mode {
        Mode::Compress => {
            let mut compressor = Compressor::new();
            let mut output = Vec::with_capacity(input.len() / 2 + 16);
            let stats = compressor.compress_into(&input, &mut output);

            if args.verify {
                let restored = decompress(&output)?;
                if restored.len() != input.len()
                    || crc32fast::hash(&restored) != crc32fast::hash(&input)
                {
                    return Err("verification failed: decompressed data differs from input".into());
                }
                if args.verbose {
                    eprintln!("Verified round trip ({} bytes)", restored.len());
                }
            }

            (output, Some(stats))
        }
        Mode::Decompress => (decompress(&input)?, None),
    };

    write_file(&args.output, &output)?;

    let elapsed = start.elapsed();
    println!("{} completed in {} ms", args.mode.noun(), elapsed.as_millis());

    if args.verbose {
        let uncompressed = if args.mode == Mode::Compress { &input } else { &output };
        eprintln!("{} complete:", capitalize(args.mode.noun()));
        eprintln!("  Input bytes:      {}", input.len());
        eprintln!("  Output bytes:     {}", output.len());
        if let Some(stats) = stats {
            print_compress_stats(&stats);
        }
        eprintln!("  CRC32:            {:08x}", crc32fast::hash(uncompressed));
        eprintln!("  Time:             {:.2?}", elapsed);
        eprintln!(
            "  Throughput:       {:.1} MB/s",
            uncompressed.len() as f64 / elapsed.as_secs_f64().max(1e-9) / 1_000_000.0
        );
    }

    Ok(())
}

fn print_compress_stats(stats: &CompressStats) {
    eprintln!("  Ratio:            {:.3}", stats.ratio());
    eprintln!("  Tokens:           {}", stats.tokens);
    eprintln!("  Matches:          {}", stats.matches);
    eprintln!("  Literal bytes:    {}", stats.literal_bytes);
    eprintln!("  Matched bytes:    {}", stats.matched_bytes);
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data)?;
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
