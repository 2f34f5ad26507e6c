/// srec2hex command-line tool — split an S-record image into program
/// and data hex streams around a split address.
///
/// ```text
/// srec2hex --base <ADDRESS> <FILE>...
///
/// Options:
///   -b, --base <ADDRESS>   Split address (decimal or 0x/0o/0b literal)
///   -h, --help             Print help
///   -V, --version          Print version
/// ```
///
/// Every 4-byte payload group of the inputs' S1/S3 records is written
/// as one byte-swapped 8-hex-character line to `program.hex` (group
/// address below the split) or `data.hex` (at or above the split) in
/// the working directory. Both files are truncated once at startup;
/// several input files append into the same pair, in argument order.
///
/// # Exit codes
///
/// | Code | Meaning                                            |
/// |------|----------------------------------------------------|
/// | 0    | Success                                            |
/// | 1    | Error (I/O failure, malformed record, short read)  |
/// | 2    | Argument error (bad address literal, no files)     |
///
/// Progress and classification chatter goes to stderr so the hex files
/// stay machine-readable.
use std::fs::{self, File};
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use srec_split::{Diagnostics, GroupClass, SplitSinks, Splitter, WordGroup, swap_word};

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Split an S-record image into `program.hex` and `data.hex`.
#[derive(Parser)]
#[command(name = "srec2hex", version, about = "Split an S-record image into program and data hex files")]
struct Cli {
    /// Split address: payload below it is program, at or above it is data.
    ///
    /// Accepts decimal or a `0x`/`0o`/`0b`-prefixed literal.
    #[arg(short, long, value_name = "ADDRESS", value_parser = parse_address)]
    base: u64,

    /// S-record files to split, processed in order into the same outputs.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

/// Parse an unsigned address literal with base autodetection.
fn parse_address(s: &str) -> Result<u64, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else if let Some(oct) = s.strip_prefix("0o").or_else(|| s.strip_prefix("0O")) {
        u64::from_str_radix(oct, 8)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        u64::from_str_radix(bin, 2)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid address {s:?}: {e}"))
}

// ── Diagnostics ───────────────────────────────────────────────────────────────

/// Stderr-backed diagnostics, one tagged line per routed group.
struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn split_announced(&mut self, record_address: u32, code_address: u64) {
        eprintln!(
            "Splitting S-record originally targeted at memory address {record_address:#X},\n\
             assuming code ends at {code_address:#010X} and data starts on a 32-byte (S-record line) boundary...\n\
             (generated .hex files have no explicit addresses in them)\n"
        );
    }

    fn group_routed(&mut self, class: GroupClass, group: WordGroup) {
        let tag = match class {
            GroupClass::Instruction => "instr",
            GroupClass::Data => "data",
        };
        // Bytes echoed in emission order, matching the output files.
        let s = swap_word(group);
        eprintln!("{tag}:\t{:02X} {:02X} {:02X} {:02X}", s[0], s[1], s[2], s[3]);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let program = File::create("program.hex").context("cannot create program.hex")?;
    let data = File::create("data.hex").context("cannot create data.hex")?;
    let mut program = BufWriter::new(program);
    let mut data = BufWriter::new(data);

    eprintln!(
        "srec2hex assumes the S-record input contains S1 or S3 records.\n\n\
         S1 is generated by objdump when the address range fits in 16 bits,\n\
         S3 when it only fits in 32 bits.\n"
    );

    let mut splitter = Splitter::new(cli.base);
    let mut diagnostics = StderrDiagnostics;

    for path in &cli.files {
        let input = read_input(path)?;
        splitter
            .split(
                &input,
                &mut SplitSinks::new(&mut program, &mut data),
                &mut diagnostics,
            )
            .with_context(|| format!("failed to split {}", path.display()))?;
    }

    program.flush().context("cannot write program.hex")?;
    data.flush().context("cannot write data.hex")?;

    Ok(())
}

/// Read an input file fully, checking the byte count read against the
/// file's reported size.
fn read_input(path: &Path) -> Result<Vec<u8>> {
    let expected = fs::metadata(path)
        .with_context(|| format!("cannot determine size of {}", path.display()))?
        .len();
    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    if bytes.len() as u64 != expected {
        bail!(
            "expected {expected} bytes in {}, read {}",
            path.display(),
            bytes.len()
        );
    }
    Ok(bytes)
}
