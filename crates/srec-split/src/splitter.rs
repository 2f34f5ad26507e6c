use srec_wire::{Lines, Record};

use crate::diag::{Diagnostics, GroupClass};
use crate::emit::{self, WordGroup};
use crate::error::SplitError;
use crate::sink::SplitSinks;

/// Whether the one-time split announcement has been made.
///
/// The announcement fires on the first routed record of the run and is
/// suppressed afterwards so multi-record (and multi-file) runs do not
/// repeat it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Announce {
    NotAnnounced,
    Announced,
}

/// Splits an S-record stream into program and data hex output.
///
/// The pipeline runs strictly downstream, one line at a time:
///
/// ```text
///   lines → records → 4-byte groups → classify vs. split address
///                                        │
///                         group address < split → program sink
///                         group address ≥ split → data sink
///                                        │
///                              byte-swapped 8-hex-char line
/// ```
///
/// Only S1 and S3 records are routed. S0 and S2 are decoded but
/// produce no output; S4 through S9 are skipped outright. The split
/// address is fixed for the splitter's lifetime, and one splitter
/// processes all inputs of a run so output appends across files.
///
/// # Example
///
/// ```rust
/// use srec_split::{SilentDiagnostics, SplitSinks, Splitter};
///
/// let mut program = Vec::new();
/// let mut data = Vec::new();
/// let mut splitter = Splitter::new(0x8000);
/// splitter
///     .split(
///         b"S1077AF00102030484\n",
///         &mut SplitSinks::new(&mut program, &mut data),
///         &mut SilentDiagnostics,
///     )
///     .unwrap();
/// assert_eq!(program, b"04030201\n");
/// assert!(data.is_empty());
/// ```
pub struct Splitter {
    code_address: u64,
    announce: Announce,
}

impl Splitter {
    /// Create a splitter for the given split address. Groups whose
    /// address is `>= code_address` are data, everything below is
    /// program.
    #[must_use]
    pub fn new(code_address: u64) -> Self {
        Self {
            code_address,
            announce: Announce::NotAnnounced,
        }
    }

    /// The split address this splitter classifies against.
    #[must_use]
    pub fn code_address(&self) -> u64 {
        self.code_address
    }

    /// Split one input buffer into the sinks.
    ///
    /// Blank lines are skipped. Processing is single-pass and stops at
    /// the first error; output written before the error remains in the
    /// sinks, but no partial line is ever written for a failing record.
    ///
    /// # Errors
    ///
    /// - [`SplitError::Wire`] for any line or record decode failure.
    /// - [`SplitError::UnalignedPayload`] if a routed payload is not a
    ///   multiple of 4 bytes.
    /// - [`SplitError::Io`] if a sink write fails.
    pub fn split(
        &mut self,
        input: &[u8],
        sinks: &mut SplitSinks<'_>,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<(), SplitError> {
        for line in Lines::new(input) {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            match Record::parse(line)? {
                Record::Data16 { address, data } => {
                    self.route(u32::from(address), &data, sinks, diagnostics)?;
                }
                Record::Data32 { address, data } => {
                    self.route(address, &data, sinks, diagnostics)?;
                }
                // S0 and S2 are decoded but never routed; S4-S9 are
                // skipped. None of them produce output.
                _ => {}
            }
        }
        Ok(())
    }

    /// Route one record's payload, group by group.
    ///
    /// Group `g` of a record loaded at `address` lives at
    /// `address + 4*g`; the comparison against the split address is
    /// per group, so a single record can straddle the boundary and
    /// feed both sinks.
    fn route(
        &mut self,
        address: u32,
        data: &[u8],
        sinks: &mut SplitSinks<'_>,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<(), SplitError> {
        if self.announce == Announce::NotAnnounced {
            diagnostics.split_announced(address, self.code_address);
            self.announce = Announce::Announced;
        }

        if data.len() % 4 != 0 {
            return Err(SplitError::UnalignedPayload {
                address,
                len: data.len(),
            });
        }

        for (index, chunk) in data.chunks_exact(4).enumerate() {
            let group: WordGroup = [chunk[0], chunk[1], chunk[2], chunk[3]];
            let group_address = u64::from(address) + 4 * index as u64;

            let class = if group_address >= self.code_address {
                GroupClass::Data
            } else {
                GroupClass::Instruction
            };
            diagnostics.group_routed(class, group);

            let sink = match class {
                GroupClass::Instruction => &mut *sinks.program,
                GroupClass::Data => &mut *sinks.data,
            };
            emit::write_word(sink, group)?;
        }

        Ok(())
    }
}
