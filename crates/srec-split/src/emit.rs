use std::io::{self, Write};

/// A 4-byte payload group, the smallest unit classified and emitted.
pub type WordGroup = [u8; 4];

/// Reverse the byte positions of a 4-byte group.
///
/// The group is emitted in little-endian word order while each byte
/// keeps its own two-digit hex representation, matching the word layout
/// the consuming toolchain expects. Applying the swap twice returns the
/// original group.
#[must_use]
pub fn swap_word(group: WordGroup) -> WordGroup {
    let [a, b, c, d] = group;
    [d, c, b, a]
}

/// Write one group to a sink as eight uppercase hex characters and a
/// single newline, byte-swapped, with no internal separators.
///
/// # Errors
///
/// Any write failure from the sink, which aborts the run.
pub fn write_word(w: &mut dyn Write, group: WordGroup) -> io::Result<()> {
    let swapped = swap_word(group);
    writeln!(
        w,
        "{:02X}{:02X}{:02X}{:02X}",
        swapped[0], swapped[1], swapped[2], swapped[3]
    )
}
