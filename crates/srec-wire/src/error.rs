/// Errors that can occur while reading and decoding S-record lines.
///
/// The wire layer validates at two levels: line framing (length limit)
/// and record structure (prefix, type digit, hex fields, declared byte
/// count). Each variant captures enough context for a useful diagnostic,
/// since a failing record aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A line reached the maximum length without a terminator.
    ///
    /// S-record lines are short (a full S1 record with a 32-byte payload
    /// is 74 characters), so a line this long means the input is not an
    /// S-record file or has lost its newlines.
    #[error("record line exceeds the {limit}-character limit")]
    LineTooLong { limit: usize },

    /// The line does not begin with the `S` record prefix.
    #[error("record does not start with 'S' (found {found:?})")]
    MissingPrefix { found: char },

    /// The line is too short to carry the fields its kind requires.
    #[error("record line too short ({len} characters)")]
    ShortRecord { len: usize },

    /// The record type character is not a digit in `0`–`9`.
    ///
    /// The type digit selects the address width, so an unknown type
    /// makes the rest of the line undecodable. Fatal for the run.
    #[error("unknown S-record type {digit:?}")]
    UnknownRecordType { digit: char },

    /// The declared byte count disagrees with the line's actual length.
    ///
    /// `declared` is the count field's value; `actual` is the number of
    /// bytes the line carries after the count field.
    #[error("record truncated: declared {declared} bytes, line carries {actual}")]
    TruncatedRecord { declared: usize, actual: usize },

    /// A field contained a non-hex digit or an odd number of digits.
    #[error("invalid hex in record: {0}")]
    BadHex(#[from] hex::FromHexError),
}
