use srec_wire::WireError;

/// Errors that can occur while splitting a record stream.
///
/// Every variant is fatal at the point of detection. The run aborts
/// rather than producing a partially garbled hex stream.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// A line- or record-level error from the wire layer.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A routed record's payload does not divide into 4-byte groups.
    ///
    /// Output lines are whole words, so an unaligned payload would
    /// either truncate bytes or read past the payload. Rejected instead.
    #[error("payload of record at {address:#06X} is {len} bytes, not a multiple of 4")]
    UnalignedPayload { address: u32, len: usize },

    /// A sink write failed. Not retried.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
