use crate::error::WireError;

/// Longest accepted record line in bytes, terminator excluded.
///
/// A line whose content reaches this length before a `\n` is found is
/// rejected rather than split or truncated.
pub const MAX_LINE_LENGTH: usize = 1024;

/// Iterator over the newline-delimited lines of an in-memory buffer.
///
/// Yields each line as a byte slice with the `\n` terminator excluded
/// and a trailing `\r` stripped, so CRLF input decodes the same as LF
/// input. The final line may be unterminated. Restarting from the top
/// of the buffer is just constructing a new `Lines` over it.
///
/// A line longer than [`MAX_LINE_LENGTH`] yields
/// [`WireError::LineTooLong`] and ends the iteration; the limit applies
/// to the line's content, so a 1024-character line is rejected even
/// when a terminator follows.
pub struct Lines<'a> {
    buf: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Lines<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            failed: false,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Result<&'a [u8], WireError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.buf.len() {
            return None;
        }

        let rest = &self.buf[self.pos..];
        let window = &rest[..rest.len().min(MAX_LINE_LENGTH)];

        let mut line = match window.iter().position(|&b| b == b'\n') {
            Some(end) => {
                self.pos += end + 1;
                &rest[..end]
            }
            None if rest.len() >= MAX_LINE_LENGTH => {
                self.failed = true;
                return Some(Err(WireError::LineTooLong {
                    limit: MAX_LINE_LENGTH,
                }));
            }
            None => {
                self.pos = self.buf.len();
                rest
            }
        };

        if let Some((&b'\r', head)) = line.split_last() {
            line = head;
        }

        Some(Ok(line))
    }
}

impl core::iter::FusedIterator for Lines<'_> {}
