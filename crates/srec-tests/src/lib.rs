//! Fixture builders for the integration tests and benches.
//!
//! Records built here carry correct checksums so the fixtures look like
//! real objdump output, even though the decoder never verifies them.

/// Build a well-formed S1 record for `data` loaded at `address`.
#[must_use]
pub fn s1(address: u16, data: &[u8]) -> String {
    record('1', &address.to_be_bytes(), data)
}

/// Build a well-formed S3 record for `data` loaded at `address`.
#[must_use]
pub fn s3(address: u32, data: &[u8]) -> String {
    record('3', &address.to_be_bytes(), data)
}

/// Build a well-formed S0 header record carrying `text`.
#[must_use]
pub fn s0(text: &[u8]) -> String {
    record('0', &[0, 0], text)
}

/// The S9 end record for a 16-bit stream.
#[must_use]
pub fn s9() -> String {
    record('9', &[0, 0], &[])
}

fn record(type_digit: char, address: &[u8], data: &[u8]) -> String {
    let count = address.len() + data.len() + 1;
    let mut line = format!("S{type_digit}{count:02X}");
    let mut sum = count as u8;
    for &b in address.iter().chain(data) {
        line.push_str(&format!("{b:02X}"));
        sum = sum.wrapping_add(b);
    }
    line.push_str(&format!("{:02X}", !sum));
    line
}
