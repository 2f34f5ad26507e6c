use crate::error::WireError;

/// Width of the trailing checksum field, in bytes.
const CHECKSUM_BYTES: usize = 1;

/// The ten S-record kinds, keyed by the type digit after the `S` prefix.
///
/// ```text
/// ┌───────┬──────────┬───────────────┬──────────────────────────────┐
/// │ Digit │ Variant  │ Address width │ Handling                     │
/// ├───────┼──────────┼───────────────┼──────────────────────────────┤
/// │ 0     │ Header   │ 16 bits       │ decoded, never routed        │
/// │ 1     │ Data16   │ 16 bits       │ decoded and routed           │
/// │ 2     │ Data24   │ 24 bits       │ decoded, never routed        │
/// │ 3     │ Data32   │ 32 bits       │ decoded and routed           │
/// │ 4     │ Symbol   │ —             │ skipped (LSI extension)      │
/// │ 5     │ Count    │ —             │ skipped                      │
/// │ 6     │ Reserved │ —             │ skipped                      │
/// │ 7     │ EndS3    │ —             │ skipped (S3 end marker)      │
/// │ 8     │ EndS2    │ —             │ skipped (S2 end marker)      │
/// │ 9     │ EndS1    │ —             │ skipped (S1 end marker)      │
/// └───────┴──────────┴───────────────┴──────────────────────────────┘
/// ```
///
/// Any other digit is [`WireError::UnknownRecordType`], which aborts the
/// run. End markers are ordinary skips, not errors: input after them is
/// still processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Header,
    Data16,
    Data24,
    Data32,
    Symbol,
    Count,
    Reserved,
    EndS3,
    EndS2,
    EndS1,
}

impl RecordKind {
    /// Map a type digit to its kind. `None` for anything outside `0`–`9`.
    #[must_use]
    pub fn from_type_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Self::Header),
            '1' => Some(Self::Data16),
            '2' => Some(Self::Data24),
            '3' => Some(Self::Data32),
            '4' => Some(Self::Symbol),
            '5' => Some(Self::Count),
            '6' => Some(Self::Reserved),
            '7' => Some(Self::EndS3),
            '8' => Some(Self::EndS2),
            '9' => Some(Self::EndS1),
            _ => None,
        }
    }

    /// The type digit this kind appears as on the wire.
    #[must_use]
    pub fn type_digit(self) -> char {
        match self {
            Self::Header => '0',
            Self::Data16 => '1',
            Self::Data24 => '2',
            Self::Data32 => '3',
            Self::Symbol => '4',
            Self::Count => '5',
            Self::Reserved => '6',
            Self::EndS3 => '7',
            Self::EndS2 => '8',
            Self::EndS1 => '9',
        }
    }

    /// Address field width in bytes, or `None` for skip-only kinds.
    #[must_use]
    pub fn address_bytes(self) -> Option<usize> {
        match self {
            Self::Header | Self::Data16 => Some(2),
            Self::Data24 => Some(3),
            Self::Data32 => Some(4),
            _ => None,
        }
    }
}

/// One decoded S-record line.
///
/// Payload-bearing variants carry the load address at the kind's width
/// and the raw payload bytes (checksum byte already dropped). The
/// checksum is hex-decoded positionally along with the rest of the line
/// but is never verified. Skip-only kinds decode to unit variants
/// without their line content ever being validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    /// S0 header record. Payload is vendor text (module name etc.).
    Header { address: u16, data: Vec<u8> },
    /// S1 data record with a 16-bit load address.
    Data16 { address: u16, data: Vec<u8> },
    /// S2 data record with a 24-bit load address.
    Data24 { address: u32, data: Vec<u8> },
    /// S3 data record with a 32-bit load address.
    Data32 { address: u32, data: Vec<u8> },
    /// S4 symbol record (LSI extension).
    Symbol,
    /// S5 count of preceding data records.
    Count,
    /// S6 reserved type.
    Reserved,
    /// S7 end record for S3 streams.
    EndS3,
    /// S8 end record for S2 streams.
    EndS2,
    /// S9 end record for S1 streams.
    EndS1,
}

impl Record {
    /// Decode one line into a record.
    ///
    /// Skip-only kinds return immediately after the type digit, so their
    /// remainder can be arbitrary garbage, matching the lenient handling
    /// of toolchain extensions. Payload-bearing kinds hex-decode the
    /// whole remainder in one pass and validate the declared byte count
    /// against the line's actual length.
    ///
    /// # Errors
    ///
    /// - [`WireError::ShortRecord`] if the line cannot hold the prefix,
    ///   type digit, and the kind's minimum fields.
    /// - [`WireError::MissingPrefix`] if the line does not start with `S`.
    /// - [`WireError::UnknownRecordType`] for a type digit outside `0`–`9`.
    /// - [`WireError::BadHex`] for non-hex digits or an odd digit count.
    /// - [`WireError::TruncatedRecord`] if the declared byte count does
    ///   not match the decoded remainder.
    pub fn parse(line: &[u8]) -> Result<Self, WireError> {
        if line.len() < 2 {
            return Err(WireError::ShortRecord { len: line.len() });
        }
        if line[0] != b'S' {
            return Err(WireError::MissingPrefix {
                found: line[0] as char,
            });
        }

        let digit = line[1] as char;
        let kind = RecordKind::from_type_digit(digit)
            .ok_or(WireError::UnknownRecordType { digit })?;

        let Some(address_bytes) = kind.address_bytes() else {
            return Ok(match kind {
                RecordKind::Symbol => Self::Symbol,
                RecordKind::Count => Self::Count,
                RecordKind::Reserved => Self::Reserved,
                RecordKind::EndS3 => Self::EndS3,
                RecordKind::EndS2 => Self::EndS2,
                // address_bytes() is None for exactly these six kinds.
                _ => Self::EndS1,
            });
        };

        let (address, data) = decode_body(line, address_bytes)?;

        Ok(match kind {
            RecordKind::Header => Self::Header {
                address: address as u16,
                data,
            },
            RecordKind::Data16 => Self::Data16 {
                address: address as u16,
                data,
            },
            RecordKind::Data24 => Self::Data24 { address, data },
            _ => Self::Data32 { address, data },
        })
    }

    /// The kind this record decoded from.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Header { .. } => RecordKind::Header,
            Self::Data16 { .. } => RecordKind::Data16,
            Self::Data24 { .. } => RecordKind::Data24,
            Self::Data32 { .. } => RecordKind::Data32,
            Self::Symbol => RecordKind::Symbol,
            Self::Count => RecordKind::Count,
            Self::Reserved => RecordKind::Reserved,
            Self::EndS3 => RecordKind::EndS3,
            Self::EndS2 => RecordKind::EndS2,
            Self::EndS1 => RecordKind::EndS1,
        }
    }
}

/// Decode the count, address, payload, and checksum fields of a
/// payload-bearing record.
///
/// `line` is the whole record line; everything after the two-character
/// prefix is hex. Layout of the decoded bytes:
///
/// ```text
/// ┌───────────┬──────────────────────┬─────────────┬──────────┐
/// │ count (1) │ address (2, 3, or 4) │ payload (n) │ cksum (1)│
/// └───────────┴──────────────────────┴─────────────┴──────────┘
///               count covers address + payload + cksum
/// ```
///
/// Returns the address widened to `u32` and the payload bytes.
fn decode_body(line: &[u8], address_bytes: usize) -> Result<(u32, Vec<u8>), WireError> {
    let fields = &line[2..];
    let mut bytes = vec![0u8; fields.len() / 2];
    hex::decode_to_slice(fields, &mut bytes)?;

    if bytes.len() < 1 + address_bytes + CHECKSUM_BYTES {
        return Err(WireError::ShortRecord { len: line.len() });
    }

    let declared = bytes[0] as usize;
    let actual = bytes.len() - 1;
    if declared != actual {
        return Err(WireError::TruncatedRecord { declared, actual });
    }

    let address = bytes[1..=address_bytes]
        .iter()
        .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
    let data = bytes[1 + address_bytes..bytes.len() - CHECKSUM_BYTES].to_vec();

    Ok((address, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_type_digits_roundtrip() {
        let kinds = [
            (RecordKind::Header, '0'),
            (RecordKind::Data16, '1'),
            (RecordKind::Data24, '2'),
            (RecordKind::Data32, '3'),
            (RecordKind::Symbol, '4'),
            (RecordKind::Count, '5'),
            (RecordKind::Reserved, '6'),
            (RecordKind::EndS3, '7'),
            (RecordKind::EndS2, '8'),
            (RecordKind::EndS1, '9'),
        ];
        for (kind, digit) in kinds {
            assert_eq!(kind.type_digit(), digit, "type_digit mismatch for {kind:?}");
            assert_eq!(
                RecordKind::from_type_digit(digit),
                Some(kind),
                "from_type_digit mismatch for {digit:?}"
            );
        }
    }

    #[test]
    fn non_digit_is_unknown() {
        assert_eq!(RecordKind::from_type_digit('A'), None);
        assert_eq!(RecordKind::from_type_digit(':'), None);
    }

    #[test]
    fn parse_header() {
        // "HDR" as an S0 payload.
        let record = Record::parse(b"S00600004844521B").unwrap();
        assert_eq!(record, Record::Header {
            address: 0x0000,
            data: b"HDR".to_vec(),
        });
    }

    #[test]
    fn parse_data16() {
        let record = Record::parse(b"S1077AF00102030484").unwrap();
        assert_eq!(record, Record::Data16 {
            address: 0x7AF0,
            data: vec![0x01, 0x02, 0x03, 0x04],
        });
    }

    #[test]
    fn parse_data24() {
        let record = Record::parse(b"S2080123450102030484").unwrap();
        assert_eq!(record, Record::Data24 {
            address: 0x012345,
            data: vec![0x01, 0x02, 0x03, 0x04],
        });
    }

    #[test]
    fn parse_data32() {
        let record = Record::parse(b"S30901234567010203041C").unwrap();
        assert_eq!(record, Record::Data32 {
            address: 0x01234567,
            data: vec![0x01, 0x02, 0x03, 0x04],
        });
    }

    #[test]
    fn parse_end_records() {
        assert_eq!(Record::parse(b"S70500000000FA").unwrap(), Record::EndS3);
        assert_eq!(Record::parse(b"S804000000FB").unwrap(), Record::EndS2);
        assert_eq!(Record::parse(b"S9030000FC").unwrap(), Record::EndS1);
    }

    #[test]
    fn skip_kinds_ignore_their_content() {
        // Skip-only kinds never decode the remainder, so garbage is fine.
        assert_eq!(Record::parse(b"S4not-even-hex").unwrap(), Record::Symbol);
        assert_eq!(Record::parse(b"S5").unwrap(), Record::Count);
        assert_eq!(Record::parse(b"S6zz").unwrap(), Record::Reserved);
    }

    #[test]
    fn unknown_type_digit_rejected() {
        assert!(matches!(
            Record::parse(b"SA030000FC"),
            Err(WireError::UnknownRecordType { digit: 'A' })
        ));
    }

    #[test]
    fn missing_prefix_rejected() {
        assert!(matches!(
            Record::parse(b":1000000000"),
            Err(WireError::MissingPrefix { found: ':' })
        ));
    }

    #[test]
    fn short_line_rejected() {
        assert!(matches!(
            Record::parse(b"S"),
            Err(WireError::ShortRecord { len: 1 })
        ));
    }

    #[test]
    fn empty_body_rejected() {
        assert!(matches!(
            Record::parse(b"S1"),
            Err(WireError::ShortRecord { .. })
        ));
    }

    #[test]
    fn declared_count_must_match_line() {
        // Count claims 0x13 (19) bytes but the line carries 8.
        assert!(matches!(
            Record::parse(b"S1137AF00001020304050607E5"),
            Err(WireError::TruncatedRecord {
                declared: 0x13,
                actual: 11,
            })
        ));
    }

    #[test]
    fn non_hex_payload_rejected() {
        assert!(matches!(
            Record::parse(b"S107XXF00102030484"),
            Err(WireError::BadHex(_))
        ));
    }

    #[test]
    fn odd_digit_count_rejected() {
        assert!(matches!(
            Record::parse(b"S1077AF0010203048"),
            Err(WireError::BadHex(_))
        ));
    }

    #[test]
    fn checksum_is_not_verified() {
        // Same record as parse_data16 with a deliberately wrong checksum.
        let record = Record::parse(b"S1077AF00102030400").unwrap();
        assert_eq!(record.kind(), RecordKind::Data16);
    }

    #[test]
    fn empty_payload_is_valid() {
        let record = Record::parse(b"S1037AF0FF").unwrap();
        assert_eq!(record, Record::Data16 {
            address: 0x7AF0,
            data: vec![],
        });
    }
}
