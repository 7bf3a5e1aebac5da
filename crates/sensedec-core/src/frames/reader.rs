use super::error::DecodeError;

pub struct FrameReader<'a> {
    payload: &'a [u8],
}

impl<'a> FrameReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.payload.len() < needed {
            return Err(DecodeError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(DecodeError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_i8(&self, offset: usize) -> Result<i8, DecodeError> {
        Ok(self.read_u8(offset)? as i8)
    }

    pub fn read_i32_be(&self, range: std::ops::Range<usize>) -> Result<i32, DecodeError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 4 {
            return Err(DecodeError::TooShort {
                needed: 4,
                actual: bytes.len(),
            });
        }
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.payload
            .get(range.clone())
            .ok_or(DecodeError::TooShort {
                needed: range.end,
                actual: self.payload.len(),
            })
    }

    pub fn read_hex(&self, range: std::ops::Range<usize>) -> Result<String, DecodeError> {
        let bytes = self.read_slice(range)?;
        Ok(hex_string(bytes))
    }
}

pub fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
