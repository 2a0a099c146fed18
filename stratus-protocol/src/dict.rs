//! Tuple dictionaries
//!
//! Push and status payloads carry a small dictionary of typed tuples:
//!
//! ```text
//! COUNT(1B) { KEY(u32 LE) TYPE(1B) LEN(u16 LE) DATA(LEN) } * COUNT
//! ```
//!
//! Reading is zero-copy: [`DictReader`] walks a borrowed payload and yields
//! [`Tuple`]s that point into it. [`DictWriter`] builds a payload in place.

/// Upper bound on tuples in one dictionary
pub const MAX_TUPLES: u8 = 32;

/// Size of a tuple header (KEY + TYPE + LEN)
pub const TUPLE_HEADER_SIZE: usize = 7;

// Wire type tags
const TYPE_BYTES: u8 = 0;
const TYPE_CSTRING: u8 = 1;
const TYPE_UINT: u8 = 2;
const TYPE_INT: u8 = 3;

/// Dictionary decoding/encoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// Payload ended inside a tuple
    Truncated,
    /// Unknown tuple type tag
    InvalidType(u8),
    /// Integer tuple with a width other than 1, 2 or 4 bytes
    InvalidIntWidth(u16),
    /// C string tuple that is not valid UTF-8
    InvalidUtf8,
    /// Declared tuple count above [`MAX_TUPLES`]
    TooManyTuples,
    /// Bytes left over after the declared tuples
    TrailingBytes,
    /// Output buffer cannot hold the tuple
    BufferFull,
}

impl DictError {
    /// Opaque code handed to the transport-failure path
    pub fn code(self) -> u32 {
        match self {
            DictError::Truncated => 0x21,
            DictError::InvalidType(_) => 0x22,
            DictError::InvalidIntWidth(_) => 0x23,
            DictError::InvalidUtf8 => 0x24,
            DictError::TooManyTuples => 0x25,
            DictError::TrailingBytes => 0x26,
            DictError::BufferFull => 0x27,
        }
    }
}

/// Typed tuple value borrowed from a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleValue<'a> {
    /// Raw byte array
    Bytes(&'a [u8]),
    /// Text, without its NUL terminator
    CString(&'a str),
    /// Unsigned integer
    Uint(u32),
    /// Signed integer
    Int(i32),
}

impl TupleValue<'_> {
    /// Integer view of the value, if it is one
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            TupleValue::Uint(v) => Some(v as i64),
            TupleValue::Int(v) => Some(v as i64),
            _ => None,
        }
    }
}

/// One key/value pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple<'a> {
    pub key: u32,
    pub value: TupleValue<'a>,
}

/// Zero-copy iterator over the tuples of a dictionary payload
///
/// Yields `Err` at most once; the iterator is exhausted afterwards.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DictReader<'a> {
    data: &'a [u8],
    offset: usize,
    remaining: u8,
    done: bool,
}

impl<'a> DictReader<'a> {
    /// Start reading a payload
    ///
    /// An empty payload is an empty dictionary.
    pub fn new(payload: &'a [u8]) -> Result<Self, DictError> {
        let count = payload.first().copied().unwrap_or(0);
        if count > MAX_TUPLES {
            return Err(DictError::TooManyTuples);
        }
        Ok(Self {
            data: payload,
            offset: payload.len().min(1),
            remaining: count,
            done: false,
        })
    }

    /// Number of tuples the payload declares
    pub fn declared_len(&self) -> usize {
        self.data.first().copied().unwrap_or(0) as usize
    }

    /// Look up a key, validating every tuple on the way
    pub fn find(&self, key: u32) -> Result<Option<Tuple<'a>>, DictError> {
        for tuple in self.clone() {
            let tuple = tuple?;
            if tuple.key == key {
                return Ok(Some(tuple));
            }
        }
        Ok(None)
    }

    fn read_tuple(&mut self) -> Result<Tuple<'a>, DictError> {
        let header = self
            .data
            .get(self.offset..self.offset + TUPLE_HEADER_SIZE)
            .ok_or(DictError::Truncated)?;

        let key = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
        let type_tag = header[4];
        let len = u16::from_le_bytes([header[5], header[6]]);

        let start = self.offset + TUPLE_HEADER_SIZE;
        let data = self
            .data
            .get(start..start + len as usize)
            .ok_or(DictError::Truncated)?;

        let value = match type_tag {
            TYPE_BYTES => TupleValue::Bytes(data),
            TYPE_CSTRING => {
                let text = match data.iter().position(|&b| b == 0) {
                    Some(nul) => &data[..nul],
                    None => data,
                };
                let text = core::str::from_utf8(text).map_err(|_| DictError::InvalidUtf8)?;
                TupleValue::CString(text)
            }
            TYPE_UINT => TupleValue::Uint(read_uint(data, len)?),
            TYPE_INT => TupleValue::Int(read_int(data, len)?),
            other => return Err(DictError::InvalidType(other)),
        };

        self.offset = start + len as usize;
        Ok(Tuple { key, value })
    }
}

impl<'a> Iterator for DictReader<'a> {
    type Item = Result<Tuple<'a>, DictError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.remaining == 0 {
            self.done = true;
            if self.offset < self.data.len() {
                return Some(Err(DictError::TrailingBytes));
            }
            return None;
        }

        match self.read_tuple() {
            Ok(tuple) => {
                self.remaining -= 1;
                Some(Ok(tuple))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

fn read_uint(data: &[u8], len: u16) -> Result<u32, DictError> {
    match data {
        [a] => Ok(*a as u32),
        [a, b] => Ok(u16::from_le_bytes([*a, *b]) as u32),
        [a, b, c, d] => Ok(u32::from_le_bytes([*a, *b, *c, *d])),
        _ => Err(DictError::InvalidIntWidth(len)),
    }
}

fn read_int(data: &[u8], len: u16) -> Result<i32, DictError> {
    match data {
        [a] => Ok(*a as i8 as i32),
        [a, b] => Ok(i16::from_le_bytes([*a, *b]) as i32),
        [a, b, c, d] => Ok(i32::from_le_bytes([*a, *b, *c, *d])),
        _ => Err(DictError::InvalidIntWidth(len)),
    }
}

/// Builds a dictionary payload into a caller-provided buffer
pub struct DictWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    count: u8,
}

impl<'a> DictWriter<'a> {
    /// Start a dictionary in `buf`
    pub fn new(buf: &'a mut [u8]) -> Result<Self, DictError> {
        let first = buf.first_mut().ok_or(DictError::BufferFull)?;
        *first = 0;
        Ok(Self { buf, len: 1, count: 0 })
    }

    fn push(&mut self, key: u32, type_tag: u8, data: &[u8], nul: bool) -> Result<(), DictError> {
        if self.count >= MAX_TUPLES {
            return Err(DictError::TooManyTuples);
        }

        let data_len = data.len() + nul as usize;
        let wire_len = u16::try_from(data_len).map_err(|_| DictError::BufferFull)?;
        let end = self.len + TUPLE_HEADER_SIZE + data_len;
        if end > self.buf.len() {
            return Err(DictError::BufferFull);
        }

        let header = &mut self.buf[self.len..self.len + TUPLE_HEADER_SIZE];
        header[..4].copy_from_slice(&key.to_le_bytes());
        header[4] = type_tag;
        header[5..].copy_from_slice(&wire_len.to_le_bytes());

        let start = self.len + TUPLE_HEADER_SIZE;
        self.buf[start..start + data.len()].copy_from_slice(data);
        if nul {
            self.buf[end - 1] = 0;
        }

        self.len = end;
        self.count += 1;
        self.buf[0] = self.count;
        Ok(())
    }

    /// Append a byte array tuple
    pub fn write_bytes(&mut self, key: u32, data: &[u8]) -> Result<(), DictError> {
        self.push(key, TYPE_BYTES, data, false)
    }

    /// Append a NUL-terminated string tuple
    pub fn write_cstring(&mut self, key: u32, text: &str) -> Result<(), DictError> {
        self.push(key, TYPE_CSTRING, text.as_bytes(), true)
    }

    /// Append an unsigned integer using the narrowest width that fits
    pub fn write_uint(&mut self, key: u32, value: u32) -> Result<(), DictError> {
        let bytes = value.to_le_bytes();
        let width = if value <= u8::MAX as u32 {
            1
        } else if value <= u16::MAX as u32 {
            2
        } else {
            4
        };
        self.push(key, TYPE_UINT, &bytes[..width], false)
    }

    /// Append a 32-bit signed integer
    pub fn write_int(&mut self, key: u32, value: i32) -> Result<(), DictError> {
        self.push(key, TYPE_INT, &value.to_le_bytes(), false)
    }

    /// Append any tuple value
    pub fn write(&mut self, tuple: &Tuple<'_>) -> Result<(), DictError> {
        match tuple.value {
            TupleValue::Bytes(data) => self.write_bytes(tuple.key, data),
            TupleValue::CString(text) => self.write_cstring(tuple.key, text),
            TupleValue::Uint(v) => self.write_uint(tuple.key, v),
            TupleValue::Int(v) => self.write_int(tuple.key, v),
        }
    }

    /// Number of tuples written so far
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Finish the dictionary and return the payload length
    pub fn finish(self) -> usize {
        self.len
    }
}
