//! The recursive-descent decoder and the document entry points.
//!
//! [`load`] is the usual way in: it takes the raw bytes of a file, handles
//! the optional gzip wrapping, and decodes everything in one pass. Use
//! [`from_bytes`] directly when the input is known to be uncompressed.

use std::io::Read;

use flate2::read::GzDecoder;
use log::debug;

use crate::error::{Error, Result};
use crate::{ByteCursor, Tag, Value};

/// How deeply Lists and Compounds may nest. This bounds stack usage when
/// decoding adversarial or corrupt input, since each nested container costs
/// one native stack frame.
pub(crate) const MAX_DEPTH: usize = 512;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decode a whole NBT document, decompressing it first if it carries the gzip
/// magic. Returns the root compound's name and the root itself.
///
/// NBT files in the wild come both gzipped and raw, so input without the
/// magic is decoded as-is. Input *with* the magic must decompress cleanly; a
/// broken stream behind a valid magic is [`Error::Decompression`], not a
/// fallback to raw.
pub fn load(input: &[u8]) -> Result<(String, Value)> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    if input.starts_with(&GZIP_MAGIC) {
        debug!("input has gzip magic, decompressing");
        let mut decoder = GzDecoder::new(input);
        let mut data = Vec::new();
        decoder
            .read_to_end(&mut data)
            .map_err(Error::Decompression)?;
        from_bytes(&data)
    } else {
        debug!("no gzip magic, decoding input as-is");
        from_bytes(input)
    }
}

/// Decode an uncompressed NBT document. The root must be a named Compound.
pub fn from_bytes(input: &[u8]) -> Result<(String, Value)> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut cursor = ByteCursor::new(input);

    let root = cursor.read_u8()?;
    if root != Tag::Compound as u8 {
        return Err(Error::InvalidRootTag(root));
    }

    let name = cursor.read_string()?;
    let value = read_payload(Tag::Compound, &mut cursor, 0)?;

    Ok((name, value))
}

fn read_tag(cursor: &mut ByteCursor) -> Result<Tag> {
    let b = cursor.read_u8()?;
    Tag::try_from(b).map_err(|_| Error::UnknownTag(b))
}

/// Lengths on the wire are signed 32-bit; negative is always a hard error,
/// never clamped.
fn read_len(cursor: &mut ByteCursor) -> Result<usize> {
    let len = cursor.read_i32()?;
    if len < 0 {
        return Err(Error::NegativeLength(len));
    }
    Ok(len as usize)
}

/// Decode the payload of a tag whose type byte (and name, if any) have
/// already been consumed. `depth` counts the containers entered so far.
fn read_payload(tag: Tag, cursor: &mut ByteCursor, depth: usize) -> Result<Value> {
    match tag {
        Tag::End => Ok(Value::End),
        Tag::Byte => Ok(Value::Byte(cursor.read_i8()?)),
        Tag::Short => Ok(Value::Short(cursor.read_i16()?)),
        Tag::Int => Ok(Value::Int(cursor.read_i32()?)),
        Tag::Long => Ok(Value::Long(cursor.read_i64()?)),
        Tag::Float => Ok(Value::Float(cursor.read_f32()?)),
        Tag::Double => Ok(Value::Double(cursor.read_f64()?)),
        Tag::String => Ok(Value::String(cursor.read_string()?)),
        Tag::ByteArray => {
            let len = read_len(cursor)?;
            let bs = cursor.read_n(len)?;
            Ok(Value::ByteArray(bs.iter().map(|b| *b as i8).collect()))
        }
        Tag::IntArray => {
            let len = read_len(cursor)?;
            // No preallocation from the declared length: a hostile length
            // must fail at the first missing byte, not allocate first.
            let mut values = Vec::new();
            for _ in 0..len {
                values.push(cursor.read_i32()?);
            }
            Ok(Value::IntArray(values))
        }
        Tag::List => {
            if depth >= MAX_DEPTH {
                return Err(Error::DepthLimitExceeded);
            }

            // An empty list still declares (and keeps) its element type.
            let element_tag = read_tag(cursor)?;
            let len = read_len(cursor)?;

            let mut elements = Vec::new();
            for _ in 0..len {
                elements.push(read_payload(element_tag, cursor, depth + 1)?);
            }

            Ok(Value::List {
                element_tag,
                elements,
            })
        }
        Tag::Compound => {
            if depth >= MAX_DEPTH {
                return Err(Error::DepthLimitExceeded);
            }

            let mut entries = Vec::new();
            loop {
                let tag = read_tag(cursor)?;
                if tag == Tag::End {
                    break;
                }

                let name = cursor.read_string()?;
                let value = read_payload(tag, cursor, depth + 1)?;

                // Duplicate names are kept verbatim, in the order read.
                entries.push((name, value));
            }

            Ok(Value::Compound(entries))
        }
    }
}
