//! nbtree decodes NBT data into an owned tree of [`Value`] nodes. NBT is the
//! binary format *Minecraft: Java Edition* uses to persist things like world
//! data and schematics.
//!
//! * For the tree type itself see [`Value`].
//! * For decoding see [`load`] and [`from_bytes`].
//! * For the errors a decode can produce see [`error`].
//!
//! # Quick example
//!
//! Decoding a document read from disk. NBT files are usually gzip compressed,
//! which [`load`] handles transparently.
//!
//! ```no_run
//! use nbtree::{load, Value};
//!
//! fn main() -> nbtree::error::Result<()> {
//!     let data = std::fs::read("level.dat").unwrap();
//!     let (name, root) = load(&data)?;
//!
//!     println!("root compound is named {name:?}");
//!     if let Value::Compound(entries) = &root {
//!         for (key, value) in entries {
//!             println!("{key}: {value:?}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The decoder consumes the whole input in one pass and returns an immutable
//! tree; it holds no state between calls, so decoding several documents on
//! separate threads needs no coordination.

use num_enum::TryFromPrimitive;

pub mod error;

mod de;
mod input;
mod value;

pub use de::{from_bytes, load};
pub use value::Value;

pub(crate) use input::ByteCursor;

#[cfg(test)]
mod test;

/// An NBT tag type. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy, TryFromPrimitive)]
#[repr(u8)]
pub enum Tag {
    /// Terminates a Compound, and names the element type of an empty List.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// An array of Byte (i8).
    ByteArray = 7,
    /// A length-prefixed UTF-8 string.
    String = 8,
    /// An ordered sequence of unnamed elements, all of one declared type.
    List = 9,
    /// An ordered sequence of named tags.
    Compound = 10,
    /// An array of Int (i32).
    IntArray = 11,
}
