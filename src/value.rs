use crate::Tag;

/// A complete NBT value. It owns its data, and a Compound or List owns its
/// children outright, so a decoded document is a plain tree with no sharing.
///
/// Compound entries keep the order they appeared on disk, and duplicate names
/// are preserved as read. Anything resolving duplicates (for Minecraft that
/// is last-wins) is a lookup concern, see [`Value::get`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Only appears as the declared element type of an empty List.
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    /// `element_tag` is kept even when `elements` is empty.
    List {
        element_tag: Tag,
        elements: Vec<Value>,
    },
    Compound(Vec<(String, Value)>),
    IntArray(Vec<i32>),
}

impl Value {
    /// The tag type code this value serializes under.
    pub fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List { .. } => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
        }
    }

    /// Look up a Compound entry by name. When the name occurs more than once
    /// the last occurrence wins, matching how the game reads duplicates. For
    /// anything other than a Compound this is `None`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Compound(entries) => entries
                .iter()
                .rev()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v),
            _ => None,
        }
    }
}
