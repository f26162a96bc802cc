use serde::{Deserialize, Serialize};

/// The unit a host text widget indexes its buffer by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// UTF-8 bytes (Rust strings, most terminal and web-assembly hosts).
    Utf8,
    /// Unicode scalar values.
    #[default]
    Char,
    /// UTF-16 code units (Apple text system, Java/Kotlin, JavaScript).
    Utf16,
}

impl OffsetUnit {
    fn width(self, c: char) -> usize {
        match self {
            OffsetUnit::Utf8 => c.len_utf8(),
            OffsetUnit::Char => 1,
            OffsetUnit::Utf16 => c.len_utf16(),
        }
    }
}

/// Converts byte offsets into `unit` offsets over one text.
///
/// Walks forward from the last converted offset, so converting ascending offsets
/// costs one pass over the text in total. Converting an earlier offset restarts
/// from the beginning.
pub struct OffsetConverter<'a> {
    text: &'a str,
    unit: OffsetUnit,
    byte: usize,
    units: usize,
}

impl<'a> OffsetConverter<'a> {
    pub fn new(text: &'a str, unit: OffsetUnit) -> Self {
        Self {
            text,
            unit,
            byte: 0,
            units: 0,
        }
    }

    /// Converts byte offset `byte` (clamped to the text, on a char boundary).
    pub fn convert(&mut self, byte: usize) -> usize {
        let byte = byte.min(self.text.len());
        if self.unit == OffsetUnit::Utf8 {
            return byte;
        }
        if byte < self.byte {
            self.byte = 0;
            self.units = 0;
        }
        for c in self.text[self.byte..].chars() {
            if self.byte + c.len_utf8() > byte {
                break;
            }
            self.byte += c.len_utf8();
            self.units += self.unit.width(c);
        }
        self.units
    }
}

/// Converts a `unit` offset into a byte offset, clamped to the text.
///
/// An offset inside a character (e.g. between the halves of a UTF-16 surrogate
/// pair) maps to the start of that character.
pub fn to_byte_offset(text: &str, unit: OffsetUnit, offset: usize) -> usize {
    if unit == OffsetUnit::Utf8 {
        let mut at = offset.min(text.len());
        while !text.is_char_boundary(at) {
            at -= 1;
        }
        return at;
    }
    let mut units = 0;
    for (i, c) in text.char_indices() {
        let next = units + unit.width(c);
        if next > offset {
            return i;
        }
        units = next;
    }
    text.len()
}
