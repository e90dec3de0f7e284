use serde::{Deserialize, Serialize};

/// Script opcodes used when assembling genesis and coinbase scripts
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    OP_0 = 0x00,
    OP_PUSHDATA1 = 0x4c,
    OP_PUSHDATA2 = 0x4d,
    OP_PUSHDATA4 = 0x4e,
    OP_1NEGATE = 0x4f,
    OP_1 = 0x51,
    OP_CHECKSIG = 0xac,
}

/// Raw script bytes
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    bytes: Vec<u8>,
}

impl Script {
    /// Creates a new empty script
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Creates a script from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns the raw script bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Appends an opcode
    pub fn push_opcode(&mut self, opcode: Opcode) -> &mut Self {
        self.bytes.push(opcode as u8);
        self
    }

    /// Appends a data push using the smallest push form
    pub fn push_slice(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();
        if len < Opcode::OP_PUSHDATA1 as usize {
            self.bytes.push(len as u8);
        } else if len <= 0xff {
            self.bytes.push(Opcode::OP_PUSHDATA1 as u8);
            self.bytes.push(len as u8);
        } else if len <= 0xffff {
            self.bytes.push(Opcode::OP_PUSHDATA2 as u8);
            self.bytes.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.bytes.push(Opcode::OP_PUSHDATA4 as u8);
            self.bytes.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.bytes.extend_from_slice(data);
        self
    }

    /// Appends an integer, using the small-integer opcodes for -1 and 0..=16
    pub fn push_int(&mut self, value: i64) -> &mut Self {
        match value {
            0 => self.push_opcode(Opcode::OP_0),
            -1 => self.push_opcode(Opcode::OP_1NEGATE),
            1..=16 => {
                self.bytes.push(Opcode::OP_1 as u8 + (value as u8 - 1));
                self
            }
            _ => self.push_slice(&encode_script_num(value)),
        }
    }

    /// Appends an integer as a minimally encoded number push. Unlike
    /// [`Script::push_int`] this never collapses small values into opcodes.
    pub fn push_num(&mut self, value: i64) -> &mut Self {
        self.push_slice(&encode_script_num(value))
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number
pub fn encode_script_num(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut magnitude = value.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while magnitude > 0 {
        out.push((magnitude & 0xff) as u8);
        magnitude >>= 8;
    }

    // The top bit of the last byte is the sign; add a byte if it is taken.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}
