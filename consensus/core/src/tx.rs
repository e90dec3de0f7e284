use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use swift_hashes::HashWriter;

use crate::{script::Script, Hash, ZERO_HASH};

/// Reference to an output of a previous transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutpoint {
    pub transaction_id: Hash,
    pub index: u32,
}

impl TransactionOutpoint {
    pub const fn new(transaction_id: Hash, index: u32) -> Self {
        Self { transaction_id, index }
    }

    /// The outpoint spent by coinbase inputs
    pub const fn null() -> Self {
        Self { transaction_id: ZERO_HASH, index: u32::MAX }
    }

    pub fn is_null(&self) -> bool {
        self.transaction_id.is_zero() && self.index == u32::MAX
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub previous_outpoint: TransactionOutpoint,
    pub signature_script: Script,
    pub sequence: u32,
}

impl TransactionInput {
    pub fn new(previous_outpoint: TransactionOutpoint, signature_script: Script, sequence: u32) -> Self {
        Self { previous_outpoint, signature_script, sequence }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: i64,
    pub script_public_key: Script,
}

impl TransactionOutput {
    pub fn new(value: i64, script_public_key: Script) -> Self {
        Self { value, script_public_key }
    }
}

/// Legacy (pre-segwit) transaction
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn new(version: i32, inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>, lock_time: u32) -> Self {
        Self { version, inputs, outputs, lock_time }
    }

    /// A coinbase has exactly one input, spending the null outpoint
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_outpoint.is_null()
    }

    /// Writes the wire serialization
    pub fn serialize_into<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.version.to_le_bytes())?;
        write_compact_size(w, self.inputs.len() as u64)?;
        for input in &self.inputs {
            w.write_all(input.previous_outpoint.transaction_id.as_bytes())?;
            w.write_all(&input.previous_outpoint.index.to_le_bytes())?;
            write_var_bytes(w, input.signature_script.as_bytes())?;
            w.write_all(&input.sequence.to_le_bytes())?;
        }
        write_compact_size(w, self.outputs.len() as u64)?;
        for output in &self.outputs {
            w.write_all(&output.value.to_le_bytes())?;
            write_var_bytes(w, output.script_public_key.as_bytes())?;
        }
        w.write_all(&self.lock_time.to_le_bytes())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.serialize_into(&mut bytes).expect("writing to a Vec cannot fail");
        bytes
    }

    /// Transaction id: double-SHA256 of the serialization
    pub fn id(&self) -> Hash {
        let mut writer = HashWriter::new();
        self.serialize_into(&mut writer).expect("writing to a hasher cannot fail");
        writer.finalize()
    }
}

/// Bitcoin CompactSize length prefix
pub fn write_compact_size<W: Write>(w: &mut W, n: u64) -> io::Result<()> {
    match n {
        0..=0xfc => w.write_all(&[n as u8]),
        0xfd..=0xffff => {
            w.write_all(&[0xfd])?;
            w.write_all(&(n as u16).to_le_bytes())
        }
        0x1_0000..=0xffff_ffff => {
            w.write_all(&[0xfe])?;
            w.write_all(&(n as u32).to_le_bytes())
        }
        _ => {
            w.write_all(&[0xff])?;
            w.write_all(&n.to_le_bytes())
        }
    }
}

fn write_var_bytes<W: Write>(w: &mut W, bytes: &[u8]) -> io::Result<()> {
    write_compact_size(w, bytes.len() as u64)?;
    w.write_all(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swift_hashes::double_sha256;

    fn sample_coinbase() -> Transaction {
        let mut script_sig = Script::new();
        script_sig.push_num(4);
        Transaction::new(
            1,
            vec![TransactionInput::new(TransactionOutpoint::null(), script_sig, u32::MAX)],
            vec![TransactionOutput::new(50, Script::from_bytes(vec![0x51]))],
            0,
        )
    }

    #[test]
    fn compact_size_boundaries() {
        let encode = |n| {
            let mut out = Vec::new();
            write_compact_size(&mut out, n).unwrap();
            out
        };
        assert_eq!(encode(0xfc), vec![0xfc]);
        assert_eq!(encode(0xfd), vec![0xfd, 0xfd, 0x00]);
        assert_eq!(encode(0x1_0000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(encode(0x1_0000_0000).len(), 9);
    }

    #[test]
    fn coinbase_serialization_layout() {
        let tx = sample_coinbase();
        assert!(tx.is_coinbase());

        let bytes = tx.to_bytes();
        // version + vin count + outpoint + script + sequence + vout count + value + script + locktime
        assert_eq!(bytes.len(), 4 + 1 + 36 + 3 + 4 + 1 + 8 + 2 + 4);
        assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[5..37], &[0u8; 32]);
        assert_eq!(&bytes[37..41], &[0xff; 4]);
    }

    #[test]
    fn id_is_double_sha256_of_bytes() {
        let tx = sample_coinbase();
        assert_eq!(tx.id(), double_sha256(&tx.to_bytes()));
    }

    #[test]
    fn spending_transaction_is_not_coinbase() {
        let mut tx = sample_coinbase();
        tx.inputs[0].previous_outpoint = TransactionOutpoint::new(Hash::from_bytes([1; 32]), 0);
        assert!(!tx.is_coinbase());
    }
}
