use crate::{errors::CheckpointError, Hash};

/// Seconds per day, the unit of `transactions_per_day`
const SECONDS_PER_DAY: f64 = 86_400.0;

/// How much more expensive a transaction with signature checks is to verify
/// than one below the last checkpoint
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

/// A trusted block hash at a fixed height
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pub height: u64,
    pub hash: Hash,
}

impl Checkpoint {
    pub const fn new(height: u64, hash: Hash) -> Self {
        Self { height, hash }
    }
}

/// Checkpoints ordered by height, plus the chain statistics at the last one
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckpointTable {
    entries: &'static [Checkpoint],
    /// UNIX timestamp of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Total number of transactions between genesis and the last checkpoint
    pub transactions_at_last_checkpoint: u64,
    /// Estimated number of transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

const fn strictly_increasing(entries: &[Checkpoint]) -> Option<(u64, u64)> {
    let mut i = 1;
    while i < entries.len() {
        if entries[i].height <= entries[i - 1].height {
            return Some((entries[i - 1].height, entries[i].height));
        }
        i += 1;
    }
    None
}

impl CheckpointTable {
    /// Builds a table from literal data. Out-of-order entries fail const evaluation.
    pub const fn from_static(
        entries: &'static [Checkpoint],
        last_checkpoint_time: i64,
        transactions_at_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Self {
        assert!(strictly_increasing(entries).is_none(), "checkpoint heights must strictly increase");
        Self { entries, last_checkpoint_time, transactions_at_last_checkpoint, transactions_per_day }
    }

    pub fn new(
        entries: &'static [Checkpoint],
        last_checkpoint_time: i64,
        transactions_at_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Result<Self, CheckpointError> {
        if let Some((previous, height)) = strictly_increasing(entries) {
            return Err(CheckpointError::NotIncreasing { previous, height });
        }
        Ok(Self { entries, last_checkpoint_time, transactions_at_last_checkpoint, transactions_per_day })
    }

    pub fn lookup(&self, height: u64) -> Option<Hash> {
        self.entries.binary_search_by_key(&height, |c| c.height).ok().map(|i| self.entries[i].hash)
    }

    /// False only when a checkpoint exists at `height` and names another block
    pub fn is_consistent(&self, height: u64, hash: &Hash) -> bool {
        match self.lookup(height) {
            Some(expected) => expected == *hash,
            None => true,
        }
    }

    pub fn last_checkpoint_height(&self) -> Option<u64> {
        self.entries.last().map(|c| c.height)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Checkpoint> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &'static [Checkpoint] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rough fraction (0..=1) of the total verification work already done once
    /// the chain holds `chain_tx` transactions and its tip was mined at `tip_time`.
    ///
    /// Work below the last checkpoint is counted as cheap. Work above it, and
    /// the estimated work still to come up to `now`, is weighted by
    /// [`SIGCHECK_VERIFICATION_FACTOR`] when `sigchecks` is set.
    pub fn guess_verification_progress(&self, chain_tx: u64, tip_time: i64, now: i64, sigchecks: bool) -> f64 {
        let factor = if sigchecks { SIGCHECK_VERIFICATION_FACTOR } else { 1.0 };
        let last_tx = self.transactions_at_last_checkpoint;

        let (work_before, work_after) = if chain_tx <= last_tx {
            let cheap_before = chain_tx as f64;
            let cheap_after = (last_tx - chain_tx) as f64;
            let expensive_after =
                (now - self.last_checkpoint_time).max(0) as f64 / SECONDS_PER_DAY * self.transactions_per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = last_tx as f64;
            let expensive_before = (chain_tx - last_tx) as f64;
            // Block times may run ahead of the local clock
            let expensive_after = (now - tip_time).max(0) as f64 / SECONDS_PER_DAY * self.transactions_per_day;
            (cheap_before + expensive_before * factor, expensive_after * factor)
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 0.0;
        }
        (work_before / total).clamp(0.0, 1.0)
    }
}

const MAINNET_CHECKPOINTS: &[Checkpoint] = &[
    Checkpoint::new(0, Hash::from_display_hex("000001211fb1c1d0cf722e8934ecc1d6dac522e0489657a8cd6b5ea288f8729b")),
    Checkpoint::new(10, Hash::from_display_hex("1d132334ba027555fec222c488583b58ece0e853e0275f0bea84103bb192bb20")),
    Checkpoint::new(20, Hash::from_display_hex("0c8cdb7d104416dbd1984ae69c3642b65abc8fa2714b9f7cdb692200d7ca2bfc")),
    Checkpoint::new(40, Hash::from_display_hex("7210057aaa88f17e4f841610d7eb8a9803533f52db55e2ee11ee425cb8411527")),
    Checkpoint::new(50, Hash::from_display_hex("30909eca3f3417cf3d5d7314472488a96332bca65b0fee8beb715fc15fa83098")),
    Checkpoint::new(80, Hash::from_display_hex("0f86f76252efe2c5d6c0c5111c941356d409a098dcb0e7800976603361cd12b3")),
    Checkpoint::new(100, Hash::from_display_hex("489777a0366d31276781e923946a3761d2d530b0a0fd9fb22d41e46efd96416f")),
    Checkpoint::new(110, Hash::from_display_hex("7451b12c35bea16f10c958ac95cfb1e84b929d8f76e8d08c7c074846418db0bb")),
    Checkpoint::new(120, Hash::from_display_hex("4bc3cabacb7e88fafe73c01aa8b406d28ebfc72a4df4012525acc0fc6b92ac5c")),
    Checkpoint::new(130, Hash::from_display_hex("329b8c02eead0e4b0a4db09fa33155d6b78401248b413c999b98800df2917c98")),
    Checkpoint::new(140, Hash::from_display_hex("72fc6ebac57f51555e3ee1c6c88bce23f969e5136181cdae208e741bae4a6bb9")),
    Checkpoint::new(150, Hash::from_display_hex("1840996ded1bece1f9acc722a63de32eecf34e100266ca513d11cd169bbaec4d")),
    Checkpoint::new(180, Hash::from_display_hex("4ef6e0069e6a2b8687b81e385576581697e29d04f1ce1285d490a3e5e3d3a118")),
    Checkpoint::new(200, Hash::from_display_hex("461b7eb382d7ba043a68df031681b0b3ee57dcb495e0f28f8d5206b0323fe312")),
];

pub const MAINNET_CHECKPOINT_TABLE: CheckpointTable = CheckpointTable::from_static(MAINNET_CHECKPOINTS, 1_540_687_441, 0, 250.0);

pub const TESTNET_CHECKPOINT_TABLE: CheckpointTable = CheckpointTable::from_static(&[], 1_540_687_444, 0, 250.0);

pub const REGTEST_CHECKPOINT_TABLE: CheckpointTable = CheckpointTable::from_static(&[], 1_540_687_443, 0, 100.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::genesis::MAINNET_GENESIS;

    #[test]
    fn heights_strictly_increase() {
        for table in [MAINNET_CHECKPOINT_TABLE, TESTNET_CHECKPOINT_TABLE, REGTEST_CHECKPOINT_TABLE] {
            assert!(table.entries().windows(2).all(|w| w[0].height < w[1].height));
        }
    }

    #[test]
    fn mainnet_anchors() {
        let table = MAINNET_CHECKPOINT_TABLE;
        assert_eq!(table.len(), 14);
        assert_eq!(table.lookup(0), Some(MAINNET_GENESIS.expected_hash));
        assert_eq!(table.last_checkpoint_height(), Some(200));
        assert_eq!(table.lookup(30), None);
    }

    #[test]
    fn consistency_checks() {
        let table = MAINNET_CHECKPOINT_TABLE;
        let at_100 = table.lookup(100).unwrap();
        assert!(table.is_consistent(100, &at_100));
        assert!(!table.is_consistent(100, &Hash::from_bytes([7; 32])));
        // Heights without an entry accept anything
        assert!(table.is_consistent(101, &Hash::from_bytes([7; 32])));
    }

    #[test]
    fn empty_table_accepts_everything() {
        let table = TESTNET_CHECKPOINT_TABLE;
        assert!(table.is_empty());
        assert_eq!(table.last_checkpoint_height(), None);
        assert!(table.is_consistent(0, &Hash::from_bytes([1; 32])));
    }

    #[test]
    fn unordered_entries_are_rejected() {
        static UNORDERED: [Checkpoint; 3] = [
            Checkpoint::new(0, Hash::from_bytes([0; 32])),
            Checkpoint::new(20, Hash::from_bytes([1; 32])),
            Checkpoint::new(20, Hash::from_bytes([2; 32])),
        ];
        assert_eq!(
            CheckpointTable::new(&UNORDERED, 0, 0, 1.0),
            Err(CheckpointError::NotIncreasing { previous: 20, height: 20 })
        );
        assert!(CheckpointTable::new(&UNORDERED[..2], 0, 0, 1.0).is_ok());
    }

    #[test]
    fn verification_progress() {
        let table = CheckpointTable::from_static(&[], 1_000_000, 1_000, 86_400.0);

        // Half of the cheap transactions verified, nothing expected after the checkpoint
        let progress = table.guess_verification_progress(500, 0, 1_000_000, true);
        assert!((progress - 0.5).abs() < 1e-9);

        // Past the checkpoint and caught up with the clock
        let progress = table.guess_verification_progress(2_000, 2_000_000, 2_000_000, true);
        assert!((progress - 1.0).abs() < 1e-9);

        // One day behind: 1000 + 1000*5 done, 86400*5 left
        let progress = table.guess_verification_progress(2_000, 2_000_000, 2_086_400, true);
        assert!((progress - 6_000.0 / (6_000.0 + 432_000.0)).abs() < 1e-9);

        let empty = CheckpointTable::from_static(&[], 0, 0, 0.0);
        assert_eq!(empty.guess_verification_progress(0, 0, 0, false), 0.0);
    }

    #[test]
    fn verification_progress_with_tip_ahead_of_clock() {
        let now = 1_700_000_000;
        let progress = MAINNET_CHECKPOINT_TABLE.guess_verification_progress(10, now + 7_200, now, true);
        assert!((progress - 1.0).abs() < 1e-9);

        // Clock behind the last checkpoint
        let table = CheckpointTable::from_static(&[], now, 1_000, 250.0);
        let progress = table.guess_verification_progress(1_000, now, now - 3_600, true);
        assert!((progress - 1.0).abs() < 1e-9);
    }
}
