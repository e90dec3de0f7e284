use std::ops::Deref;

use super::params::{NetworkParams, UNITTEST_PARAMS};

/// Unit-test network parameters that tests may tweak.
///
/// A separate owned value, never stored in the registry, so production code
/// only ever sees the immutable sets. Overrides reach only code that is handed
/// this value explicitly; [`crate::config::registry::params`] never sees them.
#[derive(Clone, Copy, Debug)]
pub struct ModifiableParams {
    params: NetworkParams,
}

impl Default for ModifiableParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ModifiableParams {
    pub const fn new() -> Self {
        Self { params: UNITTEST_PARAMS }
    }

    pub fn set_subsidy_halving_interval(&mut self, interval: u64) -> &mut Self {
        self.params.subsidy_halving_interval = interval;
        self
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, majority: u32) -> &mut Self {
        self.params.majority_enforce_block_upgrade = majority;
        self
    }

    pub fn set_reject_block_outdated_majority(&mut self, majority: u32) -> &mut Self {
        self.params.majority_reject_block_outdated = majority;
        self
    }

    pub fn set_to_check_block_upgrade_majority(&mut self, window: u32) -> &mut Self {
        self.params.majority_window = window;
        self
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) -> &mut Self {
        self.params.flags.default_consistency_checks = enabled;
        self
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) -> &mut Self {
        self.params.flags.allow_min_difficulty_blocks = allowed;
        self
    }

    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) -> &mut Self {
        self.params.flags.skip_proof_of_work_check = skip;
        self
    }

    pub fn params(&self) -> &NetworkParams {
        &self.params
    }
}

impl Deref for ModifiableParams {
    type Target = NetworkParams;

    fn deref(&self) -> &Self::Target {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{params::network_params, registry::params_for},
        NetworkId,
    };

    #[test]
    fn setters_do_not_touch_the_static_sets() {
        let mut params = ModifiableParams::new();
        params
            .set_subsidy_halving_interval(10)
            .set_enforce_block_upgrade_majority(1)
            .set_reject_block_outdated_majority(2)
            .set_to_check_block_upgrade_majority(3)
            .set_default_consistency_checks(false)
            .set_allow_min_difficulty_blocks(true)
            .set_skip_proof_of_work_check(true);

        assert_eq!(params.network, NetworkId::UnitTest);
        assert_eq!(params.subsidy_halving_interval, 10);
        assert_eq!(
            (params.majority_enforce_block_upgrade, params.majority_reject_block_outdated, params.majority_window),
            (1, 2, 3)
        );
        assert!(!params.flags.default_consistency_checks);
        assert!(params.flags.allow_min_difficulty_blocks);
        assert!(params.flags.skip_proof_of_work_check);

        let unittest = network_params(NetworkId::UnitTest);
        assert_eq!(unittest.subsidy_halving_interval, 1_050_000);
        assert!(unittest.flags.default_consistency_checks);
        assert!(!unittest.flags.skip_proof_of_work_check);

        // Registry-held parameters are untouched as well
        let registered = params_for(NetworkId::UnitTest);
        assert_eq!(registered.subsidy_halving_interval, 1_050_000);
        assert!(!registered.flags.skip_proof_of_work_check);
    }
}
