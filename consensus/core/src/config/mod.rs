pub mod checkpoints;
pub mod genesis;
#[cfg(any(test, feature = "test-params"))]
pub mod modifiable;
pub mod params;
pub mod prefixes;
pub mod registry;
pub mod seeds;
