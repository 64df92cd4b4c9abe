//! Test modules for Lanai.
//!
//! Component suites live here when they span more than one file or need the
//! shared fixtures in [`test_utils`]; single-file unit tests stay next to the
//! code they cover.


pub use test_utils::{key_set_strategy, key_strategy, TestFixture};
