//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
#![allow(dead_code)]

mod constants;
mod fixtures;
mod stores;

// Public API - this is what tests import
#[allow(unused_imports)]
pub use constants::*;
#[allow(unused_imports)]
pub use fixtures::{create_test_library, ids};
#[allow(unused_imports)]
pub use stores::{BarrierStore, FailingStore, Table};
