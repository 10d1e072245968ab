//! Common test utilities for syscall-fetch integration tests.

pub mod fake_api;
#[allow(unused_imports)]
pub use fake_api::{FakeApi, Reply};
