//! Integration tests driving the pimbuild binary against fake build tools.
//!
//! The fakes record their arguments and plant artifacts, so the tests can
//! observe exactly what the external tools were asked to do without a real
//! cmake or ninja installed. Unix-only: the fakes are shell scripts.

#![cfg(unix)]

mod common;

mod sdk_tests;
