//! Cross-module tests
//!
//! Scenarios that exercise the cache and the resolver together the way the
//! product page uses them.
