//! End-to-end tests against a containerized PostgreSQL.
//!
//! The tests live in `tests/` and are `#[ignore]`d by default because they
//! need a Docker daemon; run them with `cargo test -p tests-integration --
//! --ignored`.
