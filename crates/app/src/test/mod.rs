//! Shared infrastructure for Postgres-backed service tests.

mod db;

pub(crate) use context::TestContext;
