//! ATS match service: a deterministic resume-vs-job scoring engine behind a small HTTP API.
//!
//! `scoring` is usable on its own as a library; everything else is service plumbing.

pub mod config;
pub mod enrichment;
pub mod errors;
pub mod extraction;
pub mod llm_client;
pub mod optimization;
pub mod routes;
pub mod scoring;
pub mod state;
