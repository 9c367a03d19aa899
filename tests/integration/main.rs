//! Integration tests for the scrape pipeline
//!
//! These tests use wiremock to serve listing pages and run the full
//! fetch → clean → save → report cycle end-to-end.

mod scrape_tests;
