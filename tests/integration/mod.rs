//! Integration tests

pub mod extractor_tests;
pub mod sender_tests;
