//! Unit tests for STL decoding

mod fields_tests;
mod handle_tests;
