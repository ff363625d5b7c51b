// Test Helper Modules
//
// Shared fixtures for unit and integration tests. Include with:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;

#![allow(dead_code)]


pub use test_data::TestDataFactory;
