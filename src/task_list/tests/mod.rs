//! Unit tests for task list management.

mod memory_repository_tests;
