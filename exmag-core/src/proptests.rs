//! Property-based tests for the magnitude algebra.
