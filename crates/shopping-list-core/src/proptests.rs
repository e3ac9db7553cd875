//! Property-based tests for the list invariants.
