//! Tests for the Form derive macro
//!
//! Expansion is checked on `proc_macro2` tokens; the generated code is
//! exercised end to end by the form-fields crate's tests.

mod form_tests;
