//! Unit tests for booking intake.

mod form_tests;
