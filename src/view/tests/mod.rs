//! Unit tests for the console views.
