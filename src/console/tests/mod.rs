//! Unit tests for the console surface.
