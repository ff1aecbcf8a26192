//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: URL, token, and render option resolution tests
//! - `loading`: Environment and CLI loading tests
//! - `validation`: Positional conflicts and value checks

mod helpers;
