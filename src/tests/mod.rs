//! Tests for the widget dashboard library types.
//!
//! Tests are organized by domain:
//! - `model` - Widget, Category and Dashboard helpers
//! - `serialization` - JSON wire shape of the seed format

mod model;
