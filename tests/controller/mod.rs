//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted inputs, verifying status codes and the JSON
//! bodies clients receive.

mod favorite;
mod people;
mod planet;

use holocron_test_utils::prelude::*;

use crate::util::into_parts;
