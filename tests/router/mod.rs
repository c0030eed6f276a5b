//! Tests driving the complete application service, including path normalization and
//! routing of every documented endpoint.

mod routing;
mod scenario;

use holocron_test_utils::prelude::*;

use crate::util::{body_json, get, json_request, send};
