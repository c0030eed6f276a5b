//! Helpers for pulling the requesting user's ID out of favorite & user requests.
//!
//! Both helpers are lenient: anything that does not name an integer user ID is reported as
//! the ID being missing rather than as a malformed request.

pub mod user_id;
