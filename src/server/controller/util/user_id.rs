use serde_json::Value;

use crate::server::error::{exception::ApiException, favorite::FavoriteError, Error};

/// Reads `user_id` from a raw JSON request body
///
/// # Returns
/// - `Ok(i32)`: Body is a JSON object with a non-zero integer `user_id`
/// - `Err(FavoriteError::MissingBodyUserId)`: Body is empty, not a JSON object, or `user_id`
///   is absent, `null`, `0`, or not an integer
pub fn user_id_from_body(body: &[u8]) -> Result<i32, FavoriteError> {
    let request: Value =
        serde_json::from_slice(body).map_err(|_| FavoriteError::MissingBodyUserId)?;

    // A zero user_id counts as missing
    request
        .as_object()
        .and_then(|request| request.get("user_id"))
        .and_then(Value::as_i64)
        .and_then(|user_id| i32::try_from(user_id).ok())
        .filter(|user_id| *user_id != 0)
        .ok_or(FavoriteError::MissingBodyUserId)
}

/// Parses the `user_id` query parameter
///
/// # Returns
/// - `Ok(i32)`: Parameter is an integer
/// - `Err(Error::FavoriteError(MissingQueryUserId))`: Parameter is absent or empty
/// - `Err(Error::Exception)`: 404 when the parameter cannot name any user
pub fn user_id_from_query(user_id: Option<&str>) -> Result<i32, Error> {
    let Some(user_id) = user_id.map(str::trim).filter(|id| !id.is_empty()) else {
        return Err(FavoriteError::MissingQueryUserId.into());
    };

    user_id.parse::<i32>().map_err(|_| {
        tracing::debug!("Query user_id {:?} is not an integer", user_id);

        ApiException::not_found("User not found").into()
    })
}
