// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::ApiError;
use crate::models::User;
use crate::schema::users;

/// Resolve an opaque API key to its user.
///
/// Keys are exact-match bearer tokens; there is no signature or expiry to
/// check. A miss surfaces as `Unauthorized`, not as a generic not-found.
/// Every mutating operation starts here.
pub async fn authenticate(
    conn: &mut AsyncPgConnection,
    api_key: &str,
) -> Result<User, ApiError> {
    users::table
        .filter(users::api_key.eq(api_key))
        .first::<User>(conn)
        .await
        .optional()?
        .ok_or(ApiError::Unauthorized)
}
