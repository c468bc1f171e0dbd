// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::ApiError;
use crate::models::NewFollow;
use crate::schema::{followers, users};
use crate::services::identity;

/// Follow another user. Self-follow is a business rule rejected before the
/// store is touched; duplicate edges are caught on the composite primary
/// key, a conflict distinct from the target being absent.
pub async fn follow(
    conn: &mut AsyncPgConnection,
    api_key: &str,
    target_id: i32,
) -> Result<(), ApiError> {
    let user = identity::authenticate(conn, api_key).await?;

    if user.id == target_id {
        return Err(ApiError::SelfFollow);
    }

    let target_exists: Option<i32> = users::table
        .find(target_id)
        .select(users::id)
        .first(conn)
        .await
        .optional()?;
    if target_exists.is_none() {
        return Err(ApiError::NotFound("user"));
    }

    diesel::insert_into(followers::table)
        .values(&NewFollow {
            follower_id: user.id,
            followed_id: target_id,
        })
        .execute(conn)
        .await
        .map_err(|e| ApiError::on_conflict(e, ApiError::AlreadyFollowing))?;

    Ok(())
}

/// Drop a follow edge. Unfollowing yourself is rejected with the same
/// validation error as following yourself.
pub async fn unfollow(
    conn: &mut AsyncPgConnection,
    api_key: &str,
    target_id: i32,
) -> Result<(), ApiError> {
    let user = identity::authenticate(conn, api_key).await?;

    if user.id == target_id {
        return Err(ApiError::SelfFollow);
    }

    let deleted = diesel::delete(
        followers::table
            .filter(followers::follower_id.eq(user.id))
            .filter(followers::followed_id.eq(target_id)),
    )
    .execute(conn)
    .await?;

    if deleted == 0 {
        return Err(ApiError::NotFound("follow"));
    }

    Ok(())
}
