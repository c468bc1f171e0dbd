// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::ApiError;
use crate::models::NewLike;
use crate::schema::{likes, tweets};
use crate::services::identity;

/// Like a tweet. The insert races straight against the (tweet, user)
/// primary key; a unique violation is the one and only signal that the
/// like already exists.
pub async fn like(
    conn: &mut AsyncPgConnection,
    api_key: &str,
    tweet_id: i32,
) -> Result<(), ApiError> {
    let user = identity::authenticate(conn, api_key).await?;

    let tweet_exists: Option<i32> = tweets::table
        .find(tweet_id)
        .select(tweets::id)
        .first(conn)
        .await
        .optional()?;
    if tweet_exists.is_none() {
        return Err(ApiError::NotFound("tweet"));
    }

    diesel::insert_into(likes::table)
        .values(&NewLike {
            tweet_id,
            user_id: user.id,
        })
        .execute(conn)
        .await
        .map_err(|e| ApiError::on_conflict(e, ApiError::AlreadyLiked))?;

    Ok(())
}

/// Remove the caller's like from a tweet.
pub async fn unlike(
    conn: &mut AsyncPgConnection,
    api_key: &str,
    tweet_id: i32,
) -> Result<(), ApiError> {
    let user = identity::authenticate(conn, api_key).await?;

    let deleted = diesel::delete(
        likes::table
            .filter(likes::tweet_id.eq(tweet_id))
            .filter(likes::user_id.eq(user.id)),
    )
    .execute(conn)
    .await?;

    if deleted == 0 {
        return Err(ApiError::NotFound("like"));
    }

    Ok(())
}
