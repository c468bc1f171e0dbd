// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::ApiError;
use crate::models::{Profile, User, UserRef};
use crate::schema::{followers, users};
use crate::services::identity;

/// Profile of the caller, resolved from their API key.
pub async fn profile_by_key(
    conn: &mut AsyncPgConnection,
    api_key: &str,
) -> Result<Profile, ApiError> {
    let user = identity::authenticate(conn, api_key).await?;
    profile_of(conn, user).await
}

/// Profile of an arbitrary user; the one read that needs no credential.
pub async fn profile_by_id(
    conn: &mut AsyncPgConnection,
    user_id: i32,
) -> Result<Profile, ApiError> {
    let user = users::table
        .find(user_id)
        .first::<User>(conn)
        .await
        .optional()?
        .ok_or(ApiError::NotFound("user"))?;
    profile_of(conn, user).await
}

/// Both directions of the follow graph, resolved with two directed queries
/// against the edge table. No ordering guarantee beyond retrieval order.
async fn profile_of(conn: &mut AsyncPgConnection, user: User) -> Result<Profile, ApiError> {
    let followers_list: Vec<UserRef> = followers::table
        .inner_join(users::table.on(users::id.eq(followers::follower_id)))
        .filter(followers::followed_id.eq(user.id))
        .select((users::id, users::name))
        .load::<(i32, String)>(conn)
        .await?
        .into_iter()
        .map(|(id, name)| UserRef { id, name })
        .collect();

    let following_list: Vec<UserRef> = followers::table
        .inner_join(users::table.on(users::id.eq(followers::followed_id)))
        .filter(followers::follower_id.eq(user.id))
        .select((users::id, users::name))
        .load::<(i32, String)>(conn)
        .await?
        .into_iter()
        .map(|(id, name)| UserRef { id, name })
        .collect();

    Ok(Profile {
        id: user.id,
        name: user.name,
        followers: followers_list,
        following: following_list,
    })
}
