// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use tracing::debug;

use crate::error::ApiError;
use crate::models::{FeedTweet, NewTweet, NewTweetRequest, TweetLike, UserRef};
use crate::schema::{followers, likes, medias, tweets, users};
use crate::services::{feed, identity};

/// The viewer's ranked feed. Every tweet in the store is returned, ordered
/// by the ranking engine; an empty store yields an empty feed.
pub async fn list(
    conn: &mut AsyncPgConnection,
    api_key: &str,
) -> Result<Vec<FeedTweet>, ApiError> {
    let viewer = identity::authenticate(conn, api_key).await?;

    let followed: Vec<i32> = followers::table
        .filter(followers::follower_id.eq(viewer.id))
        .select(followers::followed_id)
        .load(conn)
        .await?;
    let relevant = feed::relevant_users(viewer.id, followed);

    let rows: Vec<(i32, String, Vec<String>, i32, String)> = tweets::table
        .inner_join(users::table.on(users::id.eq(tweets::user_id)))
        .select((
            tweets::id,
            tweets::content,
            tweets::attachments,
            users::id,
            users::name,
        ))
        .load(conn)
        .await?;

    let like_rows: Vec<(i32, i32, String)> = likes::table
        .inner_join(users::table.on(users::id.eq(likes::user_id)))
        .select((likes::tweet_id, likes::user_id, users::name))
        .load(conn)
        .await?;

    let mut likes_by_tweet: HashMap<i32, Vec<TweetLike>> = HashMap::new();
    for (tweet_id, user_id, name) in like_rows {
        likes_by_tweet
            .entry(tweet_id)
            .or_default()
            .push(TweetLike { user_id, name });
    }

    let mut entries: Vec<FeedTweet> = rows
        .into_iter()
        .map(|(id, content, attachments, author_id, author_name)| FeedTweet {
            id,
            content,
            attachments,
            author: UserRef {
                id: author_id,
                name: author_name,
            },
            likes: likes_by_tweet.remove(&id).unwrap_or_default(),
        })
        .collect();

    feed::rank(&mut entries, &relevant);

    debug!("assembled feed of {} tweets for user {}", entries.len(), viewer.id);

    Ok(entries)
}

/// Create a tweet. Attachment paths are copied from the referenced media
/// rows in the order the ids were supplied (duplicates included); any
/// missing id rejects the whole request.
pub async fn create(
    conn: &mut AsyncPgConnection,
    api_key: &str,
    request: NewTweetRequest,
) -> Result<i32, ApiError> {
    let user = identity::authenticate(conn, api_key).await?;

    let mut attachments = Vec::with_capacity(request.tweet_media_ids.len());
    if !request.tweet_media_ids.is_empty() {
        let paths: HashMap<i32, String> = medias::table
            .filter(medias::id.eq_any(&request.tweet_media_ids))
            .select((medias::id, medias::path_file))
            .load::<(i32, String)>(conn)
            .await?
            .into_iter()
            .collect();

        for media_id in &request.tweet_media_ids {
            let path = paths.get(media_id).ok_or(ApiError::NotFound("file"))?;
            attachments.push(path.clone());
        }
    }

    let new_tweet = NewTweet {
        user_id: user.id,
        content: request.tweet_data,
        attachments,
    };

    let tweet_id = diesel::insert_into(tweets::table)
        .values(&new_tweet)
        .returning(tweets::id)
        .get_result::<i32>(conn)
        .await?;

    debug!("user {} created tweet {}", user.id, tweet_id);

    Ok(tweet_id)
}

/// Delete a tweet and all likes on it in one transaction. Ownership is
/// compared by API key, not by user id.
pub async fn remove(
    conn: &mut AsyncPgConnection,
    api_key: &str,
    tweet_id: i32,
) -> Result<(), ApiError> {
    let caller = identity::authenticate(conn, api_key).await?;

    let author_key: String = tweets::table
        .inner_join(users::table.on(users::id.eq(tweets::user_id)))
        .filter(tweets::id.eq(tweet_id))
        .select(users::api_key)
        .first(conn)
        .await
        .optional()?
        .ok_or(ApiError::NotFound("tweet"))?;

    if author_key != caller.api_key {
        return Err(ApiError::Forbidden);
    }

    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        async move {
            diesel::delete(likes::table.filter(likes::tweet_id.eq(tweet_id)))
                .execute(conn)
                .await?;
            diesel::delete(tweets::table.find(tweet_id))
                .execute(conn)
                .await?;
            Ok(())
        }
        .scope_boxed()
    })
    .await?;

    debug!("user {} deleted tweet {}", caller.id, tweet_id);

    Ok(())
}
