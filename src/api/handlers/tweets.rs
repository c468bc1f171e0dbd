// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::routes::{self, ResultOut, TweetCreatedOut, TweetsOut};
use crate::api::AppState;
use crate::error::ApiError;
use crate::models::NewTweetRequest;
use crate::services;

/// Ranked feed for the calling user.
pub async fn list_tweets(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let api_key = routes::api_key(&headers)?;
    let mut conn = state.db.get_connection().await?;

    let tweets = services::tweets::list(&mut conn, api_key).await?;

    Ok(Json(TweetsOut::new(tweets)))
}

/// Create a tweet, optionally referencing previously uploaded media.
pub async fn add_tweet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<NewTweetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let api_key = routes::api_key(&headers)?;
    let mut conn = state.db.get_connection().await?;

    let tweet_id = services::tweets::create(&mut conn, api_key, request).await?;

    Ok((StatusCode::CREATED, Json(TweetCreatedOut::new(tweet_id))))
}

/// Delete an own tweet together with its likes.
pub async fn delete_tweet(
    State(state): State<Arc<AppState>>,
    Path(tweet_id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let api_key = routes::api_key(&headers)?;
    let mut conn = state.db.get_connection().await?;

    services::tweets::remove(&mut conn, api_key, tweet_id).await?;

    Ok(Json(ResultOut::ok()))
}
