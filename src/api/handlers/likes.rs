// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::routes::{self, ResultOut};
use crate::api::AppState;
use crate::error::ApiError;
use crate::services;

pub async fn like_tweet(
    State(state): State<Arc<AppState>>,
    Path(tweet_id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let api_key = routes::api_key(&headers)?;
    let mut conn = state.db.get_connection().await?;

    services::likes::like(&mut conn, api_key, tweet_id).await?;

    Ok((StatusCode::CREATED, Json(ResultOut::ok())))
}

pub async fn dislike_tweet(
    State(state): State<Arc<AppState>>,
    Path(tweet_id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let api_key = routes::api_key(&headers)?;
    let mut conn = state.db.get_connection().await?;

    services::likes::unlike(&mut conn, api_key, tweet_id).await?;

    Ok(Json(ResultOut::ok()))
}
