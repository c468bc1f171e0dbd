// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::routes::{self, ProfileOut};
use crate::api::AppState;
use crate::error::ApiError;
use crate::services;

/// Profile of the calling user.
pub async fn get_profile_my(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let api_key = routes::api_key(&headers)?;
    let mut conn = state.db.get_connection().await?;

    let profile = services::users::profile_by_key(&mut conn, api_key).await?;

    Ok(Json(ProfileOut::new(profile)))
}

/// Profile of an arbitrary user; no credential required.
pub async fn get_profile_by_id(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = state.db.get_connection().await?;

    let profile = services::users::profile_by_id(&mut conn, user_id).await?;

    Ok(Json(ProfileOut::new(profile)))
}
