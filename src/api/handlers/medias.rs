// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::routes::{self, MediaCreatedOut};
use crate::api::AppState;
use crate::error::ApiError;
use crate::services;

/// Upload a media file (multipart field `file`). The created media id is
/// what a later tweet create references.
pub async fn add_media(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let api_key = routes::api_key(&headers)?;

    let mut upload: Option<(Option<String>, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().map(str::to_owned);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;
            upload = Some((filename, bytes.to_vec()));
            break;
        }
    }

    // No file part at all reports the same way as a part without a
    // filename.
    let (filename, bytes) = upload.ok_or(ApiError::NotFound("file"))?;

    let mut conn = state.db.get_connection().await?;

    let media_id = services::medias::upload(
        &mut conn,
        api_key,
        &state.store,
        state.max_file_size,
        filename,
        &bytes,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(MediaCreatedOut::new(media_id))))
}
