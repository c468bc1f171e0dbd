// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::debug;

use crate::error::ApiError;
use crate::models::NewMedia;
use crate::schema::medias;
use crate::services::identity;
use crate::storage::MediaStore;

/// Store an uploaded file and record it as a media row.
///
/// A missing filename is reported with the same NotFound code as a missing
/// file; clients depend on the merged code. The file write and the row
/// insert are not atomic; a crash in between leaves an orphaned file on
/// disk, which is accepted.
pub async fn upload(
    conn: &mut AsyncPgConnection,
    api_key: &str,
    store: &MediaStore,
    max_file_size: usize,
    filename: Option<String>,
    bytes: &[u8],
) -> Result<i32, ApiError> {
    let user = identity::authenticate(conn, api_key).await?;

    let filename = filename.ok_or(ApiError::NotFound("file"))?;

    if bytes.len() > max_file_size {
        return Err(ApiError::FileTooLarge {
            limit: max_file_size,
        });
    }

    let path_file = store.save(user.id, &filename, bytes).await?;

    let media_id = diesel::insert_into(medias::table)
        .values(&NewMedia {
            path_file,
            user_id: user.id,
        })
        .returning(medias::id)
        .get_result::<i32>(conn)
        .await?;

    debug!("user {} uploaded media {}", user.id, media_id);

    Ok(media_id)
}
