// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::medias;

/// An uploaded file. Tweets copy `path_file` into their attachment list at
/// creation time and keep no live reference to this row.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = medias)]
pub struct Media {
    pub id: i32,
    pub path_file: String,
    pub user_id: i32,
}

#[derive(Debug, Insertable, Serialize, Deserialize)]
#[diesel(table_name = medias)]
pub struct NewMedia {
    pub path_file: String,
    pub user_id: i32,
}
