// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::likes;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = likes)]
pub struct Like {
    pub tweet_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Insertable, Serialize, Deserialize)]
#[diesel(table_name = likes)]
pub struct NewLike {
    pub tweet_id: i32,
    pub user_id: i32,
}
