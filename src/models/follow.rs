// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::followers;

/// A directed follow edge. Both directions of the graph are resolved by
/// querying this table; nothing caches follower lists on the user.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = followers)]
pub struct Follow {
    pub follower_id: i32,
    pub followed_id: i32,
}

#[derive(Debug, Insertable, Serialize, Deserialize)]
#[diesel(table_name = followers)]
pub struct NewFollow {
    pub follower_id: i32,
    pub followed_id: i32,
}
