// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::users;

/// A registered user. Rows are provisioned out-of-band (seed or fixtures);
/// there is no signup path. The API key is an opaque bearer credential,
/// matched exactly and never validated beyond that.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub api_key: String,
}

#[derive(Debug, Insertable, Serialize, Deserialize)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub name: String,
    pub api_key: String,
}

/// Reduced `{id, name}` projection used in follower/following lists and
/// feed authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i32,
    pub name: String,
}

/// DTO for the profile read: the user plus both directions of the follow
/// graph, each edge reduced to `{id, name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub followers: Vec<UserRef>,
    pub following: Vec<UserRef>,
}
