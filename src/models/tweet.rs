// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::user::UserRef;
use crate::schema::tweets;

/// A tweet row. `attachments` is an ordered snapshot of media paths taken
/// when the tweet was created; later media changes never reach it.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = tweets)]
pub struct Tweet {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub attachments: Vec<String>,
}

#[derive(Debug, Insertable, Serialize, Deserialize)]
#[diesel(table_name = tweets)]
pub struct NewTweet {
    pub user_id: i32,
    pub content: String,
    pub attachments: Vec<String>,
}

/// Inbound create payload. Clients send the text as `tweet_data` and the
/// pre-uploaded media ids in the order they want the attachments.
#[derive(Debug, Deserialize)]
pub struct NewTweetRequest {
    pub tweet_data: String,
    #[serde(default)]
    pub tweet_media_ids: Vec<i32>,
}

/// A like as it appears on a feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetLike {
    pub user_id: i32,
    pub name: String,
}

/// DTO for one entry of the ranked feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedTweet {
    pub id: i32,
    pub content: String,
    pub attachments: Vec<String>,
    pub author: UserRef,
    pub likes: Vec<TweetLike>,
}
