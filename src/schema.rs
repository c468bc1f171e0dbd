// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

// Import diesel table macros
use diesel::allow_tables_to_appear_in_same_query;
use diesel::table;

table! {
    users (id) {
        id -> Integer,
        name -> Varchar,
        api_key -> Varchar,
    }
}

table! {
    tweets (id) {
        id -> Integer,
        user_id -> Integer,
        content -> Varchar,
        attachments -> Array<Text>,
    }
}

table! {
    medias (id) {
        id -> Integer,
        path_file -> Varchar,
        user_id -> Integer,
    }
}

// The composite primary key doubles as the "already liked" constraint.
table! {
    likes (tweet_id, user_id) {
        tweet_id -> Integer,
        user_id -> Integer,
    }
}

// Same for "already following". Self-follow is a business rule, not a
// schema constraint.
table! {
    followers (follower_id, followed_id) {
        follower_id -> Integer,
        followed_id -> Integer,
    }
}

allow_tables_to_appear_in_same_query!(users, tweets, medias, likes, followers,);
