// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

pub mod follows;
pub mod health;
pub mod likes;
pub mod medias;
pub mod tweets;
pub mod users;
