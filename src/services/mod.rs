pub mod feed;
pub mod follows;
pub mod identity;
pub mod likes;
pub mod medias;
pub mod tweets;
pub mod users;
