pub mod follow;
pub mod like;
pub mod media;
pub mod tweet;
pub mod user;

pub use follow::{Follow, NewFollow};
pub use like::{Like, NewLike};
pub use media::{Media, NewMedia};
pub use tweet::{FeedTweet, NewTweet, NewTweetRequest, Tweet, TweetLike};
pub use user::{NewUser, Profile, User, UserRef};
