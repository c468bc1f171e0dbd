use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{FeedTweet, Profile};

/// Name of the header carrying the bearer credential.
pub const API_KEY_HEADER: &str = "api-key";

/// Pull the opaque API key out of the request headers. A missing or
/// unreadable header fails identity resolution outright.
pub fn api_key(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Unauthorized)
}

/// The `{"result": true}` body every boolean mutation returns.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultOut {
    pub result: bool,
}

impl ResultOut {
    pub fn ok() -> Self {
        Self { result: true }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TweetCreatedOut {
    pub result: bool,
    pub tweet_id: i32,
}

impl TweetCreatedOut {
    pub fn new(tweet_id: i32) -> Self {
        Self {
            result: true,
            tweet_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MediaCreatedOut {
    pub result: bool,
    pub media_id: i32,
}

impl MediaCreatedOut {
    pub fn new(media_id: i32) -> Self {
        Self {
            result: true,
            media_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TweetsOut {
    pub result: bool,
    pub tweets: Vec<FeedTweet>,
}

impl TweetsOut {
    pub fn new(tweets: Vec<FeedTweet>) -> Self {
        Self {
            result: true,
            tweets,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileOut {
    pub result: bool,
    pub user: Profile,
}

impl ProfileOut {
    pub fn new(user: Profile) -> Self {
        Self { result: true, user }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TweetLike, UserRef};
    use axum::http::HeaderValue;
    use serde_json::json;

    #[test]
    fn api_key_header_is_read_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_static("test"));
        assert_eq!(api_key(&headers).unwrap(), "test");
    }

    #[test]
    fn missing_api_key_is_unauthorized() {
        let headers = HeaderMap::new();
        assert!(matches!(api_key(&headers), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn boolean_bodies_carry_only_the_result_flag() {
        assert_eq!(
            serde_json::to_value(ResultOut::ok()).unwrap(),
            json!({"result": true})
        );
    }

    #[test]
    fn created_bodies_carry_the_new_id() {
        assert_eq!(
            serde_json::to_value(TweetCreatedOut::new(3)).unwrap(),
            json!({"result": true, "tweet_id": 3})
        );
        assert_eq!(
            serde_json::to_value(MediaCreatedOut::new(8)).unwrap(),
            json!({"result": true, "media_id": 8})
        );
    }

    #[test]
    fn feed_entry_serializes_with_empty_lists_present() {
        let out = TweetsOut::new(vec![FeedTweet {
            id: 1,
            content: "hello".to_string(),
            attachments: vec![],
            author: UserRef {
                id: 1,
                name: "a".to_string(),
            },
            likes: vec![],
        }]);

        assert_eq!(
            serde_json::to_value(out).unwrap(),
            json!({
                "result": true,
                "tweets": [{
                    "id": 1,
                    "content": "hello",
                    "attachments": [],
                    "author": {"id": 1, "name": "a"},
                    "likes": [],
                }],
            })
        );
    }

    #[test]
    fn feed_entry_carries_liker_names() {
        let out = TweetsOut::new(vec![FeedTweet {
            id: 2,
            content: "liked".to_string(),
            attachments: vec!["./images/2/pic.jpg".to_string()],
            author: UserRef {
                id: 2,
                name: "b".to_string(),
            },
            likes: vec![TweetLike {
                user_id: 1,
                name: "a".to_string(),
            }],
        }]);

        assert_eq!(
            serde_json::to_value(out).unwrap(),
            json!({
                "result": true,
                "tweets": [{
                    "id": 2,
                    "content": "liked",
                    "attachments": ["./images/2/pic.jpg"],
                    "author": {"id": 2, "name": "b"},
                    "likes": [{"user_id": 1, "name": "a"}],
                }],
            })
        );
    }

    #[test]
    fn profile_body_nests_the_user() {
        let out = ProfileOut::new(Profile {
            id: 1,
            name: "a".to_string(),
            followers: vec![UserRef {
                id: 2,
                name: "b".to_string(),
            }],
            following: vec![],
        });

        assert_eq!(
            serde_json::to_value(out).unwrap(),
            json!({
                "result": true,
                "user": {
                    "id": 1,
                    "name": "a",
                    "followers": [{"id": 2, "name": "b"}],
                    "following": [],
                },
            })
        );
    }
}
