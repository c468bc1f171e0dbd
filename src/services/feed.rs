// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

//! Feed ranking. Pure functions over the projected tweet list; the tweet
//! service loads the data and calls in here.

use std::collections::HashSet;

use crate::models::FeedTweet;

/// The viewer's relevant user set: their own id plus everyone they follow.
/// Own likes therefore always boost rank, even with zero follows.
pub fn relevant_users(viewer_id: i32, followed: impl IntoIterator<Item = i32>) -> HashSet<i32> {
    let mut set: HashSet<i32> = followed.into_iter().collect();
    set.insert(viewer_id);
    set
}

/// Rank tweets for a viewer, descending on a two-level key:
/// whether anyone in the relevant set liked the tweet, then the total like
/// count. The sort is stable, so tweets equal on both keys keep their
/// retrieval order; there is no timestamp to break ties by.
pub fn rank(tweets: &mut [FeedTweet], relevant: &HashSet<i32>) {
    tweets.sort_by(|a, b| sort_key(b, relevant).cmp(&sort_key(a, relevant)));
}

fn sort_key(tweet: &FeedTweet, relevant: &HashSet<i32>) -> (bool, usize) {
    (
        tweet
            .likes
            .iter()
            .any(|like| relevant.contains(&like.user_id)),
        tweet.likes.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TweetLike, UserRef};

    fn tweet(id: i32, liker_ids: &[i32]) -> FeedTweet {
        FeedTweet {
            id,
            content: format!("tweet {id}"),
            attachments: vec![],
            author: UserRef {
                id: 99,
                name: "author".to_string(),
            },
            likes: liker_ids
                .iter()
                .map(|&user_id| TweetLike {
                    user_id,
                    name: format!("user {user_id}"),
                })
                .collect(),
        }
    }

    fn ids(tweets: &[FeedTweet]) -> Vec<i32> {
        tweets.iter().map(|t| t.id).collect()
    }

    #[test]
    fn relevant_set_always_contains_the_viewer() {
        assert_eq!(relevant_users(1, []), HashSet::from([1]));
        assert_eq!(relevant_users(1, [2, 3]), HashSet::from([1, 2, 3]));
        // following yourself is rejected upstream, but the set is idempotent
        assert_eq!(relevant_users(1, [1, 2]), HashSet::from([1, 2]));
    }

    #[test]
    fn relevant_like_beats_any_raw_like_count() {
        // tweet 1: three likes, none relevant; tweet 2: one like from a
        // followed user
        let mut tweets = vec![tweet(1, &[5, 6, 7]), tweet(2, &[2])];
        rank(&mut tweets, &relevant_users(1, [2]));
        assert_eq!(ids(&tweets), vec![2, 1]);
    }

    #[test]
    fn like_count_orders_within_equal_relevance() {
        let mut tweets = vec![tweet(1, &[5]), tweet(2, &[5, 6, 7]), tweet(3, &[5, 6])];
        rank(&mut tweets, &relevant_users(1, []));
        assert_eq!(ids(&tweets), vec![2, 3, 1]);
    }

    #[test]
    fn self_like_boosts_rank_without_any_follows() {
        let mut tweets = vec![tweet(1, &[5, 6]), tweet(2, &[1])];
        rank(&mut tweets, &relevant_users(1, []));
        assert_eq!(ids(&tweets), vec![2, 1]);
    }

    #[test]
    fn full_ties_preserve_retrieval_order() {
        let mut tweets = vec![tweet(3, &[5]), tweet(1, &[6]), tweet(2, &[7])];
        rank(&mut tweets, &relevant_users(9, []));
        assert_eq!(ids(&tweets), vec![3, 1, 2]);

        let mut unliked = vec![tweet(4, &[]), tweet(5, &[]), tweet(6, &[])];
        rank(&mut unliked, &relevant_users(9, []));
        assert_eq!(ids(&unliked), vec![4, 5, 6]);
    }

    #[test]
    fn both_key_levels_compose() {
        // two relevant-liked tweets ordered by count, then the rest by count
        let mut tweets = vec![
            tweet(1, &[5, 6]),
            tweet(2, &[2]),
            tweet(3, &[2, 5, 6]),
            tweet(4, &[5]),
        ];
        rank(&mut tweets, &relevant_users(1, [2]));
        assert_eq!(ids(&tweets), vec![3, 2, 1, 4]);
    }

    #[test]
    fn empty_input_stays_empty() {
        let mut tweets: Vec<FeedTweet> = vec![];
        rank(&mut tweets, &relevant_users(1, [2]));
        assert!(tweets.is_empty());
    }
}
