use crate::models::Post;

/// How many posts are sent for analysis.
pub const TOP_N: usize = 5;

/// Engagement score: views + likes + comments + collects.
/// Follower growth and shares are reported but do not count toward ranking.
pub fn engagement_score(post: &Post) -> u64 {
    post.views
        .saturating_add(post.likes)
        .saturating_add(post.comments)
        .saturating_add(post.collects)
}

/// Returns the `n` highest-scoring posts, descending.
/// Equal scores keep their input order (`sort_by` is stable).
pub fn rank_top_posts(mut posts: Vec<Post>, n: usize) -> Vec<Post> {
    posts.sort_by(|a, b| engagement_score(b).cmp(&engagement_score(a)));
    posts.truncate(n);
    posts
}
