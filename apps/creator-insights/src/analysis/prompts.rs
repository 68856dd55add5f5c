// Prompt rendering for the post analysis request.
// Labels and field order are stable so the same posts always produce the same bytes.

use std::fmt::Write;

use crate::models::Post;

/// Renders the ranked posts into the single user message sent for completion.
///
/// Free text from the source is concatenated verbatim, with no escaping.
pub fn build_analysis_prompt(posts: &[Post]) -> String {
    let mut prompt = format!(
        "Perform post analysis of the following top {} high engagement posts:\n\n",
        posts.len()
    );

    for (i, post) in posts.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = write_post_block(&mut prompt, i + 1, post);
    }

    prompt
}

fn write_post_block(out: &mut String, rank: usize, post: &Post) -> std::fmt::Result {
    writeln!(out, "Post #{rank}:")?;
    writeln!(out, "Title: {}", post.title)?;
    writeln!(out, "Format: {}", post.format)?;
    writeln!(out, "Release Time: {}", post.release_time)?;
    writeln!(out, "Tags: {}", post.tags)?;
    writeln!(out, "Views: {}", post.views)?;
    writeln!(out, "Likes: {}", post.likes)?;
    writeln!(out, "Comments: {}", post.comments)?;
    writeln!(out, "Collects: {}", post.collects)?;
    writeln!(out, "Growth in Followers: {}", post.follower_growth)?;
    writeln!(out, "Shares: {}", post.shares)?;
    writeln!(out, "Traffic Source: {}", post.traffic_source)?;
    writeln!(out, "Female Percentage: {}", post.female_percentage)?;
    writeln!(out, "Age 25-34 Percentage: {}", post.age_25_34_percentage)?;
    writeln!(out, "Age 18-24 Percentage: {}", post.age_18_24_percentage)?;
    writeln!(out, "Overseas Percentage: {}", post.overseas_percentage)?;
    writeln!(out, "Interest Distribution: {}", post.interest_distribution)?;
    writeln!(out, "Growth Strategy: {}\n", post.growth_strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            title: "Spring haul".to_string(),
            format: "Video".to_string(),
            release_time: "2024-04-02 19:30".to_string(),
            tags: "#haul #spring".to_string(),
            radar_chart: "chart-should-not-render".to_string(),
            views: 5400,
            likes: 800,
            collects: 120,
            comments: 64,
            follower_growth: 33,
            shares: 21,
            traffic_source: "Home feed".to_string(),
            female_percentage: "72%".to_string(),
            age_25_34_percentage: "41%".to_string(),
            age_18_24_percentage: "37%".to_string(),
            overseas_percentage: "3%".to_string(),
            interest_distribution: "Fashion 60%, Beauty 30%".to_string(),
            growth_strategy: "Batch filming on weekends".to_string(),
        }
    }

    #[test]
    fn test_prompt_exact_layout() {
        let prompt = build_analysis_prompt(&[sample_post()]);
        let expected = "Perform post analysis of the following top 1 high engagement posts:\n\n\
Post #1:\n\
Title: Spring haul\n\
Format: Video\n\
Release Time: 2024-04-02 19:30\n\
Tags: #haul #spring\n\
Views: 5400\n\
Likes: 800\n\
Comments: 64\n\
Collects: 120\n\
Growth in Followers: 33\n\
Shares: 21\n\
Traffic Source: Home feed\n\
Female Percentage: 72%\n\
Age 25-34 Percentage: 41%\n\
Age 18-24 Percentage: 37%\n\
Overseas Percentage: 3%\n\
Interest Distribution: Fashion 60%, Beauty 30%\n\
Growth Strategy: Batch filming on weekends\n\n";
        assert_eq!(prompt, expected);
        assert!(!prompt.contains("chart-should-not-render"));
    }

    #[test]
    fn test_blocks_numbered_and_separated() {
        let mut second = sample_post();
        second.title = "Second".to_string();
        let prompt = build_analysis_prompt(&[sample_post(), second]);

        assert!(prompt.starts_with("Perform post analysis of the following top 2 "));
        assert!(prompt.contains("Growth Strategy: Batch filming on weekends\n\nPost #2:\nTitle: Second\n"));
        assert_eq!(prompt.matches("Post #").count(), 2);
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let posts = vec![sample_post(), sample_post()];
        assert_eq!(build_analysis_prompt(&posts), build_analysis_prompt(&posts));
    }

    #[test]
    fn test_free_text_passes_through_verbatim() {
        let mut post = sample_post();
        post.growth_strategy = "line one\nline two\t\"quoted\"".to_string();
        let prompt = build_analysis_prompt(&[post]);
        assert!(prompt.contains("Growth Strategy: line one\nline two\t\"quoted\"\n\n"));
    }

    #[test]
    fn test_empty_selection_renders_preamble_only() {
        assert_eq!(
            build_analysis_prompt(&[]),
            "Perform post analysis of the following top 0 high engagement posts:\n\n"
        );
    }
}
