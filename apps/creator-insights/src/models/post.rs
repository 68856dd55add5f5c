/// One performance observation for a published post, as read from a
/// `creator_data.csv` row. Percentages are kept as display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub format: String,
    pub release_time: String,
    pub tags: String,
    /// Loaded for completeness, never rendered into the prompt.
    pub radar_chart: String,
    pub views: u64,
    pub likes: u64,
    pub collects: u64,
    pub comments: u64,
    pub follower_growth: u64,
    pub shares: u64,
    pub traffic_source: String,
    pub female_percentage: String,
    pub age_25_34_percentage: String,
    pub age_18_24_percentage: String,
    pub overseas_percentage: String,
    pub interest_distribution: String,
    pub growth_strategy: String,
}
