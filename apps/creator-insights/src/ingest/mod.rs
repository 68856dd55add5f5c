//! Record loader for `creator_data.csv`.
//!
//! Columns are positional; the header row is read and ignored. Row-level
//! problems are logged and recovered, file-level problems abort the run.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::errors::AnalysisError;
use crate::models::Post;

/// Number of positional columns a complete row carries.
pub const EXPECTED_FIELDS: usize = 18;

/// Opens `path` and loads every post in source order.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, AnalysisError> {
    let file = std::fs::File::open(path).map_err(|e| AnalysisError::Input {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    parse_posts(file, path)
}

/// Parses CSV text into posts. `path` is only used for diagnostics.
pub fn parse_posts<R: Read>(source: R, path: &Path) -> Result<Vec<Post>, AnalysisError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let input_error = |source: csv::Error| AnalysisError::Input {
        path: path.to_path_buf(),
        source,
    };

    let mut header = StringRecord::new();
    if !reader.read_record(&mut header).map_err(input_error)? {
        return Err(AnalysisError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut posts = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) if e.is_io_error() => return Err(input_error(e)),
            Err(e) => {
                warn!("Skipping unreadable row: {e}");
                skipped += 1;
                continue;
            }
        };

        if record.len() < EXPECTED_FIELDS {
            warn!(
                "Row at line {} has {} of {} fields; missing fields default to empty/0",
                record.position().map_or(0, |p| p.line()),
                record.len(),
                EXPECTED_FIELDS
            );
        }

        posts.push(post_from_record(&record));
    }

    info!(
        "Loaded {} posts from {} ({} rows skipped)",
        posts.len(),
        path.display(),
        skipped
    );

    Ok(posts)
}

/// Fallback rule for counter cells: a non-negative integer parses as itself,
/// anything else (empty, `N/A`, negative, decimal) counts as 0.
pub fn parse_counter(raw: &str) -> u64 {
    raw.parse::<u64>().unwrap_or(0)
}

fn post_from_record(record: &StringRecord) -> Post {
    let text = |i: usize| record.get(i).unwrap_or_default().to_string();
    let counter = |i: usize| parse_counter(record.get(i).unwrap_or_default());

    Post {
        title: text(0),
        format: text(1),
        release_time: text(2),
        tags: text(3),
        radar_chart: text(4),
        views: counter(5),
        likes: counter(6),
        collects: counter(7),
        comments: counter(8),
        follower_growth: counter(9),
        shares: counter(10),
        traffic_source: text(11),
        female_percentage: text(12),
        age_25_34_percentage: text(13),
        age_18_24_percentage: text(14),
        overseas_percentage: text(15),
        interest_distribution: text(16),
        growth_strategy: text(17),
    }
}
