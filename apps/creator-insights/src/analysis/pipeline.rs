//! Post analysis pipeline — one sequential pass per process.
//!
//! Flow: load_posts → rank_top_posts → build_analysis_prompt →
//!       completion call → write_analysis.
//!
//! Each stage consumes the previous stage's output by value. The first
//! error ends the run; nothing is written unless every earlier stage succeeded.

use std::fmt;
use std::path::PathBuf;

use tracing::info;

use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::scoring::{rank_top_posts, TOP_N};
use crate::config::Config;
use crate::errors::AnalysisError;
use crate::ingest::load_posts;
use crate::llm_client::CompletionService;
use crate::output::write_analysis;

/// Pipeline states, in execution order.
/// `Configuring` precedes the pipeline proper and covers credential checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configuring,
    Loading,
    Ranking,
    PromptBuilding,
    Requesting,
    Writing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Configuring => "configuring",
            Stage::Loading => "loading",
            Stage::Ranking => "ranking",
            Stage::PromptBuilding => "prompt building",
            Stage::Requesting => "requesting",
            Stage::Writing => "writing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub posts_loaded: usize,
    pub posts_analyzed: usize,
    pub output_path: PathBuf,
}

/// Runs the full analysis for `config` using `llm` for the completion step.
pub async fn run(
    config: &Config,
    llm: &dyn CompletionService,
) -> Result<RunSummary, AnalysisError> {
    // Loading
    info!("Stage {}: reading {}", Stage::Loading, config.input_path.display());
    let posts = load_posts(&config.input_path)?;
    let posts_loaded = posts.len();

    // Ranking
    let top_posts = rank_top_posts(posts, TOP_N);
    info!(
        "Stage {}: selected {} of {} posts",
        Stage::Ranking,
        top_posts.len(),
        posts_loaded
    );
    if top_posts.is_empty() {
        return Err(AnalysisError::NoData);
    }

    // PromptBuilding
    let prompt = build_analysis_prompt(&top_posts);
    info!(
        "Stage {}: prompt is {} bytes",
        Stage::PromptBuilding,
        prompt.len()
    );

    // Requesting
    info!("Stage {}: sending analysis request", Stage::Requesting);
    let analysis = llm.complete(&prompt).await?;

    // Writing
    info!("Stage {}: saving analysis", Stage::Writing);
    write_analysis(&config.output_path, &analysis)?;

    info!(
        "Stage {}: analysis of top {} posts saved to {}",
        Stage::Done,
        top_posts.len(),
        config.output_path.display()
    );

    Ok(RunSummary {
        posts_loaded,
        posts_analyzed: top_posts.len(),
        output_path: config.output_path.clone(),
    })
}
