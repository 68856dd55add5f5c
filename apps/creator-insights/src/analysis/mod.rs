// Ranking, prompt rendering and the end-to-end run.
// The completion call itself lives in llm_client.

pub mod pipeline;
pub mod prompts;
pub mod scoring;
