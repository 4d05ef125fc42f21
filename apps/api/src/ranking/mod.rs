// Role relevance ranking: heuristic scoring of catalog roles against resume
// text, optional LLM re-rank of the leaders, and portal search links.
// All LLM calls go through llm_client.

pub mod catalog;
pub mod handlers;
pub mod heuristic;
pub mod prompts;
pub mod ranker;
pub mod rerank;
pub mod search_links;
