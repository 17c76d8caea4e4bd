// Resume generation: profile JSON → prompt → Claude → bullet clean-up.
// All LLM calls go through llm_client — no direct Anthropic SDK calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
