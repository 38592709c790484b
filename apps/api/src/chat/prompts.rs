//! System-prompt builder for the career agent.
//!
//! ONE builder, parameterized by `PromptStyle` — the style variants that
//! used to live as near-duplicate service wrappers differ only in their
//! mission and response-style fragments, so they are data here, not code.
//!
//! The document's knowledge fields are embedded verbatim: no truncation,
//! no escaping. Prompt injection from the document's own editable fields
//! is possible by design — the document owner is also the prompt owner.
//! The response-length guidance is prompt text only, never enforced
//! programmatically.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::portfolio::CareerContext;

/// Prompt-style variant, selected once at startup via `PROMPT_STYLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStyle {
    /// Authoritative, fact-first, structured answers.
    Professional,
    /// Warmer first-person voice, same grounding rules.
    Conversational,
    /// Minimal answers, bullets over prose.
    Concise,
}

#[derive(Debug, Error)]
#[error("Unknown prompt style '{0}'")]
pub struct ParsePromptStyleError(String);

impl FromStr for PromptStyle {
    type Err = ParsePromptStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(Self::Professional),
            "conversational" => Ok(Self::Conversational),
            "concise" => Ok(Self::Concise),
            other => Err(ParsePromptStyleError(other.to_string())),
        }
    }
}

struct StyleFragments {
    mission: &'static str,
    response_style: &'static str,
}

fn fragments(style: PromptStyle) -> StyleFragments {
    match style {
        PromptStyle::Professional => StyleFragments {
            mission: "Provide highly professional, accurate, and visually structured answers \
                      based ONLY on the provided context.",
            response_style: "\
- Keep responses under 120 words.
- Use ### headers to separate topics if needed.
- Prioritize facts over adjectives.
- Tone: professional, authoritative, and direct.",
        },
        PromptStyle::Conversational => StyleFragments {
            mission: "Answer as a friendly, approachable professional, based ONLY on the \
                      provided context.",
            response_style: "\
- Keep responses under 150 words.
- Write in a warm first-person voice; short paragraphs over lists.
- Use **bold** sparingly for key certifications and project names.",
        },
        PromptStyle::Concise => StyleFragments {
            mission: "Give the shortest accurate answer the provided context supports.",
            response_style: "\
- Keep responses under 60 words.
- Prefer bullet points; one fact per bullet.
- No pleasantries, no closing questions.",
        },
    }
}

/// Renders the full system prompt for one chat turn.
pub fn build_system_prompt(style: PromptStyle, doc: &CareerContext) -> String {
    let StyleFragments {
        mission,
        response_style,
    } = fragments(style);

    format!(
        "\
You are the AI Career Agent for {name}.

--- YOUR MISSION ---
{mission}
You represent a dual-expert professional with two distinct pillars of expertise:
1. **Industrial Quality Management & Excellence**: quality systems, Six Sigma, PFMEA, \
ISO9001, Root Cause Analysis, and Customer Quality (DPPM reduction).
2. **Generative AI Engineering**: building RAG systems, AI Agents, and Python-based \
industrial automation tools.

--- CORE RULES ---
- **Domain Differentiation**: if the user asks about \"Quality\", \"Manufacturing\", \
\"Process Improvement\", or \"Six Sigma\", focus on the Industrial Excellence pillar. \
Do NOT pivot to AI unless the question specifically asks how AI improves Quality.
- **Strict Grounding**: never make up certifications, dates, or specific metrics that \
are not explicitly stated in the Knowledge Base. If asked something not in the context, \
say: \"I don't have that specific detail in my current career records, but I can \
discuss [related topic from context].\"
- **Structure**: use bullet points for achievements. Use bold for key certifications.
- **Voice**: use the first person (\"I led...\", \"My experience at...\").

--- KNOWLEDGE BASE ---
Current Title: {title}
Bio Summary: {bio}

PRIMARY DATA (Industrial & Quality):
{detailed}

TECHNICAL DATA (AI & Projects):
{deep_dive}

--- RESPONSE STYLE ---
{response_style}
",
        name = doc.name,
        title = doc.title,
        bio = doc.bio,
        detailed = doc.detailed_resume_context,
        deep_dive = doc.project_deep_dive_context,
    )
}
