// LLM prompt constants for resume generation.

pub const RESUME_SYSTEM: &str = "\
You are an experienced resume writer. \
You write only from the candidate data you are given: never invent employers, \
dates, degrees, or metrics. \
Respond with the finished resume as plain text, with no preamble or commentary.";

/// Resume prompt template. Replace `{candidate_json}` before sending.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Here is a candidate's profile as JSON:

{candidate_json}

Write a one-page resume that presents this candidate at their best.

Use these parts of the profile:
- Contact: name, phone, email.
- Skills: separate technical skills from interpersonal ones where the list allows.
- Experience: company, title, and duration for every entry, followed by achievement bullets.
  Quantify results with numbers or percentages wherever the description supports it.
- Education: university, degree, and year, plus relevant coursework or projects when described.

Weave transferable skills into the experience bullets instead of listing them in a section of
their own. Do not add "Additional Information" or "Suggestions" sections.

Formatting:
- Clear section headings.
- Bullet points for achievements, each starting with a strong action verb.
- No markdown emphasis, tables, or code fences.

Proofread for grammar and spelling before answering."#;
