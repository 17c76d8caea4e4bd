use serde::{Deserialize, Serialize};

/// One reconstructed job or degree. Family-neutral: the profile converts it
/// into `EducationEntry` / `ExperienceEntry` for output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub organization: String,
    /// "January 2020 - March 2022", "January 2020 - Present", a single date, or "".
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub university: String,
    pub year: String,
    pub description: String,
}

impl From<Entry> for EducationEntry {
    fn from(entry: Entry) -> Self {
        Self {
            degree: entry.title,
            university: entry.organization,
            year: entry.duration,
            description: entry.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

impl From<Entry> for ExperienceEntry {
    fn from(entry: Entry) -> Self {
        Self {
            title: entry.title,
            company: entry.organization,
            duration: entry.duration,
            description: entry.description,
        }
    }
}

/// The normalized candidate record handed to resume generation.
/// `education` / `experience` are omitted entirely when the candidate has
/// no rows for that family; they are never serialized as empty lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceEntry>>,
}
