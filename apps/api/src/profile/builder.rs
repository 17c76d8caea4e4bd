//! Candidate Profile Builder — one pass over a candidate's postmeta rows.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::postmeta::PostmetaRow;
use crate::profile::assemble::assemble;
use crate::profile::decode::decode;
use crate::profile::fields::{classify, FieldFamily, IdentityField};
use crate::profile::models::{CandidateProfile, EducationEntry, ExperienceEntry};

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("Candidate is missing one or more mandatory fields (name, email, phone)")]
    Incomplete { missing: Vec<&'static str> },
}

/// What the profile boundary hands back: the profile itself, or a bare
/// `{"error": "..."}` object. Callers tell them apart by shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProfileOutcome {
    Profile(CandidateProfile),
    Error { error: String },
}

/// Builds the profile, converting a build failure into the error shape.
pub fn extract_profile(rows: &[PostmetaRow]) -> ProfileOutcome {
    match build(rows) {
        Ok(profile) => ProfileOutcome::Profile(profile),
        Err(e) => ProfileOutcome::Error {
            error: e.to_string(),
        },
    }
}

/// Builds a `CandidateProfile` from every row fetched for one candidate.
///
/// Identity rows overwrite earlier ones; education and experience rows are
/// buffered and only assembled once name, email and phone are confirmed.
pub fn build(rows: &[PostmetaRow]) -> Result<CandidateProfile, ProfileError> {
    let mut name = None;
    let mut email = None;
    let mut phone = None;
    let mut skills = Vec::new();
    let mut education_rows = Vec::new();
    let mut experience_rows = Vec::new();

    for row in rows {
        let Some((key, value)) = row.field() else {
            continue;
        };
        match classify(key) {
            Some(FieldFamily::Identity(IdentityField::Name)) => name = Some(value.to_string()),
            Some(FieldFamily::Identity(IdentityField::Email)) => email = Some(value.to_string()),
            Some(FieldFamily::Identity(IdentityField::Phone)) => phone = Some(value.to_string()),
            Some(FieldFamily::Skills) => skills = decode(value).into_values(),
            Some(FieldFamily::Education) => education_rows.push(row),
            Some(FieldFamily::Experience) => experience_rows.push(row),
            None => {}
        }
    }

    let (name, email, phone) = match (name, email, phone) {
        (Some(name), Some(email), Some(phone)) => (name, email, phone),
        (name, email, phone) => {
            let missing: Vec<&'static str> = [("name", name), ("email", email), ("phone", phone)]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(field, _)| field)
                .collect();
            info!(?missing, "Candidate profile incomplete");
            return Err(ProfileError::Incomplete { missing });
        }
    };

    let education: Option<Vec<EducationEntry>> =
        assemble(FieldFamily::Education, &education_rows)
            .map(|entries| entries.into_iter().map(Into::into).collect());
    let experience: Option<Vec<ExperienceEntry>> =
        assemble(FieldFamily::Experience, &experience_rows)
            .map(|entries| entries.into_iter().map(Into::into).collect());

    debug!(
        skills = skills.len(),
        education_rows = education_rows.len(),
        experience_rows = experience_rows.len(),
        "Candidate profile built"
    );

    Ok(CandidateProfile {
        name,
        email,
        phone,
        skills,
        education,
        experience,
    })
}
