//! Field-key classification for postmeta rows.
//!
//! Every `meta_key` is classified exactly once into a `FieldFamily`; the
//! builder and assembler match on the tag instead of re-checking prefixes.

const EDUCATION_PREFIX: &str = "jobsearch_field_edu";
const EXPERIENCE_PREFIX: &str = "jobsearch_field_exp";
const SKILLS_KEY: &str = "jobsearch_cand_skills";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Name,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFamily {
    Identity(IdentityField),
    Skills,
    Education,
    Experience,
}

/// One repeating column inside an education or experience family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubField {
    Title,
    Organization,
    Description,
    StartDate,
    EndDate,
    Present,
}

impl SubField {
    pub const ALL: [SubField; 6] = [
        SubField::Title,
        SubField::Organization,
        SubField::Description,
        SubField::StartDate,
        SubField::EndDate,
        SubField::Present,
    ];
}

/// Classifies a `meta_key`. `None` means the row is irrelevant to the profile.
pub fn classify(key: &str) -> Option<FieldFamily> {
    match key {
        "member_display_name" => Some(FieldFamily::Identity(IdentityField::Name)),
        "email" | "user_email_field" => Some(FieldFamily::Identity(IdentityField::Email)),
        "user_phone" | "jobsearch_field_user_phone" => {
            Some(FieldFamily::Identity(IdentityField::Phone))
        }
        SKILLS_KEY => Some(FieldFamily::Skills),
        k if k.starts_with(EDUCATION_PREFIX) => Some(FieldFamily::Education),
        k if k.starts_with(EXPERIENCE_PREFIX) => Some(FieldFamily::Experience),
        _ => None,
    }
}

/// Maps a key already classified into `family` to its sub-field.
/// Family keys with no sub-field (e.g. the `_hiden` date mirrors) return `None`.
pub fn sub_field(family: FieldFamily, key: &str) -> Option<SubField> {
    let suffix = match family {
        FieldFamily::Education => key.strip_prefix("jobsearch_field_education_")?,
        FieldFamily::Experience => key.strip_prefix("jobsearch_field_experience_")?,
        _ => return None,
    };

    match (family, suffix) {
        (_, "title") => Some(SubField::Title),
        (FieldFamily::Education, "academy") => Some(SubField::Organization),
        (FieldFamily::Experience, "company") => Some(SubField::Organization),
        (_, "description") => Some(SubField::Description),
        (_, "start_date") => Some(SubField::StartDate),
        (_, "end_date") => Some(SubField::EndDate),
        (_, "date_prsnt") => Some(SubField::Present),
        _ => None,
    }
}
