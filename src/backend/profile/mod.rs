/**
 * Profile Documents
 *
 * The profile aggregate: one document per user embedding the experience and
 * education lists and the social sub-document. The mutation helpers here are
 * pure; handlers load a profile, splice it in memory, and persist the whole
 * document back (last write wins).
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Database operations for profiles
pub mod db;

/// HTTP handlers for the profile endpoints
pub mod handlers;

pub use handlers::{
    add_education, add_experience, all_profiles, delete_account, own_profile, profile_by_handle,
    profile_by_user, remove_education, remove_experience, upsert_profile,
};

/// Owning user's identity, populated into every profile response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileOwner {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

/// Social media links sub-document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Work experience entry, most recent first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Education entry, most recent first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Profile document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: Uuid,
    /// Populated owner identity; the `user_id` column in storage
    pub user: ProfileOwner,
    pub handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub date: DateTime<Utc>,
}

/// Upsert request body
///
/// `handle`, `status`, and `skills` are required on every upsert; the rest
/// only overwrite the stored value when provided and non-empty.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub status: String,
    /// Comma-delimited; split into the ordered skills list
    #[serde(default)]
    pub skills: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// Experience request body
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExperienceInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub from: String,
    pub location: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Education request body
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EducationInput {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub fieldofstudy: String,
    #[serde(default)]
    pub from: String,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Treat a missing or blank optional field as absent
fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Split a comma-delimited skills string into the ordered list
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl ExperienceEntry {
    pub fn new(input: &ExperienceInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title.trim().to_string(),
            company: input.company.trim().to_string(),
            location: non_empty(&input.location),
            from: input.from.trim().to_string(),
            to: non_empty(&input.to),
            current: input.current,
            description: non_empty(&input.description),
        }
    }
}

impl EducationEntry {
    pub fn new(input: &EducationInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            school: input.school.trim().to_string(),
            degree: input.degree.trim().to_string(),
            fieldofstudy: input.fieldofstudy.trim().to_string(),
            from: input.from.trim().to_string(),
            to: non_empty(&input.to),
            current: input.current,
            description: non_empty(&input.description),
        }
    }
}

impl Profile {
    /// Create a fresh profile for `owner` from an upsert body
    pub fn create(owner: ProfileOwner, input: &ProfileInput) -> Self {
        let mut profile = Self {
            id: Uuid::new_v4(),
            user: owner,
            handle: String::new(),
            company: None,
            website: None,
            location: None,
            bio: None,
            status: String::new(),
            githubusername: None,
            skills: Vec::new(),
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            date: Utc::now(),
        };
        profile.apply(input);
        profile
    }

    /// Apply an upsert body as a partial update
    ///
    /// Required fields always overwrite; optional fields only overwrite when
    /// provided and non-empty, so an omitted field leaves the stored value
    /// untouched. The social sub-document is rebuilt from the input whole.
    pub fn apply(&mut self, input: &ProfileInput) {
        self.handle = input.handle.trim().to_string();
        self.status = input.status.trim().to_string();
        self.skills = split_skills(&input.skills);

        if let Some(company) = non_empty(&input.company) {
            self.company = Some(company);
        }
        if let Some(website) = non_empty(&input.website) {
            self.website = Some(website);
        }
        if let Some(location) = non_empty(&input.location) {
            self.location = Some(location);
        }
        if let Some(bio) = non_empty(&input.bio) {
            self.bio = Some(bio);
        }
        if let Some(githubusername) = non_empty(&input.githubusername) {
            self.githubusername = Some(githubusername);
        }

        self.social = SocialLinks {
            youtube: non_empty(&input.youtube),
            twitter: non_empty(&input.twitter),
            facebook: non_empty(&input.facebook),
            linkedin: non_empty(&input.linkedin),
            instagram: non_empty(&input.instagram),
        };
    }

    /// Prepend an experience entry (most recent first)
    pub fn add_experience(&mut self, entry: ExperienceEntry) {
        self.experience.insert(0, entry);
    }

    /// Remove an experience entry by id; an unknown id is a silent no-op
    pub fn remove_experience(&mut self, entry_id: Uuid) {
        self.experience.retain(|e| e.id != entry_id);
    }

    /// Prepend an education entry (most recent first)
    pub fn add_education(&mut self, entry: EducationEntry) {
        self.education.insert(0, entry);
    }

    /// Remove an education entry by id; an unknown id is a silent no-op
    pub fn remove_education(&mut self, entry_id: Uuid) {
        self.education.retain(|e| e.id != entry_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn owner() -> ProfileOwner {
        ProfileOwner {
            id: Uuid::new_v4(),
            name: "John Doe".to_string(),
            avatar: "https://avatar".to_string(),
        }
    }

    fn base_input() -> ProfileInput {
        ProfileInput {
            handle: "johndoe".to_string(),
            status: "Developer".to_string(),
            skills: "Rust, SQL,  Tokio".to_string(),
            company: Some("Initech".to_string()),
            ..ProfileInput::default()
        }
    }

    #[test]
    fn test_split_skills_trims_and_drops_empties() {
        assert_eq!(split_skills("Rust, SQL,  Tokio"), vec!["Rust", "SQL", "Tokio"]);
        assert_eq!(split_skills("Rust,,SQL,"), vec!["Rust", "SQL"]);
        assert!(split_skills("  ").is_empty());
    }

    #[test]
    fn test_create_sets_required_and_optional_fields() {
        let profile = Profile::create(owner(), &base_input());
        assert_eq!(profile.handle, "johndoe");
        assert_eq!(profile.status, "Developer");
        assert_eq!(profile.skills, vec!["Rust", "SQL", "Tokio"]);
        assert_eq!(profile.company.as_deref(), Some("Initech"));
        assert_eq!(profile.website, None);
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn test_apply_leaves_omitted_optional_fields_untouched() {
        let mut profile = Profile::create(owner(), &base_input());

        // Second upsert without a company does not clear the stored one
        let update = ProfileInput {
            handle: "johndoe".to_string(),
            status: "Senior Developer".to_string(),
            skills: "Rust".to_string(),
            ..ProfileInput::default()
        };
        profile.apply(&update);

        assert_eq!(profile.status, "Senior Developer");
        assert_eq!(profile.skills, vec!["Rust"]);
        assert_eq!(profile.company.as_deref(), Some("Initech"));
    }

    #[test]
    fn test_apply_rebuilds_social_links_whole() {
        let mut input = base_input();
        input.twitter = Some("https://twitter.com/johndoe".to_string());
        let mut profile = Profile::create(owner(), &input);
        assert!(profile.social.twitter.is_some());

        // An upsert without twitter drops it; social is not merged
        profile.apply(&base_input());
        assert_eq!(profile.social, SocialLinks::default());
    }

    #[test]
    fn test_experience_is_prepended() {
        let mut profile = Profile::create(owner(), &base_input());

        let first = ExperienceEntry::new(&ExperienceInput {
            title: "Engineer".to_string(),
            company: "Initech".to_string(),
            from: "2019-04-01".to_string(),
            ..ExperienceInput::default()
        });
        let second = ExperienceEntry::new(&ExperienceInput {
            title: "Senior Engineer".to_string(),
            company: "Initech".to_string(),
            from: "2021-04-01".to_string(),
            ..ExperienceInput::default()
        });

        profile.add_experience(first.clone());
        profile.add_experience(second.clone());

        assert_eq!(profile.experience, vec![second, first]);
    }

    #[test]
    fn test_remove_experience_by_id() {
        let mut profile = Profile::create(owner(), &base_input());
        let entry = ExperienceEntry::new(&ExperienceInput {
            title: "Engineer".to_string(),
            company: "Initech".to_string(),
            from: "2019-04-01".to_string(),
            ..ExperienceInput::default()
        });
        profile.add_experience(entry.clone());

        profile.remove_experience(entry.id);
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_a_no_op() {
        let mut profile = Profile::create(owner(), &base_input());
        let entry = ExperienceEntry::new(&ExperienceInput {
            title: "Engineer".to_string(),
            company: "Initech".to_string(),
            from: "2019-04-01".to_string(),
            ..ExperienceInput::default()
        });
        profile.add_experience(entry.clone());

        profile.remove_experience(Uuid::new_v4());
        assert_eq!(profile.experience, vec![entry]);

        profile.remove_education(Uuid::new_v4());
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_entry_inputs_are_trimmed() {
        let entry = EducationEntry::new(&EducationInput {
            school: "  State University ".to_string(),
            degree: "BSc".to_string(),
            fieldofstudy: "CS".to_string(),
            from: "2015-09-01".to_string(),
            to: Some("   ".to_string()),
            ..EducationInput::default()
        });
        assert_eq!(entry.school, "State University");
        assert_eq!(entry.to, None);
    }
}
