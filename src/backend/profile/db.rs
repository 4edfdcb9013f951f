/**
 * Profile Database Operations
 *
 * Loads and stores profile documents. Every read joins the owning user so
 * responses carry the populated {id, name, avatar}; every write stores the
 * embedded lists back whole (JSONB columns, last write wins).
 */

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{EducationEntry, ExperienceEntry, Profile, ProfileOwner, SocialLinks};

/// Row shape shared by all profile reads
#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    user_id: Uuid,
    handle: String,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    status: String,
    githubusername: Option<String>,
    skills: Vec<String>,
    social: Json<SocialLinks>,
    experience: Json<Vec<ExperienceEntry>>,
    education: Json<Vec<EducationEntry>>,
    date: DateTime<Utc>,
    owner_name: String,
    owner_avatar: String,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            user: ProfileOwner {
                id: row.user_id,
                name: row.owner_name,
                avatar: row.owner_avatar,
            },
            handle: row.handle,
            company: row.company,
            website: row.website,
            location: row.location,
            bio: row.bio,
            status: row.status,
            githubusername: row.githubusername,
            skills: row.skills,
            social: row.social.0,
            experience: row.experience.0,
            education: row.education.0,
            date: row.date,
        }
    }
}

const SELECT_PROFILE: &str = r#"
    SELECT p.id, p.user_id, p.handle, p.company, p.website, p.location, p.bio,
           p.status, p.githubusername, p.skills, p.social, p.experience,
           p.education, p.date,
           u.name AS owner_name, u.avatar AS owner_avatar
    FROM profiles p
    JOIN users u ON u.id = p.user_id
"#;

/// Get the profile owned by a user
pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProfileRow>(&format!("{SELECT_PROFILE} WHERE p.user_id = $1"))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Profile::from))
}

/// Get a profile by its handle
pub async fn find_by_handle(pool: &PgPool, handle: &str) -> Result<Option<Profile>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProfileRow>(&format!("{SELECT_PROFILE} WHERE p.handle = $1"))
        .bind(handle)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Profile::from))
}

/// List all profiles, most recent first
pub async fn find_all(pool: &PgPool) -> Result<Vec<Profile>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProfileRow>(&format!("{SELECT_PROFILE} ORDER BY p.date DESC"))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Profile::from).collect())
}

/// Insert a new profile document
pub async fn insert_profile(pool: &PgPool, profile: &Profile) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO profiles (id, user_id, handle, company, website, location, bio,
                              status, githubusername, skills, social, experience,
                              education, date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        "#,
    )
    .bind(profile.id)
    .bind(profile.user.id)
    .bind(&profile.handle)
    .bind(&profile.company)
    .bind(&profile.website)
    .bind(&profile.location)
    .bind(&profile.bio)
    .bind(&profile.status)
    .bind(&profile.githubusername)
    .bind(&profile.skills)
    .bind(Json(&profile.social))
    .bind(Json(&profile.experience))
    .bind(Json(&profile.education))
    .bind(profile.date)
    .execute(pool)
    .await?;

    Ok(())
}

/// Save a mutated profile document back, whole
pub async fn save_profile(pool: &PgPool, profile: &Profile) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE profiles
        SET handle = $2, company = $3, website = $4, location = $5, bio = $6,
            status = $7, githubusername = $8, skills = $9, social = $10,
            experience = $11, education = $12
        WHERE id = $1
        "#,
    )
    .bind(profile.id)
    .bind(&profile.handle)
    .bind(&profile.company)
    .bind(&profile.website)
    .bind(&profile.location)
    .bind(&profile.bio)
    .bind(&profile.status)
    .bind(&profile.githubusername)
    .bind(&profile.skills)
    .bind(Json(&profile.social))
    .bind(Json(&profile.experience))
    .bind(Json(&profile.education))
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete the profile owned by a user
pub async fn delete_by_user(pool: &PgPool, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(())
}
