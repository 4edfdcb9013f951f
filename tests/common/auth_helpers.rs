//! Authentication test helpers
//!
//! Creates users directly in the store and issues tokens signed with the
//! same secret the test server verifies against.

use sqlx::PgPool;
use uuid::Uuid;

use devlink::backend::auth::avatar::gravatar_url;
use devlink::backend::auth::sessions::create_token;
use devlink::backend::auth::users::create_user;

/// JWT secret shared by the test server and helper-issued tokens
pub const TEST_JWT_SECRET: &str = "devlink-test-secret";

/// A user created directly in the store, with a live token
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    /// Raw JWT, without the `"Bearer "` prefix
    pub token: String,
}

/// Create a test user in the database
pub async fn create_test_user(pool: &PgPool, name: &str, email: &str, password: &str) -> TestUser {
    let password_hash =
        bcrypt::hash(password, bcrypt::DEFAULT_COST).expect("failed to hash test password");
    let avatar = gravatar_url(email);

    let user = create_user(pool, name, email, &avatar, &password_hash)
        .await
        .expect("failed to create test user");

    let token = create_token(TEST_JWT_SECRET, user.id, &user.name, &user.avatar)
        .expect("failed to create test token");

    TestUser {
        id: user.id,
        name: user.name,
        email: user.email,
        password: password.to_string(),
        token,
    }
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(pool: &PgPool) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(pool, "Test User", &email, "password123").await
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// A handle no other test will have claimed
pub fn unique_handle() -> String {
    format!("dev-{}", Uuid::new_v4().simple())
}
