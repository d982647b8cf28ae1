use super::IUserRepo;
use event_notifier_domain::{User, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    email: Option<String>,
    display_name: Option<String>,
}

impl From<UserRaw> for User {
    fn from(u: UserRaw) -> Self {
        Self {
            id: u.user_uid.into(),
            email: u.email,
            display_name: u.display_name,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn find(&self, user_id: &ID) -> Option<User> {
        match sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users AS u
            WHERE u.user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(user) => user.map(User::from),
            Err(e) => {
                error!("Unable to look up user {}: {:?}", user_id, e);
                None
            }
        }
    }
}
