//! Diesel-backed [`LoginService`].
//!
//! Authenticates the fixture credentials and makes sure the user row exists,
//! so business memberships seeded for that user resolve.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;
use tracing::info;

use crate::domain::ports::{LoginService, authenticate_fixture};
use crate::domain::{Error, LoginCredentials, UserId};

use super::models::NewUserRow;
use super::pool::DbPool;
use super::schema::users;

/// `LoginService` that records authenticated users in PostgreSQL.
#[derive(Clone)]
pub struct DieselLoginService {
    pool: DbPool,
}

impl DieselLoginService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn ensure_user_exists(&self, user_id: &UserId) -> Result<(), Error> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| Error::service_unavailable(err.into_message()))?;
        let inserted = diesel::insert_into(users::table)
            .values(NewUserRow {
                id: user_id.as_ref(),
            })
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(|err| Error::internal(format!("record user: {err}")))?;
        if inserted > 0 {
            info!(user_id = %user_id, "recorded first login");
        }
        Ok(())
    }
}

#[async_trait]
impl LoginService for DieselLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let user_id = authenticate_fixture(credentials)?;
        self.ensure_user_exists(&user_id).await?;
        Ok(user_id)
    }
}
