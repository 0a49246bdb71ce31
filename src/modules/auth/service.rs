use super::{dto::RegisterAccountDto, session::SessionId};
use crate::modules::auth::session::SESSION_DAYS_DURATION;
use anyhow::Result;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use rand_chacha::ChaCha8Rng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct AuthService {
    rng: Arc<Mutex<ChaCha8Rng>>,
    db: DatabaseConnection,
}

impl AuthService {
    pub fn new(db: DatabaseConnection, rng: ChaCha8Rng) -> Self {
        AuthService {
            db,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// creates a account with a bcrypt hashed password
    ///
    /// uniqueness of username and email is enforced by the database
    /// constraints, surfacing as a `DbErr` unique violation
    pub async fn register_account(
        &self,
        dto: RegisterAccountDto,
    ) -> Result<entity::account::Model, DbErr> {
        let password_hash =
            hash(dto.password, DEFAULT_COST).map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::account::ActiveModel {
            created_at: Set(Utc::now().into()),
            username: Set(dto.username),
            email: Set(dto.email),
            password: Set(password_hash),
            ..Default::default()
        }
        .insert(&self.db)
        .await
    }

    /// finds a account from username and plain text password, verifying the password
    ///
    /// returns `Ok(None)` both when the username is unknown and when the password
    /// does not match, callers must not be able to tell the two cases apart
    pub async fn account_from_credentials(
        &self,
        username: String,
        password: String,
    ) -> Result<Option<entity::account::Model>> {
        let maybe_account = entity::account::Entity::find()
            .filter(entity::account::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        let Some(account) = maybe_account else {
            return Ok(None);
        };

        let pass_is_valid = verify(password, &account.password)?;

        if !pass_is_valid {
            return Ok(None);
        }

        Ok(Some(account))
    }

    /// generates a new session token and creates a new session record on the DB for the account
    pub async fn new_session(
        &self,
        account_id: i32,
        client_user_agent: String,
    ) -> Result<SessionId> {
        let ses_token = SessionId::generate_new(&mut self.rng.lock().unwrap());

        let new_session = entity::session::ActiveModel {
            session_token: Set(ses_token.into_database_value()),
            created_at: Set(Utc::now().into()),
            expires_at: Set((Utc::now() + Duration::days(SESSION_DAYS_DURATION)).into()),
            user_agent: Set(client_user_agent),
            account_id: Set(account_id),
        };

        new_session.insert(&self.db).await?;

        Ok(ses_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_db;
    use rand_core::SeedableRng;

    fn register_dto(username: &str) -> RegisterAccountDto {
        RegisterAccountDto {
            username: String::from(username),
            email: format!("{}@example.com", username),
            password: String::from("Sup3r-secret"),
        }
    }

    async fn test_service() -> AuthService {
        AuthService::new(test_db().await, ChaCha8Rng::seed_from_u64(42))
    }

    #[tokio::test]
    async fn register_hashes_the_password() {
        let service = test_service().await;

        let account = service.register_account(register_dto("alice")).await.unwrap();

        assert_ne!(account.password, "Sup3r-secret");
        assert!(verify("Sup3r-secret", &account.password).unwrap());
    }

    #[tokio::test]
    async fn duplicate_usernames_are_rejected() {
        let service = test_service().await;

        service.register_account(register_dto("alice")).await.unwrap();

        let mut dup = register_dto("alice");
        dup.email = String::from("other@example.com");

        assert!(service.register_account(dup).await.is_err());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_username_are_indistinguishable() {
        let service = test_service().await;

        service.register_account(register_dto("alice")).await.unwrap();

        let wrong_pass = service
            .account_from_credentials(String::from("alice"), String::from("Wr0ng-pass"))
            .await
            .unwrap();

        let unknown_user = service
            .account_from_credentials(String::from("ghost"), String::from("Sup3r-secret"))
            .await
            .unwrap();

        assert!(wrong_pass.is_none());
        assert!(unknown_user.is_none());
    }

    #[tokio::test]
    async fn valid_credentials_return_the_account() {
        let service = test_service().await;

        service.register_account(register_dto("alice")).await.unwrap();

        let account = service
            .account_from_credentials(String::from("alice"), String::from("Sup3r-secret"))
            .await
            .unwrap()
            .expect("valid credentials should match");

        assert_eq!(account.username, "alice");
    }

    #[tokio::test]
    async fn new_session_persists_the_token() {
        let service = test_service().await;

        let account = service.register_account(register_dto("alice")).await.unwrap();

        let session_id = service
            .new_session(account.id, String::from("test agent"))
            .await
            .unwrap();

        let stored = entity::session::Entity::find_by_id(session_id.into_database_value())
            .one(&service.db)
            .await
            .unwrap()
            .expect("session should be stored");

        assert_eq!(stored.account_id, account.id);
        assert_eq!(stored.user_agent, "test agent");
    }
}
