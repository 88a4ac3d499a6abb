use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserChanges;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Existence and uniqueness checks always run before any mutation, and the
/// password hash is cleared as the last step before a user is returned.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hasher and token codec
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, UserError> {
        self.authenticator
            .hash_password(password)
            .map_err(|e| UserError::Hashing(e.to_string()))
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(
        &self,
        command: CreateUserCommand,
    ) -> Result<AuthenticatedUser, UserError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self.hash_password(command.password.as_str())?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash: Some(password_hash),
        };

        let created_user = self.repository.create(user).await?;

        let token = self
            .authenticator
            .issue_token(created_user.id)
            .map_err(|e| UserError::TokenIssuance(e.to_string()))?;

        tracing::info!(user_id = %created_user.id, "User created");

        Ok(AuthenticatedUser {
            user: created_user.without_password(),
            token,
        })
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedUser, UserError> {
        let user = self
            .repository
            .find_by_email(&command.email)
            .await?
            .ok_or_else(|| UserError::NotFound(command.email.to_string()))?;

        let stored_hash = user.password_hash.as_deref().unwrap_or_default();

        let result = self
            .authenticator
            .authenticate(command.password.as_str(), stored_hash, user.id)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(user_id = %user.id, "Login rejected");
                    UserError::InvalidCredentials
                }
                AuthenticationError::JwtError(err) => UserError::TokenIssuance(err.to_string()),
            })?;

        Ok(AuthenticatedUser {
            user: user.without_password(),
            token: result.access_token,
        })
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn decode_token(&self, token: &str) -> Result<User, UserError> {
        let subject = self.authenticator.decode_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Token rejected");
            UserError::InvalidToken(e.to_string())
        })?;

        // A validly signed subject that names no possible user is an unknown user.
        let id = UserId::from_string(&subject).map_err(|_| UserError::NotFound(subject.clone()))?;

        self.get_user(&id).await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        self.get_user(id).await?;

        let password_hash = command
            .password
            .map(|password| self.hash_password(password.as_str()))
            .transpose()?;

        let changes = UserChanges {
            name: command.name,
            email: command.email,
            password_hash,
        };

        let updated_user = self.repository.update(id, changes).await?;

        Ok(updated_user.without_password())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.get_user(id).await?;

        self.repository.delete(id).await?;

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
