use tracing::{debug, instrument};
use crate::domain::{Role, User, UserCreate, UserPatch};
use crate::user_actor::UserError;
use crate::actor_framework::ResourceClient;

/// Client for the user directory.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, user: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        Ok(self.inner.create(user).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: String, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    /// Like `get_user`, but an unknown id is an error.
    pub async fn require_user(&self, id: String) -> Result<User, UserError> {
        self.get_user(id.clone()).await?.ok_or(UserError::NotFound(id))
    }

    /// First registered user holding `role`.
    #[instrument(skip(self))]
    pub async fn user_id_by_role(&self, role: Role) -> Result<Option<String>, UserError> {
        let users = self.list_users().await?;
        Ok(users.into_iter().find(|u| u.role == role).map(|u| u.id))
    }
}
