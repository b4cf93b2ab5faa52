use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserPatch};

impl Entity for User {
    type Id = String;
    type CreatePayload = UserCreate;
    type Patch = UserPatch;
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new User from registration parameters.
    ///
    /// # Errors
    /// Rejects an empty display name.
    fn from_create(id: String, payload: UserCreate) -> Result<Self, String> {
        if payload.name.trim().is_empty() {
            return Err("User name required".to_string());
        }
        Ok(Self {
            id,
            name: payload.name,
            role: payload.role,
        })
    }

    /// Renames the user. A blank name is rejected like at registration.
    fn on_update(&mut self, patch: UserPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err("User name required".to_string());
            }
            self.name = name;
        }
        Ok(())
    }

    /// Users have no custom actions.
    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
