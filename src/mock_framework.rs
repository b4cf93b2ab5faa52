//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior
//! and answer in place of the actor.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a client whose requests land on a receiver the test controls.
///
/// The test plays the actor: it inspects each request and sends back whatever
/// answer (success, rejection, missing entity) the scenario needs.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message must be a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Next message must be a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message must be a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message must be a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message must be an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<(T::ActionResult, T)>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::UserClient;
    use crate::domain::{Role, User, UserCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let create_task = tokio::spawn(async move {
            client.create_user(UserCreate::new("FreshMart", Role::Retailer)).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "FreshMart");
        let user = User {
            id: "user-3".to_string(),
            name: payload.name,
            role: payload.role,
        };
        responder.send(Ok(user.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(user));
    }

    #[tokio::test]
    async fn test_user_id_by_role_picks_first_match() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move { client.user_id_by_role(Role::Farmer).await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        let users = vec![
            User { id: "user-2".into(), name: "Global Produce Inc.".into(), role: Role::Wholesaler },
            User { id: "user-1".into(), name: "John Appleseed".into(), role: Role::Farmer },
            User { id: "user-5".into(), name: "Maria Garcia".into(), role: Role::Farmer },
        ];
        responder.send(Ok(users)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Some("user-1".to_string())));
    }
}
