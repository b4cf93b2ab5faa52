use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Payloads, and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
    fn on_delete(&self) -> Result<(), String> {
        Ok(())
    }

    /// Handle a custom domain-specific action. An `Err` leaves the entity untouched.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Failures of the generic actor layer. Clients translate these into their domain errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<(T::ActionResult, T)>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    // insertion order, so List is stable
    order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let id = (self.next_id_fn)();
                    let result = T::from_create(id.clone(), payload).and_then(|mut item| {
                        item.on_create()?;
                        Ok(item)
                    });
                    match result {
                        Ok(item) => {
                            debug!(id = %id, "Item created");
                            self.store.insert(id.clone(), item.clone());
                            self.order.push(id);
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item
                            .on_update(patch)
                            .map(|_| item.clone())
                            .map_err(FrameworkError::Rejected),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let result = match self.store.get(&id) {
                        Some(item) => item.on_delete().map_err(FrameworkError::Rejected),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    if result.is_ok() {
                        self.store.remove(&id);
                        self.order.retain(|existing| existing != &id);
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => {
                            // Work on a copy so a rejected action never leaves partial state.
                            let mut candidate = item.clone();
                            match candidate.handle_action(action) {
                                Ok(outcome) => {
                                    *item = candidate;
                                    Ok((outcome, item.clone()))
                                }
                                Err(e) => Err(FrameworkError::Rejected(e)),
                            }
                        }
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        debug!("Resource actor stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Manual impl: a derive would require `T: Clone` on the bound too.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    /// Runs a domain action and returns its outcome together with the entity's new state.
    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<(T::ActionResult, T), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
