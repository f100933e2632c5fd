use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::error::ValidationError;

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Filters)
// =============================================================================

/// Trait that any document type must implement to be stored by a [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Filter: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct and validate the full entity from the generated ID and the caller's fields
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, ValidationError>;

    // --- Lifecycle Hooks ---

    /// Apply a patch in place. The actor calls this on a scratch copy and only
    /// stores the result when it returns `Ok`.
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), ValidationError>;

    /// Whether this document satisfies a find filter.
    fn matches(&self, filter: &Self::Filter) -> bool;
}

/// Errors raised by the collection layer itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

/// Result ordering for [`FindQuery`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sort {
    /// Order in which documents were inserted
    #[default]
    Insertion,
    IdAscending,
}

/// Filter, sort and window for a find request.
#[derive(Debug, Clone)]
pub struct FindQuery<F> {
    pub filter: F,
    pub sort: Sort,
    pub skip: usize,
    pub limit: usize,
}

impl<F> FindQuery<F> {
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            sort: Sort::Insertion,
            skip: 0,
            limit: usize::MAX,
        }
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Acknowledgement returned by a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    Find {
        query: FindQuery<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<DeleteResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns one collection of documents and serves requests one at a time.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    insertion_order: Vec<T::Id>,
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
            insertion_order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs until every client has been dropped.
    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("Collection starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items = ids.iter().filter_map(|id| self.store.get(id).cloned()).collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Find { query, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_find(&query)));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_delete(&id)));
                }
            }
        }
        info!(documents = self.store.len(), "Collection stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        match T::from_create_params(id.clone(), params) {
            Ok(item) => {
                debug!(id = %id, "Document inserted");
                self.store.insert(id.clone(), item.clone());
                self.insertion_order.push(id);
                Ok(item)
            }
            Err(e) => {
                warn!(error = %e, "Rejected invalid document");
                Err(e.into())
            }
        }
    }

    fn handle_find(&self, query: &FindQuery<T::Filter>) -> Vec<T> {
        let mut matched: Vec<&T> = self
            .insertion_order
            .iter()
            .filter_map(|id| self.store.get(id))
            .filter(|item| item.matches(&query.filter))
            .collect();

        if query.sort == Sort::IdAscending {
            matched.sort_by(|a, b| a.id().cmp(b.id()));
        }

        let items: Vec<T> = matched
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .cloned()
            .collect();
        debug!(returned = items.len(), "Find completed");
        items
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let Some(current) = self.store.get(&id) else {
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        let mut updated = current.clone();
        if let Err(e) = updated.on_update(patch) {
            warn!(id = %id, error = %e, "Rejected invalid update");
            return Err(e.into());
        }

        self.store.insert(id, updated.clone());
        Ok(updated)
    }

    fn handle_delete(&mut self, id: &T::Id) -> DeleteResult {
        let deleted_count = match self.store.remove(id) {
            Some(_) => {
                self.insertion_order.retain(|existing| existing != id);
                1
            }
            None => 0,
        };
        DeleteResult {
            acknowledged: true,
            deleted_count,
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
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

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::GetMany { ids, respond_to }).await
    }

    pub async fn find(&self, query: FindQuery<T::Filter>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Find { query, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<DeleteResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
