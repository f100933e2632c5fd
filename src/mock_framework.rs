//! Scripted product and order collections for client tests.
//!
//! `ProductClient` and `OrderClient` tests hand the client a
//! [`ResourceClient`] whose requests land on a receiver held by the test.
//! The `expect_*` helpers pop the next request, check its kind and return its
//! payload plus the reply channel, so a test can assert the query a repository
//! built (filter, sort, paging) and answer with whatever documents it needs.

use crate::actor_framework::{Entity, FindQuery, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// A collection client with no actor behind it.
///
/// Wrap the client in `ProductClient::new` or `OrderClient::new`; every
/// request it sends shows up on the returned receiver.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetMany request
pub async fn expect_get_many<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(Vec<T::Id>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request
pub async fn expect_find<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(FindQuery<T::Filter>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Patch, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewOrder, Order};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Order>(10);

        let create_task = tokio::spawn(async move { client.create(NewOrder::new("test@example.com", ["p1"])).await });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.buyer_email.as_deref(), Some("test@example.com"));
        let order = Order::from_fields("order_1".to_string(), params).unwrap();
        responder.send(Ok(order.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(order));
    }
}
