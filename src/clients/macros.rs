/// Lookup and delete are identical for every collection client; generate them.
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty) => {
        impl $client_name {
            /// Fetches by id. A missing id is `Ok(None)`, not an error.
            #[tracing::instrument(skip(self))]
            pub async fn get(&self, id: String) -> Result<Option<$entity>, $error> {
                tracing::debug!("Sending request");
                self.inner.get(id).await.map_err(<$error>::from)
            }

            /// Deletes by id. Reports `deleted_count == 0` when nothing matched.
            #[tracing::instrument(skip(self))]
            pub async fn destroy(&self, id: String) -> Result<$crate::actor_framework::DeleteResult, $error> {
                tracing::debug!("Sending request");
                let result = self.inner.delete(id).await.map_err(<$error>::from)?;
                tracing::info!(deleted_count = result.deleted_count, "Delete acknowledged");
                Ok(result)
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty) => {
        impl_client_new!($client_name, $entity);
        impl_client_methods!($client_name, $entity, $error);
    };
}
