use crate::actor_framework::Entity;
use crate::domain::{NewOrder, Order, OrderFilter, OrderPatch};
use crate::error::ValidationError;

impl Entity for Order {
    type Id = String;
    type CreateParams = NewOrder;
    type Patch = OrderPatch;
    type Filter = OrderFilter;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Order from the caller's fields.
    ///
    /// # Notes
    /// The order is initialized with status `CREATED` unless the caller set one.
    fn from_create_params(id: String, params: NewOrder) -> Result<Self, ValidationError> {
        Order::from_fields(id, params)
    }

    fn on_update(&mut self, patch: OrderPatch) -> Result<(), ValidationError> {
        self.apply(patch)
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter.matches(self)
    }
}
