use std::sync::Arc;

use axum::extract::FromRef;

use common::types::ServiceDescriptor;

/// Router state: the business service plus the static identity of the process.
pub struct ServiceState<T> {
    pub records: Arc<T>,
    pub descriptor: &'static ServiceDescriptor,
}

impl<T> ServiceState<T> {
    pub fn new(records: Arc<T>, descriptor: &'static ServiceDescriptor) -> Self { Self { records, descriptor } }
}

// Manual impl: `T` itself need not be Clone.
impl<T> Clone for ServiceState<T> {
    fn clone(&self) -> Self { Self { records: Arc::clone(&self.records), descriptor: self.descriptor } }
}

impl<T> FromRef<ServiceState<T>> for &'static ServiceDescriptor {
    fn from_ref(state: &ServiceState<T>) -> Self { state.descriptor }
}
