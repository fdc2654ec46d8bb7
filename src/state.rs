use crate::models::RentalTable;
use std::sync::Arc;

/// The dataset is read-only after load, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RentalTable>,
}

impl AppState {
    pub fn new(table: RentalTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}
