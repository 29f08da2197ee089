#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use uuid::Uuid;

use direct_link::application::services::LinkDecodingService;
use direct_link::domain::entities::{Invoice, Order, Owner};
use direct_link::domain::link::{LinkCode, UnpackedOrderLink};
use direct_link::domain::repositories::{
    InvoiceRepository, OrderRepository, OwnerRepository, StoreProbe,
};
use direct_link::error::AppError;
use direct_link::state::AppState;

pub const ORDER_CODE: &str = "0123456789ABCDEF0123456789ABCDEF";
pub const EXPIRED_ORDER_CODE: &str = "FEDCBA9876543210FEDCBA9876543210";
pub const MISSING_ORDER_CODE: &str = "00000000000000000000000000000000";
pub const INVOICE_CODE: &str = "0123ABCD-4567-89AB-CDEF-0123456789AB";
pub const MISSING_INVOICE_CODE: &str = "FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF";

/// In-memory store standing in for PostgreSQL.
///
/// Counts every lookup so tests can prove malformed codes never reach it.
#[derive(Default)]
pub struct InMemoryStore {
    pub owners: HashMap<i64, Owner>,
    pub orders: HashMap<i64, Order>,
    pub invoices: HashMap<Uuid, Invoice>,
    /// Raw `(owner, order, registered)` triples keyed by code.
    pub order_links: HashMap<String, (i64, i64, i32)>,
    pub lookups: AtomicUsize,
    pub offline: AtomicBool,
}

impl InMemoryStore {
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn touch(&self) -> Result<(), AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::unavailable("Data store unavailable", json!({})));
        }
        Ok(())
    }
}

/// Store seeded with one registered owner, an order link, an expired order
/// link and an invoice.
pub fn seeded_store() -> Arc<InMemoryStore> {
    let mut store = InMemoryStore::default();

    store.owners.insert(
        42,
        Owner::new(42, "Acme".to_string(), true, Utc::now()),
    );
    store
        .orders
        .insert(7, Order::new(7, 42, "A-0007".to_string(), Utc::now()));

    let invoice_id = Uuid::try_parse(INVOICE_CODE).unwrap();
    store.invoices.insert(
        invoice_id,
        Invoice::new(invoice_id, 42, 12_500, "EUR".to_string(), Utc::now()),
    );

    store.order_links.insert(ORDER_CODE.to_string(), (42, 7, 1));
    store
        .order_links
        .insert(EXPIRED_ORDER_CODE.to_string(), (-2, -2, 1));

    Arc::new(store)
}

#[async_trait]
impl OwnerRepository for InMemoryStore {
    async fn load(&self, owner_id: i64) -> Result<Owner, AppError> {
        self.touch()?;
        self.owners
            .get(&owner_id)
            .cloned()
            .ok_or_else(|| AppError::internal("Referenced record is missing", json!({})))
    }

    async fn find_by_invoice(&self, invoice: &Invoice) -> Result<Owner, AppError> {
        OwnerRepository::load(self, invoice.client_id).await
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn unpack_code(&self, code: &LinkCode) -> Result<UnpackedOrderLink, AppError> {
        self.touch()?;
        let (owner, order, registered) = self
            .order_links
            .get(code.as_str())
            .copied()
            .unwrap_or((-1, -1, 0));
        Ok(UnpackedOrderLink::from_raw(owner, order, registered))
    }

    async fn load(&self, owner: &Owner, order_id: i64) -> Result<Order, AppError> {
        self.touch()?;
        self.orders
            .get(&order_id)
            .filter(|o| o.owner_id == owner.id)
            .cloned()
            .ok_or_else(|| AppError::internal("Referenced record is missing", json!({})))
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryStore {
    async fn find_by_code(&self, id: Uuid) -> Result<Option<Invoice>, AppError> {
        self.touch()?;
        Ok(self.invoices.get(&id).cloned())
    }
}

#[async_trait]
impl StoreProbe for InMemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::unavailable("Data store unavailable", json!({})));
        }
        Ok(())
    }
}

pub fn create_decoding_service(store: Arc<InMemoryStore>) -> LinkDecodingService {
    LinkDecodingService::new(store.clone(), store.clone(), store)
}

pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    AppState::new(
        Arc::new(create_decoding_service(store.clone())),
        store,
    )
}
