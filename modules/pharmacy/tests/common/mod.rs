//! In-memory fakes of the remote source for panel and catalog tests.
#![allow(dead_code)] // not every test binary uses every fake

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pharmacy::{Product, ProductDraft, User, UserDraft};
use synckit::{ClientError, ResourceClient};

pub fn product(id: u64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: String::new(),
        price,
        image: String::new(),
    }
}

pub fn user(id: u64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[derive(Default)]
pub struct FakeProducts {
    pub records: Mutex<Vec<Product>>,
    pub fail_next: Mutex<Option<ClientError>>,
    pub list_calls: AtomicUsize,
    next_id: AtomicU64,
}

impl FakeProducts {
    pub fn seeded(records: Vec<Product>) -> Arc<Self> {
        let top = records.iter().map(|p| p.id).max().unwrap_or(0);
        Arc::new(Self {
            records: Mutex::new(records),
            fail_next: Mutex::new(None),
            list_calls: AtomicUsize::new(0),
            next_id: AtomicU64::new(top + 1),
        })
    }

    pub fn fail_next(&self, err: ClientError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    fn take_failure(&self) -> Option<ClientError> {
        self.fail_next.lock().unwrap().take()
    }
}

#[async_trait]
impl ResourceClient<Product> for FakeProducts {
    type Draft = ProductDraft;

    async fn list(&self) -> Result<Vec<Product>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ClientError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let item = Product {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price.value().expect("validated before the wire"),
            image: draft.image.clone(),
        };
        self.records.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: u64, draft: &ProductDraft) -> Result<Product, ClientError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut records = self.records.lock().unwrap();
        let Some(slot) = records.iter_mut().find(|p| p.id == id) else {
            return Err(ClientError::not_found(id));
        };
        slot.name = draft.name.clone();
        slot.description = draft.description.clone();
        slot.price = draft.price.value().expect("validated before the wire");
        slot.image = draft.image.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), ClientError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|p| p.id != id);
        if records.len() == before {
            return Err(ClientError::not_found(id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeUsers {
    pub records: Mutex<Vec<User>>,
    pub list_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
}

impl FakeUsers {
    pub fn seeded(records: Vec<User>) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(records),
            list_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ResourceClient<User> for FakeUsers {
    type Draft = UserDraft;

    async fn list(&self) -> Result<Vec<User>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, ClientError> {
        let mut records = self.records.lock().unwrap();
        let id = records.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let item = User {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
        };
        records.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: u64, draft: &UserDraft) -> Result<User, ClientError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.lock().unwrap();
        let Some(slot) = records.iter_mut().find(|u| u.id == id) else {
            return Err(ClientError::not_found(id));
        };
        slot.name = draft.name.clone();
        slot.email = draft.email.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), ClientError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|u| u.id != id);
        if records.len() == before {
            return Err(ClientError::not_found(id));
        }
        Ok(())
    }
}
