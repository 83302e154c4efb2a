#![allow(dead_code)]

use async_trait::async_trait;
use doh_gateway_application::ports::{UpstreamClient, ZoneAnswer, ZoneStore};
use doh_gateway_domain::{GatewayError, RecordKind, UpstreamReply};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockZoneStore {
    answers: Arc<RwLock<HashMap<(String, u16), ZoneAnswer>>>,
    lookups: Arc<AtomicUsize>,
}

impl MockZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, name: &str, type_code: u16, answer: ZoneAnswer) {
        self.answers
            .write()
            .unwrap()
            .insert((name.to_string(), type_code), answer);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneStore for MockZoneStore {
    async fn lookup(&self, name: &str, type_code: u16) -> Result<ZoneAnswer, GatewayError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .answers
            .read()
            .unwrap()
            .get(&(name.to_string(), type_code))
            .cloned()
            .unwrap_or_else(ZoneAnswer::miss))
    }
}

#[derive(Clone, Default)]
pub struct MockUpstreamClient {
    replies: Arc<RwLock<HashMap<String, UpstreamReply>>>,
    errors: Arc<RwLock<HashMap<String, GatewayError>>>,
    forwards: Arc<AtomicUsize>,
}

impl MockUpstreamClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reply(&self, name: &str, reply: UpstreamReply) {
        self.replies.write().unwrap().insert(name.to_string(), reply);
    }

    pub fn set_error(&self, name: &str, error: GatewayError) {
        self.errors.write().unwrap().insert(name.to_string(), error);
    }

    pub fn forward_count(&self) -> usize {
        self.forwards.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamClient for MockUpstreamClient {
    async fn forward(&self, name: &str, _kind: RecordKind) -> Result<UpstreamReply, GatewayError> {
        self.forwards.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.errors.read().unwrap().get(name).cloned() {
            return Err(err);
        }

        self.replies
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| GatewayError::Upstream(format!("No mock reply for {}", name)))
    }
}
