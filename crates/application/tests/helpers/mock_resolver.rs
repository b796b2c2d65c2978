#![allow(dead_code)]

use async_trait::async_trait;
use cinder_dns_application::ports::Resolver;
use cinder_dns_domain::{Answer, DnsError, Query};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{Record, RecordType};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock Resolver
// ============================================================================

type AnswerKey = (String, RecordType);

/// Scripted resolver for exercising the derivation layer.
///
/// Answers are configured per (host, record type); anything else gets an
/// NXDOMAIN answer. Every call is counted so tests can assert whether a
/// query was issued at all.
#[derive(Clone)]
pub struct MockResolver {
    answers: Arc<RwLock<HashMap<AnswerKey, (ResponseCode, Vec<Record>)>>>,
    calls: Arc<AtomicUsize>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Script an answer for a specific host and record type.
    pub async fn set_answer(
        &self,
        host: &str,
        record_type: RecordType,
        response_code: ResponseCode,
        records: Vec<Record>,
    ) {
        self.answers
            .write()
            .await
            .insert((host.to_string(), record_type), (response_code, records));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resolver for MockResolver {
    async fn resolve(&self, query: &Query) -> Result<Answer, DnsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let key = (query.name.to_utf8(), query.record_type);
        let answers = self.answers.read().await;
        let answer = match answers.get(&key) {
            Some((response_code, records)) => Answer::builder(query.clone())
                .response_code(*response_code)
                .records(records.iter().cloned())
                .build(),
            None => Answer::builder(query.clone())
                .response_code(ResponseCode::NXDomain)
                .build(),
        };
        Ok(answer)
    }
}
