use async_trait::async_trait;
use cinder_dns_application::ports::Resolver;
use cinder_dns_domain::{Answer, DnsError, Query};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{Record, RecordType};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Stands in for the transport resolver at the bottom of the chain.
///
/// Serves scripted records per (host, record type), NXDOMAIN otherwise,
/// and counts how many queries fell through the hosts link.
pub struct ScriptedUpstream {
    records: Mutex<HashMap<(String, RecordType), Vec<Record>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedUpstream {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn script(&self, host: &str, record_type: RecordType, records: Vec<Record>) {
        self.records
            .lock()
            .unwrap()
            .insert((host.to_string(), record_type), records);
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Default for ScriptedUpstream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resolver for ScriptedUpstream {
    async fn resolve(&self, query: &Query) -> Result<Answer, DnsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let key = (query.name.to_utf8(), query.record_type);
        let records = self.records.lock().unwrap().get(&key).cloned();
        let answer = match records {
            Some(records) => Answer::builder(query.clone()).records(records).build(),
            None => Answer::builder(query.clone())
                .response_code(ResponseCode::NXDomain)
                .build(),
        };
        Ok(answer)
    }
}
