use async_trait::async_trait;
use chrono::NaiveDate;
use pythonpro_pages::adapters::{ConfiguredCohort, FixedClock, PlaceholderTemplates};
use pythonpro_pages::core::SubscriptionQueue;
use pythonpro_pages::domain::model::SubscriptionRequest;
use pythonpro_pages::{PageService, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// 記錄所有送出的訂閱，方便斷言
#[derive(Clone, Default)]
pub struct RecordingQueue {
    calls: Arc<Mutex<Vec<SubscriptionRequest>>>,
}

impl RecordingQueue {
    pub fn calls(&self) -> Vec<SubscriptionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubscriptionQueue for RecordingQueue {
    async fn subscribe_with_no_role(&self, request: SubscriptionRequest) -> Result<()> {
        self.calls.lock().unwrap().push(request);
        Ok(())
    }
}

pub fn today() -> NaiveDate {
    // 星期五
    NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()
}

pub fn service() -> (PageService<RecordingQueue, PlaceholderTemplates>, RecordingQueue) {
    let queue = RecordingQueue::default();
    let service = PageService::new(
        queue.clone(),
        PlaceholderTemplates::builtin(),
        Box::new(ConfiguredCohort::new("python-2024")),
        Box::new(FixedClock(today())),
        "+55",
    );
    (service, queue)
}

pub fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
