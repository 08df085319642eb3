use crate::domain::model::{Cohort, SubscriptionRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// 訂閱任務佇列，呼叫端不使用回傳值以外的任何結果
#[async_trait]
pub trait SubscriptionQueue: Send + Sync {
    async fn subscribe_with_no_role(&self, request: SubscriptionRequest) -> Result<()>;
}

pub trait CohortDirectory: Send + Sync {
    fn find_most_recent_cohort(&self) -> Cohort;
}

pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub trait ConfigProvider: Send + Sync {
    fn subscription_endpoint(&self) -> Option<&str>;
    fn subscription_timeout_seconds(&self) -> u64;
    fn cohort_slug(&self) -> &str;
    fn phone_prefix(&self) -> &str;
    fn site_name(&self) -> &str;
    fn templates_dir(&self) -> Option<&str>;
}
