use crate::domain::model::SubscriptionRequest;
use crate::domain::ports::{ConfigProvider, SubscriptionQueue};
use crate::utils::error::{PagesError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// 把 `subscribe_with_no_role` 任務以 JSON POST 到 broker
pub struct HttpSubscriptionQueue {
    endpoint: String,
    client: Client,
}

impl HttpSubscriptionQueue {
    pub fn new(endpoint: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl SubscriptionQueue for HttpSubscriptionQueue {
    async fn subscribe_with_no_role(&self, request: SubscriptionRequest) -> Result<()> {
        tracing::debug!("Enqueueing subscription task at: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Queue response status: {}", status);

        if !status.is_success() {
            return Err(PagesError::QueueRejected {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

/// 沒有設定 broker 時使用：只記錄日誌
#[derive(Debug, Clone, Default)]
pub struct LoggingQueue;

#[async_trait]
impl SubscriptionQueue for LoggingQueue {
    async fn subscribe_with_no_role(&self, request: SubscriptionRequest) -> Result<()> {
        tracing::info!(
            "📝 subscribe_with_no_role(session={:?}, name={}, email={}, tag={}, phone={:?}, id={:?})",
            request.session_id,
            request.name,
            request.email,
            request.marketing_tag,
            request.phone,
            request.user_id
        );
        Ok(())
    }
}

/// 依設定選擇 HTTP broker 或只記錄日誌
pub enum ConfiguredQueue {
    Http(HttpSubscriptionQueue),
    Logging(LoggingQueue),
}

impl ConfiguredQueue {
    pub fn from_config(config: &dyn ConfigProvider) -> Result<Self> {
        match config.subscription_endpoint() {
            Some(endpoint) => Ok(ConfiguredQueue::Http(HttpSubscriptionQueue::new(
                endpoint,
                config.subscription_timeout_seconds(),
            )?)),
            None => {
                tracing::warn!("No subscription endpoint configured, subscriptions will only be logged");
                Ok(ConfiguredQueue::Logging(LoggingQueue))
            }
        }
    }
}

#[async_trait]
impl SubscriptionQueue for ConfiguredQueue {
    async fn subscribe_with_no_role(&self, request: SubscriptionRequest) -> Result<()> {
        match self {
            ConfiguredQueue::Http(queue) => queue.subscribe_with_no_role(request).await,
            ConfiguredQueue::Logging(queue) => queue.subscribe_with_no_role(request).await,
        }
    }
}
