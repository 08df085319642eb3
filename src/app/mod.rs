// Application layer: wires configuration and adapters into the page service.

use crate::adapters::{ConfiguredCohort, ConfiguredQueue, PlaceholderTemplates, SystemClock};
use crate::core::pages::PageService;
use crate::core::ConfigProvider;
use crate::utils::error::Result;

pub type ConfiguredPageService = PageService<ConfiguredQueue, PlaceholderTemplates>;

pub fn build_page_service(config: &dyn ConfigProvider) -> Result<ConfiguredPageService> {
    let queue = ConfiguredQueue::from_config(config)?;

    let templates = match config.templates_dir() {
        Some(dir) => {
            tracing::info!("📁 Using templates from: {}", dir);
            PlaceholderTemplates::with_dir(dir)
        }
        None => PlaceholderTemplates::builtin(),
    };

    Ok(PageService::new(
        queue,
        templates,
        Box::new(ConfiguredCohort::new(config.cohort_slug())),
        Box::new(SystemClock),
        config.phone_prefix(),
    )
    .with_site_name(config.site_name()))
}
