pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::{build_page_service, ConfiguredPageService};
pub use crate::config::SiteConfig;
pub use crate::core::catalog::{catalog, lookup};
pub use crate::core::navigation::resolve;
pub use crate::core::pages::PageService;
pub use crate::core::routes::{PageKind, Route};
pub use crate::domain::model::{LessonNavigation, PageRequest, PageResponse, VideoInfo};
pub use crate::utils::error::{PagesError, Result};
