pub mod catalog;
pub mod forms;
pub mod landing;
pub mod navigation;
pub mod pages;
pub mod routes;
pub mod schedule;

pub use crate::domain::model::{LessonNavigation, PageRequest, PageResponse, VideoInfo};
pub use crate::domain::ports::{
    Clock, CohortDirectory, ConfigProvider, SubscriptionQueue, TemplateRenderer,
};
pub use crate::utils::error::Result;
