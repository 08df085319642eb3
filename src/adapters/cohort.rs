use crate::domain::model::Cohort;
use crate::domain::ports::CohortDirectory;

/// 最新一期班級的 slug 來自設定檔
#[derive(Debug, Clone)]
pub struct ConfiguredCohort {
    slug: String,
}

impl ConfiguredCohort {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}

impl CohortDirectory for ConfiguredCohort {
    fn find_most_recent_cohort(&self) -> Cohort {
        Cohort {
            slug: self.slug.clone(),
        }
    }
}
