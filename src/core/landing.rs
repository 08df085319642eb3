use crate::core::forms::{FormKind, LeadForm};
use crate::core::routes::{PageKind, Route};
use crate::domain::model::{PageRequest, SubscriptionRequest};
use crate::domain::ports::CohortDirectory;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketingTag {
    Fixed(&'static str),
    /// `turma-{slug}-semana-do-programador-grupo-vip`，依最新一期班級而定
    MostRecentCohortVip,
}

impl MarketingTag {
    pub fn resolve(&self, cohorts: &dyn CohortDirectory) -> String {
        match self {
            MarketingTag::Fixed(tag) => tag.to_string(),
            MarketingTag::MostRecentCohortVip => format!(
                "turma-{}-semana-do-programador-grupo-vip",
                cohorts.find_most_recent_cohort().slug
            ),
        }
    }
}

/// 名單收集頁的設定：表單、行銷標籤與成功後的轉址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage {
    pub page: PageKind,
    pub form: FormKind,
    pub tag: MarketingTag,
    pub success: Route,
}

impl LandingPage {
    pub fn for_page(page: PageKind) -> Option<LandingPage> {
        let (form, tag, success) = match page {
            PageKind::CarreiraProLandingPage => (
                FormKind::NameEmail,
                MarketingTag::Fixed("webinario-carreira-pro"),
                Route::Page(PageKind::CarreiraProThankYouPage),
            ),
            PageKind::DsWebinarLandingPage => (
                FormKind::NameEmail,
                MarketingTag::Fixed("webinario-data-science"),
                Route::Page(PageKind::DsWebinarThankYouPage),
            ),
            PageKind::BootcampVipLandingPage => (
                FormKind::NameEmailPhone,
                MarketingTag::MostRecentCohortVip,
                Route::Page(PageKind::BootcampVipThankYouPage),
            ),
            PageKind::TppWebioricoLandingPage => (
                FormKind::NameEmail,
                MarketingTag::Fixed("tpp-webiorico"),
                Route::Page(PageKind::TppWebioricoThankYouPage),
            ),
            PageKind::ImersaoDjangoLandingPage => (
                FormKind::NameEmailPhone,
                MarketingTag::Fixed("imersao-django"),
                Route::Lesson(1),
            ),
            _ => return None,
        };

        Some(LandingPage {
            page,
            form,
            tag,
            success,
        })
    }

    pub fn success_url(&self) -> String {
        self.success.path()
    }

    /// 表單初始值：網址參數優先，其次是已登入使用者
    pub fn initial(&self, request: &PageRequest) -> HashMap<String, String> {
        if !self.form.has_phone() {
            return HashMap::new();
        }

        if request.query.contains_key("name") || request.query.contains_key("email") {
            return request.query.clone();
        }

        if let Some(user) = &request.user {
            return HashMap::from([
                ("name".to_string(), user.first_name.clone()),
                ("email".to_string(), user.email.clone()),
            ]);
        }

        HashMap::new()
    }

    /// 組出要送往任務佇列的訂閱請求。
    /// 只有填了電話時才帶上電話，已登入時再加上使用者 id。
    pub fn subscription_request(
        &self,
        form: &LeadForm,
        request: &PageRequest,
        cohorts: &dyn CohortDirectory,
        phone_prefix: &str,
    ) -> SubscriptionRequest {
        let (phone, user_id) = match &form.phone {
            Some(phone) => (
                Some(format!("{}{}", phone_prefix, phone)),
                request.user.as_ref().map(|user| user.id),
            ),
            None => (None, None),
        };

        SubscriptionRequest {
            session_id: request.session_id.clone(),
            name: form.name.clone(),
            email: form.email.clone(),
            marketing_tag: self.tag.resolve(cohorts),
            phone,
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Cohort, User};

    struct FixedCohort;

    impl CohortDirectory for FixedCohort {
        fn find_most_recent_cohort(&self) -> Cohort {
            Cohort {
                slug: "python-2024".to_string(),
            }
        }
    }

    fn user() -> User {
        User {
            id: 42,
            first_name: "Renzo".to_string(),
            email: "renzo@python.pro.br".to_string(),
        }
    }

    fn lead(phone: Option<&str>) -> LeadForm {
        LeadForm {
            name: "Moacir".to_string(),
            email: "moacir@python.pro.br".to_string(),
            phone: phone.map(str::to_string),
        }
    }

    #[test]
    fn test_only_landing_pages_have_config() {
        assert!(LandingPage::for_page(PageKind::CarreiraProLandingPage).is_some());
        assert!(LandingPage::for_page(PageKind::CarreiraProThankYouPage).is_none());
        assert!(LandingPage::for_page(PageKind::ImersaoDjangoLessonPage).is_none());
    }

    #[test]
    fn test_bootcamp_vip_tag_uses_most_recent_cohort() {
        let landing = LandingPage::for_page(PageKind::BootcampVipLandingPage).unwrap();
        assert_eq!(
            landing.tag.resolve(&FixedCohort),
            "turma-python-2024-semana-do-programador-grupo-vip"
        );
    }

    #[test]
    fn test_subscription_without_phone_has_no_extras() {
        let landing = LandingPage::for_page(PageKind::ImersaoDjangoLandingPage).unwrap();
        let request = PageRequest::get("/").with_user(user());
        let sub = landing.subscription_request(&lead(None), &request, &FixedCohort, "+55");
        assert_eq!(sub.phone, None);
        assert_eq!(sub.user_id, None);
        assert_eq!(sub.session_id, None);
        assert_eq!(sub.marketing_tag, "imersao-django");
    }

    #[test]
    fn test_subscription_with_phone_adds_prefix_and_user_id() {
        let landing = LandingPage::for_page(PageKind::BootcampVipLandingPage).unwrap();
        let request = PageRequest::get("/").with_session("abc").with_user(user());
        let sub =
            landing.subscription_request(&lead(Some("11999999999")), &request, &FixedCohort, "+55");
        assert_eq!(sub.phone.as_deref(), Some("+5511999999999"));
        assert_eq!(sub.user_id, Some(42));
        assert_eq!(sub.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_anonymous_phone_subscription_has_no_user_id() {
        let landing = LandingPage::for_page(PageKind::BootcampVipLandingPage).unwrap();
        let request = PageRequest::get("/");
        let sub =
            landing.subscription_request(&lead(Some("11999999999")), &request, &FixedCohort, "+55");
        assert_eq!(sub.phone.as_deref(), Some("+5511999999999"));
        assert_eq!(sub.user_id, None);
    }

    #[test]
    fn test_initial_prefers_query_over_user() {
        let landing = LandingPage::for_page(PageKind::BootcampVipLandingPage).unwrap();
        let query = HashMap::from([("email".to_string(), "q@python.pro.br".to_string())]);
        let request = PageRequest::get("/").with_query(query).with_user(user());
        let initial = landing.initial(&request);
        assert_eq!(initial.get("email").map(String::as_str), Some("q@python.pro.br"));
        assert!(!initial.contains_key("name"));
    }

    #[test]
    fn test_initial_from_authenticated_user() {
        let landing = LandingPage::for_page(PageKind::BootcampVipLandingPage).unwrap();
        let initial = landing.initial(&PageRequest::get("/").with_user(user()));
        assert_eq!(initial.get("name").map(String::as_str), Some("Renzo"));
        assert_eq!(
            initial.get("email").map(String::as_str),
            Some("renzo@python.pro.br")
        );
    }

    #[test]
    fn test_initial_is_empty_for_name_email_forms() {
        let landing = LandingPage::for_page(PageKind::CarreiraProLandingPage).unwrap();
        assert!(landing
            .initial(&PageRequest::get("/").with_user(user()))
            .is_empty());
    }
}
