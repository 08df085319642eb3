use crate::core::forms::{FormErrors, LeadForm};
use crate::core::landing::LandingPage;
use crate::core::navigation::resolve;
use crate::core::routes::{PageKind, Route};
use crate::core::schedule::webinar_date;
use crate::domain::model::{Method, PageRequest, PageResponse};
use crate::domain::ports::{Clock, CohortDirectory, SubscriptionQueue, TemplateRenderer};
use crate::utils::error::{PagesError, Result};
use serde_json::json;
use std::collections::HashMap;

pub const DEFAULT_SITE_NAME: &str = "Python Pro";

/// 處理頁面請求：路由、表單、訂閱與模板渲染
pub struct PageService<Q: SubscriptionQueue, T: TemplateRenderer> {
    queue: Q,
    templates: T,
    cohorts: Box<dyn CohortDirectory>,
    clock: Box<dyn Clock>,
    phone_prefix: String,
    site_name: String,
}

impl<Q: SubscriptionQueue, T: TemplateRenderer> PageService<Q, T> {
    pub fn new(
        queue: Q,
        templates: T,
        cohorts: Box<dyn CohortDirectory>,
        clock: Box<dyn Clock>,
        phone_prefix: impl Into<String>,
    ) -> Self {
        Self {
            queue,
            templates,
            cohorts,
            clock,
            phone_prefix: phone_prefix.into(),
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }

    /// 設定模板 `<title>` 使用的網站名稱
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    pub async fn handle(&self, request: PageRequest) -> Result<PageResponse> {
        let Some(route) = Route::resolve(&request.path) else {
            tracing::debug!("No page matches {}", request.path);
            return Ok(PageResponse::NotFound { path: request.path });
        };

        match (&route, request.method) {
            (Route::Lesson(number), Method::Get) => self.lesson_page(*number, &request),
            (Route::Lesson(_), Method::Post) => Ok(PageResponse::MethodNotAllowed),
            _ => match LandingPage::for_page(route.page()) {
                Some(landing) => self.landing_page(&landing, &route, &request).await,
                None if request.method == Method::Get => {
                    self.render(route.page(), json!({ "page": route.page().class_name() }))
                }
                None => Ok(PageResponse::MethodNotAllowed),
            },
        }
    }

    fn lesson_page(&self, number: i64, request: &PageRequest) -> Result<PageResponse> {
        let navigation = match resolve(number) {
            Ok(navigation) => navigation,
            Err(PagesError::LessonNotFound { .. }) => {
                return Ok(PageResponse::NotFound {
                    path: request.path.clone(),
                })
            }
            Err(e) => return Err(e),
        };

        let next_url = navigation
            .next_video
            .map(|video| Route::Lesson(video.number).path());
        let previous_url = navigation
            .previous_video
            .map(|video| Route::Lesson(video.number).path());

        let context = json!({
            "page": PageKind::ImersaoDjangoLessonPage.class_name(),
            "video": navigation.video,
            "next_video": navigation.next_video,
            "previous_video": navigation.previous_video,
            "next_url": next_url,
            "previous_url": previous_url,
        });

        self.render(PageKind::ImersaoDjangoLessonPage, context)
    }

    async fn landing_page(
        &self,
        landing: &LandingPage,
        route: &Route,
        request: &PageRequest,
    ) -> Result<PageResponse> {
        match request.method {
            Method::Get => {
                let initial = landing.initial(request);
                self.render_form(landing, route, &initial, &FormErrors::new())
            }
            Method::Post => match LeadForm::clean(landing.form, &request.form) {
                Ok(form) => {
                    let subscription = landing.subscription_request(
                        &form,
                        request,
                        self.cohorts.as_ref(),
                        &self.phone_prefix,
                    );
                    tracing::info!(
                        "📨 Subscribing {} with tag {}",
                        subscription.email,
                        subscription.marketing_tag
                    );

                    // fire-and-forget：佇列失敗不影響訪客
                    if let Err(e) = self.queue.subscribe_with_no_role(subscription).await {
                        tracing::warn!("⚠️ Subscription task was not enqueued: {}", e);
                    }

                    Ok(PageResponse::Redirect {
                        location: landing.success_url(),
                    })
                }
                Err(errors) => {
                    tracing::debug!("Invalid lead form on {}: {:?}", request.path, errors);
                    self.render_form(landing, route, &request.form, &errors)
                }
            },
        }
    }

    fn render_form(
        &self,
        landing: &LandingPage,
        route: &Route,
        values: &HashMap<String, String>,
        errors: &FormErrors,
    ) -> Result<PageResponse> {
        let value = |key: &str| values.get(key).cloned().unwrap_or_default();

        let mut context = json!({
            "page": landing.page.class_name(),
            "action": route.path(),
            "has_phone": landing.form.has_phone(),
            "form": {
                "name": value("name"),
                "email": value("email"),
                "phone": value("phone"),
            },
            "errors": errors,
        });

        if landing.page == PageKind::TppWebioricoLandingPage {
            let date = match route {
                Route::DatedWebinar(date) => Some(date.as_str()),
                _ => None,
            };
            context["date"] = json!(webinar_date(date, self.clock.today()));
        }

        self.render(landing.page, context)
    }

    fn render(&self, page: PageKind, mut context: serde_json::Value) -> Result<PageResponse> {
        context["site_name"] = json!(self.site_name);
        let template = page.template_name();
        let body = self.templates.render(&template, &context)?;
        Ok(PageResponse::Rendered {
            template,
            context,
            body,
        })
    }
}
