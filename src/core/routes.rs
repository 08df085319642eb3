use crate::utils::naming::template_name;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    CarreiraProLandingPage,
    CarreiraProThankYouPage,
    DsWebinarLandingPage,
    DsWebinarThankYouPage,
    LeadsOnboardingPage,
    BootcampVipLandingPage,
    BootcampVipThankYouPage,
    TppWebioricoLandingPage,
    TppWebioricoThankYouPage,
    ImersaoDjangoLandingPage,
    ImersaoDjangoLessonPage,
}

impl PageKind {
    pub const ALL: [PageKind; 11] = [
        PageKind::CarreiraProLandingPage,
        PageKind::CarreiraProThankYouPage,
        PageKind::DsWebinarLandingPage,
        PageKind::DsWebinarThankYouPage,
        PageKind::LeadsOnboardingPage,
        PageKind::BootcampVipLandingPage,
        PageKind::BootcampVipThankYouPage,
        PageKind::TppWebioricoLandingPage,
        PageKind::TppWebioricoThankYouPage,
        PageKind::ImersaoDjangoLandingPage,
        PageKind::ImersaoDjangoLessonPage,
    ];

    pub fn class_name(&self) -> &'static str {
        match self {
            PageKind::CarreiraProLandingPage => "CarreiraProLandingPage",
            PageKind::CarreiraProThankYouPage => "CarreiraProThankYouPage",
            PageKind::DsWebinarLandingPage => "DsWebinarLandingPage",
            PageKind::DsWebinarThankYouPage => "DsWebinarThankYouPage",
            PageKind::LeadsOnboardingPage => "LeadsOnboardingPage",
            PageKind::BootcampVipLandingPage => "BootcampVipLandingPage",
            PageKind::BootcampVipThankYouPage => "BootcampVipThankYouPage",
            PageKind::TppWebioricoLandingPage => "TppWebioricoLandingPage",
            PageKind::TppWebioricoThankYouPage => "TppWebioricoThankYouPage",
            PageKind::ImersaoDjangoLandingPage => "ImersaoDjangoLandingPage",
            PageKind::ImersaoDjangoLessonPage => "ImersaoDjangoLessonPage",
        }
    }

    pub fn template_name(&self) -> String {
        template_name(self.class_name())
    }

    /// 不帶參數的固定路徑；課程頁需要編號所以沒有
    fn static_path(&self) -> Option<&'static str> {
        match self {
            PageKind::CarreiraProLandingPage => Some("/pages/carreira-pro/"),
            PageKind::CarreiraProThankYouPage => Some("/pages/carreira-pro/obrigado/"),
            PageKind::DsWebinarLandingPage => Some("/pages/webinario-ds/"),
            PageKind::DsWebinarThankYouPage => Some("/pages/webinario-ds/obrigado/"),
            PageKind::LeadsOnboardingPage => Some("/pages/leads-onboarding/"),
            PageKind::BootcampVipLandingPage => Some("/pages/bootcamp-vip/"),
            PageKind::BootcampVipThankYouPage => Some("/pages/bootcamp-vip/obrigado/"),
            PageKind::TppWebioricoLandingPage => Some("/pages/tpp-webiorico/"),
            PageKind::TppWebioricoThankYouPage => Some("/pages/tpp-webiorico/obrigado/"),
            PageKind::ImersaoDjangoLandingPage => Some("/pages/imersao-django/"),
            PageKind::ImersaoDjangoLessonPage => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Page(PageKind),
    /// TPP 研討會頁面帶上 `DD-MM` 日期
    DatedWebinar(String),
    Lesson(i64),
}

static LESSON_RE: OnceLock<Regex> = OnceLock::new();
static DATED_WEBINAR_RE: OnceLock<Regex> = OnceLock::new();

fn lesson_re() -> &'static Regex {
    LESSON_RE.get_or_init(|| Regex::new(r"^/pages/imersao-django/aula/(\d+)/$").unwrap())
}

fn dated_webinar_re() -> &'static Regex {
    DATED_WEBINAR_RE
        .get_or_init(|| Regex::new(r"^/pages/tpp-webiorico/(\d{2}-\d{2})/$").unwrap())
}

impl Route {
    pub fn page(&self) -> PageKind {
        match self {
            Route::Page(page) => *page,
            Route::DatedWebinar(_) => PageKind::TppWebioricoLandingPage,
            Route::Lesson(_) => PageKind::ImersaoDjangoLessonPage,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Page(page) => page
                .static_path()
                .map(str::to_string)
                .unwrap_or_else(|| Route::Lesson(1).path()),
            Route::DatedWebinar(date) => format!("/pages/tpp-webiorico/{}/", date),
            Route::Lesson(number) => format!("/pages/imersao-django/aula/{}/", number),
        }
    }

    /// 將路徑解析成路由，結尾斜線可省略
    pub fn resolve(path: &str) -> Option<Route> {
        let path = path.split('?').next().unwrap_or(path);
        let normalized = if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{}/", path)
        };

        if let Some(page) = PageKind::ALL
            .iter()
            .find(|page| page.static_path() == Some(normalized.as_str()))
        {
            return Some(Route::Page(*page));
        }

        if let Some(caps) = lesson_re().captures(&normalized) {
            // 超出 i64 範圍的數字視為不存在的頁面
            return caps[1].parse().ok().map(Route::Lesson);
        }

        dated_webinar_re()
            .captures(&normalized)
            .map(|caps| Route::DatedWebinar(caps[1].to_string()))
    }
}
