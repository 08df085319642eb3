use crate::domain::ports::TemplateRenderer;
use crate::utils::error::{PagesError, Result};
use regex::{Captures, Regex};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const BUILTIN: &[(&str, &str)] = &[
    (
        "pages/carreira_pro_landing_page.html",
        include_str!("../../templates/pages/carreira_pro_landing_page.html"),
    ),
    (
        "pages/carreira_pro_thank_you_page.html",
        include_str!("../../templates/pages/carreira_pro_thank_you_page.html"),
    ),
    (
        "pages/ds_webinar_landing_page.html",
        include_str!("../../templates/pages/ds_webinar_landing_page.html"),
    ),
    (
        "pages/ds_webinar_thank_you_page.html",
        include_str!("../../templates/pages/ds_webinar_thank_you_page.html"),
    ),
    (
        "pages/leads_onboarding_page.html",
        include_str!("../../templates/pages/leads_onboarding_page.html"),
    ),
    (
        "pages/bootcamp_vip_landing_page.html",
        include_str!("../../templates/pages/bootcamp_vip_landing_page.html"),
    ),
    (
        "pages/bootcamp_vip_thank_you_page.html",
        include_str!("../../templates/pages/bootcamp_vip_thank_you_page.html"),
    ),
    (
        "pages/tpp_webiorico_landing_page.html",
        include_str!("../../templates/pages/tpp_webiorico_landing_page.html"),
    ),
    (
        "pages/tpp_webiorico_thank_you_page.html",
        include_str!("../../templates/pages/tpp_webiorico_thank_you_page.html"),
    ),
    (
        "pages/imersao_django_landing_page.html",
        include_str!("../../templates/pages/imersao_django_landing_page.html"),
    ),
    (
        "pages/imersao_django_lesson_page.html",
        include_str!("../../templates/pages/imersao_django_lesson_page.html"),
    ),
];

static IF_BLOCK_RE: OnceLock<Regex> = OnceLock::new();
static VARIABLE_RE: OnceLock<Regex> = OnceLock::new();

fn if_block_re() -> &'static Regex {
    IF_BLOCK_RE.get_or_init(|| {
        // 區塊內容不能含 `{%`，所以每次只會比對到最內層的區塊
        Regex::new(r"\{%\s*if\s+([\w.]+)\s*%\}((?:[^{]|\{[^%])*?)\{%\s*endif\s*%\}").unwrap()
    })
}

fn variable_re() -> &'static Regex {
    VARIABLE_RE.get_or_init(|| Regex::new(r"\{\{\s*([\w.]+)\s*\}\}").unwrap())
}

/// 內建模板加上可選的覆寫目錄。
///
/// 支援 `{{ a.b }}`（會做 HTML 跳脫）與可巢狀的 `{% if a.b %}...{% endif %}`。
#[derive(Debug, Clone, Default)]
pub struct PlaceholderTemplates {
    dir: Option<PathBuf>,
}

impl PlaceholderTemplates {
    pub fn builtin() -> Self {
        Self { dir: None }
    }

    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: Some(dir.as_ref().to_path_buf()),
        }
    }

    fn source(&self, template: &str) -> Result<String> {
        if let Some(dir) = &self.dir {
            let path = dir.join(template);
            if path.is_file() {
                tracing::debug!("Loading template override {}", path.display());
                return Ok(std::fs::read_to_string(path)?);
            }
        }

        BUILTIN
            .iter()
            .find(|(name, _)| *name == template)
            .map(|(_, source)| source.to_string())
            .ok_or_else(|| PagesError::TemplateError {
                template: template.to_string(),
                message: "template not found".to_string(),
            })
    }
}

impl TemplateRenderer for PlaceholderTemplates {
    fn render(&self, template: &str, context: &Value) -> Result<String> {
        let source = self.source(template)?;
        Ok(render_str(&source, context))
    }
}

pub fn render_str(source: &str, context: &Value) -> String {
    let mut with_blocks = source.to_string();
    while if_block_re().is_match(&with_blocks) {
        with_blocks = if_block_re()
            .replace_all(&with_blocks, |caps: &Captures| {
                if lookup(context, &caps[1]).is_some_and(is_truthy) {
                    caps[2].to_string()
                } else {
                    String::new()
                }
            })
            .into_owned();
    }

    variable_re()
        .replace_all(&with_blocks, |caps: &Captures| {
            lookup(context, &caps[1])
                .map(|value| escape_html(&to_text(value)))
                .unwrap_or_default()
        })
        .into_owned()
}

fn lookup<'a>(context: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(context, |value, key| value.get(key))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}
