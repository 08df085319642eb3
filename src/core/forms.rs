use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    NameEmail,
    NameEmailPhone,
}

impl FormKind {
    pub fn has_phone(&self) -> bool {
        matches!(self, FormKind::NameEmailPhone)
    }
}

/// 驗證後的名單表單資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// 欄位名稱 -> 錯誤訊息
pub type FormErrors = BTreeMap<&'static str, String>;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .unwrap()
    })
}

fn field<'a>(data: &'a HashMap<String, String>, name: &str) -> &'a str {
    data.get(name).map(|v| v.trim()).unwrap_or("")
}

impl LeadForm {
    pub fn clean(kind: FormKind, data: &HashMap<String, String>) -> Result<LeadForm, FormErrors> {
        let mut errors = FormErrors::new();

        let name = field(data, "name");
        if name.is_empty() {
            errors.insert("name", "Este campo é obrigatório.".to_string());
        }

        let email = field(data, "email");
        if email.is_empty() {
            errors.insert("email", "Este campo é obrigatório.".to_string());
        } else if !email_re().is_match(email) {
            errors.insert("email", "Informe um endereço de email válido.".to_string());
        }

        let phone = if kind.has_phone() {
            let phone = field(data, "phone");
            if phone.is_empty() {
                None
            } else if phone
                .chars()
                .all(|c| c.is_ascii_digit() || " ()-+".contains(c))
            {
                Some(phone.to_string())
            } else {
                errors.insert("phone", "Informe um telefone válido.".to_string());
                None
            }
        } else {
            None
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LeadForm {
            name: name.to_string(),
            email: email.to_string(),
            phone,
        })
    }
}
