use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 一堂課程影片的資訊，`number` 永遠等於它在目錄中的鍵
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoInfo {
    pub number: i64,
    pub id: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonNavigation {
    pub video: VideoInfo,
    pub next_video: Option<VideoInfo>,
    pub previous_video: Option<VideoInfo>,
}

/// 送往任務佇列的 `subscribe_with_no_role` 參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub session_id: Option<String>,
    pub name: String,
    pub email: String,
    pub marketing_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cohort {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub form: HashMap<String, String>,
    pub session_id: Option<String>,
    pub user: Option<User>,
}

impl PageRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: HashMap::new(),
            form: HashMap::new(),
            session_id: None,
            user: None,
        }
    }

    pub fn post(path: impl Into<String>, form: HashMap<String, String>) -> Self {
        Self {
            method: Method::Post,
            form,
            ..Self::get(path)
        }
    }

    pub fn with_query(mut self, query: HashMap<String, String>) -> Self {
        self.query = query;
        self
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageResponse {
    Rendered {
        template: String,
        context: serde_json::Value,
        body: String,
    },
    Redirect {
        location: String,
    },
    NotFound {
        path: String,
    },
    MethodNotAllowed,
}

impl PageResponse {
    pub fn status(&self) -> u16 {
        match self {
            PageResponse::Rendered { .. } => 200,
            PageResponse::Redirect { .. } => 302,
            PageResponse::NotFound { .. } => 404,
            PageResponse::MethodNotAllowed => 405,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            PageResponse::Rendered { body, .. } => body,
            _ => "",
        }
    }

    pub fn context(&self) -> Option<&serde_json::Value> {
        match self {
            PageResponse::Rendered { context, .. } => Some(context),
            _ => None,
        }
    }
}
