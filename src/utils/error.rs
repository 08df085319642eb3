use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagesError {
    #[error("Lesson {lesson} not found")]
    LessonNotFound { lesson: i64 },

    #[error("Subscription queue request failed: {0}")]
    QueueError(#[from] reqwest::Error),

    #[error("Subscription queue rejected the task with status {status}")]
    QueueRejected { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template error in '{template}': {message}")]
    TemplateError { template: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Queue,
    Io,
    Template,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PagesError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PagesError::LessonNotFound { .. } => ErrorCategory::NotFound,
            PagesError::QueueError(_) | PagesError::QueueRejected { .. } => ErrorCategory::Queue,
            PagesError::IoError(_) => ErrorCategory::Io,
            PagesError::TemplateError { .. } => ErrorCategory::Template,
            PagesError::ConfigError { .. }
            | PagesError::ConfigValidationError { .. }
            | PagesError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 找不到頁面是正常的邊界情況
            ErrorCategory::NotFound => ErrorSeverity::Low,
            ErrorCategory::Queue => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Template => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PagesError::LessonNotFound { lesson } => {
                format!("A aula {} não existe", lesson)
            }
            PagesError::QueueError(_) | PagesError::QueueRejected { .. } => {
                "Could not enqueue the subscription task".to_string()
            }
            PagesError::TemplateError { template, .. } => {
                format!("Could not render template {}", template)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::NotFound => "Check the lesson number or the page path",
            ErrorCategory::Queue => "Check that the subscription broker endpoint is reachable",
            ErrorCategory::Io => "Check file permissions and paths",
            ErrorCategory::Template => "Check the templates directory or remove it to use built-in templates",
            ErrorCategory::Configuration => "Fix the configuration file and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, PagesError>;
