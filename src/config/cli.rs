use crate::domain::model::{PageRequest, User};
use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render a page as a GET request
    Get {
        path: String,

        /// Query string parameter, e.g. --query email=ana@example.com
        #[arg(long = "query", value_parser = parse_key_val)]
        query: Vec<(String, String)>,

        #[command(flatten)]
        identity: Identity,
    },

    /// Submit a landing page form as a POST request
    Post {
        path: String,

        /// Form field, e.g. --field name=Ana
        #[arg(long = "field", value_parser = parse_key_val)]
        fields: Vec<(String, String)>,

        #[command(flatten)]
        identity: Identity,
    },

    /// List the Imersão Django lessons
    Lessons,

    /// List every page path and its template
    Routes,
}

#[derive(Debug, Clone, Default, Args)]
pub struct Identity {
    /// Session id sent along with subscriptions
    #[arg(long)]
    pub session: Option<String>,

    /// Authenticated user as <id>:<first_name>:<email>
    #[arg(long, value_parser = parse_user)]
    pub user: Option<User>,
}

impl Identity {
    pub fn apply(&self, mut request: PageRequest) -> PageRequest {
        request.session_id = self.session.clone();
        request.user = self.user.clone();
        request
    }
}

pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    Ok((key.to_string(), value.to_string()))
}

pub fn parse_user(s: &str) -> Result<User, String> {
    let mut parts = s.splitn(3, ':');
    let (Some(id), Some(first_name), Some(email)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected <id>:<first_name>:<email>, got '{}'", s));
    };

    let id = id
        .parse()
        .map_err(|e| format!("invalid user id '{}': {}", id, e))?;

    Ok(User {
        id,
        first_name: first_name.to_string(),
        email: email.to_string(),
    })
}
