// GitHub endpoint table.
// Every endpoint the client can reach is a variant of `GitHub`; its path,
// method, parameters and encoding are resolved here and nowhere else.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use reqwest::Method;
use serde_json::{json, Map, Value};

pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Scopes requested when creating an OAuth token.
pub const TOKEN_SCOPES: [&str; 2] = ["public_repo", "user"];

/// A GitHub REST API endpoint together with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHub {
    /// Create an OAuth authorization with username/password credentials.
    Token { username: String, password: String },
    /// Search repositories matching a free-form query.
    RepoSearch { query: String, page: u32 },
    /// Repositories in `language` created during the last week, most starred first.
    TrendingReposSinceLastWeek { language: String, page: u32 },
    /// Repository metadata, `full_name` being `owner/repo`.
    Repo { full_name: String },
    RepoReadMe { full_name: String },
    Pulls { full_name: String },
    Issues { full_name: String },
    Commits { full_name: String },
    /// The authenticated user.
    User,
}

/// How an endpoint's parameters travel with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterEncoding {
    /// Appended to the URL as a query string.
    Url,
    /// Serialized as the JSON request body.
    Json,
}

pub type Parameters = Map<String, Value>;

impl GitHub {
    pub fn base_url(&self) -> &'static str {
        GITHUB_API_BASE
    }

    pub fn path(&self) -> String {
        match self {
            GitHub::Token { .. } => "/authorizations".to_string(),
            GitHub::RepoSearch { .. } | GitHub::TrendingReposSinceLastWeek { .. } => {
                "/search/repositories".to_string()
            }
            GitHub::Repo { full_name } => format!("/repos/{}", full_name),
            GitHub::RepoReadMe { full_name } => format!("/repos/{}/readme", full_name),
            GitHub::Pulls { full_name } => format!("/repos/{}/pulls", full_name),
            GitHub::Issues { full_name } => format!("/repos/{}/issues", full_name),
            GitHub::Commits { full_name } => format!("/repos/{}/commits", full_name),
            GitHub::User => "/user".to_string(),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            GitHub::Token { .. } => Method::POST,
            GitHub::RepoSearch { .. }
            | GitHub::TrendingReposSinceLastWeek { .. }
            | GitHub::Repo { .. }
            | GitHub::RepoReadMe { .. }
            | GitHub::Pulls { .. }
            | GitHub::Issues { .. }
            | GitHub::Commits { .. }
            | GitHub::User => Method::GET,
        }
    }

    /// Parameters for this endpoint, with time-dependent values taken from the clock.
    pub fn parameters(&self) -> Option<Parameters> {
        self.parameters_at(Utc::now())
    }

    /// Parameters for this endpoint as they would be built at `now`.
    pub fn parameters_at(&self, now: DateTime<Utc>) -> Option<Parameters> {
        let value = match self {
            GitHub::Token { .. } => json!({
                "scopes": TOKEN_SCOPES,
                "note": format!("({})", now.format("%Y-%m-%d %H:%M:%S %z")),
            }),
            GitHub::RepoSearch { query, page } => json!({
                "q": query,
                "page": page,
            }),
            GitHub::TrendingReposSinceLastWeek { language, page } => {
                let last_week = now - Duration::weeks(1);
                json!({
                    "q": format!("language:{} created:>{}", language, last_week.format("%Y-%m-%d")),
                    "sort": "stars",
                    "order": "desc",
                    "page": page,
                })
            }
            GitHub::Repo { .. }
            | GitHub::RepoReadMe { .. }
            | GitHub::Pulls { .. }
            | GitHub::Issues { .. }
            | GitHub::Commits { .. }
            | GitHub::User => return None,
        };

        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn parameter_encoding(&self) -> ParameterEncoding {
        match self {
            GitHub::Token { .. } => ParameterEncoding::Json,
            _ => ParameterEncoding::Url,
        }
    }

    /// Canned payload for offline use; no endpoint ships one.
    pub fn sample_data(&self) -> &'static [u8] {
        b""
    }

    /// Absolute URL of this endpoint on the public API host.
    pub fn url(&self) -> String {
        url(self.base_url(), self)
    }
}

/// Join a base URL and the target's path without doubling the separator.
pub fn url(base_url: &str, target: &GitHub) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), target.path())
}

impl fmt::Display for GitHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitHub::Token { username, .. } => write!(f, "Token({})", username),
            GitHub::RepoSearch { query, page } => write!(f, "RepoSearch({:?}, page {})", query, page),
            GitHub::TrendingReposSinceLastWeek { language, page } => {
                write!(f, "TrendingReposSinceLastWeek({}, page {})", language, page)
            }
            GitHub::Repo { full_name } => write!(f, "Repo({})", full_name),
            GitHub::RepoReadMe { full_name } => write!(f, "RepoReadMe({})", full_name),
            GitHub::Pulls { full_name } => write!(f, "Pulls({})", full_name),
            GitHub::Issues { full_name } => write!(f, "Issues({})", full_name),
            GitHub::Commits { full_name } => write!(f, "Commits({})", full_name),
            GitHub::User => write!(f, "User"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn repo_targets(full_name: &str) -> Vec<GitHub> {
        let full_name = full_name.to_string();
        vec![
            GitHub::Repo { full_name: full_name.clone() },
            GitHub::RepoReadMe { full_name: full_name.clone() },
            GitHub::Pulls { full_name: full_name.clone() },
            GitHub::Issues { full_name: full_name.clone() },
            GitHub::Commits { full_name },
        ]
    }

    #[test]
    fn test_paths() {
        let paths: Vec<String> = repo_targets("rust-lang/rust").iter().map(GitHub::path).collect();
        assert_eq!(
            paths,
            vec![
                "/repos/rust-lang/rust",
                "/repos/rust-lang/rust/readme",
                "/repos/rust-lang/rust/pulls",
                "/repos/rust-lang/rust/issues",
                "/repos/rust-lang/rust/commits",
            ]
        );
        assert_eq!(GitHub::User.path(), "/user");
        let search = GitHub::RepoSearch { query: "tokio".into(), page: 1 };
        let trending = GitHub::TrendingReposSinceLastWeek { language: "rust".into(), page: 1 };
        assert_eq!(search.path(), trending.path());
        assert_eq!(search.path(), "/search/repositories");
    }

    #[test]
    fn test_only_token_is_post_with_json_body() {
        let token = GitHub::Token { username: "octocat".into(), password: "hunter2".into() };
        assert_eq!(token.method(), Method::POST);
        assert_eq!(token.parameter_encoding(), ParameterEncoding::Json);
        assert_eq!(token.path(), "/authorizations");

        for target in repo_targets("a/b").into_iter().chain([GitHub::User]) {
            assert_eq!(target.method(), Method::GET, "{}", target);
            assert_eq!(target.parameter_encoding(), ParameterEncoding::Url);
            assert!(target.parameters().is_none(), "{} should carry no parameters", target);
        }
    }

    #[test]
    fn test_token_parameters() {
        let now = Utc.with_ymd_and_hms(2017, 2, 8, 9, 30, 0).unwrap();
        let token = GitHub::Token { username: "u".into(), password: "p".into() };
        let params = token.parameters_at(now).unwrap();
        assert_eq!(params["scopes"], json!(["public_repo", "user"]));
        assert_eq!(params["note"], json!("(2017-02-08 09:30:00 +0000)"));
    }

    #[test]
    fn test_search_parameters_keep_query_unescaped() {
        let search = GitHub::RepoSearch { query: "stars:>100 lang:go".into(), page: 3 };
        let params = search.parameters().unwrap();
        assert_eq!(params["q"], json!("stars:>100 lang:go"));
        assert_eq!(params["page"], json!(3));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_trending_parameters_look_back_one_week() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        let trending = GitHub::TrendingReposSinceLastWeek { language: "swift".into(), page: 2 };
        let params = trending.parameters_at(now).unwrap();
        assert_eq!(params["q"], json!("language:swift created:>2024-02-27"));
        assert_eq!(params["sort"], json!("stars"));
        assert_eq!(params["order"], json!("desc"));
        assert_eq!(params["page"], json!(2));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let target = GitHub::Repo { full_name: "octocat/hello-world".into() };
        assert_eq!(target.url(), "https://api.github.com/repos/octocat/hello-world");
        assert_eq!(url("http://localhost:8080/", &GitHub::User), "http://localhost:8080/user");
    }

    #[test]
    fn test_display_hides_password() {
        let token = GitHub::Token { username: "octocat".into(), password: "hunter2".into() };
        let shown = token.to_string();
        assert_eq!(shown, "Token(octocat)");
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn test_sample_data_is_empty() {
        assert!(GitHub::User.sample_data().is_empty());
    }
}
