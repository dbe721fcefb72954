// GitHub API response types.
// Only the fields a client of these endpoints reads are modelled; the rest are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OAuth authorization created by `POST /authorizations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorization {
    pub id: u64,
    pub token: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    pub note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Repository owner as embedded in other payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: u64,
    pub login: String,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
}

/// Authenticated user returned by `GET /user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: Owner,
    #[serde(default)]
    pub private: bool,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    pub default_branch: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Search response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<T>,
}

/// README file metadata and (encoded) contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Readme {
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: u64,
    pub html_url: Option<String>,
    pub download_url: Option<String>,
    /// File contents in `encoding`, usually base64 with embedded newlines.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Open,
    Closed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub state: State,
    pub user: Option<Owner>,
    pub body: Option<String>,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub state: State,
    pub user: Option<Owner>,
    pub body: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub comments: u64,
    /// Present when the issue is actually a pull request.
    pub pull_request: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub html_url: Option<String>,
    pub commit: CommitDetails,
    pub author: Option<Owner>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetails {
    pub message: String,
    pub author: Option<Signature>,
    pub committer: Option<Signature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub email: String,
    pub date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_results_ignore_unknown_fields() {
        let payload = json!({
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "id": 724712,
                "node_id": "MDEwOlJlcG9zaXRvcnk3MjQ3MTI=",
                "name": "rust",
                "full_name": "rust-lang/rust",
                "owner": {"id": 5430905, "login": "rust-lang", "type": "Organization"},
                "private": false,
                "html_url": "https://github.com/rust-lang/rust",
                "description": "Empowering everyone to build reliable and efficient software.",
                "language": "Rust",
                "stargazers_count": 100000,
                "forks_count": 12000,
                "created_at": "2010-06-16T20:39:03Z"
            }]
        });

        let results: SearchResults<Repository> = serde_json::from_value(payload).unwrap();
        assert_eq!(results.total_count, 1);
        let repo = &results.items[0];
        assert_eq!(repo.full_name, "rust-lang/rust");
        assert_eq!(repo.owner.login, "rust-lang");
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert_eq!(repo.open_issues_count, 0);
        assert!(repo.updated_at.is_none());
    }

    #[test]
    fn test_issue_distinguishes_pull_requests() {
        let issue: Issue = serde_json::from_value(json!({
            "id": 1,
            "number": 42,
            "title": "Crash on start",
            "state": "open",
            "html_url": "https://github.com/o/r/issues/42",
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(!issue.is_pull_request());
        assert_eq!(issue.state, State::Open);

        let pr_issue: Issue = serde_json::from_value(json!({
            "id": 2,
            "number": 43,
            "title": "Fix crash",
            "state": "closed",
            "html_url": "https://github.com/o/r/pull/43",
            "pull_request": {"url": "https://api.github.com/repos/o/r/pulls/43"},
            "created_at": "2024-01-02T00:00:00Z"
        }))
        .unwrap();
        assert!(pr_issue.is_pull_request());
        assert_eq!(pr_issue.state, State::Closed);
    }

    #[test]
    fn test_unknown_state_does_not_fail() {
        let state: State = serde_json::from_value(json!("draft")).unwrap();
        assert_eq!(state, State::Unknown);
    }

    #[test]
    fn test_commit_message_and_author() {
        let commit: Commit = serde_json::from_value(json!({
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "commit": {
                "message": "Fix all the bugs",
                "author": {"name": "Monalisa Octocat", "email": "mona@github.com", "date": "2011-04-14T16:00:49Z"},
                "committer": null
            },
            "author": null
        }))
        .unwrap();
        assert_eq!(commit.commit.message, "Fix all the bugs");
        assert_eq!(commit.commit.author.unwrap().name, "Monalisa Octocat");
        assert!(commit.author.is_none());
    }
}
