use clap::{Parser, Subcommand};

use crate::target::{GitHub, GITHUB_API_BASE};

/// Call GitHub REST API endpoints from the command line and print the JSON they return.
#[derive(Parser)]
#[clap(
    author,
    version,
    about,
    long_about = "Call GitHub REST API endpoints (search, repositories, pulls, issues, commits, user, token creation) and print the response. Requests are authenticated with GITHUB_TOKEN when it is set."
)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,

    /// GitHub API token; overrides GITHUB_TOKEN from the environment or `.env`.
    #[clap(short, long, global = true)]
    pub token: Option<String>,

    /// API root, e.g. a GitHub Enterprise host.
    #[clap(long, global = true, default_value = GITHUB_API_BASE)]
    pub base_url: String,

    /// Log request headers and response bodies.
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Print the response body as received instead of pretty-printing it.
    #[clap(long, global = true)]
    pub raw: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create an OAuth token with username and password.
    Token {
        #[clap(short, long)]
        username: String,
        #[clap(short, long)]
        password: String,
    },
    /// Search repositories.
    Search {
        query: String,
        #[clap(short = 'P', long, default_value = "1")]
        page: u32,
    },
    /// Most starred repositories created in the last week for a language.
    Trending {
        language: String,
        #[clap(short = 'P', long, default_value = "1")]
        page: u32,
    },
    /// Repository metadata for OWNER/REPO.
    Repo { full_name: String },
    /// README of OWNER/REPO.
    Readme { full_name: String },
    /// Pull requests of OWNER/REPO.
    Pulls { full_name: String },
    /// Issues of OWNER/REPO.
    Issues { full_name: String },
    /// Commits of OWNER/REPO.
    Commits { full_name: String },
    /// The authenticated user.
    User,
}

impl Command {
    pub fn target(&self) -> GitHub {
        match self.clone() {
            Command::Token { username, password } => GitHub::Token { username, password },
            Command::Search { query, page } => GitHub::RepoSearch { query, page },
            Command::Trending { language, page } => {
                GitHub::TrendingReposSinceLastWeek { language, page }
            }
            Command::Repo { full_name } => GitHub::Repo { full_name },
            Command::Readme { full_name } => GitHub::RepoReadMe { full_name },
            Command::Pulls { full_name } => GitHub::Pulls { full_name },
            Command::Issues { full_name } => GitHub::Issues { full_name },
            Command::Commits { full_name } => GitHub::Commits { full_name },
            Command::User => GitHub::User,
        }
    }
}
