// Endpoint mapping and request decoration.
// Resolves a target into a concrete endpoint and attaches the credentials
// appropriate for it before the request is built.

use reqwest::{
    header::{ACCEPT, AUTHORIZATION},
    Client, Method, RequestBuilder,
};

use crate::environment::Environment;
use crate::target::{url, GitHub, ParameterEncoding, Parameters};

pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Credentials attached to a single request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Authorization {
    #[default]
    None,
    /// `Authorization: Basic base64(username:password)`.
    Basic { username: String, password: String },
    /// `Authorization: token <token>`.
    Token(String),
}

/// A fully resolved request description.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub url: String,
    pub method: Method,
    pub parameters: Option<Parameters>,
    pub encoding: ParameterEncoding,
    pub authorization: Authorization,
}

impl Endpoint {
    /// The undecorated endpoint for `target` rooted at `base_url`.
    pub fn default_mapping(target: &GitHub, base_url: &str) -> Self {
        Endpoint {
            url: url(base_url, target),
            method: target.method(),
            parameters: target.parameters(),
            encoding: target.parameter_encoding(),
            authorization: Authorization::None,
        }
    }

    pub fn adding_authorization(mut self, authorization: Authorization) -> Self {
        self.authorization = authorization;
        self
    }

    /// Build the HTTP request for this endpoint on `client`.
    pub fn into_request(self, client: &Client) -> RequestBuilder {
        let mut builder = client
            .request(self.method, &self.url)
            .header(ACCEPT, GITHUB_ACCEPT);

        if let Some(params) = &self.parameters {
            builder = match self.encoding {
                ParameterEncoding::Url => builder.query(params),
                ParameterEncoding::Json => builder.json(params),
            };
        }

        match self.authorization {
            Authorization::None => builder,
            Authorization::Basic { username, password } => {
                builder.basic_auth(username, Some(password))
            }
            Authorization::Token(token) => builder.header(AUTHORIZATION, format!("token {}", token)),
        }
    }
}

/// Resolve `target` and decorate it with credentials.
///
/// Token creation authenticates with the supplied username and password.
/// Every other endpoint uses the environment's access token when one is
/// present and goes out anonymously otherwise.
pub fn endpoint_mapping(target: &GitHub, base_url: &str, env: &Environment) -> Endpoint {
    let endpoint = Endpoint::default_mapping(target, base_url);

    match target {
        GitHub::Token { username, password } => endpoint.adding_authorization(Authorization::Basic {
            username: username.clone(),
            password: password.clone(),
        }),
        _ => match env.token() {
            Some(token) => endpoint.adding_authorization(Authorization::Token(token.to_string())),
            None => endpoint,
        },
    }
}
