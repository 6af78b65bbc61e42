// SPDX-License-Identifier: Apache-2.0

//! Defines an [`Agent`] wrapper that adds token auth to all requests.

use crate::http::agent;
use anyhow::Result;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use ureq::{Agent, Request};

/// An [`Agent`] which authenticates requests with token auth when a token
/// is configured, and sends them anonymously otherwise.
///
/// This wrapper is used to work around the fact that `ureq` removed
/// functionality to do this as part of the [`Agent`] type directly.
pub struct AuthenticatedAgent<'token> {
	/// The agent used to make the request.
	agent: &'static Agent,

	/// The token to use with each request, if any.
	token: Option<Redacted<&'token str>>,
}

impl<'token> AuthenticatedAgent<'token> {
	/// Construct a new authenticated agent.
	pub fn new(token: Option<&'token str>) -> Result<AuthenticatedAgent<'token>> {
		Ok(AuthenticatedAgent {
			agent: agent::agent()?,
			token: token.map(Redacted::new),
		})
	}

	/// Make a GET request, authenticated if a token is configured.
	pub fn get(&self, path: &str) -> Request {
		let request = self.agent.get(path).set(USER_AGENT_KEY, USER_AGENT);

		match &self.token {
			Some(token) => request.token_auth(token.as_ref()),
			None => request,
		}
	}
}

/// The key to use for the authorization HTTP header.
const AUTH_KEY: &str = "Authorization";

/// GitHub rejects requests that carry no User-Agent header.
const USER_AGENT_KEY: &str = "User-Agent";

/// The User-Agent value sent with every request.
const USER_AGENT: &str = concat!("backport-review/", env!("CARGO_PKG_VERSION"));

/// Extension trait to add a convenient "token auth" method.
trait TokenAuth {
	/// Sets a token authentication header on a request.
	fn token_auth(self, token: &str) -> Self;
}

impl TokenAuth for Request {
	fn token_auth(self, token: &str) -> Self {
		self.set(AUTH_KEY, &format!("token {}", token))
	}
}

/// Helper container to ensure a value isn't printed.
struct Redacted<T>(T);

impl<T> Redacted<T> {
	/// Construct a new redacted value.
	pub fn new(val: T) -> Redacted<T> {
		Redacted(val)
	}
}

impl<T> AsRef<T> for Redacted<T> {
	fn as_ref(&self) -> &T {
		&self.0
	}
}

impl<T> Debug for Redacted<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		write!(f, "<redacted>")
	}
}
