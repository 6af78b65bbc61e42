// SPDX-License-Identifier: Apache-2.0

//! Globally defined agent containing system TLS certs.

use anyhow::Result;
use rustls::ClientConfig;
use rustls_platform_verifier::ConfigVerifierExt;
use std::{
	sync::{Arc, OnceLock},
	time::Duration,
};
use ureq::{Agent, AgentBuilder};

/// Global static holding the agent with the appropriate TLS certs.
static AGENT: OnceLock<Agent> = OnceLock::new();

/// Connect/read timeout applied to every forge call, so a stalled
/// connection can't hang the review forever.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Get or initialize the global static agent used in making http(s) requests.
pub fn agent() -> Result<&'static Agent> {
	// Create connection configuration with system certs retrieved by the
	// rustls platform verifier.
	let tls_config = ClientConfig::with_platform_verifier();

	Ok(AGENT.get_or_init(|| {
		AgentBuilder::new()
			.tls_config(Arc::new(tls_config))
			.timeout_connect(TIMEOUT)
			.timeout_read(TIMEOUT)
			.build()
	}))
}
