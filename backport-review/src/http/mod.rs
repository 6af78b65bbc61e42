// SPDX-License-Identifier: Apache-2.0

//! HTTP plumbing shared by all forge calls.

pub mod agent;
pub mod authenticated_agent;
