// SPDX-FileCopyrightText: 2026 Lumen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Lumen explainer proxy.
//!
//! Exposes the explain endpoint and the history/gallery surface as a small
//! REST API over shared state holding the completion backend and the
//! history store.

pub mod handlers;
pub mod server;

pub use server::{GatewayState, ServerConfig, build_router, start_server};
