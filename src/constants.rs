//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration defaults that are used
//! in multiple places or would benefit from being named constants.

use std::time::Duration;

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Base URL of the VERSE API when neither config nor environment set one
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Catalog endpoint, relative to the API base URL
pub const CATALOG_ENDPOINT: &str = "/model/";

/// Environment variable overriding the configured API base URL
pub const API_URL_ENV: &str = "VERSE_API_URL";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "VERSE_CONFIG_DIR";

/// Default timeout for the catalog request, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Where the "Source" button in the navbar points by default
pub const DEFAULT_SOURCE_URL: &str = "https://github.com/Salai-Kowshikan/V.E.R.S.E";

/// How long the "Copied" acknowledgement stays visible after a copy
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(1500);

/// Shown when a failed catalog load carries no description of its own
pub const DEFAULT_LOAD_ERROR: &str = "Failed to load models";

/// User agent sent with catalog requests
pub const USER_AGENT: &str = "verse-client";
