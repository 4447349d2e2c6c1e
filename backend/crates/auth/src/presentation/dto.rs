//! API DTOs (Data Transfer Objects)
//!
//! Missing request fields default to empty strings so that validation,
//! not deserialization, decides what is wrong with the input.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: &'static str,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub username: String,
}

// ============================================================================
// Check Session
// ============================================================================

/// Session check response; `username` only present when valid
#[derive(Debug, Clone, Serialize)]
pub struct CheckSessionResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl CheckSessionResponse {
    pub fn valid(username: impl Into<String>) -> Self {
        Self {
            valid: true,
            username: Some(username.into()),
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            username: None,
        }
    }
}
