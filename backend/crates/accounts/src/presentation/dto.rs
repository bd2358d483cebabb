//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::outcome::FormView;
use crate::domain::submission::{LoginSubmission, RegisterSubmission};
use crate::domain::validation::Field;

// ============================================================================
// Raw form posts
// ============================================================================

/// Raw login form POST. Unknown keys are ignored; missing keys decode to
/// their empty defaults and fail presence rules downstream.
#[derive(Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Checkbox: any submitted value counts as checked
    #[serde(default)]
    pub remember: Option<String>,
    #[serde(default)]
    pub login_nonce: Option<String>,
    /// Submit marker; only its presence makes this POST a submission
    #[serde(default)]
    pub login_submit: Option<String>,
}

impl LoginForm {
    pub fn is_submission(&self) -> bool {
        self.login_submit.is_some()
    }

    pub fn into_submission(self) -> LoginSubmission {
        LoginSubmission {
            username: self.username,
            password: self.password,
            remember: self.remember.is_some(),
            csrf_token: self.login_nonce.unwrap_or_default(),
        }
    }
}

/// Raw registration form POST
#[derive(Clone, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub register_nonce: Option<String>,
    /// Submit marker; only its presence makes this POST a submission
    #[serde(default)]
    pub register_submit: Option<String>,
}

impl RegisterForm {
    pub fn is_submission(&self) -> bool {
        self.register_submit.is_some()
    }

    pub fn into_submission(self) -> RegisterSubmission {
        RegisterSubmission {
            username: self.username,
            email: self.email,
            password: self.password,
            confirm_password: self.confirm_password,
            csrf_token: self.register_nonce.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Page bodies
// ============================================================================

/// Credential form page body, composed into the page shell by the host
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPageBody {
    pub action: &'static str,
    pub csrf_token: String,
    pub values: BTreeMap<Field, String>,
    pub field_errors: BTreeMap<Field, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<FormView> for FormPageBody {
    fn from(view: FormView) -> Self {
        Self {
            action: view.action.as_str(),
            csrf_token: view.csrf_token,
            values: view.values,
            field_errors: view.field_errors,
            error: view.top_error,
        }
    }
}
