use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Session as published by the external auth provider.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct User {
    #[serde(default)]
    pub name: Option<String>,
}

/// Where the call-to-action buttons lead.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
    Login,
    Register,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }
}

impl AuthState {
    pub fn authenticated(name: Option<&str>) -> Self {
        Self {
            is_authenticated: true,
            user: Some(User {
                name: name.map(str::to_owned),
            }),
        }
    }

    pub fn from_json(s: &str) -> Option<Self> {
        serde_json::from_str(s).ok()
    }

    /// First token of the user's name, if there is one.
    pub fn first_name(&self) -> Option<&str> {
        self.user
            .as_ref()?
            .name
            .as_deref()?
            .split_whitespace()
            .next()
    }

    pub fn primary_destination(&self) -> Destination {
        if self.is_authenticated {
            Destination::Dashboard
        } else {
            Destination::Register
        }
    }

    pub fn hero_cta_label(&self) -> &'static str {
        if self.is_authenticated {
            "Go to Dashboard"
        } else {
            "Start Creating Tests"
        }
    }
}

pub fn welcome_message(first_name: Option<&str>) -> String {
    match first_name {
        Some(name) => format!("Welcome, {}!", name),
        None => "Welcome!".to_string(),
    }
}
