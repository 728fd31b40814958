use serde::{Deserialize, Serialize};

/// Signed-in identity as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Session as observed by the shell
///
/// While `loading` is true the presence of `identity` means nothing yet: the
/// provider has not decided.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub loading: bool,
    pub identity: Option<Identity>,
}

impl SessionSnapshot {
    pub fn loading() -> Self {
        Self {
            loading: true,
            identity: None,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            loading: false,
            identity: None,
        }
    }

    pub fn signed_in(identity: Identity) -> Self {
        Self {
            loading: false,
            identity: Some(identity),
        }
    }

    /// Identity, but only once the provider has finished loading
    pub fn resolved_identity(&self) -> Option<&Identity> {
        if self.loading {
            None
        } else {
            self.identity.as_ref()
        }
    }
}
