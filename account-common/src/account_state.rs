use serde::Deserialize;

/// A social-login provider as reported by the account settings page.
///
/// The page sends more fields (`id`, `connectUrl`, `acceptsLogins`, ...);
/// only `connected` matters for deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedProvider {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub connected: bool,
}

impl LinkedProvider {
    pub fn new(name: impl Into<String>, connected: bool) -> Self {
        Self {
            name: name.into(),
            connected,
        }
    }
}

/// The `socialAccountLinks` prop
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccountLinks {
    #[serde(default)]
    pub providers: Vec<LinkedProvider>,
}

impl SocialAccountLinks {
    pub fn new(providers: Vec<LinkedProvider>) -> Self {
        Self { providers }
    }

    /// Whether any provider is still linked to the account
    pub fn any_connected(&self) -> bool {
        self.providers.iter().any(|p| p.connected)
    }
}

/// Account props handed to the panel by the parent page. Read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    pub is_active: bool,
    #[serde(default)]
    pub social_account_links: SocialAccountLinks,
}

impl AccountState {
    pub fn new(is_active: bool, social_account_links: SocialAccountLinks) -> Self {
        Self {
            is_active,
            social_account_links,
        }
    }

    /// Parse the JSON props blob the settings page embeds.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn any_provider_connected(&self) -> bool {
        self.social_account_links.any_connected()
    }
}
