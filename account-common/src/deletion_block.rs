use crate::AccountState;

/// Why account deletion is currently not allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionBlock {
    /// Nothing blocks deletion
    #[default]
    None,
    /// At least one social-login provider is still linked
    SocialAuth,
    /// The account has not been activated
    Inactive,
    /// Inactive and a provider is still linked
    Both,
}

/// A precondition-not-met notice shown under the delete button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionNotice {
    UnlinkSocialAccounts,
    ActivateAccount,
}

impl DeletionBlock {
    /// Evaluate the deletion preconditions for an account.
    pub fn evaluate(account: &AccountState) -> Self {
        match (account.is_active, account.any_provider_connected()) {
            (true, false) => Self::None,
            (true, true) => Self::SocialAuth,
            (false, false) => Self::Inactive,
            (false, true) => Self::Both,
        }
    }

    pub fn is_blocked(self) -> bool {
        self != Self::None
    }

    /// Notices to render, in display order.
    pub fn notices(self) -> Vec<DeletionNotice> {
        match self {
            Self::None => vec![],
            Self::SocialAuth => vec![DeletionNotice::UnlinkSocialAccounts],
            Self::Inactive => vec![DeletionNotice::ActivateAccount],
            Self::Both => vec![
                DeletionNotice::UnlinkSocialAccounts,
                DeletionNotice::ActivateAccount,
            ],
        }
    }
}
