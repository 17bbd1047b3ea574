use crate::accounts::repo_types::{Account, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public part of an account returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicAccount {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub display_name: Option<String>,
    pub profile_complete: bool,
    pub is_blocked: bool,
}

impl From<Account> for PublicAccount {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            email: a.email,
            role: a.role,
            display_name: a.display_name,
            profile_complete: a.profile_complete,
            is_blocked: a.is_blocked,
        }
    }
}

/// Request body for the profile save.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_account_hides_trust_internals() {
        let mut account = Account::fixture(Role::Influencer);
        account.reset_otp = Some("1234".into());
        let json = serde_json::to_string(&PublicAccount::from(account)).unwrap();
        assert!(json.contains("\"role\":\"influencer\""));
        assert!(!json.contains("1234"));
        assert!(!json.contains("password_hash"));
    }
}
