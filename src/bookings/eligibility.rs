use crate::accounts::repo_types::Account;

/// Booking creation is gated on profile completion. Pure read, no side
/// effects; the caller decides what to do with a false answer.
pub fn can_create_booking(account: &Account) -> bool {
    account.profile_complete
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::repo_types::Role;

    #[test]
    fn incomplete_profile_cannot_book() {
        let account = Account::fixture(Role::Brand);
        assert!(!account.profile_complete);
        assert!(!can_create_booking(&account));
    }

    #[test]
    fn complete_profile_can_book() {
        let mut account = Account::fixture(Role::Brand);
        account.profile_complete = true;
        assert!(can_create_booking(&account));
    }

    #[test]
    fn gate_ignores_everything_but_the_completion_flag() {
        let mut account = Account::fixture(Role::Influencer);
        account.profile_complete = true;
        account.report_count = 9;
        assert!(can_create_booking(&account));
    }
}
