use crate::accounts::repo_types::Account;
use rand::Rng;
use time::{Duration, OffsetDateTime};

/// Recovery codes stay valid for ten minutes from issuance.
pub const CODE_TTL_MINUTES: i64 = 10;

/// Generate a fresh 4-digit recovery code, uniform over [1000, 9999].
pub fn generate_code() -> String {
    rand::thread_rng().gen_range(1000..=9999).to_string()
}

pub fn code_expiry(issued_at: OffsetDateTime) -> OffsetDateTime {
    issued_at + Duration::minutes(CODE_TTL_MINUTES)
}

/// True iff the account holds exactly this code and it has not expired.
/// The expiry instant itself is invalid: the stored timestamp must be
/// strictly in the future.
pub fn code_is_valid(account: &Account, code: &str, now: OffsetDateTime) -> bool {
    match (&account.reset_otp, account.reset_otp_expires) {
        (Some(stored), Some(expires)) => stored == code && expires > now,
        _ => false,
    }
}

/// Minimum password policy: at least 8 characters including one special
/// (non-alphanumeric) character.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8 && password.chars().any(|c| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::repo_types::Role;

    fn account_with_code(code: &str, expires: OffsetDateTime) -> Account {
        let mut account = Account::fixture(Role::Influencer);
        account.reset_otp = Some(code.into());
        account.reset_otp_expires = Some(expires);
        account
    }

    #[test]
    fn generated_codes_are_four_digits() {
        for _ in 0..1000 {
            let code = generate_code();
            assert_eq!(code.len(), 4);
            let n: u32 = code.parse().expect("numeric code");
            assert!((1000..=9999).contains(&n), "out of range: {n}");
        }
    }

    #[test]
    fn expiry_is_exactly_ten_minutes_out() {
        let issued = OffsetDateTime::now_utc();
        assert_eq!(code_expiry(issued) - issued, Duration::minutes(10));
    }

    #[test]
    fn valid_code_before_expiry() {
        let now = OffsetDateTime::now_utc();
        let account = account_with_code("4321", now + Duration::minutes(5));
        assert!(code_is_valid(&account, "4321", now));
    }

    #[test]
    fn mismatched_code_is_invalid() {
        let now = OffsetDateTime::now_utc();
        let account = account_with_code("4321", now + Duration::minutes(5));
        assert!(!code_is_valid(&account, "1234", now));
    }

    #[test]
    fn code_is_invalid_at_the_expiry_instant() {
        let now = OffsetDateTime::now_utc();
        let account = account_with_code("4321", now);
        assert!(!code_is_valid(&account, "4321", now));
    }

    #[test]
    fn code_is_invalid_after_expiry() {
        let now = OffsetDateTime::now_utc();
        let account = account_with_code("4321", now - Duration::seconds(1));
        assert!(!code_is_valid(&account, "4321", now));
    }

    #[test]
    fn account_without_outstanding_code_never_validates() {
        let account = Account::fixture(Role::Brand);
        assert!(!code_is_valid(&account, "1234", OffsetDateTime::now_utc()));
    }

    #[test]
    fn password_policy() {
        assert!(is_strong_password("longen0ugh!"));
        assert!(is_strong_password("pass word")); // space counts as special
        assert!(!is_strong_password("short!"));
        assert!(!is_strong_password("alphanumeric1only"));
        assert!(!is_strong_password(""));
    }
}
