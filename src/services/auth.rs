//! Credential check for the admin dashboard.
//!
//! Stand-in for a real identity provider: two hardcoded literals compared
//! for equality. It issues no token and carries no expiry or scope; passing
//! it only flips the UI admin flag.

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

pub fn verify_credentials(username: &str, password: &str) -> bool {
    username == ADMIN_USERNAME && password == ADMIN_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_known_credentials() {
        assert!(verify_credentials("admin", "admin"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!verify_credentials("admin", "hunter2"));
        assert!(!verify_credentials("root", "admin"));
        assert!(!verify_credentials("", ""));
    }
}
