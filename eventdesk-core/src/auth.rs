//! Coordinator credential check.

const USERNAME: &str = "Group1";
const PASSWORD: &str = "admin123";

/// The application accepts exactly one fixed coordinator credential pair;
/// there is no further authorization model.
pub fn verify(username: &str, password: &str) -> bool {
    username == USERNAME && password == PASSWORD
}

#[cfg(test)]
mod tests {
    use super::verify;

    #[test]
    fn accepts_only_the_fixed_pair() {
        assert!(verify("Group1", "admin123"));
        assert!(!verify("Group1", "wrong"));
        assert!(!verify("group1", "admin123"));
        assert!(!verify("", ""));
    }
}
