use uuid::Uuid;

/// Key for a generated artifact: `user_{owner}/pdf/{uuid}-{filename}`.
/// The random component makes keys globally unique; keys are never reused.
pub fn artifact_key(owner_id: &str, filename: &str) -> String {
    format!("user_{}/pdf/{}-{}", owner_id, Uuid::new_v4(), filename)
}

/// Key for an uploaded logo: `logos/user{owner}/{uuid}-{filename}`.
pub fn logo_key(owner_id: &str, filename: &str) -> String {
    format!("logos/user{}/{}-{}", owner_id, Uuid::new_v4(), filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_keys_are_owner_prefixed_and_unique() {
        let a = artifact_key("u1", "report.pdf");
        let b = artifact_key("u1", "report.pdf");

        assert!(a.starts_with("user_u1/pdf/"));
        assert!(a.ends_with("-report.pdf"));
        assert_ne!(a, b);
    }

    #[test]
    fn logo_keys_follow_the_logos_prefix() {
        let key = logo_key("42", "brand.png");
        assert!(key.starts_with("logos/user42/"));
        assert!(key.ends_with("-brand.png"));
    }
}
