//! Password hashing with bcrypt
//!
//! Only salted bcrypt hashes ever touch the database; plaintext is never
//! stored or compared.

use thiserror::Error;

/// Password hashing errors
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashFailed(String),

    #[error("Failed to verify password: {0}")]
    VerifyFailed(String),
}

/// Hash a password with the given bcrypt cost
pub fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
    bcrypt::hash(password, cost).map_err(|e| PasswordError::HashFailed(e.to_string()))
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    bcrypt::verify(password, hash).map_err(|e| PasswordError::VerifyFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the tests fast
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("hunter22", TEST_COST).unwrap();
        assert_ne!(hash, "hunter22");
        assert!(verify_password("hunter22", &hash).unwrap());
        assert!(!verify_password("hunter23", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same-password", TEST_COST).unwrap();
        let b = hash_password("same-password", TEST_COST).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_garbage_hash_fails() {
        assert!(verify_password("anything", "not-a-bcrypt-hash").is_err());
    }
}
