/**
 * Password Hashing
 *
 * One-way bcrypt hashing of user passwords with a fixed cost factor. Hashing
 * is CPU-bound, so both operations run on Tokio's blocking pool.
 */

use bcrypt::BcryptError;

/// Cost factor used in production
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// bcrypt hasher with a fixed cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plain-text password
    pub async fn hash(&self, plaintext: &str) -> Result<String, BcryptError> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| BcryptError::Io(std::io::Error::other(e)))?
    }

    /// Compare a plain-text password with a stored digest
    pub async fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &digest))
            .await
            .map_err(|e| BcryptError::Io(std::io::Error::other(e)))?
    }
}
