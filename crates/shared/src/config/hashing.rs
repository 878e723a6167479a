use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{DEFAULT_COST, hash, verify};

#[derive(Debug, Clone)]
pub struct Hashing {
    cost: u32,
}

impl Hashing {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let hashed = hash(password, self.cost).map_err(ServiceError::Bcrypt)?;
        Ok(hashed)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        let is_valid = verify(password, hashed_password).map_err(ServiceError::Bcrypt)?;

        if is_valid {
            Ok(())
        } else {
            Err(ServiceError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_compare() {
        let hashing = Hashing::new(4);
        let hashed = hashing.hash_password("secret123").await.unwrap();

        assert_ne!(hashed, "secret123");
        assert!(hashing.compare_password(&hashed, "secret123").await.is_ok());
        assert!(matches!(
            hashing.compare_password(&hashed, "wrong").await,
            Err(ServiceError::InvalidCredentials)
        ));
    }
}
