use tracing::{debug, info};

use shared_database::ClinicStore;
use shared_models::auth::{Credentials, User};

use crate::models::AuthError;

/// Plain-text account registry: passwords are stored and compared as given.
#[derive(Debug, Clone)]
pub struct AccountService {
    store: ClinicStore,
}

impl AccountService {
    pub fn new(store: ClinicStore) -> Self {
        Self { store }
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<User, AuthError> {
        debug!("Registering user: {}", credentials.username);

        let user = self
            .store
            .create_user(&credentials.username, &credentials.password)
            .await?;

        info!("Registered user {} ({})", user.username, user.id);
        Ok(user)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        debug!("Login attempt for user: {}", credentials.username);

        self.store
            .find_user(&credentials.username, &credentials.password)
            .await?
            .ok_or(AuthError::InvalidCredentials)
    }
}
