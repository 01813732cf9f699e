use std::sync::Arc;

use cinefluent_auth::AccessTokens;
use cinefluent_catalog::{AccountDirectory, Catalog, StaticCatalog};

/// Shared application state handed to every handler.
///
/// Everything here is immutable after construction; handlers only read.
pub struct AppServices {
    catalog: Arc<dyn Catalog>,
    accounts: AccountDirectory,
    tokens: Arc<AccessTokens>,
    environment: String,
}

impl AppServices {
    /// Production wiring: the authored demo catalog and directory.
    pub fn demo(tokens: Arc<AccessTokens>, environment: String) -> Self {
        Self::new(
            Arc::new(StaticCatalog::demo()),
            AccountDirectory::demo(),
            tokens,
            environment,
        )
    }

    pub fn new(
        catalog: Arc<dyn Catalog>,
        accounts: AccountDirectory,
        tokens: Arc<AccessTokens>,
        environment: String,
    ) -> Self {
        Self {
            catalog,
            accounts,
            tokens,
            environment,
        }
    }

    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    pub fn accounts(&self) -> &AccountDirectory {
        &self.accounts
    }

    pub fn tokens(&self) -> Arc<AccessTokens> {
        Arc::clone(&self.tokens)
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }
}
