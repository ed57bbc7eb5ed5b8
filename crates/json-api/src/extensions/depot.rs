//! Depot helper extensions.

use std::any::Any;

use boutique_app::auth::Principal;
use salvo::prelude::Depot;

use crate::errors::ApiError;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_principal(&mut self, principal: Principal);

    fn principal(&self) -> Option<&Principal>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>()
            .map_err(|_ignored| ApiError::internal_server_error("Internal Server Error"))
    }

    fn insert_principal(&mut self, principal: Principal) {
        self.inject(principal);
    }

    fn principal(&self) -> Option<&Principal> {
        self.obtain::<Principal>().ok()
    }
}
