use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::entities::{ProductDescriptor, ProductLookupOutput},
};

/// Client port for the upstream food-product database.
#[cfg_attr(test, mockall::automock)]
pub trait ProductLookup: Send + Sync {
    /// Resolves a barcode, or `None` when the database does not know it.
    fn lookup(
        &self,
        barcode: &str,
    ) -> impl Future<Output = Result<Option<ProductDescriptor>, CoreError>> + Send;
}

pub trait ProductService: Send + Sync {
    fn lookup_product(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<ProductLookupOutput, CoreError>> + Send;
}
