//! Products

pub mod errors;
mod memory;
pub mod operations;
mod records;
mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use memory::MemoryProductsService;
pub use operations::{
    Export, ExportError, ImportError, export_products, import_products, search_products,
};
pub use service::*;
