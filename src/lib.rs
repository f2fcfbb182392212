//! Catalog
//!
//! Catalog is the core of a product-catalog backend: the product record model, the
//! search/pagination rules applied to a product collection, and the CSV codec used to
//! export and import products in bulk.
//!
//! Nothing in this crate talks to a database. Stores live in `catalog-app` and receive
//! the values defined here ([`search::ProductSearch`], [`products::NewProduct`], ...)
//! so that every store applies the same filter, ordering and paging.

pub mod products;
pub mod search;
pub mod transfer;
