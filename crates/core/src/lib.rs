//! Shopfront
//!
//! Cart state management for a browser storefront: a pure cart reducer, a
//! best-effort persistence shadow, transient notifications, and the catalog
//! view helpers (tag filtering and pagination) that sit around it.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod notifications;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod shop;
pub mod storage;
pub mod store;
pub mod tags;
