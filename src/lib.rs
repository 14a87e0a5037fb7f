//! Core of the AutoPremium car marketplace: catalog search, a mock
//! key-value persistence store, and the account/announcement/report
//! services built on it.

pub mod catalog;
pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use error::{MarketError, MarketResult};
