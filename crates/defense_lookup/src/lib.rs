//! Thesis defense lookup by national identity number.
//!
//! The defense table is loaded once into a [`dataset::DataStore`], queried
//! through [`lookup::LookupService`] and served over HTTP by [`server`].

pub mod config;
pub mod dataset;
pub mod lookup;
pub mod server;
