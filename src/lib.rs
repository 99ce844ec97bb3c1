//! Personal portfolio site.
//!
//! A compiled-in project [`catalog`] grouped by [`category`], resolved by id
//! for detail pages ([`resolve`]) and rendered with Leptos [`components`].
//! Pages are either served by the axum [`app`] or written to disk by
//! [`export`].

pub mod app;
pub mod asset;
pub mod catalog;
pub mod category;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod media;
pub mod profile;
pub mod resolve;
pub mod sitemap;
