//! Ivan Tech Coach site: locale-aware routing, rendering and SEO for a
//! Catalan/Spanish/English marketing site.

pub mod config;
pub mod html;
pub mod i18n;
pub mod render;
pub mod seo;
pub mod server;
pub mod sitemap;
