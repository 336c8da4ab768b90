//! # Folio
//!
//! A single-binary personal portfolio site with a built-in contact relay.
//! The page content lives in the binary as hand-authored records; there is
//! no database, no CMS, and no client framework. One process renders the
//! site, serves it, and forwards contact-form submissions by email.
//!
//! # Architecture: Render Once, Serve Forever
//!
//! The portfolio is immutable for the process lifetime, so the page is
//! rendered exactly once at startup and served as a cached string. The only
//! dynamic endpoint is the contact relay:
//!
//! ```text
//! GET  /               →  rendered portfolio page (hero, about, education,
//!                         skills, projects, contact), CSS and JS inlined
//! GET  /assets/*       →  images and the CV document, from disk
//! POST /api/contact    →  validate 4 fields, forward as one email
//! ```
//!
//! The same rendering path backs `folio build`, which writes the whole site
//! to a directory for static hosting. The relay can then run separately,
//! with the form pointed at it via `site.base_url`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, env overrides, validation, stock config |
//! | [`content`] | The portfolio data: profile, education, skills, projects, links |
//! | [`carousel`] | Circular pagination arithmetic for the education carousel |
//! | [`render`] | Maud rendering of every page section, plus `write_site` |
//! | [`mail`] | Contact submissions, outbound message construction, SMTP transport |
//! | [`server`] | axum router, contact relay handler, CORS, asset serving |
//! | [`output`] | CLI output formatting for build/check |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, interpolation is
//! auto-escaped, and there is no template directory to ship or get out of
//! sync. The entire visual layer is Rust code plus one embedded stylesheet.
//!
//! ## No Client Framework
//!
//! Carousel paging and project filtering are computed in Rust at render
//! time: every carousel page and every category view is pre-rendered, and
//! CSS `:target` selectors switch between them. The only JavaScript on the
//! page is the embedded script for the typed-text effect and the contact
//! form's submit handling.
//!
//! ## The Relay Is a Port
//!
//! The contact handler talks to a [`mail::Mailer`] trait, not to lettre
//! directly. The production implementation is an async SMTP transport; the
//! test suite swaps in [`mail::MemoryMailer`] to assert exactly when and
//! with what the transport is invoked, which is the relay's whole contract.

pub mod carousel;
pub mod config;
pub mod content;
pub mod mail;
pub mod output;
pub mod render;
pub mod server;
