//! Server-rendered frontend for the Coding Notes blog.
//!
//! Pages fetch topics, tags and blogs from the backend API ([`api`]), decide
//! how the request ends ([`services`]) and render askama views
//! ([`frontend`]) through the actix-web routes in [`web`].

pub mod api;
pub mod common;
pub mod frontend;
pub mod models;
pub mod services;
pub mod web;
