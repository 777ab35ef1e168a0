//! Client side of the todo service's `/api` surface.
//!
//! # Overview
//! Covers the six endpoints a front end needs: health, list, create,
//! toggle, rename and delete. Ids are the server's sequential integers;
//! a 404 maps to `ApiError::NotFound` and a 400 to `ApiError::InvalidInput`
//! carrying the server's message (for example "Title is required").
//!
//! # Design
//! - `TodoClient` holds only `base_url`; `/api` is appended per request.
//! - Each endpoint has a `build_*` (request as data) and a `parse_*`
//!   (response as data) half, so the host owns all I/O.
//! - DTOs in `types` are defined independently of `todo-server`; the
//!   integration test runs against the real server to catch drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Health, TitleInput, Todo};
