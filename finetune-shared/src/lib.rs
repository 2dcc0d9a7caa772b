//! Wire models exchanged with the Fine Tune English academy API.
//!
//! Field names on the wire follow the API (Spanish identifiers such as
//! `correo` or `nombre_completo`); the Rust side uses English names and maps
//! them with `serde` attributes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
