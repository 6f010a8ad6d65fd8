#![doc = "The `bytive` library crate."]
#![doc = ""]
#![doc = "A to-do list REST API: user registration/login/logout with a cookie-carried"]
#![doc = "JSON Web Token, and CRUD on tasks owned by a user. Every response uses the"]
#![doc = "uniform `{statusCode, message?, data?}` / `{statusCode, error}` envelope"]
#![doc = "produced by `response` and `error`."]

pub mod auth;
pub mod config;
pub mod cookies;
pub mod doc;
pub mod error;
pub mod models;
pub mod response;
pub mod routes;
