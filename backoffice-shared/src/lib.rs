#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod helpers;
pub mod models;
