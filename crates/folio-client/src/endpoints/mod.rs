//! Typed endpoint implementations of the `folio-core` API traits

mod contact;
mod profile;
mod projects;
mod skills;
