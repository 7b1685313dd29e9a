//! Networking for fragment content.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fragments` implements the `panels::FragmentFetcher` contract over HTTP.

pub mod fragments;
