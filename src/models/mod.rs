//! Data models for the Aircall API.
//!
//! Every field the API may omit is optional, so decoding never fails on a
//! sparse payload. Models are organized by resource:
//!
//! - [`meta`] - Pagination metadata shared by list responses
//! - [`call`] - Calls, comments, tags, transfers and insight cards
//! - [`contact`] - Contacts
//! - [`user`] - Users and availabilities
//! - [`number`] - Numbers and their music and messages
//! - [`message`] - SMS/MMS messages and number configuration
//! - [`team`], [`tag`], [`webhook`], [`company`], [`integration`]
//! - [`conversation_intelligence`] - Transcriptions, sentiments, topics, summaries
//! - [`dialer_campaign`] - Power dialer campaigns
//! - [`a2p`] - A2P campaign associations

pub mod meta;
pub mod call;
pub mod contact;
pub mod user;
pub mod number;
pub mod message;
pub mod team;
pub mod tag;
pub mod webhook;
pub mod company;
pub mod integration;
pub mod conversation_intelligence;
pub mod dialer_campaign;
pub mod a2p;

pub use meta::*;
pub use call::*;
pub use contact::*;
pub use user::*;
pub use number::*;
pub use message::*;
pub use team::*;
pub use tag::*;
pub use webhook::*;
pub use company::*;
pub use integration::*;
pub use conversation_intelligence::*;
pub use dialer_campaign::*;
pub use a2p::*;
