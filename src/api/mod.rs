//! API service modules for Aircall endpoints.
//!
//! Each service covers one resource family and is obtained from
//! [`AircallClient`](crate::AircallClient) (`client.calls()`, `client.users()`...).

mod a2p_campaign_associations;
mod calls;
mod company;
mod contacts;
mod conversation_intelligence;
mod dialer_campaigns;
mod integration;
mod messages;
mod numbers;
mod tags;
mod teams;
mod users;
mod webhooks;

pub use a2p_campaign_associations::{A2pCampaignAssociationsService, ListA2pCampaignAssociationsQuery};
pub use calls::{CallsService, ListCallsQuery, SearchCallsQuery};
pub use company::CompanyService;
pub use contacts::{ContactsService, ListContactsQuery};
pub use conversation_intelligence::ConversationIntelligenceService;
pub use dialer_campaigns::DialerCampaignsService;
pub use integration::IntegrationService;
pub use messages::MessagesService;
pub use numbers::{ListNumbersQuery, NumbersService};
pub use tags::{ListTagsQuery, TagsService};
pub use teams::{ListTeamsQuery, TeamsService};
pub use users::{ListUserAvailabilitiesQuery, ListUsersQuery, UsersService};
pub use webhooks::{ListWebhooksQuery, WebhooksService};
