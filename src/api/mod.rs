//! API service modules for Postmark endpoints.
//!
//! Each service provides methods for one subset of the Postmark API. All
//! of them funnel through the shared request dispatcher in
//! [`client`](crate::client).

mod bounces;
mod data_removals;
mod domains;
mod email;
mod inbound_messages;
mod inbound_rules;
mod message_streams;
mod outbound_messages;
mod sender_signatures;
mod servers;
mod stats;
mod suppressions;
mod templates;
mod webhooks;

pub use bounces::BouncesService;
pub use data_removals::DataRemovalsService;
pub use domains::DomainsService;
pub use email::EmailService;
pub use inbound_messages::InboundMessagesService;
pub use inbound_rules::InboundRulesService;
pub use message_streams::MessageStreamsService;
pub use outbound_messages::OutboundMessagesService;
pub use sender_signatures::SenderSignaturesService;
pub use servers::ServersService;
pub use stats::StatsService;
pub use suppressions::SuppressionsService;
pub use templates::TemplatesService;
pub use webhooks::WebhooksService;
