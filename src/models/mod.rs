//! Data types exchanged with the Postmark API.
//!
//! Wire names follow Postmark's PascalCase convention; fields the API
//! treats as optional are skipped when empty so request payloads stay
//! minimal.

pub mod bounce;
pub mod data_removal;
pub mod domain;
pub mod email;
pub mod events;
pub mod inbound_message;
pub mod message_stream;
pub mod outbound_message;
pub mod server;
pub mod signature;
pub mod stats;
pub mod suppression;
pub mod template;
pub mod trigger;
pub mod webhook;

pub use bounce::{ActivatedBounce, Bounce, BounceTypeCount, BouncesList, DeliveryStats};
pub use data_removal::{DataRemoval, DataRemovalRequest, DataRemovalStatus};
pub use domain::{Domain, DomainCreateRequest, DomainEditRequest, DomainsList};
pub use email::{Attachment, Email, EmailResponse, Header, LinkTracking};
pub use inbound_message::{
    InboundAttachment, InboundMessage, InboundMessagesList, InboundRecipient,
};
pub use message_stream::{
    ArchiveMessageStreamResponse, CreateMessageStreamRequest, EditMessageStreamRequest,
    MessageStream, MessageStreamType, MessageStreamTypeFilter, MessageStreamsList,
    SubscriptionManagementConfiguration, UnsubscribeHandling,
};
pub use outbound_message::{
    Click, ClicksList, MessageEvent, Open, OpensList, OutboundMessage, OutboundMessagesList,
    Recipient,
};
pub use server::{Server, ServerCreateRequest, ServerEditRequest, ServersList};
pub use signature::{
    SenderSignature, SenderSignatureCreateRequest, SenderSignatureDetails,
    SenderSignatureEditRequest, SenderSignaturesList,
};
pub use stats::{
    BounceCounts, BounceDay, BrowserFamilyCounts, BrowserFamilyDay, ClickCounts, ClickDay,
    ClickLocationCounts, ClickLocationDay, ClickPlatformCounts, ClickPlatformDay,
    EmailClientCounts, EmailClientDay, OpenCounts, OpenedDay, OutboundStats, PlatformCounts,
    PlatformDay, SendCounts, SendDay, SpamCounts, SpamDay, TrackedCounts, TrackedDay,
};
pub use suppression::{
    Suppression, SuppressionOrigin, SuppressionReason, SuppressionRequest, SuppressionStatus,
};
pub use template::{
    PushTemplatesRequest, PushTemplatesResponse, PushedTemplate, Template, TemplateInfo,
    TemplatedEmail, TemplatesList, ValidateTemplateRequest, ValidateTemplateResponse, Validation,
    ValidationError,
};
pub use trigger::{InboundRuleTrigger, InboundRuleTriggersList};
pub use webhook::{
    Webhook, WebhookHttpAuth, WebhookTrigger, WebhookTriggerContent, WebhookTriggerEnabled,
    WebhookTriggerOpen,
};

/// Skip-helper for `omitempty`-style boolean request fields.
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
