//! Chat alerts for pull request events: formatting and delivery

pub mod alert;
mod alert_test;
pub mod auth;
pub mod chat_api;
pub mod delivery;
pub mod message;
pub mod relay;

pub use alert::{action_label, format_alert};
pub use auth::{AuthError, ServiceAccountKey, ServiceAccountTokenSource, TokenSource};
pub use chat_api::ChatApiTransport;
pub use delivery::{build_delivery, Delivery, DeliveryError};
pub use message::{OutboundMessage, CHAT_SPACE};
pub use relay::RelayTransport;
