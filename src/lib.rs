//! SAML 2.0 Service Provider metadata generation.
//!
//! Builds the SP metadata document an IdP polls to configure federation.
//! Serve the output of [`SpMetadataBuilder`] from a well-known URL, then give
//! that URL to the IdP administrator; endpoint changes on the SP side reach
//! the IdP on its next poll.

use thiserror::Error;

mod attributes;
mod sp_metadata;

pub use attributes::{AttributeConsumingService, RequestedAttribute};
pub use sp_metadata::SpMetadataBuilder;

pub const NAME_ID_FORMAT_EMAIL_ADDRESS: &str =
    "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress";

/// Binding URN emitted on `AssertionConsumerService`.
pub const BINDING_HTTP_POST: &str = "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-POST";

/// Binding URN emitted on `SingleLogoutService`.
pub const BINDING_HTTP_REDIRECT: &str = "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-Redirect";

/// Media type for serving the generated document over HTTP.
pub const CONTENT_TYPE_METADATA: &str = "application/samlmetadata+xml";

/// Errors raised while serializing the metadata document.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The XML writer rejected the document.
    #[error("metadata serialization failed: {0}")]
    Serialization(String),
}
