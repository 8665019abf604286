//! Declaration types for the `AttributeConsumingService` metadata block.

/// Declares which user attributes the SP requests from the IdP.
///
/// Passing one of these to the builder is what opts the block into the
/// document; leaving it off the builder omits the block entirely.
#[derive(Debug, Clone)]
pub struct AttributeConsumingService {
    /// Distinguishes multiple service definitions registered at the IdP.
    pub index: u32,
    /// Human-readable service name, published with `xml:lang="en"`.
    pub name: String,
    /// Requested attributes, emitted in declaration order.
    pub attributes: Vec<RequestedAttribute>,
}

/// One attribute the SP asks the IdP to release.
#[derive(Debug, Clone, Default)]
pub struct RequestedAttribute {
    /// Attribute URI or OID, e.g. `urn:oid:0.9.2342.19200300.100.1.3`.
    pub name: String,
    pub name_format: Option<String>,
    pub friendly_name: Option<String>,
    /// When set, published as a nested `AttributeValue` text element.
    pub attribute_value: Option<String>,
}
