use yaserde::YaSerialize;

use crate::{attributes, MetadataError, BINDING_HTTP_POST, BINDING_HTTP_REDIRECT};

#[derive(YaSerialize)]
#[yaserde(
  namespaces = {
    "md" = "urn:oasis:names:tc:SAML:2.0:metadata",
  },
  prefix = "md"
)]
struct EntityDescriptor {
    #[yaserde(attribute = true, rename = "entityID")]
    entity_id: Option<String>,
    #[yaserde(rename = "SPSSODescriptor", prefix = "md")]
    sp_sso_descriptor: SPSSODescriptor,
}

// Field order below is the schema-mandated child order; yaserde serializes
// in declaration order.
#[derive(YaSerialize)]
struct SPSSODescriptor {
    #[yaserde(attribute = true, rename = "protocolSupportEnumeration")]
    protocol_support_enumeration: String,
    #[yaserde(attribute = true, rename = "AuthnRequestsSigned")]
    authn_requests_signed: bool,
    #[yaserde(attribute = true, rename = "WantAssertionsSigned")]
    want_assertions_signed: bool,
    #[yaserde(rename = "SingleLogoutService", prefix = "md")]
    single_logout_service: Option<SingleLogoutService>,
    #[yaserde(rename = "NameIDFormat", prefix = "md")]
    name_id_format: Option<NameIDFormat>,
    #[yaserde(rename = "AssertionConsumerService", prefix = "md")]
    assertion_consumer_service: Option<AssertionConsumerService>,
    #[yaserde(rename = "AttributeConsumingService", prefix = "md")]
    attribute_consuming_service: Option<AttributeConsumingService>,
}

#[derive(YaSerialize)]
struct SingleLogoutService {
    #[yaserde(attribute = true, rename = "Binding")]
    binding: String,
    #[yaserde(attribute = true, rename = "Location")]
    location: String,
    #[yaserde(attribute = true, rename = "ResponseLocation")]
    response_location: String,
    #[yaserde(attribute = true, rename = "isDefault")]
    is_default: bool,
    #[yaserde(attribute = true)]
    index: u32,
}

#[derive(YaSerialize)]
struct NameIDFormat {
    #[yaserde(text = true)]
    content: String,
}

#[derive(YaSerialize)]
struct AssertionConsumerService {
    #[yaserde(attribute = true, rename = "Binding")]
    binding: String,
    #[yaserde(attribute = true, rename = "Location")]
    location: String,
    #[yaserde(attribute = true, rename = "isDefault")]
    is_default: bool,
    #[yaserde(attribute = true)]
    index: u32,
}

#[derive(YaSerialize)]
struct AttributeConsumingService {
    #[yaserde(attribute = true, rename = "isDefault")]
    is_default: bool,
    #[yaserde(attribute = true)]
    index: u32,
    #[yaserde(rename = "ServiceName", prefix = "md")]
    service_name: ServiceName,
    #[yaserde(rename = "RequestedAttribute", prefix = "md")]
    requested_attributes: Vec<RequestedAttribute>,
}

#[derive(YaSerialize)]
struct ServiceName {
    #[yaserde(attribute = true, rename = "xml:lang")]
    lang: String,
    #[yaserde(text = true)]
    content: String,
}

#[derive(YaSerialize)]
struct RequestedAttribute {
    #[yaserde(attribute = true, rename = "NameFormat")]
    name_format: Option<String>,
    #[yaserde(attribute = true, rename = "Name")]
    name: String,
    #[yaserde(attribute = true, rename = "FriendlyName")]
    friendly_name: Option<String>,
    #[yaserde(rename = "AttributeValue", prefix = "md")]
    attribute_value: Option<AttributeValue>,
}

#[derive(YaSerialize)]
struct AttributeValue {
    #[yaserde(text = true)]
    content: String,
}

/// Builder for the SP metadata document. Every field is optional; an empty
/// builder still produces a valid `EntityDescriptor`/`SPSSODescriptor` pair.
/// Field values are emitted verbatim, the IdP validates them on its side.
#[derive(Default)]
pub struct SpMetadataBuilder {
    issuer: Option<String>,
    acs_url: Option<String>,
    slo_url: Option<String>,
    name_id_format: Option<String>,
    idp_cert_fingerprint: Option<String>,
    idp_cert: Option<String>,
    attribute_consuming_service: Option<attributes::AttributeConsumingService>,
}

impl SpMetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Published as the `entityID` of the descriptor.
    pub fn issuer(self, issuer: &str) -> Self {
        Self {
            issuer: Some(issuer.into()),
            ..self
        }
    }

    /// Where the IdP posts assertions (HTTP-POST binding).
    pub fn acs_url(self, acs_url: &str) -> Self {
        Self {
            acs_url: Some(acs_url.into()),
            ..self
        }
    }

    /// Where the IdP redirects logout traffic (HTTP-Redirect binding).
    pub fn slo_url(self, slo_url: &str) -> Self {
        Self {
            slo_url: Some(slo_url.into()),
            ..self
        }
    }

    pub fn name_id_format(self, name_id_format: &str) -> Self {
        Self {
            name_id_format: Some(name_id_format.into()),
            ..self
        }
    }

    pub fn idp_cert_fingerprint(self, fingerprint: &str) -> Self {
        Self {
            idp_cert_fingerprint: Some(fingerprint.into()),
            ..self
        }
    }

    pub fn idp_cert(self, cert: &str) -> Self {
        Self {
            idp_cert: Some(cert.into()),
            ..self
        }
    }

    pub fn attribute_consuming_service(
        self,
        service: attributes::AttributeConsumingService,
    ) -> Self {
        Self {
            attribute_consuming_service: Some(service),
            ..self
        }
    }

    pub fn build(self) -> Result<String, MetadataError> {
        // Assertions must come back signed once the caller has pinned an IdP
        // cert or fingerprint to check them against.
        let want_assertions_signed =
            self.idp_cert_fingerprint.is_some() || self.idp_cert.is_some();
        let metadata = EntityDescriptor {
            entity_id: self.issuer,
            sp_sso_descriptor: SPSSODescriptor {
                protocol_support_enumeration: "urn:oasis:names:tc:SAML:2.0:protocol".into(),
                authn_requests_signed: false,
                want_assertions_signed,
                single_logout_service: self.slo_url.map(|url| SingleLogoutService {
                    binding: BINDING_HTTP_REDIRECT.into(),
                    location: url.clone(),
                    response_location: url,
                    is_default: true,
                    index: 0,
                }),
                name_id_format: self
                    .name_id_format
                    .map(|format| NameIDFormat { content: format }),
                assertion_consumer_service: self.acs_url.map(|url| AssertionConsumerService {
                    binding: BINDING_HTTP_POST.into(),
                    location: url,
                    is_default: true,
                    index: 0,
                }),
                attribute_consuming_service: self
                    .attribute_consuming_service
                    .map(attribute_consuming_service_element),
            },
        };
        // Pretty printed so IdP administrators can read what the SP supports.
        let config = yaserde::ser::Config {
            perform_indent: true,
            write_document_declaration: true,
            indent_string: None,
        };
        let xml = yaserde::ser::to_string_with_config(&metadata, &config)
            .map_err(MetadataError::Serialization)?;
        tracing::debug!(
            entity_id = ?metadata.entity_id,
            bytes = xml.len(),
            "generated SP metadata document"
        );
        Ok(xml)
    }
}

fn attribute_consuming_service_element(
    service: attributes::AttributeConsumingService,
) -> AttributeConsumingService {
    AttributeConsumingService {
        is_default: true,
        index: service.index,
        service_name: ServiceName {
            lang: "en".into(),
            content: service.name,
        },
        requested_attributes: service
            .attributes
            .into_iter()
            .map(|attribute| RequestedAttribute {
                name_format: attribute.name_format,
                name: attribute.name,
                friendly_name: attribute.friendly_name,
                attribute_value: attribute
                    .attribute_value
                    .map(|value| AttributeValue { content: value }),
            })
            .collect(),
    }
}
