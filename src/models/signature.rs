//! Sender signatures associated with the account.

use serde::{Deserialize, Serialize};

/// Brief details of a sender signature.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SenderSignature {
    /// Domain associated with the signature.
    pub domain: String,
    /// Email address associated with the signature.
    #[serde(rename = "EmailAddress")]
    pub from_email: String,
    /// Reply-To email associated with the signature.
    #[serde(rename = "ReplyToEmailAddress")]
    pub reply_to_email: String,
    /// From name of the signature.
    pub name: String,
    /// Whether the signature has been confirmed.
    pub confirmed: bool,
    /// Unique ID of the signature.
    #[serde(rename = "ID")]
    pub id: i64,
}

/// Full details of a sender signature.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SenderSignatureDetails {
    /// Domain associated with the signature.
    pub domain: String,
    /// Email address associated with the signature.
    #[serde(rename = "EmailAddress")]
    pub from_email: String,
    /// Reply-To email associated with the signature.
    #[serde(rename = "ReplyToEmailAddress")]
    pub reply_to_email: String,
    /// From name of the signature.
    pub name: String,
    /// Whether the signature has been confirmed.
    pub confirmed: bool,
    /// Deprecated SPF verification flag.
    #[serde(rename = "SPFVerified")]
    pub spf_verified: bool,
    /// Host name used for the SPF configuration.
    #[serde(rename = "SPFHost")]
    pub spf_host: String,
    /// TXT value that can optionally be set up with the DNS host.
    #[serde(rename = "SPFTextValue")]
    pub spf_text_value: String,
    /// Whether DKIM has ever been verified for the domain.
    #[serde(rename = "DKIMVerified")]
    pub dkim_verified: bool,
    /// DKIM is using a strength weaker than 1024 bit.
    #[serde(rename = "WeakDKIM")]
    pub weak_dkim: bool,
    /// DNS TXT host being used to validate messages.
    #[serde(rename = "DKIMHost")]
    pub dkim_host: String,
    /// DNS TXT value being used to validate messages.
    #[serde(rename = "DKIMTextValue")]
    pub dkim_text_value: String,
    /// Pending DKIM DNS TXT host awaiting confirmation.
    #[serde(rename = "DKIMPendingHost")]
    pub dkim_pending_host: String,
    /// Pending DKIM DNS TXT value awaiting confirmation.
    #[serde(rename = "DKIMPendingTextValue")]
    pub dkim_pending_text_value: String,
    /// Old DKIM host being revoked once a rotation is confirmed.
    #[serde(rename = "DKIMRevokedHost")]
    pub dkim_revoked_host: String,
    /// Old DKIM value being revoked once a rotation is confirmed.
    #[serde(rename = "DKIMRevokedTextValue")]
    pub dkim_revoked_text_value: String,
    /// Whether the old DKIM DNS records may safely be deleted.
    #[serde(rename = "SafeToRemoveRevokedKeyFromDNS")]
    pub safe_to_remove_revoked_key_from_dns: bool,
    /// `Pending` while DKIM operations are underway, `Verified` once all
    /// records are up to date.
    #[serde(rename = "DKIMUpdateStatus")]
    pub dkim_update_status: String,
    /// The custom Return-Path domain for this signature.
    pub return_path_domain: String,
    /// Whether the Return-Path domain is verified and actively in use.
    pub return_path_domain_verified: bool,
    /// The CNAME record Postmark expects at the Return-Path domain.
    #[serde(rename = "ReturnPathDomainCNAMEValue")]
    pub return_path_domain_cname_value: String,
    /// Unique ID of the signature.
    #[serde(rename = "ID")]
    pub id: i64,
    /// Text of the personal note sent with the confirmation email.
    pub confirmation_personal_note: String,
}

/// Request body to create a sender signature.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SenderSignatureCreateRequest {
    /// From email associated with the signature.
    pub from_email: String,
    /// From name associated with the signature.
    pub name: String,
    /// Override for the reply-to address.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reply_to_email: String,
    /// Custom Return-Path domain. Optional; must be a subdomain of the
    /// From email domain with a CNAME record pointing to `pm.mtasv.net`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub return_path_domain: String,
    /// Personal note included in the confirmation email. Max 400
    /// characters.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub confirmation_personal_note: String,
}

/// Request body to edit a sender signature.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SenderSignatureEditRequest {
    /// From name associated with the signature.
    pub name: String,
    /// Override for the reply-to address.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reply_to_email: String,
    /// Custom Return-Path domain.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub return_path_domain: String,
    /// Personal note included in the confirmation email. Max 400
    /// characters.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub confirmation_personal_note: String,
}

/// A page of sender signatures with the total match count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SenderSignaturesList {
    /// Total number of signatures on the account.
    pub total_count: i64,
    /// The page of signatures.
    pub sender_signatures: Vec<SenderSignature>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_wire_names() {
        let signature: SenderSignature = serde_json::from_str(
            r#"{
                "Domain": "wildbit.com",
                "EmailAddress": "jp@wildbit.com",
                "ReplyToEmailAddress": "info@wildbit.com",
                "Name": "JP Toto",
                "Confirmed": true,
                "ID": 36735
            }"#,
        )
        .unwrap();
        assert_eq!(signature.from_email, "jp@wildbit.com");
        assert_eq!(signature.reply_to_email, "info@wildbit.com");
        assert_eq!(signature.id, 36735);
    }
}
