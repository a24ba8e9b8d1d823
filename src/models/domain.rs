//! Sending domains and their DNS verification state.

use serde::{Deserialize, Serialize};

/// Details of a domain registered with the account.
///
/// See <https://postmarkapp.com/developer/api/domains-api>.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Domain {
    /// Name of the domain.
    pub name: String,
    /// Host name used for the SPF configuration.
    #[serde(rename = "SPFHost")]
    pub spf_host: String,
    /// TXT value that can optionally be set up with the DNS host.
    #[serde(rename = "SPFTextValue")]
    pub spf_text_value: String,
    /// Whether DKIM has ever been verified for the domain. Stays `true`
    /// even if the record is later removed from DNS.
    #[serde(rename = "DKIMVerified")]
    pub dkim_verified: bool,
    /// DKIM is using a strength weaker than 1024 bit and should be
    /// rotated.
    #[serde(rename = "WeakDKIM")]
    pub weak_dkim: bool,
    /// DNS TXT host being used to validate messages.
    #[serde(rename = "DKIMHost")]
    pub dkim_host: String,
    /// DNS TXT value being used to validate messages.
    #[serde(rename = "DKIMTextValue")]
    pub dkim_text_value: String,
    /// Pending DKIM DNS TXT host awaiting confirmation after a rotation
    /// or for a new domain.
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
    /// The custom Return-Path for this domain.
    pub return_path_domain: String,
    /// Whether the Return-Path domain is verified and actively in use.
    pub return_path_domain_verified: bool,
    /// The CNAME record Postmark expects at the Return-Path domain.
    #[serde(rename = "ReturnPathDomainCNAMEValue")]
    pub return_path_domain_cname_value: String,
    /// Unique ID of the domain.
    #[serde(rename = "ID")]
    pub id: i64,
}

/// Request body to create a domain.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainCreateRequest {
    /// Name of the domain.
    pub name: String,
    /// Custom Return-Path domain. Optional; must be a subdomain of the
    /// From email domain with a CNAME record pointing to `pm.mtasv.net`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub return_path_domain: String,
}

/// Request body to edit a domain.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainEditRequest {
    /// Custom Return-Path domain.
    pub return_path_domain: String,
}

/// A page of domains with the total match count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DomainsList {
    /// Total number of domains on the account.
    pub total_count: i64,
    /// The page of domains.
    pub domains: Vec<Domain>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_wire_names() {
        let domain: Domain = serde_json::from_str(
            r#"{
                "Name": "example.com",
                "SPFVerified": true,
                "SPFHost": "example.com",
                "SPFTextValue": "v=spf1 a mx include:spf.mtasv.net ~all",
                "DKIMVerified": false,
                "WeakDKIM": false,
                "DKIMHost": "20160921046319._domainkey.example.com",
                "DKIMUpdateStatus": "Pending",
                "ReturnPathDomain": "pm-bounces.example.com",
                "ReturnPathDomainVerified": false,
                "ReturnPathDomainCNAMEValue": "pm.mtasv.net",
                "ID": 36735
            }"#,
        )
        .unwrap();
        assert_eq!(domain.id, 36735);
        assert_eq!(domain.spf_host, "example.com");
        assert_eq!(domain.dkim_update_status, "Pending");
        assert_eq!(domain.return_path_domain_cname_value, "pm.mtasv.net");
    }
}
