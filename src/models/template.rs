//! Email templates and templated sending.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::email::{Attachment, Header, LinkTracking};
use super::is_false;

/// An email template on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Template {
    /// ID of the template.
    #[serde(rename = "TemplateID")]
    pub template_id: i64,
    /// Name of the template.
    pub name: String,
    /// Content used for the subject when the template is used to send.
    pub subject: String,
    /// Content used for the HTML body when the template is used to send.
    #[serde(rename = "HtmlBody")]
    pub html_body: String,
    /// Content used for the text body when the template is used to send.
    pub text_body: String,
    /// ID of the server this template is associated with.
    #[serde(rename = "AssociatedServerId")]
    pub associated_server_id: i64,
    /// Whether this template may be used for sending.
    pub active: bool,
    /// Optional alias for the template.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alias: String,
    /// Template type, `Standard` or `Layout`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub template_type: String,
    /// Alias of the layout template in use, if any.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub layout_template: String,
}

/// The subset of template attributes returned by index and edit endpoints.
///
/// Use [`TemplatesService::get`](crate::api::TemplatesService::get) to
/// retrieve the full template.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TemplateInfo {
    /// ID of the template.
    #[serde(rename = "TemplateID")]
    pub template_id: i64,
    /// Name of the template.
    pub name: String,
    /// Whether this template may be used for sending.
    pub active: bool,
    /// Optional alias for the template.
    pub alias: String,
    /// Template type, `Standard` or `Layout`.
    pub template_type: String,
    /// Alias of the layout template in use, if any.
    pub layout_template: String,
}

/// A page of templates with the total match count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TemplatesList {
    /// Total number of matching templates.
    pub total_count: i64,
    /// The page of templates.
    pub templates: Vec<TemplateInfo>,
}

/// A template/render-model combination to validate.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateTemplateRequest {
    /// Subject content to validate.
    pub subject: String,
    /// Text body content to validate.
    pub text_body: String,
    /// HTML body content to validate.
    #[serde(rename = "HTMLBody")]
    pub html_body: String,
    /// Model applied to the template during the test render.
    pub test_render_model: HashMap<String, Value>,
    /// Apply style blocks as inline attributes for the HTML test render.
    #[serde(rename = "InlineCssForHtmlTestRender")]
    pub inline_css_for_html_test_render: bool,
}

/// Validation results for one template field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Validation {
    /// Whether the field's content is valid.
    pub content_is_valid: bool,
    /// Errors found while validating the field.
    pub validation_errors: Vec<ValidationError>,
    /// The test-rendered content.
    pub rendered_content: String,
}

/// A single error found during template validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ValidationError {
    /// Error message.
    pub message: String,
    /// Line the error occurred on.
    pub line: i64,
    /// Character position of the error.
    pub character_position: i64,
}

/// Outcome of validating a template.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ValidateTemplateResponse {
    /// Whether every field validated successfully.
    pub all_content_is_valid: bool,
    /// HTML body validation results.
    #[serde(rename = "HTMLBody")]
    pub html_body: Validation,
    /// Text body validation results.
    pub text_body: Validation,
    /// Subject validation results.
    pub subject: Validation,
    /// Model Postmark inferred from the template's placeholders.
    pub suggested_template_model: HashMap<String, Value>,
}

/// An email sent through a stored template.
///
/// Exactly one of [`template_id`](Self::template_id) and
/// [`template_alias`](Self::template_alias) must be set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplatedEmail {
    /// The template ID to use when sending this message.
    #[serde(rename = "TemplateId", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    /// The template alias to use when sending this message.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub template_alias: String,
    /// Model applied to the template to generate the subject and bodies.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub template_model: HashMap<String, Value>,
    /// Apply style blocks as inline attributes to the rendered HTML.
    #[serde(rename = "InlineCSS", skip_serializing_if = "is_false")]
    pub inline_css: bool,
    /// The sender email address. Must have a registered and confirmed
    /// sender signature.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from: String,
    /// Recipient email address. Multiple addresses are comma separated.
    /// Max 50.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to: String,
    /// Cc recipient email address.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cc: String,
    /// Bcc recipient email address.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bcc: String,
    /// Tag for categorizing outgoing emails.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    /// Reply To override email address.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reply_to: String,
    /// Custom headers to include.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
    /// Activate open tracking for this email.
    #[serde(skip_serializing_if = "is_false")]
    pub track_opens: bool,
    /// Activate link tracking for this email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_links: Option<LinkTracking>,
    /// Attachments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Message stream to send through.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message_stream: String,
    /// Custom metadata key/value pairs.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// Request to push templates from one server to another.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PushTemplatesRequest {
    /// ID of the server to push templates from.
    #[serde(rename = "SourceServerId")]
    pub source_server_id: i64,
    /// ID of the server to push templates to.
    #[serde(rename = "DestinationServerId")]
    pub destination_server_id: i64,
    /// Perform the push rather than just simulating it.
    pub perform_changes: bool,
}

/// A template processed by a push operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PushedTemplate {
    /// ID of the template.
    #[serde(rename = "TemplateId")]
    pub template_id: i64,
    /// Name of the template.
    pub name: String,
    /// Alias of the template, if any.
    pub alias: String,
    /// Action performed (`Created`, `Updated`, `Skipped`).
    pub action: String,
}

/// Results of pushing templates between servers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PushTemplatesResponse {
    /// Total number of templates processed.
    pub total_count: i64,
    /// Details of each processed template.
    pub templates: Vec<PushedTemplate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templated_email_serializes_alias_or_id() {
        let by_alias = TemplatedEmail {
            template_alias: "welcome".into(),
            from: "sender@example.com".into(),
            to: "receiver@example.com".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&by_alias).unwrap();
        assert_eq!(json["TemplateAlias"], "welcome");
        assert!(!json.as_object().unwrap().contains_key("TemplateId"));

        let by_id = TemplatedEmail {
            template_id: Some(1234),
            from: "sender@example.com".into(),
            to: "receiver@example.com".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&by_id).unwrap();
        assert_eq!(json["TemplateId"], 1234);
        assert!(!json.as_object().unwrap().contains_key("TemplateAlias"));
    }

    #[test]
    fn template_wire_names() {
        let template: Template = serde_json::from_str(
            r#"{
                "TemplateID": 1234,
                "Name": "Onboarding Email",
                "Subject": "Hello from {{company.name}}!",
                "HtmlBody": "<html><body>Hello</body></html>",
                "TextBody": "Hello",
                "AssociatedServerId": 12345,
                "Active": true
            }"#,
        )
        .unwrap();
        assert_eq!(template.template_id, 1234);
        assert_eq!(template.associated_server_id, 12345);

        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json["TemplateID"], 1234);
        assert_eq!(json["HtmlBody"], "<html><body>Hello</body></html>");
        // Unset alias is omitted, matching the wire format of the API.
        assert!(!json.as_object().unwrap().contains_key("Alias"));
    }
}
