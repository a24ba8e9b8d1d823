//! Templates service.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{build_url, ClientInner, Query, TokenScope};
use crate::models::{
    EmailResponse, PushTemplatesRequest, PushTemplatesResponse, Template, TemplateInfo,
    TemplatedEmail, TemplatesList, ValidateTemplateRequest, ValidateTemplateResponse,
};
use crate::{Error, Result};

/// Service for managing templates and sending templated email.
pub struct TemplatesService {
    inner: Arc<ClientInner>,
}

impl TemplatesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch a template by ID or alias.
    pub async fn get(&self, template_id: &str) -> Result<Template> {
        self.inner
            .get(&format!("templates/{template_id}"), TokenScope::Server)
            .await
    }

    /// List templates on the server.
    ///
    /// The entries carry only a subset of attributes; use
    /// [`get`](Self::get) for the full template.
    pub async fn list(&self, count: i64, offset: i64) -> Result<TemplatesList> {
        self.list_filtered(count, offset, "", "").await
    }

    /// List templates filtered by type (`Standard` or `Layout`) and/or
    /// layout template alias. Empty strings mean no filter.
    pub async fn list_filtered(
        &self,
        count: i64,
        offset: i64,
        template_type: &str,
        layout_template: &str,
    ) -> Result<TemplatesList> {
        let mut options = Query::new().with("count", count).with("offset", offset);
        if !template_type.is_empty() {
            options.insert("TemplateType", template_type);
        }
        if !layout_template.is_empty() {
            options.insert("LayoutTemplate", layout_template);
        }
        self.inner
            .get(&build_url("templates", &options), TokenScope::Server)
            .await
    }

    /// Save a new template to the server.
    pub async fn create(&self, template: &Template) -> Result<TemplateInfo> {
        self.inner
            .post("templates", template, TokenScope::Server)
            .await
    }

    /// Update a template by ID or alias.
    pub async fn edit(&self, template_id: &str, template: &Template) -> Result<TemplateInfo> {
        self.inner
            .put(&format!("templates/{template_id}"), template, TokenScope::Server)
            .await
    }

    /// Remove a template by ID or alias.
    pub async fn delete(&self, template_id: &str) -> Result<()> {
        self.inner
            .execute_command(
                Method::DELETE,
                &format!("templates/{template_id}"),
                TokenScope::Server,
            )
            .await
    }

    /// Validate a template/render-model combination.
    pub async fn validate(
        &self,
        request: &ValidateTemplateRequest,
    ) -> Result<ValidateTemplateResponse> {
        self.inner
            .post("templates/validate", request, TokenScope::Server)
            .await
    }

    /// Send an email using a stored template.
    pub async fn send(&self, email: &TemplatedEmail) -> Result<EmailResponse> {
        validate_template_alias(&email.template_alias)?;

        let response: EmailResponse = self
            .inner
            .post("email/withTemplate", email, TokenScope::Server)
            .await?;
        if response.error_code != 0 {
            return Err(Error::Api {
                error_code: response.error_code,
                message: response.message,
            });
        }
        Ok(response)
    }

    /// Send up to 500 templated emails in one call.
    ///
    /// The batch endpoint answers 200 even when individual messages are
    /// rejected; inspect each [`EmailResponse::error_code`] in the result.
    pub async fn send_batch(&self, emails: &[TemplatedEmail]) -> Result<Vec<EmailResponse>> {
        for (index, email) in emails.iter().enumerate() {
            validate_template_alias(&email.template_alias).map_err(|err| match err {
                Error::InvalidInput(msg) => Error::InvalidInput(format!("email {index}: {msg}")),
                other => other,
            })?;
        }

        #[derive(serde::Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct Batch<'a> {
            messages: &'a [TemplatedEmail],
        }
        self.inner
            .post(
                "email/batchWithTemplates",
                &Batch { messages: emails },
                TokenScope::Server,
            )
            .await
    }

    /// Push templates from one server to another. Requires the account
    /// token.
    pub async fn push(&self, request: &PushTemplatesRequest) -> Result<PushTemplatesResponse> {
        self.inner
            .put("templates/push", request, TokenScope::Account)
            .await
    }
}

/// Reject template aliases that could smuggle headers into the request.
fn validate_template_alias(alias: &str) -> Result<()> {
    if alias.contains('\r') || alias.contains('\n') {
        return Err(Error::InvalidInput(
            "header injection detected: illegal characters in template alias".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_with_crlf_is_rejected() {
        assert!(validate_template_alias("welcome").is_ok());
        assert!(validate_template_alias("").is_ok());
        assert!(validate_template_alias("bad\r\nalias").is_err());
        assert!(validate_template_alias("bad\nalias").is_err());
    }
}
