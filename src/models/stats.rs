//! Outbound statistics aggregates.
//!
//! Days that did not produce statistics are absent from the per-day lists.

use serde::Deserialize;

/// Brief overview of statistics for all outbound email.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OutboundStats {
    /// Number of sent emails.
    pub sent: i64,
    /// Number of bounced emails.
    pub bounced: i64,
    /// Number of SMTP errors.
    #[serde(rename = "SMTPApiErrors")]
    pub smtp_api_errors: i64,
    /// Bounce rate percentage, calculated by total sent.
    pub bounce_rate: f64,
    /// Number of spam complaints received.
    pub spam_complaints: i64,
    /// Spam complaints percentage, calculated by total sent.
    pub spam_complaints_rate: f64,
    /// Number of opens.
    pub opens: i64,
    /// Number of unique opens.
    pub unique_opens: i64,
    /// Number of tracked emails sent.
    pub tracked: i64,
    /// Number of emails where the client was tracked.
    pub with_client_recorded: i64,
    /// Number of emails where the platform was tracked.
    pub with_platform_recorded: i64,
    /// Number of emails where read time was tracked.
    pub with_read_time_recorded: i64,
}

/// Send count for one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SendDay {
    /// The date.
    pub date: String,
    /// Number of emails sent.
    pub sent: i64,
}

/// Send counts over a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SendCounts {
    /// Sent counts by date.
    pub days: Vec<SendDay>,
    /// Total emails sent in the period.
    pub sent: i64,
}

/// Bounce counts for one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BounceDay {
    /// The date.
    pub date: String,
    /// Number of hard bounces.
    pub hard_bounce: i64,
    /// Number of soft bounces.
    pub soft_bounce: i64,
    /// Number of SMTP errors.
    #[serde(rename = "SMTPApiError")]
    pub smtp_api_error: i64,
    /// Number of transient bounces.
    pub transient: i64,
}

/// Bounce counts over a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BounceCounts {
    /// Bounce counts by date.
    pub days: Vec<BounceDay>,
    /// Total hard bounces.
    pub hard_bounce: i64,
    /// Total soft bounces.
    pub soft_bounce: i64,
    /// Total SMTP errors.
    #[serde(rename = "SMTPApiError")]
    pub smtp_api_error: i64,
    /// Total transient bounces.
    pub transient: i64,
}

/// Spam complaints for one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SpamDay {
    /// The date.
    pub date: String,
    /// Number of spam complaints received.
    pub spam_complaint: i64,
}

/// Spam complaints over a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SpamCounts {
    /// Spam complaint counts by date.
    pub days: Vec<SpamDay>,
    /// Total spam complaints.
    pub spam_complaint: i64,
}

/// Tracked emails sent on one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TrackedDay {
    /// The date.
    pub date: String,
    /// Number of tracked emails sent.
    pub tracked: i64,
}

/// Tracked emails sent over a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TrackedCounts {
    /// Tracked email counts by date.
    pub days: Vec<TrackedDay>,
    /// Total tracked emails sent.
    pub tracked: i64,
}

/// Opens on one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OpenedDay {
    /// The date.
    pub date: String,
    /// Total opens, including repeat opens by the same recipient.
    pub opens: i64,
    /// Unique opens.
    pub unique: i64,
}

/// Opens over a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OpenCounts {
    /// Opens by date.
    pub days: Vec<OpenedDay>,
    /// Total opens, including repeat opens by the same recipient.
    pub opens: i64,
    /// Total unique opens.
    pub unique: i64,
}

/// Email platform usage on one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlatformDay {
    /// The date.
    pub date: String,
    /// Opens from desktop clients.
    pub desktop: i64,
    /// Opens from mobile clients.
    pub mobile: i64,
    /// Opens from unrecognized platforms.
    pub unknown: i64,
    /// Opens from webmail clients.
    pub web_mail: i64,
}

/// Email platform usage over a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlatformCounts {
    /// Platform usage by date.
    pub days: Vec<PlatformDay>,
    /// Total opens from desktop clients.
    pub desktop: i64,
    /// Total opens from mobile clients.
    pub mobile: i64,
    /// Total opens from unrecognized platforms.
    pub unknown: i64,
    /// Total opens from webmail clients.
    pub web_mail: i64,
}

/// Clicks on one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClickDay {
    /// The date.
    pub date: String,
    /// Total clicks, including repeat clicks by the same recipient.
    pub clicks: i64,
    /// Unique clicks.
    pub unique: i64,
}

/// Clicks over a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClickCounts {
    /// Clicks by date.
    pub days: Vec<ClickDay>,
    /// Total clicks, including repeat clicks by the same recipient.
    pub clicks: i64,
    /// Total unique clicks.
    pub unique: i64,
}

/// Browser family clicks on one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BrowserFamilyDay {
    /// The date.
    pub date: String,
    /// Clicks from Chrome.
    pub chrome: i64,
    /// Clicks from Safari.
    pub safari: i64,
    /// Clicks from Firefox.
    pub firefox: i64,
    /// Clicks from Internet Explorer.
    pub internet_explorer: i64,
    /// Clicks from Opera.
    pub opera: i64,
    /// Clicks from unrecognized browsers.
    pub unknown: i64,
}

/// Browser family clicks over a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BrowserFamilyCounts {
    /// Browser family usage by date.
    pub days: Vec<BrowserFamilyDay>,
    /// Total clicks from Chrome.
    pub chrome: i64,
    /// Total clicks from Safari.
    pub safari: i64,
    /// Total clicks from Firefox.
    pub firefox: i64,
    /// Total clicks from Internet Explorer.
    pub internet_explorer: i64,
    /// Total clicks from Opera.
    pub opera: i64,
    /// Total clicks from unrecognized browsers.
    pub unknown: i64,
}

/// Click location counts on one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClickLocationDay {
    /// The date.
    pub date: String,
    /// Clicks in the HTML part of the email.
    #[serde(rename = "HTML")]
    pub html: i64,
    /// Clicks in the text part of the email.
    pub text: i64,
}

/// Click location counts over a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClickLocationCounts {
    /// Click location counts by date.
    pub days: Vec<ClickLocationDay>,
    /// Total clicks in HTML parts.
    #[serde(rename = "HTML")]
    pub html: i64,
    /// Total clicks in text parts.
    pub text: i64,
}

/// Click platform usage on one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClickPlatformDay {
    /// The date.
    pub date: String,
    /// Clicks from desktop platforms.
    pub desktop: i64,
    /// Clicks from mobile platforms.
    pub mobile: i64,
    /// Clicks from unrecognized platforms.
    pub unknown: i64,
    /// Clicks from webmail platforms.
    pub web_mail: i64,
}

/// Click platform usage over a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClickPlatformCounts {
    /// Click platform usage by date.
    pub days: Vec<ClickPlatformDay>,
    /// Total clicks from desktop platforms.
    pub desktop: i64,
    /// Total clicks from mobile platforms.
    pub mobile: i64,
    /// Total clicks from unrecognized platforms.
    pub unknown: i64,
    /// Total clicks from webmail platforms.
    pub web_mail: i64,
}

/// Email client opens on one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EmailClientDay {
    /// The date.
    pub date: String,
    /// Opens from Outlook.
    pub outlook: i64,
    /// Opens from Gmail.
    pub gmail: i64,
    /// Opens from Apple Mail.
    pub apple_mail: i64,
    /// Opens from Thunderbird.
    pub thunderbird: i64,
    /// Opens from Yahoo.
    pub yahoo: i64,
    /// Opens from unrecognized clients.
    pub unknown: i64,
}

/// Email client opens over a period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EmailClientCounts {
    /// Email client usage by date.
    pub days: Vec<EmailClientDay>,
    /// Total opens from Outlook.
    pub outlook: i64,
    /// Total opens from Gmail.
    pub gmail: i64,
    /// Total opens from Apple Mail.
    pub apple_mail: i64,
    /// Total opens from Thunderbird.
    pub thunderbird: i64,
    /// Total opens from Yahoo.
    pub yahoo: i64,
    /// Total opens from unrecognized clients.
    pub unknown: i64,
}
