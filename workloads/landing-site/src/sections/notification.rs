//! Toast notifications.

use copyserv_shop::contact::ValidationReport;

use super::html_escape;

/// Message shown after a successful submission.
pub const SENT_MESSAGE: &str = "¡Mensaje enviado! Nos comunicaremos pronto.";

/// Notification kind, which picks the icon and background colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];

    /// Parse a kind name. Unknown names fall back to `Info`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            "warning" => NotificationKind::Warning,
            _ => NotificationKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    /// Font Awesome icon class.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fa-check-circle",
            NotificationKind::Error => "fa-exclamation-circle",
            NotificationKind::Warning => "fa-exclamation-triangle",
            NotificationKind::Info => "fa-info-circle",
        }
    }

    /// Background colour.
    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#27ae60",
            NotificationKind::Error => "#e74c3c",
            NotificationKind::Warning => "#f39c12",
            NotificationKind::Info => "#3498db",
        }
    }
}

/// A notice ready to render. `html` is already escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub html: String,
}

impl Notification {
    /// Create a notification from plain text.
    pub fn new(kind: NotificationKind, text: &str) -> Self {
        Self {
            kind,
            html: html_escape(text),
        }
    }

    /// The success notice shown once the chat opens.
    pub fn sent() -> Self {
        Self::new(NotificationKind::Success, SENT_MESSAGE)
    }

    /// One error notice listing every validation error, or `None` if the
    /// report is clean.
    pub fn from_report(report: &ValidationReport) -> Option<Self> {
        if report.is_valid() {
            return None;
        }
        let html = report
            .errors
            .iter()
            .map(|e| html_escape(e))
            .collect::<Vec<_>>()
            .join("<br>");
        Some(Self {
            kind: NotificationKind::Error,
            html,
        })
    }
}

/// Render a notification toast.
pub fn render_notification(notification: &Notification) -> String {
    let kind = notification.kind;
    format!(
        r#"<div class="notification notification-{}" role="alert" style="background: {}">
    <div class="notification-content">
        <i class="fas {}"></i>
        <span>{}</span>
        <button class="notification-close" aria-label="Cerrar"><i class="fas fa-times"></i></button>
    </div>
</div>"#,
        kind.as_str(),
        kind.color(),
        kind.icon(),
        notification.html
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use copyserv_shop::contact::{validate, ContactRequest};

    #[test]
    fn test_kind_lookup() {
        assert_eq!(NotificationKind::parse("success").icon(), "fa-check-circle");
        assert_eq!(NotificationKind::parse("error").color(), "#e74c3c");
        assert_eq!(NotificationKind::parse("warning").icon(), "fa-exclamation-triangle");
        assert_eq!(NotificationKind::parse("bogus"), NotificationKind::Info);
        assert_eq!(NotificationKind::parse("bogus").color(), "#3498db");
    }

    #[test]
    fn test_report_notice_joins_errors() {
        let request = ContactRequest::new("Al", "abc", "corto");
        let notice = Notification::from_report(&validate(&request)).unwrap();
        assert_eq!(notice.kind, NotificationKind::Error);
        assert_eq!(
            notice.html,
            "El nombre debe tener al menos 3 caracteres<br>Por favor, ingrese un número de teléfono válido<br>La descripción debe tener al menos 10 caracteres"
        );

        let html = render_notification(&notice);
        assert!(html.contains("notification-error"));
        assert!(html.contains("fa-exclamation-circle"));
    }

    #[test]
    fn test_clean_report_has_no_notice() {
        let request = ContactRequest::new("Ana Lopez", "999 999 999", "Se malogró la copiadora");
        assert!(Notification::from_report(&validate(&request)).is_none());
    }

    #[test]
    fn test_sent_notice() {
        let html = render_notification(&Notification::sent());
        assert!(html.contains("notification-success"));
        assert!(html.contains("#27ae60"));
        assert!(html.contains(SENT_MESSAGE));
    }
}
