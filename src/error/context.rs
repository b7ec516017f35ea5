//! Error context for enriched error information.

use chrono::{DateTime, Utc};
use std::fmt;

/// Context attached to errors: which operation failed, where, and when.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Human-readable description of the operation that failed.
    pub operation: String,

    /// Component/module where the error originated.
    pub component: Option<String>,

    /// Resource involved, e.g. an endpoint URL or a file path.
    pub resource: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            component: None,
            resource: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Formatted `key=value` string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }

        if let Some(ref resource) = self.resource {
            parts.push(format!("resource={}", resource));
        }

        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation)?;
        if let Some(ref component) = self.component {
            write!(f, " in {}", component)?;
        }
        if let Some(ref resource) = self.resource {
            write!(f, " [{}]", resource)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = ErrorContext::new("fetch_bosses")
            .with_component("catalog")
            .with_resource("http://localhost:3000/bosses");

        assert_eq!(ctx.operation, "fetch_bosses");
        assert_eq!(ctx.component.as_deref(), Some("catalog"));
        assert_eq!(ctx.resource.as_deref(), Some("http://localhost:3000/bosses"));
    }

    #[test]
    fn test_context_display() {
        let ctx = ErrorContext::new("save").with_component("preferences");
        assert_eq!(ctx.to_string(), "save in preferences");
    }

    #[test]
    fn test_context_log_string() {
        let log = ErrorContext::new("fetch_weapons")
            .with_resource("/weapons")
            .to_log_string();
        assert!(log.contains("operation=fetch_weapons"));
        assert!(log.contains("resource=/weapons"));
        assert!(log.contains("timestamp="));
        assert!(!log.contains("component="));
    }

    #[test]
    fn test_context_default() {
        assert_eq!(ErrorContext::default().operation, "unknown");
    }
}
