use serde_json::Value;

/// Contextual fields attached to a report, keyed by name. Keys are unique;
/// insertion order carries no meaning.
pub type Fields = serde_json::Map<String, Value>;

/// Capability for extracting report fields from an ambient context.
///
/// Implemented by the host application's request or operation context type;
/// the reporter calls it once per report.
pub trait ContextFields {
    /// Fields to attach to a report. Empty when there is nothing to attach.
    fn report_fields(&self) -> Fields;
}

/// Minimal map-backed context for hosts without their own context type.
#[derive(Debug, Default, Clone)]
pub struct ReportContext {
    fields: Fields,
}

impl ReportContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl ContextFields for ReportContext {
    fn report_fields(&self) -> Fields {
        self.fields.clone()
    }
}

impl ContextFields for () {
    fn report_fields(&self) -> Fields {
        Fields::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_accumulates_and_overwrites_by_key() {
        let ctx = ReportContext::new()
            .with_field("user_id", "42")
            .with_field("attempt", 3)
            .with_field("user_id", "43");

        let fields = ctx.report_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["user_id"], "43");
        assert_eq!(fields["attempt"], 3);
    }

    #[test]
    fn unit_context_carries_no_fields() {
        assert!(().report_fields().is_empty());
    }
}
