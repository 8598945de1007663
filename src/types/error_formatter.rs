//! Violation list formatting utilities.

use crate::types::Violation;

/// Trait for customizing how a list of violations is rendered.
pub trait ErrorFormatter {
    fn format_item(&self, item: &Violation) -> String {
        item.to_string()
    }

    fn separator(&self) -> &str {
        "; "
    }

    fn format_list(&self, items: &[Violation]) -> String {
        items.iter().map(|item| self.format_item(item)).collect::<Vec<_>>().join(self.separator())
    }
}

/// Configuration-based violation formatter used by
/// [`ValidationError`](crate::ValidationError) summaries.
///
/// # Examples
///
/// ```
/// use schema_rail::{ErrorFormatter, ReportFormat, Value, Violation};
///
/// let items = [
///     Violation::missing("id"),
///     Violation::constraint("must be at most 3", &Value::from(4)).within("count"),
/// ];
///
/// assert_eq!(
///     ReportFormat::default().format_list(&items),
///     "id: is required; count: must be at most 3"
/// );
/// assert_eq!(
///     ReportFormat::compact().format_list(&items),
///     "id: is required | count: must be at most 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormat {
    pub separator: String,
    pub item_prefix: Option<String>,
    pub last_prefix: Option<String>,
    pub root_label: Option<String>,
    pub show_kind: bool,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            separator: "; ".into(),
            item_prefix: None,
            last_prefix: None,
            root_label: None,
            show_kind: false,
        }
    }
}

impl ReportFormat {
    /// One violation per line, drawn as a tree.
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            item_prefix: Some("├─ ".into()),
            last_prefix: Some("└─ ".into()),
            root_label: Some("<root>".into()),
            ..Default::default()
        }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    /// Prefixes every item with its [`ViolationKind`](crate::ViolationKind).
    #[inline]
    pub fn with_kind(mut self) -> Self {
        self.show_kind = true;
        self
    }
}

impl ErrorFormatter for ReportFormat {
    fn format_item(&self, item: &Violation) -> String {
        let mut result = String::new();
        if self.show_kind {
            result.push('[');
            result.push_str(&item.kind.to_string());
            result.push_str("] ");
        }
        match &self.root_label {
            Some(label) if item.parameter.is_root() => {
                result.push_str(label);
                result.push_str(": ");
                result.push_str(&item.message);
            }
            _ => result.push_str(&item.to_string()),
        }
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_list(&self, items: &[Violation]) -> String {
        let count = items.len();
        let mut result = String::with_capacity(count * 32);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
            }
            let prefix = if i + 1 == count {
                self.last_prefix.as_ref().or(self.item_prefix.as_ref())
            } else {
                self.item_prefix.as_ref()
            };
            if let Some(p) = prefix {
                result.push_str(p);
            }
            result.push_str(&self.format_item(item));
        }
        result
    }
}
