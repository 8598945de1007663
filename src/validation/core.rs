use crate::traits::ErrorSink;
use crate::types::{SchemaError, Value};
use crate::validation::options::{ArrayOptions, NumberOptions, StringOptions};
use core::fmt::{self, Debug, Display};
use std::sync::Arc;

/// Caller-supplied check over the whole value of an object node.
///
/// Used for cross-field invariants that no single field validator can express.
pub type CustomRule = Arc<dyn Fn(&Value, &mut dyn ErrorSink) + Send + Sync>;

/// The kind of value a [`Validator`] accepts. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Any finite number.
    Number,
    /// A finite number with no fractional part.
    Integer,
    /// `true` or `false`.
    Boolean,
    /// A string, optionally matching a pattern.
    String,
    /// ISO-8601 date-time with an explicit offset, or a native date-time.
    IsoDateTime,
    /// ISO-8601 calendar date (`YYYY-MM-DD`), or a native date-time.
    IsoDate,
    /// Anything accepted by either `IsoDateTime` or `IsoDate`.
    Date,
    /// Object that tolerates keys it does not declare.
    AnyObject,
    /// Object that rejects keys it does not declare.
    Object,
    /// Array whose elements all satisfy one element validator.
    Array,
}

impl Kind {
    /// Object kinds accept field declarations and custom rules.
    #[inline]
    pub fn is_object(self) -> bool {
        matches!(self, Self::AnyObject | Self::Object)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Number => "a number",
            Self::Integer => "an integer",
            Self::Boolean => "a boolean",
            Self::String => "a string",
            Self::IsoDateTime => "an ISO-8601 date-time",
            Self::IsoDate => "an ISO-8601 date",
            Self::Date => "a date",
            Self::AnyObject | Self::Object => "an object",
            Self::Array => "an array",
        })
    }
}

/// Kind plus its constraints; the array element lives here so it exists
/// exactly when the kind is `Array`.
#[derive(Clone)]
pub(crate) enum Check {
    Number(NumberOptions),
    Integer(NumberOptions),
    Boolean,
    String(StringOptions),
    IsoDateTime,
    IsoDate,
    Date,
    AnyObject,
    Object,
    Array { element: Arc<Validator>, bounds: ArrayOptions },
}

impl Check {
    fn kind(&self) -> Kind {
        match self {
            Self::Number(_) => Kind::Number,
            Self::Integer(_) => Kind::Integer,
            Self::Boolean => Kind::Boolean,
            Self::String(_) => Kind::String,
            Self::IsoDateTime => Kind::IsoDateTime,
            Self::IsoDate => Kind::IsoDate,
            Self::Date => Kind::Date,
            Self::AnyObject => Kind::AnyObject,
            Self::Object => Kind::Object,
            Self::Array { .. } => Kind::Array,
        }
    }
}

/// A named child validator on an object node.
#[derive(Clone)]
pub(crate) struct Field {
    pub(crate) name: String,
    pub(crate) validator: Arc<Validator>,
}

/// A schema node: the accepted kind, its constraints, and for object kinds the
/// declared fields and custom rules.
///
/// Nodes are assembled with the `is_*` constructors and the `with_*` builder
/// methods. Builders take `self` by value, so once a node is embedded in a
/// parent (or [frozen](Validator::freeze)) it can no longer change. A finished
/// tree is `Send + Sync` and can be shared by any number of concurrent runs.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
/// use serde_json::json;
///
/// let child = is_object()
///     .with_required("test", is_string(StringOptions::pattern(r"\w+").unwrap()))
///     .freeze();
///
/// let parent = is_object()
///     .with_required("_id", is_string(StringOptions::pattern("[abc]+").unwrap()))
///     .with_required("child", child.clone())
///     .with_optional("a", is_array(child, ArrayOptions::new().min(1)));
///
/// let ok = json!({ "_id": "aac", "child": { "test": "bar" } });
/// assert_eq!(validate_all(&parent, &ok.into()).error_count(), 0);
///
/// let bad = json!({
///     "_id": "aac",
///     "child": { "test": "bar" },
///     "a": [{ "test": "bar" }, { "foo": "bar" }]
/// });
/// let report = validate_all(&parent, &bad.into());
/// assert!(report.iter().any(|v| v.parameter == "a[1].test"));
/// ```
#[derive(Clone)]
pub struct Validator {
    pub(crate) check: Check,
    pub(crate) required: Vec<Field>,
    pub(crate) optional: Vec<Field>,
    pub(crate) custom: Vec<CustomRule>,
}

impl Validator {
    pub(crate) fn new(check: Check) -> Self {
        Self { check, required: Vec::new(), optional: Vec::new(), custom: Vec::new() }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.check.kind()
    }

    /// Registers a field that must be present and non-null.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already registered on this node, or if the node is
    /// not an object kind. Both are schema-authoring bugs; use
    /// [`Validator::try_with_required`] to handle them as values instead.
    #[track_caller]
    pub fn with_required(
        self,
        name: impl Into<String>,
        child: impl Into<Arc<Validator>>,
    ) -> Self {
        match self.try_with_required(name, child) {
            Ok(node) => node,
            Err(err) => panic!("{err}"),
        }
    }

    /// Registers a field that is validated only when present and non-null.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Validator::with_required`].
    #[track_caller]
    pub fn with_optional(
        self,
        name: impl Into<String>,
        child: impl Into<Arc<Validator>>,
    ) -> Self {
        match self.try_with_optional(name, child) {
            Ok(node) => node,
            Err(err) => panic!("{err}"),
        }
    }

    /// Appends a custom rule, run against the whole object after its fields.
    ///
    /// # Panics
    ///
    /// Panics if the node is not an object kind.
    #[track_caller]
    pub fn with_custom<F>(self, rule: F) -> Self
    where
        F: Fn(&Value, &mut dyn ErrorSink) + Send + Sync + 'static,
    {
        match self.try_with_custom(rule) {
            Ok(node) => node,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`Validator::with_required`].
    pub fn try_with_required(
        mut self,
        name: impl Into<String>,
        child: impl Into<Arc<Validator>>,
    ) -> Result<Self, SchemaError> {
        let field = self.new_field(name.into(), child.into())?;
        self.required.push(field);
        Ok(self)
    }

    /// Fallible form of [`Validator::with_optional`].
    pub fn try_with_optional(
        mut self,
        name: impl Into<String>,
        child: impl Into<Arc<Validator>>,
    ) -> Result<Self, SchemaError> {
        let field = self.new_field(name.into(), child.into())?;
        self.optional.push(field);
        Ok(self)
    }

    /// Fallible form of [`Validator::with_custom`].
    pub fn try_with_custom<F>(mut self, rule: F) -> Result<Self, SchemaError>
    where
        F: Fn(&Value, &mut dyn ErrorSink) + Send + Sync + 'static,
    {
        self.ensure_object("a custom rule")?;
        self.custom.push(Arc::new(rule));
        Ok(self)
    }

    /// Ends the build phase, returning a shareable, immutable node.
    #[inline]
    pub fn freeze(self) -> Arc<Validator> {
        Arc::new(self)
    }

    /// Returns `true` if `name` is declared as a required or optional field.
    pub fn declares(&self, name: &str) -> bool {
        self.fields().any(|field| field.name == name)
    }

    pub(crate) fn fields(&self) -> impl Iterator<Item = &Field> {
        self.required.iter().chain(self.optional.iter())
    }

    fn new_field(&self, name: String, validator: Arc<Validator>) -> Result<Field, SchemaError> {
        self.ensure_object("fields")?;
        if self.declares(&name) {
            return Err(SchemaError::DuplicateField { name });
        }
        Ok(Field { name, validator })
    }

    fn ensure_object(&self, attachment: &'static str) -> Result<(), SchemaError> {
        let kind = self.kind();
        if kind.is_object() {
            Ok(())
        } else {
            Err(SchemaError::NotAnObject { kind, attachment })
        }
    }
}

impl Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = |fields: &[Field]| fields.iter().map(|x| x.name.clone()).collect::<Vec<_>>();
        let mut s = f.debug_struct("Validator");
        s.field("kind", &self.kind());
        if let Check::Array { element, bounds } = &self.check {
            s.field("element", element).field("bounds", bounds);
        }
        s.field("required", &names(self.required.as_slice()))
            .field("optional", &names(self.optional.as_slice()))
            .field("custom_rules", &self.custom.len())
            .finish()
    }
}
