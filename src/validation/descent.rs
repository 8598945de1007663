//! Recursive descent of a value against a validator tree.
//!
//! Every node reports relative to the value it was handed. Descending into a
//! field or element wraps the sink in a [`Scoped`] for that segment, so paths
//! are composed on the way back up and the root path stays empty.
//!
//! Recursion depth follows the schema, except for array elements: an array
//! whose element validator (directly or through fields) is itself an array is
//! walked as deep as the data nests, so work is proportional to input size.

use crate::traits::{ErrorSink, Scoped, Validate};
use crate::types::{Value, Violation};
use crate::validation::core::{Check, Kind, Validator};
use crate::validation::options::ArrayOptions;
use crate::validation::primitives::{
    check_array_length, check_boolean, check_date, check_number, check_string,
};

impl Validate for Validator {
    fn validate(&self, value: &Value, sink: &mut dyn ErrorSink) {
        match &self.check {
            Check::AnyObject => self.validate_object(value, false, sink),
            Check::Object => self.validate_object(value, true, sink),
            Check::Array { element, bounds } => validate_array(element, bounds, value, sink),
            Check::Number(options) => check_number(value, options, false, sink),
            Check::Integer(options) => check_number(value, options, true, sink),
            Check::Boolean => check_boolean(value, sink),
            Check::String(options) => check_string(value, options, sink),
            Check::IsoDateTime => check_date(value, Kind::IsoDateTime, sink),
            Check::IsoDate => check_date(value, Kind::IsoDate, sink),
            Check::Date => check_date(value, Kind::Date, sink),
        }
    }
}

impl Validator {
    fn validate_object(&self, value: &Value, strict: bool, sink: &mut dyn ErrorSink) {
        let Some(map) = value.as_object() else {
            return sink.report(Violation::type_mismatch(&self.kind().to_string(), value));
        };

        for field in &self.required {
            match map.get(&field.name) {
                Some(child) if !child.is_null() => {
                    field.validator.validate(child, &mut Scoped::new(sink, field.name.as_str()));
                }
                _ => sink.report(Violation::missing(&field.name)),
            }
        }

        for field in &self.optional {
            if let Some(child) = map.get(&field.name).filter(|child| !child.is_null()) {
                field.validator.validate(child, &mut Scoped::new(sink, field.name.as_str()));
            }
        }

        if strict {
            for (key, child) in map {
                if !self.declares(key) {
                    sink.report(Violation::unexpected(key, child));
                }
            }
        }

        for rule in &self.custom {
            rule(value, sink);
        }
    }
}

fn validate_array(
    element: &Validator,
    bounds: &ArrayOptions,
    value: &Value,
    sink: &mut dyn ErrorSink,
) {
    let Some(items) = value.as_array() else {
        return sink.report(Violation::type_mismatch(&Kind::Array.to_string(), value));
    };
    check_array_length(items.len(), bounds, value, sink);
    for (index, item) in items.iter().enumerate() {
        element.validate(item, &mut Scoped::new(sink, index));
    }
}
