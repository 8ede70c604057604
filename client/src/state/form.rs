//! Per-form input state with touched-gated error display.
//!
//! DESIGN
//! ======
//! A field becomes "touched" on its first blur (or on a submit attempt).
//! Errors are recomputed on every change to a touched field and to touched
//! fields that read it, but `visible_error` only reports errors for touched
//! fields so a pristine form renders clean.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::util::schema::{FormValues, Schema};
use crate::util::validation::{Field, ValidationError};

#[derive(Clone, Debug)]
pub struct FormState {
    schema: &'static Schema,
    pub values: FormValues,
    touched: BTreeSet<Field>,
    errors: BTreeMap<Field, ValidationError>,
}

impl FormState {
    pub fn new(schema: &'static Schema) -> Self {
        Self::with_defaults(schema, FormValues::default())
    }

    /// Start from caller-supplied initial values. Nothing is touched yet.
    pub fn with_defaults(schema: &'static Schema, values: FormValues) -> Self {
        Self { schema, values, touched: BTreeSet::new(), errors: BTreeMap::new() }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Record new input for `field`.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        if self.touched.contains(&field) {
            self.revalidate(field);
        }
        let dependents: Vec<Field> = self
            .schema
            .dependents_of(field)
            .filter(|dep| self.touched.contains(dep))
            .collect();
        for dep in dependents {
            self.revalidate(dep);
        }
    }

    /// Mark `field` as interacted with and validate it.
    pub fn touch(&mut self, field: Field) {
        if !self.schema.contains(field) {
            return;
        }
        self.touched.insert(field);
        self.revalidate(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error to render under `field`, if it has been touched.
    pub fn visible_error(&self, field: Field) -> Option<&ValidationError> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors.get(&field)
    }

    /// Touch and validate every schema field.
    ///
    /// # Errors
    ///
    /// Returns every failing field's error, in schema order.
    pub fn validate_all(&mut self) -> Result<(), Vec<ValidationError>> {
        let fields: Vec<Field> = self.schema.field_names().collect();
        self.touched.extend(fields.iter().copied());
        self.errors.clear();

        let errors = self.schema.validate(&self.values);
        for err in &errors {
            self.errors.insert(err.field, err.clone());
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Clear values, touched flags and errors.
    pub fn reset(&mut self) {
        *self = Self::new(self.schema);
    }

    fn revalidate(&mut self, field: Field) {
        match self.schema.validate_field(field, &self.values) {
            Some(err) => {
                self.errors.insert(field, err);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}
