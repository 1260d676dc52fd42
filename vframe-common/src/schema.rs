//! Parameter schemas: the list of fields a frame lets you edit

use crate::content::ContentParams;
use std::collections::HashSet;
use thiserror::Error;

/// A single editable text attribute
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterField {
    /// Key into [`ContentParams`], unique within a schema
    pub name: String,
    pub label: String,
    pub placeholder: Option<String>,
    /// Advisory default. Never shown as the field's value unless the caller
    /// seeds the content with it (see [`ParameterSchema::defaults`]).
    pub default_value: Option<String>,
}

impl ParameterField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            placeholder: None,
            default_value: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("duplicate field name '{0}'")]
    DuplicateField(String),
    #[error("field name must not be empty")]
    EmptyName,
}

/// Display data for one rendered input, in schema order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRow {
    pub name: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub value: String,
}

/// Ordered set of fields. Order is render and tab order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterSchema {
    fields: Vec<ParameterField>,
}

impl ParameterSchema {
    /// Validate and wrap a field list.
    pub fn try_new(fields: Vec<ParameterField>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyName);
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn fields(&self) -> &[ParameterField] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterField> {
        self.fields.iter()
    }

    pub fn field(&self, name: &str) -> Option<&ParameterField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// One row per field, in schema order. Keys of `value` that are not in
    /// the schema produce no row.
    pub fn rows(&self, value: &ContentParams) -> Vec<FieldRow> {
        self.fields
            .iter()
            .map(|field| FieldRow {
                name: field.name.clone(),
                label: field.label.clone(),
                placeholder: field.placeholder.clone(),
                value: value.get(&field.name).to_string(),
            })
            .collect()
    }

    /// Content made of the fields' advisory defaults. Fields without one are
    /// left out.
    pub fn defaults(&self) -> ContentParams {
        self.fields
            .iter()
            .filter_map(|f| f.default_value.as_ref().map(|v| (f.name.clone(), v.clone())))
            .collect()
    }

    /// Initial content for this schema, reading each field through `lookup`
    /// (typically the URL query). Absent fields become `""`.
    pub fn initial_content<F>(&self, lookup: F) -> ContentParams
    where
        F: Fn(&str) -> Option<String>,
    {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), lookup(&f.name).unwrap_or_default()))
            .collect()
    }
}

impl Default for ParameterSchema {
    /// The title / date / tags schema most frames use.
    fn default() -> Self {
        ParameterSchema::builder()
            .field("title", "Title")
            .placeholder("Episode title")
            .field("date", "Date")
            .placeholder("YYYY-MM-DD")
            .field("tags", "Tags")
            .placeholder("rust, video, render")
            .build()
    }
}

/// Builder for schemas known at compile time
pub struct SchemaBuilder {
    fields: Vec<ParameterField>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field
    pub fn field(mut self, name: &str, label: &str) -> Self {
        self.fields.push(ParameterField::new(name, label));
        self
    }

    /// Set the placeholder of the last field
    pub fn placeholder(mut self, placeholder: &str) -> Self {
        if let Some(last) = self.fields.last_mut() {
            last.placeholder = Some(placeholder.to_string());
        }
        self
    }

    /// Set the advisory default of the last field
    pub fn default_value(mut self, value: &str) -> Self {
        if let Some(last) = self.fields.last_mut() {
            last.default_value = Some(value.to_string());
        }
        self
    }

    /// Build the schema. Panics on duplicate or empty names; use
    /// [`ParameterSchema::try_new`] for field lists that are not constants.
    pub fn build(self) -> ParameterSchema {
        match ParameterSchema::try_new(self.fields) {
            Ok(schema) => schema,
            Err(e) => panic!("invalid parameter schema: {e}"),
        }
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_fields() {
        let schema = ParameterSchema::default();
        let names: Vec<_> = schema.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["title", "date", "tags"]);
    }

    #[test]
    fn test_rows_follow_schema_order_and_labels() {
        let schema = ParameterSchema::builder()
            .field("b", "Bee")
            .field("a", "Ay")
            .field("c", "See")
            .build();
        let value: ContentParams = [("a", "1"), ("c", "3"), ("zzz", "extra")]
            .into_iter()
            .collect();

        let rows = schema.rows(&value);
        assert_eq!(rows.len(), schema.len());
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Bee", "Ay", "See"]);
        let values: Vec<_> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["", "1", "3"]);
    }

    #[test]
    fn test_rows_do_not_fill_defaults() {
        let schema = ParameterSchema::builder()
            .field("title", "Title")
            .default_value("Hello")
            .build();
        let rows = schema.rows(&ContentParams::new());
        assert_eq!(rows[0].value, "");
        assert_eq!(schema.defaults().get("title"), "Hello");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = ParameterSchema::try_new(vec![
            ParameterField::new("title", "Title"),
            ParameterField::new("title", "Again"),
        ])
        .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateField("title".into()));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = ParameterSchema::try_new(vec![ParameterField::new("", "Nothing")]).unwrap_err();
        assert_eq!(err, SchemaError::EmptyName);
    }

    #[test]
    #[should_panic(expected = "duplicate field name 'x'")]
    fn test_builder_panics_on_duplicate() {
        ParameterSchema::builder().field("x", "X").field("x", "X").build();
    }

    #[test]
    fn test_initial_content_defaults_to_empty() {
        let schema = ParameterSchema::default();
        let content = schema.initial_content(|name| (name == "title").then(|| "T".to_string()));
        assert_eq!(content.get("title"), "T");
        assert_eq!(content.get("date"), "");
        assert!(content.contains_key("tags"));
        assert_eq!(content.len(), 3);
    }
}
