//! Declarative form schemas and the per-tab form state built from them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use contracts::domain::common::{is_blank, parse_iso_date};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Password,
    Email,
    Number { min: Option<f64>, step: Option<&'static str> },
    Date,
    /// Fixed `(value, label)` options
    Select(&'static [(&'static str, &'static str)]),
    /// Options supplied at render time (e.g. rooms fetched from the backend)
    DynamicSelect,
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Message shown when the field is submitted empty; `None` = optional
    pub required: Option<&'static str>,
    pub default: &'static str,
    pub placeholder: &'static str,
    pub readonly: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: None,
            default: "",
            placeholder: "",
            readonly: false,
        }
    }

    pub const fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.default = value;
        self
    }

    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = text;
        self
    }

    pub const fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn input_type(&self) -> &'static str {
        match self.kind {
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Email => "email",
            FieldKind::Number { .. } => "number",
            FieldKind::Date => "date",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Select(_) | FieldKind::DynamicSelect => "select",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSchema {
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Field name → raw string value, as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<&'static str, String>,
}

impl FormState {
    pub fn from_schema(schema: &FormSchema) -> Self {
        Self {
            values: schema
                .fields
                .iter()
                .map(|f| (f.name, f.default.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Unknown names are ignored; the schema fixes the field set
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value.into();
        }
    }

    /// Back to schema defaults, keeping the values of `keep`
    pub fn reset(&mut self, schema: &FormSchema, keep: &[&str]) {
        let mut fresh = Self::from_schema(schema);
        for name in keep {
            if let Some(value) = self.values.get(*name) {
                fresh.set(name, value.clone());
            }
        }
        *self = fresh;
    }

    /// First required field left blank, in schema order
    pub fn check_required(&self, schema: &FormSchema) -> Result<(), String> {
        for field in schema.fields {
            if let Some(message) = field.required {
                if is_blank(self.get(field.name)) {
                    return Err(message.to_string());
                }
            }
        }
        Ok(())
    }

    /// Required-field gate, then the typed binding
    pub fn bind<T>(
        &self,
        schema: &FormSchema,
        f: impl FnOnce(&Self) -> Result<T, String>,
    ) -> Result<T, String> {
        self.check_required(schema)?;
        f(self)
    }

    pub fn text(&self, name: &str) -> String {
        self.get(name).trim().to_string()
    }

    pub fn optional_text(&self, name: &str) -> Option<String> {
        Some(self.text(name)).filter(|v| !v.is_empty())
    }

    pub fn parse_i64(&self, name: &str, message: &str) -> Result<i64, String> {
        self.get(name)
            .trim()
            .parse::<i64>()
            .map_err(|_| message.to_string())
    }

    /// Blank and negative input are both rejected with `message`
    pub fn parse_u32(&self, name: &str, message: &str) -> Result<u32, String> {
        let raw = self.get(name).trim();
        raw.parse::<u32>()
            .or_else(|_| {
                // accept "2.0" from number inputs
                raw.parse::<f64>()
                    .ok()
                    .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u32::MAX as f64)
                    .map(|v| v as u32)
                    .ok_or(())
            })
            .map_err(|_| message.to_string())
    }

    pub fn parse_f64(&self, name: &str, message: &str) -> Result<f64, String> {
        self.get(name)
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| message.to_string())
    }

    pub fn parse_date(&self, name: &str, message: &str) -> Result<NaiveDate, String> {
        parse_iso_date(self.get(name)).ok_or_else(|| message.to_string())
    }

    pub fn parse_bool(&self, name: &str) -> bool {
        matches!(self.get(name).trim(), "true" | "on" | "1")
    }
}
