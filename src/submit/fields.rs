use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

/// A form field's value: scalar until a second field shares the name, an
/// ordered list from then on.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    One(String),
    Many(Vec<String>),
}

impl FieldValue {
    fn push(&mut self, value: String) {
        match self {
            Self::One(first) => *self = Self::Many(vec![std::mem::take(first), value]),
            Self::Many(values) => values.push(value),
        }
    }

    /// Single values as-is; lists joined comma-space for one-line contexts
    /// (mailto body, subject name, validation input).
    pub fn as_text(&self) -> String {
        match self {
            Self::One(value) => value.clone(),
            Self::Many(values) => values.join(", "),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::One(value) => Value::String(value.clone()),
            Self::Many(values) => values.iter().cloned().map(Value::String).collect(),
        }
    }
}

/// Ordered name → value mapping built fresh from a form on every submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    entries: Vec<(String, FieldValue)>,
}

impl FormFields {
    /// Folds an ordered name/value sequence: the first occurrence of a name
    /// stays scalar, a repeat promotes it to a two-element list, further
    /// repeats append. Purely structural, no validation.
    pub fn collect<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields = Self::default();
        for (name, value) in entries {
            fields.push(name, value);
        }
        fields
    }

    fn push(&mut self, name: String, value: String) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, field)) => field.push(value),
            None => self.entries.push((name, FieldValue::One(value))),
        }
    }

    /// Reads the form's current field set in document order. Values without
    /// a text rendition (file inputs) are skipped.
    pub fn from_form(form: &HtmlFormElement) -> Self {
        let Ok(data) = web_sys::FormData::new_with_form(form) else {
            return Self::default();
        };
        let mut pairs = Vec::new();
        for entry in data.entries() {
            let Ok(entry) = entry else { continue };
            let pair: js_sys::Array = entry.unchecked_into();
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string())
            {
                pairs.push((name, value));
            }
        }
        Self::collect(pairs)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(FieldValue::as_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Relay payload: every field plus the recipient address, lists kept as
    /// arrays for the template layer to interpolate.
    pub fn to_template_params(&self, recipient: &str) -> Value {
        let mut params = Map::new();
        for (name, value) in &self.entries {
            params.insert(name.clone(), value.to_json());
        }
        params.insert("to_email".into(), Value::String(recipient.into()));
        Value::Object(params)
    }
}
