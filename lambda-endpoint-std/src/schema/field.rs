use lambda_endpoint_core::ValidationError;
use serde_json::{Map, Value, json};

/// The type a field must have.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// A JSON string.
    String,
    /// A JSON number without a fractional part.
    Integer,
    /// Any JSON number.
    Number,
    /// `true` or `false`.
    Boolean,
    /// A nested object.
    Object(ObjectSchema),
    /// An array whose items all have the given type.
    Array(Box<FieldType>),
}

impl FieldType {
    /// An array of `items`.
    pub fn array(items: FieldType) -> Self {
        FieldType::Array(Box::new(items))
    }

    /// The JSON-schema type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object(_) => "object",
            FieldType::Array(_) => "array",
        }
    }

    /// Render as a JSON-schema fragment.
    pub fn to_json_schema(&self) -> Value {
        match self {
            FieldType::Object(schema) => schema.to_json_schema(),
            FieldType::Array(items) => json!({ "type": "array", "items": items.to_json_schema() }),
            primitive => json!({ "type": primitive.type_name() }),
        }
    }

    fn matches_type(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => {
                value.is_i64()
                    || value.is_u64()
                    || value.as_f64().is_some_and(|n| n.fract() == 0.0)
            }
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Object(_) => value.is_object(),
            FieldType::Array(_) => value.is_array(),
        }
    }

    /// Check `value`, reporting violations under `property`.
    pub fn check(&self, value: &Value, property: &str) -> Result<(), ValidationError> {
        if !self.matches_type(value) {
            return Err(self.type_error(property));
        }

        match (self, value) {
            (FieldType::Object(schema), Value::Object(map)) => schema.check_object(map, property),
            (FieldType::Array(items), Value::Array(values)) => {
                for (index, item) in values.iter().enumerate() {
                    items.check(item, &format!("{property}[{index}]"))?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn type_error(&self, property: &str) -> ValidationError {
        let name = self.type_name();
        ValidationError::new(
            property,
            "type",
            format!("is not of a type(s) {name}"),
            vec![name.to_string()],
            self.to_json_schema(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Field {
    name: String,
    kind: FieldType,
    required: bool,
}

/// An object with named, typed fields.
///
/// Fields are required unless added with [`optional`](Self::optional).
/// Properties not declared are allowed unless
/// [`additional_properties(false)`](Self::additional_properties) is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    fields: Vec<Field>,
    additional_properties: bool,
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            additional_properties: true,
        }
    }
}

impl ObjectSchema {
    /// An object schema with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, kind: FieldType) -> Self {
        self.fields.push(Field {
            name: name.into(),
            kind,
            required: true,
        });
        self
    }

    /// Add an optional field.
    pub fn optional(mut self, name: impl Into<String>, kind: FieldType) -> Self {
        self.fields.push(Field {
            name: name.into(),
            kind,
            required: false,
        });
        self
    }

    /// Add a required string field.
    pub fn string(self, name: impl Into<String>) -> Self {
        self.field(name, FieldType::String)
    }

    /// Add a required integer field.
    pub fn integer(self, name: impl Into<String>) -> Self {
        self.field(name, FieldType::Integer)
    }

    /// Add a required number field.
    pub fn number(self, name: impl Into<String>) -> Self {
        self.field(name, FieldType::Number)
    }

    /// Add a required boolean field.
    pub fn boolean(self, name: impl Into<String>) -> Self {
        self.field(name, FieldType::Boolean)
    }

    /// Add a required nested object field.
    pub fn object(self, name: impl Into<String>, schema: ObjectSchema) -> Self {
        self.field(name, FieldType::Object(schema))
    }

    /// Add a required array field.
    pub fn array(self, name: impl Into<String>, items: FieldType) -> Self {
        self.field(name, FieldType::array(items))
    }

    /// Allow or reject undeclared properties.
    pub fn additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = allowed;
        self
    }

    /// Render as a JSON-schema object.
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.kind.to_json_schema()))
            .collect();
        let required: Vec<Value> = self
            .fields
            .iter()
            .filter(|field| field.required)
            .map(|field| Value::String(field.name.clone()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), Value::String("object".into()));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), Value::Array(required));
        if !self.additional_properties {
            schema.insert("additionalProperties".into(), Value::Bool(false));
        }
        Value::Object(schema)
    }

    /// Check that `value` is an object conforming to this schema.
    pub fn validate(&self, value: &Value, property: &str) -> Result<(), ValidationError> {
        match value {
            Value::Object(map) => self.check_object(map, property),
            _ => Err(FieldType::Object(self.clone()).type_error(property)),
        }
    }

    // Declared properties first, then missing required ones, then extras.
    fn check_object(
        &self,
        map: &Map<String, Value>,
        property: &str,
    ) -> Result<(), ValidationError> {
        for field in &self.fields {
            if let Some(value) = map.get(&field.name) {
                field.kind.check(value, &format!("{property}.{}", field.name))?;
            }
        }

        if let Some(missing) = self
            .fields
            .iter()
            .find(|field| field.required && !map.contains_key(&field.name))
        {
            return Err(ValidationError::new(
                property,
                "required",
                format!("requires property \"{}\"", missing.name),
                vec![missing.name.clone()],
                self.to_json_schema(),
            ));
        }

        if !self.additional_properties {
            if let Some(extra) = map
                .keys()
                .find(|key| !self.fields.iter().any(|field| &field.name == *key))
            {
                return Err(ValidationError::new(
                    property,
                    "additionalProperties",
                    format!("is not allowed to have the additional property \"{extra}\""),
                    vec![extra.clone()],
                    self.to_json_schema(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_reports_path() {
        let schema = ObjectSchema::new().string("b");
        let err = schema.validate(&json!({ "b": 0 }), "instance.body").unwrap_err();

        assert_eq!(err.property, "instance.body.b");
        assert_eq!(err.name, "type");
        assert_eq!(err.message, "is not of a type(s) string");
        assert_eq!(err.argument, vec!["string".to_string()]);
        assert_eq!(err.schema, json!({ "type": "string" }));
        assert_eq!(err.stack, "instance.body.b is not of a type(s) string");
    }

    #[test]
    fn test_missing_required_field() {
        let schema = ObjectSchema::new().string("a").optional("b", FieldType::Integer);
        let err = schema.validate(&json!({ "b": 1 }), "instance.body").unwrap_err();

        assert_eq!(err.property, "instance.body");
        assert_eq!(err.name, "required");
        assert_eq!(err.message, "requires property \"a\"");
        assert_eq!(err.argument, vec!["a".to_string()]);
    }

    #[test]
    fn test_optional_field_may_be_absent() {
        let schema = ObjectSchema::new().optional("b", FieldType::Boolean);
        assert!(schema.validate(&json!({}), "instance").is_ok());
        assert!(schema.validate(&json!({ "b": "yes" }), "instance").is_err());
    }

    #[test]
    fn test_additional_properties() {
        let open = ObjectSchema::new().string("a");
        assert!(open.validate(&json!({ "a": "x", "z": 1 }), "instance").is_ok());

        let closed = open.additional_properties(false);
        let err = closed
            .validate(&json!({ "a": "x", "z": 1 }), "instance")
            .unwrap_err();
        assert_eq!(err.name, "additionalProperties");
        assert_eq!(err.argument, vec!["z".to_string()]);
        assert_eq!(closed.to_json_schema()["additionalProperties"], json!(false));
    }

    #[test]
    fn test_nested_objects_and_arrays() {
        let schema = ObjectSchema::new()
            .object("catalog", ObjectSchema::new().integer("tenantId"))
            .array("ids", FieldType::String);

        assert!(
            schema
                .validate(
                    &json!({ "catalog": { "tenantId": 3 }, "ids": ["a", "b"] }),
                    "instance.body"
                )
                .is_ok()
        );

        let err = schema
            .validate(
                &json!({ "catalog": { "tenantId": 3.5 }, "ids": [] }),
                "instance.body",
            )
            .unwrap_err();
        assert_eq!(err.property, "instance.body.catalog.tenantId");
        assert_eq!(err.argument, vec!["integer".to_string()]);

        let err = schema
            .validate(
                &json!({ "catalog": { "tenantId": 3 }, "ids": ["a", 2] }),
                "instance.body",
            )
            .unwrap_err();
        assert_eq!(err.property, "instance.body.ids[1]");
    }

    #[test]
    fn test_non_object_value() {
        let err = ObjectSchema::new()
            .validate(&json!([1, 2]), "instance.body")
            .unwrap_err();
        assert_eq!(err.message, "is not of a type(s) object");
    }

    #[test]
    fn test_integer_accepts_whole_floats() {
        assert!(FieldType::Integer.check(&json!(2.0), "instance").is_ok());
        assert!(FieldType::Number.check(&json!(2.5), "instance").is_ok());
        assert!(FieldType::Integer.check(&json!("2"), "instance").is_err());
    }
}
