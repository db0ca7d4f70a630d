use super::field::ObjectSchema;
use crate::proxy::ApiEvent;
use lambda_endpoint_core::{RequestSchema, ValidationError};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Request schema for [`ApiEvent`]s, one optional section per request part.
///
/// Sections are checked in the order query, body, headers; the first
/// violation is reported with a path such as `instance.body.b`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiRequestSchema {
    query: Option<ObjectSchema>,
    body: Option<ObjectSchema>,
    headers: Option<ObjectSchema>,
}

impl ApiRequestSchema {
    /// A schema that accepts every request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the query string parameters.
    pub fn query(mut self, schema: ObjectSchema) -> Self {
        self.query = Some(schema);
        self
    }

    /// Constrain the parsed body.
    pub fn body(mut self, schema: ObjectSchema) -> Self {
        self.body = Some(schema);
        self
    }

    /// Constrain the headers.
    pub fn headers(mut self, schema: ObjectSchema) -> Self {
        self.headers = Some(schema);
        self
    }

    /// Render the whole request as a JSON-schema object.
    pub fn to_json_schema(&self) -> Value {
        let sections = [
            ("query", &self.query),
            ("body", &self.body),
            ("headers", &self.headers),
        ];
        let mut properties = Map::new();
        let mut required = Vec::new();
        for (name, section) in sections {
            if let Some(schema) = section {
                properties.insert(name.to_string(), schema.to_json_schema());
                required.push(Value::String(name.to_string()));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".into(), Value::String("object".into()));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), Value::Array(required));
        Value::Object(schema)
    }
}

fn string_map(map: &HashMap<String, String>) -> Value {
    Value::Object(
        map.iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect(),
    )
}

impl RequestSchema<ApiEvent> for ApiRequestSchema {
    fn validate(&self, event: &ApiEvent) -> Result<(), ValidationError> {
        if let Some(schema) = &self.query {
            schema.validate(&string_map(&event.query), "instance.query")?;
        }
        if let Some(schema) = &self.body {
            schema.validate(&event.body, "instance.body")?;
        }
        if let Some(schema) = &self.headers {
            schema.validate(&string_map(&event.headers), "instance.headers")?;
        }
        Ok(())
    }
}
