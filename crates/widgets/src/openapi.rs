//! Serde model of the interface description.
//!
//! Only the subset the widget pipeline reads is modeled. Every optional
//! piece defaults, so absent data never fails deserialization; `paths` is
//! the one mandatory key, because without it no widgets can be produced
//! at all.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use widgetd_core::WidgetdError;

/// Root of the interface description. `IndexMap` keeps source iteration
/// order, which determines widget insertion order downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDescription {
    /// Route path → HTTP method → operation.
    pub paths: IndexMap<String, PathItem>,
    #[serde(default)]
    pub components: Components,
}

pub type PathItem = IndexMap<String, Operation>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// First tag is the authoritative category.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Status code → response object.
    #[serde(default)]
    pub responses: IndexMap<String, ResponseObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Parameter location; only "query" matters here.
    #[serde(rename = "in")]
    pub location: String,
    #[serde(default)]
    pub schema: Option<TypeDescriptor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseObject {
    /// Media type → content descriptor.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    #[serde(default)]
    pub schema: Option<TypeDescriptor>,
}

/// A named schema from `components.schemas`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaObject {
    #[serde(default)]
    pub properties: IndexMap<String, TypeDescriptor>,
}

/// One descriptor type covering parameter schemas, schema properties and
/// response references. Every field is optional; [`TypeDescriptor::shape`]
/// classifies the result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeDescriptor {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(rename = "enum", default)]
    pub enum_values: Option<Vec<Value>>,
    #[serde(rename = "anyOf", default)]
    pub any_of: Option<Vec<TypeDescriptor>>,
    #[serde(rename = "oneOf", default)]
    pub one_of: Option<Vec<TypeDescriptor>>,
    #[serde(default)]
    pub items: Option<Box<TypeDescriptor>>,
    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,
}

/// Classified shape of a type descriptor.
#[derive(Debug)]
pub enum DescriptorShape<'a> {
    /// Direct `enum` on the descriptor.
    Enum(&'a [Value]),
    /// `anyOf` union of sub-descriptors.
    AnyOf(&'a [TypeDescriptor]),
    /// Plain `type` string.
    Direct(&'a str),
    /// Nothing recognizable.
    Unrecognized,
}

impl TypeDescriptor {
    /// Classify the descriptor. Precedence: enum, then anyOf, then type.
    pub fn shape(&self) -> DescriptorShape<'_> {
        if let Some(values) = &self.enum_values {
            return DescriptorShape::Enum(values);
        }
        if let Some(members) = &self.any_of {
            return DescriptorShape::AnyOf(members);
        }
        if let Some(type_name) = &self.type_name {
            return DescriptorShape::Direct(type_name);
        }
        DescriptorShape::Unrecognized
    }

    /// Last path segment of a `$ref` (the schema name), if any.
    pub fn ref_name(&self) -> Option<&str> {
        let reference = self.reference.as_deref()?;
        Some(reference.rsplit('/').next().unwrap_or(reference))
    }
}

impl std::str::FromStr for ApiDescription {
    type Err = WidgetdError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(text)?)
    }
}

impl ApiDescription {
    pub fn from_value(value: Value) -> Result<Self, WidgetdError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Look up a named schema from `components.schemas`.
    pub fn schema(&self, name: &str) -> Option<&SchemaObject> {
        self.components.schemas.get(name)
    }

    /// First operation with the given operationId, across every
    /// path/method. Duplicate ids are a producer error; first match wins.
    pub fn find_operation(&self, operation_id: &str) -> Option<&Operation> {
        self.paths
            .values()
            .flat_map(|methods| methods.values())
            .find(|op| op.operation_id.as_deref() == Some(operation_id))
    }
}
