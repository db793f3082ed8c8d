use crate::openapi::{ApiDescription, SchemaObject};

/// Resolve the named response schema for an operation.
///
/// Finds the first operation with a matching operationId across every
/// path/method, then follows its 200 JSON response `$ref` into
/// `components.schemas`. Any missing link along the way means "not found".
pub fn response_schema<'a>(
    api: &'a ApiDescription,
    operation_id: &str,
) -> Option<&'a SchemaObject> {
    let op = api.find_operation(operation_id)?;
    let name = op
        .responses
        .get("200")?
        .content
        .get("application/json")?
        .schema
        .as_ref()?
        .ref_name()?;
    api.schema(name)
}
