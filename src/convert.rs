use crate::error::IndentError;
use crate::model::{
    Collection, CollectionChild, Document, DocumentChild, Node, Payload, Property, PropertyName,
    Value, ValueType,
};

/// Converts a `serde_json::Value` into the formatter's tree.
///
/// The root must be an object or array, since those are the only legal tree
/// roots. Literal text is produced once here (strings via `serde_json`
/// escaping, numbers verbatim from the source value) and rendered untouched
/// afterwards.
pub fn value_to_node(element: &serde_json::Value, recursion_limit: usize) -> Result<Node, IndentError> {
    match element {
        serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
            match convert_element(element, recursion_limit)?.payload {
                Payload::Container(node) => Ok(*node),
                Payload::Literal(_) => unreachable!("container converts to container"),
            }
        }
        _ => Err(IndentError::simple(
            "Only objects and arrays can form the root of a document",
        )),
    }
}

fn convert_element(element: &serde_json::Value, recursion_limit: usize) -> Result<Value, IndentError> {
    if recursion_limit == 0 {
        return Err(IndentError::simple(
            "Depth limit exceeded - possible circular reference",
        ));
    }

    let value = match element {
        serde_json::Value::Null => Value::literal("null", ValueType::Null),
        serde_json::Value::Bool(b) => {
            Value::literal(if *b { "true" } else { "false" }, ValueType::Boolean)
        }
        serde_json::Value::Number(num) => Value::literal(num.to_string(), ValueType::Number),
        serde_json::Value::String(s) => {
            let quoted = serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s));
            Value::literal(quoted, ValueType::String)
        }
        serde_json::Value::Array(arr) => {
            let mut collection = Collection::default();
            for child in arr {
                let converted = convert_element(child, recursion_limit - 1)?;
                collection.children.push(CollectionChild::Value(converted));
            }
            Value::container(Node::Collection(collection))
        }
        serde_json::Value::Object(map) => {
            let mut doc = Document::default();
            for (key, child) in map.iter() {
                let name = serde_json::to_string(key).unwrap_or_else(|_| format!("\"{}\"", key));
                let converted = convert_element(child, recursion_limit - 1)?;
                doc.children.push(DocumentChild::Property(Property {
                    name: PropertyName::new(name),
                    value: converted,
                }));
            }
            Value::container(Node::Document(doc))
        }
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_nested_containers() {
        let node = value_to_node(&json!({"a": [1, null], "b": "x"}), 10).unwrap();
        let doc = match node {
            Node::Document(doc) => doc,
            Node::Collection(_) => panic!("expected a document root"),
        };
        assert_eq!(doc.children.len(), 2);
        let DocumentChild::Property(prop) = &doc.children[0] else {
            panic!("expected a property");
        };
        assert_eq!(prop.name.text(), "a");
        assert_eq!(prop.value.value_type, ValueType::Array);
    }

    #[test]
    fn rejects_scalar_roots() {
        assert!(value_to_node(&json!(42), 10).is_err());
    }

    #[test]
    fn enforces_depth_limit() {
        let deep = json!([[[[[1]]]]]);
        assert!(value_to_node(&deep, 3).is_err());
        assert!(value_to_node(&deep, 10).is_ok());
    }
}
