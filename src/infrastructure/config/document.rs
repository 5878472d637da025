//! Generic document tree.
//!
//! YAML is parsed with `serde_yaml` and converted into [`Node`], a small tree
//! that only knows about nulls, scalar text, ordered mappings and sequences.
//! Numbers and booleans are kept as their textual form; typing happens when the
//! tree is bound onto the configuration entities.

use serde_yaml::Value;

use super::error::{ConfigError, ConfigResult};

/// One node of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Explicit or implicit null
    Null,
    /// Any scalar, in its textual form
    Scalar(String),
    /// Key/value pairs in document order
    Mapping(Vec<(String, Node)>),
    /// Elements in document order
    Sequence(Vec<Node>),
}

impl Node {
    /// Short name of the node's shape, used in type mismatch messages.
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(_) => "scalar",
            Self::Mapping(_) => "mapping",
            Self::Sequence(_) => "sequence",
        }
    }

    /// Rebuild the tree with every scalar passed through `f`.
    ///
    /// Mappings and sequences keep their order. The first error from `f` stops
    /// the walk and is returned.
    pub fn map_scalars<E, F>(&self, f: &mut F) -> Result<Self, E>
    where
        F: FnMut(&str) -> Result<String, E>,
    {
        match self {
            Self::Null => Ok(Self::Null),
            Self::Scalar(text) => f(text).map(Self::Scalar),
            Self::Mapping(entries) => entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), value.map_scalars(f)?)))
                .collect::<Result<Vec<_>, E>>()
                .map(Self::Mapping),
            Self::Sequence(items) => items
                .iter()
                .map(|item| item.map_scalars(f))
                .collect::<Result<Vec<_>, E>>()
                .map(Self::Sequence),
        }
    }
}

/// A parsed document and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File path or other description used in error messages
    pub origin: String,
    /// Root node; [`Node::Null`] for an empty document
    pub root: Node,
}

/// Parse raw YAML bytes into a [`Document`].
pub fn parse_document(bytes: &[u8], origin: &str) -> ConfigResult<Document> {
    let malformed = |message: String| ConfigError::MalformedDocument {
        origin: origin.to_owned(),
        message,
    };

    let text = std::str::from_utf8(bytes).map_err(|e| malformed(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(Document {
            origin: origin.to_owned(),
            root: Node::Null,
        });
    }

    let value: Value = serde_yaml::from_str(text).map_err(|e| malformed(e.to_string()))?;
    let root = convert(value).map_err(malformed)?;

    Ok(Document {
        origin: origin.to_owned(),
        root,
    })
}

fn convert(value: Value) -> Result<Node, String> {
    match value {
        Value::Null => Ok(Node::Null),
        Value::Bool(b) => Ok(Node::Scalar(b.to_string())),
        Value::Number(n) => Ok(Node::Scalar(n.to_string())),
        Value::String(s) => Ok(Node::Scalar(s)),
        Value::Sequence(items) => items
            .into_iter()
            .map(convert)
            .collect::<Result<Vec<_>, _>>()
            .map(Node::Sequence),
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| Ok((convert_key(key)?, convert(value)?)))
            .collect::<Result<Vec<_>, String>>()
            .map(Node::Mapping),
        Value::Tagged(tagged) => convert(tagged.value),
    }
}

fn convert_key(key: Value) -> Result<String, String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_owned()),
        Value::Tagged(tagged) => convert_key(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err("mapping keys must be scalars".to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ConfigResult<Node> {
        parse_document(text.as_bytes(), "test.yaml").map(|doc| doc.root)
    }

    #[test]
    fn test_mapping_order_is_preserved() {
        let root = parse("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        let Node::Mapping(entries) = root else {
            panic!("expected mapping");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_scalars_keep_textual_form() {
        let root = parse("n: 50000\nflag: true\ns: \"x\"\nempty: ~\n").unwrap();
        assert_eq!(
            root,
            Node::Mapping(vec![
                ("n".to_string(), Node::Scalar("50000".to_string())),
                ("flag".to_string(), Node::Scalar("true".to_string())),
                ("s".to_string(), Node::Scalar("x".to_string())),
                ("empty".to_string(), Node::Null),
            ])
        );
    }

    #[test]
    fn test_sequences() {
        let root = parse("- a\n- b: 1\n").unwrap();
        assert_eq!(
            root,
            Node::Sequence(vec![
                Node::Scalar("a".to_string()),
                Node::Mapping(vec![("b".to_string(), Node::Scalar("1".to_string()))]),
            ])
        );
    }

    #[test]
    fn test_empty_document_is_null() {
        assert_eq!(parse("").unwrap(), Node::Null);
        assert_eq!(parse("   \n\n").unwrap(), Node::Null);
    }

    #[test]
    fn test_malformed_document() {
        let err = parse("mongodb: [unclosed\n").unwrap_err();
        match err {
            ConfigError::MalformedDocument { origin, message } => {
                assert_eq!(origin, "test.yaml");
                assert!(!message.is_empty());
            }
            other => panic!("expected MalformedDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_non_scalar_key_is_malformed() {
        let err = parse("? [a, b]\n: value\n").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedDocument { .. }));
    }

    #[test]
    fn test_map_scalars_rebuilds_in_order() {
        let root = parse("a:\n  - x\n  - y\nb: z\n").unwrap();
        let upper = root
            .map_scalars(&mut |s| Ok::<_, ()>(s.to_uppercase()))
            .unwrap();
        assert_eq!(
            upper,
            Node::Mapping(vec![
                (
                    "a".to_string(),
                    Node::Sequence(vec![
                        Node::Scalar("X".to_string()),
                        Node::Scalar("Y".to_string()),
                    ])
                ),
                ("b".to_string(), Node::Scalar("Z".to_string())),
            ])
        );
    }
}
