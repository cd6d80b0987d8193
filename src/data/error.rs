use thiserror::Error;

use super::model::Attribute;

/// Errors raised while building or querying a grid.
///
/// Attribute-carrying variants hold the attribute's display form, kind
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The attribute is not part of the grid it was resolved against.
    #[error("could not resolve {attribute} in this grid")]
    UnresolvedAttribute { attribute: String },

    /// A class designation named an attribute the grid does not hold.
    #[error("unknown attribute {attribute}")]
    UnknownAttribute { attribute: String },

    /// A value-equal attribute is already present.
    #[error("{attribute} is already present")]
    DuplicateAttribute { attribute: String },

    /// The grid schema could not be parsed or written.
    #[error("invalid grid schema: {0}")]
    Schema(String),
}

impl GridError {
    pub fn unresolved(attr: &Attribute) -> Self {
        GridError::UnresolvedAttribute {
            attribute: attr.to_string(),
        }
    }

    pub fn unknown(attr: &Attribute) -> Self {
        GridError::UnknownAttribute {
            attribute: attr.to_string(),
        }
    }

    pub fn duplicate(attr: &Attribute) -> Self {
        GridError::DuplicateAttribute {
            attribute: attr.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_kind() {
        let float = GridError::unresolved(&Attribute::float("a"));
        let binary = GridError::unresolved(&Attribute::binary("a"));
        assert_eq!(
            float.to_string(),
            "could not resolve FloatAttribute(a) in this grid"
        );
        assert_ne!(float, binary);
        assert_eq!(
            GridError::duplicate(&Attribute::binary("a")).to_string(),
            "BinaryAttribute(a) is already present"
        );
    }
}
