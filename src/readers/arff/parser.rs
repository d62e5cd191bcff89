use std::io::{Error, ErrorKind};

use crate::core::AttributeKind;
use crate::utils::file_parsing::{split_csv_unquoting, strip_surrounding_quotes};

/// One `@attribute` declaration: name plus resolved kind. The last declared
/// attribute is the decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct AttributeDef {
    pub name: String,
    pub kind: AttributeKind,
}

pub(super) fn is_comment_or_empty(line: &str) -> bool {
    let t = line.trim();
    t.is_empty() || t.starts_with('%') || t.starts_with('#')
}

pub(super) fn parse_attribute_line(line: &str) -> Result<AttributeDef, Error> {
    let rest = {
        let l = line.trim();
        if !l.to_ascii_lowercase().starts_with("@attribute") {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "Line is not '@attribute'",
            ));
        }
        l["@attribute".len()..].trim()
    };
    if rest.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            "Attribute line is missing name and type",
        ));
    }

    let (name, after_name) = if rest.starts_with('\'') || rest.starts_with('"') {
        let quote = rest.chars().next().unwrap();
        let mut end = None;
        for (i, c) in rest.char_indices().skip(1) {
            if c == quote {
                end = Some(i);
                break;
            }
        }
        let end = end.ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidData,
                "Attribute name without closing quote mark",
            )
        })?;
        (rest[1..end].to_string(), rest[end + 1..].trim())
    } else {
        match rest.split_once(char::is_whitespace) {
            Some((name, after)) => (name.to_string(), after.trim()),
            None => {
                return Err(Error::new(ErrorKind::InvalidData, "Attribute type is missing"));
            }
        }
    };

    if after_name.is_empty() {
        return Err(Error::new(ErrorKind::InvalidData, "Attribute type is missing"));
    }

    // An enumerated domain is nominal regardless of its contents; the
    // values inside the braces are not interpreted.
    let kind = if after_name.starts_with('{') {
        AttributeKind::Nominal
    } else {
        let low = after_name.to_ascii_lowercase();
        if low.starts_with("numeric") || low.starts_with("real") || low.starts_with("integer") {
            AttributeKind::Numeric
        } else {
            AttributeKind::Nominal
        }
    };

    Ok(AttributeDef { name, kind })
}

/// Splits a data row: by comma (quote-aware) when the line contains one,
/// otherwise by whitespace. Quoted tokens lose their surrounding quotes.
pub(super) fn split_data_line(line: &str) -> Vec<String> {
    if line.contains(',') {
        split_csv_unquoting(line)
    } else {
        line.split_whitespace()
            .map(|t| strip_surrounding_quotes(t).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_type_words() {
        for ty in ["numeric", "REAL", "Integer", "integer [0,10]"] {
            let def = parse_attribute_line(&format!("@attribute x {ty}")).unwrap();
            assert_eq!(def.kind, AttributeKind::Numeric, "type {ty}");
        }
    }

    #[test]
    fn everything_else_is_nominal() {
        for ty in ["string", "nominal", "date yyyy-MM-dd", "relational"] {
            let def = parse_attribute_line(&format!("@attribute x {ty}")).unwrap();
            assert_eq!(def.kind, AttributeKind::Nominal, "type {ty}");
        }
    }

    #[test]
    fn braced_domain_is_nominal_even_when_numeric_looking() {
        let def = parse_attribute_line("@attribute grade {1, 2, 3}").unwrap();
        assert_eq!(def.kind, AttributeKind::Nominal);
        assert_eq!(def.name, "grade");
    }

    #[test]
    fn quoted_names_are_unquoted() {
        let def = parse_attribute_line("@attribute 'petal width' numeric").unwrap();
        assert_eq!(def.name, "petal width");
        assert_eq!(def.kind, AttributeKind::Numeric);

        let def = parse_attribute_line("@attribute \"class label\" {a, b}").unwrap();
        assert_eq!(def.name, "class label");
    }

    #[test]
    fn attribute_line_errors() {
        assert!(parse_attribute_line("@relation r").is_err());
        assert!(parse_attribute_line("@attribute").is_err());
        assert!(parse_attribute_line("@attribute lonely").is_err());
        assert!(parse_attribute_line("@attribute 'open {a, b}").is_err());
        assert!(parse_attribute_line("@attribute 'quoted'").is_err());
    }

    #[test]
    fn data_line_splitting_chooses_delimiter() {
        assert_eq!(split_data_line("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_data_line("a  b\tc"), vec!["a", "b", "c"]);
        assert_eq!(split_data_line("'a b',c"), vec!["a b", "c"]);
        assert_eq!(split_data_line("'x' 'y'"), vec!["x", "y"]);
    }
}
