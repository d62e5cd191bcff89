use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind};
use std::path::Path;

use crate::core::{AttributeValue, Dataset, Instance};
use crate::readers::arff::parser::{
    AttributeDef, is_comment_or_empty, parse_attribute_line, split_data_line,
};

/// Whole-file ARFF-like reader. Produces an *unfinalized* `Dataset`: cells
/// carry raw tokens and missing flags only; numeric parsing and label
/// indexing happen in `Dataset::finalize` once the kinds are settled.
#[derive(Debug)]
pub struct ArffReader {
    missing_token: String,
}

impl ArffReader {
    pub fn new(missing_token: &str) -> ArffReader {
        ArffReader {
            missing_token: missing_token.to_string(),
        }
    }

    pub fn read(&self, path: &Path) -> Result<Dataset, Error> {
        let file = File::open(path).map_err(|e| {
            Error::new(e.kind(), format!("cannot open input file {}: {e}", path.display()))
        })?;
        let reader = BufReader::new(file);

        let mut attributes: Vec<AttributeDef> = Vec::new();
        let mut rows: Vec<Instance> = Vec::new();
        let mut in_data = false;
        let mut id_counter = 1usize;

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if is_comment_or_empty(trimmed) {
                continue;
            }

            if !in_data {
                let low = trimmed.to_ascii_lowercase();
                if low.starts_with("@attribute") {
                    attributes.push(parse_attribute_line(trimmed)?);
                } else if low.starts_with("@data") {
                    in_data = true;
                }
                // @relation and unrecognized directives are skipped.
                continue;
            }

            let tokens = split_data_line(trimmed);
            if tokens.is_empty() {
                continue;
            }
            if tokens.len() != attributes.len() {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!(
                        "Data row {} has {} values, expected {}",
                        id_counter,
                        tokens.len(),
                        attributes.len()
                    ),
                ));
            }

            let values = tokens[..tokens.len() - 1]
                .iter()
                .map(|t| AttributeValue::from_token(t, &self.missing_token))
                .collect();
            let decision = tokens.last().unwrap().trim().to_string();
            rows.push(Instance::new(id_counter, values, decision));
            id_counter += 1;
        }

        if attributes.len() < 2 {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "Input must declare at least 2 attributes (including the decision)",
            ));
        }
        if rows.is_empty() {
            return Err(Error::new(ErrorKind::InvalidData, "Dataset is empty"));
        }

        // Everything but the last attribute is conditional.
        let conditional = &attributes[..attributes.len() - 1];
        let names = conditional.iter().map(|a| a.name.clone()).collect();
        let kinds = conditional.iter().map(|a| a.kind).collect();

        let mut dataset = Dataset::new(names, kinds);
        dataset.rows = rows;
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::core::AttributeKind;

    fn write_arff(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("tempfile");
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    const WEATHER: &str = "%
@relation weather
@attribute outlook {sunny, overcast, rainy}
@attribute temperature numeric
@attribute play {yes, no}
@data
sunny,85,no
overcast,83,yes
# trailing comment
rainy,?,yes
";

    #[test]
    fn reads_header_and_rows() {
        let tf = write_arff(WEATHER);
        let ds = ArffReader::new("?").read(tf.path()).unwrap();

        assert_eq!(ds.attribute_names, vec!["outlook", "temperature"]);
        assert_eq!(
            ds.kinds,
            vec![AttributeKind::Nominal, AttributeKind::Numeric]
        );
        assert_eq!(ds.rows.len(), 3);
        assert_eq!(ds.rows[0].id, 1);
        assert_eq!(ds.rows[0].values[0].raw, "sunny");
        assert_eq!(ds.rows[0].decision, "no");
        assert!(ds.rows[2].values[1].missing);
    }

    #[test]
    fn custom_missing_token_is_honored() {
        let tf = write_arff("@attribute a {x, y}\n@attribute c {p, q}\n@data\nNA,p\nx,q\n");
        let ds = ArffReader::new("NA").read(tf.path()).unwrap();
        assert!(ds.rows[0].values[0].missing);
        assert!(!ds.rows[1].values[0].missing);
    }

    #[test]
    fn whitespace_rows_and_quoted_tokens() {
        let tf = write_arff("@attribute a {x}\n@attribute c {p}\n@data\n'x' p\n");
        let ds = ArffReader::new("?").read(tf.path()).unwrap();
        assert_eq!(ds.rows[0].values[0].raw, "x");
        assert_eq!(ds.rows[0].decision, "p");
    }

    #[test]
    fn unknown_header_directives_are_ignored() {
        let tf = write_arff("@foo bar\n@attribute a numeric\n@attribute c {p}\n@data\n1,p\n");
        let ds = ArffReader::new("?").read(tf.path()).unwrap();
        assert_eq!(ds.rows.len(), 1);
    }

    #[test]
    fn fewer_than_two_attributes_is_an_error() {
        let tf = write_arff("@attribute only numeric\n@data\n1\n");
        let err = ArffReader::new("?").read(tf.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn empty_data_section_is_an_error() {
        let tf = write_arff("@attribute a numeric\n@attribute c {p}\n@data\n");
        let err = ArffReader::new("?").read(tf.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn arity_mismatch_is_an_error() {
        let tf = write_arff("@attribute a numeric\n@attribute c {p}\n@data\n1,p,extra\n");
        let err = ArffReader::new("?").read(tf.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn missing_file_reports_not_found() {
        let err = ArffReader::new("?")
            .read(Path::new("no/such/file.arff"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
