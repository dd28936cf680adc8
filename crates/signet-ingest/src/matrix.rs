//! Measurement matrix reader

use crate::error::IngestError;
use signet_domain::ConditionKey;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

/// Replicate values per (condition, antibody), accumulated from the merged
/// measurement matrix
///
/// Expected layout, tab-separated: a header row whose columns from index 2
/// onward name the antibodies, then one row per replicate sample. The first
/// column encodes the sample as `_`-separated tokens with the cell line at
/// token 1 and the dose at token 3 (e.g. `JQ1_A2058_rep2_0.1`); the second
/// column is free-form; values start at index 2, aligned with the header.
///
/// Keys are the flat `(condition, antibody)` pair rather than nested
/// per-cell-line, per-dose maps.
#[derive(Debug, Default)]
pub struct MeasurementMatrix {
    replicates: BTreeMap<(ConditionKey, String), Vec<f64>>,
}

impl MeasurementMatrix {
    /// Read a measurement matrix
    pub fn read<R: BufRead>(reader: R) -> Result<Self, IngestError> {
        let mut lines = reader.lines().enumerate();

        let header = match lines.next() {
            Some((_, line)) => line?,
            None => return Err(IngestError::EmptyMatrix),
        };
        let header_cols: Vec<&str> = header.split('\t').collect();
        if header_cols.len() < 3 {
            return Err(IngestError::MalformedRow {
                line: 1,
                reason: "header has no antibody columns".to_string(),
            });
        }
        let antibodies: Vec<String> = header_cols[2..].iter().map(|s| s.to_string()).collect();

        let mut replicates: BTreeMap<(ConditionKey, String), Vec<f64>> = BTreeMap::new();

        for (idx, line) in lines {
            let line = line?;
            let line_no = idx + 1;

            if line.is_empty() {
                continue;
            }

            let cols: Vec<&str> = line.split('\t').collect();
            if cols.len() != header_cols.len() {
                return Err(IngestError::MalformedRow {
                    line: line_no,
                    reason: format!(
                        "expected {} columns, found {}",
                        header_cols.len(),
                        cols.len()
                    ),
                });
            }

            let condition = parse_sample_id(cols[0]).ok_or_else(|| IngestError::MalformedRow {
                line: line_no,
                reason: format!("cannot parse sample id '{}'", cols[0]),
            })?;

            for (i, raw) in cols[2..].iter().enumerate() {
                let value: f64 = raw.parse().map_err(|_| IngestError::MalformedRow {
                    line: line_no,
                    reason: format!("unparseable value '{}' for antibody '{}'", raw, antibodies[i]),
                })?;

                replicates
                    .entry((condition.clone(), antibodies[i].clone()))
                    .or_default()
                    .push(value);
            }
        }

        Ok(Self { replicates })
    }

    /// Read a measurement matrix from a file path
    pub fn read_path(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let file = std::fs::File::open(path)?;
        Self::read(std::io::BufReader::new(file))
    }

    /// All distinct conditions, in key order
    pub fn conditions(&self) -> Vec<ConditionKey> {
        let mut keys: Vec<ConditionKey> = self
            .replicates
            .keys()
            .map(|(condition, _)| condition.clone())
            .collect();
        keys.dedup();
        keys
    }

    /// Iterate over a condition's (antibody, replicate values) entries
    pub fn condition_entries<'a>(
        &'a self,
        condition: &'a ConditionKey,
    ) -> impl Iterator<Item = (&'a str, &'a [f64])> {
        self.replicates
            .range((condition.clone(), String::new())..)
            .take_while(move |((key, _), _)| key == condition)
            .map(|((_, antibody), values)| (antibody.as_str(), values.as_slice()))
    }

    /// Number of (condition, antibody) series
    pub fn len(&self) -> usize {
        self.replicates.len()
    }

    /// Whether the matrix holds no series
    pub fn is_empty(&self) -> bool {
        self.replicates.is_empty()
    }
}

/// Extract the condition from a `_`-separated sample id: cell line at token
/// 1, dose at token 3
fn parse_sample_id(id: &str) -> Option<ConditionKey> {
    let tokens: Vec<&str> = id.split('_').collect();
    if tokens.len() < 4 || tokens[1].is_empty() || tokens[3].is_empty() {
        return None;
    }
    Some(ConditionKey::new(tokens[1], tokens[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATRIX: &str = "sample\trep\tAKT_pS473\tCCND1\n\
                          JQ1_A2058_r1_0.1\t1\t0.5\t-0.2\n\
                          JQ1_A2058_r2_0.1\t2\t0.7\t-0.4\n\
                          JQ1_A2058_r1_1\t1\t1.1\t-0.9\n";

    #[test]
    fn test_replicates_accumulate_per_condition() {
        let matrix = MeasurementMatrix::read(MATRIX.as_bytes()).unwrap();

        let low = ConditionKey::new("A2058", "0.1");
        let entries: Vec<_> = matrix.condition_entries(&low).collect();
        assert_eq!(
            entries,
            vec![
                ("AKT_pS473", &[0.5, 0.7][..]),
                ("CCND1", &[-0.2, -0.4][..]),
            ]
        );

        let high = ConditionKey::new("A2058", "1");
        let entries: Vec<_> = matrix.condition_entries(&high).collect();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_conditions() {
        let matrix = MeasurementMatrix::read(MATRIX.as_bytes()).unwrap();
        assert_eq!(
            matrix.conditions(),
            vec![
                ConditionKey::new("A2058", "0.1"),
                ConditionKey::new("A2058", "1"),
            ]
        );
    }

    #[test]
    fn test_unparseable_value_is_fatal() {
        let bad = "sample\trep\tAB1\nJQ1_A2058_r1_0.1\t1\tNaN?\n";
        let err = MeasurementMatrix::read(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_inconsistent_column_count_is_fatal() {
        let bad = "sample\trep\tAB1\tAB2\nJQ1_A2058_r1_0.1\t1\t0.5\n";
        assert!(MeasurementMatrix::read(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_bad_sample_id_is_fatal() {
        let bad = "sample\trep\tAB1\nweird-id\t1\t0.5\n";
        assert!(MeasurementMatrix::read(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_input_is_fatal() {
        assert!(matches!(
            MeasurementMatrix::read("".as_bytes()),
            Err(IngestError::EmptyMatrix)
        ));
    }
}
