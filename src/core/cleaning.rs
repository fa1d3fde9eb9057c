use crate::core::{CleanResult, Record, Table};
use crate::domain::model::{DROPPED_COLUMNS, EMAIL_COLUMN, REQUIRED_COLUMNS};
use crate::utils::error::{CleanError, Result};
use crate::utils::validation::is_valid_email;
use std::collections::HashMap;

const NAME_RENAMES: [(&str, &str); 2] = [
    ("First Name", "first_name"),
    ("Last Name", "last_name"),
];

/// Restricts and reorders a table to the required registration columns.
/// Extra columns (`lang`, `BrandCode`, anything else the export carries) are
/// dropped; a missing required column is a schema error.
pub fn project(table: &Table) -> Result<Table> {
    for column in REQUIRED_COLUMNS {
        if !table.columns.iter().any(|c| c == column) {
            return Err(CleanError::SchemaError {
                column: column.to_string(),
            });
        }
    }

    for column in &table.columns {
        if !REQUIRED_COLUMNS.contains(&column.as_str()) {
            if DROPPED_COLUMNS.contains(&column.as_str()) {
                tracing::debug!("Dropping known extra column '{}'", column);
            } else {
                tracing::debug!("Dropping unrecognized column '{}'", column);
            }
        }
    }

    let columns: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let fields = columns
                .iter()
                .map(|c| (c.clone(), row.get(c).to_string()))
                .collect();
            Record::new(fields)
        })
        .collect();

    Ok(Table::new(columns, rows))
}

fn has_missing_field(table: &Table, record: &Record) -> bool {
    table
        .columns
        .iter()
        .any(|c| record.get(c).trim().is_empty())
}

/// Splits a table into valid and invalid rows. A row is invalid when any
/// field is empty — a whitespace-only cell counts as empty, which is wider
/// than a strict null check — when the whole row appears more than once
/// (every member of a duplicate group is flagged), or when its Email fails
/// the grammar. Each source row lands in exactly one of the two outputs and
/// relative order is preserved.
pub fn partition(table: &Table) -> CleanResult {
    let mut occurrences: HashMap<Vec<String>, usize> = HashMap::new();
    for row in &table.rows {
        *occurrences.entry(table.row_key(row)).or_insert(0) += 1;
    }

    let mut valid_rows = Vec::new();
    let mut invalid_rows = Vec::new();
    let mut missing = 0usize;
    let mut duplicated = 0usize;
    let mut bad_email = 0usize;

    for row in &table.rows {
        let is_missing = has_missing_field(table, row);
        let is_duplicate = occurrences[&table.row_key(row)] > 1;
        let is_bad_email = !is_valid_email(row.get(EMAIL_COLUMN));

        if is_missing {
            missing += 1;
        }
        if is_duplicate {
            duplicated += 1;
        }
        if is_bad_email {
            bad_email += 1;
        }

        if is_missing || is_duplicate || is_bad_email {
            invalid_rows.push(row.clone());
        } else {
            valid_rows.push(row.clone());
        }
    }

    tracing::debug!(
        "Flagged rows: {} with missing fields, {} duplicated, {} with invalid emails",
        missing,
        duplicated,
        bad_email
    );

    CleanResult {
        valid: Table::new(table.columns.clone(), valid_rows),
        invalid: Table::new(table.columns.clone(), invalid_rows),
    }
}

/// Uppercases the first character and lowercases the rest of the whole value.
/// "MARY ANN" becomes "Mary ann"; this is deliberate, not title casing.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Applies name capitalization and renames the name columns to their
/// snake_case output form. Call on the valid table only.
pub fn normalize_names(mut table: Table) -> Table {
    for (display, renamed) in NAME_RENAMES {
        for row in &mut table.rows {
            let value = capitalize(row.get(display));
            row.set(display, value);
        }
        table.rename_column(display, renamed);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: &[&str]) -> Record {
        let fields = REQUIRED_COLUMNS
            .iter()
            .zip(values)
            .map(|(c, v)| (c.to_string(), v.to_string()))
            .collect();
        Record::new(fields)
    }

    fn table(rows: Vec<Record>) -> Table {
        Table::new(
            REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        )
    }

    fn good_row(email: &str) -> Record {
        record(&["2023-01-01", "JOHN", "DOE", "123", "SG", email])
    }

    #[test]
    fn test_project_drops_extra_columns_and_reorders() {
        let columns = vec![
            "Email".to_string(),
            "lang".to_string(),
            "First Name".to_string(),
            "Last Name".to_string(),
            "BrandCode".to_string(),
            "Phone".to_string(),
            "Country".to_string(),
            "RegistrationDate".to_string(),
            "Referrer".to_string(),
        ];
        let mut fields = std::collections::HashMap::new();
        for c in &columns {
            fields.insert(c.clone(), format!("v-{}", c));
        }
        let input = Table::new(columns, vec![Record::new(fields)]);

        let projected = project(&input).unwrap();

        assert_eq!(projected.columns, REQUIRED_COLUMNS.to_vec());
        assert_eq!(projected.rows[0].get("Email"), "v-Email");
        assert_eq!(projected.rows[0].get("lang"), "");
        assert_eq!(projected.rows[0].get("Referrer"), "");
    }

    #[test]
    fn test_project_missing_required_column_is_schema_error() {
        let input = Table::new(
            vec!["RegistrationDate".to_string(), "Email".to_string()],
            vec![],
        );
        let err = project(&input).unwrap_err();
        assert!(matches!(
            err,
            CleanError::SchemaError { column } if column == "First Name"
        ));
    }

    #[test]
    fn test_partition_counts_are_conserved() {
        let input = table(vec![
            good_row("a@b.co"),
            good_row("bad"),
            record(&["2023-01-02", "JANE", "ROE", "", "SG", "jane@roe.co"]),
        ]);
        let result = partition(&input);
        assert_eq!(result.valid.len() + result.invalid.len(), input.len());
        assert_eq!(result.valid.len(), 1);
    }

    #[test]
    fn test_partition_missing_field_is_invalid() {
        let input = table(vec![record(&[
            "2023-01-01",
            "JOHN",
            "DOE",
            "",
            "SG",
            "john@doe.com",
        ])]);
        let result = partition(&input);
        assert!(result.valid.is_empty());
        assert_eq!(result.invalid.len(), 1);
    }

    #[test]
    fn test_partition_whitespace_only_field_is_invalid() {
        let input = table(vec![record(&[
            "2023-01-01",
            "JOHN",
            "DOE",
            "  ",
            "SG",
            "john@doe.com",
        ])]);
        let result = partition(&input);
        assert!(result.valid.is_empty());
    }

    #[test]
    fn test_partition_flags_every_member_of_a_duplicate_group() {
        let input = table(vec![good_row("a@b.co"), good_row("a@b.co")]);
        let result = partition(&input);
        assert!(result.valid.is_empty());
        assert_eq!(result.invalid.len(), 2);
    }

    #[test]
    fn test_partition_field_boundaries_never_merge() {
        // Same characters, different field split: not duplicates.
        let input = table(vec![
            record(&["2023-01-01", "JOHN", "DOE", "12\u{1f}34", "SG", "a@b.co"]),
            record(&["2023-01-01", "JOHN", "DOE", "12", "34\u{1f}SG", "a@b.co"]),
        ]);
        let result = partition(&input);
        assert_eq!(result.valid.len(), 2);
        assert!(result.invalid.is_empty());
    }

    #[test]
    fn test_partition_invalid_email_is_invalid() {
        let input = table(vec![good_row("not-an-email")]);
        let result = partition(&input);
        assert!(result.valid.is_empty());
        assert_eq!(result.invalid.rows[0].get("Email"), "not-an-email");
    }

    #[test]
    fn test_partition_row_with_multiple_reasons_appears_once() {
        // Duplicated AND invalid email: one entry per source row.
        let input = table(vec![good_row("bad"), good_row("bad")]);
        let result = partition(&input);
        assert_eq!(result.invalid.len(), 2);
        assert!(result.valid.is_empty());
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let input = table(vec![
            good_row("first@a.co"),
            good_row("bad-one"),
            good_row("second@a.co"),
            good_row("bad-two"),
        ]);
        let result = partition(&input);
        assert_eq!(result.valid.rows[0].get("Email"), "first@a.co");
        assert_eq!(result.valid.rows[1].get("Email"), "second@a.co");
        assert_eq!(result.invalid.rows[0].get("Email"), "bad-one");
        assert_eq!(result.invalid.rows[1].get("Email"), "bad-two");
    }

    #[test]
    fn test_partition_is_idempotent() {
        let input = table(vec![
            good_row("a@b.co"),
            good_row("bad"),
            good_row("c@d.co"),
        ]);
        let first = partition(&input);
        let second = partition(&input);
        assert_eq!(first.valid, second.valid);
        assert_eq!(first.invalid, second.invalid);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("JOHN"), "John");
        assert_eq!(capitalize("doe"), "Doe");
        assert_eq!(capitalize("MARY ANN"), "Mary ann");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_normalize_names_renames_and_capitalizes() {
        let input = table(vec![good_row("john@doe.com")]);
        let normalized = normalize_names(input);

        assert_eq!(
            normalized.columns,
            vec![
                "RegistrationDate",
                "first_name",
                "last_name",
                "Phone",
                "Country",
                "Email"
            ]
        );
        assert_eq!(normalized.rows[0].get("first_name"), "John");
        assert_eq!(normalized.rows[0].get("last_name"), "Doe");
        assert_eq!(normalized.rows[0].get("Email"), "john@doe.com");
    }
}
