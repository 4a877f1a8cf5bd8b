use std::fmt;

use serde::Serialize;

use super::constants::EnumConstant;

/// Column layout of one enum's table, chosen once from all its constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableSchema {
    /// `| Enum | Comment |`
    NamedOnly,
    /// `| Enum | Enum Value | Comment |`
    NamedValued,
}

impl TableSchema {
    /// `NamedValued` as soon as any constant carries non-blank argument text.
    pub fn for_constants(constants: &[EnumConstant]) -> Self {
        if constants.iter().any(|c| c.value().is_some()) {
            TableSchema::NamedValued
        } else {
            TableSchema::NamedOnly
        }
    }

    pub fn column_count(self) -> usize {
        match self {
            TableSchema::NamedOnly => 2,
            TableSchema::NamedValued => 3,
        }
    }

    fn fixed_columns(self) -> &'static [&'static str] {
        match self {
            TableSchema::NamedOnly => &["Comment"],
            TableSchema::NamedValued => &["Enum Value", "Comment"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub constant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    pub enum_name: String,
    pub schema: TableSchema,
    pub rows: Vec<TableRow>,
}

/// Build the table for one enum. No table is produced for an enum without
/// documented constants.
pub fn render_table(enum_name: &str, constants: &[EnumConstant]) -> Option<RenderedTable> {
    if constants.is_empty() {
        return None;
    }

    let schema = TableSchema::for_constants(constants);
    let rows = constants
        .iter()
        .map(|constant| TableRow {
            constant: constant.name.clone(),
            value: constant.value().map(str::to_string),
            comment: constant.description(),
        })
        .collect();

    Some(RenderedTable {
        enum_name: enum_name.to_string(),
        schema,
        rows,
    })
}

impl fmt::Display for RenderedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| {}", self.enum_name)?;
        for column in self.schema.fixed_columns() {
            write!(f, " | {}", column)?;
        }
        writeln!(f, " |")?;

        writeln!(f, "|{}", " --- |".repeat(self.schema.column_count()))?;

        for row in &self.rows {
            match self.schema {
                TableSchema::NamedOnly => {
                    writeln!(f, "| {} | {} |", row.constant, row.comment)?;
                }
                TableSchema::NamedValued => {
                    writeln!(
                        f,
                        "| {} | {} | {} |",
                        row.constant,
                        row.value.as_deref().unwrap_or(""),
                        row.comment
                    )?;
                }
            }
        }

        Ok(())
    }
}
