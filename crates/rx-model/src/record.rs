//! Raw input records.

use crate::prescriber::PrescriberIdentity;

/// Field position of the prescriber last name.
pub const LAST_NAME_FIELD: usize = 1;
/// Field position of the prescriber first name.
pub const FIRST_NAME_FIELD: usize = 2;
/// Field position of the drug name.
pub const DRUG_NAME_FIELD: usize = 3;
/// Field position of the drug cost.
pub const COST_FIELD: usize = 4;

/// One prescription event as read from the input file.
///
/// Fields are kept verbatim; nothing is trimmed or normalized here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
    /// 1-based source line, when the record came from a file.
    pub line: Option<u64>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields, line: None }
    }

    /// Attach the source line the record was read from.
    #[must_use]
    pub fn with_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn last_name(&self) -> &str {
        self.field(LAST_NAME_FIELD).unwrap_or_default()
    }

    pub fn first_name(&self) -> &str {
        self.field(FIRST_NAME_FIELD).unwrap_or_default()
    }

    /// Drug name, or `None` when the field is absent or empty.
    pub fn drug_name(&self) -> Option<&str> {
        self.field(DRUG_NAME_FIELD).filter(|value| !value.is_empty())
    }

    /// Raw cost text, or `None` when the field is absent or empty.
    pub fn cost(&self) -> Option<&str> {
        self.field(COST_FIELD).filter(|value| !value.is_empty())
    }

    pub fn prescriber(&self) -> PrescriberIdentity {
        PrescriberIdentity::from_names(self.first_name(), self.last_name())
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fields_by_position() {
        let record: Record = ["1000000001", "Smith", "James", "AMBIEN", "100"]
            .into_iter()
            .collect();
        assert_eq!(record.last_name(), "Smith");
        assert_eq!(record.first_name(), "James");
        assert_eq!(record.drug_name(), Some("AMBIEN"));
        assert_eq!(record.cost(), Some("100"));
        assert_eq!(record.prescriber().as_str(), "James Smith");
    }

    #[test]
    fn empty_or_missing_required_fields_are_none() {
        let empty: Record = ["1", "Doe", "John", "", "10"].into_iter().collect();
        assert_eq!(empty.drug_name(), None);

        let short: Record = ["1", "Doe", "John", "DrugA"].into_iter().collect();
        assert_eq!(short.drug_name(), Some("DrugA"));
        assert_eq!(short.cost(), None);
    }

    #[test]
    fn missing_name_fields_read_as_empty() {
        let record: Record = ["1"].into_iter().collect();
        assert_eq!(record.last_name(), "");
        assert_eq!(record.first_name(), "");
        assert_eq!(record.prescriber().as_str(), " ");
    }

    #[test]
    fn keeps_whitespace_verbatim() {
        let record: Record = ["1", " Doe", "John ", " DrugA", "1"].into_iter().collect();
        assert_eq!(record.drug_name(), Some(" DrugA"));
        assert_eq!(record.prescriber().as_str(), "John   Doe");
    }
}
