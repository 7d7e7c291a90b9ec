//! Availability Editor
//!
//! Builds and edits a product's retailer allow-list in memory. Keeps
//! insertion order, never stores duplicates, never persists — every
//! mutation hands the new ordered sequence back to the caller.

/// In-memory ordered set of retailer codes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityEditor {
    codes: Vec<String>,
}

impl AvailabilityEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing allow-list, dropping duplicates but keeping
    /// first-occurrence order
    pub fn from_codes(codes: Vec<String>) -> Self {
        let mut editor = Self::new();
        for code in codes {
            editor.push_if_absent(code);
        }
        editor
    }

    /// Current ordered sequence
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// Add a single code. Whitespace is trimmed; empty input and codes
    /// already present are ignored.
    pub fn add(&mut self, code: &str) -> &[String] {
        let trimmed = code.trim();
        if !trimmed.is_empty() {
            self.push_if_absent(trimmed.to_string());
        }
        self.codes()
    }

    /// Add codes from pasted text, split on commas, whitespace and
    /// newlines. Empty tokens and duplicates are dropped; survivors are
    /// appended in the order encountered.
    pub fn add_bulk(&mut self, input: &str) -> &[String] {
        for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
            let trimmed = token.trim();
            if !trimmed.is_empty() {
                self.push_if_absent(trimmed.to_string());
            }
        }
        self.codes()
    }

    /// Add decimal string codes for every integer in `[start, end]`
    /// inclusive. Inverted bounds reject the whole operation (no-op).
    pub fn add_range(&mut self, start: i64, end: i64) -> &[String] {
        if start > end {
            return self.codes();
        }
        for value in start..=end {
            self.push_if_absent(value.to_string());
        }
        self.codes()
    }

    /// Parse-and-add variant for raw form input. Non-numeric bounds reject
    /// the whole operation (no-op), same as inverted bounds.
    pub fn add_range_input(&mut self, start: &str, end: &str) -> &[String] {
        match (start.trim().parse::<i64>(), end.trim().parse::<i64>()) {
            (Ok(start), Ok(end)) => self.add_range(start, end),
            _ => self.codes(),
        }
    }

    /// Remove a code. Removing an absent code is a no-op, not an error.
    pub fn remove(&mut self, code: &str) -> &[String] {
        self.codes.retain(|c| c != code);
        self.codes()
    }

    /// Empty the set unconditionally
    pub fn clear(&mut self) -> &[String] {
        self.codes.clear();
        self.codes()
    }

    fn push_if_absent(&mut self, code: String) {
        if !self.contains(&code) {
            self.codes.push(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_dedupes() {
        let mut editor = AvailabilityEditor::new();
        editor.add("  R001 ");
        editor.add("R001");
        assert_eq!(editor.codes(), ["R001"]);
    }

    #[test]
    fn test_add_rejects_empty() {
        let mut editor = AvailabilityEditor::new();
        editor.add("   ");
        editor.add("");
        assert!(editor.is_empty());
    }

    #[test]
    fn test_bulk_dedup_first_occurrence_order() {
        let mut editor = AvailabilityEditor::new();
        editor.add_bulk("R001, R002\nR001");
        assert_eq!(editor.codes(), ["R001", "R002"]);
    }

    #[test]
    fn test_bulk_mixed_separators() {
        let mut editor = AvailabilityEditor::new();
        editor.add_bulk("R1 R2,R3\n\tR4,,  R5");
        assert_eq!(editor.codes(), ["R1", "R2", "R3", "R4", "R5"]);
    }

    #[test]
    fn test_bulk_skips_existing() {
        let mut editor = AvailabilityEditor::from_codes(vec!["R2".into()]);
        editor.add_bulk("R1,R2,R3");
        assert_eq!(editor.codes(), ["R2", "R1", "R3"]);
    }

    #[test]
    fn test_range_inclusive() {
        let mut editor = AvailabilityEditor::new();
        editor.add_range(3, 5);
        assert_eq!(editor.codes(), ["3", "4", "5"]);
    }

    #[test]
    fn test_inverted_range_is_noop() {
        let mut editor = AvailabilityEditor::from_codes(vec!["keep".into()]);
        editor.add_range(5, 3);
        assert_eq!(editor.codes(), ["keep"]);
    }

    #[test]
    fn test_range_skips_existing_values() {
        let mut editor = AvailabilityEditor::from_codes(vec!["4".into()]);
        editor.add_range(3, 5);
        assert_eq!(editor.codes(), ["4", "3", "5"]);
    }

    #[test]
    fn test_range_input_rejects_non_numeric() {
        let mut editor = AvailabilityEditor::new();
        editor.add_range_input("3", "x");
        editor.add_range_input("", "5");
        assert!(editor.is_empty());

        editor.add_range_input(" 3 ", " 5 ");
        assert_eq!(editor.codes(), ["3", "4", "5"]);
    }

    #[test]
    fn test_single_element_range() {
        let mut editor = AvailabilityEditor::new();
        editor.add_range(7, 7);
        assert_eq!(editor.codes(), ["7"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut editor = AvailabilityEditor::from_codes(vec!["R1".into()]);
        editor.remove("R9");
        assert_eq!(editor.codes(), ["R1"]);
        editor.remove("R1");
        assert!(editor.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut editor = AvailabilityEditor::from_codes(vec!["R1".into(), "R2".into()]);
        editor.clear();
        assert!(editor.is_empty());
    }

    #[test]
    fn test_from_codes_dedupes() {
        let editor =
            AvailabilityEditor::from_codes(vec!["R1".into(), "R2".into(), "R1".into()]);
        assert_eq!(editor.codes(), ["R1", "R2"]);
    }

    #[test]
    fn test_mutation_returns_new_sequence() {
        let mut editor = AvailabilityEditor::new();
        let after = editor.add("R1").to_vec();
        assert_eq!(after, ["R1"]);
        let after = editor.add_bulk("R2 R3").to_vec();
        assert_eq!(after, ["R1", "R2", "R3"]);
    }
}
