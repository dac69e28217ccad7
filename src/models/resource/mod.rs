// Resource module
// Rows of the scheduling grid, labelled with an incrementing letter sequence

/// A schedulable row (room, person, machine, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: String,
    pub name: String,
}

impl Resource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Resource for a letter label: `"C"` becomes id `c`, name `Resource C`.
    pub fn from_label(label: &str) -> Self {
        Self::new(label.to_lowercase(), format!("Resource {label}"))
    }

    /// Trailing letter label of the name (`"Resource AB"` gives `"AB"`).
    pub fn label(&self) -> Option<&str> {
        let label = self.name.rsplit(' ').next()?;
        (!label.is_empty() && label.chars().all(|c| c.is_ascii_alphabetic())).then_some(label)
    }

    /// Next resource in the letter sequence after `existing`.
    ///
    /// Continues from the last resource's label (`A`, `B`, ... `Z`, `AA`,
    /// `AB`, ...), skipping any label whose id is already taken.
    pub fn next_after(existing: &[Resource]) -> Self {
        let mut index = existing
            .last()
            .and_then(Resource::label)
            .map(|label| label_to_index(label) + 1)
            .unwrap_or(0);

        loop {
            let candidate = Self::from_label(&index_to_label(index));
            if existing.iter().all(|r| r.id != candidate.id) {
                return candidate;
            }
            index += 1;
        }
    }
}

/// Bijective base-26: `A` = 0, `Z` = 25, `AA` = 26.
fn label_to_index(label: &str) -> u64 {
    label
        .chars()
        .map(|c| u64::from(c.to_ascii_uppercase() as u8 - b'A') + 1)
        .fold(0u64, |acc, digit| acc.saturating_mul(26).saturating_add(digit))
        .saturating_sub(1)
}

fn index_to_label(index: u64) -> String {
    let mut n = index.saturating_add(1);
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Resources `A` through `I` shown on first launch.
pub fn default_resources() -> Vec<Resource> {
    ('A'..='I')
        .map(|c| Resource::from_label(&c.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_label() {
        assert_eq!(Resource::from_label("C"), Resource::new("c", "Resource C"));
    }

    #[test]
    fn test_label_round_trip_boundaries() {
        assert_eq!(index_to_label(0), "A");
        assert_eq!(index_to_label(25), "Z");
        assert_eq!(index_to_label(26), "AA");
        assert_eq!(index_to_label(27), "AB");
        assert_eq!(label_to_index("Z"), 25);
        assert_eq!(label_to_index("AA"), 26);
        assert_eq!(label_to_index("az"), 51);
    }

    #[test]
    fn test_next_after_increments_last_letter() {
        let resources = default_resources();
        assert_eq!(Resource::next_after(&resources), Resource::new("j", "Resource J"));
    }

    #[test]
    fn test_next_after_empty_starts_at_a() {
        assert_eq!(Resource::next_after(&[]), Resource::new("a", "Resource A"));
    }

    #[test]
    fn test_next_after_z_continues_with_double_letters() {
        let resources = vec![Resource::from_label("Z")];
        assert_eq!(Resource::next_after(&resources), Resource::new("aa", "Resource AA"));
    }

    #[test]
    fn test_next_after_skips_taken_ids() {
        let resources = vec![Resource::new("d", "Desk"), Resource::from_label("C")];
        assert_eq!(Resource::next_after(&resources).id, "e");
    }

    #[test]
    fn test_next_after_unlabelled_name_restarts_sequence() {
        let resources = vec![Resource::new("a", "Resource A"), Resource::new("room", "Room 101")];
        assert_eq!(Resource::next_after(&resources).id, "b");
    }
}
