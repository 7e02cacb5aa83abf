use indexmap::IndexSet;

/// Insertion-ordered set of rendered lines.
///
/// Equality is exact string equality; the first occurrence wins and keeps its
/// position.
#[derive(Debug, Clone, Default)]
pub struct OrderedLineSet {
    lines: IndexSet<String>,
    rejected: usize,
}

impl OrderedLineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the line was already present.
    pub fn insert(&mut self, line: String) -> bool {
        let inserted = self.lines.insert(line);
        if !inserted {
            self.rejected += 1;
        }
        inserted
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of inserts turned away as duplicates.
    pub fn duplicates(&self) -> usize {
        self.rejected
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines.into_iter().collect()
    }
}

impl Extend<String> for OrderedLineSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for line in iter {
            self.insert(line);
        }
    }
}

impl FromIterator<String> for OrderedLineSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

pub fn dedup_lines<I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().collect::<OrderedLineSet>().into_lines()
}
