/// Name to rank mapping for a single year.
pub type NameRanks = std::collections::HashMap<String, u32>;

/// Append-only year → (name → rank) index for one gender.
///
/// Years are committed in strictly increasing order and never rewritten.
#[derive(Debug, Clone, Default)]
pub struct YearlyNameIndex {
    years: std::collections::BTreeMap<i32, NameRanks>,
}

impl YearlyNameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank of `name` in `year`, if both are indexed.
    pub fn rank(&self, year: i32, name: &str) -> Option<u32> {
        self.years.get(&year)?.get(name).copied()
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// Most recent committed year.
    pub fn latest_year(&self) -> Option<i32> {
        self.years.keys().next_back().copied()
    }

    /// Commits the rankings of `year`.
    ///
    /// # Errors
    /// * If `year` is not newer than the latest committed year.
    pub fn commit_year(&mut self, year: i32, ranks: NameRanks) -> anyhow::Result<()> {
        if let Some(latest) = self.latest_year() {
            if year <= latest {
                return Err(anyhow::anyhow!(
                    "Year {} cannot be indexed after year {}",
                    year,
                    latest
                ));
            }
        }
        self.years.insert(year, ranks);
        anyhow::Ok(())
    }
}
