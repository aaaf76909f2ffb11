/// One table row extracted from a year's document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRankEntry {
    pub rank: u32,
    pub male_name: String,
    pub female_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-gender, single-year ranking of a name.
///
/// Field order matches the CSV columns `year,rank,name,gender,rank_change`.
/// `rank_change` is `rank - previous_rank` when the name was ranked for the
/// same gender in the preceding year, and `None` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BabyRecord {
    pub year: i32,
    pub rank: u32,
    pub name: String,
    pub gender: Gender,
    pub rank_change: Option<i64>,
}

impl BabyRecord {
    pub fn new(year: i32, rank: u32, name: impl Into<String>, gender: Gender) -> Self {
        BabyRecord {
            year,
            rank,
            name: name.into(),
            gender,
            rank_change: None,
        }
    }

    /// Projects the male column of an entry.
    pub fn male(year: i32, entry: &NameRankEntry) -> Self {
        BabyRecord::new(year, entry.rank, entry.male_name.as_str(), Gender::Male)
    }

    /// Projects the female column of an entry.
    pub fn female(year: i32, entry: &NameRankEntry) -> Self {
        BabyRecord::new(year, entry.rank, entry.female_name.as_str(), Gender::Female)
    }

    /// Renders the record as a CSV body line, e.g. `2018,1,Joan,F,-2`.
    ///
    /// An absent rank change renders as an empty last field.
    pub fn to_csv_record(&self) -> String {
        let rank_change = self
            .rank_change
            .map(|change| change.to_string())
            .unwrap_or_default();
        format!(
            "{},{},{},{},{}",
            self.year, self.rank, self.name, self.gender, rank_change
        )
    }
}
