use crate::extractor::Extractor;
use crate::index::{NameRanks, YearlyNameIndex};
use crate::record::{BabyRecord, Gender};

/// Number of ranked rows considered per year.
pub const MAX_RANK: usize = 1000;

/// Computes year-over-year rank changes across a run of consecutive years.
///
/// Holds one name index per gender for the lifetime of a run; male and
/// female rankings never see each other.
#[derive(Debug, Default)]
pub struct RankDeltaCalculator {
    male_index: YearlyNameIndex,
    female_index: YearlyNameIndex,
    last_year: Option<i32>,
}

impl RankDeltaCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self, gender: Gender) -> &YearlyNameIndex {
        match gender {
            Gender::Male => &self.male_index,
            Gender::Female => &self.female_index,
        }
    }

    fn index_mut(&mut self, gender: Gender) -> &mut YearlyNameIndex {
        match gender {
            Gender::Male => &mut self.male_index,
            Gender::Female => &mut self.female_index,
        }
    }

    fn ensure_increasing(&self, year: i32) -> anyhow::Result<()> {
        match self.last_year {
            Some(last) if year <= last => Err(anyhow::anyhow!(
                "Years must be processed in increasing order: {} after {}",
                year,
                last
            )),
            _ => Ok(()),
        }
    }

    /// Produces the records of one year with their rank changes.
    ///
    /// Male records come first, then female records, each in rank order.
    /// Only the first `MAX_RANK` entries are considered; rows past that are
    /// neither output nor indexed. The year's rankings are committed to the
    /// indices once all deltas are computed.
    ///
    /// # Errors
    /// * If `extractor.year()` is not newer than the previously handled year.
    pub fn process_year(&mut self, extractor: &Extractor) -> anyhow::Result<Vec<BabyRecord>> {
        let year = extractor.year();
        self.ensure_increasing(year)?;

        let mut male_records: Vec<BabyRecord> = extractor.map_entries(|e| BabyRecord::male(year, e));
        let mut female_records: Vec<BabyRecord> = extractor.map_entries(|e| BabyRecord::female(year, e));
        male_records.truncate(MAX_RANK);
        female_records.truncate(MAX_RANK);

        self.apply_gender(year, Gender::Male, &mut male_records)?;
        self.apply_gender(year, Gender::Female, &mut female_records)?;
        self.last_year = Some(year);

        male_records.extend(female_records);
        anyhow::Ok(male_records)
    }

    fn apply_gender(
        &mut self,
        year: i32,
        gender: Gender,
        records: &mut [BabyRecord],
    ) -> anyhow::Result<()> {
        let index = self.index(gender);
        let previous_year = year
            .checked_sub(1)
            .filter(|previous| index.contains_year(*previous));
        let mut current = NameRanks::with_capacity(records.len());

        for record in records.iter_mut() {
            record.rank_change = previous_year
                .and_then(|previous| index.rank(previous, &record.name))
                .map(|previous| i64::from(record.rank) - i64::from(previous));
            // a repeated name keeps its later rank
            current.insert(record.name.clone(), record.rank);
        }

        self.index_mut(gender).commit_year(year, current)
    }

    /// Records that `year` has no document.
    ///
    /// Nothing is indexed for it, so the following year gets no deltas.
    pub fn skip_year(&mut self, year: i32) -> anyhow::Result<()> {
        self.ensure_increasing(year)?;
        self.last_year = Some(year);
        anyhow::Ok(())
    }
}
