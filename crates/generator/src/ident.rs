use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn date_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})__").unwrap())
}

/// Read the publication date from a `YYYY-MM-DD__` filename prefix.
///
/// Digit runs that do not form a real calendar date count as no prefix.
pub fn date_from_filename(filename: &str) -> Option<NaiveDate> {
    let caps = date_prefix_re().captures(filename)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Hands out `YYYYMMDD-NN` page ids, one counter per calendar date.
///
/// Counters exist for a single run and follow call order, so ids stay
/// stable across rebuilds as long as the manifest keeps its order and
/// filenames.
#[derive(Debug)]
pub struct IdAllocator {
    today: NaiveDate,
    counters: BTreeMap<NaiveDate, u32>,
}

impl IdAllocator {
    /// `today` is used for pages whose filename carries no date prefix
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            counters: BTreeMap::new(),
        }
    }

    /// Derive the page date from its filename and assign the next id for
    /// that date
    pub fn assign(&mut self, filename: &str) -> (NaiveDate, String) {
        let date = date_from_filename(filename).unwrap_or(self.today);
        let counter = self.counters.entry(date).or_insert(0);
        *counter += 1;
        let id = format!("{}-{:02}", date.format("%Y%m%d"), *counter);
        (date, id)
    }
}
