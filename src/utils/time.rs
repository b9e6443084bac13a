use chrono::NaiveDate;

const LOG_PREFIX: &str = "output_";
const LOG_EXTENSION: &str = ".txt";

/// This is the standard way of converting a date to a string in dayrate.
pub fn date_to_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Name of the rating log file for `date`, e.g. `output_2024-04-05.txt`.
pub fn date_to_log_name(date: NaiveDate) -> String {
    format!("{LOG_PREFIX}{}{LOG_EXTENSION}", date_to_string(date))
}

/// Reverse of [date_to_log_name]. Returns [None] for anything that isn't a rating log.
pub fn log_name_to_date(name: &str) -> Option<NaiveDate> {
    let date = name.strip_prefix(LOG_PREFIX)?.strip_suffix(LOG_EXTENSION)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
