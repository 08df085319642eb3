use chrono::{Datelike, Duration, NaiveDate};

/// 網路研討會日期：網址帶有 `DD-MM` 時直接顯示成 `DD/MM`，
/// 否則使用下週三。
pub fn webinar_date(date: Option<&str>, today: NaiveDate) -> String {
    match date {
        Some(date) => date.replace('-', "/"),
        None => next_wednesday(today),
    }
}

pub fn next_wednesday(today: NaiveDate) -> String {
    let weekday = i64::from(today.weekday().num_days_from_monday());
    let mut days_ahead = 2 - weekday;

    // weekday >= 0，所以一律跳到下一週的週三
    if days_ahead - 2 <= 0 {
        days_ahead += 7;
    }

    let final_date = today + Duration::days(days_ahead);
    final_date.format("%d/%m").to_string()
}
