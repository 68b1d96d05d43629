//! Display helpers: status badges and Turkish date/time strings.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, TimeZone, Weekday};

use crate::model::AppointmentStatus;

/// Style class and label for an appointment status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub class: &'static str,
    pub label: &'static str,
}

const SCHEDULED_BADGE: Badge = Badge {
    class: "badge-scheduled",
    label: "Planlandı",
};

/// Unrecognized statuses (including `no_show`) share the scheduled badge
pub fn status_badge(status: &AppointmentStatus) -> Badge {
    match status {
        AppointmentStatus::Scheduled | AppointmentStatus::Other(_) => SCHEDULED_BADGE,
        AppointmentStatus::Confirmed => Badge {
            class: "badge-confirmed",
            label: "Onaylandı",
        },
        AppointmentStatus::Completed => Badge {
            class: "badge-completed",
            label: "Tamamlandı",
        },
        AppointmentStatus::Cancelled => Badge {
            class: "badge-cancelled",
            label: "İptal",
        },
    }
}

const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık",
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Pazartesi",
        Weekday::Tue => "Salı",
        Weekday::Wed => "Çarşamba",
        Weekday::Thu => "Perşembe",
        Weekday::Fri => "Cuma",
        Weekday::Sat => "Cumartesi",
        Weekday::Sun => "Pazar",
    }
}

/// `1 Ocak 2025 Çarşamba`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year(),
        weekday_name(date.weekday())
    )
}

/// `HH:MM` wall-clock time of `instant` in `tz`
pub fn format_clock_in<Tz: TimeZone>(instant: &DateTime<FixedOffset>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format("%H:%M").to_string()
}

/// `HH:MM` in the local timezone
pub fn format_clock(instant: &DateTime<FixedOffset>) -> String {
    format_clock_in(instant, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_uses_scheduled_badge() {
        let badge = status_badge(&AppointmentStatus::from("no_show"));
        assert_eq!(badge.class, "badge-scheduled");
        assert_eq!(badge.label, "Planlandı");

        assert_eq!(status_badge(&AppointmentStatus::Cancelled).label, "İptal");
        assert_eq!(status_badge(&AppointmentStatus::Confirmed).class, "badge-confirmed");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_long_date(date), "1 Ocak 2025 Çarşamba");

        let date = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();
        assert_eq!(format_long_date(date), "31 Ağustos 2024 Cumartesi");
    }

    #[test]
    fn test_clock_in_offset() {
        let instant = DateTime::parse_from_rfc3339("2025-01-01T06:00:00Z").unwrap();
        let istanbul = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(format_clock_in(&instant, &istanbul), "09:00");
    }
}
