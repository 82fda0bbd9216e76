use bitflags::bitflags;
use chrono::{Datelike, NaiveDate, Weekday};

bitflags! {
    /// Set of weekdays, used to mark days a schedule skips.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Weekdays: u8 {
        const MONDAY = 0b000_0001;
        const TUESDAY = 0b000_0010;
        const WEDNESDAY = 0b000_0100;
        const THURSDAY = 0b000_1000;
        const FRIDAY = 0b001_0000;
        const SATURDAY = 0b010_0000;
        const SUNDAY = 0b100_0000;
        const WEEKEND = Self::SATURDAY.bits() | Self::SUNDAY.bits();
    }
}

impl Weekdays {
    /// Parse day letters `M T W R F S U`, e.g. `SU` for the weekend.
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut days = Self::empty();

        for c in s.chars() {
            match c.to_ascii_uppercase() {
                'M' => days |= Self::MONDAY,
                'T' => days |= Self::TUESDAY,
                'W' => days |= Self::WEDNESDAY,
                'R' => days |= Self::THURSDAY,
                'F' => days |= Self::FRIDAY,
                'S' => days |= Self::SATURDAY,
                'U' => days |= Self::SUNDAY,
                _ => return None,
            }
        }

        Some(days)
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(Self::from(date.weekday()))
    }
}

impl From<Weekday> for Weekdays {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Weekdays::MONDAY,
            Weekday::Tue => Weekdays::TUESDAY,
            Weekday::Wed => Weekdays::WEDNESDAY,
            Weekday::Thu => Weekdays::THURSDAY,
            Weekday::Fri => Weekdays::FRIDAY,
            Weekday::Sat => Weekdays::SATURDAY,
            Weekday::Sun => Weekdays::SUNDAY,
        }
    }
}
