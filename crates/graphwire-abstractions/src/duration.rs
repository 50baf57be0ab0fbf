// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! ISO-8601 durations (`[-]PnYnMnWnDTnHnMnS`).
//!
//! Components are kept as written instead of being folded into a single
//! span: a month or a year has no fixed length, so `P1M` and `P30D` are
//! different values.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use thiserror::Error;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const DATE_DESIGNATORS: [char; 4] = ['Y', 'M', 'W', 'D'];
const TIME_DESIGNATORS: [char; 3] = ['H', 'M', 'S'];

/// Error returned when a string is not a valid ISO-8601 duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid ISO-8601 duration `{input}`: {reason}")]
pub struct DurationParseError {
    /// Offending input.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

/// ISO-8601 duration with per-component storage.
///
/// `nanos` must stay below one second; [`IsoDuration::parse`] never
/// produces a larger value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsoDuration {
    /// Leading `-` sign.
    pub negative: bool,
    /// Years (`nY`).
    pub years: u32,
    /// Months (`nM` before `T`).
    pub months: u32,
    /// Weeks (`nW`).
    pub weeks: u32,
    /// Days (`nD`).
    pub days: u32,
    /// Hours (`nH`).
    pub hours: u32,
    /// Minutes (`nM` after `T`).
    pub minutes: u32,
    /// Whole seconds (`nS`).
    pub seconds: u32,
    /// Fractional seconds in nanoseconds.
    pub nanos: u32,
}

impl IsoDuration {
    /// Duration of `days` days.
    pub const fn from_days(days: u32) -> Self {
        Self {
            negative: false,
            years: 0,
            months: 0,
            weeks: 0,
            days,
            hours: 0,
            minutes: 0,
            seconds: 0,
            nanos: 0,
        }
    }

    /// Duration of `hours` hours.
    pub const fn from_hours(hours: u32) -> Self {
        let mut duration = Self::from_days(0);
        duration.hours = hours;
        duration
    }

    /// `true` when every component is zero.
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.nanos == 0
    }

    const fn has_time_part(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0 || self.nanos != 0
    }

    /// Parse an ISO-8601 duration such as `P1Y2M3DT4H5M6.5S` or `-PT15M`.
    ///
    /// Fractions are accepted on seconds only (`.` or `,` separator, at most
    /// nine digits). A zero duration is never negative.
    pub fn parse(input: &str) -> Result<Self, DurationParseError> {
        let fail = |reason| DurationParseError {
            input: input.to_owned(),
            reason,
        };

        let (negative, unsigned) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };
        let body = unsigned
            .strip_prefix('P')
            .ok_or_else(|| fail("missing `P` designator"))?;
        let (date_part, time_part) = match body.split_once('T') {
            Some((date, time)) => {
                if time.is_empty() {
                    return Err(fail("`T` must be followed by a time component"));
                }
                (date, Some(time))
            }
            None => (body, None),
        };

        let date = components(date_part, &DATE_DESIGNATORS).map_err(fail)?;
        let time = match time_part {
            Some(part) => components(part, &TIME_DESIGNATORS).map_err(fail)?,
            None => Vec::new(),
        };
        if date.is_empty() && time.is_empty() {
            return Err(fail("no components"));
        }

        let mut out = Self::default();
        for component in date {
            if component.fractional {
                return Err(fail("fractions are only allowed on seconds"));
            }
            match component.designator {
                'Y' => out.years = component.whole,
                'M' => out.months = component.whole,
                'W' => out.weeks = component.whole,
                _ => out.days = component.whole,
            }
        }
        for component in time {
            if component.fractional && component.designator != 'S' {
                return Err(fail("fractions are only allowed on seconds"));
            }
            match component.designator {
                'H' => out.hours = component.whole,
                'M' => out.minutes = component.whole,
                _ => {
                    out.seconds = component.whole;
                    out.nanos = component.nanos;
                }
            }
        }
        out.negative = negative && !out.is_zero();
        Ok(out)
    }
}

struct Component {
    designator: char,
    whole: u32,
    nanos: u32,
    fractional: bool,
}

fn components(section: &str, designators: &[char]) -> Result<Vec<Component>, &'static str> {
    let mut out = Vec::new();
    let mut number = String::new();
    let mut last_rank: Option<usize> = None;

    for ch in section.chars() {
        if ch.is_ascii_digit() {
            number.push(ch);
            continue;
        }
        if ch == '.' || ch == ',' {
            number.push('.');
            continue;
        }
        let rank = designators
            .iter()
            .position(|d| *d == ch)
            .ok_or("unexpected character")?;
        if last_rank.is_some_and(|last| rank <= last) {
            return Err("components out of order or repeated");
        }
        if number.is_empty() {
            return Err("designator without a number");
        }
        let (whole, nanos, fractional) = split_number(&number)?;
        out.push(Component {
            designator: ch,
            whole,
            nanos,
            fractional,
        });
        number.clear();
        last_rank = Some(rank);
    }

    if number.is_empty() {
        Ok(out)
    } else {
        Err("number without a designator")
    }
}

fn split_number(number: &str) -> Result<(u32, u32, bool), &'static str> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (number, None),
    };
    if whole.is_empty() {
        return Err("missing integer part");
    }
    let whole = whole.parse::<u32>().map_err(|_| "component out of range")?;
    let Some(fraction) = fraction else {
        return Ok((whole, 0, false));
    };
    if fraction.is_empty() || fraction.len() > 9 || fraction.contains('.') {
        return Err("malformed fraction");
    }
    let padded = format!("{fraction:0<9}");
    let nanos = padded.parse::<u32>().map_err(|_| "malformed fraction")?;
    Ok((whole, nanos, true))
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        let mut out = String::with_capacity(16);
        if self.negative {
            out.push('-');
        }
        out.push('P');
        for (amount, designator) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if amount != 0 {
                write!(out, "{amount}{designator}")?;
            }
        }
        if self.has_time_part() {
            out.push('T');
            if self.hours != 0 {
                write!(out, "{}H", self.hours)?;
            }
            if self.minutes != 0 {
                write!(out, "{}M", self.minutes)?;
            }
            if self.seconds != 0 || self.nanos != 0 {
                write!(out, "{}", self.seconds)?;
                if self.nanos != 0 {
                    let fraction = format!("{:09}", self.nanos % NANOS_PER_SECOND);
                    write!(out, ".{}", fraction.trim_end_matches('0'))?;
                }
                out.push('S');
            }
        }
        f.write_str(&out)
    }
}

impl FromStr for IsoDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_every_component() {
        let d = IsoDuration::parse("P1Y2M3W4DT5H6M7.25S").expect("valid");
        assert_eq!(
            d,
            IsoDuration {
                negative: false,
                years: 1,
                months: 2,
                weeks: 3,
                days: 4,
                hours: 5,
                minutes: 6,
                seconds: 7,
                nanos: 250_000_000,
            }
        );
        assert_eq!(d.to_string(), "P1Y2M3W4DT5H6M7.25S");
    }

    #[test]
    fn month_and_minute_share_a_letter() {
        let d = IsoDuration::parse("P1MT1M").expect("valid");
        assert_eq!(d.months, 1);
        assert_eq!(d.minutes, 1);
    }

    #[test]
    fn zero_formats_canonically() {
        assert_eq!(IsoDuration::default().to_string(), "PT0S");
        let zero = IsoDuration::parse("-P0D").expect("valid");
        assert!(zero.is_zero());
        assert!(!zero.negative);
    }

    #[test]
    fn negative_and_comma_fraction() {
        let d = IsoDuration::parse("-PT0,5S").expect("valid");
        assert!(d.negative);
        assert_eq!(d.nanos, 500_000_000);
        assert_eq!(d.to_string(), "-PT0.5S");
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "P", "PT", "1D", "P1", "PD", "P1D2", "PT1H2H", "P1DT", "P1.5D", "PT1.S", "P1S", "P2D1Y"] {
            assert!(IsoDuration::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    proptest! {
        #[test]
        fn display_then_parse_is_identity(
            negative in any::<bool>(),
            years in 0u32..100,
            months in 0u32..24,
            weeks in 0u32..60,
            days in 0u32..400,
            hours in 0u32..48,
            minutes in 0u32..120,
            seconds in 0u32..120,
            nanos in 0u32..NANOS_PER_SECOND,
        ) {
            let d = IsoDuration { negative, years, months, weeks, days, hours, minutes, seconds, nanos };
            prop_assume!(!d.is_zero());
            prop_assert_eq!(IsoDuration::parse(&d.to_string()), Ok(d));
        }
    }
}
