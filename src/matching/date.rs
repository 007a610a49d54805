//! Calendar-date recognition, with and without separators.
//!
//! Two passes run over the password.  The separator-free pass slices every
//! digit run into candidate day/month/year fields using a fixed split table
//! per substring width.  The separator pass drives a hand-rolled state
//! machine over a digit/separator/other classification of the bytes and
//! recognizes `D[D]?.M[M]?.YY[YY]` and `YYYY.M[M]?.D[D]?` shapes.
//!
//! Candidates are only sanity-checked (day ≤ 31, month ≤ 12, year window);
//! real calendar validity is deliberately not enforced, so February 30th
//! passes.

use super::{Error, Match, MatchBuf, MatchKind};

/// A caller-supplied date worth flagging (birthdays and the like).  A match
/// against one of these zeroes the date's base entropy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnownDate {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

/// Payload of a date match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateMatch {
    pub day: u8,
    pub month: u8,
    /// Canonical 4-digit year (2-digit inputs are windowed).
    pub year: u16,
    /// The span is a bare year with no day/month part.
    pub only_year: bool,
    /// The year was written with all four digits.
    pub full_year: bool,
    /// The fields were separated by punctuation.
    pub separator: bool,
    /// The date equals one of the caller-supplied known dates.
    pub known: bool,
}

/// Reference year candidate years are pulled towards.
pub(crate) const REF_YEAR: i32 = 2000;
/// Floor on the year-space size used by the entropy model.
pub(crate) const MIN_YEAR_SPACE: i32 = 20;

const MIN_NOSEP_LEN: usize = 4;
const MAX_NOSEP_LEN: usize = 8;
const MIN_SEP_LEN: usize = 6;

const SEPARATORS: &[u8] = b"-._/\\";

// Year-interpretation flags used by `probe` and the separator state table.
const LEFT_YEAR: u8 = 1 << 0;
const RIGHT_YEAR: u8 = 1 << 1;
const FULL_YEAR: u8 = 1 << 2;

/// Runs both passes.
pub(crate) fn find_matches(
    out: &mut MatchBuf,
    password: &[u8],
    known: &[KnownDate],
) -> Result<(), Error> {
    find_nosep(out, password, known)?;
    find_sep(out, password, known)
}

#[inline]
fn year_dist(year: u16) -> i32 {
    (year as i32 - REF_YEAR).abs()
}

/// Folds an ASCII-digit slice into a number.  Wide enough that a run of
/// digits a dead-end state refuses to consume still accumulates safely.
fn parse_number(digits: &[u8]) -> u32 {
    digits.iter().fold(0u32, |n, &d| n * 10 + (d - b'0') as u32)
}

// ─────────────────────────────────────────────────────────────────────────────
// Candidate probing
// ─────────────────────────────────────────────────────────────────────────────

/// Accepts a 4-digit slice as a bare year in `[1000, 2050]`.
fn probe_year(digits: &[u8]) -> Option<DateMatch> {
    let year = parse_number(digits);
    if !(1000..=2050).contains(&year) {
        return None;
    }
    Some(DateMatch {
        day: 0,
        month: 0,
        year: year as u16,
        only_year: true,
        full_year: true,
        separator: false,
        known: false,
    })
}

/// Probes three numbers as a date, trying the year on the left and/or right
/// as `flags` allows, and the remaining two fields in both orders.
///
/// Rejections: the middle field can never be the year; at most one field may
/// exceed 31; not all three may exceed 12; at most one may be zero.  Among
/// surviving interpretations a known date wins outright, otherwise the year
/// closest to the reference year.
fn probe(nums: &[u32; 3], flags: u8, known: &[KnownDate]) -> Option<DateMatch> {
    if nums[1] > 31 || nums[1] == 0 {
        return None;
    }
    let over_31 = nums.iter().filter(|&&n| n > 31).count();
    let over_12 = nums.iter().filter(|&&n| n > 12).count();
    let zeros = nums.iter().filter(|&&n| n == 0).count();
    if over_31 >= 2 || over_12 == 3 || zeros >= 2 {
        return None;
    }

    // Day/month slot assignments to try, per year side.
    const MEANINGS: [[(usize, usize); 2]; 2] = [
        [(2, 1), (1, 2)], // year on the left: (day, month) from the right pair
        [(0, 1), (1, 0)], // year on the right
    ];

    let full = flags & FULL_YEAR != 0;
    let mut best: Option<DateMatch> = None;

    for (side, &year_flag) in [LEFT_YEAR, RIGHT_YEAR].iter().enumerate() {
        if flags & year_flag == 0 {
            continue;
        }
        let raw = nums[if year_flag == RIGHT_YEAR { 2 } else { 0 }];
        let year = if full {
            if !(1900..=2050).contains(&raw) {
                continue;
            }
            raw
        } else if raw < 50 {
            2000 + raw
        } else {
            1900 + raw
        };

        for &(day_slot, month_slot) in &MEANINGS[side] {
            let day = nums[day_slot];
            let month = nums[month_slot];
            if day == 0 || day > 31 || month == 0 || month > 12 {
                continue;
            }
            let cand = DateMatch {
                day: day as u8,
                month: month as u8,
                year: year as u16,
                only_year: false,
                full_year: full,
                separator: false,
                known: false,
            };
            if known
                .iter()
                .any(|k| k.day == cand.day && k.month == cand.month && k.year == cand.year)
            {
                return Some(DateMatch { known: true, ..cand });
            }
            match &best {
                Some(b) if year_dist(b.year) <= year_dist(cand.year) => {}
                _ => best = Some(cand),
            }
        }
    }

    best
}

/// Splits `digits` at the two offsets and probes the three resulting fields.
/// A 4-digit outer field forces a full-year reading on that side; a 1-digit
/// outer field can never be the year.
fn probe_split(
    digits: &[u8],
    split: (usize, usize),
    known: &[KnownDate],
) -> Option<DateMatch> {
    let len2 = digits.len() - split.1;
    let nums = [
        parse_number(&digits[..split.0]),
        parse_number(&digits[split.0..split.1]),
        parse_number(&digits[split.1..]),
    ];

    let mut flags = LEFT_YEAR | RIGHT_YEAR;
    if split.0 == 4 || len2 == 1 {
        flags &= !RIGHT_YEAR;
    } else if split.0 == 1 || len2 == 4 {
        flags &= !LEFT_YEAR;
    }
    if split.0 == 4 || len2 == 4 {
        flags |= FULL_YEAR;
    }
    probe(&nums, flags, known)
}

// ─────────────────────────────────────────────────────────────────────────────
// Separator-free dates
// ─────────────────────────────────────────────────────────────────────────────

/// Legal field splits per substring width (4 through 8 digits).
const SPLITS: [&[(usize, usize)]; 5] = [
    &[(1, 2), (2, 3)],
    &[(1, 3), (2, 3)],
    &[(1, 2), (2, 4), (4, 5)],
    &[(1, 3), (2, 3), (4, 5), (4, 6)],
    &[(2, 4), (4, 6)],
];

/// Scans maximal digit runs and probes every substring of width 4..=8 at
/// every start inside the run.  A width-4 substring that reads as a bare
/// year is taken as such and not re-probed as a day/month/year split.
fn find_nosep(out: &mut MatchBuf, password: &[u8], known: &[KnownDate]) -> Result<(), Error> {
    let mut i = 0;
    while i + MIN_NOSEP_LEN - 1 < password.len() {
        if !password[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let mut run_end = i + 1;
        while run_end < password.len() && password[run_end].is_ascii_digit() {
            run_end += 1;
        }
        let run_len = run_end - i;
        if run_len < MIN_NOSEP_LEN {
            i += run_len + 1;
            continue;
        }

        for width in (MIN_NOSEP_LEN..=run_len.min(MAX_NOSEP_LEN)).rev() {
            for k in i..=i + run_len - width {
                let digits = &password[k..k + width];

                if width == 4 {
                    if let Some(mut date) = probe_year(digits) {
                        if known.iter().any(|kd| kd.year == date.year) {
                            date.known = true;
                        }
                        out.push(Match {
                            i: k,
                            j: k + width - 1,
                            entropy: 0.0,
                            kind: MatchKind::Date(date),
                        })?;
                        continue;
                    }
                }

                let mut best: Option<DateMatch> = None;
                for &split in SPLITS[width - MIN_NOSEP_LEN] {
                    if let Some(date) = probe_split(digits, split, known) {
                        let replace = match &best {
                            None => true,
                            Some(b) => date.known || year_dist(b.year) > year_dist(date.year),
                        };
                        if replace {
                            let stop = date.known;
                            best = Some(date);
                            if stop {
                                break;
                            }
                        }
                    }
                }
                if let Some(date) = best {
                    out.push(Match {
                        i: k,
                        j: k + width - 1,
                        entropy: 0.0,
                        kind: MatchKind::Date(date),
                    })?;
                }
            }
        }
        i += run_len + 1;
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Separator-bearing dates
// ─────────────────────────────────────────────────────────────────────────────

/// One row of the recognizer.  `next` and `skip` are indexed by the byte
/// class (digit, separator, other/end).  Entering a state with `num >= 0`
/// stores the accumulated number into that field slot; a state with a
/// non-zero `probe` submits the fields under those year flags.
struct SepState {
    next: [i8; 3],
    skip: [u8; 3],
    num: i8,
    probe: u8,
}

macro_rules! st {
    ([$a:expr, $b:expr, $c:expr], [$d:expr, $e:expr, $f:expr], $num:expr, $probe:expr) => {
        SepState {
            next: [$a, $b, $c],
            skip: [$d, $e, $f],
            num: $num,
            probe: $probe,
        }
    };
}

/// Recognizer for `D[D]?.M[M]?.YY[YY]` (states 1–14), `D.M` single-digit-day
/// variants (15–27), and `YYYY.M[M]?.D[D]?` (28–38).  The `skip` column
/// tells the scanner how far it may jump after a dead end without missing a
/// later start.
#[rustfmt::skip]
static SEP_STATES: [SepState; 39] = [
    /*  0 */ st!([ 1, 15, -1], [1, 1,  2], -1, 0),
    /*  1 */ st!([28,  2, -1], [1, 1,  3], -1, 0),
    /*  2 */ st!([ 3, -1, -1], [1, 4,  4],  0, 0),
    /*  3 */ st!([ 4, 10, -1], [1, 1,  5], -1, 0),
    /*  4 */ st!([-1,  5, -1], [3, 1,  6], -1, 0),
    /*  5 */ st!([ 6, -1, -1], [1, 7,  7],  1, 0),
    /*  6 */ st!([ 7, -1, -1], [1, 3,  8],  2, LEFT_YEAR),
    /*  7 */ st!([ 8, -1, -1], [1, 1,  9],  2, LEFT_YEAR | RIGHT_YEAR),
    /*  8 */ st!([ 9, -1, -1], [1, 1, 10], -1, 0),
    /*  9 */ st!([-1, -1, -1], [1, 1, 11],  2, RIGHT_YEAR | FULL_YEAR),
    /* 10 */ st!([11, -1, -1], [1, 6,  6],  1, 0),
    /* 11 */ st!([12, -1, -1], [1, 3,  7],  2, LEFT_YEAR),
    /* 12 */ st!([13, -1, -1], [1, 1,  8],  2, LEFT_YEAR | RIGHT_YEAR),
    /* 13 */ st!([14, -1, -1], [1, 1,  9], -1, 0),
    /* 14 */ st!([-1, -1, -1], [1, 1, 10],  2, RIGHT_YEAR | FULL_YEAR),
    /* 15 */ st!([16, -1, -1], [1, 3,  3],  0, 0),
    /* 16 */ st!([17, 23, -1], [1, 1,  4], -1, 0),
    /* 17 */ st!([-1, 18, -1], [2, 1,  5], -1, 0),
    /* 18 */ st!([19, -1, -1], [1, 6,  6],  1, 0),
    /* 19 */ st!([20, -1, -1], [1, 2,  7], -1, 0),
    /* 20 */ st!([21, -1, -1], [1, 2,  8],  2, RIGHT_YEAR),
    /* 21 */ st!([22, -1, -1], [1, 6,  9], -1, 0),
    /* 22 */ st!([-1, -1, -1], [6, 5, 10],  2, RIGHT_YEAR | FULL_YEAR),
    /* 23 */ st!([24, -1, -1], [1, 5,  5],  1, 0),
    /* 24 */ st!([25, -1, -1], [1, 2,  6], -1, 0),
    /* 25 */ st!([26, -1, -1], [1, 2,  7],  2, RIGHT_YEAR),
    /* 26 */ st!([27, -1, -1], [1, 5,  8], -1, 0),
    /* 27 */ st!([-1, -1, -1], [5, 4,  9],  2, RIGHT_YEAR | FULL_YEAR),
    /* 28 */ st!([29, -1, -1], [1, 1,  4], -1, 0),
    /* 29 */ st!([-1, 30, -1], [1, 1,  5], -1, 0),
    /* 30 */ st!([31, -1, -1], [1, 6,  6],  0, 0),
    /* 31 */ st!([32, 36, -1], [1, 1,  7], -1, 0),
    /* 32 */ st!([-1, 33, -1], [5, 1,  8], -1, 0),
    /* 33 */ st!([34, -1, -1], [1, 9,  9],  1, 0),
    /* 34 */ st!([35, -1, -1], [1, 2, 10],  2, LEFT_YEAR | FULL_YEAR),
    /* 35 */ st!([-1, -1, -1], [2, 2, 11],  2, LEFT_YEAR | FULL_YEAR),
    /* 36 */ st!([37, -1, -1], [1, 8,  8],  1, 0),
    /* 37 */ st!([38, -1, -1], [1, 2,  9],  2, LEFT_YEAR | FULL_YEAR),
    /* 38 */ st!([-1, -1, -1], [2, 2, 10],  2, LEFT_YEAR | FULL_YEAR),
];

/// Walks the state machine from every digit position.  Overlapping accepts
/// from one start keep the best candidate: an empty best always yields; a
/// known-date best yields only to a longer known-date accept; otherwise a
/// known date, a year closer to the reference, or a longer span wins.
fn find_sep(out: &mut MatchBuf, password: &[u8], known: &[KnownDate]) -> Result<(), Error> {
    let mut i = 0;
    while i + MIN_SEP_LEN - 1 < password.len() {
        if !password[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let mut state = &SEP_STATES[0];
        let mut nums = [0u32; 3];
        let mut n = (password[i] - b'0') as u32;
        let mut best: Option<DateMatch> = None;
        let mut end = 0usize;
        let mut j = i + 1;
        let skip;
        loop {
            let class = if j < password.len() {
                let ch = password[j];
                if ch.is_ascii_digit() {
                    n = n * 10 + (ch - b'0') as u32;
                    0
                } else if SEPARATORS.contains(&ch) {
                    1
                } else {
                    2
                }
            } else {
                2
            };

            let next = state.next[class];
            if next < 0 {
                skip = state.skip[class] as usize;
                break;
            }
            state = &SEP_STATES[next as usize];
            if state.num >= 0 {
                nums[state.num as usize] = n;
            }
            if class != 0 {
                n = 0;
            }
            if state.probe != 0 {
                if let Some(date) = probe(&nums, state.probe, known) {
                    let replace = match &best {
                        None => true,
                        Some(b) if b.known => date.known && end < j,
                        Some(b) => {
                            date.known
                                || year_dist(b.year) > year_dist(date.year)
                                || end < j
                        }
                    };
                    if replace {
                        best = Some(date);
                        end = j;
                    }
                }
            }
            j += 1;
        }

        if let Some(mut date) = best {
            date.separator = true;
            out.push(Match {
                i,
                j: end,
                entropy: 0.0,
                kind: MatchKind::Date(date),
            })?;
        }
        i += skip;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates_of(password: &[u8], known: &[KnownDate]) -> Vec<(usize, usize, DateMatch)> {
        let mut buf = MatchBuf::new(None);
        find_matches(&mut buf, password, known).unwrap();
        buf.as_slice()
            .iter()
            .map(|m| match m.kind {
                MatchKind::Date(d) => (m.i, m.j, d),
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn separator_date_full_year() {
        let found = dates_of(b"11/03/1985", &[]);
        let (i, j, d) = found
            .iter()
            .find(|(_, _, d)| d.separator)
            .expect("separator date found");
        assert_eq!((*i, *j), (0, 9));
        assert_eq!((d.day, d.month, d.year), (11, 3, 1985));
        assert!(d.full_year && !d.only_year && !d.known);
    }

    #[test]
    fn nosep_date_full_year() {
        let found = dates_of(b"19850311", &[]);
        let (_, _, d) = found
            .iter()
            .find(|(i, j, _)| (*i, *j) == (0, 7))
            .expect("full-width date found");
        assert_eq!((d.day, d.month, d.year), (11, 3, 1985));
        assert!(d.full_year && !d.separator);
    }

    #[test]
    fn bare_year_accepted() {
        let found = dates_of(b"xx1985xx", &[]);
        let (_, _, d) = found
            .iter()
            .find(|(i, j, _)| (*i, *j) == (2, 5))
            .expect("year found");
        assert!(d.only_year && d.full_year);
        assert_eq!(d.year, 1985);
    }

    #[test]
    fn bare_year_outside_window_rejected() {
        // Split readings may still parse (e.g. 09|9|9), but no bare-year
        // match is emitted outside [1000, 2050].
        assert!(!dates_of(b"ab0999cd", &[]).iter().any(|(_, _, d)| d.only_year));
        assert!(!dates_of(b"ab2051cd", &[]).iter().any(|(_, _, d)| d.only_year));
        assert!(dates_of(b"ab2049cd", &[]).iter().any(|(_, _, d)| d.only_year));
    }

    #[test]
    fn two_digit_year_windowing() {
        // 49 maps forward to 2049, 51 back to 1951.
        let found = dates_of(b"1.2.49xx", &[]);
        assert!(found.iter().any(|(_, _, d)| d.year == 2049));
        let found = dates_of(b"1.2.51xx", &[]);
        assert!(found.iter().any(|(_, _, d)| d.year == 1951));
    }

    #[test]
    fn middle_field_cannot_be_large() {
        // 99 in the middle can be neither day nor month nor year.
        assert!(dates_of(b"12/99/12", &[]).is_empty());
    }

    #[test]
    fn february_30_is_not_our_problem() {
        let found = dates_of(b"30/02/1999", &[]);
        assert!(found.iter().any(|(_, _, d)| d.day == 30 && d.month == 2));
    }

    #[test]
    fn known_date_preferred_and_flagged() {
        let known = [KnownDate {
            day: 3,
            month: 11,
            year: 1985,
        }];
        // Ambiguous day/month order; the known date fixes the reading.
        let found = dates_of(b"03111985", &known);
        assert!(found
            .iter()
            .any(|(_, _, d)| d.known && d.day == 3 && d.month == 11 && d.year == 1985));
    }

    #[test]
    fn year_close_to_reference_preferred() {
        // "020304" reads as d/m/y in several ways; all candidate years are
        // 2-digit windowed, and the winner must be nearest to 2000.
        let found = dates_of(b"020304xy", &[]);
        let best_years: Vec<u16> = found.iter().map(|(_, _, d)| d.year).collect();
        assert!(best_years.iter().all(|&y| (1950..=2050).contains(&y)));
    }

    #[test]
    fn iso_order_with_separators() {
        let found = dates_of(b"2015-09-01", &[]);
        let (_, _, d) = found
            .iter()
            .find(|(_, _, d)| d.separator)
            .expect("iso date found");
        assert_eq!((d.day, d.month, d.year), (1, 9, 2015));
        assert!(d.full_year);
    }

    #[test]
    fn longer_separator_span_wins() {
        // The machine accepts "11/03/19" (windowed 2019) before consuming
        // the full "11/03/1985"; the longer accept must replace it.
        let found = dates_of(b"11/03/1985", &[]);
        let seps: Vec<_> = found.iter().filter(|(_, _, d)| d.separator).collect();
        assert_eq!(seps.len(), 1);
        assert_eq!(seps[0].2.year, 1985);
        assert_eq!(seps[0].1, 9);
    }
}
