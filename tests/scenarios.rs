// End-to-end expectations for well-known password shapes, evaluated with
// the published symbol alphabet.

use zxcvbn::{Analyzer, Layout, Match, MatchKind, Options};

fn analyzer() -> Analyzer {
    Analyzer::new(Options::default())
}

fn cover_of(a: &Analyzer, password: &[u8]) -> Vec<Match> {
    a.evaluate(password, &[], &[])
        .unwrap()
        .cover()
        .cloned()
        .collect()
}

#[test]
fn qwerty_is_one_spatial_walk() {
    let cover = cover_of(&analyzer(), b"qwerty");
    assert_eq!(cover.len(), 1);
    let m = &cover[0];
    assert_eq!((m.i, m.j), (0, 5));
    assert_eq!(
        m.kind,
        MatchKind::Spatial {
            layout: Layout::Qwerty,
            turns: 1,
            shifted: 0,
        }
    );
}

#[test]
fn two_vertical_walks() {
    let cover = cover_of(&analyzer(), b"1qaz2wsx");
    assert_eq!(cover.len(), 2);
    for (m, span) in cover.iter().zip([(0, 3), (4, 7)]) {
        assert_eq!((m.i, m.j), span);
        assert!(
            matches!(
                m.kind,
                MatchKind::Spatial {
                    layout: Layout::Qwerty,
                    ..
                }
            ),
            "expected a qwerty walk at {span:?}"
        );
    }
}

#[test]
fn ascending_sequence() {
    let cover = cover_of(&analyzer(), b"abcdef");
    assert_eq!(cover.len(), 1);
    let m = &cover[0];
    assert_eq!((m.i, m.j), (0, 5));
    match m.kind {
        MatchKind::Sequence { descending, .. } => assert!(!descending),
        ref other => panic!("expected a sequence, got {other:?}"),
    }
    // Obvious 'a' start: 1 bit, plus the length term.
    assert!((m.entropy - (1.0 + 6f64.log2())).abs() < 1e-9);
}

#[test]
fn separator_date() {
    let cover = cover_of(&analyzer(), b"11/03/1985");
    assert_eq!(cover.len(), 1);
    let m = &cover[0];
    match m.kind {
        MatchKind::Date(d) => {
            assert_eq!((d.day, d.month, d.year), (11, 3, 1985));
            assert!(d.separator && d.full_year);
            assert!(!d.only_year && !d.known);
        }
        ref other => panic!("expected a date, got {other:?}"),
    }
}

#[test]
fn compact_date() {
    let cover = cover_of(&analyzer(), b"19850311");
    assert_eq!(cover.len(), 1);
    let m = &cover[0];
    match m.kind {
        MatchKind::Date(d) => {
            assert_eq!((d.day, d.month, d.year), (11, 3, 1985));
            assert!(d.full_year && !d.separator);
        }
        ref other => panic!("expected a date, got {other:?}"),
    }
}

#[test]
fn dictionary_word_plus_trailing_digit() {
    let mut a = analyzer();
    let id = a.register_dictionary("common");
    a.add_word(id, b"password", 1);

    let cover = cover_of(&a, b"Password1");
    assert_eq!(cover.len(), 2);

    let word = &cover[0];
    assert_eq!((word.i, word.j), (0, 7));
    assert_eq!(word.kind, MatchKind::Dictionary { rank: 1 });
    // rank 1 costs nothing; the leading capital costs exactly one bit.
    assert!((word.entropy - 1.0).abs() < 1e-9);

    let tail = &cover[1];
    assert_eq!((tail.i, tail.j), (8, 8));
    assert_eq!(tail.kind, MatchKind::Bruteforce);
}

#[test]
fn repeated_letter() {
    let cover = cover_of(&analyzer(), b"zzzzz");
    assert_eq!(cover.len(), 1);
    let m = &cover[0];
    assert_eq!(m.kind, MatchKind::Repeat);
    assert!((m.entropy - (26.0f64 * 5.0).log2()).abs() < 1e-9);
}

#[test]
fn single_byte_password() {
    let cover = cover_of(&analyzer(), b"7");
    assert_eq!(cover.len(), 1);
    assert_eq!(cover[0].kind, MatchKind::Bruteforce);
    assert_eq!((cover[0].i, cover[0].j), (0, 0));
}

#[test]
fn three_identical_bytes_are_a_repeat() {
    let cover = cover_of(&analyzer(), b"aaa");
    assert_eq!(cover.len(), 1);
    assert_eq!(cover[0].kind, MatchKind::Repeat);
}
