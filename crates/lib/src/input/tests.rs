use std::collections::HashSet;

use super::{ErrorKind, Input, Nl, Split, W};

fn input(data: &'static str) -> Input {
    Input::new(data.as_bytes())
}

#[test]
fn words_and_integers() {
    let mut p = input("Game 42");

    let (W(word), id) = p.next::<(W<&str>, u64)>().unwrap();
    assert_eq!(word, "Game");
    assert_eq!(id, 42);

    assert!(p.try_next::<W<&str>>().unwrap().is_none());
}

#[test]
fn integer_errors_carry_the_word() {
    let mut p = input("12 potato");
    assert_eq!(p.next::<u32>().unwrap(), 12);

    let e = p.next::<u32>().unwrap_err();
    assert_eq!(*e.kind(), ErrorKind::NotInteger("potato"));
    assert_eq!(e.span(), 3..9);
}

#[test]
fn lines() {
    let mut p = input("1\n2\n3\n");
    let mut values = Vec::new();

    while let Some(n) = p.try_line::<u32>().unwrap() {
        values.push(n);
    }

    assert_eq!(values, [1, 2, 3]);
    assert_eq!(*p.line::<u32>().unwrap_err().kind(), ErrorKind::ExpectedLine);
}

#[test]
fn split_fields() {
    let mut p = input("Card 1: 41 48 | 83 86 17");
    let Split([mut head, mut tail]) = p.next::<Split<':', [Input; 2]>>().unwrap();

    let (W(card), id) = head.next::<(W<&str>, u32)>().unwrap();
    assert_eq!((card, id), ("Card", 1));

    let Split([mut winning, mut owned]) = tail.next::<Split<'|', [Input; 2]>>().unwrap();

    let winning = winning.next::<Vec<u32>>().unwrap();
    assert_eq!(winning, [41, 48]);

    let owned = owned
        .next::<Vec<W<&str>>>()
        .unwrap()
        .into_iter()
        .map(|W(w)| w)
        .collect::<HashSet<_>>();
    assert_eq!(owned, HashSet::from(["83", "86", "17"]));
}

#[test]
fn missing_separator_fails_fast() {
    let mut p = input("Card 1 41 48 83");

    let e = p.next::<Split<':', [Input; 2]>>().unwrap_err();
    assert_eq!(*e.kind(), ErrorKind::ExpectedSplit(':'));
}

#[test]
fn bad_line_is_an_error_not_the_end() {
    let mut p = input("1:2\nbroken\n");
    assert!(p.try_next::<Nl<Split<':', [Input; 2]>>>().unwrap().is_some());

    let e = p.try_next::<Nl<Split<':', [Input; 2]>>>().unwrap_err();
    assert_eq!(*e.kind(), ErrorKind::ExpectedSplit(':'));
}
