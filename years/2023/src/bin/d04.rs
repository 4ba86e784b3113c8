use std::collections::{HashMap, HashSet};

use lib::prelude::*;

fn main() -> Result<()> {
    let (input, path) = lib::input!("d04.txt");

    lib::cli::run(
        path,
        input,
        ["card point sum", "total scratchcards"],
        Some((13, 30)),
        solve,
    )
}

/// One scratchcard. The numbers are kept as raw words since only set
/// membership matters.
struct Card {
    winning: HashSet<&'static str>,
    owned: HashSet<&'static str>,
}

lib::from_input! {
    |(Split([_, mut numbers])): Split<':', [Input; 2]>| -> Card {
        let Split([mut winning, mut owned]) = numbers.next::<Split<'|', [Input; 2]>>()?;

        Ok(Card {
            winning: words(&mut winning)?,
            owned: words(&mut owned)?,
        })
    }
}

fn words(input: &mut Input) -> Result<HashSet<&'static str>, lib::InputError> {
    let words = input.next::<Vec<W<&str>>>()?;
    Ok(words.into_iter().map(|W(w)| w).collect())
}

impl Card {
    fn matches(&self) -> usize {
        self.winning.intersection(&self.owned).count()
    }

    /// Part 1 score: the first match is worth one point, every further match
    /// doubles it.
    fn points(&self) -> u64 {
        match self.matches() {
            0 => 0,
            m => 1 << (m - 1),
        }
    }
}

/// An inclusive span of 1-based card indices.
///
/// The expansion memo is keyed by the raw `(start, end)` pair rather than by
/// the cards the span resolves to, so spans that clip to the same set of
/// cards still cache separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// The span of cards won by the card at `index` with the given number of
    /// matches.
    fn derived(index: usize, matches: usize) -> Self {
        Self {
            start: index + 1,
            end: index + matches,
        }
    }

    /// The indices in the span that exist in a table of `len` cards.
    fn cards(self, len: usize) -> impl Iterator<Item = usize> {
        self.start.max(1)..=self.end.min(len)
    }
}

/// Total number of cards, originals plus copies, produced by the cards in
/// `span`.
fn total_cards(cards: &[Card], span: Span, memo: &mut HashMap<Span, u64>) -> u64 {
    let mut total = 0;

    for index in span.cards(cards.len()) {
        total += 1;

        let derived = Span::derived(index, cards[index - 1].matches());

        let won = match memo.get(&derived) {
            Some(&won) => won,
            None => {
                let won = total_cards(cards, derived, memo);
                memo.insert(derived, won);
                won
            }
        };

        total += won;
    }

    total
}

fn solve(mut input: Input) -> Result<(u64, u64)> {
    let mut cards = Vec::new();

    while let Some(Nl(card)) = input.try_next::<Nl<Card>>()? {
        cards.push(card);
    }

    let points = cards.iter().map(Card::points).sum();

    let all = Span {
        start: 1,
        end: cards.len(),
    };

    let total = total_cards(&cards, all, &mut HashMap::new());
    Ok((points, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &[u8] = b"\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    fn cards(input: &'static [u8]) -> Vec<Card> {
        let mut input = Input::new(input);
        let mut cards = Vec::new();

        while let Some(Nl(card)) = input.try_next::<Nl<Card>>().unwrap() {
            cards.push(card);
        }

        cards
    }

    #[test]
    fn example() {
        assert_eq!(solve(Input::new(EXAMPLE)).unwrap(), (13, 30));
    }

    #[test]
    fn example_match_counts() {
        let counts = cards(EXAMPLE)
            .iter()
            .map(Card::matches)
            .collect::<Vec<_>>();
        assert_eq!(counts, [4, 2, 2, 1, 0, 0]);
    }

    #[test]
    fn card_without_matches_counts_itself() {
        let cards = cards(b"Card 1: 1 2 | 3 4\n");
        let span = Span { start: 1, end: 1 };
        assert_eq!(total_cards(&cards, span, &mut HashMap::new()), 1);
    }

    #[test]
    fn expansion_is_deterministic() {
        let cards = cards(EXAMPLE);
        let span = Span { start: 1, end: 6 };

        let a = total_cards(&cards, span, &mut HashMap::new());
        let b = total_cards(&cards, span, &mut HashMap::new());
        assert_eq!(a, b);
    }

    #[test]
    fn memo_keys_are_span_identity() {
        let cards = cards(b"Card 1: 1 2 | 3 4\n");

        // Two spans that both resolve to no cards at all still get their own
        // entries; a pre-seeded value-equivalent span must not be reused.
        let mut memo = HashMap::new();
        memo.insert(Span { start: 7, end: 6 }, 123);

        let total = total_cards(&cards, Span { start: 1, end: 1 }, &mut memo);

        assert_eq!(total, 1);
        assert_eq!(memo.get(&Span { start: 2, end: 1 }), Some(&0));
        assert_eq!(memo.get(&Span { start: 7, end: 6 }), Some(&123));
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn missing_pipe_is_an_error() {
        let error = solve(Input::new(b"Card 1: 41 48 83\n")).unwrap_err();
        let error = error.downcast_ref::<lib::InputError>().unwrap();
        assert_eq!(*error.kind(), lib::ErrorKind::ExpectedSplit('|'));
    }

    #[test]
    fn missing_colon_is_an_error() {
        let error = solve(Input::new(b"Card 1 41 48 | 83\n")).unwrap_err();
        let error = error.downcast_ref::<lib::InputError>().unwrap();
        assert_eq!(*error.kind(), lib::ErrorKind::ExpectedSplit(':'));
    }
}
