use lib::prelude::*;

fn main() -> Result<()> {
    let (input, path) = lib::input!("d01.txt");

    lib::cli::run(
        path,
        input,
        ["calibration sum", "calibration sum with words"],
        Some((142, 142)),
        solve,
    )
}

/// Spelled digits for part 2. Overlapping occurrences all count, so every
/// position is scanned instead of rewriting the line.
const DIGIT_WORDS: [(&str, u64); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

fn solve(mut input: Input) -> Result<(u64, u64)> {
    let mut o1 = 0;
    let mut o2 = 0;

    while let Some(line) = input.try_line::<&str>()? {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let (Some((f1, l1)), Some((f2, l2))) = digits(line) else {
            bail!("no calibration digits in line {line:?}");
        };

        o1 += f1 * 10 + l1;
        o2 += f2 * 10 + l2;
    }

    Ok((o1, o2))
}

/// First and last digit of a line, once over ascii digits only and once also
/// counting spelled digit words.
fn digits(line: &str) -> (Option<(u64, u64)>, Option<(u64, u64)>) {
    let mut plain = None;
    let mut spelled = None;

    for (i, c) in line.char_indices() {
        let d = c.to_digit(10).map(u64::from);

        let w = d.or_else(|| {
            DIGIT_WORDS
                .iter()
                .find(|&&(word, _)| line[i..].starts_with(word))
                .map(|&(_, value)| value)
        });

        if let Some(d) = d {
            let first = plain.map_or(d, |(first, _)| first);
            plain = Some((first, d));
        }

        if let Some(w) = w {
            let first = spelled.map_or(w, |(first, _)| first);
            spelled = Some((first, w));
        }
    }

    (plain, spelled)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &[u8] = b"1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n";

    #[test]
    fn example() {
        assert_eq!(solve(Input::new(EXAMPLE)).unwrap(), (142, 142));
    }

    #[test]
    fn overlapping_digit_words_all_count() {
        assert_eq!(digits("twone"), (None, Some((2, 1))));
        assert_eq!(digits("oneight"), (None, Some((1, 8))));
        assert_eq!(digits("eightwo"), (None, Some((8, 2))));
        assert_eq!(digits("xtwone3four"), (Some((3, 3)), Some((2, 4))));
    }

    #[test]
    fn line_without_digits_is_an_error() {
        assert!(solve(Input::new(b"xyz\n")).is_err());
    }
}
