use lib::prelude::*;

/// Cube counts the bag is configured with in part 1.
const MAX_RED: u64 = 12;
const MAX_GREEN: u64 = 13;
const MAX_BLUE: u64 = 14;

fn main() -> Result<()> {
    let (input, path) = lib::input!("d02.txt");

    lib::cli::run(
        path,
        input,
        ["game id sum", "power sum"],
        Some((8, 2286)),
        solve,
    )
}

fn solve(mut input: Input) -> Result<(u64, u64)> {
    let mut id_sum = 0;
    let mut power_sum = 0;

    while let Some(Nl(Split([mut header, mut draws]))) =
        input.try_next::<Nl<Split<':', [Input; 2]>>>()?
    {
        let (_, id) = header.next::<(W<&str>, u64)>()?;

        // A colour that never appears still contributes a factor of one to
        // the power.
        let (mut red, mut green, mut blue) = (1u64, 1, 1);

        while let Some((n, W(color))) = draws.try_next::<(u64, W<&str>)>()? {
            match color.trim_end_matches([',', ';']) {
                "red" => red = red.max(n),
                "green" => green = green.max(n),
                "blue" => blue = blue.max(n),
                other => bail!("unexpected cube colour `{other}` in game {id}"),
            }
        }

        if red <= MAX_RED && green <= MAX_GREEN && blue <= MAX_BLUE {
            id_sum += id;
        }

        power_sum += red * green * blue;
    }

    Ok((id_sum, power_sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &[u8] = b"\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn example() {
        assert_eq!(solve(Input::new(EXAMPLE)).unwrap(), (8, 2286));
    }

    #[test]
    fn unknown_colour_is_an_error() {
        assert!(solve(Input::new(b"Game 1: 3 yellow\n")).is_err());
    }

    #[test]
    fn missing_separator_is_an_error() {
        assert!(solve(Input::new(b"Game 1 3 blue\n")).is_err());
    }
}
