use std::collections::HashMap;

use lib::prelude::*;

fn main() -> Result<()> {
    let (input, path) = lib::input!("d03.txt");

    lib::cli::run(
        path,
        input,
        ["part number sum", "gear ratio sum"],
        Some((4361, 467835)),
        solve,
    )
}

/// A part number together with its bounding box: the digit run expanded by
/// one cell in every direction. Coordinates are signed because the expansion
/// of a run on the first row or column reaches -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PartNumber {
    value: u64,
    top: i32,
    left: i32,
    bottom: i32,
    right: i32,
}

impl PartNumber {
    fn contains(&self, y: i32, x: i32) -> bool {
        (self.top..=self.bottom).contains(&y) && (self.left..=self.right).contains(&x)
    }
}

fn solve(input: Input) -> Result<(u64, u64)> {
    let grid = Grid::new(input.as_data());
    let parts = scan_part_numbers(&grid);
    let by_row = index_by_row(&parts);

    let mut part_sum = 0;
    let mut gear_sum = 0;

    for (y, row) in grid.rows() {
        for (x, &cell) in row.iter().enumerate() {
            if cell == b'.' || cell.is_ascii_digit() {
                continue;
            }

            let mut adjacent = ArrayVec::<u64, 8>::new();

            for part in boxes_touching(&parts, &by_row, y as i32) {
                if part.contains(y as i32, x as i32) {
                    part_sum += part.value;

                    if adjacent.try_push(part.value).is_err() {
                        bail!(
                            "more than {} numbers adjacent to {y}:{x}",
                            adjacent.capacity()
                        );
                    }
                }
            }

            if cell == b'*' {
                if let [a, b] = adjacent[..] {
                    gear_sum += a * b;
                }
            }
        }
    }

    Ok((part_sum, gear_sum))
}

/// Scan digit runs row-major and close each one into a part-number box.
///
/// A run is closed by the first non-digit cell and at the end of its row;
/// runs never continue across rows.
fn scan_part_numbers(grid: &Grid<'_>) -> Vec<PartNumber> {
    let mut parts = Vec::new();

    for (y, row) in grid.rows() {
        let mut run = None;

        for (x, &cell) in row.iter().enumerate() {
            if cell.is_ascii_digit() {
                let (_, value) = run.get_or_insert((x, 0u64));
                *value = *value * 10 + u64::from(cell - b'0');
            } else if let Some((start, value)) = run.take() {
                parts.push(close(y, start, x, value));
            }
        }

        if let Some((start, value)) = run.take() {
            parts.push(close(y, start, row.len(), value));
        }
    }

    parts
}

/// Close the run whose digits span columns `start..end` on row `y`.
fn close(y: usize, start: usize, end: usize, value: u64) -> PartNumber {
    PartNumber {
        value,
        top: y as i32 - 1,
        left: start as i32 - 1,
        bottom: y as i32 + 1,
        right: end as i32,
    }
}

/// Index the boxes by the rows they touch, so the adjacency pass only tests
/// boxes that can possibly contain the symbol.
fn index_by_row(parts: &[PartNumber]) -> HashMap<i32, Vec<usize>> {
    let mut by_row = HashMap::<i32, Vec<usize>>::new();

    for (n, part) in parts.iter().enumerate() {
        for y in part.top..=part.bottom {
            by_row.entry(y).or_default().push(n);
        }
    }

    by_row
}

fn boxes_touching<'a>(
    parts: &'a [PartNumber],
    by_row: &'a HashMap<i32, Vec<usize>>,
    y: i32,
) -> impl Iterator<Item = &'a PartNumber> + 'a {
    by_row.get(&y).into_iter().flatten().map(move |&n| &parts[n])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &[u8] = b"\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn example() {
        assert_eq!(solve(Input::new(EXAMPLE)).unwrap(), (4361, 467835));
    }

    #[test]
    fn box_closure_coordinates() {
        let grid = Grid::new(b"...123...");
        let parts = scan_part_numbers(&grid);

        assert_eq!(
            parts,
            [PartNumber {
                value: 123,
                top: -1,
                left: 2,
                bottom: 1,
                right: 6,
            }]
        );
    }

    #[test]
    fn run_reaching_end_of_row_is_closed() {
        let grid = Grid::new(b"..12\n34..");
        let parts = scan_part_numbers(&grid);

        assert_eq!(
            parts,
            [
                PartNumber {
                    value: 12,
                    top: -1,
                    left: 1,
                    bottom: 1,
                    right: 4,
                },
                PartNumber {
                    value: 34,
                    top: 0,
                    left: -1,
                    bottom: 2,
                    right: 2,
                },
            ]
        );

        // The box still works for adjacency from the row below.
        assert_eq!(solve(Input::new(b"12\n.*")).unwrap(), (12, 0));
    }

    #[test]
    fn adjacency_boundaries() {
        let part = PartNumber {
            value: 1,
            top: 0,
            left: 0,
            bottom: 2,
            right: 4,
        };

        for (y, x) in [(0, 0), (0, 4), (2, 0), (2, 4), (1, 2)] {
            assert!(part.contains(y, x), "{y}:{x}");
        }

        for (y, x) in [(-1, 2), (3, 2), (1, -1), (1, 5)] {
            assert!(!part.contains(y, x), "{y}:{x}");
        }
    }

    #[test]
    fn box_adjacent_to_two_symbols_counts_twice() {
        assert_eq!(solve(Input::new(b"#12#")).unwrap(), (24, 0));
    }

    #[test]
    fn gear_needs_exactly_two() {
        assert_eq!(solve(Input::new(b"3.4\n.*.")).unwrap(), (7, 12));
        assert_eq!(solve(Input::new(b"3..\n.*.")).unwrap(), (3, 0));
        assert_eq!(solve(Input::new(b"3.4\n.*.\n5..")).unwrap(), (12, 0));
    }

    #[test]
    fn no_symbols_yields_zero() {
        assert_eq!(solve(Input::new(b"123..456\n........")).unwrap(), (0, 0));
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        assert_eq!(solve(Input::new(b"617*\n.....+.58\n")).unwrap(), (617, 0));
    }
}
