// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Declares the day modules and generates the `solve` dispatch.
macro_rules! days {
	( $($day:tt),+ $(,)? ) => { paste::paste! {
		$( mod [<day $day>]; )+

		fn solve(day: u8, input: &str) -> Option<(String, String)> {
			match day {
				$( $day => Some((
					[<day $day>]::part1(input).to_string(),
					[<day $day>]::part2(input).to_string(),
				)), )+
				_ => None,
			}
		}
	} }
}

days!(02, 08, 14);


fn main() {
	let mut args = std::env::args().skip(1);
	let day = args.next()
		.and_then(|arg| arg.parse().ok())
		.expect("expected puzzle day number as first argument");
	let path = args.next()
		.expect("expected puzzle input path as second argument");
	let input = std::fs::read_to_string(&path)
		.unwrap_or_else(|e| panic!("could not read {path}: {e}"));
	let (part1, part2) = solve(day, &input)
		.unwrap_or_else(|| panic!("no solution for day {day}"));
	println!("Part 1: {part1}");
	println!("Part 2: {part2}");
}
