// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct PolicedPassword {
	low: usize,
	high: usize,
	letter: u8,
	password: String,
}

impl PolicedPassword {
	fn has_valid_count(&self) -> bool {
		let count = self.password.bytes().filter(|&b| b == self.letter).count();
		(self.low..=self.high).contains(&count)
	}

	fn letter_at(&self, pos: usize) -> Option<u8> {
		pos.checked_sub(1).and_then(|i| self.password.as_bytes().get(i)).copied()
	}

	/// Policy reinterpretation for part 2: `low` and `high` are 1-based
	/// positions, exactly one of which must hold the letter. Positions
	/// beyond the password never match.
	fn has_valid_positions(&self) -> bool {
		(self.letter_at(self.low) == Some(self.letter))
			!= (self.letter_at(self.high) == Some(self.letter))
	}
}


fn input_passwords_from_str(s: &str) -> Vec<PolicedPassword> {
	parsing::try_passwords_from_str(s).unwrap()
}

pub(crate) fn part1(input: &str) -> usize {
	input_passwords_from_str(input).iter()
		.filter(|p| p.has_valid_count())
		.count()
}

pub(crate) fn part2(input: &str) -> usize {
	input_passwords_from_str(input).iter()
		.filter(|p| p.has_valid_positions())
		.count()
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::PolicedPassword;

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum PolicedPasswordError {
		Format,
		Low(ParseIntError),
		High(ParseIntError),
		Letter(String),
	}

	impl FromStr for PolicedPassword {
		type Err = PolicedPasswordError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use PolicedPasswordError as Error;
			let (policy, password) = s.split_once(": ")
				.ok_or(Error::Format)?;
			let (range, letter) = policy.split_once(' ')
				.ok_or(Error::Format)?;
			let (low, high) = range.split_once('-')
				.ok_or(Error::Format)?;
			let low = low.parse()
				.map_err(Error::Low)?;
			let high = high.parse()
				.map_err(Error::High)?;
			let &[letter] = letter.as_bytes() else {
				return Err(Error::Letter(letter.to_owned()))
			};
			Ok(PolicedPassword { low, high, letter, password: password.to_owned() })
		}
	}

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) struct PasswordsError { line: usize, source: PolicedPasswordError }

	pub(super) fn try_passwords_from_str(s: &str)
	-> Result<Vec<PolicedPassword>, PasswordsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| PasswordsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1-3 a: abcde
		1-3 b: cdefg
		2-9 c: ccccccccc
	" };
	assert_eq!(part1(INPUT), 2);
	assert_eq!(part2(INPUT), 1);

	// A position beyond the password never matches.
	assert_eq!(part2("1-99 a: aaa"), 1);

	assert!("1-3 a abcde".parse::<PolicedPassword>().is_err());
	assert!("1-x a: abcde".parse::<PolicedPassword>().is_err());
}
