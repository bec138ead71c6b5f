// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


const MASK_BITS: usize = 36;

/// One `mask = …` line, decomposed by bit kind: `ones` holds the `1`
/// bits, `zeros` the `0` bits, `floating` the `X` bits.
#[derive(Default, Clone, Copy)]
struct Mask {
	ones: u64,
	zeros: u64,
	floating: u64,
}

impl Mask {
	/// Part 1: `1`/`0` bits override the value, `X` bits pass it through.
	fn apply_to_value(&self, value: u64) -> u64 {
		(value | self.ones) & !self.zeros
	}

	/// Part 2: `1` bits override the address, `0` bits pass it through,
	/// and each `X` bit floats to both 0 and 1.
	fn floating_addresses(&self, address: u64) -> impl Iterator<Item = u64> + '_ {
		use itertools::Itertools as _;
		let base = (address | self.ones) & !self.floating;
		(0..MASK_BITS as u64)
			.filter(|b| self.floating >> b & 1 == 1)
			.powerset()
			.map(move |bits| bits.into_iter().fold(base, |address, b| address | 1 << b))
	}
}

enum Instr {
	Mask(Mask),
	Write { address: u64, value: u64 },
}


fn input_instrs_from_str(s: &str) -> Vec<Instr> {
	parsing::try_instrs_from_str(s).unwrap()
}

pub(crate) fn part1(input: &str) -> u64 {
	let mut mask = Mask::default();
	let mut memory = HashMap::new();
	for instr in input_instrs_from_str(input) {
		match instr {
			Instr::Mask(m) => mask = m,
			Instr::Write { address, value } => {
				memory.insert(address, mask.apply_to_value(value));
			}
		}
	}
	memory.into_values().sum()
}

pub(crate) fn part2(input: &str) -> u64 {
	let mut mask = Mask::default();
	let mut memory = HashMap::new();
	for instr in input_instrs_from_str(input) {
		match instr {
			Instr::Mask(m) => mask = m,
			Instr::Write { address, value } =>
				for address in mask.floating_addresses(address) {
					memory.insert(address, value);
				},
		}
	}
	memory.into_values().sum()
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Instr, Mask, MASK_BITS};

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum InstrError {
		Format,
		MaskLen(usize),
		MaskBit { column: usize, found: char },
		Address(ParseIntError),
		Value(ParseIntError),
	}

	impl FromStr for Instr {
		type Err = InstrError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if let Some(bits) = s.strip_prefix("mask = ") {
				if bits.len() != MASK_BITS {
					return Err(InstrError::MaskLen(bits.len()))
				}
				let mut mask = Mask::default();
				for (i, b) in bits.bytes().enumerate() {
					let bit = 1 << (MASK_BITS - 1 - i);
					match b {
						b'1' => mask.ones |= bit,
						b'0' => mask.zeros |= bit,
						b'X' => mask.floating |= bit,
						_ => return Err(InstrError::MaskBit {
							column: i + 1,
							found: bits.chars().nth(i).unwrap(),
						}),
					}
				}
				Ok(Instr::Mask(mask))
			} else {
				let (address, value) = s.strip_prefix("mem[")
					.and_then(|s| s.split_once("] = "))
					.ok_or(InstrError::Format)?;
				let address = address.parse()
					.map_err(InstrError::Address)?;
				let value = value.parse()
					.map_err(InstrError::Value)?;
				Ok(Instr::Write { address, value })
			}
		}
	}

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) struct InstrsError { line: usize, source: InstrError }

	pub(super) fn try_instrs_from_str(s: &str) -> Result<Vec<Instr>, InstrsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| InstrsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X
		mem[8] = 11
		mem[7] = 101
		mem[8] = 0
	" };
	assert_eq!(part1(INPUT), 165);

	const FLOATING_INPUT: &str = indoc::indoc! { "
		mask = 000000000000000000000000000000X1001X
		mem[42] = 100
		mask = 00000000000000000000000000000000X0XX
		mem[26] = 1
	" };
	assert_eq!(part2(FLOATING_INPUT), 208);

	// Two floating bits fan one write out to four addresses.
	let mask = match "mask = 0000000000000000000000000000000000XX".parse::<Instr>() {
		Ok(Instr::Mask(mask)) => mask,
		_ => panic!("expected a mask instruction"),
	};
	let mut addresses = mask.floating_addresses(4).collect::<Vec<_>>();
	addresses.sort_unstable();
	assert_eq!(addresses, [4, 5, 6, 7]);

	assert!("mask = 01X".parse::<Instr>().is_err());
	assert!("mem[8] := 11".parse::<Instr>().is_err());
}
