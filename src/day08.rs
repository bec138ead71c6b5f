// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! NOTE: The machine can never execute the same instruction pointer
//! twice without looping, so `Machine::run` takes at most `len + 1`
//! steps to either halt or detect the loop; no step limit is needed.


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug))]
enum Op { Acc, Jmp, Nop }

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug))]
struct Instr { op: Op, arg: i64 }

impl Instr {
	/// The single repair candidate at this instruction, if any: `jmp`
	/// and `nop` flip into each other, `acc` is never touched.
	fn flipped(&self) -> Option<Instr> {
		match self.op {
			Op::Acc => None,
			Op::Jmp => Some(Instr { op: Op::Nop, arg: self.arg }),
			Op::Nop => Some(Instr { op: Op::Jmp, arg: self.arg }),
		}
	}
}

#[derive(Clone)]
struct Program(Vec<Instr>);


#[cfg_attr(test, derive(Debug))]
enum Terminal { Halted, Looped }

#[cfg_attr(test, derive(Debug))]
struct Run { acc: i64, terminal: Terminal }

struct Machine<'a> {
	program: &'a Program,
	ptr: isize,
	acc: i64,
}

impl<'a> Machine<'a> {
	fn new(program: &'a Program) -> Self {
		Machine { program, ptr: 0, acc: 0 }
	}

	/// Runs until the pointer leaves `[0, len)` (`Halted`) or would
	/// revisit an already-executed instruction (`Looped`, stopping
	/// before executing it again).
	fn run(mut self) -> Run {
		let instrs = &self.program.0;
		let mut visited = vec![false; instrs.len()];
		loop {
			let Some(i) = usize::try_from(self.ptr).ok()
				.filter(|&i| i < instrs.len())
			else { return Run { acc: self.acc, terminal: Terminal::Halted } };
			if visited[i] { return Run { acc: self.acc, terminal: Terminal::Looped } }
			visited[i] = true;
			match instrs[i] {
				Instr { op: Op::Acc, arg } => { self.acc += arg; self.ptr += 1 }
				Instr { op: Op::Jmp, arg } => self.ptr += arg as isize,
				Instr { op: Op::Nop, .. } => self.ptr += 1,
			}
		}
	}
}


/// No `jmp`/`nop` flip makes the program halt.
#[derive(Debug)]
struct RepairExhausted;

impl Program {
	/// Flips one `jmp`/`nop` at a time, left to right, and returns the
	/// accumulator of the first flipped variant that halts. Each
	/// variant is an independent copy of the program.
	fn repair(&self) -> Result<i64, RepairExhausted> {
		let flippable = self.0.iter().enumerate()
			.filter_map(|(i, instr)| Some((i, instr.flipped()?)));
		for (i, flipped) in flippable {
			let mut candidate = self.clone();
			candidate.0[i] = flipped;
			let run = Machine::new(&candidate).run();
			if matches!(run.terminal, Terminal::Halted) { return Ok(run.acc) }
		}
		Err(RepairExhausted)
	}
}


fn input_program_from_str(s: &str) -> Program {
	s.parse().unwrap()
}

pub(crate) fn part1(input: &str) -> i64 {
	Machine::new(&input_program_from_str(input)).run().acc
}

pub(crate) fn part2(input: &str) -> i64 {
	input_program_from_str(input).repair().unwrap()
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Instr, Op, Program};

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) enum InstrError {
		Format,
		Op(String),
		Arg(ParseIntError),
	}

	impl FromStr for Instr {
		type Err = InstrError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (op, arg) = s.split_once(' ')
				.ok_or(InstrError::Format)?;
			let op = match op {
				"acc" => Op::Acc,
				"jmp" => Op::Jmp,
				"nop" => Op::Nop,
				found => return Err(InstrError::Op(found.to_owned())),
			};
			let arg = arg.parse()
				.map_err(InstrError::Arg)?;
			Ok(Instr { op, arg })
		}
	}

	#[derive(Debug)]
	#[allow(dead_code)]
	pub(super) struct ProgramError { line: usize, source: InstrError }

	impl FromStr for Program {
		type Err = ProgramError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			s.lines()
				.enumerate()
				.map(|(l, line)| line.parse()
					.map_err(|e| ProgramError { line: l + 1, source: e }))
				.collect::<Result<_, _>>()
				.map(Program)
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		nop +0
		acc +1
		jmp +4
		acc +3
		jmp -3
		acc -99
		acc +1
		jmp -4
		acc +6
	" };
	assert_eq!(part1(INPUT), 5);
	assert_eq!(part2(INPUT), 8);

	// Revisiting a pointer stops before executing it again.
	let looping = input_program_from_str("jmp +0");
	assert!(matches!(Machine::new(&looping).run(),
		Run { acc: 0, terminal: Terminal::Looped }));

	// A program without any `jmp`/`nop` halts but cannot be repaired.
	let halting = input_program_from_str("acc +1\nacc +1\nacc +1");
	assert!(matches!(Machine::new(&halting).run(),
		Run { acc: 3, terminal: Terminal::Halted }));
	assert!(halting.repair().is_err());

	// A pointer moving below zero has left the program.
	let backwards = input_program_from_str("jmp -2");
	assert!(matches!(Machine::new(&backwards).run(),
		Run { acc: 0, terminal: Terminal::Halted }));

	// Repeat runs of one program agree.
	let program = input_program_from_str(INPUT);
	let (first, second) = (Machine::new(&program).run(), Machine::new(&program).run());
	assert_eq!(first.acc, second.acc);
	assert!(matches!((first.terminal, second.terminal),
		(Terminal::Looped, Terminal::Looped)));

	assert!(Instr { op: Op::Acc, arg: 0 }.flipped().is_none());

	assert!("xyz +1".parse::<Instr>().is_err());
	assert!("acc one".parse::<Instr>().is_err());
	assert!("acc".parse::<Instr>().is_err());
}
