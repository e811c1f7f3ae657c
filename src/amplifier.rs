use std::iter::empty;

use icub3d_combinatorics::Permutation;
use rayon::prelude::*;

use crate::error::Error;
use crate::process::{Exec, Process};

/// How the amplifiers are wired together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wiring {
    /// A single pass from the first amplifier to the last.
    Serial,
    /// The last amplifier's output loops back into the first.
    Feedback,
}

/// Run the amplifiers once each, in order. Every amplifier gets a fresh copy
/// of the program, consumes its phase and the previous amplifier's signal,
/// and must produce exactly one output. The signal into the first amplifier
/// is 0; the last one's output is the thruster signal.
pub fn run_serial(program: &[i64], phases: &[i64]) -> Result<i64, Error> {
    let mut signal = 0;
    for (amplifier, &phase) in phases.iter().enumerate() {
        let mut process = Process::new(program);
        signal = match process.run([phase, signal])? {
            Exec::Output(value) => value,
            Exec::Halted => return Err(Error::HaltedWithoutOutput { amplifier }),
        };
    }
    Ok(signal)
}

/// Run the amplifiers as a feedback loop. The priming pass works like the
/// serial chain but keeps every process suspended at its first output; after
/// that the amplifiers are resumed round-robin, each consuming the latest
/// signal and producing the next, until the first amplifier halts at the top
/// of a cycle. The signal at that point is the thruster signal, provided the
/// rest of the chain winds down in the same cycle.
pub fn run_feedback(program: &[i64], phases: &[i64]) -> Result<i64, Error> {
    let mut signal = 0;

    // The priming pass. Each amplifier takes its phase and the signal so
    // far, and suspends at its first output.
    let mut processes = Vec::with_capacity(phases.len());
    for (amplifier, &phase) in phases.iter().enumerate() {
        let mut process = Process::new(program);
        signal = match process.run([phase, signal])? {
            Exec::Output(value) => value,
            Exec::Halted => return Err(Error::HaltedWithoutOutput { amplifier }),
        };
        processes.push(process);
    }
    if processes.is_empty() {
        return Ok(signal);
    }

    // Cycle until the first amplifier halts at the top of a round. A halt
    // anywhere else means the amplifiers fell out of step, and no signal
    // from this run can be trusted.
    'cycle: loop {
        for (amplifier, process) in processes.iter_mut().enumerate() {
            signal = match process.run([signal])? {
                Exec::Output(value) => value,
                Exec::Halted if amplifier == 0 => break 'cycle,
                Exec::Halted => return Err(Error::DivergentHalt { amplifier }),
            };
        }
    }

    // The rest of the chain must now halt without asking for another input
    // or pushing another output.
    for (amplifier, process) in processes.iter_mut().enumerate().skip(1) {
        match process.run(empty()) {
            Ok(Exec::Halted) => {}
            Ok(Exec::Output(_)) | Err(Error::InputExhausted { .. }) => {
                return Err(Error::DivergentHalt { amplifier })
            }
            Err(error) => return Err(error),
        }
    }

    Ok(signal)
}

/// Find the best thruster signal over every ordering of the phase pool. Each
/// ordering runs on entirely fresh processes, so they are independent and we
/// can farm them out to rayon.
pub fn max_signal(program: &[i64], pool: &[i64; 5], wiring: Wiring) -> Result<i64, Error> {
    let permutations = Permutation::new(pool.len()).into_iter().collect::<Vec<_>>();
    permutations
        .into_par_iter()
        .map(|permutation| {
            let phases = permutation.iter().map(|&p| pool[p]).collect::<Vec<_>>();
            match wiring {
                Wiring::Serial => run_serial(program, &phases),
                Wiring::Feedback => run_feedback(program, &phases),
            }
        })
        .try_reduce(|| 0, |left, right| Ok(left.max(right)))
}
