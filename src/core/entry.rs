use crate::core::greeting::emit_greeting;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    EmitGreeting,
    Terminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub bytes_written: usize,
    pub exit_code: u8,
}

/// Start → EmitGreeting → Terminate. The exit code is always 0, even when
/// the output stream rejects the write.
pub struct EntryPoint<W: Write> {
    out: W,
    phase: Phase,
}

impl<W: Write> EntryPoint<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            phase: Phase::Start,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Only the first call writes; later calls return an empty success.
    pub fn run(&mut self) -> Outcome {
        if self.phase != Phase::Start {
            return Outcome {
                bytes_written: 0,
                exit_code: 0,
            };
        }
        self.advance(Phase::EmitGreeting);

        let bytes_written = match emit_greeting(&mut self.out) {
            Ok(n) => n,
            Err(e) => {
                tracing::debug!("greeting not delivered: {} ({:?})", e, e.category());
                0
            }
        };

        self.advance(Phase::Terminate);

        Outcome {
            bytes_written,
            exit_code: 0,
        }
    }

    fn advance(&mut self, next: Phase) {
        tracing::trace!("phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}
