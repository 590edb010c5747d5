//! Interactive input for values that arrive out of band (verification codes, tokens).

use crate::error::{ProbeError, Result};
use crate::interrupt::Interrupt;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// Source of operator answers.
pub trait Prompt {
    /// Ask a question and return the trimmed answer.
    ///
    /// `None` means the operator left the answer empty or input has ended.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;

    /// Ask for a value that must not be empty.
    fn require(&mut self, question: &str, what: &'static str) -> Result<String> {
        self.ask(question)?.ok_or(ProbeError::InputRequired(what))
    }
}

/// How often a waiting prompt looks at the interrupt flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Reads answers from a line-based reader, writing questions to a writer.
///
/// Lines are read on a background thread so a pending question can be
/// abandoned when the operator hits Ctrl-C. `StdinPrompt::stdin()` is the
/// interactive console version.
pub struct StdinPrompt<W> {
    lines: Receiver<io::Result<String>>,
    output: W,
    interrupt: Interrupt,
}

impl StdinPrompt<io::Stdout> {
    /// Prompt on the process console.
    pub fn stdin() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<W: Write> StdinPrompt<W> {
    pub fn new<R: BufRead + Send + 'static>(input: R, output: W) -> Self {
        let (tx, lines) = mpsc::channel();
        thread::spawn(move || read_lines(input, tx));
        Self {
            lines,
            output,
            interrupt: Interrupt::new(),
        }
    }

    /// Give up on pending questions once `interrupt` is triggered.
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }
}

impl<W: Write> Prompt for StdinPrompt<W> {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        loop {
            if self.interrupt.is_triggered() {
                return Err(ProbeError::Interrupted);
            }
            match self.lines.recv_timeout(POLL_INTERVAL) {
                Ok(Ok(line)) => return Ok(non_empty(&line)),
                Ok(Err(e)) => return Err(e.into()),
                Err(RecvTimeoutError::Timeout) => continue,
                // Reader hit end of input
                Err(RecvTimeoutError::Disconnected) => return Ok(None),
            }
        }
    }
}

fn read_lines<R: BufRead>(mut input: R, lines: Sender<io::Result<String>>) {
    loop {
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => return,
            Ok(_) => {
                if lines.send(Ok(line)).is_err() {
                    return;
                }
            }
            Err(e) => {
                let _ = lines.send(Err(e));
                return;
            }
        }
    }
}

/// Answers from a fixed queue; empty once the queue runs dry.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<String>>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer.
    pub fn answer(mut self, text: &str) -> Self {
        self.answers.push_back(non_empty(text));
        self
    }

    /// Queue an empty answer (operator pressed Enter).
    pub fn skip(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().flatten())
    }
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        (**self).ask(question)
    }
}

impl<P: Prompt + ?Sized> Prompt for Box<P> {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        (**self).ask(question)
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
