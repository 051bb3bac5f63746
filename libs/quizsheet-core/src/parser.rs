//! Question/answer recovery state machine.
//!
//! A single forward pass over the filtered lines, no backtracking. A
//! numbered line settles the boundary directly: repeating the open
//! record's number marks its answer, a different number starts a new
//! question. Unnumbered lines are attributed by phase; the sheets
//! alternate question and answer strictly, so once a number is confirmed
//! missing the machine keeps the alternation going rather than treating
//! plain lines as answer continuation.

use crate::normalize::{normalize, normalize_with, NoiseFilter};
use crate::scan::{classify, LineKind};
use crate::types::QuestionRecord;

/// Where the machine is inside the question/answer alternation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing attributable seen yet.
    Idle,
    /// Building the prompt of a numbered question.
    ExplicitQuestion,
    /// Building the answer of a numbered question.
    ExplicitAnswer,
    /// Building the prompt of a question whose number was lost.
    ImplicitQuestion,
    /// Building the answer under a recovered question.
    ImplicitAnswer,
}

/// Fold state threaded through the pass: current phase, the record being
/// built, and the records already emitted. At most one record is open,
/// and the accumulator is its only mutator; emitted records are final.
#[derive(Debug)]
struct Accumulator {
    phase: Phase,
    open: Option<QuestionRecord>,
    emitted: Vec<QuestionRecord>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            phase: Phase::Idle,
            open: None,
            emitted: Vec::new(),
        }
    }

    fn step(self, line: &str) -> Self {
        match classify(line) {
            // A number with nothing after it carries no usable information.
            LineKind::Numbered { content, .. } if content.is_empty() => self,
            LineKind::Numbered { id, content } => self.on_numbered(id, content),
            LineKind::Plain { text } => self.on_plain(text),
        }
    }

    fn on_numbered(mut self, id: i64, content: String) -> Self {
        match self.open {
            // The open question's own number again: this is its answer.
            Some(ref mut cur) if cur.id == id => {
                if self.phase == Phase::ExplicitAnswer {
                    cur.answer.push(' ');
                    cur.answer.push_str(&content);
                } else {
                    cur.answer = content;
                }
                self.phase = Phase::ExplicitAnswer;
                self
            }
            _ => {
                self.flush();
                self.open = Some(open_record(id, content));
                self.phase = Phase::ExplicitQuestion;
                self
            }
        }
    }

    fn on_plain(mut self, text: String) -> Self {
        match self.phase {
            // Nothing to attach a stray line to.
            Phase::Idle => self,
            Phase::ExplicitQuestion => {
                if let Some(ref mut cur) = self.open {
                    cur.question.push(' ');
                    cur.question.push_str(&text);
                }
                self
            }
            Phase::ExplicitAnswer | Phase::ImplicitAnswer => self.start_implicit(text),
            Phase::ImplicitQuestion => {
                if let Some(ref mut cur) = self.open {
                    cur.answer = text;
                }
                self.phase = Phase::ImplicitAnswer;
                self
            }
        }
    }

    /// Lost-number recovery policy: a plain line arriving while an answer
    /// is open becomes the next question, numbered from the previous
    /// record. Alternative strategies (e.g. lookahead disambiguation)
    /// replace this one function.
    fn start_implicit(mut self, question: String) -> Self {
        let next_id = self.open.as_ref().map_or(1, |cur| cur.id + 1);
        self.flush();
        self.open = Some(open_record(next_id, question));
        self.phase = Phase::ImplicitQuestion;
        self
    }

    /// Emit the open record unless its question text is empty.
    fn flush(&mut self) {
        if let Some(cur) = self.open.take() {
            if !cur.question.is_empty() {
                self.emitted.push(cur);
            }
        }
    }

    fn finish(mut self) -> Vec<QuestionRecord> {
        self.flush();
        self.emitted
    }
}

fn open_record(id: i64, question: String) -> QuestionRecord {
    QuestionRecord {
        id,
        question,
        answer: String::new(),
        options: Vec::new(),
    }
}

/// Parse a raw OCR dump into question records.
pub fn parse(raw: &str) -> Vec<QuestionRecord> {
    parse_lines(normalize(raw))
}

/// Parse a raw OCR dump with a caller-supplied noise filter.
pub fn parse_with(raw: &str, filter: &NoiseFilter) -> Vec<QuestionRecord> {
    parse_lines(normalize_with(raw, filter))
}

/// Run the state machine over already-normalized content lines.
pub fn parse_lines<I>(lines: I) -> Vec<QuestionRecord>
where
    I: IntoIterator<Item = String>,
{
    lines
        .into_iter()
        .fold(Accumulator::new(), |acc, line| acc.step(&line))
        .finish()
}
