//! Short memory exercises the tutor can offer during a conversation.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Where and when the patient is.
    Orientation,
    /// Recent personal events.
    Recall,
    /// Objects that belong together.
    Association,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 3] = [
        ExerciseKind::Orientation,
        ExerciseKind::Recall,
        ExerciseKind::Association,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub kind: ExerciseKind,
    pub question: String,
    /// 1 (easiest) to 3.
    pub difficulty: u8,
}

const ORIENTATION: &[(&str, u8)] = &[
    ("Consegue dizer-me que dia da semana é hoje?", 1),
    ("Em que estação do ano estamos?", 1),
    ("Consegue dizer-me o mês e o ano em que estamos?", 2),
    ("Em que cidade estamos neste momento?", 3),
];

const RECALL: &[(&str, u8)] = &[
    ("O que comeu ao pequeno-almoço hoje?", 1),
    ("Consegue dizer três coisas que fez ontem?", 2),
    ("Como estava o tempo esta manhã?", 1),
    ("Quem foi a última pessoa que o visitou?", 3),
];

const ASSOCIATION: &[(&str, u8)] = &[
    ("Consegue dizer três objetos que se encontram numa cozinha?", 1),
    ("Que objetos associa a um dia de praia?", 2),
    ("Do que precisamos para fazer uma chávena de chá?", 2),
    ("Consegue dizer três animais que vivem numa quinta?", 3),
];

fn pool(kind: ExerciseKind) -> &'static [(&'static str, u8)] {
    match kind {
        ExerciseKind::Orientation => ORIENTATION,
        ExerciseKind::Recall => RECALL,
        ExerciseKind::Association => ASSOCIATION,
    }
}

/// An exercise of `kind`, or of a random kind when `None`, drawn with `rng`.
pub fn pick<R: Rng>(rng: &mut R, kind: Option<ExerciseKind>) -> Exercise {
    let kind = kind.unwrap_or_else(|| ExerciseKind::ALL[rng.gen_range(0..ExerciseKind::ALL.len())]);
    let pool = pool(kind);
    let (question, difficulty) = pool[rng.gen_range(0..pool.len())];
    Exercise {
        kind,
        question: question.to_string(),
        difficulty,
    }
}

/// Picks exercises at random from fixed pools. Randomness comes from the
/// injected generator, so a seeded one gives a reproducible sequence.
#[derive(Debug, Clone)]
pub struct ExerciseGenerator<R> {
    rng: R,
}

impl<R: Rng> ExerciseGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// An exercise of `kind`, or of a random kind when `None`.
    pub fn generate(&mut self, kind: Option<ExerciseKind>) -> Exercise {
        pick(&mut self.rng, kind)
    }

    /// An exercise of any kind no harder than `max_difficulty`. Difficulty 1
    /// exercises are always eligible.
    pub fn generate_at_most(&mut self, max_difficulty: u8) -> Exercise {
        let ceiling = max_difficulty.max(1);
        let candidates: Vec<(ExerciseKind, &str, u8)> = ExerciseKind::ALL
            .iter()
            .flat_map(|kind| pool(*kind).iter().map(move |(q, d)| (*kind, *q, *d)))
            .filter(|(_, _, d)| *d <= ceiling)
            .collect();
        let (kind, question, difficulty) = candidates[self.rng.gen_range(0..candidates.len())];
        Exercise {
            kind,
            question: question.to_string(),
            difficulty,
        }
    }
}
