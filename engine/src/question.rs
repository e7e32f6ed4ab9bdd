//! Static IQ question bank.
//!
//! DESIGN
//! ======
//! The bank is a fixed `'static` table. Sessions and results refer to
//! questions by id or by `&'static` reference, never by copying them.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "question_test.rs"]
mod question_test;

/// Reasoning category a question exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pattern,
    Logic,
    Spatial,
    Numerical,
    Verbal,
}

impl Category {
    pub const ALL: [Self; 5] = [Self::Pattern, Self::Logic, Self::Spatial, Self::Numerical, Self::Verbal];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pattern => "Pattern Recognition",
            Self::Logic => "Logical Reasoning",
            Self::Spatial => "Spatial Intelligence",
            Self::Numerical => "Numerical Reasoning",
            Self::Verbal => "Verbal Reasoning",
        }
    }
}

/// Difficulty tier used for adaptive selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Seconds allowed to answer a question of this difficulty.
    #[must_use]
    pub fn time_limit_secs(self) -> u32 {
        match self {
            Self::Easy => 45,
            Self::Medium => 60,
            Self::Hard => 90,
        }
    }
}

/// A single multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IqQuestion {
    pub id: &'static str,
    pub category: Category,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub difficulty: Difficulty,
    pub explanation: &'static str,
    pub points: u32,
}

impl IqQuestion {
    /// Whether `choice` is the correct option.
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }
}

/// Look up a question in the bank by id.
#[must_use]
pub fn find_question(id: &str) -> Option<&'static IqQuestion> {
    QUESTION_BANK.iter().find(|q| q.id == id)
}

pub static QUESTION_BANK: &[IqQuestion] = &[
    IqQuestion {
        id: "pattern_001",
        category: Category::Pattern,
        prompt: "What comes next in the sequence: 2, 6, 18, 54, ?",
        options: &["108", "162", "216", "270"],
        correct: 1,
        difficulty: Difficulty::Easy,
        explanation: "Each number is multiplied by 3: 2×3=6, 6×3=18, 18×3=54, 54×3=162",
        points: 10,
    },
    IqQuestion {
        id: "pattern_002",
        category: Category::Pattern,
        prompt: "Complete the pattern: A1, C3, E5, G7, ?",
        options: &["H8", "I9", "J10", "K11"],
        correct: 1,
        difficulty: Difficulty::Medium,
        explanation: "Letters skip one (A,C,E,G,I) and numbers increase by 2 (1,3,5,7,9)",
        points: 15,
    },
    IqQuestion {
        id: "pattern_003",
        category: Category::Pattern,
        prompt: "What number should replace the question mark: 1, 1, 2, 3, 5, 8, 13, ?",
        options: &["18", "21", "25", "34"],
        correct: 1,
        difficulty: Difficulty::Medium,
        explanation: "Fibonacci sequence: each number is the sum of the two preceding ones (8+13=21)",
        points: 15,
    },
    IqQuestion {
        id: "logic_001",
        category: Category::Logic,
        prompt: "If all roses are flowers and some flowers are red, which statement must be true?",
        options: &["All roses are red", "Some roses might be red", "No roses are red", "All red things are roses"],
        correct: 1,
        difficulty: Difficulty::Medium,
        explanation: "Roses are flowers and some flowers are red, so it is possible (but not certain) that some roses are red",
        points: 15,
    },
    IqQuestion {
        id: "logic_002",
        category: Category::Logic,
        prompt: "In a certain code, MONDAY is written as DFNQZB. How is SUNDAY written?",
        options: &["TFNOQZ", "TFOQZB", "TFNQZB", "VONQZB"],
        correct: 2,
        difficulty: Difficulty::Hard,
        explanation: "The day suffix DAY always maps to QZB; the first three letters are substituted letter by letter",
        points: 20,
    },
    IqQuestion {
        id: "logic_003",
        category: Category::Logic,
        prompt: "Five friends have different heights. Anna is taller than Bob but shorter than Carol. \
                 David is shorter than Bob but taller than Emma. Who is the shortest?",
        options: &["Anna", "Bob", "Carol", "Emma"],
        correct: 3,
        difficulty: Difficulty::Medium,
        explanation: "Order from tallest to shortest: Carol > Anna > Bob > David > Emma. Emma is the shortest.",
        points: 15,
    },
    IqQuestion {
        id: "spatial_001",
        category: Category::Spatial,
        prompt: "How many cubes are there in total in this 3D structure? \
                 (Imagine a 3×3×3 cube with the center cube removed)",
        options: &["24", "25", "26", "27"],
        correct: 2,
        difficulty: Difficulty::Medium,
        explanation: "A 3×3×3 cube has 27 cubes. Removing the center cube leaves 26 cubes.",
        points: 15,
    },
    IqQuestion {
        id: "spatial_002",
        category: Category::Spatial,
        prompt: "Which shape would be formed if you fold this net into a 3D object? (Imagine a cross-shaped net)",
        options: &["Cube", "Pyramid", "Cone", "Cylinder"],
        correct: 0,
        difficulty: Difficulty::Easy,
        explanation: "A cross-shaped net with 6 squares folds into a cube",
        points: 10,
    },
    IqQuestion {
        id: "spatial_003",
        category: Category::Spatial,
        prompt: "If you rotate a square 45 degrees clockwise around its center, what shape do you see?",
        options: &["Diamond", "Circle", "Triangle", "Hexagon"],
        correct: 0,
        difficulty: Difficulty::Easy,
        explanation: "A square rotated 45 degrees appears as a diamond (rhombus)",
        points: 10,
    },
    IqQuestion {
        id: "numerical_001",
        category: Category::Numerical,
        prompt: "What is 15% of 240?",
        options: &["32", "36", "38", "42"],
        correct: 1,
        difficulty: Difficulty::Easy,
        explanation: "15% of 240 = 0.15 × 240 = 36",
        points: 10,
    },
    IqQuestion {
        id: "numerical_002",
        category: Category::Numerical,
        prompt: "If a train travels 120 km in 2 hours, what is its average speed in km/h?",
        options: &["50", "55", "60", "65"],
        correct: 2,
        difficulty: Difficulty::Easy,
        explanation: "Speed = Distance ÷ Time = 120 ÷ 2 = 60 km/h",
        points: 10,
    },
    IqQuestion {
        id: "numerical_003",
        category: Category::Numerical,
        prompt: "If you invest $1000 at 5% compound interest annually, what will it be worth after 2 years?",
        options: &["$1050", "$1100", "$1102.50", "$1125"],
        correct: 2,
        difficulty: Difficulty::Medium,
        explanation: "Year 1: $1000 × 1.05 = $1050. Year 2: $1050 × 1.05 = $1102.50",
        points: 15,
    },
    IqQuestion {
        id: "verbal_001",
        category: Category::Verbal,
        prompt: "Which word does not belong with the others?",
        options: &["Apple", "Orange", "Banana", "Carrot"],
        correct: 3,
        difficulty: Difficulty::Easy,
        explanation: "Carrot is a vegetable, while the others are fruits",
        points: 10,
    },
    IqQuestion {
        id: "verbal_002",
        category: Category::Verbal,
        prompt: "BOOK is to READ as MUSIC is to:",
        options: &["Hear", "Listen", "Sound", "Note"],
        correct: 1,
        difficulty: Difficulty::Medium,
        explanation: "You read a book and listen to music. Both are active forms of consumption.",
        points: 15,
    },
    IqQuestion {
        id: "verbal_003",
        category: Category::Verbal,
        prompt: "What word can be made from the letters in SENATOR that is also a type of building?",
        options: &["STORE", "STONE", "ARENA", "TOWER"],
        correct: 0,
        difficulty: Difficulty::Hard,
        explanation: "STORE can be made from the letters in SENATOR (S-T-O-R-E) and is a type of building",
        points: 20,
    },
    IqQuestion {
        id: "pattern_004",
        category: Category::Pattern,
        prompt: "In the sequence 1, 4, 9, 16, 25, what is the next number?",
        options: &["30", "35", "36", "49"],
        correct: 2,
        difficulty: Difficulty::Medium,
        explanation: "These are perfect squares: 1², 2², 3², 4², 5², so next is 6² = 36",
        points: 15,
    },
    IqQuestion {
        id: "pattern_005",
        category: Category::Pattern,
        prompt: "What comes next: 3, 6, 12, 24, ?",
        options: &["36", "42", "48", "54"],
        correct: 2,
        difficulty: Difficulty::Easy,
        explanation: "Each number is doubled: 3×2=6, 6×2=12, 12×2=24, 24×2=48",
        points: 10,
    },
    IqQuestion {
        id: "logic_004",
        category: Category::Logic,
        prompt: "If it takes 5 machines 5 minutes to make 5 widgets, how long would it take 100 machines to make 100 widgets?",
        options: &["1 minute", "5 minutes", "20 minutes", "100 minutes"],
        correct: 1,
        difficulty: Difficulty::Hard,
        explanation: "Each machine makes 1 widget in 5 minutes, so 100 machines make 100 widgets in 5 minutes",
        points: 20,
    },
    IqQuestion {
        id: "logic_005",
        category: Category::Logic,
        prompt: "All cats are mammals. All mammals are animals. Therefore:",
        options: &["All animals are cats", "All cats are animals", "Some animals are not mammals", "No cats are animals"],
        correct: 1,
        difficulty: Difficulty::Medium,
        explanation: "Following the logical chain: cats → mammals → animals, therefore all cats are animals",
        points: 15,
    },
    IqQuestion {
        id: "spatial_004",
        category: Category::Spatial,
        prompt: "How many faces does a cube have?",
        options: &["4", "6", "8", "12"],
        correct: 1,
        difficulty: Difficulty::Easy,
        explanation: "A cube has 6 faces (top, bottom, front, back, left, right)",
        points: 10,
    },
    IqQuestion {
        id: "spatial_005",
        category: Category::Spatial,
        prompt: "If you look at a pyramid from directly above, what shape would you see?",
        options: &["Circle", "Triangle", "Square", "Pentagon"],
        correct: 2,
        difficulty: Difficulty::Medium,
        explanation: "Looking down at a pyramid from above, you see the base, which is typically square",
        points: 15,
    },
];
