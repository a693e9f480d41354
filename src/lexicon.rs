//! Static sentiment lexicon: positive and negative marker terms,
//! Indonesian and English.
//!
//! Scan order is fixed: Indonesian sublist first, then English, within each
//! polarity. Order carries no meaning but must stay stable so that matched
//! keyword output is reproducible run to run.

/// Positive marker terms, Indonesian.
const POSITIVE_ID: &[&str] = &[
    "naik", "meningkat", "positif", "untung", "profit", "bagus", "baik",
    "optimis", "bullish", "rally", "menguat", "cemerlang", "peluang",
    "potensi", "keuntungan", "surplus", "tumbuh", "berkembang", "maju",
    "sukses", "hebat", "luar biasa", "fantastis", "menggembirakan",
    "menjanjikan", "kuat", "solid", "stabil", "aman", "percaya diri",
];

/// Positive marker terms, English.
const POSITIVE_EN: &[&str] = &[
    "surge", "gain", "rise", "up", "higher", "growth", "increase",
    "boost", "strong", "recover", "soar", "jump", "rally", "bullish",
    "positive", "profit", "good", "great", "excellent", "outstanding",
    "impressive", "promising", "optimistic", "confident", "solid",
    "stable", "secure", "success", "win", "breakthrough", "advance",
];

/// Negative marker terms, Indonesian.
const NEGATIVE_ID: &[&str] = &[
    "turun", "menurun", "negatif", "rugi", "loss", "buruk", "jelek",
    "pesimis", "bearish", "crash", "anjlok", "melemah", "risiko",
    "bahaya", "krisis", "kerugian", "defisit", "gagal", "mundur",
    "jatuh", "tertekan", "lemah", "khawatir", "takut", "panik",
    "masalah", "kesulitan", "hambatan", "kendala", "ancaman",
];

/// Negative marker terms, English.
const NEGATIVE_EN: &[&str] = &[
    "drop", "fall", "down", "lower", "decline", "decrease", "plunge",
    "weak", "slump", "tumble", "bearish", "negative", "loss", "bad",
    "poor", "terrible", "awful", "disappointing", "concerning",
    "worrying", "risk", "danger", "crisis", "fail", "problem",
    "difficulty", "obstacle", "threat", "fear", "panic", "crash",
];

/// The full bilingual lexicon.
///
/// A few terms appear in both language sublists ("rally", "bearish",
/// "crash", "loss"); the scorer counts each distinct term at most once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexicon;

impl Lexicon {
    pub fn new() -> Self {
        Self
    }

    /// All positive terms in scan order (Indonesian, then English).
    pub fn positive(&self) -> impl Iterator<Item = &'static str> {
        POSITIVE_ID.iter().chain(POSITIVE_EN.iter()).copied()
    }

    /// All negative terms in scan order (Indonesian, then English).
    pub fn negative(&self) -> impl Iterator<Item = &'static str> {
        NEGATIVE_ID.iter().chain(NEGATIVE_EN.iter()).copied()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
