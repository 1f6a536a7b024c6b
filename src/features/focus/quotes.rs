//! Completion messages.

use rand::Rng;

/// Messages shown when a session completes.
pub const QUOTES: [&str; 10] = [
    "Excellence is not a skill, it's an attitude. ✨",
    "Your only limit is your mind. Break through it. 🚀",
    "Success is the sum of small efforts repeated daily. 💪",
    "Focus is the key that unlocks your potential. 🔑",
    "Every expert was once a beginner. Keep going. 🌟",
    "Progress, not perfection, is the goal. 📈",
    "Discipline is choosing between what you want now and what you want most. ⚡",
    "The future depends on what you do today. 🎯",
    "Champions are made when nobody's watching. 🏆",
    "Your potential is endless. 🌟",
];

/// Chooses an index into a list.
#[cfg_attr(test, mockall::automock)]
pub trait QuotePicker {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random picker.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl QuotePicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Choose a completion message.
///
/// An out-of-range index from the picker wraps around.
pub fn choose(picker: &mut dyn QuotePicker) -> &'static str {
    QUOTES[picker.pick(QUOTES.len()) % QUOTES.len()]
}
