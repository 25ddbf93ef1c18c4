//! Bundled answer words for the role deduction game.

/// Concrete nouns that can be guessed with yes/no questions.
pub const BUILTIN_WORDS: &[&str] = &[
    "apple",
    "bicycle",
    "volcano",
    "penguin",
    "umbrella",
    "lighthouse",
    "guitar",
    "pizza",
    "rocket",
    "library",
    "cactus",
    "dolphin",
    "castle",
    "candle",
    "tornado",
    "passport",
    "telescope",
    "sandwich",
    "elevator",
    "kangaroo",
    "pyramid",
    "snowman",
    "hospital",
    "rainbow",
    "submarine",
    "toothbrush",
    "waterfall",
    "dinosaur",
    "airport",
    "chocolate",
    "camera",
    "island",
    "octopus",
    "ladder",
    "tractor",
    "museum",
    "violin",
    "hamburger",
    "compass",
    "mushroom",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_words_are_distinct() {
        let unique: FxHashSet<_> = BUILTIN_WORDS.iter().collect();
        assert_eq!(unique.len(), BUILTIN_WORDS.len());
    }
}
