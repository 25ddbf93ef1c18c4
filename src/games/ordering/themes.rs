/// Ready-made themes offered on the setup screen.
pub const PRESET_THEMES: [&str; 10] = [
    "Size",
    "Weight",
    "Speed",
    "Height",
    "Beauty",
    "Popularity",
    "Difficulty",
    "Fun",
    "Scariness",
    "Warmth",
];
