//! Bundled conversation topics.

pub const BUILTIN_TOPICS: &[&str] = &[
    "The best meal you have ever eaten",
    "A place you would love to visit again",
    "Your most embarrassing school memory",
    "A skill you wish you could learn overnight",
    "The last thing that made you laugh out loud",
    "Your ideal day off",
    "A movie you could watch again and again",
    "Something you were wrong about",
    "The strangest job you can imagine doing",
    "A song that takes you back in time",
    "Your favorite childhood snack",
    "What you would do with a free year",
    "A small thing that makes you happy",
    "The best gift you ever received",
    "A habit you are proud of",
    "If you could live in any era",
    "Your go-to karaoke song",
    "A book that changed how you think",
    "The most beautiful view you have seen",
    "Something you collect or used to collect",
    "An animal you would like to be for a day",
    "Your dream house in three words",
    "The worst trip you ever took",
    "A rule you would add to the world",
    "Your hidden talent",
    "A food you could not eat as a kid",
    "The best advice you ever got",
    "What superpower would be most useful on this drive",
    "A tradition from your family",
    "The last time you tried something new",
];
