//! Seeded source of realistic scalar values.
//!
//! Every value drawn here consumes from one `StdRng`, so two generators
//! built from the same seed walk through the same sequence of choices.
//! Wall-clock bounds still move between runs, which means concrete
//! timestamps are not reproducible across invocations.

use crate::error::GeneratorError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SubsecRound, Timelike, Utc};
use fake::faker::lorem::en::{Sentence, Words};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Upper bound on the length of a generated paragraph, in characters.
pub const MAX_PARAGRAPH_CHARS: usize = 200;

/// Seeded generator of names, text, timestamps, integers and categories.
pub struct FactGenerator {
    rng: StdRng,
}

impl FactGenerator {
    /// Create a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current wall-clock time, naive UTC, truncated to whole seconds.
    pub fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc().trunc_subsecs(0)
    }

    /// A random human name.
    pub fn name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    /// A short title of 2-4 words with the first letter capitalised and
    /// all punctuation removed.
    pub fn phrase(&mut self) -> String {
        let words: Vec<String> = Words(2..5).fake_with_rng(&mut self.rng);
        let joined = words.join(" ");
        let stripped: String = joined
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();
        capitalize(stripped.trim())
    }

    /// Lorem sentences joined into a paragraph of at most
    /// [`MAX_PARAGRAPH_CHARS`] characters.
    pub fn paragraph(&mut self) -> String {
        self.paragraph_with_limit(MAX_PARAGRAPH_CHARS)
    }

    /// Lorem sentences joined into a paragraph of at most `max_chars`
    /// characters.
    pub fn paragraph_with_limit(&mut self, max_chars: usize) -> String {
        let mut text = String::new();
        let mut text_chars = 0;

        loop {
            let sentence = capitalize(&Sentence(4..12).fake_with_rng::<String, _>(&mut self.rng));
            let sentence_chars = sentence.chars().count();

            if text.is_empty() {
                if sentence_chars > max_chars {
                    return sentence.chars().take(max_chars).collect();
                }
                text = sentence;
                text_chars = sentence_chars;
                continue;
            }

            if text_chars + 1 + sentence_chars > max_chars {
                return text;
            }
            text.push(' ');
            text.push_str(&sentence);
            text_chars += 1 + sentence_chars;
        }
    }

    /// A fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// A uniform integer in the closed range `[lower, upper]`.
    pub fn int_in(&mut self, lower: i64, upper: i64) -> Result<i64, GeneratorError> {
        if lower > upper {
            return Err(GeneratorError::invalid_range(lower, upper));
        }
        Ok(self.rng.gen_range(lower..=upper))
    }

    /// A uniform pick from `choices`.
    pub fn choose<T: Copy>(&mut self, choices: &[T]) -> Result<T, GeneratorError> {
        if choices.is_empty() {
            return Err(GeneratorError::EmptyChoice);
        }
        Ok(choices[self.rng.gen_range(0..choices.len())])
    }

    /// A point in time between the start of the current decade and now.
    pub fn this_decade(&mut self) -> Result<NaiveDateTime, GeneratorError> {
        let now = self.now();
        self.between(decade_start(now), now)
    }

    /// A point in time in `[start, end]`, inclusive, at whole-second
    /// granularity.
    pub fn between(
        &mut self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<NaiveDateTime, GeneratorError> {
        if start > end {
            return Err(GeneratorError::invalid_range(start, end));
        }

        let mut lower = start.and_utc().timestamp();
        if start.nanosecond() > 0 {
            lower += 1;
        }
        let upper = end.and_utc().timestamp();

        // Both bounds fall inside the same second.
        if lower > upper {
            return Ok(start);
        }

        let secs = self.rng.gen_range(lower..=upper);
        Ok(DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.naive_utc())
            .unwrap_or(start))
    }
}

impl Default for FactGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Midnight on January 1st of the decade containing `now`.
pub fn decade_start(now: NaiveDateTime) -> NaiveDateTime {
    let year = now.year() - now.year().rem_euclid(10);
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or(now)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
