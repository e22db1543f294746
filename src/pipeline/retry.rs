//! Bounded retry for the implementation step.

use crate::config::Framework;
use crate::content::{strip_code_fences, validate_html_output};

/// Where the implementation step stands.
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt {
    /// Waiting for output of attempt `attempt` (1-based).
    Pending {
        attempt: u32,
        max: u32,
        /// Why the previous attempt was rejected.
        previous: Option<String>,
    },
    Validated {
        html: String,
        attempts: u32,
    },
    RetryExhausted {
        /// Raw output of the last attempt.
        last_output: String,
        attempts: u32,
        reason: String,
    },
}

impl Attempt {
    /// First attempt of at most `max` (at least one).
    pub fn start(max: u32) -> Self {
        Attempt::Pending {
            attempt: 1,
            max: max.max(1),
            previous: None,
        }
    }

    /// Feed the raw output of the pending attempt.
    ///
    /// `validate` turns raw output into the page to write, or a rejection
    /// reason. Finished states are returned unchanged.
    pub fn advance<F>(self, raw: String, validate: F) -> Self
    where
        F: Fn(&str) -> Result<String, String>,
    {
        let Attempt::Pending { attempt, max, .. } = self else {
            return self;
        };

        match validate(&raw) {
            Ok(html) => Attempt::Validated {
                html,
                attempts: attempt,
            },
            Err(reason) if attempt < max => {
                tracing::warn!(attempt, %reason, "implementation output rejected, retrying");
                Attempt::Pending {
                    attempt: attempt + 1,
                    max,
                    previous: Some(reason),
                }
            }
            Err(reason) => Attempt::RetryExhausted {
                last_output: raw,
                attempts: attempt,
                reason,
            },
        }
    }
}

/// Clean and check implementation output for `framework`.
///
/// React output only has to be non-empty once fences are removed.
pub fn validate_output(framework: Framework, raw: &str) -> Result<String, String> {
    let cleaned = strip_code_fences(raw);
    match framework {
        Framework::React if cleaned.trim().is_empty() => Err("empty component output".to_string()),
        Framework::React => Ok(cleaned),
        Framework::Html => {
            let check = validate_html_output(&cleaned);
            if check.valid {
                Ok(cleaned)
            } else {
                Err(check.reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<!DOCTYPE html>\n<html><head><title>x</title></head><body><section>Hello there, world</section></body></html>";

    fn html(raw: &str) -> Result<String, String> {
        validate_output(Framework::Html, raw)
    }

    #[test]
    fn valid_first_attempt_stops() {
        let state = Attempt::start(2).advance(format!("```html\n{}\n```", PAGE), html);
        assert_eq!(
            state,
            Attempt::Validated {
                html: PAGE.to_string(),
                attempts: 1
            }
        );
    }

    #[test]
    fn invalid_then_valid_uses_second_attempt() {
        let state = Attempt::start(2).advance("I cannot do that".to_string(), html);
        match &state {
            Attempt::Pending {
                attempt, previous, ..
            } => {
                assert_eq!(*attempt, 2);
                assert!(previous.is_some());
            }
            other => panic!("expected pending, got {:?}", other),
        }
        let state = state.advance(PAGE.to_string(), html);
        assert!(matches!(state, Attempt::Validated { attempts: 2, .. }));
    }

    #[test]
    fn exhausts_after_max_attempts() {
        let state = Attempt::start(2)
            .advance("nope".to_string(), html)
            .advance("still nope".to_string(), html);
        match state {
            Attempt::RetryExhausted {
                last_output,
                attempts,
                reason,
            } => {
                assert_eq!(last_output, "still nope");
                assert_eq!(attempts, 2);
                assert!(reason.contains("too short"));
            }
            other => panic!("expected exhausted, got {:?}", other),
        }
    }

    #[test]
    fn finished_states_ignore_further_output() {
        let done = Attempt::start(1).advance(PAGE.to_string(), html);
        let again = done.clone().advance("junk".to_string(), html);
        assert_eq!(done, again);
        assert!(matches!(again, Attempt::Validated { attempts: 1, .. }));
    }

    #[test]
    fn zero_max_still_allows_one_attempt() {
        let state = Attempt::start(0).advance("x".to_string(), html);
        assert!(matches!(state, Attempt::RetryExhausted { attempts: 1, .. }));
    }

    #[test]
    fn react_output_skips_html_checks() {
        assert_eq!(
            validate_output(Framework::React, "```jsx\nfunction App() {}\n```"),
            Ok("function App() {}".to_string())
        );
        assert!(validate_output(Framework::React, "```jsx\n```").is_err());
    }
}
