//! Narrow a candidate set down to one company.
//!
//! | Usable candidates | Result |
//! |-------------------|--------|
//! | 0 | [`Resolution::NoMatch`] |
//! | 1 | [`Resolution::Matched`] with that candidate |
//! | n > 1 | numbered menu through [`SelectionPrompt`], then `Matched` or [`SelectionError`] |
//!
//! Ordering is positional: the menu lists candidates in response order and no
//! secondary ranking is applied.

use tracing::{debug, info};

use crate::domain::{CandidateSet, CompanyCandidate};
use crate::error::SelectionError;

/// One numbered menu entry shown for a many-match result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption<'a> {
    /// 1-based position in the filtered candidate order.
    pub number: usize,
    pub candidate: &'a CompanyCandidate,
}

/// Capability that shows the menu and returns the user's raw reply.
///
/// The reply is parsed and range-checked by [`disambiguate`], so
/// implementations only handle I/O.
pub trait SelectionPrompt {
    fn prompt_selection(&mut self, options: &[MenuOption<'_>]) -> Result<String, SelectionError>;
}

/// Prompt that replays fixed replies, for scripted runs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    replies: Vec<String>,
    shown: Vec<usize>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut replies = replies.into_iter().map(Into::into).collect::<Vec<_>>();
        replies.reverse();
        Self {
            replies,
            shown: Vec::new(),
        }
    }

    /// Menu sizes this prompt was shown, one entry per call.
    pub fn menus_shown(&self) -> &[usize] {
        &self.shown
    }
}

impl SelectionPrompt for ScriptedPrompt {
    fn prompt_selection(&mut self, options: &[MenuOption<'_>]) -> Result<String, SelectionError> {
        self.shown.push(options.len());
        self.replies
            .pop()
            .ok_or_else(|| SelectionError::Prompt(String::from("no scripted reply left")))
    }
}

/// Outcome of disambiguation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No usable candidate. `unlisted` counts raw candidates dropped for lacking a ticker.
    NoMatch { unlisted: usize },
    Matched(CompanyCandidate),
}

/// Parse a 1-based menu reply into a 0-based index below `count`.
pub fn parse_selection(reply: &str, count: usize) -> Result<usize, SelectionError> {
    let trimmed = reply.trim();
    let choice = trimmed
        .parse::<i64>()
        .map_err(|_| SelectionError::NotANumber {
            input: trimmed.to_owned(),
        })?;

    if choice < 1 || choice as u64 > count as u64 {
        return Err(SelectionError::OutOfRange { choice, max: count });
    }

    Ok(choice as usize - 1)
}

/// Filter `candidates` to usable ones and pick exactly one.
pub fn disambiguate(
    candidates: CandidateSet,
    prompt: &mut dyn SelectionPrompt,
) -> Result<Resolution, SelectionError> {
    let raw_count = candidates.len();
    let usable = candidates.filter_usable();
    let unlisted = raw_count - usable.len();
    debug!(raw_count, usable = usable.len(), "filtered candidates");

    match usable.len() {
        0 => Ok(Resolution::NoMatch { unlisted }),
        1 => Ok(Resolution::Matched(usable.into_vec().remove(0))),
        count => {
            let options = usable
                .iter()
                .enumerate()
                .map(|(index, candidate)| MenuOption {
                    number: index + 1,
                    candidate,
                })
                .collect::<Vec<_>>();

            let reply = prompt.prompt_selection(&options)?;
            let index = parse_selection(&reply, count)?;
            info!(choice = index + 1, count, "candidate selected");

            Ok(Resolution::Matched(usable.into_vec().swap_remove(index)))
        }
    }
}
