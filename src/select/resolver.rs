//! Selection resolver state machine
//!
//! Turns the devices matching a screenshot into exactly one chosen device:
//!
//! ```text
//!            ┌── 0 matches ───────────────────────────────┐
//!  Start ────┼── 1 match ──> ConfirmGuess ── no ──────────┤
//!            │                    └── yes ──> Chosen      │
//!            └── n matches ─> OfferMatches ── no ─────────┤
//!                                 └── yes ─> PickFromMatches
//!                                              ├── device ──> Chosen
//!                                              └── "None of these" ┐
//!                                                                  v
//!                                   ManualSelection <──────────────┘
//!                                         └── device ──> Chosen
//! ```
//!
//! `ManualSelection` lists the whole catalog with no escape choice, so every
//! path reaches `Chosen` after at most three prompts.

use crate::{
    device::Catalog,
    error::{MockupError, MockupResult},
    model::Device,
    select::Prompter,
};

/// Label of the escape choice appended when picking among matches
pub const NONE_OF_THESE: &str = "None of these";

const SELECT_MESSAGE: &str = "Select a device model:";

const MULTIPLE_MATCHES_MESSAGE: &str =
    "We found multiple devices with matching dimensions. Do you want to choose from these devices?";

/// Resolver states
#[derive(Debug)]
enum Step<'a> {
    Start,
    ConfirmGuess(&'a Device),
    OfferMatches,
    PickFromMatches,
    ManualSelection,
    Chosen(&'a Device),
}

/// Resolves `matches` (devices sharing the screenshot's dimensions) into a
/// single device from `catalog`, asking `prompter` as needed
///
/// - No matches: full-catalog selection right away.
/// - One match: confirm it; declining falls back to full-catalog selection.
/// - Several matches: offer to pick among them (with a "None of these"
///   escape); declining or escaping falls back to full-catalog selection.
///
/// # Errors
///
/// Returns [`MockupError::InvalidSelection`] when the prompter answers with
/// an index that was not offered, and propagates any prompter failure.
pub async fn resolve<'a, P>(
    matches: &[&'a Device],
    catalog: &'a Catalog,
    prompter: &mut P,
) -> MockupResult<&'a Device>
where
    P: Prompter + ?Sized,
{
    let mut step = Step::Start;

    loop {
        tracing::debug!("Selection step: {:?}", step);

        step = match step {
            Step::Start => match matches {
                [] => Step::ManualSelection,
                [only] => Step::ConfirmGuess(*only),
                _ => Step::OfferMatches,
            },
            Step::ConfirmGuess(device) => {
                let message = format!(
                    "This screenshot looks like it is from a {}. Do you want to use this model?",
                    device.label()
                );
                if prompter.confirm(&message).await? {
                    Step::Chosen(device)
                } else {
                    Step::ManualSelection
                }
            }
            Step::OfferMatches => {
                if prompter.confirm(MULTIPLE_MATCHES_MESSAGE).await? {
                    Step::PickFromMatches
                } else {
                    Step::ManualSelection
                }
            }
            Step::PickFromMatches => {
                let mut choices: Vec<String> = matches.iter().map(|d| d.label()).collect();
                choices.push(NONE_OF_THESE.to_string());

                let index = checked_select(prompter, &choices).await?;
                match matches.get(index) {
                    Some(device) => Step::Chosen(*device),
                    None => Step::ManualSelection,
                }
            }
            Step::ManualSelection => {
                let choices = catalog.labels();
                let index = checked_select(prompter, &choices).await?;
                Step::Chosen(&catalog.devices()[index])
            }
            Step::Chosen(device) => {
                tracing::info!("Selected device: {}", device);
                return Ok(device);
            }
        };
    }
}

/// Asks for a selection and rejects indices outside `choices`
async fn checked_select<P>(prompter: &mut P, choices: &[String]) -> MockupResult<usize>
where
    P: Prompter + ?Sized,
{
    let index = prompter.select(SELECT_MESSAGE, choices).await?;
    if index >= choices.len() {
        return Err(MockupError::InvalidSelection {
            index,
            choices: choices.len(),
        });
    }
    Ok(index)
}
