use crate::core::render;
use crate::domain::catalog::{Feature, Plan, GROUP_DISCOUNT_MIN_MEMBERS};
use crate::domain::model::{PricingRequest, SignupOutcome};
use crate::domain::ports::{PriceCalculator, Terminal};
use crate::utils::error::{GymError, Result};
use crate::utils::validation::{parse_feature_keys, parse_member_count, Validate};

/// Member count attempts before the signup gives up.
pub const MAX_ATTEMPTS: usize = 3;

pub const WELCOME: &str = "Welcome to the Gym Membership Management System";
pub const PLAN_PROMPT: &str = "Enter the name of the plan you want (e.g., Basic): ";
pub const MEMBERS_PROMPT: &str = "How many members are signing up? ";
pub const SELECTION_HINT: &str =
    "Enter feature numbers separated by comma (e.g., 1,3) or leave empty for none.";
pub const SELECTION_PROMPT: &str = "Selection: ";
pub const CONFIRM_PROMPT: &str = "\nDo you want to confirm this membership? (yes/no): ";

pub struct SignupFlow<T: Terminal, C: PriceCalculator> {
    terminal: T,
    calculator: C,
    auto_confirm: bool,
}

impl<T: Terminal, C: PriceCalculator> SignupFlow<T, C> {
    pub fn new(terminal: T, calculator: C) -> Self {
        Self {
            terminal,
            calculator,
            auto_confirm: false,
        }
    }

    pub fn with_auto_confirm(mut self, auto_confirm: bool) -> Self {
        self.auto_confirm = auto_confirm;
        self
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Runs the full interactive signup.
    ///
    /// Rejected input ends in `SignupOutcome::Failed`. Only failures of the
    /// terminal itself (closed input, I/O) are returned as `Err`.
    pub fn run(&mut self) -> Result<SignupOutcome> {
        self.terminal.say(WELCOME)?;

        let request = match self.collect_request() {
            Ok(request) => request,
            Err(e) if aborts_session(&e) => return Err(e),
            Err(e) => return self.fail(e),
        };

        self.quote(&request)
    }

    /// Prices an already assembled request, shows the confirmation and asks
    /// for approval unless auto-confirm is set.
    pub fn quote(&mut self, request: &PricingRequest) -> Result<SignupOutcome> {
        if let Err(e) = request.validate() {
            return self.fail(e);
        }

        let breakdown = match self.calculator.price(request) {
            Ok(breakdown) => breakdown,
            Err(e) => return self.fail(e),
        };

        for line in render::confirmation(&request.plan, request.member_count, &breakdown) {
            self.terminal.say(&line)?;
        }

        let confirmed = if self.auto_confirm {
            tracing::debug!("auto-confirming membership");
            true
        } else {
            let answer = self.terminal.prompt(CONFIRM_PROMPT)?;
            is_affirmative(&answer)
        };

        if confirmed {
            tracing::info!(
                plan = %request.plan,
                members = request.member_count,
                total = breakdown.final_cost,
                "membership confirmed"
            );
            self.terminal.say(&format!(
                "Membership Confirmed! Total to pay: ${}",
                breakdown.final_cost
            ))?;
            Ok(SignupOutcome::Confirmed {
                total: breakdown.final_cost,
                breakdown,
            })
        } else {
            tracing::info!(plan = %request.plan, "membership cancelled");
            self.terminal.say("Membership Canceled.")?;
            Ok(SignupOutcome::Cancelled)
        }
    }

    fn collect_request(&mut self) -> Result<PricingRequest> {
        for line in render::plan_menu() {
            self.terminal.say(&line)?;
        }
        let plan = self.terminal.prompt(PLAN_PROMPT)?.trim().to_string();
        if Plan::find(&plan).is_none() {
            return Err(GymError::InvalidPlan { plan });
        }

        let members = self.read_member_count()?;
        if members >= GROUP_DISCOUNT_MIN_MEMBERS {
            self.terminal.say(&render::group_discount_note())?;
        }

        for line in render::feature_menu() {
            self.terminal.say(&line)?;
        }
        self.terminal.say(SELECTION_HINT)?;
        let selection = self.terminal.prompt(SELECTION_PROMPT)?;
        let feature_keys = parse_feature_keys(&selection)?;

        // Checked here too so nothing is priced with a bad key.
        if let Some(key) = feature_keys.iter().find(|key| Feature::find(key).is_none()) {
            return Err(GymError::InvalidFeature { key: key.clone() });
        }

        Ok(PricingRequest::new(plan, feature_keys, members))
    }

    fn read_member_count(&mut self) -> Result<u32> {
        let mut attempt = 1;
        loop {
            let input = self.terminal.prompt(MEMBERS_PROMPT)?;
            match parse_member_count(&input) {
                Ok(count) => return Ok(count),
                Err(e) if e.is_retryable() && attempt < MAX_ATTEMPTS => {
                    tracing::debug!(attempt, error = %e, "re-prompting for member count");
                    self.terminal
                        .say(&format!("Error: {}", e.user_friendly_message()))?;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn fail(&mut self, error: GymError) -> Result<SignupOutcome> {
        tracing::warn!(
            error = %error,
            category = ?error.category(),
            "signup rejected"
        );
        self.terminal
            .say(&format!("Error: {}", error.user_friendly_message()))?;
        Ok(SignupOutcome::Failed(error))
    }
}

fn aborts_session(error: &GymError) -> bool {
    matches!(error, GymError::InputClosed | GymError::IoError(_))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yep"));
    }
}
