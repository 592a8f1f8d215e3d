//! Decision register: approve/postpone choices on priced items.

use rust_decimal::Decimal;

use crate::models::decision::{Choice, Decision};
use crate::models::error::WorkflowError;

use super::types::Stage;

/// Which decisions `approved_total` sums over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionScope<'a> {
    Stage,
    Group(&'a str),
}

impl Stage {
    /// Record a choice on a decision.
    ///
    /// Approving a member of an exclusive group postpones every sibling in
    /// that group, so at most one member is ever approved.
    pub fn set_choice(&mut self, decision_id: &str, choice: Choice) -> Result<(), WorkflowError> {
        self.ensure_unlocked()?;
        let index = self.decision_index(decision_id)?;
        let decisions = self.decisions_mut();

        if choice == Choice::Approve {
            if let Some(group) = decisions[index].group.clone() {
                for (i, sibling) in decisions.iter_mut().enumerate() {
                    if i != index && sibling.in_group(&group) {
                        sibling.choice = Choice::Postpone;
                    }
                }
            }
        }

        decisions[index].choice = choice;
        Ok(())
    }

    /// Name of this stage's exclusive-choice group, if it has one.
    pub fn exclusive_group(&self) -> Option<&str> {
        self.decisions.iter().find_map(|d| d.group.as_deref())
    }

    pub fn exclusive_members(&self) -> impl Iterator<Item = &Decision> {
        let group = self.exclusive_group();
        self.decisions
            .iter()
            .filter(move |d| group.is_some_and(|g| d.in_group(g)))
    }

    /// The approved member of the exclusive group.
    pub fn selected_option(&self) -> Option<&Decision> {
        self.exclusive_members().find(|d| d.is_approved())
    }

    /// True when the stage has no exclusive group or exactly one member of it
    /// is approved.
    pub fn exclusive_choice_made(&self) -> bool {
        match self.exclusive_group() {
            None => true,
            Some(_) => self.exclusive_members().filter(|d| d.is_approved()).count() == 1,
        }
    }

    /// Ids of decisions still blocking the gate.
    ///
    /// Free-standing decisions never block; an exclusive group blocks with all
    /// of its members until one is approved.
    pub fn pending_decisions(&self) -> Vec<String> {
        if self.exclusive_choice_made() {
            return Vec::new();
        }
        self.exclusive_members().map(|d| d.id.clone()).collect()
    }

    pub fn approved_decisions(&self) -> impl Iterator<Item = &Decision> {
        self.decisions.iter().filter(|d| d.is_approved())
    }

    /// Decisions the customer deferred.
    pub fn postponed_decisions(&self) -> impl Iterator<Item = &Decision> {
        self.decisions
            .iter()
            .filter(|d| d.choice == Choice::Postpone)
    }

    pub fn approved_total(&self, scope: DecisionScope<'_>) -> Decimal {
        self.decisions
            .iter()
            .filter(|d| match scope {
                DecisionScope::Stage => true,
                DecisionScope::Group(group) => d.in_group(group),
            })
            .map(Decision::approved_amount)
            .sum()
    }
}
