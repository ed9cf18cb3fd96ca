//! Data-scrubbing rule list editor view-state.
//!
//! The rule list itself is owned by the parent panel; this editor only holds
//! transient selection and edit state. Mutations of the actual rules are
//! surfaced as `RuleEffect` values the caller forwards to its async
//! delete/update collaborator — fire-and-forget from this core's perspective.

use std::collections::BTreeSet;

use serde::Deserialize;

/// One PII-redaction rule. `id` is unique within the list and stable across
/// edits.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Rule {
    pub id: u32,
    pub method: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub from: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleAction {
    /// Toggle one rule in and out of the selection.
    SelectRule(u32),
    SelectAll(bool),
    DeleteRule(u32),
    DeleteSelected,
    OpenEdit(u32),
    CloseEdit,
    SaveEdit(Rule),
}

/// Side effect for the caller. Completion and failure handling belong to the
/// owner of the actual mutation; this core never awaits or retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleEffect {
    DeleteRules(Vec<u32>),
    UpdateRule(Rule),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleEditorState {
    pub selected: BTreeSet<u32>,
    pub edit_rule: Option<u32>,
}

impl RuleEditorState {
    /// Apply one editor action. `rules` is the parent-owned list, consulted
    /// only for select-all. Local state settles before any effect is
    /// returned, so the caller never hands stale ids to its collaborator.
    pub fn apply(&mut self, action: RuleAction, rules: &[Rule]) -> Option<RuleEffect> {
        match action {
            RuleAction::SelectRule(id) => {
                if !self.selected.remove(&id) {
                    self.selected.insert(id);
                }
                None
            }
            RuleAction::SelectAll(select_all) => {
                self.selected = if select_all {
                    rules.iter().map(|rule| rule.id).collect()
                } else {
                    BTreeSet::new()
                };
                None
            }
            // Single delete delegates entirely; the collaborator removes the
            // rule from the source list.
            RuleAction::DeleteRule(id) => Some(RuleEffect::DeleteRules(vec![id])),
            RuleAction::DeleteSelected => {
                let ids: Vec<u32> = std::mem::take(&mut self.selected).into_iter().collect();
                Some(RuleEffect::DeleteRules(ids))
            }
            RuleAction::OpenEdit(id) => {
                self.edit_rule = Some(id);
                None
            }
            RuleAction::CloseEdit => {
                self.edit_rule = None;
                None
            }
            RuleAction::SaveEdit(rule) => {
                self.edit_rule = None;
                Some(RuleEffect::UpdateRule(rule))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Rule, RuleAction, RuleEditorState, RuleEffect};

    fn rules() -> Vec<Rule> {
        (0..3)
            .map(|id| Rule {
                id,
                method: "mask".to_owned(),
                kind: "creditcard".to_owned(),
                from: "$string".to_owned(),
            })
            .collect()
    }

    #[test]
    fn select_rule_toggles_idempotently() {
        let rules = rules();
        let mut state = RuleEditorState::default();

        assert_eq!(state.apply(RuleAction::SelectRule(1), &rules), None);
        assert!(state.selected.contains(&1));

        assert_eq!(state.apply(RuleAction::SelectRule(1), &rules), None);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn select_all_covers_every_rule_id_and_clears() {
        let rules = rules();
        let mut state = RuleEditorState::default();

        state.apply(RuleAction::SelectAll(true), &rules);
        assert_eq!(state.selected.len(), 3);

        state.apply(RuleAction::SelectAll(false), &rules);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn delete_selected_clears_selection_before_surfacing_the_effect() {
        let rules = rules();
        let mut state = RuleEditorState::default();
        state.apply(RuleAction::SelectAll(true), &rules);

        let effect = state.apply(RuleAction::DeleteSelected, &rules);

        // Selection is already empty by the time the caller sees the ids.
        assert!(state.selected.is_empty());
        assert_eq!(effect, Some(RuleEffect::DeleteRules(vec![0, 1, 2])));
    }

    #[test]
    fn delete_one_rule_leaves_selection_untouched() {
        let rules = rules();
        let mut state = RuleEditorState::default();
        state.apply(RuleAction::SelectRule(2), &rules);

        let effect = state.apply(RuleAction::DeleteRule(2), &rules);

        assert_eq!(effect, Some(RuleEffect::DeleteRules(vec![2])));
        assert!(state.selected.contains(&2));
    }

    #[test]
    fn edit_lifecycle_opens_closes_and_saves() {
        let rules = rules();
        let mut state = RuleEditorState::default();

        state.apply(RuleAction::OpenEdit(1), &rules);
        assert_eq!(state.edit_rule, Some(1));

        state.apply(RuleAction::CloseEdit, &rules);
        assert_eq!(state.edit_rule, None);

        state.apply(RuleAction::OpenEdit(1), &rules);
        let updated = Rule {
            id: 1,
            method: "remove".to_owned(),
            kind: "password".to_owned(),
            from: "$string".to_owned(),
        };
        let effect = state.apply(RuleAction::SaveEdit(updated.clone()), &rules);

        assert_eq!(state.edit_rule, None);
        assert_eq!(effect, Some(RuleEffect::UpdateRule(updated)));
    }

    #[test]
    fn rules_decode_from_panel_json() {
        let decoded: Vec<Rule> = match serde_json::from_value(serde_json::json!([
            {"id": 0, "method": "mask", "type": "creditcard", "from": "$string"},
            {"id": 1, "method": "remove", "type": "password", "from": "password"}
        ])) {
            Ok(rules) => rules,
            Err(err) => panic!("rule list must decode: {err}"),
        };

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[1].kind, "password");
    }
}
