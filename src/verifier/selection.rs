//! One selection at a time: validity of its disjunctive proof, and the lighter structural check
//! used by the contest's limit verification
use crate::{
    context::ElectionContext,
    proofs::{all_passed, disjunctive, Check, CheckResult},
    records::Selection,
    verifier::SelectionReport,
    BigInt,
};

pub struct SelectionVerifier<'a> {
    selection: &'a Selection,
    context: &'a ElectionContext,
}

impl<'a> SelectionVerifier<'a> {
    pub fn new(selection: &'a Selection, context: &'a ElectionContext) -> Self {
        return Self { selection, context };
    }

    /// alpha and beta of the selection, no validation
    pub fn get_pad_data(&self) -> (&'a BigInt, &'a BigInt) {
        return (&self.selection.ciphertext.pad, &self.selection.ciphertext.data);
    }

    pub fn is_placeholder_selection(&self) -> bool {
        return self.selection.is_placeholder_selection;
    }

    pub fn get_object_id(&self) -> &'a str {
        return &self.selection.object_id;
    }

    /// Every check of the disjunctive proof, failed or not
    pub fn check_selection_validity(&self) -> Vec<CheckResult> {
        return disjunctive::verify(
            &self.selection.ciphertext,
            &self.selection.proof,
            self.context,
            &self.selection.object_id,
        );
    }

    pub fn verify_selection_validity(&self) -> bool {
        return all_passed(&self.check_selection_validity());
    }

    /// alpha and beta are in Z_p^r
    pub fn check_selection_limit(&self) -> Vec<CheckResult> {
        let (pad, data) = self.get_pad_data();
        return [("pad", pad), ("data", data)]
            .into_iter()
            .map(|(name, value)| {
                CheckResult::from_outcome(
                    self.context.is_group_element(value),
                    Check::SelectionLimit(name),
                    &self.selection.object_id,
                    String::new,
                )
            })
            .collect();
    }

    pub fn verify_selection_limit(&self) -> bool {
        return all_passed(&self.check_selection_limit());
    }

    /// Validity and limit checks together
    pub fn report(&self) -> SelectionReport {
        let mut results = self.check_selection_validity();
        results.extend(self.check_selection_limit());
        return SelectionReport {
            object_id: self.selection.object_id.clone(),
            is_placeholder: self.selection.is_placeholder_selection,
            results,
        };
    }
}
