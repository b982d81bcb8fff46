use crate::grammar::{Candidate, Family};
use crate::parser::Operation;
use crate::tokenizer::{Token, TokenKind};

/// Families an operation may return, highest priority first.
pub fn families(operation: Operation) -> &'static [Family] {
    match operation {
        Operation::ParseLocation => &[Family::Intersection, Family::Address, Family::InformalAddress],
        Operation::ParseAddress => &[Family::Address],
        Operation::ParseInformalAddress => &[Family::InformalAddress],
        Operation::ParseIntersection => &[Family::Intersection],
    }
}

/// Pick the candidate of the highest-priority family allowed for
/// `operation`. An intersection only counts when its join really is a
/// conjunction token.
pub fn select(operation: Operation, candidates: Vec<Candidate>, tokens: &[Token]) -> Option<Candidate> {
    let allowed = families(operation);
    let selected = candidates
        .into_iter()
        .filter(|candidate| match candidate {
            Candidate::Intersection(intersection) => intersection
                .join
                .tokens(tokens)
                .iter()
                .any(|token| token.is(TokenKind::And)),
            Candidate::Address(_) => true,
        })
        .filter_map(|candidate| {
            allowed
                .iter()
                .position(|family| *family == candidate.family())
                .map(|priority| (priority, candidate))
        })
        .min_by_key(|(priority, _)| *priority)
        .map(|(_, candidate)| candidate);
    tracing::debug!(
        %operation,
        family = ?selected.as_ref().map(Candidate::family),
        "candidate selected"
    );
    selected
}
