//! Label Normalizer
//!
//! Picks the display label for a resolved interval.
//!
//! # Policy
//! 1. Gregorian intervals bounded by midnight instants get a synthesized
//!    `start–end` date range, replacing any published label.
//! 2. Otherwise the published `rdfs:label`, if any.
//! 3. Otherwise no label.
//!
//! The selected label then loses a leading classification code such as
//! `Q1:` unless it starts with a digit. The text after the colon is kept
//! verbatim, leading space included.

use crate::vocab::{time, GREGORIAN_INSTANT_NS, GREGORIAN_INTERVAL_NS, MIDNIGHT_SUFFIX};
use ldgap_common::rdf::term_text;
use oxrdf::vocab::rdfs;
use oxrdf::{Graph, Literal, NamedNodeRef, Term};

/// Separator between the two dates of a synthesized range (EN DASH)
pub const DATE_RANGE_SEPARATOR: char = '\u{2013}';

/// Derive the canonical label for `subject` from its description
pub fn derive_label(subject: NamedNodeRef<'_>, description: &Graph) -> Option<Term> {
    let selected = date_range_label(subject, description).or_else(|| {
        description
            .object_for_subject_predicate(subject, rdfs::LABEL)
            .map(|term| term.into_owned())
    })?;

    Some(strip_classification_prefix(selected))
}

fn date_range_label(subject: NamedNodeRef<'_>, description: &Graph) -> Option<Term> {
    if !subject.as_str().starts_with(GREGORIAN_INTERVAL_NS) {
        return None;
    }

    let start = term_text(description.object_for_subject_predicate(subject, time::HAS_BEGINNING)?);
    let end = term_text(description.object_for_subject_predicate(subject, time::HAS_END)?);
    if !start.ends_with(MIDNIGHT_SUFFIX) || !end.ends_with(MIDNIGHT_SUFFIX) {
        return None;
    }

    let label = format!(
        "{}{}{}",
        instant_date(start),
        DATE_RANGE_SEPARATOR,
        instant_date(end)
    );
    Some(Literal::new_simple_literal(label).into())
}

/// Cut the instant namespace and the midnight suffix off an instant IRI
///
/// The cut is positional: the first `len(GREGORIAN_INSTANT_NS)` characters
/// go whether or not they spell the namespace.
fn instant_date(instant: &str) -> String {
    let without_suffix = &instant[..instant.len() - MIDNIGHT_SUFFIX.len()];
    without_suffix
        .chars()
        .skip(GREGORIAN_INSTANT_NS.chars().count())
        .collect()
}

/// Drop a `code:` prefix from labels that do not start with a digit
///
/// Stripped labels become plain literals; untouched labels keep their
/// language tag or datatype.
pub fn strip_classification_prefix(label: Term) -> Term {
    let text = term_text(label.as_ref());
    if text.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return label;
    }

    let remainder = text.split_once(':').map(|(_, rest)| rest.to_string());
    match remainder {
        Some(rest) => Literal::new_simple_literal(rest).into(),
        None => label,
    }
}
