//! Namespaces and terms used by the interval definitions

use oxrdf::NamedNodeRef;

/// Namespace whose types are copied from fetched descriptions
pub const REFERENCE_DEF_NS: &str = "http://reference.data.gov.uk/def/";

/// Subjects in this namespace get a date-range label
pub const GREGORIAN_INTERVAL_NS: &str = "http://reference.data.gov.uk/id/gregorian-interval/";

/// Namespace of interval begin/end instants
pub const GREGORIAN_INSTANT_NS: &str = "http://reference.data.gov.uk/id/gregorian-instant/";

/// Suffix of a midnight-aligned instant
pub const MIDNIGHT_SUFFIX: &str = "T00:00:00";

pub const INTERVALS_NS: &str = "http://reference.data.gov.uk/def/intervals/";
pub const TIME_NS: &str = "http://www.w3.org/2006/time#";
pub const SCOVO_NS: &str = "http://purl.org/NET/scovo#";

pub mod intervals {
    use super::NamedNodeRef;

    pub const INTERVAL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://reference.data.gov.uk/def/intervals/Interval");
}

pub mod time {
    use super::NamedNodeRef;

    pub const INTERVAL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#Interval");
    pub const HAS_BEGINNING: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hasBeginning");
    pub const HAS_END: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/time#hasEnd");
}

pub mod scovo {
    use super::NamedNodeRef;

    pub const MIN: NamedNodeRef<'static> = NamedNodeRef::new_unchecked("http://purl.org/NET/scovo#min");
    pub const MAX: NamedNodeRef<'static> = NamedNodeRef::new_unchecked("http://purl.org/NET/scovo#max");
}

/// Prefixes declared in the output file
pub const OUTPUT_PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("time", TIME_NS),
    ("scovo", SCOVO_NS),
    ("intervals", INTERVALS_NS),
];
