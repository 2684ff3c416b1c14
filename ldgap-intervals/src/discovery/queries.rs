//! Discovery queries
//!
//! Both queries look at values of `sdmxdim:refPeriod` and of every
//! dimension declared as a sub-property of it, and select `?dsgraph ?o`:
//! the graph the observation lives in and the period value.

/// Period values with no `reftime:Interval` assertion in the reference graph
pub const MISSING_INTERVALS: &str = r#"
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX qb: <http://purl.org/linked-data/cube#>
PREFIX sdmxdim: <http://purl.org/linked-data/sdmx/2009/dimension#>
PREFIX reftime: <http://reference.data.gov.uk/def/intervals/>

SELECT DISTINCT ?dsgraph ?o WHERE {
  {
    BIND (sdmxdim:refPeriod as ?d)
  } UNION {
    ?d a qb:DimensionProperty ;
         rdfs:subPropertyOf+ sdmxdim:refPeriod .
  }
  GRAPH ?dsgraph {
    [] ?d ?o
  }
  FILTER NOT EXISTS {
    GRAPH <http://gss-data.org.uk/graph/reference-intervals> {
      ?o a reftime:Interval
    }
  }
}"#;

/// Period values with no label in any graph
pub const MISSING_LABELS: &str = r#"
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX qb: <http://purl.org/linked-data/cube#>
PREFIX sdmxdim: <http://purl.org/linked-data/sdmx/2009/dimension#>

SELECT DISTINCT ?dsgraph ?o WHERE {
  {
    BIND (sdmxdim:refPeriod as ?d)
  } UNION {
    ?d a qb:DimensionProperty ;
         rdfs:subPropertyOf+ sdmxdim:refPeriod .
  }
  GRAPH ?dsgraph {
    [] ?d ?o
  }
  FILTER NOT EXISTS {
    GRAPH ?labelgraph {
      ?o rdfs:label ?label
    }
  }
}"#;
