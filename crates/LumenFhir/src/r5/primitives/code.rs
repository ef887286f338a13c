use crate::codec::CodeValue;
use crate::element::Element;

/// FHIR `code` with an open (non-required) binding: the token is preserved
/// verbatim, subject only to the code lexical rules.
pub type Code = Element<CodeValue>;

/// A `code` whose binding is required: `C` is a closed enum deriving
/// `FhirCode`, and unknown tokens fail the parse.
pub type Coded<C> = Element<C>;
