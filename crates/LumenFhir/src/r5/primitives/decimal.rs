use crate::element::Element;
use crate::precise_decimal::PreciseDecimal;

/// FHIR `decimal`: precision-significant, lexical form preserved.
pub type Decimal = Element<PreciseDecimal>;
