use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug,
    Copy,
    Clone,
    Display,
    EnumString,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum SignatureFormat {
    #[serde(rename = "XAdES")]
    #[strum(serialize = "XAdES")]
    XAdES,
    #[serde(rename = "PAdES")]
    #[strum(serialize = "PAdES")]
    PAdES,
}
