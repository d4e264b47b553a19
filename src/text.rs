//! User-facing strings for the donation flow.
//!
//! The site serves a single locale (Telugu); prompts and error messages are
//! fixed strings rather than going through a translation layer.

pub const ORG_NAME: &str = "తాట్‌పల్లిహనుమాన్ మందిరం";
pub const DONATION_PURPOSE: &str = "మందిర నిర్మాణానికి విరాళం";

pub const PICK_TIER_PROMPT: &str = "దయచేసి విరాళ స్థాయిని ఎంచుకోండి";
pub const MIN_AMOUNT_PROMPT: &str = "దయచేసి కనీసం ₹100 నమోదు చేయండి";
pub const NAME_REQUIRED_PROMPT: &str = "దయచేసి మీ పేరు నమోదు చేయండి";
pub const EMAIL_INVALID_PROMPT: &str = "దయచేసి సరైన ఇమెయిల్ చిరునామా నమోదు చేయండి";

pub const ORDER_CREATION_FAILED: &str =
    "ఆర్డర్ సృష్టించడంలో విఫలమైంది. దయచేసి మళ్ళీ ప్రయత్నించండి.";
pub const VERIFICATION_FAILED: &str = "చెల్లింపు ధృవీకరణ విఫలమైంది.";

pub const THANK_YOU: &str = "ధన్యవాదాలు!";
pub const DONATION_RECEIVED: &str = "మీ విరాళం స్వీకరించబడింది";
