use crate::domain::session::CheckoutEvent;
use crate::error::{CheckoutError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct RawEvent {
    event: String,
    value: Option<String>,
}

impl TryFrom<RawEvent> for CheckoutEvent {
    type Error = CheckoutError;

    fn try_from(raw: RawEvent) -> Result<Self> {
        let value = raw.value.unwrap_or_default();
        let event = match raw.event.as_str() {
            "select_tier" => CheckoutEvent::SelectTier(value),
            "custom_amount" => CheckoutEvent::CustomAmount(value),
            "confirm" => CheckoutEvent::ConfirmCustom,
            "name" => CheckoutEvent::Name(value),
            "email" => CheckoutEvent::Email(value),
            "phone" => CheckoutEvent::Phone(value),
            "message" => CheckoutEvent::Message(value),
            "anonymous" => CheckoutEvent::Anonymous(value == "true"),
            "submit" => CheckoutEvent::Submit,
            "close" => CheckoutEvent::Close,
            other => return Err(CheckoutError::Event(other.to_string())),
        };
        Ok(event)
    }
}

/// Reads a scripted checkout session from a CSV source.
///
/// Each row is an `event,value` pair mirroring one interaction with the
/// modal. Wraps `csv::Reader` as a lazy iterator so scripts stream without
/// being loaded whole.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and parses events.
    pub fn events(self) -> impl Iterator<Item = Result<CheckoutEvent>> {
        self.reader
            .into_deserialize::<RawEvent>()
            .map(|result| result.map_err(CheckoutError::from).and_then(CheckoutEvent::try_from))
    }
}
