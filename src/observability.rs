use biometrics::{Collector, Counter};

pub(crate) static SENDS: Counter = Counter::new("azmth.assistant.sends");
pub(crate) static OFFLINE_SENDS: Counter = Counter::new("azmth.assistant.offline_sends");
pub(crate) static EMPTY_REPLIES: Counter = Counter::new("azmth.assistant.empty_replies");
pub(crate) static FAILED_SENDS: Counter = Counter::new("azmth.assistant.failed_sends");
pub(crate) static SESSION_OPENS: Counter = Counter::new("azmth.assistant.session_opens");

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("azmth.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("azmth.client.request_errors");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&SENDS);
    collector.register_counter(&OFFLINE_SENDS);
    collector.register_counter(&EMPTY_REPLIES);
    collector.register_counter(&FAILED_SENDS);
    collector.register_counter(&SESSION_OPENS);

    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
}
