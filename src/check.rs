use crate::error::{BenchError, Result};
use crate::pb;

/// Common shape of every service response: a success flag and a message.
pub trait Envelope {
    fn success(&self) -> bool;
    fn msg(&self) -> &str;
}

macro_rules! envelope {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Envelope for $ty {
                fn success(&self) -> bool { self.success }
                fn msg(&self) -> &str { &self.msg }
            }
        )*
    };
}

envelope!(pb::RecordResponse, pb::OracleResponse, pb::FindResponse, pb::CallResponse);

/// Passes a successful response through untouched; a failed one becomes
/// `BenchError::Rejected` carrying the server's message.
pub fn check<E: Envelope>(resp: E) -> Result<E> {
    if resp.success() {
        Ok(resp)
    } else {
        Err(BenchError::Rejected(resp.msg().to_string()))
    }
}
