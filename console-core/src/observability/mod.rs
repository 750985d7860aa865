pub mod logging;
pub mod metrics;
pub mod trace_context;

pub use logging::init_tracing;
pub use trace_context::{
    REQUEST_ID_HEADER, TracedClientExt, TracedRequest,
    current_request_id, inject_trace_context, inject_trace_headers, scope_request_id,
};
