mod init_tracing;
mod request_id;
mod tracing_config;

pub use init_tracing::{default_filter, init_tracing};
pub use request_id::{
    REQUEST_ID_HEADER, make_request_span, propagate_request_id_layer, set_request_id_layer,
};
pub use tracing_config::TracingConfig;
