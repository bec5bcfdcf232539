pub mod adapter;
pub mod ghostpay;
pub mod oasyfy;
pub mod pushinpay;
pub mod registry;
pub mod request_stamp;

pub use adapter::{
    OutboundRequest, PaymentResult, PixProvider, ProviderContext, StatusResult,
};
pub use ghostpay::GhostpayProvider;
pub use oasyfy::OasyfyProvider;
pub use pushinpay::PushinPayProvider;
pub use registry::ProviderRegistry;
pub use request_stamp::{RequestStamper, SystemClock};
